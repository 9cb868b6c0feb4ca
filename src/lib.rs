//! Immutable namepath transforms over nested values.
//!
//! A [`Value`] is an arbitrarily nested structure of records, sequences,
//! and scalars. This crate reads, writes, and transforms the value at a
//! namepath — a sequence of keys/indices, optionally tagged with an
//! operator that changes traversal semantics — without ever mutating the
//! input. Updated values share every untouched subtree with the original
//! by reference.
//!
//! # Core Concepts
//!
//! - **[`Value`]**: immutable nested value; `Absent` marks "nothing here"
//!   and is distinct from `Null`
//! - **[`Path`] / [`Namepath`]**: plain and operator-aware addresses into a
//!   value, built with the [`path!`] and [`namepath!`] macros or parsed
//!   from dotted strings
//! - **[`Assign`]**: a literal replacement or a factory computing one from
//!   the current value
//! - **[`Transform`]**: many path operations folded into one reusable
//!   right-to-left pipeline
//!
//! # Quick Start
//!
//! ```
//! use namepath::{get_at, map_at, namepath, path, set_at, Assign, Value};
//! use serde_json::json;
//!
//! let root = Value::from(json!({"user": {"name": "Ada"}, "scores": [1, 2, 3]}));
//!
//! // Immutable write: the original is untouched.
//! let updated = set_at(&root, &path!("user", "age"), 37);
//! assert_eq!(updated.at(&path!("user", "age")).as_i64(), Some(37));
//! assert!(root.at(&path!("user", "age")).is_absent());
//!
//! // Read with a fallback.
//! let fallback = Value::from(0);
//! assert_eq!(get_at(&root, &path!("scores", 5), &fallback).as_i64(), Some(0));
//!
//! // Broadcast over a sequence with the `map` operator.
//! let doubled = map_at(
//!     &root,
//!     &namepath!("map:scores"),
//!     Assign::with(|v| Value::from(v.as_i64().unwrap_or(0) * 2)),
//! );
//! assert_eq!(doubled.at(&path!("scores")), &Value::from(json!([2, 4, 6])));
//! ```
//!
//! # Pipelines
//!
//! ```
//! use namepath::{namepath, path, Assign, Transform, Value};
//! use serde_json::json;
//!
//! let normalize = Transform::new()
//!     .set(path!("version"), 2)
//!     .map(
//!         namepath!("map:rows", "id"),
//!         Assign::with(|v| Value::from(v.as_i64().unwrap_or(0))),
//!     );
//!
//! let out = normalize.apply(&Value::from(json!({"rows": [{"id": 7}]})));
//! assert_eq!(out.at(&path!("version")).as_i64(), Some(2));
//! ```
//!
//! # Totality
//!
//! Every traversal and update is a total function: empty paths, absent
//! targets, unknown operators, and scalar descent all degrade to documented
//! no-ops. Errors exist only at the JSON interop boundary
//! ([`Value::to_json`], [`Value::from_json_str`]).

#![warn(missing_docs)]

mod assign;
mod compose;
mod error;
mod get;
mod map;
mod path;
mod set;
mod value;

pub use assign::Assign;
pub use compose::{compose_map, compose_map_str, compose_set, compose_set_str, Transform};
pub use error::{NamepathError, NamepathResult};
pub use get::{get_at, get_at_by};
pub use map::{map_at, map_in, map_in_seq};
pub use path::{Namepath, Operator, Path, Seg, Segment};
pub use set::set_at;
pub use value::{Kind, Value};
