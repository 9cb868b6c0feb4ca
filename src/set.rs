//! Immutable setter: copy-on-write updates along a plain path.

use im::OrdMap;
use std::sync::Arc;

use crate::path::{Path, Seg};
use crate::{Assign, Value};

/// Write a value at `path` into a copy of `root`, creating intermediate
/// containers as needed.
///
/// The input is never modified; the returned value shares every untouched
/// subtree with `root` by reference. A factory assignment is invoked with
/// the node the result is written into (the container one level above the
/// final name).
///
/// Degenerate inputs are no-ops, not errors: an empty path returns `root`
/// as-is, and descending into a scalar leaves it unchanged.
///
/// # Examples
///
/// ```
/// use namepath::{path, set_at, Value};
/// use serde_json::json;
///
/// let root = Value::from(json!({"user": {"name": "Ada"}}));
/// let updated = set_at(&root, &path!("user", "email"), "ada@example.com");
/// assert_eq!(
///     updated,
///     Value::from(json!({"user": {"name": "Ada", "email": "ada@example.com"}})),
/// );
/// assert_eq!(root, Value::from(json!({"user": {"name": "Ada"}})));
/// ```
pub fn set_at(root: &Value, path: &Path, value: impl Into<Assign>) -> Value {
    set_segments(root, path.segments(), &value.into())
}

pub(crate) fn set_segments(root: &Value, segs: &[Seg], assign: &Assign) -> Value {
    let Some((name, rest)) = segs.split_first() else {
        return root.clone();
    };
    let next = if rest.is_empty() {
        assign.resolve(root)
    } else {
        // An absent child is an empty starting point for the remainder.
        set_segments(root.get(name), rest, assign)
    };
    write_child(root, name, next)
}

/// Rebuild `root` with `next` under `name`, synthesizing a container when
/// there is nothing to descend into.
pub(crate) fn write_child(root: &Value, name: &Seg, next: Value) -> Value {
    if root.is_vacant() {
        return match name {
            Seg::Index(i) => Value::Seq(Arc::new(padded(*i, next))),
            Seg::Key(k) => {
                let mut map = OrdMap::new();
                map.insert(k.clone(), next);
                Value::Record(Arc::new(map))
            }
        };
    }
    match (root, name) {
        (Value::Seq(items), Seg::Index(i)) => {
            let mut copy = (**items).clone();
            if copy.len() <= *i {
                copy.resize(*i, Value::Absent);
                copy.push(next);
            } else {
                copy[*i] = next;
            }
            Value::Seq(Arc::new(copy))
        }
        // Key writes into a sequence have no index to target; leave it be.
        (Value::Seq(_), Seg::Key(_)) => root.clone(),
        (Value::Record(map), Seg::Key(k)) => {
            let mut copy = (**map).clone();
            copy.insert(k.clone(), next);
            Value::Record(Arc::new(copy))
        }
        // Index writes address records by their decimal-string key.
        (Value::Record(map), Seg::Index(i)) => {
            let mut copy = (**map).clone();
            copy.insert(i.to_string(), next);
            Value::Record(Arc::new(copy))
        }
        // Scalars cannot grow children.
        _ => root.clone(),
    }
}

/// A fresh sequence holding `value` at `index`, with absent holes before it.
fn padded(index: usize, value: Value) -> Vec<Value> {
    let mut items = Vec::with_capacity(index + 1);
    items.resize(index, Value::Absent);
    items.push(value);
    items
}
