//! Combinators folding many path operations into one transform.
//!
//! Steps are applied RIGHT-TO-LEFT: the last listed step runs first, and the
//! first listed step runs last, overriding anything the later ones wrote at
//! the same location. This is conventional function-composition order, not
//! pipeline order.

use crate::map::map_segments;
use crate::path::{Namepath, Path};
use crate::set::set_segments;
use crate::{Assign, Value};

/// One step of a [`Transform`].
#[derive(Clone, Debug)]
enum Step {
    /// Plain overwrite at a path.
    Set { path: Path, value: Assign },
    /// Operator-aware mapping along a namepath.
    Map { path: Namepath, value: Assign },
}

impl Step {
    fn apply(&self, root: &Value) -> Value {
        match self {
            Step::Set { path, value } => set_segments(root, path.segments(), value),
            Step::Map { path, value } => map_segments(root, path.segments(), value),
        }
    }
}

/// A reusable data-shaping pipeline built from path operations.
///
/// Steps from individual calls and whole other transforms compose
/// interchangeably via [`extend`](Transform::extend); either way the listed
/// order is preserved and application is right-to-left.
///
/// # Examples
///
/// ```
/// use namepath::{namepath, path, Assign, Transform, Value};
/// use serde_json::json;
///
/// let normalize = Transform::new()
///     .set(path!("kind"), "user")
///     .map(
///         namepath!("map:tags"),
///         Assign::with(|v| Value::from(v.as_str().unwrap_or("").to_lowercase())),
///     );
///
/// let root = Value::from(json!({"tags": ["Admin", "OPS"]}));
/// assert_eq!(
///     normalize.apply(&root),
///     Value::from(json!({"kind": "user", "tags": ["admin", "ops"]})),
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct Transform {
    steps: Vec<Step>,
}

impl Transform {
    /// Create an empty transform (the identity).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a plain overwrite at `path`.
    pub fn set(mut self, path: Path, value: impl Into<Assign>) -> Self {
        self.steps.push(Step::Set {
            path,
            value: value.into(),
        });
        self
    }

    /// Add an operator-aware mapping along `path`.
    pub fn map(mut self, path: Namepath, value: impl Into<Assign>) -> Self {
        self.steps.push(Step::Map {
            path,
            value: value.into(),
        });
        self
    }

    /// Add a plain overwrite at a dotted path string.
    pub fn set_dotted(self, path: &str, value: impl Into<Assign>) -> Self {
        self.set(Path::dotted(path), value)
    }

    /// Add a mapping along a dotted namepath string.
    pub fn map_dotted(self, path: &str, value: impl Into<Assign>) -> Self {
        self.map(Namepath::dotted(path), value)
    }

    /// Append all steps of `other` after this transform's steps.
    pub fn extend(mut self, other: Transform) -> Self {
        self.steps.extend(other.steps);
        self
    }

    /// Check if this transform has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Get the number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Apply every step to `root`, right-to-left, yielding the transformed
    /// value. The input is never modified.
    pub fn apply(&self, root: &Value) -> Value {
        self.steps
            .iter()
            .rev()
            .fold(root.clone(), |acc, step| step.apply(&acc))
    }
}

/// Fold `(path, value)` overwrite pairs into a single transform function,
/// applied right-to-left.
///
/// # Examples
///
/// ```
/// use namepath::{compose_set, path, Assign, Value};
/// use serde_json::json;
///
/// let shape = compose_set([
///     (path!("a"), Assign::of(1)),
///     (path!("b"), Assign::of(2)),
/// ]);
/// assert_eq!(
///     shape(&Value::from(json!({}))),
///     Value::from(json!({"a": 1, "b": 2})),
/// );
/// ```
pub fn compose_set<I>(ops: I) -> impl Fn(&Value) -> Value
where
    I: IntoIterator<Item = (Path, Assign)>,
{
    let transform = ops
        .into_iter()
        .fold(Transform::new(), |t, (path, value)| t.set(path, value));
    move |root| transform.apply(root)
}

/// Fold `(namepath, value)` mapping pairs into a single transform function,
/// applied right-to-left.
pub fn compose_map<I>(ops: I) -> impl Fn(&Value) -> Value
where
    I: IntoIterator<Item = (Namepath, Assign)>,
{
    let transform = ops
        .into_iter()
        .fold(Transform::new(), |t, (path, value)| t.map(path, value));
    move |root| transform.apply(root)
}

/// [`compose_set`] over dotted path strings.
pub fn compose_set_str<I, S>(ops: I) -> impl Fn(&Value) -> Value
where
    I: IntoIterator<Item = (S, Assign)>,
    S: AsRef<str>,
{
    compose_set(
        ops.into_iter()
            .map(|(path, value)| (Path::dotted(path.as_ref()), value))
            .collect::<Vec<_>>(),
    )
}

/// [`compose_map`] over dotted namepath strings.
pub fn compose_map_str<I, S>(ops: I) -> impl Fn(&Value) -> Value
where
    I: IntoIterator<Item = (S, Assign)>,
    S: AsRef<str>,
{
    compose_map(
        ops.into_iter()
            .map(|(path, value)| (Namepath::dotted(path.as_ref()), value))
            .collect::<Vec<_>>(),
    )
}
