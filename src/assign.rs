//! Value-or-factory normalization for update operations.
//!
//! Every write surface accepts an [`Assign`]: either a literal replacement
//! value or a factory computing one from the current value (and, under a
//! broadcast, the element index). Normalizing here keeps the union dispatch
//! out of the traversal hot paths.

use std::fmt;
use std::sync::Arc;

use crate::Value;

type Factory = Arc<dyn Fn(&Value, Option<usize>) -> Value + Send + Sync>;

/// A replacement value or a factory computing one.
///
/// Cheap to clone; factories are shared behind an `Arc`.
///
/// # Examples
///
/// ```
/// use namepath::{Assign, Value};
///
/// let literal = Assign::of(5);
/// assert_eq!(literal.resolve(&Value::Null), Value::from(5));
///
/// let doubled = Assign::with(|v| Value::from(v.as_i64().unwrap_or(0) * 2));
/// assert_eq!(doubled.resolve(&Value::from(21)), Value::from(42));
/// ```
#[derive(Clone)]
pub struct Assign(Inner);

#[derive(Clone)]
enum Inner {
    Literal(Value),
    Factory(Factory),
}

impl Assign {
    /// A constant assignment that ignores the current value.
    pub fn of(value: impl Into<Value>) -> Self {
        Assign(Inner::Literal(value.into()))
    }

    /// A factory invoked with the current value.
    pub fn with<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        Assign(Inner::Factory(Arc::new(move |current, _| f(current))))
    }

    /// A factory invoked with the current value and, under a broadcast,
    /// the element's position in its sequence.
    pub fn with_index<F>(f: F) -> Self
    where
        F: Fn(&Value, Option<usize>) -> Value + Send + Sync + 'static,
    {
        Assign(Inner::Factory(Arc::new(f)))
    }

    /// The identity factory: yields the current value unchanged.
    pub fn identity() -> Self {
        Assign::with(Value::clone)
    }

    /// Compute the replacement for `current`.
    pub fn resolve(&self, current: &Value) -> Value {
        match &self.0 {
            Inner::Literal(value) => value.clone(),
            Inner::Factory(f) => f(current, None),
        }
    }

    /// Compute the replacement for a broadcast element at `index`.
    pub fn resolve_item(&self, current: &Value, index: usize) -> Value {
        match &self.0 {
            Inner::Literal(value) => value.clone(),
            Inner::Factory(f) => f(current, Some(index)),
        }
    }
}

impl<T: Into<Value>> From<T> for Assign {
    fn from(value: T) -> Self {
        Assign::of(value)
    }
}

impl fmt::Debug for Assign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Inner::Literal(value) => f.debug_tuple("Assign").field(value).finish(),
            Inner::Factory(_) => f.write_str("Assign(<factory>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_literal_ignores_current() {
        let assign = Assign::of("x");
        assert_eq!(assign.resolve(&Value::from(99)), Value::from("x"));
        assert_eq!(assign.resolve_item(&Value::Null, 7), Value::from("x"));
    }

    #[test]
    fn test_factory_sees_current() {
        let assign = Assign::with(|v| Value::from(v.as_i64().unwrap_or(0) + 1));
        assert_eq!(assign.resolve(&Value::from(1)), Value::from(2));
    }

    #[test]
    fn test_index_factory_sees_position() {
        let assign = Assign::with_index(|_, i| Value::from(i.map(|i| i as i64).unwrap_or(-1)));
        assert_eq!(assign.resolve(&Value::Null), Value::from(-1));
        assert_eq!(assign.resolve_item(&Value::Null, 3), Value::from(3));
    }

    #[test]
    fn test_identity() {
        let current = Value::from(json!({"a": 1}));
        assert_eq!(Assign::identity().resolve(&current), current);
    }

    #[test]
    fn test_from_conversions() {
        let assign: Assign = json!({"k": true}).into();
        assert_eq!(assign.resolve(&Value::Absent), Value::from(json!({"k": true})));
    }
}
