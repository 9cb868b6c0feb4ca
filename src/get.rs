//! Immutable getter with a pluggable missing-value predicate.

use crate::path::{Path, Seg};
use crate::Value;

/// Read the value at `path`, falling back to `default` when the final
/// location holds the absent sentinel or any earlier step misses.
///
/// Never errors and never clones: the result borrows from `root` or is
/// `default` itself.
///
/// # Examples
///
/// ```
/// use namepath::{get_at, path, Value};
/// use serde_json::json;
///
/// let root = Value::from(json!({"a": {"b": 1}}));
/// let fallback = Value::from(0);
/// assert_eq!(get_at(&root, &path!("a", "b"), &fallback).as_i64(), Some(1));
/// assert_eq!(get_at(&root, &path!("a", "x"), &fallback).as_i64(), Some(0));
/// ```
pub fn get_at<'a>(root: &'a Value, path: &Path, default: &'a Value) -> &'a Value {
    get_at_by(root, path, default, Value::is_absent)
}

/// Like [`get_at`], but with a caller-supplied notion of "missing" for the
/// final value — e.g. treating `Null` or `0` as absent too.
pub fn get_at_by<'a, F>(root: &'a Value, path: &Path, default: &'a Value, missing: F) -> &'a Value
where
    F: Fn(&Value) -> bool,
{
    fn walk<'a>(
        root: &'a Value,
        segs: &[Seg],
        default: &'a Value,
        missing: &dyn Fn(&Value) -> bool,
    ) -> &'a Value {
        if root.is_absent() {
            return default;
        }
        let Some((head, rest)) = segs.split_first() else {
            return default;
        };
        let current = root.get(head);
        if rest.is_empty() {
            if missing(current) {
                default
            } else {
                current
            }
        } else {
            walk(current, rest, default, missing)
        }
    }
    walk(root, path.segments(), default, &missing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path;
    use serde_json::json;

    #[test]
    fn test_get_at_nested() {
        let root = Value::from(json!({"a": {"b": [10, 20]}}));
        let fallback = Value::from("fallback");
        assert_eq!(get_at(&root, &path!("a", "b", 1), &fallback).as_i64(), Some(20));
    }

    #[test]
    fn test_absent_root_short_circuits() {
        let fallback = Value::from("d");
        assert_eq!(get_at(&Value::Absent, &path!("a"), &fallback), &fallback);
    }

    #[test]
    fn test_missing_mid_path_yields_default() {
        let root = Value::from(json!({"a": 1}));
        let fallback = Value::from("d");
        assert_eq!(get_at(&root, &path!("b", "c"), &fallback), &fallback);
    }

    #[test]
    fn test_empty_path_yields_default() {
        let root = Value::from(json!({"a": 1}));
        let fallback = Value::from("d");
        assert_eq!(get_at(&root, &path!(), &fallback), &fallback);
    }

    #[test]
    fn test_null_is_present_by_default() {
        let root = Value::from(json!({"a": null}));
        let fallback = Value::from("d");
        assert_eq!(get_at(&root, &path!("a"), &fallback), &Value::Null);
    }

    #[test]
    fn test_custom_missing_predicate() {
        let root = Value::from(json!({"a": null, "b": 0}));
        let fallback = Value::from(7);
        let missing = |v: &Value| v.is_absent() || v.is_null() || v.as_i64() == Some(0);
        assert_eq!(get_at_by(&root, &path!("a"), &fallback, missing), &fallback);
        assert_eq!(get_at_by(&root, &path!("b"), &fallback, missing), &fallback);
    }

    #[test]
    fn test_scalar_descent_yields_default() {
        let root = Value::from(json!({"a": 5}));
        let fallback = Value::from("d");
        assert_eq!(get_at(&root, &path!("a", "b", "c"), &fallback), &fallback);
    }
}
