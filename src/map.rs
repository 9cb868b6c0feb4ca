//! Operator-aware mapper: the central update primitive.
//!
//! Traversal strategy is chosen per segment by its operator tag: plain
//! descent, or a broadcast over every element of a sequence. Whatever the
//! strategy computes is written back through the immutable setter, so the
//! copy-on-write and sharing rules are identical to [`set_at`](crate::set_at).

use std::sync::Arc;

use crate::path::{Namepath, Operator, Segment};
use crate::set::write_child;
use crate::{Assign, Value};

/// Transform the value addressed by `namepath` in a copy of `root`.
///
/// Plain segments descend like the setter; a `map` segment broadcasts the
/// remaining namepath over each element of the sequence under its name. A
/// factory assignment receives the current leaf value (and the element
/// index when broadcasting).
///
/// When the computed replacement is the absent sentinel — an unknown
/// operator, or a broadcast whose target is missing or not a sequence —
/// `root` comes back unchanged; the sentinel is never written into the
/// structure.
///
/// # Examples
///
/// ```
/// use namepath::{map_at, namepath, Assign, Value};
/// use serde_json::json;
///
/// let root = Value::from(json!({"items": [1, 2, 3]}));
/// let doubled = map_at(
///     &root,
///     &namepath!("map:items"),
///     Assign::with(|v| Value::from(v.as_i64().unwrap_or(0) * 2)),
/// );
/// assert_eq!(doubled, Value::from(json!({"items": [2, 4, 6]})));
/// assert_eq!(root, Value::from(json!({"items": [1, 2, 3]})));
/// ```
pub fn map_at(root: &Value, namepath: &Namepath, value: impl Into<Assign>) -> Value {
    map_segments(root, namepath.segments(), &value.into())
}

pub(crate) fn map_segments(root: &Value, segs: &[Segment], assign: &Assign) -> Value {
    if root.is_vacant() {
        return root.clone();
    }
    let Some((head, rest)) = segs.split_first() else {
        return root.clone();
    };
    let is_final = rest.is_empty();
    let target = root.get(&head.name);
    let next = match &head.operator {
        None => {
            if is_final {
                assign.resolve(target)
            } else {
                map_segments(target, rest, assign)
            }
        }
        Some(Operator::Map) => broadcast(target, rest, is_final, assign),
        // No strategy matches an unrecognized tag.
        Some(Operator::Other(_)) => Value::Absent,
    };
    if next.is_absent() {
        return root.clone();
    }
    // The recursion already produced the fully-updated subtree; only the
    // head name is written.
    write_child(root, &head.name, next)
}

/// Apply the remaining namepath to every element of a sequence target.
/// Anything that is not a sequence yields the absent sentinel, which the
/// caller turns into a no-op.
fn broadcast(target: &Value, rest: &[Segment], is_final: bool, assign: &Assign) -> Value {
    let Value::Seq(items) = target else {
        return Value::Absent;
    };
    let mapped = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            if is_final {
                assign.resolve_item(item, index)
            } else {
                map_segments(item, rest, assign)
            }
        })
        .collect();
    Value::Seq(Arc::new(mapped))
}

/// Apply [`map_at`] independently to every root in `items`, preserving
/// length and order.
///
/// # Examples
///
/// ```
/// use namepath::{map_in, namepath, Assign, Value};
/// use serde_json::json;
///
/// let rows = [
///     Value::from(json!({"n": 1})),
///     Value::from(json!({"n": 2})),
/// ];
/// let bumped = map_in(
///     &rows,
///     &namepath!("n"),
///     Assign::with(|v| Value::from(v.as_i64().unwrap_or(0) + 1)),
/// );
/// assert_eq!(bumped[0], Value::from(json!({"n": 2})));
/// assert_eq!(bumped[1], Value::from(json!({"n": 3})));
/// ```
pub fn map_in<'a, I>(items: I, namepath: &Namepath, value: impl Into<Assign>) -> Vec<Value>
where
    I: IntoIterator<Item = &'a Value>,
{
    let assign = value.into();
    items
        .into_iter()
        .map(|item| map_segments(item, namepath.segments(), &assign))
        .collect()
}

/// Sequence-in, sequence-out convenience over [`map_in`]; non-sequence
/// inputs come back unchanged.
pub fn map_in_seq(items: &Value, namepath: &Namepath, value: impl Into<Assign>) -> Value {
    match items {
        Value::Seq(seq) => Value::Seq(Arc::new(map_in(seq.iter(), namepath, value))),
        other => other.clone(),
    }
}
