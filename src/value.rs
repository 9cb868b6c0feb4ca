//! Immutable value model for nested data.
//!
//! A [`Value`] is either a record (string-keyed map), a sequence, a scalar,
//! or the absent sentinel. Containers are `Arc`-wrapped so that cloning is a
//! reference bump and every "modified" value shares its untouched
//! substructure with the original.

use im::OrdMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{NamepathError, NamepathResult};
use crate::path::{Path, Seg};

/// The absent sentinel, returned by reference from missed lookups.
static ABSENT: Value = Value::Absent;

/// A nested immutable value.
///
/// `Absent` marks "no value here" and is distinct from `Null`, which is a
/// legitimate data value. Update operations never write `Absent` into a
/// structure except as padding for sequence holes.
///
/// # Examples
///
/// ```
/// use namepath::{path, Value};
/// use serde_json::json;
///
/// let v = Value::from(json!({"users": [{"name": "Ada"}]}));
/// assert_eq!(v.at(&path!("users", 0, "name")).as_str(), Some("Ada"));
/// assert!(v.at(&path!("users", 3)).is_absent());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// No value at this location.
    Absent,
    /// JSON null. A real value; `is_absent` is false for it.
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Numeric scalar.
    Number(serde_json::Number),
    /// String scalar.
    String(Arc<str>),
    /// Ordered sequence of values.
    Seq(Arc<Vec<Value>>),
    /// Record with string keys, iterated in key order.
    Record(Arc<OrdMap<String, Value>>),
}

/// Shape classification shared by every traversal and update routine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// The absent sentinel.
    Absent,
    /// A leaf value that cannot be descended into.
    Scalar,
    /// An ordered sequence.
    Seq,
    /// A string-keyed record.
    Record,
}

impl Value {
    /// Classify this value's shape. `Null` counts as a scalar.
    #[inline]
    pub fn kind(&self) -> Kind {
        match self {
            Value::Absent => Kind::Absent,
            Value::Seq(_) => Kind::Seq,
            Value::Record(_) => Kind::Record,
            _ => Kind::Scalar,
        }
    }

    /// Returns true iff this is the absent sentinel.
    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// Returns true iff this is `Null`.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true for leaf values (`Null`, `Bool`, `Number`, `String`).
    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.kind() == Kind::Scalar
    }

    /// Returns true iff this is a sequence.
    #[inline]
    pub fn is_seq(&self) -> bool {
        matches!(self, Value::Seq(_))
    }

    /// Returns true iff this is a record.
    #[inline]
    pub fn is_record(&self) -> bool {
        matches!(self, Value::Record(_))
    }

    /// True for locations an update may synthesize a container over.
    ///
    /// Covers `Absent` and `Null`: writing through a null treats it as an
    /// empty starting point, while any other scalar blocks descent.
    #[inline]
    pub(crate) fn is_vacant(&self) -> bool {
        matches!(self, Value::Absent | Value::Null)
    }

    /// Human-readable type name, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Absent => "absent",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Seq(_) => "sequence",
            Value::Record(_) => "record",
        }
    }

    /// Child lookup by segment; misses and scalar descent yield `Absent`.
    ///
    /// Index segments address records by their decimal-string key, matching
    /// the write coercion in [`set_at`](crate::set_at).
    pub fn get(&self, seg: &Seg) -> &Value {
        match (self, seg) {
            (Value::Record(map), Seg::Key(k)) => map.get(k).unwrap_or(&ABSENT),
            (Value::Record(map), Seg::Index(i)) => {
                map.get(i.to_string().as_str()).unwrap_or(&ABSENT)
            }
            (Value::Seq(items), Seg::Index(i)) => items.get(*i).unwrap_or(&ABSENT),
            _ => &ABSENT,
        }
    }

    /// Deep lookup along a whole path; `Absent` on the first miss.
    pub fn at(&self, path: &Path) -> &Value {
        let mut current = self;
        for seg in path.segments() {
            current = current.get(seg);
        }
        current
    }

    /// Build a sequence value.
    pub fn seq<I, T>(items: I) -> Value
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::Seq(Arc::new(items.into_iter().map(Into::into).collect()))
    }

    /// Build a record value.
    pub fn record<I, K, T>(entries: I) -> Value
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
        T: Into<Value>,
    {
        Value::Record(Arc::new(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        ))
    }

    /// Get the boolean if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the value as `i64` if this is an integral number.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// Get the value as `f64` if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    /// Get the string slice if this is a `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the element slice if this is a sequence.
    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Value::Seq(items) => Some(items),
            _ => None,
        }
    }

    /// Get the underlying map if this is a record.
    pub fn as_record(&self) -> Option<&OrdMap<String, Value>> {
        match self {
            Value::Record(map) => Some(map),
            _ => None,
        }
    }

    /// Reference identity: do two values share the same backing store?
    ///
    /// Containers and strings compare by `Arc` pointer; scalars compare by
    /// value. This is how structural sharing across updates is observed.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Absent, Value::Absent) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => Arc::ptr_eq(a, b),
            (Value::Seq(a), Value::Seq(b)) => Arc::ptr_eq(a, b),
            (Value::Record(a), Value::Record(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Parse a JSON document into a value.
    pub fn from_json_str(s: &str) -> NamepathResult<Value> {
        Ok(serde_json::from_str::<serde_json::Value>(s)?.into())
    }

    /// Convert to a JSON value.
    ///
    /// Fails with the path of the first `Absent` hole encountered; absent
    /// has no JSON representation and must not silently leak into data.
    pub fn to_json(&self) -> NamepathResult<serde_json::Value> {
        fn walk(value: &Value, path: &mut Path) -> NamepathResult<serde_json::Value> {
            match value {
                Value::Absent => Err(NamepathError::absent_value(path.clone())),
                Value::Null => Ok(serde_json::Value::Null),
                Value::Bool(b) => Ok(serde_json::Value::Bool(*b)),
                Value::Number(n) => Ok(serde_json::Value::Number(n.clone())),
                Value::String(s) => Ok(serde_json::Value::String(s.to_string())),
                Value::Seq(items) => {
                    let mut out = Vec::with_capacity(items.len());
                    for (i, item) in items.iter().enumerate() {
                        path.push(Seg::Index(i));
                        out.push(walk(item, path)?);
                        path.pop();
                    }
                    Ok(serde_json::Value::Array(out))
                }
                Value::Record(map) => {
                    let mut out = serde_json::Map::new();
                    for (k, v) in map.iter() {
                        path.push(Seg::Key(k.clone()));
                        let converted = walk(v, path)?;
                        path.pop();
                        out.insert(k.clone(), converted);
                    }
                    Ok(serde_json::Value::Object(out))
                }
            }
        }
        walk(self, &mut Path::root())
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n),
            serde_json::Value::String(s) => Value::String(s.into()),
            serde_json::Value::Array(items) => {
                Value::Seq(Arc::new(items.into_iter().map(Value::from).collect()))
            }
            serde_json::Value::Object(map) => Value::Record(Arc::new(
                map.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
            )),
        }
    }
}

impl TryFrom<Value> for serde_json::Value {
    type Error = NamepathError;

    fn try_from(value: Value) -> NamepathResult<serde_json::Value> {
        value.to_json()
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Number(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Number(v.into())
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Number(v.into())
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::Number(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        serde_json::Number::from_f64(v)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.into())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v.into())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Seq(Arc::new(items))
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Seq(Arc::new(iter.into_iter().collect()))
    }
}

impl FromIterator<(String, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Value::Record(Arc::new(iter.into_iter().collect()))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Absent => write!(f, "absent"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{:?}", &**s),
            Value::Seq(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Record(map) => {
                write!(f, "{{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}: {}", k, v)?;
                }
                write!(f, "}}")
            }
        }
    }
}
