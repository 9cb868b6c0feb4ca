//! Namepath representation for addressing locations in nested values.
//!
//! A plain [`Path`] is a sequence of [`Seg`]s (keys and indices) and is what
//! the getter and setter traverse. A [`Namepath`] is a sequence of
//! [`Segment`]s, each optionally tagged with an [`Operator`] that changes
//! traversal semantics for the mapper at that step.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single plain step in a path.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seg {
    /// Record key access: `{"key": value}`
    Key(String),
    /// Sequence index access: `[index]`
    Index(usize),
}

impl Seg {
    /// Create a key segment.
    #[inline]
    pub fn key(k: impl Into<String>) -> Self {
        Seg::Key(k.into())
    }

    /// Create an index segment.
    #[inline]
    pub fn index(i: usize) -> Self {
        Seg::Index(i)
    }

    /// Parse a raw token: decimal tokens become indices, anything else a key.
    pub fn parse(token: &str) -> Self {
        token
            .parse::<usize>()
            .map(Seg::Index)
            .unwrap_or_else(|_| Seg::Key(token.to_owned()))
    }

    /// Get the key if this is a key segment.
    #[inline]
    pub fn as_key(&self) -> Option<&str> {
        match self {
            Seg::Key(k) => Some(k),
            Seg::Index(_) => None,
        }
    }

    /// Get the index if this is an index segment.
    #[inline]
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Seg::Key(_) => None,
            Seg::Index(i) => Some(*i),
        }
    }
}

impl fmt::Display for Seg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seg::Key(k) => write!(f, ".{}", k),
            Seg::Index(i) => write!(f, "[{}]", i),
        }
    }
}

impl From<String> for Seg {
    fn from(s: String) -> Self {
        Seg::Key(s)
    }
}

impl From<&str> for Seg {
    fn from(s: &str) -> Self {
        Seg::Key(s.to_owned())
    }
}

impl From<usize> for Seg {
    fn from(i: usize) -> Self {
        Seg::Index(i)
    }
}

/// Traversal operator carried by a [`Segment`].
///
/// Parsing is permissive: any unrecognized tag is kept as [`Operator::Other`]
/// and makes the mapper treat that step as a no-op rather than an error.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Operator {
    /// Broadcast the remaining namepath over every element of a sequence.
    Map,
    /// An unrecognized tag; never matches an update strategy.
    Other(String),
}

impl Operator {
    /// Parse an operator tag.
    pub fn parse(tag: &str) -> Self {
        match tag {
            "map" => Operator::Map,
            other => Operator::Other(other.to_owned()),
        }
    }

    /// The tag as written in a namepath token.
    pub fn as_str(&self) -> &str {
        match self {
            Operator::Map => "map",
            Operator::Other(tag) => tag,
        }
    }
}

impl From<String> for Operator {
    fn from(tag: String) -> Self {
        Operator::parse(&tag)
    }
}

impl From<Operator> for String {
    fn from(op: Operator) -> Self {
        op.as_str().to_owned()
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One step of an operator-aware namepath.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    /// The key or index this step addresses.
    pub name: Seg,
    /// Optional traversal operator; `None` is plain descent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<Operator>,
}

impl Segment {
    /// Create a segment from explicit parts.
    pub fn new(name: impl Into<Seg>, operator: Option<Operator>) -> Self {
        Segment {
            name: name.into(),
            operator,
        }
    }

    /// Create a plain (operator-free) segment.
    pub fn plain(name: impl Into<Seg>) -> Self {
        Segment::new(name, None)
    }

    /// Create a broadcast segment over the sequence under `name`.
    pub fn map_over(name: impl Into<Seg>) -> Self {
        Segment::new(name, Some(Operator::Map))
    }

    /// Parse one raw namepath token.
    ///
    /// A token splits on its first `:` into operator and name; without a
    /// colon (or with nothing after it) the whole token is the name. Decimal
    /// names become index segments.
    pub fn parse_token(token: &str) -> Self {
        match token.split_once(':') {
            Some((op, name)) if !name.is_empty() => Segment {
                name: Seg::parse(name),
                operator: Some(Operator::parse(op)),
            },
            Some((op, _)) => Segment::plain(Seg::parse(op)),
            None => Segment::plain(Seg::parse(token)),
        }
    }

    /// True iff this segment has no operator.
    #[inline]
    pub fn is_plain(&self) -> bool {
        self.operator.is_none()
    }
}

impl From<&str> for Segment {
    fn from(token: &str) -> Self {
        Segment::parse_token(token)
    }
}

impl From<String> for Segment {
    fn from(token: String) -> Self {
        Segment::parse_token(&token)
    }
}

impl From<usize> for Segment {
    fn from(i: usize) -> Self {
        Segment::plain(Seg::Index(i))
    }
}

impl From<Seg> for Segment {
    fn from(name: Seg) -> Self {
        Segment::plain(name)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.operator, &self.name) {
            (None, name) => write!(f, "{}", name),
            (Some(op), Seg::Key(k)) => write!(f, ".{}:{}", op, k),
            (Some(op), Seg::Index(i)) => write!(f, "[{}:{}]", op, i),
        }
    }
}

/// A plain path into a nested value.
///
/// # Examples
///
/// ```
/// use namepath::Path;
///
/// let path = Path::root().key("users").index(0).key("name");
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.to_string(), "$.users[0].name");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Path(Vec<Seg>);

impl Path {
    /// Create an empty path (root).
    #[inline]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Create an empty path (alias for `new`).
    #[inline]
    pub fn root() -> Self {
        Self::new()
    }

    /// Create a path from a vector of segments.
    #[inline]
    pub fn from_segments(segments: Vec<Seg>) -> Self {
        Self(segments)
    }

    /// Parse a dotted path string.
    ///
    /// Splits on `.`, skipping empty tokens; decimal tokens become indices.
    /// Tokens are taken literally — a `:` stays part of the key, since plain
    /// paths carry no operators.
    pub fn dotted(path: &str) -> Self {
        path.split('.')
            .filter(|token| !token.is_empty())
            .map(Seg::parse)
            .collect()
    }

    /// Append a key segment and return self (builder pattern).
    #[inline]
    pub fn key(mut self, k: impl Into<String>) -> Self {
        self.0.push(Seg::Key(k.into()));
        self
    }

    /// Append an index segment and return self (builder pattern).
    #[inline]
    pub fn index(mut self, i: usize) -> Self {
        self.0.push(Seg::Index(i));
        self
    }

    /// Push a segment onto the path (mutating).
    #[inline]
    pub fn push(&mut self, seg: Seg) {
        self.0.push(seg);
    }

    /// Pop the last segment from the path.
    #[inline]
    pub fn pop(&mut self) -> Option<Seg> {
        self.0.pop()
    }

    /// Get the segments of this path.
    #[inline]
    pub fn segments(&self) -> &[Seg] {
        &self.0
    }

    /// Check if this path is empty (root).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of segments in this path.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get the first segment.
    #[inline]
    pub fn first(&self) -> Option<&Seg> {
        self.0.first()
    }

    /// Get the last segment.
    #[inline]
    pub fn last(&self) -> Option<&Seg> {
        self.0.last()
    }

    /// Join this path with another path.
    #[inline]
    pub fn join(&self, other: &Path) -> Path {
        let mut result = self.clone();
        result.0.extend(other.0.iter().cloned());
        result
    }

    /// Get the parent path (path without the last segment).
    #[inline]
    pub fn parent(&self) -> Option<Path> {
        if self.0.is_empty() {
            None
        } else {
            let mut p = self.clone();
            p.pop();
            Some(p)
        }
    }

    /// Iterate over the segments.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Seg> {
        self.0.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$")?;
        for seg in &self.0 {
            write!(f, "{}", seg)?;
        }
        Ok(())
    }
}

impl FromIterator<Seg> for Path {
    fn from_iter<I: IntoIterator<Item = Seg>>(iter: I) -> Self {
        Path(iter.into_iter().collect())
    }
}

impl IntoIterator for Path {
    type Item = Seg;
    type IntoIter = std::vec::IntoIter<Seg>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Seg;
    type IntoIter = std::slice::Iter<'a, Seg>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::ops::Index<usize> for Path {
    type Output = Seg;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

/// An operator-aware namepath, traversed by the mapper.
///
/// # Examples
///
/// ```
/// use namepath::Namepath;
///
/// let np = Namepath::dotted("map:items.name");
/// assert_eq!(np.len(), 2);
/// assert_eq!(np.to_string(), "$.map:items.name");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Namepath(Vec<Segment>);

impl Namepath {
    /// Create an empty namepath.
    #[inline]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Create a namepath from a vector of segments.
    #[inline]
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self(segments)
    }

    /// Parse a dotted namepath string.
    ///
    /// Splits on `.`, skipping empty tokens; each token goes through
    /// [`Segment::parse_token`], so `map:items` carries the broadcast
    /// operator and decimal tokens become indices.
    pub fn dotted(path: &str) -> Self {
        path.split('.')
            .filter(|token| !token.is_empty())
            .map(Segment::parse_token)
            .collect()
    }

    /// Append a plain key segment (builder pattern).
    #[inline]
    pub fn key(mut self, k: impl Into<String>) -> Self {
        self.0.push(Segment::plain(Seg::Key(k.into())));
        self
    }

    /// Append a plain index segment (builder pattern).
    #[inline]
    pub fn index(mut self, i: usize) -> Self {
        self.0.push(Segment::plain(Seg::Index(i)));
        self
    }

    /// Append a broadcast segment over the sequence under `name`.
    #[inline]
    pub fn map_over(mut self, name: impl Into<Seg>) -> Self {
        self.0.push(Segment::map_over(name));
        self
    }

    /// Push a segment onto the namepath (mutating).
    #[inline]
    pub fn push(&mut self, segment: Segment) {
        self.0.push(segment);
    }

    /// Get the segments of this namepath.
    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    /// Check if this namepath is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of segments.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over the segments.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.0.iter()
    }
}

impl fmt::Display for Namepath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$")?;
        for segment in &self.0 {
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

impl From<Path> for Namepath {
    fn from(path: Path) -> Self {
        path.into_iter().map(Segment::plain).collect()
    }
}

impl FromIterator<Segment> for Namepath {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Namepath(iter.into_iter().collect())
    }
}

impl IntoIterator for Namepath {
    type Item = Segment;
    type IntoIter = std::vec::IntoIter<Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Namepath {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::ops::Index<usize> for Namepath {
    type Output = Segment;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

/// Construct a [`Path`] from a sequence of segments.
///
/// # Examples
///
/// ```
/// use namepath::path;
///
/// // String literals become Key segments, numbers become Index segments.
/// let p = path!("users", 0, "name");
/// assert_eq!(p.to_string(), "$.users[0].name");
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::Path::root()
    };
    ($($seg:expr),+ $(,)?) => {{
        let mut p = $crate::Path::root();
        $(
            p.push($crate::Seg::from($seg));
        )+
        p
    }};
}

/// Construct a [`Namepath`] from a sequence of raw segments.
///
/// String literals are parsed as namepath tokens, so `"map:items"` becomes a
/// broadcast segment and `"name"` a plain key.
///
/// # Examples
///
/// ```
/// use namepath::namepath;
///
/// let np = namepath!("map:items", "name");
/// assert_eq!(np.to_string(), "$.map:items.name");
/// ```
#[macro_export]
macro_rules! namepath {
    () => {
        $crate::Namepath::new()
    };
    ($($seg:expr),+ $(,)?) => {{
        let mut p = $crate::Namepath::new();
        $(
            p.push($crate::Segment::from($seg));
        )+
        p
    }};
}
