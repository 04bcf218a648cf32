//! Canonical scope sets.
//!
//! A [`ScopeSet`] holds canonical scope tokens in ascending order with no
//! duplicates. Two participants may interoperate only if their scope sets
//! intersect, so the binary operations here sit on the packet matching path.
//! All of them are a single forward merge over both sorted member sequences.

use std::cmp::Ordering;
use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fmt;
use std::iter::Peekable;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::ParseError;
use crate::strings;
use crate::Result;

/// Scope every SLP participant belongs to unless configured otherwise
/// (RFC 2608 §11).
pub const DEFAULT_SCOPE: &str = "default";

/// A set of canonical scopes.
///
/// # Example
///
/// ```
/// use scopekit_lib::ScopeSet;
///
/// let local = ScopeSet::from_tokens(["Stage", "FOH"]);
/// let remote: ScopeSet = "foh,backstage".parse().unwrap();
///
/// assert!(local.intersects(&remote));
/// assert_eq!(local.intersection(&remote).as_escaped_string(), "foh");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScopeSet {
    scopes: BTreeSet<String>,
}

impl ScopeSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the set holding only [`DEFAULT_SCOPE`].
    pub fn default_scope() -> Self {
        Self::from_tokens([DEFAULT_SCOPE])
    }

    /// Build a set from raw tokens, canonicalizing each one.
    ///
    /// Tokens that are equal once canonicalized collapse into one member.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        set.extend(tokens);
        set
    }

    /// Decode a comma separated, escaped scope list.
    ///
    /// Tokens are split on unescaped commas, unescaped, then canonicalized.
    /// Tokens that end up empty are dropped, so `""` and `","` both decode to
    /// the empty set.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if any token carries a malformed escape. No
    /// partially decoded set is ever returned.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all, fields(len = raw.len())))]
    pub fn from_wire_string(raw: &str) -> Result<Self> {
        let mut set = Self::new();
        for token in strings::split_list(raw) {
            let unescaped = strings::unescape(token).inspect_err(|_err| {
                #[cfg(feature = "tracing")]
                tracing::debug!("rejecting scope token '{token}': {_err}");
            })?;
            set.insert(unescaped);
        }
        Ok(set)
    }

    /// Canonicalize `raw` and add it to the set.
    ///
    /// Returns true if the canonical token was not already present. Tokens
    /// that canonicalize to the empty string are ignored.
    pub fn insert(&mut self, raw: impl AsRef<str>) -> bool {
        let canonical = strings::canonicalize(raw.as_ref());
        if canonical.is_empty() {
            return false;
        }
        self.scopes.insert(canonical)
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    /// Check membership. `scope` is canonicalized before the lookup, so any
    /// surface form of a member is reported as contained.
    pub fn contains(&self, scope: &str) -> bool {
        self.scopes.contains(&strings::canonicalize(scope))
    }

    /// Iterate canonical members in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        Iter(self.scopes.iter())
    }

    /// Returns true as soon as one scope is found in both sets.
    pub fn intersects(&self, other: &ScopeSet) -> bool {
        self.merge_walk(other).next_common().is_some()
    }

    /// Number of scopes present in both sets.
    pub fn intersection_count(&self, other: &ScopeSet) -> usize {
        let mut walk = self.merge_walk(other);
        std::iter::from_fn(|| walk.next_common()).count()
    }

    /// Scopes present in both sets.
    pub fn intersection(&self, other: &ScopeSet) -> ScopeSet {
        let mut walk = self.merge_walk(other);
        let scopes = std::iter::from_fn(|| walk.next_common())
            .map(str::to_owned)
            .collect();
        ScopeSet { scopes }
    }

    /// Scopes in `self` that are absent from `other`.
    pub fn difference(&self, other: &ScopeSet) -> ScopeSet {
        let scopes = self
            .merge_walk(other)
            .filter_map(|step| match step {
                Merged::Left(scope) => Some(scope.to_owned()),
                _ => None,
            })
            .collect();
        ScopeSet { scopes }
    }

    /// Scopes in either set.
    pub fn union(&self, other: &ScopeSet) -> ScopeSet {
        let scopes = self
            .merge_walk(other)
            .map(|step| step.scope().to_owned())
            .collect();
        ScopeSet { scopes }
    }

    /// Remove every scope that is also in `other`, returning the removed
    /// scopes.
    ///
    /// The retained and removed members are built in one pass and the
    /// retained set then replaces the current storage.
    pub fn difference_update(&mut self, other: &ScopeSet) -> ScopeSet {
        let mut retained = BTreeSet::new();
        let mut removed = BTreeSet::new();
        for step in self.merge_walk(other) {
            match step {
                Merged::Left(scope) => {
                    retained.insert(scope.to_owned());
                }
                Merged::Both(scope) => {
                    removed.insert(scope.to_owned());
                }
                Merged::Right(_) => {}
            }
        }
        self.scopes = retained;
        ScopeSet { scopes: removed }
    }

    /// Add every scope of `other` to this set.
    pub fn update(&mut self, other: &ScopeSet) {
        self.scopes.extend(other.scopes.iter().cloned());
    }

    /// Encode the set for an SLP scope list field.
    ///
    /// Members are escaped and joined with unescaped commas, in ascending
    /// order. The empty set encodes to the empty string.
    pub fn as_escaped_string(&self) -> String {
        self.scopes
            .iter()
            .map(|scope| strings::escape(scope))
            .collect::<Vec<_>>()
            .join(",")
    }

    fn merge_walk<'a>(&'a self, other: &'a ScopeSet) -> MergeWalk<'a> {
        MergeWalk {
            left: self.scopes.iter().peekable(),
            right: other.scopes.iter().peekable(),
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for ScopeSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_tokens(iter)
    }
}

impl<S: AsRef<str>> Extend<S> for ScopeSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for token in iter {
            self.insert(token);
        }
    }
}

impl FromStr for ScopeSet {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_wire_string(s)
    }
}

impl fmt::Display for ScopeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_escaped_string())
    }
}

impl Serialize for ScopeSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_escaped_string())
    }
}

impl<'de> Deserialize<'de> for ScopeSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::from_wire_string(&raw).map_err(serde::de::Error::custom)
    }
}

impl<'a> IntoIterator for &'a ScopeSet {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl IntoIterator for ScopeSet {
    type Item = String;
    type IntoIter = btree_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.scopes.into_iter()
    }
}

/// Ascending iterator over the canonical members of a [`ScopeSet`].
#[derive(Clone, Debug)]
pub struct Iter<'a>(btree_set::Iter<'a, String>);

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.0.next().map(String::as_str)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(String::as_str)
    }
}

impl ExactSizeIterator for Iter<'_> {}

/// One step of a merge over two sorted member sequences.
#[derive(Debug, PartialEq, Eq)]
enum Merged<'a> {
    Left(&'a str),
    Both(&'a str),
    Right(&'a str),
}

impl<'a> Merged<'a> {
    fn scope(&self) -> &'a str {
        match *self {
            Merged::Left(scope) | Merged::Both(scope) | Merged::Right(scope) => scope,
        }
    }
}

/// Two-pointer walk over two sorted, duplicate-free sequences.
///
/// Each element is compared at most once against the current head of the
/// other sequence.
struct MergeWalk<'a> {
    left: Peekable<btree_set::Iter<'a, String>>,
    right: Peekable<btree_set::Iter<'a, String>>,
}

impl<'a> MergeWalk<'a> {
    /// Advance to the next scope present on both sides. Stops as soon as
    /// either side is exhausted.
    fn next_common(&mut self) -> Option<&'a str> {
        loop {
            let order = match (self.left.peek(), self.right.peek()) {
                (Some(left), Some(right)) => left.cmp(right),
                _ => return None,
            };
            match order {
                Ordering::Less => {
                    self.left.next();
                }
                Ordering::Greater => {
                    self.right.next();
                }
                Ordering::Equal => {
                    self.right.next();
                    return self.left.next().map(String::as_str);
                }
            }
        }
    }
}

impl<'a> Iterator for MergeWalk<'a> {
    type Item = Merged<'a>;

    fn next(&mut self) -> Option<Merged<'a>> {
        let order = match (self.left.peek(), self.right.peek()) {
            (None, None) => return None,
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (Some(left), Some(right)) => left.cmp(right),
        };
        match order {
            Ordering::Less => self.left.next().map(|s| Merged::Left(s.as_str())),
            Ordering::Greater => self.right.next().map(|s| Merged::Right(s.as_str())),
            Ordering::Equal => {
                self.right.next();
                self.left.next().map(|s| Merged::Both(s.as_str()))
            }
        }
    }
}
