//! Hierarchical node index for tree-shaped graph resources.
//!
//! An [`Index`] is an ordered sequence of arbitrary-precision non-negative
//! integers: the depth-first path from a resource's root to one of its
//! nodes. The first element is the outermost segment.
//!
//! ## String form
//!
//! The canonical textual form is what appears on the wire, both as a JSON
//! string value and as a JSON object key:
//!
//! - single segment: bare decimal digits, e.g. `42`
//! - multiple segments: `/`-joined with a leading slash, e.g. `/1/23/456`
//!
//! The asymmetry (no leading slash for a single segment) is part of the
//! wire contract and must not be normalized away.
//!
//! [`Index::grouped_string`] additionally groups each segment's digits in
//! threes (`1.234.567`) for display. The parser strips `.` characters, so
//! grouped output still parses, but grouping is never emitted on the wire.
//!
//! ## Ordering
//!
//! Indexes compare lexicographically, segment by segment. When one
//! sequence is a strict prefix of the other, the two are incomparable:
//! neither is less than the other, yet they are not equal. `PartialOrd`
//! encodes this directly (`partial_cmp` returns `None` for the prefix
//! case) and no `Ord` impl is provided.

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use num_bigint::BigUint;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Milliseconds between the unix epoch and the protocol reference epoch
/// (2001-01-01T00:00:00Z), which timestamp-derived indexes count from.
const REFERENCE_EPOCH_UNIX_MS: i64 = 978_307_200_000;

/// Path of a node within a tree-shaped graph resource.
///
/// Immutable after construction. Equality and hashing are structural over
/// the segment sequence, so `Index` is safe as a `HashMap` key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Index {
    /// Path segments, outermost first. Every real construction path
    /// produces at least one segment; [`Index::from_values`] does not
    /// enforce this, so callers handing in raw sequences must.
    pub values: Vec<BigUint>,
}

impl Index {
    /// Create a single-segment index.
    pub fn single(value: impl Into<BigUint>) -> Self {
        Self {
            values: vec![value.into()],
        }
    }

    /// Create an index from an explicit segment sequence.
    ///
    /// Non-emptiness is a caller obligation: an empty sequence renders as
    /// `/`, which does not parse back.
    pub fn from_values(values: Vec<BigUint>) -> Self {
        Self { values }
    }

    /// Create a single-segment index of milliseconds since the reference
    /// epoch. Instants before the epoch clamp to zero.
    pub fn from_timestamp(at: DateTime<Utc>) -> Self {
        let ms = (at.timestamp_millis() - REFERENCE_EPOCH_UNIX_MS).max(0);
        Self::single(ms as u64)
    }

    /// Create an index for the current instant.
    pub fn now() -> Self {
        Self::from_timestamp(Utc::now())
    }

    /// Parse an index from its canonical string form.
    ///
    /// Total over all inputs: any malformed string yields `None`, never a
    /// partial value. At most one leading `/` is stripped; every remaining
    /// `/`-separated segment must be non-empty base-10 digits after `.`
    /// characters are dropped (grouped display output is tolerated).
    pub fn parse(input: &str) -> Option<Self> {
        let body = input.strip_prefix('/').unwrap_or(input);
        if body.is_empty() {
            return None;
        }

        let mut values = Vec::new();
        for segment in body.split('/') {
            let digits: String = segment.chars().filter(|&c| c != '.').collect();
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            values.push(BigUint::from_str(&digits).ok()?);
        }
        Some(Self { values })
    }

    /// Canonical wire string: bare digits for a single segment, leading
    /// `/` and `/`-joined digits otherwise.
    pub fn canonical_string(&self) -> String {
        let segments: Vec<String> = self.values.iter().map(|v| v.to_string()).collect();
        join_path(&segments)
    }

    /// Display string with each segment's digits grouped in threes from
    /// the least-significant end, e.g. `1.234.567`. Never emitted on the
    /// wire.
    pub fn grouped_string(&self) -> String {
        let segments: Vec<String> = self
            .values
            .iter()
            .map(|v| group_digits(&v.to_string()))
            .collect();
        join_path(&segments)
    }

    /// Convert a string-keyed map into an index-keyed map.
    ///
    /// Fails atomically on the first key that is not a valid index; no
    /// partial map is returned.
    pub fn map_from_string_keys<T>(dict: HashMap<String, T>) -> Result<HashMap<Index, T>> {
        let mut converted = HashMap::with_capacity(dict.len());
        for (key, value) in dict {
            let index = Self::parse(&key)
                .ok_or_else(|| Error::invalid_index(format!("not a valid index key: '{}'", key)))?;
            converted.insert(index, value);
        }
        Ok(converted)
    }

    /// Convert an index-keyed map into a string-keyed map using the
    /// canonical form. Total: canonical rendering cannot fail and is
    /// injective over parseable indexes, so keys never collide.
    pub fn map_to_string_keys<T>(dict: HashMap<Index, T>) -> HashMap<String, T> {
        dict.into_iter()
            .map(|(key, value)| (key.canonical_string(), value))
            .collect()
    }
}

/// Join rendered segments into the canonical path shape.
fn join_path(segments: &[String]) -> String {
    match segments {
        [single] => single.clone(),
        _ => format!("/{}", segments.join("/")),
    }
}

/// Group a decimal digit string in threes from the right.
fn group_digits(digits: &str) -> String {
    let mut chunks = Vec::new();
    let mut end = digits.len();
    while end > 3 {
        chunks.push(&digits[end - 3..end]);
        end -= 3;
    }
    chunks.push(&digits[..end]);
    chunks.reverse();
    chunks.join(".")
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_string())
    }
}

impl FromStr for Index {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).ok_or_else(|| Error::invalid_index(format!("not a valid index: '{}'", s)))
    }
}

impl Hash for Index {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for value in &self.values {
            value.hash(state);
        }
    }
}

impl PartialOrd for Index {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        for (lhs, rhs) in self.values.iter().zip(&other.values) {
            match lhs.cmp(rhs) {
                Ordering::Equal => continue,
                unequal => return Some(unequal),
            }
        }
        if self.values.len() == other.values.len() {
            Some(Ordering::Equal)
        } else {
            // Strict prefix: incomparable rather than ordered by length.
            None
        }
    }
}

// ============================================================================
// Serde (always textual: canonical string, including as a map key)
// ============================================================================

impl Serialize for Index {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.canonical_string())
    }
}

impl<'de> Deserialize<'de> for Index {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
