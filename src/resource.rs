//! Wire payload types carried by graph updates.
//!
//! These are pass-through values as far as this crate is concerned: the
//! update codec cares about where they sit in the wire shape, not what
//! they mean. Node payloads stay fully opaque ([`Graph`] is raw JSON).

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Opaque node payload, passed through the codec unmodified.
pub type Graph = serde_json::Value;

/// A named graph resource owned by a ship.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Resource {
    pub ship: String,
    pub name: String,
}

impl Resource {
    pub fn new(ship: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ship: ship.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.ship, self.name)
    }
}

/// Validator tag attached to a graph when it is created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mark(pub String);

impl Mark {
    pub fn new(mark: impl Into<String>) -> Self {
        Self(mark.into())
    }
}

/// The `keys` payload: the set of resources a store currently holds.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Keys(pub BTreeSet<Resource>);

impl FromIterator<Resource> for Keys {
    fn from_iter<I: IntoIterator<Item = Resource>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
