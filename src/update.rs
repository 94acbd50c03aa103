//! Graph update wire codec.
//!
//! A [`GraphUpdate`] travels as a single-key JSON object; the key is the
//! variant discriminator, not a conventional `"type"` field:
//!
//! ```json
//! {"add-graph": {"resource": ..., "graph": {"/1/2": ...}, "mark": null, "overwrite": true}}
//! {"add-nodes": {"resource": ..., "nodes": {"42": ...}}}
//! {"keys": [...]}
//! ```
//!
//! Both impls are hand-written because the shape is asymmetric:
//!
//! - `add-graph` always carries a `mark` entry on encode, emitting an
//!   explicit `null` when no mark is set, but decode collapses wire-`null`
//!   and wire-absent to `None`. The round trip is deliberately lossy in
//!   that one spot.
//! - Decode identifies the variant by trying the known keys in a fixed
//!   order (`keys`, `add-graph`, `add-nodes`). The first two attempts are
//!   speculative and swallow their own structural mismatches; only after
//!   the last attempt is exhausted does decoding fail.
//!
//! Graph and node maps are keyed by the canonical [`Index`](crate::Index)
//! string on the wire; [`crate::Index::map_from_string_keys`] converts
//! them for callers that want typed keys.

use crate::resource::{Graph, Keys, Mark, Resource};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// One update message of the graph-store protocol.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphUpdate {
    /// Create a graph resource, optionally overwriting an existing one.
    AddGraph {
        resource: Resource,
        /// Initial graph contents, keyed by canonical index string.
        graph: HashMap<String, Graph>,
        /// Validator tag; encoded as explicit `null` when absent.
        mark: Option<Mark>,
        overwrite: bool,
    },
    /// Add nodes to an existing resource.
    AddNodes {
        resource: Resource,
        /// New nodes, keyed by canonical index string.
        nodes: HashMap<String, Graph>,
    },
    /// The set of resources a store holds.
    Keys(Keys),
}

const ADD_GRAPH: &str = "add-graph";
const ADD_NODES: &str = "add-nodes";
const KEYS: &str = "keys";

#[derive(Serialize)]
struct AddGraphBody<'a> {
    resource: &'a Resource,
    graph: &'a HashMap<String, Graph>,
    mark: &'a Option<Mark>,
    overwrite: bool,
}

#[derive(Serialize)]
struct AddNodesBody<'a> {
    resource: &'a Resource,
    nodes: &'a HashMap<String, Graph>,
}

#[derive(Deserialize)]
struct RawAddGraph {
    resource: Resource,
    graph: HashMap<String, Graph>,
    mark: Option<Mark>,
    overwrite: bool,
}

#[derive(Deserialize)]
struct RawAddNodes {
    resource: Resource,
    nodes: HashMap<String, Graph>,
}

impl Serialize for GraphUpdate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            GraphUpdate::AddGraph {
                resource,
                graph,
                mark,
                overwrite,
            } => {
                map.serialize_entry(
                    ADD_GRAPH,
                    &AddGraphBody {
                        resource,
                        graph,
                        mark,
                        overwrite: *overwrite,
                    },
                )?;
            }
            GraphUpdate::AddNodes { resource, nodes } => {
                map.serialize_entry(ADD_NODES, &AddNodesBody { resource, nodes })?;
            }
            GraphUpdate::Keys(keys) => {
                map.serialize_entry(KEYS, keys)?;
            }
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for GraphUpdate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error as DeError;

        let document: serde_json::Map<String, serde_json::Value> =
            Deserialize::deserialize(deserializer)?;

        // Fixed trial order. The keys and add-graph attempts are
        // speculative: a structural mismatch means "not this variant",
        // not a fatal error.
        if let Some(raw) = document.get(KEYS) {
            if let Ok(keys) = serde_json::from_value::<Keys>(raw.clone()) {
                return Ok(GraphUpdate::Keys(keys));
            }
        }

        if let Some(raw) = document.get(ADD_GRAPH) {
            if let Ok(body) = serde_json::from_value::<RawAddGraph>(raw.clone()) {
                return Ok(GraphUpdate::AddGraph {
                    resource: body.resource,
                    graph: body.graph,
                    // Wire-null and wire-absent both land here as None.
                    mark: body.mark,
                    overwrite: body.overwrite,
                });
            }
        }

        if let Some(raw) = document.get(ADD_NODES) {
            let body: RawAddNodes = serde_json::from_value(raw.clone())
                .map_err(|e| DeError::custom(format!("invalid {} payload: {}", ADD_NODES, e)))?;
            return Ok(GraphUpdate::AddNodes {
                resource: body.resource,
                nodes: body.nodes,
            });
        }

        Err(DeError::custom(
            "graph update matched no known variant (keys, add-graph, add-nodes)",
        ))
    }
}

// ============================================================================
// Tests
// ============================================================================
