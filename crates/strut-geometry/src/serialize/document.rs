//! Field layouts of curve documents.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strut_core::{Result, StrutError};
use strut_math::{dvec3, Point3};

/// Name of the field holding a document's type tag.
pub const TYPE_FIELD: &str = "type";

/// A point written either as `[x, y, z]` or as `{ "x": .., "y": .., "z": .. }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum PointDocument {
    Triple([f64; 3]),
    Named {
        x: f64,
        y: f64,
        #[serde(default)]
        z: f64,
    },
}

impl From<PointDocument> for Point3 {
    fn from(doc: PointDocument) -> Self {
        match doc {
            PointDocument::Triple([x, y, z]) => dvec3(x, y, z),
            PointDocument::Named { x, y, z } => dvec3(x, y, z),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct LineDocument {
    pub start: PointDocument,
    pub end: PointDocument,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VerticesDocument {
    pub vertices: Vec<PointDocument>,
}

impl VerticesDocument {
    pub fn into_points(self) -> Vec<Point3> {
        self.vertices.into_iter().map(Point3::from).collect()
    }
}

/// The `type` tag of a document node.
pub(crate) fn type_tag(node: &Value) -> Result<&str> {
    node.get(TYPE_FIELD).and_then(Value::as_str).ok_or_else(|| {
        StrutError::MalformedDocument(format!("expected a string `{TYPE_FIELD}` field"))
    })
}

/// Read the variant fields of a node; unrelated fields such as `type` are ignored.
pub(crate) fn fields<T: DeserializeOwned>(node: &Value) -> Result<T> {
    T::deserialize(node).map_err(|e| StrutError::MalformedDocument(e.to_string()))
}

/// Write the variant fields of `value` as a node.
pub(crate) fn to_node<T: Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value).map_err(|e| StrutError::MalformedDocument(e.to_string()))
}

/// Add the `type` tag to an object node.
pub(crate) fn tag_node(mut node: Value, tag: &str) -> Result<Value> {
    match node.as_object_mut() {
        Some(map) => {
            map.insert(TYPE_FIELD.to_owned(), Value::String(tag.to_owned()));
            Ok(node)
        }
        None => Err(StrutError::MalformedDocument(format!(
            "a `{tag}` must encode as an object"
        ))),
    }
}
