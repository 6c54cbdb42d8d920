//! Tagged-document (de)serialization of curves.
//!
//! A curve document is a JSON object carrying a `type` tag plus the fields of
//! its variant, e.g.
//!
//! ```json
//! { "type": "elements.geometry.polyline", "vertices": [[0, 0, 0], [1, 0, 0]] }
//! ```
//!
//! The [`CurveRegistry`] maps tags to codecs, so callers decode a node without
//! knowing which curve kind it holds. `Curve` itself implements serde's
//! `Serialize` and `Deserialize` through the global registry.

mod document;
mod registry;

use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::curve::Curve;

pub use document::TYPE_FIELD;
pub use registry::{builtin_codecs, CurveCodec, CurveRegistry, DecodeFn, EncodeFn};

impl Serialize for Curve {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        CurveRegistry::global()
            .encode(self)
            .map_err(ser::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Curve {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let node = Value::deserialize(deserializer)?;
        CurveRegistry::global()
            .decode(&node)
            .map_err(de::Error::custom)
    }
}
