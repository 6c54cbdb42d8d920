//! Tag-to-codec table used to decode and encode curve documents.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use serde_json::Value;
use strut_core::{Result, StrutError};

use super::document::{self, LineDocument, VerticesDocument};
use crate::curve::{Curve, Line, Polygon, Polyline};

/// Builds a curve from a document node.
pub type DecodeFn = fn(&Value) -> Result<Curve>;

/// Writes a curve's variant fields as an untagged object node. The registry
/// adds the `type` tag.
pub type EncodeFn = fn(&Curve) -> Result<Value>;

/// How one curve type tag is read and written.
#[derive(Clone, Copy)]
pub struct CurveCodec {
    pub tag: &'static str,
    pub decode: DecodeFn,
    pub encode: Option<EncodeFn>,
}

impl CurveCodec {
    /// A read-only codec.
    pub fn decoder(tag: &'static str, decode: DecodeFn) -> Self {
        Self { tag, decode, encode: None }
    }

    pub fn with_encoder(mut self, encode: EncodeFn) -> Self {
        self.encode = Some(encode);
        self
    }
}

impl fmt::Debug for CurveCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurveCodec")
            .field("tag", &self.tag)
            .field("encodes", &self.encode.is_some())
            .finish()
    }
}

static GLOBAL: OnceLock<CurveRegistry> = OnceLock::new();

/// Curve codecs keyed by lower-cased type tag.
#[derive(Debug, Default)]
pub struct CurveRegistry {
    codecs: HashMap<String, CurveCodec>,
}

impl CurveRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in line, polyline, and polygon codecs.
    pub fn with_builtins() -> Self {
        Self::populate(builtin_codecs())
    }

    /// Register each codec in turn. A codec that cannot be registered is
    /// logged and skipped so the remaining codecs stay available.
    pub fn populate<I>(codecs: I) -> Self
    where
        I: IntoIterator<Item = CurveCodec>,
    {
        let mut registry = Self::new();
        for codec in codecs {
            if let Err(error) = registry.register(codec) {
                tracing::warn!(tag = codec.tag, %error, "skipping curve codec");
            }
        }
        registry
    }

    /// The process-wide registry used by `Curve`'s serde impls. Unless
    /// [`CurveRegistry::install`] ran first, it holds the built-in codecs and
    /// is built on first use.
    pub fn global() -> &'static CurveRegistry {
        GLOBAL.get_or_init(|| {
            let registry = Self::with_builtins();
            tracing::debug!(codecs = registry.len(), "curve registry initialized");
            registry
        })
    }

    /// Build the process-wide registry from the built-in codecs plus `extra`.
    ///
    /// Call once at startup, before any curve is decoded or encoded. Fails
    /// with [`StrutError::RegistryInitialized`] once the global registry
    /// exists, whether built by [`CurveRegistry::global`] or a prior install.
    pub fn install<I>(extra: I) -> Result<()>
    where
        I: IntoIterator<Item = CurveCodec>,
    {
        if GLOBAL.get().is_some() {
            return Err(StrutError::RegistryInitialized);
        }
        let registry = Self::populate(builtin_codecs().into_iter().chain(extra));
        let codecs = registry.len();
        GLOBAL.set(registry).map_err(|_| StrutError::RegistryInitialized)?;
        tracing::debug!(codecs, "curve registry installed");
        Ok(())
    }

    pub fn register(&mut self, codec: CurveCodec) -> Result<()> {
        let key = normalize_tag(codec.tag);
        if key.is_empty() {
            return Err(StrutError::InvalidArgument(
                "a curve codec needs a non-empty type tag".into(),
            ));
        }
        if self.codecs.contains_key(&key) {
            return Err(StrutError::DuplicateRegistration(key));
        }
        self.codecs.insert(key, codec);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }

    /// Registered tags in lexical order.
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.codecs.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    /// Whether `tag` is registered. Tags compare case-insensitively.
    pub fn contains(&self, tag: &str) -> bool {
        self.codecs.contains_key(&normalize_tag(tag))
    }

    /// Whether curves tagged `tag` can be written, not just read.
    pub fn can_encode(&self, tag: &str) -> bool {
        self.lookup(tag).map_or(false, |codec| codec.encode.is_some())
    }

    /// Decode a document node into the curve kind named by its `type` field.
    pub fn decode(&self, node: &Value) -> Result<Curve> {
        let codec = self.lookup(document::type_tag(node)?)?;
        (codec.decode)(node)
    }

    /// Encode a curve as a document node tagged with its type.
    pub fn encode(&self, curve: &Curve) -> Result<Value> {
        let tag = curve.type_tag();
        let encode = self
            .lookup(tag)?
            .encode
            .ok_or_else(|| StrutError::UnsupportedEncoding(tag.to_owned()))?;
        document::tag_node(encode(curve)?, tag)
    }

    fn lookup(&self, tag: &str) -> Result<&CurveCodec> {
        self.codecs
            .get(&normalize_tag(tag))
            .ok_or_else(|| StrutError::UnknownCurveType(tag.to_owned()))
    }
}

fn normalize_tag(tag: &str) -> String {
    tag.trim().to_lowercase()
}

/// Codecs for the built-in curve kinds, plus read-only aliases for documents
/// written under the older `hypar.geometry` namespace.
pub fn builtin_codecs() -> Vec<CurveCodec> {
    vec![
        CurveCodec::decoder(Line::TYPE_TAG, decode_line).with_encoder(encode_line),
        CurveCodec::decoder(Polyline::TYPE_TAG, decode_polyline).with_encoder(encode_polyline),
        CurveCodec::decoder(Polygon::TYPE_TAG, decode_polygon).with_encoder(encode_polygon),
        CurveCodec::decoder("hypar.geometry.line", decode_line),
        CurveCodec::decoder("hypar.geometry.polyline", decode_polyline),
        CurveCodec::decoder("hypar.geometry.polygon", decode_polygon),
    ]
}

fn decode_line(node: &Value) -> Result<Curve> {
    let doc: LineDocument = document::fields(node)?;
    Ok(Line::new(doc.start.into(), doc.end.into())?.into())
}

fn decode_polyline(node: &Value) -> Result<Curve> {
    let doc: VerticesDocument = document::fields(node)?;
    Ok(Polyline::new(doc.into_points())?.into())
}

fn decode_polygon(node: &Value) -> Result<Curve> {
    let doc: VerticesDocument = document::fields(node)?;
    Ok(Polygon::new(doc.into_points())?.into())
}

fn encode_line(curve: &Curve) -> Result<Value> {
    match curve {
        Curve::Line(line) => document::to_node(line),
        other => Err(mismatched(Line::TYPE_TAG, other)),
    }
}

fn encode_polyline(curve: &Curve) -> Result<Value> {
    match curve {
        Curve::Polyline(polyline) => document::to_node(polyline),
        other => Err(mismatched(Polyline::TYPE_TAG, other)),
    }
}

fn encode_polygon(curve: &Curve) -> Result<Value> {
    match curve {
        Curve::Polygon(polygon) => document::to_node(polygon),
        other => Err(mismatched(Polygon::TYPE_TAG, other)),
    }
}

fn mismatched(expected: &str, found: &Curve) -> StrutError {
    StrutError::InvalidArgument(format!(
        "the `{expected}` encoder cannot write a `{}`",
        found.type_tag()
    ))
}
