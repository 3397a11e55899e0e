//! Failure modes of a generation run. Every one of them is fatal.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    /// The input document is not well-formed, or a known field has the wrong JSON type.
    #[error("failed to decode schema document at JSON path {path}: {message}")]
    Decode { path: String, message: String },

    /// A scheduled declaration is not an object-as-struct.
    #[error("expected top-level schemas to be object types: {id:?}")]
    EmitterShape { id: String },

    /// Object schema with neither `additionalProperties` nor `properties`.
    #[error("unrecognized object type {id:?}: neither additionalProperties nor properties is set")]
    UnresolvedObjectShape { id: String },

    #[error("array schema {id:?} has no items schema")]
    MissingArrayItems { id: String },

    /// `(type, format)` pair absent from the primitive table; `id` locates the node.
    #[error("unknown (type, format) for {id:?}: ({kind:?}, {format:?})")]
    UnknownPrimitive {
        id: String,
        kind: String,
        format: String,
    },

    /// Two declarations (original or synthesized) ended up with the same identifier.
    #[error("duplicate declaration name {id:?}")]
    DuplicateDeclaration { id: String },
}

impl GenError {
    pub fn unknown_primitive(
        id: impl Into<String>,
        kind: impl Into<String>,
        format: impl Into<String>,
    ) -> Self {
        Self::UnknownPrimitive {
            id: id.into(),
            kind: kind.into(),
            format: format.into(),
        }
    }
}

pub type Result<T, E = GenError> = std::result::Result<T, E>;
