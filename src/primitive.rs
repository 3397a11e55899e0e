use crate::error::{GenError, Result};
use crate::ir::PrimitiveType;

/// `(type, format)` → primitive. Fixed; there is no fallback or coercion.
pub fn lookup(kind: &str, format: &str) -> Option<PrimitiveType> {
    let ty = match (kind, format) {
        ("boolean", "") => PrimitiveType::Bool,
        ("integer", "int32") => PrimitiveType::Int32,
        ("integer", "uint32") => PrimitiveType::Uint32,
        ("number", "double") => PrimitiveType::Float64,
        ("number", "float") => PrimitiveType::Float32,
        ("string", "") => PrimitiveType::String,
        ("string", "byte") => PrimitiveType::Bytes,
        // 64-bit integers travel as JSON strings
        ("string", "int64") => PrimitiveType::Int64,
        ("string", "uint64") => PrimitiveType::Uint64,
        _ => return None,
    };
    Some(ty)
}

/// Like [`lookup`], but a miss is an [`GenError::UnknownPrimitive`] naming the pair
/// and the schema node `id` it was found on.
pub fn require(id: &str, kind: &str, format: &str) -> Result<PrimitiveType> {
    lookup(kind, format).ok_or_else(|| GenError::unknown_primitive(id, kind, format))
}
