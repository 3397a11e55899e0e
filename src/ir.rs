// Strongly-typed IR for codegen. No serde_json::Value and no target syntax here.

/// Concrete primitive types the table can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrimitiveType {
    Bool,
    Int32,
    Uint32,
    Float64,
    Float32,
    String,
    Bytes,
    Int64,
    Uint64,
}

/// What a schema node resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// `$ref` string, used verbatim.
    Reference(String),
    /// A declaration emitted by this run (original or synthesized).
    Named(String),
    Primitive(PrimitiveType),
    /// String-keyed mapping to the element type.
    Map(Box<TypeRef>),
    /// Homogeneous list of the element type.
    Sequence(Box<TypeRef>),
}

impl TypeRef {
    pub fn map_of(elem: TypeRef) -> Self {
        Self::Map(Box::new(elem))
    }

    pub fn sequence_of(elem: TypeRef) -> Self {
        Self::Sequence(Box::new(elem))
    }
}

/// One field of an emitted declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub raw_name: String,  // property key as it appears in the document
    pub name: String,      // exported form
    pub ty: TypeRef,
}
