//! Flatten a discovery-style schema document into top-level type declarations.
//!
//! Pipeline: decode ([`path_de`]) → seed the [`scheduler`] → emit each declaration
//! smallest-name-first ([`codegen`]), resolving every field ([`resolve`]) and feeding
//! hoisted nested structs back into the scheduler → render with a [`target`] dialect.
pub mod cli;
pub mod codegen;
pub mod error;
pub mod ir;
pub mod naming;
pub mod path_de;
pub mod primitive;
pub mod resolve;
pub mod scheduler;
pub mod schema;
pub mod target;

pub use codegen::{Codegen, generate};
pub use error::{GenError, Result};
pub use schema::{Document, Schema};
pub use target::{GoTarget, RustTarget, Target};

/// Decode a JSON document and generate declarations for it.
pub fn generate_from_slice(bytes: &[u8], target: &dyn Target) -> Result<String> {
    let doc: Document = path_de::from_slice_with_path(bytes)?;
    generate(doc, target)
}

pub fn generate_from_str(src: &str, target: &dyn Target) -> Result<String> {
    generate_from_slice(src.as_bytes(), target)
}
