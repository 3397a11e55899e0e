//! Output dialects. A target only decides spelling; ordering and naming are fixed upstream.
use crate::ir::{Field, PrimitiveType, TypeRef};
use crate::naming::field_ident;

pub trait Target {
    /// Namespace header for the whole document.
    fn header(&self, out: &mut String, name: &str);

    fn footer(&self, _out: &mut String, _name: &str) {}

    fn open_declaration(&self, out: &mut String, id: &str);

    fn field(&self, out: &mut String, field: &Field);

    fn close_declaration(&self, out: &mut String, id: &str);

    fn primitive(&self, ty: PrimitiveType) -> &'static str;

    fn map_of(&self, elem: &str) -> String;

    fn sequence_of(&self, elem: &str) -> String;

    fn render(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Reference(name) | TypeRef::Named(name) => name.clone(),
            TypeRef::Primitive(p) => self.primitive(*p).to_string(),
            TypeRef::Map(elem) => self.map_of(&self.render(elem)),
            TypeRef::Sequence(elem) => self.sequence_of(&self.render(elem)),
        }
    }
}

/// Go structs. Unformatted: `gofmt` is expected downstream.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoTarget;

impl Target for GoTarget {
    fn header(&self, out: &mut String, name: &str) {
        out.push_str(&format!("package {name}\n"));
    }

    fn open_declaration(&self, out: &mut String, id: &str) {
        out.push_str(&format!("type {id} struct{{\n"));
    }

    fn field(&self, out: &mut String, field: &Field) {
        out.push_str(&format!("\t{} {}\n", field_ident(&field.name), self.render(&field.ty)));
    }

    fn close_declaration(&self, out: &mut String, _id: &str) {
        out.push_str("}\n");
    }

    fn primitive(&self, ty: PrimitiveType) -> &'static str {
        match ty {
            PrimitiveType::Bool => "bool",
            PrimitiveType::Int32 => "int32",
            PrimitiveType::Uint32 => "uint32",
            PrimitiveType::Float64 => "float64",
            PrimitiveType::Float32 => "float32",
            PrimitiveType::String => "string",
            PrimitiveType::Bytes => "[]byte",
            PrimitiveType::Int64 => "int64",
            PrimitiveType::Uint64 => "uint64",
        }
    }

    fn map_of(&self, elem: &str) -> String {
        format!("map[string]{elem}")
    }

    fn sequence_of(&self, elem: &str) -> String {
        format!("[]{elem}")
    }
}

/// Serde-ready Rust structs inside a module named after the document.
///
/// Field names keep the exported spelling; the wire name is restored with `rename`.
/// Every field is optional, since payloads omit fields freely. Fields naming another
/// declaration are boxed so self- and mutually-recursive structs stay sized.
/// Unformatted: `rustfmt` is expected downstream.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustTarget;

impl Target for RustTarget {
    fn header(&self, out: &mut String, name: &str) {
        out.push_str(&format!("pub mod {name} {{\n"));
    }

    fn footer(&self, out: &mut String, _name: &str) {
        out.push_str("}\n");
    }

    fn open_declaration(&self, out: &mut String, id: &str) {
        out.push_str("#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]\n");
        out.push_str("#[allow(non_snake_case)]\n");
        out.push_str(&format!("pub struct {id} {{\n"));
    }

    fn field(&self, out: &mut String, field: &Field) {
        let ty = match &field.ty {
            TypeRef::Reference(_) | TypeRef::Named(_) => format!("Box<{}>", self.render(&field.ty)),
            other => self.render(other),
        };
        out.push_str(&format!(
            "#[serde(rename = {:?}, default, skip_serializing_if = \"Option::is_none\")]\n",
            field.raw_name
        ));
        out.push_str(&format!("pub {}: Option<{ty}>,\n", rust_field_ident(&field.name)));
    }

    fn close_declaration(&self, out: &mut String, _id: &str) {
        out.push_str("}\n");
    }

    fn primitive(&self, ty: PrimitiveType) -> &'static str {
        match ty {
            PrimitiveType::Bool => "bool",
            PrimitiveType::Int32 => "i32",
            PrimitiveType::Uint32 => "u32",
            PrimitiveType::Float64 => "f64",
            PrimitiveType::Float32 => "f32",
            PrimitiveType::String => "String",
            PrimitiveType::Bytes => "Vec<u8>",
            PrimitiveType::Int64 => "i64",
            PrimitiveType::Uint64 => "u64",
        }
    }

    fn map_of(&self, elem: &str) -> String {
        format!("std::collections::BTreeMap<String, {elem}>")
    }

    fn sequence_of(&self, elem: &str) -> String {
        format!("Vec<{elem}>")
    }
}

/// Keywords that survive [`crate::naming::export`] (capitalized) or appear verbatim
/// when the first character has no upper-case form.
const RUST_KEYWORDS: &[&str] = &[
    "Self", "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else",
    "enum", "extern", "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop",
    "match", "mod", "move", "mut", "pub", "ref", "return", "self", "static", "struct",
    "super", "trait", "true", "type", "unsafe", "use", "where", "while",
];

fn rust_field_ident(name: &str) -> String {
    let ident = field_ident(name);
    if RUST_KEYWORDS.contains(&ident.as_str()) {
        format!("{ident}_")
    } else {
        ident
    }
}
