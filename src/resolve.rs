//! Schema node → [`TypeRef`].
//!
//! Resolution is a pure function of `(prefix, schema)`: anonymous nested structs are
//! not scheduled from here, they are handed back in [`Resolved::hoisted`] and the
//! caller decides what to do with them.
use crate::error::{GenError, Result};
use crate::ir::TypeRef;
use crate::naming::synthesize;
use crate::primitive;
use crate::schema::{KIND_ARRAY, KIND_OBJECT, Schema};

#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub ty: TypeRef,
    /// New root struct schemas discovered during resolution, in discovery order.
    pub hoisted: Vec<Schema>,
}

/// Resolve `schema`, found under the declaration (or synthesized path) `prefix`.
///
/// Precedence: `$ref`, then object (map shape before struct shape), then array,
/// then the primitive table.
pub fn resolve(prefix: &str, schema: Schema) -> Result<Resolved> {
    let mut hoisted = Vec::new();
    let ty = resolve_into(prefix, schema, &mut hoisted)?;
    Ok(Resolved { ty, hoisted })
}

fn resolve_into(prefix: &str, schema: Schema, hoisted: &mut Vec<Schema>) -> Result<TypeRef> {
    if schema.is_reference() {
        return Ok(TypeRef::Reference(schema.reference));
    }
    let Schema {
        id,
        kind,
        format,
        items,
        additional_properties,
        properties,
        ..
    } = schema;

    match kind.as_str() {
        KIND_OBJECT => {
            let name = synthesize(prefix, &id);
            if let Some(elem) = additional_properties {
                if properties.is_some() {
                    tracing::warn!(
                        schema = %name,
                        "schema has both additionalProperties and properties; treating it as a map"
                    );
                }
                let elem = resolve_into(&name, *elem, hoisted)?;
                return Ok(TypeRef::map_of(elem));
            }
            match properties {
                Some(properties) => {
                    tracing::debug!(schema = %name, fields = properties.len(), "hoisting nested object");
                    hoisted.push(Schema::synthesized(name.clone(), properties));
                    Ok(TypeRef::Named(name))
                }
                None => Err(GenError::UnresolvedObjectShape { id: name }),
            }
        }
        KIND_ARRAY => {
            let name = synthesize(prefix, &id);
            let Some(elem) = items else {
                return Err(GenError::MissingArrayItems { id: name });
            };
            let elem = resolve_into(&name, *elem, hoisted)?;
            Ok(TypeRef::sequence_of(elem))
        }
        _ => primitive::require(&synthesize(prefix, &id), &kind, &format).map(TypeRef::Primitive),
    }
}
