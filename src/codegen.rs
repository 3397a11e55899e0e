//! Declaration emitter and the generation pass that drives it.
//!
//! The pass seeds a [`Scheduler`] with every root schema, then repeatedly pops the
//! smallest identifier and emits it. Emitting a declaration can hoist nested structs,
//! which go back into the scheduler; since a hoisted name always extends the name of
//! the declaration that discovered it, it sorts after it and the output stays ascending.
use crate::error::{GenError, Result};
use crate::ir::Field;
use crate::naming::export;
use crate::resolve::resolve;
use crate::scheduler::Scheduler;
use crate::schema::{Document, Schema};
use crate::target::Target;

pub struct Codegen<'t> {
    target: &'t dyn Target,
    out: String,
    declarations: usize,
}

impl<'t> Codegen<'t> {
    pub fn new(target: &'t dyn Target) -> Self {
        Self {
            target,
            out: String::new(),
            declarations: 0,
        }
    }

    /// Run the whole pass for `doc`. Stops at the first error.
    ///
    /// Declarations emitted before the failure stay in the buffer; callers wanting
    /// all-or-nothing output should use [`generate`].
    pub fn emit_document(&mut self, mut doc: Document) -> Result<()> {
        let name = std::mem::take(&mut doc.name);
        self.target.header(&mut self.out, &name);

        let mut scheduler = Scheduler::new();
        scheduler.seed(doc.into_roots())?;
        tracing::debug!(document = %name, roots = scheduler.len(), "seeded scheduler");

        while let Some(schema) = scheduler.pop_min() {
            for nested in self.emit_declaration(schema)? {
                scheduler.enqueue(nested)?;
            }
        }

        self.target.footer(&mut self.out, &name);
        tracing::debug!(document = %name, declarations = self.declarations, "generation finished");
        Ok(())
    }

    /// Emit one struct declaration with its fields sorted by property key.
    ///
    /// Returns the nested structs its fields hoisted. A declaration is appended to
    /// the buffer only once all of its fields resolved.
    pub fn emit_declaration(&mut self, schema: Schema) -> Result<Vec<Schema>> {
        if !schema.is_struct() {
            return Err(GenError::EmitterShape { id: schema.id });
        }
        let Schema { id, properties, .. } = schema;

        let mut props: Vec<(String, Schema)> = properties.unwrap_or_default().into_iter().collect();
        props.sort_by(|a, b| a.0.cmp(&b.0));

        let mut hoisted = Vec::new();
        let mut fields = Vec::with_capacity(props.len());
        for (key, mut prop) in props {
            prop.id = key.clone();
            let resolved = resolve(&id, prop)?;
            hoisted.extend(resolved.hoisted);
            fields.push(Field {
                name: export(&key),
                raw_name: key,
                ty: resolved.ty,
            });
        }

        let mut decl = String::new();
        self.target.open_declaration(&mut decl, &id);
        for field in &fields {
            self.target.field(&mut decl, field);
        }
        self.target.close_declaration(&mut decl, &id);
        self.out.push_str(&decl);
        self.declarations += 1;

        tracing::debug!(declaration = %id, fields = fields.len(), hoisted = hoisted.len(), "emitted");
        Ok(hoisted)
    }

    pub fn declarations(&self) -> usize {
        self.declarations
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

/// Generate the full text for `doc`, or nothing at all if any declaration fails.
pub fn generate(doc: Document, target: &dyn Target) -> Result<String> {
    let mut cg = Codegen::new(target);
    cg.emit_document(doc)?;
    Ok(cg.into_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::{GoTarget, RustTarget};
    use serde_json::{Value, json};

    fn doc(value: Value) -> Document {
        serde_json::from_value(value).unwrap()
    }

    fn go(value: Value) -> Result<String> {
        generate(doc(value), &GoTarget)
    }

    fn declaration_names(src: &str) -> Vec<&str> {
        src.lines()
            .filter_map(|line| line.strip_prefix("type "))
            .filter_map(|rest| rest.strip_suffix(" struct{"))
            .collect()
    }

    #[test]
    fn single_string_field() {
        let out = go(json!({
            "name": "p",
            "schemas": { "A": { "id": "A", "type": "object", "properties": { "b": { "type": "string" } } } }
        }))
        .unwrap();
        assert_eq!(out, "package p\ntype A struct{\n\tB string\n}\n");
    }

    #[test]
    fn empty_document_is_just_the_header() {
        assert_eq!(go(json!({ "name": "empty", "schemas": {} })).unwrap(), "package empty\n");
    }

    #[test]
    fn declarations_ascend_regardless_of_input_order() {
        let obj = json!({ "type": "object", "properties": { "x": { "type": "boolean" } } });
        let forward = go(json!({
            "name": "p",
            "schemas": { "Alpha": obj.clone(), "Beta": obj.clone(), "Gamma": obj.clone() }
        }))
        .unwrap();
        let reverse = go(json!({
            "name": "p",
            "schemas": { "Gamma": obj.clone(), "Beta": obj.clone(), "Alpha": obj }
        }))
        .unwrap();

        assert_eq!(forward, reverse);
        assert_eq!(declaration_names(&forward), vec!["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn fields_are_sorted_and_exported() {
        let out = go(json!({
            "name": "p",
            "schemas": { "Disk": { "type": "object", "properties": {
                "zone": { "$ref": "Zone" },
                "sizeGb": { "type": "string", "format": "int64" },
                "id": { "type": "string", "format": "uint64" }
            } } }
        }))
        .unwrap();
        assert_eq!(
            out,
            "package p\ntype Disk struct{\n\tId uint64\n\tSizeGb int64\n\tZone Zone\n}\n"
        );
    }

    #[test]
    fn inline_object_becomes_its_own_declaration() {
        let out = go(json!({
            "name": "p",
            "schemas": {
                "Instance": { "type": "object", "properties": {
                    "shieldedVm": { "type": "object", "properties": {
                        "enabled": { "type": "boolean" },
                        "policy": { "type": "object", "properties": { "mode": { "type": "string" } } }
                    } }
                } },
                "InstanceZ": { "type": "object", "properties": {} }
            }
        }))
        .unwrap();

        assert_eq!(
            declaration_names(&out),
            vec!["Instance", "InstanceShieldedVm", "InstanceShieldedVmPolicy", "InstanceZ"]
        );
        assert!(out.contains("\tShieldedVm InstanceShieldedVm\n"));
        assert!(out.contains("\tPolicy InstanceShieldedVmPolicy\n"));
    }

    #[test]
    fn maps_stay_inline() {
        let out = go(json!({
            "name": "p",
            "schemas": { "Disk": { "type": "object", "properties": {
                "labels": { "type": "object", "additionalProperties": { "type": "string" } },
                "scoped": { "type": "object", "additionalProperties": {
                    "type": "object", "properties": { "warning": { "type": "string" } }
                } }
            } } }
        }))
        .unwrap();
        assert_eq!(declaration_names(&out), vec!["Disk", "DiskScoped"]);
        assert!(out.contains("\tLabels map[string]string\n"));
        assert!(out.contains("\tScoped map[string]DiskScoped\n"));
    }

    #[test]
    fn arrays_of_primitives() {
        let out = go(json!({
            "name": "p",
            "schemas": { "Disk": { "type": "object", "properties": {
                "licenses": { "type": "array", "items": { "type": "string" } },
                "blobs": { "type": "array", "items": { "type": "string", "format": "byte" } }
            } } }
        }))
        .unwrap();
        assert_eq!(
            out,
            "package p\ntype Disk struct{\n\tBlobs [][]byte\n\tLicenses []string\n}\n"
        );
    }

    #[test]
    fn unknown_primitive_stops_the_pass() {
        let input = json!({
            "name": "p",
            "schemas": {
                "A": { "type": "object", "properties": { "ok": { "type": "boolean" } } },
                "B": { "type": "object", "properties": { "n": { "type": "integer", "format": "int16" } } },
                "C": { "type": "object", "properties": { "ok": { "type": "boolean" } } }
            }
        });

        let mut cg = Codegen::new(&GoTarget);
        let err = cg.emit_document(doc(input.clone())).unwrap_err();
        assert!(matches!(
            err,
            GenError::UnknownPrimitive { ref id, ref kind, ref format }
                if id == "BN" && kind == "integer" && format == "int16"
        ));
        assert_eq!(cg.declarations(), 1);
        let partial = cg.into_string();
        assert_eq!(declaration_names(&partial), vec!["A"]);

        assert!(go(input).is_err());
    }

    #[test]
    fn array_without_items_is_an_error() {
        let err = go(json!({
            "name": "p",
            "schemas": { "A": { "type": "object", "properties": { "xs": { "type": "array" } } } }
        }))
        .unwrap_err();
        assert!(matches!(err, GenError::MissingArrayItems { ref id } if id == "AXs"));
    }

    #[test]
    fn non_object_root_aborts_deterministically() {
        let input = json!({
            "name": "p",
            "schemas": {
                "Alpha": { "type": "object", "properties": {} },
                "Beta": { "type": "string" },
                "Gamma": { "type": "object", "properties": {} }
            }
        });
        for _ in 0..3 {
            let mut cg = Codegen::new(&GoTarget);
            let err = cg.emit_document(doc(input.clone())).unwrap_err();
            assert!(matches!(err, GenError::EmitterShape { ref id } if id == "Beta"));
            assert_eq!(declaration_names(&cg.into_string()), vec!["Alpha"]);
        }
    }

    #[test]
    fn map_shaped_root_is_rejected() {
        let err = go(json!({
            "name": "p",
            "schemas": { "Labels": { "type": "object", "additionalProperties": { "type": "string" } } }
        }))
        .unwrap_err();
        assert!(matches!(err, GenError::EmitterShape { ref id } if id == "Labels"));
    }

    #[test]
    fn synthesized_name_colliding_with_a_root_is_an_error() {
        let err = go(json!({
            "name": "p",
            "schemas": {
                "Foo": { "type": "object", "properties": {
                    "bar": { "type": "object", "properties": { "x": { "type": "string" } } }
                } },
                "FooBar": { "type": "object", "properties": {} }
            }
        }))
        .unwrap_err();
        assert!(matches!(err, GenError::DuplicateDeclaration { ref id } if id == "FooBar"));
    }

    #[test]
    fn rust_target_handles_self_reference_and_keyword_keys() {
        let out = generate(
            doc(json!({
                "name": "ast",
                "schemas": { "Expr": { "type": "object", "properties": {
                    "not": { "$ref": "Expr" },
                    "self": { "type": "string" }
                } } }
            })),
            &RustTarget,
        )
        .unwrap();
        assert!(out.contains("pub Not: Option<Box<Expr>>,\n"), "{out}");
        assert!(out.contains("#[serde(rename = \"self\", default, skip_serializing_if = \"Option::is_none\")]\npub Self_: Option<String>,\n"), "{out}");
        assert!(!out.contains("pub Self:"));
    }

    #[test]
    fn rust_target_wraps_the_document_in_a_module() {
        let out = generate(
            doc(json!({
                "name": "storage",
                "schemas": { "Bucket": { "type": "object", "properties": {
                    "tags": { "type": "array", "items": { "type": "string" } }
                } } }
            })),
            &RustTarget,
        )
        .unwrap();
        assert_eq!(
            out,
            "pub mod storage {\n\
             #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]\n\
             #[allow(non_snake_case)]\n\
             pub struct Bucket {\n\
             #[serde(rename = \"tags\", default, skip_serializing_if = \"Option::is_none\")]\n\
             pub Tags: Option<Vec<String>>,\n\
             }\n\
             }\n"
        );
    }
}
