//! Resolved command model.
//!
//! A [`CommandModel`] is a [`CommandDef`] after naming normalization: the
//! command name and every field's wire name are computed once here and every
//! emitter reads them from the model. Emitters never call the normalizer
//! themselves.

use crate::error::EmitError;
use crate::ir::{CommandDef, FieldType};
use cmdgen_core::COMMAND_NAME_KEY;
use cmdgen_core::naming::normalize;

/// A command with normalized names, ready for emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandModel {
    /// Type name as written in the schema (`ExampleCommand`).
    pub type_name: String,

    /// Normalized command name (`example_command`).
    pub command_name: String,

    pub docs: Option<String>,

    /// Fields in schema order.
    pub fields: Vec<FieldModel>,
}

/// A field with its normalized wire name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldModel {
    /// Field name as written in the schema.
    pub source_name: String,

    /// Normalized name used as the JSON key and base member name.
    pub wire_name: String,

    pub ty: FieldType,

    pub docs: Option<String>,
}

/// Scalar types in the supported set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    String,
    Integer,
    Boolean,
}

/// A field type inside the supported set: a scalar, possibly optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldShape {
    pub scalar: ScalarType,
    pub optional: bool,
}

impl CommandModel {
    /// Normalize a command definition.
    ///
    /// Fails on an identifier the normalizer rejects, on two fields that
    /// normalize to the same wire name, and on a field whose wire name is the
    /// reserved command name key. Field types are not checked here; emitters
    /// report unsupported types through [`FieldModel::shape`].
    pub fn resolve(def: &CommandDef) -> Result<Self, EmitError> {
        let command_name = normalize(&def.name)?;

        let mut fields: Vec<FieldModel> = Vec::with_capacity(def.fields.len());
        for field in &def.fields {
            let wire_name = normalize(&field.name)?;

            if wire_name == COMMAND_NAME_KEY {
                return Err(EmitError::CommandNameCollision {
                    field: field.name.clone(),
                });
            }

            if let Some(existing) = fields.iter().find(|f| f.wire_name == wire_name) {
                return Err(EmitError::DuplicateMember {
                    first: existing.source_name.clone(),
                    second: field.name.clone(),
                    wire_name,
                });
            }

            fields.push(FieldModel {
                source_name: field.name.clone(),
                wire_name,
                ty: field.ty.clone(),
                docs: field.docs.clone(),
            });
        }

        Ok(Self {
            type_name: def.name.clone(),
            command_name,
            docs: def.docs.clone(),
            fields,
        })
    }

    /// Normalized field names in schema order.
    pub fn members(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.wire_name.clone()).collect()
    }

    pub fn has_optional_fields(&self) -> bool {
        self.fields.iter().any(|f| f.ty.is_optional())
    }
}

impl FieldModel {
    /// Classify the field type, or fail with `UnsupportedType` for `language`.
    pub fn shape(&self, language: &str) -> Result<FieldShape, EmitError> {
        let unsupported = || EmitError::UnsupportedType {
            field: self.source_name.clone(),
            ty: self.ty.to_string(),
            language: language.to_string(),
        };

        let (inner, optional) = match &self.ty {
            FieldType::Optional(inner) => (inner.as_ref(), true),
            other => (other, false),
        };

        let scalar = match inner {
            FieldType::String => ScalarType::String,
            FieldType::Integer => ScalarType::Integer,
            FieldType::Boolean => ScalarType::Boolean,
            FieldType::Optional(_) | FieldType::Custom(_) => return Err(unsupported()),
        };

        Ok(FieldShape { scalar, optional })
    }
}
