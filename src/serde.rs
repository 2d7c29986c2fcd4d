//! JSON-deserializable schema description.
//!
//! These types mirror the declaration graph in [crate::schema] with plain
//! serde derives, so a schema can be shipped as a JSON file and converted into
//! the core declaration types before compiling.

use serde::{Deserialize, Serialize};

/// Top-level schema definition: structs and enums in source order.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct SchemaDef {
    #[serde(default)]
    pub structs: Vec<StructDef>,
    #[serde(default)]
    pub enums: Vec<EnumDef>,
}

/// Description of a single struct.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StructDef {
    pub name: String,
    #[serde(default)]
    pub namespace: String,
    /// Fields in declaration order; declaration order is layout order.
    pub fields: Vec<FieldDef>,
}

/// Description of a single field.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FieldDef {
    pub name: String,
    /// Underlying type name (`bool`, `i8`..`i64`, `u8`..`u64`).
    #[serde(rename = "type")]
    pub ty: String,
    /// Explicit bit width; omit for the type's full width.
    #[serde(default)]
    pub width: Option<usize>,
    #[serde(default)]
    pub doc: Option<String>,
}

/// Description of a single enum.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct EnumDef {
    pub name: String,
    #[serde(default)]
    pub namespace: String,
    /// Underlying integer type name.
    #[serde(rename = "type")]
    pub underlying_type: String,
    pub members: Vec<MemberDef>,
}

/// Description of a single enum member. The value, when present, is the
/// literal text exactly as written in schema source (decimal or `0x` hex,
/// optionally negated).
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MemberDef {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub doc: Option<String>,
}

impl From<SchemaDef> for crate::schema::SchemaDecl {
    fn from(value: SchemaDef) -> Self {
        crate::schema::SchemaDecl {
            structs: value.structs.into_iter().map(Into::into).collect(),
            enums: value.enums.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<StructDef> for crate::schema::StructDecl {
    fn from(value: StructDef) -> Self {
        crate::schema::StructDecl {
            name: value.name,
            namespace: value.namespace,
            fields: value.fields.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<FieldDef> for crate::schema::FieldDecl {
    fn from(value: FieldDef) -> Self {
        crate::schema::FieldDecl {
            name: value.name,
            ty: value.ty,
            width: value.width,
            doc: value.doc,
        }
    }
}

impl From<EnumDef> for crate::schema::EnumDecl {
    fn from(value: EnumDef) -> Self {
        crate::schema::EnumDecl {
            name: value.name,
            namespace: value.namespace,
            underlying_type: value.underlying_type,
            members: value.members.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<MemberDef> for crate::schema::EnumMemberDecl {
    fn from(value: MemberDef) -> Self {
        crate::schema::EnumMemberDecl {
            name: value.name,
            literal: value.value,
            doc: value.doc,
        }
    }
}
