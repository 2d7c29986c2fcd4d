//! Parsed-schema object graph and whole-schema compilation.
//!
//! The structs and enums here are what an external schema parser hands to the
//! compiler: declarations in source order, with type names still unresolved.
//! [Schema::compile] turns them into [RecordLayout]s and [ResolvedEnum]s keyed
//! by qualified name.

use std::collections::BTreeMap;

use crate::{enums::ResolvedEnum, errors::SchemaError, layout::RecordLayout};

/// A single struct field as declared in schema source: type still a name,
/// width optional (defaults to the full width of the type), offset not yet
/// computed.
#[derive(Debug, Clone)]
pub struct FieldDecl {
    pub name: String,
    /// Underlying type name, resolved against the built-in catalog at compile time.
    pub ty: String,
    /// Explicit bit width for packed sub-type fields; `None` means the type's
    /// full width.
    pub width: Option<usize>,
    pub doc: Option<String>,
}

impl FieldDecl {
    pub fn new(name: &str, ty: &str) -> Self {
        FieldDecl {
            name: name.to_string(),
            ty: ty.to_string(),
            width: None,
            doc: None,
        }
    }

    pub fn with_width(name: &str, ty: &str, width: usize) -> Self {
        FieldDecl {
            name: name.to_string(),
            ty: ty.to_string(),
            width: Some(width),
            doc: None,
        }
    }
}

/// A struct declaration: named, namespaced, with fields in declaration order.
/// Declaration order is layout order.
#[derive(Debug, Clone)]
pub struct StructDecl {
    pub name: String,
    pub namespace: String,
    pub fields: Vec<FieldDecl>,
}

impl StructDecl {
    /// `namespace.Name`, or the bare name when the namespace is empty.
    pub fn qualified_name(&self) -> String {
        qualify(&self.namespace, &self.name)
    }
}

/// A single enum member: either an explicit literal (decimal or `0x` hex,
/// optionally negated) or none, in which case the value auto-increments.
#[derive(Debug, Clone)]
pub struct EnumMemberDecl {
    pub name: String,
    pub literal: Option<String>,
    pub doc: Option<String>,
}

impl EnumMemberDecl {
    pub fn new(name: &str) -> Self {
        EnumMemberDecl {
            name: name.to_string(),
            literal: None,
            doc: None,
        }
    }

    pub fn with_literal(name: &str, literal: &str) -> Self {
        EnumMemberDecl {
            name: name.to_string(),
            literal: Some(literal.to_string()),
            doc: None,
        }
    }
}

/// An enum declaration: underlying type still a name, members in declaration
/// order.
#[derive(Debug, Clone)]
pub struct EnumDecl {
    pub name: String,
    pub namespace: String,
    /// Name of the integer type member values are stored as.
    pub underlying_type: String,
    pub members: Vec<EnumMemberDecl>,
}

impl EnumDecl {
    pub fn qualified_name(&self) -> String {
        qualify(&self.namespace, &self.name)
    }
}

/// Everything a schema source file declares, in source order.
#[derive(Debug, Clone, Default)]
pub struct SchemaDecl {
    pub structs: Vec<StructDecl>,
    pub enums: Vec<EnumDecl>,
}

/// A fully compiled schema: record layouts and resolved enums keyed by
/// qualified name. Immutable once built.
#[derive(Debug, Clone)]
pub struct Schema {
    pub layouts: BTreeMap<String, RecordLayout>,
    pub enums: BTreeMap<String, ResolvedEnum>,
}

impl Schema {
    /// Compiles every declaration. Declarations are independent of each other;
    /// the first invalid one aborts compilation, so a schema either compiles
    /// fully or not at all.
    pub fn compile(decl: &SchemaDecl) -> Result<Self, SchemaError> {
        let mut layouts = BTreeMap::new();
        let mut enums = BTreeMap::new();

        for strukt in &decl.structs {
            let layout = RecordLayout::compile(strukt)?;
            layouts.insert(strukt.qualified_name(), layout);
        }

        for en in &decl.enums {
            let resolved = ResolvedEnum::resolve(en)?;
            enums.insert(en.qualified_name(), resolved);
        }

        Ok(Schema { layouts, enums })
    }
}

pub(crate) fn qualify(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", namespace, name)
    }
}
