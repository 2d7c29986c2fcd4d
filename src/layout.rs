//! Struct layout engine: turns an ordered field list into bit offsets.
//!
//! Layout is maximally dense. Fields occupy consecutive bit ranges in
//! declaration order with no padding and no alignment; a record's total width
//! may be any number of bits. Byte alignment, if a container needs it, is
//! layered above this engine.

use std::collections::BTreeMap;

use crate::{
    bits,
    errors::{ReadError, SchemaError},
    record::Value,
    schema::{StructDecl, qualify},
    types::Primitive,
};

/// One field with its layout resolved: where it starts, how wide it is, and
/// how its bits are interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLayout {
    pub name: String,
    /// First bit of this field relative to the record's first bit.
    pub offset_bits: usize,
    /// Width actually stored, which may be narrower than the type's full width.
    pub width_bits: usize,
    pub signed: bool,
    /// The declared underlying type, kept for the emission stage's result-type
    /// choice.
    pub ty: Primitive,
}

impl FieldLayout {
    /// Decodes this field from `data`, with the owning record starting at
    /// `record_start_bit`. Signed fields sign-extend from their stored width;
    /// `bool` fields collapse to `raw == 1`.
    pub fn read_at(&self, data: &[u8], record_start_bit: usize) -> Result<Value, ReadError> {
        let raw = bits::read_bits_at(data, record_start_bit + self.offset_bits, self.width_bits)?;

        Ok(match self.ty {
            Primitive::Bool => Value::Bool(raw == 1),
            _ if self.signed => Value::I64(bits::sign_extend(raw, self.width_bits)),
            _ => Value::U64(raw),
        })
    }
}

/// A compiled struct: fields with offsets filled in, in declaration order,
/// plus the total record width. This is the descriptor a code-emission stage
/// consumes; it is also directly usable for reading via [crate::record].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordLayout {
    pub name: String,
    pub namespace: String,
    /// Sum of all field widths. Records are packed back-to-back at this
    /// stride, with no inter-record padding.
    pub total_bits: usize,
    pub fields: Vec<FieldLayout>,
}

impl RecordLayout {
    /// Compiles a struct declaration. Single left-to-right pass: each field's
    /// offset is the running width of everything declared before it. Fields
    /// are never reordered.
    pub fn compile(decl: &StructDecl) -> Result<Self, SchemaError> {
        let record = decl.qualified_name();
        let mut fields: Vec<FieldLayout> = Vec::with_capacity(decl.fields.len());
        let mut total_bits = 0;

        for field in &decl.fields {
            if fields.iter().any(|f| f.name == field.name) {
                return Err(SchemaError::DuplicateFieldName {
                    record,
                    field: field.name.clone(),
                });
            }

            let ty = Primitive::from_name(&field.ty).ok_or_else(|| SchemaError::UnknownType {
                type_name: field.ty.clone(),
                owner: qualify(&record, &field.name),
            })?;

            let width_bits = field.width.unwrap_or_else(|| ty.bit_width());
            if width_bits == 0 || width_bits > ty.bit_width() {
                return Err(SchemaError::FieldWidthExceedsType {
                    record,
                    field: field.name.clone(),
                    width: width_bits,
                    type_bits: ty.bit_width(),
                });
            }

            fields.push(FieldLayout {
                name: field.name.clone(),
                offset_bits: total_bits,
                width_bits,
                signed: ty.is_signed(),
                ty,
            });

            total_bits += width_bits;
        }

        Ok(RecordLayout {
            name: decl.name.clone(),
            namespace: decl.namespace.clone(),
            total_bits,
            fields,
        })
    }

    pub fn qualified_name(&self) -> String {
        qualify(&self.namespace, &self.name)
    }

    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldLayout> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Decodes every field of the record starting at `start_bit` into a map.
    /// Fails if any field's bit range extends past the end of `data`.
    pub fn read_at(
        &self,
        data: &[u8],
        start_bit: usize,
    ) -> Result<BTreeMap<String, Value>, ReadError> {
        let mut map = BTreeMap::new();

        for field in &self.fields {
            map.insert(field.name.clone(), field.read_at(data, start_bit)?);
        }

        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldDecl;

    fn strukt(fields: Vec<FieldDecl>) -> StructDecl {
        StructDecl {
            name: "Test".to_string(),
            namespace: "n".to_string(),
            fields,
        }
    }

    #[test]
    fn test_offsets_are_cumulative() {
        let layout = RecordLayout::compile(&strukt(vec![
            FieldDecl::new("a", "u8"),
            FieldDecl::new("b", "i16"),
            FieldDecl::new("c", "bool"),
        ]))
        .unwrap();

        assert_eq!(layout.total_bits, 25);
        assert_eq!(layout.field("a").unwrap().offset_bits, 0);
        assert_eq!(layout.field("b").unwrap().offset_bits, 8);
        assert_eq!(layout.field("c").unwrap().offset_bits, 24);
    }

    #[test]
    fn test_offsets_follow_declaration_order() {
        // Same fields, different order: offsets are positional, never
        // size-sorted.
        let layout = RecordLayout::compile(&strukt(vec![
            FieldDecl::new("b", "i16"),
            FieldDecl::new("c", "bool"),
            FieldDecl::new("a", "u8"),
        ]))
        .unwrap();

        assert_eq!(layout.total_bits, 25);
        assert_eq!(layout.field("b").unwrap().offset_bits, 0);
        assert_eq!(layout.field("c").unwrap().offset_bits, 16);
        assert_eq!(layout.field("a").unwrap().offset_bits, 17);
    }

    #[test]
    fn test_explicit_narrow_widths() {
        let layout = RecordLayout::compile(&strukt(vec![
            FieldDecl::with_width("x", "u32", 3),
            FieldDecl::with_width("y", "u32", 5),
            FieldDecl::new("z", "u8"),
        ]))
        .unwrap();

        assert_eq!(layout.total_bits, 16);
        assert_eq!(layout.field("y").unwrap().offset_bits, 3);
        assert_eq!(layout.field("z").unwrap().offset_bits, 8);
    }

    #[test]
    fn test_signedness_carried_from_type() {
        let layout = RecordLayout::compile(&strukt(vec![
            FieldDecl::with_width("s", "i32", 3),
            FieldDecl::new("u", "u8"),
            FieldDecl::new("f", "bool"),
        ]))
        .unwrap();

        assert!(layout.field("s").unwrap().signed);
        assert!(!layout.field("u").unwrap().signed);
        assert!(!layout.field("f").unwrap().signed);
    }

    #[test]
    fn test_duplicate_field_name() {
        let err = RecordLayout::compile(&strukt(vec![
            FieldDecl::new("x", "u8"),
            FieldDecl::new("x", "u16"),
        ]))
        .unwrap_err();

        assert_eq!(
            err,
            SchemaError::DuplicateFieldName {
                record: "n.Test".to_string(),
                field: "x".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_type() {
        let err = RecordLayout::compile(&strukt(vec![FieldDecl::new("x", "varint")])).unwrap_err();

        assert_eq!(
            err,
            SchemaError::UnknownType {
                type_name: "varint".to_string(),
                owner: "n.Test.x".to_string(),
            }
        );
    }

    #[test]
    fn test_width_wider_than_type() {
        let err =
            RecordLayout::compile(&strukt(vec![FieldDecl::with_width("x", "u8", 9)])).unwrap_err();

        assert_eq!(
            err,
            SchemaError::FieldWidthExceedsType {
                record: "n.Test".to_string(),
                field: "x".to_string(),
                width: 9,
                type_bits: 8,
            }
        );
    }

    #[test]
    fn test_zero_width() {
        let err =
            RecordLayout::compile(&strukt(vec![FieldDecl::with_width("x", "u8", 0)])).unwrap_err();

        assert!(matches!(
            err,
            SchemaError::FieldWidthExceedsType { width: 0, .. }
        ));
    }

    #[test]
    fn test_read_at_decodes_all_fields() {
        let layout = RecordLayout::compile(&strukt(vec![
            FieldDecl::new("a", "u8"),
            FieldDecl::new("b", "i16"),
            FieldDecl::new("c", "bool"),
        ]))
        .unwrap();

        // a = 42; b = 0xFFFE two's complement = -2; c = bit 24 set.
        let data = [0x2A, 0xFE, 0xFF, 0x01];
        let map = layout.read_at(&data, 0).unwrap();

        assert_eq!(map.get("a"), Some(&Value::U64(42)));
        assert_eq!(map.get("b"), Some(&Value::I64(-2)));
        assert_eq!(map.get("c"), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_read_at_too_short() {
        let layout = RecordLayout::compile(&strukt(vec![FieldDecl::new("a", "u16")])).unwrap();
        assert_eq!(layout.read_at(&[0x00], 0).unwrap_err(), ReadError::OutOfBounds);
    }
}
