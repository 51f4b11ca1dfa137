use std::fmt::{Error, Result, Write as _};

use super::{FieldDef, FieldType};

/// Format field definitions in a readable style:
/// scalar fields are rendered in one line, enumeration fields are expanded
/// into a block listing each member with its wire code.
pub fn format_field_defs(fields: impl AsRef<[FieldDef]>) -> std::result::Result<String, Error> {
    let mut out = String::new();

    for field in fields.as_ref() {
        format_field(field, &mut out)?;
    }

    Ok(out)
}

fn format_field(field: &FieldDef, out: &mut String) -> Result {
    match field.field_type {
        FieldType::Enum(def) => {
            let pad = " ".repeat(4);
            writeln!(out, "{}:", field.name)?;
            writeln!(out, "{pad}template: {}", field.template)?;
            writeln!(out, "{pad}type: enum {}", def.name)?;
            writeln!(out, "{pad}nullable: {}", field.nullable)?;
            writeln!(out, "{pad}members:")?;
            for member in def.members {
                writeln!(out, "{pad}{pad}{}: {}", member.name, member.wire_code())?;
            }
        }
        scalar => writeln!(
            out,
            "{}: {{ template: {}, type: {}, nullable: {} }}",
            field.name,
            field.template,
            scalar.type_name(),
            field.nullable
        )?,
    }
    Ok(())
}
