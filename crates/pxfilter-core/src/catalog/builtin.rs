use crate::{
    catalog::{ArrayContents, TypeCatalog, TypeOutputInfo},
    error::InternalError,
    expr::Datum,
};
use pxfilter_primitives::{Oid, PgType, TypeFamily};

///
/// BuiltinCatalog
///
/// Self-contained catalog for the supported type set. Output matches the
/// host's default text forms (`t`/`f` booleans, shortest round-trip
/// floats, `\x` hex bytea, hyphenated UUIDs, `{...}` arrays).
///

#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    fn resolve(type_oid: Oid) -> Result<PgType, InternalError> {
        PgType::from_oid(type_oid).ok_or_else(|| {
            InternalError::catalog_unsupported(format!("cache lookup failed for type {type_oid}"))
        })
    }
}

impl TypeCatalog for BuiltinCatalog {
    fn type_output_info(&self, type_oid: Oid) -> Result<TypeOutputInfo, InternalError> {
        let ty = Self::resolve(type_oid)?;

        Ok(TypeOutputInfo {
            type_oid,
            output_proc: output_proc(ty),
            is_varlena: ty.is_varlena(),
        })
    }

    fn output_function_call(
        &self,
        info: &TypeOutputInfo,
        datum: &Datum,
    ) -> Result<String, InternalError> {
        let ty = Self::resolve(info.type_oid)?;

        output_datum(ty, datum)
    }

    fn deconstruct_array<'d>(&self, datum: &'d Datum) -> Result<ArrayContents<'d>, InternalError> {
        match datum {
            Datum::Array(array) => Ok(ArrayContents {
                element_type: array.element_type,
                elements: &array.elements,
            }),
            other => Err(InternalError::catalog_invariant(format!(
                "expected array datum, found {}",
                other.kind()
            ))),
        }
    }

    fn has_equality_operator(&self, type_oid: Oid) -> bool {
        PgType::from_oid(type_oid).is_some_and(PgType::has_equality)
    }
}

const fn output_proc(ty: PgType) -> &'static str {
    if ty.is_array() {
        return "array_out";
    }

    match ty {
        PgType::Bool => "boolout",
        PgType::Bytea => "byteaout",
        PgType::Char => "charout",
        PgType::Int2 => "int2out",
        PgType::Int4 => "int4out",
        PgType::Int8 => "int8out",
        PgType::Text => "textout",
        PgType::Json => "json_out",
        PgType::Float4 => "float4out",
        PgType::Float8 => "float8out",
        PgType::Bpchar => "bpcharout",
        PgType::Varchar => "varcharout",
        PgType::Date => "date_out",
        PgType::Time => "time_out",
        PgType::Timestamp => "timestamp_out",
        PgType::TimestampTz => "timestamptz_out",
        PgType::Interval => "interval_out",
        PgType::Numeric => "numeric_out",
        PgType::Uuid => "uuid_out",
        PgType::Jsonb => "jsonb_out",
        _ => "array_out",
    }
}

fn output_datum(ty: PgType, datum: &Datum) -> Result<String, InternalError> {
    let text = match (ty, datum) {
        (PgType::Bool, Datum::Bool(value)) => if *value { "t" } else { "f" }.to_string(),
        (PgType::Int2, Datum::Int2(value)) => value.to_string(),
        (PgType::Int4, Datum::Int4(value)) => value.to_string(),
        (PgType::Int8, Datum::Int8(value)) => value.to_string(),
        (PgType::Float4, Datum::Float4(value)) => float_out(*value, f32::is_nan, 6),
        (PgType::Float8, Datum::Float8(value)) => float_out(*value, f64::is_nan, 15),
        (PgType::Bytea, Datum::Bytes(bytes)) => bytea_out(bytes),
        (PgType::Uuid, Datum::Uuid(bytes)) => uuid_out(bytes),
        (ty, Datum::Text(text)) if accepts_text(ty) => text.clone(),
        (ty, Datum::Array(array)) if ty.is_array() => {
            let element = ty.element().ok_or_else(|| {
                InternalError::catalog_invariant(format!("array type {} has no element", ty.name()))
            })?;
            if array.element_type != element.oid() {
                return Err(InternalError::catalog_invariant(format!(
                    "array of {} carries elements of type {}",
                    element.name(),
                    array.element_type
                )));
            }

            array_out(element, &array.elements)?
        }
        (ty, other) => {
            return Err(InternalError::catalog_invariant(format!(
                "{} datum does not match type {}",
                other.kind(),
                ty.name()
            )));
        }
    };

    Ok(text)
}

const fn accepts_text(ty: PgType) -> bool {
    matches!(
        ty.family(),
        TypeFamily::Character | TypeFamily::Json | TypeFamily::Temporal
    ) || matches!(ty, PgType::Numeric)
}

/// Shortest round-trip float text, switching to exponent form outside
/// `[1e-4, 10^max_exponent)` the way the host's float output does.
fn float_out<F>(value: F, is_nan: fn(F) -> bool, max_exponent: i32) -> String
where
    F: Copy + std::fmt::Display + std::fmt::LowerExp + PartialOrd + Default,
{
    if is_nan(value) {
        return "NaN".to_string();
    }

    let scientific = format!("{value:e}");
    if scientific.ends_with("inf") {
        return if value < F::default() {
            "-Infinity".to_string()
        } else {
            "Infinity".to_string()
        };
    }

    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let is_zero = mantissa.trim_start_matches('-') == "0";

    if is_zero || (-4..max_exponent).contains(&exponent) {
        value.to_string()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
    }
}

fn bytea_out(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(2 + bytes.len() * 2);
    out.push_str("\\x");
    for byte in bytes {
        push_hex(&mut out, *byte);
    }

    out
}

fn uuid_out(bytes: &[u8; 16]) -> String {
    let mut out = String::with_capacity(36);
    for (index, byte) in bytes.iter().enumerate() {
        if matches!(index, 4 | 6 | 8 | 10) {
            out.push('-');
        }
        push_hex(&mut out, *byte);
    }

    out
}

/// Append one byte as two lowercase hex digits.
fn push_hex(out: &mut String, byte: u8) {
    for nibble in [byte >> 4, byte & 0x0f] {
        out.extend(char::from_digit(u32::from(nibble), 16));
    }
}

fn array_out(element: PgType, elements: &[Option<Datum>]) -> Result<String, InternalError> {
    let mut out = String::from("{");
    for (index, value) in elements.iter().enumerate() {
        if index > 0 {
            out.push(',');
        }
        match value {
            None => out.push_str("NULL"),
            Some(datum) => push_array_element(&mut out, &output_datum(element, datum)?),
        }
    }
    out.push('}');

    Ok(out)
}

fn push_array_element(out: &mut String, text: &str) {
    let needs_quotes = text.is_empty()
        || text.eq_ignore_ascii_case("NULL")
        || text
            .chars()
            .any(|c| matches!(c, '"' | '\\' | '{' | '}' | ',') || c.is_ascii_whitespace());

    if !needs_quotes {
        out.push_str(text);
        return;
    }

    out.push('"');
    for c in text.chars() {
        if matches!(c, '"' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
}
