use crate::{
    catalog::TypeCatalog,
    codec::{FALSE_VALUE, FilterWriter, NULL_VALUE, TRUE_VALUE},
    error::{InternalError, PushdownError, Rejection},
    expr::Const,
};
use pxfilter_primitives::PgType;

///
/// NullElements
///
/// Whether NULL list elements may be written as the NULL marker.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NullElements {
    Include,
    Forbid,
}

/// Render a scalar constant to its wire text.
pub fn render_scalar(constant: &Const, catalog: &dyn TypeCatalog) -> Result<String, PushdownError> {
    let Some(datum) = &constant.value else {
        return Ok(NULL_VALUE.to_string());
    };

    let ty = PgType::from_oid(constant.consttype)
        .filter(|ty| !ty.is_array())
        .ok_or_else(|| {
            InternalError::render_invariant(format!(
                "scalar constant of type {} is not renderable",
                constant.consttype
            ))
        })?;

    let info = catalog.type_output_info(constant.consttype)?;
    let text = catalog.output_function_call(&info, datum)?;

    Ok(if ty == PgType::Bool {
        canonical_bool(&text).to_string()
    } else {
        text
    })
}

/// Render an array constant as consecutive `s<len>d<text>` elements.
pub fn render_list(
    constant: &Const,
    catalog: &dyn TypeCatalog,
    nulls: NullElements,
) -> Result<String, PushdownError> {
    let Some(datum) = &constant.value else {
        return Err(Rejection::NullListConstant.into());
    };

    let element = PgType::from_oid(constant.consttype)
        .and_then(PgType::element)
        .ok_or_else(|| {
            InternalError::render_invariant(format!(
                "list constant of type {} is not a supported array",
                constant.consttype
            ))
        })?;

    let contents = catalog.deconstruct_array(datum)?;
    if contents.element_type != element.oid() {
        return Err(InternalError::render_invariant(format!(
            "array of {} carries elements of type {}",
            element.name(),
            contents.element_type
        ))
        .into());
    }

    let info = catalog.type_output_info(contents.element_type)?;
    let mut writer = FilterWriter::new();
    for value in contents.elements {
        let text = match value {
            None if nulls == NullElements::Forbid => {
                return Err(Rejection::NullListElement.into());
            }
            None => NULL_VALUE.to_string(),
            Some(datum) => {
                let text = catalog.output_function_call(&info, datum)?;
                if element == PgType::Bool {
                    list_bool(&text).to_string()
                } else {
                    text
                }
            }
        };
        writer.sized(&text);
    }

    Ok(writer.finish())
}

fn canonical_bool(text: &str) -> &'static str {
    if text.starts_with('t') {
        TRUE_VALUE
    } else {
        FALSE_VALUE
    }
}

fn list_bool(text: &str) -> &'static str {
    match text {
        "t" => TRUE_VALUE,
        "f" => FALSE_VALUE,
        _ => NULL_VALUE,
    }
}
