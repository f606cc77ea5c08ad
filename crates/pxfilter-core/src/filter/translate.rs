use crate::{
    catalog::TypeCatalog,
    codec::TRUE_VALUE,
    error::{InternalError, PushdownError, Rejection},
    expr::{AttrNumber, Const, Node, NullTest, NullTestType, OpExpr, ScalarArrayOpExpr},
    filter::{
        classify::{OperandClass, classify, user_column},
        render::{NullElements, render_list, render_scalar},
    },
    operator::{ARRAY_EQ_OP, ARRAY_NE_OP, PushdownOp, lookup_comparison, lookup_membership},
};
use pxfilter_primitives::{Oid, PgType, is_supported_type};
use tracing::trace;

///
/// Operand
///
/// One rendered side of a predicate.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Operand {
    Attribute(AttrNumber),
    ScalarConst { type_oid: Oid, text: String },
    ListConst { type_oid: Oid, text: String },
}

///
/// FilterDescriptor
///
/// A translated binary predicate: one column, one constant, one operator.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FilterDescriptor {
    pub left: Operand,
    pub right: Operand,
    pub op: PushdownOp,
}

///
/// NullTestFilter
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NullTestFilter {
    pub attno: AttrNumber,
    pub op: PushdownOp,
}

/// Translate one predicate node into a filter descriptor.
pub fn translate(node: &Node, catalog: &dyn TypeCatalog) -> Result<FilterDescriptor, PushdownError> {
    match node {
        Node::OpExpr(expr) => translate_comparison(expr, catalog),
        Node::ScalarArrayOpExpr(expr) => translate_membership(expr, catalog),
        Node::Var(_) | Node::RelabelType(_) => translate_bool_column(node),
        other => {
            trace!(tag = other.tag(), "node kind not supported for pushdown");
            Err(Rejection::UnsupportedNode {
                tag: other.tag().to_string(),
            }
            .into())
        }
    }
}

/// Translate `col IS [NOT] NULL`.
pub fn translate_null_test(test: &NullTest) -> Result<NullTestFilter, PushdownError> {
    let type_oid = test.arg.expr_type();
    if !is_supported_type(type_oid) {
        return Err(Rejection::UnsupportedType { type_oid }.into());
    }

    let Node::Var(var) = test.arg.strip_relabel() else {
        return Err(Rejection::NullTestOperand.into());
    };
    let attno = user_column(var)?;
    let op = match test.nulltesttype {
        NullTestType::IsNull => PushdownOp::IsNull,
        NullTestType::IsNotNull => PushdownOp::IsNotNull,
    };

    Ok(NullTestFilter { attno, op })
}

fn translate_comparison(
    expr: &OpExpr,
    catalog: &dyn TypeCatalog,
) -> Result<FilterDescriptor, PushdownError> {
    let [left, right] = expr.args.as_slice() else {
        return Err(Rejection::UnaryOperator { opno: expr.opno }.into());
    };

    let left = classify(left)?;
    let right = classify(right)?;
    check_array_element_equality(expr.opno, left, right, catalog)?;

    let entry = lookup_comparison(expr.opno).ok_or_else(|| {
        trace!(opno = expr.opno, "operator not supported for pushdown");
        Rejection::UnsupportedOperator { opno: expr.opno }
    })?;

    let (left, right) = render_pair(left, right, catalog, NullElements::Include)?;

    Ok(FilterDescriptor {
        left,
        right,
        op: entry.op,
    })
}

fn translate_membership(
    expr: &ScalarArrayOpExpr,
    catalog: &dyn TypeCatalog,
) -> Result<FilterDescriptor, PushdownError> {
    let [left, right] = expr.args.as_slice() else {
        return Err(Rejection::UnaryOperator { opno: expr.opno }.into());
    };

    let entry = lookup_membership(expr.opno, expr.use_or).ok_or(
        Rejection::UnsupportedMembershipOperator {
            opno: expr.opno,
            use_or: expr.use_or,
        },
    )?;

    let left = classify(left)?;
    let right = classify(right)?;
    if matches!(left, OperandClass::ScalarConst(_)) || matches!(right, OperandClass::ScalarConst(_))
    {
        return Err(Rejection::shape("membership needs an array constant").into());
    }

    let (left, right) = render_pair(left, right, catalog, NullElements::Forbid)?;

    Ok(FilterDescriptor {
        left,
        right,
        op: entry.op,
    })
}

/// A bare boolean column in a qualifier means `col = true`.
fn translate_bool_column(node: &Node) -> Result<FilterDescriptor, PushdownError> {
    let OperandClass::Attribute(attno) = classify(node)? else {
        return Err(Rejection::shape("bare qualifier is not a column").into());
    };

    let type_oid = node.expr_type();
    if type_oid != PgType::Bool.oid() {
        return Err(Rejection::UnsupportedType { type_oid }.into());
    }

    Ok(FilterDescriptor {
        left: Operand::Attribute(attno),
        right: Operand::ScalarConst {
            type_oid,
            text: TRUE_VALUE.to_string(),
        },
        op: PushdownOp::Eq,
    })
}

/// Generic array comparison compares element by element, so the element
/// type must define equality.
fn check_array_element_equality(
    opno: Oid,
    left: OperandClass<'_>,
    right: OperandClass<'_>,
    catalog: &dyn TypeCatalog,
) -> Result<(), PushdownError> {
    if opno != ARRAY_EQ_OP && opno != ARRAY_NE_OP {
        return Ok(());
    }

    let list = match (left, right) {
        (OperandClass::Attribute(_), OperandClass::ListConst(list))
        | (OperandClass::ListConst(list), OperandClass::Attribute(_)) => list,
        _ => return Ok(()),
    };

    let element = array_element_type(list)?;
    if catalog.has_equality_operator(element) {
        Ok(())
    } else {
        let name = PgType::from_oid(element).map_or("unknown", PgType::name);
        Err(InternalError::undefined_equality(name).into())
    }
}

fn array_element_type(list: &Const) -> Result<Oid, InternalError> {
    PgType::from_oid(list.consttype)
        .and_then(PgType::element)
        .map(PgType::oid)
        .ok_or_else(|| {
            InternalError::render_invariant(format!(
                "list constant of type {} is not a supported array",
                list.consttype
            ))
        })
}

fn render_pair(
    left: OperandClass<'_>,
    right: OperandClass<'_>,
    catalog: &dyn TypeCatalog,
    nulls: NullElements,
) -> Result<(Operand, Operand), PushdownError> {
    match (left.is_attribute(), right.is_attribute()) {
        (true, false) | (false, true) => {
            Ok((render(left, catalog, nulls)?, render(right, catalog, nulls)?))
        }
        (true, true) => Err(Rejection::shape("column compared with column").into()),
        (false, false) => Err(Rejection::shape("constant compared with constant").into()),
    }
}

fn render(
    operand: OperandClass<'_>,
    catalog: &dyn TypeCatalog,
    nulls: NullElements,
) -> Result<Operand, PushdownError> {
    Ok(match operand {
        OperandClass::Attribute(attno) => Operand::Attribute(attno),
        OperandClass::ScalarConst(constant) => Operand::ScalarConst {
            type_oid: constant.consttype,
            text: render_scalar(constant, catalog)?,
        },
        OperandClass::ListConst(constant) => Operand::ListConst {
            type_oid: constant.consttype,
            text: render_list(constant, catalog, nulls)?,
        },
    })
}
