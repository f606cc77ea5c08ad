use crate::{
    error::Rejection,
    expr::{AttrNumber, Const, Node, Var},
};
use pxfilter_primitives::{is_supported_array_type, is_supported_type};
use tracing::trace;

///
/// OperandClass
///
/// What one side of a predicate is, after relabel stripping.
///

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OperandClass<'a> {
    Attribute(AttrNumber),
    ScalarConst(&'a Const),
    ListConst(&'a Const),
}

impl OperandClass<'_> {
    #[must_use]
    pub const fn is_attribute(&self) -> bool {
        matches!(self, Self::Attribute(_))
    }
}

/// Classify one operand as a user column, a scalar constant, or a list
/// constant. The type checked is the operand's type as written, so a
/// relabelled column is judged by the type it is compared as.
pub fn classify(node: &Node) -> Result<OperandClass<'_>, Rejection> {
    let type_oid = node.expr_type();
    if !is_supported_type(type_oid) {
        trace!(type_oid, tag = node.tag(), "operand type not supported");
        return Err(Rejection::UnsupportedType { type_oid });
    }

    match node.strip_relabel() {
        Node::Var(var) => user_column(var).map(OperandClass::Attribute),
        Node::Const(constant) if is_supported_array_type(constant.consttype) => {
            if constant.is_null() {
                Err(Rejection::NullListConstant)
            } else {
                Ok(OperandClass::ListConst(constant))
            }
        }
        Node::Const(constant) => Ok(OperandClass::ScalarConst(constant)),
        other => Err(Rejection::shape(format!(
            "{} operand is neither a column nor a constant",
            other.tag()
        ))),
    }
}

/// Accept a column reference only when it names a user column.
pub(crate) const fn user_column(var: &Var) -> Result<AttrNumber, Rejection> {
    if var.attno > 0 {
        Ok(var.attno)
    } else {
        Err(Rejection::SystemColumn { attno: var.attno })
    }
}
