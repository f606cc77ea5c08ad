use crate::{
    error::Rejection,
    expr::{FuncExpr, Node, Var},
};
use std::collections::BTreeSet;
use tracing::trace;

///
/// ExtractedAttributes
///
/// Columns the quals read, or `Unsupported` when some qual has a shape
/// whose columns cannot be determined. An empty `Supported` set is a
/// real answer ("no columns"), distinct from `Unsupported`.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ExtractedAttributes {
    Supported(BTreeSet<usize>),
    Unsupported,
}

impl ExtractedAttributes {
    #[must_use]
    pub const fn is_supported(&self) -> bool {
        matches!(self, Self::Supported(_))
    }

    #[must_use]
    pub const fn attributes(&self) -> Option<&BTreeSet<usize>> {
        match self {
            Self::Supported(attributes) => Some(attributes),
            Self::Unsupported => None,
        }
    }
}

/// Collect the zero-based indices of every user column the quals read.
#[must_use]
pub fn extract_attributes(quals: &[Node]) -> ExtractedAttributes {
    let mut attributes = BTreeSet::new();

    match collect_all(quals, &mut attributes) {
        Ok(()) => ExtractedAttributes::Supported(attributes),
        Err(rejection) => {
            trace!(%rejection, "qual attributes cannot be extracted");
            ExtractedAttributes::Unsupported
        }
    }
}

fn collect_all(nodes: &[Node], attributes: &mut BTreeSet<usize>) -> Result<(), Rejection> {
    nodes
        .iter()
        .try_for_each(|node| collect_node(node, attributes))
}

fn collect_node(node: &Node, attributes: &mut BTreeSet<usize>) -> Result<(), Rejection> {
    match node {
        Node::OpExpr(expr) => collect_binary(&expr.args, attributes),
        Node::ScalarArrayOpExpr(expr) => collect_binary(&expr.args, attributes),
        Node::BoolExpr(expr) => collect_all(&expr.args, attributes),
        Node::NullTest(test) => collect_column(&test.arg, attributes),
        Node::BooleanTest(test) => collect_column(&test.arg, attributes),
        Node::Var(_) | Node::RelabelType(_) => collect_column(node, attributes),
        other => Err(Rejection::UnsupportedNode {
            tag: other.tag().to_string(),
        }),
    }
}

/// A comparison contributes the columns of its non-constant side.
fn collect_binary(args: &[Node], attributes: &mut BTreeSet<usize>) -> Result<(), Rejection> {
    let operand = match args {
        [Node::Const(_), operand] | [operand, Node::Const(_)] => operand,
        _ => return Err(Rejection::shape("expected an expression and a constant")),
    };

    match operand {
        Node::FuncExpr(func) => collect_function(func, attributes),
        other => collect_column(other, attributes),
    }
}

/// Function arguments must be columns, nested functions or comparisons;
/// anything else, constants included, leaves the columns undetermined.
fn collect_function(func: &FuncExpr, attributes: &mut BTreeSet<usize>) -> Result<(), Rejection> {
    for arg in &func.args {
        match arg {
            Node::FuncExpr(inner) => collect_function(inner, attributes)?,
            Node::OpExpr(_) => collect_node(arg, attributes)?,
            other => collect_column(other, attributes)?,
        }
    }

    Ok(())
}

fn collect_column(node: &Node, attributes: &mut BTreeSet<usize>) -> Result<(), Rejection> {
    match node.strip_relabel() {
        Node::Var(var) => {
            insert_column(var, attributes);
            Ok(())
        }
        other => Err(Rejection::shape(format!(
            "{} where a column was expected",
            other.tag()
        ))),
    }
}

fn insert_column(var: &Var, attributes: &mut BTreeSet<usize>) {
    if var.attno > 0 {
        attributes.insert(usize::from(var.attno.unsigned_abs()) - 1);
    }
}
