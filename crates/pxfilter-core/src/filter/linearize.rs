use crate::{
    error::InternalError,
    expr::{BoolExpr, BoolOp, Node},
};
use std::iter::repeat_n;

///
/// ExpressionItem
///
/// One postfix slot: a predicate to translate or a boolean combinator.
/// `parent` is the nearest enclosing boolean expression, if any.
///

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExpressionItem<'a> {
    pub node: ItemNode<'a>,
    pub parent: Option<&'a BoolExpr>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ItemNode<'a> {
    Predicate(&'a Node),
    /// `source` is `None` for the implicit AND joining top-level quals.
    Logical {
        op: BoolOp,
        source: Option<&'a BoolExpr>,
    },
}

impl ItemNode<'_> {
    #[must_use]
    pub const fn logical_op(&self) -> Option<BoolOp> {
        match self {
            Self::Logical { op, .. } => Some(*op),
            Self::Predicate(_) => None,
        }
    }
}

///
/// Linearized
///
/// Postfix items for a list of expressions, plus how many first-level
/// groups those expressions produced.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Linearized<'a> {
    pub items: Vec<ExpressionItem<'a>>,
    pub groups: usize,
}

/// Flatten expressions into postfix order.
///
/// Operands come before their combinator. An AND/OR over `n` groups adds
/// `n - 1` combinators; a NOT adds one per group. At the top level the
/// quals are implicitly ANDed, so `len - 1` synthetic ANDs close the list.
#[must_use]
pub fn linearize<'a>(quals: &'a [Node], parent: Option<&'a BoolExpr>) -> Linearized<'a> {
    let mut out = Linearized::default();

    for node in quals {
        match node {
            Node::BoolExpr(expr) if !expr.args.is_empty() => {
                let inner = linearize(&expr.args, Some(expr));
                let combinators = match expr.boolop {
                    BoolOp::Not => inner.groups,
                    BoolOp::And | BoolOp::Or => inner.groups.saturating_sub(1),
                };

                out.items.extend(inner.items);
                out.items.extend(repeat_n(
                    ExpressionItem {
                        node: ItemNode::Logical {
                            op: expr.boolop,
                            source: Some(expr),
                        },
                        parent,
                    },
                    combinators,
                ));
            }
            // An argument-less BoolExpr stays a predicate and is rejected later.
            other => out.items.push(ExpressionItem {
                node: ItemNode::Predicate(other),
                parent,
            }),
        }
        out.groups += 1;
    }

    if parent.is_none() && quals.len() > 1 {
        out.items.extend(repeat_n(
            ExpressionItem {
                node: ItemNode::Logical {
                    op: BoolOp::And,
                    source: None,
                },
                parent: None,
            },
            quals.len() - 1,
        ));
    }

    out
}

/// Replay items as stack operations and require exactly one result.
pub fn verify_postfix(items: &[ExpressionItem<'_>]) -> Result<(), InternalError> {
    let mut depth = 0usize;

    for (index, item) in items.iter().enumerate() {
        match item.node.logical_op() {
            None => depth += 1,
            Some(op) => {
                let arity = op.arity();
                if depth < arity {
                    return Err(InternalError::linearize_invariant(format!(
                        "item {index}: {op:?} needs {arity} operand(s), found {depth}"
                    )));
                }
                depth -= arity - 1;
            }
        }
    }

    if depth == 1 || items.is_empty() {
        Ok(())
    } else {
        Err(InternalError::linearize_invariant(format!(
            "postfix stream leaves {depth} values, expected one"
        )))
    }
}
