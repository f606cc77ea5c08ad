use crate::{
    codec::{DecodeError, Token, decode},
    expr::BoolOp,
    operator::PushdownOp,
};
use pxfilter_primitives::Oid;
use serde::Serialize;
use std::fmt;
use thiserror::Error as ThisError;

///
/// FilterTree
///
/// Expression tree rebuilt from postfix filter text.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FilterTree {
    Predicate {
        column: usize,
        op: PushdownOp,
        #[serde(skip_serializing_if = "Option::is_none")]
        operand: Option<FilterOperand>,
        /// The constant was written before the column.
        #[serde(skip_serializing_if = "std::ops::Not::not")]
        constant_first: bool,
    },
    And {
        left: Box<Self>,
        right: Box<Self>,
    },
    Or {
        left: Box<Self>,
        right: Box<Self>,
    },
    Not {
        child: Box<Self>,
    },
}

///
/// FilterOperand
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FilterOperand {
    Scalar { type_oid: Oid, value: String },
    List { type_oid: Oid, values: Vec<String> },
}

///
/// TreeError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum TreeError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("token {token}: {op} expects {expected}")]
    BadOperands {
        token: usize,
        op: String,
        expected: &'static str,
    },

    #[error("filter leaves {count} entries on the stack, expected one predicate")]
    Unbalanced { count: usize },
}

enum Slot {
    Column(usize),
    Constant(FilterOperand),
    Expr(FilterTree),
}

impl FilterTree {
    /// Decode filter text and rebuild its expression tree.
    pub fn parse(filter: &str) -> Result<Self, TreeError> {
        Self::from_tokens(decode(filter)?)
    }

    /// Evaluate postfix tokens on a stack.
    pub fn from_tokens(tokens: impl IntoIterator<Item = Token>) -> Result<Self, TreeError> {
        let mut stack = Vec::new();

        for (index, token) in tokens.into_iter().enumerate() {
            let slot = match token {
                Token::Attribute { index: column } => Slot::Column(column),
                Token::ScalarConst { type_oid, value } => {
                    Slot::Constant(FilterOperand::Scalar { type_oid, value })
                }
                Token::ListConst { type_oid, values } => {
                    Slot::Constant(FilterOperand::List { type_oid, values })
                }
                Token::Operator { op } => Slot::Expr(Self::predicate(&mut stack, index, op)?),
                Token::Logical { op } => Slot::Expr(Self::combine(&mut stack, index, op)?),
            };
            stack.push(slot);
        }

        match (stack.pop(), stack.is_empty()) {
            (Some(Slot::Expr(tree)), true) => Ok(tree),
            (last, _) => Err(TreeError::Unbalanced {
                count: stack.len() + usize::from(last.is_some()),
            }),
        }
    }

    fn predicate(stack: &mut Vec<Slot>, token: usize, op: PushdownOp) -> Result<Self, TreeError> {
        let bad = |expected| TreeError::BadOperands {
            token,
            op: op.to_string(),
            expected,
        };

        if op.is_null_test() {
            return match stack.pop() {
                Some(Slot::Column(column)) => Ok(Self::Predicate {
                    column,
                    op,
                    operand: None,
                    constant_first: false,
                }),
                _ => Err(bad("a column")),
            };
        }

        let (right, left) = (stack.pop(), stack.pop());
        match (left, right) {
            (Some(Slot::Column(column)), Some(Slot::Constant(operand))) => Ok(Self::Predicate {
                column,
                op,
                operand: Some(operand),
                constant_first: false,
            }),
            (Some(Slot::Constant(operand)), Some(Slot::Column(column))) => Ok(Self::Predicate {
                column,
                op,
                operand: Some(operand),
                constant_first: true,
            }),
            _ => Err(bad("a column and a constant")),
        }
    }

    fn combine(stack: &mut Vec<Slot>, token: usize, op: BoolOp) -> Result<Self, TreeError> {
        let mut pop = || match stack.pop() {
            Some(Slot::Expr(tree)) => Ok(Box::new(tree)),
            _ => Err(TreeError::BadOperands {
                token,
                op: format!("{op:?}").to_uppercase(),
                expected: "predicate operands",
            }),
        };

        match op {
            BoolOp::Not => Ok(Self::Not { child: pop()? }),
            BoolOp::And => {
                let right = pop()?;
                Ok(Self::And { left: pop()?, right })
            }
            BoolOp::Or => {
                let right = pop()?;
                Ok(Self::Or { left: pop()?, right })
            }
        }
    }
}

impl fmt::Display for FilterTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Predicate {
                column,
                op,
                operand,
                constant_first,
            } => match operand {
                None => write!(f, "col{column} {op}"),
                Some(operand) if *constant_first => write!(f, "{operand} {op} col{column}"),
                Some(operand) => write!(f, "col{column} {op} {operand}"),
            },
            Self::And { left, right } => write!(f, "({left} AND {right})"),
            Self::Or { left, right } => write!(f, "({left} OR {right})"),
            Self::Not { child } => write!(f, "NOT {child}"),
        }
    }
}

impl fmt::Display for FilterOperand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar { value, .. } => write!(f, "'{value}'"),
            Self::List { values, .. } => {
                f.write_str("(")?;
                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "'{value}'")?;
                }
                f.write_str(")")
            }
        }
    }
}
