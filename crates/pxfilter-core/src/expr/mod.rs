//! Module: expr
//! Responsibility: the planner expression model consumed by the compiler.
//! Does not own: deciding what is pushable (see `filter`).
//! Boundary: nodes arrive fully resolved (types and operator oids set) and
//! are only ever read.

mod datum;

#[cfg(test)]
mod tests;

use pxfilter_primitives::{Oid, PgType};
use serde::{Deserialize, Serialize};

pub use datum::{ArrayDatum, Datum};

/// Column number within a relation. User columns start at 1; zero and
/// negative values name system columns.
pub type AttrNumber = i16;

const BOOL_OID: Oid = PgType::Bool.oid();

///
/// Node
///
/// One planner expression node. Kinds the compiler does not model arrive
/// as `Other` and are always rejected.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum Node {
    Var(Var),
    Const(Const),
    OpExpr(OpExpr),
    ScalarArrayOpExpr(ScalarArrayOpExpr),
    BoolExpr(BoolExpr),
    NullTest(NullTest),
    BooleanTest(BooleanTest),
    RelabelType(RelabelType),
    FuncExpr(FuncExpr),
    Other(OtherNode),
}

impl Node {
    /// Result type of the expression as the host computes it.
    #[must_use]
    pub fn expr_type(&self) -> Oid {
        match self {
            Self::Var(var) => var.vartype,
            Self::Const(constant) => constant.consttype,
            Self::OpExpr(expr) => expr.opresulttype,
            Self::ScalarArrayOpExpr(_)
            | Self::BoolExpr(_)
            | Self::NullTest(_)
            | Self::BooleanTest(_) => BOOL_OID,
            Self::RelabelType(relabel) => relabel.resulttype,
            Self::FuncExpr(func) => func.funcresulttype,
            Self::Other(other) => other.type_oid,
        }
    }

    /// Node kind label used in diagnostics.
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::Var(_) => "Var",
            Self::Const(_) => "Const",
            Self::OpExpr(_) => "OpExpr",
            Self::ScalarArrayOpExpr(_) => "ScalarArrayOpExpr",
            Self::BoolExpr(_) => "BoolExpr",
            Self::NullTest(_) => "NullTest",
            Self::BooleanTest(_) => "BooleanTest",
            Self::RelabelType(_) => "RelabelType",
            Self::FuncExpr(_) => "FuncExpr",
            Self::Other(other) => &other.tag,
        }
    }

    /// Strip one binary-compatible relabel wrapped directly around a column.
    #[must_use]
    pub fn strip_relabel(&self) -> &Self {
        match self {
            Self::RelabelType(relabel) if matches!(*relabel.arg, Self::Var(_)) => &relabel.arg,
            other => other,
        }
    }

    // ------------------------------------------------------------------
    // Builders
    // ------------------------------------------------------------------

    #[must_use]
    pub const fn var(attno: AttrNumber, vartype: Oid) -> Self {
        Self::Var(Var { attno, vartype })
    }

    #[must_use]
    pub const fn constant(consttype: Oid, value: Datum) -> Self {
        Self::Const(Const {
            consttype,
            value: Some(value),
        })
    }

    #[must_use]
    pub const fn null_constant(consttype: Oid) -> Self {
        Self::Const(Const {
            consttype,
            value: None,
        })
    }

    #[must_use]
    pub fn op(opno: Oid, left: Self, right: Self) -> Self {
        Self::OpExpr(OpExpr {
            opno,
            opresulttype: BOOL_OID,
            args: vec![left, right],
        })
    }

    #[must_use]
    pub fn scalar_array_op(opno: Oid, use_or: bool, left: Self, right: Self) -> Self {
        Self::ScalarArrayOpExpr(ScalarArrayOpExpr {
            opno,
            use_or,
            args: vec![left, right],
        })
    }

    #[must_use]
    pub const fn bool_expr(boolop: BoolOp, args: Vec<Self>) -> Self {
        Self::BoolExpr(BoolExpr { boolop, args })
    }

    #[must_use]
    pub const fn and(args: Vec<Self>) -> Self {
        Self::bool_expr(BoolOp::And, args)
    }

    #[must_use]
    pub const fn or(args: Vec<Self>) -> Self {
        Self::bool_expr(BoolOp::Or, args)
    }

    #[must_use]
    pub fn not(arg: Self) -> Self {
        Self::bool_expr(BoolOp::Not, vec![arg])
    }

    #[must_use]
    pub fn null_test(arg: Self, nulltesttype: NullTestType) -> Self {
        Self::NullTest(NullTest {
            arg: Box::new(arg),
            nulltesttype,
        })
    }

    #[must_use]
    pub fn relabel(resulttype: Oid, arg: Self) -> Self {
        Self::RelabelType(RelabelType {
            resulttype,
            arg: Box::new(arg),
        })
    }

    #[must_use]
    pub fn other(tag: impl Into<String>) -> Self {
        Self::Other(OtherNode {
            tag: tag.into(),
            type_oid: BOOL_OID,
        })
    }
}

///
/// Var
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Var {
    pub attno: AttrNumber,
    pub vartype: Oid,
}

///
/// Const
///
/// `value: None` is the SQL NULL constant.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Const {
    pub consttype: Oid,
    #[serde(default)]
    pub value: Option<Datum>,
}

impl Const {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        self.value.is_none()
    }
}

///
/// OpExpr
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct OpExpr {
    pub opno: Oid,
    #[serde(default = "bool_oid")]
    pub opresulttype: Oid,
    pub args: Vec<Node>,
}

///
/// ScalarArrayOpExpr
///
/// `x op ANY (array)` when `use_or`, `x op ALL (array)` otherwise.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ScalarArrayOpExpr {
    pub opno: Oid,
    pub use_or: bool,
    pub args: Vec<Node>,
}

///
/// BoolExpr
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct BoolExpr {
    pub boolop: BoolOp,
    pub args: Vec<Node>,
}

///
/// BoolOp
///
/// Boolean combinators with their wire codes.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum BoolOp {
    And = 0,
    Or = 1,
    Not = 2,
}

impl BoolOp {
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::And),
            1 => Some(Self::Or),
            2 => Some(Self::Not),
            _ => None,
        }
    }

    /// Number of operands the combinator consumes in postfix form.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::And | Self::Or => 2,
            Self::Not => 1,
        }
    }
}

///
/// NullTest
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct NullTest {
    pub arg: Box<Node>,
    pub nulltesttype: NullTestType,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NullTestType {
    IsNull,
    IsNotNull,
}

///
/// BooleanTest
///
/// `x IS [NOT] TRUE | FALSE | UNKNOWN`. Never pushed as a filter, but its
/// column still counts toward projection.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct BooleanTest {
    pub arg: Box<Node>,
    pub booltesttype: BoolTestType,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BoolTestType {
    IsTrue,
    IsNotTrue,
    IsFalse,
    IsNotFalse,
    IsUnknown,
    IsNotUnknown,
}

///
/// RelabelType
///
/// Binary-compatible cast such as `varchar -> text`.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct RelabelType {
    pub resulttype: Oid,
    pub arg: Box<Node>,
}

///
/// FuncExpr
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct FuncExpr {
    pub funcid: Oid,
    pub funcresulttype: Oid,
    pub args: Vec<Node>,
}

///
/// OtherNode
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct OtherNode {
    pub tag: String,
    #[serde(default)]
    pub type_oid: Oid,
}

const fn bool_oid() -> Oid {
    BOOL_OID
}
