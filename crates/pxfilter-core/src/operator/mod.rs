//! Module: operator
//! Responsibility: map host operator oids to pushdown operator codes.
//! Does not own: operand checks (see `filter::translate`).
//! Boundary: a lookup miss means "not pushable", never an error.

mod table;


use derive_more::Display;
use pxfilter_primitives::Oid;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, sync::LazyLock};

/// Generic `anyarray = anyarray` operator.
pub const ARRAY_EQ_OP: Oid = 1070;

/// Generic `anyarray <> anyarray` operator.
pub const ARRAY_NE_OP: Oid = 1071;

///
/// PushdownOp
///
/// Operator codes understood by the remote filter parser.
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum PushdownOp {
    #[display("<")]
    Lt = 1,
    #[display(">")]
    Gt = 2,
    #[display("<=")]
    Le = 3,
    #[display(">=")]
    Ge = 4,
    #[display("=")]
    Eq = 5,
    #[display("<>")]
    Ne = 6,
    #[display("LIKE")]
    Like = 7,
    #[display("IS NULL")]
    IsNull = 8,
    #[display("IS NOT NULL")]
    IsNotNull = 9,
    #[display("IN")]
    In = 10,
    #[display("NOT LIKE")]
    NotLike = 11,
    #[display("NOT IN")]
    NotIn = 12,
}

impl PushdownOp {
    pub const ALL: [Self; 12] = [
        Self::Lt,
        Self::Gt,
        Self::Le,
        Self::Ge,
        Self::Eq,
        Self::Ne,
        Self::Like,
        Self::IsNull,
        Self::IsNotNull,
        Self::In,
        Self::NotLike,
        Self::NotIn,
    ];

    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Lt),
            2 => Some(Self::Gt),
            3 => Some(Self::Le),
            4 => Some(Self::Ge),
            5 => Some(Self::Eq),
            6 => Some(Self::Ne),
            7 => Some(Self::Like),
            8 => Some(Self::IsNull),
            9 => Some(Self::IsNotNull),
            10 => Some(Self::In),
            11 => Some(Self::NotLike),
            12 => Some(Self::NotIn),
            _ => None,
        }
    }

    /// Operator actually written to the wire, plus whether a NOT follows it.
    /// The remote parser has no negated LIKE/IN codes.
    #[must_use]
    pub const fn wire_form(self) -> (Self, bool) {
        match self {
            Self::NotLike => (Self::Like, true),
            Self::NotIn => (Self::In, true),
            other => (other, false),
        }
    }

    /// Return whether the operator takes only a column.
    #[must_use]
    pub const fn is_null_test(self) -> bool {
        matches!(self, Self::IsNull | Self::IsNotNull)
    }
}

///
/// OperatorEntry
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OperatorEntry {
    pub opno: Oid,
    pub name: &'static str,
    pub op: PushdownOp,
}

///
/// MembershipEntry
///
/// One `op ANY/ALL (array)` form. `use_or` must match the expression.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MembershipEntry {
    pub opno: Oid,
    pub name: &'static str,
    pub op: PushdownOp,
    pub use_or: bool,
}

static COMPARISON_INDEX: LazyLock<HashMap<Oid, OperatorEntry>> = LazyLock::new(|| {
    table::COMPARISON_OPERATORS
        .iter()
        .map(|entry| (entry.opno, *entry))
        .collect()
});

static MEMBERSHIP_INDEX: LazyLock<HashMap<(Oid, bool), MembershipEntry>> = LazyLock::new(|| {
    table::MEMBERSHIP_OPERATORS
        .iter()
        .map(|entry| ((entry.opno, entry.use_or), *entry))
        .collect()
});

/// Resolve a binary operator expression's operator.
#[must_use]
pub fn lookup_comparison(opno: Oid) -> Option<OperatorEntry> {
    COMPARISON_INDEX.get(&opno).copied()
}

/// Resolve a scalar-array operator for the given ANY/ALL flavor.
#[must_use]
pub fn lookup_membership(opno: Oid, use_or: bool) -> Option<MembershipEntry> {
    MEMBERSHIP_INDEX.get(&(opno, use_or)).copied()
}

#[must_use]
pub fn comparison_operators() -> &'static [OperatorEntry] {
    table::COMPARISON_OPERATORS
}

#[must_use]
pub fn membership_operators() -> &'static [MembershipEntry] {
    table::MEMBERSHIP_OPERATORS
}
