use crate::expr::AttrNumber;
use pxfilter_primitives::Oid;
use std::fmt;
use thiserror::Error as ThisError;

///
/// InternalError
///
/// Structured failure that aborts the whole scan setup.
/// Raised for invariant breaks and catalog failures, never for
/// "this predicate cannot be pushed down".
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("{message}")]
pub struct InternalError {
    pub class: ErrorClass,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl InternalError {
    pub fn new(class: ErrorClass, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            class,
            origin,
            message: message.into(),
        }
    }

    /// Construct a linearizer-origin invariant violation.
    pub(crate) fn linearize_invariant(message: impl Into<String>) -> Self {
        Self::new(
            ErrorClass::InvariantViolation,
            ErrorOrigin::Linearize,
            message.into(),
        )
    }

    /// Construct a renderer-origin invariant violation.
    pub(crate) fn render_invariant(message: impl Into<String>) -> Self {
        Self::new(
            ErrorClass::InvariantViolation,
            ErrorOrigin::Render,
            message.into(),
        )
    }

    /// Construct a serializer-origin invariant violation.
    pub(crate) fn serialize_invariant(message: impl Into<String>) -> Self {
        Self::new(
            ErrorClass::InvariantViolation,
            ErrorOrigin::Serialize,
            message.into(),
        )
    }

    /// Construct a catalog-origin invariant violation.
    pub(crate) fn catalog_invariant(message: impl Into<String>) -> Self {
        Self::new(
            ErrorClass::InvariantViolation,
            ErrorOrigin::Catalog,
            message.into(),
        )
    }

    /// Construct a catalog-origin unsupported error.
    pub(crate) fn catalog_unsupported(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::Unsupported, ErrorOrigin::Catalog, message.into())
    }

    /// Construct the missing-equality-operator error for an array element type.
    pub(crate) fn undefined_equality(type_name: &str) -> Self {
        Self::new(
            ErrorClass::UndefinedFunction,
            ErrorOrigin::Translate,
            format!("could not identify an equality operator for type {type_name}"),
        )
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}:{}: {}", self.origin, self.class, self.message)
    }
}

///
/// ErrorClass
/// Internal error taxonomy for runtime classification.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    InvariantViolation,
    UndefinedFunction,
    Unsupported,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InvariantViolation => "invariant_violation",
            Self::UndefinedFunction => "undefined_function",
            Self::Unsupported => "unsupported",
        };
        write!(f, "{label}")
    }
}

///
/// ErrorOrigin
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorOrigin {
    Catalog,
    Linearize,
    Render,
    Serialize,
    Translate,
}

impl fmt::Display for ErrorOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Catalog => "catalog",
            Self::Linearize => "linearize",
            Self::Render => "render",
            Self::Serialize => "serialize",
            Self::Translate => "translate",
        };
        write!(f, "{label}")
    }
}

///
/// Rejection
///
/// Reason a qualifier cannot be pushed down. Always recoverable: the
/// caller drops the whole filter and the host evaluates the predicate.
///

#[remain::sorted]
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum Rejection {
    #[error("operands are not one column and one constant: {detail}")]
    NotColumnAndConstant { detail: String },

    #[error("list constant is NULL")]
    NullListConstant,

    #[error("list constant contains a NULL element")]
    NullListElement,

    #[error("null test argument is not a user column")]
    NullTestOperand,

    #[error("system column {attno} cannot be pushed down")]
    SystemColumn { attno: AttrNumber },

    #[error("operator {opno} does not take exactly two operands")]
    UnaryOperator { opno: Oid },

    #[error("membership operator {opno} (use_or={use_or}) is not supported")]
    UnsupportedMembershipOperator { opno: Oid, use_or: bool },

    #[error("node {tag} is not supported")]
    UnsupportedNode { tag: String },

    #[error("operator {opno} is not supported")]
    UnsupportedOperator { opno: Oid },

    #[error("type {type_oid} is not supported")]
    UnsupportedType { type_oid: Oid },
}

impl Rejection {
    pub(crate) fn shape(detail: impl Into<String>) -> Self {
        Self::NotColumnAndConstant {
            detail: detail.into(),
        }
    }
}

///
/// PushdownError
///
/// Outcome of translating one qualifier: either a graceful rejection or a
/// hard failure that must propagate.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum PushdownError {
    #[error("filter rejected: {0}")]
    Rejected(#[from] Rejection),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_with_class_prefixes_origin_and_class() {
        let err = InternalError::undefined_equality("json");

        assert_eq!(
            err.display_with_class(),
            "translate:undefined_function: could not identify an equality operator for type json"
        );
    }

    #[test]
    fn rejection_converts_into_pushdown_error() {
        let err: PushdownError = Rejection::SystemColumn { attno: -1 }.into();

        assert!(matches!(
            err,
            PushdownError::Rejected(Rejection::SystemColumn { attno: -1 })
        ));
        assert_eq!(
            err.to_string(),
            "filter rejected: system column -1 cannot be pushed down"
        );
    }
}
