//! Module: catalog
//! Responsibility: host type services the compiler calls into.
//! Does not own: operator classification (see `operator`).
//! Boundary: embedders implement `TypeCatalog` over their real catalog;
//! `BuiltinCatalog` covers the pushdown type set for tools and tests.

mod builtin;


use crate::{error::InternalError, expr::Datum};
use pxfilter_primitives::Oid;

pub use builtin::BuiltinCatalog;

///
/// TypeOutputInfo
///
/// Resolved text output routine for one type.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TypeOutputInfo {
    pub type_oid: Oid,
    pub output_proc: &'static str,
    pub is_varlena: bool,
}

///
/// ArrayContents
///
/// Deconstructed one-dimensional array: element type plus element values,
/// where `None` marks a NULL element.
///

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrayContents<'a> {
    pub element_type: Oid,
    pub elements: &'a [Option<Datum>],
}

impl ArrayContents<'_> {
    #[must_use]
    pub const fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

///
/// TypeCatalog
///
/// Host services used while rendering constants. Every method is a pure
/// lookup; failures are hard errors.
///

pub trait TypeCatalog {
    /// Look up the text output routine for `type_oid`.
    fn type_output_info(&self, type_oid: Oid) -> Result<TypeOutputInfo, InternalError>;

    /// Render one non-NULL datum with a previously resolved output routine.
    fn output_function_call(
        &self,
        info: &TypeOutputInfo,
        datum: &Datum,
    ) -> Result<String, InternalError>;

    /// Split an array datum into its element type and elements.
    fn deconstruct_array<'d>(&self, datum: &'d Datum) -> Result<ArrayContents<'d>, InternalError>;

    /// Return whether the host defines a default equality operator for the type.
    fn has_equality_operator(&self, type_oid: Oid) -> bool;
}
