//! Core compiler for pxfilter: turns planner qualifiers into the postfix
//! filter string and request headers sent to an external data service.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod catalog;
pub mod codec;
pub mod error;
pub mod expr;
pub mod filter;
pub mod obs;
pub mod operator;
pub mod scan;

///
/// Prelude
///
/// Domain vocabulary for embedders building requests.
///

pub mod prelude {
    pub use crate::{
        catalog::{BuiltinCatalog, TypeCatalog},
        expr::{ArrayDatum, AttrNumber, BoolOp, Datum, Node, NullTestType},
        filter::{ExtractedAttributes, extract_attributes, serialize_filter_quals},
        operator::PushdownOp,
        scan::{ScanPushdown, ScanRequest, compile_scan},
    };
}
