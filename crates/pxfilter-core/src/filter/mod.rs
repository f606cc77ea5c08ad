//! Module: filter
//! Responsibility: compile planner quals into the postfix pushdown filter.
//! Does not own: the wire syntax (see `codec`) or operator oids (see `operator`).
//! Boundary: all-or-nothing. One unpushable qual means no filter at all,
//! and only invariant breaks or catalog failures surface as errors.

pub mod attrs;
pub mod classify;
pub mod linearize;
pub mod render;
pub mod serialize;
pub mod translate;

#[cfg(test)]
mod tests;

use crate::{catalog::TypeCatalog, error::InternalError, expr::Node};
use tracing::trace;

pub use attrs::{ExtractedAttributes, extract_attributes};
pub use classify::{OperandClass, classify};
pub use linearize::{ExpressionItem, ItemNode, Linearized, linearize, verify_postfix};
pub use render::{NullElements, render_list, render_scalar};
pub use serialize::serialize_items;
pub use translate::{
    FilterDescriptor, NullTestFilter, Operand, translate, translate_null_test,
};

/// Compile a scan's quals into filter text.
///
/// Returns `Ok(None)` for empty quals and whenever any qual is rejected.
pub fn serialize_filter_quals(
    quals: &[Node],
    catalog: &dyn TypeCatalog,
) -> Result<Option<String>, InternalError> {
    if quals.is_empty() {
        return Ok(None);
    }

    let linearized = linearize(quals, None);
    trace!(
        items = linearized.items.len(),
        groups = linearized.groups,
        "linearized quals"
    );
    verify_postfix(&linearized.items)?;

    serialize_items(&linearized.items, catalog)
}
