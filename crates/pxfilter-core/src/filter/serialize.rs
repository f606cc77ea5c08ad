use crate::{
    catalog::TypeCatalog,
    codec::FilterWriter,
    error::{InternalError, PushdownError, Rejection},
    expr::{BoolOp, Node},
    filter::{
        linearize::{ExpressionItem, ItemNode},
        translate::{FilterDescriptor, Operand, translate, translate_null_test},
    },
    obs::sink::{PushdownEvent, record},
};

/// Encode linearized items into one filter string.
///
/// Any rejected item discards the whole filter and yields `Ok(None)`;
/// the host then evaluates every qual itself.
pub fn serialize_items(
    items: &[ExpressionItem<'_>],
    catalog: &dyn TypeCatalog,
) -> Result<Option<String>, InternalError> {
    let mut writer = FilterWriter::new();

    for item in items {
        match encode_item(&mut writer, item, catalog) {
            Ok(()) => {}
            Err(PushdownError::Rejected(rejection)) => {
                record(PushdownEvent::FilterRejected {
                    rejection: &rejection,
                });
                return Ok(None);
            }
            Err(PushdownError::Internal(err)) => return Err(err),
        }
    }

    if writer.is_empty() {
        return Ok(None);
    }

    let filter = writer.finish();
    record(PushdownEvent::FilterCompiled {
        filter: &filter,
        items: items.len(),
    });

    Ok(Some(filter))
}

fn encode_item(
    writer: &mut FilterWriter,
    item: &ExpressionItem<'_>,
    catalog: &dyn TypeCatalog,
) -> Result<(), PushdownError> {
    match item.node {
        ItemNode::Logical { op, .. } => writer.logical(op),
        ItemNode::Predicate(Node::NullTest(test)) => {
            let filter = translate_null_test(test)?;
            writer.attribute(filter.attno);
            writer.operator(filter.op);
        }
        ItemNode::Predicate(Node::BoolExpr(_)) => {
            return Err(Rejection::UnsupportedNode {
                tag: "BoolExpr without arguments".to_string(),
            }
            .into());
        }
        ItemNode::Predicate(node) => {
            let descriptor = translate(node, catalog)?;
            encode_descriptor(writer, &descriptor)?;
        }
    }

    Ok(())
}

fn encode_descriptor(
    writer: &mut FilterWriter,
    descriptor: &FilterDescriptor,
) -> Result<(), InternalError> {
    match (&descriptor.left, &descriptor.right) {
        (Operand::Attribute(attno), Operand::ScalarConst { type_oid, text }) => {
            writer.attribute(*attno);
            writer.scalar(*type_oid, text);
        }
        (Operand::ScalarConst { type_oid, text }, Operand::Attribute(attno)) => {
            writer.scalar(*type_oid, text);
            writer.attribute(*attno);
        }
        (Operand::Attribute(attno), Operand::ListConst { type_oid, text }) => {
            writer.attribute(*attno);
            writer.list(*type_oid, text);
        }
        (Operand::ListConst { type_oid, text }, Operand::Attribute(attno)) => {
            writer.list(*type_oid, text);
            writer.attribute(*attno);
        }
        (left, right) => {
            return Err(InternalError::serialize_invariant(format!(
                "filter operands must be one column and one constant, found {left:?} and {right:?}"
            )));
        }
    }

    let (op, negated) = descriptor.op.wire_form();
    writer.operator(op);
    if negated {
        writer.logical(BoolOp::Not);
    }

    Ok(())
}
