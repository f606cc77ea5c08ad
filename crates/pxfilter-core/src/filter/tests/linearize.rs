use super::*;
use crate::{
    expr::BoolOp,
    filter::{ItemNode, linearize, verify_postfix},
};

fn ops(quals: &[Node]) -> Vec<Option<BoolOp>> {
    linearize(quals, None)
        .items
        .iter()
        .map(|item| item.node.logical_op())
        .collect()
}

#[test]
fn top_level_quals_end_with_synthetic_ands() {
    let quals = [
        int4_cmp(INT4_EQ, 1, 1),
        int4_cmp(INT4_EQ, 2, 2),
        int4_cmp(INT4_EQ, 3, 3),
    ];
    let linearized = linearize(&quals, None);

    assert_eq!(linearized.groups, 3);
    assert_eq!(
        ops(&quals),
        [None, None, None, Some(BoolOp::And), Some(BoolOp::And)]
    );
    for item in &linearized.items[3..] {
        assert!(matches!(
            item.node,
            ItemNode::Logical {
                op: BoolOp::And,
                source: None
            }
        ));
    }
}

#[test]
fn single_qual_needs_no_combinator() {
    let quals = [int4_cmp(INT4_EQ, 1, 1)];

    assert_eq!(ops(&quals), [None]);
}

#[test]
fn explicit_and_contributes_group_count_minus_one() {
    let quals = [Node::and(vec![
        int4_cmp(INT4_EQ, 1, 1),
        int4_cmp(INT4_EQ, 2, 2),
        int4_cmp(INT4_EQ, 3, 3),
    ])];
    let linearized = linearize(&quals, None);

    assert_eq!(linearized.groups, 1);
    assert_eq!(
        ops(&quals),
        [None, None, None, Some(BoolOp::And), Some(BoolOp::And)]
    );
    assert!(matches!(
        linearized.items[3].node,
        ItemNode::Logical {
            source: Some(_),
            ..
        }
    ));
}

#[test]
fn nested_groups_count_once_each() {
    // (a OR b) AND NOT c, as two top-level quals
    let quals = [
        Node::or(vec![int4_cmp(INT4_EQ, 1, 1), int4_cmp(INT4_EQ, 2, 2)]),
        Node::not(int4_cmp(INT4_EQ, 3, 3)),
    ];

    assert_eq!(
        ops(&quals),
        [
            None,
            None,
            Some(BoolOp::Or),
            None,
            Some(BoolOp::Not),
            Some(BoolOp::And),
        ]
    );
    verify_postfix(&linearize(&quals, None).items).expect("well formed");
}

#[test]
fn unknown_nodes_stay_as_items() {
    let quals = [int4_cmp(INT4_EQ, 1, 1), Node::other("SubLink")];
    let linearized = linearize(&quals, None);

    assert_eq!(linearized.items.len(), 3);
    assert!(matches!(
        linearized.items[1].node,
        ItemNode::Predicate(Node::Other(_))
    ));
}

#[test]
fn items_record_their_parent() {
    let quals = [Node::or(vec![
        int4_cmp(INT4_EQ, 1, 1),
        int4_cmp(INT4_EQ, 2, 2),
    ])];
    let linearized = linearize(&quals, None);
    let Node::BoolExpr(or) = &quals[0] else {
        unreachable!("fixture is a BoolExpr");
    };

    assert_eq!(linearized.items[0].parent, Some(or));
    assert_eq!(linearized.items[2].parent, None);
}

#[test]
fn verify_postfix_flags_malformed_streams() {
    let quals = [Node::bool_expr(
        BoolOp::Not,
        vec![int4_cmp(INT4_EQ, 1, 1), int4_cmp(INT4_EQ, 2, 2)],
    )];

    assert!(verify_postfix(&linearize(&quals, None).items).is_err());
    assert!(verify_postfix(&[]).is_ok());
}
