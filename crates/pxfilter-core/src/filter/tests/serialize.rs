use super::*;
use crate::{
    codec::{FilterOperand, FilterTree, Token, decode},
    error::ErrorClass,
    expr::{BoolOp, NullTestType},
    obs::with_sink,
    operator::PushdownOp,
};
use std::rc::Rc;

#[test]
fn implicit_and_of_three_predicates() {
    let quals = [
        int4_cmp(INT4_GT, 1, 1),
        int4_cmp(INT4_LT, 1, 5),
        Node::op(TEXT_EQ, text_col(3), text("third")),
    ];

    let filter = compile(&quals).expect("compile should not fail");

    assert_eq!(
        filter.as_deref(),
        Some("a0c23s1d1o2a0c23s1d5o1a2c25s5dthirdo5l0l0")
    );
}

#[test]
fn null_test_emits_column_and_operator_only() {
    let quals = [Node::null_test(int4_col(2), NullTestType::IsNull)];

    assert_eq!(compile(&quals).expect("compile").as_deref(), Some("a1o8"));

    let quals = [Node::null_test(
        Node::relabel(TEXT, Node::var(2, 1043)),
        NullTestType::IsNotNull,
    )];
    assert_eq!(compile(&quals).expect("compile").as_deref(), Some("a1o9"));
}

#[test]
fn empty_quals_mean_no_filter() {
    assert_eq!(compile(&[]).expect("compile"), None);
}

#[test]
fn unsupported_sibling_drops_whole_filter() {
    let quals = [
        int4_cmp(INT4_EQ, 1, 7),
        Node::op(
            506,
            Node::var(2, POINT),
            Node::constant(POINT, Datum::text("(1,2)")),
        ),
    ];

    assert_eq!(compile(&quals).expect("rejection is not an error"), None);
}

#[test]
fn rejection_is_reported_to_sink() {
    let sink = Rc::new(RecordingSink::default());
    let quals = [int4_cmp(INT4_EQ, 1, 7), Node::other("SubPlan")];

    let filter = with_sink(sink.clone(), || compile(&quals)).expect("compile");

    assert_eq!(filter, None);
    assert_eq!(
        sink.events.borrow().as_slice(),
        ["rejected:node SubPlan is not supported"]
    );
}

#[test]
fn compiled_filter_is_reported_to_sink() {
    let sink = Rc::new(RecordingSink::default());
    let quals = [int4_cmp(INT4_EQ, 1, 7)];

    with_sink(sink.clone(), || compile(&quals)).expect("compile");

    assert_eq!(sink.events.borrow().as_slice(), ["compiled:a0c23s1d7o5"]);
}

#[test]
fn third_column_encodes_index_two() {
    let filter = compile(&[int4_cmp(INT4_EQ, 3, 1)]).expect("compile");

    assert_eq!(filter.as_deref(), Some("a2c23s1d1o5"));
}

#[test]
fn not_like_is_like_followed_by_not() {
    let quals = [Node::op(TEXT_NOT_LIKE, text_col(1), text("abc"))];

    assert_eq!(
        compile(&quals).expect("compile").as_deref(),
        Some("a0c25s3dabco7l2")
    );
}

#[test]
fn not_in_is_in_followed_by_not() {
    let quals = [Node::scalar_array_op(
        INT4_NE,
        false,
        int4_col(1),
        int4_list(&[1, 2]),
    )];

    assert_eq!(
        compile(&quals).expect("compile").as_deref(),
        Some("a0m1007s1d1s1d2o10l2")
    );
}

#[test]
fn in_list_round_trips_through_decoder() {
    let quals = [Node::scalar_array_op(
        INT4_EQ,
        true,
        int4_col(1),
        int4_list(&[10, 20, 30]),
    )];
    let filter = compile(&quals).expect("compile").expect("IN is pushable");

    let tokens = decode(&filter).expect("compiled filter should decode");

    assert_eq!(
        tokens[1],
        Token::ListConst {
            type_oid: INT4_ARRAY,
            values: vec!["10".into(), "20".into(), "30".into()],
        }
    );
    assert_eq!(tokens[2], Token::Operator { op: PushdownOp::In });
}

#[test]
fn constant_first_keeps_written_order() {
    let quals = [Node::op(INT4_LT, int4(10), int4_col(5))];

    assert_eq!(
        compile(&quals).expect("compile").as_deref(),
        Some("c23s2d10a4o1")
    );
}

#[test]
fn null_scalar_constant_renders_marker() {
    let quals = [Node::op(INT4_EQ, int4_col(1), Node::null_constant(INT4))];

    assert_eq!(
        compile(&quals).expect("compile").as_deref(),
        Some("a0c23s4dNULLo5")
    );
}

#[test]
fn bare_boolean_column_compares_with_true() {
    let quals = [Node::var(4, BOOL)];

    assert_eq!(
        compile(&quals).expect("compile").as_deref(),
        Some("a3c16s4dtrueo5")
    );
}

#[test]
fn explicit_boolean_structure_is_postfix() {
    let quals = [Node::or(vec![
        int4_cmp(INT4_EQ, 1, 1),
        Node::not(Node::op(TEXT_LIKE, text_col(2), text("a%"))),
        Node::null_test(int4_col(3), NullTestType::IsNull),
    ])];

    let filter = compile(&quals).expect("compile").expect("pushable");

    assert_eq!(filter, "a0c23s1d1o5a1c25s2da%o7l2a2o8l1l1");
    assert_eq!(
        FilterTree::parse(&filter)
            .expect("valid filter")
            .to_string(),
        "(col0 = '1' OR (NOT col1 LIKE 'a%' OR col2 IS NULL))"
    );
}

#[test]
fn multibyte_text_is_measured_in_bytes() {
    let quals = [Node::op(TEXT_EQ, text_col(1), text("zürich"))];
    let filter = compile(&quals).expect("compile").expect("pushable");

    assert_eq!(filter, "a0c25s7dzüricho5");
    let tree = FilterTree::parse(&filter).expect("valid filter");
    assert!(matches!(
        tree,
        FilterTree::Predicate {
            operand: Some(FilterOperand::Scalar { ref value, .. }),
            ..
        } if value == "zürich"
    ));
}

#[test]
fn array_comparison_without_element_equality_is_fatal() {
    let json_list = Node::constant(
        JSON_ARRAY,
        Datum::Array(ArrayDatum::from_values(JSON, [Datum::text("{}")])),
    );
    let quals = [Node::op(ARRAY_EQ, Node::var(1, JSON_ARRAY), json_list)];

    let err = compile(&quals).expect_err("json has no equality operator");

    assert_eq!(err.class, ErrorClass::UndefinedFunction);
}

#[test]
fn array_comparison_renders_nulls() {
    let list = Node::constant(
        INT4_ARRAY,
        Datum::Array(ArrayDatum::new(INT4, vec![Some(Datum::Int4(1)), None])),
    );
    let quals = [Node::op(ARRAY_EQ, Node::var(1, INT4_ARRAY), list)];

    assert_eq!(
        compile(&quals).expect("compile").as_deref(),
        Some("a0m1007s1d1s4dNULLo5")
    );
}

#[test]
fn multi_argument_not_is_an_invariant_violation() {
    let quals = [Node::bool_expr(
        BoolOp::Not,
        vec![int4_cmp(INT4_EQ, 1, 1), int4_cmp(INT4_EQ, 2, 2)],
    )];

    let err = compile(&quals).expect_err("NOT takes one argument");

    assert_eq!(err.class, ErrorClass::InvariantViolation);
}

#[test]
fn empty_boolean_expression_is_rejected() {
    assert_eq!(compile(&[Node::and(vec![])]).expect("compile"), None);
}
