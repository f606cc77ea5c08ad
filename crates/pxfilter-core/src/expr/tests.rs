use crate::expr::{ArrayDatum, BoolOp, Datum, Node, NullTestType};

#[test]
fn strip_relabel_only_unwraps_columns() {
    let column = Node::var(2, 1043);
    let relabeled = Node::relabel(25, column.clone());
    assert_eq!(relabeled.strip_relabel(), &column);

    let relabeled_const = Node::relabel(25, Node::constant(1043, Datum::text("x")));
    assert_eq!(relabeled_const.strip_relabel(), &relabeled_const);
}

#[test]
fn expr_type_reports_boolean_for_predicates() {
    assert_eq!(Node::var(1, 23).expr_type(), 23);
    assert_eq!(Node::relabel(25, Node::var(1, 1043)).expr_type(), 25);
    assert_eq!(
        Node::null_test(Node::var(1, 23), NullTestType::IsNull).expr_type(),
        16
    );
    assert_eq!(Node::and(vec![]).expr_type(), 16);
}

#[test]
fn bool_op_codes_round_trip_and_reject_unknown() {
    for op in [BoolOp::And, BoolOp::Or, BoolOp::Not] {
        assert_eq!(BoolOp::from_code(op.code()), Some(op));
    }

    assert_eq!(BoolOp::from_code(3), None);
    assert_eq!(BoolOp::from_code(7), None);
}

#[test]
fn nodes_deserialize_from_tagged_json() {
    let json = r#"{
        "node": "op_expr",
        "opno": 96,
        "args": [
            { "node": "var", "attno": 1, "vartype": 23 },
            { "node": "const", "consttype": 23, "value": { "int4": 5 } }
        ]
    }"#;

    let node: Node = serde_json::from_str(json).expect("op_expr json should parse");

    assert_eq!(
        node,
        Node::op(96, Node::var(1, 23), Node::constant(23, Datum::Int4(5)))
    );
}

#[test]
fn null_constant_deserializes_without_value() {
    let node: Node = serde_json::from_str(r#"{ "node": "const", "consttype": 1007 }"#)
        .expect("null const json should parse");

    assert_eq!(node, Node::null_constant(1007));
}

#[test]
fn array_datum_tracks_nulls() {
    let plain = ArrayDatum::from_values(23, [Datum::Int4(1), Datum::Int4(2)]);
    assert!(!plain.has_nulls());

    let holey = ArrayDatum::new(23, vec![Some(Datum::Int4(1)), None]);
    assert!(holey.has_nulls());
}
