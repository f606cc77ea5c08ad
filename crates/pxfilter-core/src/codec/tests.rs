use crate::{
    codec::{DecodeError, FilterOperand, FilterTree, FilterWriter, Token, TreeError, decode},
    expr::BoolOp,
    operator::PushdownOp,
};

#[test]
fn writer_emits_documented_layout() {
    let mut writer = FilterWriter::new();
    writer.attribute(1);
    writer.scalar(23, "1");
    writer.operator(PushdownOp::Gt);
    writer.attribute(3);
    writer.scalar(25, "third");
    writer.operator(PushdownOp::Eq);
    writer.logical(BoolOp::And);

    assert_eq!(writer.finish(), "a0c23s1d1o2a2c25s5dthirdo5l0");
}

#[test]
fn sizes_count_bytes_not_chars() {
    let mut writer = FilterWriter::new();
    writer.sized("héllo");

    assert_eq!(writer.finish(), "s6dhéllo");
}

#[test]
fn decode_splits_three_predicate_conjunction() {
    let tokens = decode("a0c23s1d1o2a1c23s1d5o1a2c25s5dthirdo5l0l0").expect("valid filter");

    assert_eq!(tokens.len(), 11);
    assert_eq!(tokens[0], Token::Attribute { index: 0 });
    assert_eq!(
        tokens[1],
        Token::ScalarConst {
            type_oid: 23,
            value: "1".to_string()
        }
    );
    assert_eq!(tokens[2], Token::Operator { op: PushdownOp::Gt });
    assert_eq!(
        tokens[7],
        Token::ScalarConst {
            type_oid: 25,
            value: "third".to_string()
        }
    );
    assert_eq!(tokens[10], Token::Logical { op: BoolOp::And });
}

#[test]
fn decode_reads_list_constants() {
    let tokens = decode("a0m1007s2d10s2d20s2d30o10").expect("valid list filter");

    assert_eq!(
        tokens,
        vec![
            Token::Attribute { index: 0 },
            Token::ListConst {
                type_oid: 1007,
                values: vec!["10".into(), "20".into(), "30".into()],
            },
            Token::Operator { op: PushdownOp::In },
        ]
    );
}

#[test]
fn decode_keeps_tag_bytes_inside_data() {
    let tokens = decode("a1c25s6dao1l0so5").expect("data may contain tag letters");

    assert_eq!(
        tokens[1],
        Token::ScalarConst {
            type_oid: 25,
            value: "ao1l0s".to_string()
        }
    );
}

#[test]
fn decode_reports_positions() {
    assert_eq!(decode(""), Err(DecodeError::Empty));
    assert_eq!(
        decode("a0c23s5d1o2"),
        Err(DecodeError::UnexpectedEnd {
            at: 11,
            expected: "constant data"
        })
    );
    assert_eq!(
        decode("a0x"),
        Err(DecodeError::UnexpectedByte {
            at: 2,
            found: 'x',
            expected: "one of a, c, m, o, l"
        })
    );
    assert_eq!(
        decode("a0c23s1d1o99"),
        Err(DecodeError::UnknownOperator { at: 9, code: 99 })
    );
    assert_eq!(
        decode("a0o8l3"),
        Err(DecodeError::UnknownLogical { at: 4, code: 3 })
    );
}

#[test]
fn tree_rebuilds_nested_logic() {
    let tree = FilterTree::parse("a0c23s1d1o2a1c23s1d5o1a2c25s5dthirdo5l0l0").expect("valid filter");

    assert_eq!(
        tree.to_string(),
        "(col0 > '1' AND (col1 < '5' AND col2 = 'third'))"
    );
}

#[test]
fn tree_handles_negation_and_null_tests() {
    let tree = FilterTree::parse("a1c25s3dfooo7l2a0o8l1").expect("valid filter");

    assert_eq!(tree.to_string(), "(NOT col1 LIKE 'foo' OR col0 IS NULL)");
}

#[test]
fn tree_remembers_constant_first_order() {
    let tree = FilterTree::parse("c23s2d10a4o1").expect("valid filter");

    assert_eq!(
        tree,
        FilterTree::Predicate {
            column: 4,
            op: PushdownOp::Lt,
            operand: Some(FilterOperand::Scalar {
                type_oid: 23,
                value: "10".to_string()
            }),
            constant_first: true,
        }
    );
    assert_eq!(tree.to_string(), "'10' < col4");
}

#[test]
fn tree_rejects_unbalanced_input() {
    assert!(matches!(
        FilterTree::parse("a0c23s1d1o5a1c23s1d2o5"),
        Err(TreeError::Unbalanced { count: 2 })
    ));
    assert!(matches!(
        FilterTree::parse("a0c23s1d1o5l0"),
        Err(TreeError::BadOperands { token: 3, .. })
    ));
    assert!(matches!(
        FilterTree::parse("a0a1o5"),
        Err(TreeError::BadOperands { token: 2, .. })
    ));
}

#[test]
fn tree_serializes_to_json() {
    let tree = FilterTree::parse("a0o9").expect("valid filter");
    let json = serde_json::to_value(&tree).expect("tree should serialize");

    assert_eq!(
        json,
        serde_json::json!({ "kind": "predicate", "column": 0, "op": "is_not_null" })
    );
}
