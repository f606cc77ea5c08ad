use crate::{
    catalog::BuiltinCatalog,
    expr::{Datum, Node},
    obs::{PushdownEvent, PushdownSink, with_sink},
    scan::{
        ColumnDesc, FILTER_HEADER, HAS_FILTER_HEADER, PROJECTION_COUNT_HEADER,
        PROJECTION_INDEX_HEADER, RelationDesc, ScanRequest, compile_scan, filter_headers,
        projection_headers,
    },
};
use pxfilter_config::PushdownConfig;
use std::{cell::Cell, rc::Rc};

fn relation(columns: &[(&str, bool)]) -> RelationDesc {
    RelationDesc {
        columns: columns
            .iter()
            .map(|(name, dropped)| ColumnDesc {
                name: (*name).to_string(),
                dropped: *dropped,
            })
            .collect(),
    }
}

fn int4_eq(attno: i16, value: i32) -> Node {
    Node::op(96, Node::var(attno, 23), Node::constant(23, Datum::Int4(value)))
}

#[test]
fn filter_headers_flag_presence() {
    let present = filter_headers(Some("a0o8"));
    assert_eq!(present.get(FILTER_HEADER), Some("a0o8"));
    assert_eq!(present.get(HAS_FILTER_HEADER), Some("1"));

    let absent = filter_headers(None);
    assert_eq!(absent.get(FILTER_HEADER), None);
    assert_eq!(absent.get(HAS_FILTER_HEADER), Some("0"));
    assert_eq!(absent.len(), 1);
}

#[test]
fn projection_skips_dropped_columns() {
    let relation = relation(&[("a", false), ("gone", true), ("c", false), ("d", false)]);
    let quals = [int4_eq(4, 1)];

    let headers = projection_headers(&relation, &[3], &quals).expect("quals are supported");

    assert_eq!(headers.get_all(PROJECTION_INDEX_HEADER), ["1", "2"]);
    assert_eq!(headers.get(PROJECTION_COUNT_HEADER), Some("2"));
}

#[test]
fn projection_without_quals_uses_target_list_only() {
    let relation = relation(&[("a", false), ("b", false), ("c", false)]);

    let headers = projection_headers(&relation, &[2, 0, -1], &[]).expect("no quals");

    assert_eq!(headers.get_all(PROJECTION_INDEX_HEADER), ["1"]);
    assert_eq!(headers.get(PROJECTION_COUNT_HEADER), Some("1"));
}

#[test]
fn projection_with_no_columns_sends_nothing_but_is_not_skipped() {
    let relation = relation(&[("a", false)]);

    let headers = projection_headers(&relation, &[], &[]).expect("no quals");

    assert!(headers.is_empty());
}

#[test]
fn projection_is_skipped_for_unsupported_quals() {
    #[derive(Default)]
    struct CountSkips(Cell<usize>);

    impl PushdownSink for CountSkips {
        fn record(&self, event: PushdownEvent<'_>) {
            if matches!(event, PushdownEvent::ProjectionSkipped { .. }) {
                self.0.set(self.0.get() + 1);
            }
        }
    }

    let sink = Rc::new(CountSkips::default());
    let relation = relation(&[("a", false), ("b", false)]);
    let quals = [Node::other("SubPlan")];

    let headers = with_sink(sink.clone(), || projection_headers(&relation, &[1], &quals));

    assert_eq!(headers, None);
    assert_eq!(sink.0.get(), 1);
}

#[test]
fn compile_scan_orders_projection_before_filter() {
    let request = ScanRequest {
        quals: vec![int4_eq(2, 5)],
        relation: Some(relation(&[("a", false), ("b", false)])),
        projection: Some(vec![1]),
    };

    let pushdown = compile_scan(&request, &PushdownConfig::default(), &BuiltinCatalog)
        .expect("scan should compile");

    assert_eq!(pushdown.filter.as_deref(), Some("a1c23s1d5o5"));
    let names: Vec<&str> = pushdown.headers.iter().map(|header| header.name).collect();
    assert_eq!(
        names,
        [
            PROJECTION_INDEX_HEADER,
            PROJECTION_INDEX_HEADER,
            PROJECTION_COUNT_HEADER,
            FILTER_HEADER,
            HAS_FILTER_HEADER,
        ]
    );
}

#[test]
fn compile_scan_honours_disabled_switches() {
    let request = ScanRequest {
        quals: vec![int4_eq(1, 5)],
        relation: Some(relation(&[("a", false)])),
        projection: Some(vec![1]),
    };

    let pushdown = compile_scan(&request, &PushdownConfig::disabled(), &BuiltinCatalog)
        .expect("scan should compile");

    assert_eq!(pushdown.filter, None);
    assert_eq!(pushdown.headers.len(), 1);
    assert_eq!(pushdown.headers.get(HAS_FILTER_HEADER), Some("0"));
}

#[test]
fn scan_request_deserializes_with_defaults() {
    let request: ScanRequest = serde_json::from_str(
        r#"{
            "quals": [{ "node": "null_test", "arg": { "node": "var", "attno": 1, "vartype": 25 }, "nulltesttype": "is_null" }],
            "relation": { "columns": [{ "name": "a" }] }
        }"#,
    )
    .expect("request json should parse");

    assert_eq!(request.projection, None);
    assert!(!request.relation.expect("relation present").columns[0].dropped);

    let pushdown = compile_scan(
        &ScanRequest {
            projection: None,
            relation: None,
            quals: request.quals,
        },
        &PushdownConfig::default(),
        &BuiltinCatalog,
    )
    .expect("scan should compile");
    assert_eq!(pushdown.filter.as_deref(), Some("a0o8"));
}
