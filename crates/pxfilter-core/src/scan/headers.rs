use crate::{
    expr::{AttrNumber, Node},
    filter::{ExtractedAttributes, extract_attributes},
    obs::sink::{PushdownEvent, record},
    scan::RelationDesc,
};
use derive_more::Deref;
use serde::Serialize;
use std::collections::BTreeSet;

pub const FILTER_HEADER: &str = "X-GP-FILTER";
pub const HAS_FILTER_HEADER: &str = "X-GP-HAS-FILTER";
pub const PROJECTION_COUNT_HEADER: &str = "X-GP-ATTRS-PROJ";
pub const PROJECTION_INDEX_HEADER: &str = "X-GP-ATTRS-PROJ-IDX";

///
/// Header
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Header {
    pub name: &'static str,
    pub value: String,
}

///
/// RequestHeaders
///
/// Ordered header list; names may repeat.
///

#[derive(Clone, Debug, Default, Deref, Eq, PartialEq, Serialize)]
pub struct RequestHeaders(Vec<Header>);

impl RequestHeaders {
    pub fn push(&mut self, name: &'static str, value: impl Into<String>) {
        self.0.push(Header {
            name,
            value: value.into(),
        });
    }

    pub fn append(&mut self, other: Self) {
        self.0.extend(other.0);
    }

    /// First value for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|header| header.name == name)
            .map(|header| header.value.as_str())
    }

    /// Every value for `name`, in order.
    #[must_use]
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.0
            .iter()
            .filter(|header| header.name == name)
            .map(|header| header.value.as_str())
            .collect()
    }
}

/// Headers announcing the compiled filter, or its absence.
#[must_use]
pub fn filter_headers(filter: Option<&str>) -> RequestHeaders {
    let mut headers = RequestHeaders::default();
    match filter {
        Some(filter) => {
            headers.push(FILTER_HEADER, filter);
            headers.push(HAS_FILTER_HEADER, "1");
        }
        None => headers.push(HAS_FILTER_HEADER, "0"),
    }

    headers
}

/// Column projection headers, or `None` when projection must not be sent
/// because the quals read columns that cannot be determined.
///
/// Indices skip dropped columns: the remote side never sees them.
#[must_use]
pub fn projection_headers(
    relation: &RelationDesc,
    projected: &[AttrNumber],
    quals: &[Node],
) -> Option<RequestHeaders> {
    let qual_columns = match extract_attributes(quals) {
        ExtractedAttributes::Supported(columns) if !columns.is_empty() || quals.is_empty() => {
            columns
        }
        ExtractedAttributes::Supported(_) => {
            record(PushdownEvent::ProjectionSkipped {
                reason: "quals reference no columns",
            });
            return None;
        }
        ExtractedAttributes::Unsupported => {
            record(PushdownEvent::ProjectionSkipped {
                reason: "qual columns cannot be determined",
            });
            return None;
        }
    };

    let used: BTreeSet<usize> = projected
        .iter()
        .filter(|attno| **attno > 0)
        .map(|attno| usize::from(attno.unsigned_abs()) - 1)
        .chain(qual_columns)
        .collect();

    let mut headers = RequestHeaders::default();
    let mut dropped = 0usize;
    let mut count = 0usize;
    for (position, column) in relation.columns.iter().enumerate() {
        if column.dropped {
            dropped += 1;
            continue;
        }
        if used.contains(&position) {
            headers.push(PROJECTION_INDEX_HEADER, (position - dropped).to_string());
            count += 1;
        }
    }

    if count > 0 {
        headers.push(PROJECTION_COUNT_HEADER, count.to_string());
    }
    record(PushdownEvent::ProjectionSent { columns: count });

    Some(headers)
}
