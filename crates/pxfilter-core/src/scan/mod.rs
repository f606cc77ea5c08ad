//! Module: scan
//! Responsibility: turn one external scan request into pushdown headers.
//! Does not own: filter compilation rules (see `filter`).
//! Boundary: honours the `PushdownConfig` switches; never performs I/O.

mod headers;

#[cfg(test)]
mod tests;

use crate::{
    catalog::TypeCatalog,
    error::InternalError,
    expr::{AttrNumber, Node},
    filter::serialize_filter_quals,
};
use pxfilter_config::PushdownConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use headers::{
    FILTER_HEADER, HAS_FILTER_HEADER, Header, PROJECTION_COUNT_HEADER, PROJECTION_INDEX_HEADER,
    RequestHeaders, filter_headers, projection_headers,
};

///
/// ScanRequest
///
/// Everything the compiler needs from the planner for one scan.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ScanRequest {
    /// Implicitly ANDed qualifiers.
    pub quals: Vec<Node>,

    /// Relation layout; projection headers need it.
    pub relation: Option<RelationDesc>,

    /// Target-list columns (1-based).
    pub projection: Option<Vec<AttrNumber>>,
}

///
/// RelationDesc
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct RelationDesc {
    pub columns: Vec<ColumnDesc>,
}

///
/// ColumnDesc
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ColumnDesc {
    pub name: String,
    #[serde(default)]
    pub dropped: bool,
}

///
/// ScanPushdown
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ScanPushdown {
    pub filter: Option<String>,
    pub headers: RequestHeaders,
}

/// Compile the filter and build the request headers for one scan.
pub fn compile_scan(
    request: &ScanRequest,
    config: &PushdownConfig,
    catalog: &dyn TypeCatalog,
) -> Result<ScanPushdown, InternalError> {
    let filter = if config.filter {
        serialize_filter_quals(&request.quals, catalog)?
    } else {
        debug!("filter pushdown disabled by configuration");
        None
    };

    let mut headers = RequestHeaders::default();
    if config.projection {
        match (&request.relation, &request.projection) {
            (Some(relation), Some(projected)) => {
                if let Some(projection) = projection_headers(relation, projected, &request.quals)
                {
                    headers.append(projection);
                }
            }
            _ => debug!("no relation or target list; projection headers omitted"),
        }
    }
    headers.append(filter_headers(filter.as_deref()));

    Ok(ScanPushdown { filter, headers })
}
