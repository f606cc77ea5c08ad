//! Observability: pushdown decision events and their sink.
//!
//! Compiler code never logs outcomes directly; every decision worth
//! reporting flows through `PushdownEvent` and `PushdownSink`.

pub(crate) mod sink;

pub use sink::{PushdownEvent, PushdownSink, TracingSink, with_sink};
