//! Event sink boundary.
//!
//! `record` dispatches to the scoped override when one is installed and
//! to `TracingSink` otherwise.

use crate::error::Rejection;
use std::{cell::RefCell, rc::Rc};
use tracing::debug;

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<Rc<dyn PushdownSink>>> = const { RefCell::new(None) };
}

///
/// PushdownEvent
///

#[derive(Clone, Copy, Debug)]
pub enum PushdownEvent<'a> {
    FilterCompiled { filter: &'a str, items: usize },
    FilterRejected { rejection: &'a Rejection },
    ProjectionSent { columns: usize },
    ProjectionSkipped { reason: &'static str },
}

///
/// PushdownSink
///

pub trait PushdownSink {
    fn record(&self, event: PushdownEvent<'_>);
}

///
/// TracingSink
///
/// Default sink: forwards every event to `tracing`.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl PushdownSink for TracingSink {
    fn record(&self, event: PushdownEvent<'_>) {
        match event {
            PushdownEvent::FilterCompiled { filter, items } => {
                debug!(filter, items, "resulting filter string");
            }
            PushdownEvent::FilterRejected { rejection } => {
                debug!(%rejection, "query will not be optimized to use filter push-down");
            }
            PushdownEvent::ProjectionSent { columns } => {
                debug!(columns, "column projection pushed down");
            }
            PushdownEvent::ProjectionSkipped { reason } => {
                debug!(reason, "column projection not pushed down");
            }
        }
    }
}

pub(crate) fn record(event: PushdownEvent<'_>) {
    let sink = SINK_OVERRIDE.with(|cell| cell.borrow().clone());
    match sink {
        Some(sink) => sink.record(event),
        None => TracingSink.record(event),
    }
}

/// Run a closure with a temporary sink override on this thread.
pub fn with_sink<T>(sink: Rc<dyn PushdownSink>, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<Rc<dyn PushdownSink>>);

    impl Drop for Guard {
        fn drop(&mut self) {
            let previous = self.0.take();
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = previous;
            });
        }
    }

    let previous = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink));
    let _guard = Guard(previous);

    f()
}
