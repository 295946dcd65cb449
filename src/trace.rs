//! Resolution tracing
//!
//! An injectable hook that observes match decisions. The resolver never logs
//! on its own; it reports structured events to whatever trace the hosting
//! application wires in.

use axum::http::StatusCode;

use crate::resolver::StatusSource;

/// One observed resolution decision.
#[derive(Debug, Clone, Copy)]
pub enum TraceEvent<'a> {
    /// A path suffix decided the view.
    SuffixMatched { suffix: &'a str, view: &'a str },
    /// An exception pattern decided the view at the given lineage depth.
    HierarchyMatched {
        pattern: &'a str,
        view: &'a str,
        depth: usize,
    },
    /// Neither matcher decided; the table default view was used.
    DefaultView { view: &'a str },
    /// A status code was derived for the chosen view.
    StatusResolved {
        status: StatusCode,
        source: StatusSource,
    },
}

/// Observer for resolution decisions.
pub trait ResolutionTrace: Send + Sync {
    fn record(&self, event: TraceEvent<'_>);
}

/// Trace that writes decisions to the `tracing` debug log.
#[derive(Clone, Default)]
pub struct LogTrace;

impl ResolutionTrace for LogTrace {
    fn record(&self, event: TraceEvent<'_>) {
        match event {
            TraceEvent::SuffixMatched { suffix, view } => {
                tracing::debug!("Suffix '.{}' matched, resolving to view '{}'", suffix, view);
            }
            TraceEvent::HierarchyMatched {
                pattern,
                view,
                depth,
            } => {
                tracing::debug!(
                    "Pattern '{}' matched at depth {}, resolving to view '{}'",
                    pattern,
                    depth,
                    view
                );
            }
            TraceEvent::DefaultView { view } => {
                tracing::debug!("No mapping matched, falling back to default view '{}'", view);
            }
            TraceEvent::StatusResolved { status, source } => {
                tracing::debug!("Status {} resolved from {}", status, source);
            }
        }
    }
}

/// Trace that discards everything.
#[derive(Clone, Default)]
pub struct NoopTrace;

impl ResolutionTrace for NoopTrace {
    fn record(&self, _event: TraceEvent<'_>) {}
}
