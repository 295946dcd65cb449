//! Error view resolution
//!
//! Composes the matchers into one decision per fault: which view renders the
//! error, which status accompanies it, and what model the view receives.
//!
//! Decision order:
//! 1. Suffix matching on the request path. A suffix hit wins outright;
//!    path-based routing takes precedence over type-based routing.
//! 2. Closest-ancestor matching on the fault's lineage.
//! 3. The table's default view.
//! 4. Otherwise: no decision. The caller falls through to its own handling.
//!
//! Once a view is chosen, status and model are always computed. Resolution is
//! a pure function of (descriptor, shape, table): no I/O, no locks, no
//! failure path.

pub mod hierarchy;
pub mod payload;
pub mod status;
pub mod suffix;

pub use status::StatusSource;

use std::sync::Arc;

use arc_swap::ArcSwap;
use axum::http::StatusCode;
use serde_json::{Map, Value};

use crate::fault::FaultDescriptor;
use crate::shape::RequestShape;
use crate::table::PatternTable;
use crate::trace::{NoopTrace, ResolutionTrace, TraceEvent};

/// The outcome of one resolution: view, optional status, model.
///
/// Produced fresh per call; nothing is cached or shared.
#[derive(Debug, Clone)]
pub struct Resolution {
    /// Logical name of the view that should render the error.
    pub view_name: String,
    /// Status to apply, or `None` to leave the transport default.
    pub status: Option<StatusCode>,
    /// Attributes for the view, assembled by the payload builder.
    pub model: Map<String, Value>,
}

/// Shared resolver holding the current pattern table.
///
/// One instance serves every request concurrently. The table is swapped
/// atomically on [`ErrorViewResolver::reload`]; each resolution works on the
/// snapshot it loaded, so a reload never races an in-flight decision.
///
/// # Example
///
/// ```rust,ignore
/// let resolver = ErrorViewResolver::new(
///     PatternTable::builder()
///         .exception("NotFound", "notFound")
///         .status("notFound", StatusCode::NOT_FOUND)
///         .default_view("error")
///         .build(),
/// );
///
/// let resolution = resolver.resolve(&descriptor, &shape);
/// ```
pub struct ErrorViewResolver {
    table: ArcSwap<PatternTable>,
    trace: Arc<dyn ResolutionTrace>,
}

impl ErrorViewResolver {
    /// Create a resolver that does not trace its decisions.
    pub fn new(table: PatternTable) -> Self {
        Self::with_trace(table, Arc::new(NoopTrace))
    }

    /// Create a resolver reporting decisions to the given trace.
    pub fn with_trace(table: PatternTable, trace: Arc<dyn ResolutionTrace>) -> Self {
        Self {
            table: ArcSwap::from_pointee(table),
            trace,
        }
    }

    /// Snapshot of the current table.
    pub fn table(&self) -> Arc<PatternTable> {
        self.table.load_full()
    }

    /// Atomically replace the table. In-flight resolutions keep the snapshot
    /// they started with.
    pub fn reload(&self, table: PatternTable) {
        self.table.store(Arc::new(table));
    }

    /// Resolve one fault against the current table.
    pub fn resolve(
        &self,
        descriptor: &FaultDescriptor,
        shape: &RequestShape,
    ) -> Option<Resolution> {
        let table = self.table.load();
        resolve_with(descriptor, shape, &table, self.trace.as_ref())
    }
}

/// Pure resolution over an explicit table and trace.
///
/// [`ErrorViewResolver::resolve`] delegates here; callers that manage their
/// own table snapshots can use it directly.
pub fn resolve_with(
    descriptor: &FaultDescriptor,
    shape: &RequestShape,
    table: &PatternTable,
    trace: &dyn ResolutionTrace,
) -> Option<Resolution> {
    let view = determine_view(descriptor, shape, table, trace)?;

    let status = status::resolve_with_source(view, shape, table);
    if let Some((code, source)) = status {
        trace.record(TraceEvent::StatusResolved {
            status: code,
            source,
        });
    }

    let model = payload::build_model(descriptor, table.exception_attribute());

    Some(Resolution {
        view_name: view.to_string(),
        status: status.map(|(code, _)| code),
        model,
    })
}

fn determine_view<'t>(
    descriptor: &FaultDescriptor,
    shape: &RequestShape,
    table: &'t PatternTable,
    trace: &dyn ResolutionTrace,
) -> Option<&'t str> {
    if let Some((suffix, view)) = suffix::find_match(&shape.path, table) {
        trace.record(TraceEvent::SuffixMatched { suffix, view });
        return Some(view);
    }

    if let Some((pattern, view, depth)) = hierarchy::find_match(descriptor, table) {
        trace.record(TraceEvent::HierarchyMatched {
            pattern,
            view,
            depth,
        });
        return Some(view);
    }

    if let Some(view) = table.default_view() {
        trace.record(TraceEvent::DefaultView { view });
        return Some(view);
    }

    None
}
