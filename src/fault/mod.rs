//! Fault contract
//!
//! A [`Fault`] is an error that can be routed to an error view. Instead of
//! walking a runtime type hierarchy, every fault declares its own ancestry as
//! an ordered list of supertype names. The resolver matches patterns against
//! that declared chain, so a single short pattern can cover a whole family of
//! faults without enumerating them.

pub mod descriptor;

pub use descriptor::FaultDescriptor;

use std::error::Error;

/// An error that participates in view resolution.
///
/// Most implementations come from `#[derive(Fault)]`:
///
/// ```rust,ignore
/// #[derive(Debug, thiserror::Error, Fault)]
/// #[error("order {id} not found")]
/// #[fault(code = "ORDER_NOT_FOUND", ancestors("NotFoundFault", "Error"))]
/// struct OrderNotFound {
///     id: u64,
/// }
/// ```
///
/// Faults that carry message parameters implement the trait by hand and
/// override [`Fault::params`].
pub trait Fault: Error + Send + Sync + 'static {
    /// The declared type name, matched at depth 0 and exposed as `className`
    /// in resolved models.
    fn type_name(&self) -> &str;

    /// Supertype names from most to least specific, excluding the type
    /// itself. Conventionally ends at a broad root such as `"Error"`.
    fn ancestors(&self) -> &[&str] {
        &[]
    }

    /// Stable business error code, when the fault carries one.
    fn code(&self) -> Option<&str> {
        None
    }

    /// Parameters interpolated into localized messages looked up by
    /// [`Fault::code`].
    fn params(&self) -> Vec<String> {
        Vec::new()
    }
}
