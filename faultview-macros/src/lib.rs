use proc_macro::TokenStream;

mod fault;

/// Derive macro implementing the `Fault` trait from declared metadata
///
/// The type name becomes the matchable name at depth 0. The optional
/// `#[fault(...)]` attribute declares the rest:
///
/// - `ancestors("A", "B")`: supertype names from most to least specific,
///   excluding the type itself. Defaults to `("Error")`.
/// - `code = "..."`: a stable business error code.
///
/// The trait requires `std::error::Error`, so pair it with `thiserror`.
/// Faults that carry message parameters implement the trait by hand instead.
///
/// # Example
/// ```ignore
/// use faultview::prelude::*;
///
/// #[derive(Debug, thiserror::Error, Fault)]
/// #[error("order {id} not found")]
/// #[fault(code = "ORDER_NOT_FOUND", ancestors("NotFoundFault", "Error"))]
/// pub struct OrderNotFound {
///     pub id: u64,
/// }
/// ```
#[proc_macro_derive(Fault, attributes(fault))]
pub fn derive_fault(input: TokenStream) -> TokenStream {
    fault::derive_fault(input)
}
