//! The strategy seam shared by all package selectors.

use crate::{Catalog, Package, SelectionRequest};

/// Choose a package of tours for a request.
///
/// Selection is a pure function of the catalogue and the request. An unknown
/// region or unsatisfiable ceilings are not errors: implementations return
/// [`Package::empty`] (possibly carrying diagnostics) instead.
/// Selectors must be `Send + Sync` so one catalogue can serve concurrent
/// callers.
///
/// # Examples
///
/// ```rust
/// use tourpack_core::{Catalog, Package, SelectionRequest, Selector};
///
/// struct NothingSelector;
///
/// impl Selector for NothingSelector {
///     fn select(&self, _catalog: &Catalog, _request: &SelectionRequest) -> Package {
///         Package::empty()
///     }
/// }
///
/// let catalog = Catalog::build(Vec::new(), Vec::new(), Vec::new(), []).expect("empty catalogue");
/// let package = NothingSelector.select(&catalog, &SelectionRequest::new("R1"));
/// assert!(package.is_empty());
/// ```
pub trait Selector: Send + Sync {
    /// Select a package for `request` from `catalog`.
    fn select(&self, catalog: &Catalog, request: &SelectionRequest) -> Package;
}
