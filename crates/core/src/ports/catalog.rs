use crate::domain::{CatalogLayout, SortOption, StatusFilter};

/// Mutations the catalog screen accepts from commands
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogAction {
    /// Open or close the "new project" modal
    SetModalOpen(bool),

    /// Switch the catalog between grid and list layout
    SetLayout(CatalogLayout),

    /// Replace the free-text search term
    SetSearchTerm(String),

    /// Replace the status filter
    SetStatusFilter(StatusFilter),

    /// Replace the sort option
    SetSortOption(SortOption),
}

/// The set of operations catalog commands may invoke on host state.
///
/// Dispatch is fire-and-forget: the port never reports failure and the
/// command layer never awaits the effect. The host owns ordering and applies
/// actions under its single-writer UI discipline.
pub trait CatalogPort {
    fn dispatch(&self, action: CatalogAction);

    /// Best-effort request to focus the catalog's search input.
    /// Returns false when no search input exists; callers treat that as a
    /// silent no-op, not an error.
    fn focus_search_input(&self) -> bool;
}
