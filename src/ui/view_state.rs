//! Load state shared by the list and detail views

use crate::core::errors::CatalogError;

/// `Idle → Loading → {Loaded | NoData | Failed}`, re-entered on navigation
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Loaded(T),
    /// The source answered successfully but without a payload
    NoData,
    /// Human-readable message of the caught failure
    Failed(String),
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> ViewState<T> {
    pub fn from_result(result: Result<Option<T>, CatalogError>) -> Self {
        match result {
            Ok(Some(value)) => Self::Loaded(value),
            Ok(None) => Self::NoData,
            Err(error) => Self::Failed(error.to_string()),
        }
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Proof that a load was started by a particular navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationTicket {
    generation: u64,
}

/// Orders navigations so a late response from a superseded one is dropped.
///
/// Every navigation takes a fresh ticket; only the holder of the newest
/// ticket may write the view state.
#[derive(Debug, Clone, Default)]
pub struct NavigationTracker {
    generation: u64,
}

impl NavigationTracker {
    pub fn begin(&mut self) -> NavigationTicket {
        self.generation += 1;
        NavigationTicket {
            generation: self.generation,
        }
    }

    pub fn is_current(&self, ticket: NavigationTicket) -> bool {
        ticket.generation == self.generation
    }
}
