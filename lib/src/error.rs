//! Custom Error and Result types for this library

use thiserror::Error;

use crate::pager::PagerBuilderError;

/// Custom Error type for this library
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageBarError {
    /// The scroll position does not address any title of the provider
    #[error("position {position} is out of range for {count} titles")]
    PositionOutOfRange {
        /// the offending position
        position: i32,
        /// number of titles the provider reported
        count: usize,
    },

    /// Pager was asked to move to a page that does not exist
    #[error("page {page} does not exist, pager has {count} pages")]
    PageOutOfRange {
        /// the requested page
        page: usize,
        /// number of pages in the pager
        count: usize,
    },

    /// Pager was built with missing or invalid arguments
    #[error("failed to build pager: {_0}")]
    PagerBuild(String),

    /// Listener is already borrowed while the pager tries to notify it
    #[error("failed to notify page change listener: {_0}")]
    ListenerBorrow(String),
}

impl From<std::cell::BorrowMutError> for PageBarError {
    fn from(value: std::cell::BorrowMutError) -> Self {
        Self::ListenerBorrow(value.to_string())
    }
}

impl From<PagerBuilderError> for PageBarError {
    fn from(value: PagerBuilderError) -> Self {
        Self::PagerBuild(value.to_string())
    }
}

/// Custom Result type for this library. All Errors exposed by this library
/// will be returned as [`PageBarError`]
pub type Result<T> = std::result::Result<T, PageBarError>;
