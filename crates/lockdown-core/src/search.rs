//! Picker search boundary
//!
//! The admin picker is populated by a paginated free-text search over the
//! host's content items. The search service itself lives on the host; this
//! module builds the query it receives, applying the default type-kind
//! exclusions and the fixed visibility filter, and defines the trait the
//! host implements. In-flight de-duplication of autocomplete requests is a
//! client-side concern and does not appear here.

use crate::errors::Result;
use crate::extensions::{HostExtensions, COMMERCE_EXCLUDED_KINDS, DEFAULT_EXCLUDED_KINDS};
use crate::model::{ItemStatus, ItemSummary};

/// Fixed page size for picker autocomplete requests
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Visibility states the picker searches over
pub const PICKER_STATUSES: &[ItemStatus] = &[
    ItemStatus::Publish,
    ItemStatus::Pending,
    ItemStatus::Draft,
    ItemStatus::Future,
];

/// A picker search request
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    /// Free-text search term
    pub term: String,
    /// Pagination offset
    pub offset: usize,
    /// Page size
    pub per_page: usize,
    /// Statuses to include
    pub statuses: Vec<ItemStatus>,
    /// Item type kinds to exclude
    pub excluded_kinds: Vec<String>,
}

/// Build the picker search query for a term and offset
///
/// Applies the default excluded kinds, unions the commerce kinds when a
/// commerce extension is active, fixes the visibility filter to
/// [`PICKER_STATUSES`], then passes the whole query through the host's
/// `search_defaults` transform.
pub fn build_search_query<E: HostExtensions>(
    term: impl Into<String>,
    offset: usize,
    extensions: &E,
    commerce_active: bool,
) -> SearchQuery {
    let mut excluded: Vec<String> = DEFAULT_EXCLUDED_KINDS
        .iter()
        .map(|kind| kind.to_string())
        .collect();

    if commerce_active {
        excluded.extend(COMMERCE_EXCLUDED_KINDS.iter().map(|kind| kind.to_string()));
    }

    let query = SearchQuery {
        term: term.into(),
        offset,
        per_page: DEFAULT_PAGE_SIZE,
        statuses: PICKER_STATUSES.to_vec(),
        excluded_kinds: extensions.excluded_item_kinds(excluded),
    };

    extensions.search_defaults(query)
}

/// Host-implemented search over content items
pub trait ItemSearcher {
    /// Run a picker search, returning one page of candidate items
    ///
    /// # Errors
    ///
    /// Returns `LockdownError::Persistence` if the host's item storage
    /// cannot be queried.
    fn search(&self, query: &SearchQuery) -> Result<Vec<ItemSummary>>;
}
