//! Paged data provider interface for lists backed by remote collections.
//!
//! When a list shows only a window into a larger collection, navigation past
//! the edge of the locally held page asks a [`DataProvider`] for the adjacent
//! page instead of stopping. The provider owns paging and caching; the list
//! only issues requests and applies the resulting pages.
//!
//! Requests are asynchronous: [`fetch_cmd`] wraps a provider call in a
//! `bubbletea_rs::Cmd` that resolves to a [`PageMsg`] on success or a
//! [`PageErrorMsg`] on failure. The widget's `update` routes these messages
//! back by instance id. At most one request is outstanding at a time: the
//! widget consults [`DataProvider::blocked`] before issuing a new one and
//! silently drops the navigation input when a request is already in flight.

use crate::list::Item;
use bubbletea_rs::{Cmd, Msg};
use std::fmt::{self, Display};
use std::sync::Arc;
use std::time::Duration;

/// The kind of page requested from a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    /// Initial load of the first page.
    Init,
    /// One step past the start of the current page.
    Backward,
    /// One step past the end of the current page.
    Forward,
    /// The previous full page.
    PageBackward,
    /// The next full page.
    PageForward,
    /// The first page of the collection.
    Home,
    /// The last page of the collection.
    End,
}

/// A page of items delivered by a provider.
#[derive(Debug, Clone)]
pub struct Page<V> {
    /// The items of this page, already in item shape.
    pub items: Vec<Item<V>>,
    /// Which position within the page should receive focus, if the
    /// provider has an opinion. `None` lets the list pick a default
    /// based on the request kind.
    pub pos: Option<usize>,
}

impl<V> Page<V> {
    /// Creates a page with no focus hint.
    pub fn new(items: Vec<Item<V>>) -> Self {
        Self { items, pos: None }
    }

    /// Creates a page from raw values with no focus hint.
    pub fn from_values(values: impl IntoIterator<Item = V>) -> Self {
        Self {
            items: values.into_iter().map(Item::new).collect(),
            pos: None,
        }
    }

    /// Sets the focus hint (builder pattern).
    pub fn with_pos(mut self, pos: usize) -> Self {
        self.pos = Some(pos);
        self
    }
}

/// Error reported by a provider when a page request fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderError {
    /// Human-readable failure description.
    pub message: String,
}

impl ProviderError {
    /// Creates an error from any displayable message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "provider error: {}", self.message)
    }
}

impl std::error::Error for ProviderError {}

/// External paged data source queried when local data is exhausted at an
/// edge.
///
/// Implementations are shared with the widget via `Arc` and stay owned by
/// the host; the list never mutates a provider beyond calling [`get`].
/// `get` runs inside the command future, so blocking I/O is acceptable
/// there. Implementations performing real asynchronous work should flip
/// their [`blocked`] flag while a request is in flight; the list reads it
/// before every request and drops navigation input while it is set.
///
/// [`get`]: DataProvider::get
/// [`blocked`]: DataProvider::blocked
pub trait DataProvider<V>: Send + Sync {
    /// True while a page request is in flight. No new request is issued
    /// while this returns true.
    fn blocked(&self) -> bool {
        false
    }

    /// Produces the requested page.
    fn get(&self, request: PageRequest) -> Result<Page<V>, ProviderError>;

    /// Total number of items in the full remote collection.
    fn max_count(&self) -> usize;

    /// Number of items visible at once (the window size the provider pages
    /// for).
    fn view_size(&self) -> usize;

    /// Absolute index of the first item of the currently fetched page.
    fn head(&self) -> usize;

    /// Offset of the view window within the currently fetched page.
    fn pos(&self) -> usize;
}

/// Message delivered when a page request succeeds.
#[derive(Debug, Clone)]
pub struct PageMsg<V> {
    /// Id of the list instance the page belongs to.
    pub id: i64,
    /// The request that produced this page.
    pub request: PageRequest,
    /// The delivered page.
    pub page: Page<V>,
}

/// Message delivered when a page request fails.
#[derive(Debug, Clone)]
pub struct PageErrorMsg {
    /// Id of the list instance the request belonged to.
    pub id: i64,
    /// The request that failed.
    pub request: PageRequest,
    /// The provider's error.
    pub error: ProviderError,
}

/// Builds the command that performs one provider round-trip.
///
/// The returned command invokes the provider and resolves to a [`PageMsg`]
/// or [`PageErrorMsg`] carrying `id` so the owning list can route it in its
/// `update`.
pub fn fetch_cmd<V>(provider: Arc<dyn DataProvider<V>>, request: PageRequest, id: i64) -> Cmd
where
    V: Clone + Send + Sync + 'static,
{
    bubbletea_rs::tick(Duration::from_nanos(1), move |_| match provider.get(request) {
        Ok(page) => Box::new(PageMsg { id, request, page }) as Msg,
        Err(error) => Box::new(PageErrorMsg { id, request, error }) as Msg,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Numbers;

    impl DataProvider<i32> for Numbers {
        fn get(&self, request: PageRequest) -> Result<Page<i32>, ProviderError> {
            match request {
                PageRequest::Home => Ok(Page::from_values(vec![1, 2, 3]).with_pos(1)),
                _ => Err(ProviderError::new("unreachable page")),
            }
        }

        fn max_count(&self) -> usize {
            3
        }

        fn view_size(&self) -> usize {
            3
        }

        fn head(&self) -> usize {
            0
        }

        fn pos(&self) -> usize {
            0
        }
    }

    #[tokio::test]
    async fn fetch_cmd_resolves_to_page_msg() {
        let provider: Arc<dyn DataProvider<i32>> = Arc::new(Numbers);
        let cmd = fetch_cmd(provider, PageRequest::Home, 7);
        let msg = cmd.await.expect("command produces a message");
        let page_msg = msg.downcast_ref::<PageMsg<i32>>().expect("page message");
        assert_eq!(page_msg.id, 7);
        assert_eq!(page_msg.request, PageRequest::Home);
        assert_eq!(page_msg.page.items.len(), 3);
        assert_eq!(page_msg.page.pos, Some(1));
    }

    #[tokio::test]
    async fn fetch_cmd_resolves_to_error_msg() {
        let provider: Arc<dyn DataProvider<i32>> = Arc::new(Numbers);
        let cmd = fetch_cmd(provider, PageRequest::End, 7);
        let msg = cmd.await.expect("command produces a message");
        let err = msg.downcast_ref::<PageErrorMsg>().expect("error message");
        assert_eq!(err.id, 7);
        assert_eq!(err.error.message, "unreachable page");
    }
}
