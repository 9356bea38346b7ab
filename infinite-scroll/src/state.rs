use alloc::vec;
use alloc::vec::Vec;

/// The pagination list carried in the router's persisted state.
///
/// Invariants maintained by the coordinator:
/// - no link appears twice
/// - links are appended only once their record is ready
/// - the first link is the one that was current when the list was seeded
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InfiniteScrollState<L> {
    pub links: Vec<L>,
}

impl<L: PartialEq> InfiniteScrollState<L> {
    /// A fresh list owned by the page at `first`.
    pub fn seeded(first: L) -> Self {
        Self { links: vec![first] }
    }

    pub fn contains(&self, link: &L) -> bool {
        self.links.contains(link)
    }

    /// Appends `link` unless it is already present. Returns whether it was appended.
    pub fn append(&mut self, link: L) -> bool {
        if self.contains(&link) {
            return false;
        }
        self.links.push(link);
        true
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

/// Access to the pagination list inside an opaque router state blob.
///
/// Implement this for the host's own history state type. `with_infinite_scroll` must be a
/// merge: every other key of the blob is carried over unchanged.
pub trait HistoryState<L>: Clone {
    fn infinite_scroll(&self) -> Option<&InfiniteScrollState<L>>;

    fn with_infinite_scroll(&self, infinite_scroll: InfiniteScrollState<L>) -> Self;
}

/// A ready-made history state: the reserved `infiniteScroll` key plus the host's own keys.
///
/// With `feature = "serde"`, `extra` is flattened so the host's keys sit beside
/// `infiniteScroll` in the same object. A missing `infiniteScroll` key reads as `None`; give
/// `E`'s fields serde defaults to accept blobs written before the host added them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RouterState<L, E = ()> {
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub infinite_scroll: Option<InfiniteScrollState<L>>,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub extra: E,
}

impl<L, E> RouterState<L, E> {
    pub fn new(extra: E) -> Self {
        Self {
            infinite_scroll: None,
            extra,
        }
    }
}

impl<L: Clone, E: Clone> HistoryState<L> for RouterState<L, E> {
    fn infinite_scroll(&self) -> Option<&InfiniteScrollState<L>> {
        self.infinite_scroll.as_ref()
    }

    fn with_infinite_scroll(&self, infinite_scroll: InfiniteScrollState<L>) -> Self {
        Self {
            infinite_scroll: Some(infinite_scroll),
            extra: self.extra.clone(),
        }
    }
}

/// The pages a host should render, in order.
///
/// Falls back to `[current]` before any list has been persisted.
pub fn accumulated_links<L, S>(state: &S, current: &L) -> Vec<L>
where
    L: Clone + PartialEq,
    S: HistoryState<L>,
{
    match state.infinite_scroll() {
        Some(scroll) if !scroll.is_empty() => scroll.links.clone(),
        _ => vec![current.clone()],
    }
}
