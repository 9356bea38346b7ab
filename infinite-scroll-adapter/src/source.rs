use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use infinite_scroll::{ResourceRecord, ResourceStatus, ResourceStore};

use crate::SourceKey;
use crate::key::LinkMap;

type Normalize<L> = Arc<dyn Fn(&L) -> L + Send + Sync>;

#[derive(Clone)]
struct Entry<D> {
    status: ResourceStatus,
    data: Option<D>,
    fetch_calls: usize,
    failures: usize,
}

impl<D> Default for Entry<D> {
    fn default() -> Self {
        Self {
            status: ResourceStatus::NotRequested,
            data: None,
            fetch_calls: 0,
            failures: 0,
        }
    }
}

/// An in-memory [`ResourceStore`].
///
/// `fetch` only marks a link as fetching and queues it; the host performs the actual request
/// (see [`MemorySource::take_pending`]) and reports back with [`MemorySource::resolve`] or
/// [`MemorySource::reject`]. A rejected link returns to `NotRequested`, so coordinators with the
/// default retry policy request it again.
#[derive(Clone)]
pub struct MemorySource<L, D> {
    entries: LinkMap<L, Entry<D>>,
    pending: Vec<L>,
    normalize: Option<Normalize<L>>,
}

impl<L: SourceKey, D> Default for MemorySource<L, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: SourceKey, D> MemorySource<L, D> {
    pub fn new() -> Self {
        Self {
            entries: LinkMap::new(),
            pending: Vec::new(),
            normalize: None,
        }
    }

    /// Canonicalizes every link before it is looked up or stored.
    ///
    /// Records returned by `get` carry the canonical link.
    pub fn with_normalize(mut self, normalize: impl Fn(&L) -> L + Send + Sync + 'static) -> Self {
        self.normalize = Some(Arc::new(normalize));
        self
    }

    pub fn canonical(&self, link: &L) -> L {
        match &self.normalize {
            Some(f) => f(link),
            None => link.clone(),
        }
    }

    pub fn status(&self, link: &L) -> ResourceStatus {
        self.entries
            .get(&self.canonical(link))
            .map_or(ResourceStatus::NotRequested, |e| e.status)
    }

    pub fn data(&self, link: &L) -> Option<&D> {
        self.entries
            .get(&self.canonical(link))
            .and_then(|e| e.data.as_ref())
    }

    /// Number of `fetch` calls received for `link`, including idempotent ones.
    pub fn fetch_calls(&self, link: &L) -> usize {
        self.entries
            .get(&self.canonical(link))
            .map_or(0, |e| e.fetch_calls)
    }

    pub fn failures(&self, link: &L) -> usize {
        self.entries
            .get(&self.canonical(link))
            .map_or(0, |e| e.failures)
    }

    /// Links currently fetching, in request order.
    pub fn pending(&self) -> &[L] {
        &self.pending
    }

    /// Hands the queued requests to the host. The links stay `Fetching` until resolved or
    /// rejected.
    pub fn take_pending(&mut self) -> Vec<L> {
        core::mem::take(&mut self.pending)
    }

    /// Stores `data` for `link` and marks it ready. Works for links never fetched, which is how
    /// server-rendered pages are preloaded.
    ///
    /// Returns `true` if the link was fetching.
    pub fn resolve(&mut self, link: &L, data: D) -> bool {
        let key = self.canonical(link);
        self.pending.retain(|l| *l != key);
        let entry = self.entries.entry(key).or_default();
        let was_fetching = entry.status.is_fetching();
        entry.status = ResourceStatus::Ready;
        entry.data = Some(data);
        adebug!(link = ?link, was_fetching, "resolve");
        was_fetching
    }

    /// Marks a fetching link as failed and returns it to `NotRequested`.
    ///
    /// Returns `false` if the link was not fetching.
    pub fn reject(&mut self, link: &L) -> bool {
        let key = self.canonical(link);
        let Some(entry) = self.entries.get_mut(&key) else {
            return false;
        };
        if !entry.status.is_fetching() {
            return false;
        }
        entry.status = ResourceStatus::NotRequested;
        entry.failures += 1;
        self.pending.retain(|l| *l != key);
        adebug!(link = ?link, "reject");
        true
    }

    /// Drops every record. Queued requests are dropped too.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.pending.clear();
    }
}

impl<L: SourceKey, D> ResourceStore<L> for MemorySource<L, D> {
    fn get(&self, link: &L) -> ResourceRecord<L> {
        let key = self.canonical(link);
        let status = self
            .entries
            .get(&key)
            .map_or(ResourceStatus::NotRequested, |e| e.status);
        ResourceRecord::new(key, status)
    }

    fn fetch(&mut self, link: &L) {
        let key = self.canonical(link);
        let entry = self.entries.entry(key.clone()).or_default();
        entry.fetch_calls += 1;
        if entry.status.is_not_requested() {
            entry.status = ResourceStatus::Fetching;
            adebug!(link = ?key, "queued fetch");
            self.pending.push(key);
        }
    }
}

impl<L: fmt::Debug, D> fmt::Debug for MemorySource<L, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemorySource")
            .field("entries", &self.entries.len())
            .field("pending", &self.pending)
            .field("normalize", &self.normalize.is_some())
            .finish_non_exhaustive()
    }
}
