use alloc::vec::Vec;

use infinite_scroll::{HistoryState, LinkKey, NavigationMethod, RouterStore, SetOptions};

/// One entry of the in-memory history stack.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistoryEntry<L, S> {
    pub link: L,
    pub state: S,
}

/// A record of one `set` call.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Navigation<L> {
    pub link: L,
    pub method: NavigationMethod,
}

/// An in-memory [`RouterStore`] with a browser-like history stack.
///
/// - `Push` keeps the current entry and adds a new one on top.
/// - `Replace` overwrites the current entry.
/// - `update_state` rewrites the current entry's state and leaves the link alone.
#[derive(Clone, Debug)]
pub struct MemoryRouter<L, S> {
    past: Vec<HistoryEntry<L, S>>,
    current: HistoryEntry<L, S>,
    navigations: Vec<Navigation<L>>,
    state_updates: usize,
}

impl<L: LinkKey, S: HistoryState<L>> MemoryRouter<L, S> {
    pub fn new(link: L, state: S) -> Self {
        Self {
            past: Vec::new(),
            current: HistoryEntry { link, state },
            navigations: Vec::new(),
            state_updates: 0,
        }
    }

    pub fn current(&self) -> &HistoryEntry<L, S> {
        &self.current
    }

    /// Entries from oldest to current.
    pub fn history(&self) -> impl Iterator<Item = &HistoryEntry<L, S>> {
        self.past.iter().chain(core::iter::once(&self.current))
    }

    pub fn history_len(&self) -> usize {
        self.past.len() + 1
    }

    /// Every `set` call so far, oldest first.
    pub fn navigations(&self) -> &[Navigation<L>] {
        &self.navigations
    }

    pub fn state_updates(&self) -> usize {
        self.state_updates
    }

    /// Pops the current entry, restoring the previous link and the state it carried.
    ///
    /// Returns `false` at the start of history.
    pub fn back(&mut self) -> bool {
        let Some(prev) = self.past.pop() else {
            return false;
        };
        adebug!(from = ?self.current.link, to = ?prev.link, "back");
        self.current = prev;
        true
    }
}

impl<L: LinkKey, S: HistoryState<L>> RouterStore<L> for MemoryRouter<L, S> {
    type State = S;

    fn link(&self) -> &L {
        &self.current.link
    }

    fn state(&self) -> &S {
        &self.current.state
    }

    fn set(&mut self, link: L, options: SetOptions<S>) {
        adebug!(link = ?link, method = ?options.method, "set");
        self.navigations.push(Navigation {
            link: link.clone(),
            method: options.method,
        });
        let entry = HistoryEntry {
            link,
            state: options.state,
        };
        match options.method {
            NavigationMethod::Push => {
                let prev = core::mem::replace(&mut self.current, entry);
                self.past.push(prev);
            }
            NavigationMethod::Replace => self.current = entry,
        }
    }

    fn update_state(&mut self, state: S) {
        self.state_updates += 1;
        self.current.state = state;
    }
}
