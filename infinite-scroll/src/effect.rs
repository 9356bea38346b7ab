use alloc::vec;
use alloc::vec::Vec;

use crate::key::LinkKey;
use crate::reducer::Effect;
use crate::{HistoryState, InfiniteScrollState, ResourceStore, RouterStore, SetOptions};

/// A single store mutation. Commands are the only way the coordinator changes anything.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command<L, S> {
    /// `ResourceStore::fetch`.
    Fetch(L),
    /// `RouterStore::update_state`.
    UpdateState(S),
    /// `RouterStore::set`.
    Navigate { link: L, options: SetOptions<S> },
}

impl<L: LinkKey, S> Command<L, S> {
    /// Executes the command against the stores.
    pub fn apply<R, T>(self, resources: &mut R, router: &mut T)
    where
        R: ResourceStore<L> + ?Sized,
        T: RouterStore<L, State = S> + ?Sized,
    {
        match self {
            Self::Fetch(link) => {
                sdebug!(?link, "fetch");
                resources.fetch(&link);
            }
            Self::UpdateState(state) => {
                sdebug!("update_state");
                router.update_state(state);
            }
            Self::Navigate { link, options } => {
                sdebug!(?link, method = ?options.method, "navigate");
                router.set(link, options);
            }
        }
    }
}

impl<L: LinkKey> Effect<L> {
    /// Decides the commands for this effect against the router's live state.
    ///
    /// Reading the live state (rather than the state at render time) is what makes a list
    /// update from `PrefetchNext` visible to a `SyncRoute` in the same commit.
    pub fn plan<T>(&self, router: &T) -> Vec<Command<L, T::State>>
    where
        T: RouterStore<L> + ?Sized,
    {
        match self {
            Self::EnsureCurrent { link, current } => {
                if current.needs_fetch() {
                    vec![Command::Fetch(link.clone())]
                } else {
                    Vec::new()
                }
            }
            Self::PrefetchNext { current_link, next } => {
                let state = router.state();
                let mut scroll = match state.infinite_scroll() {
                    Some(scroll) if !scroll.is_empty() => scroll.clone(),
                    Some(_) => {
                        swarn!(current = ?current_link, "empty infinite scroll list, reseeding");
                        InfiniteScrollState::seeded(current_link.clone())
                    }
                    None => InfiniteScrollState::seeded(current_link.clone()),
                };

                if scroll.contains(&next.link) {
                    strace!(next = ?next.link, "next link already handled");
                    return Vec::new();
                }

                let mut commands = Vec::with_capacity(2);
                if next.needs_fetch() {
                    commands.push(Command::Fetch(next.link.clone()));
                }
                if next.is_ready() {
                    scroll.append(next.link.clone());
                }
                commands.push(Command::UpdateState(state.with_infinite_scroll(scroll)));
                commands
            }
            Self::SyncRoute { link } => {
                if router.link() == link {
                    return Vec::new();
                }
                vec![Command::Navigate {
                    link: link.clone(),
                    options: SetOptions::replace(router.state().clone()),
                }]
            }
        }
    }
}
