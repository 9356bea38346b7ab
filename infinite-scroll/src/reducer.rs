use alloc::vec::Vec;

use crate::key::LinkKey;
use crate::{CoordinatorInput, NextLink, ResourceRecord, ResourceStore};

/// Everything one render observed: sensor flags plus the records read from the resource store.
///
/// When unsupported, the records are `None` and the store was never consulted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot<L> {
    pub supported: bool,
    pub fetch_in_view: bool,
    pub route_in_view: bool,
    pub current_link: L,
    pub next_link: NextLink<L>,
    pub current: Option<ResourceRecord<L>>,
    pub next: Option<ResourceRecord<L>>,
}

impl<L: LinkKey> Snapshot<L> {
    /// The read phase. Touches the store only when `supported`.
    pub fn read<R: ResourceStore<L> + ?Sized>(
        input: &CoordinatorInput<L>,
        supported: bool,
        fetch_in_view: bool,
        route_in_view: bool,
        resources: &R,
    ) -> Self {
        let (current, next) = if supported {
            let current = resources.get(&input.current_link);
            let next = input.next_link.as_ref().map(|link| resources.get(link));
            (Some(current), next)
        } else {
            (None, None)
        };

        Self {
            supported,
            fetch_in_view,
            route_in_view,
            current_link: input.current_link.clone(),
            next_link: input.next_link.clone(),
            current,
            next,
        }
    }

    pub fn is_next_ready(&self) -> bool {
        self.next.as_ref().is_some_and(ResourceRecord::is_ready)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct EnsureDeps<L> {
    supported: bool,
    current_link: L,
    current: Option<ResourceRecord<L>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct PrefetchDeps<L> {
    supported: bool,
    fetch_in_view: bool,
    current_link: L,
    next_link: NextLink<L>,
    next: Option<ResourceRecord<L>>,
    is_next_ready: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct RouteDeps<L> {
    supported: bool,
    route_in_view: bool,
    current_link: L,
}

/// The dependency sets each effect last ran with.
///
/// A fresh memo schedules every applicable effect on the first render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memo<L> {
    ensure: Option<EnsureDeps<L>>,
    prefetch: Option<PrefetchDeps<L>>,
    route: Option<RouteDeps<L>>,
}

impl<L> Default for Memo<L> {
    fn default() -> Self {
        Self {
            ensure: None,
            prefetch: None,
            route: None,
        }
    }
}

impl<L> Memo<L> {
    pub fn is_fresh(&self) -> bool {
        self.ensure.is_none() && self.prefetch.is_none() && self.route.is_none()
    }

    /// Drops the dependencies recorded for `effect`, so the next render re-reads its record
    /// instead of comparing against the state from before its fetch was applied.
    pub(crate) fn forget<T>(&mut self, effect: &Effect<T>) {
        match effect {
            Effect::EnsureCurrent { .. } => self.ensure = None,
            Effect::PrefetchNext { .. } => self.prefetch = None,
            Effect::SyncRoute { .. } => self.route = None,
        }
    }
}

/// A scheduled effect, carrying the values it captured at render time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect<L> {
    /// Fetch the current page if it was never requested.
    EnsureCurrent {
        link: L,
        current: ResourceRecord<L>,
    },
    /// The fetch sensor is in view and a next page exists: prefetch it, and append it to the
    /// persisted list once ready.
    PrefetchNext {
        current_link: L,
        next: ResourceRecord<L>,
    },
    /// The route sensor is in view: replace the route with `link` if it is not already current.
    SyncRoute { link: L },
}

/// Diffs each effect's dependency set against `memo` and schedules the effects whose
/// dependencies changed, in declaration order.
///
/// Effects whose captured preconditions do not hold (unsupported, sensor out of view, no next
/// page, current page already requested) are not scheduled, but their dependencies are still
/// recorded.
pub fn reduce<L: LinkKey>(memo: &Memo<L>, snapshot: &Snapshot<L>) -> (Memo<L>, Vec<Effect<L>>) {
    let mut effects = Vec::new();

    let ensure = EnsureDeps {
        supported: snapshot.supported,
        current_link: snapshot.current_link.clone(),
        current: snapshot.current.clone(),
    };
    if memo.ensure.as_ref() != Some(&ensure) {
        if let Some(current) = &snapshot.current {
            if current.needs_fetch() {
                effects.push(Effect::EnsureCurrent {
                    link: snapshot.current_link.clone(),
                    current: current.clone(),
                });
            }
        }
    }

    let prefetch = PrefetchDeps {
        supported: snapshot.supported,
        fetch_in_view: snapshot.fetch_in_view,
        current_link: snapshot.current_link.clone(),
        next_link: snapshot.next_link.clone(),
        next: snapshot.next.clone(),
        is_next_ready: snapshot.is_next_ready(),
    };
    if memo.prefetch.as_ref() != Some(&prefetch) && snapshot.supported && snapshot.fetch_in_view {
        if let Some(next) = &snapshot.next {
            effects.push(Effect::PrefetchNext {
                current_link: snapshot.current_link.clone(),
                next: next.clone(),
            });
        }
    }

    let route = RouteDeps {
        supported: snapshot.supported,
        route_in_view: snapshot.route_in_view,
        current_link: snapshot.current_link.clone(),
    };
    if memo.route.as_ref() != Some(&route) && snapshot.supported && snapshot.route_in_view {
        effects.push(Effect::SyncRoute {
            link: snapshot.current_link.clone(),
        });
    }

    strace!(
        current = ?snapshot.current_link,
        scheduled = effects.len(),
        "reduce"
    );

    let next_memo = Memo {
        ensure: Some(ensure),
        prefetch: Some(prefetch),
        route: Some(route),
    };
    (next_memo, effects)
}
