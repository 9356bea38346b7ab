use alloc::vec::Vec;

use crate::effect::Command;
use crate::key::LinkKey;
use crate::reducer::{Effect, Memo, Snapshot, reduce};
use crate::{
    CoordinatorInput, CoordinatorOptions, CoordinatorOutput, ResourceStore, RetryPolicy,
    RouterStore, SensorReading, ViewportSensor,
};

/// The result of a render: what the host sees, plus the effects waiting for commit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Render<L, H> {
    pub output: CoordinatorOutput<H>,
    pub effects: Vec<Effect<L>>,
}

/// Drives infinite-scroll pagination from two viewport sensors.
///
/// The coordinator owns no pagination state: the list of loaded pages lives in the router's
/// persisted state and the documents live in the resource store, both passed in on each call.
/// What it keeps between renders is the dependency memo of its three effects (and, under
/// [`RetryPolicy::Once`], the links it has already requested).
///
/// Call [`Coordinator::run`] once per host render, or split it into [`Coordinator::render`]
/// and [`Coordinator::commit`] when the host commits effects after painting. The coordinator
/// only makes progress when re-invoked after store changes.
#[derive(Clone, Debug)]
pub struct Coordinator<L, S> {
    options: CoordinatorOptions,
    fetch_sensor: S,
    route_sensor: S,
    memo: Memo<L>,
    requested: Vec<L>,
}

impl<L: LinkKey, S: ViewportSensor> Coordinator<L, S> {
    pub fn new(fetch_sensor: S, route_sensor: S) -> Self {
        Self::with_options(CoordinatorOptions::default(), fetch_sensor, route_sensor)
    }

    pub fn with_options(options: CoordinatorOptions, fetch_sensor: S, route_sensor: S) -> Self {
        sdebug!(retry = ?options.retry, "Coordinator::new");
        Self {
            options,
            fetch_sensor,
            route_sensor,
            memo: Memo::default(),
            requested: Vec::new(),
        }
    }

    pub fn options(&self) -> &CoordinatorOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: CoordinatorOptions) {
        if options.retry != self.options.retry {
            self.requested.clear();
        }
        self.options = options;
    }

    pub fn fetch_sensor(&self) -> &S {
        &self.fetch_sensor
    }

    pub fn fetch_sensor_mut(&mut self) -> &mut S {
        &mut self.fetch_sensor
    }

    pub fn route_sensor(&self) -> &S {
        &self.route_sensor
    }

    pub fn route_sensor_mut(&mut self) -> &mut S {
        &mut self.route_sensor
    }

    pub fn memo(&self) -> &Memo<L> {
        &self.memo
    }

    /// Links fetched so far under [`RetryPolicy::Once`]. Always empty otherwise.
    ///
    /// The list grows with every distinct link fetched and is only cleared by
    /// [`Coordinator::reset`] or a retry policy change. Lookups are linear, which suits one
    /// coordinator per rendered page seeing a current and a next link.
    pub fn requested(&self) -> &[L] {
        &self.requested
    }

    /// Forgets effect dependencies, so the next render schedules every applicable effect again.
    pub fn reset(&mut self) {
        self.memo = Memo::default();
        self.requested.clear();
    }

    /// The read phase: observes both sensors, reads the records and schedules effects.
    ///
    /// Nothing is mutated besides the coordinator's own memo. When either sensor is
    /// unsupported, the store is not read and nothing is scheduled.
    pub fn render<R>(&mut self, input: &CoordinatorInput<L>, resources: &R) -> Render<L, S::Handle>
    where
        R: ResourceStore<L> + ?Sized,
    {
        let fetch = self.fetch_sensor.observe(&input.fetch_sensor);
        let route = self.route_sensor.observe(&input.route_sensor);

        let output = match (fetch, route) {
            (
                SensorReading::Supported {
                    in_view: fetch_in_view,
                    handle: fetch_ref,
                },
                SensorReading::Supported {
                    in_view: route_in_view,
                    handle: route_ref,
                },
            ) => CoordinatorOutput::Supported {
                fetch_ref,
                route_ref,
                fetch_in_view,
                route_in_view,
            },
            _ => CoordinatorOutput::Unsupported,
        };

        let (supported, fetch_in_view, route_in_view) = match &output {
            CoordinatorOutput::Supported {
                fetch_in_view,
                route_in_view,
                ..
            } => (true, *fetch_in_view, *route_in_view),
            CoordinatorOutput::Unsupported => (false, false, false),
        };

        let snapshot = Snapshot::read(input, supported, fetch_in_view, route_in_view, resources);
        let (memo, effects) = reduce(&self.memo, &snapshot);
        self.memo = memo;

        strace!(
            supported,
            fetch_in_view,
            route_in_view,
            effects = effects.len(),
            "render"
        );
        Render { output, effects }
    }

    /// Runs scheduled effects in order, each planned against the router's live state.
    ///
    /// Returns the number of commands applied.
    pub fn commit<R, T>(
        &mut self,
        effects: Vec<Effect<L>>,
        resources: &mut R,
        router: &mut T,
    ) -> usize
    where
        R: ResourceStore<L> + ?Sized,
        T: RouterStore<L> + ?Sized,
    {
        let mut applied = 0usize;
        for effect in effects {
            let mut fetched = false;
            for command in effect.plan(&*router) {
                if let Command::Fetch(link) = &command {
                    if !self.admit_fetch(link) {
                        sdebug!(?link, "fetch suppressed by retry policy");
                        continue;
                    }
                    fetched = true;
                }
                command.apply(resources, router);
                applied += 1;
            }
            // The memo holds the record as read before the fetch. Without this, a store that
            // fails back to `NotRequested` before the next render would look unchanged.
            if fetched {
                self.memo.forget(&effect);
            }
        }
        applied
    }

    /// [`Coordinator::render`] followed by [`Coordinator::commit`].
    pub fn run<R, T>(
        &mut self,
        input: &CoordinatorInput<L>,
        resources: &mut R,
        router: &mut T,
    ) -> CoordinatorOutput<S::Handle>
    where
        R: ResourceStore<L> + ?Sized,
        T: RouterStore<L> + ?Sized,
    {
        let Render { output, effects } = self.render(input, &*resources);
        self.commit(effects, resources, router);
        output
    }

    fn admit_fetch(&mut self, link: &L) -> bool {
        match self.options.retry {
            RetryPolicy::OnNotRequested => true,
            RetryPolicy::Once => {
                if self.requested.contains(link) {
                    return false;
                }
                self.requested.push(link.clone());
                true
            }
        }
    }
}
