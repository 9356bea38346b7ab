use infinite_scroll::{
    Coordinator, CoordinatorInput, CoordinatorOptions, CoordinatorOutput, LinkKey, Render,
    ResourceStore, RouterStore, ViewportSensor,
};

/// The outcome of [`Controller::settle`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settled<H> {
    /// Output of the last render.
    pub output: CoordinatorOutput<H>,
    /// Renders performed, including the final quiet one.
    pub passes: usize,
    /// Store commands applied across all passes.
    pub commands: usize,
    /// `false` when `max_passes` ran out while effects were still being scheduled.
    pub quiescent: bool,
}

/// A framework-neutral driver that wraps an [`infinite_scroll::Coordinator`].
///
/// Reactive hosts re-render whenever a store the coordinator read has changed. Hosts without
/// that machinery call [`Controller::settle`] after each UI event or store update: it renders,
/// commits, and renders again until no effect is scheduled.
#[derive(Clone, Debug)]
pub struct Controller<L, S> {
    c: Coordinator<L, S>,
    max_passes: usize,
}

impl<L: LinkKey, S: ViewportSensor> Controller<L, S> {
    pub const DEFAULT_MAX_PASSES: usize = 8;

    pub fn new(fetch_sensor: S, route_sensor: S) -> Self {
        Self::from_coordinator(Coordinator::new(fetch_sensor, route_sensor))
    }

    pub fn with_options(options: CoordinatorOptions, fetch_sensor: S, route_sensor: S) -> Self {
        Self::from_coordinator(Coordinator::with_options(options, fetch_sensor, route_sensor))
    }

    pub fn from_coordinator(c: Coordinator<L, S>) -> Self {
        Self {
            c,
            max_passes: Self::DEFAULT_MAX_PASSES,
        }
    }

    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes.max(1);
        self
    }

    pub fn coordinator(&self) -> &Coordinator<L, S> {
        &self.c
    }

    pub fn coordinator_mut(&mut self) -> &mut Coordinator<L, S> {
        &mut self.c
    }

    pub fn into_coordinator(self) -> Coordinator<L, S> {
        self.c
    }

    pub fn fetch_sensor_mut(&mut self) -> &mut S {
        self.c.fetch_sensor_mut()
    }

    pub fn route_sensor_mut(&mut self) -> &mut S {
        self.c.route_sensor_mut()
    }

    /// One render and commit.
    pub fn tick<R, T>(
        &mut self,
        input: &CoordinatorInput<L>,
        resources: &mut R,
        router: &mut T,
    ) -> CoordinatorOutput<S::Handle>
    where
        R: ResourceStore<L> + ?Sized,
        T: RouterStore<L> + ?Sized,
    {
        self.c.run(input, resources, router)
    }

    /// Renders and commits until a render schedules nothing, at most `max_passes` times.
    pub fn settle<R, T>(
        &mut self,
        input: &CoordinatorInput<L>,
        resources: &mut R,
        router: &mut T,
    ) -> Settled<S::Handle>
    where
        R: ResourceStore<L> + ?Sized,
        T: RouterStore<L> + ?Sized,
    {
        let mut passes = 0usize;
        let mut commands = 0usize;
        loop {
            let Render { output, effects } = self.c.render(input, &*resources);
            passes += 1;

            if effects.is_empty() {
                return Settled {
                    output,
                    passes,
                    commands,
                    quiescent: true,
                };
            }

            commands += self.c.commit(effects, resources, router);
            if passes >= self.max_passes {
                adebug!(passes, commands, "settle: pass budget exhausted");
                return Settled {
                    output,
                    passes,
                    commands,
                    quiescent: false,
                };
            }
        }
    }
}
