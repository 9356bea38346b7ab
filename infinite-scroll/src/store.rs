use crate::{HistoryState, ResourceRecord, SensorConfig, SensorReading, SetOptions};

/// A keyed document cache with a per-link fetch lifecycle.
///
/// The coordinator relies on two properties:
/// - `fetch` is idempotent once a link is fetching or ready.
/// - A failed fetch must eventually leave `Fetching`. A store that resets failures to
///   `NotRequested` is retried under [`crate::RetryPolicy::OnNotRequested`]; a store that leaves
///   them `Fetching` forever stalls that link silently.
pub trait ResourceStore<L> {
    /// Always returns a record, `NotRequested` for unknown links.
    fn get(&self, link: &L) -> ResourceRecord<L>;

    /// Starts fetching `link` in the background. Must not block.
    fn fetch(&mut self, link: &L);
}

/// The router: the current link and a persisted state blob that survives navigation.
pub trait RouterStore<L> {
    type State: HistoryState<L>;

    fn link(&self) -> &L;

    fn state(&self) -> &Self::State;

    /// Navigates to `link`, installing `options.state` as the persisted state.
    fn set(&mut self, link: L, options: SetOptions<Self::State>);

    /// Replaces the persisted state without navigating.
    fn update_state(&mut self, state: Self::State);
}

/// A visibility detector for one observed element.
///
/// How visibility is computed is up to the implementation. `observe` is called once per render
/// with the current configuration; support must not change over the sensor's lifetime.
pub trait ViewportSensor {
    /// What the host attaches to the observed element.
    type Handle: Clone;

    fn observe(&mut self, config: &SensorConfig) -> SensorReading<Self::Handle>;
}

impl<S: ViewportSensor + ?Sized> ViewportSensor for &mut S {
    type Handle = S::Handle;

    fn observe(&mut self, config: &SensorConfig) -> SensorReading<Self::Handle> {
        (**self).observe(config)
    }
}
