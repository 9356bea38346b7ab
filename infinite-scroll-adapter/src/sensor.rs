use infinite_scroll::{SensorConfig, SensorReading, ViewportSensor};

/// A [`ViewportSensor`] driven by the host (or a test) instead of by layout.
///
/// Visibility is whatever was last passed to [`ManualSensor::set_in_view`]. With
/// `trigger_once` in the observed config, the first in-view report latches.
#[derive(Clone, Debug)]
pub struct ManualSensor<H> {
    supported: bool,
    in_view: bool,
    latched: bool,
    handle: H,
    observations: usize,
}

impl<H: Clone> ManualSensor<H> {
    pub fn supported(handle: H) -> Self {
        Self {
            supported: true,
            in_view: false,
            latched: false,
            handle,
            observations: 0,
        }
    }

    /// A sensor for environments without visibility detection.
    pub fn unsupported(handle: H) -> Self {
        Self {
            supported: false,
            ..Self::supported(handle)
        }
    }

    pub fn set_in_view(&mut self, in_view: bool) {
        self.in_view = in_view;
    }

    pub fn handle(&self) -> &H {
        &self.handle
    }

    pub fn observations(&self) -> usize {
        self.observations
    }
}

impl<H: Clone> ViewportSensor for ManualSensor<H> {
    type Handle = H;

    fn observe(&mut self, config: &SensorConfig) -> SensorReading<H> {
        self.observations += 1;
        if !self.supported {
            return SensorReading::Unsupported;
        }
        if self.in_view {
            self.latched = true;
        }
        SensorReading::Supported {
            in_view: self.in_view || (config.trigger_once && self.latched),
            handle: self.handle.clone(),
        }
    }
}
