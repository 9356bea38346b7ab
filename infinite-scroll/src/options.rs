use core::fmt;
use core::str::FromStr;

use crate::{MarginError, NextLink};

/// A single margin component, in pixels or as a percentage of the root's size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    Px(f32),
    Percent(f32),
}

impl Length {
    pub const ZERO: Self = Self::Px(0.0);
}

impl Default for Length {
    fn default() -> Self {
        Self::ZERO
    }
}

impl FromStr for Length {
    type Err = MarginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MarginError::InvalidLength(s.into());
        if let Some(n) = s.strip_suffix("px") {
            return n.parse().map(Self::Px).map_err(|_| invalid());
        }
        if let Some(n) = s.strip_suffix('%') {
            return n.parse().map(Self::Percent).map_err(|_| invalid());
        }
        // Unitless zero is the only unitless value accepted.
        match s.parse::<f32>() {
            Ok(n) if n == 0.0 => Ok(Self::ZERO),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(n) => write!(f, "{n}px"),
            Self::Percent(n) => write!(f, "{n}%"),
        }
    }
}

/// Grows (positive) or shrinks (negative) the region a viewport sensor tests against.
///
/// Parsed from CSS margin shorthand with one to four values (`"400px 0px"`,
/// `"-80% 0% -19.9999% 0%"`). With `feature = "serde"`, it (de)serializes as that string.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RootMargin {
    pub top: Length,
    pub right: Length,
    pub bottom: Length,
    pub left: Length,
}

impl RootMargin {
    pub fn new(top: Length, right: Length, bottom: Length, left: Length) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// `vertical` applies to top and bottom, `horizontal` to right and left.
    pub fn symmetric(vertical: Length, horizontal: Length) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    pub fn uniform(all: Length) -> Self {
        Self::symmetric(all, all)
    }
}

impl FromStr for RootMargin {
    type Err = MarginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let count = s.split_whitespace().count();
        if count > 4 {
            return Err(MarginError::TooManyValues(count));
        }

        let mut values = [Length::ZERO; 4];
        for (slot, token) in values.iter_mut().zip(s.split_whitespace()) {
            *slot = token.parse()?;
        }

        let [a, b, c, d] = values;
        match count {
            0 => Err(MarginError::Empty),
            1 => Ok(Self::uniform(a)),
            2 => Ok(Self::symmetric(a, b)),
            3 => Ok(Self::new(a, b, c, b)),
            _ => Ok(Self::new(a, b, c, d)),
        }
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for RootMargin {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for RootMargin {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <alloc::string::String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Configuration handed to a viewport sensor on every render.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorConfig {
    pub root_margin: RootMargin,
    /// Once the observed element has been reported in view, keep reporting it.
    pub trigger_once: bool,
}

impl SensorConfig {
    /// The prefetch sensor: fires 400px before the element scrolls in, and only once.
    pub fn fetch() -> Self {
        Self {
            root_margin: RootMargin::symmetric(Length::Px(400.0), Length::ZERO),
            trigger_once: true,
        }
    }

    /// The route sensor: a thin band at 80% of the viewport height.
    pub fn route() -> Self {
        Self {
            root_margin: RootMargin::new(
                Length::Percent(-80.0),
                Length::Percent(0.0),
                Length::Percent(-19.9999),
                Length::Percent(0.0),
            ),
            trigger_once: false,
        }
    }

    pub fn with_root_margin(mut self, root_margin: RootMargin) -> Self {
        self.root_margin = root_margin;
        self
    }

    pub fn with_trigger_once(mut self, trigger_once: bool) -> Self {
        self.trigger_once = trigger_once;
        self
    }
}

/// Whether a link whose record falls back to `NotRequested` is fetched again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RetryPolicy {
    /// Fetch whenever the record is `NotRequested`. A store that resets failed fetches to
    /// `NotRequested` gets retries for free.
    #[default]
    OnNotRequested,
    /// Fetch each link at most once for the lifetime of the coordinator. The coordinator
    /// remembers every link it fetched until it is reset.
    Once,
}

/// Configuration for [`crate::Coordinator`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoordinatorOptions {
    pub retry: RetryPolicy,
}

impl CoordinatorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}

/// Per-render input supplied by the host.
#[derive(Clone, Debug, PartialEq)]
pub struct CoordinatorInput<L> {
    pub current_link: L,
    pub next_link: NextLink<L>,
    pub fetch_sensor: SensorConfig,
    pub route_sensor: SensorConfig,
}

impl<L> CoordinatorInput<L> {
    /// Input with the default fetch and route sensor configurations.
    pub fn new(current_link: L, next_link: impl Into<NextLink<L>>) -> Self {
        Self {
            current_link,
            next_link: next_link.into(),
            fetch_sensor: SensorConfig::fetch(),
            route_sensor: SensorConfig::route(),
        }
    }

    pub fn with_fetch_sensor(mut self, config: SensorConfig) -> Self {
        self.fetch_sensor = config;
        self
    }

    pub fn with_route_sensor(mut self, config: SensorConfig) -> Self {
        self.route_sensor = config;
        self
    }
}
