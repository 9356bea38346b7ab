/// Fetch lifecycle of a single resource record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResourceStatus {
    #[default]
    NotRequested,
    Fetching,
    Ready,
}

impl ResourceStatus {
    pub fn is_ready(self) -> bool {
        self == Self::Ready
    }

    pub fn is_fetching(self) -> bool {
        self == Self::Fetching
    }

    pub fn is_not_requested(self) -> bool {
        self == Self::NotRequested
    }
}

/// A resource store's view of one link.
///
/// `link` is the store's canonical form of the requested link. Stores that normalize links
/// (trailing slashes, query ordering) return the normalized value here.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceRecord<L> {
    pub link: L,
    pub status: ResourceStatus,
}

impl<L> ResourceRecord<L> {
    pub fn new(link: L, status: ResourceStatus) -> Self {
        Self { link, status }
    }

    pub fn not_requested(link: L) -> Self {
        Self::new(link, ResourceStatus::NotRequested)
    }

    pub fn is_ready(&self) -> bool {
        self.status.is_ready()
    }

    pub fn is_fetching(&self) -> bool {
        self.status.is_fetching()
    }

    /// `true` when neither ready nor fetching, i.e. a fetch should be issued.
    pub fn needs_fetch(&self) -> bool {
        self.status.is_not_requested()
    }
}

/// The link of the following page, or `Absent` at the end of pagination.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NextLink<L> {
    Present(L),
    #[default]
    Absent,
}

impl<L> NextLink<L> {
    pub fn as_ref(&self) -> Option<&L> {
        match self {
            Self::Present(link) => Some(link),
            Self::Absent => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl<L> From<Option<L>> for NextLink<L> {
    fn from(link: Option<L>) -> Self {
        match link {
            Some(link) => Self::Present(link),
            None => Self::Absent,
        }
    }
}

/// How a router navigation treats the history stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NavigationMethod {
    Push,
    Replace,
}

/// Arguments of `RouterStore::set`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SetOptions<S> {
    pub method: NavigationMethod,
    pub state: S,
}

impl<S> SetOptions<S> {
    /// A history replacement that carries `state` forward unchanged.
    pub fn replace(state: S) -> Self {
        Self {
            method: NavigationMethod::Replace,
            state,
        }
    }
}

/// What a viewport sensor reports for one render.
///
/// Whether a sensor is supported is fixed for its lifetime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SensorReading<H> {
    Unsupported,
    Supported { in_view: bool, handle: H },
}

impl<H> SensorReading<H> {
    pub fn is_supported(&self) -> bool {
        matches!(self, Self::Supported { .. })
    }

    pub fn in_view(&self) -> bool {
        matches!(self, Self::Supported { in_view: true, .. })
    }
}

/// The coordinator's per-render result.
///
/// `Unsupported` is a first-class state, not an error: nothing was read, fetched or navigated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CoordinatorOutput<H> {
    Unsupported,
    Supported {
        /// Attach to the element whose visibility triggers prefetching.
        fetch_ref: H,
        /// Attach to the element whose visibility rewrites the route.
        route_ref: H,
        fetch_in_view: bool,
        route_in_view: bool,
    },
}

impl<H> CoordinatorOutput<H> {
    pub fn is_supported(&self) -> bool {
        matches!(self, Self::Supported { .. })
    }
}
