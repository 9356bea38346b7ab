//! A headless infinite-scroll coordinator.
//!
//! As the user scrolls, the coordinator prefetches the next page, appends it to a list kept in
//! the router's persisted state, and replaces the current route with the page in view. It never
//! pushes history entries and never drops the accumulated list.
//!
//! It is UI-agnostic. The host is expected to provide:
//! - two viewport sensors ([`ViewportSensor`]): one near the end of the page to trigger
//!   prefetching, one across the page body to trigger route rewrites
//! - a keyed resource cache ([`ResourceStore`])
//! - a router with a persisted state blob ([`RouterStore`], [`HistoryState`])
//!
//! Each render is a pure reduction ([`reduce`]) from the previous effect dependencies and the
//! current observations to a list of [`Effect`]s; committing plans each effect into
//! [`Command`]s against the live router state and applies them.
//!
//! For reference collaborators and a settle loop, see the `infinite-scroll-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod coordinator;
mod effect;
mod error;
mod key;
mod options;
mod reducer;
mod state;
mod store;
mod types;


pub use coordinator::{Coordinator, Render};
pub use effect::Command;
pub use error::MarginError;
pub use options::{
    CoordinatorInput, CoordinatorOptions, Length, RetryPolicy, RootMargin, SensorConfig,
};
pub use reducer::{Effect, Memo, Snapshot, reduce};
pub use state::{HistoryState, InfiniteScrollState, RouterState, accumulated_links};
pub use store::{ResourceStore, RouterStore, ViewportSensor};
pub use types::{
    CoordinatorOutput, NavigationMethod, NextLink, ResourceRecord, ResourceStatus, SensorReading,
    SetOptions,
};

#[doc(hidden)]
pub use key::LinkKey;
