//! Adapter utilities for the `infinite-scroll` crate.
//!
//! The `infinite-scroll` crate only defines the collaborator traits. This crate provides small,
//! framework-neutral implementations of them, plus a driver for hosts without a reactive
//! runtime:
//!
//! - [`MemorySource`]: a keyed resource cache with a fetch queue the host drains
//! - [`MemoryRouter`]: a router with a browser-like history stack
//! - [`ManualSensor`]: a viewport sensor whose visibility is set by the host
//! - [`Controller`]: re-invokes the coordinator until it settles
//!
//! This crate is intentionally framework-agnostic (no DOM or TUI bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod key;
mod router;
mod sensor;
mod source;


pub use controller::{Controller, Settled};
pub use key::SourceKey;
pub use router::{HistoryEntry, MemoryRouter, Navigation};
pub use sensor::ManualSensor;
pub use source::MemorySource;
