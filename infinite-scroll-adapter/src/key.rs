#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use infinite_scroll::LinkKey;

#[cfg(feature = "std")]
pub(crate) type LinkMap<L, V> = HashMap<L, V>;
#[cfg(not(feature = "std"))]
pub(crate) type LinkMap<L, V> = BTreeMap<L, V>;

/// Bound for links used as map keys by the in-memory collaborators.
#[cfg(feature = "std")]
pub trait SourceKey: LinkKey + core::hash::Hash {}
#[cfg(feature = "std")]
impl<T: LinkKey + core::hash::Hash> SourceKey for T {}

#[cfg(not(feature = "std"))]
pub trait SourceKey: LinkKey + Ord {}
#[cfg(not(feature = "std"))]
impl<T: LinkKey + Ord> SourceKey for T {}
