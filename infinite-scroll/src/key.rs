use core::fmt::Debug;

/// Bound for link types: an opaque identifier compared by value.
///
/// Blanket-implemented; normalized path strings are the usual choice.
#[doc(hidden)]
pub trait LinkKey: Clone + Eq + Debug {}
impl<L: Clone + Eq + Debug> LinkKey for L {}
