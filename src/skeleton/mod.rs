//! Skeleton-domain routines: the fixed 8-neighborhood encoding, iterative
//! thinning, and spurious-fragment cleanup.
//!
//! All three share one convention that is easy to get subtly wrong: the
//! eight neighbors of a pixel are always enumerated clockwise starting from
//! the top (see [`neighbors::NEIGHBOR_OFFSETS`]). Transition counts and
//! crossing numbers are defined over that cyclic order.

pub mod clean;
pub mod neighbors;
pub mod thin;

pub use self::clean::{clean_skeleton, CleanOptions};
pub use self::neighbors::{crossing_number, neighbors8, zero_to_one_transitions, NEIGHBOR_OFFSETS};
pub use self::thin::thin;
