//! Minutiae data model: ridge endings and bifurcations with position,
//! kind and orientation.
//!
//! Identity of a minutia is its position and kind; the orientation angle is
//! an estimate and deliberately excluded from equality.

pub mod extract;
pub mod filter;

pub use self::extract::extract_minutiae;
pub use self::filter::{filter_minutiae, FilterOptions};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Local ridge topology of a minutia point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MinutiaKind {
    /// A ridge line terminates (crossing number 1).
    Ending,
    /// A ridge line splits into two (crossing number 3).
    Bifurcation,
}

impl fmt::Display for MinutiaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinutiaKind::Ending => f.write_str("ending"),
            MinutiaKind::Bifurcation => f.write_str("bifurcation"),
        }
    }
}

impl FromStr for MinutiaKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ending" => Ok(MinutiaKind::Ending),
            "bifurcation" => Ok(MinutiaKind::Bifurcation),
            other => Err(format!(
                "Invalid minutia kind '{other}': must be 'ending' or 'bifurcation'"
            )),
        }
    }
}

/// A single minutia point in grid coordinates (y grows downward).
///
/// `angle` is the ridge orientation in radians, `atan2(dy, dx)` in
/// (-π, π].
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Minutia {
    pub x: i32,
    pub y: i32,
    pub kind: MinutiaKind,
    pub angle: f64,
}

impl Minutia {
    pub fn new(x: i32, y: i32, kind: MinutiaKind, angle: f64) -> Self {
        Self { x, y, kind, angle }
    }

    /// Squared Euclidean distance to another minutia's position.
    #[inline]
    pub fn distance_sq(&self, other: &Minutia) -> i64 {
        let dx = (self.x - other.x) as i64;
        let dy = (self.y - other.y) as i64;
        dx * dx + dy * dy
    }
}

// Equality by (position, kind) only; the angle is not part of identity.
impl PartialEq for Minutia {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y && self.kind == other.kind
    }
}

impl Eq for Minutia {}
