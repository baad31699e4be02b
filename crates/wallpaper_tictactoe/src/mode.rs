//! Symmetry modes selecting how the center board tiles the display.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Planar symmetry used to tile the 3x3 center board into the 9x9 display.
///
/// Parsing and `Display` use the lowercase variant name (`"klein"`), while
/// [`Mode::label`] gives the human-facing name for selection controls.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Mode {
    /// Only the center sub-board is live.
    #[default]
    Standard,
    /// Every sub-board is a translated copy of the center.
    Torus,
    /// Crossing a top/bottom edge mirrors columns.
    Klein,
    /// Crossing an edge mirrors across it; corners are rotated 180 degrees.
    Projective,
}

impl Mode {
    /// All modes in selection order.
    pub const ALL: [Mode; 4] = [Mode::Standard, Mode::Torus, Mode::Klein, Mode::Projective];

    /// Display label for a mode selection control.
    #[instrument]
    pub fn label(self) -> &'static str {
        match self {
            Mode::Standard => "Standard",
            Mode::Torus => "Torus",
            Mode::Klein => "Klein Bottle",
            Mode::Projective => "Projective Plane",
        }
    }

    /// The mode after this one, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Mode::Standard => Mode::Torus,
            Mode::Torus => Mode::Klein,
            Mode::Klein => Mode::Projective,
            Mode::Projective => Mode::Standard,
        }
    }

    /// Mode at a 0-based selection index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}
