//! Flexible interval representation for packing.

use std::fmt::Display;

use super::error::BlockError;

/// Weighted interval `[start, end)` whose left endpoint may move anywhere in
/// `[start - slack, start + slack]`.
///
/// Every `Block` value is well formed: `start < end`, all fields finite,
/// `slack >= 0` and `weight >= 0`. Blocks are compared as open intervals, so
/// two blocks that share only a boundary do not overlap.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawBlock"))]
pub struct Block {
    start: f64,
    end: f64,
    slack: f64,
    weight: f64,
}

impl Block {
    /// Creates a block spanning `[start, end)` with the given slack and weight.
    ///
    /// # Errors
    ///
    /// Returns a [`BlockError`] if the span is empty or inverted, any value is
    /// not finite, or slack/weight is negative.
    pub fn new(start: f64, end: f64, slack: f64, weight: f64) -> Result<Self, BlockError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(BlockError::NonFiniteBounds { start, end });
        }
        if start >= end {
            return Err(BlockError::EmptySpan { start, end });
        }
        if !slack.is_finite() || slack < 0.0 {
            return Err(BlockError::InvalidSlack(slack));
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(BlockError::InvalidWeight(weight));
        }
        Ok(Self {
            start,
            end,
            slack,
            weight,
        })
    }

    /// Creates an immovable, weightless block (a forbidden zone).
    pub fn zone(start: f64, end: f64) -> Result<Self, BlockError> {
        Self::new(start, end, 0.0, 0.0)
    }

    pub const fn start(&self) -> f64 {
        self.start
    }

    pub const fn end(&self) -> f64 {
        self.end
    }

    pub const fn slack(&self) -> f64 {
        self.slack
    }

    pub const fn weight(&self) -> f64 {
        self.weight
    }

    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    /// Leftmost admissible start position.
    pub fn earliest_start(&self) -> f64 {
        self.start - self.slack
    }

    /// Rightmost admissible start position.
    pub fn latest_start(&self) -> f64 {
        self.start + self.slack
    }

    /// End coordinate when the block is shifted fully left.
    pub fn earliest_end(&self) -> f64 {
        self.end - self.slack
    }

    /// Returns true if the open interiors of the two blocks intersect.
    pub fn overlaps(&self, other: &Block) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Returns true if this block is a valid placement of `original`: same
    /// length, same slack and weight, and a start inside the original window.
    pub fn is_placement_of(&self, original: &Block) -> bool {
        const EPS: f64 = 1e-9;
        (self.length() - original.length()).abs() <= EPS
            && self.slack == original.slack
            && self.weight == original.weight
            && self.start >= original.earliest_start() - EPS
            && self.start <= original.latest_start() + EPS
    }

    /// Moves the block so that it starts at `start`, keeping its length.
    ///
    /// Both endpoints move by the same offset, so a zero shift leaves them
    /// bit-identical. The nominal window is not consulted; callers are
    /// responsible for staying within slack.
    pub(crate) fn shift_to(&mut self, start: f64) {
        let offset = start - self.start;
        self.start = start;
        self.end += offset;
    }

    /// Returns a copy stripped of slack and weight.
    pub(crate) fn as_zone(&self) -> Block {
        Block {
            start: self.start,
            end: self.end,
            slack: 0.0,
            weight: 0.0,
        }
    }

    /// Extends the end coordinate; used when merging overlapping zones.
    pub(crate) fn stretch_to(&mut self, end: f64) {
        if end > self.end {
            self.end = end;
        }
    }
}

impl Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.start, self.end, self.slack, self.weight
        )
    }
}

// =============================================================================
// Block Serde Support
// =============================================================================

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawBlock {
    start: f64,
    end: f64,
    #[serde(default)]
    slack: f64,
    #[serde(default)]
    weight: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawBlock> for Block {
    type Error = BlockError;

    fn try_from(raw: RawBlock) -> Result<Self, Self::Error> {
        Block::new(raw.start, raw.end, raw.slack, raw.weight)
    }
}
