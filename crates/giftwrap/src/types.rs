//! Configuration and error types for the hull walk.
//!
//! - `HullCfg`: centralizes the orientation epsilon and the sweep bound.
//! - `HullError`: surfaced instead of hanging on degenerate input.

use std::fmt;

/// Hull computation configuration (tolerances and bounds).
#[derive(Clone, Copy, Debug)]
pub struct HullCfg {
    /// Orientation/colinearity tolerance; also the approximate-equality
    /// tolerance for the start-vertex tie-break (one policy for both).
    pub eps: f64,
    /// Outer-loop bound as a multiple of the input size. The walk commits at
    /// least one vertex per sweep on well-posed input, so 2 leaves slack.
    pub max_sweep_factor: usize,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            eps: 1e-5,
            max_sweep_factor: 2,
        }
    }
}

/// Failure of the hull walk. Fewer-than-3 inputs are a sentinel (`Ok(None)`),
/// not an error; this covers the cases where the walk cannot close.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HullError {
    /// The walk did not return to the start vertex within the sweep bound,
    /// or only exact duplicates of the current vertex remained.
    DegenerateInput { sweeps: usize },
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullError::DegenerateInput { sweeps } => {
                write!(f, "degenerate input: hull walk did not close after {sweeps} sweeps")
            }
        }
    }
}

impl std::error::Error for HullError {}
