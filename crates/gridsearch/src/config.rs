use gridsearch_core::Bounds;

/// Depth cap of iterative deepening when none is configured.
pub const DEFAULT_MAX_DEPTH: usize = 50;

/// Step cap of the random walk when none is configured.
pub const DEFAULT_MAX_STEPS: usize = 1000;

/// Tunables of a [`Pathfinder`](crate::Pathfinder).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Iterative deepening tries depth limits `0..max_depth`.
    pub max_depth: usize,
    /// Random walk iteration cap.
    pub max_steps: usize,
    /// Seed for the random walk. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_steps: DEFAULT_MAX_STEPS,
            seed: None,
        }
    }
}

impl SearchConfig {
    /// Defaults, with caps raised so that they never fall short on a grid of
    /// the given size: every route fits under the depth cap, and the walk
    /// gets four tries per cell.
    pub fn for_bounds(bounds: Bounds) -> Self {
        let cells = bounds.len();
        Self {
            max_depth: DEFAULT_MAX_DEPTH.max(cells),
            max_steps: DEFAULT_MAX_STEPS.max(cells.saturating_mul(4)),
            seed: None,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let c: SearchConfig = serde_json::from_str(r#"{"max_depth": 80}"#).unwrap();
        assert_eq!(c.max_depth, 80);
        assert_eq!(c.max_steps, DEFAULT_MAX_STEPS);
        assert_eq!(c.seed, None);
    }
}
