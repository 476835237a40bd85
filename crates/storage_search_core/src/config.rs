use serde::{Deserialize, Serialize};

/// Tuning knobs for the search. None of them change which result is
/// returned for a location, only how fast it is found.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchConfig {
    /// Skip branches whose accumulated price already reaches the best
    /// complete assignment found so far.
    #[serde(default = "default_true")]
    pub branch_and_bound: bool,
    /// Solve the relaxed assignment first to detect infeasible locations and
    /// to stop as soon as the optimum is reached.
    #[serde(default = "default_true")]
    pub assignment_bound: bool,
    /// Solve locations concurrently on a rayon pool.
    #[serde(default = "default_true")]
    pub parallel: bool,
    /// Dedicated pool size. `None` runs on rayon's global pool.
    #[serde(default)]
    pub num_threads: Option<usize>,
}

fn default_true() -> bool {
    true
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            branch_and_bound: true,
            assignment_bound: true,
            parallel: true,
            num_threads: None,
        }
    }
}

impl SearchConfig {
    /// Plain depth-first enumeration of every branch, single-threaded.
    pub fn exhaustive() -> Self {
        Self {
            branch_and_bound: false,
            assignment_bound: false,
            parallel: false,
            num_threads: None,
        }
    }

    pub fn with_branch_and_bound(mut self, enabled: bool) -> Self {
        self.branch_and_bound = enabled;
        self
    }

    pub fn with_assignment_bound(mut self, enabled: bool) -> Self {
        self.assignment_bound = enabled;
        self
    }

    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    pub fn with_num_threads(mut self, threads: usize) -> Self {
        self.num_threads = Some(threads);
        self
    }
}
