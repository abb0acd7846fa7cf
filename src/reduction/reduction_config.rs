//! Configuration for the reduction driver.

use std::fmt;

/// Callback choosing among rendered safe-source candidates; receives the
/// candidates in diagram order and returns the index of the chosen one.
pub type SourceSelector = Box<dyn Fn(&[String]) -> usize>;

/// How the driver chooses among the safe sources of the reduced Hasse
/// diagram.
pub enum Strategy {
    /// Take the first safe source in diagram insertion order.
    Standard,
    /// Branch over all safe sources, depth-first, backtracking on failure.
    Exponential,
    /// Delegate the choice to an external selector.
    Interactive(SourceSelector),
}

impl fmt::Debug for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Standard => write!(f, "Standard"),
            Strategy::Exponential => write!(f, "Exponential"),
            Strategy::Interactive(_) => write!(f, "Interactive"),
        }
    }
}

/// A configuration object for the reduction driver, threaded through all
/// recursion levels.
#[derive(Debug)]
pub struct ReductionConfig {
    /// The safe-source selection strategy.
    pub strategy: Strategy,
}

impl ReductionConfig {
    /// Standard configuration: first safe source wins.
    pub fn new() -> ReductionConfig {
        ReductionConfig {
            strategy: Strategy::Standard,
        }
    }

    /// Configuration exploring every safe source.
    pub fn exponential() -> ReductionConfig {
        ReductionConfig {
            strategy: Strategy::Exponential,
        }
    }

    /// Configuration delegating safe-source choice to `selector`.
    pub fn interactive(selector: SourceSelector) -> ReductionConfig {
        ReductionConfig {
            strategy: Strategy::Interactive(selector),
        }
    }
}

impl Default for ReductionConfig {
    fn default() -> Self {
        ReductionConfig::new()
    }
}
