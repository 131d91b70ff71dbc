pub mod greedy_coloring;

pub use greedy_coloring::{ColoringResult, GreedyColorAssigner, PeriodAssignment};
