use crate::calculations::{ColoringResult, GreedyColorAssigner};
use crate::config::SchedulerConfig;
use crate::course::{Course, EnrollmentRecord};
use crate::graph::ConflictGraph;
use crate::graph::builder::ConflictGraphBuilder;
use serde::{Deserialize, Serialize};
use tracing::info;

/// All courses sitting their exam in the same period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamPeriod {
    /// 0-based period index as assigned by the coloring.
    pub index: usize,
    /// 1-based period number for display.
    pub number: usize,
    pub courses: Vec<Course>,
}

/// A conflict graph together with its greedy period assignment.
#[derive(Debug, Clone)]
pub struct ExamSchedule {
    graph: ConflictGraph,
    coloring: ColoringResult,
}

impl ExamSchedule {
    pub fn from_records(records: &[EnrollmentRecord], config: &SchedulerConfig) -> Self {
        let graph = if records.len() >= config.parallel_threshold {
            ConflictGraphBuilder::build_parallel(records, config.shard_size)
        } else {
            ConflictGraphBuilder::build(records)
        };
        Self::from_graph(graph)
    }

    /// Colors `graph` in its canonical discovery order.
    pub fn from_graph(graph: ConflictGraph) -> Self {
        let coloring = GreedyColorAssigner::new(&graph).assign_canonical();
        info!(
            courses = graph.course_count(),
            conflicts = graph.edge_count(),
            periods = coloring.period_count(),
            "exam schedule computed"
        );
        Self { graph, coloring }
    }

    pub fn graph(&self) -> &ConflictGraph {
        &self.graph
    }

    pub fn coloring(&self) -> &ColoringResult {
        &self.coloring
    }

    pub fn period_count(&self) -> usize {
        self.coloring.period_count()
    }

    pub fn period_of(&self, course: &str) -> Option<usize> {
        self.coloring.period_of(course)
    }

    pub fn periods(&self) -> Vec<ExamPeriod> {
        self.coloring
            .courses_by_period()
            .into_iter()
            .enumerate()
            .map(|(index, courses)| ExamPeriod {
                index,
                number: index + 1,
                courses,
            })
            .collect()
    }
}
