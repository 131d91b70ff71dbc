pub mod calculations;
pub mod config;
pub mod course;
pub mod enrollment;
pub mod error;
pub mod graph;
pub mod report;
pub mod schedule;

pub use calculations::{ColoringResult, GreedyColorAssigner, PeriodAssignment};
pub use config::SchedulerConfig;
pub use course::{Course, EnrollmentRecord};
pub use enrollment::{load_enrollments, parse_enrollments, read_enrollments};
pub use error::{SchedulerError, SchedulerResult};
pub use graph::builder::ConflictGraphBuilder;
pub use graph::{Adjacency, ConflictGraph};
pub use report::{
    ScheduleReport, render_adjacency_matrix, render_text, to_dot, write_csv, write_json,
};
pub use schedule::{ExamPeriod, ExamSchedule};
