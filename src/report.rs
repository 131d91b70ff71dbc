use crate::config::SchedulerConfig;
use crate::course::Course;
use crate::error::SchedulerResult;
use crate::graph::ConflictGraph;
use crate::schedule::{ExamPeriod, ExamSchedule};
use petgraph::dot::{Config, Dot};
use petgraph::graph::UnGraph;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Write as _;
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleReport {
    pub courses: Vec<Course>,
    pub conflicts: Vec<(Course, Course)>,
    pub period_count: usize,
    pub periods: Vec<ExamPeriod>,
}

impl ScheduleReport {
    pub fn from_schedule(schedule: &ExamSchedule) -> Self {
        let graph = schedule.graph();
        Self {
            courses: graph.courses().to_vec(),
            conflicts: graph
                .edges()
                .into_iter()
                .map(|(a, b)| (a.clone(), b.clone()))
                .collect(),
            period_count: schedule.period_count(),
            periods: schedule.periods(),
        }
    }
}

#[derive(Serialize)]
struct PeriodCsvRecord<'a> {
    period: usize,
    course: &'a str,
}

pub fn render_text(schedule: &ExamSchedule) -> String {
    let mut out = String::from("Final Exam Schedule:\n");
    for period in schedule.periods() {
        let names: Vec<&str> = period.courses.iter().map(Course::as_str).collect();
        let _ = writeln!(out, "Final Exam Period {} -> {}", period.number, names.join(", "));
    }
    out
}

/// Tab-separated 0/1 table with course names as row and column headers.
pub fn render_adjacency_matrix(graph: &ConflictGraph) -> String {
    let mut out = String::from("Adjacency Matrix:\n");
    for course in graph.courses() {
        out.push('\t');
        out.push_str(course.as_str());
    }
    out.push('\n');
    for (course, row) in graph.courses().iter().zip(graph.adjacency_matrix()) {
        out.push_str(course.as_str());
        for cell in row {
            let _ = write!(out, "\t{cell}");
        }
        out.push('\n');
    }
    out
}

pub fn write_json<W: Write>(schedule: &ExamSchedule, writer: W) -> SchedulerResult<()> {
    serde_json::to_writer_pretty(writer, &ScheduleReport::from_schedule(schedule))?;
    Ok(())
}

/// One `period,course` row per course, periods numbered from 1.
pub fn write_csv<W: Write>(schedule: &ExamSchedule, writer: W) -> SchedulerResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for period in schedule.periods() {
        for course in &period.courses {
            wtr.serialize(PeriodCsvRecord {
                period: period.number,
                course: course.as_str(),
            })?;
        }
    }
    wtr.flush()?;
    Ok(())
}

/// Graphviz rendering of the conflict graph, each course filled with its period color.
pub fn to_dot(schedule: &ExamSchedule, config: &SchedulerConfig) -> String {
    let conflicts = schedule.graph();
    let mut graph: UnGraph<String, &str> = UnGraph::default();
    let mut fills = Vec::with_capacity(conflicts.course_count());
    let mut nodes = HashMap::with_capacity(conflicts.course_count());
    for (course, period) in schedule.coloring().iter() {
        fills.push(config.color_for_period(period).to_string());
        let node = graph.add_node(format!("{course} (period {})", period + 1));
        nodes.insert(course.as_str(), node);
    }
    for (a, b) in conflicts.edges() {
        if let (Some(&u), Some(&v)) = (nodes.get(a.as_str()), nodes.get(b.as_str())) {
            graph.add_edge(u, v, "");
        }
    }

    format!(
        "{}",
        Dot::with_attr_getters(
            &graph,
            &[Config::EdgeNoLabel],
            &|_, _| String::new(),
            &|_, (idx, _)| format!(
                "style=filled fillcolor=\"{}\"",
                fills[idx.index()].to_lowercase()
            ),
        )
    )
}
