use crate::course::Course;
use crate::error::SchedulerError;
use crate::graph::{Adjacency, ConflictGraph};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, warn};

/// One course and the 0-based exam period it was given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodAssignment {
    pub course: Course,
    pub period: usize,
}

/// Course to period mapping produced by [`GreedyColorAssigner`].
///
/// Assignments are kept in the order the courses were visited. Each course
/// appears once and the periods in use are exactly `0..period_count()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PeriodAssignment>", into = "Vec<PeriodAssignment>")]
pub struct ColoringResult {
    assignments: Vec<PeriodAssignment>,
    lookup: HashMap<Course, usize>,
}

impl ColoringResult {
    fn from_assignments(assignments: Vec<PeriodAssignment>) -> Self {
        let lookup = assignments
            .iter()
            .enumerate()
            .map(|(pos, a)| (a.course.clone(), pos))
            .collect();
        Self {
            assignments,
            lookup,
        }
    }

    pub fn period_of(&self, course: &str) -> Option<usize> {
        self.lookup
            .get(course)
            .map(|&pos| self.assignments[pos].period)
    }

    /// Number of distinct periods used. Periods are dense, so this is `max + 1`.
    pub fn period_count(&self) -> usize {
        self.assignments
            .iter()
            .map(|a| a.period)
            .max()
            .map_or(0, |max| max + 1)
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn assignments(&self) -> &[PeriodAssignment] {
        &self.assignments
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Course, usize)> + '_ {
        self.assignments.iter().map(|a| (&a.course, a.period))
    }

    /// Courses grouped by period; entry `p` holds period `p` in visiting order.
    pub fn courses_by_period(&self) -> Vec<Vec<Course>> {
        let mut groups = vec![Vec::new(); self.period_count()];
        for assignment in &self.assignments {
            groups[assignment.period].push(assignment.course.clone());
        }
        groups
    }

    /// Edges of `graph` whose two courses were both assigned the same period.
    pub fn conflicts<'g>(&self, graph: &'g ConflictGraph) -> Vec<(&'g Course, &'g Course)> {
        graph
            .edges()
            .into_iter()
            .filter(|(a, b)| match (self.period_of(a.as_str()), self.period_of(b.as_str())) {
                (Some(pa), Some(pb)) => pa == pb,
                _ => false,
            })
            .collect()
    }

    pub fn is_proper_for(&self, graph: &ConflictGraph) -> bool {
        self.conflicts(graph).is_empty()
    }
}

impl TryFrom<Vec<PeriodAssignment>> for ColoringResult {
    type Error = SchedulerError;

    fn try_from(value: Vec<PeriodAssignment>) -> Result<Self, Self::Error> {
        let result = Self::from_assignments(value);
        if result.lookup.len() != result.assignments.len() {
            let mut seen = BTreeSet::new();
            let repeated = result
                .assignments
                .iter()
                .find(|a| !seen.insert(a.course.as_str()))
                .map(|a| a.course.to_string())
                .unwrap_or_default();
            return Err(SchedulerError::InvalidColoring(format!(
                "course {repeated} is assigned more than once"
            )));
        }

        let periods: BTreeSet<usize> = result.assignments.iter().map(|a| a.period).collect();
        if let Some((pos, assigned)) = periods
            .iter()
            .enumerate()
            .find(|(pos, period)| *pos != **period)
        {
            return Err(SchedulerError::InvalidColoring(format!(
                "period {pos} is unused but period {assigned} is assigned"
            )));
        }
        Ok(result)
    }
}

impl From<ColoringResult> for Vec<PeriodAssignment> {
    fn from(value: ColoringResult) -> Self {
        value.assignments
    }
}

/// Sequential first-fit coloring.
///
/// Each visited course takes the smallest period not already held by one of
/// its colored neighbors. Neighbors that have not been visited yet impose
/// nothing, and a period is never revised once given. The result is proper
/// but carries no bound relative to the chromatic number.
pub struct GreedyColorAssigner<'a, G: Adjacency = ConflictGraph> {
    graph: &'a G,
}

impl<'a, G: Adjacency> GreedyColorAssigner<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }

    /// Colors courses in the given visiting order.
    ///
    /// Unknown and repeated entries are skipped; courses absent from `order`
    /// stay unassigned.
    pub fn assign<S: AsRef<str>>(&self, order: &[S]) -> ColoringResult {
        let mut seen = vec![false; self.graph.vertex_count()];
        let mut visit = Vec::with_capacity(order.len());
        for name in order {
            let name = name.as_ref();
            match self.graph.vertex_index(name) {
                Some(v) if !seen[v] => {
                    seen[v] = true;
                    visit.push(v);
                }
                Some(_) => warn!(course = name, "course repeated in visiting order, skipped"),
                None => warn!(course = name, "course not in conflict graph, skipped"),
            }
        }
        self.color_in_order(visit)
    }

    /// Colors every course in the graph's own discovery order.
    pub fn assign_canonical(&self) -> ColoringResult {
        self.color_in_order(0..self.graph.vertex_count())
    }

    fn color_in_order<I: IntoIterator<Item = usize>>(&self, visit: I) -> ColoringResult {
        let mut colors: Vec<Option<usize>> = vec![None; self.graph.vertex_count()];
        let mut taken = Vec::new();
        let mut assignments = Vec::new();

        for v in visit {
            let used = self.graph.adjacent_vertices(v).filter_map(|u| colors[u]);
            let period = smallest_free(used, &mut taken);
            colors[v] = Some(period);
            if let Some(course) = self.graph.vertex(v) {
                assignments.push(PeriodAssignment {
                    course: course.clone(),
                    period,
                });
            }
        }

        let result = ColoringResult::from_assignments(assignments);
        debug!(
            courses = result.len(),
            periods = result.period_count(),
            "greedy coloring complete"
        );
        result
    }
}

/// Smallest non-negative integer absent from `used`. `taken` is scratch space.
fn smallest_free<I: Iterator<Item = usize>>(used: I, taken: &mut Vec<bool>) -> usize {
    taken.clear();
    for color in used {
        if color >= taken.len() {
            taken.resize(color + 1, false);
        }
        taken[color] = true;
    }
    taken.iter().position(|&t| !t).unwrap_or(taken.len())
}
