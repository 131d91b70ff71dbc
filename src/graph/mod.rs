use crate::course::Course;
use petgraph::graphmap::UnGraphMap;
use std::collections::HashMap;

pub mod builder;

/// Read access to a conflict structure by vertex index.
///
/// Vertex indices are dense (`0..vertex_count()`) and follow the canonical
/// discovery order of the courses.
pub trait Adjacency {
    fn vertex_count(&self) -> usize;
    fn vertex_index(&self, course: &str) -> Option<usize>;
    fn vertex(&self, index: usize) -> Option<&Course>;
    fn adjacent_vertices(&self, index: usize) -> impl Iterator<Item = usize> + '_;
}

/// Courses as vertices, shared enrollment as undirected edges.
///
/// Produced by [`builder::ConflictGraphBuilder`]; there is no way to mutate a
/// graph once it has been built.
#[derive(Debug, Clone)]
pub struct ConflictGraph {
    courses: Vec<Course>,
    index: HashMap<Course, usize>,
    adjacency: UnGraphMap<usize, ()>,
}

impl ConflictGraph {
    pub(crate) fn from_parts(
        courses: Vec<Course>,
        index: HashMap<Course, usize>,
        adjacency: UnGraphMap<usize, ()>,
    ) -> Self {
        Self {
            courses,
            index,
            adjacency,
        }
    }

    /// Courses in the order they were first seen in the enrollment records.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn index_of(&self, course: &str) -> Option<usize> {
        self.index.get(course).copied()
    }

    pub fn course(&self, index: usize) -> Option<&Course> {
        self.courses.get(index)
    }

    pub fn contains(&self, course: &str) -> bool {
        self.index.contains_key(course)
    }

    /// False for unknown courses and for a course paired with itself.
    pub fn are_adjacent(&self, a: &str, b: &str) -> bool {
        match (self.index_of(a), self.index_of(b)) {
            (Some(i), Some(j)) => self.are_adjacent_indices(i, j),
            _ => false,
        }
    }

    pub fn are_adjacent_indices(&self, i: usize, j: usize) -> bool {
        i != j && self.adjacency.contains_edge(i, j)
    }

    pub fn neighbor_indices(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency.neighbors(index)
    }

    /// Courses sharing at least one student with `course`. Empty for unknown courses.
    pub fn neighbors(&self, course: &str) -> impl Iterator<Item = &Course> + '_ {
        self.index_of(course)
            .into_iter()
            .flat_map(move |i| self.neighbor_indices(i))
            .map(move |j| &self.courses[j])
    }

    pub fn degree(&self, course: &str) -> usize {
        self.index_of(course)
            .map(|i| self.adjacency.neighbors(i).count())
            .unwrap_or(0)
    }

    /// Every conflict once, earlier-discovered course first, sorted by discovery index.
    pub fn edges(&self) -> Vec<(&Course, &Course)> {
        let mut pairs: Vec<(usize, usize)> = self
            .adjacency
            .all_edges()
            .map(|(a, b, _)| if a < b { (a, b) } else { (b, a) })
            .collect();
        pairs.sort_unstable();
        pairs
            .into_iter()
            .map(|(a, b)| (&self.courses[a], &self.courses[b]))
            .collect()
    }

    /// Dense 0/1 matrix in canonical order. Costs O(V^2); meant for small inputs and display.
    pub fn adjacency_matrix(&self) -> Vec<Vec<u8>> {
        let n = self.courses.len();
        let mut matrix = vec![vec![0u8; n]; n];
        for (a, b, _) in self.adjacency.all_edges() {
            matrix[a][b] = 1;
            matrix[b][a] = 1;
        }
        matrix
    }
}

impl PartialEq for ConflictGraph {
    fn eq(&self, other: &Self) -> bool {
        self.courses == other.courses && self.edges() == other.edges()
    }
}

impl Eq for ConflictGraph {}

impl Adjacency for ConflictGraph {
    fn vertex_count(&self) -> usize {
        self.course_count()
    }

    fn vertex_index(&self, course: &str) -> Option<usize> {
        self.index_of(course)
    }

    fn vertex(&self, index: usize) -> Option<&Course> {
        self.course(index)
    }

    fn adjacent_vertices(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.neighbor_indices(index)
    }
}
