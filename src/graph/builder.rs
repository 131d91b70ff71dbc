use super::ConflictGraph;
use crate::course::{Course, EnrollmentRecord};
use petgraph::graphmap::UnGraphMap;
use rayon::prelude::*;
use std::collections::HashMap;
use tracing::debug;

/// Accumulates enrollment records into a [`ConflictGraph`].
///
/// Courses become vertices the first time any record mentions them, and that
/// discovery order is the graph's canonical vertex order. Every pair of
/// distinct courses in one record becomes an edge; repeated pairs are no-ops.
#[derive(Debug, Default)]
pub struct ConflictGraphBuilder {
    courses: Vec<Course>,
    index: HashMap<Course, usize>,
    adjacency: UnGraphMap<usize, ()>,
    records: usize,
}

impl ConflictGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build<'r, I>(records: I) -> ConflictGraph
    where
        I: IntoIterator<Item = &'r EnrollmentRecord>,
    {
        let mut builder = Self::new();
        for record in records {
            builder.add_record(record);
        }
        builder.finish()
    }

    /// Same graph as [`ConflictGraphBuilder::build`], with pair extraction
    /// spread over `shard_size`-record shards.
    pub fn build_parallel(records: &[EnrollmentRecord], shard_size: usize) -> ConflictGraph {
        let mut builder = Self::new();

        // Discovery order must follow input order, so this pass stays sequential.
        for record in records {
            for course in &record.courses {
                builder.intern(course);
            }
        }

        let index = &builder.index;
        let shards: Vec<Vec<(usize, usize)>> = records
            .par_chunks(shard_size.max(1))
            .map(|shard| {
                let mut pairs = Vec::new();
                for record in shard {
                    let ids = distinct_ids(record.courses.iter().map(|c| index[c.as_str()]));
                    push_pairs(&ids, &mut pairs);
                }
                pairs
            })
            .collect();

        debug!(
            records = records.len(),
            shards = shards.len(),
            "merging conflict pairs"
        );
        for pairs in shards {
            for (a, b) in pairs {
                builder.adjacency.add_edge(a, b, ());
            }
        }
        builder.records = records.len();
        builder.finish()
    }

    pub fn add_record(&mut self, record: &EnrollmentRecord) {
        self.add_courses(&record.courses);
    }

    /// Records one student's course list. Fewer than two distinct courses adds no edges.
    pub fn add_courses(&mut self, courses: &[Course]) {
        let interned: Vec<usize> = courses.iter().map(|course| self.intern(course)).collect();
        let ids = distinct_ids(interned);
        let mut pairs = Vec::with_capacity(ids.len() * ids.len().saturating_sub(1) / 2);
        push_pairs(&ids, &mut pairs);
        for (a, b) in pairs {
            self.adjacency.add_edge(a, b, ());
        }
        self.records += 1;
    }

    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    pub fn finish(self) -> ConflictGraph {
        debug!(
            records = self.records,
            courses = self.courses.len(),
            conflicts = self.adjacency.edge_count(),
            "conflict graph built"
        );
        ConflictGraph::from_parts(self.courses, self.index, self.adjacency)
    }

    fn intern(&mut self, course: &Course) -> usize {
        if let Some(&id) = self.index.get(course.as_str()) {
            return id;
        }
        let id = self.courses.len();
        self.courses.push(course.clone());
        self.index.insert(course.clone(), id);
        self.adjacency.add_node(id);
        id
    }
}

fn distinct_ids<I: IntoIterator<Item = usize>>(ids: I) -> Vec<usize> {
    let mut out: Vec<usize> = Vec::new();
    for id in ids {
        if !out.contains(&id) {
            out.push(id);
        }
    }
    out
}

fn push_pairs(ids: &[usize], pairs: &mut Vec<(usize, usize)>) {
    for (pos, &a) in ids.iter().enumerate() {
        for &b in &ids[pos + 1..] {
            pairs.push((a, b));
        }
    }
}
