use exam_scheduler::EnrollmentRecord;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Seeded enrollment data: each student takes 1..=`max_load` courses out of `C0..C{catalog}`.
pub fn random_records(
    seed: u64,
    students: usize,
    catalog: usize,
    max_load: usize,
) -> Vec<EnrollmentRecord> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..students)
        .map(|s| {
            let load = rng.random_range(1..=max_load);
            let courses: Vec<String> = (0..load)
                .map(|_| format!("C{}", rng.random_range(0..catalog)))
                .collect();
            EnrollmentRecord::new(format!("s{s}"), courses)
        })
        .collect()
}
