/// The in-memory student directory.
///
/// A [`Directory`] is produced once by [`generate`] and never mutated
/// afterwards. Callers hold it by value at the composition root and hand out
/// shared references; every derived view (query results, featured picks)
/// borrows records from it instead of copying them.
///
/// ```rust,ignore
/// let mut rng = StdRng::seed_from_u64(7);
/// let directory = generate(&mut rng);
/// assert_eq!(directory.len(), 60);
/// let batch = directory.batch("2301");
/// ```
pub mod avatar;
pub mod generator;
pub mod record;
pub mod tables;

pub use avatar::{avatar_for_index, optimized_image_path, AvatarRef, ImageCapabilities};
pub use generator::{generate, generate_with, GeneratorOptions};
pub use record::{Achievement, AchievementKind, ContactInfo, StudentRecord};
pub use tables::{Tables, BASE_ROLL, DEFAULT_BATCH_PREFIX, STUDENT_COUNT};

use serde::Serialize;

/// Immutable, ordered collection of student records
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Directory {
    records: Vec<StudentRecord>,
}

impl Directory {
    pub(crate) fn new(records: Vec<StudentRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&StudentRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StudentRecord> {
        self.records.iter()
    }

    /// Exact roll number lookup
    pub fn find_by_id(&self, id: &str) -> Option<&StudentRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Records whose roll number starts with `prefix`, in directory order
    pub fn batch(&self, prefix: &str) -> Vec<&StudentRecord> {
        self.records
            .iter()
            .filter(|r| r.id.starts_with(prefix))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Directory {
    type Item = &'a StudentRecord;
    type IntoIter = std::slice::Iter<'a, StudentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
