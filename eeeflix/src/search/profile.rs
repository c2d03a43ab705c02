use rand::Rng;
use serde::Serialize;
use std::borrow::Cow;
use tracing::{debug, info};

use crate::directory::generator::{placeholder_name, synthesize_contact};
use crate::directory::tables::{DEFAULT_QUOTE, SEMESTER, YEAR};
use crate::directory::{avatar_for_index, Directory, StudentRecord};

/// Roll number shown when the profile route carries no id
pub const DEFAULT_PROFILE_ID: &str = "2301019";

pub const DEPARTMENT: &str = "Electrical & Electronic Engineering";
pub const SERIES: &str = "23";
pub const SECTION: &str = "A";
pub const STATUS: &str = "Active";
pub const ADDRESS: &str = "University Campus, Building C";

/// Everything the profile page renders for one student
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentProfile<'a> {
    pub record: Cow<'a, StudentRecord>,
    pub department: &'static str,
    pub series: &'static str,
    pub section: &'static str,
    pub status: &'static str,
    pub address: &'static str,
    /// True when no directory record matched and a stand-in was built
    pub is_mock: bool,
}

/// Resolves a profile id against the directory.
///
/// An exact roll match wins, then the first roll containing `id`. Unknown
/// ids get a stand-in record so the page always has something to show.
pub fn resolve_profile<'a, R: Rng + ?Sized>(
    directory: &'a Directory,
    id: Option<&str>,
    asset_base: &str,
    rng: &mut R,
) -> StudentProfile<'a> {
    let id = id.map(str::trim).filter(|s| !s.is_empty()).unwrap_or(DEFAULT_PROFILE_ID);

    let found = directory
        .find_by_id(id)
        .or_else(|| directory.iter().find(|r| r.id.contains(id)));

    let (record, is_mock) = match found {
        Some(record) => {
            debug!("Profile {} resolved to {}", id, record.id);
            (Cow::Borrowed(record), false)
        }
        None => {
            info!("No student matches {}, building a stand-in profile", id);
            (Cow::Owned(mock_record(id, asset_base, rng)), true)
        }
    };

    StudentProfile {
        record,
        department: DEPARTMENT,
        series: SERIES,
        section: SECTION,
        status: STATUS,
        address: ADDRESS,
        is_mock,
    }
}

fn mock_record<R: Rng + ?Sized>(id: &str, asset_base: &str, rng: &mut R) -> StudentRecord {
    let name = placeholder_name(id);
    StudentRecord {
        avatar: avatar_for_index(mock_avatar_index(id), asset_base),
        contact: synthesize_contact(id, &name, rng),
        description: String::new(),
        quote: DEFAULT_QUOTE.to_string(),
        achievements: Vec::new(),
        year: YEAR.to_string(),
        semester: SEMESTER.to_string(),
        id: id.to_string(),
        name,
    }
}

/// Avatar position taken from the last two characters of the id
fn mock_avatar_index(id: &str) -> usize {
    let chars: Vec<char> = id.chars().collect();
    let start = chars.len().saturating_sub(2);
    chars[start..]
        .iter()
        .collect::<String>()
        .parse()
        .unwrap_or(0)
}
