use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use tracing::{debug, info};

use super::avatar::avatar_for_index;
use super::record::{Achievement, ContactInfo, StudentRecord};
use super::tables::{
    Tables, BASE_ROLL, MAX_ACHIEVEMENTS, MIN_ACHIEVEMENTS, SEMESTER, STUDENT_COUNT, YEAR,
};
use super::Directory;

const EMAIL_DOMAIN: &str = "eeeflix.edu";
const SOCIAL_PROFILE_BASE: &str = "https://facebook.com/profile/";

static NON_ALPHANUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]").unwrap());

/// Options controlling one generation run
#[derive(Debug, Clone)]
pub struct GeneratorOptions<'a> {
    pub tables: Tables<'a>,
    pub base_roll: u32,
    /// Prefix prepended to every avatar path
    pub asset_base: String,
}

impl Default for GeneratorOptions<'static> {
    fn default() -> Self {
        Self {
            tables: Tables::builtin(),
            base_roll: BASE_ROLL,
            asset_base: String::new(),
        }
    }
}

/// Builds the standard 60-record directory.
///
/// Only contact filler digits and achievements draw from `rng`; every other
/// field is a function of the record's position.
pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Directory {
    generate_with(&GeneratorOptions::default(), rng)
}

pub fn generate_with<R: Rng + ?Sized>(options: &GeneratorOptions<'_>, rng: &mut R) -> Directory {
    info!(
        "Generating {} student records from roll {}",
        STUDENT_COUNT, options.base_roll
    );

    let records: Vec<StudentRecord> = (0..STUDENT_COUNT)
        .map(|index| build_record(options, index, rng))
        .collect();

    let synthesized = STUDENT_COUNT.saturating_sub(options.tables.names.len());
    if synthesized > 0 {
        debug!("{} records use placeholder names", synthesized);
    }

    Directory::new(records)
}

fn build_record<R: Rng + ?Sized>(
    options: &GeneratorOptions<'_>,
    index: usize,
    rng: &mut R,
) -> StudentRecord {
    let tables = &options.tables;
    let id = (options.base_roll as u64 + index as u64).to_string();
    let name = match tables.names.get(index) {
        Some(name) => name.to_string(),
        None => placeholder_name(&id),
    };

    StudentRecord {
        contact: synthesize_contact(&id, &name, rng),
        avatar: avatar_for_index(index, &options.asset_base),
        description: tables.description_for(index).to_string(),
        quote: tables.quote_for(index, &name).to_string(),
        achievements: random_achievements(tables.achievements, rng),
        year: YEAR.to_string(),
        semester: SEMESTER.to_string(),
        id,
        name,
    }
}

pub(crate) fn placeholder_name(id: &str) -> String {
    format!("Student {}", id)
}

/// Phone, social profile and email for a roll number.
///
/// The phone carries four random filler digits ahead of the roll's last five.
pub(crate) fn synthesize_contact<R: Rng + ?Sized>(
    id: &str,
    name: &str,
    rng: &mut R,
) -> ContactInfo {
    let filler: u16 = rng.gen_range(0..10_000);
    ContactInfo {
        phone: format!("+880 1{:04}-{}", filler, tail(id, 5)),
        social_profile: format!("{}{}", SOCIAL_PROFILE_BASE, id),
        email: format!("{}.{}@{}", slug(name), id, EMAIL_DOMAIN),
    }
}

fn random_achievements<R: Rng + ?Sized>(pool: &[Achievement], rng: &mut R) -> Vec<Achievement> {
    if pool.is_empty() {
        return Vec::new();
    }
    let count = rng.gen_range(MIN_ACHIEVEMENTS..=MAX_ACHIEVEMENTS);
    (0..count)
        .map(|_| pool[rng.gen_range(0..pool.len())])
        .collect()
}

fn slug(name: &str) -> String {
    NON_ALPHANUMERIC
        .replace_all(&name.to_lowercase(), "")
        .into_owned()
}

fn tail(s: &str, n: usize) -> &str {
    let start = s
        .char_indices()
        .rev()
        .nth(n.saturating_sub(1))
        .map(|(i, _)| i)
        .unwrap_or(0);
    &s[start..]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::tables::STUDENT_NAMES;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn seeded() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_generate_cardinality() {
        for seed in 0..5 {
            let directory = generate(&mut StdRng::seed_from_u64(seed));
            assert_eq!(directory.len(), STUDENT_COUNT);
        }
    }

    #[test]
    fn test_ids_contiguous_and_unique() {
        let directory = generate(&mut seeded());
        let ids: Vec<u32> = directory
            .records()
            .iter()
            .map(|r| r.id.parse().unwrap())
            .collect();
        for (offset, id) in ids.iter().enumerate() {
            assert_eq!(*id, BASE_ROLL + offset as u32);
        }
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn test_deterministic_fields() {
        let directory = generate(&mut seeded());
        let record = directory.get(6).unwrap();
        assert_eq!(record.id, "2301007");
        assert_eq!(record.name, STUDENT_NAMES[6]);
        assert_eq!(record.avatar.number, 7);
        assert_eq!(record.year, "2023");
        assert_eq!(record.semester, "Spring");
    }

    #[test]
    fn test_every_record_has_avatar_from_its_position() {
        let directory = generate(&mut seeded());
        for (index, record) in directory.records().iter().enumerate() {
            assert_eq!(record.avatar.number, index + 1);
            assert!(record.avatar.path.ends_with(&format!("avatar-{}.jpg", index + 1)));
        }
    }

    #[test]
    fn test_same_seed_same_directory() {
        let a = generate(&mut StdRng::seed_from_u64(7));
        let b = generate(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_placeholder_names_when_table_short() {
        let options = GeneratorOptions {
            tables: Tables {
                names: &["ONLY ONE"],
                ..Tables::builtin()
            },
            ..GeneratorOptions::default()
        };
        let directory = generate_with(&options, &mut seeded());
        assert_eq!(directory.len(), STUDENT_COUNT);
        assert_eq!(directory.get(0).unwrap().name, "ONLY ONE");
        assert_eq!(directory.get(1).unwrap().name, "Student 2301002");
        assert_eq!(directory.get(59).unwrap().name, "Student 2301060");
    }

    #[test]
    fn test_contact_shape() {
        let contact = synthesize_contact("2301030", "MD. SHAFIN KHAN", &mut seeded());
        assert!(contact.phone.starts_with("+880 1"));
        assert!(contact.phone.ends_with("-01030"));
        assert_eq!(contact.phone.len(), "+880 1xxxx-01030".len());
        assert_eq!(contact.social_profile, "https://facebook.com/profile/2301030");
        assert_eq!(contact.email, "mdshafinkhan.2301030@eeeflix.edu");
    }

    #[test]
    fn test_achievement_bounds() {
        let directory = generate(&mut seeded());
        for record in directory.records() {
            let n = record.achievement_count();
            assert!((MIN_ACHIEVEMENTS..=MAX_ACHIEVEMENTS).contains(&n));
        }
    }

    #[test]
    fn test_tail() {
        assert_eq!(tail("2301007", 5), "01007");
        assert_eq!(tail("42", 5), "42");
    }
}
