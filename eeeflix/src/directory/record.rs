use serde::Serialize;
use std::fmt;

use super::avatar::AvatarRef;

/// Category an achievement badge is drawn under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementKind {
    Star,
    Academic,
    Award,
}

impl fmt::Display for AchievementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AchievementKind::Star => "star",
            AchievementKind::Academic => "academic",
            AchievementKind::Award => "award",
        };
        f.write_str(name)
    }
}

/// A badge attached to a student record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Achievement {
    #[serde(rename = "type")]
    pub kind: AchievementKind,
    pub label: &'static str,
}

impl Achievement {
    pub const fn new(kind: AchievementKind, label: &'static str) -> Self {
        Self { kind, label }
    }
}

/// Contact details shown on a profile page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactInfo {
    pub phone: String,
    pub social_profile: String,
    pub email: String,
}

/// One directory entry.
///
/// Every field is always present; records without achievements carry an
/// empty list rather than a missing one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentRecord {
    /// Roll number, e.g. `"2301007"`
    pub id: String,
    pub name: String,
    pub avatar: AvatarRef,
    pub contact: ContactInfo,
    pub description: String,
    pub quote: String,
    pub achievements: Vec<Achievement>,
    pub year: String,
    pub semester: String,
}

impl StudentRecord {
    pub fn achievement_count(&self) -> usize {
        self.achievements.len()
    }

    /// Case-insensitive substring match against name or roll number.
    /// `needle` must already be lowercase.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.id.to_lowercase().contains(needle)
    }
}
