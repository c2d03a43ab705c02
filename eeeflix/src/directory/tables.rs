//! Static input tables for the generated directory.

use super::record::{Achievement, AchievementKind};

/// First roll number of the dataset; ids run contiguously from here.
pub const BASE_ROLL: u32 = 2301001;

/// Number of records in the directory.
pub const STUDENT_COUNT: usize = 60;

/// Batch prefix shared by every generated roll number.
pub const DEFAULT_BATCH_PREFIX: &str = "2301";

pub const YEAR: &str = "2023";
pub const SEMESTER: &str = "Spring";

/// Roster order matches roll order.
pub const STUDENT_NAMES: &[&str] = &[
    "MD. ASADULLAH",
    "MD. SIFAT ZAMAN",
    "MD. RAGIB ANJUM",
    "BIPRO KUMAR BASAK",
    "MD. SHAHRIA ISLAM",
    "MAHMUD E REZA",
    "FARHAN SADIK",
    "MORSHEDUL HASSAN",
    "MD. ARIF MAHAMUD",
    "MD. SHOPNIL",
    "MD. NOEM SIDDIKI",
    "AFZAR UZ ZAMAN BISWAS",
    "MD. MAHIR ASEF MUGDHO",
    "MUHAI MINUL ISLAM",
    "MD. MOJAHIDUL ISLAM",
    "MD. KIBRIA ALAM SHAFI",
    "MD. SAIFUL ISLAM",
    "SUMAIYA JAHAN",
    "ABDUL BAKEU BORSHON",
    "APURBA ROY DIGONTHA",
    "MST. JANNATUL FERDOUS",
    "MD. HABIBUR RAHMAN SHOPON",
    "MD. MAHADI HASSAN DIPU",
    "S. M. TAHSIN RIFAT",
    "SAYEED AL SAHAF",
    "SHAKIN MAHMUD TANVIR",
    "MD. TANVIR AHMED MAHIN",
    "NAHIYAN IBNAT NEHA",
    "AYMAN FAIZAH",
    "MD. SHAFIN KHAN",
    "TADRUP KUMAR DHAR",
    "MD. SAJEEB HUSSAIN",
    "NASRULLAH AL SAMI",
    "MD. AJMAIN FAYEK",
    "MD. TASNIM ALAM TURZO",
    "MD. SABBIR HOSSAIN SAKIB",
    "SEHRAN ALAM",
    "MD. MASHQURUL ALAM",
    "AMRITO SARKAR",
    "MOST. NAFISA MAHJABIN BORSHA",
    "SIMUL SHAHRIAR",
    "FAISAL MAHMUD FAHIM",
    "RIFA TAMANNA",
    "MD. MASUM LIEON",
    "THAMINA AKTER",
    "MD. YEAMINUL BASAR",
    "JAWAD UDDIN ALVI",
    "MD. SHIHAB -UN-SAKIB",
    "MD. NIYAMUL HAQUE NAYEEM",
    "MD. ABID HOSSAIN",
    "MD. HARUN TALUKDER",
    "MD. PROTIK HASAN",
    "RAF RAFIN KHAN KHAN",
    "TAHMIDUL HAQUE SAIF",
    "MD. SAJIDUR RAHMAN",
    "MD. RAKIN ABSAR RUDDRO",
    "FARDEEN AHMED",
    "MD. RIFATUL ISLAM",
    "MD. TASHRIF AHAMMED TUHIN",
    "MD. RAKEEB TANVIR SIDDIQUI",
];

pub const DESCRIPTIONS: &[&str] = &[
    "Leading research in renewable energy integration with smart grid technologies.",
    "Award-winning developer specializing in advanced embedded systems and IoT architectures.",
    "Publishing innovative machine learning solutions for predictive maintenance in power systems.",
    "Pioneering work in nanoscale VLSI design with focus on quantum computing applications.",
    "Developing next-generation control systems for aerospace and defense applications.",
    "Advancing signal processing algorithms for 6G communication networks.",
    "Creating breakthrough solutions in efficient power electronics for electric vehicles.",
    "Spearheading research in high-frequency RF engineering for advanced telecommunications.",
    "Leading projects on sustainable energy systems with international collaborations.",
    "Innovating in autonomous robotics systems with computer vision integration.",
];

pub const QUOTES: &[&str] = &[
    "স্বপ্ন সেটা নয় যা মানুষ ঘুমিয়ে দেখে, স্বপ্ন সেটাই যা মানুষকে ঘুমাতে দেয় না।",
    "Electricity is the power that fuels our future",
    "পরিশ্রম সৌভাগ্যের প্রসূতি।",
    "The best way to predict the future is to engineer it.",
    "যেখানে দেখিবে ছাই, উড়াইয়া দেখ তাই, পাইলেও পাইতে পারো অমূল্য রতন।",
    "Every circuit tells a story of current and resistance.",
];

/// Quote used for profiles that are not backed by a generated record.
pub const DEFAULT_QUOTE: &str = "Electricity is the power that fuels our future";

/// Names whose quote does not follow the rotating pool.
pub const QUOTE_OVERRIDES: &[(&str, &str)] = &[(
    "MD. SHAFIN KHAN",
    "আমি হব সকাল বেলার পাখি, সবার আগে কুসুম-বাগে উঠব আমি ডাকি।",
)];

pub const ACHIEVEMENT_POOL: &[Achievement] = &[
    Achievement::new(AchievementKind::Star, "Top Performer"),
    Achievement::new(AchievementKind::Academic, "Dean's List"),
    Achievement::new(AchievementKind::Academic, "High CGPA"),
    Achievement::new(AchievementKind::Award, "Project Award"),
    Achievement::new(AchievementKind::Award, "Innovation Award"),
    Achievement::new(AchievementKind::Star, "Research Excellence"),
];

/// Inclusive bounds on achievements attached to one record.
pub const MIN_ACHIEVEMENTS: usize = 1;
pub const MAX_ACHIEVEMENTS: usize = 3;

/// The set of tables a directory is generated from.
#[derive(Debug, Clone, Copy)]
pub struct Tables<'a> {
    pub names: &'a [&'a str],
    pub descriptions: &'a [&'a str],
    pub quotes: &'a [&'a str],
    pub quote_overrides: &'a [(&'a str, &'a str)],
    pub achievements: &'a [Achievement],
}

impl Tables<'static> {
    /// The department roster shipped with the site
    pub const fn builtin() -> Self {
        Self {
            names: STUDENT_NAMES,
            descriptions: DESCRIPTIONS,
            quotes: QUOTES,
            quote_overrides: QUOTE_OVERRIDES,
            achievements: ACHIEVEMENT_POOL,
        }
    }
}

impl Default for Tables<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> Tables<'a> {
    pub fn quote_for(&self, index: usize, name: &str) -> &'a str {
        self.quote_overrides
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, quote)| *quote)
            .or_else(|| pick(self.quotes, index))
            .unwrap_or(DEFAULT_QUOTE)
    }

    pub fn description_for(&self, index: usize) -> &'a str {
        pick(self.descriptions, index).unwrap_or_default()
    }
}

fn pick<'a>(pool: &[&'a str], index: usize) -> Option<&'a str> {
    if pool.is_empty() {
        None
    } else {
        Some(pool[index % pool.len()])
    }
}
