use colored::Colorize;
use eeeflix::directory::StudentRecord;
use eeeflix::search::StudentProfile;
use eeeflix::DirectoryResult;
use itertools::Itertools;

/// Prints one line per record, or a JSON array
pub fn print_records(records: &[&StudentRecord], json: bool) -> DirectoryResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(records)?);
        return Ok(());
    }

    for record in records {
        println!("{}  {}", record.id.green(), record.name.bold());
    }
    println!("\n{} students", records.len());
    Ok(())
}

/// Prints query results, with the empty state the students page shows
pub fn print_search_results(
    text: &str,
    records: &[&StudentRecord],
    json: bool,
) -> DirectoryResult<()> {
    if json {
        println!("{}", serde_json::to_string(records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!(
            "No students found matching \"{}\". Try adjusting your search.",
            text
        );
        return Ok(());
    }

    if !text.is_empty() {
        println!("{}", format!("Search Results for \"{}\"", text).blue());
    }
    print_records(records, false)
}

pub fn print_featured(records: &[&StudentRecord], json: bool) -> DirectoryResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(records)?);
        return Ok(());
    }

    for (rank, record) in records.iter().enumerate() {
        let badges = record.achievements.iter().map(|a| a.label).join(", ");
        println!(
            "{}. {}  {}  [{}]",
            rank + 1,
            record.id.green(),
            record.name.bold(),
            badges.yellow()
        );
        println!("   {}", record.description);
    }
    Ok(())
}

pub fn print_profile(profile: &StudentProfile<'_>, json: bool) -> DirectoryResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(profile)?);
        return Ok(());
    }

    let record = &profile.record;
    println!("{}  {}", record.name.bold(), record.id.green());
    if profile.is_mock {
        println!("{}", "(not in the directory)".dimmed());
    }
    println!(
        "{} | Series {} | Section {} | {}",
        profile.department, profile.series, profile.section, profile.status
    );
    println!("{} {}", record.year, record.semester);
    println!();
    println!("\u{275D} {} \u{275E}", record.quote.italic());
    if !record.description.is_empty() {
        println!("{}", record.description);
    }
    if !record.achievements.is_empty() {
        let badges = record
            .achievements
            .iter()
            .map(|a| format!("{} ({})", a.label, a.kind))
            .join(", ");
        println!("Achievements: {}", badges.yellow());
    }
    println!();
    println!("Email:    {}", record.contact.email);
    println!("Phone:    {}", record.contact.phone);
    println!("Facebook: {}", record.contact.social_profile);
    println!("Address:  {}", profile.address);
    println!("Avatar:   {}", record.avatar.to_string().blue());
    Ok(())
}
