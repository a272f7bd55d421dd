//! Export - plain text and JSON renderings of the plan

use std::fmt::{self, Write};

use anyhow::Result;
use chrono::{DateTime, Local};
use clap::ValueEnum;
use serde::Serialize;

use crate::profile::UserProfile;
use crate::progress::Progress;
use crate::routine::{DayKind, DayRoutine, Dosage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Text,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Json => "json",
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportDocument<'a> {
    exported_at: DateTime<Local>,
    profile: &'a UserProfile,
    progress: &'a Progress,
    completion_percentage: u32,
    schedule: &'a [DayRoutine],
}

pub fn export(
    format: ExportFormat,
    profile: &UserProfile,
    schedule: &[DayRoutine],
    progress: &Progress,
    now: DateTime<Local>,
) -> Result<String> {
    match format {
        ExportFormat::Text => to_text(profile, schedule, progress, now),
        ExportFormat::Json => to_json(profile, schedule, progress, now),
    }
}

pub fn to_json(
    profile: &UserProfile,
    schedule: &[DayRoutine],
    progress: &Progress,
    now: DateTime<Local>,
) -> Result<String> {
    let doc = ExportDocument {
        exported_at: now,
        profile,
        progress,
        completion_percentage: progress.completion_percentage(schedule.len()),
        schedule,
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

pub fn to_text(
    profile: &UserProfile,
    schedule: &[DayRoutine],
    progress: &Progress,
    now: DateTime<Local>,
) -> Result<String> {
    let mut out = String::new();
    write_text(&mut out, profile, schedule, progress, now)?;
    Ok(out)
}

fn write_text(
    out: &mut String,
    profile: &UserProfile,
    schedule: &[DayRoutine],
    progress: &Progress,
    now: DateTime<Local>,
) -> fmt::Result {
    writeln!(out, "FITPATH WORKOUT PLAN")?;
    writeln!(out, "Generated: {}", now.format("%Y-%m-%d %H:%M"))?;
    writeln!(out, "{:=<60}", "")?;
    writeln!(out, "Profile: {}", profile)?;
    writeln!(
        out,
        "Progress: {}/{} days completed ({}%)",
        progress.completed_days.len(),
        schedule.len(),
        progress.completion_percentage(schedule.len())
    )?;

    for day in schedule {
        writeln!(out)?;
        let mark = if progress.is_completed(day.day) { "[x]" } else { "[ ]" };
        writeln!(out, "{} {}", mark, day.title)?;
        writeln!(out, "{:-<60}", "")?;

        match &day.kind {
            DayKind::Rest { description } => writeln!(out, "  {}", description)?,
            DayKind::Workout { exercises } => {
                for (i, ex) in exercises.iter().enumerate() {
                    let dosage = match &ex.dosage {
                        Dosage::Sets(s) => format!("Sets: {}", s),
                        Dosage::Duration(s) => format!("Duration: {}", s),
                    };
                    writeln!(out, "  {}. {} ({})", i + 1, ex.name, dosage)?;
                    writeln!(out, "     {}", ex.instructions)?;
                    if let Some(modification) = &ex.modification {
                        writeln!(out, "     Modification: {}", modification)?;
                    }
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{Equipment, FitnessLevel, Goal, Limitation};
    use crate::routine::{generate, REST_DAY_DESCRIPTION};

    fn fixture() -> (UserProfile, Vec<DayRoutine>, Progress) {
        let profile = UserProfile::new(FitnessLevel::Intermediate, Goal::Strength, Equipment::None, 6)
            .with_limitations([Limitation::Knee]);
        let schedule = generate(&profile).to_vec();
        let mut progress = Progress::new();
        progress.toggle_day(0);
        (profile, schedule, progress)
    }

    #[test]
    fn test_text_export_contains_every_day() {
        let (profile, schedule, progress) = fixture();
        let text = to_text(&profile, &schedule, &progress, Local::now()).unwrap();
        for day in &schedule {
            assert!(text.contains(&day.title), "missing {}", day.title);
        }
        assert!(text.contains("[x] Day 1:"));
        assert!(text.contains("[ ] Day 2:"));
        assert!(text.contains(REST_DAY_DESCRIPTION));
        assert!(text.contains("1/7 days completed (14%)"));
    }

    #[test]
    fn test_text_export_lists_dosage_and_modifications() {
        let (profile, schedule, progress) = fixture();
        let text = to_text(&profile, &schedule, &progress, Local::now()).unwrap();
        assert!(text.contains("Push-ups (Sets: 10-15 reps x 3)"));
        assert!(text.contains("Plank (Duration: 30-45 seconds x 3)"));
        assert!(text.contains("Modification: Reduce range of motion or perform seated alternative"));
    }

    #[test]
    fn test_json_export_shape() {
        let (profile, schedule, progress) = fixture();
        let json = to_json(&profile, &schedule, &progress, Local::now()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["profile"]["goal"], "strength");
        assert_eq!(value["progress"]["completedDays"][0], 0);
        assert_eq!(value["completionPercentage"], 14);
        assert_eq!(value["schedule"].as_array().unwrap().len(), 7);
        assert_eq!(value["schedule"][0]["isRestDay"], false);
        assert_eq!(value["schedule"][2]["isRestDay"], true);
        assert!(value["exportedAt"].is_string());
    }

    #[test]
    fn test_export_dispatch() {
        let (profile, schedule, progress) = fixture();
        let text = export(ExportFormat::Text, &profile, &schedule, &progress, Local::now()).unwrap();
        assert!(text.starts_with("FITPATH WORKOUT PLAN"));
        let json = export(ExportFormat::Json, &profile, &schedule, &progress, Local::now()).unwrap();
        assert!(json.trim_start().starts_with('{'));
        assert_eq!(ExportFormat::Json.extension(), "json");
    }
}
