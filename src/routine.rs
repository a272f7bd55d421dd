//! Routine generator - turns a profile into a 7-day plan
//!
//! Pure and deterministic: the same profile and catalog always give the
//! same schedule.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{Catalog, Dose, ExerciseTemplate};
use crate::profile::{Limitation, UserProfile};

pub const DAYS_PER_WEEK: usize = 7;

pub const REST_DAY_DESCRIPTION: &str =
    "Light stretching or gentle walking is encouraged. Listen to your body.";

/// One generated week, index-ordered 0..6
pub type Schedule = [DayRoutine; DAYS_PER_WEEK];

/// Exercise dosage. Serialized as exactly one of `sets` or `duration`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dosage {
    Sets(String),
    Duration(String),
}

impl Dosage {
    pub fn as_str(&self) -> &str {
        match self {
            Dosage::Sets(s) | Dosage::Duration(s) => s,
        }
    }
}

impl From<Dose> for Dosage {
    fn from(dose: Dose) -> Self {
        match dose {
            Dose::Sets(s) => Dosage::Sets(s.to_string()),
            Dose::Duration(s) => Dosage::Duration(s.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    pub instructions: String,
    #[serde(flatten)]
    pub dosage: Dosage,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub modification: Option<String>,
}

/// Rest day or workout day
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayKind {
    Rest { description: String },
    Workout { exercises: Vec<Exercise> },
}

/// One day of the plan.
///
/// Serialized as `{ day, title, isRestDay, exercises | description }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DayRecord", into = "DayRecord")]
pub struct DayRoutine {
    /// Zero-based index into the week
    pub day: usize,
    pub title: String,
    pub kind: DayKind,
}

/// Flat record form of a day
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DayRecord {
    day: usize,
    title: String,
    is_rest_day: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    exercises: Option<Vec<Exercise>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    description: Option<String>,
}

impl From<DayRoutine> for DayRecord {
    fn from(routine: DayRoutine) -> Self {
        let (is_rest_day, exercises, description) = match routine.kind {
            DayKind::Rest { description } => (true, None, Some(description)),
            DayKind::Workout { exercises } => (false, Some(exercises), None),
        };
        Self {
            day: routine.day,
            title: routine.title,
            is_rest_day,
            exercises,
            description,
        }
    }
}

impl TryFrom<DayRecord> for DayRoutine {
    type Error = String;

    fn try_from(record: DayRecord) -> Result<Self, Self::Error> {
        let kind = match (record.is_rest_day, record.exercises, record.description) {
            (true, None, Some(description)) => DayKind::Rest { description },
            (false, Some(exercises), None) if !exercises.is_empty() => DayKind::Workout { exercises },
            _ => {
                return Err(format!(
                    "day {} must be a rest day with a description or a workout day with exercises",
                    record.day
                ));
            }
        };
        Ok(Self {
            day: record.day,
            title: record.title,
            kind,
        })
    }
}

impl DayRoutine {
    pub fn is_rest_day(&self) -> bool {
        matches!(self.kind, DayKind::Rest { .. })
    }

    pub fn exercises(&self) -> Option<&[Exercise]> {
        match &self.kind {
            DayKind::Workout { exercises } => Some(exercises),
            DayKind::Rest { .. } => None,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match &self.kind {
            DayKind::Rest { description } => Some(description),
            DayKind::Workout { .. } => None,
        }
    }

    pub fn intensity(&self) -> Intensity {
        Intensity::for_day(self)
    }
}

/// Display label for how hard a day is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intensity {
    ActiveRecovery,
    HighIntensity,
    PowerTraining,
    PeakPerformance,
}

impl Intensity {
    fn for_day(day: &DayRoutine) -> Self {
        if day.is_rest_day() {
            Intensity::ActiveRecovery
        } else if day.day <= 2 {
            Intensity::HighIntensity
        } else if day.day <= 4 {
            Intensity::PowerTraining
        } else {
            Intensity::PeakPerformance
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Intensity::ActiveRecovery => "Active Recovery",
            Intensity::HighIntensity => "High Intensity",
            Intensity::PowerTraining => "Power Training",
            Intensity::PeakPerformance => "Peak Performance",
        }
    }
}

/// Generate the week from the built-in catalog
pub fn generate(profile: &UserProfile) -> Schedule {
    generate_with(profile, Catalog::builtin())
}

/// Generate the week from an explicit catalog.
///
/// Never fails: lookups that miss the catalog resolve to its base entries.
pub fn generate_with(profile: &UserProfile, catalog: &Catalog) -> Schedule {
    let workout_days = usize::from(profile.weekly_days).clamp(1, DAYS_PER_WEEK);
    let rest_days = rest_day_indices(DAYS_PER_WEEK - workout_days);
    debug!(workout_days, ?rest_days, "Generating schedule");

    let titles = catalog.titles(profile.goal, profile.equipment);
    let templates = catalog.exercises(profile.fitness_level, profile.goal);

    std::array::from_fn(|day| {
        if rest_days.contains(&day) {
            DayRoutine {
                day,
                title: format!("Day {}: Rest & Recovery", day + 1),
                kind: DayKind::Rest {
                    description: REST_DAY_DESCRIPTION.to_string(),
                },
            }
        } else {
            // Absolute day index, so rest days shift which title follows them
            let workout = titles[day % titles.len()];
            DayRoutine {
                day,
                title: format!("Day {}: {}", day + 1, workout),
                kind: DayKind::Workout {
                    exercises: templates.iter().map(|t| build_exercise(t, profile)).collect(),
                },
            }
        }
    })
}

/// Spread `count` rest days across the week, each at the back of its interval
pub fn rest_day_indices(count: usize) -> BTreeSet<usize> {
    if count == 0 {
        return BTreeSet::new();
    }
    let interval = DAYS_PER_WEEK / (count + 1);
    (1..=count)
        .filter_map(|i| (i * interval).checked_sub(1))
        .map(|day| day.min(DAYS_PER_WEEK - 1))
        .collect()
}

fn build_exercise(template: &ExerciseTemplate, profile: &UserProfile) -> Exercise {
    Exercise {
        name: template.name.to_string(),
        instructions: template.instructions.to_string(),
        dosage: template.dose.into(),
        modification: modification_for(template.name, profile).map(str::to_string),
    }
}

const MODIFICATION_RULES: &[(Limitation, &[&str], &str)] = &[
    (
        Limitation::Knee,
        &["Squat", "Lunge"],
        "Reduce range of motion or perform seated alternative",
    ),
    (
        Limitation::Back,
        &["Plank", "Burpee"],
        "Focus on form, reduce intensity or choose alternative",
    ),
    (
        Limitation::Shoulder,
        &["Push-up"],
        "Perform on knees or against wall to reduce shoulder load",
    ),
];

/// Modification advice for an exercise, if any rule fires. Later rules win.
pub fn modification_for(exercise_name: &str, profile: &UserProfile) -> Option<&'static str> {
    MODIFICATION_RULES
        .iter()
        .filter(|(limitation, patterns, _)| {
            profile.has_limitation(*limitation) && patterns.iter().any(|p| exercise_name.contains(p))
        })
        .map(|(_, _, advice)| *advice)
        .last()
}
