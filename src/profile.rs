//! User profile - onboarding answers that drive the weekly plan

use std::collections::BTreeSet;
use std::fmt;

use anyhow::{bail, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How much training experience the user has
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum FitnessLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl FitnessLevel {
    pub fn label(&self) -> &'static str {
        match self {
            FitnessLevel::Beginner => "Beginner",
            FitnessLevel::Intermediate => "Intermediate",
            FitnessLevel::Advanced => "Advanced",
        }
    }

    pub fn all() -> &'static [FitnessLevel] {
        &[FitnessLevel::Beginner, FitnessLevel::Intermediate, FitnessLevel::Advanced]
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Goal {
    WeightLoss,
    Strength,
    Mobility,
    GeneralHealth,
}

impl Goal {
    pub fn label(&self) -> &'static str {
        match self {
            Goal::WeightLoss => "Weight Loss",
            Goal::Strength => "Build Strength",
            Goal::Mobility => "Improve Mobility",
            Goal::GeneralHealth => "General Health",
        }
    }

    pub fn all() -> &'static [Goal] {
        &[Goal::WeightLoss, Goal::Strength, Goal::Mobility, Goal::GeneralHealth]
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Equipment {
    None,
    Dumbbells,
    ResistanceBands,
    /// Dumbbells and bands
    Both,
}

impl Equipment {
    pub fn label(&self) -> &'static str {
        match self {
            Equipment::None => "No Equipment",
            Equipment::Dumbbells => "Dumbbells",
            Equipment::ResistanceBands => "Resistance Bands",
            Equipment::Both => "Full Setup",
        }
    }

    pub fn all() -> &'static [Equipment] {
        &[Equipment::None, Equipment::Dumbbells, Equipment::ResistanceBands, Equipment::Both]
    }
}

/// Physical limitation tags.
///
/// This is the one vocabulary used by onboarding, storage and the generator.
/// Older records spelled the tags as phrases ("Knee issues"), those are
/// accepted on load and mapped onto the same variants.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Limitation {
    #[serde(alias = "Knee issues")]
    Knee,
    #[serde(alias = "Back problems")]
    Back,
    #[serde(alias = "Shoulder concerns")]
    Shoulder,
}

impl Limitation {
    pub fn label(&self) -> &'static str {
        match self {
            Limitation::Knee => "Knee Issues",
            Limitation::Back => "Back Concerns",
            Limitation::Shoulder => "Shoulder Limitations",
        }
    }
}

/// Onboarding answers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub fitness_level: FitnessLevel,
    pub goal: Goal,
    pub equipment: Equipment,
    /// Training days per week, 1..=7
    pub weekly_days: u8,
    #[serde(default)]
    pub limitations: BTreeSet<Limitation>,
}

impl UserProfile {
    pub fn new(fitness_level: FitnessLevel, goal: Goal, equipment: Equipment, weekly_days: u8) -> Self {
        Self {
            fitness_level,
            goal,
            equipment,
            weekly_days,
            limitations: BTreeSet::new(),
        }
    }

    pub fn with_limitations(mut self, limitations: impl IntoIterator<Item = Limitation>) -> Self {
        self.limitations.extend(limitations);
        self
    }

    pub fn has_limitation(&self, limitation: Limitation) -> bool {
        self.limitations.contains(&limitation)
    }

    /// Onboarding check. The generator itself never rejects a profile.
    pub fn validate(&self) -> Result<()> {
        if !(1..=7).contains(&self.weekly_days) {
            bail!("weekly days must be between 1 and 7, got {}", self.weekly_days);
        }
        Ok(())
    }
}

impl fmt::Display for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {} day{}/week",
            self.fitness_level.label(),
            self.goal.label(),
            self.equipment.label(),
            self.weekly_days,
            if self.weekly_days == 1 { "" } else { "s" }
        )?;
        if !self.limitations.is_empty() {
            let names: Vec<_> = self.limitations.iter().map(|l| l.label()).collect();
            write!(f, " | {}", names.join(", "))?;
        }
        Ok(())
    }
}
