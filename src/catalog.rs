//! Exercise catalog - static workout tables keyed by profile attributes
//!
//! Two tables:
//! - exercises by (fitness level, goal): one workout worth of movements
//! - workout titles by (goal, equipment): a cycle of four names
//!
//! Both tables carry a required base entry that every missed lookup falls
//! back to, so a lookup always resolves.

use crate::profile::{Equipment, FitnessLevel, Goal};

/// Number of titles in one title cycle
pub const TITLES_PER_CYCLE: usize = 4;

/// How an exercise is dosed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dose {
    /// Repetition scheme, e.g. "10 reps x 3"
    Sets(&'static str),
    /// Time based, e.g. "30 seconds x 3"
    Duration(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseTemplate {
    pub name: &'static str,
    pub instructions: &'static str,
    pub dose: Dose,
}

#[derive(Debug, Clone, Copy)]
pub struct ExerciseEntry {
    pub level: FitnessLevel,
    pub goal: Goal,
    pub exercises: &'static [ExerciseTemplate],
}

#[derive(Debug, Clone, Copy)]
pub struct TitleEntry {
    pub goal: Goal,
    pub equipment: Equipment,
    pub titles: [&'static str; TITLES_PER_CYCLE],
}

/// Read-only lookup tables with mandatory fallbacks
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    base_exercises: &'static [ExerciseTemplate],
    base_titles: [&'static str; TITLES_PER_CYCLE],
    exercises: &'static [ExerciseEntry],
    titles: &'static [TitleEntry],
}

impl Catalog {
    /// Build a catalog. The base entries are what every missed lookup
    /// resolves to, so the base exercise list must not be empty.
    pub const fn new(
        base_exercises: &'static [ExerciseTemplate],
        base_titles: [&'static str; TITLES_PER_CYCLE],
        exercises: &'static [ExerciseEntry],
        titles: &'static [TitleEntry],
    ) -> Self {
        assert!(!base_exercises.is_empty(), "catalog base exercise list must not be empty");
        Self { base_exercises, base_titles, exercises, titles }
    }

    /// Built-in catalog
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Exercise list for (level, goal), falling back to the base list
    pub fn exercises(&self, level: FitnessLevel, goal: Goal) -> &'static [ExerciseTemplate] {
        self.exercises
            .iter()
            .find(|e| e.level == level && e.goal == goal && !e.exercises.is_empty())
            .map(|e| e.exercises)
            .unwrap_or(self.base_exercises)
    }

    /// Title cycle for (goal, equipment), falling back to the base cycle
    pub fn titles(&self, goal: Goal, equipment: Equipment) -> &[&'static str; TITLES_PER_CYCLE] {
        self.titles
            .iter()
            .find(|t| t.goal == goal && t.equipment == equipment)
            .map(|t| &t.titles)
            .unwrap_or(&self.base_titles)
    }
}

const fn sets(name: &'static str, instructions: &'static str, dose: &'static str) -> ExerciseTemplate {
    ExerciseTemplate { name, instructions, dose: Dose::Sets(dose) }
}

const fn timed(name: &'static str, instructions: &'static str, dose: &'static str) -> ExerciseTemplate {
    ExerciseTemplate { name, instructions, dose: Dose::Duration(dose) }
}

// === BEGINNER ===

const BEGINNER_WEIGHT_LOSS: &[ExerciseTemplate] = &[
    timed("Marching in Place", "Lift knees alternately, keep core engaged", "2 minutes"),
    timed("Wall Sit", "Slide down wall until knees are at 90 degrees", "30 seconds x 3"),
    timed("Arm Circles", "Small circles forward, then backward", "1 minute each direction"),
    timed("Step Touches", "Step side to side, add arm movements", "2 minutes"),
    timed("Modified Plank", "Hold on knees or against wall", "20 seconds x 3"),
    sets("Calf Raises", "Rise up on toes, lower slowly", "15 reps x 3"),
];

const BEGINNER_STRENGTH: &[ExerciseTemplate] = &[
    sets("Wall Push-ups", "Push against wall, keep body straight", "10 reps x 3"),
    sets("Chair Squats", "Sit and stand without using hands", "10 reps x 3"),
    sets("Glute Bridges", "Lie on back, lift hips", "12 reps x 3"),
    sets("Standing Rows", "Pull arms back, squeeze shoulder blades", "12 reps x 3"),
    sets("Calf Raises", "Rise up on toes", "15 reps x 3"),
    sets("Side Leg Lifts", "Lift leg to side, keep straight", "10 each x 2"),
];

const BEGINNER_MOBILITY: &[ExerciseTemplate] = &[
    timed("Cat-Cow Stretch", "Arch and round back slowly", "1 minute"),
    timed("Shoulder Rolls", "Roll shoulders forward and backward", "30 seconds each"),
    timed("Gentle Twists", "Rotate torso side to side", "1 minute"),
    timed("Ankle Circles", "Rotate ankles in both directions", "30 seconds each"),
    timed("Neck Stretches", "Gentle side bends and chin tucks", "1 minute"),
    timed("Hip Circles", "Circle hips in both directions", "30 seconds each"),
];

const BEGINNER_GENERAL_HEALTH: &[ExerciseTemplate] = &[
    timed("Walking in Place", "Lift knees, swing arms naturally", "3 minutes"),
    sets("Arm Raises", "Raise arms overhead and lower", "12 reps x 3"),
    sets("Leg Swings", "Swing leg forward and back", "10 each x 2"),
    timed("Torso Twists", "Rotate upper body side to side", "1 minute"),
    timed("Deep Breathing", "Inhale deeply, exhale slowly", "2 minutes"),
    sets("Heel Raises", "Rise onto balls of feet", "15 reps x 3"),
];

// === INTERMEDIATE ===

const INTERMEDIATE_WEIGHT_LOSS: &[ExerciseTemplate] = &[
    timed("Jumping Jacks", "Jump while spreading arms and legs", "45 seconds x 3"),
    sets("Bodyweight Squats", "Lower to 90 degrees, keep chest up", "15 reps x 3"),
    timed("Mountain Climbers", "Alternate knees to chest quickly", "30 seconds x 3"),
    sets("Burpees", "Squat, jump back, push-up, jump up", "8 reps x 3"),
    timed("High Knees", "Run in place bringing knees high", "30 seconds x 3"),
    timed("Plank Jacks", "Plank position, jump feet apart and together", "30 seconds x 3"),
];

const INTERMEDIATE_STRENGTH: &[ExerciseTemplate] = &[
    sets("Push-ups", "Full push-ups or on knees", "10-15 reps x 3"),
    sets("Lunges", "Step forward, lower back knee", "10 each x 3"),
    timed("Plank", "Hold straight body position", "30-45 seconds x 3"),
    sets("Dips", "Use chair or bench", "10-12 reps x 3"),
    sets("Superman", "Lift chest and arms off floor", "12 reps x 3"),
    timed("Side Plank", "Hold on each side", "20 seconds each x 2"),
];

const INTERMEDIATE_MOBILITY: &[ExerciseTemplate] = &[
    timed("Sun Salutation Flow", "Flow through yoga sequence", "5 minutes"),
    timed("Hip Flexor Stretch", "Kneeling lunge position", "30 seconds each"),
    timed("Thoracic Rotation", "Rotate upper spine", "1 minute"),
    timed("Dynamic Hamstring", "Swing leg forward and back", "30 seconds each"),
    timed("Shoulder Mobility", "Arm circles and crosses", "2 minutes"),
    timed("Ankle Mobility", "Rock forward and back", "1 minute each"),
];

const INTERMEDIATE_GENERAL_HEALTH: &[ExerciseTemplate] = &[
    timed("Brisk Walk in Place", "Quick pace with arm movement", "5 minutes"),
    sets("Squat to Reach", "Squat and reach overhead", "12 reps x 3"),
    sets("Modified Burpees", "Step back instead of jump", "8 reps x 3"),
    timed("Arm Circles", "Large circles forward and back", "1 minute each"),
    timed("Leg Swings", "Forward and side swings", "30 seconds each"),
    timed("Core Rotation", "Standing twists with arm movement", "2 minutes"),
];

// === ADVANCED ===

const ADVANCED_WEIGHT_LOSS: &[ExerciseTemplate] = &[
    sets("Burpee Variations", "Add push-up and tuck jump", "10 reps x 4"),
    sets("Plyometric Lunges", "Jump between lunge positions", "8 each x 3"),
    sets("Box Jumps", "Jump onto stable surface", "10 reps x 3"),
    timed("Sprint Intervals", "High intensity bursts", "30 seconds x 8"),
    sets("Kettlebell Swings", "Hip hinge movement", "15 reps x 4"),
    timed("Battle Ropes", "Alternating waves", "30 seconds x 4"),
];

const ADVANCED_STRENGTH: &[ExerciseTemplate] = &[
    sets("Pistol Squats", "Single leg squat", "5 each x 3"),
    sets("Handstand Push-ups", "Against wall or freestanding", "5-8 reps x 3"),
    sets("Muscle-ups", "Pull-up to dip transition", "3-5 reps x 3"),
    sets("One-arm Push-ups", "Wide base, tight core", "3-5 each x 3"),
    timed("Front Levers", "Hold horizontal position", "10 seconds x 3"),
    sets("Planche Push-ups", "Advanced bodyweight skill", "3-5 reps x 3"),
];

const ADVANCED_MOBILITY: &[ExerciseTemplate] = &[
    timed("Advanced Yoga Flow", "Complex pose sequences", "10 minutes"),
    timed("Gymnastics Stretching", "Dynamic flexibility work", "15 minutes"),
    timed("Contortion Prep", "Extreme range of motion", "20 minutes"),
    timed("Dynamic Movement", "Full body flow", "10 minutes"),
    timed("Joint Preparation", "Advanced mobility drills", "15 minutes"),
    timed("Recovery Protocol", "Active recovery techniques", "10 minutes"),
];

const ADVANCED_GENERAL_HEALTH: &[ExerciseTemplate] = &[
    sets("Complex Movement", "Multi-joint exercises", "12 reps x 4"),
    timed("Athletic Drills", "Sport-specific movements", "10 minutes"),
    sets("Functional Fitness", "Real-world movements", "15 reps x 3"),
    sets("Power Development", "Explosive movements", "8 reps x 4"),
    timed("Endurance Circuit", "Extended duration", "15 minutes"),
    timed("Recovery Active", "Light movement", "10 minutes"),
];

const EXERCISE_TABLE: &[ExerciseEntry] = &[
    ExerciseEntry { level: FitnessLevel::Beginner, goal: Goal::WeightLoss, exercises: BEGINNER_WEIGHT_LOSS },
    ExerciseEntry { level: FitnessLevel::Beginner, goal: Goal::Strength, exercises: BEGINNER_STRENGTH },
    ExerciseEntry { level: FitnessLevel::Beginner, goal: Goal::Mobility, exercises: BEGINNER_MOBILITY },
    ExerciseEntry { level: FitnessLevel::Beginner, goal: Goal::GeneralHealth, exercises: BEGINNER_GENERAL_HEALTH },
    ExerciseEntry { level: FitnessLevel::Intermediate, goal: Goal::WeightLoss, exercises: INTERMEDIATE_WEIGHT_LOSS },
    ExerciseEntry { level: FitnessLevel::Intermediate, goal: Goal::Strength, exercises: INTERMEDIATE_STRENGTH },
    ExerciseEntry { level: FitnessLevel::Intermediate, goal: Goal::Mobility, exercises: INTERMEDIATE_MOBILITY },
    ExerciseEntry { level: FitnessLevel::Intermediate, goal: Goal::GeneralHealth, exercises: INTERMEDIATE_GENERAL_HEALTH },
    ExerciseEntry { level: FitnessLevel::Advanced, goal: Goal::WeightLoss, exercises: ADVANCED_WEIGHT_LOSS },
    ExerciseEntry { level: FitnessLevel::Advanced, goal: Goal::Strength, exercises: ADVANCED_STRENGTH },
    ExerciseEntry { level: FitnessLevel::Advanced, goal: Goal::Mobility, exercises: ADVANCED_MOBILITY },
    ExerciseEntry { level: FitnessLevel::Advanced, goal: Goal::GeneralHealth, exercises: ADVANCED_GENERAL_HEALTH },
];

// === TITLES ===

const GENERAL_HEALTH_NONE_TITLES: [&str; TITLES_PER_CYCLE] =
    ["Balanced Fitness", "Wellness Circuit", "Energy Boost", "Health Foundation"];

const TITLE_TABLE: &[TitleEntry] = &[
    TitleEntry {
        goal: Goal::WeightLoss,
        equipment: Equipment::None,
        titles: ["Full Body Cardio", "Core & Cardio", "Lower Body Power", "Upper Body Blast"],
    },
    TitleEntry {
        goal: Goal::WeightLoss,
        equipment: Equipment::Dumbbells,
        titles: ["Strength & Cardio", "Full Body Burn", "HIIT Weights", "Metabolic Conditioning"],
    },
    TitleEntry {
        goal: Goal::WeightLoss,
        equipment: Equipment::ResistanceBands,
        titles: ["Band Cardio Flow", "Full Body Toning", "Resistance Circuit", "Band Power"],
    },
    TitleEntry {
        goal: Goal::WeightLoss,
        equipment: Equipment::Both,
        titles: ["Hybrid Power", "Full Body Fusion", "Athletic Conditioning", "Ultimate Burn"],
    },
    TitleEntry {
        goal: Goal::Strength,
        equipment: Equipment::None,
        titles: ["Bodyweight Strength", "Upper Body Power", "Lower Body Build", "Core Foundation"],
    },
    TitleEntry {
        goal: Goal::Strength,
        equipment: Equipment::Dumbbells,
        titles: ["Upper Body Focus", "Lower Body Power", "Full Body Strength", "Functional Fitness"],
    },
    TitleEntry {
        goal: Goal::Strength,
        equipment: Equipment::ResistanceBands,
        titles: ["Band Resistance", "Progressive Tension", "Band Power Build", "Total Body Tone"],
    },
    TitleEntry {
        goal: Goal::Strength,
        equipment: Equipment::Both,
        titles: ["Progressive Overload", "Power Building", "Strength Circuit", "Maximal Effort"],
    },
    TitleEntry {
        goal: Goal::Mobility,
        equipment: Equipment::None,
        titles: ["Flow & Stretch", "Joint Mobility", "Flexibility Focus", "Active Recovery"],
    },
    TitleEntry {
        goal: Goal::Mobility,
        equipment: Equipment::Dumbbells,
        titles: ["Dynamic Mobility", "Strength & Stretch", "Functional Movement", "Recovery Strength"],
    },
    TitleEntry {
        goal: Goal::Mobility,
        equipment: Equipment::ResistanceBands,
        titles: ["Band Stretching", "Mobility Flow", "Flexibility Bands", "Active Recovery"],
    },
    TitleEntry {
        goal: Goal::Mobility,
        equipment: Equipment::Both,
        titles: ["Complete Mobility", "Dynamic Recovery", "Full Body Flow", "Restoration Day"],
    },
    TitleEntry {
        goal: Goal::GeneralHealth,
        equipment: Equipment::None,
        titles: GENERAL_HEALTH_NONE_TITLES,
    },
    TitleEntry {
        goal: Goal::GeneralHealth,
        equipment: Equipment::Dumbbells,
        titles: ["Total Health", "Balanced Strength", "Wellness Weights", "Energy Circuit"],
    },
    TitleEntry {
        goal: Goal::GeneralHealth,
        equipment: Equipment::ResistanceBands,
        titles: ["Health & Tone", "Wellness Bands", "Energy Flow", "Balance Training"],
    },
    TitleEntry {
        goal: Goal::GeneralHealth,
        equipment: Equipment::Both,
        titles: ["Complete Wellness", "Health Fusion", "Energy System", "Total Balance"],
    },
];

static BUILTIN: Catalog = Catalog::new(
    BEGINNER_GENERAL_HEALTH,
    GENERAL_HEALTH_NONE_TITLES,
    EXERCISE_TABLE,
    TITLE_TABLE,
);
