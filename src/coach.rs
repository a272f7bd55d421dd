//! Coach messages - short cheers and training cues shown next to the plan

use clap::ValueEnum;
use rand::seq::SliceRandom;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum MessageCategory {
    Motivation,
    Tip,
    Celebration,
    Reminder,
}

impl MessageCategory {
    pub fn emoji(&self) -> &'static str {
        match self {
            MessageCategory::Motivation => "💪",
            MessageCategory::Tip => "💡",
            MessageCategory::Celebration => "🏆",
            MessageCategory::Reminder => "⏰",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MessageCategory::Motivation => "Motivation",
            MessageCategory::Tip => "Tip",
            MessageCategory::Celebration => "Celebration",
            MessageCategory::Reminder => "Reminder",
        }
    }
}

pub struct CoachMessage {
    pub category: MessageCategory,
    pub text: &'static str,
}

pub const MESSAGES: &[CoachMessage] = &[
    // === MOTIVATION ===
    CoachMessage {
        category: MessageCategory::Motivation,
        text: "You're unstoppable! Push through the discomfort!",
    },
    CoachMessage {
        category: MessageCategory::Motivation,
        text: "Every rep counts! Build your dream body now!",
    },
    CoachMessage {
        category: MessageCategory::Motivation,
        text: "Your future self thanks you! Keep going!",
    },
    CoachMessage {
        category: MessageCategory::Motivation,
        text: "Form over speed! Quality creates results!",
    },
    CoachMessage {
        category: MessageCategory::Motivation,
        text: "Remember your why! Goals are within reach!",
    },

    // === TIPS ===
    CoachMessage {
        category: MessageCategory::Tip,
        text: "Hydrate now! Water between sets means better performance.",
    },
    CoachMessage {
        category: MessageCategory::Tip,
        text: "Breathe right! Exhale on effort, inhale on recovery.",
    },
    CoachMessage {
        category: MessageCategory::Tip,
        text: "Rest smart! 30-60 seconds between sets.",
    },
    CoachMessage {
        category: MessageCategory::Tip,
        text: "Core engaged! Every exercise needs stability.",
    },
    CoachMessage {
        category: MessageCategory::Tip,
        text: "Progressive overload! Increase intensity gradually.",
    },

    // === CELEBRATION ===
    CoachMessage {
        category: MessageCategory::Celebration,
        text: "Absolutely crushing it! You're a beast!",
    },
    CoachMessage {
        category: MessageCategory::Celebration,
        text: "Workout complete! One step closer to greatness!",
    },
    CoachMessage {
        category: MessageCategory::Celebration,
        text: "Incredible consistency! Dedication pays off!",
    },
    CoachMessage {
        category: MessageCategory::Celebration,
        text: "You're on fire! This commitment is rare!",
    },
    CoachMessage {
        category: MessageCategory::Celebration,
        text: "Beast mode activated! You're unstoppable!",
    },

    // === REMINDERS ===
    CoachMessage {
        category: MessageCategory::Reminder,
        text: "Workout time! Your body is ready!",
    },
    CoachMessage {
        category: MessageCategory::Reminder,
        text: "Reminder! Don't forget your fitness goals!",
    },
    CoachMessage {
        category: MessageCategory::Reminder,
        text: "Time to move! Your workout awaits!",
    },
];

pub fn random_message() -> &'static CoachMessage {
    MESSAGES.choose(&mut rand::thread_rng()).unwrap_or(&MESSAGES[0])
}

pub fn random_message_by_category(category: MessageCategory) -> Option<&'static CoachMessage> {
    let filtered: Vec<_> = MESSAGES.iter().filter(|m| m.category == category).collect();
    filtered.choose(&mut rand::thread_rng()).copied()
}

pub fn format_message(message: &CoachMessage) -> String {
    format!("{} {}: {}", message.category.emoji(), message.category.name(), message.text)
}

/// Headline for the day viewer, keyed by streak length
pub fn streak_message(streak: usize) -> String {
    match streak {
        0 => "Ready to crush your goals?".to_string(),
        1 => "First workout complete! You're on fire!".to_string(),
        3 => "Three days of pure power!".to_string(),
        5 => "Five days! You're a beast!".to_string(),
        7 => "Full week! Legendary performance!".to_string(),
        n => format!("{} days of crushing it!", n),
    }
}

/// Verdict for the progress view
pub fn completion_message(percent: u32) -> &'static str {
    match percent {
        100.. => "Perfect week!",
        70..=99 => "Crushing it!",
        40..=69 => "Keep pushing!",
        _ => "Just getting started!",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_category_names() {
        assert_eq!(MessageCategory::Motivation.name(), "Motivation");
        assert_eq!(MessageCategory::Tip.name(), "Tip");
        assert_eq!(MessageCategory::Celebration.name(), "Celebration");
        assert_eq!(MessageCategory::Reminder.name(), "Reminder");
    }

    #[test]
    fn test_every_category_has_messages() {
        let mut counts = HashMap::new();
        for message in MESSAGES {
            *counts.entry(message.category).or_insert(0) += 1;
        }
        for category in MessageCategory::value_variants() {
            assert!(counts.get(category).copied().unwrap_or(0) >= 3, "{:?}", category);
        }
    }

    #[test]
    fn test_random_message_by_category() {
        for category in MessageCategory::value_variants() {
            let message = random_message_by_category(*category).unwrap();
            assert_eq!(message.category, *category);
        }
    }

    #[test]
    fn test_random_message_never_panics() {
        for _ in 0..20 {
            assert!(!random_message().text.is_empty());
        }
    }

    #[test]
    fn test_format_message() {
        let message = &MESSAGES[0];
        let formatted = format_message(message);
        assert!(formatted.contains(message.category.emoji()));
        assert!(formatted.contains(message.text));
    }

    #[test]
    fn test_streak_message() {
        assert_eq!(streak_message(0), "Ready to crush your goals?");
        assert_eq!(streak_message(7), "Full week! Legendary performance!");
        assert_eq!(streak_message(4), "4 days of crushing it!");
    }

    #[test]
    fn test_completion_message_thresholds() {
        assert_eq!(completion_message(100), "Perfect week!");
        assert_eq!(completion_message(71), "Crushing it!");
        assert_eq!(completion_message(43), "Keep pushing!");
        assert_eq!(completion_message(14), "Just getting started!");
    }
}
