//! fitpath - weekly workout plan generator and progress tracker

use anyhow::{Context, Result, bail};
use chrono::Local;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use fitpath::coach::{self, MessageCategory};
use fitpath::export::{self, ExportFormat};
use fitpath::profile::{Equipment, FitnessLevel, Goal, Limitation};
use fitpath::routine::{DayKind, DAYS_PER_WEEK};
use fitpath::tui::App;
use fitpath::{Database, DayRoutine, Progress, UserProfile};

#[derive(Parser)]
#[command(name = "fitpath")]
#[command(author, version, about = "Personal weekly workout plan and progress tracker")]
struct Cli {
    /// Path to the SQLite database
    #[arg(long, global = true, env = "FITPATH_DB", default_value = "fitpath.db")]
    db: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer the onboarding questions and create a plan
    Onboard {
        #[arg(short, long, value_enum)]
        level: FitnessLevel,

        #[arg(short, long, value_enum)]
        goal: Goal,

        #[arg(short, long, value_enum, default_value = "none")]
        equipment: Equipment,

        /// Training days per week (1-7)
        #[arg(short, long, default_value = "3")]
        days: u8,

        /// Physical limitation, repeat for several
        #[arg(long = "limitation", value_enum)]
        limitations: Vec<Limitation>,
    },

    /// Show a day of the plan (defaults to the current day)
    Show {
        /// Day number, 1-7
        day: Option<usize>,
    },

    /// Overview of the whole week
    Week,

    /// Move to the next day
    Next,

    /// Move to the previous day
    Prev,

    /// Jump to a day
    Goto {
        /// Day number, 1-7
        day: usize,
    },

    /// Toggle completion of a day (defaults to the current day)
    Complete {
        /// Day number, 1-7
        day: Option<usize>,
    },

    /// Show progress statistics
    Stats,

    /// Export the plan
    Export {
        #[arg(short, long, value_enum, default_value = "text")]
        format: ExportFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Print a coach message
    Tip {
        #[arg(short, long, value_enum)]
        category: Option<MessageCategory>,
    },

    /// Delete profile and progress
    Reset,

    /// Open TUI day viewer
    Tui,
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let db = Database::open(&cli.db).with_context(|| format!("opening database {}", cli.db))?;

    match cli.command {
        Some(Commands::Onboard { level, goal, equipment, days, limitations }) => {
            let profile = UserProfile::new(level, goal, equipment, days).with_limitations(limitations);
            profile.validate()?;
            db.save_profile(&profile)?;
            db.save_progress(&Progress::new())?;
            info!("Saved new profile: {}", profile);

            println!("Plan created: {}", profile);
            println!("{:-<60}", "");
            print_week(&fitpath::generate(&profile), &Progress::new());
        }

        Some(Commands::Show { day }) => {
            let (profile, progress) = load_state(&db)?;
            let schedule = fitpath::generate(&profile);
            let index = match day {
                Some(day) => day_index(day)?,
                None => progress.current_day,
            };
            print_day(&schedule[index], &progress);
        }

        Some(Commands::Week) => {
            let (profile, progress) = load_state(&db)?;
            println!("{}", profile);
            println!("{:-<60}", "");
            print_week(&fitpath::generate(&profile), &progress);
        }

        Some(Commands::Next) => move_pointer(&db, Progress::next_day)?,

        Some(Commands::Prev) => move_pointer(&db, Progress::previous_day)?,

        Some(Commands::Goto { day }) => {
            let index = day_index(day)?;
            move_pointer(&db, |p| p.set_current_day(index))?;
        }

        Some(Commands::Complete { day }) => {
            let (profile, mut progress) = load_state(&db)?;
            let index = match day {
                Some(day) => day_index(day)?,
                None => progress.current_day,
            };
            let done = progress.toggle_day(index);
            db.save_progress(&progress)?;

            let schedule = fitpath::generate(&profile);
            if done {
                println!("✓ {}", schedule[index].title);
                if let Some(message) = coach::random_message_by_category(MessageCategory::Celebration) {
                    println!("{}", coach::format_message(message));
                }
            } else {
                println!("Unmarked: {}", schedule[index].title);
            }
        }

        Some(Commands::Stats) => {
            let (profile, progress) = load_state(&db)?;
            let schedule = fitpath::generate(&profile);
            let percent = progress.completion_percentage(schedule.len());

            println!("Progress Statistics");
            println!("{:-<40}", "");
            println!("Current day: {}", progress.current_day + 1);
            println!("Completed: {}/{} ({}%)", progress.completed_days.len(), schedule.len(), percent);
            println!("Workouts done: {}", progress.completed_workouts(&schedule));
            println!("Rest days done: {}", progress.completed_rest_days(&schedule));
            println!("Streak: {}", progress.streak());
            println!("{}", coach::completion_message(percent));
        }

        Some(Commands::Export { format, output }) => {
            let (profile, progress) = load_state(&db)?;
            let schedule = fitpath::generate(&profile);
            let content = export::export(format, &profile, &schedule, &progress, Local::now())?;
            match output {
                Some(path) => {
                    std::fs::write(&path, content).with_context(|| format!("writing {}", path))?;
                    println!("Exported {} plan to {}", format.extension(), path);
                }
                None => print!("{}", content),
            }
        }

        Some(Commands::Tip { category }) => {
            let message = match category {
                Some(category) => coach::random_message_by_category(category),
                None => Some(coach::random_message()),
            };
            if let Some(message) = message {
                println!("{}", coach::format_message(message));
            }
        }

        Some(Commands::Reset) => {
            db.clear()?;
            info!("Cleared profile and progress");
            println!("All data cleared. Run `fitpath onboard` to start again.");
        }

        Some(Commands::Tui) | None => {
            let Some(profile) = db.load_profile()? else {
                bail!("no profile found, run `fitpath onboard` first");
            };
            let mut app = App::new(db, profile)?;
            app.run()?;
        }
    }

    Ok(())
}

fn load_state(db: &Database) -> Result<(UserProfile, Progress)> {
    let Some(profile) = db.load_profile()? else {
        bail!("no profile found, run `fitpath onboard` first");
    };
    let progress = db.load_progress()?.unwrap_or_default();
    Ok((profile, progress))
}

/// Convert a 1-based day number into an index
fn day_index(day: usize) -> Result<usize> {
    if !(1..=DAYS_PER_WEEK).contains(&day) {
        bail!("day must be between 1 and {}, got {}", DAYS_PER_WEEK, day);
    }
    Ok(day - 1)
}

fn move_pointer(db: &Database, step: impl FnOnce(&mut Progress) -> bool) -> Result<()> {
    let (profile, mut progress) = load_state(db)?;
    if step(&mut progress) {
        db.save_progress(&progress)?;
    }
    let schedule = fitpath::generate(&profile);
    print_day(&schedule[progress.current_day], &progress);
    Ok(())
}

fn print_day(day: &DayRoutine, progress: &Progress) {
    let mark = if progress.is_completed(day.day) { " ✓" } else { "" };
    println!("{}{}", day.title, mark);
    println!("{} | {}", day.intensity().label(), coach::streak_message(progress.streak()));
    println!("{:-<60}", "");

    match &day.kind {
        DayKind::Rest { description } => println!("{}", description),
        DayKind::Workout { exercises } => {
            for (i, ex) in exercises.iter().enumerate() {
                println!("{}. {:24} {}", i + 1, ex.name, ex.dosage.as_str());
                println!("   {}", ex.instructions);
                if let Some(modification) = &ex.modification {
                    println!("   ⚠ {}", modification);
                }
            }
        }
    }
}

fn print_week(schedule: &[DayRoutine], progress: &Progress) {
    for day in schedule {
        let mark = if progress.is_completed(day.day) { "✓" } else { " " };
        let pointer = if day.day == progress.current_day { ">" } else { " " };
        println!("{}{} {:40} {}", pointer, mark, day.title, day.intensity().label());
    }
}
