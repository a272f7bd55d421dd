//! TUI module - terminal day viewer and progress view with ratatui

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Gauge, Paragraph, Row, Table, Wrap},
};
use std::io::{stdout, Stdout};

use crate::coach;
use crate::db::Database;
use crate::profile::UserProfile;
use crate::progress::Progress;
use crate::routine::{self, DayKind, Schedule};

type Tui = Terminal<CrosstermBackend<Stdout>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Day,
    Progress,
}

/// App state for TUI
pub struct App {
    db: Database,
    profile: UserProfile,
    schedule: Schedule,
    progress: Progress,
    view: View,
    should_quit: bool,
}

impl App {
    pub fn new(db: Database, profile: UserProfile) -> Result<Self> {
        let schedule = routine::generate(&profile);
        let progress = db.load_progress()?.unwrap_or_default();
        Ok(Self {
            db,
            profile,
            schedule,
            progress,
            view: View::Day,
            should_quit: false,
        })
    }

    /// Run the TUI application
    pub fn run(&mut self) -> Result<()> {
        let mut terminal = init_terminal()?;

        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_events()?;
        }

        restore_terminal()?;
        Ok(())
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(3),
            ])
            .split(area);

        // Header
        let header = Paragraph::new(format!("FITPATH - {}", self.profile))
            .style(Style::default().fg(Color::Cyan).bold())
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, chunks[0]);

        match self.view {
            View::Day => self.render_day(frame, chunks[1]),
            View::Progress => self.render_progress(frame, chunks[1]),
        }

        // Footer
        let footer = Paragraph::new("q: quit | ←/→: day | space: done | p: progress")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(footer, chunks[2]);
    }

    fn render_day(&self, frame: &mut Frame, area: Rect) {
        let day = &self.schedule[self.progress.current_day];
        let done = self.progress.is_completed(day.day);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(5)])
            .split(area);

        let status = Line::from(vec![
            Span::styled(day.intensity().label(), Style::default().fg(Color::Yellow).bold()),
            Span::raw("  "),
            Span::raw(coach::streak_message(self.progress.streak())),
            Span::raw("  "),
            if done {
                Span::styled("✓ done", Style::default().fg(Color::Green))
            } else {
                Span::styled("not done", Style::default().fg(Color::DarkGray))
            },
        ]);
        let summary = Paragraph::new(status)
            .block(Block::default().borders(Borders::ALL).title(day.title.clone()));
        frame.render_widget(summary, chunks[0]);

        match &day.kind {
            DayKind::Rest { description } => {
                let body = Paragraph::new(description.as_str())
                    .wrap(Wrap { trim: true })
                    .block(Block::default().borders(Borders::ALL).title("Rest & Recovery"));
                frame.render_widget(body, chunks[1]);
            }
            DayKind::Workout { exercises } => {
                let rows: Vec<Row> = exercises.iter().map(|ex| {
                    Row::new(vec![
                        Cell::from(ex.name.clone()),
                        Cell::from(ex.dosage.as_str().to_string()),
                        Cell::from(ex.instructions.clone()),
                        Cell::from(ex.modification.clone().unwrap_or_default()),
                    ])
                }).collect();

                let table = Table::new(
                    rows,
                    [
                        Constraint::Length(22),
                        Constraint::Length(24),
                        Constraint::Min(20),
                        Constraint::Min(20),
                    ],
                )
                .header(Row::new(vec!["Exercise", "Dosage", "Instructions", "Modification"])
                    .style(Style::default().bold()))
                .block(Block::default().borders(Borders::ALL).title("Exercises"));

                frame.render_widget(table, chunks[1]);
            }
        }
    }

    fn render_progress(&self, frame: &mut Frame, area: Rect) {
        let percent = self.progress.completion_percentage(self.schedule.len());

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(9)])
            .split(area);

        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(coach::completion_message(percent)))
            .gauge_style(Style::default().fg(Color::Green))
            .percent(percent.min(100) as u16);
        frame.render_widget(gauge, chunks[0]);

        let rows: Vec<Row> = self.schedule.iter().map(|day| {
            let mark = if self.progress.is_completed(day.day) { "✓" } else { "" };
            let style = if day.day == self.progress.current_day {
                Style::default().fg(Color::Cyan).bold()
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(mark),
                Cell::from(day.title.clone()),
                Cell::from(day.intensity().label()),
            ])
            .style(style)
        }).collect();

        let table = Table::new(
            rows,
            [Constraint::Length(3), Constraint::Min(30), Constraint::Length(18)],
        )
        .block(Block::default().borders(Borders::ALL).title(format!(
            "Week - streak {}, workouts done {}",
            self.progress.streak(),
            self.progress.completed_workouts(&self.schedule)
        )));
        frame.render_widget(table, chunks[1]);
    }

    fn handle_events(&mut self) -> Result<()> {
        if event::poll(std::time::Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press {
                    self.handle_key(key.code)?;
                }
        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode) -> Result<()> {
        let changed = match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                false
            }
            KeyCode::Char('p') => {
                self.view = match self.view {
                    View::Day => View::Progress,
                    View::Progress => View::Day,
                };
                false
            }
            KeyCode::Left | KeyCode::Char('h') => self.progress.previous_day(),
            KeyCode::Right | KeyCode::Char('l') => self.progress.next_day(),
            KeyCode::Char(' ') | KeyCode::Char('c') => {
                self.progress.toggle_day(self.progress.current_day);
                true
            }
            _ => false,
        };
        if changed {
            self.db.save_progress(&self.progress)?;
        }
        Ok(())
    }
}

fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    Ok(terminal)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{Equipment, FitnessLevel, Goal};

    fn app() -> App {
        let db = Database::open_in_memory().unwrap();
        let profile = UserProfile::new(FitnessLevel::Beginner, Goal::Mobility, Equipment::None, 3);
        App::new(db, profile).unwrap()
    }

    #[test]
    fn test_keys_move_and_persist() {
        let mut app = app();
        app.handle_key(KeyCode::Right).unwrap();
        app.handle_key(KeyCode::Right).unwrap();
        app.handle_key(KeyCode::Char(' ')).unwrap();

        let saved = app.db.load_progress().unwrap().unwrap();
        assert_eq!(saved.current_day, 2);
        assert!(saved.is_completed(2));
    }

    #[test]
    fn test_left_at_first_day_does_not_save() {
        let mut app = app();
        app.handle_key(KeyCode::Left).unwrap();
        assert!(app.db.load_progress().unwrap().is_none());
    }

    #[test]
    fn test_view_toggle_and_quit() {
        let mut app = app();
        app.handle_key(KeyCode::Char('p')).unwrap();
        assert_eq!(app.view, View::Progress);
        app.handle_key(KeyCode::Char('q')).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_render_both_views() {
        use ratatui::backend::TestBackend;

        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        app.progress.set_current_day(5);
        terminal.draw(|frame| app.render(frame)).unwrap();
        app.view = View::Progress;
        terminal.draw(|frame| app.render(frame)).unwrap();
    }
}
