use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use rusqlite::Connection;

use crate::cli::handlers::generate_plan;
use crate::config::{AppConfig, PlanConfig};
use crate::db::repository::{ProfileRepo, WorkoutRepo};
use crate::models::{
    Equipment, FitnessLevel, Goal, PlanRequest, Preference, User, WorkoutPlan, FREQUENCY_OPTIONS,
};
use crate::plans::plan_to_workout;
use crate::tui::events::{Event, EventHandler};
use crate::tui::theme;

// ─── Wizard steps ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Goal,
    Level,
    Equipment,
    Frequency,
    Preference,
    Preview,
}

impl Step {
    const TOTAL: usize = 6;

    fn number(&self) -> usize {
        match self {
            Step::Goal => 1,
            Step::Level => 2,
            Step::Equipment => 3,
            Step::Frequency => 4,
            Step::Preference => 5,
            Step::Preview => 6,
        }
    }
}

// ─── Wizard state ────────────────────────────────────────────────────────────

struct PlanWizard {
    step: Step,
    goal_idx: usize,
    level_idx: usize,
    equipment_idx: usize,
    frequency_idx: usize,
    preference_idx: usize,

    plan: Option<WorkoutPlan>,
    error: Option<String>,
    scroll: u16,

    wants_plan: bool,
    should_quit: bool,
    save_requested: bool,
}

fn index_of<T: PartialEq>(all: &[T], value: &T) -> usize {
    all.iter().position(|v| v == value).unwrap_or(0)
}

impl PlanWizard {
    fn new(initial: &PlanRequest) -> Self {
        Self {
            step: Step::Goal,
            goal_idx: index_of(&Goal::all(), &initial.goal),
            level_idx: index_of(&FitnessLevel::all(), &initial.level),
            equipment_idx: index_of(&Equipment::all(), &initial.equipment),
            frequency_idx: index_of(&FREQUENCY_OPTIONS, &initial.frequency),
            preference_idx: index_of(&Preference::all(), &initial.preference),
            plan: None,
            error: None,
            scroll: 0,
            wants_plan: false,
            should_quit: false,
            save_requested: false,
        }
    }

    fn request(&self) -> PlanRequest {
        PlanRequest {
            goal: Goal::all()[self.goal_idx],
            level: FitnessLevel::all()[self.level_idx],
            equipment: Equipment::all()[self.equipment_idx],
            frequency: FREQUENCY_OPTIONS[self.frequency_idx],
            preference: Preference::all()[self.preference_idx],
        }
    }

    fn option_count(&self) -> usize {
        match self.step {
            Step::Goal => Goal::all().len(),
            Step::Level => FitnessLevel::all().len(),
            Step::Equipment => Equipment::all().len(),
            Step::Frequency => FREQUENCY_OPTIONS.len(),
            Step::Preference => Preference::all().len(),
            Step::Preview => 0,
        }
    }

    fn selected_mut(&mut self) -> Option<&mut usize> {
        match self.step {
            Step::Goal => Some(&mut self.goal_idx),
            Step::Level => Some(&mut self.level_idx),
            Step::Equipment => Some(&mut self.equipment_idx),
            Step::Frequency => Some(&mut self.frequency_idx),
            Step::Preference => Some(&mut self.preference_idx),
            Step::Preview => None,
        }
    }

    fn advance(&mut self) {
        self.error = None;
        self.step = match self.step {
            Step::Goal => Step::Level,
            Step::Level => Step::Equipment,
            Step::Equipment => Step::Frequency,
            Step::Frequency => Step::Preference,
            Step::Preference => {
                self.plan = None;
                self.scroll = 0;
                self.wants_plan = true;
                Step::Preview
            }
            Step::Preview => {
                if self.plan.is_some() {
                    self.save_requested = true;
                }
                Step::Preview
            }
        };
    }

    fn go_back(&mut self) {
        self.error = None;
        self.step = match self.step {
            Step::Goal => {
                self.should_quit = true;
                Step::Goal
            }
            Step::Level => Step::Goal,
            Step::Equipment => Step::Level,
            Step::Frequency => Step::Equipment,
            Step::Preference => Step::Frequency,
            Step::Preview => Step::Preference,
        };
    }

    fn handle_key(&mut self, key: crossterm::event::KeyEvent) {
        match key.code {
            KeyCode::Esc => self.go_back(),
            KeyCode::Enter => self.advance(),
            KeyCode::Up | KeyCode::Char('k') => {
                if self.step == Step::Preview {
                    self.scroll = self.scroll.saturating_sub(1);
                } else if let Some(idx) = self.selected_mut() {
                    *idx = idx.saturating_sub(1);
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let count = self.option_count();
                if self.step == Step::Preview {
                    self.scroll = self.scroll.saturating_add(1);
                } else if let Some(idx) = self.selected_mut() {
                    if *idx + 1 < count {
                        *idx += 1;
                    }
                }
            }
            KeyCode::Char('r') if self.step == Step::Preview && self.error.is_some() => {
                self.error = None;
                self.wants_plan = true;
            }
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }
}

// ─── Rendering ───────────────────────────────────────────────────────────────

fn draw(frame: &mut Frame, wizard: &PlanWizard) {
    let area = frame.area();
    frame.render_widget(Block::default().style(theme::base()), area);

    let vchunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(30),
            Constraint::Min(0),
        ])
        .split(area);

    let hchunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(72),
            Constraint::Min(0),
        ])
        .split(vchunks[1]);

    let box_area = hchunks[1];
    frame.render_widget(Clear, box_area);

    let outer_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::accent())
        .style(theme::surface())
        .title(Span::styled(
            "  fitpulse  ·  Plan Builder  ",
            theme::accent().add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center);
    frame.render_widget(outer_block, box_area);

    let inner = Rect {
        x: box_area.x + 2,
        y: box_area.y + 1,
        width: box_area.width.saturating_sub(4),
        height: box_area.height.saturating_sub(2),
    };

    match wizard.step {
        Step::Goal => {
            let options: Vec<(String, String)> = Goal::all()
                .iter()
                .map(|g| (g.display_name().to_string(), g.description().to_string()))
                .collect();
            draw_choice(frame, inner, "Your Goal", "What do you want to achieve?", &options, wizard.goal_idx);
        }
        Step::Level => {
            let options: Vec<(String, String)> = FitnessLevel::all()
                .iter()
                .map(|l| (l.display_name().to_string(), format!("{} sets per exercise", l.default_sets())))
                .collect();
            draw_choice(frame, inner, "Fitness Level", "How experienced are you?", &options, wizard.level_idx);
        }
        Step::Equipment => {
            let options: Vec<(String, String)> = Equipment::all()
                .iter()
                .map(|e| (e.display_name().to_string(), String::new()))
                .collect();
            draw_choice(frame, inner, "Equipment", "What do you have access to?", &options, wizard.equipment_idx);
        }
        Step::Frequency => {
            let options: Vec<(String, String)> = FREQUENCY_OPTIONS
                .iter()
                .map(|f| (format!("{} days per week", f), String::new()))
                .collect();
            draw_choice(frame, inner, "Frequency", "How often can you train?", &options, wizard.frequency_idx);
        }
        Step::Preference => {
            let options: Vec<(String, String)> = Preference::all()
                .iter()
                .map(|p| (p.display_name().to_string(), String::new()))
                .collect();
            draw_choice(frame, inner, "Training Style", "What kind of sessions do you enjoy?", &options, wizard.preference_idx);
        }
        Step::Preview => draw_preview(frame, inner, wizard),
    }

    draw_progress(frame, inner, wizard.step.number(), Step::TOTAL);
}

fn draw_progress(frame: &mut Frame, area: Rect, current: usize, total: usize) {
    let mut spans = vec![Span::styled("  ", theme::dim())];
    for i in 1..=total {
        if i < current {
            spans.push(Span::styled("● ", theme::green()));
        } else if i == current {
            spans.push(Span::styled("◉ ", theme::accent()));
        } else {
            spans.push(Span::styled("○ ", theme::dim()));
        }
    }
    let progress_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: 1,
    };
    frame.render_widget(Paragraph::new(Line::from(spans)), progress_area);
}

fn draw_choice(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    subtitle: &str,
    options: &[(String, String)],
    selected: usize,
) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(title, theme::accent().add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(Span::styled(subtitle, theme::dim())),
        Line::from(""),
        Line::from(""),
    ];

    for (i, (label, detail)) in options.iter().enumerate() {
        if i == selected {
            lines.push(Line::from(vec![
                Span::styled("  ◉  ", theme::accent()),
                Span::styled(label.as_str(), theme::accent().add_modifier(Modifier::BOLD)),
            ]));
        } else {
            lines.push(Line::from(vec![
                Span::styled("  ○  ", theme::dim()),
                Span::styled(label.as_str(), theme::dim()),
            ]));
        }
        if !detail.is_empty() {
            lines.push(Line::from(Span::styled(detail.as_str(), theme::dim())));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "↑↓  choose   ·   Enter  next   ·   Esc  back",
        theme::dim(),
    )));

    let para = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    let content_area = Rect {
        x: area.x,
        y: area.y + 2,
        width: area.width,
        height: area.height.saturating_sub(2),
    };
    frame.render_widget(para, content_area);
}

fn plan_lines(plan: &WorkoutPlan) -> Vec<Line<'_>> {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} Plan", plan.goal),
            theme::accent().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(plan.description.as_str(), theme::dim())),
        Line::from(""),
    ];

    for day in &plan.weekly_schedule {
        let style = if day.is_rest() { theme::dim() } else { theme::bold() };
        lines.push(Line::from(vec![
            Span::styled(format!("{:<10}", day.day), style),
            Span::styled(day.focus.as_str(), style),
        ]));
        for ex in &day.exercises {
            lines.push(Line::from(vec![
                Span::styled("   •  ", theme::accent()),
                Span::styled(ex.name.as_str(), theme::bold()),
                Span::styled(format!("   {} x {}", ex.sets, ex.reps), theme::dim()),
            ]));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled("Tips", theme::amber().add_modifier(Modifier::BOLD))));
    for tip in &plan.tips {
        lines.push(Line::from(Span::styled(format!("•  {}", tip), theme::dim())));
    }
    lines
}

fn draw_preview(frame: &mut Frame, area: Rect, wizard: &PlanWizard) {
    let content_area = Rect {
        x: area.x,
        y: area.y + 2,
        width: area.width,
        height: area.height.saturating_sub(4),
    };

    let (body, footer) = match (&wizard.plan, &wizard.error) {
        (_, Some(err)) => (
            Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled("Could not generate a plan", theme::red().add_modifier(Modifier::BOLD))),
                Line::from(""),
                Line::from(Span::styled(err.as_str(), theme::red())),
            ])
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
            "r  retry   ·   Esc  back",
        ),
        (Some(plan), None) => (
            Paragraph::new(plan_lines(plan))
                .wrap(Wrap { trim: false })
                .scroll((wizard.scroll, 0)),
            "↑↓  scroll   ·   Enter  save workout   ·   Esc  back",
        ),
        (None, None) => (
            Paragraph::new(vec![
                Line::from(""),
                Line::from(""),
                Line::from(Span::styled(
                    "Building your plan…",
                    theme::accent().add_modifier(Modifier::BOLD),
                )),
            ])
            .alignment(Alignment::Center),
            "",
        ),
    };
    frame.render_widget(body, content_area);

    let footer_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(Span::styled(footer, theme::dim())).alignment(Alignment::Center),
        footer_area,
    );
}

// ─── Public entry point ──────────────────────────────────────────────────────

pub fn run_plan_wizard(conn: &Connection, user: &User, config: &AppConfig) -> Result<()> {
    let profile = ProfileRepo::get(conn, user.id)?;
    let mut initial = config.plan.to_request();
    if let Some(goal) = profile.goal {
        initial.goal = goal;
    }
    if let Some(level) = profile.fitness_level {
        initial.level = level;
    }

    let mut wizard = PlanWizard::new(&initial);
    let mut terminal = ratatui::init();
    let events = EventHandler::new(100);
    let mut saved: Option<(i64, String, PlanRequest)> = None;

    let outcome = (|| -> Result<()> {
        loop {
            terminal.draw(|frame| draw(frame, &wizard))?;

            if wizard.wants_plan {
                wizard.wants_plan = false;
                match generate_plan(config, &wizard.request()) {
                    Ok(plan) => wizard.plan = Some(plan),
                    Err(e) => wizard.error = Some(format!("{:#}", e)),
                }
                continue;
            }

            match events.next()? {
                Event::Key(key) => {
                    wizard.handle_key(key);
                    if wizard.should_quit {
                        break;
                    }
                    if wizard.save_requested {
                        if let Some(plan) = &wizard.plan {
                            let workout = plan_to_workout(plan, &wizard.request());
                            let id = WorkoutRepo::create(conn, user.id, &workout)?;
                            saved = Some((id, workout.name, wizard.request()));
                        }
                        break;
                    }
                }
                Event::Resize | Event::Tick => {}
            }
        }
        Ok(())
    })();

    ratatui::restore();
    outcome?;

    if let Some((id, name, request)) = saved {
        println!("  \x1b[32m✓ Saved \"{}\" as workout #{}\x1b[0m", name, id);

        // Remember the answers as next time's defaults.
        let mut updated = config.clone();
        updated.plan = PlanConfig::from(&request);
        if updated != *config {
            updated.save()?;
            log::info!("Plan defaults updated in config.toml");
        }
    }
    Ok(())
}
