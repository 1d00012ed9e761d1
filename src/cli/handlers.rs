use anyhow::{anyhow, bail, Context, Result};
use chrono::{Local, Utc};
use rusqlite::Connection;
use serde::Serialize;
use std::str::FromStr;

use crate::auth;
use crate::cli::args::{ProfileCommands, ProgramCommands, WorkoutCommands};
use crate::config::AppConfig;
use crate::db::repository::{CompletionRepo, ExerciseRepo, ProfileRepo, WorkoutRepo};
use crate::models::{
    Achievement, Completion, Equipment, ExerciseProgress, FitnessLevel, Goal, NewCompletion,
    NewWorkout, NewWorkoutExercise, PlanRequest, Preference, Profile, ProfileUpdate,
    ProgressSummary, User, Workout, WorkoutPlan,
};
use crate::plans::{self, catalog, PlanService, RetryPolicy, SimulatedPlanService};
use crate::progress::{self, achievements, ProgressTracker};
use crate::utils::format::{
    format_count, format_minutes, format_prescription, pad_to_width, plural, progress_bar,
};

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! print_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        print!("\x1b[0m");
    }};
}

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const ACCENT: &str = "\x1b[38;2;255;112;67m";

// ─── Session ─────────────────────────────────────────────────────────────────

pub fn handle_signup(conn: &Connection, username: &str, name: Option<&str>) -> Result<()> {
    let user = auth::sign_up(conn, username, name)?;
    println_colored!(GREEN, "  ✓ Welcome, {}! You are signed in.", user.username);
    println_colored!(
        DIM,
        "  Next: `fitpulse profile set --goal ...` or `fitpulse plan` to build your first plan"
    );
    Ok(())
}

pub fn handle_login(conn: &Connection, username: &str) -> Result<()> {
    let user = auth::sign_in(conn, username)?;
    println_colored!(GREEN, "  ✓ Signed in as {}", user.username);
    Ok(())
}

pub fn handle_logout(conn: &Connection) -> Result<()> {
    match auth::current_user(conn)? {
        Some(user) => {
            auth::sign_out(conn)?;
            println_colored!(GREEN, "  ✓ Signed out {}", user.username);
        }
        None => println_colored!(DIM, "  Not signed in"),
    }
    Ok(())
}

pub fn handle_whoami(conn: &Connection) -> Result<()> {
    match auth::current_user(conn)? {
        Some(user) => {
            let profile = ProfileRepo::get(conn, user.id)?;
            match profile.full_name {
                Some(name) => println!("  {} ({})", user.username, name),
                None => println!("  {}", user.username),
            }
        }
        None => println_colored!(DIM, "  Not signed in"),
    }
    Ok(())
}

// ─── Profile ─────────────────────────────────────────────────────────────────

pub fn handle_profile(conn: &Connection, user: &User, action: &ProfileCommands) -> Result<()> {
    match action {
        ProfileCommands::Show => {
            let profile = ProfileRepo::get(conn, user.id)?;
            print_profile(user, &profile);
        }
        ProfileCommands::Set {
            name,
            level,
            goal,
            weight,
            height,
            age,
        } => {
            let update = ProfileUpdate {
                full_name: name.clone(),
                fitness_level: level.as_deref().map(FitnessLevel::from_str).transpose()?,
                goal: goal.as_deref().map(Goal::from_str).transpose()?,
                weight_kg: *weight,
                height_cm: *height,
                age: *age,
            };
            if update.is_empty() {
                bail!("Nothing to update. Pass at least one of --name, --level, --goal, --weight, --height, --age");
            }
            if matches!(update.weight_kg, Some(w) if w <= 0.0)
                || matches!(update.height_cm, Some(h) if h <= 0.0)
            {
                bail!("Weight and height must be positive");
            }

            let mut profile = ProfileRepo::get(conn, user.id)?;
            update.apply(&mut profile);
            ProfileRepo::upsert(conn, &profile)?;
            println_colored!(GREEN, "  ✓ Profile updated");
            print_profile(user, &profile);
        }
    }
    Ok(())
}

fn print_profile(user: &User, profile: &Profile) {
    let unset = || "—".to_string();
    println!();
    println_colored!(ACCENT, "  Profile: {}", user.username);
    println!();
    println!("  Name      {}", profile.full_name.clone().unwrap_or_else(unset));
    println!(
        "  Level     {}",
        profile.fitness_level.map(|l| l.display_name().to_string()).unwrap_or_else(unset)
    );
    println!(
        "  Goal      {}",
        profile.goal.map(|g| g.display_name().to_string()).unwrap_or_else(unset)
    );
    println!(
        "  Weight    {}",
        profile.weight_kg.map(|w| format!("{:.1} kg", w)).unwrap_or_else(unset)
    );
    println!(
        "  Height    {}",
        profile.height_cm.map(|h| format!("{:.0} cm", h)).unwrap_or_else(unset)
    );
    println!("  Age       {}", profile.age.map(|a| a.to_string()).unwrap_or_else(unset));
    println!();
}

// ─── Plan ────────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct PlanFlags {
    pub goal: Option<String>,
    pub level: Option<String>,
    pub equipment: Option<String>,
    pub frequency: Option<u8>,
    pub preference: Option<String>,
    pub save: bool,
}

impl PlanFlags {
    pub fn is_empty(&self) -> bool {
        self.goal.is_none()
            && self.level.is_none()
            && self.equipment.is_none()
            && self.frequency.is_none()
            && self.preference.is_none()
    }

    /// Flags override the profile, which overrides the `[plan]` config defaults.
    pub fn to_request(&self, config: &AppConfig, profile: &Profile) -> Result<PlanRequest> {
        let mut request = config.plan.to_request();
        if let Some(goal) = profile.goal {
            request.goal = goal;
        }
        if let Some(level) = profile.fitness_level {
            request.level = level;
        }
        if let Some(goal) = &self.goal {
            request.goal = Goal::from_str(goal)?;
        }
        if let Some(level) = &self.level {
            request.level = FitnessLevel::from_str(level)?;
        }
        if let Some(equipment) = &self.equipment {
            request.equipment = Equipment::from_str(equipment)?;
        }
        if let Some(frequency) = self.frequency {
            request.frequency = frequency;
        }
        if let Some(preference) = &self.preference {
            request.preference = Preference::from_str(preference)?;
        }
        request.validate()?;
        Ok(request)
    }
}

pub fn generate_plan(config: &AppConfig, request: &PlanRequest) -> Result<WorkoutPlan> {
    let service = SimulatedPlanService::from_config(&config.services);
    let policy = RetryPolicy::from_config(&config.services);
    plans::retry_with_backoff(&policy, || service.generate(request))
        .map_err(|e| anyhow!("{}\n  {}", e, e.hint()))
}

pub fn handle_plan(
    conn: &Connection,
    user: &User,
    config: &AppConfig,
    flags: &PlanFlags,
) -> Result<()> {
    if flags.is_empty() {
        return crate::cli::plan_wizard::run_plan_wizard(conn, user, config);
    }

    let profile = ProfileRepo::get(conn, user.id)?;
    let request = flags.to_request(config, &profile)?;
    println_colored!(DIM, "  Generating your plan...");
    let plan = generate_plan(config, &request)?;
    print_plan(&plan);

    if flags.save {
        let workout = plans::plan_to_workout(&plan, &request);
        let id = WorkoutRepo::create(conn, user.id, &workout)?;
        println_colored!(GREEN, "  ✓ Saved as workout #{} \"{}\"", id, workout.name);
    } else {
        println_colored!(DIM, "  Re-run with --save to keep this plan");
    }
    println!();
    Ok(())
}

fn print_plan(plan: &WorkoutPlan) {
    println!();
    println_colored!(ACCENT, "  {} Plan", plan.goal);
    println_colored!(DIM, "  {}", plan.description);
    for day in &plan.weekly_schedule {
        println!();
        if day.is_rest() {
            println_colored!(DIM, "  {:<10} {}", day.day, day.focus);
            continue;
        }
        println_colored!(BOLD, "  {:<10} {}", day.day, day.focus);
        for ex in &day.exercises {
            println!(
                "    {}  {}",
                pad_to_width(&ex.name, 26),
                format_prescription(ex.sets, ex.reps, None)
            );
        }
    }
    println!();
    println_colored!(AMBER, "  Tips");
    for tip in &plan.tips {
        println!("  • {}", tip);
    }
    println!();
}

// ─── Programs ────────────────────────────────────────────────────────────────

pub fn handle_programs(conn: &Connection, user: &User, action: &ProgramCommands) -> Result<()> {
    match action {
        ProgramCommands::List => {
            println!();
            println_colored!(ACCENT, "  Workout Programs");
            println!();
            for program in catalog::PROGRAMS {
                println!(
                    "  {}  {}  {}/week  {}",
                    pad_to_width(program.id, 13),
                    pad_to_width(program.name, 20),
                    program.workouts_per_week,
                    program.duration
                );
                println_colored!(DIM, "  {}  {}", " ".repeat(13), program.description);
            }
            println!();
        }
        ProgramCommands::Show { id } => {
            let program = find_program(id)?;
            println!();
            println_colored!(ACCENT, "  {}", program.name);
            println_colored!(DIM, "  {}", program.description);
            println!(
                "  {} · {} workouts/week · {}",
                program.level, program.workouts_per_week, program.duration
            );
            println!();
            for day in program.schedule {
                if day.exercises.is_empty() {
                    println_colored!(DIM, "  {:<10} {}", day.day, day.focus);
                    continue;
                }
                println_colored!(BOLD, "  {:<10} {}", day.day, day.focus);
                for ex in day.exercises {
                    println!(
                        "    {}  {}",
                        pad_to_width(ex.name, 26),
                        format_prescription(ex.sets, ex.reps, None)
                    );
                }
            }
            println!();
        }
        ProgramCommands::Save { id } => {
            let program = find_program(id)?;
            let workout = program.to_new_workout();
            let workout_id = WorkoutRepo::create(conn, user.id, &workout)?;
            println_colored!(
                GREEN,
                "  ✓ Saved {} as workout #{} ({})",
                program.name,
                workout_id,
                plural(workout.exercises.len(), "exercise")
            );
        }
    }
    Ok(())
}

fn find_program(id: &str) -> Result<&'static catalog::Program> {
    catalog::find(id).ok_or_else(|| {
        let ids: Vec<&str> = catalog::PROGRAMS.iter().map(|p| p.id).collect();
        anyhow!("Unknown program '{}'. Available: {}", id, ids.join(", "))
    })
}

// ─── Exercises ───────────────────────────────────────────────────────────────

pub fn handle_exercises(conn: &Connection, body_part: Option<&str>) -> Result<()> {
    let exercises = ExerciseRepo::list(conn, body_part)?;
    println!();
    if exercises.is_empty() {
        println_colored!(
            AMBER,
            "  No exercises for '{}'. Body parts: {}",
            body_part.unwrap_or_default(),
            plans::library::BODY_PARTS.join(", ")
        );
        println!();
        return Ok(());
    }

    let mut current_part = "";
    for ex in &exercises {
        if ex.body_part != current_part {
            if !current_part.is_empty() {
                println!();
            }
            println_colored!(ACCENT, "  {}", ex.body_part);
            current_part = &ex.body_part;
        }
        println!(
            "    {}  {}  {}",
            pad_to_width(&ex.name, 26),
            pad_to_width(&ex.equipment, 18),
            ex.target
        );
    }
    println!();
    Ok(())
}

// ─── Workouts ────────────────────────────────────────────────────────────────

pub fn handle_workout(conn: &Connection, user: &User, action: &WorkoutCommands) -> Result<()> {
    match action {
        WorkoutCommands::List => {
            let workouts = WorkoutRepo::list_for_user(conn, user.id)?;
            println!();
            if workouts.is_empty() {
                println_colored!(DIM, "  No saved workouts yet. Try `fitpulse programs list`.");
                println!();
                return Ok(());
            }
            println_colored!(ACCENT, "  Your Workouts");
            println!();
            for w in &workouts {
                let last = w
                    .last_performed
                    .as_deref()
                    .map(short_date)
                    .unwrap_or_else(|| "never".to_string());
                println!(
                    "  #{:<4} {}  {}  last: {}",
                    w.id,
                    pad_to_width(&w.name, 26),
                    pad_to_width(&plural(w.exercise_count(), "exercise"), 13),
                    last
                );
            }
            println!();
        }
        WorkoutCommands::Show { id } => {
            let workout = get_workout(conn, user, *id)?;
            print_workout(&workout);
        }
        WorkoutCommands::Create {
            name,
            description,
            exercises,
        } => {
            let workout = NewWorkout {
                name: name.clone(),
                description: description.clone(),
                exercises: exercises.iter().map(|e| custom_exercise(conn, e)).collect::<Result<_>>()?,
                ..Default::default()
            };
            let id = WorkoutRepo::create(conn, user.id, &workout)?;
            println_colored!(
                GREEN,
                "  ✓ Created workout #{} \"{}\" ({})",
                id,
                workout.name.trim(),
                plural(workout.exercises.len(), "exercise")
            );
        }
        WorkoutCommands::Complete {
            id,
            duration,
            difficulty,
            notes,
        } => {
            let workout = get_workout(conn, user, *id)?;
            let completion = completion_for(&workout, *duration, *difficulty, notes.clone());
            CompletionRepo::record(conn, user.id, &completion)?;

            println_colored!(
                GREEN,
                "  ✓ Logged {} ({}, difficulty {}/5)",
                workout.name,
                format_minutes(*duration),
                difficulty
            );

            let tracker = load_tracker(conn, user)?;
            let summary = progress::summarize_now(tracker.records());
            println_colored!(
                AMBER,
                "  Streak: {} · Total workouts: {}",
                plural(summary.stats.current_streak as usize, "day"),
                summary.stats.total_workouts
            );
        }
        WorkoutCommands::Delete { id, force } => {
            let workout = get_workout(conn, user, *id)?;
            if !WorkoutRepo::has_completions(conn, user.id, workout.id)? && !force {
                bail!(
                    "\"{}\" has never been completed. Re-run with --force to delete it anyway.",
                    workout.name
                );
            }
            WorkoutRepo::delete(conn, user.id, workout.id)?;
            println_colored!(RED, "  ✗ Deleted workout #{} \"{}\"", workout.id, workout.name);
        }
    }
    Ok(())
}

fn get_workout(conn: &Connection, user: &User, id: i64) -> Result<Workout> {
    WorkoutRepo::get(conn, user.id, id)?
        .ok_or_else(|| anyhow!("Workout #{} not found. See `fitpulse workout list`.", id))
}

fn custom_exercise(conn: &Connection, name: &str) -> Result<NewWorkoutExercise> {
    let mut ex = NewWorkoutExercise::custom(name);
    if let Some(known) = ExerciseRepo::find_by_name(conn, name.trim())? {
        ex.name = known.name;
        ex.body_part = known.body_part;
        ex.equipment = known.equipment;
        ex.target = known.target;
    }
    Ok(ex)
}

/// A completion that logs every exercise of the workout as prescribed.
pub fn completion_for(
    workout: &Workout,
    duration_minutes: u32,
    difficulty_rating: u8,
    notes: Option<String>,
) -> NewCompletion {
    NewCompletion {
        workout_id: workout.id,
        completed_at: Utc::now(),
        duration_minutes,
        difficulty_rating,
        notes,
        exercises: workout
            .exercises
            .iter()
            .map(|e| ExerciseProgress {
                id: None,
                exercise_id: e.exercise_id,
                exercise_name: e.name.clone(),
                sets: e.sets,
                reps: e.reps,
                weight: e.weight,
                duration_seconds: e.duration_seconds,
            })
            .collect(),
    }
}

fn print_workout(workout: &Workout) {
    println!();
    println_colored!(ACCENT, "  #{} {}", workout.id, workout.name);
    if let Some(desc) = &workout.description {
        println_colored!(DIM, "  {}", desc);
    }
    let mut meta = Vec::new();
    if let Some(level) = &workout.level {
        meta.push(level.clone());
    }
    if let Some(per_week) = workout.workouts_per_week {
        meta.push(format!("{}/week", per_week));
    }
    if let Some(duration) = &workout.duration_label {
        meta.push(duration.clone());
    }
    if !meta.is_empty() {
        println!("  {}", meta.join(" · "));
    }
    println!();

    let mut current_day: Option<&str> = None;
    for ex in &workout.exercises {
        if ex.day.as_deref() != current_day {
            current_day = ex.day.as_deref();
            if let Some(day) = current_day {
                println_colored!(
                    BOLD,
                    "  {:<10} {}",
                    day,
                    ex.focus.as_deref().unwrap_or_default()
                );
            }
        }
        println!(
            "    {}  {}",
            pad_to_width(&ex.name, 26),
            format_prescription(ex.sets, ex.reps, ex.weight)
        );
    }
    if workout.exercises.is_empty() {
        println_colored!(DIM, "  No exercises");
    }
    println!();
}

fn short_date(rfc3339: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(rfc3339)
        .map(|dt| dt.with_timezone(&Local).format("%b %-d").to_string())
        .unwrap_or_else(|_| rfc3339.to_string())
}

// ─── Progress ────────────────────────────────────────────────────────────────

fn load_tracker(conn: &Connection, user: &User) -> Result<ProgressTracker> {
    let mut tracker = ProgressTracker::new();
    tracker
        .sign_in(conn, user.clone())
        .context("Loading progress")?;
    Ok(tracker)
}

pub fn handle_progress(
    conn: &Connection,
    user: &User,
    config: &AppConfig,
    month: bool,
) -> Result<()> {
    let tracker = load_tracker(conn, user)?;
    let today = Local::now().date_naive();
    let summary = tracker.summary(today);
    let stats = &summary.stats;

    println!();
    println_colored!(ACCENT, "  Progress: {}", user.username);
    println!();
    println_colored!(
        BOLD,
        "  Streak:         {}",
        plural(stats.current_streak as usize, "day")
    );
    if stats.best_day.count > 0 {
        println!(
            "  Best day:       {} ({})",
            stats.best_day.date,
            plural(stats.best_day.count as usize, "exercise")
        );
    } else {
        println!("  Best day:       —");
    }
    println!("  Workouts:       {}", stats.total_workouts);
    println!(
        "  Calories (est): {}",
        format_count(tracker.estimated_calories(config.progress.calories_per_minute))
    );

    println!();
    println_colored!(
        DIM,
        "  Last 7 days: {} on {}",
        plural(summary.week_total() as usize, "exercise"),
        plural(summary.active_days(), "active day")
    );
    let peak = summary.peak().max(1);
    for point in &summary.mini_graph {
        println!(
            "  {}  {} {}",
            point.day,
            progress_bar(point.count, peak, 20),
            point.count
        );
    }

    if month {
        let buckets = tracker.month_chart(today);
        let month_peak = buckets.iter().map(|b| b.exercise_count).max().unwrap_or(0).max(1);
        println!();
        println_colored!(DIM, "  {} (exercises per day)", today.format("%B %Y"));
        for bucket in &buckets {
            if bucket.date > today {
                break;
            }
            println!(
                "  {:>2}  {} {}",
                bucket.date.format("%-d"),
                progress_bar(bucket.exercise_count, month_peak, 20),
                bucket.exercise_count
            );
        }
    }

    println!();
    println_colored!(AMBER, "  Achievements");
    for rule in achievements::catalog() {
        let badge = rule.achievement;
        if tracker.achievements().iter().any(|a| a.id == badge.id) {
            print_colored!(GREEN, "  ★ {}", pad_to_width(badge.name, 14));
            println!("  {}", badge.description);
        } else {
            println_colored!(DIM, "  ☆ {}  {}", pad_to_width(badge.name, 14), badge.description);
        }
    }
    println!();
    Ok(())
}

pub fn handle_history(
    conn: &Connection,
    user: &User,
    config: &AppConfig,
    all: bool,
) -> Result<()> {
    let tracker = load_tracker(conn, user)?;
    let completions = if all {
        tracker.completions()
    } else {
        tracker.recent(config.progress.history_limit)
    };

    println!();
    if completions.is_empty() {
        println_colored!(DIM, "  No completed workouts yet. Log one with `fitpulse workout complete <id> --duration <min>`.");
        println!();
        return Ok(());
    }

    println_colored!(ACCENT, "  Workout History");
    println!();
    for c in completions {
        println!(
            "  {}  {}  {}  {}",
            pad_to_width(&c.local_date_label(), 13),
            pad_to_width(&c.workout_name, 24),
            pad_to_width(&format_minutes(c.duration_minutes), 7),
            "●".repeat(c.difficulty_rating as usize)
        );
        if let Some(notes) = &c.notes {
            println_colored!(DIM, "  {}  {}", " ".repeat(13), notes);
        }
    }
    let hidden = tracker.completions().len() - completions.len();
    if hidden > 0 {
        println!();
        println_colored!(DIM, "  {} more, use --all to view", hidden);
    }
    println!();
    Ok(())
}

// ─── Export ──────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ExportDocument<'a> {
    pub exported_at: String,
    pub user: &'a User,
    pub profile: &'a Profile,
    pub workouts: &'a [Workout],
    pub completions: &'a [Completion],
    pub progress: ProgressSummary,
    pub longest_streak: u32,
    pub estimated_calories: u32,
    pub achievements: &'a [Achievement],
}

pub fn handle_export(conn: &Connection, user: &User, config: &AppConfig) -> Result<()> {
    let tracker = load_tracker(conn, user)?;
    let profile = ProfileRepo::get(conn, user.id)?;
    let workouts = WorkoutRepo::list_for_user(conn, user.id)?;

    let doc = ExportDocument {
        exported_at: Utc::now().to_rfc3339(),
        user,
        profile: &profile,
        workouts: &workouts,
        completions: tracker.completions(),
        progress: tracker.summary(Local::now().date_naive()),
        longest_streak: tracker.max_consecutive_days(),
        estimated_calories: tracker.estimated_calories(config.progress.calories_per_minute),
        achievements: tracker.achievements(),
    };
    let json = serde_json::to_string_pretty(&doc).context("Serializing export")?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_test_db;
    use crate::db::repository::UserRepo;

    #[test]
    fn plan_flags_layer_over_profile_and_config() {
        let config = AppConfig::default();
        let mut profile = Profile::empty(1);
        profile.goal = Some(Goal::MuscleGain);

        let flags = PlanFlags {
            level: Some("advanced".into()),
            frequency: Some(5),
            ..Default::default()
        };
        let request = flags.to_request(&config, &profile).unwrap();
        assert_eq!(request.goal, Goal::MuscleGain);
        assert_eq!(request.level, FitnessLevel::Advanced);
        assert_eq!(request.equipment, config.plan.equipment);
        assert_eq!(request.frequency, 5);

        let bad = PlanFlags {
            frequency: Some(2),
            ..Default::default()
        };
        assert!(bad.to_request(&config, &profile).is_err());
        assert!(PlanFlags::default().is_empty());
    }

    #[test]
    fn completion_logs_every_exercise() {
        let conn = open_test_db();
        let user = UserRepo::create(&conn, "taylor").unwrap();
        let workout = catalog::find("weight-loss").unwrap().to_new_workout();
        let id = WorkoutRepo::create(&conn, user.id, &workout).unwrap();
        let saved = WorkoutRepo::get(&conn, user.id, id).unwrap().unwrap();

        let completion = completion_for(&saved, 40, 4, None);
        assert_eq!(completion.exercises.len(), saved.exercise_count());
        CompletionRepo::record(&conn, user.id, &completion).unwrap();

        let mut tracker = ProgressTracker::new();
        tracker.sign_in(&conn, user).unwrap();
        assert_eq!(tracker.records()[0].exercise_count as usize, saved.exercise_count());
        assert_eq!(tracker.estimated_calories(5), 200);
    }

    #[test]
    fn export_serializes_to_json() {
        let conn = open_test_db();
        let user = UserRepo::create(&conn, "avery").unwrap();
        let tracker = load_tracker(&conn, &user).unwrap();
        let profile = ProfileRepo::get(&conn, user.id).unwrap();
        let doc = ExportDocument {
            exported_at: "2024-01-01T00:00:00Z".into(),
            user: &user,
            profile: &profile,
            workouts: &[],
            completions: tracker.completions(),
            progress: tracker.summary(chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
            longest_streak: 0,
            estimated_calories: 0,
            achievements: tracker.achievements(),
        };
        let value: serde_json::Value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["user"]["username"], "avery");
        assert_eq!(value["progress"]["mini_graph"].as_array().unwrap().len(), 7);
        assert_eq!(value["progress"]["stats"]["best_day"]["date"], "");
    }
}
