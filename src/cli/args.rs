use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "fitpulse", version, author, about = "A terminal companion for workout planning and progress tracking")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an account and sign in
    Signup {
        username: String,
        /// Display name for your profile
        #[arg(long)]
        name: Option<String>,
    },
    /// Sign in to an existing account
    Login { username: String },
    /// Sign out
    Logout,
    /// Show who is signed in
    Whoami,
    /// View or edit your profile
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },
    /// Generate a weekly workout plan (opens the wizard when no flags are given)
    Plan {
        /// weight-loss, muscle-gain, endurance or general-fitness
        #[arg(long)]
        goal: Option<String>,
        /// beginner, intermediate or advanced
        #[arg(long)]
        level: Option<String>,
        /// bodyweight, basic or full
        #[arg(long)]
        equipment: Option<String>,
        /// Workouts per week: 3, 4 or 5
        #[arg(long)]
        frequency: Option<u8>,
        /// strength, cardio or balanced
        #[arg(long)]
        preference: Option<String>,
        /// Save the generated plan as a workout
        #[arg(long)]
        save: bool,
    },
    /// Browse preset workout programs
    Programs {
        #[command(subcommand)]
        action: ProgramCommands,
    },
    /// List the exercise library
    Exercises {
        /// Filter by body part (e.g. chest, "upper legs")
        #[arg(long)]
        body_part: Option<String>,
    },
    /// Manage saved workouts
    Workout {
        #[command(subcommand)]
        action: WorkoutCommands,
    },
    /// Show progress statistics and achievements
    Progress {
        /// Show exercises completed per day this month
        #[arg(long)]
        month: bool,
    },
    /// Show completed workouts
    History {
        /// Show every completion instead of the most recent ones
        #[arg(long)]
        all: bool,
    },
    /// Export workouts, completions and progress as JSON to stdout
    Export,
}

#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// Show your profile
    Show,
    /// Update profile fields
    Set {
        #[arg(long)]
        name: Option<String>,
        /// beginner, intermediate or advanced
        #[arg(long)]
        level: Option<String>,
        /// weight-loss, muscle-gain, endurance or general-fitness
        #[arg(long)]
        goal: Option<String>,
        /// Body weight in kilograms
        #[arg(long)]
        weight: Option<f64>,
        /// Height in centimetres
        #[arg(long)]
        height: Option<f64>,
        #[arg(long)]
        age: Option<u32>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProgramCommands {
    /// List all programs
    List,
    /// Show a program's weekly schedule
    Show { id: String },
    /// Save a program as one of your workouts
    Save { id: String },
}

#[derive(Subcommand, Debug)]
pub enum WorkoutCommands {
    /// List your saved workouts
    List,
    /// Show a workout's exercises
    Show { id: i64 },
    /// Create a custom workout
    Create {
        name: String,
        #[arg(long)]
        description: Option<String>,
        /// Exercise name; repeat for several (defaults to 3 x 10 each)
        #[arg(long = "exercise", short = 'e')]
        exercises: Vec<String>,
    },
    /// Log a completed session of a workout
    Complete {
        id: i64,
        /// Session length in minutes
        #[arg(long)]
        duration: u32,
        /// Perceived difficulty, 1 (easy) to 5 (brutal)
        #[arg(long, default_value = "3")]
        difficulty: u8,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete a workout and its completion history
    Delete {
        id: i64,
        /// Required when the workout has never been completed
        #[arg(long)]
        force: bool,
    },
}
