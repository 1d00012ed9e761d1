use anyhow::{anyhow, bail, Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashMap;
use std::str::FromStr;

use crate::models::{
    Completion, Exercise, ExerciseProgress, FitnessLevel, Goal, NewCompletion, NewWorkout,
    NewWorkoutExercise, Profile, User, Workout, WorkoutExercise,
};

pub fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| anyhow!("Bad timestamp '{}': {}", s, e))
}

// ─── User repo ───────────────────────────────────────────────────────────────

pub struct UserRepo;

impl UserRepo {
    pub fn create(conn: &Connection, username: &str) -> Result<User> {
        let created_at = timestamp(Utc::now());
        conn.execute(
            "INSERT INTO users (username, created_at) VALUES (?1, ?2)",
            params![username, created_at],
        )
        .with_context(|| format!("Failed to create user '{}'", username))?;

        Ok(User {
            id: conn.last_insert_rowid(),
            username: username.to_string(),
            created_at,
        })
    }

    pub fn find_by_username(conn: &Connection, username: &str) -> Result<Option<User>> {
        conn.query_row(
            "SELECT id, username, created_at FROM users WHERE username = ?1",
            params![username],
            |row| {
                Ok(User {
                    id: row.get(0)?,
                    username: row.get(1)?,
                    created_at: row.get(2)?,
                })
            },
        )
        .optional()
        .map_err(anyhow::Error::from)
    }

    pub fn get(conn: &Connection, id: i64) -> Result<Option<User>> {
        conn.query_row(
            "SELECT id, username, created_at FROM users WHERE id = ?1",
            params![id],
            |row| {
                Ok(User {
                    id: row.get(0)?,
                    username: row.get(1)?,
                    created_at: row.get(2)?,
                })
            },
        )
        .optional()
        .map_err(anyhow::Error::from)
    }
}

// ─── Profile repo ────────────────────────────────────────────────────────────

pub struct ProfileRepo;

impl ProfileRepo {
    /// Stored profile, or an empty one when the user never filled it in.
    pub fn get(conn: &Connection, user_id: i64) -> Result<Profile> {
        let row = conn
            .query_row(
                "SELECT full_name, fitness_level, goal, weight_kg, height_cm, age
                 FROM profiles WHERE user_id = ?1",
                params![user_id],
                |row| {
                    Ok((
                        row.get::<_, Option<String>>(0)?,
                        row.get::<_, Option<String>>(1)?,
                        row.get::<_, Option<String>>(2)?,
                        row.get::<_, Option<f64>>(3)?,
                        row.get::<_, Option<f64>>(4)?,
                        row.get::<_, Option<u32>>(5)?,
                    ))
                },
            )
            .optional()?;

        let Some((full_name, level, goal, weight_kg, height_cm, age)) = row else {
            return Ok(Profile::empty(user_id));
        };

        Ok(Profile {
            user_id,
            full_name,
            fitness_level: level.as_deref().map(FitnessLevel::from_str).transpose()?,
            goal: goal.as_deref().map(Goal::from_str).transpose()?,
            weight_kg,
            height_cm,
            age,
        })
    }

    pub fn upsert(conn: &Connection, profile: &Profile) -> Result<()> {
        conn.execute(
            "INSERT INTO profiles
                (user_id, full_name, fitness_level, goal, weight_kg, height_cm, age, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
             ON CONFLICT(user_id) DO UPDATE SET
                full_name = ?2, fitness_level = ?3, goal = ?4,
                weight_kg = ?5, height_cm = ?6, age = ?7, updated_at = ?8",
            params![
                profile.user_id,
                profile.full_name,
                profile.fitness_level.map(|l| l.as_str()),
                profile.goal.map(|g| g.as_str()),
                profile.weight_kg,
                profile.height_cm,
                profile.age,
                timestamp(Utc::now()),
            ],
        )?;
        Ok(())
    }
}

// ─── Exercise repo ───────────────────────────────────────────────────────────

pub struct ExerciseRepo;

impl ExerciseRepo {
    fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Exercise> {
        Ok(Exercise {
            id: row.get(0)?,
            name: row.get(1)?,
            body_part: row.get(2)?,
            equipment: row.get(3)?,
            target: row.get(4)?,
            difficulty_level: row.get(5)?,
            description: row.get(6)?,
        })
    }

    pub fn list(conn: &Connection, body_part: Option<&str>) -> Result<Vec<Exercise>> {
        let mut stmt = conn.prepare(
            "SELECT id, name, body_part, equipment, target, difficulty_level, description
             FROM exercises
             WHERE ?1 IS NULL OR body_part = ?1 COLLATE NOCASE
             ORDER BY body_part, name",
        )?;
        let rows = stmt.query_map(params![body_part], Self::from_row)?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(anyhow::Error::from)
    }

    pub fn find_by_name(conn: &Connection, name: &str) -> Result<Option<Exercise>> {
        conn.query_row(
            "SELECT id, name, body_part, equipment, target, difficulty_level, description
             FROM exercises WHERE name = ?1",
            params![name],
            Self::from_row,
        )
        .optional()
        .map_err(anyhow::Error::from)
    }

    /// Id of the exercise with this name, inserting it first if unknown.
    pub fn ensure(conn: &Connection, ex: &NewWorkoutExercise) -> Result<i64> {
        if let Some(existing) = Self::find_by_name(conn, ex.name.trim())? {
            return Ok(existing.id);
        }
        conn.execute(
            "INSERT INTO exercises (name, body_part, equipment, target)
             VALUES (?1, ?2, ?3, ?4)",
            params![ex.name.trim(), ex.body_part, ex.equipment, ex.target],
        )?;
        log::debug!("Added custom exercise '{}'", ex.name.trim());
        Ok(conn.last_insert_rowid())
    }
}

// ─── Workout repo ────────────────────────────────────────────────────────────

pub struct WorkoutRepo;

impl WorkoutRepo {
    pub fn create(conn: &Connection, user_id: i64, workout: &NewWorkout) -> Result<i64> {
        workout.validate()?;

        let tx = conn.unchecked_transaction()?;
        tx.execute(
            "INSERT INTO workouts
                (user_id, name, description, goal, level, workouts_per_week, duration_label, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                user_id,
                workout.name.trim(),
                workout.description,
                workout.goal,
                workout.level,
                workout.workouts_per_week,
                workout.duration_label,
                timestamp(Utc::now()),
            ],
        )?;
        let workout_id = tx.last_insert_rowid();

        for (order, ex) in workout.exercises.iter().enumerate() {
            let exercise_id = ExerciseRepo::ensure(&tx, ex)?;
            tx.execute(
                "INSERT INTO workout_exercises
                    (workout_id, exercise_id, day, focus, sets, reps, weight, duration_seconds, sort_order)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                params![
                    workout_id,
                    exercise_id,
                    ex.day,
                    ex.focus,
                    ex.sets,
                    ex.reps,
                    ex.weight,
                    ex.duration_seconds,
                    order as i64,
                ],
            )?;
        }
        tx.commit()?;

        log::info!(
            "Saved workout '{}' ({} exercises)",
            workout.name,
            workout.exercises.len()
        );
        Ok(workout_id)
    }

    fn exercises_for(conn: &Connection, workout_id: i64) -> Result<Vec<WorkoutExercise>> {
        let mut stmt = conn.prepare(
            "SELECT we.id, we.exercise_id, e.name, e.body_part, we.day, we.focus,
                    we.sets, we.reps, we.weight, we.duration_seconds
             FROM workout_exercises we
             JOIN exercises e ON e.id = we.exercise_id
             WHERE we.workout_id = ?1
             ORDER BY we.sort_order, we.id",
        )?;
        let rows = stmt.query_map(params![workout_id], |row| {
            Ok(WorkoutExercise {
                id: row.get(0)?,
                exercise_id: row.get(1)?,
                name: row.get(2)?,
                body_part: row.get(3)?,
                day: row.get(4)?,
                focus: row.get(5)?,
                sets: row.get(6)?,
                reps: row.get(7)?,
                weight: row.get(8)?,
                duration_seconds: row.get(9)?,
            })
        })?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(anyhow::Error::from)
    }

    fn workout_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Workout> {
        Ok(Workout {
            id: row.get(0)?,
            user_id: row.get(1)?,
            name: row.get(2)?,
            description: row.get(3)?,
            goal: row.get(4)?,
            level: row.get(5)?,
            workouts_per_week: row.get(6)?,
            duration_label: row.get(7)?,
            created_at: row.get(8)?,
            last_performed: row.get(9)?,
            exercises: Vec::new(),
        })
    }

    /// Newest first, exercises included.
    pub fn list_for_user(conn: &Connection, user_id: i64) -> Result<Vec<Workout>> {
        let mut stmt = conn.prepare(
            "SELECT id, user_id, name, description, goal, level, workouts_per_week,
                    duration_label, created_at, last_performed
             FROM workouts WHERE user_id = ?1
             ORDER BY created_at DESC, id DESC",
        )?;
        let rows = stmt.query_map(params![user_id], Self::workout_from_row)?;

        let mut result = Vec::new();
        for row in rows {
            let mut workout = row?;
            workout.exercises = Self::exercises_for(conn, workout.id)?;
            result.push(workout);
        }
        Ok(result)
    }

    pub fn get(conn: &Connection, user_id: i64, workout_id: i64) -> Result<Option<Workout>> {
        let workout = conn
            .query_row(
                "SELECT id, user_id, name, description, goal, level, workouts_per_week,
                        duration_label, created_at, last_performed
                 FROM workouts WHERE id = ?1 AND user_id = ?2",
                params![workout_id, user_id],
                Self::workout_from_row,
            )
            .optional()?;

        match workout {
            None => Ok(None),
            Some(mut w) => {
                w.exercises = Self::exercises_for(conn, w.id)?;
                Ok(Some(w))
            }
        }
    }

    /// Returns false when no such workout belongs to the user.
    pub fn delete(conn: &Connection, user_id: i64, workout_id: i64) -> Result<bool> {
        let removed = conn.execute(
            "DELETE FROM workouts WHERE id = ?1 AND user_id = ?2",
            params![workout_id, user_id],
        )?;
        Ok(removed > 0)
    }

    pub fn has_completions(conn: &Connection, user_id: i64, workout_id: i64) -> Result<bool> {
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM workout_completions WHERE workout_id = ?1 AND user_id = ?2",
            params![workout_id, user_id],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    pub fn touch_last_performed(conn: &Connection, workout_id: i64, at: DateTime<Utc>) -> Result<()> {
        conn.execute(
            "UPDATE workouts SET last_performed = ?1 WHERE id = ?2",
            params![timestamp(at), workout_id],
        )?;
        Ok(())
    }
}

// ─── Completion repo ─────────────────────────────────────────────────────────

pub struct CompletionRepo;

impl CompletionRepo {
    pub fn record(conn: &Connection, user_id: i64, completion: &NewCompletion) -> Result<i64> {
        if completion.duration_minutes == 0 {
            bail!("Duration must be greater than zero minutes");
        }
        if !(1..=5).contains(&completion.difficulty_rating) {
            bail!(
                "Difficulty rating must be between 1 and 5 (got {})",
                completion.difficulty_rating
            );
        }
        if WorkoutRepo::get(conn, user_id, completion.workout_id)?.is_none() {
            bail!("Workout {} not found", completion.workout_id);
        }

        let tx = conn.unchecked_transaction()?;
        tx.execute(
            "INSERT INTO workout_completions
                (user_id, workout_id, completed_at, duration_minutes, difficulty_rating, notes)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                user_id,
                completion.workout_id,
                timestamp(completion.completed_at),
                completion.duration_minutes,
                completion.difficulty_rating,
                completion.notes,
            ],
        )?;
        let completion_id = tx.last_insert_rowid();

        for ex in &completion.exercises {
            tx.execute(
                "INSERT INTO exercise_progress
                    (completion_id, exercise_id, sets, reps, weight, duration_seconds)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    completion_id,
                    ex.exercise_id,
                    ex.sets,
                    ex.reps,
                    ex.weight,
                    ex.duration_seconds,
                ],
            )
            .with_context(|| format!("Failed to log progress for '{}'", ex.exercise_name))?;
        }
        WorkoutRepo::touch_last_performed(&tx, completion.workout_id, completion.completed_at)?;
        tx.commit()?;

        log::info!(
            "Recorded completion {} of workout {} ({} exercises)",
            completion_id,
            completion.workout_id,
            completion.exercises.len()
        );
        Ok(completion_id)
    }

    /// All completions of the user, newest first, with logged exercises.
    pub fn list_for_user(conn: &Connection, user_id: i64) -> Result<Vec<Completion>> {
        let mut stmt = conn.prepare(
            "SELECT c.id, c.workout_id, w.name, c.completed_at, c.duration_minutes,
                    c.difficulty_rating, c.notes
             FROM workout_completions c
             JOIN workouts w ON w.id = c.workout_id
             WHERE c.user_id = ?1
             ORDER BY c.completed_at DESC, c.id DESC",
        )?;
        let rows = stmt.query_map(params![user_id], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, i64>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, u32>(4)?,
                row.get::<_, u8>(5)?,
                row.get::<_, Option<String>>(6)?,
            ))
        })?;

        let mut progress = Self::progress_for_user(conn, user_id)?;
        let mut result = Vec::new();
        for r in rows {
            let (id, workout_id, workout_name, completed_at, duration_minutes, difficulty_rating, notes) =
                r?;
            result.push(Completion {
                id,
                workout_id,
                workout_name,
                completed_at: parse_timestamp(&completed_at)?,
                duration_minutes,
                difficulty_rating,
                notes,
                exercises: progress.remove(&id).unwrap_or_default(),
            });
        }
        Ok(result)
    }

    fn progress_for_user(
        conn: &Connection,
        user_id: i64,
    ) -> Result<HashMap<i64, Vec<ExerciseProgress>>> {
        let mut stmt = conn.prepare(
            "SELECT p.completion_id, p.id, p.exercise_id, e.name, p.sets, p.reps,
                    p.weight, p.duration_seconds
             FROM exercise_progress p
             JOIN workout_completions c ON c.id = p.completion_id
             JOIN exercises e ON e.id = p.exercise_id
             WHERE c.user_id = ?1
             ORDER BY p.id",
        )?;
        let rows = stmt.query_map(params![user_id], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                ExerciseProgress {
                    id: Some(row.get(1)?),
                    exercise_id: row.get(2)?,
                    exercise_name: row.get(3)?,
                    sets: row.get(4)?,
                    reps: row.get(5)?,
                    weight: row.get(6)?,
                    duration_seconds: row.get(7)?,
                },
            ))
        })?;

        let mut map: HashMap<i64, Vec<ExerciseProgress>> = HashMap::new();
        for r in rows {
            let (completion_id, entry) = r?;
            map.entry(completion_id).or_default().push(entry);
        }
        Ok(map)
    }
}

// ─── App meta ────────────────────────────────────────────────────────────────

pub struct MetaRepo;

impl MetaRepo {
    pub fn get(conn: &Connection, key: &str) -> Result<Option<String>> {
        conn.query_row(
            "SELECT value FROM app_meta WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()
        .map_err(anyhow::Error::from)
    }

    pub fn set(conn: &Connection, key: &str, value: &str) -> Result<()> {
        conn.execute(
            "INSERT INTO app_meta (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = ?2",
            params![key, value],
        )?;
        Ok(())
    }

    pub fn delete(conn: &Connection, key: &str) -> Result<()> {
        conn.execute("DELETE FROM app_meta WHERE key = ?1", params![key])?;
        Ok(())
    }
}
