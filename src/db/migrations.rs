use anyhow::Result;
use rusqlite::Connection;

use crate::plans::library::LIBRARY;

pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch("
        PRAGMA foreign_keys = ON;

        CREATE TABLE IF NOT EXISTS users (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            username    TEXT NOT NULL UNIQUE COLLATE NOCASE,
            created_at  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS profiles (
            user_id        INTEGER PRIMARY KEY REFERENCES users(id) ON DELETE CASCADE,
            full_name      TEXT,
            fitness_level  TEXT CHECK(fitness_level IN ('beginner','intermediate','advanced')),
            goal           TEXT CHECK(goal IN ('weight-loss','muscle-gain','endurance','general-fitness')),
            weight_kg      REAL,
            height_cm      REAL,
            age            INTEGER,
            updated_at     TEXT
        );

        CREATE TABLE IF NOT EXISTS exercises (
            id                INTEGER PRIMARY KEY AUTOINCREMENT,
            name              TEXT NOT NULL UNIQUE COLLATE NOCASE,
            body_part         TEXT NOT NULL DEFAULT '',
            equipment         TEXT NOT NULL DEFAULT '',
            target            TEXT NOT NULL DEFAULT '',
            difficulty_level  TEXT NOT NULL DEFAULT 'beginner',
            description       TEXT
        );

        CREATE TABLE IF NOT EXISTS workouts (
            id                 INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id            INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            name               TEXT NOT NULL,
            description        TEXT,
            goal               TEXT,
            level              TEXT,
            workouts_per_week  INTEGER,
            duration_label     TEXT,
            created_at         TEXT NOT NULL,
            last_performed     TEXT
        );

        CREATE TABLE IF NOT EXISTS workout_exercises (
            id                INTEGER PRIMARY KEY AUTOINCREMENT,
            workout_id        INTEGER NOT NULL REFERENCES workouts(id) ON DELETE CASCADE,
            exercise_id       INTEGER NOT NULL REFERENCES exercises(id),
            day               TEXT,
            focus             TEXT,
            sets              INTEGER NOT NULL DEFAULT 3,
            reps              INTEGER NOT NULL DEFAULT 12,
            weight            REAL,
            duration_seconds  INTEGER,
            sort_order        INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS workout_completions (
            id                 INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id            INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            workout_id         INTEGER NOT NULL REFERENCES workouts(id) ON DELETE CASCADE,
            completed_at       TEXT NOT NULL,
            duration_minutes   INTEGER NOT NULL CHECK(duration_minutes > 0),
            difficulty_rating  INTEGER NOT NULL CHECK(difficulty_rating BETWEEN 1 AND 5),
            notes              TEXT
        );

        CREATE TABLE IF NOT EXISTS exercise_progress (
            id                INTEGER PRIMARY KEY AUTOINCREMENT,
            completion_id     INTEGER NOT NULL REFERENCES workout_completions(id) ON DELETE CASCADE,
            exercise_id       INTEGER NOT NULL REFERENCES exercises(id),
            sets              INTEGER NOT NULL,
            reps              INTEGER NOT NULL,
            weight            REAL,
            duration_seconds  INTEGER
        );

        CREATE INDEX IF NOT EXISTS idx_workouts_user ON workouts(user_id);
        CREATE INDEX IF NOT EXISTS idx_completions_user ON workout_completions(user_id, completed_at);

        CREATE TABLE IF NOT EXISTS app_meta (
            key   TEXT PRIMARY KEY,
            value TEXT
        );
    ")?;

    seed_library(conn)?;
    Ok(())
}

fn seed_library(conn: &Connection) -> Result<()> {
    let mut stmt = conn.prepare(
        "INSERT OR IGNORE INTO exercises
            (name, body_part, equipment, target, difficulty_level, description)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )?;

    let mut inserted = 0;
    for ex in LIBRARY {
        inserted += stmt.execute(rusqlite::params![
            ex.name,
            ex.body_part,
            ex.equipment,
            ex.target,
            ex.difficulty,
            ex.description
        ])?;
    }
    if inserted > 0 {
        log::debug!("Seeded {} library exercises", inserted);
    }
    Ok(())
}
