//! Preset workout programs users can browse and save.

use crate::models::{NewWorkout, NewWorkoutExercise};
use crate::plans::library;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogExercise {
    pub name: &'static str,
    pub sets: i32,
    pub reps: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleDay {
    pub day: &'static str,
    pub focus: &'static str,
    pub exercises: &'static [CatalogExercise],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Program {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub workouts_per_week: u8,
    pub duration: &'static str,
    pub level: &'static str,
    pub schedule: &'static [ScheduleDay],
}

const fn ce(name: &'static str, sets: i32, reps: i32) -> CatalogExercise {
    CatalogExercise { name, sets, reps }
}

const fn day(day: &'static str, focus: &'static str) -> ScheduleDay {
    ScheduleDay {
        day,
        focus,
        exercises: &[],
    }
}

pub const PROGRAMS: &[Program] = &[
    Program {
        id: "strength",
        name: "Strength Training",
        description: "Build muscle and increase strength with our comprehensive program.",
        workouts_per_week: 4,
        duration: "8 weeks",
        level: "Intermediate",
        schedule: &[
            ScheduleDay {
                day: "Monday",
                focus: "Upper Body",
                exercises: &[
                    ce("Bench Press", 4, 8),
                    ce("Bent Over Rows", 4, 10),
                    ce("Overhead Press", 3, 8),
                ],
            },
            day("Tuesday", "Rest"),
            ScheduleDay {
                day: "Wednesday",
                focus: "Lower Body",
                exercises: &[
                    ce("Squats", 4, 8),
                    ce("Romanian Deadlifts", 4, 10),
                    ce("Calf Raises", 3, 15),
                ],
            },
            day("Thursday", "Rest"),
            ScheduleDay {
                day: "Friday",
                focus: "Full Body",
                exercises: &[ce("Deadlifts", 4, 6), ce("Pull-ups", 3, 8), ce("Dips", 3, 10)],
            },
            day("Saturday", "Active Recovery"),
            day("Sunday", "Rest"),
        ],
    },
    Program {
        id: "weight-loss",
        name: "Weight Loss",
        description: "Effective cardio and strength workouts designed for fat loss.",
        workouts_per_week: 5,
        duration: "12 weeks",
        level: "Beginner",
        schedule: &[
            ScheduleDay {
                day: "Monday",
                focus: "HIIT Cardio",
                exercises: &[
                    ce("Jump Rope", 8, 30),
                    ce("Burpees", 4, 10),
                    ce("Mountain Climbers", 4, 20),
                ],
            },
            ScheduleDay {
                day: "Tuesday",
                focus: "Upper Body",
                exercises: &[ce("Push-ups", 3, 12), ce("Dumbbell Rows", 3, 12)],
            },
            ScheduleDay {
                day: "Wednesday",
                focus: "HIIT Cardio",
                exercises: &[ce("High Knees", 4, 30), ce("Jump Squats", 4, 12)],
            },
            ScheduleDay {
                day: "Thursday",
                focus: "Lower Body",
                exercises: &[ce("Bodyweight Squats", 4, 15), ce("Lunges", 3, 12)],
            },
            ScheduleDay {
                day: "Friday",
                focus: "HIIT Cardio",
                exercises: &[ce("Jumping Jacks", 4, 30), ce("Plank Jacks", 4, 20)],
            },
            day("Saturday", "Rest"),
            day("Sunday", "Active Recovery"),
        ],
    },
    Program {
        id: "flexibility",
        name: "Flexibility",
        description: "Improve mobility and reduce injury risk with targeted stretching.",
        workouts_per_week: 3,
        duration: "6 weeks",
        level: "All Levels",
        schedule: &[
            ScheduleDay {
                day: "Monday",
                focus: "Upper Body Mobility",
                exercises: &[ce("Shoulder Stretch", 2, 30), ce("Chest Opener", 2, 30)],
            },
            day("Tuesday", "Rest"),
            ScheduleDay {
                day: "Wednesday",
                focus: "Lower Body Mobility",
                exercises: &[ce("Hamstring Stretch", 2, 30), ce("Hip Flexor Stretch", 2, 30)],
            },
            day("Thursday", "Rest"),
            ScheduleDay {
                day: "Friday",
                focus: "Full Body Stretching",
                exercises: &[ce("Cat-Cow", 2, 10), ce("Child's Pose", 2, 30)],
            },
            day("Saturday", "Rest"),
            day("Sunday", "Rest"),
        ],
    },
    Program {
        id: "hiit",
        name: "HIIT Training",
        description: "High-intensity interval training for maximum calorie burn in minimum time.",
        workouts_per_week: 4,
        duration: "6 weeks",
        level: "Intermediate",
        schedule: &[
            day("Monday", "HIIT + Upper Body"),
            day("Tuesday", "Rest"),
            day("Wednesday", "HIIT + Lower Body"),
            day("Thursday", "Rest"),
            day("Friday", "HIIT + Core"),
            day("Saturday", "Active Recovery"),
            day("Sunday", "Rest"),
        ],
    },
    Program {
        id: "powerlifting",
        name: "Powerlifting",
        description: "Focus on the big three lifts: squat, bench press, and deadlift to build maximum strength.",
        workouts_per_week: 4,
        duration: "12 weeks",
        level: "Advanced",
        schedule: &[
            day("Monday", "Squat"),
            day("Tuesday", "Bench Press"),
            day("Wednesday", "Rest"),
            day("Thursday", "Deadlift"),
            day("Friday", "Accessory Work"),
            day("Saturday", "Rest"),
            day("Sunday", "Rest"),
        ],
    },
    Program {
        id: "bodyweight",
        name: "Bodyweight Mastery",
        description: "Build strength and control using just your body weight with progressive calisthenics.",
        workouts_per_week: 3,
        duration: "8 weeks",
        level: "Beginner",
        schedule: &[
            day("Monday", "Push"),
            day("Tuesday", "Pull"),
            day("Wednesday", "Rest"),
            day("Thursday", "Legs"),
            day("Friday", "Core"),
            day("Saturday", "Rest"),
            day("Sunday", "Rest"),
        ],
    },
    Program {
        id: "endurance",
        name: "Endurance Training",
        description: "Build stamina and cardiovascular fitness with progressive endurance workouts.",
        workouts_per_week: 5,
        duration: "10 weeks",
        level: "Intermediate",
        schedule: &[
            day("Monday", "Run"),
            day("Tuesday", "Bike"),
            day("Wednesday", "Rest"),
            day("Thursday", "Swim"),
            day("Friday", "Run"),
            day("Saturday", "Rest"),
            day("Sunday", "Long Run"),
        ],
    },
    Program {
        id: "functional",
        name: "Functional Fitness",
        description: "Improve everyday movement patterns and build practical strength for daily life.",
        workouts_per_week: 4,
        duration: "8 weeks",
        level: "All Levels",
        schedule: &[
            day("Monday", "Mobility"),
            day("Tuesday", "Strength"),
            day("Wednesday", "Rest"),
            day("Thursday", "Balance"),
            day("Friday", "Core"),
            day("Saturday", "Rest"),
            day("Sunday", "Rest"),
        ],
    },
];

pub fn find(id: &str) -> Option<&'static Program> {
    PROGRAMS.iter().find(|p| p.id.eq_ignore_ascii_case(id))
}

impl Program {
    /// Days that prescribe at least one exercise.
    pub fn training_days(&self) -> impl Iterator<Item = &'static ScheduleDay> {
        self.schedule.iter().filter(|d| !d.exercises.is_empty())
    }

    pub fn exercise_count(&self) -> usize {
        self.training_days().map(|d| d.exercises.len()).sum()
    }

    pub fn to_new_workout(&self) -> NewWorkout {
        let exercises = self
            .training_days()
            .flat_map(|d| {
                d.exercises.iter().map(move |e| {
                    let lib = library::find(e.name);
                    NewWorkoutExercise {
                        name: e.name.to_string(),
                        body_part: lib.map(|l| l.body_part).unwrap_or_default().to_string(),
                        equipment: lib.map(|l| l.equipment).unwrap_or_default().to_string(),
                        target: lib.map(|l| l.target).unwrap_or_default().to_string(),
                        day: Some(d.day.to_string()),
                        focus: Some(d.focus.to_string()),
                        sets: e.sets,
                        reps: e.reps,
                        weight: None,
                        duration_seconds: None,
                    }
                })
            })
            .collect();

        NewWorkout {
            name: self.name.to_string(),
            description: Some(self.description.to_string()),
            goal: None,
            level: Some(self.level.to_string()),
            workouts_per_week: Some(self.workouts_per_week),
            duration_label: Some(self.duration.to_string()),
            exercises,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_programs_with_full_weeks() {
        assert_eq!(PROGRAMS.len(), 8);
        for program in PROGRAMS {
            assert_eq!(program.schedule.len(), 7, "{} schedule", program.id);
            assert_eq!(program.schedule[0].day, "Monday");
            assert_eq!(program.schedule[6].day, "Sunday");
        }
    }

    #[test]
    fn catalog_exercises_exist_in_library() {
        for program in PROGRAMS {
            for d in program.training_days() {
                for e in d.exercises {
                    assert!(library::find(e.name).is_some(), "{} missing from library", e.name);
                }
            }
        }
    }

    #[test]
    fn saving_keeps_only_training_days() {
        let strength = find("strength").unwrap();
        let workout = strength.to_new_workout();
        assert_eq!(workout.exercises.len(), 9);
        assert_eq!(workout.exercises.len(), strength.exercise_count());
        assert!(workout.exercises.iter().all(|e| e.focus.as_deref() != Some("Rest")));
        assert_eq!(workout.exercises[0].day.as_deref(), Some("Monday"));
        assert_eq!(workout.exercises[0].body_part, "chest");
        assert!(workout.validate().is_ok());
    }

    #[test]
    fn outline_programs_save_without_exercises() {
        let hiit = find("HIIT").unwrap();
        assert_eq!(hiit.exercise_count(), 0);
        assert!(hiit.to_new_workout().exercises.is_empty());
    }
}
