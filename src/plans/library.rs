//! Built-in exercise library, seeded into the `exercises` table on startup
//! and used by the plan generator to fill each training day.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LibraryExercise {
    pub name: &'static str,
    pub body_part: &'static str,
    pub equipment: &'static str,
    pub target: &'static str,
    pub difficulty: &'static str,
    pub description: &'static str,
}

const fn ex(
    name: &'static str,
    body_part: &'static str,
    equipment: &'static str,
    target: &'static str,
    difficulty: &'static str,
    description: &'static str,
) -> LibraryExercise {
    LibraryExercise {
        name,
        body_part,
        equipment,
        target,
        difficulty,
        description,
    }
}

pub const BODY_PARTS: [&str; 8] = [
    "back",
    "cardio",
    "chest",
    "lower legs",
    "shoulders",
    "upper arms",
    "upper legs",
    "waist",
];

pub const LIBRARY: &[LibraryExercise] = &[
    // back
    ex("Pull-ups", "back", "body weight", "lats", "intermediate",
        "Hang from bar, pull up until chin above bar."),
    ex("Inverted Rows", "back", "body weight", "upper back", "beginner",
        "Lie under a low bar, pull chest to the bar keeping body straight."),
    ex("Superman Hold", "back", "body weight", "spine", "beginner",
        "Lie face down, lift arms and legs, hold for a count."),
    ex("Dumbbell Rows", "back", "dumbbell", "upper back", "beginner",
        "Bend at hips, pull dumbbell to waist."),
    ex("Bent Over Rows", "back", "barbell", "upper back", "intermediate",
        "Bend at hips, keep back straight, pull bar to waist."),
    ex("Lat Pulldown", "back", "cable", "lats", "beginner",
        "Pull the bar to upper chest, control the return."),
    ex("Deadlifts", "back", "barbell", "posterior chain", "advanced",
        "Feet hip-width, grip bar, lift with legs and back."),
    ex("Child's Pose", "back", "body weight", "spinal mobility", "beginner",
        "Sit back on heels, reach arms forward."),
    // cardio
    ex("Burpees", "cardio", "body weight", "cardiovascular system", "intermediate",
        "Squat, kick legs back, push-up, jump up."),
    ex("High Knees", "cardio", "body weight", "cardiovascular system", "beginner",
        "Run in place, bringing knees up high."),
    ex("Jumping Jacks", "cardio", "body weight", "cardiovascular system", "beginner",
        "Jump while spreading legs and raising arms."),
    ex("Kettlebell Swing", "cardio", "kettlebell", "glutes", "intermediate",
        "Hinge at the hips and drive the bell to chest height."),
    ex("Jump Rope", "cardio", "rope", "cardiovascular system", "beginner",
        "Jump continuously for 30 seconds, rest 15 seconds."),
    ex("Rowing Machine", "cardio", "leverage machine", "cardiovascular system", "beginner",
        "Drive with the legs, then lean back and pull the handle to the ribs."),
    // chest
    ex("Push-ups", "chest", "body weight", "pectorals", "beginner",
        "Keep body straight, lower chest to ground, push up."),
    ex("Dips", "chest", "body weight", "triceps", "intermediate",
        "Lower body between bars, push up to starting position."),
    ex("Chest Opener", "chest", "body weight", "chest mobility", "beginner",
        "Interlace fingers behind back, lift arms."),
    ex("Incline Dumbbell Press", "chest", "dumbbell", "upper pectorals", "intermediate",
        "Press dumbbells up from an incline bench, lower with control."),
    ex("Dumbbell Fly", "chest", "dumbbell", "pectorals", "beginner",
        "Open arms wide with a slight elbow bend, squeeze back together."),
    ex("Bench Press", "chest", "barbell", "pectorals", "intermediate",
        "Lie on bench, grip bar slightly wider than shoulders, lower to chest and press up."),
    ex("Cable Crossover", "chest", "cable", "pectorals", "intermediate",
        "Pull handles down and together in an arc."),
    // lower legs
    ex("Calf Raises", "lower legs", "body weight", "calves", "beginner",
        "Stand on edge of step, raise heels, lower below step."),
    ex("Seated Calf Raise", "lower legs", "leverage machine", "calves", "beginner",
        "Raise heels against the pad, pause at the top."),
    // shoulders
    ex("Pike Push-ups", "shoulders", "body weight", "delts", "intermediate",
        "Hips high, lower the head between the hands, press back up."),
    ex("Shoulder Stretch", "shoulders", "body weight", "shoulder mobility", "beginner",
        "Cross arm across chest, hold for 30 seconds."),
    ex("Band Pull-Apart", "shoulders", "band", "rear delts", "beginner",
        "Hold band at shoulder height, pull apart to the chest."),
    ex("Dumbbell Lateral Raise", "shoulders", "dumbbell", "delts", "beginner",
        "Raise dumbbells out to shoulder height, lower slowly."),
    ex("Overhead Press", "shoulders", "barbell", "delts", "intermediate",
        "Press bar overhead, keep core tight, lower with control."),
    // upper arms
    ex("Diamond Push-ups", "upper arms", "body weight", "triceps", "intermediate",
        "Hands together under the chest, lower and press."),
    ex("Bench Dips", "upper arms", "body weight", "triceps", "beginner",
        "Hands on a bench behind you, lower hips and press up."),
    ex("Dumbbell Curl", "upper arms", "dumbbell", "biceps", "beginner",
        "Curl dumbbells to shoulders, keep elbows still."),
    ex("Band Curl", "upper arms", "band", "biceps", "beginner",
        "Stand on the band, curl handles to shoulders."),
    ex("Barbell Curl", "upper arms", "barbell", "biceps", "intermediate",
        "Curl the bar to the chest without swinging."),
    ex("Tricep Pushdown", "upper arms", "cable", "triceps", "beginner",
        "Push the rope down until arms are straight."),
    // upper legs
    ex("Bodyweight Squats", "upper legs", "body weight", "quads", "beginner",
        "Feet shoulder-width, squat until thighs parallel."),
    ex("Lunges", "upper legs", "body weight", "quads", "beginner",
        "Step forward, lower back knee to ground."),
    ex("Jump Squats", "upper legs", "body weight", "quads", "intermediate",
        "Squat down, explode up into jump."),
    ex("Hamstring Stretch", "upper legs", "body weight", "hamstrings", "beginner",
        "Sit with legs straight, reach for toes."),
    ex("Hip Flexor Stretch", "upper legs", "body weight", "hip flexors", "beginner",
        "Lunge position, push hips forward."),
    ex("Goblet Squat", "upper legs", "dumbbell", "quads", "beginner",
        "Hold a dumbbell at the chest and squat between the knees."),
    ex("Squats", "upper legs", "barbell", "quads", "intermediate",
        "Feet shoulder-width, keep chest up, squat until thighs parallel."),
    ex("Romanian Deadlifts", "upper legs", "barbell", "hamstrings", "intermediate",
        "Hinge at hips, keep back straight, lower bar along legs."),
    ex("Leg Press", "upper legs", "leverage machine", "quads", "beginner",
        "Lower the sled until knees reach 90 degrees, press back."),
    // waist
    ex("Plank", "waist", "body weight", "abs", "beginner",
        "Hold a straight line from head to heels on the forearms."),
    ex("Mountain Climbers", "waist", "body weight", "abs", "beginner",
        "In plank position, alternate bringing knees to chest."),
    ex("Plank Jacks", "waist", "body weight", "abs", "intermediate",
        "In plank, jump feet in and out."),
    ex("Bicycle Crunch", "waist", "body weight", "abs", "beginner",
        "Bring opposite elbow to knee while extending the other leg."),
    ex("Cat-Cow", "waist", "body weight", "spinal mobility", "beginner",
        "Alternate between arching and rounding back."),
    ex("Hanging Leg Raise", "waist", "body weight", "abs", "advanced",
        "Hang from a bar and raise straight legs to hip height."),
    ex("Russian Twist", "waist", "dumbbell", "obliques", "beginner",
        "Lean back, rotate a dumbbell from hip to hip."),
    ex("Cable Woodchop", "waist", "cable", "obliques", "intermediate",
        "Rotate through the torso pulling the handle across the body."),
];

pub fn by_body_part(body_part: &str) -> impl Iterator<Item = &'static LibraryExercise> + '_ {
    LIBRARY
        .iter()
        .filter(move |e| e.body_part.eq_ignore_ascii_case(body_part))
}

pub fn find(name: &str) -> Option<&'static LibraryExercise> {
    LIBRARY.iter().find(|e| e.name.eq_ignore_ascii_case(name))
}
