// ABOUTME: Built-in exercise catalog and first-run seeding
// ABOUTME: Inserts the catalog only when the exercise table is empty
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Exercise catalog seeding
//!
//! The server seeds at startup when `SEED_EXERCISES` is true (the default).
//! The same routine is available as a standalone tool:
//!
//! ```bash
//! cargo run --bin seed-exercises -- --database-url sqlite:./data/liftlog.db
//! ```

use super::ExerciseManager;
use crate::errors::AppResult;
use crate::logging::AppLogger;
use crate::models::{Exercise, ExerciseCategory, MuscleGroup};
use tracing::{debug, info};
use uuid::Uuid;
use ExerciseCategory::{Cardio, Strength};
use MuscleGroup::{Back, Biceps, Chest, Core, FullBody, Legs, Shoulders, Triceps};

/// One catalog row, before it is given an id
#[derive(Debug, Clone, Copy)]
pub struct SeedExercise {
    /// Display name
    pub name: &'static str,
    /// How sets are interpreted
    pub category: ExerciseCategory,
    /// Primary muscle group
    pub muscle_group: MuscleGroup,
    /// Short description
    pub description: &'static str,
}

impl SeedExercise {
    /// Materialize as a catalog entry with a fresh id
    #[must_use]
    pub fn to_exercise(self) -> Exercise {
        Exercise {
            id: Uuid::new_v4().to_string(),
            name: self.name.to_owned(),
            category: self.category,
            muscle_group: self.muscle_group,
            description: Some(self.description.to_owned()),
            instructions: None,
        }
    }
}

const fn seed(
    name: &'static str,
    category: ExerciseCategory,
    muscle_group: MuscleGroup,
    description: &'static str,
) -> SeedExercise {
    SeedExercise {
        name,
        category,
        muscle_group,
        description,
    }
}

/// The built-in catalog, grouped by muscle group
pub const INITIAL_EXERCISES: &[SeedExercise] = &[
    // Chest
    seed("Bench Press", Strength, Chest, "Classic chest compound movement"),
    seed("Incline Bench Press", Strength, Chest, "Upper chest focused press"),
    seed("Decline Bench Press", Strength, Chest, "Lower chest focused press"),
    seed("Dumbbell Fly", Strength, Chest, "Chest isolation movement"),
    seed("Cable Crossover", Strength, Chest, "Cable chest isolation"),
    seed("Push-Up", Strength, Chest, "Bodyweight chest exercise"),
    seed("Chest Dip", Strength, Chest, "Weighted dip for chest"),
    seed("Dumbbell Press", Strength, Chest, "Dumbbell bench press variation"),
    seed("Machine Chest Press", Strength, Chest, "Machine guided chest press"),
    seed("Pec Deck Fly", Strength, Chest, "Machine fly for chest"),

    // Back
    seed("Deadlift", Strength, Back, "Full body posterior chain movement"),
    seed("Pull-Up", Strength, Back, "Bodyweight back exercise"),
    seed("Lat Pulldown", Strength, Back, "Machine lat exercise"),
    seed("Barbell Row", Strength, Back, "Compound back movement"),
    seed("Dumbbell Row", Strength, Back, "Single arm back row"),
    seed("Seated Cable Row", Strength, Back, "Cable back exercise"),
    seed("T-Bar Row", Strength, Back, "Barbell row variation"),
    seed("Face Pull", Strength, Back, "Rear delt and upper back"),
    seed("Chin-Up", Strength, Back, "Underhand pull-up variation"),
    seed("Rack Pull", Strength, Back, "Partial deadlift from rack"),

    // Shoulders
    seed("Overhead Press", Strength, Shoulders, "Standing barbell press"),
    seed("Dumbbell Shoulder Press", Strength, Shoulders, "Seated dumbbell press"),
    seed("Lateral Raise", Strength, Shoulders, "Side delt isolation"),
    seed("Front Raise", Strength, Shoulders, "Front delt isolation"),
    seed("Rear Delt Fly", Strength, Shoulders, "Rear delt isolation"),
    seed("Arnold Press", Strength, Shoulders, "Rotating shoulder press"),
    seed("Upright Row", Strength, Shoulders, "Barbell shoulder movement"),
    seed("Shrugs", Strength, Shoulders, "Trap isolation"),
    seed("Machine Shoulder Press", Strength, Shoulders, "Machine guided press"),
    seed("Cable Lateral Raise", Strength, Shoulders, "Cable side delt work"),

    // Biceps
    seed("Barbell Curl", Strength, Biceps, "Classic bicep exercise"),
    seed("Dumbbell Curl", Strength, Biceps, "Alternating dumbbell curls"),
    seed("Hammer Curl", Strength, Biceps, "Neutral grip curl"),
    seed("Preacher Curl", Strength, Biceps, "Isolated bicep curl"),
    seed("Concentration Curl", Strength, Biceps, "Single arm focused curl"),
    seed("Cable Curl", Strength, Biceps, "Cable bicep exercise"),
    seed("Incline Dumbbell Curl", Strength, Biceps, "Stretched bicep curl"),
    seed("EZ Bar Curl", Strength, Biceps, "Angled bar curl"),
    seed("Spider Curl", Strength, Biceps, "Incline bench curl"),
    seed("21s", Strength, Biceps, "Partial rep bicep finisher"),

    // Triceps
    seed("Tricep Pushdown", Strength, Triceps, "Cable tricep exercise"),
    seed("Skull Crusher", Strength, Triceps, "Lying tricep extension"),
    seed("Close Grip Bench Press", Strength, Triceps, "Tricep focused press"),
    seed("Overhead Tricep Extension", Strength, Triceps, "Cable or dumbbell overhead"),
    seed("Dips", Strength, Triceps, "Tricep focused dips"),
    seed("Kickback", Strength, Triceps, "Dumbbell kickback"),
    seed("Diamond Push-Up", Strength, Triceps, "Close hand push-up"),
    seed("Rope Pushdown", Strength, Triceps, "Rope attachment pushdown"),
    seed("JM Press", Strength, Triceps, "Hybrid press movement"),
    seed("Bench Dip", Strength, Triceps, "Bodyweight tricep dip"),

    // Legs
    seed("Squat", Strength, Legs, "Barbell back squat"),
    seed("Front Squat", Strength, Legs, "Barbell front squat"),
    seed("Leg Press", Strength, Legs, "Machine leg press"),
    seed("Lunges", Strength, Legs, "Walking or stationary lunges"),
    seed("Romanian Deadlift", Strength, Legs, "Hamstring focused deadlift"),
    seed("Leg Extension", Strength, Legs, "Quad isolation"),
    seed("Leg Curl", Strength, Legs, "Hamstring isolation"),
    seed("Calf Raise", Strength, Legs, "Standing calf raise"),
    seed("Bulgarian Split Squat", Strength, Legs, "Single leg squat"),
    seed("Hack Squat", Strength, Legs, "Machine squat variation"),
    seed("Hip Thrust", Strength, Legs, "Glute focused movement"),
    seed("Goblet Squat", Strength, Legs, "Dumbbell front squat"),
    seed("Step-Up", Strength, Legs, "Single leg step exercise"),
    seed("Seated Calf Raise", Strength, Legs, "Seated calf exercise"),
    seed("Good Morning", Strength, Legs, "Hamstring and back exercise"),

    // Core
    seed("Plank", Strength, Core, "Isometric core hold"),
    seed("Crunch", Strength, Core, "Basic ab exercise"),
    seed("Russian Twist", Strength, Core, "Rotational core work"),
    seed("Leg Raise", Strength, Core, "Hanging or lying leg raise"),
    seed("Ab Rollout", Strength, Core, "Wheel rollout exercise"),
    seed("Cable Crunch", Strength, Core, "Weighted cable crunch"),
    seed("Dead Bug", Strength, Core, "Core stability exercise"),
    seed("Mountain Climber", Strength, Core, "Dynamic core exercise"),
    seed("Bicycle Crunch", Strength, Core, "Rotational crunch"),
    seed("Side Plank", Strength, Core, "Oblique isometric hold"),

    // Full Body
    seed("Clean and Jerk", Strength, FullBody, "Olympic lift"),
    seed("Snatch", Strength, FullBody, "Olympic lift"),
    seed("Thruster", Strength, FullBody, "Squat to press"),
    seed("Burpee", Strength, FullBody, "Full body conditioning"),
    seed("Kettlebell Swing", Strength, FullBody, "Hip hinge explosive movement"),
    seed("Turkish Get-Up", Strength, FullBody, "Complex full body movement"),
    seed("Farmer's Walk", Strength, FullBody, "Loaded carry"),
    seed("Battle Ropes", Strength, FullBody, "Conditioning exercise"),
    seed("Box Jump", Strength, FullBody, "Plyometric exercise"),
    seed("Man Maker", Strength, FullBody, "Complex dumbbell movement"),

    // Cardio
    seed("Running", Cardio, MuscleGroup::Cardio, "Outdoor or treadmill running"),
    seed("Cycling", Cardio, MuscleGroup::Cardio, "Bike or stationary cycling"),
    seed("Rowing", Cardio, MuscleGroup::Cardio, "Rowing machine"),
    seed("Swimming", Cardio, MuscleGroup::Cardio, "Pool swimming"),
    seed("Jump Rope", Cardio, MuscleGroup::Cardio, "Skipping rope cardio"),
    seed("Stair Climber", Cardio, MuscleGroup::Cardio, "Stair machine"),
    seed("Elliptical", Cardio, MuscleGroup::Cardio, "Elliptical machine"),
    seed("Walking", Cardio, MuscleGroup::Cardio, "Brisk walking"),
    seed("HIIT", Cardio, MuscleGroup::Cardio, "High intensity interval training"),
    seed("Sprints", Cardio, MuscleGroup::Cardio, "Sprint intervals"),
    seed("Boxing", Cardio, MuscleGroup::Cardio, "Boxing workout"),
    seed("Kickboxing", Cardio, MuscleGroup::Cardio, "Kickboxing cardio"),
    seed("Dance Cardio", Cardio, MuscleGroup::Cardio, "Dance based cardio"),
    seed("Assault Bike", Cardio, MuscleGroup::Cardio, "Air bike workout"),
    seed("Ski Erg", Cardio, MuscleGroup::Cardio, "Ski ergometer"),
];

/// Insert the built-in catalog if the exercise table is empty
///
/// Returns the number of exercises inserted, zero when the catalog already
/// had rows.
///
/// # Errors
///
/// Returns an error if counting or inserting fails
pub async fn seed_exercises(manager: &ExerciseManager) -> AppResult<u64> {
    let existing = manager.count().await?;
    if existing > 0 {
        debug!(existing, "Exercise catalog already populated, skipping seed");
        return Ok(0);
    }

    let exercises: Vec<Exercise> = INITIAL_EXERCISES
        .iter()
        .copied()
        .map(SeedExercise::to_exercise)
        .collect();
    let inserted = manager.create_many(&exercises).await?;

    AppLogger::log_database_operation("seed", "exercises", inserted);
    info!("Seeded {inserted} exercises");
    Ok(inserted)
}
