// ABOUTME: Domain models for exercises, logged workouts, templates, and derived statistics
// ABOUTME: Wire shapes are permissive; SetMetrics gives the category-tagged view used by aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::limits::DEFAULT_TEMPLATE_SETS;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Exercise Catalog
// ============================================================================

/// Category of an exercise, which decides how its sets are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseCategory {
    /// Load-bearing work measured in weight and reps
    #[default]
    Strength,
    /// Endurance work measured in duration and distance
    Cardio,
}

impl ExerciseCategory {
    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Cardio => "cardio",
        }
    }

    /// Parse from a string, `None` if unrecognized
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "strength" => Some(Self::Strength),
            "cardio" => Some(Self::Cardio),
            _ => None,
        }
    }
}

/// Primary muscle group an exercise targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    /// Pectorals
    Chest,
    /// Lats, rhomboids, erectors
    Back,
    /// Deltoids and traps
    Shoulders,
    /// Biceps
    Biceps,
    /// Triceps
    Triceps,
    /// Quads, hamstrings, glutes, calves
    Legs,
    /// Abdominals and obliques
    Core,
    /// Compound whole-body movements
    FullBody,
    /// Conditioning
    Cardio,
}

impl MuscleGroup {
    /// Every muscle group, in catalog order
    pub const ALL: [Self; 9] = [
        Self::Chest,
        Self::Back,
        Self::Shoulders,
        Self::Biceps,
        Self::Triceps,
        Self::Legs,
        Self::Core,
        Self::FullBody,
        Self::Cardio,
    ];

    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Chest => "chest",
            Self::Back => "back",
            Self::Shoulders => "shoulders",
            Self::Biceps => "biceps",
            Self::Triceps => "triceps",
            Self::Legs => "legs",
            Self::Core => "core",
            Self::FullBody => "full_body",
            Self::Cardio => "cardio",
        }
    }

    /// Parse from a string, `None` if unrecognized
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let lowered = s.to_lowercase();
        Self::ALL.into_iter().find(|group| group.as_str() == lowered)
    }
}

/// An exercise in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Strength or cardio
    pub category: ExerciseCategory,
    /// Primary muscle group
    pub muscle_group: MuscleGroup,
    /// Short description
    #[serde(default)]
    pub description: Option<String>,
    /// How to perform it
    #[serde(default)]
    pub instructions: Option<String>,
}

/// Request body for adding an exercise to the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateExerciseRequest {
    /// Display name
    pub name: String,
    /// Strength or cardio
    pub category: ExerciseCategory,
    /// Primary muscle group
    pub muscle_group: MuscleGroup,
    /// Short description
    #[serde(default)]
    pub description: Option<String>,
    /// How to perform it
    #[serde(default)]
    pub instructions: Option<String>,
}

impl Exercise {
    /// Build a catalog entry with a fresh identifier
    #[must_use]
    pub fn from_request(request: CreateExerciseRequest) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: request.name,
            category: request.category,
            muscle_group: request.muscle_group,
            description: request.description,
            instructions: request.instructions,
        }
    }
}

/// Filter options for listing exercises
#[derive(Debug, Clone, Default)]
pub struct ExerciseFilter {
    /// Filter by category
    pub category: Option<ExerciseCategory>,
    /// Filter by muscle group
    pub muscle_group: Option<MuscleGroup>,
    /// Case-insensitive substring match on name
    pub search: Option<String>,
}

// ============================================================================
// Workout Records
// ============================================================================

/// One logged set, as supplied by the client
///
/// Strength sets are expected to carry `reps` and `weight`; cardio sets carry
/// `duration_minutes` and optionally `distance_km`. Nothing enforces this, and
/// absent numeric fields count as zero during aggregation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SetRecord {
    /// Caller-supplied ordinal, not validated for uniqueness or order
    pub set_number: u32,
    /// Repetitions
    #[serde(default)]
    pub reps: Option<u32>,
    /// Load in kilograms
    #[serde(default)]
    pub weight: Option<f64>,
    /// Duration in minutes
    #[serde(default)]
    pub duration_minutes: Option<f64>,
    /// Distance in kilometers
    #[serde(default)]
    pub distance_km: Option<f64>,
    /// Free text
    #[serde(default)]
    pub notes: Option<String>,
}

impl SetRecord {
    /// Weight in kg, zero when absent
    #[must_use]
    pub fn weight_kg(&self) -> f64 {
        self.weight.unwrap_or(0.0)
    }

    /// Rep count, zero when absent
    #[must_use]
    pub fn rep_count(&self) -> u32 {
        self.reps.unwrap_or(0)
    }

    /// Duration in minutes, zero when absent
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration_minutes.unwrap_or(0.0)
    }

    /// Distance in km, zero when absent
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.distance_km.unwrap_or(0.0)
    }

    /// Interpret this set according to the category of the entry it belongs to
    #[must_use]
    pub fn metrics(&self, category: ExerciseCategory) -> SetMetrics {
        match category {
            ExerciseCategory::Strength => SetMetrics::Strength {
                weight_kg: self.weight_kg(),
                reps: self.rep_count(),
            },
            ExerciseCategory::Cardio => SetMetrics::Cardio {
                duration_minutes: self.duration(),
                distance_km: self.distance(),
            },
        }
    }
}

/// Category-tagged view of a set: only the fields that matter for its category
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SetMetrics {
    /// Weight and reps of a strength set
    Strength {
        /// Load in kilograms
        weight_kg: f64,
        /// Repetitions
        reps: u32,
    },
    /// Duration and distance of a cardio set
    Cardio {
        /// Duration in minutes
        duration_minutes: f64,
        /// Distance in kilometers
        distance_km: f64,
    },
}

/// One exercise performed within a workout, with its sets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutEntry {
    /// Exercise identifier captured at log time
    pub exercise_id: String,
    /// Exercise name captured at log time
    pub exercise_name: String,
    /// Exercise category captured at log time; legacy entries without it are strength
    #[serde(default)]
    pub category: ExerciseCategory,
    /// Sets in the order performed
    #[serde(default)]
    pub sets: Vec<SetRecord>,
}

impl WorkoutEntry {
    /// Category-tagged view of every set in this entry
    pub fn set_metrics(&self) -> impl Iterator<Item = SetMetrics> + '_ {
        self.sets.iter().map(|set| set.metrics(self.category))
    }
}

/// A logged workout session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// Unique identifier
    pub id: String,
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    /// Exercises performed, in order
    pub entries: Vec<WorkoutEntry>,
    /// Free text
    #[serde(default)]
    pub notes: Option<String>,
    /// Set once at insertion
    pub created_at: DateTime<Utc>,
}

/// Request body for logging a workout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWorkoutRequest {
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    /// Exercises performed, in order
    pub entries: Vec<WorkoutEntry>,
    /// Free text
    #[serde(default)]
    pub notes: Option<String>,
}

impl WorkoutRecord {
    /// Build a record with a fresh identifier and creation time
    #[must_use]
    pub fn from_request(request: CreateWorkoutRequest, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date: request.date,
            entries: request.entries,
            notes: request.notes,
            created_at,
        }
    }

    /// The day this workout counts toward: the first ten characters of `date`
    #[must_use]
    pub fn day_key(&self) -> &str {
        match self.date.char_indices().nth(10) {
            Some((idx, _)) => &self.date[..idx],
            None => &self.date,
        }
    }
}

/// Filter options for listing workouts
#[derive(Debug, Clone, Default)]
pub struct WorkoutFilter {
    /// Inclusive lower bound on `date`
    pub start_date: Option<String>,
    /// Inclusive upper bound on `date`
    pub end_date: Option<String>,
    /// Maximum number of results
    pub limit: Option<u32>,
}

// ============================================================================
// Templates
// ============================================================================

const fn default_template_sets() -> u32 {
    DEFAULT_TEMPLATE_SETS
}

/// An exercise slot in a template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateExercise {
    /// Exercise identifier
    pub exercise_id: String,
    /// Exercise name
    pub exercise_name: String,
    /// Strength or cardio
    pub category: ExerciseCategory,
    /// Suggested number of sets
    #[serde(default = "default_template_sets")]
    pub default_sets: u32,
}

/// A reusable workout plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutTemplate {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Short description
    #[serde(default)]
    pub description: Option<String>,
    /// Planned exercises
    pub exercises: Vec<TemplateExercise>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Request body for creating a template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTemplateRequest {
    /// Display name
    pub name: String,
    /// Short description
    #[serde(default)]
    pub description: Option<String>,
    /// Planned exercises
    pub exercises: Vec<TemplateExercise>,
}

/// Partial update for a template; `None` fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTemplateRequest {
    /// New name
    #[serde(default)]
    pub name: Option<String>,
    /// New description
    #[serde(default)]
    pub description: Option<String>,
    /// Replacement exercise list
    #[serde(default)]
    pub exercises: Option<Vec<TemplateExercise>>,
}

impl UpdateTemplateRequest {
    /// True when no field would change
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.exercises.is_none()
    }
}

impl WorkoutTemplate {
    /// Build a template with a fresh identifier and creation time
    #[must_use]
    pub fn from_request(request: CreateTemplateRequest, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: request.name,
            description: request.description,
            exercises: request.exercises,
            created_at,
        }
    }

    /// Apply the provided fields of a partial update
    pub fn apply_update(&mut self, update: UpdateTemplateRequest) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(exercises) = update.exercises {
            self.exercises = exercises;
        }
    }
}

// ============================================================================
// Derived Views
// ============================================================================

/// Dashboard summary derived from the full workout history
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Number of logged workouts
    pub total_workouts: u64,
    /// Number of exercise entries across all workouts
    pub total_exercises_logged: u64,
    /// Number of sets across all workouts
    pub total_sets: u64,
    /// Σ weight × reps over qualifying strength sets, kg
    pub total_volume: f64,
    /// Estimated calories burned
    pub total_calories: f64,
    /// Consecutive days ending today (or yesterday) with a workout
    pub current_streak: u32,
    /// Longest run of consecutive workout days
    pub longest_streak: u32,
    /// Distinct workout days since Monday
    pub workouts_this_week: u32,
    /// Distinct workout days since the first of the month
    pub workouts_this_month: u32,
}

/// One day of activity for a single exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressPoint {
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    /// Heaviest weight lifted that day
    pub max_weight: f64,
    /// Σ weight × reps
    pub total_volume: f64,
    /// Σ reps
    pub total_reps: u64,
    /// Σ duration in minutes
    pub duration: f64,
    /// Σ distance in km
    pub distance: f64,
    /// Not estimated per exercise; always serialized as `null`
    #[serde(default)]
    pub calories: Option<f64>,
}

impl ProgressPoint {
    /// Empty bucket for `date`
    #[must_use]
    pub const fn empty(date: String) -> Self {
        Self {
            date,
            max_weight: 0.0,
            total_volume: 0.0,
            total_reps: 0,
            duration: 0.0,
            distance: 0.0,
            calories: None,
        }
    }
}
