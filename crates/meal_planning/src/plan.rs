use std::sync::Arc;

use recipe::Recipe;
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Meal types a day can be divided into. CLI tokens parse
/// case-insensitively (`"LUNCH"`, `"lunch"`).
#[derive(
    EnumString, Display, AsRefStr, VariantArray, Clone, Copy, Debug, PartialEq, Eq, Hash,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

/// One (day, meal type) position in a plan, holding a shared reference to
/// the chosen catalog recipe. The slot never copies or owns the recipe.
#[derive(Debug, Clone)]
pub struct MealSlot {
    day_index: u32,
    meal_type: MealType,
    recipe: Arc<Recipe>,
}

impl MealSlot {
    pub fn new(day_index: u32, meal_type: MealType, recipe: Arc<Recipe>) -> Self {
        Self {
            day_index,
            meal_type,
            recipe,
        }
    }

    /// Zero-based day index.
    pub fn day_index(&self) -> u32 {
        self.day_index
    }

    pub fn meal_type(&self) -> MealType {
        self.meal_type
    }

    pub fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    /// The shared catalog handle, for callers that keep slots alive past the
    /// catalog.
    pub fn recipe_handle(&self) -> &Arc<Recipe> {
        &self.recipe
    }
}

/// Immutable plan: slots in day-major order, then per-day meal-type order
/// exactly as requested.
#[derive(Debug, Clone, Default)]
pub struct MealPlan {
    slots: Vec<MealSlot>,
}

impl MealPlan {
    pub fn new(slots: Vec<MealSlot>) -> Self {
        Self { slots }
    }

    pub fn slots(&self) -> &[MealSlot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
