use std::sync::Arc;

use recipe::{Recipe, RecipeCatalog};
use shopping::ShoppingList;

use crate::error::PlanningError;
use crate::grocery::GroceryService;
use crate::plan::{MealPlan, MealType};
use crate::strategy::MealPlanStrategy;

/// Facade wiring a catalog and one strategy.
///
/// `plan` delegates slot filling to the strategy; `build_shopping_list`
/// plans and aggregates in one call. Pantry subtraction is not applied at
/// this level, use [`GroceryService::build_from_with_pantry`] for that.
pub struct MealPlannerService {
    catalog: Vec<Arc<Recipe>>,
    strategy: Box<dyn MealPlanStrategy>,
    grocery: GroceryService,
}

impl MealPlannerService {
    pub fn new(
        catalog: &RecipeCatalog,
        strategy: Box<dyn MealPlanStrategy>,
    ) -> Result<Self, PlanningError> {
        if catalog.is_empty() {
            return Err(PlanningError::EmptyCatalog);
        }
        Ok(Self {
            catalog: catalog.recipes().to_vec(),
            strategy,
            grocery: GroceryService::new(),
        })
    }

    pub fn plan(&self, days: u32, meal_types: &[MealType]) -> Result<MealPlan, PlanningError> {
        self.strategy.generate_plan(days, meal_types, &self.catalog)
    }

    pub fn build_shopping_list(
        &self,
        days: u32,
        meal_types: &[MealType],
    ) -> Result<ShoppingList, PlanningError> {
        Ok(self.grocery.build_from(&self.plan(days, meal_types)?))
    }
}
