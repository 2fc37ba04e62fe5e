use shopping::{subtract_stock, Pantry, ShoppingList, ShoppingListBuilder};

use crate::plan::MealPlan;

/// Turns a plan into a shopping list: aggregates every slot's recipe and,
/// on request, subtracts pantry stock so only the still-to-buy rows remain.
/// Inputs are never mutated.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroceryService;

impl GroceryService {
    pub fn new() -> Self {
        Self
    }

    /// Total amounts needed for the plan, ignoring any stock.
    pub fn build_from(&self, plan: &MealPlan) -> ShoppingList {
        let mut builder = ShoppingListBuilder::new();
        for slot in plan.slots() {
            builder.add_recipe(slot.recipe());
        }
        builder.build()
    }

    /// Need minus pantry stock; fully covered items are omitted.
    pub fn build_from_with_pantry(&self, plan: &MealPlan, pantry: &Pantry) -> ShoppingList {
        subtract_stock(&self.build_from(plan), pantry)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use recipe::{Ingredient, Recipe, Unit};

    use crate::plan::{MealSlot, MealType};

    use super::*;

    fn plan_of(recipes: &[Arc<Recipe>]) -> MealPlan {
        MealPlan::new(
            recipes
                .iter()
                .enumerate()
                .map(|(day, recipe)| {
                    MealSlot::new(day as u32, MealType::Lunch, Arc::clone(recipe))
                })
                .collect(),
        )
    }

    #[test]
    fn aggregates_all_slots() {
        let eggs = Arc::new(
            Recipe::new("Eggs", vec![Ingredient::new("egg", 2.0, Unit::Pcs).unwrap()]).unwrap(),
        );
        let plan = plan_of(&[Arc::clone(&eggs), eggs]);

        let list = GroceryService::new().build_from(&plan);
        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].total_amount, 4.0);
    }

    #[test]
    fn pantry_subtraction_drops_covered_rows() {
        let eggs = Arc::new(
            Recipe::new("Eggs", vec![Ingredient::new("egg", 2.0, Unit::Pcs).unwrap()]).unwrap(),
        );
        let plan = plan_of(&[eggs]);

        let mut pantry = Pantry::new();
        pantry.add("egg", 6.0, Unit::Pcs).unwrap();

        let list = GroceryService::new().build_from_with_pantry(&plan, &pantry);
        assert!(list.is_empty());
    }
}
