use std::collections::HashMap;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use recipe::{IngredientKey, Recipe};
use shopping::{Pantry, PriceBook};

use crate::error::PlanningError;
use crate::plan::{MealPlan, MealSlot, MealType};

/// Strategy producing a [`MealPlan`] with exactly `days × meal_types.len()`
/// slots in day-major order.
///
/// Implementations treat the catalog as read-only and keep all per-call
/// working state local to `generate_plan`, so one strategy value can serve
/// any number of calls, including from multiple threads.
pub trait MealPlanStrategy: Send + Sync {
    fn generate_plan(
        &self,
        days: u32,
        meal_types: &[MealType],
        catalog: &[Arc<Recipe>],
    ) -> Result<MealPlan, PlanningError>;
}

/// Precondition checks shared by every strategy.
fn check_preconditions(
    days: u32,
    meal_types: &[MealType],
    catalog: &[Arc<Recipe>],
) -> Result<(), PlanningError> {
    if catalog.is_empty() {
        return Err(PlanningError::EmptyCatalog);
    }
    if days == 0 {
        return Err(PlanningError::ZeroDays);
    }
    if meal_types.is_empty() {
        return Err(PlanningError::EmptyMealTypes);
    }
    Ok(())
}

/// Fills every slot with a uniformly random catalog pick; recipe reuse
/// across slots is expected.
///
/// A fresh seeded RNG is built per call, so the same seed and catalog order
/// always reproduce the same plan, no matter how often the strategy is used.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    seed: u64,
}

impl RandomStrategy {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MealPlanStrategy for RandomStrategy {
    fn generate_plan(
        &self,
        days: u32,
        meal_types: &[MealType],
        catalog: &[Arc<Recipe>],
    ) -> Result<MealPlan, PlanningError> {
        check_preconditions(days, meal_types, catalog)?;

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut slots = Vec::with_capacity(days as usize * meal_types.len());
        for day in 0..days {
            for &meal_type in meal_types {
                let pick = rng.random_range(0..catalog.len());
                slots.push(MealSlot::new(day, meal_type, Arc::clone(&catalog[pick])));
            }
        }
        Ok(MealPlan::new(slots))
    }
}

/// Greedy stock-minimizing strategy.
///
/// For each slot it scores every catalog recipe by its total missing amount
/// against a working copy of the pantry (sum of per-ingredient shortfalls in
/// canonical units), picks the strictly smallest score with ties going to
/// the earliest catalog entry, then consumes the chosen recipe's ingredients
/// from the working stock so later slots see the depleted amounts.
///
/// The caller's pantry is read once, at construction; every `generate_plan`
/// call plans against its own private copy of that snapshot.
#[derive(Debug, Clone)]
pub struct PantryFirstStrategy {
    initial_stock: HashMap<IngredientKey, f64>,
}

impl PantryFirstStrategy {
    pub fn new(pantry: &Pantry) -> Self {
        Self {
            initial_stock: pantry.snapshot().into_iter().collect(),
        }
    }
}

impl MealPlanStrategy for PantryFirstStrategy {
    fn generate_plan(
        &self,
        days: u32,
        meal_types: &[MealType],
        catalog: &[Arc<Recipe>],
    ) -> Result<MealPlan, PlanningError> {
        check_preconditions(days, meal_types, catalog)?;

        let mut stock = self.initial_stock.clone();
        let mut slots = Vec::with_capacity(days as usize * meal_types.len());
        for day in 0..days {
            for &meal_type in meal_types {
                let best = choose_best_recipe(catalog, &stock);
                consume_from_stock(best, &mut stock);
                slots.push(MealSlot::new(day, meal_type, Arc::clone(best)));
            }
        }
        Ok(MealPlan::new(slots))
    }
}

/// Recipe with the smallest missing score; the first minimal catalog entry
/// wins ties.
fn choose_best_recipe<'a>(
    catalog: &'a [Arc<Recipe>],
    stock: &HashMap<IngredientKey, f64>,
) -> &'a Arc<Recipe> {
    let mut best = &catalog[0];
    let mut best_missing = total_missing_for(best, stock);
    for candidate in &catalog[1..] {
        let missing = total_missing_for(candidate, stock);
        if missing < best_missing {
            best_missing = missing;
            best = candidate;
        }
    }
    best
}

/// Canonical amount that would still have to be bought to cook `recipe`
/// given the current working stock.
fn total_missing_for(recipe: &Recipe, stock: &HashMap<IngredientKey, f64>) -> f64 {
    recipe
        .ingredients()
        .iter()
        .map(|ing| {
            let have = stock.get(&ing.canonical_key()).copied().unwrap_or(0.0);
            (ing.canonical_amount() - have).max(0.0)
        })
        .sum()
}

/// Subtracts the recipe's canonical amounts from the working stock. Stock
/// never goes negative; identities that fall to zero or below are removed.
fn consume_from_stock(recipe: &Recipe, stock: &mut HashMap<IngredientKey, f64>) {
    for ing in recipe.ingredients() {
        let key = ing.canonical_key();
        let need = ing.canonical_amount();
        match stock.get_mut(&key) {
            Some(have) if *have > need => *have -= need,
            Some(_) => {
                stock.remove(&key);
            }
            None => {}
        }
    }
}

/// Slack for budget comparisons, absorbing float error in the running spend.
const BUDGET_EPSILON: f64 = 1e-9;

/// Cost substituted for recipes whose priced total is exactly zero, keeping
/// unpriced recipes comparable and selectable.
const NOMINAL_COST: f64 = 1.0;

/// Greedy budget strategy.
///
/// Recipes are priced with the book, stable-sorted most expensive first, and
/// each slot takes the costliest recipe still fitting the remaining budget.
/// The stable sort means equally priced recipes keep catalog order, so the
/// scan prefers the earliest catalog entry among equals. When nothing fits,
/// the cheapest recipe (first minimal in catalog order) is used anyway: a
/// plan is always produced, the budget is advisory rather than a
/// feasibility bound.
#[derive(Debug, Clone)]
pub struct BudgetAwareStrategy {
    price_book: PriceBook,
    budget: f64,
}

impl BudgetAwareStrategy {
    pub fn new(price_book: PriceBook, budget: f64) -> Result<Self, PlanningError> {
        if !budget.is_finite() || budget <= 0.0 {
            return Err(PlanningError::InvalidBudget(budget));
        }
        Ok(Self { price_book, budget })
    }
}

impl MealPlanStrategy for BudgetAwareStrategy {
    fn generate_plan(
        &self,
        days: u32,
        meal_types: &[MealType],
        catalog: &[Arc<Recipe>],
    ) -> Result<MealPlan, PlanningError> {
        check_preconditions(days, meal_types, catalog)?;

        let costed: Vec<(Arc<Recipe>, f64)> = catalog
            .iter()
            .map(|recipe| {
                let cost = self.price_book.estimate_cost(recipe);
                let cost = if cost == 0.0 { NOMINAL_COST } else { cost };
                (Arc::clone(recipe), cost)
            })
            .collect();

        let cheapest = costed
            .iter()
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .expect("catalog checked non-empty");

        let mut by_cost_desc: Vec<&(Arc<Recipe>, f64)> = costed.iter().collect();
        by_cost_desc.sort_by(|a, b| b.1.total_cmp(&a.1));

        let mut spent = 0.0;
        let mut slots = Vec::with_capacity(days as usize * meal_types.len());
        for day in 0..days {
            for &meal_type in meal_types {
                let remaining = self.budget - spent;
                let fitting = if remaining > 0.0 {
                    by_cost_desc
                        .iter()
                        .find(|(_, cost)| *cost <= remaining + BUDGET_EPSILON)
                } else {
                    None
                };
                let (recipe, cost) = fitting.copied().unwrap_or(cheapest);
                spent += cost;
                slots.push(MealSlot::new(day, meal_type, Arc::clone(recipe)));
            }
        }
        Ok(MealPlan::new(slots))
    }
}
