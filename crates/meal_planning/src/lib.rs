pub mod error;
pub mod grocery;
pub mod plan;
pub mod service;
pub mod strategy;

pub use error::PlanningError;
pub use grocery::GroceryService;
pub use plan::{MealPlan, MealSlot, MealType};
pub use service::MealPlannerService;
pub use strategy::{
    BudgetAwareStrategy, MealPlanStrategy, PantryFirstStrategy, RandomStrategy,
};
