use std::sync::Arc;

use crate::error::RecipeError;
use crate::ingredient::Ingredient;
use crate::unit::Unit;

/// A recipe: a display name plus an ordered list of ingredients.
///
/// Immutable after construction. Duplicate ingredient identities within one
/// recipe are allowed; aggregation merges them downstream.
#[derive(Debug, Clone)]
pub struct Recipe {
    name: String,
    ingredients: Vec<Ingredient>,
}

impl Recipe {
    pub fn new(name: &str, ingredients: Vec<Ingredient>) -> Result<Self, RecipeError> {
        if name.trim().is_empty() {
            return Err(RecipeError::BlankRecipeName);
        }
        Ok(Self {
            name: name.trim().to_string(),
            ingredients,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }
}

/// Ordered catalog of recipes, handed out behind `Arc` so plan slots
/// reference catalog entries instead of copying them.
#[derive(Debug, Clone, Default)]
pub struct RecipeCatalog {
    recipes: Vec<Arc<Recipe>>,
}

impl RecipeCatalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes: recipes.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn recipes(&self) -> &[Arc<Recipe>] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Copy of this catalog with one extra recipe appended.
    pub fn plus(&self, extra: Recipe) -> Self {
        let mut recipes = self.recipes.clone();
        recipes.push(Arc::new(extra));
        Self { recipes }
    }

    /// Built-in sample catalog used by the CLI when no file is given.
    pub fn samples() -> Self {
        fn ing(name: &str, amount: f64, unit: Unit) -> Ingredient {
            Ingredient::new(name, amount, unit).expect("sample ingredient is valid")
        }
        fn recipe(name: &str, ingredients: Vec<Ingredient>) -> Recipe {
            Recipe::new(name, ingredients).expect("sample recipe is valid")
        }

        Self::new(vec![
            recipe(
                "Eggs",
                vec![ing("Egg", 2.0, Unit::Pcs), ing("Milk", 50.0, Unit::Ml)],
            ),
            recipe(
                "Pasta",
                vec![ing("Pasta", 100.0, Unit::G), ing("Milk", 100.0, Unit::Ml)],
            ),
            recipe(
                "Chicken Salad",
                vec![
                    ing("Chicken", 150.0, Unit::G),
                    ing("Lettuce", 100.0, Unit::G),
                    ing("Olive Oil", 10.0, Unit::Ml),
                ],
            ),
            recipe(
                "Fried Rice",
                vec![
                    ing("Rice", 150.0, Unit::G),
                    ing("Egg", 1.0, Unit::Pcs),
                    ing("Oil", 10.0, Unit::Ml),
                ],
            ),
        ])
    }
}
