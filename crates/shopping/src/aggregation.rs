use indexmap::IndexMap;

use recipe::Recipe;

use crate::list::{ShoppingList, ShoppingListItem};

/// Aggregates ingredients from recipes into a shopping list, merging by the
/// canonical identity (normalized name, canonical unit).
///
/// Amounts are converted to the canonical unit of their family before
/// summation, so 1.5 KG and 300 G of the same name land in a single G row.
/// Mass and volume never merge; the same name can legitimately produce one
/// row per family. First-seen identity order is preserved in the output.
#[derive(Debug, Default)]
pub struct ShoppingListBuilder {
    totals: IndexMap<recipe::IngredientKey, f64>,
}

impl ShoppingListBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges every ingredient of `recipe` into the running totals.
    pub fn add_recipe(&mut self, recipe: &Recipe) -> &mut Self {
        for ing in recipe.ingredients() {
            *self.totals.entry(ing.canonical_key()).or_insert(0.0) += ing.canonical_amount();
        }
        self
    }

    /// Merges every recipe in order; equivalent to repeated [`add_recipe`].
    ///
    /// [`add_recipe`]: Self::add_recipe
    pub fn add_recipes<'a, I>(&mut self, recipes: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a Recipe>,
    {
        for recipe in recipes {
            self.add_recipe(recipe);
        }
        self
    }

    /// Emits the current totals in first-seen identity order. The builder
    /// remains usable; later additions keep merging into the same totals.
    pub fn build(&self) -> ShoppingList {
        let items = self
            .totals
            .iter()
            .map(|(key, total)| ShoppingListItem {
                name: key.name.clone(),
                unit: key.unit,
                total_amount: *total,
            })
            .collect();
        ShoppingList::new(items)
    }
}
