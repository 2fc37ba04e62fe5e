use std::collections::HashMap;

use recipe::{Ingredient, IngredientKey, Recipe, Unit};

use crate::error::ShoppingError;

/// Price book mapping (normalized name, unit) to a per-unit price.
///
/// Prices are per single `Unit`: `("chicken", G) -> 0.02` means 0.02
/// currency units per gram. An identity absent from the book has no price,
/// which is not the same as a price of zero. Keys use the declared unit
/// as-is; a price for G does not answer a KG lookup.
#[derive(Debug, Clone, Default)]
pub struct PriceBook {
    unit_prices: HashMap<IngredientKey, f64>,
}

impl PriceBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the per-unit price for a (name, unit) pair.
    pub fn add(
        &mut self,
        name: &str,
        unit: Unit,
        price_per_unit: f64,
    ) -> Result<&mut Self, ShoppingError> {
        if name.trim().is_empty() {
            return Err(ShoppingError::BlankName);
        }
        if !price_per_unit.is_finite() || price_per_unit < 0.0 {
            return Err(ShoppingError::InvalidPrice(price_per_unit));
        }
        self.unit_prices
            .insert(IngredientKey::new(name, unit), price_per_unit);
        Ok(self)
    }

    /// Price per single unit, or `None` when this book has no entry.
    pub fn unit_price(&self, name: &str, unit: Unit) -> Option<f64> {
        self.unit_prices
            .get(&IngredientKey::new(name, unit))
            .copied()
    }

    /// Price lookup for an ingredient's own (name, unit) identity.
    pub fn price_of(&self, ingredient: &Ingredient) -> Option<f64> {
        self.unit_price(ingredient.name(), ingredient.unit())
    }

    /// Estimated recipe cost: Σ amount × unit price. Ingredients unknown to
    /// the book contribute nothing rather than failing.
    pub fn estimate_cost(&self, recipe: &Recipe) -> f64 {
        recipe
            .ingredients()
            .iter()
            .filter_map(|ing| self.price_of(ing).map(|price| price * ing.amount()))
            .sum()
    }

    /// Sample prices matching [`recipe::RecipeCatalog::samples`]. Numbers are
    /// illustrative, not realistic.
    pub fn samples() -> Self {
        fn build() -> Result<PriceBook, ShoppingError> {
            let mut book = PriceBook::new();
            book.add("egg", Unit::Pcs, 0.30)?
                .add("milk", Unit::Ml, 0.002)?
                .add("pasta", Unit::G, 0.012)?
                .add("chicken", Unit::G, 0.020)?
                .add("lettuce", Unit::G, 0.010)?
                .add("olive oil", Unit::Ml, 0.025)?
                .add("rice", Unit::G, 0.005)?
                .add("oil", Unit::Ml, 0.008)?;
            Ok(book)
        }
        build().expect("sample prices are valid")
    }
}
