use std::hash::{Hash, Hasher};

use crate::error::RecipeError;
use crate::unit::Unit;

/// An immutable ingredient entry used by recipes and shopping lists.
///
/// Two ingredients share an identity when their normalized name and unit are
/// equal; the amount is deliberately excluded so occurrences can be summed
/// later. `PartialEq` and `Hash` follow the identity rule.
///
/// Validation at construction: non-blank name, finite amount >= 0. The name
/// is normalized (trimmed + lowercased) once, here.
#[derive(Debug, Clone)]
pub struct Ingredient {
    name: String,
    amount: f64,
    unit: Unit,
}

impl Ingredient {
    pub fn new(name: &str, amount: f64, unit: Unit) -> Result<Self, RecipeError> {
        if name.trim().is_empty() {
            return Err(RecipeError::BlankIngredientName);
        }
        if !amount.is_finite() || amount < 0.0 {
            return Err(RecipeError::InvalidAmount(amount));
        }
        Ok(Self {
            name: normalize_name(name),
            amount,
            unit,
        })
    }

    /// Ingredient name, normalized to lowercase and trimmed.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Amount in `unit`.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Copy with a different amount; the identity is unchanged.
    pub fn with_amount(&self, amount: f64) -> Result<Self, RecipeError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(RecipeError::InvalidAmount(amount));
        }
        Ok(Self {
            name: self.name.clone(),
            amount,
            unit: self.unit,
        })
    }

    /// Identity key as declared: (normalized name, unit).
    pub fn key(&self) -> IngredientKey {
        IngredientKey {
            name: self.name.clone(),
            unit: self.unit,
        }
    }

    /// Identity key with the unit canonicalized, for quantity maps.
    pub fn canonical_key(&self) -> IngredientKey {
        IngredientKey {
            name: self.name.clone(),
            unit: self.unit.canonical(),
        }
    }

    /// Amount converted to the canonical unit of the ingredient's family.
    pub fn canonical_amount(&self) -> f64 {
        self.unit.to_canonical(self.amount)
    }
}

/// Identity is (name, unit); amount is intentionally excluded.
impl PartialEq for Ingredient {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.unit == other.unit
    }
}

impl Eq for Ingredient {}

impl Hash for Ingredient {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.unit.hash(state);
    }
}

/// Composite identity key for quantity maps: (normalized name, unit).
///
/// A real struct key instead of a concatenated `"name|unit"` string, so
/// equality and hashing are structural and delimiter collisions cannot occur.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IngredientKey {
    pub name: String,
    pub unit: Unit,
}

impl IngredientKey {
    /// Key from a raw name (normalized here) and a unit taken as-is.
    pub fn new(name: &str, unit: Unit) -> Self {
        Self {
            name: normalize_name(name),
            unit,
        }
    }

    /// Key from a raw name with the unit replaced by its family's canonical
    /// unit. This is the merge key used by aggregation and the pantry.
    pub fn canonical(name: &str, unit: Unit) -> Self {
        Self::new(name, unit.canonical())
    }
}

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_name_on_construction() {
        let ing = Ingredient::new("  Chicken Breast ", 150.0, Unit::G).unwrap();
        assert_eq!(ing.name(), "chicken breast");
    }

    #[test]
    fn identity_excludes_amount() {
        let a = Ingredient::new("Egg", 2.0, Unit::Pcs).unwrap();
        let b = Ingredient::new(" egg ", 5.0, Unit::Pcs).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn identity_distinguishes_units() {
        let grams = Ingredient::new("sugar", 100.0, Unit::G).unwrap();
        let millis = Ingredient::new("sugar", 100.0, Unit::Ml).unwrap();
        assert_ne!(grams, millis);
    }

    #[test]
    fn rejects_blank_name() {
        assert_eq!(
            Ingredient::new("   ", 1.0, Unit::G),
            Err(RecipeError::BlankIngredientName)
        );
    }

    #[test]
    fn rejects_negative_and_non_finite_amounts() {
        assert!(matches!(
            Ingredient::new("milk", -1.0, Unit::Ml),
            Err(RecipeError::InvalidAmount(_))
        ));
        assert!(matches!(
            Ingredient::new("milk", f64::NAN, Unit::Ml),
            Err(RecipeError::InvalidAmount(_))
        ));
        assert!(matches!(
            Ingredient::new("milk", f64::INFINITY, Unit::Ml),
            Err(RecipeError::InvalidAmount(_))
        ));
    }

    #[test]
    fn zero_amount_is_allowed() {
        assert!(Ingredient::new("salt", 0.0, Unit::G).is_ok());
    }

    #[test]
    fn with_amount_keeps_identity() {
        let ing = Ingredient::new("Milk", 50.0, Unit::Ml).unwrap();
        let more = ing.with_amount(200.0).unwrap();
        assert_eq!(ing, more);
        assert_eq!(more.amount(), 200.0);
        assert!(ing.with_amount(-3.0).is_err());
    }

    #[test]
    fn canonical_key_folds_unit_family() {
        let ing = Ingredient::new("Flour", 1.5, Unit::Kg).unwrap();
        assert_eq!(ing.canonical_key(), IngredientKey::new("flour", Unit::G));
        assert_eq!(ing.canonical_amount(), 1500.0);
    }

    #[test]
    fn keys_work_in_hash_maps() {
        use std::collections::HashMap;

        let mut totals: HashMap<IngredientKey, f64> = HashMap::new();
        *totals
            .entry(IngredientKey::canonical("Milk", Unit::L))
            .or_insert(0.0) += 1000.0;
        *totals
            .entry(IngredientKey::canonical("milk", Unit::Ml))
            .or_insert(0.0) += 200.0;
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[&IngredientKey::new("milk", Unit::Ml)], 1200.0);
    }
}
