use indexmap::IndexMap;

use recipe::{IngredientKey, Unit};

use crate::error::ShoppingError;

/// In-memory stock ledger keyed by canonical identity (normalized name,
/// canonical unit).
///
/// Amounts are stored in canonical units and never go negative; `add` is the
/// only mutation path. Insertion order is kept so snapshots and saved files
/// are stable.
#[derive(Debug, Clone, Default)]
pub struct Pantry {
    stock: IndexMap<IngredientKey, f64>,
}

impl Pantry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds stock for an ingredient identity, merging by sum. The unit and
    /// amount are canonicalized first, so `add("milk", 1.0, L)` and
    /// `add("Milk", 200.0, Ml)` land in the same ML entry.
    pub fn add(&mut self, name: &str, amount: f64, unit: Unit) -> Result<&mut Self, ShoppingError> {
        if name.trim().is_empty() {
            return Err(ShoppingError::BlankName);
        }
        if !amount.is_finite() || amount < 0.0 {
            return Err(ShoppingError::InvalidAmount(amount));
        }
        *self
            .stock
            .entry(IngredientKey::canonical(name, unit))
            .or_insert(0.0) += unit.to_canonical(amount);
        Ok(self)
    }

    /// Current stock for an identity, with the query unit canonicalized;
    /// 0.0 when absent.
    pub fn amount_of(&self, name: &str, unit: Unit) -> f64 {
        self.stock
            .get(&IngredientKey::canonical(name, unit))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    /// Ordered copy of the internal ledger, for strategies, tests, and
    /// persistence. Callers cannot mutate the pantry through it.
    pub fn snapshot(&self) -> IndexMap<IngredientKey, f64> {
        self.stock.clone()
    }
}
