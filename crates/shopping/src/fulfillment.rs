use crate::list::{ShoppingList, ShoppingListItem};
use crate::pantry::Pantry;

/// Tolerance absorbing floating-point drift from repeated additions;
/// remainders at or below this count as fully covered.
const COVERAGE_EPSILON: f64 = 1e-7;

/// Subtracts pantry stock from aggregated need, keeping only the items that
/// still must be bought.
///
/// Fully covered identities are dropped entirely; there is no "zero
/// remaining" row. A unit-family mismatch between need and stock simply
/// fails to offset, since the identities differ. The pantry is not mutated.
pub fn subtract_stock(need: &ShoppingList, pantry: &Pantry) -> ShoppingList {
    let remaining = need
        .items()
        .iter()
        .filter_map(|item| {
            let have = pantry.amount_of(&item.name, item.unit);
            let buy = item.total_amount - have;
            (buy > COVERAGE_EPSILON).then(|| ShoppingListItem {
                name: item.name.clone(),
                unit: item.unit,
                total_amount: buy,
            })
        })
        .collect();
    ShoppingList::new(remaining)
}
