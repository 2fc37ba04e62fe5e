//! Aggregation and fulfillment against the documented scenarios.

use recipe::{Ingredient, Recipe, Unit};
use shopping::{subtract_stock, Pantry, ShoppingListBuilder};

fn ing(name: &str, amount: f64, unit: Unit) -> Ingredient {
    Ingredient::new(name, amount, unit).unwrap()
}

#[test]
fn two_milk_recipes_aggregate_then_offset_against_stock() {
    let porridge = Recipe::new("Porridge", vec![ing("milk", 100.0, Unit::Ml)]).unwrap();
    let pancakes = Recipe::new("Pancakes", vec![ing("Milk", 200.0, Unit::Ml)]).unwrap();

    let mut builder = ShoppingListBuilder::new();
    builder.add_recipe(&porridge).add_recipe(&pancakes);
    let need = builder.build();

    assert_eq!(need.len(), 1);
    assert_eq!(need.items()[0].name, "milk");
    assert_eq!(need.items()[0].unit, Unit::Ml);
    assert_eq!(need.items()[0].total_amount, 300.0);

    let mut pantry = Pantry::new();
    pantry.add("milk", 120.0, Unit::Ml).unwrap();

    let to_buy = subtract_stock(&need, &pantry);
    assert_eq!(to_buy.len(), 1);
    assert!((to_buy.items()[0].total_amount - 180.0).abs() < 1e-9);
}

#[test]
fn overstocked_item_disappears_from_the_result() {
    let porridge = Recipe::new("Porridge", vec![ing("milk", 300.0, Unit::Ml)]).unwrap();

    let mut builder = ShoppingListBuilder::new();
    builder.add_recipe(&porridge);

    let mut pantry = Pantry::new();
    pantry.add("milk", 500.0, Unit::Ml).unwrap();

    assert!(subtract_stock(&builder.build(), &pantry).is_empty());
}

#[test]
fn cross_family_stock_does_not_offset() {
    let cake = Recipe::new("Cake", vec![ing("sugar", 100.0, Unit::G)]).unwrap();

    let mut builder = ShoppingListBuilder::new();
    builder.add_recipe(&cake);

    let mut pantry = Pantry::new();
    pantry
        .add("sugar", 100.0, Unit::Ml)
        .unwrap()
        .add("sugar", 40.0, Unit::G)
        .unwrap();

    let to_buy = subtract_stock(&builder.build(), &pantry);
    assert_eq!(to_buy.len(), 1);
    assert_eq!(to_buy.items()[0].name, "sugar");
    assert_eq!(to_buy.items()[0].unit, Unit::G);
    assert!((to_buy.items()[0].total_amount - 60.0).abs() < 1e-9);
}

#[test]
fn recipe_permutations_produce_identical_totals() {
    let recipes = [
        Recipe::new("A", vec![ing("rice", 100.0, Unit::G), ing("egg", 1.0, Unit::Pcs)]).unwrap(),
        Recipe::new("B", vec![ing("milk", 0.2, Unit::L), ing("rice", 1.0, Unit::Kg)]).unwrap(),
        Recipe::new("C", vec![ing("egg", 2.0, Unit::Pcs), ing("milk", 300.0, Unit::Ml)]).unwrap(),
    ];

    let orders: [[usize; 3]; 3] = [[0, 1, 2], [2, 0, 1], [1, 2, 0]];
    let mut all_totals = Vec::new();
    for order in orders {
        let mut builder = ShoppingListBuilder::new();
        for i in order {
            builder.add_recipe(&recipes[i]);
        }
        let mut rows: Vec<(String, String, f64)> = builder
            .build()
            .items()
            .iter()
            .map(|i| (i.name.clone(), i.unit.to_string(), i.total_amount))
            .collect();
        rows.sort_by(|a, b| (a.0.as_str(), a.1.as_str()).cmp(&(b.0.as_str(), b.1.as_str())));
        all_totals.push(rows);
    }

    assert_eq!(all_totals[0], all_totals[1]);
    assert_eq!(all_totals[1], all_totals[2]);
}
