use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use recipe::Unit;
use shopping::{ShoppingList, ShoppingListItem};

/// Renders the grouped, aligned text view:
///
/// ```text
/// == Shopping List ==
///
/// [PCS]
///   egg                       3.0
///
/// [ML]
///   milk                    180.0
/// ```
///
/// Items are sorted by name (then unit token) and grouped per unit; groups
/// appear in the order of their first sorted item.
pub fn render_text(list: &ShoppingList) -> String {
    let mut out = String::from("== Shopping List ==\n");
    if list.is_empty() {
        out.push_str("(nothing to buy)\n");
        return out;
    }

    let mut sorted: Vec<&ShoppingListItem> = list.items().iter().collect();
    sorted.sort_by(|a, b| {
        a.name
            .cmp(&b.name)
            .then_with(|| a.unit.as_ref().cmp(b.unit.as_ref()))
    });

    let mut groups: Vec<(Unit, Vec<&ShoppingListItem>)> = Vec::new();
    for item in sorted {
        match groups.iter_mut().find(|(unit, _)| *unit == item.unit) {
            Some((_, items)) => items.push(item),
            None => groups.push((item.unit, vec![item])),
        }
    }

    for (unit, items) in groups {
        out.push('\n');
        let _ = writeln!(out, "[{unit}]");
        for item in items {
            let _ = writeln!(out, "  {:<18} {:>8.1}", item.name, item.total_amount);
        }
    }
    out
}

/// Writes the minimal CSV export, one row per item in list order:
///
/// ```text
/// name,amount,unit
/// milk,180,ML
/// ```
pub fn write_csv(list: &ShoppingList, path: &Path) -> std::io::Result<()> {
    let mut out = String::from("name,amount,unit\n");
    for item in list.items() {
        let _ = writeln!(out, "{},{},{}", item.name, item.total_amount, item.unit);
    }
    fs::write(path, out)
}
