use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use shopping::Pantry;

use super::{parse_unit, IoError};

/// JSON shape for pantry files:
///
/// ```json
/// {
///   "stock": [
///     { "name": "milk", "amount": 200.0, "unit": "ML" },
///     { "name": "egg", "amount": 2.0, "unit": "PCS" }
///   ]
/// }
/// ```
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PantryFile {
    #[serde(default)]
    pub stock: Vec<StockEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StockEntry {
    pub name: String,
    pub amount: f64,
    /// Unit token (PCS|G|KG|ML|L), case-insensitive.
    pub unit: String,
}

/// Loads a pantry from a JSON file; entries merge by canonical identity like
/// repeated `Pantry::add` calls.
pub fn load_pantry(path: &Path) -> Result<Pantry, IoError> {
    let file: PantryFile = serde_json::from_str(&fs::read_to_string(path)?)?;

    let mut pantry = Pantry::new();
    for entry in file.stock {
        let unit = parse_unit(&entry.unit)?;
        pantry.add(&entry.name, entry.amount, unit)?;
    }
    Ok(pantry)
}

/// Saves a pantry snapshot to a JSON file, pretty-printed. Amounts are
/// written in canonical units, as stored.
pub fn save_pantry(pantry: &Pantry, path: &Path) -> Result<(), IoError> {
    let file = PantryFile {
        stock: pantry
            .snapshot()
            .into_iter()
            .map(|(key, amount)| StockEntry {
                name: key.name,
                amount,
                unit: key.unit.to_string(),
            })
            .collect(),
    };
    fs::write(path, serde_json::to_string_pretty(&file)?)?;
    Ok(())
}
