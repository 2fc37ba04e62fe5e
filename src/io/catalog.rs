use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use recipe::{Ingredient, Recipe, RecipeCatalog};

use super::{parse_unit, IoError};

/// JSON shape for catalog files:
///
/// ```json
/// {
///   "recipes": [
///     {
///       "name": "Fried Rice",
///       "ingredients": [
///         { "name": "rice", "amount": 150, "unit": "G" },
///         { "name": "egg", "amount": 1, "unit": "PCS" }
///       ]
///     }
///   ]
/// }
/// ```
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub recipes: Vec<RecipeEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecipeEntry {
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<IngredientEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct IngredientEntry {
    pub name: String,
    pub amount: f64,
    /// Unit token (PCS|G|KG|ML|L), case-insensitive.
    pub unit: String,
}

/// Loads a catalog from a JSON file. Unit tokens parse case-insensitively;
/// name/amount validation happens in the domain constructors.
pub fn load_catalog(path: &Path) -> Result<RecipeCatalog, IoError> {
    let file: CatalogFile = serde_json::from_str(&fs::read_to_string(path)?)?;

    let mut recipes = Vec::with_capacity(file.recipes.len());
    for entry in file.recipes {
        let mut ingredients = Vec::with_capacity(entry.ingredients.len());
        for ing in entry.ingredients {
            let unit = parse_unit(&ing.unit)?;
            ingredients.push(Ingredient::new(&ing.name, ing.amount, unit)?);
        }
        recipes.push(Recipe::new(&entry.name, ingredients)?);
    }
    Ok(RecipeCatalog::new(recipes))
}

/// Saves a catalog to a JSON file, pretty-printed.
pub fn save_catalog(catalog: &RecipeCatalog, path: &Path) -> Result<(), IoError> {
    let file = CatalogFile {
        recipes: catalog
            .recipes()
            .iter()
            .map(|recipe| RecipeEntry {
                name: recipe.name().to_string(),
                ingredients: recipe
                    .ingredients()
                    .iter()
                    .map(|ing| IngredientEntry {
                        name: ing.name().to_string(),
                        amount: ing.amount(),
                        unit: ing.unit().to_string(),
                    })
                    .collect(),
            })
            .collect(),
    };
    fs::write(path, serde_json::to_string_pretty(&file)?)?;
    Ok(())
}
