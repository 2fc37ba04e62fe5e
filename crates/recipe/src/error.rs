use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecipeError {
    #[error("ingredient name must not be blank")]
    BlankIngredientName,

    #[error("recipe name must not be blank")]
    BlankRecipeName,

    #[error("amount must be finite and >= 0, got {0}")]
    InvalidAmount(f64),
}
