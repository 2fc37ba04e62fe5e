use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShoppingError {
    #[error("name must not be blank")]
    BlankName,

    #[error("amount must be finite and >= 0, got {0}")]
    InvalidAmount(f64),

    #[error("price must be finite and >= 0, got {0}")]
    InvalidPrice(f64),
}
