pub mod aggregation;
pub mod error;
pub mod fulfillment;
pub mod list;
pub mod pantry;
pub mod price_book;

pub use aggregation::ShoppingListBuilder;
pub use error::ShoppingError;
pub use fulfillment::subtract_stock;
pub use list::{ShoppingList, ShoppingListItem};
pub use pantry::Pantry;
pub use price_book::PriceBook;
