pub mod cart;
pub mod config;
pub mod error;
pub mod order;
pub mod session;
pub mod types;

pub use config::GrocerConfig;
pub use error::{GrocerError, GrocerResult};
