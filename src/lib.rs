pub mod config;
pub mod data;
pub mod features;
pub mod handlers;
pub mod routes;
pub mod utils;

pub use config::AppConfig;
pub use data::models::{DictionaryError, Entry, Table};
pub use data::repositories::DefinitionsStore;
pub use features::dictionary::Dictionary;
