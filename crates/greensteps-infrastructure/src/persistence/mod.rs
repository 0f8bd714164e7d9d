pub mod stores;

mod database;

pub use database::Database;
