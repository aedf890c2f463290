pub mod database;

pub use database::{ArticleDb, ArticleStore};
