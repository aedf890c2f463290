pub mod articles;
pub mod health;

pub use articles::{create_article, get_article, list_articles};
pub use health::{health_check, readiness_check};
