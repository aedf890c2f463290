pub mod articles;

pub use articles::{ArticleResponse, CreateArticleRequest, CreateArticleResponse};
