use crate::models::Article;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /articles`. Absent fields decode as empty and fail validation;
/// any `id` or `created_at` sent by the client is ignored.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateArticleRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "author is required"))]
    pub author: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateArticleResponse {
    pub status: String,
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ArticleResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: String,
}

impl From<Article> for ArticleResponse {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: article.title,
            content: article.content,
            author: article.author,
            created_at: article.created_at.to_rfc3339(),
        }
    }
}
