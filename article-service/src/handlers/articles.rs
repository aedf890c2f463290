use crate::dtos::{ArticleResponse, CreateArticleRequest, CreateArticleResponse};
use crate::models::Article;
use crate::startup::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use mongodb::bson::oid::ObjectId;
use service_core::error::AppError;
use validator::Validate;

#[tracing::instrument(skip(state, payload))]
pub async fn create_article(
    State(state): State<AppState>,
    payload: Result<Json<CreateArticleRequest>, JsonRejection>,
) -> Result<Json<CreateArticleResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(reason = %rejection.body_text(), "Rejected article body");
        AppError::BadRequest(anyhow::anyhow!("invalid request body"))
    })?;
    request.validate()?;

    let article = Article::new(request.title, request.content, request.author);
    let id = state.store.insert(&article).await?;

    tracing::info!(article_id = %id, author = %article.author, "Article created");

    Ok(Json(CreateArticleResponse {
        status: "success".to_string(),
        id: id.to_hex(),
    }))
}

#[tracing::instrument(skip(state))]
pub async fn get_article(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
) -> Result<Json<ArticleResponse>, AppError> {
    let id = ObjectId::parse_str(&article_id)
        .map_err(|_| AppError::BadRequest(anyhow::anyhow!("invalid article ID")))?;

    let article = state
        .store
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("article not found")))?;

    tracing::info!(article_id = %id, "Article fetched");

    Ok(Json(ArticleResponse::from(article)))
}

#[tracing::instrument(skip(state))]
pub async fn list_articles(
    State(state): State<AppState>,
) -> Result<Json<Vec<ArticleResponse>>, AppError> {
    let articles = state.store.list().await?;

    tracing::info!(count = articles.len(), "Listed articles");

    Ok(Json(
        articles.into_iter().map(ArticleResponse::from).collect(),
    ))
}
