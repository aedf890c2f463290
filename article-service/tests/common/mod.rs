#![allow(dead_code)]

use article_service::config::{ArticleConfig, MongoConfig};
use article_service::models::Article;
use article_service::services::ArticleStore;
use article_service::startup::{build_router, AppState, Application};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use mongodb::bson::oid::ObjectId;
use service_core::config::Config as CoreConfig;
use service_core::error::AppError;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

pub fn test_config(database: &str) -> ArticleConfig {
    ArticleConfig {
        common: CoreConfig { port: 0 },
        mongodb: MongoConfig {
            uri: std::env::var("TEST_MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database: database.to_string(),
            collection: "articles".to_string(),
        },
    }
}

/// Keeps articles in insertion order and assigns ids like MongoDB would.
#[derive(Default)]
pub struct InMemoryStore {
    articles: Mutex<Vec<Article>>,
}

impl InMemoryStore {
    pub fn len(&self) -> usize {
        self.articles.lock().unwrap().len()
    }
}

#[async_trait]
impl ArticleStore for InMemoryStore {
    async fn insert(&self, article: &Article) -> Result<ObjectId, AppError> {
        let id = ObjectId::new();
        let mut stored = article.clone();
        stored.id = Some(id);
        self.articles.lock().unwrap().push(stored);
        Ok(id)
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Article>, AppError> {
        Ok(self
            .articles
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == Some(id))
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Article>, AppError> {
        Ok(self.articles.lock().unwrap().clone())
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Every call fails the way an unreachable database would.
pub struct FailingStore;

#[async_trait]
impl ArticleStore for FailingStore {
    async fn insert(&self, _article: &Article) -> Result<ObjectId, AppError> {
        Err(AppError::database(
            "failed to create article",
            anyhow::anyhow!("connection refused"),
        ))
    }

    async fn find_by_id(&self, _id: ObjectId) -> Result<Option<Article>, AppError> {
        Err(AppError::database(
            "failed to fetch article",
            anyhow::anyhow!("connection refused"),
        ))
    }

    async fn list(&self) -> Result<Vec<Article>, AppError> {
        Err(AppError::database(
            "failed to list articles",
            anyhow::anyhow!("connection refused"),
        ))
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Err(AppError::database(
            "database unreachable",
            anyhow::anyhow!("connection refused"),
        ))
    }
}

pub fn router_with(store: Arc<dyn ArticleStore>) -> Router {
    build_router(AppState { store })
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to execute request");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Response was not JSON")
    };
    (status, body)
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Full application bound to a random port against a live MongoDB.
pub struct TestApp {
    pub address: String,
    pub db_name: String,
    pub client: mongodb::Client,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let db_name = format!("article_test_{}", uuid::Uuid::new_v4().simple());
        let app = Application::build(test_config(&db_name))
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let client = app.db().client().clone();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let http = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if http.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            db_name,
            client,
        }
    }

    pub async fn cleanup(&self) {
        let _ = self.client.database(&self.db_name).drop(None).await;
    }
}
