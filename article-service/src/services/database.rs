use crate::models::Article;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Client as MongoClient, Collection, Database,
};
use service_core::error::AppError;

/// Persistence operations the HTTP handlers depend on.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Inserts the article and returns the identifier the database assigned.
    async fn insert(&self, article: &Article) -> Result<ObjectId, AppError>;
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Article>, AppError>;
    /// Every stored article in natural order. Fails as a whole if any document does not decode.
    async fn list(&self) -> Result<Vec<Article>, AppError>;
    async fn health_check(&self) -> Result<(), AppError>;
}

#[derive(Clone)]
pub struct ArticleDb {
    client: MongoClient,
    db: Database,
    collection: String,
}

impl ArticleDb {
    pub async fn connect(uri: &str, database: &str, collection: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(
            database = %database,
            collection = %collection,
            "Successfully connected to MongoDB database"
        );
        Ok(Self {
            client,
            db,
            collection: collection.to_string(),
        })
    }

    pub fn articles(&self) -> Collection<Article> {
        self.db.collection(&self.collection)
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }
}

#[async_trait]
impl ArticleStore for ArticleDb {
    async fn insert(&self, article: &Article) -> Result<ObjectId, AppError> {
        let result = self
            .articles()
            .insert_one(article, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert article: {}", e);
                AppError::database("failed to create article", e)
            })?;

        result.inserted_id.as_object_id().ok_or_else(|| {
            tracing::error!(inserted_id = %result.inserted_id, "Inserted id is not an ObjectId");
            AppError::database(
                "failed to create article",
                anyhow::anyhow!("unexpected inserted id: {}", result.inserted_id),
            )
        })
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Article>, AppError> {
        self.articles()
            .find_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| {
                tracing::error!(article_id = %id, "Failed to find article: {}", e);
                AppError::database("failed to fetch article", e)
            })
    }

    async fn list(&self) -> Result<Vec<Article>, AppError> {
        let cursor = self.articles().find(doc! {}, None).await.map_err(|e| {
            tracing::error!("Failed to list articles: {}", e);
            AppError::database("failed to list articles", e)
        })?;

        cursor.try_collect().await.map_err(|e| {
            tracing::error!("Failed to decode articles: {}", e);
            AppError::database("failed to list articles", e)
        })
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }
}
