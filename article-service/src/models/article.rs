use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// An article as stored in the `articles` collection.
///
/// `id` stays `None` until the database assigns one on insert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Article {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub content: String,
    pub author: String,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl Article {
    pub fn new(title: String, content: String, author: String) -> Self {
        Self {
            id: None,
            title,
            content,
            author,
            created_at: Utc::now(),
        }
    }
}
