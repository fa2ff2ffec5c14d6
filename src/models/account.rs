use mongodb::bson::{oid::ObjectId, DateTime as BsonDateTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Opaque workspace state. Stored and returned verbatim, never interpreted.
pub type WorkspaceState = serde_json::Map<String, serde_json::Value>;

/// Account document - one per username, username is the primary key
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Account {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub _id: Option<ObjectId>,
    pub username: String,
    pub password: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub workspaces: HashMap<String, WorkspaceState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<BsonDateTime>,
}

impl Account {
    /// New account as persisted by signup: empty workspace map
    pub fn new(username: &str, password: &str, name: &str, email: &str) -> Self {
        Self {
            _id: None,
            username: username.to_string(),
            password: password.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            workspaces: HashMap::new(),
            created_at: Some(BsonDateTime::now()),
        }
    }
}
