use crate::models::{Account, WorkspaceState};
use crate::services::account_store::{AccountStore, StoreError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// Request/Response structures
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct LoginResponse {
    pub status: String,
    pub message: String,
    #[schema(value_type = Option<Object>)]
    pub workspaces: Option<HashMap<String, WorkspaceState>>,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct SignupResponse {
    pub status: String,
    pub message: String,
}

impl LoginResponse {
    fn error(message: &str) -> Self {
        Self {
            status: "error".to_string(),
            message: message.to_string(),
            workspaces: None,
        }
    }
}

/// Credential check, isolated so it can be swapped for a salted-hash
/// comparison without touching routing logic. Plaintext equality today:
/// a known defect inherited from the stored data, not a design feature.
pub fn password_matches(candidate: &str, stored: &str) -> bool {
    candidate == stored
}

/// Authenticate a user and return their workspaces.
///
/// Domain failures (unknown username, wrong password) come back as Ok with
/// status "error" - the login contract reports them in the body, not the
/// HTTP status. Err is reserved for store failures.
pub async fn login(
    store: &dyn AccountStore,
    request: &LoginRequest,
) -> Result<LoginResponse, String> {
    let account = store
        .fetch(&request.username)
        .await
        .map_err(|e| e.to_string())?;

    let account = match account {
        Some(account) => account,
        None => return Ok(LoginResponse::error("Username not found")),
    };

    if !password_matches(&request.password, &account.password) {
        return Ok(LoginResponse::error("Incorrect Password"));
    }

    Ok(LoginResponse {
        status: "success".to_string(),
        message: "Successful".to_string(),
        workspaces: Some(account.workspaces),
    })
}

/// Create a new account with an empty workspace map.
pub async fn signup(
    store: &dyn AccountStore,
    request: &SignupRequest,
) -> Result<SignupResponse, String> {
    let account = Account::new(
        &request.username,
        &request.password,
        &request.name,
        &request.email,
    );

    match store.create(account).await {
        Ok(()) => Ok(SignupResponse {
            status: "success".to_string(),
            message: "Account created successfully".to_string(),
        }),
        Err(StoreError::AlreadyExists) => Ok(SignupResponse {
            status: "error".to_string(),
            message: "Username already exists".to_string(),
        }),
        Err(e) => Err(e.to_string()),
    }
}
