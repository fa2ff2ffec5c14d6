// ==================== WORKSPACE MANAGEMENT ====================
// Per-user workspace CRUD. A workspace is a named, opaque JSON document
// hanging off the owning account; the map is read-modified-written as a
// whole (no field-level merge at the store layer).

use crate::models::WorkspaceState;
use crate::services::account_store::AccountStore;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// ==================== REQUEST/RESPONSE MODELS ====================

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct UpsertWorkspaceRequest {
    pub username: String,
    pub workspace_name: String,
    #[schema(value_type = Object)]
    pub state: WorkspaceState,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct WorkspaceResponse {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct ListWorkspacesRequest {
    pub username: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ListWorkspacesResponse {
    pub status: String,
    #[schema(value_type = Object)]
    pub workspaces: HashMap<String, WorkspaceState>,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct DeleteWorkspaceRequest {
    pub username: String,
    pub workspace_name: String,
}

#[derive(Debug)]
pub enum WorkspaceError {
    /// Account document missing for the given username
    UserNotFound,
    /// Account exists but has no workspace under this name
    WorkspaceNotFound(String),
    /// Store failure, surfaced as HTTP 500
    Store(String),
}

impl fmt::Display for WorkspaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkspaceError::UserNotFound => write!(f, "User not found"),
            WorkspaceError::WorkspaceNotFound(name) => {
                write!(f, "Workspace '{}' not found", name)
            }
            WorkspaceError::Store(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for WorkspaceError {}

impl From<crate::services::account_store::StoreError> for WorkspaceError {
    fn from(e: crate::services::account_store::StoreError) -> Self {
        use crate::services::account_store::StoreError;
        match e {
            // Account removed between fetch and write still reads as a 404
            StoreError::NotFound => WorkspaceError::UserNotFound,
            other => WorkspaceError::Store(other.to_string()),
        }
    }
}

// ==================== SERVICE FUNCTIONS ====================

/// POST /api/workspace - Create or overwrite a workspace.
///
/// Fetch-then-replace is not atomic as a unit: a concurrent writer between
/// the fetch and the replace loses its update. Accepted limitation.
pub async fn upsert_workspace(
    store: &dyn AccountStore,
    request: &UpsertWorkspaceRequest,
) -> Result<WorkspaceResponse, WorkspaceError> {
    log::info!(
        "📝 Upserting workspace '{}' for user {}",
        request.workspace_name,
        request.username
    );

    let account = store
        .fetch(&request.username)
        .await?
        .ok_or(WorkspaceError::UserNotFound)?;

    let mut workspaces = account.workspaces;
    workspaces.insert(request.workspace_name.clone(), request.state.clone());

    store
        .replace_workspaces(&request.username, &workspaces)
        .await?;

    Ok(WorkspaceResponse {
        status: "success".to_string(),
        message: format!(
            "Workspace '{}' created/updated successfully",
            request.workspace_name
        ),
    })
}

/// POST /api/workspaces - Full workspace map for a user
pub async fn list_workspaces(
    store: &dyn AccountStore,
    request: &ListWorkspacesRequest,
) -> Result<ListWorkspacesResponse, WorkspaceError> {
    log::info!("📋 Listing workspaces for user {}", request.username);

    let account = store
        .fetch(&request.username)
        .await?
        .ok_or(WorkspaceError::UserNotFound)?;

    Ok(ListWorkspacesResponse {
        status: "success".to_string(),
        workspaces: account.workspaces,
    })
}

/// DELETE /api/workspace - Remove one workspace by name
pub async fn delete_workspace(
    store: &dyn AccountStore,
    request: &DeleteWorkspaceRequest,
) -> Result<WorkspaceResponse, WorkspaceError> {
    log::info!(
        "🗑️  Deleting workspace '{}' for user {}",
        request.workspace_name,
        request.username
    );

    let account = store
        .fetch(&request.username)
        .await?
        .ok_or(WorkspaceError::UserNotFound)?;

    let mut workspaces = account.workspaces;
    if workspaces.remove(&request.workspace_name).is_none() {
        return Err(WorkspaceError::WorkspaceNotFound(
            request.workspace_name.clone(),
        ));
    }

    store
        .replace_workspaces(&request.username, &workspaces)
        .await?;

    Ok(WorkspaceResponse {
        status: "success".to_string(),
        message: format!(
            "Workspace '{}' deleted successfully",
            request.workspace_name
        ),
    })
}
