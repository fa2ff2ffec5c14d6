use crate::services::account_store::AccountStore;
use crate::services::workspace_service;
use crate::services::workspace_service::{
    DeleteWorkspaceRequest, ListWorkspacesRequest, ListWorkspacesResponse,
    UpsertWorkspaceRequest, WorkspaceError, WorkspaceResponse,
};
use actix_web::{web, HttpResponse};

/// Maps a workspace service error onto the HTTP contract: missing account or
/// workspace is a 404 with a detail body, everything else a 500 with the
/// underlying error text behind a route-specific prefix.
fn error_response(e: WorkspaceError, store_error_prefix: &str) -> HttpResponse {
    match e {
        WorkspaceError::UserNotFound | WorkspaceError::WorkspaceNotFound(_) => {
            HttpResponse::NotFound().json(serde_json::json!({
                "detail": e.to_string()
            }))
        }
        WorkspaceError::Store(msg) => HttpResponse::InternalServerError().json(
            serde_json::json!({
                "detail": format!("{}: {}", store_error_prefix, msg)
            }),
        ),
    }
}

#[utoipa::path(
    post,
    path = "/api/workspace",
    tag = "Workspace Management",
    request_body = UpsertWorkspaceRequest,
    responses(
        (status = 200, description = "Workspace created or updated", body = WorkspaceResponse),
        (status = 404, description = "User not found"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn upsert_workspace(
    store: web::Data<dyn AccountStore>,
    request: web::Json<UpsertWorkspaceRequest>,
) -> HttpResponse {
    log::info!(
        "📝 POST /api/workspace - user: {}, workspace: {}",
        request.username,
        request.workspace_name
    );

    match workspace_service::upsert_workspace(store.get_ref(), &request).await {
        Ok(response) => {
            log::info!("✅ Workspace upserted: {}", request.workspace_name);
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log::warn!("❌ Workspace upsert failed: {}", e);
            error_response(e, "Error creating workspace")
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/workspaces",
    tag = "Workspace Management",
    request_body = ListWorkspacesRequest,
    responses(
        (status = 200, description = "All workspaces for the user", body = ListWorkspacesResponse),
        (status = 404, description = "User not found"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn list_workspaces(
    store: web::Data<dyn AccountStore>,
    request: web::Json<ListWorkspacesRequest>,
) -> HttpResponse {
    log::info!("📋 POST /api/workspaces - user: {}", request.username);

    match workspace_service::list_workspaces(store.get_ref(), &request).await {
        Ok(response) => {
            log::info!("✅ Listed {} workspaces", response.workspaces.len());
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log::warn!("❌ Workspace listing failed: {}", e);
            error_response(e, "Error getting workspaces")
        }
    }
}

#[utoipa::path(
    delete,
    path = "/api/workspace",
    tag = "Workspace Management",
    request_body = DeleteWorkspaceRequest,
    responses(
        (status = 200, description = "Workspace deleted", body = WorkspaceResponse),
        (status = 404, description = "User or workspace not found"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn delete_workspace(
    store: web::Data<dyn AccountStore>,
    request: web::Json<DeleteWorkspaceRequest>,
) -> HttpResponse {
    log::info!(
        "🗑️  DELETE /api/workspace - user: {}, workspace: {}",
        request.username,
        request.workspace_name
    );

    match workspace_service::delete_workspace(store.get_ref(), &request).await {
        Ok(response) => {
            log::info!("✅ Workspace deleted: {}", request.workspace_name);
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log::warn!("❌ Workspace delete failed: {}", e);
            error_response(e, "Error deleting workspace")
        }
    }
}
