use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "IntelliOS Workspace API",
        version = "1.0.0",
        description = "API for the IntelliOS workspace database system.\n\n**Features:**\n- Account signup and login\n- Per-user workspace create/update, list and delete\n\nWorkspace state is opaque JSON: stored and returned verbatim, never interpreted."
    ),
    paths(
        crate::api::health::root,

        // Auth endpoints
        crate::api::auth::login,
        crate::api::auth::signup,

        // Workspace endpoints
        crate::api::workspaces::upsert_workspace,
        crate::api::workspaces::list_workspaces,
        crate::api::workspaces::delete_workspace,
    ),
    components(
        schemas(
            crate::api::health::RootResponse,
            crate::services::auth_service::LoginRequest,
            crate::services::auth_service::LoginResponse,
            crate::services::auth_service::SignupRequest,
            crate::services::auth_service::SignupResponse,
            crate::services::workspace_service::UpsertWorkspaceRequest,
            crate::services::workspace_service::WorkspaceResponse,
            crate::services::workspace_service::ListWorkspacesRequest,
            crate::services::workspace_service::ListWorkspacesResponse,
            crate::services::workspace_service::DeleteWorkspaceRequest,
        )
    ),
    tags(
        (name = "Root", description = "Health check endpoint for monitoring service status."),
        (name = "Authentication", description = "Account signup and login. Domain errors (unknown username, wrong password, username taken) are reported in the response body with HTTP 200."),
        (name = "Workspace Management", description = "Per-user workspace CRUD. Missing accounts or workspaces return HTTP 404."),
    )
)]
pub struct ApiDoc;
