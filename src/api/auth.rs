use crate::services::account_store::AccountStore;
use crate::services::auth_service;
use crate::services::auth_service::{LoginRequest, LoginResponse, SignupRequest, SignupResponse};
use actix_web::{web, HttpResponse};

#[utoipa::path(
    post,
    path = "/api/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login processed (check status field for domain errors)", body = LoginResponse),
        (status = 500, description = "Store failure")
    )
)]
pub async fn login(
    store: web::Data<dyn AccountStore>,
    request: web::Json<LoginRequest>,
) -> HttpResponse {
    log::info!("🔐 POST /api/login - username: {}", request.username);

    match auth_service::login(store.get_ref(), &request).await {
        Ok(response) => {
            if response.status == "success" {
                log::info!("✅ Login successful: {}", request.username);
            } else {
                log::warn!("❌ Login rejected: {} - {}", request.username, response.message);
            }
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log::error!("❌ Login error: {} - {}", request.username, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "detail": format!("Login failed: {}", e)
            }))
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/signup",
    tag = "Authentication",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "Signup processed (check status field for domain errors)", body = SignupResponse),
        (status = 500, description = "Store failure")
    )
)]
pub async fn signup(
    store: web::Data<dyn AccountStore>,
    request: web::Json<SignupRequest>,
) -> HttpResponse {
    log::info!("📝 POST /api/signup - username: {}", request.username);

    match auth_service::signup(store.get_ref(), &request).await {
        Ok(response) => {
            if response.status == "success" {
                log::info!("✅ Account created: {}", request.username);
            } else {
                log::warn!("❌ Signup rejected: {} - {}", request.username, response.message);
            }
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log::error!("❌ Signup error: {} - {}", request.username, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "detail": format!("Signup failed: {}", e)
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Account;
    use crate::services::account_store::memory::MemoryAccountStore;
    use actix_web::{test, App};
    use std::sync::Arc;

    macro_rules! test_app {
        ($store:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::from($store))
                    .route("/api/login", web::post().to(login))
                    .route("/api/signup", web::post().to(signup)),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_login_unknown_username_is_http_200_with_error_body() {
        let store: Arc<dyn AccountStore> = Arc::new(MemoryAccountStore::new());
        let app = test_app!(store);

        let req = test::TestRequest::post()
            .uri("/api/login")
            .set_json(serde_json::json!({"username": "ghost", "password": "pw"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "Username not found");
        assert!(body["workspaces"].is_null());
    }

    #[actix_web::test]
    async fn test_signup_then_login_round_trip() {
        let store: Arc<dyn AccountStore> = Arc::new(MemoryAccountStore::new());
        let app = test_app!(store);

        let req = test::TestRequest::post()
            .uri("/api/signup")
            .set_json(serde_json::json!({
                "username": "alice",
                "password": "pw1",
                "name": "Alice",
                "email": "a@x.com"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "success");
        assert_eq!(body["message"], "Account created successfully");

        let req = test::TestRequest::post()
            .uri("/api/login")
            .set_json(serde_json::json!({"username": "alice", "password": "pw1"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "success");
        assert_eq!(body["workspaces"], serde_json::json!({}));
    }

    #[actix_web::test]
    async fn test_duplicate_signup_is_http_200_with_error_body() {
        let store: Arc<dyn AccountStore> = Arc::new(
            MemoryAccountStore::with_account(Account::new("alice", "pw1", "Alice", "a@x.com"))
                .await,
        );
        let app = test_app!(store);

        let req = test::TestRequest::post()
            .uri("/api/signup")
            .set_json(serde_json::json!({
                "username": "alice",
                "password": "pw2",
                "name": "Alice 2",
                "email": "a2@x.com"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "Username already exists");
    }

    #[actix_web::test]
    async fn test_login_wrong_password() {
        let store: Arc<dyn AccountStore> = Arc::new(
            MemoryAccountStore::with_account(Account::new("alice", "pw1", "Alice", "a@x.com"))
                .await,
        );
        let app = test_app!(store);

        let req = test::TestRequest::post()
            .uri("/api/login")
            .set_json(serde_json::json!({"username": "alice", "password": "wrong"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "Incorrect Password");
        assert!(body["workspaces"].is_null());
    }
}
