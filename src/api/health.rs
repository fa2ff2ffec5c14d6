use actix_web::{HttpResponse, Responder};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct RootResponse {
    pub status: String,
    pub message: String,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Root",
    responses(
        (status = 200, description = "Service is online", body = RootResponse)
    )
)]
pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(RootResponse {
        status: "online".to_string(),
        message: "IntelliOS API is running".to_string(),
    })
}
