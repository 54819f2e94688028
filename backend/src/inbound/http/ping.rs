//! Ping endpoint reporting the server clock.

use actix_web::{get, web};
use chrono::{SecondsFormat, Utc};

/// Return the current server time as an RFC 3339 string.
#[utoipa::path(
    get,
    path = "/ping",
    tags = ["ping"],
    responses(
        (
            status = 200,
            description = "Current server time",
            body = String,
            example = json!("2024-05-01T12:00:00.000Z")
        )
    ),
    operation_id = "ping"
)]
#[get("/ping")]
pub async fn ping() -> web::Json<String> {
    web::Json(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true))
}
