use actix_web::{HttpRequest, HttpResponse, Responder, get, http::header, web};

use crate::auth::session::SessionVerifier;

/// Session presence for the footer's admin-link gating. Always 200 with a
/// boolean; an absent or bad token is not an error condition here.
#[get("/session")]
pub async fn session_status(
    req: HttpRequest,
    verifier: web::Data<SessionVerifier>,
) -> impl Responder {
    let authorization = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    HttpResponse::Ok().json(serde_json::json!({
        "authenticated": verifier.is_authenticated(authorization)
    }))
}
