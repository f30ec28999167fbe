use actix_web::{HttpResponse, Responder, get, web};

use crate::AppState;

/// Always 200: the handler substitutes the hardcoded fallback record when
/// the store has no row or is unreachable.
#[get("/about")]
pub async fn get_about_content(state: web::Data<AppState>) -> impl Responder {
    let response = state.about_handler.get_about_content().await;

    HttpResponse::Ok().json(response)
}
