use actix_web::{Error, HttpResponse, Responder, post, web};

use crate::{AppState, entities::contact_me::NewContactMessage};

#[post("/contact")]
pub async fn submit_contact_message(
    state: web::Data<AppState>,
    form: web::Json<NewContactMessage>,
) -> Result<impl Responder, Error> {
    let response = state.contact_handler.submit_message(form.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}
