use actix_web::{HttpResponse, Responder, get};

#[get("/")]
pub async fn home() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Welcome to my Portfolio API!",
        "status": "Ok",
        "version": env!("CARGO_PKG_VERSION"),
        "pages": ["/", "/work", "/about", "/contact"],
        "api": {
            "projects": "/api/v1/projects",
            "about": "/api/v1/about",
            "contact": "/api/v1/contact",
            "session": "/api/v1/session",
            "health": "/api/v1/health"
        }
    }))
}
