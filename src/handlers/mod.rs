pub mod communities;
pub mod houses;
pub mod users;

use actix_web::web;

use crate::errors::ApiError;
use crate::models::PageRequest;

/// Reject page indexes whose row offset overflows before they reach the paginator.
pub fn checked_page(request: &PageRequest) -> Result<&PageRequest, ApiError> {
    match request.offset() {
        Some(_) => Ok(request),
        None => Err(ApiError::BadRequest(format!(
            "Page {} is out of range",
            request.page.unwrap_or_default()
        ))),
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // ── User routes (all protected — require valid JWT) ──
    cfg.service(
        web::scope("/users")
            .route("", web::get().to(users::get_users))
            .route("/{id}", web::get().to(users::get_user)),
    );

    // ── Community routes ──
    cfg.service(
        web::scope("/communities")
            .route("", web::get().to(communities::get_communities))
            .route("", web::post().to(communities::create_community))
            .route("/{id}", web::get().to(communities::get_community))
            .route("/{id}", web::delete().to(communities::delete_community))
            .route("/{id}/houses", web::get().to(communities::get_community_houses))
            .route("/{id}/houses", web::post().to(communities::create_community_house)),
    );

    // ── House routes ──
    cfg.service(web::scope("/houses").route("/{id}", web::get().to(houses::get_house)));
}
