use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::authorization::{find_community, verify_community_admin};
use crate::auth::middleware::AuthenticatedUser;
use crate::db::communities as community_db;
use crate::db::houses as house_db;
use crate::errors::ApiError;
use crate::models::PageRequest;
use crate::models::communities::CreateCommunity;
use crate::models::houses::CreateHouse;
use crate::pagination::Paged;

use super::checked_page;

/// GET /api/communities — list communities one page at a time.
pub async fn get_communities(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    query: web::Query<PageRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = checked_page(&query)?;
    let (items, page_info) = community_db::get_communities_page(db.get_ref(), request).await?;
    Ok(HttpResponse::Ok().json(Paged::new(items, page_info)))
}

/// GET /api/communities/{id} — get a single community.
pub async fn get_community(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let community = find_community(db.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(community))
}

/// POST /api/communities — create a community; the caller becomes its admin.
pub async fn create_community(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateCommunity>,
) -> Result<HttpResponse, ApiError> {
    let input = body.into_inner();
    if input.name.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Community name must not be empty".to_string(),
        ));
    }

    let community = community_db::insert_community(db.get_ref(), input, user.0.id).await?;
    tracing::info!("Community {} created by {}", community.id, user.0.id);

    Ok(HttpResponse::Created().json(community))
}

/// DELETE /api/communities/{id} — delete a community (admin only).
pub async fn delete_community(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    verify_community_admin(db.get_ref(), id, user.0.id).await?;

    let result = community_db::delete_community(db.get_ref(), id).await?;
    if result.rows_affected == 0 {
        return Err(ApiError::NotFound(format!("Community {id} not found")));
    }

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": format!("Community {id} deleted"),
    })))
}

/// GET /api/communities/{id}/houses — list a community's houses one page at a time.
pub async fn get_community_houses(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    query: web::Query<PageRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = checked_page(&query)?;
    let community = find_community(db.get_ref(), path.into_inner()).await?;

    let (items, page_info) =
        house_db::get_houses_page_by_community(db.get_ref(), community.id, request).await?;
    Ok(HttpResponse::Ok().json(Paged::new(items, page_info)))
}

/// POST /api/communities/{id}/houses — add a house to a community (admin only).
pub async fn create_community_house(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<CreateHouse>,
) -> Result<HttpResponse, ApiError> {
    let community = verify_community_admin(db.get_ref(), path.into_inner(), user.0.id).await?;

    let input = body.into_inner();
    if input.name.trim().is_empty() {
        return Err(ApiError::BadRequest("House name must not be empty".to_string()));
    }

    let house = house_db::insert_house(db.get_ref(), community.id, input).await?;
    Ok(HttpResponse::Created().json(house))
}
