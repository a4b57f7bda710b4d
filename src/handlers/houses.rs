use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::middleware::AuthenticatedUser;
use crate::db::houses as house_db;
use crate::errors::ApiError;

/// GET /api/houses/{id} — get a single house.
pub async fn get_house(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let house = house_db::get_house_by_id(db.get_ref(), id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("House {id} not found")))?;

    Ok(HttpResponse::Ok().json(house))
}
