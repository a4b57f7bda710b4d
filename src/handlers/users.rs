use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::middleware::AuthenticatedUser;
use crate::db::users as user_db;
use crate::errors::ApiError;
use crate::models::PageRequest;
use crate::models::users::UserResponse;
use crate::pagination::Paged;

use super::checked_page;

/// GET /api/users — list users one page at a time.
/// Query params: ?page=0&size=20
pub async fn get_users(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    query: web::Query<PageRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = checked_page(&query)?;
    let (users, page_info) = user_db::get_users_page(db.get_ref(), request).await?;
    let response = Paged::new(users, page_info).map(UserResponse::from);

    Ok(HttpResponse::Ok().json(response))
}

/// GET /api/users/{id} — get a single user.
pub async fn get_user(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let user = user_db::get_user_by_id(db.get_ref(), id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("User {id} not found")))?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}
