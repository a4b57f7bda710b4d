use sea_orm::*;
use uuid::Uuid;

use crate::models::PageRequest;
use crate::models::users::{self, CreateUserFromAuth};
use crate::pagination::{PageInfo, Pageable};

/// Return the user a token was issued for, creating the row on first sight.
pub async fn find_or_create_from_auth(
    db: &DatabaseConnection,
    input: CreateUserFromAuth,
) -> Result<users::Model, DbErr> {
    if let Some(existing) = users::Entity::find_by_id(input.id).one(db).await? {
        return Ok(existing);
    }

    let new_user = users::ActiveModel {
        id: Set(input.id),
        email: Set(input.email),
        name: Set(input.name),
        created_at: Set(chrono::Utc::now()),
    };

    new_user.insert(db).await
}

/// Fetch one page of users, oldest first, together with its page metadata.
pub async fn get_users_page(
    db: &DatabaseConnection,
    request: &PageRequest,
) -> Result<(Vec<users::Model>, PageInfo), DbErr> {
    super::ensure_page_offset(request)?;

    let paginator = users::Entity::find()
        .order_by_asc(users::Column::CreatedAt)
        .order_by_asc(users::Column::Id)
        .paginate(db, request.page_size());

    let totals = paginator.num_items_and_pages().await?;
    let users = paginator.fetch_page(request.page_number()).await?;

    Ok((users, PageInfo::of(request, &totals)))
}

/// Fetch a single user by ID.
pub async fn get_user_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<users::Model>, DbErr> {
    users::Entity::find_by_id(id).one(db).await
}
