use sea_orm::*;
use uuid::Uuid;

use crate::models::PageRequest;
use crate::models::communities::{self, CreateCommunity};
use crate::pagination::{PageInfo, Pageable};

/// Insert a new community administered by `admin_id`.
pub async fn insert_community(
    db: &DatabaseConnection,
    input: CreateCommunity,
    admin_id: Uuid,
) -> Result<communities::Model, DbErr> {
    let community = communities::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(input.name),
        district: Set(input.district),
        admin_id: Set(admin_id),
        created_at: Set(chrono::Utc::now()),
    };

    community.insert(db).await
}

/// Fetch one page of communities ordered by name.
pub async fn get_communities_page(
    db: &DatabaseConnection,
    request: &PageRequest,
) -> Result<(Vec<communities::Model>, PageInfo), DbErr> {
    super::ensure_page_offset(request)?;

    let paginator = communities::Entity::find()
        .order_by_asc(communities::Column::Name)
        .order_by_asc(communities::Column::Id)
        .paginate(db, request.page_size());

    let totals = paginator.num_items_and_pages().await?;
    let items = paginator.fetch_page(request.page_number()).await?;

    Ok((items, PageInfo::of(request, &totals)))
}

/// Fetch a single community by ID.
pub async fn get_community_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<communities::Model>, DbErr> {
    communities::Entity::find_by_id(id).one(db).await
}

/// Delete a community by ID. Its houses go with it (FK cascade).
pub async fn delete_community(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    communities::Entity::delete_by_id(id).exec(db).await
}
