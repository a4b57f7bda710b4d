use sea_orm::*;
use uuid::Uuid;

use crate::models::PageRequest;
use crate::models::houses::{self, CreateHouse};
use crate::pagination::{PageInfo, Pageable};

/// Insert a new house into a community.
pub async fn insert_house(
    db: &DatabaseConnection,
    community_id: Uuid,
    input: CreateHouse,
) -> Result<houses::Model, DbErr> {
    let house = houses::ActiveModel {
        id: Set(Uuid::new_v4()),
        community_id: Set(community_id),
        name: Set(input.name),
        created_at: Set(chrono::Utc::now()),
    };

    house.insert(db).await
}

/// Fetch one page of the houses belonging to a community.
pub async fn get_houses_page_by_community(
    db: &DatabaseConnection,
    community_id: Uuid,
    request: &PageRequest,
) -> Result<(Vec<houses::Model>, PageInfo), DbErr> {
    super::ensure_page_offset(request)?;

    let paginator = houses::Entity::find()
        .filter(houses::Column::CommunityId.eq(community_id))
        .order_by_asc(houses::Column::Name)
        .order_by_asc(houses::Column::Id)
        .paginate(db, request.page_size());

    let totals = paginator.num_items_and_pages().await?;
    let items = paginator.fetch_page(request.page_number()).await?;

    Ok((items, PageInfo::of(request, &totals)))
}

/// Fetch a single house by ID.
pub async fn get_house_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<houses::Model>, DbErr> {
    houses::Entity::find_by_id(id).one(db).await
}
