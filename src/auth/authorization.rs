use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::db::communities as community_db;
use crate::errors::ApiError;
use crate::models::communities::Model;

/// Load a community, failing with 404 if it does not exist.
pub async fn find_community(
    db: &DatabaseConnection,
    community_id: Uuid,
) -> Result<Model, ApiError> {
    community_db::get_community_by_id(db, community_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Community {community_id} not found")))
}

/// Load a community and check that `user_id` administers it.
pub async fn verify_community_admin(
    db: &DatabaseConnection,
    community_id: Uuid,
    user_id: Uuid,
) -> Result<Model, ApiError> {
    let community = find_community(db, community_id).await?;

    if community.admin_id != user_id {
        return Err(ApiError::Forbidden(
            "You are not an admin of this community".to_string(),
        ));
    }

    Ok(community)
}
