pub mod communities;
pub mod houses;
pub mod users;

use sea_orm::{Database, DatabaseConnection, DbErr};

/// Create a SeaORM database connection pool for the given URL.
pub async fn create_pool(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    Database::connect(database_url).await
}

/// Fail before `fetch_page` multiplies the page index by the page size.
fn ensure_page_offset(request: &crate::models::PageRequest) -> Result<(), DbErr> {
    request
        .offset()
        .map(|_| ())
        .ok_or_else(|| DbErr::Custom(format!("page offset out of range: {request:?}")))
}
