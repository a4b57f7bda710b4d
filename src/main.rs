use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use migration::{Migrator, MigratorTrait};
use myhome_backend::auth::middleware::JwtSecret;
use myhome_backend::config::AppConfig;
use myhome_backend::create_pool;
use myhome_backend::handlers;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;

    let db = create_pool(&config.database_url)
        .await
        .map_err(std::io::Error::other)?;
    Migrator::up(&db, None).await.map_err(std::io::Error::other)?;
    tracing::info!("Connected to database, migrations applied");

    let db_data = web::Data::new(db);
    let jwt_secret = web::Data::new(JwtSecret(config.jwt_secret.clone()));

    let bind_addr = config.bind_addr();
    tracing::info!("Server running at http://{bind_addr}");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::AUTHORIZATION,
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(db_data.clone())
            .app_data(jwt_secret.clone())
            .service(web::scope("/api").configure(handlers::init_routes))
    })
    .bind(&bind_addr)?
    .run()
    .await
}
