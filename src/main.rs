use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use workers_hub_backend::auth::middleware::JwtSecret;
use workers_hub_backend::create_pool;
use workers_hub_backend::handlers;
use workers_hub_backend::handlers::requests::ImageDir;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let db = create_pool().await;
    let db_data = web::Data::new(db);

    let jwt_secret = std::env::var("JWT_SECRET").expect("JWT_SECRET must be set");
    let secret_data = web::Data::new(JwtSecret(jwt_secret));

    let image_dir = PathBuf::from(std::env::var("IMAGE_DIR").unwrap_or_else(|_| "images".into()));
    std::fs::create_dir_all(&image_dir)?;
    let image_data = web::Data::new(ImageDir(image_dir.clone()));

    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let bind_addr = format!("0.0.0.0:{port}");
    tracing::info!("Server running at http://{bind_addr}");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::AUTHORIZATION,
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(db_data.clone())
            .app_data(secret_data.clone())
            .app_data(image_data.clone())
            .service(web::scope("/api").configure(handlers::init_routes))
            .service(Files::new("/images", image_dir.clone()))
    })
    .bind(&bind_addr)?
    .run()
    .await
}
