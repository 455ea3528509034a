pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

use crate::config::{ServerConfig, StoreBackend};
use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::modules::auth::adapter::outgoing::security::Argon2Hasher;
use crate::modules::auth::application::domain::AdminCredentials;
use crate::modules::auth::application::ports::incoming::use_cases::LoginAdminUseCase;
use crate::modules::auth::application::ports::outgoing::TokenProvider;
use crate::modules::auth::application::services::LoginAdminService;
use crate::modules::content::adapter::outgoing::{MokaQueryCache, QueryCacheConfig};
use crate::modules::content::application::ContentUseCases;
use crate::modules::document_store::adapter::outgoing::{
    InMemoryDocumentStore, PostgresDocumentStore, SnapshotFallbackStore,
};
use crate::modules::document_store::application::ports::outgoing::DocumentStore;
use crate::modules::multimedia::adapter::outgoing::{CloudinaryConfig, CloudinaryUploader};
use crate::modules::multimedia::application::domain::UploadPolicy;
use crate::modules::multimedia::application::ports::outgoing::BlobUploader;
use crate::shared::api::custom_json_config;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub content: ContentUseCases,
    pub login_admin_use_case: Arc<dyn LoginAdminUseCase + Send + Sync>,
    pub blob_uploader: Arc<dyn BlobUploader + Send + Sync>,
    pub upload_policy: UploadPolicy,
}

#[cfg(not(tarpaulin_include))]
async fn connect_postgres(database_url: &str) -> anyhow::Result<Arc<DatabaseConnection>> {
    let mut opt = ConnectOptions::new(database_url.to_owned());
    opt.max_connections(20)
        .min_connections(2)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("failed to connect to database")?;

    Migrator::up(&conn, None)
        .await
        .context("failed to run migrations")?;

    Ok(Arc::new(conn))
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    config::load_dotenv();
    let server_config = ServerConfig::from_env()?;

    // Document store
    let mut db: Option<Arc<DatabaseConnection>> = None;
    let store: Arc<dyn DocumentStore> = match server_config.store_backend {
        StoreBackend::Postgres => {
            let url = server_config
                .database_url
                .as_deref()
                .context("DATABASE_URL must be set")?;
            let conn = connect_postgres(url).await?;
            db = Some(Arc::clone(&conn));
            Arc::new(SnapshotFallbackStore::new(PostgresDocumentStore::new(conn)))
        }
        StoreBackend::Memory => {
            warn!("Using the in-memory document store; content is lost on restart");
            Arc::new(InMemoryDocumentStore::new())
        }
    };

    let cache = Arc::new(MokaQueryCache::new(QueryCacheConfig::from_env()?));
    let content = modules::content::build_use_cases(store, cache);

    // Auth
    let jwt_service = JwtTokenService::new(JwtConfig::from_env()?);
    let credentials = AdminCredentials::from_env()?;
    let login_admin_use_case = LoginAdminService::new(
        credentials,
        Arc::new(Argon2Hasher::from_env()?),
        Arc::new(jwt_service.clone()),
    );
    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);

    // Uploads
    let upload_policy = UploadPolicy::from_env()?;
    let blob_uploader = CloudinaryUploader::new(CloudinaryConfig::from_env()?)?;
    let payload_limit = usize::try_from(upload_policy.max_file_size_bytes)
        .unwrap_or(usize::MAX)
        .saturating_add(1);

    let state = AppState {
        content,
        login_admin_use_case: Arc::new(login_admin_use_case),
        blob_uploader: Arc::new(blob_uploader),
        upload_policy,
    };

    let server_url = server_config.bind_address();
    info!(%server_url, backend = ?server_config.store_backend, "Server starting");

    HttpServer::new(move || {
        let mut app = App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(custom_json_config())
            .app_data(web::PayloadConfig::new(payload_limit));

        if let Some(db) = &db {
            app = app.app_data(web::Data::new(Arc::clone(db)));
        }

        app.configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::login_admin_handler);
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::current_admin_handler);
    // Profile
    cfg.service(crate::modules::content::adapter::incoming::web::routes::get_profile_handler);
    cfg.service(crate::modules::content::adapter::incoming::web::routes::create_profile_handler);
    cfg.service(crate::modules::content::adapter::incoming::web::routes::upsert_profile_handler);
    cfg.service(crate::modules::content::adapter::incoming::web::routes::update_profile_handler);
    cfg.service(
        crate::modules::content::adapter::incoming::web::routes::get_profile_picture_handler,
    );
    cfg.service(
        crate::modules::content::adapter::incoming::web::routes::upsert_profile_picture_handler,
    );
    // About
    cfg.service(crate::modules::content::adapter::incoming::web::routes::get_biography_handler);
    cfg.service(crate::modules::content::adapter::incoming::web::routes::create_biography_handler);
    cfg.service(crate::modules::content::adapter::incoming::web::routes::upsert_biography_handler);
    cfg.service(crate::modules::content::adapter::incoming::web::routes::update_biography_handler);
    // Resume
    cfg.service(crate::modules::content::adapter::incoming::web::routes::get_resume_handler);
    cfg.service(crate::modules::content::adapter::incoming::web::routes::upsert_resume_handler);
    // Projects
    cfg.service(crate::modules::content::adapter::incoming::web::routes::list_projects_handler);
    cfg.service(crate::modules::content::adapter::incoming::web::routes::get_project_handler);
    cfg.service(crate::modules::content::adapter::incoming::web::routes::create_project_handler);
    cfg.service(crate::modules::content::adapter::incoming::web::routes::update_project_handler);
    cfg.service(crate::modules::content::adapter::incoming::web::routes::delete_project_handler);
    // Skills
    cfg.service(crate::modules::content::adapter::incoming::web::routes::grouped_skills_handler);
    cfg.service(crate::modules::content::adapter::incoming::web::routes::list_skills_handler);
    cfg.service(crate::modules::content::adapter::incoming::web::routes::create_skill_handler);
    cfg.service(crate::modules::content::adapter::incoming::web::routes::update_skill_handler);
    cfg.service(crate::modules::content::adapter::incoming::web::routes::delete_skill_handler);
    // Uploads
    cfg.service(crate::modules::multimedia::adapter::incoming::web::routes::upload_blob_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
