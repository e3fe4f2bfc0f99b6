pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

use crate::api::openapi::ApiDoc;
use crate::config::{AppConfig, CacheBackend};
use crate::modules::course::adapter::outgoing::CourseQueryPostgres;
use crate::modules::topic::adapter::outgoing::{
    InMemoryTopicListCache, NoopTopicListCache, RedisTopicListCache, TopicQueryPostgres,
    TopicRepositoryPostgres,
};
use crate::modules::topic::application::services::SharedTopicListCache;
use crate::modules::topic::application::topic_use_cases::TopicUseCases;
use crate::shared::api::{custom_json_config, custom_path_config, custom_query_config};

use actix_web::{web, App, HttpServer};
use deadpool_redis::{Config, Pool, Runtime};
use migration::{Migrator, MigratorTrait};

use sea_orm::{ConnectOptions, Database};
use std::io;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub topic: TopicUseCases,
}

/// Picks the listing cache; the Redis pool is also handed to the readiness probe.
#[cfg(not(tarpaulin_include))]
fn build_topic_cache(config: &AppConfig) -> io::Result<(SharedTopicListCache, Option<Arc<Pool>>)> {
    match config.cache_backend {
        CacheBackend::Memory => Ok((Arc::new(InMemoryTopicListCache::new()), None)),
        CacheBackend::None => Ok((Arc::new(NoopTopicListCache), None)),
        CacheBackend::Redis => {
            let url = config
                .redis_url
                .as_deref()
                .ok_or_else(|| io::Error::other("REDIS_URL is not set"))?;

            let pool = Config::from_url(url)
                .create_pool(Some(Runtime::Tokio1))
                .map_err(io::Error::other)?;
            let pool = Arc::new(pool);

            Ok((
                Arc::new(RedisTopicListCache::new(Arc::clone(&pool))),
                Some(pool),
            ))
        }
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env().map_err(io::Error::other)?;
    let server_url = config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(config.db_min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt).await.map_err(io::Error::other)?;
    let db_arc = Arc::new(conn);

    if config.run_migrations {
        Migrator::up(db_arc.as_ref(), None)
            .await
            .map_err(io::Error::other)?;
        info!("Database migrations applied");
    }

    let (cache, redis_pool) = build_topic_cache(&config)?;
    info!(backend = ?config.cache_backend, "Topic listing cache ready");

    let topic = TopicUseCases::new(
        TopicQueryPostgres::new(Arc::clone(&db_arc)),
        TopicRepositoryPostgres::new(Arc::clone(&db_arc)),
        CourseQueryPostgres::new(Arc::clone(&db_arc)),
        cache,
    );

    let state = AppState { topic };
    let openapi = ApiDoc::openapi();

    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    info!(address = %server_url, "Server listening");

    HttpServer::new(move || {
        let mut app = App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .app_data(custom_path_config());

        if let Some(pool) = &redis_pool {
            app = app.app_data(web::Data::new(Arc::clone(pool)));
        }

        app.configure(init_routes).service(
            SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
        )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::modules::topic::adapter::incoming::web::routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Topics
    cfg.service(routes::list_topics_handler);
    cfg.service(routes::create_topic_handler);
    cfg.service(routes::get_topic_detail_handler);
    cfg.service(routes::update_topic_handler);
    cfg.service(routes::delete_topic_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
