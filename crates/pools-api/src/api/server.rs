use crate::api::docs::openapi_json;
use crate::api::routes::pools::pools_routes;
use crate::store::pool_store::PoolRepository;
use actix_web::middleware::{Compress, NormalizePath, TrailingSlash};
use actix_web::{middleware, web, web::Data, App, HttpResponse, HttpServer};
use anyhow::Error;
use log::{error, info};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

/// Artificial latency applied before each response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseDelay {
    pub list: Duration,
    pub detail: Duration,
}

impl ResponseDelay {
    pub fn none() -> Self {
        Self {
            list: Duration::ZERO,
            detail: Duration::ZERO,
        }
    }

    pub(crate) async fn before_list(&self) {
        pause(self.list).await;
    }

    pub(crate) async fn before_detail(&self) {
        pause(self.detail).await;
    }
}

impl Default for ResponseDelay {
    fn default() -> Self {
        Self {
            list: Duration::from_millis(500),
            detail: Duration::from_millis(300),
        }
    }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

#[derive(Clone)]
pub struct AppState {
    pub pool_store: Arc<dyn PoolRepository>,
    pub delay: ResponseDelay,
}

async fn health_check(app_state: Data<AppState>) -> HttpResponse {
    match app_state.pool_store.get_pools().await {
        Ok(pools) => HttpResponse::Ok().json(json!({
            "status": "ok",
            "service": "pools-api",
            "pools": pools.len()
        })),
        Err(e) => {
            error!("Health check: pool store unavailable: {e}");
            HttpResponse::ServiceUnavailable().json(json!({
                "status": "error",
                "service": "pools-api",
                "message": "Pool store unavailable"
            }))
        }
    }
}

pub(crate) fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({
        "success": false,
        "error": "Resource not found"
    }))
}

/// Register every route on `cfg`. Shared by the server and the tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/api-docs/openapi.json", web::get().to(openapi_json))
        .service(pools_routes());
}

pub async fn start_server(
    host: &str,
    port: u16,
    pool_store: Arc<dyn PoolRepository>,
    delay: ResponseDelay,
) -> Result<(), Error> {
    info!("Starting server at http://{host}:{port}");
    info!(
        "Response delay: list {}ms, detail {}ms",
        delay.list.as_millis(),
        delay.detail.as_millis()
    );

    let app_state = AppState { pool_store, delay };

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .wrap(Compress::default())
            .wrap(NormalizePath::new(TrailingSlash::Trim))
            .app_data(Data::new(app_state.clone()))
            .configure(configure)
            .default_service(web::route().to(|| async { not_found() }))
    })
    .bind((host, port))?
    .run()
    .await?;
    Ok(())
}
