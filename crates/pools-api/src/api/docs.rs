use crate::api::routes::pools;
use actix_web::HttpResponse;
use shared::models::pool::{PoolRecord, PoolStatus};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(pools::get_pools, pools::get_pool_by_id),
    components(schemas(PoolRecord, PoolStatus)),
    tags((name = "pools", description = "Mining pool listing and details"))
)]
pub struct ApiDoc;

pub(crate) async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
