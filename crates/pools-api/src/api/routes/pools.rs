use crate::api::server::AppState;
use crate::error::PoolsApiError;
use actix_web::{
    web::{self, get, Data},
    HttpRequest, HttpResponse, Scope,
};
use log::{debug, error};
use shared::models::api::{ApiResponse, PoolDetail, PoolList};
use shared::models::query::PoolsQuery;
use shared::query;

#[utoipa::path(
    get,
    path = "/api/pools",
    params(
        ("algorithm" = Option<String>, Query, description = "Exact algorithm match"),
        ("status" = Option<String>, Query, description = "Exact status match: active, inactive or maintenance"),
        ("region" = Option<String>, Query, description = "Exact region match"),
        ("search" = Option<String>, Query, description = "Case-insensitive substring of name, algorithm or region"),
        ("sortBy" = Option<String>, Query, description = "Pool field to sort by"),
        ("sortDirection" = Option<String>, Query, description = "asc or desc; required together with sortBy")
    ),
    responses(
        (status = 200, description = "Filtered and sorted pools with their count"),
        (status = 500, description = "Internal server error")
    ),
    tag = "pools"
)]
pub async fn get_pools(req: HttpRequest, data: Data<AppState>) -> HttpResponse {
    data.delay.before_list().await;

    let pools = match data.pool_store.get_pools().await {
        Ok(pools) => pools,
        Err(e) => {
            error!("Error getting pools: {e}");
            return PoolsApiError::Internal("Failed to fetch pools".to_string()).into();
        }
    };

    let params = PoolsQuery::from_query_string(req.query_string());
    let criteria = params.criteria();
    let sort = params.sort_spec();
    if sort.is_none() && (params.sort_by.is_some() || params.sort_direction.is_some()) {
        debug!(
            "Ignoring sort: sortBy={:?} sortDirection={:?}",
            params.sort_by, params.sort_direction
        );
    }

    let derived = query::apply(&pools, &criteria, sort.as_ref());
    debug!("Serving {} of {} pools", derived.len(), pools.len());
    HttpResponse::Ok().json(ApiResponse::new(true, PoolList::from(derived)))
}

#[utoipa::path(
    get,
    path = "/api/pools/{id}",
    params(
        ("id" = String, Path, description = "Pool identifier")
    ),
    responses(
        (status = 200, description = "Pool found"),
        (status = 404, description = "Pool not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "pools"
)]
pub async fn get_pool_by_id(id: web::Path<String>, data: Data<AppState>) -> HttpResponse {
    data.delay.before_detail().await;

    match data.pool_store.get_pool(&id).await {
        Ok(Some(pool)) => HttpResponse::Ok().json(ApiResponse::new(true, PoolDetail { pool })),
        Ok(None) => {
            debug!("Pool {id} not found");
            PoolsApiError::NotFound("Pool not found".to_string()).into()
        }
        Err(e) => {
            error!("Error getting pool {id}: {e}");
            PoolsApiError::Internal("Failed to fetch pool details".to_string()).into()
        }
    }
}

pub fn pools_routes() -> Scope {
    web::scope("/api/pools")
        .route("", get().to(get_pools))
        .route("/{id}", get().to(get_pool_by_id))
}
