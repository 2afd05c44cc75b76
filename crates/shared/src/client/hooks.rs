//! Fetch hooks: request state holders that re-issue their request when
//! their parameters change.
//!
//! Each hook stamps every request with a generation number and only the
//! newest request may write the result slot, so a slow response for stale
//! parameters never overwrites a newer one.

use super::PoolsClient;
use crate::models::pool::PoolRecord;
use crate::models::query::{FilterCriteria, SortSpec};
use anyhow::Result;
use log::warn;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    pub data: Option<T>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            data: None,
            is_loading: false,
            error: None,
        }
    }
}

struct FetchSlot<T> {
    state: Arc<Mutex<FetchState<T>>>,
    generation: AtomicU64,
}

impl<T: Clone> FetchSlot<T> {
    fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(FetchState::default())),
            generation: AtomicU64::new(0),
        }
    }

    async fn begin(&self) -> u64 {
        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let mut state = self.state.lock().await;
        state.is_loading = true;
        state.error = None;
        token
    }

    async fn finish(&self, token: u64, result: Result<T>) -> FetchState<T> {
        let mut state = self.state.lock().await;
        if self.generation.load(Ordering::SeqCst) != token {
            return state.clone();
        }
        match result {
            Ok(data) => state.data = Some(data),
            Err(e) => {
                warn!("Fetch failed: {e:#}");
                state.error = Some(e.to_string());
            }
        }
        state.is_loading = false;
        state.clone()
    }

    async fn snapshot(&self) -> FetchState<T> {
        self.state.lock().await.clone()
    }

    fn handle(&self) -> Arc<Mutex<FetchState<T>>> {
        self.state.clone()
    }
}

#[derive(Debug, Clone, PartialEq)]
struct ListParams {
    criteria: FilterCriteria,
    sort: Option<SortSpec>,
}

/// Pool list backed by `GET /api/pools`.
pub struct UsePools {
    client: PoolsClient,
    params: Mutex<Option<ListParams>>,
    slot: FetchSlot<Vec<PoolRecord>>,
}

impl UsePools {
    pub fn new(client: PoolsClient) -> Self {
        Self {
            client,
            params: Mutex::new(None),
            slot: FetchSlot::new(),
        }
    }

    /// Set the list parameters, fetching only when they differ from the
    /// current ones.
    pub async fn set_params(
        &self,
        criteria: FilterCriteria,
        sort: Option<SortSpec>,
    ) -> FetchState<Vec<PoolRecord>> {
        let next = ListParams { criteria, sort };
        {
            let mut params = self.params.lock().await;
            if params.as_ref() == Some(&next) {
                drop(params);
                return self.slot.snapshot().await;
            }
            *params = Some(next);
        }
        self.refetch().await
    }

    /// Re-issue the request with the current parameters.
    pub async fn refetch(&self) -> FetchState<Vec<PoolRecord>> {
        let params = self.params.lock().await.clone().unwrap_or(ListParams {
            criteria: FilterCriteria::default(),
            sort: None,
        });
        let token = self.slot.begin().await;
        let result = self
            .client
            .fetch_pools(&params.criteria, params.sort.as_ref())
            .await;
        self.slot.finish(token, result).await
    }

    pub async fn state(&self) -> FetchState<Vec<PoolRecord>> {
        self.slot.snapshot().await
    }

    /// Shared view of the state, readable while a request is in flight.
    pub fn handle(&self) -> Arc<Mutex<FetchState<Vec<PoolRecord>>>> {
        self.slot.handle()
    }
}

/// Single pool backed by `GET /api/pools/{id}`.
pub struct UsePoolDetails {
    client: PoolsClient,
    id: Mutex<Option<String>>,
    slot: FetchSlot<PoolRecord>,
}

impl UsePoolDetails {
    pub fn new(client: PoolsClient) -> Self {
        Self {
            client,
            id: Mutex::new(None),
            slot: FetchSlot::new(),
        }
    }

    /// Switch to `id`, fetching when it changed. An empty id issues no
    /// request.
    pub async fn set_id(&self, id: &str) -> FetchState<PoolRecord> {
        {
            let mut current = self.id.lock().await;
            if current.as_deref() == Some(id) {
                drop(current);
                return self.slot.snapshot().await;
            }
            *current = Some(id.to_string());
        }
        if id.is_empty() {
            return self.slot.snapshot().await;
        }

        let token = self.slot.begin().await;
        let result = self.client.fetch_pool(id).await;
        self.slot.finish(token, result).await
    }

    pub async fn state(&self) -> FetchState<PoolRecord> {
        self.slot.snapshot().await
    }

    pub fn handle(&self) -> Arc<Mutex<FetchState<PoolRecord>>> {
        self.slot.handle()
    }
}
