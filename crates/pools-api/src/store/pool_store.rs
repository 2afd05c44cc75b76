use crate::error::FixtureError;
use anyhow::Result;
use async_trait::async_trait;
use log::info;
use shared::fixtures::mock_pools;
use shared::models::pool::PoolRecord;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

/// Read access to the pool dataset served by the API.
#[async_trait]
pub trait PoolRepository: Send + Sync {
    /// All pools in dataset order
    async fn get_pools(&self) -> Result<Arc<[PoolRecord]>>;

    async fn get_pool(&self, id: &str) -> Result<Option<PoolRecord>>;
}

/// Immutable in-memory dataset, loaded once at start-up.
pub struct PoolStore {
    pools: Arc<[PoolRecord]>,
}

impl PoolStore {
    pub fn new(pools: Vec<PoolRecord>) -> Result<Self, FixtureError> {
        validate(&pools)?;
        Ok(Self {
            pools: pools.into(),
        })
    }

    /// Store over the built-in dataset.
    pub fn with_mock_pools() -> Self {
        Self {
            pools: mock_pools().into(),
        }
    }

    /// Store over a JSON array of pools.
    pub fn from_file(path: &Path) -> Result<Self, FixtureError> {
        let contents = std::fs::read_to_string(path)?;
        let pools: Vec<PoolRecord> = serde_json::from_str(&contents)?;
        info!("Loaded {} pools from {}", pools.len(), path.display());
        Self::new(pools)
    }

    pub fn len(&self) -> usize {
        self.pools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }
}

fn validate(pools: &[PoolRecord]) -> Result<(), FixtureError> {
    let mut seen_ids = HashSet::new();
    for pool in pools {
        if !seen_ids.insert(pool.id.as_str()) {
            return Err(FixtureError::DuplicateId(pool.id.clone()));
        }
        if pool.port == 0 {
            return Err(FixtureError::InvalidRecord {
                id: pool.id.clone(),
                reason: "port must be between 1 and 65535".to_string(),
            });
        }
        if !(0.0..=100.0).contains(&pool.uptime) {
            return Err(FixtureError::InvalidRecord {
                id: pool.id.clone(),
                reason: format!("uptime {} is outside 0-100", pool.uptime),
            });
        }
    }
    Ok(())
}

#[async_trait]
impl PoolRepository for PoolStore {
    async fn get_pools(&self) -> Result<Arc<[PoolRecord]>> {
        Ok(self.pools.clone())
    }

    async fn get_pool(&self, id: &str) -> Result<Option<PoolRecord>> {
        Ok(self.pools.iter().find(|pool| pool.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_get_pool_by_exact_id() {
        let store = PoolStore::with_mock_pools();
        let pool = store.get_pool("1").await.unwrap();
        assert_eq!(pool.map(|p| p.id), Some("1".to_string()));
        assert!(store.get_pool("999").await.unwrap().is_none());
        assert!(store.get_pool(" 1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_pools_keeps_dataset_order() {
        let store = PoolStore::with_mock_pools();
        let pools = store.get_pools().await.unwrap();
        assert_eq!(pools.to_vec(), mock_pools());
        assert_eq!(store.len(), pools.len());
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let mut pools = mock_pools();
        pools.push(pools[0].clone());
        let result = PoolStore::new(pools);
        assert!(matches!(result, Err(FixtureError::DuplicateId(id)) if id == "1"));
    }

    #[test]
    fn test_out_of_range_values_are_rejected() {
        let mut pools = mock_pools();
        pools[2].uptime = 101.0;
        assert!(matches!(
            PoolStore::new(pools),
            Err(FixtureError::InvalidRecord { .. })
        ));

        let mut pools = mock_pools();
        pools[0].port = 0;
        assert!(PoolStore::new(pools).is_err());
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!("pools-fixture-{}.json", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(serde_json::to_string(&mock_pools()).unwrap().as_bytes())
            .unwrap();

        let store = PoolStore::from_file(&path).unwrap();
        assert_eq!(store.len(), mock_pools().len());
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(
            PoolStore::from_file(&path),
            Err(FixtureError::Io(_))
        ));
    }
}
