use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PoolStatus {
    #[default]
    Active,
    Inactive,
    Maintenance,
}

impl PoolStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PoolStatus::Active => "active",
            PoolStatus::Inactive => "inactive",
            PoolStatus::Maintenance => "maintenance",
        }
    }
}

impl fmt::Display for PoolStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PoolStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(PoolStatus::Active),
            "inactive" => Ok(PoolStatus::Inactive),
            "maintenance" => Ok(PoolStatus::Maintenance),
            _ => Err(anyhow!("invalid pool status: {s}")),
        }
    }
}

/// A single mining pool as served by the pools API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PoolRecord {
    pub id: String,
    pub name: String,
    pub algorithm: String,
    pub url: String,
    pub port: u16,
    /// Percentage
    pub fee: f64,
    pub min_payout: f64,
    /// EH/s
    pub hashrate: f64,
    pub workers: u64,
    /// Percentage, 0-100
    pub uptime: f64,
    pub last_block: String,
    pub status: PoolStatus,
    pub region: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PoolRecord {
    pub fn is_active(&self) -> bool {
        self.status == PoolStatus::Active
    }

    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.url, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pool_record_uses_camel_case_fields() {
        let pool = PoolRecord {
            id: "1".to_string(),
            name: "ZPool Mining".to_string(),
            algorithm: "SHA-256".to_string(),
            url: "stratum+tcp://zpool.ca".to_string(),
            port: 3333,
            fee: 1.5,
            min_payout: 0.001,
            hashrate: 120.5,
            workers: 4200,
            uptime: 99.2,
            last_block: "5 min ago".to_string(),
            status: PoolStatus::Maintenance,
            region: "Europe".to_string(),
            description: None,
        };

        let value = serde_json::to_value(&pool).unwrap();
        assert_eq!(value["minPayout"], json!(0.001));
        assert_eq!(value["lastBlock"], json!("5 min ago"));
        assert_eq!(value["status"], json!("maintenance"));
        assert!(value.get("description").is_none());
    }

    #[test]
    fn test_pool_record_deserializes_without_description() {
        let pool: PoolRecord = serde_json::from_value(json!({
            "id": "7",
            "name": "Nova",
            "algorithm": "Scrypt",
            "url": "stratum+tcp://nova.example",
            "port": 4444,
            "fee": 1.0,
            "minPayout": 0.01,
            "hashrate": 12.0,
            "workers": 10,
            "uptime": 97.0,
            "lastBlock": "1 hour ago",
            "status": "inactive",
            "region": "Asia"
        }))
        .unwrap();

        assert_eq!(pool.status, PoolStatus::Inactive);
        assert_eq!(pool.description, None);
        assert_eq!(pool.endpoint(), "stratum+tcp://nova.example:4444");
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let result: Result<PoolRecord, _> = serde_json::from_value(json!({
            "id": "1", "name": "x", "algorithm": "x", "url": "x", "port": 1,
            "fee": 0.0, "minPayout": 0.0, "hashrate": 0.0, "workers": 0,
            "uptime": 0.0, "lastBlock": "x", "status": "offline", "region": "x"
        }));
        assert!(result.is_err());
        assert!("offline".parse::<PoolStatus>().is_err());
        assert_eq!("active".parse::<PoolStatus>().unwrap(), PoolStatus::Active);
    }
}
