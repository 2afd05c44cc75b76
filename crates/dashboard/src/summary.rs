use shared::models::pool::PoolRecord;

/// Aggregates shown above the pool table.
#[derive(Debug, Clone, PartialEq)]
pub struct PoolsSummary {
    pub total_hashrate: f64,
    pub total_workers: u64,
    pub average_uptime: f64,
    pub active_pools: usize,
    pub pool_count: usize,
}

impl PoolsSummary {
    pub fn from_pools(pools: &[PoolRecord]) -> Self {
        let total_hashrate = pools.iter().map(|p| p.hashrate).sum();
        let total_workers = pools.iter().map(|p| p.workers).sum();
        let average_uptime = if pools.is_empty() {
            0.0
        } else {
            pools.iter().map(|p| p.uptime).sum::<f64>() / pools.len() as f64
        };

        Self {
            total_hashrate,
            total_workers,
            average_uptime,
            active_pools: pools.iter().filter(|p| p.is_active()).count(),
            pool_count: pools.len(),
        }
    }
}

pub fn format_hashrate(hashrate: f64) -> String {
    if hashrate >= 1000.0 {
        format!("{:.1}k EH/s", hashrate / 1000.0)
    } else {
        format!("{hashrate:.1} EH/s")
    }
}

/// Digits grouped in thousands, e.g. `182450` -> `182,450`.
pub fn format_number(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
