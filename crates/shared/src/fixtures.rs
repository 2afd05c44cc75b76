use crate::models::pool::{PoolRecord, PoolStatus};

#[allow(clippy::too_many_arguments)]
fn record(
    id: &str,
    name: &str,
    algorithm: &str,
    url: &str,
    port: u16,
    fee: f64,
    min_payout: f64,
    hashrate: f64,
    workers: u64,
    uptime: f64,
    last_block: &str,
    status: PoolStatus,
    region: &str,
    description: Option<&str>,
) -> PoolRecord {
    PoolRecord {
        id: id.to_string(),
        name: name.to_string(),
        algorithm: algorithm.to_string(),
        url: url.to_string(),
        port,
        fee,
        min_payout,
        hashrate,
        workers,
        uptime,
        last_block: last_block.to_string(),
        status,
        region: region.to_string(),
        description: description.map(str::to_string),
    }
}

/// Built-in pool dataset used when no fixture file is configured. Both the
/// pools API and the local dashboard start from this list.
pub fn mock_pools() -> Vec<PoolRecord> {
    vec![
        record(
            "1",
            "Foundry USA",
            "SHA-256",
            "stratum+tcp://btc.foundryusapool.com",
            3333,
            0.0,
            0.001,
            275.4,
            182_450,
            99.9,
            "2 min ago",
            PoolStatus::Active,
            "North America",
            Some("Largest North American pool with FPPS payouts."),
        ),
        record(
            "2",
            "AntPool",
            "SHA-256",
            "stratum+tcp://ss.antpool.com",
            3333,
            2.5,
            0.001,
            160.2,
            120_300,
            99.7,
            "8 min ago",
            PoolStatus::Active,
            "Asia",
            Some("PPS+ and PPLNS payout schemes."),
        ),
        record(
            "3",
            "ViaBTC",
            "SHA-256",
            "stratum+tcp://btc.viabtc.com",
            3333,
            2.0,
            0.0001,
            75.8,
            64_210,
            99.5,
            "25 min ago",
            PoolStatus::Active,
            "Asia",
            None,
        ),
        record(
            "4",
            "F2Pool",
            "SHA-256",
            "stratum+tcp://btc.f2pool.com",
            1314,
            2.5,
            0.005,
            98.1,
            88_930,
            99.6,
            "14 min ago",
            PoolStatus::Active,
            "Asia",
            Some("One of the oldest multi-currency pools."),
        ),
        record(
            "5",
            "Braiins Pool",
            "SHA-256",
            "stratum+tcp://stratum.braiins.com",
            3333,
            2.0,
            0.0001,
            18.3,
            21_400,
            99.8,
            "3 hours ago",
            PoolStatus::Active,
            "Europe",
            Some("Formerly Slush Pool, the first Bitcoin mining pool."),
        ),
        record(
            "6",
            "ZPool Mining",
            "Scrypt",
            "stratum+tcp://scrypt.zpool.ca",
            3433,
            0.5,
            0.01,
            1.2,
            9_870,
            98.4,
            "41 min ago",
            PoolStatus::Active,
            "North America",
            Some("Multi-algorithm auto-exchange pool."),
        ),
        record(
            "7",
            "Luxor",
            "SHA-256",
            "stratum+tcp://btc.global.luxor.tech",
            700,
            0.7,
            0.002,
            18.3,
            15_020,
            99.1,
            "5 hours ago",
            PoolStatus::Maintenance,
            "North America",
            None,
        ),
        record(
            "8",
            "Nanopool",
            "RandomX",
            "stratum+tcp://xmr-eu1.nanopool.org",
            10300,
            1.0,
            0.1,
            0.9,
            9_870,
            97.9,
            "1 hour ago",
            PoolStatus::Active,
            "Europe",
            Some("Monero pool with regional stratum servers."),
        ),
        record(
            "9",
            "2Miners",
            "Equihash",
            "stratum+tcp://zec.2miners.com",
            1010,
            1.0,
            0.01,
            2.4,
            6_300,
            98.9,
            "2 hours ago",
            PoolStatus::Inactive,
            "Europe",
            None,
        ),
        record(
            "10",
            "Binance Pool",
            "SHA-256",
            "stratum+tcp://sha256.poolbinance.com",
            443,
            4.0,
            0.0001,
            45.6,
            40_110,
            99.4,
            "1 hour ago",
            PoolStatus::Active,
            "Asia",
            Some("Exchange-operated pool with FPPS payouts."),
        ),
        record(
            "11",
            "LitecoinPool.org",
            "Scrypt",
            "stratum+tcp://litecoinpool.org",
            3333,
            0.0,
            0.01,
            3.1,
            12_650,
            99.2,
            "20 min ago",
            PoolStatus::Maintenance,
            "Europe",
            None,
        ),
        record(
            "12",
            "SpiderPool",
            "SHA-256",
            "stratum+tcp://btc.spiderpool.com",
            2309,
            2.0,
            0.005,
            12.7,
            15_020,
            96.8,
            "9 hours ago",
            PoolStatus::Inactive,
            "Global",
            None,
        ),
    ]
}
