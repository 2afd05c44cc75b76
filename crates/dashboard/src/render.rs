use crate::summary::{format_hashrate, format_number, PoolsSummary};
use shared::models::pool::PoolRecord;
use shared::models::query::{SortDirection, SortKey, SortSpec};
use std::fmt::Write;

const COLUMNS: [(&str, SortKey, usize); 8] = [
    ("Name", SortKey::Name, 18),
    ("Algorithm", SortKey::Algorithm, 10),
    ("Hashrate", SortKey::Hashrate, 14),
    ("Workers", SortKey::Workers, 10),
    ("Fee", SortKey::Fee, 7),
    ("Uptime", SortKey::Uptime, 8),
    ("Status", SortKey::Status, 12),
    ("Region", SortKey::Region, 14),
];

pub fn render_summary(summary: &PoolsSummary) -> String {
    format!(
        "Total hashrate: {} (across {} pools)\n\
         Total workers:  {}\n\
         Average uptime: {:.1}%\n\
         Active pools:   {} of {}\n",
        format_hashrate(summary.total_hashrate),
        summary.pool_count,
        format_number(summary.total_workers),
        summary.average_uptime,
        summary.active_pools,
        summary.pool_count,
    )
}

fn header_label(label: &str, key: SortKey, sort: Option<&SortSpec>) -> String {
    match sort {
        Some(spec) if spec.key == key => match spec.direction {
            SortDirection::Asc => format!("{label} ^"),
            SortDirection::Desc => format!("{label} v"),
        },
        _ => label.to_string(),
    }
}

/// Fixed-width pool table; the sorted column carries a direction marker.
pub fn render_table(pools: &[PoolRecord], sort: Option<&SortSpec>) -> String {
    let mut out = String::new();
    for (label, key, width) in COLUMNS {
        let _ = write!(out, "{:<width$} ", header_label(label, key, sort));
    }
    out.push('\n');

    if pools.is_empty() {
        out.push_str("No pools match the current filters\n");
        return out;
    }

    for pool in pools {
        let cells = [
            pool.name.clone(),
            pool.algorithm.clone(),
            format_hashrate(pool.hashrate),
            format_number(pool.workers),
            format!("{}%", pool.fee),
            format!("{:.1}%", pool.uptime),
            pool.status.to_string(),
            pool.region.clone(),
        ];
        for (cell, (_, _, width)) in cells.iter().zip(COLUMNS) {
            let _ = write!(out, "{cell:<width$} ");
        }
        out.push('\n');
    }
    out
}

pub fn render_details(pool: &PoolRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", pool.name, pool.id);
    let _ = writeln!(out, "  Endpoint:    {}", pool.endpoint());
    let _ = writeln!(out, "  Algorithm:   {}", pool.algorithm);
    let _ = writeln!(out, "  Status:      {}", pool.status);
    let _ = writeln!(out, "  Region:      {}", pool.region);
    let _ = writeln!(out, "  Hashrate:    {}", format_hashrate(pool.hashrate));
    let _ = writeln!(out, "  Workers:     {}", format_number(pool.workers));
    let _ = writeln!(out, "  Fee:         {}%", pool.fee);
    let _ = writeln!(out, "  Min payout:  {}", pool.min_payout);
    let _ = writeln!(out, "  Uptime:      {:.1}%", pool.uptime);
    let _ = writeln!(out, "  Last block:  {}", pool.last_block);
    if let Some(description) = &pool.description {
        let _ = writeln!(out, "  {description}");
    }
    out
}
