use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use dashboard::render::{render_details, render_summary, render_table};
use dashboard::state::PoolsStore;
use dashboard::summary::PoolsSummary;
use log::{debug, LevelFilter};
use shared::client::hooks::{UsePoolDetails, UsePools};
use shared::client::PoolsClient;
use shared::models::query::{FilterCriteria, FilterUpdate, SortDirection, SortKey, SortSpec};

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
enum Source {
    /// Filter the built-in dataset in-process
    Local,
    /// Query a running pools API
    Remote,
}

#[derive(Parser)]
struct Args {
    /// Where pool data comes from
    #[arg(long, value_enum, default_value = "local")]
    source: Source,

    /// Pools API base URL, used with --source remote
    #[arg(short = 'u', long, default_value = "http://localhost:3000")]
    api_url: String,

    /// Exact algorithm match
    #[arg(long)]
    algorithm: Option<String>,

    /// Exact status match: active, inactive or maintenance
    #[arg(long)]
    status: Option<String>,

    /// Exact region match
    #[arg(long)]
    region: Option<String>,

    /// Case-insensitive search over name, algorithm and region
    #[arg(short = 's', long)]
    search: Option<String>,

    /// Pool field to sort by, e.g. hashrate or minPayout
    #[arg(long)]
    sort_by: Option<String>,

    /// Sort direction: asc or desc
    #[arg(long, default_value = "asc")]
    direction: String,

    /// Show the details of one pool instead of the table
    #[arg(short = 'd', long)]
    details: Option<String>,

    /// Log level
    #[arg(short = 'l', long, default_value = "warn")]
    log_level: String,
}

impl Args {
    fn filter_update(&self) -> FilterUpdate {
        FilterUpdate {
            algorithm: self.algorithm.clone(),
            status: self.status.clone(),
            region: self.region.clone(),
            search: self.search.clone(),
        }
    }

    fn sort_spec(&self) -> Result<Option<SortSpec>> {
        let Some(sort_by) = &self.sort_by else {
            return Ok(None);
        };
        let key: SortKey = sort_by.parse()?;
        let direction: SortDirection = self.direction.parse()?;
        Ok(Some(SortSpec::new(key, direction)))
    }
}

fn run_local(args: &Args) -> Result<()> {
    let mut store = PoolsStore::with_mock_pools();

    if let Some(id) = &args.details {
        let pool = store
            .pools()
            .iter()
            .find(|pool| &pool.id == id)
            .cloned()
            .ok_or_else(|| anyhow!("Pool not found"))?;
        store.select(pool);
        if let Some(pool) = store.selected_pool() {
            print!("{}", render_details(pool));
        }
        return Ok(());
    }

    store.set_filters(args.filter_update());
    store.set_sort(args.sort_spec()?);
    store.apply_filters_and_sort();

    let summary = PoolsSummary::from_pools(store.filtered_pools());
    print!("{}", render_summary(&summary));
    println!();
    print!("{}", render_table(store.filtered_pools(), store.sort()));
    Ok(())
}

async fn run_remote(args: &Args) -> Result<()> {
    let client = PoolsClient::new(&args.api_url)?;
    debug!("Using pools API at {}", client.base_url());

    if let Some(id) = &args.details {
        let details = UsePoolDetails::new(client);
        let state = details.set_id(id).await;
        if let Some(error) = state.error {
            return Err(anyhow!(error));
        }
        let pool = state.data.context("Pool not found")?;
        print!("{}", render_details(&pool));
        return Ok(());
    }

    let mut criteria = FilterCriteria::default();
    criteria.merge(args.filter_update());
    let sort = args.sort_spec()?;

    let pools = UsePools::new(client);
    let state = pools.set_params(criteria, sort).await;
    if let Some(error) = state.error {
        return Err(anyhow!(error));
    }
    let pools = state.data.unwrap_or_default();

    let summary = PoolsSummary::from_pools(&pools);
    print!("{}", render_summary(&summary));
    println!();
    print!("{}", render_table(&pools, sort.as_ref()));
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Warn,
    };
    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp(None)
        .init();

    match args.source {
        Source::Local => run_local(&args),
        Source::Remote => run_remote(&args).await,
    }
}
