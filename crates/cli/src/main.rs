//! Command line entry point for the liquidity-depth monitor.
use anyhow::{Context, Result};
use clap::Parser;
use clmm_depth_data::{CsvFileSink, load_roster};
use clmm_depth_domain::entities::{Address, TokenPair};
use clmm_depth_domain::fees::FeeTier;
use clmm_depth_monitor::prelude::*;
use clmm_depth_protocols::uniswap_v3::{FACTORY_ADDRESS, POSITION_MANAGER_ADDRESS};
use clmm_depth_protocols::{UniswapV3Config, UniswapV3Source, connect};
use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "clmm-depth")]
#[command(about = "Tracks each address's share of active liquidity in a Uniswap v3 pool", long_about = None)]
struct Cli {
    /// Ethereum JSON-RPC endpoint
    #[arg(long, env = "RPC_URL")]
    rpc_url: String,

    /// File with one address per line
    #[arg(long, default_value = "addresses.txt")]
    roster: PathBuf,

    /// CSV file records are appended to
    #[arg(long, default_value = "liquidity_log.csv")]
    output: PathBuf,

    /// First token of the pool
    #[arg(long, env = "TOKEN_A")]
    token_a: Address,

    /// Second token of the pool
    #[arg(long, env = "TOKEN_B")]
    token_b: Address,

    /// Pool fee in hundredths of a basis point (500, 3000, 10000)
    #[arg(long, default_value_t = FeeTier::MEDIUM.raw())]
    fee_tier: u32,

    /// Uniswap v3 factory
    #[arg(long, default_value = FACTORY_ADDRESS)]
    factory: Address,

    /// NonfungiblePositionManager
    #[arg(long, default_value = POSITION_MANAGER_ADDRESS)]
    position_manager: Address,

    /// Seconds between poll cycles
    #[arg(long, default_value_t = 60)]
    interval_secs: u64,

    /// Samples in the rolling average
    #[arg(long, default_value_t = 72)]
    window: usize,

    /// Decimals of the pool's token0
    #[arg(long, default_value_t = 18)]
    token0_decimals: u8,

    /// Decimals of the pool's token1
    #[arg(long, default_value_t = 18)]
    token1_decimals: u8,

    /// Per-request RPC timeout in seconds
    #[arg(long, default_value_t = 30)]
    request_timeout_secs: u64,

    /// Run a single cycle and exit
    #[arg(long)]
    once: bool,

    /// Emit logs as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn monitor_config(&self) -> MonitorConfig {
        let mut config = MonitorConfig::new(
            TokenPair::new(self.token_a, self.token_b),
            FeeTier(self.fee_tier),
        );
        config.poll_interval_secs = self.interval_secs;
        config.window_capacity = self.window;
        config.token0_decimals = self.token0_decimals;
        config.token1_decimals = self.token1_decimals;
        config
    }

    fn source_config(&self) -> UniswapV3Config {
        UniswapV3Config {
            factory: self.factory,
            position_manager: self.position_manager,
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.json);

    let roster = load_roster(&cli.roster)
        .await
        .with_context(|| format!("loading roster {}", cli.roster.display()))?;
    info!(addresses = roster.len(), path = %cli.roster.display(), "Roster loaded");

    let provider = connect(&cli.rpc_url).context("building RPC provider")?;
    info!(url = %cli.rpc_url, "📡 RPC provider ready");

    let source = Arc::new(UniswapV3Source::new(Arc::new(provider), cli.source_config()));
    let sink = CsvFileSink::open(&cli.output)
        .with_context(|| format!("opening {}", cli.output.display()))?;

    let mut monitor = Monitor::bootstrap(cli.monitor_config(), source, Box::new(sink), &roster)
        .await
        .context("starting monitor")?;

    if cli.once {
        let outcome = monitor.run_cycle().await;
        info!(?outcome, "Single cycle finished");
        monitor.finish().await?;
    } else {
        monitor.run_until(shutdown_signal()).await?;
    }

    info!(cycles = monitor.cycles(), "Monitor stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN_A: &str = "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2";
    const TOKEN_B: &str = "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48";

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from([
            "clmm-depth",
            "--rpc-url",
            "http://localhost:8545",
            "--token-a",
            TOKEN_A,
            "--token-b",
            TOKEN_B,
        ])
        .unwrap();

        assert_eq!(cli.roster, PathBuf::from("addresses.txt"));
        assert_eq!(cli.output, PathBuf::from("liquidity_log.csv"));
        assert_eq!(cli.factory, FACTORY_ADDRESS.parse::<Address>().unwrap());
        assert!(!cli.once);

        let config = cli.monitor_config();
        assert_eq!(config.fee_tier, FeeTier::MEDIUM);
        assert_eq!(config.poll_interval_secs, 60);
        assert_eq!(config.window_capacity, 72);

        let source = cli.source_config();
        assert_eq!(source.position_manager, POSITION_MANAGER_ADDRESS.parse::<Address>().unwrap());
        assert_eq!(source.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "clmm-depth",
            "--rpc-url",
            "http://localhost:8545",
            "--token-a",
            TOKEN_A,
            "--token-b",
            TOKEN_B,
            "--fee-tier",
            "500",
            "--interval-secs",
            "15",
            "--window",
            "10",
            "--token1-decimals",
            "6",
            "--once",
        ])
        .unwrap();

        let config = cli.monitor_config();
        assert_eq!(config.fee_tier, FeeTier::LOW);
        assert_eq!(config.poll_interval_secs, 15);
        assert_eq!(config.window_capacity, 10);
        assert_eq!(config.token1_decimals, 6);
        assert!(cli.once);
    }

    #[test]
    fn test_rejects_bad_token() {
        let result = Cli::try_parse_from([
            "clmm-depth",
            "--rpc-url",
            "http://localhost:8545",
            "--token-a",
            "0x1234",
            "--token-b",
            TOKEN_B,
        ]);
        assert!(result.is_err());
    }
}
