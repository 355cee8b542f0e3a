//! # BNB Wallet
//!
//! Command-line entry point for the wallet core.
//!
//! Every subcommand takes its chain explicitly and prints its result as JSON
//! on stdout; logs go to stderr. The signing key is read from
//! `BNB_PRIVATE_KEY`.

use std::sync::Arc;

use anyhow::{Context, Result};
use bnb_wallet::application::{
    BalanceQueries, BridgeOrchestrator, BridgeRequest, StakeAction, StakeOrchestrator,
    StakeRequest, TransactionDispatcher, TransferOrchestrator, TransferRequest,
};
use bnb_wallet::config::{AppConfig, LogFormat};
use bnb_wallet::domain::entities::Account;
use bnb_wallet::domain::value_objects::{ChainDescriptor, ChainName, SupportedChain};
use bnb_wallet::infrastructure::blockchain::{ChainRegistry, EthersClientFactory, TokenRegistry};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "bnb-wallet",
    version,
    about = "Transfers, bridging and staking on BSC and opBNB"
)]
struct Cli {
    /// Hex private key of the signing account.
    #[arg(long, env = "BNB_PRIVATE_KEY", hide_env_values = true, global = true)]
    private_key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List known chains with their effective RPC endpoints.
    Chains,
    /// Show the account and its native balance on a chain.
    Summary {
        /// Chain to report on.
        #[arg(long)]
        chain: String,
    },
    /// Show a native or token balance.
    Balance(BalanceArgs),
    /// Send native currency or a token.
    Transfer(TransferArgs),
    /// Bridge between BSC and opBNB.
    Bridge(BridgeArgs),
    /// Act on the BSC validator staking hub.
    Stake(StakeArgs),
}

#[derive(Args)]
struct BalanceArgs {
    #[arg(long)]
    chain: String,
    /// Token symbol or address; native currency when omitted.
    #[arg(long)]
    token: Option<String>,
    /// Account to query; the signing account when omitted.
    #[arg(long)]
    owner: Option<String>,
}

#[derive(Args)]
struct TransferArgs {
    #[arg(long)]
    chain: String,
    #[arg(long)]
    to: String,
    /// Token symbol or address; native currency when omitted.
    #[arg(long)]
    token: Option<String>,
    /// Decimal amount; the whole balance when omitted.
    #[arg(long)]
    amount: Option<String>,
    /// Hex call data for native transfers.
    #[arg(long)]
    data: Option<String>,
}

#[derive(Args)]
struct BridgeArgs {
    #[arg(long)]
    from_chain: String,
    #[arg(long)]
    to_chain: String,
    #[arg(long)]
    amount: String,
    /// Token address on the source chain.
    #[arg(long, requires = "to_token")]
    from_token: Option<String>,
    /// Token address on the destination chain.
    #[arg(long, requires = "from_token")]
    to_token: Option<String>,
    /// Recipient; the signing account when omitted.
    #[arg(long)]
    to_address: Option<String>,
}

#[derive(Args)]
struct StakeArgs {
    #[arg(long)]
    chain: String,
    /// delegate, undelegate, redelegate or claim.
    action: StakeAction,
    #[arg(long)]
    amount: Option<String>,
    #[arg(long)]
    from_validator: Option<String>,
    #[arg(long)]
    to_validator: Option<String>,
    /// Keep vote power with the signing account when delegating.
    #[arg(long)]
    no_vote_power: bool,
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_new(&config.log.level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.log.include_target)
        .with_writer(std::io::stderr);

    match config.log.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.pretty().init(),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

struct Wallet {
    registry: Arc<ChainRegistry>,
    dispatcher: TransactionDispatcher,
    tokens: Arc<TokenRegistry>,
    config: AppConfig,
}

impl Wallet {
    async fn connect(config: AppConfig, private_key: Option<&str>) -> Result<Self> {
        let key = private_key.context("BNB_PRIVATE_KEY is not set")?;
        let account = Account::from_private_key(key)?;
        let factory = Arc::new(EthersClientFactory::new(config.client.poll_interval()));
        let overrides = config.rpc_overrides()?;

        let registry =
            Arc::new(ChainRegistry::with_overrides(account, factory, &overrides).await?);
        info!(address = ?registry.address(), "wallet loaded");

        Ok(Self {
            dispatcher: TransactionDispatcher::new(registry.clone()),
            registry,
            tokens: Arc::new(TokenRegistry::with_common_tokens()?),
            config,
        })
    }

    fn queries(&self) -> BalanceQueries {
        BalanceQueries::new(self.dispatcher.clone(), self.tokens.clone())
    }
}

fn catalog(config: &AppConfig) -> Result<Vec<ChainDescriptor>> {
    let overrides = config.rpc_overrides()?;
    SupportedChain::all()
        .iter()
        .map(|chain| -> Result<ChainDescriptor> {
            let rpc = overrides
                .iter()
                .find(|(name, _)| SupportedChain::from_name(name) == Some(*chain))
                .map(|(_, url)| url.as_str());
            Ok(ChainRegistry::derive_from_catalog(
                &ChainName::from(*chain),
                rpc,
            )?)
        })
        .collect()
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config);

    let key = cli.private_key.as_deref();
    match cli.command {
        Commands::Chains => print_json(&catalog(&config)?),
        Commands::Summary { chain } => {
            let wallet = Wallet::connect(config, key).await?;
            wallet.registry.set_current(ChainName::parse(&chain)?).await?;
            print_json(&wallet.queries().summary().await?)
        }
        Commands::Balance(args) => {
            let wallet = Wallet::connect(config, key).await?;
            let balance = wallet
                .queries()
                .balance(&args.chain, args.token.as_deref(), args.owner.as_deref())
                .await?;
            print_json(&balance)
        }
        Commands::Transfer(args) => {
            let wallet = Wallet::connect(config, key).await?;
            let mut request = TransferRequest::new(args.chain, args.to);
            request.token = args.token;
            request.amount = args.amount;
            request.data = args.data;

            let orchestrator =
                TransferOrchestrator::new(wallet.dispatcher.clone(), wallet.tokens.clone());
            print_json(&orchestrator.transfer(&request).await?)
        }
        Commands::Bridge(args) => {
            let wallet = Wallet::connect(config, key).await?;
            let mut request = BridgeRequest::new(args.from_chain, args.to_chain, args.amount);
            request.from_token = args.from_token;
            request.to_token = args.to_token;
            request.to_address = args.to_address;

            let orchestrator = BridgeOrchestrator::new(
                wallet.dispatcher.clone(),
                wallet.config.bridge.delegation_fee(),
                wallet.config.bridge.min_gas_limit,
            );
            print_json(&orchestrator.bridge(&request).await?)
        }
        Commands::Stake(args) => {
            let wallet = Wallet::connect(config, key).await?;
            let mut request = StakeRequest::new(args.chain, args.action)
                .with_vote_power(!args.no_vote_power);
            request.amount = args.amount;
            request.from_validator = args.from_validator;
            request.to_validator = args.to_validator;

            let orchestrator = StakeOrchestrator::new(wallet.dispatcher.clone());
            print_json(&orchestrator.stake(&request).await?)
        }
    }
}
