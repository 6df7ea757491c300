use std::io::Read;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use leanadvice::cli::Commands;
use leanadvice::{
    extract_plan, AdviceViewModel, CallableTransport, CurrentUserProvider, EnvUserProvider,
    FunctionsConfig, HttpsCallableTransport, MockCallableTransport, RemoteAdviceClient,
    SerialUiExecutor, StaticUserProvider,
};

#[derive(Parser)]
#[command(name = "leanadvice")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Answer from an in-process mock instead of the cloud function
    #[arg(long, global = true)]
    mock: bool,

    /// Cloud project hosting the function (overrides LEANADVICE_PROJECT_ID)
    #[arg(short, long, global = true)]
    project: Option<String>,

    /// Base URL override, e.g. a local emulator (overrides LEANADVICE_FUNCTIONS_URL)
    #[arg(long, global = true)]
    functions_url: Option<String>,

    /// Bearer token forwarded to the function (overrides LEANADVICE_ID_TOKEN)
    #[arg(long, global = true)]
    id_token: Option<String>,

    /// Request timeout in seconds; no timeout when unset
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn functions_config(&self) -> FunctionsConfig {
        let mut config = FunctionsConfig::from_env();
        if let Some(project) = &self.project {
            config = config.with_project_id(project);
        }
        if let Some(url) = &self.functions_url {
            config = config.with_base_url(url);
        }
        if let Some(token) = &self.id_token {
            config = config.with_id_token(token);
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match &cli.command {
        Commands::Advice { user } => {
            let transport: Arc<dyn CallableTransport> = if cli.mock {
                info!("Using mock callable transport");
                Arc::new(MockCallableTransport::new())
            } else {
                let config = cli.functions_config();
                info!(
                    "Calling functions at {}",
                    config.functions_base_url().context("invalid functions configuration")?
                );
                Arc::new(HttpsCallableTransport::new(config)?)
            };

            let users: Arc<dyn CurrentUserProvider> = match user {
                Some(id) => Arc::new(StaticUserProvider::signed_in(id)),
                None => Arc::new(EnvUserProvider),
            };

            let view_model = AdviceViewModel::new(
                Arc::new(RemoteAdviceClient::new(transport)),
                users,
                Arc::new(SerialUiExecutor::spawn()),
            );

            let mut updates = view_model.subscribe();
            view_model.request_advice();
            let state = updates
                .wait_for(|state| !state.is_loading)
                .await
                .context("advice state closed before the request settled")?
                .clone();

            if let Some(error) = state.error {
                bail!(error);
            }
            println!("{}", state.advice);
        }

        Commands::Extract { path } => {
            let raw = match path {
                Some(path) => std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("failed to read stdin")?;
                    buf
                }
            };
            println!("{}", extract_plan(&raw));
        }
    }

    Ok(())
}
