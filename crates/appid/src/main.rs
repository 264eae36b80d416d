use anyhow::Context;
use appid_core::config::loader::ConfigLoader;
use appid_core::config::schema::AppIdConfig;
use appid_core::context::ResolutionContext;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "appid",
    version,
    about = "Resolve the application id under test"
)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Config file (defaults to ./appids.yaml, then ~/.appid/config.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve the identifier for a platform and print it as appIdUnderTest
    Resolve {
        /// Platform reported by the harness (e.g. android, ios)
        #[arg(long, env = "MAESTRO_PLATFORM")]
        platform: Option<String>,

        /// Fail on unrecognized platforms instead of falling back
        #[arg(long)]
        strict: bool,

        #[arg(long, value_enum, default_value_t = OutputFormat::Env)]
        format: OutputFormat,
    },
    /// Print the effective identifier table
    Show,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// appIdUnderTest=<id>
    Env,
    /// {"appIdUnderTest":"<id>"}
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr, stdout carries the resolved value
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let mut config = load_config(args.config.as_ref()).await?;

    match args.command {
        Command::Resolve {
            platform,
            strict,
            format,
        } => {
            if strict {
                config.fallback.force_strict();
            }
            let resolver = config.into_resolver()?;
            let mut context = ResolutionContext {
                platform,
                app_id_under_test: None,
            };
            resolver.apply(&mut context)?;
            debug!(
                "Resolved {:?} to {:?}",
                context.platform, context.app_id_under_test
            );

            let output = context
                .output()
                .context("Resolution produced no identifier")?;
            match format {
                OutputFormat::Env => println!("{}", output.to_env_line()),
                OutputFormat::Json => println!("{}", serde_json::to_string(&output)?),
            }
        }
        Command::Show => {
            let resolver = config.into_resolver()?;
            for (platform, identifier) in resolver.table().iter() {
                println!("{}\t{}", platform, identifier);
            }
            println!("fallback\t{}", resolver.policy());
        }
    }

    Ok(())
}

async fn load_config(path: Option<&PathBuf>) -> anyhow::Result<AppIdConfig> {
    match path {
        Some(path) => ConfigLoader::load_from(path)
            .await
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => ConfigLoader::load_default()
            .await
            .context("Failed to load config"),
    }
}
