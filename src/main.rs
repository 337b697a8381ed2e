use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use subcheck::cli::Cli;
use subcheck::config::SubcheckConfig;
use subcheck::runner::Runner;

#[tokio::main]
async fn main() {
    let args = Cli::parse();
    init_logging(args.verbose);

    let result = async {
        let mut config = SubcheckConfig::load(args.config.as_deref())
            .with_context(|| match &args.config {
                Some(path) => format!("failed to load config from {}", path.display()),
                None => "failed to build default config".to_string(),
            })?;

        if let Some(tool) = &args.tool {
            config.tool.program = tool.clone();
        }
        if let Some(timeout) = &args.timeout {
            config.tool.timeout = timeout.clone();
        }
        if args.skip_probe {
            config.skip_probe = true;
        }
        // Surface a bad --timeout before any suite runs.
        config
            .probe_timeout()
            .context("invalid probe timeout")?;

        tracing::debug!(?config, "resolved configuration");

        let runner = Runner::new(config);
        Ok::<_, anyhow::Error>(runner.run(args.selection()).await)
    }
    .await;

    match result {
        Ok(summary) => {
            print!("{}", summary.render());
            std::process::exit(summary.exit_code());
        }
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("subcheck: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "subcheck=debug" } else { "subcheck=info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
