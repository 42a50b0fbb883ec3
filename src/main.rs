// Entrypoint for the CLI application.
// - Keeps `main` small: set up logging, assemble the authenticated API client
//   and hand it to the menu loop.
// - Returns `anyhow::Result`, so any failure exits with a non-zero status.

use intra_cli::config::{persist_token, Config};
use intra_cli::ui::{main_menu, prompt_token};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_env("INTRA_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Endpoint and token come from `INTRA_API_ENDPOINT` / `INTRA_TOKEN`, or
    // from the token persisted by an earlier run.
    let config = Config::from_env()?;
    let token = match &config.token {
        Some(token) => token.clone(),
        None => {
            let token = prompt_token()?;
            persist_token(&token)?;
            token
        }
    };

    let api = config.client(&token)?;
    main_menu(&api)
}
