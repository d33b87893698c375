use color_eyre::Result;
use myflix::api::MovieApiClient;
use myflix::cli::{self, CliCommand, CommandError, TerminalPrompt};
use myflix::config::ClientConfig;
use myflix::logging::init_tracing;

fn main() -> Result<()> {
    let command = cli::parse_args(std::env::args());

    // Commands that need neither a client nor logging
    match &command {
        CliCommand::Version => {
            println!("{}", cli::version_line());
            return Ok(());
        }
        CliCommand::Help => {
            println!("{}", cli::USAGE);
            return Ok(());
        }
        CliCommand::Usage(message) => {
            eprintln!("{}\n\n{}", message, cli::USAGE);
            std::process::exit(2);
        }
        _ => {}
    }

    color_eyre::install()?;

    let config = ClientConfig::from_env();
    init_tracing(config.verbose);
    tracing::debug!(base_url = %config.base_url, "Starting myflix");

    let client = MovieApiClient::from_config(&config)?;
    let runtime = tokio::runtime::Runtime::new()?;

    match runtime.block_on(cli::execute(&client, command, &TerminalPrompt)) {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            match &e {
                CommandError::Api(api) => tracing::error!(
                    code = api.error_code(),
                    category = %api.category(),
                    "{}",
                    api
                ),
                other => tracing::error!("{}", other),
            }
            eprintln!("{}", e.user_message());
            std::process::exit(1);
        }
    }
}
