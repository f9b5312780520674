use clap::{ArgAction, Parser};
use std::path::PathBuf;

mod commands;
mod logging;
mod output;

#[derive(Parser, Debug)]
#[command(name = "arrcleaner")]
#[command(about = "Arr Cleaner - See what your household has watched before you clean up Radarr and Sonarr")]
#[command(version)]
struct Cli {
    /// Directory holding config.toml and credentials.toml
    #[arg(long, value_name = "DIR", env = watch_report_config::CONFIG_DIR_ENV)]
    config_dir: Option<PathBuf>,

    /// Address to bind the report server to (overrides [server].host)
    #[arg(long, value_name = "HOST")]
    host: Option<String>,

    /// Port to bind the report server to (overrides [server].port)
    #[arg(long, value_name = "PORT")]
    port: Option<u16>,

    /// Also write logs to this file, rotated daily
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,

    /// Output format
    #[arg(long, default_value = "human", value_enum)]
    output: output::OutputFormat,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    logging::init_logging_with_file(cli.verbose, cli.quiet, cli.log_file.clone())
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    let options = commands::run::RunOptions {
        config_dir: cli.config_dir,
        host: cli.host,
        port: cli.port,
    };
    commands::run::run(options, &output).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_flags() {
        let cli = Cli::try_parse_from(["arrcleaner"]).unwrap();
        assert_eq!(cli.host, None);
        assert_eq!(cli.port, None);
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
        assert_eq!(cli.output, output::OutputFormat::Human);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "arrcleaner",
            "--config-dir",
            "/etc/arrcleaner",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "-vv",
            "--output",
            "json-pretty",
        ])
        .unwrap();
        assert_eq!(cli.config_dir, Some(PathBuf::from("/etc/arrcleaner")));
        assert_eq!(cli.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(cli.port, Some(9000));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.output, output::OutputFormat::JsonPretty);
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(Cli::try_parse_from(["arrcleaner", "--port", "99999"]).is_err());
    }
}
