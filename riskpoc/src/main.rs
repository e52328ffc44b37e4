//! ClickHouse table inspection CLI.
//!
//! Connects to a ClickHouse server, lists the tables in a database, and
//! prints a formatted report. Every command is a single linear
//! request/response; errors surface here and map to exit code 1.

use clap::{ArgAction, Args, Parser, Subcommand};
use riskpoc_core::{
    ClickHouseAdapter, ConnectionConfig, Result, RiskPocError, enumeration::list_tables,
    init_logging, report::render_tables,
};

#[derive(Debug, Parser)]
#[command(name = "risk_poc")]
#[command(about = "ClickHouse risk evaluation data generator")]
#[command(version, disable_version_flag = true)]
struct Cli {
    /// Print version and exit.
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,

    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct GlobalArgs {
    /// Increase log verbosity (--verbose, --verbose --verbose)
    #[arg(long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Connect to ClickHouse and list all tables in the database
    ListTablesCmd(ConnectArgs),
    /// Test connection to ClickHouse server
    TestConnection(ConnectArgs),
}

#[derive(Debug, Args)]
struct ConnectArgs {
    /// ClickHouse server host
    #[arg(long, default_value = "localhost")]
    host: String,

    /// ClickHouse server port
    #[arg(long, default_value_t = 8123)]
    port: u16,

    /// Database name
    #[arg(long, default_value = "risk_poc")]
    database: String,

    /// Username for authentication
    #[arg(long, default_value = "default")]
    user: String,

    /// Password for authentication
    #[arg(long, default_value = "")]
    password: String,
}

impl ConnectArgs {
    fn to_config(&self) -> ConnectionConfig {
        ConnectionConfig::new(self.host.clone())
            .with_port(self.port)
            .with_database(self.database.clone())
            .with_username(self.user.clone())
            .with_password(self.password.clone())
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.global.verbose, cli.global.quiet) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let result = match &cli.command {
        Command::ListTablesCmd(args) => list_tables_cmd(args).await,
        Command::TestConnection(args) => test_connection(args).await,
    };

    if let Err(e) = result {
        report_error(&e);
        std::process::exit(1);
    }
}

/// Connects, lists the tables in the selected database, and prints the
/// formatted report.
async fn list_tables_cmd(args: &ConnectArgs) -> Result<()> {
    let config = args.to_config();
    let client = ClickHouseAdapter::connect(&config).await?;
    let tables = list_tables(&client, Some(config.database.as_str())).await?;

    let stdout = std::io::stdout();
    render_tables(&mut stdout.lock(), &tables, &config.database)
}

/// Connects and prints the server version.
async fn test_connection(args: &ConnectArgs) -> Result<()> {
    let config = args.to_config();
    let client = ClickHouseAdapter::connect(&config).await?;
    let version = client.server_version().await?;

    println!("✓ Connection successful!");
    println!("Server info: {version}");
    Ok(())
}

/// Prints the error and its cause chain to stderr.
fn report_error(err: &RiskPocError) {
    eprintln!("Error: {err}");
    let mut cause = std::error::Error::source(err);
    while let Some(source) = cause {
        eprintln!("  caused by: {source}");
        cause = source.source();
    }
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
    fn test_list_tables_cmd_defaults() {
        let cli = Cli::try_parse_from(["risk_poc", "list-tables-cmd"]).unwrap();

        let Command::ListTablesCmd(args) = cli.command else {
            panic!("expected list-tables-cmd");
        };
        assert_eq!(args.host, "localhost");
        assert_eq!(args.port, 8123);
        assert_eq!(args.database, "risk_poc");
        assert_eq!(args.user, "default");
        assert_eq!(args.password, "");
    }

    #[test]
    fn test_connect_args_overrides() {
        let cli = Cli::try_parse_from([
            "risk_poc",
            "test-connection",
            "--host",
            "ch.example.com",
            "--port",
            "9000",
            "--database",
            "analytics",
            "--user",
            "reader",
            "--password",
            "secret",
        ])
        .unwrap();

        let Command::TestConnection(args) = cli.command else {
            panic!("expected test-connection");
        };
        assert_eq!(args.host, "ch.example.com");
        assert_eq!(args.port, 9000);
        assert_eq!(args.database, "analytics");
        assert_eq!(args.user, "reader");
        assert_eq!(args.password, "secret");
    }

    #[test]
    fn test_user_flag_maps_to_username() {
        let cli =
            Cli::try_parse_from(["risk_poc", "test-connection", "--user", "reader"]).unwrap();

        let Command::TestConnection(args) = cli.command else {
            panic!("expected test-connection");
        };
        let config = args.to_config();
        assert_eq!(config.username, "reader");
    }

    #[test]
    fn test_quiet_and_verbose_flags() {
        let cli = Cli::try_parse_from(["risk_poc", "list-tables-cmd", "--quiet"]).unwrap();
        assert!(cli.global.quiet);
        assert_eq!(cli.global.verbose, 0);

        let cli = Cli::try_parse_from([
            "risk_poc",
            "list-tables-cmd",
            "--verbose",
            "--verbose",
        ])
        .unwrap();
        assert_eq!(cli.global.verbose, 2);
    }

    #[test]
    fn test_version_flag_short_circuits() {
        let err = Cli::try_parse_from(["risk_poc", "-v"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }
}
