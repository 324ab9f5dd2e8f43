use clap::CommandFactory;
use clap::ValueEnum;
use crate::commands;
use crate::CommandResult;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[derive(clap::Parser, Debug)]
#[command(
    about = "Inspect and check persisted GraphQL type-resolution descriptors.",
    name = "gql",
    version,
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        global=true,
        help="Logging verbosity. Takes precedence over `--verbose` and the \
             `LOG_LEVEL` environment variable.",
        long,
        value_enum,
    )]
    pub log_level: Option<LogLevel>,

    #[arg(
        global=true,
        help="Enable verbose output (same as `--log-level debug`).",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    /// With no subcommand, prints the usage of every subcommand.
    pub(crate) fn run_default(self) -> CommandResult {
        CommandResult::stdout(format_args!("{}", Self::subcommand_usage()))
    }

    pub(crate) fn subcommand_usage() -> String {
        let mut command = Self::command();
        command.build();
        let mut usage = format!("{}\n", command.render_usage());
        for subcommand in command.get_subcommands_mut() {
            usage.push_str(&format!("\n{}", subcommand.render_long_help()));
        }
        usage
    }

    /// Picks the log level from `--log-level`, then `--verbose`, then the
    /// `LOG_LEVEL` environment value. An unrecognized environment value
    /// falls back to the default and yields a warning to report once
    /// logging is up.
    pub(crate) fn resolve_log_level(
        &self,
        env_val: Option<&str>,
    ) -> (tracing::Level, Option<String>) {
        if let Some(log_level) = self.log_level {
            return (log_level.into(), None);
        }
        if self.verbose {
            return (tracing::Level::DEBUG, None);
        }
        match env_val.map(str::trim) {
            None | Some("") => (DEFAULT_LOG_LEVEL, None),
            Some(val) if val.eq_ignore_ascii_case("verbose") =>
                (tracing::Level::DEBUG, None),
            Some(val) => match LogLevel::from_str(val, true) {
                Ok(log_level) => (log_level.into(), None),
                Err(_) => (
                    DEFAULT_LOG_LEVEL,
                    Some(format!(
                        "Invalid `LOG_LEVEL` environment variable value: \
                        `{val}`"
                    )),
                ),
            },
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, clap::ValueEnum)]
pub(crate) enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}
impl std::convert::From<LogLevel> for tracing::Level {
    fn from(log_level: LogLevel) -> Self {
        match log_level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}
