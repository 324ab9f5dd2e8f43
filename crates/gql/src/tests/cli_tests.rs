use crate::Cli;
use crate::CommandResult;
use crate::cli::LogLevel;
use clap::Parser;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).expect("valid command line")
}

#[test]
fn no_subcommand_prints_descriptor_usage() {
    let cli = parse(&["gql"]);
    assert!(cli.cmd.is_none());

    let result = cli.run_default();
    assert!(result.is_success());
    assert!(result.stderr.is_none());
    let stdout = result.stdout.expect("usage on stdout");
    assert!(stdout.contains("gql descriptor"));
    assert!(stdout.contains("FILE_OR_DIR_PATHS"));
    assert!(stdout.contains("--descriptor-file-exts"));
}

#[test]
fn descriptor_requires_a_path() {
    assert!(Cli::try_parse_from(["gql", "descriptor"]).is_err());
    assert!(parse(&["gql", "descriptor", "schema.json"]).cmd.is_some());
}

#[test]
fn log_level_flag_beats_verbose_and_env() {
    let cli = parse(&["gql", "-v", "--log-level", "trace"]);
    assert_eq!(cli.log_level, Some(LogLevel::Trace));
    assert_eq!(
        cli.resolve_log_level(Some("error")),
        (tracing::Level::TRACE, None),
    );

    let cli = parse(&["gql", "descriptor", "schema.json", "--verbose"]);
    assert_eq!(
        cli.resolve_log_level(Some("error")),
        (tracing::Level::DEBUG, None),
    );
}

#[test]
fn env_log_level_is_case_insensitive() {
    let cli = parse(&["gql"]);
    assert_eq!(cli.resolve_log_level(None), (tracing::Level::INFO, None));
    assert_eq!(
        cli.resolve_log_level(Some(" WARN ")),
        (tracing::Level::WARN, None),
    );
    assert_eq!(
        cli.resolve_log_level(Some("Verbose")),
        (tracing::Level::DEBUG, None),
    );
}

#[test]
fn unknown_env_log_level_falls_back_with_a_warning() {
    let cli = parse(&["gql"]);
    let (log_level, warning) = cli.resolve_log_level(Some("chatty"));
    assert_eq!(log_level, tracing::Level::INFO);
    assert!(warning.is_some_and(|warning| warning.contains("`chatty`")));
}

#[test]
fn stderr_results_fail() {
    let result = CommandResult::stderr(format_args!("nope"));
    assert!(!result.is_success());
    assert_eq!(result.stderr.as_deref(), Some("nope"));
}
