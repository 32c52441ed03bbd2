//! Tests for fetch and config subcommand parsing.

use super::parse;
use crate::cli::CliCommand;
use clap::Parser;

#[test]
fn cli_parse_fetch_urls() {
    match parse(&["pagefetch", "fetch", "https://a.test/", "https://b.test/x?q=1"]).command {
        CliCommand::Fetch {
            urls,
            file,
            workers,
            json,
        } => {
            assert_eq!(urls, vec!["https://a.test/", "https://b.test/x?q=1"]);
            assert!(file.is_none());
            assert!(workers.is_none());
            assert!(!json);
        }
        _ => panic!("expected Fetch"),
    }
}

#[test]
fn cli_parse_fetch_options() {
    match parse(&[
        "pagefetch",
        "fetch",
        "--file",
        "/tmp/list.txt",
        "-w",
        "4",
        "--json",
    ])
    .command
    {
        CliCommand::Fetch {
            urls,
            file,
            workers,
            json,
        } => {
            assert!(urls.is_empty());
            assert_eq!(file.as_deref(), Some(std::path::Path::new("/tmp/list.txt")));
            assert_eq!(workers, Some(4));
            assert!(json);
        }
        _ => panic!("expected Fetch with options"),
    }
}

#[test]
fn cli_parse_config_with_global_path() {
    let cli = parse(&["pagefetch", "config", "--config", "/etc/pagefetch.toml"]);
    assert!(matches!(cli.command, CliCommand::Config));
    assert_eq!(
        cli.config.as_deref(),
        Some(std::path::Path::new("/etc/pagefetch.toml"))
    );
}

#[test]
fn cli_rejects_non_numeric_workers() {
    assert!(super::Cli::try_parse_from(["pagefetch", "fetch", "-w", "many"]).is_err());
}
