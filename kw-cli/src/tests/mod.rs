mod args_test;
mod wait_test;

use clap::Parser;
use kw_testutils::*;
use rstest::*;
use tracing_test::traced_test;

use super::*;

const FAST: [&str; 4] = ["--timeout", "250ms", "--interval", "20ms"];

fn parse(args: &[&str]) -> KwSubcommand {
    KwCommandRoot::try_parse_from(args).unwrap().subcommand
}

fn parse_wait(kind: &str, name: &str, extra: &[&str]) -> wait::Args {
    let mut args = vec!["kwctl", "wait", kind, name];
    args.extend(FAST);
    args.extend(extra);
    let KwSubcommand::Wait(args) = parse(&args) else { panic!("expected a wait subcommand") };
    args
}

fn parse_list(kind: &str, extra: &[&str]) -> list::Args {
    let mut args = vec!["kwctl", "list", kind];
    args.extend(extra);
    let KwSubcommand::List(args) = parse(&args) else { panic!("expected a list subcommand") };
    args
}
