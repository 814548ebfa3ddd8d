mod cluster;
mod exists;
mod kinds;
mod list;
mod wait;

use clap::{
    Parser,
    Subcommand,
    crate_version,
};
use kw_core::logging;
use kw_core::prelude::*;

#[derive(Parser)]
#[command(
    about = "command-line app for waiting on Kubernetes operator resources",
    version,
    propagate_version = true
)]
struct KwCommandRoot {
    #[command(subcommand)]
    subcommand: KwSubcommand,

    #[arg(short, long, default_value = "warn")]
    verbosity: String,
}

#[derive(Subcommand)]
enum KwSubcommand {
    #[command(about = "wait for an object to become ready", visible_alias = "w")]
    Wait(wait::Args),

    #[command(about = "list objects of a kind", visible_aliases = &["ls", "get"])]
    List(list::Args),

    #[command(about = "wait for an object of any kind to exist, using API discovery")]
    Exists(exists::Args),

    #[command(about = "kwctl version")]
    Version,
}

#[tokio::main]
async fn main() -> EmptyResult {
    let args = KwCommandRoot::parse();
    logging::setup_for_cli(&args.verbosity);

    match &args.subcommand {
        KwSubcommand::Wait(args) => {
            let (client, ns) = args.cluster.connect().await?;
            let target = wait::cmd(args, client, &ns).await?;
            let state = if args.kind.has_readiness() { "is ready" } else { "exists" };
            println!("{:?} {target} {state}", args.kind);
        },
        KwSubcommand::List(args) => {
            let (client, ns) = args.cluster.connect().await?;
            print!("{}", list::cmd(args, client, &ns).await?);
        },
        KwSubcommand::Exists(args) => {
            let (client, ns) = args.cluster.connect().await?;
            let target = exists::cmd(args, client, &ns).await?;
            println!("{} {target} exists", args.gvk);
        },
        KwSubcommand::Version => println!("kwctl {}", crate_version!()),
    }

    Ok(())
}

#[cfg(test)]
mod tests;
