//! nquill binary entry point.

use clap::Parser;
use nquill::cli::{Cli, CliError, Command, cmd_apply, cmd_describe, cmd_render};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Render { manifest } => {
            print!("{}", cmd_render(&manifest)?);
        }
        Command::Apply {
            manifest,
            conn,
            space,
        } => {
            for line in cmd_apply(&manifest, &conn, space).await? {
                println!("{line}");
            }
        }
        Command::Describe {
            tag,
            conn,
            space,
            json,
        } => {
            print!("{}", cmd_describe(&conn, &space, &tag, json).await?);
        }
    }
    Ok(())
}
