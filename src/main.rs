#![deny(warnings)]

use std::{process::ExitCode, sync::Arc};

use clap::Parser;
use color_eyre::eyre::Result;
use tokio::sync::Mutex;

use pctui::{
    domain::route::Route,
    infrastructure::{
        cli::{Cli, Command},
        config::Config,
        tui::real::RealTui,
    },
    integration::{app_runner::AppRunner, oneshot},
    utils::{initialize_logging, initialize_panic_handler},
};

fn eval(route: Route, a: &str, b: &str, json: bool) -> Result<ExitCode> {
    let report = oneshot::evaluate(route, a, b)?;
    if json {
        println!("{}", report.to_json()?);
    } else if let Some(formatted) = &report.formatted {
        println!("{formatted}");
    }

    Ok(if report.is_present() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

async fn tokio_main(args: Cli) -> Result<ExitCode> {
    initialize_logging()?;

    initialize_panic_handler()?;

    match args.command {
        Some(Command::Eval { route, a, b, json }) => return eval(route, &a, &b, json),
        Some(Command::List) => {
            for line in oneshot::list_lines() {
                println!("{line}");
            }
            return Ok(ExitCode::SUCCESS);
        }
        None => {}
    }

    // Load configuration (file-based)
    let config = Config::new()?;

    let tui = Arc::new(Mutex::new(
        RealTui::new()?
            .tick_rate(args.tick_rate)
            .frame_rate(args.frame_rate),
    ));
    let mut runner = AppRunner::new(config, args.route, tui)?;
    runner.run().await?;

    Ok(ExitCode::SUCCESS)
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = <Cli as Parser>::parse();
    match tokio_main(args).await {
        Ok(code) => Ok(code),
        Err(e) => {
            eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
            Err(e)
        }
    }
}
