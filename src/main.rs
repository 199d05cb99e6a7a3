use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use vcs_gutter::stdio::{open_requests, StdioServer};
use vcs_gutter::{logging, GutterCommand, GutterConfig};

struct Args {
    config: Option<PathBuf>,
    input: Option<PathBuf>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        config: None,
        input: None,
    };
    let mut iter = std::env::args().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = iter.next().ok_or("--config needs a path")?;
                args.config = Some(PathBuf::from(path));
            }
            "-" => args.input = None,
            other if other.starts_with('-') => return Err(format!("unknown flag: {}", other)),
            other => args.input = Some(PathBuf::from(other)),
        }
    }

    Ok(args)
}

fn run(args: Args) -> vcs_gutter::Result<usize> {
    let config = match &args.config {
        Some(path) => GutterConfig::load(path)?,
        None => GutterConfig::default(),
    };
    let server = StdioServer::new(GutterCommand::new(config));
    let stdout = io::stdout().lock();

    let served = match &args.input {
        Some(path) => server.serve(open_requests(path)?, stdout)?,
        None => server.serve(io::stdin().lock(), stdout)?,
    };

    Ok(served)
}

fn main() -> ExitCode {
    logging::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("vcs-gutter: {}", msg);
            eprintln!("usage: vcs-gutter [--config <file>] [requests.jsonl | -]");
            return ExitCode::from(2);
        }
    };

    tracing::info!("vcs-gutter started");
    match run(args) {
        Ok(drawn) => {
            tracing::info!(drawn, "input exhausted, exiting");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "vcs-gutter failed");
            eprintln!("vcs-gutter: {}", e);
            ExitCode::FAILURE
        }
    }
}
