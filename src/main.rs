//! sbmlmsg CLI - compose and inspect SBML validation diagnostics

use clap::Parser;
use std::process::ExitCode;

use sbmlmsg::cli::{Cli, Command};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let data_dir = cli.data_dir.as_deref();

    let result = match &cli.command {
        Command::Explain { code } => sbmlmsg::cli::explain(code, data_dir, cli.json),
        Command::Compose {
            code,
            args,
            variant,
            locale,
            level,
            version,
        } => sbmlmsg::cli::compose(
            code,
            args,
            variant.as_deref(),
            locale,
            *level,
            *version,
            data_dir,
            cli.json,
        ),
        Command::List { namespace } => sbmlmsg::cli::list(namespace.as_deref(), data_dir, cli.json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
