use clap::Parser;
use std::path::PathBuf;
use std::process;

mod commands;
mod errors;
mod label;
mod logger;
mod xattr;

use commands::apply::ApplyCommand;
use commands::query::QueryCommand;
use commands::Command;
use label::RequestedLabelSet;

#[derive(Parser)]
#[command(name = "chsmack")]
#[command(about = "Set or query SMACK labels on files")]
#[command(version = "1.0.0")]
struct Cli {
    /// Set the access label (security.SMACK64)
    #[arg(short = 'a', long = "access", value_name = "label")]
    access: Option<String>,

    /// Set the execution label (security.SMACK64EXEC)
    #[arg(short = 'e', long = "exec", value_name = "label")]
    exec: Option<String>,

    /// Set the mmap label (security.SMACK64MMAP)
    #[arg(short = 'm', long = "mmap", value_name = "label")]
    mmap: Option<String>,

    /// Set the transmute attribute (security.SMACK64TRANSMUTE)
    #[arg(short = 't', long = "transmute")]
    transmute: bool,

    /// Target paths, processed in the order given
    #[arg(required = true, value_name = "path")]
    paths: Vec<PathBuf>,
}

fn main() {
    logger::init().unwrap_or_else(|e| {
        eprintln!("failed to initialize logging: {}", e);
        process::exit(1);
    });

    // Unrecognized options exit with status 1, not clap's default.
    let cli = Cli::try_parse().unwrap_or_else(|e| {
        let _ = e.print();
        match e.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                process::exit(0)
            }
            _ => process::exit(1),
        }
    });

    // All label values are validated before any path is touched; an
    // over-length label aborts the whole invocation.
    let labels = RequestedLabelSet::from_options(cli.access, cli.exec, cli.mmap, cli.transmute)
        .unwrap_or_else(|e| {
            eprintln!("chsmack: {}.", e);
            process::exit(1);
        });

    let result = if labels.has_any() {
        let cmd = ApplyCommand::new(cli.paths, labels);
        cmd.execute()
    } else {
        let cmd = QueryCommand::new(cli.paths);
        cmd.execute()
    };

    if let Err(e) = result {
        eprintln!("chsmack: {}", e);
        process::exit(1);
    }
}
