///! # dmeta - Delegate Metadata CLI
///!
///! A stateless command-line front end for the `delegate-meta` codec. Each
///! invocation runs exactly one operation and prints its result to stdout,
///! so it can be chained from shell scripts.
///!
///! ## Commands
///!
///! ```text
///! build  <ID>=<DATA> [<ID>=<DATA> ...]   Build a container from pairs
///! lookup <ID> <BUFFER>                   Print one payload (or "(nil)")
///! append <ID> <DATA> <BUFFER>            Add an entry to a container
///! list   <BUFFER>                        Print the table
///! ```
///!
///! `<ID>` is 8 hex digits. `<DATA>` and `<BUFFER>` are hex strings, or
///! `@path` to read raw bytes from a file.
///!
///! ## Configuration
///!
///! All settings are controlled via environment variables:
///!
///! ```text
///! DMETA_LOG           default log filter, RUST_LOG wins  (default: "warn")
///! DMETA_OUT           write raw bytes here instead of hex (default: unset)
///! DMETA_MAX_INPUT_KB  largest @path input in KiB          (default: 1024)
///! ```
///!
///! ## Example
///!
///! ```text
///! $ dmeta build 11111111=deadbeef
///! 0000...0011111111020000...00deadbeef0000...00
///! $ dmeta lookup 11111111 @meta.bin
///! deadbeef00000000000000000000000000000000000000000000000000000000
///! ```

mod commands;
mod input;

use anyhow::{Context, Result};
use commands::Output;
use config::Config;
use std::fs;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_tracing(cfg: &Config) {
    // Logs go to stderr so stdout stays pipeable.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn emit(cfg: &Config, output: Output) -> Result<()> {
    match output {
        Output::Bytes(bytes) => match &cfg.out {
            Some(path) => {
                fs::write(path, &bytes)
                    .with_context(|| format!("cannot write output file {}", path.display()))?;
                println!("OK {} bytes -> {}", bytes.len(), path.display());
            }
            None => println!("{}", hex::encode(&bytes)),
        },
        Output::NotFound => println!("(nil)"),
        Output::Text(text) => println!("{}", text),
    }
    Ok(())
}

fn main() -> ExitCode {
    let cfg = Config::from_env();
    init_tracing(&cfg);

    let args: Vec<String> = std::env::args().skip(1).collect();
    match commands::run(&cfg, &args).and_then(|out| emit(&cfg, out)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERR {:#}", e);
            ExitCode::FAILURE
        }
    }
}
