//! One function per `dmeta` command. Each call decodes its arguments, runs a
//! single codec operation, and hands back what should be printed. Nothing is
//! carried over between invocations.

use anyhow::{bail, Result};
use config::Config;
use delegate_meta::{Identifier, MetadataView, MIN_CONTAINER_BYTES, WORD_BYTES};
use tracing::info;

use crate::input::{read_bytes, read_identifier, read_pair};

/// What a command produced.
#[derive(Debug, PartialEq, Eq)]
pub enum Output {
    /// A container or payload.
    Bytes(Vec<u8>),
    /// `lookup` found nothing.
    NotFound,
    /// Human-readable lines (`list`, `help`).
    Text(String),
}

pub const USAGE: &str = "\
Usage:
  dmeta build  <ID>=<DATA> [<ID>=<DATA> ...]
  dmeta lookup <ID> <BUFFER>
  dmeta append <ID> <DATA> <BUFFER>
  dmeta list   <BUFFER>

<ID> is 8 hex digits. <DATA> and <BUFFER> are hex, or @path to read raw bytes.";

/// Dispatches `args` (without the program name).
pub fn run(cfg: &Config, args: &[String]) -> Result<Output> {
    let Some((cmd, rest)) = args.split_first() else {
        return Ok(Output::Text(USAGE.to_string()));
    };

    match cmd.to_uppercase().as_str() {
        "BUILD" => build(cfg, rest),
        "LOOKUP" => match rest {
            [id, buf] => lookup(cfg, id, buf),
            _ => bail!("usage: dmeta lookup <ID> <BUFFER>"),
        },
        "APPEND" => match rest {
            [id, data, buf] => append(cfg, id, data, buf),
            _ => bail!("usage: dmeta append <ID> <DATA> <BUFFER>"),
        },
        "LIST" => match rest {
            [buf] => list(cfg, buf),
            _ => bail!("usage: dmeta list <BUFFER>"),
        },
        "HELP" | "-H" | "--HELP" => Ok(Output::Text(USAGE.to_string())),
        other => bail!("unknown command: {}", other.to_lowercase()),
    }
}

fn build(cfg: &Config, pairs: &[String]) -> Result<Output> {
    if pairs.is_empty() {
        bail!("usage: dmeta build <ID>=<DATA> [<ID>=<DATA> ...]");
    }
    let mut ids: Vec<Identifier> = Vec::with_capacity(pairs.len());
    let mut payloads: Vec<Vec<u8>> = Vec::with_capacity(pairs.len());
    for pair in pairs {
        let (id, payload) = read_pair(pair, cfg)?;
        ids.push(id);
        payloads.push(payload);
    }
    info!(entries = ids.len(), "build");
    Ok(Output::Bytes(delegate_meta::build(&ids, &payloads)?))
}

fn lookup(cfg: &Config, id: &str, buf: &str) -> Result<Output> {
    let id = read_identifier(id)?;
    let buf = read_bytes(buf, cfg)?;
    info!(%id, len = buf.len(), "lookup");
    Ok(match delegate_meta::lookup(id, &buf) {
        Some(payload) => Output::Bytes(payload.to_vec()),
        None => Output::NotFound,
    })
}

fn append(cfg: &Config, id: &str, data: &str, buf: &str) -> Result<Output> {
    let id = read_identifier(id)?;
    let payload = read_bytes(data, cfg)?;
    let original = read_bytes(buf, cfg)?;
    info!(%id, len = original.len(), "append");
    Ok(Output::Bytes(delegate_meta::append(id, &payload, &original)?))
}

fn list(cfg: &Config, buf: &str) -> Result<Output> {
    let buf = read_bytes(buf, cfg)?;
    if buf.len() < MIN_CONTAINER_BYTES {
        return Ok(Output::Text("(empty)".to_string()));
    }
    let view = MetadataView::parse(&buf)?;

    let mut lines = Vec::with_capacity(view.len() + 1);
    for (i, entry) in view.entries().iter().enumerate() {
        let words = view.payload_of(i).map_or(0, |p| p.len() / WORD_BYTES);
        lines.push(format!("{} @{} {}w", entry.id, entry.word_offset, words));
    }
    lines.push(format!("({} entries)", view.len()));
    Ok(Output::Text(lines.join("\n")))
}
