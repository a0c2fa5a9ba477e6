use anyhow::{bail, Context, Result};
use config::Config;
use delegate_meta::Identifier;
use std::fs;

/// Decodes a `<DATA>` / `<BUFFER>` argument: `@path` reads raw bytes from a
/// file, anything else is a hex string (an optional `0x` prefix is allowed,
/// and an empty string is an empty payload).
pub fn read_bytes(arg: &str, cfg: &Config) -> Result<Vec<u8>> {
    if let Some(path) = arg.strip_prefix('@') {
        let len = fs::metadata(path)
            .with_context(|| format!("cannot stat input file {}", path))?
            .len();
        if len > cfg.max_input_bytes as u64 {
            bail!(
                "input file {} is {} bytes, limit is {} (DMETA_MAX_INPUT_KB)",
                path,
                len,
                cfg.max_input_bytes
            );
        }
        return fs::read(path).with_context(|| format!("cannot read input file {}", path));
    }

    let digits = arg.strip_prefix("0x").unwrap_or(arg);
    hex::decode(digits).with_context(|| format!("invalid hex input {:?}", arg))
}

/// Parses an `<ID>` argument (8 hex digits).
pub fn read_identifier(arg: &str) -> Result<Identifier> {
    Ok(arg.parse::<Identifier>()?)
}

/// Splits a `<ID>=<DATA>` build argument.
pub fn read_pair(arg: &str, cfg: &Config) -> Result<(Identifier, Vec<u8>)> {
    let Some((id, data)) = arg.split_once('=') else {
        bail!("expected <ID>=<DATA>, got {:?}", arg);
    };
    Ok((read_identifier(id)?, read_bytes(data, cfg)?))
}
