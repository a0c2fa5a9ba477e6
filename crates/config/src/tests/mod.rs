use super::*;
use std::collections::HashMap;

fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = Config::from_lookup(lookup_in(&[]));
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.log, "warn");
    assert_eq!(cfg.out, None);
    assert_eq!(cfg.max_input_bytes, 1024 * 1024);
}

#[test]
fn reads_every_variable() {
    let cfg = Config::from_lookup(lookup_in(&[
        ("DMETA_LOG", "delegate_meta=debug"),
        ("DMETA_OUT", "/tmp/out.bin"),
        ("DMETA_MAX_INPUT_KB", "4"),
    ]));
    assert_eq!(cfg.log, "delegate_meta=debug");
    assert_eq!(cfg.out, Some(PathBuf::from("/tmp/out.bin")));
    assert_eq!(cfg.max_input_bytes, 4096);
}

#[test]
fn invalid_number_falls_back_to_default() {
    let cfg = Config::from_lookup(lookup_in(&[("DMETA_MAX_INPUT_KB", "lots")]));
    assert_eq!(cfg.max_input_bytes, DEFAULT_MAX_INPUT_KB * 1024);
}

#[test]
fn empty_out_path_is_ignored() {
    let cfg = Config::from_lookup(lookup_in(&[("DMETA_OUT", "")]));
    assert_eq!(cfg.out, None);
}
