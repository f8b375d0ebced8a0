use super::*;
use pretty_assertions::assert_eq;
use std::collections::HashMap;

fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn test_defaults() {
    let config = HashConfig::default();
    assert_eq!(config.max_depth, 4096);
    assert_eq!(config.parallel_threshold, 16 * 1024);
}

#[test]
fn test_sequential_never_parallel() {
    let config = HashConfig::sequential();
    assert_eq!(config.parallel_threshold, usize::MAX);
    assert_eq!(config.max_depth, HashConfig::default().max_depth);
}

#[test]
fn test_lookup_overrides() {
    let config = HashConfig::from_lookup(lookup_from(&[
        (MAX_DEPTH_ENV, "64"),
        (PARALLEL_THRESHOLD_ENV, " 128 "),
    ]));
    assert_eq!(
        config,
        HashConfig {
            max_depth: 64,
            parallel_threshold: 128,
        }
    );
}

#[test]
fn test_invalid_values_are_ignored() {
    let config = HashConfig::from_lookup(lookup_from(&[
        (MAX_DEPTH_ENV, "deep"),
        (PARALLEL_THRESHOLD_ENV, "-1"),
    ]));
    assert_eq!(config, HashConfig::default());
}

#[test]
fn test_builders() {
    let config = HashConfig::default()
        .with_max_depth(3)
        .with_parallel_threshold(0);
    assert_eq!(config.max_depth, 3);
    assert_eq!(config.parallel_threshold, 0);
}
