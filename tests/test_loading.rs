//! Loader behavior observed by the test harness: scalar values, quoted
//! strings, plugin lists, and the failure modes of invalid input.

use nodeconf::config::{ConfigValue, NodeConfig, PluginRegistry};
use nodeconf::error::ConfigError;

#[test]
fn single_value_loading() {
    let mut config = NodeConfig::new();
    config
        .load_from_lines(["block_log_info_print_file = ILOG"])
        .unwrap();
    assert_eq!(config.block_log_info_print_file(), Some("ILOG"));
}

#[test]
fn double_quoted_string_loading() {
    let mut config = NodeConfig::new();
    config
        .load_from_lines([
            "account_history_rocksdb_path = \"blockchain/account-history-rocksdb-storage\"",
            "shared_file_dir = \"blockchain\"",
            "snapshot_root_dir = \"snapshot\"",
        ])
        .unwrap();

    // Output should not contain double quotes inside the string
    assert_eq!(
        config.account_history_rocksdb_path(),
        Some("blockchain/account-history-rocksdb-storage")
    );
    assert_eq!(config.shared_file_dir(), Some("blockchain"));
    assert_eq!(config.snapshot_root_dir(), Some("snapshot"));
}

#[test]
fn interior_quotes_preserved() {
    let mut config = NodeConfig::new();
    config
        .load_from_lines(["log_console_appender = \"{\"appender\":\"stderr\"}\""])
        .unwrap();
    assert_eq!(
        config.get_str("log_console_appender"),
        Some("{\"appender\":\"stderr\"}")
    );
}

#[test]
fn correct_plugins() {
    let mut config = NodeConfig::new();
    config
        .load_from_lines(["plugin = witness p2p account_by_key"])
        .unwrap();

    let plugins = config.plugins();
    assert_eq!(plugins.len(), 3);
    for plugin in ["witness", "p2p", "account_by_key"] {
        assert!(plugins.iter().any(|p| p == plugin), "missing {plugin}");
    }
}

#[test]
fn incorrect_plugins() {
    for incorrect_plugin in ["UNDEFINED_PLUGIN", "witnness", "p3p", ""] {
        let mut config = NodeConfig::new();
        let result = config.load_from_lines([format!("plugin = {incorrect_plugin}")]);
        assert!(
            result.is_err(),
            "plugin '{incorrect_plugin}' should be rejected"
        );
    }
}

#[test]
fn unknown_plugin_error_names_the_token() {
    let mut config = NodeConfig::new();
    let err = config
        .load_from_lines(["plugin = witness UNDEFINED_PLUGIN p2p"])
        .unwrap_err();
    match err {
        ConfigError::UnknownPlugin { plugin, .. } => assert_eq!(plugin, "UNDEFINED_PLUGIN"),
        other => panic!("expected UnknownPlugin, got {other}"),
    }
}

#[test]
fn last_write_wins_scalar() {
    let mut config = NodeConfig::new();
    config
        .load_from_lines([
            "block_log_info_print_file = ILOG",
            "block_log_info_print_file = OTHER",
        ])
        .unwrap();
    assert_eq!(config.block_log_info_print_file(), Some("OTHER"));
}

#[test]
fn last_write_wins_list() {
    let mut config = NodeConfig::new();
    config.load_from_lines(["plugin = witness"]).unwrap();
    config.load_from_lines(["plugin = p2p json_rpc"]).unwrap();
    assert_eq!(config.plugins(), ["p2p", "json_rpc"]);
}

#[test]
fn repeated_loads_merge_incrementally() {
    let mut config = NodeConfig::new();
    config.load_from_lines(["shared_file_dir = \"blockchain\""]).unwrap();
    config.load_from_lines(["snapshot_root_dir = \"snapshot\""]).unwrap();
    assert_eq!(config.shared_file_dir(), Some("blockchain"));
    assert_eq!(config.snapshot_root_dir(), Some("snapshot"));
    assert_eq!(config.document().len(), 2);
}

#[test]
fn malformed_line_aborts_load() {
    let mut config = NodeConfig::new();
    let err = config.load_from_lines(["just_a_key"]).unwrap_err();
    assert!(matches!(err, ConfigError::MalformedLine { line: 1, .. }));
}

#[test]
fn plugins_default_to_empty_before_load() {
    let config = NodeConfig::new();
    assert!(config.plugins().is_empty());
    assert!(config.get_str("shared_file_dir").is_none());
}

#[test]
fn reserialization_preserves_order_and_quoting() {
    let lines = [
        "plugin = witness p2p",
        "shared_file_dir = \"blockchain\"",
        "required_participation = 0",
    ];
    let mut config = NodeConfig::new();
    config.load_from_lines(lines).unwrap();
    assert_eq!(config.to_lines(), lines);
}

#[test]
fn custom_registry_accepts_its_own_names() {
    let registry = PluginRegistry::new(["future_plugin"]);
    let mut config = NodeConfig::with_registry(registry);
    config.load_from_lines(["plugin = future_plugin"]).unwrap();
    assert_eq!(config.plugins(), ["future_plugin"]);
}

#[test]
fn list_value_is_tagged_as_list() {
    let mut config = NodeConfig::new();
    config.load_from_lines(["plugin = witness"]).unwrap();
    assert!(matches!(config.get("plugin"), Some(ConfigValue::List(_))));
    assert!(config.get_str("plugin").is_none());
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any bare scalar value stores exactly as written (trimmed).
        #[test]
        fn bare_scalar_round_trips(value in "[a-zA-Z0-9_./:-]{1,40}") {
            let mut config = NodeConfig::new();
            config.load_from_lines([format!("some_key = {value}")]).unwrap();
            prop_assert_eq!(config.get_str("some_key"), Some(value.as_str()));
        }

        /// Quoting strips exactly the wrapping pair and nothing else.
        #[test]
        fn quoted_scalar_strips_one_layer(value in "[a-zA-Z0-9_./:-]{0,40}") {
            let mut config = NodeConfig::new();
            config.load_from_lines([format!("some_key = \"{value}\"")]).unwrap();
            prop_assert_eq!(config.get_str("some_key"), Some(value.as_str()));
        }

        /// Valid plugin lists parse into exactly the given tokens.
        #[test]
        fn plugin_subsets_parse(count in 1usize..5) {
            let names = ["witness", "p2p", "account_by_key", "json_rpc", "webserver"];
            let chosen = &names[..count];
            let mut config = NodeConfig::new();
            config.load_from_lines([format!("plugin = {}", chosen.join(" "))]).unwrap();
            prop_assert_eq!(config.plugins(), chosen);
        }
    }
}
