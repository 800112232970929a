#![no_main]

use libfuzzer_sys::fuzz_target;
use nodeconf::config::NodeConfig;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to string, ignoring invalid UTF-8
    if let Ok(text) = std::str::from_utf8(data) {
        let mut config = NodeConfig::new();

        // Attempt to load the configuration
        // We don't care about the result, just that it doesn't panic
        let _ = config.load_from_str(text);
    }
});
