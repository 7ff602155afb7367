#![no_main]

use libfuzzer_sys::fuzz_target;
use offroad_settings::config::AppConfig;

fuzz_target!(|data: &[u8]| {
    // Partial or hostile config files must never panic the loader
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(config) = serde_json::from_str::<AppConfig>(s) {
            let _ = serde_json::to_string(&config);
        }
    }
});
