//! Fuzz target for config parsing and profile resolution.
//!
//! Arbitrary TOML text plus arbitrary CLI overrides must resolve or fail
//! with an error, never panic.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config_resolution
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use riskgate_settings::{Overrides, parse_config_toml, resolve_config};

#[derive(Debug, Arbitrary)]
struct Input {
    config: String,
    profile: Option<String>,
    fail_on: Option<String>,
}

fuzz_target!(|input: Input| {
    let Ok(cfg) = parse_config_toml(&input.config) else {
        return;
    };
    let overrides = Overrides {
        profile: input.profile,
        fail_on: input.fail_on,
    };
    let _ = resolve_config(cfg, overrides);
});
