//! Fuzz target for the CSV observation sheet reader.
//!
//! Goal: the reader should **never panic** on any input.
//! It may reject the sheet or skip rows, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_csv_input
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = riskgate_input::fuzz::parse_sheet(text);
    }
});
