// Run with: cargo fuzz run fuzz_escape_html
#![no_main]

use libfuzzer_sys::fuzz_target;
use picurl::domain::escape_html;

fuzz_target!(|s: &str| {
    let escaped = escape_html(s);
    assert!(!escaped.contains(['<', '>', '"', '\'', '`']));
    assert!(escaped.len() >= s.len());
});
