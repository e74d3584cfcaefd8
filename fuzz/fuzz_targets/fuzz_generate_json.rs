// Run with: cargo fuzz run fuzz_generate_json
// Feeds arbitrary JSON through the same path as POST /v1/api_url
#![no_main]

use libfuzzer_sys::fuzz_target;
use picurl::domain::{API_URL_PREFIX, ApiUrl, GenerateRequest};

fuzz_target!(|data: &[u8]| {
    if let Ok(request) = serde_json::from_slice::<GenerateRequest>(data) {
        if let Ok(api_url) = ApiUrl::try_from(request) {
            assert!(api_url.as_ref().starts_with(API_URL_PREFIX));
        }
    }
});
