// Run with: cargo fuzz run fuzz_photo_url
#![no_main]

use libfuzzer_sys::fuzz_target;
use picurl::domain::{PHOTO_URL_PREFIX, PhotoUrl};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Exercise both the prefixed and the raw shape of the input
        let _ = PhotoUrl::parse(s.to_string());

        if let Ok(url) = PhotoUrl::parse(format!("{PHOTO_URL_PREFIX}{s}")) {
            assert_eq!(url.picture_id(), s);
            assert!(!url.picture_id().ends_with('/'));
        }
    }
});
