// Run with: cargo fuzz run fuzz_dimensions
#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use picurl::domain::Dimensions;

#[derive(Arbitrary, Debug)]
struct Size {
    width: String,
    height: String,
}

fuzz_target!(|size: Size| {
    if let Ok(dimensions) = Dimensions::parse(size.width.clone(), size.height.clone()) {
        // Accepted values are never rewritten
        assert_eq!(dimensions.width(), size.width);
        assert_eq!(dimensions.height(), size.height);
    }
});
