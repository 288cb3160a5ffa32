#![no_main]

use exifdate::{ExtractOptions, TagScope, extract_capture_date_with, inspect_capture_date};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let options = ExtractOptions::default().with_scope(TagScope::WithExifSubIfd);
    let collapsed = extract_capture_date_with(data, &options);
    assert_eq!(collapsed, inspect_capture_date(data, &options).ok());
});
