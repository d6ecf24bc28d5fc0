#![no_main]

use libfuzzer_sys::fuzz_target;
use tke_error_codes::{lookup, Category, ErrorCode};

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };

    let found = lookup(raw);
    assert_eq!(found.raw(), raw);

    if let Some(code) = found.code() {
        assert_eq!(code.wire(), raw);
        assert_eq!(Category::from_wire(raw), Some(code.category()));
    }

    assert_eq!(ErrorCode::from_wire(raw).is_some(), found.is_known());
});
