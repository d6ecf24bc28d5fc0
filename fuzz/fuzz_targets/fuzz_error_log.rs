#![no_main]

use libfuzzer_sys::fuzz_target;
use tke_error_codes::{ApiError, ErrorLedger, MAX_FIELD_OUTPUT_LEN};

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let mut parts = text.splitn(3, '\u{1f}');
    let code = parts.next().unwrap_or_default().to_owned();
    let message = parts.next().unwrap_or_default().to_owned();
    let request_id = parts.next().unwrap_or_default().to_owned();

    let err = ApiError::new(code, message, request_id);

    let mut line = String::new();
    err.log().write_to(&mut line).unwrap();
    assert!(line.len() <= 3 * MAX_FIELD_OUTPUT_LEN + 200);
    assert!(!line.chars().any(char::is_control));

    let ledger = ErrorLedger::new(4, 128);
    ledger.record(&err);
    assert!(ledger.payload_bytes() <= 128);
});
