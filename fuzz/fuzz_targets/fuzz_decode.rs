#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigInt;

use bigmul_core::{Algorithm, CodecError, Karatsuba, SchonhageStrassen};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let key = BigInt::from(1_234);

    // Arbitrary text either decodes or is rejected as malformed; never panics
    for result in [
        Karatsuba::new().decode(text, &key),
        SchonhageStrassen::new().decode(text, &key),
    ] {
        match result {
            Ok(_) | Err(CodecError::DecodeFormat { .. }) => {}
            Err(e) => panic!("unexpected error: {e}"),
        }
    }
});
