#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::{BigInt, Sign};

use bigmul_core::{Karatsuba, Multiplier, SchonhageStrassen, ToomCook3};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // First byte picks signs and the split point, capped at 2 KiB per operand
    let flags = data[0];
    let rest = &data[1..data.len().min(4097)];
    let (a, b) = rest.split_at(rest.len() / 2);

    let sign = |negative: bool| if negative { Sign::Minus } else { Sign::Plus };
    let x = BigInt::from_bytes_le(sign(flags & 1 == 1), a);
    let y = BigInt::from_bytes_le(sign(flags & 2 == 2), b);
    let expected = &x * &y;

    let karatsuba = Karatsuba::new().multiply(&x, &y).unwrap();
    let toom = ToomCook3::new().multiply(&x, &y).unwrap();
    let ssa = SchonhageStrassen::new().multiply(&x, &y).unwrap();

    assert_eq!(karatsuba, expected, "Karatsuba mismatch");
    assert_eq!(toom, expected, "Toom-Cook-3 mismatch");
    assert_eq!(ssa, expected, "Schönhage-Strassen mismatch");
});
