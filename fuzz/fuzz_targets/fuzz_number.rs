#![no_main]

use arbitrary::Arbitrary;
use jsonnum::{Codec, DecodeContext, DecodeErrorKind, decode, encode, number, scanner::scan_number};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    bytes: &'a [u8],
    start: usize,
    end: usize,
    bits64: u64,
    bits32: u32,
}

fuzz_target!(|input: Input<'_>| {
    // Decoding never reads outside the window and never moves on failure.
    let mut ctx = DecodeContext::with_bounds(input.bytes, input.start, input.end);
    let before = ctx.clone();
    match number::<f64>().decode(&mut ctx) {
        Ok(_) => {
            let matched = ctx.position() - before.position();
            assert!(matched > 0);
            assert!(ctx.position() <= before.end());
            let lexeme = scan_number(before.remaining()).expect("scanner disagrees");
            assert_eq!(lexeme.len(), matched);
        }
        Err(err) => {
            assert_eq!(err.kind(), DecodeErrorKind::InvalidNumber);
            assert_eq!(err.position(), before.position());
            assert_eq!(ctx, before);
        }
    }

    // Finite values survive encode then decode bit for bit.
    let v = f64::from_bits(input.bits64);
    match encode(&v) {
        Ok(text) => assert_eq!(decode::<f64>(&text).map(f64::to_bits), Ok(input.bits64)),
        Err(_) => assert!(!v.is_finite()),
    }
    let v = f32::from_bits(input.bits32);
    match encode(&v) {
        Ok(text) => assert_eq!(decode::<f32>(&text).map(f32::to_bits), Ok(input.bits32)),
        Err(_) => assert!(!v.is_finite()),
    }
});
