// Per-integer chunk codec for the polyline format.
//
// Base-32, little-endian: least-significant group first. Each 6-bit
// output chunk carries 5 payload bits plus a continuation bit (0x20),
// and is offset by 63 into printable ASCII. Signed values are zig-zag
// transformed first so the chunk loop only sees non-negative numbers.

use thiserror::Error;

/// Continuation bit: set on every chunk except the last of a value.
pub const CONTINUATION_BIT: u64 = 0x20;

/// ASCII offset applied to each 6-bit chunk.
pub const ASCII_OFFSET: u8 = 63;

/// Highest byte any encoder can emit: `63 + 0x3F`.
const MAX_CHUNK_BYTE: u8 = 126;

/// Accumulator shift past this would overflow a 64-bit delta.
const MAX_SHIFT: u32 = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChunkError {
    /// Input ended before a chunk with the continuation bit clear.
    #[error("truncated input at byte {offset}: chunk run has no terminator")]
    Truncated { offset: usize },
    /// Byte outside the polyline alphabet (`63..=126`).
    #[error("invalid byte {byte:#04x} at offset {offset}: outside polyline alphabet")]
    InvalidByte { byte: u8, offset: usize },
    /// Chunk run encodes a value wider than 64 bits.
    #[error("chunk run starting near byte {offset} overflows a 64-bit delta")]
    Overflow { offset: usize },
}

/// Encode one signed integer as a chunk run, appending to `out`.
///
/// Zig-zag: left-shift by one, bitwise-invert if the value was negative.
/// The result is non-negative, so the 5-bit group loop needs no sign
/// handling.
pub fn encode_value(value: i64, out: &mut String) {
    let mut shifted = value << 1;
    if value < 0 {
        shifted = !shifted;
    }
    let mut rest = shifted as u64;
    while rest >= CONTINUATION_BIT {
        let chunk = (CONTINUATION_BIT | (rest & 0x1F)) as u8;
        out.push((chunk + ASCII_OFFSET) as char);
        rest >>= 5;
    }
    out.push((rest as u8 + ASCII_OFFSET) as char);
}

/// Decode one signed integer from `bytes` starting at `pos`.
///
/// Returns the value and the cursor advanced past the consumed bytes.
/// The reference behavior indexes out of bounds on truncated input;
/// here that surfaces as [`ChunkError::Truncated`].
pub fn decode_value(bytes: &[u8], start: usize) -> Result<(i64, usize), ChunkError> {
    let mut acc: u64 = 0;
    let mut shift: u32 = 0;
    let mut pos = start;
    loop {
        let Some(&byte) = bytes.get(pos) else {
            return Err(ChunkError::Truncated { offset: pos });
        };
        if !(ASCII_OFFSET..=MAX_CHUNK_BYTE).contains(&byte) {
            return Err(ChunkError::InvalidByte { byte, offset: pos });
        }
        if shift >= MAX_SHIFT {
            return Err(ChunkError::Overflow { offset: start });
        }
        let chunk = u64::from(byte - ASCII_OFFSET);
        acc |= (chunk & 0x1F) << shift;
        shift += 5;
        pos += 1;
        if chunk & CONTINUATION_BIT == 0 {
            break;
        }
    }
    // Undo zig-zag: odd accumulators are complements of negative values.
    let value = if acc & 1 != 0 {
        !(acc >> 1) as i64
    } else {
        (acc >> 1) as i64
    };
    Ok((value, pos))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(value: i64) -> String {
        let mut out = String::new();
        encode_value(value, &mut out);
        out
    }

    #[test]
    fn roundtrip_values() {
        let cases: &[i64] = &[
            0,
            1,
            -1,
            15,
            16,
            -16,
            -17,
            255,
            -255,
            12_020_000,
            -12_020_000,
            i32::MAX as i64,
            i32::MIN as i64,
        ];
        for &val in cases {
            let s = encode(val);
            let (decoded, consumed) = decode_value(s.as_bytes(), 0).unwrap();
            assert_eq!(decoded, val, "roundtrip failed for {val}");
            assert_eq!(consumed, s.len(), "cursor mismatch for {val}");
        }
    }

    #[test]
    fn known_chunk_encodings() {
        // From the published polyline algorithm walkthrough: -179.9832104
        // quantizes to -17998321, which encodes as "`~oia@".
        assert_eq!(encode(-17_998_321), "`~oia@");
        assert_eq!(encode(0), "?");
        // 5248855 is the latitude of the (52.48855, 13.34262) fixture.
        assert_eq!(encode(5_248_855), "mtj_I");
    }

    #[test]
    fn zero_is_single_byte() {
        assert_eq!(encode(0).len(), 1);
    }

    #[test]
    fn small_values_have_no_continuation() {
        // Zig-zag of -16..=15 fits in one 5-bit group.
        for val in -16..=15i64 {
            let s = encode(val);
            assert_eq!(s.len(), 1, "value {val} should be one chunk");
            assert!(s.as_bytes()[0] < ASCII_OFFSET + CONTINUATION_BIT as u8);
        }
    }

    #[test]
    fn output_stays_in_alphabet() {
        for &val in &[0i64, -1, 1, 1 << 20, -(1 << 30), i32::MAX as i64] {
            for &b in encode(val).as_bytes() {
                assert!((63..=126).contains(&b), "byte {b} out of range");
            }
        }
    }

    #[test]
    fn truncated_run_is_detected() {
        // 'm' has its continuation bit set, so a terminator must follow.
        let err = decode_value(b"m", 0).unwrap_err();
        assert_eq!(err, ChunkError::Truncated { offset: 1 });
    }

    #[test]
    fn empty_input_is_truncated() {
        let err = decode_value(b"", 0).unwrap_err();
        assert_eq!(err, ChunkError::Truncated { offset: 0 });
    }

    #[test]
    fn bytes_below_alphabet_rejected() {
        let err = decode_value(b" ", 0).unwrap_err();
        assert_eq!(
            err,
            ChunkError::InvalidByte {
                byte: b' ',
                offset: 0
            }
        );
    }

    #[test]
    fn unterminated_long_run_overflows() {
        // 14 continuation chunks push the shift past 64 bits.
        let run = vec![b'~'; 16];
        let err = decode_value(&run, 0).unwrap_err();
        assert_eq!(err, ChunkError::Overflow { offset: 0 });
    }

    #[test]
    fn cursor_advances_past_value() {
        let mut s = String::new();
        encode_value(-12_020_000, &mut s);
        let first_len = s.len();
        encode_value(42, &mut s);
        let (a, next) = decode_value(s.as_bytes(), 0).unwrap();
        assert_eq!(a, -12_020_000);
        assert_eq!(next, first_len);
        let (b, end) = decode_value(s.as_bytes(), next).unwrap();
        assert_eq!(b, 42);
        assert_eq!(end, s.len());
    }
}
