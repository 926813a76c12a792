// SPDX-License-Identifier: MIT OR Apache-2.0

//! Decimal encoding of unsigned integers without allocation.

/// Digits in `u64::MAX`.
pub(crate) const MAX_DIGITS: usize = 20;

/**
Writes the decimal text of `value` into `out`, left-padded with `pad` until at
least `min_digits` characters are produced.

Returns the number of bytes written.  If `out` is too short the leading
characters that fit are written and the rest are dropped.

```
let mut buf = [0u8; 8];
let n = linelog::numeric::encode_padded(7, 3, b'0', &mut buf);
assert_eq!(&buf[..n], b"007");
```
*/
pub fn encode_padded(value: u64, min_digits: usize, pad: u8, out: &mut [u8]) -> usize {
    let mut digits = [0u8; MAX_DIGITS];
    let mut count = 0;
    let mut rest = value;
    loop {
        digits[MAX_DIGITS - 1 - count] = b'0' + (rest % 10) as u8;
        count += 1;
        rest /= 10;
        if rest == 0 {
            break;
        }
    }
    let padding = min_digits.saturating_sub(count);
    let mut written = 0;
    for slot in out.iter_mut().take(padding) {
        *slot = pad;
        written += 1;
    }
    for (slot, digit) in out[written..]
        .iter_mut()
        .zip(&digits[MAX_DIGITS - count..])
    {
        *slot = *digit;
        written += 1;
    }
    written
}

/// The number of bytes [encode_padded] produces given unlimited space.
pub(crate) fn width(value: u64, min_digits: usize) -> usize {
    let mut count = 1;
    let mut rest = value / 10;
    while rest > 0 {
        count += 1;
        rest /= 10;
    }
    count.max(min_digits)
}

/// Writes the decimal text of `value` into `out` with no padding.
pub fn encode(value: u64, out: &mut [u8]) -> usize {
    encode_padded(value, 0, b' ', out)
}
