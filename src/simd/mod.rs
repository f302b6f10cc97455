//! # Runtime SIMD Selection
//!
//! This module decides, once per process, which vector instruction level the
//! tokenizer may use, and routes vectorized operations to the matching
//! implementation.
//!
//! ## Levels
//!
//! | Level   | Chunk | Detection                        |
//! |---------|-------|----------------------------------|
//! | AVX-512 | 64 B  | `avx512f` + `avx512bw` (x86_64)  |
//! | AVX2    | 32 B  | `avx2` (x86_64)                  |
//! | SSE4.2  | 16 B  | `sse4.2` (x86_64)                |
//! | NEON    | 16 B  | mandatory on aarch64             |
//! | Scalar  | 1 B   | always available                 |
//!
//! The probe is conservative: a level is reported only when the CPU actually
//! advertises it, so the dispatcher never executes an instruction the host
//! lacks. The result is cached in a process-wide `OnceLock`; concurrent
//! first calls are safe because detection is deterministic.
//!
//! ## Dispatch
//!
//! Operations are written once, generic over a [`SimdProcessor`] capability.
//! [`SimdDispatcher::dispatch`] monomorphizes the operation per level and
//! jumps on the cached probe result, so the scalar path on vector-less hosts
//! is a direct inlined call. Correctness never depends on the level chosen:
//! every processor produces identical results.

pub mod skip;

use std::sync::OnceLock;

/// Vector instruction level, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimdLevel {
    Avx512,
    Avx2,
    Sse42,
    Neon,
    Scalar,
}

impl SimdLevel {
    /// The best level this process may execute. Probed once and cached.
    pub fn detect() -> Self {
        static LEVEL: OnceLock<SimdLevel> = OnceLock::new();
        *LEVEL.get_or_init(Self::probe)
    }

    #[cfg(target_arch = "x86_64")]
    fn probe() -> Self {
        if is_x86_feature_detected!("avx512f") && is_x86_feature_detected!("avx512bw") {
            return SimdLevel::Avx512;
        }
        if is_x86_feature_detected!("avx2") {
            return SimdLevel::Avx2;
        }
        if is_x86_feature_detected!("sse4.2") {
            return SimdLevel::Sse42;
        }
        SimdLevel::Scalar
    }

    #[cfg(target_arch = "aarch64")]
    fn probe() -> Self {
        SimdLevel::Neon
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    fn probe() -> Self {
        SimdLevel::Scalar
    }

    /// Human-readable name used by diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            SimdLevel::Avx512 => "AVX-512",
            SimdLevel::Avx2 => "AVX2",
            SimdLevel::Sse42 => "SSE4.2",
            SimdLevel::Neon => "NEON",
            SimdLevel::Scalar => "Scalar",
        }
    }
}

/// Capability surface implemented by every vector level.
pub trait SimdProcessor {
    /// Count of leading whitespace bytes in `bytes`.
    fn skip_whitespace(&self, bytes: &[u8]) -> usize;
}

/// An operation that can run on any processor level.
///
/// Implementors get monomorphized once per level; the dispatcher picks the
/// instantiation matching the probed CPU.
pub trait SimdOp {
    type Output;
    fn run<P: SimdProcessor>(self, processor: P) -> Self::Output;
}

#[cfg(target_arch = "x86_64")]
pub struct Avx512Processor;

#[cfg(target_arch = "x86_64")]
impl SimdProcessor for Avx512Processor {
    #[inline]
    fn skip_whitespace(&self, bytes: &[u8]) -> usize {
        // SAFETY: the dispatcher constructs this processor only when the
        // probe reported AVX-512F and AVX-512BW.
        unsafe { skip::skip_whitespace_avx512(bytes) }
    }
}

#[cfg(target_arch = "x86_64")]
pub struct Avx2Processor;

#[cfg(target_arch = "x86_64")]
impl SimdProcessor for Avx2Processor {
    #[inline]
    fn skip_whitespace(&self, bytes: &[u8]) -> usize {
        // SAFETY: the dispatcher constructs this processor only when the
        // probe reported AVX2.
        unsafe { skip::skip_whitespace_avx2(bytes) }
    }
}

#[cfg(target_arch = "x86_64")]
pub struct Sse42Processor;

#[cfg(target_arch = "x86_64")]
impl SimdProcessor for Sse42Processor {
    #[inline]
    fn skip_whitespace(&self, bytes: &[u8]) -> usize {
        // SAFETY: the dispatcher constructs this processor only when the
        // probe reported SSE4.2.
        unsafe { skip::skip_whitespace_sse42(bytes) }
    }
}

#[cfg(target_arch = "aarch64")]
pub struct NeonProcessor;

#[cfg(target_arch = "aarch64")]
impl SimdProcessor for NeonProcessor {
    #[inline]
    fn skip_whitespace(&self, bytes: &[u8]) -> usize {
        // SAFETY: NEON is mandatory on aarch64.
        unsafe { skip::skip_whitespace_neon(bytes) }
    }
}

pub struct ScalarProcessor;

impl SimdProcessor for ScalarProcessor {
    #[inline]
    fn skip_whitespace(&self, bytes: &[u8]) -> usize {
        skip::skip_whitespace_scalar(bytes)
    }
}

/// Routes operations to the probed vector level.
#[derive(Debug, Clone, Copy)]
pub struct SimdDispatcher {
    level: SimdLevel,
}

impl SimdDispatcher {
    pub fn new() -> Self {
        Self {
            level: SimdLevel::detect(),
        }
    }

    pub fn level(&self) -> SimdLevel {
        self.level
    }

    pub fn level_name(&self) -> &'static str {
        self.level.name()
    }

    /// Runs `op` on the processor for the selected level.
    pub fn dispatch<Op: SimdOp>(&self, op: Op) -> Op::Output {
        match self.level {
            #[cfg(target_arch = "x86_64")]
            SimdLevel::Avx512 => op.run(Avx512Processor),
            #[cfg(target_arch = "x86_64")]
            SimdLevel::Avx2 => op.run(Avx2Processor),
            #[cfg(target_arch = "x86_64")]
            SimdLevel::Sse42 => op.run(Sse42Processor),
            #[cfg(target_arch = "aarch64")]
            SimdLevel::Neon => op.run(NeonProcessor),
            _ => op.run(ScalarProcessor),
        }
    }

    /// Leading-whitespace count at the head of `bytes`.
    #[inline]
    pub fn skip_whitespace(&self, bytes: &[u8]) -> usize {
        struct SkipWhitespace<'a>(&'a [u8]);

        impl SimdOp for SkipWhitespace<'_> {
            type Output = usize;

            #[inline]
            fn run<P: SimdProcessor>(self, processor: P) -> usize {
                processor.skip_whitespace(self.0)
            }
        }

        self.dispatch(SkipWhitespace(bytes))
    }
}

impl Default for SimdDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
