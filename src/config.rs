//! # Tokenizer Configuration Constants
//!
//! Centralized tuning constants for the scanner. Interdependent values are
//! co-located and their relationships enforced by compile-time assertions.
//!
//! ## Constants
//!
//! - `TOKEN_CAPACITY_DIVISOR`: the output vector is pre-reserved at
//!   `input_len / TOKEN_CAPACITY_DIVISOR` entries. SQL averages one token
//!   per ~8 bytes; reserving at that ratio avoids most growth reallocations
//!   without overshooting on comment-heavy input.
//! - `KEYWORD_MAX_LEN`: capacity of the stack buffer used to uppercase-fold
//!   candidate identifiers during keyword lookup. Identifiers longer than
//!   this cannot be keywords and skip the lookup entirely. Every entry in
//!   the keyword table must fit; `keyword.rs` asserts this at compile time
//!   against its longest bucket.

/// Heuristic divisor for pre-sizing the token output vector.
pub const TOKEN_CAPACITY_DIVISOR: usize = 8;

/// Upper bound on reserved-word length; also the keyword fold buffer size.
pub const KEYWORD_MAX_LEN: usize = 32;

const _: () = assert!(TOKEN_CAPACITY_DIVISOR > 0);
const _: () = assert!(KEYWORD_MAX_LEN >= 16 && KEYWORD_MAX_LEN <= 64);
