//! # sqlscan - SIMD-Accelerated SQL Tokenizer
//!
//! sqlscan turns a byte buffer of SQL text into an ordered stream of tokens.
//! It is the front end of a SQL parser: downstream stages consume the token
//! sequence and never re-scan the text. The design goals, in order:
//!
//! - **Zero-copy tokens**: every token borrows its text from the input
//!   buffer. No per-token allocation, ever.
//! - **SIMD whitespace skipping**: the hot skip loop is dispatched at runtime
//!   to the widest vector unit the host supports (AVX-512, AVX2, SSE4.2,
//!   NEON) with a scalar fallback that is always correct.
//! - **Totality**: every byte sequence produces a well-defined token stream.
//!   There is no error path, no panic, no partial result. Unterminated
//!   strings and comments extend to end of input and are still emitted.
//!
//! ## Quick Start
//!
//! ```
//! use sqlscan::{Tokenizer, TokenKind, Keyword};
//!
//! let sql = b"SELECT id FROM users WHERE active != 0";
//! let mut tokenizer = Tokenizer::new(sql);
//! let tokens = tokenizer.tokenize();
//!
//! assert_eq!(tokens[0].kind, TokenKind::Keyword);
//! assert_eq!(tokens[0].keyword, Keyword::Select);
//! assert_eq!(tokens[0].text, &b"SELECT"[..]);
//! assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          Tokenizer (main loop)          │
//! ├──────────────┬──────────────────────────┤
//! │ Sub-scanners │ ident/keyword, number,   │
//! │              │ string, comments, ops    │
//! ├──────────────┴──────────────────────────┤
//! │  Byte classifier (256-entry table)      │
//! ├─────────────────────────────────────────┤
//! │  Keyword table (length buckets)         │
//! ├─────────────────────────────────────────┤
//! │  SIMD dispatch (probe + per-level       │
//! │  whitespace skippers)                   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! Raw bytes flow through the whitespace skipper, the scanner dispatches on
//! the class of the first non-whitespace byte, and the matching sub-scanner
//! consumes bytes and constructs one token. Line and column are tracked
//! across every byte, including newlines embedded in strings and block
//! comments.
//!
//! ## Module Overview
//!
//! - [`charclass`]: constant byte classification table and predicates
//! - [`keyword`]: reserved-word resolution, case-insensitive over ASCII
//! - [`token`]: the [`Token`] and [`TokenKind`] types
//! - [`tokenizer`]: the scanner itself
//! - [`simd`]: feature probe, dispatcher, and vectorized whitespace skippers
//!
//! ## Thread Safety
//!
//! The class table and keyword table are immutable statics. The SIMD probe
//! caches its result in a process-wide `OnceLock`; concurrent first calls
//! race benignly to the same deterministic answer. A `Tokenizer` instance
//! owns its cursor exclusively and is not shareable mid-scan, but any number
//! of instances may run in parallel over different inputs.

pub mod charclass;
pub mod config;
pub mod keyword;
pub mod simd;
pub mod token;
pub mod tokenizer;

pub use keyword::Keyword;
pub use simd::{SimdDispatcher, SimdLevel};
pub use token::{Token, TokenKind};
pub use tokenizer::Tokenizer;
