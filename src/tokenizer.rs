//! # SQL Token Scanner
//!
//! The scanner walks the input buffer once, left to right. Each iteration
//! asks the SIMD dispatcher for the leading-whitespace count at the cursor,
//! re-walks that span to keep line/column exact, then classifies the first
//! non-whitespace byte through the lookup table and hands off to the
//! matching sub-scanner. Every sub-scanner consumes bytes and constructs
//! exactly one token borrowing from the input.
//!
//! ## Totality
//!
//! Tokenization never fails. Unterminated strings and block comments extend
//! to end of input and are emitted as ordinary tokens; bytes with no
//! character class fall through the operator/delimiter path as single-byte
//! operator tokens. There is no panic path over any byte sequence.
//!
//! ## Position tracking
//!
//! `line` and `column` are 1-based and always designate the byte at the
//! cursor. A line feed advances the line and resets the column; every other
//! byte advances the column, including the bytes inside strings, comments,
//! and skipped whitespace runs.
//!
//! ## Operator policy
//!
//! Operators extend to exactly two bytes when the pair is one of
//! `<=  <>  <<  >=  >>  !=  ==  ||  &&  ::`. Longer runs split greedily:
//! `===` is `==` `=`, `<<<` is `<<` `<`, `->` is `-` `>`. No three-byte
//! operator exists.

use memchr::{memchr, memchr2};

use crate::charclass::{is_delimiter, is_digit, is_ident_cont, is_ident_start, is_quote};
use crate::config::TOKEN_CAPACITY_DIVISOR;
use crate::keyword::{find_keyword, Keyword};
use crate::simd::SimdDispatcher;
use crate::token::{Token, TokenKind};

/// Zero-copy SQL tokenizer over a borrowed byte buffer.
///
/// The buffer must outlive the tokenizer and every token it produces.
pub struct Tokenizer<'a> {
    input: &'a [u8],
    pos: usize,
    line: u32,
    column: u32,
    dispatcher: SimdDispatcher,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            column: 1,
            dispatcher: SimdDispatcher::new(),
        }
    }

    /// Current 1-based line of the cursor.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current 1-based column of the cursor.
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Name of the vector strategy in use: `"AVX-512"`, `"AVX2"`,
    /// `"SSE4.2"`, `"NEON"`, or `"Scalar"`. Diagnostics only; the token
    /// stream is identical across levels.
    pub fn simd_level(&self) -> &'static str {
        self.dispatcher.level_name()
    }

    /// Produces the full token sequence for the input.
    ///
    /// Whitespace is consumed but never emitted; the end-of-file sentinel is
    /// elided. The returned tokens borrow from the input buffer.
    pub fn tokenize(&mut self) -> Vec<Token<'a>> {
        let mut tokens = Vec::with_capacity(self.input.len() / TOKEN_CAPACITY_DIVISOR);

        while self.pos < self.input.len() {
            let skip = self.dispatcher.skip_whitespace(&self.input[self.pos..]);
            if skip > 0 {
                self.advance_span(skip);
            }

            if self.pos >= self.input.len() {
                break;
            }

            let token = self.next_token();
            if token.kind != TokenKind::Whitespace {
                tokens.push(token);
            }
            if token.kind == TokenKind::Eof {
                break;
            }
        }

        tokens
    }

    fn next_token(&mut self) -> Token<'a> {
        if self.pos >= self.input.len() {
            return Token::new(
                TokenKind::Eof,
                &self.input[self.input.len()..],
                Keyword::Unknown,
                self.line,
                self.column,
            );
        }

        let start = self.pos;
        let line = self.line;
        let column = self.column;
        let first = self.input[self.pos];

        if is_ident_start(first) {
            return self.scan_identifier_or_keyword(start, line, column);
        }
        if is_digit(first) {
            return self.scan_number(start, line, column);
        }
        if is_quote(first) {
            return self.scan_string(start, line, column, first);
        }
        if first == b'-' && self.peek_at(1) == Some(b'-') {
            return self.scan_line_comment(start, line, column);
        }
        if first == b'/' && self.peek_at(1) == Some(b'*') {
            return self.scan_block_comment(start, line, column);
        }

        self.scan_operator_or_delimiter(start, line, column)
    }

    #[inline]
    fn peek_at(&self, ahead: usize) -> Option<u8> {
        self.input.get(self.pos + ahead).copied()
    }

    #[inline]
    fn advance(&mut self) {
        if self.pos < self.input.len() {
            if self.input[self.pos] == b'\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            self.pos += 1;
        }
    }

    /// Re-walks a span the whitespace skipper already counted, so newlines
    /// inside it update line/column.
    fn advance_span(&mut self, count: usize) {
        for _ in 0..count {
            self.advance();
        }
    }

    fn scan_identifier_or_keyword(&mut self, start: usize, line: u32, column: u32) -> Token<'a> {
        while self.pos < self.input.len() && is_ident_cont(self.input[self.pos]) {
            self.advance();
        }

        let text = &self.input[start..self.pos];
        let keyword = find_keyword(text);
        let kind = if keyword == Keyword::Unknown {
            TokenKind::Identifier
        } else {
            TokenKind::Keyword
        };

        Token::new(kind, text, keyword, line, column)
    }

    fn scan_number(&mut self, start: usize, line: u32, column: u32) -> Token<'a> {
        let mut has_dot = false;
        let mut has_exp = false;

        while self.pos < self.input.len() {
            let byte = self.input[self.pos];

            if is_digit(byte) {
                self.advance();
            } else if byte == b'.' && !has_dot && !has_exp {
                has_dot = true;
                self.advance();
            } else if (byte == b'e' || byte == b'E') && !has_exp {
                has_exp = true;
                self.advance();
                if let Some(sign) = self.peek_at(0) {
                    if sign == b'+' || sign == b'-' {
                        self.advance();
                    }
                }
            } else {
                break;
            }
        }

        Token::new(
            TokenKind::Number,
            &self.input[start..self.pos],
            Keyword::Unknown,
            line,
            column,
        )
    }

    fn scan_string(&mut self, start: usize, line: u32, column: u32, quote: u8) -> Token<'a> {
        self.advance();

        while self.pos < self.input.len() {
            if self.input[self.pos] == quote {
                if self.peek_at(1) == Some(quote) {
                    // Doubled quote stays inside the string.
                    self.advance();
                    self.advance();
                } else {
                    self.advance();
                    break;
                }
            } else {
                self.advance();
            }
        }

        Token::new(
            TokenKind::String,
            &self.input[start..self.pos],
            Keyword::Unknown,
            line,
            column,
        )
    }

    fn scan_line_comment(&mut self, start: usize, line: u32, column: u32) -> Token<'a> {
        self.pos += 2;
        self.column += 2;

        match memchr(b'\n', &self.input[self.pos..]) {
            Some(offset) => {
                // The line feed belongs to the comment.
                self.pos += offset;
                self.column += offset as u32;
                self.advance();
            }
            None => {
                let rest = self.input.len() - self.pos;
                self.pos = self.input.len();
                self.column += rest as u32;
            }
        }

        Token::new(
            TokenKind::Comment,
            &self.input[start..self.pos],
            Keyword::Unknown,
            line,
            column,
        )
    }

    fn scan_block_comment(&mut self, start: usize, line: u32, column: u32) -> Token<'a> {
        self.pos += 2;
        self.column += 2;

        loop {
            match memchr2(b'*', b'\n', &self.input[self.pos..]) {
                Some(offset) => {
                    self.pos += offset;
                    self.column += offset as u32;
                    if self.input[self.pos] == b'\n' {
                        self.advance();
                    } else if self.peek_at(1) == Some(b'/') {
                        self.pos += 2;
                        self.column += 2;
                        break;
                    } else {
                        self.pos += 1;
                        self.column += 1;
                    }
                }
                None => {
                    // Unterminated: the comment runs to end of input.
                    let rest = self.input.len() - self.pos;
                    self.pos = self.input.len();
                    self.column += rest as u32;
                    break;
                }
            }
        }

        Token::new(
            TokenKind::Comment,
            &self.input[start..self.pos],
            Keyword::Unknown,
            line,
            column,
        )
    }

    fn scan_operator_or_delimiter(&mut self, start: usize, line: u32, column: u32) -> Token<'a> {
        let first = self.input[self.pos];
        self.advance();

        let kind = if is_delimiter(first) {
            TokenKind::Delimiter
        } else {
            TokenKind::Operator
        };

        if let Some(next) = self.peek_at(0) {
            let pairs = matches!(
                (first, next),
                (b'<', b'=')
                    | (b'<', b'>')
                    | (b'<', b'<')
                    | (b'>', b'=')
                    | (b'>', b'>')
                    | (b'!', b'=')
                    | (b'=', b'=')
                    | (b'|', b'|')
                    | (b'&', b'&')
                    | (b':', b':')
            );
            if pairs {
                self.advance();
            }
        }

        Token::new(kind, &self.input[start..self.pos], Keyword::Unknown, line, column)
    }
}
