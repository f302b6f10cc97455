//! # End-to-End Tokenizer Scenarios
//!
//! Literal input/output scenarios verified through the public API, plus the
//! stream invariants every tokenization must uphold:
//!
//! 1. Concatenating the emitted token slices reproduces exactly the
//!    non-whitespace portions of the input, in order; gaps between tokens
//!    are whitespace-only.
//! 2. Every token's (line, column) matches an independent recomputation
//!    from the raw bytes.
//! 3. Every token slice stays inside the input buffer.
//!
//! Expected sequences are written out by hand, not derived from running the
//! tokenizer.

use sqlscan::{Keyword, Token, TokenKind, Tokenizer};

fn tokenize(sql: &[u8]) -> Vec<Token<'_>> {
    Tokenizer::new(sql).tokenize()
}

fn texts<'a>(tokens: &[Token<'a>]) -> Vec<&'a [u8]> {
    tokens.iter().map(|t| t.text).collect()
}

fn bump(byte: u8, line: &mut u32, column: &mut u32) {
    if byte == b'\n' {
        *line += 1;
        *column = 1;
    } else {
        *column += 1;
    }
}

/// Checks contiguity, whitespace-only gaps, position correctness, and slice
/// bounds for one tokenization.
fn assert_stream_invariants(input: &[u8], tokens: &[Token<'_>]) {
    let base = input.as_ptr() as usize;
    let mut cursor = 0usize;
    let mut line = 1u32;
    let mut column = 1u32;

    for token in tokens {
        let offset = (token.text.as_ptr() as usize)
            .checked_sub(base)
            .expect("token slice precedes input buffer");
        assert!(offset >= cursor, "tokens out of order or overlapping");
        assert!(
            offset + token.text.len() <= input.len(),
            "token slice escapes the input buffer"
        );
        assert_eq!(
            &input[offset..offset + token.text.len()],
            token.text,
            "token text does not match the input at its offset"
        );

        for &byte in &input[cursor..offset] {
            assert!(
                matches!(byte, b' ' | b'\t' | b'\n' | b'\r'),
                "non-whitespace byte 0x{:02X} between tokens",
                byte
            );
            bump(byte, &mut line, &mut column);
        }

        assert_eq!(
            (token.line, token.column),
            (line, column),
            "wrong position for token {:?}",
            token.text_str()
        );

        for &byte in token.text {
            bump(byte, &mut line, &mut column);
        }
        cursor = offset + token.text.len();
    }

    for &byte in &input[cursor..] {
        assert!(
            matches!(byte, b' ' | b'\t' | b'\n' | b'\r'),
            "non-whitespace byte 0x{:02X} after the last token",
            byte
        );
    }
}

fn assert_texts(sql: &[u8], expected: &[&[u8]]) {
    let tokens = tokenize(sql);
    assert_eq!(texts(&tokens), expected, "input {:?}", sql);
    assert_stream_invariants(sql, &tokens);
}

mod token_streams {
    use super::*;

    #[test]
    fn equality_and_splits() {
        assert_texts(b"a = b", &[b"a", b"=", b"b"]);
        assert_texts(b"a != b", &[b"a", b"!=", b"b"]);
        assert_texts(b"a === b", &[b"a", b"==", b"=", b"b"]);
        assert_texts(b"a <<< b", &[b"a", b"<<", b"<", b"b"]);
        assert_texts(b"a->>b", &[b"a", b"-", b">>", b"b"]);
        assert_texts(b"a::text", &[b"a", b"::", b"text"]);
    }

    #[test]
    fn select_with_not_equals() {
        let tokens = tokenize(b"SELECT * FROM t WHERE x != y");
        assert_eq!(
            texts(&tokens),
            [&b"SELECT"[..], b"*", b"FROM", b"t", b"WHERE", b"x", b"!=", b"y"]
        );
        assert_eq!(tokens[0].keyword, Keyword::Select);
        assert_eq!(tokens[2].keyword, Keyword::From);
        assert_eq!(tokens[4].keyword, Keyword::Where);
        assert_eq!(tokens[1].kind, TokenKind::Operator);
        assert_eq!(tokens[3].kind, TokenKind::Identifier);
        assert_stream_invariants(b"SELECT * FROM t WHERE x != y", &tokens);
    }

    #[test]
    fn case_expression_categories() {
        let sql: &[u8] = b"CASE WHEN a == b THEN 1 ELSE 0 END";
        let tokens = tokenize(sql);
        let expected: [(&[u8], TokenKind); 10] = [
            (b"CASE", TokenKind::Keyword),
            (b"WHEN", TokenKind::Keyword),
            (b"a", TokenKind::Identifier),
            (b"==", TokenKind::Operator),
            (b"b", TokenKind::Identifier),
            (b"THEN", TokenKind::Keyword),
            (b"1", TokenKind::Number),
            (b"ELSE", TokenKind::Keyword),
            (b"0", TokenKind::Number),
            (b"END", TokenKind::Keyword),
        ];
        assert_eq!(tokens.len(), expected.len());
        for (token, (text, kind)) in tokens.iter().zip(expected) {
            assert_eq!(token.text, text);
            assert_eq!(token.kind, kind);
        }
        assert_stream_invariants(sql, &tokens);
    }

    #[test]
    fn doubled_quote_string_is_one_token() {
        let tokens = tokenize(b"'it''s'");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].text, &b"'it''s'"[..]);
    }

    #[test]
    fn comment_then_keyword_on_next_line() {
        let sql: &[u8] = b"-- comment\nSELECT";
        let tokens = tokenize(sql);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Comment);
        assert_eq!(tokens[0].text, &b"-- comment\n"[..]);
        assert_eq!(tokens[1].keyword, Keyword::Select);
        assert_eq!((tokens[1].line, tokens[1].column), (2, 1));
        assert_stream_invariants(sql, &tokens);
    }
}

mod operator_matrix {
    use super::*;

    #[test]
    fn comparison_operators() {
        assert_texts(b"a = b", &[b"a", b"=", b"b"]);
        assert_texts(b"a == b", &[b"a", b"==", b"b"]);
        assert_texts(b"a != b", &[b"a", b"!=", b"b"]);
        assert_texts(b"a <> b", &[b"a", b"<>", b"b"]);
        assert_texts(b"a < b", &[b"a", b"<", b"b"]);
        assert_texts(b"a > b", &[b"a", b">", b"b"]);
        assert_texts(b"a <= b", &[b"a", b"<=", b"b"]);
        assert_texts(b"a >= b", &[b"a", b">=", b"b"]);
    }

    #[test]
    fn arithmetic_operators() {
        assert_texts(b"a + b", &[b"a", b"+", b"b"]);
        assert_texts(b"a - b", &[b"a", b"-", b"b"]);
        assert_texts(b"a * b", &[b"a", b"*", b"b"]);
        assert_texts(b"a / b", &[b"a", b"/", b"b"]);
        assert_texts(b"a % b", &[b"a", b"%", b"b"]);
    }

    #[test]
    fn logical_operators() {
        let tokens = tokenize(b"a AND b OR NOT c");
        assert_eq!(tokens[1].keyword, Keyword::And);
        assert_eq!(tokens[3].keyword, Keyword::Or);
        assert_eq!(tokens[4].keyword, Keyword::Not);
        assert_texts(b"a && b", &[b"a", b"&&", b"b"]);
        assert_texts(b"a || b", &[b"a", b"||", b"b"]);
    }

    #[test]
    fn bitwise_operators() {
        assert_texts(b"a & b", &[b"a", b"&", b"b"]);
        assert_texts(b"a | b", &[b"a", b"|", b"b"]);
        assert_texts(b"a ^ b", &[b"a", b"^", b"b"]);
        assert_texts(b"~a", &[b"~", b"a"]);
        assert_texts(b"a << b", &[b"a", b"<<", b"b"]);
        assert_texts(b"a >> b", &[b"a", b">>", b"b"]);
    }

    #[test]
    fn special_operators() {
        assert_texts(b"a::text", &[b"a", b"::", b"text"]);
        assert_texts(b"a.b", &[b"a", b".", b"b"]);
        assert_texts(b"a->b", &[b"a", b"-", b">", b"b"]);
        assert_texts(b"a->>b", &[b"a", b"-", b">>", b"b"]);
    }

    #[test]
    fn invalid_sequences_split_greedily() {
        assert_texts(b"a === b", &[b"a", b"==", b"=", b"b"]);
        assert_texts(b"x ==== y", &[b"x", b"==", b"==", b"y"]);
        assert_texts(b"a ===== b", &[b"a", b"==", b"==", b"=", b"b"]);
        assert_texts(b"a !== b", &[b"a", b"!=", b"=", b"b"]);
        assert_texts(b"a <<< b", &[b"a", b"<<", b"<", b"b"]);
        assert_texts(b"a >>> b", &[b"a", b">>", b">", b"b"]);
    }

    #[test]
    fn invalid_sequences_at_input_edges() {
        assert_texts(b"value ===", &[b"value", b"==", b"="]);
        assert_texts(b"=== value", &[b"==", b"=", b"value"]);
    }

    #[test]
    fn mixed_invalid_operators_in_expression() {
        assert_texts(
            b"(a === b) && (c !== d)",
            &[
                b"(", b"a", b"==", b"=", b"b", b")", b"&&", b"(", b"c", b"!=", b"=", b"d", b")",
            ],
        );
    }

    #[test]
    fn invalid_operators_in_where_clause() {
        assert_texts(
            b"SELECT * WHERE x === 10 OR y !== 20",
            &[
                b"SELECT", b"*", b"WHERE", b"x", b"==", b"=", b"10", b"OR", b"y", b"!=", b"=",
                b"20",
            ],
        );
    }

    #[test]
    fn parenthesized_expression() {
        assert_texts(b"(a+b)*c", &[b"(", b"a", b"+", b"b", b")", b"*", b"c"]);
    }

    #[test]
    fn compound_condition() {
        assert_texts(
            b"a >= 10 AND b <= 20",
            &[b"a", b">=", b"10", b"AND", b"b", b"<=", b"20"],
        );
    }
}

mod statements {
    use super::*;

    #[test]
    fn create_table() {
        let sql: &[u8] = b"CREATE TABLE users (id INT, name TEXT NOT NULL)";
        let tokens = tokenize(sql);
        assert_eq!(tokens[0].keyword, Keyword::Create);
        assert_eq!(tokens[1].keyword, Keyword::Table);
        assert_eq!(tokens[2].kind, TokenKind::Identifier);
        assert_eq!(tokens[3].text, &b"("[..]);
        assert_stream_invariants(sql, &tokens);
    }

    #[test]
    fn insert_statement() {
        let sql: &[u8] = b"INSERT INTO t (a, b) VALUES (1, 'x')";
        let tokens = tokenize(sql);
        assert_eq!(tokens[0].keyword, Keyword::Insert);
        assert_eq!(tokens[1].keyword, Keyword::Into);
        let values = tokens.iter().find(|t| t.keyword == Keyword::Values);
        assert!(values.is_some());
        assert_eq!(tokens.last().unwrap().text, &b")"[..]);
        assert_stream_invariants(sql, &tokens);
    }

    #[test]
    fn group_order_limit() {
        let sql: &[u8] = b"SELECT dept FROM emp GROUP BY dept ORDER BY dept LIMIT 10";
        let tokens = tokenize(sql);
        let keywords: Vec<Keyword> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Keyword)
            .map(|t| t.keyword)
            .collect();
        assert_eq!(
            keywords,
            [
                Keyword::Select,
                Keyword::From,
                Keyword::Group,
                Keyword::By,
                Keyword::Order,
                Keyword::By,
                Keyword::Limit,
            ]
        );
        assert_stream_invariants(sql, &tokens);
    }

    #[test]
    fn multi_line_statement_with_comments() {
        let sql: &[u8] = b"SELECT a, -- first\n       b  /* second\n column */\nFROM t;\n";
        let tokens = tokenize(sql);
        assert_eq!(
            texts(&tokens),
            [
                &b"SELECT"[..],
                b"a",
                b",",
                b"-- first\n",
                b"b",
                b"/* second\n column */",
                b"FROM",
                b"t",
                b";",
            ]
        );
        let from = &tokens[6];
        assert_eq!((from.line, from.column), (4, 1));
        assert_stream_invariants(sql, &tokens);
    }
}

mod invariants {
    use super::*;

    fn inputs() -> Vec<Vec<u8>> {
        vec![
            b"".to_vec(),
            b"   \t\n  ".to_vec(),
            b"SELECT * FROM t WHERE x != y".to_vec(),
            b"'unterminated".to_vec(),
            b"/* unterminated".to_vec(),
            b"-- no newline".to_vec(),
            b"a\nb\nc\nd".to_vec(),
            b"'multi\nline\nstring'".to_vec(),
            b"x\x80y \xFF".to_vec(),
            b"1.2.3...4".to_vec(),
            b"==== ::: <<>> !!".to_vec(),
            vec![b' '; 200],
            b"SELECT/*c*/1--t\n+2".to_vec(),
        ]
    }

    #[test]
    fn stream_invariants_hold() {
        for input in inputs() {
            let tokens = tokenize(&input);
            assert_stream_invariants(&input, &tokens);
        }
    }

    #[test]
    fn tokenization_is_deterministic() {
        for input in inputs() {
            let first = tokenize(&input);
            let second = tokenize(&input);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn keyword_resolution_ignores_case_end_to_end() {
        let lower = tokenize(b"select a from b where c");
        let upper = tokenize(b"SELECT A FROM B WHERE C");
        assert_eq!(lower.len(), upper.len());
        for (l, u) in lower.iter().zip(&upper) {
            assert_eq!(l.kind, u.kind);
            assert_eq!(l.keyword, u.keyword);
        }
    }
}

mod simd_levels {
    use super::*;
    use sqlscan::simd::skip::skip_whitespace_scalar;

    fn ws_inputs() -> Vec<Vec<u8>> {
        let mut inputs = vec![
            b"".to_vec(),
            b"x".to_vec(),
            b" \t\r\n x".to_vec(),
            vec![b' '; 300],
        ];
        for run in 0..130usize {
            let mut buf = vec![b'\t'; run];
            buf.push(b'Q');
            inputs.push(buf);
        }
        inputs
    }

    #[test]
    fn available_levels_agree_on_skip_counts() {
        for input in ws_inputs() {
            let expected = skip_whitespace_scalar(&input);

            #[cfg(target_arch = "x86_64")]
            {
                use sqlscan::simd::skip::{
                    skip_whitespace_avx2, skip_whitespace_avx512, skip_whitespace_sse42,
                };
                if is_x86_feature_detected!("sse4.2") {
                    assert_eq!(unsafe { skip_whitespace_sse42(&input) }, expected);
                }
                if is_x86_feature_detected!("avx2") {
                    assert_eq!(unsafe { skip_whitespace_avx2(&input) }, expected);
                }
                if is_x86_feature_detected!("avx512f") && is_x86_feature_detected!("avx512bw") {
                    assert_eq!(unsafe { skip_whitespace_avx512(&input) }, expected);
                }
            }

            #[cfg(target_arch = "aarch64")]
            {
                use sqlscan::simd::skip::skip_whitespace_neon;
                assert_eq!(unsafe { skip_whitespace_neon(&input) }, expected);
            }
        }
    }

    #[test]
    fn reported_level_is_a_known_name() {
        let tokenizer = Tokenizer::new(b"");
        assert!(["AVX-512", "AVX2", "SSE4.2", "NEON", "Scalar"]
            .contains(&tokenizer.simd_level()));
    }
}
