//! Fuzz testing for the tokenizer.
//!
//! Builds inputs from a mix of raw bytes and SQL-shaped fragments so the
//! deeper scanner paths (strings with doubled quotes, comments, operator
//! runs) are reached often, then asserts totality and the stream
//! invariants: tokens are in-bounds, contiguous, and separated only by
//! whitespace.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use sqlscan::{TokenKind, Tokenizer};

#[derive(Debug, Arbitrary)]
struct TokenizeInput {
    fragments: Vec<Fragment>,
}

#[derive(Debug, Arbitrary)]
enum Fragment {
    Raw(Vec<u8>),
    Word(String),
    Number(u64),
    SingleQuoted(String),
    DoubleQuoted(String),
    OperatorRun(Vec<u8>),
    LineComment(String),
    BlockComment(String),
    Newline,
    Space,
}

fn render(fragments: &[Fragment], out: &mut Vec<u8>) {
    for fragment in fragments {
        match fragment {
            Fragment::Raw(bytes) => out.extend_from_slice(bytes),
            Fragment::Word(word) => out.extend_from_slice(word.as_bytes()),
            Fragment::Number(n) => out.extend_from_slice(n.to_string().as_bytes()),
            Fragment::SingleQuoted(body) => {
                out.push(b'\'');
                out.extend_from_slice(body.replace('\'', "''").as_bytes());
                out.push(b'\'');
            }
            Fragment::DoubleQuoted(body) => {
                out.push(b'"');
                out.extend_from_slice(body.replace('"', "\"\"").as_bytes());
                out.push(b'"');
            }
            Fragment::OperatorRun(bytes) => {
                const OPERATORS: &[u8] = b"+-*/%^~=<>!&|:.(){}[],;";
                for &b in bytes {
                    out.push(OPERATORS[b as usize % OPERATORS.len()]);
                }
            }
            Fragment::LineComment(body) => {
                out.extend_from_slice(b"--");
                out.extend_from_slice(body.replace('\n', " ").as_bytes());
                out.push(b'\n');
            }
            Fragment::BlockComment(body) => {
                out.extend_from_slice(b"/*");
                out.extend_from_slice(body.replace("*/", "**").as_bytes());
                out.extend_from_slice(b"*/");
            }
            Fragment::Newline => out.push(b'\n'),
            Fragment::Space => out.push(b' '),
        }
    }
}

fuzz_target!(|input: TokenizeInput| {
    if input.fragments.len() > 512 {
        return;
    }

    let mut data = Vec::new();
    render(&input.fragments, &mut data);
    if data.len() > 1 << 20 {
        return;
    }

    let tokens = Tokenizer::new(&data).tokenize();

    let base = data.as_ptr() as usize;
    let mut cursor = 0usize;
    for token in &tokens {
        assert!(token.kind != TokenKind::Whitespace);
        assert!(token.kind != TokenKind::Eof);

        let offset = token.text.as_ptr() as usize - base;
        assert!(offset >= cursor, "tokens overlap or regress");
        assert!(
            offset + token.text.len() <= data.len(),
            "token slice out of bounds"
        );
        assert!(
            data[cursor..offset]
                .iter()
                .all(|&b| matches!(b, b' ' | b'\t' | b'\n' | b'\r')),
            "non-whitespace gap between tokens"
        );
        assert!(token.line >= 1 && token.column >= 1);
        cursor = offset + token.text.len();
    }
    assert!(
        data[cursor..]
            .iter()
            .all(|&b| matches!(b, b' ' | b'\t' | b'\n' | b'\r')),
        "non-whitespace tail after last token"
    );
});
