//! # Reserved Word Table
//!
//! Keywords are grouped into buckets by byte length; within a bucket the
//! entries are stored sorted by their canonical uppercase text. Lookup folds
//! the candidate to uppercase into a fixed stack buffer, selects the bucket
//! for its length, and binary-searches. Identifiers longer than
//! `KEYWORD_MAX_LEN` can never be keywords and are rejected before the fold.
//!
//! Case folding is ASCII-only (`a-z` -> `A-Z`). SQL reserved words are
//! ASCII; identifiers containing non-ASCII bytes are folded byte-for-byte
//! unchanged and simply fail the comparison.

use crate::config::KEYWORD_MAX_LEN;

/// Identifier for a recognized reserved word.
///
/// `Unknown` is the sentinel carried by every non-keyword token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Unknown,
    Add,
    All,
    Alter,
    And,
    As,
    Asc,
    Begin,
    Between,
    By,
    Case,
    Cast,
    Check,
    Column,
    Commit,
    Constraint,
    Create,
    Cross,
    Default,
    Delete,
    Desc,
    Distinct,
    Drop,
    Else,
    End,
    Except,
    Exists,
    False,
    For,
    Foreign,
    From,
    Full,
    Group,
    Having,
    If,
    In,
    Index,
    Inner,
    Insert,
    Intersect,
    Into,
    Is,
    Join,
    Key,
    Left,
    Like,
    Limit,
    Natural,
    Not,
    Null,
    Offset,
    On,
    Or,
    Order,
    Outer,
    Over,
    Primary,
    Recursive,
    References,
    Replace,
    Right,
    Rollback,
    Select,
    Set,
    Table,
    Then,
    To,
    Transaction,
    True,
    Truncate,
    Union,
    Unique,
    Update,
    Using,
    Values,
    View,
    When,
    Where,
    With,
}

type Entry = (&'static [u8], Keyword);

// Each bucket is sorted by text; binary search below depends on it. The
// bucket ordering tests exercise every table.
static KEYWORDS_LEN_2: &[Entry] = &[
    (b"AS", Keyword::As),
    (b"BY", Keyword::By),
    (b"IF", Keyword::If),
    (b"IN", Keyword::In),
    (b"IS", Keyword::Is),
    (b"ON", Keyword::On),
    (b"OR", Keyword::Or),
    (b"TO", Keyword::To),
];

static KEYWORDS_LEN_3: &[Entry] = &[
    (b"ADD", Keyword::Add),
    (b"ALL", Keyword::All),
    (b"AND", Keyword::And),
    (b"ASC", Keyword::Asc),
    (b"END", Keyword::End),
    (b"FOR", Keyword::For),
    (b"KEY", Keyword::Key),
    (b"NOT", Keyword::Not),
    (b"SET", Keyword::Set),
];

static KEYWORDS_LEN_4: &[Entry] = &[
    (b"CASE", Keyword::Case),
    (b"CAST", Keyword::Cast),
    (b"DESC", Keyword::Desc),
    (b"DROP", Keyword::Drop),
    (b"ELSE", Keyword::Else),
    (b"FROM", Keyword::From),
    (b"FULL", Keyword::Full),
    (b"INTO", Keyword::Into),
    (b"JOIN", Keyword::Join),
    (b"LEFT", Keyword::Left),
    (b"LIKE", Keyword::Like),
    (b"NULL", Keyword::Null),
    (b"OVER", Keyword::Over),
    (b"THEN", Keyword::Then),
    (b"TRUE", Keyword::True),
    (b"VIEW", Keyword::View),
    (b"WHEN", Keyword::When),
    (b"WITH", Keyword::With),
];

static KEYWORDS_LEN_5: &[Entry] = &[
    (b"ALTER", Keyword::Alter),
    (b"BEGIN", Keyword::Begin),
    (b"CHECK", Keyword::Check),
    (b"CROSS", Keyword::Cross),
    (b"FALSE", Keyword::False),
    (b"GROUP", Keyword::Group),
    (b"INDEX", Keyword::Index),
    (b"INNER", Keyword::Inner),
    (b"LIMIT", Keyword::Limit),
    (b"ORDER", Keyword::Order),
    (b"OUTER", Keyword::Outer),
    (b"RIGHT", Keyword::Right),
    (b"TABLE", Keyword::Table),
    (b"UNION", Keyword::Union),
    (b"USING", Keyword::Using),
    (b"WHERE", Keyword::Where),
];

static KEYWORDS_LEN_6: &[Entry] = &[
    (b"COLUMN", Keyword::Column),
    (b"COMMIT", Keyword::Commit),
    (b"CREATE", Keyword::Create),
    (b"DELETE", Keyword::Delete),
    (b"EXCEPT", Keyword::Except),
    (b"EXISTS", Keyword::Exists),
    (b"HAVING", Keyword::Having),
    (b"INSERT", Keyword::Insert),
    (b"OFFSET", Keyword::Offset),
    (b"SELECT", Keyword::Select),
    (b"UNIQUE", Keyword::Unique),
    (b"UPDATE", Keyword::Update),
    (b"VALUES", Keyword::Values),
];

static KEYWORDS_LEN_7: &[Entry] = &[
    (b"BETWEEN", Keyword::Between),
    (b"DEFAULT", Keyword::Default),
    (b"FOREIGN", Keyword::Foreign),
    (b"NATURAL", Keyword::Natural),
    (b"PRIMARY", Keyword::Primary),
    (b"REPLACE", Keyword::Replace),
];

static KEYWORDS_LEN_8: &[Entry] = &[
    (b"DISTINCT", Keyword::Distinct),
    (b"ROLLBACK", Keyword::Rollback),
    (b"TRUNCATE", Keyword::Truncate),
];

static KEYWORDS_LEN_9: &[Entry] = &[
    (b"INTERSECT", Keyword::Intersect),
    (b"RECURSIVE", Keyword::Recursive),
];

static KEYWORDS_LEN_10: &[Entry] = &[
    (b"CONSTRAINT", Keyword::Constraint),
    (b"REFERENCES", Keyword::References),
];

static KEYWORDS_LEN_11: &[Entry] = &[(b"TRANSACTION", Keyword::Transaction)];

const LONGEST_KEYWORD: usize = 11;
const _: () = assert!(LONGEST_KEYWORD <= KEYWORD_MAX_LEN);

static EMPTY_BUCKET: &[Entry] = &[];

/// Buckets indexed by keyword byte length.
static BUCKETS: [&[Entry]; KEYWORD_MAX_LEN + 1] = {
    let mut buckets: [&[Entry]; KEYWORD_MAX_LEN + 1] = [EMPTY_BUCKET; KEYWORD_MAX_LEN + 1];
    buckets[2] = KEYWORDS_LEN_2;
    buckets[3] = KEYWORDS_LEN_3;
    buckets[4] = KEYWORDS_LEN_4;
    buckets[5] = KEYWORDS_LEN_5;
    buckets[6] = KEYWORDS_LEN_6;
    buckets[7] = KEYWORDS_LEN_7;
    buckets[8] = KEYWORDS_LEN_8;
    buckets[9] = KEYWORDS_LEN_9;
    buckets[10] = KEYWORDS_LEN_10;
    buckets[11] = KEYWORDS_LEN_11;
    buckets
};

/// Resolves an identifier-shaped byte slice to its keyword id.
///
/// Returns [`Keyword::Unknown`] when the slice is not a reserved word. The
/// match is case-insensitive over ASCII and never allocates.
pub fn find_keyword(text: &[u8]) -> Keyword {
    if text.len() > KEYWORD_MAX_LEN {
        return Keyword::Unknown;
    }

    let bucket = BUCKETS[text.len()];
    if bucket.is_empty() {
        return Keyword::Unknown;
    }

    let mut folded = [0u8; KEYWORD_MAX_LEN];
    for (dst, &src) in folded.iter_mut().zip(text) {
        *dst = src.to_ascii_uppercase();
    }
    let needle = &folded[..text.len()];

    match bucket.binary_search_by(|&(canonical, _)| canonical.cmp(needle)) {
        Ok(index) => bucket[index].1,
        Err(_) => Keyword::Unknown,
    }
}
