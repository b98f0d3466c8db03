//! Reserved word table.
//!
//! The table is built once, on first use, and only read afterwards. Every
//! scanner on every thread shares the same `&'static Keywords`.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use crate::token::TokenKind;

const RESERVED: [(&str, TokenKind); 16] = [
    ("and", TokenKind::And),
    ("class", TokenKind::Class),
    ("else", TokenKind::Else),
    ("false", TokenKind::False),
    ("for", TokenKind::For),
    ("fun", TokenKind::Fun),
    ("if", TokenKind::If),
    ("nil", TokenKind::Nil),
    ("or", TokenKind::Or),
    ("print", TokenKind::Print),
    ("return", TokenKind::Return),
    ("super", TokenKind::Super),
    ("this", TokenKind::This),
    ("true", TokenKind::True),
    ("var", TokenKind::Var),
    ("while", TokenKind::While),
];

static KEYWORDS: OnceLock<Keywords> = OnceLock::new();

/// Mapping from reserved word spelling to its keyword kind.
#[derive(Debug)]
pub struct Keywords {
    map: FxHashMap<&'static str, TokenKind>,
}

impl Keywords {
    fn new() -> Self {
        let mut map = FxHashMap::with_capacity_and_hasher(RESERVED.len(), Default::default());
        map.extend(RESERVED);
        Self { map }
    }

    /// The process-wide table.
    pub fn global() -> &'static Keywords {
        KEYWORDS.get_or_init(Keywords::new)
    }

    /// Exact, case-sensitive lookup.
    #[inline]
    pub fn get(&self, ident: &str) -> Option<TokenKind> {
        self.map.get(ident).copied()
    }

    /// Returns true if `ident` is reserved.
    #[inline]
    pub fn contains(&self, ident: &str) -> bool {
        self.map.contains_key(ident)
    }

    /// Number of reserved words.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if no words are reserved.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over `(spelling, kind)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, TokenKind)> + '_ {
        self.map.iter().map(|(word, kind)| (*word, *kind))
    }
}
