//! Token and node kinds shared by the tokenizer, parser and formatter.

use crate::SyntaxSet;

#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum SyntaxKind {
    WHITESPACE,
    COMMENT,
    NUMBER,
    STRING_DOUBLE,
    STRING_GRAVE,
    CHARACTER,
    IDENT,
    OPERATOR,

    LEFT_PAREN,
    RIGHT_PAREN,
    LEFT_BRACKET,
    RIGHT_BRACKET,
    LEFT_BRACE,
    RIGHT_BRACE,

    EOF,

    BLOCK,
    TOMBSTONE,
}

impl SyntaxKind {
    /// Whitespace and comments.
    pub const fn is_trivia(self) -> bool {
        SyntaxSet::TRIVIA.contains(self)
    }

    /// Quoted string and character literals.
    pub const fn is_literal(self) -> bool {
        SyntaxSet::LITERALS.contains(self)
    }

    pub const fn is_open_delimiter(self) -> bool {
        SyntaxSet::OPEN_DELIMITERS.contains(self)
    }

    pub const fn is_close_delimiter(self) -> bool {
        SyntaxSet::CLOSE_DELIMITERS.contains(self)
    }

    pub const fn is_delimiter(self) -> bool {
        SyntaxSet::DELIMITERS.contains(self)
    }

    /// The delimiter family of an opening or closing delimiter token.
    pub const fn delimiter(self) -> Option<Delimiter> {
        match self {
            SyntaxKind::LEFT_PAREN | SyntaxKind::RIGHT_PAREN => Some(Delimiter::Paren),
            SyntaxKind::LEFT_BRACKET | SyntaxKind::RIGHT_BRACKET => Some(Delimiter::Bracket),
            SyntaxKind::LEFT_BRACE | SyntaxKind::RIGHT_BRACE => Some(Delimiter::Brace),
            _ => None,
        }
    }
}

/// The three block delimiter families.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Delimiter {
    Paren,
    Bracket,
    Brace,
}

impl Delimiter {
    pub const fn open(self) -> char {
        match self {
            Delimiter::Paren => '(',
            Delimiter::Bracket => '[',
            Delimiter::Brace => '{',
        }
    }

    pub const fn close(self) -> char {
        match self {
            Delimiter::Paren => ')',
            Delimiter::Bracket => ']',
            Delimiter::Brace => '}',
        }
    }

    pub const fn open_kind(self) -> SyntaxKind {
        match self {
            Delimiter::Paren => SyntaxKind::LEFT_PAREN,
            Delimiter::Bracket => SyntaxKind::LEFT_BRACKET,
            Delimiter::Brace => SyntaxKind::LEFT_BRACE,
        }
    }

    pub const fn close_kind(self) -> SyntaxKind {
        match self {
            Delimiter::Paren => SyntaxKind::RIGHT_PAREN,
            Delimiter::Bracket => SyntaxKind::RIGHT_BRACKET,
            Delimiter::Brace => SyntaxKind::RIGHT_BRACE,
        }
    }

    pub const fn from_open(c: char) -> Option<Self> {
        match c {
            '(' => Some(Delimiter::Paren),
            '[' => Some(Delimiter::Bracket),
            '{' => Some(Delimiter::Brace),
            _ => None,
        }
    }

    pub const fn from_close(c: char) -> Option<Self> {
        match c {
            ')' => Some(Delimiter::Paren),
            ']' => Some(Delimiter::Bracket),
            '}' => Some(Delimiter::Brace),
            _ => None,
        }
    }
}
