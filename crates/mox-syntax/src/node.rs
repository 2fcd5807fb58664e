//! Full-fidelity syntax nodes.
//!
//! Every byte of the parsed text lives in exactly one leaf, so rendering the
//! nodes back in order reproduces the input. Whitespace and comments are
//! ordinary nodes rather than trivia hanging off tokens.

use std::borrow::Cow;
use std::fmt;

use crate::{Delimiter, SyntaxKind, SyntaxSet};

pub const COMMENT_START: &str = "{{";
pub const COMMENT_END: &str = "}}";
pub const ESCAPE: char = '\\';

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Node {
    Whitespace(Box<str>),
    /// Text between the outermost `{{` and `}}`, nested pairs included.
    Comment(Box<str>),
    Number(Box<str>),
    /// Content between `"` quotes, escapes kept as written.
    StringDouble(Box<str>),
    /// Content between backticks; never escaped.
    StringGrave(Box<str>),
    /// Content between `'` quotes, escapes kept as written.
    Character(Box<str>),
    Identifier(Box<str>),
    Operator(Box<str>),
    Block(Block),
    /// A removed node. Ignored when rendering so that sequences can be edited
    /// without shifting their indices.
    Tombstone,
}

/// A matched pair of delimiters and everything between them.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Block {
    pub delimiter: Delimiter,
    pub children: Vec<Node>,
}

impl Block {
    pub fn new(delimiter: Delimiter, children: Vec<Node>) -> Self {
        Self { delimiter, children }
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }
}

impl Node {
    pub fn kind(&self) -> SyntaxKind {
        match self {
            Node::Whitespace(_) => SyntaxKind::WHITESPACE,
            Node::Comment(_) => SyntaxKind::COMMENT,
            Node::Number(_) => SyntaxKind::NUMBER,
            Node::StringDouble(_) => SyntaxKind::STRING_DOUBLE,
            Node::StringGrave(_) => SyntaxKind::STRING_GRAVE,
            Node::Character(_) => SyntaxKind::CHARACTER,
            Node::Identifier(_) => SyntaxKind::IDENT,
            Node::Operator(_) => SyntaxKind::OPERATOR,
            Node::Block(_) => SyntaxKind::BLOCK,
            Node::Tombstone => SyntaxKind::TOMBSTONE,
        }
    }

    /// The stored text of a leaf, without quotes or comment delimiters.
    pub fn payload(&self) -> Option<&str> {
        match self {
            Node::Whitespace(text)
            | Node::Comment(text)
            | Node::Number(text)
            | Node::StringDouble(text)
            | Node::StringGrave(text)
            | Node::Character(text)
            | Node::Identifier(text)
            | Node::Operator(text) => Some(text),
            Node::Block(_) | Node::Tombstone => None,
        }
    }

    pub fn as_block(&self) -> Option<&Block> {
        match self {
            Node::Block(block) => Some(block),
            _ => None,
        }
    }

    pub fn is_tombstone(&self) -> bool {
        matches!(self, Node::Tombstone)
    }

    /// Replaces the node with a tombstone and returns the old node.
    pub fn remove(&mut self) -> Node {
        std::mem::replace(self, Node::Tombstone)
    }

    /// Replaces the node in place and returns the old node.
    pub fn replace(&mut self, node: Node) -> Node {
        std::mem::replace(self, node)
    }

    /// The value of a string or character literal.
    ///
    /// A backslash stands for the scalar value that follows it; there is no
    /// table of named escapes. Grave strings are returned as written.
    pub fn unescaped(&self) -> Option<Cow<'_, str>> {
        match self {
            Node::StringDouble(text) | Node::Character(text) => Some(unescape(text)),
            Node::StringGrave(text) => Some(Cow::Borrowed(text)),
            _ => None,
        }
    }
}

fn unescape(text: &str) -> Cow<'_, str> {
    if !text.contains(ESCAPE) {
        return Cow::Borrowed(text);
    }

    let mut value = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == ESCAPE {
            if let Some(escaped) = chars.next() {
                value.push(escaped);
            }
        } else {
            value.push(c);
        }
    }
    Cow::Owned(value)
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Whitespace(text)
            | Node::Number(text)
            | Node::Identifier(text)
            | Node::Operator(text) => f.write_str(text),
            Node::Comment(text) => write!(f, "{COMMENT_START}{text}{COMMENT_END}"),
            Node::StringDouble(text) => write!(f, "\"{text}\""),
            Node::StringGrave(text) => write!(f, "`{text}`"),
            Node::Character(text) => write!(f, "'{text}'"),
            Node::Block(block) => fmt::Display::fmt(block, f),
            Node::Tombstone => Ok(()),
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.delimiter.open(), Render(&self.children), self.delimiter.close())
    }
}

/// Verbatim rendering of a node sequence.
///
/// Tombstones are skipped. Two adjacent identifiers or numbers, which the
/// parser never produces but edits can, are separated by a single space so
/// the output still parses back into the same nodes.
pub struct Render<'a>(pub &'a [Node]);

impl fmt::Display for Render<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut prev = None;

        for node in self.0 {
            if node.is_tombstone() {
                continue;
            }

            let kind = node.kind();
            if prev.is_some_and(|prev| SyntaxSet::WORDS.contains(prev))
                && SyntaxSet::WORDS.contains(kind)
            {
                f.write_str(" ")?;
            }

            fmt::Display::fmt(node, f)?;
            prev = Some(kind);
        }

        Ok(())
    }
}

pub fn render(nodes: &[Node]) -> String {
    Render(nodes).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(text: &str) -> Node {
        Node::Identifier(text.into())
    }

    #[test]
    fn render_leaves() {
        let nodes = vec![
            Node::Comment(" comment ".into()),
            Node::Whitespace(" ".into()),
            Node::Block(Block::new(
                Delimiter::Paren,
                vec![
                    Node::Number("123.456".into()),
                    Node::Whitespace(" ".into()),
                    Node::StringDouble("hello world".into()),
                ],
            )),
            Node::Character("\\'".into()),
            Node::StringGrave("raw\\".into()),
        ];

        assert_eq!(render(&nodes), "{{ comment }} (123.456 \"hello world\")'\\''`raw\\`");
    }

    #[test]
    fn render_skips_tombstones() {
        let nodes = vec![Node::Tombstone, ident("one"), Node::Tombstone, ident("two"), Node::Tombstone];
        assert_eq!(render(&nodes), "one two");
    }

    #[test]
    fn render_separates_words() {
        let nodes = vec![
            ident("one"),
            ident("two"),
            Node::StringDouble("three".into()),
            ident("four"),
            Node::Number("123".into()),
            Node::Number("456".into()),
            ident("five"),
            Node::Operator("++".into()),
            ident("six"),
        ];
        assert_eq!(render(&nodes), "one two\"three\"four 123 456 five++six");
    }

    #[test]
    fn remove_and_replace() {
        let mut nodes = vec![ident("a"), Node::Whitespace(" ".into()), ident("b")];

        let removed = nodes[1].remove();
        assert_eq!(removed, Node::Whitespace(" ".into()));
        assert_eq!(render(&nodes), "a b");

        nodes[2].replace(Node::Block(Block::new(Delimiter::Bracket, vec![ident("c")])));
        assert_eq!(render(&nodes), "a[c]");
    }

    #[test]
    fn unescaped_literals() {
        assert_eq!(Node::StringDouble(r#"a\"b\\c\n"#.into()).unescaped().as_deref(), Some("a\"b\\cn"));
        assert_eq!(Node::Character(r"\'".into()).unescaped().as_deref(), Some("'"));
        assert_eq!(Node::StringGrave(r"a\b".into()).unescaped().as_deref(), Some(r"a\b"));
        assert_eq!(ident("x").unescaped(), None);
    }
}
