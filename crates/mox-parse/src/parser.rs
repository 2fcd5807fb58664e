use mox_errors::{Error, ErrorKind};
use mox_syntax::{Block, COMMENT_START, Delimiter, Node, SyntaxKind};
use mox_tokenizer::{Token, Tokenizer};
use text_size::TextSize;

pub(crate) struct Parser<'a> {
    text: &'a str,
    tokenizer: Tokenizer<'a>,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self { text, tokenizer: Tokenizer::new(text) }
    }

    /// Top-level sequence. Completed nodes are pushed as they finish so the
    /// caller keeps them when a later token fails.
    pub(crate) fn nodes(&mut self, nodes: &mut Vec<Node>) -> Result<(), Error> {
        loop {
            let token = self.bump()?;
            if token.kind == SyntaxKind::EOF {
                return Ok(());
            }
            nodes.push(self.node(token)?);
        }
    }

    fn bump(&mut self) -> Result<Token, Error> {
        let before = self.tokenizer.offset();
        let token = self.tokenizer.next_token()?;

        assert!(
            token.kind == SyntaxKind::EOF || self.tokenizer.offset() > before,
            "parser made no progress at offset {before:?}"
        );

        Ok(token)
    }

    fn node(&mut self, token: Token) -> Result<Node, Error> {
        let text = token.text(self.text);

        let node = match token.kind {
            SyntaxKind::WHITESPACE => Node::Whitespace(text.into()),
            SyntaxKind::COMMENT => Node::Comment(strip(text, COMMENT_START.len()).into()),
            SyntaxKind::NUMBER => Node::Number(text.into()),
            SyntaxKind::STRING_DOUBLE => Node::StringDouble(strip(text, 1).into()),
            SyntaxKind::STRING_GRAVE => Node::StringGrave(strip(text, 1).into()),
            SyntaxKind::CHARACTER => Node::Character(strip(text, 1).into()),
            SyntaxKind::IDENT => Node::Identifier(text.into()),
            SyntaxKind::OPERATOR => Node::Operator(text.into()),
            SyntaxKind::LEFT_PAREN => self.block(Delimiter::Paren)?,
            SyntaxKind::LEFT_BRACKET => self.block(Delimiter::Bracket)?,
            SyntaxKind::LEFT_BRACE => self.block(Delimiter::Brace)?,
            SyntaxKind::RIGHT_PAREN
            | SyntaxKind::RIGHT_BRACKET
            | SyntaxKind::RIGHT_BRACE
            | SyntaxKind::EOF
            | SyntaxKind::BLOCK
            | SyntaxKind::TOMBSTONE => unreachable!("{:?} is not a node start", token.kind),
        };

        Ok(node)
    }

    /// Children up to the closer. The tokenizer has already checked that the
    /// closer matches `delimiter`.
    fn block(&mut self, delimiter: Delimiter) -> Result<Node, Error> {
        let mut children = Vec::new();

        loop {
            let token = self.bump()?;

            match token.kind {
                SyntaxKind::EOF => {
                    return Err(Error::new(
                        ErrorKind::UnterminatedBlock { delimiter },
                        TextSize::of(self.text),
                    ));
                }
                kind if kind.is_close_delimiter() => {
                    debug_assert_eq!(kind, delimiter.close_kind());
                    return Ok(Node::Block(Block::new(delimiter, children)));
                }
                _ => children.push(self.node(token)?),
            }
        }
    }
}

/// The text between an opening and a closing marker of `width` bytes each.
fn strip(text: &str, width: usize) -> &str {
    &text[width..text.len() - width]
}
