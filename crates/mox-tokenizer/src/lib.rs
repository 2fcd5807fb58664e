mod classes;
mod cursor;

use classes::CharClass;
use cursor::Cursor;
pub use mox_errors::{Error, ErrorKind};
use mox_syntax::SyntaxKind::*;
use mox_syntax::{COMMENT_END, COMMENT_START, Delimiter, ESCAPE};
pub use mox_syntax::SyntaxKind;
use text_size::{TextRange, TextSize};

const PREVIEW_LIMIT: usize = 32;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub range: TextRange,
}

impl Token {
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.range]
    }
}

/// Splits text into classified tokens, one at a time.
///
/// Opening delimiters are tracked on a stack so that every closer is checked
/// against the innermost open block. Delimiters still open at the end of the
/// input are not an error here; the parser reports them.
pub struct Tokenizer<'a> {
    text: &'a str,
    cursor: Cursor<'a>,
    delimiters: Vec<Delimiter>,
    failed: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, cursor: Cursor::new(text), delimiters: Vec::new(), failed: false }
    }

    pub fn offset(&self) -> TextSize {
        self.cursor.offset()
    }

    /// Number of currently open delimiters.
    pub fn depth(&self) -> usize {
        self.delimiters.len()
    }

    /// Returns the next token, or an `EOF` token with an empty range once the
    /// input is exhausted.
    ///
    /// After an error the tokenizer is left mid-token and should be dropped.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        let start = self.offset();
        let kind = self.syntax_kind()?;
        Ok(Token { kind, range: TextRange::new(start, self.offset()) })
    }

    fn syntax_kind(&mut self) -> Result<SyntaxKind, Error> {
        if self.cursor.is_eof() {
            return Ok(EOF);
        }

        let first_char = self.cursor.peek();

        if classes::WHITESPACE.contains(first_char) {
            self.cursor.advance_while(|c| classes::WHITESPACE.contains(c));
            return Ok(WHITESPACE);
        }

        if self.cursor.starts_with(COMMENT_START) {
            return self.comment();
        }

        if classes::DECIMAL.contains(first_char) {
            return self.number();
        }

        if classes::IDENT_START.contains(first_char) {
            self.cursor.advance_while(|c| classes::IDENT.contains(c));
            return Ok(IDENT);
        }

        match first_char {
            '"' => return self.literal(first_char, STRING_DOUBLE),
            '`' => return self.literal(first_char, STRING_GRAVE),
            '\'' => return self.literal(first_char, CHARACTER),
            _ => {}
        }

        if classes::OPERATOR.contains(first_char) {
            return self.operator();
        }

        if let Some(delimiter) = Delimiter::from_open(first_char) {
            self.cursor.advance();
            self.delimiters.push(delimiter);
            return Ok(delimiter.open_kind());
        }

        if let Some(delimiter) = Delimiter::from_close(first_char) {
            return match self.delimiters.last() {
                Some(&open) if open == delimiter => {
                    self.cursor.advance();
                    self.delimiters.pop();
                    Ok(delimiter.close_kind())
                }
                open => Err(self.error(ErrorKind::UnbalancedDelimiter {
                    found: first_char,
                    expected: open.map(|open| open.close()),
                })),
            };
        }

        Err(self.error(ErrorKind::UnexpectedCharacter { preview: self.preview() }))
    }

    fn comment(&mut self) -> Result<SyntaxKind, Error> {
        self.cursor.eat(COMMENT_START);
        let mut depth = 1usize;

        while !self.cursor.is_eof() {
            if self.cursor.eat(COMMENT_START) {
                depth += 1;
            } else if self.cursor.eat(COMMENT_END) {
                depth -= 1;
                if depth == 0 {
                    return Ok(COMMENT);
                }
            } else {
                self.cursor.advance();
            }
        }

        Err(self.error(ErrorKind::UnterminatedComment))
    }

    fn number(&mut self) -> Result<SyntaxKind, Error> {
        let digits = if self.cursor.eat("0b") {
            &classes::BINARY
        } else if self.cursor.eat("0o") {
            &classes::OCTAL
        } else if self.cursor.eat("0x") {
            &classes::HEXADECIMAL
        } else {
            &classes::DECIMAL
        };

        self.digits(digits)?;

        if self.cursor.peek() == '.' {
            self.cursor.advance();
            self.digits(digits)?;
        }

        Ok(NUMBER)
    }

    /// One or more digits that must not run into an identifier character.
    fn digits(&mut self, digits: &CharClass) -> Result<(), Error> {
        if self.cursor.is_eof() || !digits.contains(self.cursor.peek()) {
            return Err(self.malformed_number(digits));
        }

        self.cursor.advance_while(|c| digits.contains(c));

        if classes::IDENT.contains(self.cursor.peek()) {
            return Err(self.malformed_number(digits));
        }

        Ok(())
    }

    fn malformed_number(&self, digits: &CharClass) -> Error {
        self.error(ErrorKind::MalformedNumber { expected: digits.chars(), preview: self.preview() })
    }

    /// Quoted literal. Double and single quotes are escape-aware and may not
    /// be empty; grave quotes are raw. A character holds exactly one scalar
    /// or one escaped scalar.
    fn literal(&mut self, quote: char, kind: SyntaxKind) -> Result<SyntaxKind, Error> {
        let escapes = kind != STRING_GRAVE;

        self.cursor.advance();
        let content_start = self.offset();

        if kind == CHARACTER {
            return self.character(quote, content_start);
        }

        loop {
            if self.cursor.is_eof() {
                return Err(self.error(ErrorKind::UnterminatedLiteral { quote }));
            }

            let c = self.cursor.advance();

            if c == quote {
                if escapes && self.offset() - TextSize::of(quote) == content_start {
                    return Err(Error::new(ErrorKind::EmptyLiteral { quote }, content_start));
                }
                return Ok(kind);
            }

            if escapes && c == ESCAPE {
                if self.cursor.is_eof() {
                    return Err(self.error(ErrorKind::UnterminatedLiteral { quote }));
                }
                self.cursor.advance();
            }
        }
    }

    fn character(&mut self, quote: char, content_start: TextSize) -> Result<SyntaxKind, Error> {
        if self.cursor.is_eof() {
            return Err(self.error(ErrorKind::UnterminatedLiteral { quote }));
        }

        let c = self.cursor.advance();
        if c == quote {
            return Err(Error::new(ErrorKind::EmptyLiteral { quote }, content_start));
        }
        if c == ESCAPE && !self.cursor.is_eof() {
            self.cursor.advance();
        }

        if self.cursor.is_eof() || self.cursor.peek() != quote {
            return Err(self.error(ErrorKind::UnterminatedLiteral { quote }));
        }

        self.cursor.advance();
        Ok(CHARACTER)
    }

    fn operator(&mut self) -> Result<SyntaxKind, Error> {
        let start = self.offset();
        self.cursor.advance_while(|c| classes::OPERATOR.contains(c));

        if self.cursor.previous() == '.' && classes::DECIMAL.contains(self.cursor.peek()) {
            let preview = preview(&self.text[usize::from(start)..]);
            return Err(Error::new(ErrorKind::AmbiguousOperatorNumber { preview }, start));
        }

        Ok(OPERATOR)
    }

    fn preview(&self) -> String {
        preview(self.cursor.rest())
    }

    fn error(&self, kind: ErrorKind) -> Error {
        Error::new(kind, self.offset())
    }
}

/// At most `PREVIEW_LIMIT` characters of `rest`, marked when truncated.
fn preview(rest: &str) -> String {
    match rest.char_indices().nth(PREVIEW_LIMIT) {
        Some((end, _)) => format!("{} ...", &rest[..end]),
        None => rest.to_owned(),
    }
}

/// Yields tokens up to, not including, `EOF`. Stops after the first error.
impl Iterator for Tokenizer<'_> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        match self.next_token() {
            Ok(token) if token.kind == EOF => None,
            Ok(token) => Some(Ok(token)),
            Err(error) => {
                self.failed = true;
                Some(Err(error))
            }
        }
    }
}

pub fn tokenize(text: &str) -> Result<Vec<Token>, Error> {
    Tokenizer::new(text).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[track_caller]
    fn check(text: &str, expected: &[(SyntaxKind, &str)]) {
        let actual = tokenize(text)
            .unwrap_or_else(|error| panic!("{text:?} failed: {error:#}"))
            .into_iter()
            .map(|token| (token.kind, token.text(text)))
            .collect::<Vec<_>>();
        assert_eq!(actual, expected, "Input: {text:?}");
    }

    #[track_caller]
    fn check_error(text: &str, offset: u32) -> ErrorKind {
        let error = tokenize(text).expect_err(text);
        assert_eq!(error.offset(), TextSize::new(offset), "Input: {text:?}, error: {error}");
        error.kind().clone()
    }

    #[test]
    fn whitespace_runs() {
        check(" \t\x0B\r\n\n", &[(WHITESPACE, " \t\x0B\r\n\n")]);
        check("a \r\nb", &[(IDENT, "a"), (WHITESPACE, " \r\n"), (IDENT, "b")]);
    }

    #[test]
    fn number_literals() {
        let inputs = ["123", "0", "012", "0b1010", "0o755", "0x1f", "123.456", "0b10.01", "0x.", "1.5"];

        for input in inputs {
            let mut tokenizer = Tokenizer::new(input);
            match tokenizer.next_token() {
                Ok(token) => {
                    assert_eq!(token.kind, NUMBER, "Input: '{input}'");
                    assert_eq!(tokenizer.next_token().map(|token| token.kind), Ok(EOF));
                }
                Err(error) => {
                    assert_eq!(input, "0x.", "unexpected error {error}");
                    assert!(matches!(error.kind(), ErrorKind::MalformedNumber { .. }));
                }
            }
        }
    }

    #[test]
    fn number_followed_by_identifier_character() {
        let kind = check_error("123abc", 3);
        assert_eq!(kind, ErrorKind::MalformedNumber { expected: "0123456789", preview: "abc".into() });

        let kind = check_error("0b1012", 5);
        assert_eq!(kind, ErrorKind::MalformedNumber { expected: "01", preview: "2".into() });

        let kind = check_error("1.5e3", 3);
        assert!(matches!(kind, ErrorKind::MalformedNumber { .. }));

        let kind = check_error("0x", 2);
        assert!(matches!(kind, ErrorKind::MalformedNumber { .. }));

        let kind = check_error("7. ", 2);
        assert!(matches!(kind, ErrorKind::MalformedNumber { .. }));
    }

    #[test]
    fn identifiers() {
        check("foo_1 _bar Baz", &[
            (IDENT, "foo_1"),
            (WHITESPACE, " "),
            (IDENT, "_bar"),
            (WHITESPACE, " "),
            (IDENT, "Baz"),
        ]);
    }

    #[test]
    fn operators_are_maximal() {
        check("a++b", &[(IDENT, "a"), (OPERATOR, "++"), (IDENT, "b")]);
        check(r"x <=> \y", &[
            (IDENT, "x"),
            (WHITESPACE, " "),
            (OPERATOR, "<=>"),
            (WHITESPACE, " "),
            (OPERATOR, r"\"),
            (IDENT, "y"),
        ]);
        check("a.b", &[(IDENT, "a"), (OPERATOR, "."), (IDENT, "b")]);
    }

    #[test]
    fn operator_dot_before_digit_is_ambiguous() {
        let kind = check_error("x +.5", 2);
        assert_eq!(kind, ErrorKind::AmbiguousOperatorNumber { preview: "+.5".into() });

        check("1 .. 2", &[
            (NUMBER, "1"),
            (WHITESPACE, " "),
            (OPERATOR, ".."),
            (WHITESPACE, " "),
            (NUMBER, "2"),
        ]);
    }

    #[test]
    fn string_literals() {
        check(r#""hello world" `raw\` 'c'"#, &[
            (STRING_DOUBLE, r#""hello world""#),
            (WHITESPACE, " "),
            (STRING_GRAVE, r"`raw\`"),
            (WHITESPACE, " "),
            (CHARACTER, "'c'"),
        ]);
        check(r#""say \"hi\"" '\''"#, &[
            (STRING_DOUBLE, r#""say \"hi\"""#),
            (WHITESPACE, " "),
            (CHARACTER, r"'\''"),
        ]);
        check("\"multi\nline\"", &[(STRING_DOUBLE, "\"multi\nline\"")]);
        check("``", &[(STRING_GRAVE, "``")]);
        check("\"ü\"", &[(STRING_DOUBLE, "\"ü\"")]);
    }

    #[test]
    fn empty_literals() {
        assert_eq!(check_error(r#"x """#, 3), ErrorKind::EmptyLiteral { quote: '"' });
        assert_eq!(check_error("''", 1), ErrorKind::EmptyLiteral { quote: '\'' });
    }

    #[test]
    fn unterminated_literals() {
        assert_eq!(check_error(r#""abc"#, 4), ErrorKind::UnterminatedLiteral { quote: '"' });
        assert_eq!(check_error(r#""abc\"#, 5), ErrorKind::UnterminatedLiteral { quote: '"' });
        assert_eq!(check_error("`", 1), ErrorKind::UnterminatedLiteral { quote: '`' });
    }

    #[test]
    fn character_literals_hold_one_element() {
        check(r"'é' '\\' '\''", &[
            (CHARACTER, "'é'"),
            (WHITESPACE, " "),
            (CHARACTER, r"'\\'"),
            (WHITESPACE, " "),
            (CHARACTER, r"'\''"),
        ]);

        let quote = '\'';
        assert_eq!(check_error("'ab'", 2), ErrorKind::UnterminatedLiteral { quote });
        assert_eq!(check_error(r"'\ab'", 3), ErrorKind::UnterminatedLiteral { quote });
        assert_eq!(check_error("'a", 2), ErrorKind::UnterminatedLiteral { quote });
        assert_eq!(check_error(r"'\", 2), ErrorKind::UnterminatedLiteral { quote });
        assert_eq!(check_error("'", 1), ErrorKind::UnterminatedLiteral { quote });
    }

    #[test]
    fn nested_comments() {
        check("{{ a {{ b }} c }}x", &[(COMMENT, "{{ a {{ b }} c }}"), (IDENT, "x")]);
        check("{{}}", &[(COMMENT, "{{}}")]);
        assert_eq!(check_error("{{ a {{ b }}", 12), ErrorKind::UnterminatedComment);
    }

    #[test]
    fn delimiters() {
        check("([{}])", &[
            (LEFT_PAREN, "("),
            (LEFT_BRACKET, "["),
            (LEFT_BRACE, "{"),
            (RIGHT_BRACE, "}"),
            (RIGHT_BRACKET, "]"),
            (RIGHT_PAREN, ")"),
        ]);
        check("(((", &[(LEFT_PAREN, "("), (LEFT_PAREN, "("), (LEFT_PAREN, "(")]);
    }

    #[test]
    fn unbalanced_delimiters() {
        assert_eq!(
            check_error("(a))", 3),
            ErrorKind::UnbalancedDelimiter { found: ')', expected: None }
        );
        assert_eq!(
            check_error("[a)", 2),
            ErrorKind::UnbalancedDelimiter { found: ')', expected: Some(']') }
        );
    }

    #[test]
    fn unexpected_character() {
        let kind = check_error("a, b", 1);
        assert_eq!(kind, ErrorKind::UnexpectedCharacter { preview: ", b".into() });

        let long = format!("a;{}", "x".repeat(40));
        let ErrorKind::UnexpectedCharacter { preview } = check_error(&long, 1) else {
            panic!("expected an unexpected character error");
        };
        assert_eq!(preview, format!(";{} ...", "x".repeat(31)));
    }

    #[test]
    fn multibyte_input_is_never_split() {
        let kind = check_error("é", 0);
        assert_eq!(kind, ErrorKind::UnexpectedCharacter { preview: "é".into() });
        check("{{ é }}", &[(COMMENT, "{{ é }}")]);
    }

    #[test]
    fn eof_is_sticky() {
        let mut tokenizer = Tokenizer::new("(");
        assert_eq!(tokenizer.next_token().map(|token| token.kind), Ok(LEFT_PAREN));
        assert_eq!(tokenizer.depth(), 1);
        assert_eq!(tokenizer.next_token().map(|token| token.kind), Ok(EOF));
        assert_eq!(tokenizer.next_token().map(|token| token.kind), Ok(EOF));
    }

    #[test]
    fn iterator_stops_after_error() {
        let mut tokenizer = Tokenizer::new("a ) b");
        assert!(matches!(tokenizer.next(), Some(Ok(_))));
        assert!(matches!(tokenizer.next(), Some(Ok(_))));
        assert!(matches!(tokenizer.next(), Some(Err(_))));
        assert!(tokenizer.next().is_none());
    }

    #[test]
    fn tokens_cover_the_input() {
        let text = "{{ c }}\n(define x [0x1f 'a' \"s\" `g`] {y}) -> 1.5\n";
        let tokens = tokenize(text).unwrap();
        let joined = tokens.iter().map(|token| token.text(text)).collect::<String>();
        assert_eq!(joined, text);
    }
}
