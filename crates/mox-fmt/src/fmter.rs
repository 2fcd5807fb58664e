use std::io;

use mox_syntax::SyntaxKind;
use mox_tokenizer::Tokenizer;

use crate::{FormatError, FormatOptions};

const NEWLINES: &str = "\n\n";
const LINE_ENDS: [char; 2] = ['\r', '\n'];

/// Streaming formatter state.
///
/// Indentation is decided per line: delimiters opened on a line indent the
/// lines after it by one level, no matter how many were opened, and a line
/// that starts by closing delimiters is dedented by one level.
pub(crate) struct Fmter<'o, W> {
    out: W,
    unit: &'o str,
    prev: Option<SyntaxKind>,
    /// Delimiters opened minus closed on the current line.
    balance: i32,
    indent: usize,
    /// -1 once the current line has been dedented.
    shifted: i8,
    /// Whether the current line already has content.
    inline: bool,
    /// Whether the last byte written was `{`.
    after_brace: bool,
}

impl<'o, W: io::Write> Fmter<'o, W> {
    pub(crate) fn new(out: W, options: &'o FormatOptions) -> Self {
        Self {
            out,
            unit: &options.indent,
            prev: None,
            balance: 0,
            indent: 0,
            shifted: 0,
            inline: false,
            after_brace: false,
        }
    }

    pub(crate) fn run(&mut self, text: &str) -> Result<(), FormatError> {
        let mut tokenizer = Tokenizer::new(text);

        loop {
            let token = tokenizer.next_token()?;
            if token.kind == SyntaxKind::EOF {
                if tokenizer.depth() > 0 {
                    tracing::debug!(open = tokenizer.depth(), "unclosed delimiters at end of input");
                }
                return Ok(());
            }
            self.token(token.kind, token.text(text))?;
        }
    }

    pub(crate) fn finish(mut self) -> io::Result<()> {
        self.out.flush()
    }

    fn token(&mut self, kind: SyntaxKind, text: &str) -> io::Result<()> {
        match kind {
            SyntaxKind::WHITESPACE => self.whitespace(text),
            kind if kind.is_literal() => self.literal(kind, text),
            kind if kind.is_open_delimiter() => self.open(kind, text),
            kind if kind.is_close_delimiter() => self.close(kind, text),
            _ => self.atom(kind, text),
        }
    }

    fn whitespace(&mut self, text: &str) -> io::Result<()> {
        if self.prev.is_none_or(SyntaxKind::is_open_delimiter) {
            return Ok(());
        }

        let breaks = line_breaks(text).min(NEWLINES.len());
        if breaks > 0 {
            self.write(&NEWLINES[..breaks])?;
        }

        self.prev = Some(SyntaxKind::WHITESPACE);
        Ok(())
    }

    fn atom(&mut self, kind: SyntaxKind, text: &str) -> io::Result<()> {
        self.before(kind, text)?;
        self.write(text)?;
        self.prev = Some(kind);
        Ok(())
    }

    fn literal(&mut self, kind: SyntaxKind, text: &str) -> io::Result<()> {
        self.before(kind, text)?;
        self.write_raw(text)?;
        self.inline = true;
        self.prev = Some(kind);
        Ok(())
    }

    fn open(&mut self, kind: SyntaxKind, text: &str) -> io::Result<()> {
        self.before(kind, text)?;
        self.write(text)?;
        self.balance += 1;
        self.prev = Some(kind);
        Ok(())
    }

    fn close(&mut self, kind: SyntaxKind, text: &str) -> io::Result<()> {
        if self.inline {
            self.write(&NEWLINES[..1])?;
        }

        self.balance -= 1;
        if self.balance < 0 && self.shifted == 0 {
            self.indent = self.indent.saturating_sub(1);
            self.shifted = -1;
        }

        self.write_indent()?;
        self.write(text)?;
        self.prev = Some(kind);
        Ok(())
    }

    fn before(&mut self, next: SyntaxKind, text: &str) -> io::Result<()> {
        if !self.inline {
            return self.write_indent();
        }

        let separated = !self.prev.is_some_and(SyntaxKind::is_delimiter) && !next.is_delimiter();
        if separated || (self.after_brace && text.starts_with('{')) {
            self.write_raw(" ")?;
        }

        Ok(())
    }

    fn write_indent(&mut self) -> io::Result<()> {
        let unit = self.unit;
        for _ in 0..self.indent {
            self.write_raw(unit)?;
        }
        Ok(())
    }

    /// Writes `text` and updates the line state from its content. A bare
    /// `\r` ends a line just like `\n`.
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.write_raw(text)?;

        if let Some((_, last_line)) = text.rsplit_once(LINE_ENDS) {
            self.line_break();
            self.inline = !last_line.trim().is_empty();
        } else if !text.trim().is_empty() {
            self.inline = true;
        }

        Ok(())
    }

    fn write_raw(&mut self, text: &str) -> io::Result<()> {
        if let Some(last) = text.bytes().last() {
            self.after_brace = last == b'{';
        }
        self.out.write_all(text.as_bytes())
    }

    fn line_break(&mut self) {
        if self.balance > 0 {
            self.indent += 1;
        }
        self.balance = 0;
        self.shifted = 0;
        self.inline = false;
    }
}

/// Counts `\r\n`, `\r` and `\n` as one line break each.
fn line_breaks(text: &str) -> usize {
    let mut count = 0;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                chars.next_if_eq(&'\n');
                count += 1;
            }
            '\n' => count += 1,
            _ => {}
        }
    }

    count
}
