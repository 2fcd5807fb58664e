use std::fmt::{self, Display};

pub use annotate_snippets::Renderer;
use annotate_snippets::{Level, Snippet};
use mox_syntax::Delimiter;
pub use text_size::{TextRange, TextSize};

/// A fatal tokenizer or parser failure and the offset it was detected at.
///
/// `{}` prints only the cause; the alternate form `{:#}` prefixes it with
/// `position N: `.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    offset: TextSize,
}

impl Error {
    pub fn new(kind: ErrorKind, offset: TextSize) -> Self {
        Self { kind, offset }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn offset(&self) -> TextSize {
        self.offset
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "position {}: ", u32::from(self.offset))?;
        }
        Display::fmt(&self.kind, f)
    }
}

impl std::error::Error for Error {}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ErrorKind {
    #[error("expected closing \"}}}}\", found end of input")]
    UnterminatedComment,
    #[error("expected closing {quote:?}, found end of input")]
    UnterminatedLiteral { quote: char },
    #[error("expected closing {:?}, found end of input", .delimiter.close())]
    UnterminatedBlock { delimiter: Delimiter },
    #[error("unexpected closing {found:?}{}", expected_closer(.expected))]
    UnbalancedDelimiter { found: char, expected: Option<char> },
    #[error("expected one of {expected:?}, found {preview:?}")]
    MalformedNumber { expected: &'static str, preview: String },
    #[error("expected character, found unexpected closing {quote:?}")]
    EmptyLiteral { quote: char },
    #[error("unexpected digit after dot: {preview:?}")]
    AmbiguousOperatorNumber { preview: String },
    #[error("unexpected {preview:?}")]
    UnexpectedCharacter { preview: String },
}

fn expected_closer(expected: &Option<char>) -> String {
    match expected {
        Some(closer) => format!(", expected {closer:?}"),
        None => String::new(),
    }
}

#[salsa::accumulator]
#[derive(Clone, Debug)]
pub struct Diagnostic {
    message: String,
    range: TextRange,
}

impl Diagnostic {
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn error(message: impl Into<String>, range: TextRange) -> Self {
        Self { message: message.into(), range }
    }

    /// Points at the scalar value the error was reported at, or at the end of
    /// `text` when the input ran out.
    pub fn from_error(error: &Error, text: &str) -> Self {
        let start = error.offset();
        let len = text
            .get(usize::from(start)..)
            .and_then(|rest| rest.chars().next())
            .map_or(TextSize::new(0), TextSize::of);

        Self::error(error.kind().to_string(), TextRange::at(start, len))
    }

    pub fn render<'a>(
        &'a self,
        renderer: &'a Renderer,
        path: &'a str,
        text: &'a str,
    ) -> impl Display + 'a {
        let message = Level::Error.title(&self.message).snippet(
            Snippet::source(text)
                .origin(path)
                .annotation(Level::Error.span(self.range.into()).label("here"))
                .fold(true),
        );
        renderer.render(message)
    }
}
