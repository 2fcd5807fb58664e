pub use line_index::{LineCol, LineIndex};
pub use mox_fmt::FormatOptions;
use text_size::TextSize;

/// A source file as last read from disk or stdin.
#[salsa::input(debug)]
pub struct File {
    #[returns(ref)]
    pub path: camino::Utf8PathBuf,
    #[returns(deref)]
    pub text: String,
}

#[salsa::tracked]
impl File {
    #[salsa::tracked(returns(ref), no_eq)]
    pub fn line_index(self, db: &dyn salsa::Database) -> LineIndex {
        LineIndex::new(self.text(db))
    }
}

impl File {
    /// One-based line and column of `offset`, counting columns in bytes.
    pub fn location(self, db: &dyn salsa::Database, offset: TextSize) -> (u32, u32) {
        let LineCol { line, col } = self.line_index(db).line_col(offset);
        (line + 1, col + 1)
    }
}

/// Settings shared by every file in a run.
#[salsa::input(debug)]
pub struct Settings {
    #[returns(ref)]
    pub format_options: FormatOptions,
}
