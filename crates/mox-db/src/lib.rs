pub use mox_errors::Diagnostic;
use mox_errors::Error;
use mox_inputs::{File, Settings};
use mox_parse::Parse;
use salsa::{Accumulator, Database};

#[salsa::tracked(returns(ref))]
pub fn parse(db: &dyn Database, file: File) -> Parse {
    tracing::debug!(path = %file.path(db), "parsing");
    mox_parse::parse_all(file.text(db))
}

/// Reports the syntax error of `file`, if any, as a [`Diagnostic`].
#[salsa::tracked]
pub fn check_file(db: &dyn Database, file: File) {
    if let Some(error) = parse(db, file).error() {
        Diagnostic::from_error(error, file.text(db)).accumulate(db);
    }
}

#[salsa::tracked(returns(ref))]
pub fn formatted(db: &dyn Database, settings: Settings, file: File) -> Result<String, Error> {
    tracing::debug!(path = %file.path(db), "formatting");
    mox_fmt::format(file.text(db), settings.format_options(db))
}
