//! Canonical formatting for Mox text.
//!
//! [`format_to`] streams the token sequence straight into a writer without
//! building a tree. [`normalize`] is the tree-level counterpart used when
//! the nodes are needed anyway.

use std::io;

use mox_errors::Error;
use serde::{Deserialize, Serialize};

mod fmter;
mod normalize;

pub use normalize::normalize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatOptions {
    /// Written once per indentation level.
    pub indent: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self { indent: "  ".to_owned() }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error(transparent)]
    Syntax(#[from] Error),
    #[error("failed to write formatted output")]
    Io(#[from] io::Error),
}

/// Formats `text` into `out`.
///
/// A syntax error stops formatting at the offending token; whatever was
/// written before it stays written. `out` is flushed in every case.
#[tracing::instrument(level = "debug", skip_all, fields(len = text.len()))]
pub fn format_to<W: io::Write>(out: W, text: &str, options: &FormatOptions) -> Result<(), FormatError> {
    let mut fmter = fmter::Fmter::new(out, options);
    let result = fmter.run(text);
    let flushed = fmter.finish();

    result?;
    flushed?;
    Ok(())
}

pub fn format(text: &str, options: &FormatOptions) -> Result<String, Error> {
    let mut out = Vec::with_capacity(text.len());

    match format_to(&mut out, text, options) {
        Ok(()) => {}
        Err(FormatError::Syntax(error)) => return Err(error),
        Err(FormatError::Io(error)) => unreachable!("writing to a Vec failed: {error}"),
    }

    Ok(String::from_utf8_lossy(&out).into_owned())
}
