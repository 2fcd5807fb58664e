use mox_errors::Error;
use mox_syntax::Node;

mod parser;

/// Result of parsing a whole text.
///
/// On failure `nodes` holds the top-level nodes completed before the error,
/// which is enough to report or partially render a broken input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parse {
    pub nodes: Vec<Node>,
    pub error: Option<Error>,
}

impl Parse {
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    pub fn into_result(self) -> Result<Vec<Node>, Error> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.nodes),
        }
    }
}

#[tracing::instrument(level = "debug", skip_all, fields(len = text.len()))]
pub fn parse_all(text: &str) -> Parse {
    let mut parser = parser::Parser::new(text);
    let mut nodes = Vec::new();
    let error = parser.nodes(&mut nodes).err();

    tracing::trace!(count = nodes.len(), failed = error.is_some(), "parsed");
    Parse { nodes, error }
}
