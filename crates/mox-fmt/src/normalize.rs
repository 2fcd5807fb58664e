use mox_syntax::Node;

const MAX_BREAKS: usize = 2;

/// Tidies whitespace and comment nodes in place, descending into blocks.
///
/// Blanks before a line break are dropped and runs of more than two line
/// breaks are cut to two. Comments are trimmed; a comment that still spans
/// several lines afterwards gets its content on lines of its own. Content
/// starting with `{` or ending with `}` keeps one space on that side so it
/// cannot run into the comment markers.
pub fn normalize(nodes: &mut [Node]) {
    for node in nodes {
        match node {
            Node::Whitespace(text) => *text = normalize_space(text).into(),
            Node::Comment(text) => *text = normalize_comment(text).into(),
            Node::Block(block) => normalize(block.children_mut()),
            _ => {}
        }
    }
}

fn normalize_space(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut blanks = String::new();
    let mut breaks = 0;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            ' ' | '\t' | '\x0B' => blanks.push(c),
            '\r' | '\n' => {
                blanks.clear();
                let crlf = c == '\r' && chars.next_if_eq(&'\n').is_some();

                breaks += 1;
                if breaks <= MAX_BREAKS {
                    out.push_str(if crlf { "\r\n" } else if c == '\r' { "\r" } else { "\n" });
                }
            }
            _ => {
                out.push_str(&blanks);
                blanks.clear();
                breaks = 0;
                out.push(c);
            }
        }
    }

    out.push_str(&blanks);
    out
}

fn normalize_comment(text: &str) -> String {
    let content = normalize_space(text.trim());

    if content.contains('\n') {
        return format!("\n{content}\n");
    }

    let open = if content.starts_with('{') { " " } else { "" };
    let close = if content.ends_with('}') { " " } else { "" };
    format!("{open}{content}{close}")
}
