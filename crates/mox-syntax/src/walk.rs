use crate::Node;

/// Depth-first walk over a node forest.
///
/// Every node is entered and left exactly once; a block's children are walked
/// between its `Enter` and `Leave` events.
pub struct Preorder<'a> {
    stack: Vec<(Option<&'a Node>, std::slice::Iter<'a, Node>)>,
    leave: Option<&'a Node>,
}

impl<'a> Preorder<'a> {
    pub fn new(nodes: &'a [Node]) -> Self {
        Self { stack: vec![(None, nodes.iter())], leave: None }
    }
}

impl<'a> Iterator for Preorder<'a> {
    type Item = WalkEvent<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(node) = self.leave.take() {
            return Some(WalkEvent::Leave(node));
        }

        loop {
            let (_, children) = self.stack.last_mut()?;

            match children.next() {
                Some(node) => {
                    match node.as_block() {
                        Some(block) => self.stack.push((Some(node), block.children.iter())),
                        None => self.leave = Some(node),
                    }
                    return Some(WalkEvent::Enter(node));
                }
                None => {
                    if let Some((Some(parent), _)) = self.stack.pop() {
                        return Some(WalkEvent::Leave(parent));
                    }
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkEvent<'a> {
    Enter(&'a Node),
    Leave(&'a Node),
}

/// Leaves in source order, tombstones and block wrappers excluded.
pub fn leaves(nodes: &[Node]) -> impl Iterator<Item = &Node> {
    Preorder::new(nodes).filter_map(|event| match event {
        WalkEvent::Enter(node) if !matches!(node, Node::Block(_) | Node::Tombstone) => Some(node),
        _ => None,
    })
}

/// Indented, one node per line dump used by tests and the `tree` command.
pub fn debug_tree(nodes: &[Node]) -> String {
    let mut out = String::new();
    let mut depth = 0usize;

    for event in Preorder::new(nodes) {
        match event {
            WalkEvent::Enter(node) => {
                out.push_str(&"  ".repeat(depth));
                match node {
                    Node::Block(block) => {
                        out.push_str(&format!(
                            "{:?} {}{}\n",
                            node.kind(),
                            block.delimiter.open(),
                            block.delimiter.close()
                        ));
                        depth += 1;
                    }
                    _ => match node.payload() {
                        Some(text) => out.push_str(&format!("{:?} {text:?}\n", node.kind())),
                        None => out.push_str(&format!("{:?}\n", node.kind())),
                    },
                }
            }
            WalkEvent::Leave(Node::Block(_)) => depth -= 1,
            WalkEvent::Leave(_) => {}
        }
    }

    out
}
