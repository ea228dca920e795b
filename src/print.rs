//! Printable capability and a small box-drawing renderer.
//!
//! Trees expose a name and their root nodes; each node exposes a label
//! and its children. The renderer consumes only this capability, so it
//! never touches tree internals.

/// Snapshot of one node for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrintNode {
    pub label: String,
    pub children: Vec<PrintNode>,
}

impl PrintNode {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Capability exposed by trees that can be rendered.
pub trait Printable {
    fn tree_name(&self) -> &str;
    fn is_empty(&self) -> bool;
    fn root_nodes(&self) -> Vec<PrintNode>;
}

/// Renders a tree as UTF box-drawing text, one node per line.
pub fn render(tree: &dyn Printable) -> String {
    if tree.is_empty() {
        return format!("{} ∅", tree.tree_name());
    }

    let mut out = String::from(tree.tree_name());
    let roots = tree.root_nodes();
    for (i, root) in roots.iter().enumerate() {
        render_node(root, "", i + 1 == roots.len(), &mut out);
    }
    out
}

fn render_node(node: &PrintNode, tab: &str, is_last: bool, out: &mut String) {
    let branch = if is_last { "└── " } else { "├── " };
    out.push('\n');
    out.push_str(tab);
    out.push_str(branch);
    out.push_str(&node.label);

    let child_tab = format!("{tab}{}", if is_last { "    " } else { "│   " });
    for (i, child) in node.children.iter().enumerate() {
        render_node(child, &child_tab, i + 1 == node.children.len(), out);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
