//! Mermaid flowchart renderer - walks a caller-defined graph and emits a
//! fenced Mermaid code block.
//!
//! Pure string building, no graph data structure of its own: the graph lives
//! with the caller and is reached only through three lookup closures
//! (description, adjacency, color).

use crate::escape::{
    escape, EDGE_LABEL_RESERVED, HTML_TEXT_RESERVED, NODE_ID_RESERVED, PLAIN_TEXT_RESERVED,
};
use std::collections::{BTreeSet, HashMap};
use std::fmt::Display;

/// Renders the subgraph reachable from a set of start nodes as a Mermaid
/// flowchart document.
///
/// The renderer queries the caller's graph through three closures, set with
/// [`description`](Self::description) / [`html_description`](Self::html_description),
/// [`adj_nodes`](Self::adj_nodes) / [`adj_nodes_with_labels`](Self::adj_nodes_with_labels)
/// and [`color`](Self::color). Unset closures behave as "no description",
/// "no neighbors" and "no color". A renderer can be reused across any number
/// of [`render`](Self::render) calls.
///
/// # Example
///
/// ```rust
/// use g2m::MermaidRenderer;
///
/// let diagram = MermaidRenderer::new()
///     .adj_nodes(|&n: &u32| if n < 3 { vec![n + 1] } else { vec![] })
///     .description(|n| format!("node {}", n))
///     .render(&[1]);
/// assert!(diagram.contains("1 --- 2"));
/// ```
pub struct MermaidRenderer<I> {
    describe: Box<dyn Fn(&I) -> String>,
    adjacent: Box<dyn Fn(&I) -> Vec<(I, String)>>,
    colorize: Box<dyn Fn(&I) -> String>,
    show_index: bool,
    directed: bool,
}

impl<I: Display + Ord + Clone> MermaidRenderer<I> {
    pub fn new() -> Self {
        Self {
            describe: Box::new(|_| String::new()),
            adjacent: Box::new(|_| Vec::new()),
            colorize: Box::new(|_| String::new()),
            show_index: true,
            directed: false,
        }
    }

    /// Set the node description callback. Output is treated as plain text:
    /// `"`, `<`, `>`, `#` and `&` are escaped.
    pub fn description(mut self, get_description: impl Fn(&I) -> String + 'static) -> Self {
        self.describe = Box::new(move |index| escape(&get_description(index), PLAIN_TEXT_RESERVED));
        self
    }

    /// Set the node description callback. Output is treated as markup: only
    /// `"` is escaped, so the caller may embed line breaks as `<br>` etc.
    pub fn html_description(mut self, get_description: impl Fn(&I) -> String + 'static) -> Self {
        self.describe = Box::new(move |index| escape(&get_description(index), HTML_TEXT_RESERVED));
        self
    }

    /// Set the adjacency callback from a function returning bare neighbor
    /// identifiers; edge labels are synthesized as empty strings.
    pub fn adj_nodes(mut self, get_adj_nodes: impl Fn(&I) -> Vec<I> + 'static) -> Self {
        self.adjacent = Box::new(move |index| {
            get_adj_nodes(index)
                .into_iter()
                .map(|v| (v, String::new()))
                .collect()
        });
        self
    }

    /// Set the adjacency callback from a function returning (neighbor, edge
    /// label) pairs. An empty label means "no label rendered". Overrides
    /// [`adj_nodes`](Self::adj_nodes) if called after it.
    pub fn adj_nodes_with_labels(
        mut self,
        get_adj_nodes: impl Fn(&I) -> Vec<(I, String)> + 'static,
    ) -> Self {
        self.adjacent = Box::new(get_adj_nodes);
        self
    }

    /// Set the node color callback. An empty string means "no color"; color
    /// strings are trusted style tokens (`"red"`, `"#ff0000"`) and are never
    /// escaped.
    pub fn color(mut self, get_color: impl Fn(&I) -> String + 'static) -> Self {
        self.colorize = Box::new(get_color);
        self
    }

    /// When `true`, node labels omit the identifier prefix.
    pub fn hide_index(mut self, hide: bool) -> Self {
        self.show_index = !hide;
        self
    }

    /// When `true`, edges render with an arrow and every adjacency entry
    /// emits an edge even when its target was already visited.
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Render the subgraph reachable from `start_nodes` as a fenced Mermaid
    /// code block.
    ///
    /// Deterministic given deterministic callbacks: edge statements appear in
    /// traversal-discovery order, class and label statements in identifier
    /// order. With the `suppress` feature enabled this returns an empty
    /// string unconditionally.
    pub fn render(&self, start_nodes: &[I]) -> String {
        if cfg!(feature = "suppress") {
            return String::new();
        }

        let mut out = String::from("```mermaid\ngraph\n");

        // 1. Depth-first traversal + edge emission
        let mut visited: BTreeSet<I> = BTreeSet::new();
        for u in start_nodes {
            if !visited.contains(u) {
                self.emit_edges(u, &mut visited, &mut out);
            }
        }

        // 2. Color grouping - first sighting of a color defines its class
        let mut color_classes: HashMap<String, usize> = HashMap::new();
        for u in &visited {
            let color = (self.colorize)(u);
            if color.is_empty() {
                continue;
            }
            let class_index = match color_classes.get(&color) {
                Some(&index) => index,
                None => {
                    let index = color_classes.len();
                    out.push_str(&format!("    classDef c{} stroke:{}\n", index, color));
                    color_classes.insert(color, index);
                    index
                }
            };
            out.push_str(&format!(
                "    class {} c{}\n",
                node_identifier(u),
                class_index
            ));
        }

        // 3. Node labels (skipped entirely for empty descriptions)
        for u in &visited {
            let description = (self.describe)(u);
            if description.is_empty() {
                continue;
            }
            let id = node_identifier(u);
            out.push_str(&format!("    {}(\"", id));
            if self.show_index {
                out.push_str(&id);
                out.push_str("<br>");
            }
            out.push_str(&description);
            out.push_str("\")\n");
        }

        out.push_str("```");
        out
    }

    /// Visit `u` depth-first, emitting one statement per discovered edge.
    ///
    /// An edge is emitted when the graph is directed or its target is still
    /// unvisited; the recursion into the target happens either way, so
    /// suppressing a redundant undirected back-edge never cuts off
    /// reachability.
    fn emit_edges(&self, u: &I, visited: &mut BTreeSet<I>, out: &mut String) {
        if !visited.insert(u.clone()) {
            return;
        }
        for (v, edge_name) in (self.adjacent)(u) {
            if self.directed || !visited.contains(&v) {
                out.push_str("    ");
                out.push_str(&node_identifier(u));
                out.push_str(if self.directed { " --> " } else { " --- " });
                out.push_str(&node_identifier(&v));
                if !edge_name.is_empty() {
                    out.push_str(": ");
                    out.push_str(&escape(&edge_name, EDGE_LABEL_RESERVED));
                }
                out.push('\n');
            }
            self.emit_edges(&v, visited, out);
        }
    }
}

impl<I: Display + Ord + Clone> Default for MermaidRenderer<I> {
    fn default() -> Self {
        Self::new()
    }
}

/// A node's printable form with identifier-reserved characters escaped.
fn node_identifier<I: Display>(index: &I) -> String {
    escape(&index.to_string(), NODE_ID_RESERVED)
}
