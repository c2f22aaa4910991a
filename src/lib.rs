//! g2m - Render caller-defined graphs as Mermaid flowchart diagrams.
//!
//! The graph never has to exist as a data structure this crate knows about:
//! the renderer queries it through three closures (node description,
//! adjacency with edge labels, node color) and walks it depth-first from a
//! set of start nodes, emitting a fenced Mermaid code block suitable for
//! pasting into anything that renders Mermaid. Intended for visual debugging
//! of whatever graph-shaped state a program carries.
//!
//! # Example
//!
//! ```rust
//! use g2m::MermaidRenderer;
//!
//! let diagram = MermaidRenderer::new()
//!     .directed(true)
//!     .adj_nodes(|&n: &u32| if n < 3 { vec![n + 1] } else { vec![] })
//!     .description(|n| format!("step {}", n))
//!     .render(&[1]);
//!
//! assert!(diagram.starts_with("```mermaid\ngraph\n"));
//! assert!(diagram.contains("    1 --> 2"));
//! ```
//!
//! # Build-mode suppression
//!
//! Enabling the `suppress` cargo feature makes [`MermaidRenderer::render`]
//! return an empty string unconditionally, so the instrumentation can stay
//! compiled into performance-sensitive builds at zero runtime cost.

pub mod escape;
pub mod renderer;

pub use escape::escape;
pub use renderer::MermaidRenderer;
