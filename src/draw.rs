//! Graphviz rendering of a tree, for inspecting its shape while debugging.

use std::fmt::Debug;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::index::IndexType;
use crate::node::{Color, Node};
use crate::rbtree::RbTree;

impl<K, Ix> RbTree<K, Ix>
where
    K: Debug,
    Ix: IndexType,
{
    /// Write the tree as a DOT graph to the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns any error raised while creating or writing the file.
    pub fn draw(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        self.write_dot(&mut out)?;
        out.flush()
    }

    /// Write the tree as a DOT graph. Each node is labelled with its key and
    /// filled with its color.
    ///
    /// # Errors
    ///
    /// Returns any error raised by `out`.
    pub fn write_dot<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "digraph rbtree {{")?;
        writeln!(out, "    node [style=filled, fontcolor=white];")?;
        let mut stack = vec![self.root];
        while let Some(x) = stack.pop() {
            if x.is_sentinel() {
                continue;
            }
            let label = format!("{:?}", self.node_ref(x, Node::key)).replace('"', "\\\"");
            let fill = match self.node_ref(x, Node::color) {
                Color::Red => "red",
                Color::Black => "black",
            };
            writeln!(
                out,
                "    n{} [label=\"{label}\", fillcolor={fill}];",
                x.index()
            )?;
            for child in [self.node_ref(x, Node::left), self.node_ref(x, Node::right)] {
                if !child.is_sentinel() {
                    writeln!(out, "    n{} -> n{};", x.index(), child.index())?;
                    stack.push(child);
                }
            }
        }
        writeln!(out, "}}")
    }
}
