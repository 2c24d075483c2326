//! Edge walks over a [`Tree`] and the renderer seam.
//!
//! A figure is drawn as one line segment per (parent, child) edge. The
//! [`Order`] only changes the sequence in which segments are produced,
//! never their geometry, so a renderer can choose to reveal a figure
//! depth-first or level by level.

use crate::{
    tree::Tree,
    types::{NodeId, Point},
};
use std::collections::VecDeque;

/// Sequence in which edges are produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Order {
    /// Edge to a child, then that child's subtree, then the next sibling.
    #[default]
    DepthFirst,
    /// Each child's subtree first, then the edge to that child.
    PostOrder,
    /// All edges at depth `d` before any edge at depth `d + 1`.
    BreadthFirst,
}

impl Order {
    pub const ALL: [Order; 3] = [Order::DepthFirst, Order::PostOrder, Order::BreadthFirst];

    pub fn label(self) -> &'static str {
        match self {
            Order::DepthFirst => "depth-first",
            Order::PostOrder => "post-order",
            Order::BreadthFirst => "breadth-first",
        }
    }
}

/// A line segment from a parent node to one of its children.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

/// Consumer of the segments of a figure.
///
/// Opening a surface, mapping figure space to device space and saving the
/// result are the renderer's business.
pub trait Renderer {
    fn line(&mut self, segment: Segment);
}

impl Renderer for Vec<Segment> {
    fn line(&mut self, segment: Segment) {
        self.push(segment);
    }
}

impl<F: FnMut(Segment)> Renderer for F {
    fn line(&mut self, segment: Segment) {
        self(segment)
    }
}

/// Pending work in arena indices; ids are tagged on the way out.
#[derive(Clone, Debug)]
enum Frontier {
    Stack(Vec<(usize, usize)>),
    /// (node, index of the next child to enter)
    Frames(Vec<(usize, usize)>),
    Queue(VecDeque<(usize, usize)>),
}

/// Lazy iterator over the `(parent, child)` edges of a tree.
///
/// Finite and `Clone`: clone before consuming to walk the same tree
/// again.
#[derive(Clone, Debug)]
pub struct Edges<'a> {
    tree: &'a Tree,
    frontier: Frontier,
}

impl<'a> Edges<'a> {
    pub fn new(tree: &'a Tree, order: Order) -> Self {
        let root = tree.root_id().index();
        let roots = tree.child_indices(root);
        let frontier = match order {
            Order::DepthFirst => Frontier::Stack(roots.iter().rev().map(|&c| (root, c)).collect()),
            Order::PostOrder => Frontier::Frames(vec![(root, 0)]),
            Order::BreadthFirst => Frontier::Queue(roots.iter().map(|&c| (root, c)).collect()),
        };
        Self { tree, frontier }
    }

    /// Next edge as arena indices.
    fn next_indices(&mut self) -> Option<(usize, usize)> {
        let tree = self.tree;
        match &mut self.frontier {
            Frontier::Stack(stack) => {
                let (parent, child) = stack.pop()?;
                stack.extend(tree.child_indices(child).iter().rev().map(|&c| (child, c)));
                Some((parent, child))
            }
            Frontier::Frames(frames) => loop {
                let (node, next) = *frames.last()?;
                let children = tree.child_indices(node);
                if next < children.len() {
                    if let Some(top) = frames.last_mut() {
                        top.1 += 1;
                    }
                    frames.push((children[next], 0));
                    continue;
                }
                frames.pop();
                if let Some(&(parent, _)) = frames.last() {
                    return Some((parent, node));
                }
            },
            Frontier::Queue(queue) => {
                let (parent, child) = queue.pop_front()?;
                queue.extend(tree.child_indices(child).iter().map(|&c| (child, c)));
                Some((parent, child))
            }
        }
    }
}

impl Iterator for Edges<'_> {
    type Item = (NodeId, NodeId);

    fn next(&mut self) -> Option<Self::Item> {
        let (parent, child) = self.next_indices()?;
        Some((self.tree.id_at(parent), self.tree.id_at(child)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.tree.len().saturating_sub(1)))
    }
}

/// Lazy iterator over the segments of a tree, in the order of [`Edges`].
#[derive(Clone, Debug)]
pub struct Segments<'a> {
    edges: Edges<'a>,
}

impl<'a> Segments<'a> {
    pub fn new(tree: &'a Tree, order: Order) -> Self {
        Self {
            edges: Edges::new(tree, order),
        }
    }
}

impl Iterator for Segments<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.edges.tree;
        let (parent, child) = self.edges.next_indices()?;
        Some(Segment {
            from: tree.pos_at(parent)?,
            to: tree.pos_at(child)?,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.edges.size_hint()
    }
}
