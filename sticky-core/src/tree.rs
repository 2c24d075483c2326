use crate::types::{NodeId, Point, TreeId};
use glam::Vec2;

/// Arena index of the root of every [`Tree`].
const ROOT: usize = 0;

#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    pub pos: Point,
    pub(crate) parent: Option<usize>,
    pub(crate) children: Vec<usize>,
}

/// Arena-backed N-ary tree of points.
///
/// Every node in `nodes` is reachable from the root, and the root is
/// never listed as anyone's child. Nodes are never removed, so ids stay
/// stable for the lifetime of the tree.
///
/// Each tree carries its own [`TreeId`]; ids minted by another tree are
/// treated as unknown. Cloning gives the clone a fresh id. Equality
/// compares nodes only.
#[derive(Debug)]
pub struct Tree {
    id: TreeId,
    nodes: Vec<TreeNode>,
}

impl TreeNode {
    pub(crate) fn new_root(pos: Point) -> Self {
        Self {
            pos,
            parent: None,
            children: Vec::with_capacity(2),
        }
    }

    pub(crate) fn new_child(pos: Point, parent: usize) -> Self {
        Self {
            pos,
            parent: Some(parent),
            children: Vec::with_capacity(2),
        }
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new(Point::ZERO)
    }
}

impl Clone for Tree {
    fn clone(&self) -> Self {
        Self {
            id: TreeId::fresh(),
            nodes: self.nodes.clone(),
        }
    }
}

impl PartialEq for Tree {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes
    }
}

impl Tree {
    pub fn new(root_pos: Point) -> Self {
        Self {
            id: TreeId::fresh(),
            nodes: vec![TreeNode::new_root(root_pos)],
        }
    }

    /// Builds a tree whose root holds `pos` and whose root children are
    /// the roots of `children`, in order.
    ///
    /// The subtrees are moved into the new arena; nothing is shared with
    /// the inputs, and ids from the inputs are not valid in the result.
    pub fn from_parts(pos: Point, children: impl IntoIterator<Item = Tree>) -> Self {
        let mut tree = Self::new(pos);
        for child in children {
            let base = tree.nodes.len();
            let mut nodes = child.nodes.into_iter();
            let Some(mut child_root) = nodes.next() else {
                continue;
            };
            child_root.parent = Some(ROOT);
            for c in &mut child_root.children {
                *c += base;
            }
            tree.nodes[ROOT].children.push(base);
            tree.nodes.push(child_root);
            for mut node in nodes {
                node.parent = node.parent.map(|p| p + base);
                for c in &mut node.children {
                    *c += base;
                }
                tree.nodes.push(node);
            }
        }
        tree
    }

    #[inline]
    pub fn id(&self) -> TreeId {
        self.id
    }

    #[inline]
    fn node_id(&self, index: usize) -> NodeId {
        NodeId {
            tree: self.id,
            index,
        }
    }

    /// Arena index of `id`, if it was minted by this tree.
    #[inline]
    fn resolve(&self, id: NodeId) -> Option<usize> {
        (id.tree == self.id && id.index < self.nodes.len()).then_some(id.index)
    }

    /// Adds a child under `parent` and returns its id.
    ///
    /// ### Panics
    /// Panics if `parent` is not a node of this tree.
    pub fn add_child(&mut self, parent: NodeId, pos: Point) -> NodeId {
        let Some(parent) = self.resolve(parent) else {
            panic!("node {parent} is not part of tree {:?}", self.id);
        };
        let index = self.nodes.len();
        self.nodes.push(TreeNode::new_child(pos, parent));
        self.nodes[parent].children.push(index);
        self.node_id(index)
    }

    #[inline]
    pub fn root(&self) -> &TreeNode {
        &self.nodes[ROOT]
    }

    #[inline]
    pub fn root_id(&self) -> NodeId {
        self.node_id(ROOT)
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&TreeNode> {
        self.resolve(id).map(|i| &self.nodes[i])
    }

    #[inline]
    pub fn pos(&self, id: NodeId) -> Option<Point> {
        self.get(id).map(|n| n.pos)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)?.parent.map(|p| self.node_id(p))
    }

    /// Children of `id` in draw order; empty for unknown ids.
    pub fn children(
        &self,
        id: NodeId,
    ) -> impl DoubleEndedIterator<Item = NodeId> + ExactSizeIterator + '_ {
        self.get(id)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
            .iter()
            .map(|&c| self.node_id(c))
    }

    /// Arena indices of the children of the node at `index`.
    #[inline]
    pub(crate) fn child_indices(&self, index: usize) -> &[usize] {
        self.nodes
            .get(index)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    #[inline]
    pub(crate) fn id_at(&self, index: usize) -> NodeId {
        self.node_id(index)
    }

    #[inline]
    pub(crate) fn pos_at(&self, index: usize) -> Option<Point> {
        self.nodes.get(index).map(|n| n.pos)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a tree has at least its root.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// `true` if `id` was minted by this tree.
    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        self.resolve(id).is_some()
    }

    /// Returns `true` if `ancestor` lies on the path from `node` up to the
    /// root. A node counts as its own ancestor. Ids from other trees are
    /// never ancestors.
    pub fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let (Some(ancestor), mut cur) = (self.resolve(ancestor), self.resolve(node)) else {
            return false;
        };
        while let Some(i) = cur {
            if i == ancestor {
                return true;
            }
            cur = self.nodes[i].parent;
        }
        false
    }

    /// Number of edges on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        let mut best = 0;
        let mut stack = vec![(ROOT, 0usize)];
        while let Some((i, depth)) = stack.pop() {
            best = best.max(depth);
            stack.extend(self.nodes[i].children.iter().map(|&c| (c, depth + 1)));
        }
        best
    }

    /// Node ids in pre-order: a node before its children, siblings in
    /// insertion order.
    pub fn preorder(&self) -> impl Iterator<Item = NodeId> + '_ {
        let mut stack = vec![ROOT];
        std::iter::from_fn(move || {
            let i = stack.pop()?;
            stack.extend(self.nodes[i].children.iter().rev().copied());
            Some(self.node_id(i))
        })
    }

    /// Replaces every node position with `f(pos)`, visiting nodes in
    /// pre-order.
    pub fn map_positions(&mut self, mut f: impl FnMut(Point) -> Point) {
        let mut stack = vec![ROOT];
        while let Some(i) = stack.pop() {
            let node = &mut self.nodes[i];
            node.pos = f(node.pos);
            stack.extend(node.children.iter().rev().copied());
        }
    }

    /// Moves every node of `other` except its root into this arena,
    /// shifted by `offset`. The children of `other`'s root become the last
    /// children of `at`, in their original order.
    ///
    /// Returns the number of nodes added, or `None` (leaving both trees
    /// untouched) if `at` is not a node of this tree.
    pub(crate) fn absorb(&mut self, at: NodeId, other: Tree, offset: Vec2) -> Option<usize> {
        let at = self.resolve(at)?;
        let base = self.nodes.len();
        // Donor indices start at 1 once its root is dropped.
        let remap = |i: usize| base + i - 1;

        let mut nodes = other.nodes.into_iter();
        let Some(donor_root) = nodes.next() else {
            return Some(0);
        };

        for mut node in nodes {
            node.pos += offset;
            node.parent = match node.parent {
                Some(ROOT) | None => Some(at),
                Some(p) => Some(remap(p)),
            };
            for c in &mut node.children {
                *c = remap(*c);
            }
            self.nodes.push(node);
        }

        self.nodes[at]
            .children
            .extend(donor_root.children.iter().map(|&c| remap(c)));

        Some(self.nodes.len() - base)
    }

    /// Re-parents all children of `from` onto `to`, shifting the moved
    /// subtrees by `offset`. Returns the number of nodes moved, or `None`
    /// if either id is not in this tree.
    ///
    /// The caller must ensure `to` is not `from` or one of its
    /// descendants.
    pub(crate) fn reparent_children(
        &mut self,
        from: NodeId,
        to: NodeId,
        offset: Vec2,
    ) -> Option<usize> {
        let (from, to) = (self.resolve(from)?, self.resolve(to)?);
        let moved = std::mem::take(&mut self.nodes[from].children);

        let mut count = 0;
        let mut stack = moved.clone();
        while let Some(i) = stack.pop() {
            let node = &mut self.nodes[i];
            node.pos += offset;
            stack.extend(node.children.iter().copied());
            count += 1;
        }

        for &c in &moved {
            self.nodes[c].parent = Some(to);
        }
        self.nodes[to].children.extend(moved);
        Some(count)
    }
}
