//! Stick figures: trees of points that can be transformed and composed.
//!
//! A [`StickFigure`] owns its nodes outright. Composition with
//! [`StickFigure::attach`] either moves a donor figure in or copies it,
//! as chosen by [`Donor`]; nodes are never shared between figures.

use crate::{
    error::{FigureError, FigureResult},
    geometry,
    traverse::{Edges, Order, Renderer, Segments},
    tree::Tree,
    types::{NodeId, Point},
};
use glam::Vec2;
use std::ops::{Deref, DerefMut};
use tracing::{debug, instrument, trace};

/// Node ids handed out by a figure are only valid in that figure; ids from
/// another figure, or from a figure since moved or copied, are rejected
/// with [`FigureError::UnknownNode`].
#[derive(Debug)]
pub struct StickFigure {
    tree: Tree,
    branch: Option<NodeId>,
}

/// Figures are equal when their nodes are; tree identity is ignored.
impl PartialEq for StickFigure {
    fn eq(&self, other: &Self) -> bool {
        self.tree == other.tree
            && self.branch.map(NodeId::index) == other.branch.map(NodeId::index)
    }
}

/// How an attached figure's nodes get into the receiving figure.
#[derive(Debug)]
pub enum Donor<'a> {
    /// The donor is consumed and its nodes are moved over.
    Move(StickFigure),
    /// The donor is duplicated and left untouched.
    Copy(&'a StickFigure),
}

impl From<StickFigure> for Donor<'_> {
    fn from(figure: StickFigure) -> Self {
        Donor::Move(figure)
    }
}

impl From<Stick> for Donor<'_> {
    fn from(stick: Stick) -> Self {
        Donor::Move(stick.into_figure())
    }
}

impl<'a> From<&'a StickFigure> for Donor<'a> {
    fn from(figure: &'a StickFigure) -> Self {
        Donor::Copy(figure)
    }
}

impl<'a> From<&'a Stick> for Donor<'a> {
    fn from(stick: &'a Stick) -> Self {
        Donor::Copy(&stick.figure)
    }
}

impl Donor<'_> {
    fn figure(&self) -> &StickFigure {
        match self {
            Donor::Move(f) => f,
            Donor::Copy(f) => f,
        }
    }
}

impl Default for StickFigure {
    fn default() -> Self {
        Self::new()
    }
}

impl StickFigure {
    /// A figure with a single node at the origin.
    pub fn new() -> Self {
        Self::from_tree(Tree::default())
    }

    pub fn from_tree(tree: Tree) -> Self {
        Self { tree, branch: None }
    }

    #[inline]
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.tree.root_id()
    }

    #[inline]
    pub fn root_pos(&self) -> Point {
        self.tree.root().pos
    }

    /// The default attach target, if this figure was built as a [`Stick`].
    #[inline]
    pub fn branch(&self) -> Option<NodeId> {
        self.branch
    }

    #[inline]
    pub fn pos(&self, id: NodeId) -> Option<Point> {
        self.tree.pos(id)
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.tree.len()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// Axis-aligned bounding box as `(min, max)`.
    pub fn bounds(&self) -> (Point, Point) {
        self.tree.preorder().filter_map(|id| self.tree.pos(id)).fold(
            (Point::splat(f32::INFINITY), Point::splat(f32::NEG_INFINITY)),
            |(lo, hi), p| (lo.min(p), hi.max(p)),
        )
    }

    /// Applies `f` to every node position, root first, then each child's
    /// subtree in order.
    pub fn transform(&mut self, f: impl FnMut(Point) -> Point) {
        self.tree.map_positions(f);
    }

    /// Rotates the figure about its root by `angle` radians.
    pub fn rotate(&mut self, angle: f32) {
        let pivot = self.root_pos();
        self.transform(|p| geometry::rotate_about(p, pivot, angle));
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        let offset = Vec2::new(dx, dy);
        self.transform(|p| geometry::translate(p, offset));
    }

    /// Mirrors the figure across the line through its root at
    /// orientation `angle`.
    pub fn reflect(&mut self, angle: f32) {
        let pivot = self.root_pos();
        self.transform(|p| geometry::reflect_about(p, pivot, angle));
    }

    /// Scales every node's offset from the root by `factor`.
    pub fn scale(&mut self, factor: f32) {
        let pivot = self.root_pos();
        self.transform(|p| geometry::scale_about(p, pivot, factor));
    }

    /// Splices the children of `donor`'s root onto node `at`.
    ///
    /// The spliced nodes are shifted so that the donor root lands on `at`;
    /// the donor root itself is dropped. When `at` is `None` the figure's
    /// branch is used.
    ///
    /// A `None` donor is a no-op and returns `Ok(0)` without looking at
    /// `at`.
    ///
    /// ### Returns
    /// The number of nodes added to this figure.
    ///
    /// ### Errors
    /// - [`FigureError::NoBranch`] if `at` is `None` and the figure has no
    ///   branch.
    /// - [`FigureError::UnknownNode`] if `at` is not in this figure,
    ///   including ids taken from another figure.
    #[instrument(level = "trace", skip(self, donor))]
    pub fn attach(
        &mut self,
        donor: Option<Donor<'_>>,
        at: Option<NodeId>,
    ) -> FigureResult<usize> {
        let Some(donor) = donor else {
            trace!("nothing to attach");
            return Ok(0);
        };

        let at = at.or(self.branch).ok_or(FigureError::NoBranch)?;
        let anchor = self.tree.pos(at).ok_or(FigureError::UnknownNode(at))?;
        let offset = anchor - donor.figure().root_pos();

        let added = match donor {
            Donor::Move(figure) => self.tree.absorb(at, figure.tree, offset),
            Donor::Copy(figure) => self.tree.absorb(at, figure.tree.clone(), offset),
        }
        .ok_or(FigureError::UnknownNode(at))?;

        debug!(%at, added, total = self.tree.len(), "attached figure");
        Ok(added)
    }

    /// Moves `donor` into this figure at `at` (or the branch).
    pub fn attach_moved(
        &mut self,
        donor: impl Into<StickFigure>,
        at: Option<NodeId>,
    ) -> FigureResult<usize> {
        self.attach(Some(Donor::Move(donor.into())), at)
    }

    /// Copies `donor` into this figure at `at` (or the branch), leaving
    /// `donor` unchanged.
    pub fn attach_copied(
        &mut self,
        donor: &StickFigure,
        at: Option<NodeId>,
    ) -> FigureResult<usize> {
        self.attach(Some(Donor::Copy(donor)), at)
    }

    /// Moves the children of `source` onto node `at` within this figure,
    /// shifted by `at - source`.
    ///
    /// ### Returns
    /// The number of nodes moved.
    ///
    /// ### Errors
    /// - [`FigureError::UnknownNode`] if either id is not in this figure.
    /// - [`FigureError::Cycle`] if `at` is `source` or lies below it. The
    ///   figure is left unchanged.
    #[instrument(level = "trace", skip(self))]
    pub fn splice(&mut self, source: NodeId, at: NodeId) -> FigureResult<usize> {
        let from = self.tree.pos(source).ok_or(FigureError::UnknownNode(source))?;
        let to = self.tree.pos(at).ok_or(FigureError::UnknownNode(at))?;

        if self.tree.is_ancestor(source, at) {
            return Err(FigureError::Cycle {
                node: source,
                target: at,
            });
        }

        let moved = self
            .tree
            .reparent_children(source, at, to - from)
            .ok_or(FigureError::UnknownNode(at))?;
        debug!(%source, %at, moved, "spliced subtree");
        Ok(moved)
    }

    /// Deep copy of every node reachable from the root.
    ///
    /// The copy is a plain figure: it carries no branch, and ids of this
    /// figure are not valid in it.
    #[instrument(level = "trace", skip(self))]
    pub fn copy(&self) -> StickFigure {
        let mut out = Tree::new(self.root_pos());
        let out_root = out.root_id();
        let mut stack: Vec<(NodeId, NodeId)> = self
            .tree
            .children(self.root())
            .rev()
            .map(|c| (c, out_root))
            .collect();

        while let Some((old, parent)) = stack.pop() {
            let Some(pos) = self.tree.pos(old) else {
                continue;
            };
            let id = out.add_child(parent, pos);
            stack.extend(self.tree.children(old).rev().map(|c| (c, id)));
        }

        StickFigure::from_tree(out)
    }

    pub fn edges(&self, order: Order) -> Edges<'_> {
        Edges::new(&self.tree, order)
    }

    pub fn segments(&self, order: Order) -> Segments<'_> {
        Segments::new(&self.tree, order)
    }

    /// Hands every segment to `renderer` in `order`. Returns how many were
    /// drawn.
    pub fn draw(&self, renderer: &mut impl Renderer, order: Order) -> usize {
        let mut count = 0;
        for segment in self.segments(order) {
            renderer.line(segment);
            count += 1;
        }
        count
    }
}

/// A single segment from an anchored root to a free branch endpoint.
///
/// Derefs to [`StickFigure`]; attaching without an explicit target lands
/// on [`Stick::branch`].
#[derive(Debug)]
pub struct Stick {
    figure: StickFigure,
    branch: NodeId,
}

impl PartialEq for Stick {
    fn eq(&self, other: &Self) -> bool {
        self.figure == other.figure
    }
}

impl Stick {
    pub fn new(pt1: Point, pt2: Point) -> Self {
        let mut tree = Tree::new(pt1);
        let branch = tree.add_child(tree.root_id(), pt2);
        Self {
            figure: StickFigure {
                tree,
                branch: Some(branch),
            },
            branch,
        }
    }

    /// The free endpoint of the stick.
    #[inline]
    pub fn branch(&self) -> NodeId {
        self.branch
    }

    pub fn into_figure(self) -> StickFigure {
        self.figure
    }
}

impl From<Stick> for StickFigure {
    fn from(stick: Stick) -> Self {
        stick.figure
    }
}

impl Deref for Stick {
    type Target = StickFigure;

    fn deref(&self) -> &StickFigure {
        &self.figure
    }
}

impl DerefMut for Stick {
    fn deref_mut(&mut self) -> &mut StickFigure {
        &mut self.figure
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::PatternConfig, patterns::trunk_tree, traverse::Segment};
    use rstest::rstest;
    use std::f32::consts::PI;

    const EPS: f32 = 1e-3;

    fn p(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    /// Root at (2, 1) with a small two-level fan; returns the figure and
    /// its nodes in pre-order, root first.
    fn sample_figure() -> (StickFigure, Vec<NodeId>) {
        let mut tree = Tree::new(p(2.0, 1.0));
        let root = tree.root_id();
        let a = tree.add_child(root, p(2.0, 11.0));
        let b = tree.add_child(root, p(-5.0, 4.0));
        let a1 = tree.add_child(a, p(7.0, 15.0));
        let a2 = tree.add_child(a, p(-1.0, 20.0));
        let b1 = tree.add_child(b, p(-9.5, 0.25));
        (StickFigure::from_tree(tree), vec![root, a, a1, a2, b, b1])
    }

    fn positions(f: &StickFigure) -> Vec<Point> {
        f.tree().preorder().filter_map(|id| f.pos(id)).collect()
    }

    fn kids(f: &StickFigure, id: NodeId) -> Vec<NodeId> {
        f.tree().children(id).collect()
    }

    fn assert_close(a: &[Point], b: &[Point]) {
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b) {
            assert!(x.abs_diff_eq(*y, EPS), "{x:?} != {y:?}");
        }
    }

    #[test]
    fn default_figure_is_single_origin_node() {
        let f = StickFigure::default();
        assert_eq!(f.node_count(), 1);
        assert_eq!(f.root_pos(), Point::ZERO);
        assert!(f.branch().is_none());
        assert_eq!(f.segments(Order::DepthFirst).count(), 0);
    }

    #[test]
    fn stick_has_one_branch_below_root() {
        let s = Stick::new(p(1.0, 2.0), p(3.0, 4.0));
        assert_eq!(s.node_count(), 2);
        assert_eq!(s.root_pos(), p(1.0, 2.0));
        assert_eq!(s.pos(s.branch()), Some(p(3.0, 4.0)));
        assert_eq!(kids(&s, s.root()), vec![s.branch()]);
        assert_eq!(s.tree().children(s.branch()).len(), 0);
        assert_eq!(StickFigure::branch(&s), Some(s.branch()));
    }

    #[rstest]
    #[case(0.4)]
    #[case(-2.1)]
    #[case(PI)]
    fn rotate_then_unrotate_restores(#[case] angle: f32) {
        let (mut f, _) = sample_figure();
        let before = positions(&f);
        f.rotate(angle);
        f.rotate(-angle);
        assert_close(&positions(&f), &before);
    }

    #[test]
    fn rotate_pivots_on_current_root() {
        let mut f = Stick::new(p(1.0, 1.0), p(1.0, 3.0));
        f.translate(1.0, 0.0);
        f.rotate(-PI / 2.0);
        assert!(f.root_pos().abs_diff_eq(p(2.0, 1.0), EPS));
        let tip = f.pos(f.branch()).unwrap();
        assert!(tip.abs_diff_eq(p(4.0, 1.0), EPS), "got {tip:?}");
    }

    #[rstest]
    #[case(2.0)]
    #[case(0.65)]
    #[case(-3.0)]
    fn scale_then_inverse_restores(#[case] k: f32) {
        let (mut f, _) = sample_figure();
        let before = positions(&f);
        f.scale(k);
        f.scale(1.0 / k);
        assert_close(&positions(&f), &before);
    }

    #[test]
    fn scale_keeps_root_fixed() {
        let (mut f, ids) = sample_figure();
        f.scale(0.5);
        assert_eq!(f.root_pos(), p(2.0, 1.0));
        assert_eq!(f.pos(ids[1]), Some(p(2.0, 6.0)));
    }

    #[test]
    fn translate_round_trip_is_identity() {
        let (mut f, _) = sample_figure();
        let before = positions(&f);
        f.translate(12.5, -3.0);
        assert_eq!(f.root_pos(), p(14.5, -2.0));
        f.translate(-12.5, 3.0);
        assert_close(&positions(&f), &before);
    }

    #[test]
    fn reflect_zero_about_origin_root() {
        let mut tree = Tree::new(Point::ZERO);
        let a = tree.add_child(tree.root_id(), p(3.0, 4.0));
        let b = tree.add_child(tree.root_id(), p(-2.0, 5.0));
        let mut f = StickFigure::from_tree(tree);

        f.reflect(0.0);

        assert!(f.pos(a).unwrap().abs_diff_eq(p(-3.0, 4.0), EPS));
        assert!(f.pos(b).unwrap().abs_diff_eq(p(2.0, 5.0), EPS));
        assert_eq!(f.root_pos(), Point::ZERO);
    }

    #[test]
    fn transform_visits_nodes_in_preorder() {
        let (mut f, _) = sample_figure();
        let mut seen = Vec::new();
        f.transform(|q| {
            seen.push(q);
            q
        });
        assert_eq!(seen, positions(&sample_figure().0));
    }

    #[test]
    fn copy_matches_values_and_shape() {
        let (f, _) = sample_figure();
        let c = f.copy();

        assert_eq!(positions(&c), positions(&f));
        for (a, b) in f.tree().preorder().zip(c.tree().preorder()) {
            assert_eq!(f.tree().children(a).len(), c.tree().children(b).len());
        }
        assert!(c.branch().is_none());
    }

    #[test]
    fn mutating_copy_leaves_original_alone() {
        let (f, _) = sample_figure();
        let before = positions(&f);
        let mut c = f.copy();
        c.rotate(1.0);
        c.translate(5.0, 5.0);
        let root = c.root();
        c.attach_moved(Stick::new(Point::ZERO, p(1.0, 1.0)), Some(root))
            .unwrap();

        assert_eq!(positions(&f), before);
        assert_eq!(f.node_count(), 6);
        assert_eq!(c.node_count(), 7);
    }

    #[test]
    fn attach_to_default_branch_offsets_donor() {
        let mut a = Stick::new(p(0.0, 0.0), p(0.0, 10.0));
        let b = Stick::new(p(0.0, 0.0), p(5.0, 5.0));

        let added = a.attach(Some(b.into()), None).unwrap();

        assert_eq!(added, 1);
        let tips = kids(&a, a.branch());
        assert_eq!(tips.len(), 1);
        assert_eq!(a.pos(tips[0]), Some(p(5.0, 15.0)));
    }

    #[test]
    fn attach_moves_donor_children_in_order() {
        let mut host = Stick::new(p(0.0, 0.0), p(0.0, 10.0));
        let (donor, _) = sample_figure();
        let offset = p(0.0, 10.0) - donor.root_pos();
        let expected: Vec<Point> = positions(&donor)[1..]
            .iter()
            .map(|&q| q + offset)
            .collect();

        let added = host.attach_moved(donor, None).unwrap();
        assert_eq!(added, 5);
        assert_eq!(host.node_count(), 7);
        assert_eq!(host.tree().children(host.branch()).len(), 2);

        let got: Vec<Point> = positions(&host)[2..].to_vec();
        assert_eq!(got, expected);
    }

    #[test]
    fn attach_copy_leaves_donor_unaliased() {
        let mut host = Stick::new(p(0.0, 0.0), p(0.0, 10.0));
        let mut donor = Stick::new(p(0.0, 0.0), p(5.0, 5.0));

        host.attach_copied(&donor, None).unwrap();

        // The donor is neither translated nor shared.
        assert_eq!(donor.root_pos(), p(0.0, 0.0));
        donor.rotate(PI);
        donor.translate(100.0, 100.0);

        let kid = kids(&host, host.branch())[0];
        assert_eq!(host.pos(kid), Some(p(5.0, 15.0)));
    }

    #[test]
    fn borrowed_donors_convert_to_copies() {
        let mut host = Stick::new(p(0.0, 0.0), p(0.0, 10.0));
        let stick = Stick::new(p(0.0, 0.0), p(5.0, 5.0));
        let (fan, _) = sample_figure();

        assert!(matches!(Donor::from(&fan), Donor::Copy(_)));
        assert!(matches!(Donor::from(&stick), Donor::Copy(_)));

        let at = Some(host.branch());
        assert_eq!(host.attach(Some((&stick).into()), at).unwrap(), 1);
        assert_eq!(host.attach(Some(Donor::from(&fan)), at).unwrap(), 5);

        // Both donors are still whole and usable.
        assert_eq!(stick.node_count(), 2);
        assert_eq!(fan.node_count(), 6);
        assert_eq!(host.node_count(), 8);
        assert_eq!(host.tree().children(host.branch()).len(), 3);
    }

    #[test]
    fn attach_onto_explicit_node() {
        let (mut host, ids) = sample_figure();
        let before = host.node_count();
        let at = ids[3];
        let added = host
            .attach_copied(&Stick::new(p(0.0, 0.0), p(1.0, 0.0)), Some(at))
            .unwrap();

        assert_eq!(added, 1);
        assert_eq!(host.node_count(), before + 1);
        let kid = kids(&host, at)[0];
        assert_eq!(host.pos(kid), Some(p(0.0, 20.0)));
    }

    #[test]
    fn attach_none_is_a_noop_even_without_branch() {
        let mut f = StickFigure::new();
        assert_eq!(f.attach(None, None).unwrap(), 0);
        assert_eq!(f.node_count(), 1);
    }

    #[test]
    fn attach_without_branch_is_an_error() {
        let mut f = StickFigure::new();
        let err = f
            .attach_moved(Stick::new(Point::ZERO, p(1.0, 1.0)), None)
            .unwrap_err();
        assert!(matches!(err, FigureError::NoBranch));
        assert_eq!(f.node_count(), 1);
    }

    #[test]
    fn attach_at_another_figures_branch_is_rejected() {
        let cfg = PatternConfig::default();
        let mut host = trunk_tree(2, &cfg).unwrap();
        let other = trunk_tree(3, &cfg).unwrap();
        let foreign = other.branch().unwrap();
        // The index alone would be in range for the host.
        assert!(foreign.index() < host.node_count());
        let before = positions(&host);

        let err = host
            .attach_moved(Stick::new(Point::ZERO, p(1.0, 1.0)), Some(foreign))
            .unwrap_err();

        assert!(matches!(err, FigureError::UnknownNode(id) if id == foreign));
        assert!(!host.tree().contains(foreign));
        assert_eq!(host.node_count(), 4);
        assert_eq!(positions(&host), before);
    }

    #[test]
    fn attach_at_stale_id_after_move_or_copy_is_rejected() {
        let (f, ids) = sample_figure();
        let stale = ids[1];

        let mut copy = f.copy();
        assert!(matches!(
            copy.attach_copied(&Stick::new(Point::ZERO, p(1.0, 0.0)), Some(stale)),
            Err(FigureError::UnknownNode(id)) if id == stale
        ));

        let mut host = Stick::new(Point::ZERO, p(0.0, 10.0));
        host.attach_moved(f, None).unwrap();
        assert!(!host.tree().contains(stale));
        let branch = host.branch();
        assert!(matches!(
            host.splice(stale, branch),
            Err(FigureError::UnknownNode(id)) if id == stale
        ));
        assert_eq!(copy.node_count(), 6);
        assert_eq!(host.node_count(), 7);
    }

    #[test]
    fn splice_moves_children_between_own_nodes() {
        let (mut f, ids) = sample_figure();
        let (b, b1, a2) = (ids[4], ids[5], ids[3]);
        // b at (-5, 4) has one child at (-9.5, 0.25); move it onto a2 at
        // (-1, 20).
        let moved = f.splice(b, a2).unwrap();

        assert_eq!(moved, 1);
        assert_eq!(f.tree().children(b).len(), 0);
        assert_eq!(kids(&f, a2), vec![b1]);
        assert_eq!(f.pos(b1), Some(p(-5.5, 16.25)));
        assert_eq!(f.node_count(), 6);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(0, 2)]
    #[case(1, 3)]
    fn splice_onto_own_subtree_is_a_cycle(#[case] source: usize, #[case] at: usize) {
        let (mut f, ids) = sample_figure();
        let (source, at) = (ids[source], ids[at]);
        let before = positions(&f);

        let err = f.splice(source, at).unwrap_err();

        assert!(matches!(
            err,
            FigureError::Cycle { node, target } if node == source && target == at
        ));
        assert_eq!(positions(&f), before);
    }

    #[test]
    fn splice_rejects_foreign_ids() {
        let (mut f, ids) = sample_figure();
        let (_, theirs) = sample_figure();
        let foreign = theirs[2];
        assert!(matches!(
            f.splice(foreign, ids[1]),
            Err(FigureError::UnknownNode(id)) if id == foreign
        ));
        assert!(matches!(
            f.splice(ids[1], foreign),
            Err(FigureError::UnknownNode(id)) if id == foreign
        ));
    }

    #[test]
    fn mirrored_copy_spliced_onto_root() {
        let mut f = Stick::new(p(0.0, 0.0), p(0.0, 10.0)).into_figure();
        let mut down = f.copy();
        down.rotate(PI);
        let root = f.root();
        f.attach_moved(down, Some(root)).unwrap();

        assert_eq!(f.node_count(), 3);
        let top = kids(&f, root);
        assert!(f.pos(top[1]).unwrap().abs_diff_eq(p(0.0, -10.0), EPS));
    }

    #[rstest]
    #[case(Order::DepthFirst)]
    #[case(Order::PostOrder)]
    #[case(Order::BreadthFirst)]
    fn edges_pair_each_node_with_its_parent(#[case] order: Order) {
        let (f, ids) = sample_figure();
        let edges: Vec<_> = f.edges(order).collect();

        assert_eq!(edges.len(), f.node_count() - 1);
        let mut children: Vec<_> = edges.iter().map(|&(_, c)| c).collect();
        children.sort_by_key(|c| c.index());
        let mut want = ids[1..].to_vec();
        want.sort_by_key(|c| c.index());
        assert_eq!(children, want);

        for (parent, child) in edges {
            assert_eq!(f.tree().parent(child), Some(parent));
        }
    }

    #[test]
    fn edges_follow_segments() {
        let (f, _) = sample_figure();
        let from_edges: Vec<Segment> = f
            .edges(Order::PostOrder)
            .map(|(a, b)| Segment {
                from: f.pos(a).unwrap(),
                to: f.pos(b).unwrap(),
            })
            .collect();
        let segments: Vec<Segment> = f.segments(Order::PostOrder).collect();
        assert_eq!(from_edges, segments);
    }

    #[test]
    fn draw_emits_every_edge_once() {
        let (f, _) = sample_figure();
        let mut out: Vec<Segment> = Vec::new();
        let drawn = f.draw(&mut out, Order::BreadthFirst);

        assert_eq!(drawn, 5);
        assert_eq!(out.len(), 5);
        assert_eq!(
            out[0],
            Segment {
                from: p(2.0, 1.0),
                to: p(2.0, 11.0)
            }
        );
    }

    #[test]
    fn bounds_cover_all_nodes() {
        let (f, _) = sample_figure();
        let (lo, hi) = f.bounds();
        assert_eq!(lo, p(-9.5, 0.25));
        assert_eq!(hi, p(7.0, 20.0));
    }

    #[test]
    fn figures_can_cross_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StickFigure>();
        assert_send_sync::<Stick>();
    }
}
