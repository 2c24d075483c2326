//! Recursive fractal generators.
//!
//! These build figures bottom-up using nothing but the public figure API:
//! each level builds its sub-figures, scales and rotates them, and
//! attaches them onto a fresh stick.

use crate::{
    config::PatternConfig,
    error::FigureResult,
    figure::{Stick, StickFigure},
    types::Point,
};
use rand::Rng;
use std::f32::consts::PI;
use tracing::{debug, instrument};

/// The generators selectable by name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Pattern {
    #[default]
    Trunk,
    Fork,
    Mirrored,
    RandomBush,
}

impl Pattern {
    pub const ALL: [Pattern; 4] = [
        Pattern::Trunk,
        Pattern::Fork,
        Pattern::Mirrored,
        Pattern::RandomBush,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Pattern::Trunk => "trunk tree",
            Pattern::Fork => "fork",
            Pattern::Mirrored => "mirrored tree",
            Pattern::RandomBush => "random bush",
        }
    }

    /// Builds this pattern at `depth`. Only [`Pattern::RandomBush`] draws
    /// from `rng`.
    #[instrument(level = "debug", skip(cfg, rng))]
    pub fn build(
        self,
        depth: u32,
        cfg: &PatternConfig,
        rng: &mut impl Rng,
    ) -> FigureResult<StickFigure> {
        let figure = match self {
            Pattern::Trunk => trunk_tree(depth, cfg)?,
            Pattern::Fork => fork(depth, cfg)?,
            Pattern::Mirrored => mirrored_tree(depth, cfg)?,
            Pattern::RandomBush => random_bush(depth, cfg, rng)?,
        };
        debug!(
            nodes = figure.node_count(),
            height = figure.height(),
            "pattern built"
        );
        Ok(figure)
    }
}

/// Binary tree on a trunk: a vertical stick carrying two scaled, rotated
/// copies of the previous level on its branch.
///
/// Depth 0 is a single node; depth `d` has `2^d` nodes and height `d`.
pub fn trunk_tree(depth: u32, cfg: &PatternConfig) -> FigureResult<StickFigure> {
    grow(depth, cfg, &mut || 0.0)
}

/// [`trunk_tree`] with every branch angle perturbed uniformly within
/// `±cfg.jitter`.
pub fn random_bush(
    depth: u32,
    cfg: &PatternConfig,
    rng: &mut impl Rng,
) -> FigureResult<StickFigure> {
    let jitter = cfg.jitter.abs();
    grow(depth, cfg, &mut || {
        if jitter > 0.0 {
            rng.random_range(-jitter..=jitter)
        } else {
            0.0
        }
    })
}

fn grow(
    depth: u32,
    cfg: &PatternConfig,
    noise: &mut dyn FnMut() -> f32,
) -> FigureResult<StickFigure> {
    if depth == 0 {
        return Ok(StickFigure::new());
    }

    let mut left = grow(depth - 1, cfg, noise)?;
    let mut right = grow(depth - 1, cfg, noise)?;

    left.scale(cfg.left_scale);
    right.scale(cfg.right_scale);
    left.rotate(cfg.left_angle + noise());
    right.rotate(cfg.right_angle + noise());

    let mut cur = Stick::new(Point::ZERO, Point::new(0.0, cfg.trunk_for(depth)));
    cur.attach_moved(left, None)?;
    cur.attach_moved(right, None)?;

    Ok(cur.into_figure())
}

/// Two arms from a shared root, each a stick carrying a scaled copy of
/// the previous level.
///
/// Depth 0 is a single node; depth `d` has `2^(d+1) - 1` nodes and
/// height `d`.
pub fn fork(depth: u32, cfg: &PatternConfig) -> FigureResult<StickFigure> {
    let mut figure = StickFigure::new();
    if depth == 0 {
        return Ok(figure);
    }

    let arms = [
        (cfg.left_angle, cfg.left_scale),
        (cfg.right_angle, cfg.right_scale),
    ];
    for (angle, factor) in arms {
        let mut sub = fork(depth - 1, cfg)?;
        sub.scale(factor);

        let mut arm = Stick::new(Point::ZERO, Point::new(0.0, cfg.trunk_for(depth)));
        arm.attach_moved(sub, None)?;
        arm.rotate(angle);

        let root = figure.root();
        figure.attach_moved(arm, Some(root))?;
    }

    Ok(figure)
}

/// A [`trunk_tree`] with a copy of itself turned upside down and spliced
/// onto its root.
pub fn mirrored_tree(depth: u32, cfg: &PatternConfig) -> FigureResult<StickFigure> {
    let mut figure = trunk_tree(depth, cfg)?;
    let mut flipped = figure.copy();
    flipped.rotate(PI);
    let root = figure.root();
    figure.attach_moved(flipped, Some(root))?;
    Ok(figure)
}
