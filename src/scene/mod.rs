//! Scene graph: an arena of balls and bones plus figures that arrange them.
//!
//! Balls are shared. One ball may be the endpoint of several bones and also
//! be listed directly in a figure, so the [`Scene`] owns every [`Ball`] and
//! [`Bone`] and everything else refers to them by [`BallId`] / [`BoneId`].
//! Mutating a ball through the scene is therefore visible to every bone and
//! figure that mentions it.

mod ball;
mod bone;
mod figure;

pub use ball::Ball;
pub use bone::{Bone, Curve, CurveKind};
pub use figure::Figure;

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::{RenderError, Result};
use crate::math::{Rect, Vec3};
use crate::projection::WorldView;
use crate::transform::{Axis, Pose};

/// Stable handle to a ball in a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BallId(usize);

impl BallId {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for BallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Stable handle to a bone in a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoneId(usize);

impl BoneId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A drawable member of a [`Figure`].
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Ball(BallId),
    Bone(BoneId),
    Figure(Figure),
}

impl Node {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Node::Ball(_) => "ball",
            Node::Bone(_) => "bone",
            Node::Figure(_) => "figure",
        }
    }
}

impl From<BallId> for Node {
    fn from(id: BallId) -> Self {
        Node::Ball(id)
    }
}

impl From<BoneId> for Node {
    fn from(id: BoneId) -> Self {
        Node::Bone(id)
    }
}

impl From<Figure> for Node {
    fn from(figure: Figure) -> Self {
        Node::Figure(figure)
    }
}

/// Owner of all balls and bones of one render.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    balls: Vec<Ball>,
    bones: Vec<Bone>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_ball(&mut self, ball: Ball) -> BallId {
        self.balls.push(ball);
        BallId(self.balls.len() - 1)
    }

    /// Adds a straight bone from `first` to `second`.
    pub fn add_bone(&mut self, first: BallId, second: BallId) -> BoneId {
        self.push_bone(Bone::new(first, second))
    }

    /// Adds a bone whose silhouette is bent by screen-space remap curves.
    pub fn add_curved_bone(
        &mut self,
        first: BallId,
        second: BallId,
        x_curve: Curve,
        y_curve: Curve,
    ) -> BoneId {
        self.push_bone(Bone::curved(first, second, x_curve, y_curve))
    }

    fn push_bone(&mut self, bone: Bone) -> BoneId {
        self.bones.push(bone);
        BoneId(self.bones.len() - 1)
    }

    pub fn ball(&self, id: BallId) -> &Ball {
        &self.balls[id.0]
    }

    pub fn ball_mut(&mut self, id: BallId) -> &mut Ball {
        &mut self.balls[id.0]
    }

    pub fn bone(&self, id: BoneId) -> &Bone {
        &self.bones[id.0]
    }

    pub fn bone_mut(&mut self, id: BoneId) -> &mut Bone {
        &mut self.bones[id.0]
    }

    pub fn ball_count(&self) -> usize {
        self.balls.len()
    }

    pub fn bone_count(&self) -> usize {
        self.bones.len()
    }

    // ============ Projection ============

    pub fn project_ball(&mut self, id: BallId, view: &WorldView) {
        self.balls[id.0].project(view);
    }

    pub fn project_bone(&mut self, id: BoneId, view: &WorldView) {
        for ball in self.bones[id.0].balls() {
            self.balls[ball.0].project(view);
        }
    }

    /// Last projection of a ball.
    pub fn projection(&self, id: BallId) -> Result<Vec3> {
        self.balls[id.0]
            .projection()
            .ok_or(RenderError::NotProjected(id))
    }

    /// Screen square around a ball's projection (unshifted).
    pub fn ball_bounding(&self, id: BallId) -> Result<Rect> {
        let p = self.projection(id)?;
        Ok(Rect::around(p.x, p.y, self.balls[id.0].radius))
    }

    /// Union of the bounding squares of a bone's two endpoints.
    pub fn bone_bounding(&self, id: BoneId) -> Result<Rect> {
        let [a, b] = self.bones[id.0].balls();
        Ok(self.ball_bounding(a)? + self.ball_bounding(b)?)
    }

    /// Model-space vector from a bone's first endpoint to its second.
    pub fn bone_span(&self, id: BoneId) -> Vec3 {
        let [a, b] = self.bones[id.0].balls();
        self.balls[b.0].center - self.balls[a.0].center
    }

    /// Reorders a bone's endpoints back to front. See [`Bone::order_by_depth`].
    pub fn sort_bone(&mut self, id: BoneId) -> Result<bool> {
        let [a, b] = self.bones[id.0].balls();
        let depths = [self.projection(a)?.z, self.projection(b)?.z];
        Ok(self.bones[id.0].order_by_depth(depths))
    }

    /// Bounding rectangle of any node; `None` for an empty figure.
    pub fn node_bounding(&self, node: &Node) -> Result<Option<Rect>> {
        match node {
            Node::Ball(id) => self.ball_bounding(*id).map(Some),
            Node::Bone(id) => self.bone_bounding(*id).map(Some),
            Node::Figure(figure) => figure.bounding(self),
        }
    }

    /// Balls reachable from a node, in member order, possibly repeated.
    pub fn node_balls(&self, node: &Node) -> Vec<BallId> {
        match node {
            Node::Ball(id) => vec![*id],
            Node::Bone(id) => self.bones[id.0].balls().to_vec(),
            Node::Figure(figure) => figure.balls(self),
        }
    }

    // ============ Model-space edits ============

    /// Rotates `id` about `pivot` by `angle` degrees, keeping the `axis` coordinate.
    pub fn rotate(&mut self, id: BallId, angle: f64, pivot: BallId, axis: Axis) {
        let pivot = self.balls[pivot.0].center;
        self.balls[id.0].rotate(angle, pivot, axis);
    }

    pub fn set_distance(&mut self, id: BallId, distance: f64, other: BallId) -> Result<()> {
        let other = self.balls[other.0].clone();
        self.balls[id.0].set_distance(distance, &other)
    }

    pub fn set_gap(&mut self, id: BallId, gap: f64, other: BallId) -> Result<()> {
        let other = self.balls[other.0].clone();
        self.balls[id.0].set_gap(gap, &other)
    }

    pub fn move_to_sphere(&mut self, id: BallId, other: BallId) -> Result<()> {
        let other = self.balls[other.0].clone();
        self.balls[id.0].move_to_sphere(&other)
    }

    /// Applies a pose's rotations for `phase`, in order.
    pub fn apply_pose(&mut self, pose: &dyn Pose, phase: f64) {
        for rotation in pose.rotations(phase) {
            self.rotate(rotation.ball, rotation.angle, rotation.pivot, rotation.axis);
        }
    }
}

impl Index<BallId> for Scene {
    type Output = Ball;

    fn index(&self, id: BallId) -> &Ball {
        &self.balls[id.0]
    }
}

impl IndexMut<BallId> for Scene {
    fn index_mut(&mut self, id: BallId) -> &mut Ball {
        &mut self.balls[id.0]
    }
}

impl Index<BoneId> for Scene {
    type Output = Bone;

    fn index(&self, id: BoneId) -> &Bone {
        &self.bones[id.0]
    }
}
