use std::collections::HashSet;

use super::{BallId, BoneId, Node, Scene};
use crate::error::Result;
use crate::math::{Rect, Vec3};
use crate::projection::WorldView;
use crate::render::{fill_circle, BoneRasterizer, Canvas, Disc, Paint, ScreenBone};
use crate::sorting;
use crate::transform::Axis;

/// An ordered group of balls, bones and nested figures.
///
/// Members are painted in list order, so after [`sort`](Self::sort) the list
/// runs back to front. Before sorting, insertion order is the tie-break.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Figure {
    nodes: Vec<Node>,
}

impl Figure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, node: impl Into<Node>) -> &mut Self {
        self.nodes.push(node.into());
        self
    }

    pub fn extend<I>(&mut self, nodes: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.nodes.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every ball reachable from this figure, in member order. A ball shared
    /// by several members appears once per reference.
    pub fn balls(&self, scene: &Scene) -> Vec<BallId> {
        self.nodes
            .iter()
            .flat_map(|node| scene.node_balls(node))
            .collect()
    }

    /// Reachable balls without repeats, in first-seen order.
    pub fn ball_set(&self, scene: &Scene) -> Vec<BallId> {
        let mut seen = HashSet::new();
        self.balls(scene)
            .into_iter()
            .filter(|id| seen.insert(*id))
            .collect()
    }

    pub fn project(&self, scene: &mut Scene, view: &WorldView) {
        for id in self.ball_set(scene) {
            scene.project_ball(id, view);
        }
    }

    /// Scales every distinct ball's center and radius about the origin.
    pub fn scale(&self, scene: &mut Scene, factor: f64) {
        for id in self.ball_set(scene) {
            scene.ball_mut(id).scale(factor);
        }
    }

    /// Rotates every distinct ball about `pivot`'s center. The pivot does
    /// not have to be a member; if it is, it stays where it is.
    pub fn rotate(&self, scene: &mut Scene, angle: f64, pivot: BallId, axis: Axis) {
        let center: Vec3 = scene.ball(pivot).center;
        for id in self.ball_set(scene) {
            if id != pivot {
                scene.ball_mut(id).rotate(angle, center, axis);
            }
        }
    }

    /// Union of the members' screen rectangles (unshifted); `None` when the
    /// figure has nothing in it.
    pub fn bounding(&self, scene: &Scene) -> Result<Option<Rect>> {
        let mut total: Option<Rect> = None;
        for node in &self.nodes {
            let rect = scene.node_bounding(node)?;
            total = match total {
                Some(acc) => Some(acc + rect),
                None => rect,
            };
        }
        Ok(total)
    }

    /// Puts the members into back-to-front order, then sorts every member
    /// bone's endpoints and every nested figure. Expects a prior
    /// [`project`](Self::project).
    pub fn sort(&mut self, scene: &mut Scene, view: &WorldView) -> Result<()> {
        let order = sorting::draw_order(scene, view, &self.nodes)?;
        let mut nodes: Vec<Option<Node>> = self.nodes.drain(..).map(Some).collect();
        self.nodes = order.into_iter().filter_map(|i| nodes[i].take()).collect();

        for node in &mut self.nodes {
            match node {
                Node::Ball(_) => {}
                Node::Bone(id) => {
                    scene.sort_bone(*id)?;
                }
                Node::Figure(figure) => figure.sort(scene, view)?,
            }
        }
        Ok(())
    }

    /// Paints the members in list order, skipping those entirely outside the
    /// canvas. Balls and bones without a color are not painted.
    pub fn draw(
        &self,
        scene: &Scene,
        canvas: &mut Canvas,
        view: &WorldView,
        rasterizer: &dyn BoneRasterizer,
    ) -> Result<()> {
        let visible = view.visible_rect(canvas.size());
        for node in &self.nodes {
            let Some(bounding) = scene.node_bounding(node)? else {
                continue;
            };
            if !bounding.intersects(&visible) {
                continue;
            }

            match node {
                Node::Ball(id) => {
                    let ball = scene.ball(*id);
                    if let Some(color) = ball.color {
                        let center = view.to_screen(scene.projection(*id)?);
                        fill_circle(canvas, center, ball.radius, Paint::Solid(color));
                    }
                }
                Node::Bone(id) => {
                    if let Some(bone) = screen_bone(scene, view, *id)? {
                        rasterizer.fill_bone(&bone, canvas);
                    }
                }
                Node::Figure(figure) => figure.draw(scene, canvas, view, rasterizer)?,
            }
        }
        Ok(())
    }
}

fn screen_bone(scene: &Scene, view: &WorldView, id: BoneId) -> Result<Option<ScreenBone>> {
    let bone = scene.bone(id);
    let mut discs = [None; 2];
    for (disc, ball_id) in discs.iter_mut().zip(bone.balls()) {
        let ball = scene.ball(ball_id);
        let center = view.to_screen(scene.projection(ball_id)?);
        *disc = ball.color.map(|color| Disc::new(center, ball.radius, color));
    }
    let [Some(start), Some(end)] = discs else {
        return Ok(None);
    };
    Ok(Some(ScreenBone {
        start,
        end,
        x_curve: bone.x_curve(),
        y_curve: bone.y_curve(),
    }))
}
