//! Pairwise depth comparison between scene members.
//!
//! [`compare`] answers "which of these two is in front?" for members whose
//! screen rectangles overlap. The answer is an [`Ordering`]: `Less` means the
//! first member is nearer the viewer (smaller projected depth), `Greater` the
//! second, `Equal` that the pair cannot be resolved.
//!
//! Balls compare by projected depth. A ball against a bone compares against
//! the point of the bone nearest to the ball. Two bones with a common ball
//! reduce to a ball-against-bone test; disjoint bones first look for a pair
//! of overlapping end balls, then compare depths where their screen lines
//! cross.
//!
//! Nested figures are always treated as behind balls and bones. That holds
//! for a single flat bundle of strands inside a figure; two figures are not
//! comparable at all and produce [`RenderError::InvalidComparison`].

use std::cmp::Ordering;

use crate::error::{RenderError, Result};
use crate::math::Vec3;
use crate::projection::WorldView;
use crate::scene::{BallId, BoneId, Node, Scene};

/// Screen-parallel determinants below this count as parallel lines.
const PARALLEL_EPSILON: f64 = 1e-4;

/// Line parameters outside these ranges mean the screen crossing is too far
/// off either segment to say anything about their depth order.
const FIRST_RANGE: (f64, f64) = (-0.5, 1.5);
const SECOND_RANGE: (f64, f64) = (-1.0, 2.0);

/// A point of the scene with its model-space position and projected depth.
#[derive(Debug, Clone, Copy)]
struct Probe {
    center: Vec3,
    depth: f64,
}

/// Decides which of two projected members is in front.
pub fn compare(scene: &Scene, view: &WorldView, first: &Node, second: &Node) -> Result<Ordering> {
    match (first, second) {
        (Node::Figure(_), Node::Figure(_)) => Err(RenderError::InvalidComparison {
            first: first.kind(),
            second: second.kind(),
        }),
        (Node::Figure(_), _) => Ok(Ordering::Greater),
        (_, Node::Figure(_)) => Ok(Ordering::Less),
        (Node::Ball(a), Node::Ball(b)) => Ok(depth_order(
            scene.projection(*a)?.z,
            scene.projection(*b)?.z,
        )),
        (Node::Bone(bone), Node::Ball(ball)) => bone_vs_probe(scene, view, *bone, probe(scene, *ball)?),
        (Node::Ball(ball), Node::Bone(bone)) => {
            Ok(bone_vs_probe(scene, view, *bone, probe(scene, *ball)?)?.reverse())
        }
        (Node::Bone(a), Node::Bone(b)) => bone_vs_bone(scene, view, *a, *b),
    }
}

fn depth_order(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

fn probe(scene: &Scene, id: BallId) -> Result<Probe> {
    Ok(Probe {
        center: scene.ball(id).center,
        depth: scene.projection(id)?.z,
    })
}

/// Compares a bone (first) with a point (second).
///
/// The point is projected onto the bone's model-space axis. Beyond either
/// end the comparison falls back to that end ball; in between it uses a
/// phantom point on the axis, projected with `view`.
fn bone_vs_probe(scene: &Scene, view: &WorldView, bone: BoneId, point: Probe) -> Result<Ordering> {
    let [start, end] = scene.bone(bone).balls();
    let span = scene.bone_span(bone);
    let length_squared = span.magnitude_squared();
    if length_squared == 0.0 {
        return Ok(Ordering::Equal);
    }

    let origin = scene.ball(start).center;
    let factor = (point.center - origin).dot(span) / length_squared;
    let depth = if factor < 0.0 {
        scene.projection(start)?.z
    } else if factor > 1.0 {
        scene.projection(end)?.z
    } else {
        view.project(origin + span * factor).z
    };
    Ok(depth_order(depth, point.depth))
}

fn bone_vs_bone(scene: &Scene, view: &WorldView, first: BoneId, second: BoneId) -> Result<Ordering> {
    let a = scene.bone(first).balls();
    let b = scene.bone(second).balls();

    if a.iter().any(|id| b.contains(id)) {
        return shared_end(scene, view, first, second);
    }

    for &ball1 in &a {
        for &ball2 in &b {
            if scene.ball_bounding(ball1)?.intersects(&scene.ball_bounding(ball2)?) {
                let result = depth_order(scene.projection(ball1)?.z, scene.projection(ball2)?.z);
                if result != Ordering::Equal {
                    return Ok(result);
                }
            }
        }
    }

    screen_crossing(scene, a, b)
}

/// Two bones joined at a ball: the free end of the shorter one (on screen)
/// is compared against the longer one.
fn shared_end(scene: &Scene, view: &WorldView, first: BoneId, second: BoneId) -> Result<Ordering> {
    let a = scene.bone(first).balls();
    let b = scene.bone(second).balls();
    let screen_length = |[p, q]: [BallId; 2]| -> Result<f64> {
        Ok((scene.projection(q)?.xy() - scene.projection(p)?.xy()).magnitude_squared())
    };

    if screen_length(a)? > screen_length(b)? {
        match b.iter().find(|id| !a.contains(id)) {
            Some(&free) => bone_vs_probe(scene, view, first, probe(scene, free)?),
            None => Ok(Ordering::Equal),
        }
    } else {
        match a.iter().find(|id| !b.contains(id)) {
            Some(&free) => Ok(bone_vs_probe(scene, view, second, probe(scene, free)?)?.reverse()),
            None => Ok(Ordering::Equal),
        }
    }
}

/// Compares the depths of two bones where their screen lines intersect.
fn screen_crossing(scene: &Scene, a: [BallId; 2], b: [BallId; 2]) -> Result<Ordering> {
    let s1 = scene.projection(a[0])?;
    let d1 = scene.projection(a[1])? - s1;
    let s2 = scene.projection(b[0])?;
    let d2 = scene.projection(b[1])? - s2;

    let det = d1.x * d2.y - d2.x * d1.y;
    if det.abs() < PARALLEL_EPSILON {
        return Ok(Ordering::Equal);
    }

    let t2 = (d1.y * (s2.x - s1.x) - d1.x * (s2.y - s1.y)) / det;
    let t1 = if d1.x.abs() > PARALLEL_EPSILON {
        (s2.x + t2 * d2.x - s1.x) / d1.x
    } else if d1.y.abs() > PARALLEL_EPSILON {
        (s2.y + t2 * d2.y - s1.y) / d1.y
    } else {
        return Ok(Ordering::Equal);
    };

    let within = |t: f64, (lo, hi): (f64, f64)| (lo..=hi).contains(&t);
    if !within(t1, FIRST_RANGE) || !within(t2, SECOND_RANGE) {
        return Ok(Ordering::Equal);
    }

    Ok(depth_order(s1.z + t1 * d1.z, s2.z + t2 * d2.z))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::Color;
    use crate::scene::{Ball, Figure};

    const RED: Color = Color::new(255, 0, 0);

    struct Fixture {
        scene: Scene,
        view: WorldView,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                scene: Scene::new(),
                view: WorldView::default(),
            }
        }

        fn ball(&mut self, x: f64, y: f64, z: f64, r: f64) -> BallId {
            let id = self.scene.add_ball(Ball::new(Vec3::new(x, y, z), r, RED));
            self.scene.project_ball(id, &self.view);
            id
        }

        fn bone(&mut self, a: BallId, b: BallId) -> BoneId {
            self.scene.add_bone(a, b)
        }

        fn cmp(&self, a: impl Into<Node>, b: impl Into<Node>) -> Result<Ordering> {
            compare(&self.scene, &self.view, &a.into(), &b.into())
        }
    }

    #[test]
    fn balls_compare_by_depth() {
        let mut f = Fixture::new();
        let near = f.ball(0.0, 0.0, -3.0, 2.0);
        let far = f.ball(1.0, 0.0, 4.0, 2.0);
        let level = f.ball(2.0, 0.0, 4.0, 2.0);
        assert_eq!(f.cmp(near, far).unwrap(), Ordering::Less);
        assert_eq!(f.cmp(far, near).unwrap(), Ordering::Greater);
        assert_eq!(f.cmp(far, level).unwrap(), Ordering::Equal);
    }

    #[test]
    fn ball_against_middle_of_bone() {
        let mut f = Fixture::new();
        // Bone tilts from z = -10 to z = 10 along x.
        let a = f.ball(0.0, 0.0, -10.0, 3.0);
        let b = f.ball(20.0, 0.0, 10.0, 3.0);
        let bone = f.bone(a, b);
        // Above the bone's middle (z = 0 there), at z = 5: behind.
        let behind = f.ball(10.0, 2.0, 5.0, 3.0);
        // Above the first quarter (z = -5 there), at z = -6: in front.
        let front = f.ball(5.0, 2.0, -6.0, 3.0);
        assert_eq!(f.cmp(bone, behind).unwrap(), Ordering::Less);
        assert_eq!(f.cmp(behind, bone).unwrap(), Ordering::Greater);
        assert_eq!(f.cmp(front, bone).unwrap(), Ordering::Less);
    }

    #[test]
    fn ball_beyond_bone_end_uses_end_ball() {
        let mut f = Fixture::new();
        let a = f.ball(0.0, 0.0, 0.0, 3.0);
        let b = f.ball(10.0, 0.0, 0.0, 3.0);
        let bone = f.bone(a, b);
        // Past the second end; the second ball is at z = 0.
        let past = f.ball(14.0, 0.0, 1.0, 3.0);
        assert_eq!(f.cmp(bone, past).unwrap(), Ordering::Less);
        // Before the first end.
        let before = f.ball(-4.0, 0.0, -1.0, 3.0);
        assert_eq!(f.cmp(bone, before).unwrap(), Ordering::Greater);
    }

    #[test]
    fn zero_length_bone_ties() {
        let mut f = Fixture::new();
        let a = f.ball(0.0, 0.0, 0.0, 3.0);
        let b = f.ball(0.0, 0.0, 0.0, 2.0);
        let bone = f.bone(a, b);
        let other = f.ball(1.0, 0.0, 5.0, 3.0);
        assert_eq!(f.cmp(bone, other).unwrap(), Ordering::Equal);
    }

    #[test]
    fn shared_endpoint_uses_shorter_bone_free_end() {
        let mut f = Fixture::new();
        let joint = f.ball(0.0, 0.0, 0.0, 2.0);
        let long_end = f.ball(40.0, 0.0, 0.0, 2.0);
        // Short bone rises toward the viewer.
        let short_end = f.ball(5.0, 5.0, -8.0, 2.0);
        let long = f.bone(joint, long_end);
        let short = f.bone(joint, short_end);
        assert_eq!(f.cmp(short, long).unwrap(), Ordering::Less);
        assert_eq!(f.cmp(long, short).unwrap(), Ordering::Greater);
    }

    #[test]
    fn identical_bones_tie() {
        let mut f = Fixture::new();
        let a = f.ball(0.0, 0.0, 0.0, 2.0);
        let b = f.ball(10.0, 0.0, 3.0, 2.0);
        let one = f.bone(a, b);
        let other = f.bone(b, a);
        assert_eq!(f.cmp(one, other).unwrap(), Ordering::Equal);
    }

    #[test]
    fn crossing_bones_compare_at_the_crossing() {
        let mut f = Fixture::new();
        // An X on screen; the horizontal bone is nearer at the crossing.
        let h1 = f.ball(0.0, 20.0, -5.0, 1.0);
        let h2 = f.ball(40.0, 20.0, -5.0, 1.0);
        let v1 = f.ball(20.0, 0.0, 5.0, 1.0);
        let v2 = f.ball(20.0, 40.0, 5.0, 1.0);
        let horizontal = f.bone(h1, h2);
        let vertical = f.bone(v1, v2);
        assert_eq!(f.cmp(horizontal, vertical).unwrap(), Ordering::Less);
        assert_eq!(f.cmp(vertical, horizontal).unwrap(), Ordering::Greater);
    }

    #[test]
    fn overlapping_end_balls_decide_first() {
        let mut f = Fixture::new();
        let a1 = f.ball(0.0, 0.0, 10.0, 4.0);
        let a2 = f.ball(30.0, 0.0, 10.0, 4.0);
        let b1 = f.ball(32.0, 2.0, -10.0, 4.0);
        let b2 = f.ball(60.0, 30.0, -10.0, 4.0);
        let a = f.bone(a1, a2);
        let b = f.bone(b1, b2);
        assert_eq!(f.cmp(a, b).unwrap(), Ordering::Greater);
    }

    #[test]
    fn parallel_and_distant_bones_tie() {
        let mut f = Fixture::new();
        let a1 = f.ball(0.0, 0.0, 0.0, 1.0);
        let a2 = f.ball(20.0, 0.0, 0.0, 1.0);
        let b1 = f.ball(0.0, 5.0, 9.0, 1.0);
        let b2 = f.ball(20.0, 5.0, 9.0, 1.0);
        let a = f.bone(a1, a2);
        let b = f.bone(b1, b2);
        assert_eq!(f.cmp(a, b).unwrap(), Ordering::Equal);

        // Lines cross far beyond the second segment's end.
        let c1 = f.ball(100.0, -10.0, 9.0, 1.0);
        let c2 = f.ball(101.0, -40.0, 9.0, 1.0);
        let c = f.bone(c1, c2);
        assert_eq!(f.cmp(a, c).unwrap(), Ordering::Equal);
    }

    #[test]
    fn figures_are_behind_primitives() {
        let mut f = Fixture::new();
        let a = f.ball(0.0, 0.0, 100.0, 1.0);
        let mut figure = Figure::new();
        figure.add(a);
        assert_eq!(f.cmp(figure.clone(), a).unwrap(), Ordering::Greater);
        assert_eq!(f.cmp(a, figure.clone()).unwrap(), Ordering::Less);
        assert_eq!(
            f.cmp(figure.clone(), figure),
            Err(RenderError::InvalidComparison {
                first: "figure",
                second: "figure"
            })
        );
    }

    #[test]
    fn unprojected_member_is_an_error() {
        let mut f = Fixture::new();
        let a = f.ball(0.0, 0.0, 0.0, 1.0);
        let raw = f.scene.add_ball(Ball::new(Vec3::ZERO, 1.0, RED));
        assert_eq!(f.cmp(a, raw), Err(RenderError::NotProjected(raw)));
    }
}
