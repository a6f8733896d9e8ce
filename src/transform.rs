//! Model-space transforms on ball centers.
//!
//! Rotations here move points about a pivot inside one of the three principal
//! planes. They are the building blocks for posing a figure before it is
//! projected. A [`Pose`] packages a set of such rotations as a function of a
//! phase value, and [`Keyframes`] provides the periodic interpolation most
//! poses are built from.

use crate::error::{RenderError, Result};
use crate::math::Vec3;
use crate::scene::BallId;

/// Principal axis a rotation leaves unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    X,
    Y,
    /// Rotation in the x-y plane.
    #[default]
    Z,
}

/// Rotates `point` about `pivot` by `angle` degrees, keeping the `axis` coordinate.
///
/// In the rotated plane the first coordinate turns toward the second: for
/// [`Axis::Z`] that is x toward y, for [`Axis::X`] y toward z, for
/// [`Axis::Y`] x toward z.
pub fn rotate_about(point: Vec3, pivot: Vec3, angle: f64, axis: Axis) -> Vec3 {
    let rad = angle.to_radians();
    let relative = point - pivot;
    let rotated = match axis {
        Axis::X => relative.rotate_x(rad),
        // `rotate_y` turns z toward x; this plane turns x toward z.
        Axis::Y => relative.rotate_y(-rad),
        Axis::Z => relative.rotate_z(rad),
    };
    rotated + pivot
}

/// Moves `point` along the ray from `from` through `point` so that it ends up
/// exactly `distance` away from `from`.
pub fn at_distance(point: Vec3, from: Vec3, distance: f64) -> Result<Vec3> {
    let span = point - from;
    let length = span.magnitude();
    if length == 0.0 {
        return Err(RenderError::CoincidentCenters);
    }
    Ok(from + span * (distance / length))
}

/// One rotation of a ball about a pivot ball.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointRotation {
    pub ball: BallId,
    pub pivot: BallId,
    pub axis: Axis,
    /// Degrees.
    pub angle: f64,
}

/// Maps a phase in [0, 1) to the rotations that put a figure into a posture.
///
/// Rotations are applied in order, so a hoof rotated about the hip and then
/// about the knee ends up where a jointed limb would put it.
pub trait Pose {
    fn rotations(&self, phase: f64) -> Vec<JointRotation>;
}

/// Periodic piecewise-linear function of a phase.
///
/// Keys are `(phase, value)` pairs. The phase is taken modulo 1, and the curve
/// wraps from the last key back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyframes {
    keys: Vec<(f64, f64)>,
}

impl Keyframes {
    /// Builds the curve; keys need not be sorted. An empty key list yields zero.
    pub fn new(keys: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let mut keys: Vec<(f64, f64)> = keys.into_iter().collect();
        keys.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self { keys }
    }

    pub fn sample(&self, phase: f64) -> f64 {
        let (Some(&first), Some(&last)) = (self.keys.first(), self.keys.last()) else {
            return 0.0;
        };
        let x = phase.rem_euclid(1.0);

        // Wrapped neighbours on either side of the period.
        let before = (last.0 - 1.0, last.1);
        let after = (first.0 + 1.0, first.1);

        let lower = self
            .keys
            .iter()
            .rev()
            .copied()
            .find(|k| k.0 <= x)
            .unwrap_or(before);
        let upper = self
            .keys
            .iter()
            .copied()
            .find(|k| k.0 >= x)
            .unwrap_or(after);

        if lower.0 == upper.0 {
            return lower.1;
        }
        lower.1 + (upper.1 - lower.1) * (x - lower.0) / (upper.0 - lower.0)
    }
}

/// A single animated joint of a [`KeyframePose`].
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub ball: BallId,
    pub pivot: BallId,
    pub axis: Axis,
    pub angles: Keyframes,
    /// Subtracted from the phase before sampling, to stagger limbs.
    pub phase_offset: f64,
}

/// A [`Pose`] made of keyframed tracks, applied in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyframePose {
    tracks: Vec<Track>,
}

impl KeyframePose {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(mut self, track: Track) -> Self {
        self.tracks.push(track);
        self
    }
}

impl Pose for KeyframePose {
    fn rotations(&self, phase: f64) -> Vec<JointRotation> {
        self.tracks
            .iter()
            .map(|track| JointRotation {
                ball: track.ball,
                pivot: track.pivot,
                axis: track.axis,
                angle: track.angles.sample(phase - track.phase_offset),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn rotate_about_z_turns_x_toward_y() {
        let p = rotate_about(Vec3::new(11.0, 1.0, 5.0), Vec3::new(1.0, 1.0, 0.0), 90.0, Axis::Z);
        assert_abs_diff_eq!(p, Vec3::new(1.0, 11.0, 5.0), epsilon = 1e-9);
    }

    #[test]
    fn rotate_about_x_keeps_x() {
        let p = rotate_about(Vec3::new(3.0, 2.0, 0.0), Vec3::ZERO, 90.0, Axis::X);
        assert_abs_diff_eq!(p, Vec3::new(3.0, 0.0, 2.0), epsilon = 1e-9);
    }

    #[test]
    fn rotate_about_y_turns_x_toward_z() {
        let p = rotate_about(Vec3::new(2.0, 7.0, 0.0), Vec3::ZERO, 90.0, Axis::Y);
        assert_abs_diff_eq!(p, Vec3::new(0.0, 7.0, 2.0), epsilon = 1e-9);
    }

    #[test]
    fn rotation_preserves_distance_to_pivot() {
        let pivot = Vec3::new(-4.0, 9.0, 2.5);
        let point = Vec3::new(13.0, -1.0, 7.0);
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            let p = rotate_about(point, pivot, 37.0, axis);
            assert_relative_eq!((p - pivot).magnitude(), (point - pivot).magnitude(), epsilon = 1e-9);
        }
    }

    #[test]
    fn at_distance_hits_requested_distance() {
        let from = Vec3::new(1.0, 2.0, 3.0);
        let point = Vec3::new(4.0, -2.0, 3.5);
        for d in [0.5, 1.0, 10.0, 250.0] {
            let moved = at_distance(point, from, d).unwrap();
            assert_relative_eq!((moved - from).magnitude(), d, epsilon = 1e-9);
            // Direction is preserved.
            let dir = (moved - from) / d;
            let original = (point - from) / (point - from).magnitude();
            assert_abs_diff_eq!(dir, original, epsilon = 1e-9);
        }
    }

    #[test]
    fn at_distance_rejects_coincident_centers() {
        let p = Vec3::new(1.0, 1.0, 1.0);
        assert_eq!(at_distance(p, p, 5.0), Err(RenderError::CoincidentCenters));
    }

    #[test]
    fn keyframes_interpolate_and_wrap() {
        let frames = Keyframes::new([(0.75, 74.0), (2.5 / 12.0, -33.0)]);
        assert_relative_eq!(frames.sample(0.75), 74.0);
        assert_relative_eq!(frames.sample(2.5 / 12.0), -33.0);
        // Halfway from 2.5/12 to 9/12.
        assert_relative_eq!(frames.sample((2.5 / 12.0 + 0.75) / 2.0), 20.5, epsilon = 1e-9);
        // Wrapping segment from 0.75 to 1 + 2.5/12, sampled at phase 0.
        let expected = 74.0 + (-33.0 - 74.0) * (0.25) / (0.25 + 2.5 / 12.0);
        assert_relative_eq!(frames.sample(0.0), expected, epsilon = 1e-9);
        assert_relative_eq!(frames.sample(1.0), expected, epsilon = 1e-9);
        assert_relative_eq!(frames.sample(-0.25), 74.0, epsilon = 1e-9);
    }

    #[test]
    fn empty_keyframes_are_zero() {
        assert_eq!(Keyframes::new(Vec::<(f64, f64)>::new()).sample(0.3), 0.0);
    }

    #[test]
    fn keyframe_pose_applies_offsets() {
        let frames = Keyframes::new([(0.0, 0.0), (0.5, 90.0)]);
        let pose = KeyframePose::new()
            .track(Track {
                ball: BallId::new(1),
                pivot: BallId::new(0),
                axis: Axis::Z,
                angles: frames.clone(),
                phase_offset: 0.0,
            })
            .track(Track {
                ball: BallId::new(2),
                pivot: BallId::new(0),
                axis: Axis::Z,
                angles: frames,
                phase_offset: 0.25,
            });
        let rotations = pose.rotations(0.5);
        assert_eq!(rotations.len(), 2);
        assert_relative_eq!(rotations[0].angle, 90.0);
        assert_relative_eq!(rotations[1].angle, 45.0);
        assert_eq!(rotations[1].ball, BallId::new(2));
    }
}
