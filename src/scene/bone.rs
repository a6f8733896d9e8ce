use super::BallId;

/// Shape of a remap curve on [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurveKind {
    #[default]
    Identity,
    /// `t^gamma`.
    Power(f64),
    /// `t^(1/gamma)`; `PowerInverse(2.0)` is the square root.
    PowerInverse(f64),
}

/// Monotonic remap of the interpolation factor along a bone.
///
/// Reversal is the involution `f'(t) = 1 - f(1 - t)`, tracked as a flag so
/// that reversing twice restores the original curve exactly.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Curve {
    kind: CurveKind,
    reversed: bool,
}

impl Curve {
    pub const IDENTITY: Curve = Curve {
        kind: CurveKind::Identity,
        reversed: false,
    };

    pub fn new(kind: CurveKind) -> Self {
        Self {
            kind,
            reversed: false,
        }
    }

    pub fn power(gamma: f64) -> Self {
        Self::new(CurveKind::Power(gamma))
    }

    pub fn power_inverse(gamma: f64) -> Self {
        Self::new(CurveKind::PowerInverse(gamma))
    }

    pub fn kind(&self) -> CurveKind {
        self.kind
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    pub fn is_identity(&self) -> bool {
        self.kind == CurveKind::Identity
    }

    pub fn reverse(&mut self) {
        self.reversed = !self.reversed;
    }

    pub fn apply(&self, t: f64) -> f64 {
        if self.reversed {
            1.0 - self.base(1.0 - t)
        } else {
            self.base(t)
        }
    }

    fn base(&self, t: f64) -> f64 {
        match self.kind {
            CurveKind::Identity => t,
            CurveKind::Power(gamma) => t.powf(gamma),
            CurveKind::PowerInverse(gamma) => t.powf(1.0 / gamma),
        }
    }
}

/// A tapered cylinder between two balls.
///
/// Painted as a sweep of circles from the first ball to the second. The two
/// curves bend that sweep in screen x and y; with identity curves the bone is
/// straight.
#[derive(Debug, Clone, PartialEq)]
pub struct Bone {
    balls: [BallId; 2],
    x_curve: Curve,
    y_curve: Curve,
}

impl Bone {
    pub fn new(first: BallId, second: BallId) -> Self {
        Self::curved(first, second, Curve::IDENTITY, Curve::IDENTITY)
    }

    pub fn curved(first: BallId, second: BallId, x_curve: Curve, y_curve: Curve) -> Self {
        Self {
            balls: [first, second],
            x_curve,
            y_curve,
        }
    }

    pub fn balls(&self) -> [BallId; 2] {
        self.balls
    }

    pub fn first(&self) -> BallId {
        self.balls[0]
    }

    pub fn second(&self) -> BallId {
        self.balls[1]
    }

    pub fn x_curve(&self) -> Curve {
        self.x_curve
    }

    pub fn y_curve(&self) -> Curve {
        self.y_curve
    }

    /// A bone is straight when neither curve bends it.
    pub fn is_straight(&self) -> bool {
        self.x_curve.is_identity() && self.y_curve.is_identity()
    }

    pub fn contains(&self, ball: BallId) -> bool {
        self.balls.contains(&ball)
    }

    /// Puts the deeper endpoint first, given the endpoints' projected depths
    /// in current order. Curves are reversed exactly when the order changes,
    /// so the painted silhouette keeps its direction. Returns whether it swapped.
    pub fn order_by_depth(&mut self, depths: [f64; 2]) -> bool {
        if depths[0] < depths[1] {
            self.balls.swap(0, 1);
            self.x_curve.reverse();
            self.y_curve.reverse();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn curves_map_unit_interval_endpoints() {
        for curve in [Curve::IDENTITY, Curve::power(2.3), Curve::power_inverse(2.0)] {
            for reversed in [false, true] {
                let mut c = curve;
                if reversed {
                    c.reverse();
                }
                assert_relative_eq!(c.apply(0.0), 0.0);
                assert_relative_eq!(c.apply(1.0), 1.0);
            }
        }
    }

    #[test]
    fn reversal_is_involutive() {
        let mut c = Curve::power(2.0);
        assert_relative_eq!(c.apply(0.5), 0.25);
        c.reverse();
        assert_relative_eq!(c.apply(0.5), 0.75);
        assert_relative_eq!(c.apply(0.25), 1.0 - 0.75 * 0.75);
        c.reverse();
        assert_relative_eq!(c.apply(0.5), 0.25);
        assert!(!c.is_reversed());
    }

    #[test]
    fn reversed_curve_traces_same_path_backwards() {
        let original = Curve::power(1.7);
        let mut reversed = original;
        reversed.reverse();
        // Walking t from the other end visits the same screen positions.
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            assert_relative_eq!(reversed.apply(1.0 - t), 1.0 - original.apply(t), epsilon = 1e-12);
        }
    }

    #[test]
    fn power_inverse_two_is_sqrt() {
        assert_relative_eq!(Curve::power_inverse(2.0).apply(0.49), 0.7, epsilon = 1e-12);
    }

    #[test]
    fn order_by_depth_swaps_and_reverses_only_on_change() {
        let a = BallId::new(0);
        let b = BallId::new(1);
        let mut bone = Bone::curved(a, b, Curve::IDENTITY, Curve::power(2.0));

        assert!(!bone.order_by_depth([5.0, 1.0]));
        assert_eq!(bone.balls(), [a, b]);
        assert!(!bone.y_curve().is_reversed());

        assert!(!bone.order_by_depth([3.0, 3.0]));
        assert_eq!(bone.balls(), [a, b]);

        assert!(bone.order_by_depth([1.0, 5.0]));
        assert_eq!(bone.balls(), [b, a]);
        assert!(bone.y_curve().is_reversed());
        assert!(bone.x_curve().is_reversed());
    }

    #[test]
    fn straightness() {
        let a = BallId::new(0);
        let b = BallId::new(1);
        assert!(Bone::new(a, b).is_straight());
        assert!(!Bone::curved(a, b, Curve::power_inverse(2.0), Curve::IDENTITY).is_straight());
    }
}
