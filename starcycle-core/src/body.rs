use glam::I64Vec3;
use std::fmt;

/// Integer triple used for positions, velocities and gravity deltas
pub type Vec3 = I64Vec3;

/// One of the three independent coordinate axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Positional index of this axis inside a `Vec3`
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(label)
    }
}

/// A star in the simulation
///
/// Equality compares position and velocity only; `gravity` is scratch space
/// for the step in progress.
#[derive(Debug, Clone, Copy)]
pub struct Body {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Gravity accumulated during the current step only
    pub gravity: Vec3,
}

impl Body {
    pub fn new(position: Vec3, velocity: Vec3) -> Self {
        Self {
            position,
            velocity,
            gravity: Vec3::ZERO,
        }
    }

    /// A body at rest at the given position
    pub fn at(position: Vec3) -> Self {
        Self::new(position, Vec3::ZERO)
    }

    pub fn integrate_velocity(&mut self) {
        self.velocity += self.gravity;
    }

    pub fn integrate_position(&mut self) {
        self.position += self.velocity;
    }

    pub fn potential_energy(&self) -> i64 {
        self.position.abs().element_sum()
    }

    pub fn kinetic_energy(&self) -> i64 {
        self.velocity.abs().element_sum()
    }

    /// Product (not sum) of potential and kinetic energy
    pub fn total_energy(&self) -> i64 {
        self.potential_energy() * self.kinetic_energy()
    }

    pub fn is_at_position(&self, position: Vec3) -> bool {
        self.position == position
    }

    pub fn is_moving(&self) -> bool {
        self.velocity != Vec3::ZERO
    }

    /// True when position and velocity agree with `other` on a single axis
    pub fn matches_on_axis(&self, other: &Body, axis: Axis) -> bool {
        let i = axis.index();
        self.position[i] == other.position[i] && self.velocity[i] == other.velocity[i]
    }
}

/// Gravity contribution between two bodies, returned as `(delta_a, delta_b)`.
///
/// Each axis is handled on its own: the body with the larger coordinate is
/// pulled down by one and the other is pulled up by one. Equal coordinates
/// leave both untouched, so `delta_a == -delta_b` always holds.
pub fn pairwise_gravity(a: &Body, b: &Body) -> (Vec3, Vec3) {
    let delta_a = (b.position - a.position).signum();
    (delta_a, -delta_a)
}

impl PartialEq for Body {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position && self.velocity == other.velocity
    }
}

impl Eq for Body {}

fn fmt_vec3(v: Vec3) -> String {
    format!("<x={:3}, y={:3}, z={:3}>", v.x, v.y, v.z)
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pos={}, vel={}",
            fmt_vec3(self.position),
            fmt_vec3(self.velocity)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn energy_is_product_of_potential_and_kinetic() {
        let body = Body::new(Vec3::new(2, 1, -3), Vec3::new(-3, -2, 1));
        assert_eq!(body.potential_energy(), 6);
        assert_eq!(body.kinetic_energy(), 6);
        assert_eq!(body.total_energy(), 36);
    }

    #[test]
    fn body_at_rest_at_origin_has_no_energy() {
        let body = Body::at(Vec3::ZERO);
        assert_eq!(body.total_energy(), 0);
        assert!(!body.is_moving());
    }

    #[test]
    fn gravity_pulls_each_axis_independently() {
        let a = Body::at(Vec3::new(3, 5, 1));
        let b = Body::at(Vec3::new(5, 3, 1));
        let (da, db) = pairwise_gravity(&a, &b);
        assert_eq!(da, Vec3::new(1, -1, 0));
        assert_eq!(db, Vec3::new(-1, 1, 0));
    }

    #[test]
    fn gravity_ignores_distance() {
        let a = Body::at(Vec3::new(0, 0, 0));
        let near = Body::at(Vec3::new(1, -1, 0));
        let far = Body::at(Vec3::new(1000, -1000, 0));
        assert_eq!(pairwise_gravity(&a, &near), pairwise_gravity(&a, &far));
    }

    #[test]
    fn integration_applies_gravity_then_velocity() {
        let mut body = Body::new(Vec3::new(1, 2, 3), Vec3::new(-2, 0, 3));
        body.gravity = Vec3::new(1, 1, -1);
        body.integrate_velocity();
        body.integrate_position();
        assert_eq!(body.velocity, Vec3::new(-1, 1, 2));
        assert_eq!(body.position, Vec3::new(0, 3, 5));
        assert!(body.is_at_position(Vec3::new(0, 3, 5)));
        assert!(body.is_moving());
    }

    #[test]
    fn axis_match_checks_position_and_velocity() {
        let a = Body::new(Vec3::new(1, 2, 3), Vec3::new(0, 1, 0));
        let b = Body::new(Vec3::new(1, 2, 4), Vec3::new(0, 0, 0));
        assert!(a.matches_on_axis(&b, Axis::X));
        assert!(!a.matches_on_axis(&b, Axis::Y));
        assert!(!a.matches_on_axis(&b, Axis::Z));
    }

    #[test]
    fn equality_ignores_leftover_gravity() {
        let mut a = Body::new(Vec3::new(1, 2, 3), Vec3::new(0, -1, 0));
        let b = a;
        a.gravity = Vec3::new(3, -1, -1);
        assert_eq!(a, b);

        a.velocity.y = 0;
        assert_ne!(a, b);
    }

    #[test]
    fn display_matches_input_style() {
        let body = Body::new(Vec3::new(-1, 0, 2), Vec3::new(3, -10, 0));
        assert_eq!(
            body.to_string(),
            "pos=<x= -1, y=  0, z=  2>, vel=<x=  3, y=-10, z=  0>"
        );
    }
}
