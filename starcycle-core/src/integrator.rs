use crate::body::{pairwise_gravity, Body, Vec3};

/// Advance every body by one unit step.
///
/// Phases run strictly in order: clear gravity, accumulate gravity over each
/// unordered pair once, integrate velocities, then integrate positions.
pub fn step(bodies: &mut [Body]) {
    for body in bodies.iter_mut() {
        body.gravity = Vec3::ZERO;
    }

    let n = bodies.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let (delta_i, delta_j) = pairwise_gravity(&bodies[i], &bodies[j]);
            bodies[i].gravity += delta_i;
            bodies[j].gravity += delta_j;
        }
    }

    for body in bodies.iter_mut() {
        body.integrate_velocity();
    }
    for body in bodies.iter_mut() {
        body.integrate_position();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_body_never_moves() {
        let mut bodies = [Body::at(Vec3::new(4, -2, 7))];
        step(&mut bodies);
        step(&mut bodies);
        assert_eq!(bodies[0], Body::at(Vec3::new(4, -2, 7)));
    }

    #[test]
    fn two_bodies_attract() {
        let mut bodies = [Body::at(Vec3::new(0, 0, 0)), Body::at(Vec3::new(5, 0, -5))];
        step(&mut bodies);
        assert_eq!(bodies[0].velocity, Vec3::new(1, 0, -1));
        assert_eq!(bodies[0].position, Vec3::new(1, 0, -1));
        assert_eq!(bodies[1].velocity, Vec3::new(-1, 0, 1));
        assert_eq!(bodies[1].position, Vec3::new(4, 0, -4));
    }

    #[test]
    fn gravity_sums_over_all_pairs() {
        let mut bodies = [
            Body::at(Vec3::new(0, 0, 0)),
            Body::at(Vec3::new(1, 0, 0)),
            Body::at(Vec3::new(2, 0, 0)),
        ];
        step(&mut bodies);
        assert_eq!(bodies[0].gravity, Vec3::new(2, 0, 0));
        assert_eq!(bodies[1].gravity, Vec3::ZERO);
        assert_eq!(bodies[2].gravity, Vec3::new(-2, 0, 0));
    }
}
