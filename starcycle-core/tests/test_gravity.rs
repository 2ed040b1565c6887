//! Unit tests for the pairwise gravity rule

use starcycle_core::tests::test_helpers::sample_two;
use starcycle_core::{pairwise_gravity, Body, Vec3};

#[test]
fn test_gravity_antisymmetric_every_step() {
    let mut system = sample_two();
    for _ in 0..200 {
        let bodies = system.bodies();
        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                let (da, db) = pairwise_gravity(&bodies[i], &bodies[j]);
                assert_eq!(da, -db);
                assert_eq!(pairwise_gravity(&bodies[j], &bodies[i]), (db, da));
            }
        }
        system.step();
    }
}

#[test]
fn test_gravity_components_are_unit() {
    let a = Body::at(Vec3::new(-50, 3, 3));
    let b = Body::at(Vec3::new(12, -900, 3));
    let (da, db) = pairwise_gravity(&a, &b);
    assert_eq!(da, Vec3::new(1, -1, 0));
    assert_eq!(db, Vec3::new(-1, 1, 0));
}

#[test]
fn test_gravity_same_position_is_zero() {
    let a = Body::at(Vec3::new(7, 7, 7));
    let (da, db) = pairwise_gravity(&a, &a);
    assert_eq!(da, Vec3::ZERO);
    assert_eq!(db, Vec3::ZERO);
}
