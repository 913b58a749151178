use track_collide::{
    CollisionResolver, InitialConditions, OutcomePreview,
    bodies::{Body, BodyColor, BodyId},
    collision::{closing_velocity, detect_contact, separate},
    core::{kinetic_energy, system_momentum},
};
use approx::assert_relative_eq;
use rand::{rngs::StdRng, Rng, SeedableRng};

const SAMPLES: usize = 1_000;

fn random_case(rng: &mut StdRng) -> (f32, f32, f32, f32) {
    (
        rng.gen_range(-20.0..20.0),
        rng.gen_range(-20.0..20.0),
        rng.gen_range(0.5..10.0),
        rng.gen_range(0.5..10.0),
    )
}

fn body(id: BodyId, position: f32, velocity: f32, size: f32) -> Body {
    Body::new(id, position, velocity, size, 1.0, BodyColor::default())
}

#[test]
fn test_equal_mass_scenario() {
    let result = CollisionResolver::resolve(5.0, -3.0, 2.0, 2.0);

    // Equal masses swap velocities
    assert_eq!(result.v1, -3.0);
    assert_eq!(result.v2, 5.0);

    assert_eq!(system_momentum(2.0, 5.0, 2.0, -3.0), 4.0);
    assert_eq!(system_momentum(2.0, result.v1, 2.0, result.v2), 4.0);
}

#[test]
fn test_heavy_target_scenario() {
    let result = CollisionResolver::resolve(4.0, 0.0, 1.0, 3.0);

    // The light body bounces back, the heavy one moves off
    assert_eq!(result.v1, -2.0);
    assert_eq!(result.v2, 2.0);

    assert_eq!(system_momentum(1.0, 4.0, 3.0, 0.0), 4.0);
    assert_eq!(system_momentum(1.0, result.v1, 3.0, result.v2), 4.0);
}

#[test]
fn test_momentum_conservation() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..SAMPLES {
        let (v1, v2, m1, m2) = random_case(&mut rng);
        let result = CollisionResolver::resolve(v1, v2, m1, m2);

        let before = system_momentum(m1, v1, m2, v2);
        let after = system_momentum(m1, result.v1, m2, result.v2);
        let magnitude = (m1 * v1).abs() + (m2 * v2).abs() + (m1 * result.v1).abs() + (m2 * result.v2).abs();

        assert_relative_eq!(before, after, epsilon = magnitude * 1.0e-5, max_relative = 1.0e-5);
    }
}

#[test]
fn test_kinetic_energy_conservation() {
    let mut rng = StdRng::seed_from_u64(0xe1a5);

    for _ in 0..SAMPLES {
        let (v1, v2, m1, m2) = random_case(&mut rng);
        let result = CollisionResolver::resolve(v1, v2, m1, m2);

        let before = kinetic_energy(m1, v1, m2, v2);
        let after = kinetic_energy(m1, result.v1, m2, result.v2);

        assert_relative_eq!(before, after, epsilon = 1.0e-4, max_relative = 1.0e-3);
    }
}

#[test]
fn test_equal_velocities_are_unchanged() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..SAMPLES {
        let (v, _, m1, m2) = random_case(&mut rng);
        let result = CollisionResolver::resolve(v, v, m1, m2);

        assert_relative_eq!(result.v1, v, epsilon = 1.0e-5, max_relative = 1.0e-5);
        assert_relative_eq!(result.v2, v, epsilon = 1.0e-5, max_relative = 1.0e-5);
    }
}

#[test]
fn test_equal_masses_exchange_velocities() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..SAMPLES {
        let (v1, v2, m, _) = random_case(&mut rng);
        let result = CollisionResolver::resolve(v1, v2, m, m);

        assert_relative_eq!(result.v1, v2, epsilon = 1.0e-5, max_relative = 1.0e-5);
        assert_relative_eq!(result.v2, v1, epsilon = 1.0e-5, max_relative = 1.0e-5);
    }
}

#[test]
fn test_outcome_preview() {
    let conditions = InitialConditions::new(5.0, -3.0, 2.0, 2.0).unwrap();
    let preview = OutcomePreview::compute(&conditions);

    assert_eq!(preview.initial_velocities, [5.0, -3.0]);
    assert_eq!(preview.final_velocities, [-3.0, 5.0]);
    assert_eq!(preview.initial_momentum, 4.0);
    assert_eq!(preview.final_momentum, 4.0);

    // 0.5 * 2 * 25 + 0.5 * 2 * 9
    assert_eq!(preview.initial_energy, 34.0);
    assert_eq!(preview.final_energy, 34.0);

    assert!(preview.momentum_conserved());
    assert!(preview.energy_conserved());
}

#[test]
fn test_outcome_preview_with_cancelling_momentum() {
    // Total momentum is zero, the check must not demand exact zero
    let conditions = InitialConditions::new(3.7, -1.1, 0.9, 3.027_272_7).unwrap();
    let preview = OutcomePreview::compute(&conditions);

    assert!(preview.momentum_conserved());
    assert!(preview.energy_conserved());
}

#[test]
fn test_closing_velocity_uses_position_order() {
    // First body on the left moving right, second at rest
    let first = body(BodyId::First, 100.0, 10.0, 20.0);
    let second = body(BodyId::Second, 200.0, 0.0, 20.0);
    assert_eq!(closing_velocity(&first, &second), 10.0);

    // Same velocities with the bodies swapped along the track: separating
    let first = body(BodyId::First, 200.0, 10.0, 20.0);
    let second = body(BodyId::Second, 100.0, 0.0, 20.0);
    assert_eq!(closing_velocity(&first, &second), -10.0);
}

#[test]
fn test_contact_requires_reach_and_approach() {
    // Approaching but out of reach
    let a = body(BodyId::First, 0.0, 5.0, 20.0);
    let b = body(BodyId::Second, 30.0, -5.0, 30.0);
    assert!(detect_contact(&a, &b).is_none());

    // Within reach of (20 + 30) / 2
    let b = body(BodyId::Second, 24.0, -5.0, 30.0);
    let contact = detect_contact(&a, &b).unwrap();
    assert_eq!(contact.closing_velocity, 10.0);
    assert_eq!(contact.penetration, 1.0);

    // Within reach but moving in the same direction at the same speed
    let b = body(BodyId::Second, 24.0, 5.0, 30.0);
    assert!(detect_contact(&a, &b).is_none());
}

#[test]
fn test_separation_pushes_apart() {
    let mut a = body(BodyId::First, 100.0, 0.0, 20.0);
    let mut b = body(BodyId::Second, 110.0, 0.0, 20.0);

    assert!(separate(&mut a, &mut b, 10.0, 1.0));

    // Half of the 10 unit overlap plus the margin on each side
    assert_eq!(a.get_position(), 94.0);
    assert_eq!(b.get_position(), 116.0);

    // Ordering decides the direction, not identity
    let mut a = body(BodyId::First, 110.0, 0.0, 20.0);
    let mut b = body(BodyId::Second, 100.0, 0.0, 20.0);

    assert!(separate(&mut a, &mut b, 10.0, 1.0));
    assert_eq!(a.get_position(), 116.0);
    assert_eq!(b.get_position(), 94.0);
}

#[test]
fn test_separation_skips_touching_bodies() {
    let mut a = body(BodyId::First, 100.0, 0.0, 20.0);
    let mut b = body(BodyId::Second, 120.0, 0.0, 20.0);

    assert!(!separate(&mut a, &mut b, 20.0, 1.0));
    assert_eq!(a.get_position(), 100.0);
    assert_eq!(b.get_position(), 120.0);
}
