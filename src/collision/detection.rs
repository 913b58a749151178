use crate::bodies::Body;

/// A contact between the two bodies detected at the start of a step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Distance between the two centers
    pub distance: f32,

    /// Positive when the bodies are approaching
    pub closing_velocity: f32,

    /// How far the bodies interpenetrate, zero when they only touch
    pub penetration: f32,
}

/// Signed closing velocity of two bodies
///
/// The body with the smaller position is the left one, whatever its identity.
/// The result is positive only when the left body moves toward the right body
/// faster than the right body moves away from it. When both centers coincide
/// the second body is treated as the left one.
#[inline]
pub fn closing_velocity(a: &Body, b: &Body) -> f32 {
    if a.get_position() < b.get_position() {
        a.get_velocity() - b.get_velocity()
    } else {
        b.get_velocity() - a.get_velocity()
    }
}

/// Detects a collision between two bodies
///
/// Returns a contact when the centers are within half the sum of the sizes
/// and the bodies are approaching. Separating bodies that still overlap do
/// not collide again.
pub fn detect_contact(a: &Body, b: &Body) -> Option<Contact> {
    let distance = (a.get_position() - b.get_position()).abs();
    let reach = (a.get_size() + b.get_size()) / 2.0;
    let closing_velocity = closing_velocity(a, b);

    if distance <= reach && closing_velocity > 0.0 {
        Some(Contact {
            distance,
            closing_velocity,
            penetration: reach - distance,
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::{BodyColor, BodyId};

    fn body(id: BodyId, position: f32, velocity: f32) -> Body {
        Body::new(id, position, velocity, 20.0, 1.0, BodyColor::default())
    }

    #[test]
    fn closing_velocity_follows_position_not_identity() {
        let first = body(BodyId::First, 100.0, -5.0);
        let second = body(BodyId::Second, 90.0, 5.0);

        // Second is on the left and moves right, first moves left
        assert_eq!(closing_velocity(&first, &second), 10.0);
        assert_eq!(closing_velocity(&second, &first), 10.0);
    }

    #[test]
    fn touching_bodies_collide() {
        let a = body(BodyId::First, 0.0, 1.0);
        let b = body(BodyId::Second, 20.0, 0.0);

        let contact = detect_contact(&a, &b).unwrap();
        assert_eq!(contact.distance, 20.0);
        assert_eq!(contact.penetration, 0.0);
    }

    #[test]
    fn separating_overlap_is_ignored() {
        let a = body(BodyId::First, 0.0, -1.0);
        let b = body(BodyId::Second, 10.0, 1.0);

        assert!(detect_contact(&a, &b).is_none());
    }
}
