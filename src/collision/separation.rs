use crate::bodies::Body;

/// Pushes two interpenetrating bodies apart along the track
///
/// Each body moves by half the penetration plus `margin`, away from the
/// other according to their current ordering. `distance` is the center
/// distance measured when the contact was detected. Returns whether any
/// correction was applied.
pub fn separate(a: &mut Body, b: &mut Body, distance: f32, margin: f32) -> bool {
    let overlap = (a.get_size() + b.get_size()) / 2.0 - distance;
    if overlap <= 0.0 {
        return false;
    }

    let push = overlap / 2.0 + margin;
    if a.get_position() < b.get_position() {
        a.translate(-push);
        b.translate(push);
    } else {
        a.translate(push);
        b.translate(-push);
    }

    true
}
