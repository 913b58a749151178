mod body;
mod color;

pub use self::body::Body;
pub use self::color::BodyColor;

/// Which of the two bodies on the track a record refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum BodyId {
    /// The body that starts on the left quarter of the track
    First,

    /// The body that starts on the right quarter of the track
    Second,
}

impl BodyId {
    /// Index of the body in a two-element body array
    pub fn index(self) -> usize {
        match self {
            BodyId::First => 0,
            BodyId::Second => 1,
        }
    }
}
