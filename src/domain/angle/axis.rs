use std::fmt;

/// One of the three camera-angle dimensions a prompt is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal rotation around the subject, degrees clockwise from the front.
    Azimuth,
    /// Vertical camera angle, degrees from eye level.
    Elevation,
    /// Shot distance ordinal (close-up, medium, wide).
    Distance,
}

impl Axis {
    /// All axes in prompt order.
    pub const ALL: [Axis; 3] = [Axis::Azimuth, Axis::Elevation, Axis::Distance];

    /// The codes that carry a phrase, in selector order.
    pub fn codes(&self) -> &'static [i64] {
        match self {
            Axis::Azimuth => &[0, 45, 90, 135, 180, 225, 270, 315],
            Axis::Elevation => &[-30, 0, 30, 60],
            Axis::Distance => &[0, 1, 2],
        }
    }

    /// Code used when a record omits this axis.
    pub fn default_code(&self) -> i64 {
        match self {
            Axis::Azimuth => 0,
            Axis::Elevation => 0,
            Axis::Distance => 1,
        }
    }

    /// Position in [`Axis::codes`] used when a label cannot be resolved.
    pub fn default_position(&self) -> usize {
        match self {
            Axis::Azimuth => 0,
            Axis::Elevation => 1,
            Axis::Distance => 1,
        }
    }

    /// Record key for this axis in `selected_points` documents.
    pub fn key(&self) -> &'static str {
        match self {
            Axis::Azimuth => "azimuth",
            Axis::Elevation => "elevation",
            Axis::Distance => "distance",
        }
    }

    /// Code at `position` in the selector order, falling back to the default position.
    pub fn code_at(&self, position: usize) -> i64 {
        let codes = self.codes();
        codes.get(position).copied().unwrap_or(codes[self.default_position()])
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
