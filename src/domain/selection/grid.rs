use std::fmt;
use std::str::FromStr;

use crate::domain::AppError;
use crate::domain::angle::Axis;

use super::record::AngleRecord;

/// One of the three concentric shells of selectable points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistanceLayer {
    CloseUp,
    Medium,
    Wide,
}

impl DistanceLayer {
    pub const ALL: [DistanceLayer; 3] =
        [DistanceLayer::CloseUp, DistanceLayer::Medium, DistanceLayer::Wide];

    /// Distance code of every point on this layer.
    pub fn code(&self) -> i64 {
        match self {
            DistanceLayer::CloseUp => 0,
            DistanceLayer::Medium => 1,
            DistanceLayer::Wide => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DistanceLayer::CloseUp => "close-up",
            DistanceLayer::Medium => "medium",
            DistanceLayer::Wide => "wide",
        }
    }

    /// Every point on this layer, azimuth-major then elevation.
    pub fn points(&self) -> impl Iterator<Item = AngleRecord> + '_ {
        Axis::Azimuth.codes().iter().flat_map(move |azimuth| {
            Axis::Elevation
                .codes()
                .iter()
                .map(move |elevation| AngleRecord::new(*azimuth, *elevation, self.code()))
        })
    }
}

impl fmt::Display for DistanceLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DistanceLayer {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "close-up" | "closeup" | "close" | "0" => Ok(DistanceLayer::CloseUp),
            "medium" | "1" => Ok(DistanceLayer::Medium),
            "wide" | "2" => Ok(DistanceLayer::Wide),
            _ => Err(AppError::InvalidLayer { name: s.to_string() }),
        }
    }
}

/// All selectable points, layer by layer.
pub fn grid_points() -> impl Iterator<Item = AngleRecord> {
    DistanceLayer::ALL.into_iter().flat_map(|layer| layer.points().collect::<Vec<_>>())
}
