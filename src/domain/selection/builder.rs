use super::grid::DistanceLayer;
use super::record::AngleRecord;

/// Ordered set of selected viewpoints, serialized as a `selected_points` document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    points: Vec<AngleRecord>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `point` if absent, deselect it otherwise. Returns whether it is now selected.
    pub fn toggle(&mut self, point: AngleRecord) -> bool {
        if let Some(index) = self.points.iter().position(|p| *p == point) {
            self.points.remove(index);
            false
        } else {
            self.points.push(point);
            true
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Select every point of `layer` that is not already selected.
    pub fn select_layer(&mut self, layer: DistanceLayer) {
        for point in layer.points() {
            if !self.contains(&point) {
                self.points.push(point);
            }
        }
    }

    pub fn contains(&self, point: &AngleRecord) -> bool {
        self.points.contains(point)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[AngleRecord] {
        &self.points
    }

    /// Compact JSON array in selection order.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.points)
    }
}
