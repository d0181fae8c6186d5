use gridwalk_core::{GridConfig, Point, manhattan};

/// Distance estimate towards a fixed goal.
///
/// The estimate is the Manhattan distance in cells multiplied by the
/// straight-line distance in pixels between the two cells' top-left corners.
/// It is not admissible and its unit is cells × pixels; scores are only
/// meant to be compared with each other.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Heuristic {
    pub goal: Point,
    pub cell_width: f64,
    pub cell_height: f64,
}

impl Heuristic {
    pub fn new(goal: Point, cell_width: f64, cell_height: f64) -> Self {
        Self {
            goal,
            cell_width,
            cell_height,
        }
    }

    /// Estimate aimed at the configured end cell.
    pub fn for_config(config: &GridConfig) -> Self {
        Self::new(config.end, config.cell_width, config.cell_height)
    }

    /// Straight-line pixel distance between `p` and the goal.
    #[inline]
    pub fn pixel_distance(&self, p: Point) -> f64 {
        let dx = (p.x - self.goal.x) as f64 * self.cell_width;
        let dy = (p.y - self.goal.y) as f64 * self.cell_height;
        (dx * dx + dy * dy).sqrt()
    }

    #[inline]
    pub fn estimate(&self, p: Point) -> f64 {
        manhattan(p, self.goal) as f64 * self.pixel_distance(p)
    }
}
