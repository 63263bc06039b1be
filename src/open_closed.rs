//! Open/Closed: open for extension, closed for modification.
//!
//! `TotalAreaCalculator` works with anything that implements
//! [`AreaComputable`]. A new shape is a new impl; the calculator never changes.

use crate::config::OpenClosedConfig;
use crate::console::Console;
use std::f64::consts::PI;

// =============================================================================
// The capability
// =============================================================================

pub trait AreaComputable {
    fn calculate_area(&self) -> f64;
}

// =============================================================================
// Shapes
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectangularShape {
    width: f64,
    height: f64,
}

impl RectangularShape {
    pub fn new(width: f64, height: f64) -> Self {
        RectangularShape { width, height }
    }
}

impl AreaComputable for RectangularShape {
    fn calculate_area(&self) -> f64 {
        self.width * self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularShape {
    radius: f64,
}

impl CircularShape {
    pub fn new(radius: f64) -> Self {
        CircularShape { radius }
    }
}

impl AreaComputable for CircularShape {
    fn calculate_area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

// =============================================================================
// The aggregator
// =============================================================================

#[derive(Debug, Default)]
pub struct TotalAreaCalculator;

impl TotalAreaCalculator {
    pub fn new() -> Self {
        TotalAreaCalculator
    }

    pub fn compute_total_area(&self, shapes: &[Box<dyn AreaComputable>]) -> f64 {
        shapes
            .iter()
            .map(|shape| {
                let area = shape.calculate_area();
                tracing::trace!(area, "adding shape area");
                area
            })
            .sum()
    }
}

pub const SUMMARY: &str = "TotalAreaCalculator is closed for modification but open \
for extension: any new shape that implements AreaComputable works with it \
without touching its code.";

pub fn run(console: &dyn Console, config: &OpenClosedConfig) {
    let shapes: Vec<Box<dyn AreaComputable>> = vec![
        Box::new(RectangularShape::new(
            config.rectangle.width,
            config.rectangle.height,
        )),
        Box::new(CircularShape::new(config.circle_radius)),
    ];

    let calculator = TotalAreaCalculator::new();
    let total_area = calculator.compute_total_area(&shapes);
    console.write_line(&format!("Total area: {total_area:?}"));
}
