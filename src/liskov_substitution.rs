//! Liskov Substitution: any implementer can stand in for another.
//!
//! `SquareShape` is a special case of a rectangle, but it does not inherit
//! from one. Both implement [`AreaCalculable`] and the calculator relies on
//! nothing beyond that contract.

use crate::config::LiskovConfig;
use crate::console::Console;

pub trait AreaCalculable {
    fn compute_area(&self) -> f64;
}

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

impl AreaCalculable for RectangularShape {
    fn compute_area(&self) -> f64 {
        self.width * self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquareShape {
    side_length: f64,
}

impl SquareShape {
    pub fn new(side_length: f64) -> Self {
        SquareShape { side_length }
    }
}

impl AreaCalculable for SquareShape {
    fn compute_area(&self) -> f64 {
        self.side_length * self.side_length
    }
}

#[derive(Debug, Default)]
pub struct TotalAreaCalculator;

impl TotalAreaCalculator {
    pub fn new() -> Self {
        TotalAreaCalculator
    }

    pub fn calculate_total_area(&self, shapes: &[Box<dyn AreaCalculable>]) -> f64 {
        let mut total_area = 0.0;
        for shape in shapes {
            total_area += shape.compute_area();
        }
        tracing::debug!(shapes = shapes.len(), total_area, "calculated total area");
        total_area
    }
}

pub const SUMMARY: &str = "RectangularShape and SquareShape both implement \
AreaCalculable, so a square can be substituted wherever a shape is expected \
without affecting the correctness of TotalAreaCalculator.";

pub fn run(console: &dyn Console, config: &LiskovConfig) {
    let shapes: Vec<Box<dyn AreaCalculable>> = vec![
        Box::new(RectangularShape::new(
            config.rectangle.width,
            config.rectangle.height,
        )),
        Box::new(SquareShape::new(config.square_side)),
    ];

    let total_area = TotalAreaCalculator::new().calculate_total_area(&shapes);
    console.write_line(&format!("Total area: {total_area:?}"));
}
