//! Small structs used to show value receivers, pointer receivers and
//! struct literals.

use serde::Serialize;
use std::fmt::{self, Display, Formatter};

/// Integer vertex. Omitted fields in a literal take their zero value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Vertex {
    pub x: i64,
    pub y: i64,
}

impl Vertex {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl Display for Vertex {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {}}}", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct GeoVertex {
    pub lat: f64,
    pub long: f64,
}

impl GeoVertex {
    pub const fn new(lat: f64, long: f64) -> Self {
        Self { lat, long }
    }
}

impl Display for GeoVertex {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {}}}", self.lat, self.long)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance from the origin. Takes a copy of the receiver.
    pub fn abs(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Scales the receiver in place.
    pub fn scale(&mut self, f: f64) {
        self.x *= f;
        self.y *= f;
    }
}

/// Function form of [`Point::scale`]; it only accepts a pointer.
pub fn scale_point(p: &mut Point, f: f64) {
    p.x *= f;
    p.y *= f;
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {}}}", self.x, self.y)
    }
}

/// A method on a non-struct type.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
pub struct MyFloat(pub f64);

impl MyFloat {
    pub fn abs(self) -> f64 {
        if self.0 < 0.0 {
            -self.0
        } else {
            self.0
        }
    }
}
