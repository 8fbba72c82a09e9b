mod error;
pub use error::*;

mod shared;
pub use shared::*;

mod string;
pub use string::*;

mod ptr;
pub use ptr::*;

mod array;
pub use array::*;

mod slice;
pub use slice::*;

mod map;
pub use map::*;

mod closure;
pub use closure::*;

mod geometry;
pub use geometry::*;
