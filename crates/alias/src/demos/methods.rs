use crate::{say, Transcript};
use alias_val::{scale_point, MyFloat, Point, Ptr, ValResult};
use std::f64::consts::SQRT_2;

pub fn methods(out: &mut Transcript) -> ValResult<()> {
    let v = Point::new(3.0, 4.0);
    say!(out, v.abs());
    Ok(())
}

pub fn methods_non_struct(out: &mut Transcript) -> ValResult<()> {
    let f = MyFloat(-SQRT_2);
    say!(out, f.abs());
    Ok(())
}

pub fn pointer_receivers(out: &mut Transcript) -> ValResult<()> {
    let mut v = Point::new(3.0, 4.0);
    v.scale(10.0);
    say!(out, v.abs());
    Ok(())
}

/// The method takes a value or a pointer; the function only a pointer.
pub fn pointer_indirection(out: &mut Transcript) -> ValResult<()> {
    let mut v = Point::new(3.0, 4.0);
    v.scale(2.0);
    scale_point(&mut v, 10.0);

    let p = Ptr::new(Point::new(4.0, 3.0));
    p.with_mut(|p| p.scale(3.0));
    p.with_mut(|p| scale_point(p, 8.0));

    say!(out, v, p);
    Ok(())
}
