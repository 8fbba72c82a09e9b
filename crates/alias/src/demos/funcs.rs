//! Function values and closures with captured state.

use crate::{say, Transcript};
use alias_val::{adder, compute, hypot, pow, ValResult};

pub fn func_values(out: &mut Transcript) -> ValResult<()> {
    say!(out, hypot(5.0, 12.0));
    say!(out, compute(hypot));
    say!(out, compute(pow));
    Ok(())
}

/// Each adder is bound to its own sum.
pub fn closures(out: &mut Transcript) -> ValResult<()> {
    let (mut pos, mut neg) = (adder(), adder());
    for i in 0..10 {
        say!(out, pos.call(i), neg.call(-2 * i));
    }
    Ok(())
}

pub fn fibonacci(out: &mut Transcript) -> ValResult<()> {
    let mut f = alias_val::fibonacci();
    for _ in 0..10 {
        say!(out, f.call());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_func_values() {
        let mut out = Transcript::new();
        func_values(&mut out).unwrap();
        assert_eq!(out.lines(), ["13", "5", "81"]);
    }
}
