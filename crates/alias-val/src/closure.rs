//! Callables that own private state
//!
//! Each generator call builds a fresh accumulator that belongs to the
//! returned callable alone. Two callables from the same generator never see
//! each other's updates, and the state lives exactly as long as the callable.

/// Running-sum accumulator. Every call adds its argument to the private sum
/// and returns the new total. The sum wraps on overflow.
#[derive(Debug, Default)]
pub struct Adder {
    sum: i64,
}

/// Builds a new [`Adder`] whose sum starts at zero.
pub fn adder() -> Adder {
    Adder::default()
}

impl Adder {
    pub fn call(&mut self, x: i64) -> i64 {
        self.sum = self.sum.wrapping_add(x);
        self.sum
    }

    pub fn sum(&self) -> i64 {
        self.sum
    }

    /// The same accumulator as a plain closure.
    pub fn into_fn(mut self) -> impl FnMut(i64) -> i64 {
        move |x| self.call(x)
    }
}

/// Successive Fibonacci numbers starting at 0.
///
/// Each call returns the current number and advances the pair, so the
/// sequence is 0, 1, 1, 2, 3, 5, ... Arithmetic wraps on overflow.
#[derive(Debug)]
pub struct Fibonacci {
    a: u64,
    b: u64,
}

pub fn fibonacci() -> Fibonacci {
    Fibonacci { a: 0, b: 1 }
}

impl Fibonacci {
    pub fn call(&mut self) -> u64 {
        let current = self.a;
        self.a = self.b;
        self.b = current.wrapping_add(self.b);
        current
    }
}

impl Iterator for Fibonacci {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.call())
    }
}

/// Length of the hypotenuse of a right triangle with legs `x` and `y`.
pub fn hypot(x: f64, y: f64) -> f64 {
    (x * x + y * y).sqrt()
}

/// `x` raised to `y`.
pub fn pow(x: f64, y: f64) -> f64 {
    x.powf(y)
}

/// Applies `f` to the fixed arguments `(3, 4)`.
pub fn compute(f: impl Fn(f64, f64) -> f64) -> f64 {
    f(3.0, 4.0)
}
