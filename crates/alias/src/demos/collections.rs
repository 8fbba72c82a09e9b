//! Arrays copy on assignment; slices are views that share storage.

use crate::{say, Transcript};
use alias_val::{join, Array, Ptr, Slice, ValResult, ValStr};
use std::fmt::{self, Display, Formatter};

fn print_slice(out: &mut Transcript, name: &str, s: &Slice<i64>) {
    out.line(format!("{} len={} cap={} {}", name, s.len(), s.cap(), s));
}

fn print_header(out: &mut Transcript, s: &Slice<i64>) {
    out.line(format!("len={} cap={} {}", s.len(), s.cap(), s));
}

fn strs<const N: usize>(words: [&str; N]) -> Array<ValStr, N> {
    Array::new(words.map(ValStr::from))
}

pub fn arrays(out: &mut Transcript) -> ValResult<()> {
    let mut a: Array<ValStr, 2> = Array::default();
    a.set(0, "Hello".into())?;
    a.set(1, "World".into())?;
    say!(out, a[0], a[1]);
    say!(out, a);

    let primes = Array::new([2, 3, 5, 7, 11, 13]);
    say!(out, primes);
    Ok(())
}

pub fn slices(out: &mut Transcript) -> ValResult<()> {
    let primes = Slice::from_array(Array::new([2, 3, 5, 7, 11, 13]));
    let s = primes.slice(1..4)?;
    say!(out, s);

    let names = Slice::from_array(strs(["John", "Paul", "George", "Ringo"]));
    say!(out, names);

    let a = names.slice(0..2)?;
    let b = names.slice(1..3)?;
    say!(out, a, b);

    b.set(0, "XXX".into())?;
    say!(out, a, b);
    say!(out, names);
    Ok(())
}

/// Element of an anonymous struct slice literal.
struct Flagged {
    i: i64,
    b: bool,
}

impl Display for Flagged {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {}}}", self.i, self.b)
    }
}

pub fn slice_literals(out: &mut Transcript) -> ValResult<()> {
    let q = Slice::from([2, 3, 5, 7, 11, 13]);
    say!(out, q);

    let r = Slice::from([true, false, true, true, false, true]);
    say!(out, r);

    let s: Slice<Flagged> = [(2, true), (3, false), (5, true), (7, true), (11, false), (13, true)]
        .into_iter()
        .map(|(i, b)| Flagged { i, b })
        .collect();
    say!(out, s);
    Ok(())
}

pub fn slice_defaults(out: &mut Transcript) -> ValResult<()> {
    let mut s = Slice::from([2, 3, 5, 7, 11, 13]);

    s = s.slice(1..4)?;
    say!(out, s);
    s = s.slice(..2)?;
    say!(out, s);
    s = s.slice(1..)?;
    say!(out, s);
    s = s.slice(..)?;
    say!(out, s);

    let a = Slice::make(5);
    print_slice(out, "a", &a);

    let b = Slice::make_with_cap(0, 5)?;
    print_slice(out, "b", &b);

    let c = b.slice(..2)?;
    print_slice(out, "c", &c);

    let d = c.slice(2..5)?;
    print_slice(out, "d", &d);
    Ok(())
}

pub fn slices_of_slices(out: &mut Transcript) -> ValResult<()> {
    let row = || Slice::from_array(strs(["_", "_", "_"]));
    let board = Slice::from([row(), row(), row()]);

    // The players take turns.
    board.get(0)?.set(0, "X".into())?;
    board.get(2)?.set(2, "O".into())?;
    board.get(1)?.set(2, "X".into())?;
    board.get(1)?.set(0, "O".into())?;
    board.get(0)?.set(2, "X".into())?;

    for row in board.iter() {
        say!(out, join(&row, " "));
    }
    Ok(())
}

pub fn range(out: &mut Transcript) -> ValResult<()> {
    let pow = Slice::from([1, 2, 4, 8, 16, 32, 64, 128]);
    for (index, value) in pow.iter().enumerate() {
        out.line(format!("2**{} = {}", index, value));
    }
    Ok(())
}

pub fn range_pow(out: &mut Transcript) -> ValResult<()> {
    let pow: Slice<i64> = Slice::make(10);
    for i in 0..pow.len() {
        pow.set(i, 1 << i)?;
    }
    for value in pow.iter() {
        say!(out, value);
    }
    Ok(())
}

/// Appending to a nil slice, one element and then several at a time.
pub fn append(out: &mut Transcript) -> ValResult<()> {
    let mut s: Slice<i64> = Slice::nil();
    print_header(out, &s);

    s = s.append([0]);
    print_header(out, &s);

    s = s.append([1]);
    print_header(out, &s);

    s = s.append([2, 3, 4]);
    print_header(out, &s);
    Ok(())
}

/// Assigning an array copies it. A pointer to an array writes into the
/// original.
pub fn array_copy(out: &mut Transcript) -> ValResult<()> {
    let a = Array::new([1, 2, 3]);
    let mut b = a;
    b[0] = 100;
    say!(out, "a =", a, "b =", b);

    let x = Ptr::new(Array::new([1, 2, 3]));
    let p = x.clone();
    p.with_mut(|arr| arr[1] = 200);
    say!(out, "x =", x.get(), "p =", p);

    let mut y = x.get();
    y[2] = 300;
    say!(out, "x =", x.get(), "y =", y);
    Ok(())
}

pub fn growth(out: &mut Transcript) -> ValResult<()> {
    let s = Slice::make_with_cap(0, 4)?.append([1, 2, 3]);
    print_slice(out, "s", &s);

    let t = s.append([4]);
    print_slice(out, "t", &t);
    say!(out, "t shares s:", t.shares_backing(&s));

    let u = t.append([5]);
    print_slice(out, "u", &u);
    say!(out, "u shares t:", u.shares_backing(&t));

    u.set(0, 99)?;
    say!(out, "s =", s, "t =", t, "u =", u);

    let clipped = s.slice3(0, 2, 2)?;
    let w = clipped.append([7]);
    say!(out, "s =", s, "w =", w);
    Ok(())
}
