use crate::{say, Transcript};
use alias_val::{Ptr, ValResult, Vertex};

const V1: Vertex = Vertex::new(1, 2);
const V2: Vertex = Vertex { x: 1, y: 0 };
const V3: Vertex = Vertex { x: 0, y: 0 };

thread_local! {
    static P: Ptr<Vertex> = Ptr::new(Vertex::new(1, 2));
}

/// There is no pointer arithmetic, only reads and writes through `p`.
pub fn pointers(out: &mut Transcript) -> ValResult<()> {
    let i = Ptr::new(42i64);
    let j = Ptr::new(2701i64);

    let mut p = i.clone();
    say!(out, p.get());
    p.set(21);
    say!(out, i.get());

    p = j.clone();
    p.set(p.get() / 37);
    say!(out, j.get());
    Ok(())
}

pub fn structs(out: &mut Transcript) -> ValResult<()> {
    let v = Ptr::new(Vertex::new(1, 2));
    let p = v.clone();
    p.with_mut(|v| v.x = 1_000_000_000);
    say!(out, v.get());
    Ok(())
}

pub fn struct_literals(out: &mut Transcript) -> ValResult<()> {
    let p = P.with(|p| p.to_string());
    say!(out, V1, p, V2, V3);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointers() {
        let mut out = Transcript::new();
        pointers(&mut out).unwrap();
        assert_eq!(out.lines(), ["42", "21", "73"]);
    }

    #[test]
    fn test_global_pointer_is_shared() {
        P.with(|p| {
            let alias = p.clone();
            assert!(alias.ptr_eq(p));
            assert_eq!(alias.get(), V1);
        });
    }
}
