//! The fixed set of demos, in the order the tour runs them

use crate::demos::{collections, funcs, maps, methods, pointers};
use crate::{DemoError, DemoResult, Transcript};
use alias_val::ValResult;

pub type DemoFn = fn(&mut Transcript) -> ValResult<()>;

pub struct Demo {
    pub name: &'static str,
    pub about: &'static str,
    /// Part of the default run. Extras only run when named.
    pub in_tour: bool,
    pub run: DemoFn,
}

const fn tour(name: &'static str, about: &'static str, run: DemoFn) -> Demo {
    Demo {
        name,
        about,
        in_tour: true,
        run,
    }
}

const fn extra(name: &'static str, about: &'static str, run: DemoFn) -> Demo {
    Demo {
        name,
        about,
        in_tour: false,
        run,
    }
}

pub static DEMOS: &[Demo] = &[
    tour("pointers", "read and write a variable through a pointer", pointers::pointers),
    tour("structs", "set a struct field through a pointer", pointers::structs),
    tour("struct-literals", "struct literals with omitted fields", pointers::struct_literals),
    tour("arrays", "fixed-size arrays and their zero value", collections::arrays),
    tour("slices", "overlapping slices share their backing array", collections::slices),
    tour("slice-literals", "slice literals of numbers, booleans and structs", collections::slice_literals),
    tour("slice-defaults", "omitted slice bounds, length and capacity", collections::slice_defaults),
    tour("slices-of-slices", "a tic-tac-toe board of nested slices", collections::slices_of_slices),
    tour("range", "range over a slice with index and value", collections::range),
    tour("range-pow", "fill a slice by index, then range over values", collections::range_pow),
    tour("maps", "nil, initialized and literal maps; insert, update, delete", maps::maps),
    tour("func-values", "functions passed as values", funcs::func_values),
    tour("closures", "two adders with private running sums", funcs::closures),
    tour("fibonacci", "a closure that returns successive Fibonacci numbers", funcs::fibonacci),
    tour("methods", "a method with a value receiver", methods::methods),
    tour("methods-non-struct", "a method on a non-struct type", methods::methods_non_struct),
    tour("pointer-receivers", "a method with a pointer receiver", methods::pointer_receivers),
    extra("append", "append to a nil slice and watch it grow", collections::append),
    extra("array-copy", "array assignment copies, a pointer to an array does not", collections::array_copy),
    extra("growth", "append past capacity severs aliasing", collections::growth),
    extra("word-count", "count words with a map", maps::word_count),
    extra("pointer-indirection", "methods and functions on values and pointers", methods::pointer_indirection),
    extra("nil-map-write", "write into a nil map (faults)", maps::nil_map_write),
];

pub fn find(name: &str) -> Option<&'static Demo> {
    DEMOS.iter().find(|demo| demo.name == name)
}

/// Demos of the default run, in order.
pub fn tour_demos() -> impl Iterator<Item = &'static Demo> {
    DEMOS.iter().filter(|demo| demo.in_tour)
}

/// Resolves demo names in the order given; an empty list selects the tour.
pub fn select(names: &[String]) -> DemoResult<Vec<&'static Demo>> {
    if names.is_empty() {
        return Ok(tour_demos().collect());
    }
    names
        .iter()
        .map(|name| find(name).ok_or_else(|| DemoError::UnknownDemo { name: name.clone() }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = DEMOS.iter().map(|d| d.name).collect();
        assert_eq!(names.len(), DEMOS.len());
    }

    #[test]
    fn test_tour_order() {
        let names: Vec<_> = tour_demos().map(|d| d.name).collect();
        assert_eq!(names.first(), Some(&"pointers"));
        assert_eq!(names.last(), Some(&"pointer-receivers"));
        assert_eq!(names.len(), 17);
        assert!(!names.contains(&"nil-map-write"));
    }

    #[test]
    fn test_select_keeps_given_order() {
        let picked = select(&["fibonacci".to_string(), "arrays".to_string()]).unwrap();
        let names: Vec<_> = picked.iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["fibonacci", "arrays"]);
    }

    #[test]
    fn test_select_unknown() {
        let err = select(&["nope".to_string()]).err().unwrap();
        assert!(matches!(err, DemoError::UnknownDemo { ref name } if name == "nope"));
    }
}
