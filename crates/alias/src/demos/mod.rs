//! The demo routines. Each one writes its printed lines to a transcript and
//! returns early with the fault when a value operation fails.

pub mod collections;
pub mod funcs;
pub mod maps;
pub mod methods;
pub mod pointers;
