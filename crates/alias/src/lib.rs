//! Demo runner for the value and reference semantics in `alias-val`
//!
//! Every demo writes its output lines to a [`Transcript`]. The binary runs
//! the default tour or the demos named on the command line and prints the
//! transcripts as text or JSON.

mod error;
pub use error::*;

mod transcript;
pub use transcript::*;

pub mod demos;
pub mod registry;
pub use registry::{find, select, tour_demos, Demo, DEMOS};

mod report;
pub use report::*;

/// Runs the named demos, or the whole tour when `names` is empty.
pub fn run(names: &[String]) -> DemoResult<Vec<Report>> {
    let demos = select(names)?;
    run_all(&demos)
}
