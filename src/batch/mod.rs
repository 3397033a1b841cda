//! Batch processing of domain lists
//!
//! Processing is two-phase: the whole input is collected first, then the
//! domains are driven through fixed-size concurrent windows.

mod input;
mod orchestrator;

pub use input::read_domains;
pub use orchestrator::{process_domain, run_batch, Orchestrator};
