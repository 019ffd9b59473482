pub mod constants;
mod heap;
mod instructions;
mod io;
mod processor;

pub use crate::heap::PlatterHeap;
pub use crate::instructions::*;
pub use crate::io::{Port, StreamPort};
pub use crate::processor::{ExitCode, Processor};

/// The machine's fundamental datum, a 32-bit unsigned word.
///
/// All arithmetic on platters is unsigned modulo 2³².
pub type Platter = u32;
