mod logic;

use self::logic::TickResult;
use crate::heap::PlatterHeap;
use crate::io::Port;
use crate::{constants, register_index, Platter, RegisterId};

/// Reasons for the machine to stop.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum ExitCode {
    Halted,          // Halt instruction was executed (normal shutdown)
    DivisionByZero,  // Attempted division by zero
    BadMemoryAccess, // Read or write beyond the end of a platter array, or into a vacant slot
    BadSlot,         // Abandoned slot 0 or a vacant slot, or loaded from a vacant slot
    BadFetch,        // Execution finger moved past the end of array zero
    InvalidOperator, // Operator code 14 or 15
    BadOutput,       // Output of a value above 0xFF
    IoFailure,       // The underlying byte stream failed
}

/// The CPU: eight platter registers and the execution finger.
///
/// The processor owns no memory and no streams; the heap and the port
/// are borrowed for the duration of each [`step`] or [`run`] call, so a
/// single driver can hold all three without ownership cycles.
///
/// [`step`]: ./struct.Processor.html#method.step
/// [`run`]: ./struct.Processor.html#method.run
pub struct Processor {
    registers: [Platter; constants::REGISTER_COUNT],
    finger: Platter,
}

impl Default for Processor {
    fn default() -> Processor {
        Processor {
            registers: [0; constants::REGISTER_COUNT],
            finger: 0,
        }
    }
}

impl Processor {
    pub fn new() -> Processor {
        Default::default()
    }

    pub fn register(&self, id: RegisterId) -> Platter {
        self.registers[register_index(id)]
    }

    pub fn register_mut(&mut self, id: RegisterId) -> &mut Platter {
        &mut self.registers[register_index(id)]
    }

    pub fn registers(&self) -> &[Platter] {
        &self.registers
    }

    pub fn finger(&self) -> Platter {
        self.finger
    }

    /// Fetches and executes a single instruction.
    ///
    /// The finger is incremented after the fetch, so an instruction that
    /// assigns it (`Load`) overrides the increment. Returns `Some` when
    /// the machine stops.
    pub fn step(&mut self, heap: &mut PlatterHeap, port: &mut dyn Port) -> Option<ExitCode> {
        let word = match heap.read(0, self.finger) {
            Ok(word) => word,
            Err(()) => return Some(ExitCode::BadFetch),
        };
        self.finger = self.finger.wrapping_add(1);

        match logic::tick(&mut self.registers, heap, port, word) {
            TickResult::Next => None,
            TickResult::Jump(finger) => {
                self.finger = finger;
                None
            }
            TickResult::Stop(code) => Some(code),
        }
    }

    /// Resets registers and finger, then steps until the machine stops.
    /// Output is flushed before returning.
    pub fn run(&mut self, heap: &mut PlatterHeap, port: &mut dyn Port) -> ExitCode {
        self.registers = [0; constants::REGISTER_COUNT];
        self.finger = 0;

        loop {
            if let Some(code) = self.step(heap, port) {
                if port.flush().is_err() && code == ExitCode::Halted {
                    return ExitCode::IoFailure;
                }
                return code;
            }
        }
    }
}
