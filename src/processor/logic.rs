use super::ExitCode;
use crate::heap::PlatterHeap;
use crate::io::Port;
use crate::{register_index, Instruction, Platter, RegisterId};

pub enum TickResult {
    Next,
    Jump(Platter),
    Stop(ExitCode),
}

fn get(registers: &[Platter], id: RegisterId) -> Platter {
    registers[register_index(id)]
}

fn set(registers: &mut [Platter], id: RegisterId, value: Platter) {
    registers[register_index(id)] = value;
}

pub fn tick(
    registers: &mut [Platter],
    heap: &mut PlatterHeap,
    port: &mut dyn Port,
    word: Platter,
) -> TickResult {
    let instruction = match Instruction::decode(word) {
        Some(instruction) => instruction,
        None => return TickResult::Stop(ExitCode::InvalidOperator),
    };

    match instruction {
        Instruction::CondMove { a, b, c } => {
            if get(registers, c) != 0 {
                set(registers, a, get(registers, b));
            }
        }

        Instruction::Index { a, b, c } => {
            match heap.read(get(registers, b), get(registers, c)) {
                Ok(value) => set(registers, a, value),
                Err(()) => return TickResult::Stop(ExitCode::BadMemoryAccess),
            }
        }

        Instruction::Amend { a, b, c } => {
            let (id, offset, value) = (get(registers, a), get(registers, b), get(registers, c));
            if heap.write(id, offset, value).is_err() {
                return TickResult::Stop(ExitCode::BadMemoryAccess);
            }
        }

        Instruction::Add { a, b, c } => {
            set(registers, a, get(registers, b).wrapping_add(get(registers, c)));
        }

        Instruction::Mult { a, b, c } => {
            set(registers, a, get(registers, b).wrapping_mul(get(registers, c)));
        }

        Instruction::Div { a, b, c } => {
            let divisor = get(registers, c);
            if divisor == 0 {
                return TickResult::Stop(ExitCode::DivisionByZero);
            }
            set(registers, a, get(registers, b) / divisor);
        }

        Instruction::Nand { a, b, c } => {
            set(registers, a, !(get(registers, b) & get(registers, c)));
        }

        Instruction::Halt => {
            return TickResult::Stop(ExitCode::Halted);
        }

        Instruction::Alloc { b, c } => {
            let id = heap.allocate(get(registers, c));
            set(registers, b, id);
        }

        Instruction::Abandon { c } => {
            if heap.abandon(get(registers, c)).is_err() {
                return TickResult::Stop(ExitCode::BadSlot);
            }
        }

        Instruction::Output { c } => {
            let value = get(registers, c);
            if value > 0xFF {
                return TickResult::Stop(ExitCode::BadOutput);
            }
            if port.write(value).is_err() {
                return TickResult::Stop(ExitCode::IoFailure);
            }
        }

        Instruction::Input { c } => match port.read() {
            Ok(value) => set(registers, c, value),
            Err(()) => return TickResult::Stop(ExitCode::IoFailure),
        },

        Instruction::Load { b, c } => {
            if heap.switch_program(get(registers, b)).is_err() {
                return TickResult::Stop(ExitCode::BadSlot);
            }
            return TickResult::Jump(get(registers, c));
        }

        Instruction::Orthography { a, immediate } => {
            set(registers, a, immediate);
        }
    }

    TickResult::Next
}
