use super::*;

#[test]
fn writes_into_allocated_array() {
    machine_runs! {
        [
            instr!(Alloc, B, C),
            instr!(Amend, B, D, E),
            instr!(Index, F, B, D),
            instr!(Halt),
        ],
        [C = 4, D = 3, E = 55] => [B = 1, F = 55]
    }
}

#[test]
fn amends_array_zero_in_place() {
    // Overwrites the trap word at index 1 with Halt before reaching it.
    machine_runs! {
        [instr!(Amend, A, B, C), 0xE000_0000],
        [B = 1, C = instr!(Halt)] => []
    }
}

#[test]
fn out_of_bounds_stops() {
    machine_exits! {
        [instr!(Amend, A, B, C), instr!(Halt)],
        [B = 77] => [],
        BadMemoryAccess
    }
}

#[test]
fn unallocated_slot_stops() {
    machine_exits! {
        [instr!(Amend, A, B, C), instr!(Halt)],
        [A = 6] => [],
        BadMemoryAccess
    }
}
