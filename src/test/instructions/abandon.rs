use super::*;

#[test]
fn abandoning_array_zero_stops() {
    machine_exits! {
        [instr!(Abandon, C), instr!(Halt)],
        [] => [],
        BadSlot
    }
}

#[test]
fn abandoning_twice_stops() {
    machine_exits! {
        [
            instr!(Alloc, B, C),
            instr!(Abandon, B),
            instr!(Abandon, B),
            instr!(Halt),
        ],
        [C = 1] => [B = 1],
        BadSlot
    }
}

#[test]
fn abandoning_unallocated_slot_stops() {
    machine_exits! {
        [instr!(Abandon, C), instr!(Halt)],
        [C = 9] => [],
        BadSlot
    }
}
