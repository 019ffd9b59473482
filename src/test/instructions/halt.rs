use super::*;

#[test]
fn stops_the_machine() {
    machine_runs! {
        [instr!(Halt)],
        [] => []
    }
}

#[test]
fn leaves_registers_untouched() {
    machine_runs! {
        [instr!(Halt)],
        [A = 1, H = 8] => []
    }
}

#[test]
fn no_fetch_happens_after_halt() {
    machine_runs! {
        [instr!(Halt), 0xF000_0000],
        [] => []
    }
}
