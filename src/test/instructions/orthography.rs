use super::*;

#[test]
fn loads_immediate() {
    machine_runs! {
        [ortho!(A, 65), instr!(Halt)],
        [] => [A = 65]
    }
}

#[test]
fn overwrites_previous_value() {
    machine_runs! {
        [ortho!(D, 65), instr!(Halt)],
        [D = 999] => [D = 65]
    }
}

#[test]
fn maximum_immediate() {
    machine_runs! {
        [ortho!(H, constants::IMMEDIATE_MASK), instr!(Halt)],
        [] => [H = 0x01FF_FFFF]
    }
}
