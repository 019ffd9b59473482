use super::*;

#[test]
fn multiplies() {
    machine_runs! {
        [instr!(Mult, A, B, C), instr!(Halt)],
        [B = 6, C = 7] => [A = 42]
    }
}

#[test]
fn wraps_modulo_32_bits() {
    machine_runs! {
        [instr!(Mult, A, B, C), instr!(Halt)],
        [B = 0x8000_0000, C = 2] => [A = 0]
    }
}

#[test]
fn wraps_to_one() {
    machine_runs! {
        [instr!(Mult, A, B, C), instr!(Halt)],
        [B = 0xFFFF_FFFF, C = 0xFFFF_FFFF] => [A = 1]
    }
}
