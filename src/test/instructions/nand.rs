use super::*;

#[test]
fn complements_the_conjunction() {
    machine_runs! {
        [instr!(Nand, A, B, C), instr!(Halt)],
        [B = 0b1100, C = 0b1010] => [A = !0b1000u32]
    }
}

#[test]
fn all_ones_yield_zero() {
    machine_runs! {
        [instr!(Nand, A, B, C), instr!(Halt)],
        [B = 0xFFFF_FFFF, C = 0xFFFF_FFFF] => [A = 0]
    }
}

#[test]
fn zero_operand_yields_all_ones() {
    machine_runs! {
        [instr!(Nand, A, B, C), instr!(Halt)],
        [B = 0xDEAD_BEEF] => [A = 0xFFFF_FFFF]
    }
}
