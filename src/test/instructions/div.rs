use super::*;

#[test]
fn truncates_toward_zero() {
    machine_runs! {
        [instr!(Div, A, B, C), instr!(Halt)],
        [B = 2096, C = 37] => [A = 56]
    }
}

#[test]
fn division_is_unsigned() {
    machine_runs! {
        [instr!(Div, A, B, C), instr!(Halt)],
        [B = 0xFFFF_FFFF, C = 2] => [A = 0x7FFF_FFFF]
    }
}

#[test]
fn zero_dividend() {
    machine_runs! {
        [instr!(Div, A, B, C), instr!(Halt)],
        [C = 5] => [A = 0]
    }
}

#[test]
fn by_zero_stops() {
    machine_exits! {
        [instr!(Div, A, B, C), instr!(Halt)],
        [B = 2072] => [],
        DivisionByZero
    }
}
