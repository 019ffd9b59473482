use super::*;

#[test]
fn moves_when_condition_is_set() {
    machine_runs! {
        [instr!(CondMove, A, B, C), instr!(Halt)],
        [B = 77, C = 1] => [A = 77]
    }
}

#[test]
fn ignores_when_condition_is_zero() {
    machine_runs! {
        [instr!(CondMove, A, B, C), instr!(Halt)],
        [A = 5, B = 77] => []
    }
}

#[test]
fn any_non_zero_condition_counts() {
    machine_runs! {
        [instr!(CondMove, A, B, C), instr!(Halt)],
        [B = 3, C = 0xFFFF_FFFF] => [A = 3]
    }
}
