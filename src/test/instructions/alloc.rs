use super::*;

#[test]
fn returns_fresh_identifier() {
    machine_runs! {
        [instr!(Alloc, B, C), instr!(Halt)],
        [C = 10] => [B = 1]
    }
}

#[test]
fn arrays_are_zero_filled() {
    let (processor, heap, _, result) = step_program(
        vec![instr!(Alloc, B, C), instr!(Halt)],
        &[(RegisterId::C, 3)],
    );

    assert_eq!(Some(ExitCode::Halted), result);
    assert_eq!(1, processor.register(RegisterId::B));
    for offset in 0..3 {
        assert_eq!(Ok(0), heap.read(1, offset));
    }
}

#[test]
fn empty_array_is_allowed() {
    machine_runs! {
        [instr!(Alloc, B, C), instr!(Halt)],
        [] => [B = 1]
    }
}

#[test]
fn reuses_abandoned_identifiers() {
    machine_runs! {
        [
            instr!(Alloc, B, C),
            instr!(Abandon, B),
            instr!(Alloc, D, C),
            instr!(Abandon, D),
            instr!(Halt),
        ],
        [C = 4] => [B = 1, D = 1]
    }
}

#[test]
fn distinct_live_arrays_get_distinct_identifiers() {
    machine_runs! {
        [instr!(Alloc, B, C), instr!(Alloc, D, C), instr!(Halt)],
        [C = 2] => [B = 1, D = 2]
    }
}
