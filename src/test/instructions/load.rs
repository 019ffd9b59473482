use super::*;

#[test]
fn moves_the_finger_within_array_zero() {
    machine_runs! {
        [instr!(Load, B, C), 0xE000_0000, instr!(Halt)],
        [C = 2] => []
    }
}

#[test]
fn switches_to_a_copy_of_the_source_array() {
    // Builds the program [Orthography A, 33; Halt] inside slot 1 and
    // jumps to its start.
    machine_runs! {
        [
            instr!(Alloc, B, C),
            instr!(Amend, B, D, E),
            instr!(Amend, B, F, G),
            instr!(Load, B, H),
        ],
        [C = 2, E = ortho!(A, 33), F = 1, G = instr!(Halt)] => [A = 33, B = 1]
    }
}

#[test]
fn source_array_survives_the_switch() {
    let (processor, heap, _, result) = step_program(
        vec![
            instr!(Alloc, B, C),
            instr!(Amend, B, D, E),
            instr!(Amend, B, F, G),
            instr!(Load, B, H),
        ],
        &[
            (RegisterId::C, 2),
            (RegisterId::E, ortho!(A, 33)),
            (RegisterId::F, 1),
            (RegisterId::G, instr!(Halt)),
        ],
    );

    assert_eq!(Some(ExitCode::Halted), result);
    assert_eq!(33, processor.register(RegisterId::A));
    assert_eq!(Ok(ortho!(A, 33)), heap.read(1, 0));
    assert_eq!(Ok(instr!(Halt)), heap.read(1, 1));
}

#[test]
fn loading_from_a_vacant_slot_stops() {
    machine_exits! {
        [instr!(Load, B, C), instr!(Halt)],
        [B = 4] => [],
        BadSlot
    }
}

#[test]
fn jump_past_the_end_stops_on_fetch() {
    machine_exits! {
        [instr!(Load, B, C), instr!(Halt)],
        [C = 50] => [],
        BadFetch
    }
}
