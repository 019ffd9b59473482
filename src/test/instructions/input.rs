use super::*;

#[test]
fn reads_bytes_in_order() {
    let (processor, _, output) = run_program(
        &[instr!(Input, A), instr!(Input, B), instr!(Halt)],
        b"hi",
        ExitCode::Halted,
    );

    assert_eq!(0x68, processor.register(RegisterId::A));
    assert_eq!(0x69, processor.register(RegisterId::B));
    assert!(output.is_empty());
}

#[test]
fn end_of_input_yields_sentinel() {
    let (processor, _, _) =
        run_program(&[instr!(Input, C), instr!(Halt)], b"", ExitCode::Halted);

    assert_eq!(constants::END_OF_INPUT, processor.register(RegisterId::C));
}

#[test]
fn sentinel_repeats_after_end_of_input() {
    let (processor, _, _) = run_program(
        &[instr!(Input, A), instr!(Input, B), instr!(Halt)],
        b"x",
        ExitCode::Halted,
    );

    assert_eq!(0x78, processor.register(RegisterId::A));
    assert_eq!(constants::END_OF_INPUT, processor.register(RegisterId::B));
}
