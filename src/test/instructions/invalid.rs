use super::*;

#[test]
fn operator_fourteen() {
    machine_exits! {
        [0xE000_0000u32],
        [] => [],
        InvalidOperator
    }
}

#[test]
fn operator_fifteen() {
    machine_exits! {
        [0xFFFF_FFFFu32],
        [] => [],
        InvalidOperator
    }
}

#[test]
fn running_off_the_end() {
    machine_exits! {
        [ortho!(A, 1)],
        [] => [A = 1],
        BadFetch
    }
}

#[test]
fn empty_program() {
    let mut heap = PlatterHeap::new(Vec::new());
    let mut port = empty_port();
    let mut processor = Processor::new();

    assert_eq!(ExitCode::BadFetch, processor.run(&mut heap, &mut port));
}
