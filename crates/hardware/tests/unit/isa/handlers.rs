//! # Instruction Handler Tests
//!
//! Each handler called directly, outside the execution loop, to check its
//! state changes and its control outcome.

use crate::common::mocks::sink::MockSink;
use ls8_core::common::VmError;
use ls8_core::core::Cpu;
use ls8_core::isa::Control;
use ls8_core::isa::handlers;
use ls8_core::soc::BufferConsole;
use mockall::predicate;
use pretty_assertions::assert_eq;

fn setup() -> (Cpu, BufferConsole) {
    (Cpu::default(), BufferConsole::new())
}

#[test]
fn hlt_halts_without_side_effects() {
    let (mut cpu, mut out) = setup();
    let before = cpu.regs.clone();
    assert_eq!(handlers::hlt(&mut cpu, &mut out, 1, 2), Ok(Control::Halt));
    assert_eq!(cpu.regs, before);
    assert!(out.lines().is_empty());
}

#[test]
fn ldi_sets_register_and_advances_three() {
    let (mut cpu, mut out) = setup();
    assert_eq!(handlers::ldi(&mut cpu, &mut out, 2, 77), Ok(Control::Advance(3)));
    assert_eq!(cpu.regs.get(2).unwrap(), 77);
}

#[test]
fn prn_writes_decimal_line() {
    let (mut cpu, _) = setup();
    cpu.regs.set(5, 255).unwrap();
    let mut sink = MockSink::new();
    let _ = sink.expect_write_line()
        .with(predicate::function(|line: &str| line == "255"))
        .times(1)
        .returning(|_| Ok(()));

    assert_eq!(handlers::prn(&mut cpu, &mut sink, 5, 0), Ok(Control::Advance(2)));
}

#[test]
fn prn_bad_register_writes_nothing() {
    let (mut cpu, _) = setup();
    let mut sink = MockSink::new();
    let _ = sink.expect_write_line().never();

    assert_eq!(
        handlers::prn(&mut cpu, &mut sink, 9, 0),
        Err(VmError::RegisterOutOfBounds(9))
    );
}

#[test]
fn mul_multiplies_through_alu() {
    let (mut cpu, mut out) = setup();
    cpu.regs.set(0, 8).unwrap();
    cpu.regs.set(1, 9).unwrap();
    assert_eq!(handlers::mul(&mut cpu, &mut out, 0, 1), Ok(Control::Advance(3)));
    assert_eq!(cpu.regs.get(0).unwrap(), 72);
}

#[test]
fn push_and_pop_advance_two() {
    let (mut cpu, mut out) = setup();
    cpu.regs.set(3, 42).unwrap();
    assert_eq!(handlers::push(&mut cpu, &mut out, 3, 0), Ok(Control::Advance(2)));
    assert_eq!(handlers::pop(&mut cpu, &mut out, 4, 0), Ok(Control::Advance(2)));
    assert_eq!(cpu.regs.get(4).unwrap(), 42);
}

#[test]
fn pop_into_bad_register_keeps_stack_intact() {
    let (mut cpu, mut out) = setup();
    cpu.push(1).unwrap();
    assert_eq!(
        handlers::pop(&mut cpu, &mut out, 8, 0),
        Err(VmError::RegisterOutOfBounds(8))
    );
    assert_eq!(cpu.sp, 243);
}

#[test]
fn call_jumps_to_register_value() {
    let (mut cpu, mut out) = setup();
    cpu.pc = 20;
    cpu.regs.set(1, 100).unwrap();
    assert_eq!(handlers::call(&mut cpu, &mut out, 1, 0), Ok(Control::Jump(100)));
    assert_eq!(cpu.pop().unwrap(), 22);
}

#[test]
fn call_at_end_of_memory_cannot_form_return_address() {
    let (mut cpu, mut out) = setup();
    cpu.pc = 255;
    assert_eq!(
        handlers::call(&mut cpu, &mut out, 0, 0),
        Err(VmError::AddressOutOfBounds(257))
    );
    assert_eq!(cpu.sp, 244);
}

#[test]
fn ret_jumps_to_popped_address() {
    let (mut cpu, mut out) = setup();
    cpu.push(0x33).unwrap();
    assert_eq!(handlers::ret(&mut cpu, &mut out, 0, 0), Ok(Control::Jump(0x33)));
}
