//! # Stack Tests
//!
//! Push/pop mechanics, stack-pointer movement and bounds detection.

use crate::common::builder::ProgramBuilder;
use crate::common::harness::TestContext;
use ls8_core::common::VmError;
use ls8_core::config::Config;
use ls8_core::core::Cpu;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_sp_starts_at_stack_top() {
    let cpu = Cpu::default();
    assert_eq!(cpu.sp, 244);
    assert_eq!(cpu.stack_depth(), 0);
}

#[test]
fn test_push_decrements_then_writes() {
    let mut cpu = Cpu::default();
    cpu.push(0x5A).unwrap();
    assert_eq!(cpu.sp, 243);
    assert_eq!(cpu.ram.read(243).unwrap(), 0x5A);
}

#[test]
fn test_pop_reads_then_increments() {
    let mut cpu = Cpu::default();
    cpu.push(7).unwrap();
    assert_eq!(cpu.pop().unwrap(), 7);
    assert_eq!(cpu.sp, 244);
}

#[test]
fn test_stack_is_lifo() {
    let mut cpu = Cpu::default();
    for v in [1, 2, 3] {
        cpu.push(v).unwrap();
    }
    assert_eq!(cpu.pop().unwrap(), 3);
    assert_eq!(cpu.pop().unwrap(), 2);
    assert_eq!(cpu.pop().unwrap(), 1);
}

#[test]
fn test_twelve_pushes_fill_243_down_to_232() {
    let mut cpu = Cpu::default();
    let before = cpu.ram.clone();

    for i in 0..12u8 {
        let sp_before = cpu.sp;
        cpu.push(0xA0 + i).unwrap();
        assert_eq!(cpu.sp, sp_before - 1);
    }

    assert_eq!(cpu.sp, 232);
    assert_eq!(cpu.stack_depth(), 12);
    for (addr, (&now, &then)) in cpu
        .ram
        .as_slice()
        .iter()
        .zip(before.as_slice())
        .enumerate()
    {
        if (232..=243).contains(&addr) {
            assert_eq!(now, 0xA0 + (243 - addr) as u8);
        } else {
            assert_eq!(now, then, "address {addr} changed");
        }
    }
}

#[test]
fn test_sequential_pops_increment_sp() {
    let mut cpu = Cpu::default();
    for v in 0..5 {
        cpu.push(v).unwrap();
    }
    assert_eq!(cpu.sp, 239);
    for expected_sp in 240..=244u8 {
        let _ = cpu.pop().unwrap();
        assert_eq!(cpu.sp, expected_sp);
    }
}

#[test]
fn test_pop_above_stack_top_reads_memory() {
    let mut cpu = Cpu::default();
    cpu.ram.write(244, 0x77).unwrap();

    assert_eq!(cpu.pop(), Ok(0x77));
    assert_eq!(cpu.sp, 245);
    assert_eq!(cpu.stack_depth(), 0);
}

#[test]
fn test_pop_at_last_address_underflows() {
    let mut cpu = Cpu::default();
    cpu.sp = 255;
    assert_eq!(cpu.pop(), Err(VmError::StackUnderflow(255)));
    assert_eq!(cpu.sp, 255);
    assert_eq!(cpu.stats.pops, 0);
}

#[test]
fn test_pops_walk_up_to_the_last_address() {
    let mut cpu = Cpu::default();
    for expected_sp in 245..=255u8 {
        let _ = cpu.pop().unwrap();
        assert_eq!(cpu.sp, expected_sp);
    }
    assert_eq!(cpu.pop(), Err(VmError::StackUnderflow(255)));
}

#[test]
fn test_push_at_limit_overflows() {
    let mut config = Config::default();
    config.stack.limit = 240;
    let mut cpu = Cpu::new(&config);
    assert_eq!(cpu.stack_limit(), 240);
    assert_eq!(cpu.stack_top(), 244);
    for v in 0..4 {
        cpu.push(v).unwrap();
    }
    assert_eq!(cpu.sp, 240);
    assert_eq!(cpu.push(9), Err(VmError::StackOverflow(240)));
    assert_eq!(cpu.sp, 240);
}

#[test]
fn test_default_limit_allows_stack_down_to_address_zero() {
    let mut cpu = Cpu::default();
    for v in 0..244u32 {
        cpu.push(v as u8).unwrap();
    }
    assert_eq!(cpu.sp, 0);
    assert_eq!(cpu.push(0), Err(VmError::StackOverflow(0)));
}

#[test]
fn test_peak_depth_is_tracked() {
    let mut cpu = Cpu::default();
    cpu.push(1).unwrap();
    cpu.push(2).unwrap();
    let _ = cpu.pop().unwrap();
    cpu.push(3).unwrap();
    assert_eq!(cpu.stats.peak_stack_depth, 2);
    assert_eq!(cpu.stats.pushes, 3);
    assert_eq!(cpu.stats.pops, 1);
}

#[test]
fn test_stack_program_output() {
    let program = ls8_core::sim::loader::parse_program(include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../../programs/stack.ls8"
    )))
    .unwrap();
    let mut ctx = TestContext::new().load_program(&program);

    ctx.run().unwrap();

    assert_eq!(ctx.output(), vec!["2", "4", "1"]);
    assert_eq!(ctx.cpu().sp, 244);
}

#[test]
fn test_pop_instruction_on_empty_stack_reads_above_top() {
    let program = ProgramBuilder::new().pop(0).prn(0).hlt().build();
    let mut ctx = TestContext::new().load_program(&program);
    ctx.cpu_mut().ram.write(244, 42).unwrap();

    ctx.run().unwrap();

    assert_eq!(ctx.output(), vec!["42"]);
    assert_eq!(ctx.cpu().sp, 245);
}

#[test]
fn test_pop_instruction_at_last_address_faults() {
    let program = ProgramBuilder::new().pop(0).hlt().build();
    let mut ctx = TestContext::new().load_program(&program);
    ctx.cpu_mut().sp = 255;

    let fault = ctx.run().unwrap_err();

    assert_eq!(fault.pc, 0);
    assert_eq!(fault.error, VmError::StackUnderflow(255));
}

proptest! {
    #[test]
    fn push_pop_round_trip(src in 0u8..8, dst in 0u8..8, val in any::<u8>()) {
        let program = ProgramBuilder::new()
            .ldi(src, val)
            .push(src)
            .pop(dst)
            .hlt()
            .build();
        let mut ctx = TestContext::new().load_program(&program);

        ctx.run().unwrap();

        prop_assert_eq!(ctx.get_reg(dst as usize), val);
        prop_assert_eq!(ctx.cpu().sp, 244);
    }
}
