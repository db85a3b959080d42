//! # Opcode Encoding Tests

use ls8_core::isa::opcodes::*;
use rstest::rstest;

#[rstest]
#[case(HLT, 1)]
#[case(RET, 1)]
#[case(PRN, 2)]
#[case(PUSH, 2)]
#[case(POP, 2)]
#[case(CALL, 2)]
#[case(LDI, 3)]
#[case(MUL, 3)]
fn instruction_len_follows_operand_bits(#[case] opcode: u8, #[case] len: u8) {
    assert_eq!(instruction_len(opcode), len);
    assert_eq!(operand_count(opcode), len - 1);
}

#[test]
fn opcode_values_match_encoding_table() {
    assert_eq!(HLT, 0b0000_0001);
    assert_eq!(LDI, 0b1000_0010);
    assert_eq!(PRN, 0b0100_0111);
    assert_eq!(MUL, 0b1010_0010);
    assert_eq!(POP, 0b0100_0110);
    assert_eq!(PUSH, 0b0100_0101);
    assert_eq!(CALL, 0b0101_0000);
    assert_eq!(RET, 0b0001_0001);
}

#[test]
fn mnemonic_for_defined_and_undefined() {
    assert_eq!(mnemonic(MUL), Some("MUL"));
    assert_eq!(mnemonic(0), None);
    assert_eq!(mnemonic(0b1010_0000), None);
}
