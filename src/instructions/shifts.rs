//! # Shift and Rotate Instructions
//!
//! ASL, LSR, ROL, ROR. Each reads its target (accumulator or memory), sets
//! the carry from the bit shifted out, and writes the new byte back to where
//! it came from. The extra cycle of the memory read-modify-write forms is
//! already part of the opcode table's base cost.

use crate::addressing::Operand;
use crate::cpu::Cpu;

/// Arithmetic shift left: C takes bit 7, bit 0 becomes 0.
pub(crate) fn execute_asl(cpu: &mut Cpu<'_>, operand: Operand) -> u8 {
    let value = cpu.fetch_operand(operand);
    let result = value << 1;

    cpu.flag_c = value & 0x80 != 0;
    cpu.flag_z = result == 0;
    cpu.flag_n = result & 0x80 != 0;

    cpu.write_operand(operand, result);
    0
}

/// Logical shift right: C takes bit 0, bit 7 becomes 0.
pub(crate) fn execute_lsr(cpu: &mut Cpu<'_>, operand: Operand) -> u8 {
    let value = cpu.fetch_operand(operand);
    let result = value >> 1;

    cpu.flag_c = value & 0x01 != 0;
    cpu.flag_z = result == 0;
    cpu.flag_n = result & 0x80 != 0;

    cpu.write_operand(operand, result);
    0
}

/// Rotate left: the old carry enters bit 0, C takes bit 7.
pub(crate) fn execute_rol(cpu: &mut Cpu<'_>, operand: Operand) -> u8 {
    let value = cpu.fetch_operand(operand);
    let result = (value << 1) | cpu.flag_c as u8;

    cpu.flag_c = value & 0x80 != 0;
    cpu.flag_z = result == 0;
    cpu.flag_n = result & 0x80 != 0;

    cpu.write_operand(operand, result);
    0
}

/// Rotate right: the old carry enters bit 7, C takes bit 0.
pub(crate) fn execute_ror(cpu: &mut Cpu<'_>, operand: Operand) -> u8 {
    let value = cpu.fetch_operand(operand);
    let result = (value >> 1) | ((cpu.flag_c as u8) << 7);

    cpu.flag_c = value & 0x01 != 0;
    cpu.flag_z = result == 0;
    cpu.flag_n = result & 0x80 != 0;

    cpu.write_operand(operand, result);
    0
}
