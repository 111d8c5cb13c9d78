//! # Load and Store Instructions
//!
//! Loads set N and Z from the loaded value; stores touch no flags.

use crate::addressing::Operand;
use crate::cpu::Cpu;

pub(crate) fn execute_lda(cpu: &mut Cpu<'_>, operand: Operand) -> u8 {
    cpu.a = cpu.fetch_operand(operand);
    cpu.flag_z = cpu.a == 0;
    cpu.flag_n = cpu.a & 0x80 != 0;
    0
}

pub(crate) fn execute_ldx(cpu: &mut Cpu<'_>, operand: Operand) -> u8 {
    cpu.x = cpu.fetch_operand(operand);
    cpu.flag_z = cpu.x == 0;
    cpu.flag_n = cpu.x & 0x80 != 0;
    0
}

pub(crate) fn execute_ldy(cpu: &mut Cpu<'_>, operand: Operand) -> u8 {
    cpu.y = cpu.fetch_operand(operand);
    cpu.flag_z = cpu.y == 0;
    cpu.flag_n = cpu.y & 0x80 != 0;
    0
}

pub(crate) fn execute_sta(cpu: &mut Cpu<'_>, operand: Operand) -> u8 {
    let a = cpu.a;
    cpu.write_operand(operand, a);
    0
}

pub(crate) fn execute_stx(cpu: &mut Cpu<'_>, operand: Operand) -> u8 {
    let x = cpu.x;
    cpu.write_operand(operand, x);
    0
}

pub(crate) fn execute_sty(cpu: &mut Cpu<'_>, operand: Operand) -> u8 {
    let y = cpu.y;
    cpu.write_operand(operand, y);
    0
}
