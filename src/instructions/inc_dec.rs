//! # Increment and Decrement Instructions
//!
//! Memory read-modify-write forms (INC/DEC) and the register forms
//! (INX/INY/DEX/DEY). All set N and Z from the new value.

use crate::addressing::Operand;
use crate::cpu::Cpu;

pub(crate) fn execute_inc(cpu: &mut Cpu<'_>, operand: Operand) -> u8 {
    let value = cpu.fetch_operand(operand).wrapping_add(1);
    cpu.write_operand(operand, value);
    cpu.flag_z = value == 0;
    cpu.flag_n = value & 0x80 != 0;
    0
}

pub(crate) fn execute_dec(cpu: &mut Cpu<'_>, operand: Operand) -> u8 {
    let value = cpu.fetch_operand(operand).wrapping_sub(1);
    cpu.write_operand(operand, value);
    cpu.flag_z = value == 0;
    cpu.flag_n = value & 0x80 != 0;
    0
}

pub(crate) fn execute_inx(cpu: &mut Cpu<'_>, _operand: Operand) -> u8 {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.flag_z = cpu.x == 0;
    cpu.flag_n = cpu.x & 0x80 != 0;
    0
}

pub(crate) fn execute_iny(cpu: &mut Cpu<'_>, _operand: Operand) -> u8 {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.flag_z = cpu.y == 0;
    cpu.flag_n = cpu.y & 0x80 != 0;
    0
}

pub(crate) fn execute_dex(cpu: &mut Cpu<'_>, _operand: Operand) -> u8 {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.flag_z = cpu.x == 0;
    cpu.flag_n = cpu.x & 0x80 != 0;
    0
}

pub(crate) fn execute_dey(cpu: &mut Cpu<'_>, _operand: Operand) -> u8 {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.flag_z = cpu.y == 0;
    cpu.flag_n = cpu.y & 0x80 != 0;
    0
}
