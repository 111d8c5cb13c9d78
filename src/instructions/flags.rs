//! # Flag Instructions
//!
//! Set or clear a single processor status flag. There is no SEV; overflow
//! can only be cleared.

use crate::addressing::Operand;
use crate::cpu::Cpu;

pub(crate) fn execute_clc(cpu: &mut Cpu<'_>, _operand: Operand) -> u8 {
    cpu.flag_c = false;
    0
}

pub(crate) fn execute_sec(cpu: &mut Cpu<'_>, _operand: Operand) -> u8 {
    cpu.flag_c = true;
    0
}

pub(crate) fn execute_cld(cpu: &mut Cpu<'_>, _operand: Operand) -> u8 {
    cpu.flag_d = false;
    0
}

pub(crate) fn execute_sed(cpu: &mut Cpu<'_>, _operand: Operand) -> u8 {
    cpu.flag_d = true;
    0
}

pub(crate) fn execute_cli(cpu: &mut Cpu<'_>, _operand: Operand) -> u8 {
    cpu.flag_i = false;
    0
}

pub(crate) fn execute_sei(cpu: &mut Cpu<'_>, _operand: Operand) -> u8 {
    cpu.flag_i = true;
    0
}

pub(crate) fn execute_clv(cpu: &mut Cpu<'_>, _operand: Operand) -> u8 {
    cpu.flag_v = false;
    0
}
