//! # Stack Instructions
//!
//! Push/pull of the accumulator and the processor status. All accesses go
//! through the stack page at `0x0100 | SP`.

use crate::addressing::Operand;
use crate::cpu::Cpu;

pub(crate) fn execute_pha(cpu: &mut Cpu<'_>, _operand: Operand) -> u8 {
    let a = cpu.a;
    cpu.push(a);
    0
}

pub(crate) fn execute_php(cpu: &mut Cpu<'_>, _operand: Operand) -> u8 {
    let status = cpu.status();
    cpu.push(status);
    0
}

pub(crate) fn execute_pla(cpu: &mut Cpu<'_>, _operand: Operand) -> u8 {
    cpu.a = cpu.pull();
    cpu.flag_z = cpu.a == 0;
    cpu.flag_n = cpu.a & 0x80 != 0;
    0
}

/// Pull the processor status. U is forced to 1 (it is never stored clear).
pub(crate) fn execute_plp(cpu: &mut Cpu<'_>, _operand: Operand) -> u8 {
    let status = cpu.pull();
    cpu.set_status(status);
    0
}
