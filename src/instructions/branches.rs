//! # Branch Instructions
//!
//! The eight conditional branches. All use Relative addressing: the
//! evaluator hands over the sign-extended displacement, and the branch
//! itself prices the jump: one extra cycle when taken, two when the new PC
//! lands on a different page than the old one. A branch not taken costs
//! nothing beyond the base two cycles.

use crate::addressing::Operand;
use crate::cpu::Cpu;

/// Applies a taken branch and returns its extra cycle cost.
fn branch(cpu: &mut Cpu<'_>, operand: Operand) -> u8 {
    let displacement = match operand {
        Operand::Address(displacement) => displacement,
        _ => unreachable!("branch without a relative operand"),
    };

    let target = cpu.pc.wrapping_add(displacement);
    let extra = if target & 0xFF00 != cpu.pc & 0xFF00 {
        2
    } else {
        1
    };
    cpu.pc = target;

    extra
}

/// Branch if carry clear.
pub(crate) fn execute_bcc(cpu: &mut Cpu<'_>, operand: Operand) -> u8 {
    if !cpu.flag_c {
        return branch(cpu, operand);
    }
    0
}

/// Branch if carry set.
pub(crate) fn execute_bcs(cpu: &mut Cpu<'_>, operand: Operand) -> u8 {
    if cpu.flag_c {
        return branch(cpu, operand);
    }
    0
}

/// Branch if zero set.
pub(crate) fn execute_beq(cpu: &mut Cpu<'_>, operand: Operand) -> u8 {
    if cpu.flag_z {
        return branch(cpu, operand);
    }
    0
}

/// Branch if negative set.
pub(crate) fn execute_bmi(cpu: &mut Cpu<'_>, operand: Operand) -> u8 {
    if cpu.flag_n {
        return branch(cpu, operand);
    }
    0
}

/// Branch if zero clear.
pub(crate) fn execute_bne(cpu: &mut Cpu<'_>, operand: Operand) -> u8 {
    if !cpu.flag_z {
        return branch(cpu, operand);
    }
    0
}

/// Branch if negative clear.
pub(crate) fn execute_bpl(cpu: &mut Cpu<'_>, operand: Operand) -> u8 {
    if !cpu.flag_n {
        return branch(cpu, operand);
    }
    0
}

/// Branch if overflow clear.
pub(crate) fn execute_bvc(cpu: &mut Cpu<'_>, operand: Operand) -> u8 {
    if !cpu.flag_v {
        return branch(cpu, operand);
    }
    0
}

/// Branch if overflow set.
pub(crate) fn execute_bvs(cpu: &mut Cpu<'_>, operand: Operand) -> u8 {
    if cpu.flag_v {
        return branch(cpu, operand);
    }
    0
}
