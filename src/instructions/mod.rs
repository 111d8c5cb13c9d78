//! # Instruction Executors
//!
//! One executor per mnemonic, grouped by instruction family. Executors
//! receive the operand the addressing evaluator resolved and mutate the CPU
//! directly; they return only the *extra* cycles they incur beyond the
//! opcode table's base cost (branch penalties; everything else is already
//! priced into the table).

mod alu;
mod branches;
mod control;
mod flags;
mod inc_dec;
mod load_store;
mod shifts;
mod stack;
mod transfer;

use crate::addressing::Operand;
use crate::cpu::Cpu;
use crate::opcodes::Mnemonic;

/// Dispatches a decoded instruction to its executor.
pub(crate) fn execute(cpu: &mut Cpu<'_>, mnemonic: Mnemonic, operand: Operand) -> u8 {
    match mnemonic {
        // Illegal opcodes never reach the executor; Cpu::tick filters them.
        Mnemonic::Ill => unreachable!("illegal opcode dispatched"),

        Mnemonic::Adc => alu::execute_adc(cpu, operand),
        Mnemonic::And => alu::execute_and(cpu, operand),
        Mnemonic::Asl => shifts::execute_asl(cpu, operand),
        Mnemonic::Bcc => branches::execute_bcc(cpu, operand),
        Mnemonic::Bcs => branches::execute_bcs(cpu, operand),
        Mnemonic::Beq => branches::execute_beq(cpu, operand),
        Mnemonic::Bit => alu::execute_bit(cpu, operand),
        Mnemonic::Bmi => branches::execute_bmi(cpu, operand),
        Mnemonic::Bne => branches::execute_bne(cpu, operand),
        Mnemonic::Bpl => branches::execute_bpl(cpu, operand),
        Mnemonic::Brk => control::execute_brk(cpu, operand),
        Mnemonic::Bvc => branches::execute_bvc(cpu, operand),
        Mnemonic::Bvs => branches::execute_bvs(cpu, operand),
        Mnemonic::Clc => flags::execute_clc(cpu, operand),
        Mnemonic::Cld => flags::execute_cld(cpu, operand),
        Mnemonic::Cli => flags::execute_cli(cpu, operand),
        Mnemonic::Clv => flags::execute_clv(cpu, operand),
        Mnemonic::Cmp => alu::execute_cmp(cpu, operand),
        Mnemonic::Cpx => alu::execute_cpx(cpu, operand),
        Mnemonic::Cpy => alu::execute_cpy(cpu, operand),
        Mnemonic::Dec => inc_dec::execute_dec(cpu, operand),
        Mnemonic::Dex => inc_dec::execute_dex(cpu, operand),
        Mnemonic::Dey => inc_dec::execute_dey(cpu, operand),
        Mnemonic::Eor => alu::execute_eor(cpu, operand),
        Mnemonic::Inc => inc_dec::execute_inc(cpu, operand),
        Mnemonic::Inx => inc_dec::execute_inx(cpu, operand),
        Mnemonic::Iny => inc_dec::execute_iny(cpu, operand),
        Mnemonic::Jmp => control::execute_jmp(cpu, operand),
        Mnemonic::Jsr => control::execute_jsr(cpu, operand),
        Mnemonic::Lda => load_store::execute_lda(cpu, operand),
        Mnemonic::Ldx => load_store::execute_ldx(cpu, operand),
        Mnemonic::Ldy => load_store::execute_ldy(cpu, operand),
        Mnemonic::Lsr => shifts::execute_lsr(cpu, operand),
        Mnemonic::Nop => control::execute_nop(cpu, operand),
        Mnemonic::Ora => alu::execute_ora(cpu, operand),
        Mnemonic::Pha => stack::execute_pha(cpu, operand),
        Mnemonic::Php => stack::execute_php(cpu, operand),
        Mnemonic::Pla => stack::execute_pla(cpu, operand),
        Mnemonic::Plp => stack::execute_plp(cpu, operand),
        Mnemonic::Rol => shifts::execute_rol(cpu, operand),
        Mnemonic::Ror => shifts::execute_ror(cpu, operand),
        Mnemonic::Rti => control::execute_rti(cpu, operand),
        Mnemonic::Rts => control::execute_rts(cpu, operand),
        Mnemonic::Sbc => alu::execute_sbc(cpu, operand),
        Mnemonic::Sec => flags::execute_sec(cpu, operand),
        Mnemonic::Sed => flags::execute_sed(cpu, operand),
        Mnemonic::Sei => flags::execute_sei(cpu, operand),
        Mnemonic::Sta => load_store::execute_sta(cpu, operand),
        Mnemonic::Stx => load_store::execute_stx(cpu, operand),
        Mnemonic::Sty => load_store::execute_sty(cpu, operand),
        Mnemonic::Tax => transfer::execute_tax(cpu, operand),
        Mnemonic::Tay => transfer::execute_tay(cpu, operand),
        Mnemonic::Tsx => transfer::execute_tsx(cpu, operand),
        Mnemonic::Txa => transfer::execute_txa(cpu, operand),
        Mnemonic::Txs => transfer::execute_txs(cpu, operand),
        Mnemonic::Tya => transfer::execute_tya(cpu, operand),
    }
}
