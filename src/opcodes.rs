//! # Opcode Table
//!
//! The complete 256-entry opcode table, the single source of truth for
//! instruction metadata: decoded mnemonic, addressing mode, encoded length,
//! base cycle cost, and whether a page-crossed operand adds one cycle.
//!
//! The 151 documented NMOS opcodes carry real metadata; the remaining rows
//! decode to [`Mnemonic::Ill`]. The assembler walks the same table in
//! reverse through [`find_opcode`] to encode `(mnemonic, mode)` pairs.

use crate::addressing::AddressingMode;
use crate::addressing::AddressingMode::*;

/// The 56 documented 6502 instruction mnemonics, plus [`Mnemonic::Ill`]
/// for every undocumented opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
    /// Placeholder for undocumented/illegal opcodes.
    Ill,
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
}

use Mnemonic::*;

impl Mnemonic {
    /// The canonical three-letter uppercase form.
    pub fn as_str(self) -> &'static str {
        match self {
            Ill => "ILL",
            Adc => "ADC",
            And => "AND",
            Asl => "ASL",
            Bcc => "BCC",
            Bcs => "BCS",
            Beq => "BEQ",
            Bit => "BIT",
            Bmi => "BMI",
            Bne => "BNE",
            Bpl => "BPL",
            Brk => "BRK",
            Bvc => "BVC",
            Bvs => "BVS",
            Clc => "CLC",
            Cld => "CLD",
            Cli => "CLI",
            Clv => "CLV",
            Cmp => "CMP",
            Cpx => "CPX",
            Cpy => "CPY",
            Dec => "DEC",
            Dex => "DEX",
            Dey => "DEY",
            Eor => "EOR",
            Inc => "INC",
            Inx => "INX",
            Iny => "INY",
            Jmp => "JMP",
            Jsr => "JSR",
            Lda => "LDA",
            Ldx => "LDX",
            Ldy => "LDY",
            Lsr => "LSR",
            Nop => "NOP",
            Ora => "ORA",
            Pha => "PHA",
            Php => "PHP",
            Pla => "PLA",
            Plp => "PLP",
            Rol => "ROL",
            Ror => "ROR",
            Rti => "RTI",
            Rts => "RTS",
            Sbc => "SBC",
            Sec => "SEC",
            Sed => "SED",
            Sei => "SEI",
            Sta => "STA",
            Stx => "STX",
            Sty => "STY",
            Tax => "TAX",
            Tay => "TAY",
            Tsx => "TSX",
            Txa => "TXA",
            Txs => "TXS",
            Tya => "TYA",
        }
    }

    /// Parses an uppercase three-letter mnemonic. `"ILL"` and anything
    /// unrecognized yield `None`.
    pub fn parse(s: &str) -> Option<Mnemonic> {
        let m = match s {
            "ADC" => Adc,
            "AND" => And,
            "ASL" => Asl,
            "BCC" => Bcc,
            "BCS" => Bcs,
            "BEQ" => Beq,
            "BIT" => Bit,
            "BMI" => Bmi,
            "BNE" => Bne,
            "BPL" => Bpl,
            "BRK" => Brk,
            "BVC" => Bvc,
            "BVS" => Bvs,
            "CLC" => Clc,
            "CLD" => Cld,
            "CLI" => Cli,
            "CLV" => Clv,
            "CMP" => Cmp,
            "CPX" => Cpx,
            "CPY" => Cpy,
            "DEC" => Dec,
            "DEX" => Dex,
            "DEY" => Dey,
            "EOR" => Eor,
            "INC" => Inc,
            "INX" => Inx,
            "INY" => Iny,
            "JMP" => Jmp,
            "JSR" => Jsr,
            "LDA" => Lda,
            "LDX" => Ldx,
            "LDY" => Ldy,
            "LSR" => Lsr,
            "NOP" => Nop,
            "ORA" => Ora,
            "PHA" => Pha,
            "PHP" => Php,
            "PLA" => Pla,
            "PLP" => Plp,
            "ROL" => Rol,
            "ROR" => Ror,
            "RTI" => Rti,
            "RTS" => Rts,
            "SBC" => Sbc,
            "SEC" => Sec,
            "SED" => Sed,
            "SEI" => Sei,
            "STA" => Sta,
            "STX" => Stx,
            "STY" => Sty,
            "TAX" => Tax,
            "TAY" => Tay,
            "TSX" => Tsx,
            "TXA" => Txa,
            "TXS" => Txs,
            "TYA" => Tya,
            _ => return None,
        };
        Some(m)
    }

    /// True for the eight conditional branch instructions.
    pub fn is_branch(self) -> bool {
        matches!(self, Bcc | Bcs | Beq | Bmi | Bne | Bpl | Bvc | Bvs)
    }
}

impl std::fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static metadata for one opcode byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeInfo {
    /// Decoded instruction mnemonic.
    pub mnemonic: Mnemonic,

    /// How the operand bytes are interpreted.
    pub mode: AddressingMode,

    /// Encoded instruction length in bytes, opcode included (1-3).
    pub size: u8,

    /// Base cycle cost, before page-crossing and branch penalties.
    pub cycles: u8,

    /// Whether a page-crossed operand fetch adds one cycle.
    pub page_penalty: bool,
}

const fn op(
    mnemonic: Mnemonic,
    mode: AddressingMode,
    size: u8,
    cycles: u8,
    page_penalty: bool,
) -> OpcodeInfo {
    OpcodeInfo {
        mnemonic,
        mode,
        size,
        cycles,
        page_penalty,
    }
}

/// Undocumented opcode row. Credited zero cycles when encountered.
const ILLEGAL: OpcodeInfo = op(Ill, Implied, 1, 0, false);

/// Complete opcode table indexed by opcode byte.
///
/// Values follow the standard NMOS 6502 reference table.
pub const OPCODE_TABLE: [OpcodeInfo; 256] = [
    /* 0x00 */ op(Brk, Implied, 1, 7, false),
    /* 0x01 */ op(Ora, IndirectX, 2, 6, false),
    /* 0x02 */ ILLEGAL,
    /* 0x03 */ ILLEGAL,
    /* 0x04 */ ILLEGAL,
    /* 0x05 */ op(Ora, ZeroPage, 2, 3, false),
    /* 0x06 */ op(Asl, ZeroPage, 2, 5, false),
    /* 0x07 */ ILLEGAL,
    /* 0x08 */ op(Php, Implied, 1, 3, false),
    /* 0x09 */ op(Ora, Immediate, 2, 2, false),
    /* 0x0A */ op(Asl, Accumulator, 1, 2, false),
    /* 0x0B */ ILLEGAL,
    /* 0x0C */ ILLEGAL,
    /* 0x0D */ op(Ora, Absolute, 3, 4, false),
    /* 0x0E */ op(Asl, Absolute, 3, 6, false),
    /* 0x0F */ ILLEGAL,
    /* 0x10 */ op(Bpl, Relative, 2, 2, true),
    /* 0x11 */ op(Ora, IndirectY, 2, 5, true),
    /* 0x12 */ ILLEGAL,
    /* 0x13 */ ILLEGAL,
    /* 0x14 */ ILLEGAL,
    /* 0x15 */ op(Ora, ZeroPageX, 2, 4, false),
    /* 0x16 */ op(Asl, ZeroPageX, 2, 6, false),
    /* 0x17 */ ILLEGAL,
    /* 0x18 */ op(Clc, Implied, 1, 2, false),
    /* 0x19 */ op(Ora, AbsoluteY, 3, 4, true),
    /* 0x1A */ ILLEGAL,
    /* 0x1B */ ILLEGAL,
    /* 0x1C */ ILLEGAL,
    /* 0x1D */ op(Ora, AbsoluteX, 3, 4, true),
    /* 0x1E */ op(Asl, AbsoluteX, 3, 7, false),
    /* 0x1F */ ILLEGAL,
    /* 0x20 */ op(Jsr, Absolute, 3, 6, false),
    /* 0x21 */ op(And, IndirectX, 2, 6, false),
    /* 0x22 */ ILLEGAL,
    /* 0x23 */ ILLEGAL,
    /* 0x24 */ op(Bit, ZeroPage, 2, 3, false),
    /* 0x25 */ op(And, ZeroPage, 2, 3, false),
    /* 0x26 */ op(Rol, ZeroPage, 2, 5, false),
    /* 0x27 */ ILLEGAL,
    /* 0x28 */ op(Plp, Implied, 1, 4, false),
    /* 0x29 */ op(And, Immediate, 2, 2, false),
    /* 0x2A */ op(Rol, Accumulator, 1, 2, false),
    /* 0x2B */ ILLEGAL,
    /* 0x2C */ op(Bit, Absolute, 3, 4, false),
    /* 0x2D */ op(And, Absolute, 3, 4, false),
    /* 0x2E */ op(Rol, Absolute, 3, 6, false),
    /* 0x2F */ ILLEGAL,
    /* 0x30 */ op(Bmi, Relative, 2, 2, true),
    /* 0x31 */ op(And, IndirectY, 2, 5, true),
    /* 0x32 */ ILLEGAL,
    /* 0x33 */ ILLEGAL,
    /* 0x34 */ ILLEGAL,
    /* 0x35 */ op(And, ZeroPageX, 2, 4, false),
    /* 0x36 */ op(Rol, ZeroPageX, 2, 6, false),
    /* 0x37 */ ILLEGAL,
    /* 0x38 */ op(Sec, Implied, 1, 2, false),
    /* 0x39 */ op(And, AbsoluteY, 3, 4, true),
    /* 0x3A */ ILLEGAL,
    /* 0x3B */ ILLEGAL,
    /* 0x3C */ ILLEGAL,
    /* 0x3D */ op(And, AbsoluteX, 3, 4, true),
    /* 0x3E */ op(Rol, AbsoluteX, 3, 7, false),
    /* 0x3F */ ILLEGAL,
    /* 0x40 */ op(Rti, Implied, 1, 6, false),
    /* 0x41 */ op(Eor, IndirectX, 2, 6, false),
    /* 0x42 */ ILLEGAL,
    /* 0x43 */ ILLEGAL,
    /* 0x44 */ ILLEGAL,
    /* 0x45 */ op(Eor, ZeroPage, 2, 3, false),
    /* 0x46 */ op(Lsr, ZeroPage, 2, 5, false),
    /* 0x47 */ ILLEGAL,
    /* 0x48 */ op(Pha, Implied, 1, 3, false),
    /* 0x49 */ op(Eor, Immediate, 2, 2, false),
    /* 0x4A */ op(Lsr, Accumulator, 1, 2, false),
    /* 0x4B */ ILLEGAL,
    /* 0x4C */ op(Jmp, Absolute, 3, 3, false),
    /* 0x4D */ op(Eor, Absolute, 3, 4, false),
    /* 0x4E */ op(Lsr, Absolute, 3, 6, false),
    /* 0x4F */ ILLEGAL,
    /* 0x50 */ op(Bvc, Relative, 2, 2, true),
    /* 0x51 */ op(Eor, IndirectY, 2, 5, true),
    /* 0x52 */ ILLEGAL,
    /* 0x53 */ ILLEGAL,
    /* 0x54 */ ILLEGAL,
    /* 0x55 */ op(Eor, ZeroPageX, 2, 4, false),
    /* 0x56 */ op(Lsr, ZeroPageX, 2, 6, false),
    /* 0x57 */ ILLEGAL,
    /* 0x58 */ op(Cli, Implied, 1, 2, false),
    /* 0x59 */ op(Eor, AbsoluteY, 3, 4, true),
    /* 0x5A */ ILLEGAL,
    /* 0x5B */ ILLEGAL,
    /* 0x5C */ ILLEGAL,
    /* 0x5D */ op(Eor, AbsoluteX, 3, 4, true),
    /* 0x5E */ op(Lsr, AbsoluteX, 3, 7, false),
    /* 0x5F */ ILLEGAL,
    /* 0x60 */ op(Rts, Implied, 1, 6, false),
    /* 0x61 */ op(Adc, IndirectX, 2, 6, false),
    /* 0x62 */ ILLEGAL,
    /* 0x63 */ ILLEGAL,
    /* 0x64 */ ILLEGAL,
    /* 0x65 */ op(Adc, ZeroPage, 2, 3, false),
    /* 0x66 */ op(Ror, ZeroPage, 2, 5, false),
    /* 0x67 */ ILLEGAL,
    /* 0x68 */ op(Pla, Implied, 1, 4, false),
    /* 0x69 */ op(Adc, Immediate, 2, 2, false),
    /* 0x6A */ op(Ror, Accumulator, 1, 2, false),
    /* 0x6B */ ILLEGAL,
    /* 0x6C */ op(Jmp, Indirect, 3, 5, false),
    /* 0x6D */ op(Adc, Absolute, 3, 4, false),
    /* 0x6E */ op(Ror, Absolute, 3, 6, false),
    /* 0x6F */ ILLEGAL,
    /* 0x70 */ op(Bvs, Relative, 2, 2, true),
    /* 0x71 */ op(Adc, IndirectY, 2, 5, true),
    /* 0x72 */ ILLEGAL,
    /* 0x73 */ ILLEGAL,
    /* 0x74 */ ILLEGAL,
    /* 0x75 */ op(Adc, ZeroPageX, 2, 4, false),
    /* 0x76 */ op(Ror, ZeroPageX, 2, 6, false),
    /* 0x77 */ ILLEGAL,
    /* 0x78 */ op(Sei, Implied, 1, 2, false),
    /* 0x79 */ op(Adc, AbsoluteY, 3, 4, true),
    /* 0x7A */ ILLEGAL,
    /* 0x7B */ ILLEGAL,
    /* 0x7C */ ILLEGAL,
    /* 0x7D */ op(Adc, AbsoluteX, 3, 4, true),
    /* 0x7E */ op(Ror, AbsoluteX, 3, 7, false),
    /* 0x7F */ ILLEGAL,
    /* 0x80 */ ILLEGAL,
    /* 0x81 */ op(Sta, IndirectX, 2, 6, false),
    /* 0x82 */ ILLEGAL,
    /* 0x83 */ ILLEGAL,
    /* 0x84 */ op(Sty, ZeroPage, 2, 3, false),
    /* 0x85 */ op(Sta, ZeroPage, 2, 3, false),
    /* 0x86 */ op(Stx, ZeroPage, 2, 3, false),
    /* 0x87 */ ILLEGAL,
    /* 0x88 */ op(Dey, Implied, 1, 2, false),
    /* 0x89 */ ILLEGAL,
    /* 0x8A */ op(Txa, Implied, 1, 2, false),
    /* 0x8B */ ILLEGAL,
    /* 0x8C */ op(Sty, Absolute, 3, 4, false),
    /* 0x8D */ op(Sta, Absolute, 3, 4, false),
    /* 0x8E */ op(Stx, Absolute, 3, 4, false),
    /* 0x8F */ ILLEGAL,
    /* 0x90 */ op(Bcc, Relative, 2, 2, true),
    /* 0x91 */ op(Sta, IndirectY, 2, 6, false),
    /* 0x92 */ ILLEGAL,
    /* 0x93 */ ILLEGAL,
    /* 0x94 */ op(Sty, ZeroPageX, 2, 4, false),
    /* 0x95 */ op(Sta, ZeroPageX, 2, 4, false),
    /* 0x96 */ op(Stx, ZeroPageY, 2, 4, false),
    /* 0x97 */ ILLEGAL,
    /* 0x98 */ op(Tya, Implied, 1, 2, false),
    /* 0x99 */ op(Sta, AbsoluteY, 3, 5, false),
    /* 0x9A */ op(Txs, Implied, 1, 2, false),
    /* 0x9B */ ILLEGAL,
    /* 0x9C */ ILLEGAL,
    /* 0x9D */ op(Sta, AbsoluteX, 3, 5, false),
    /* 0x9E */ ILLEGAL,
    /* 0x9F */ ILLEGAL,
    /* 0xA0 */ op(Ldy, Immediate, 2, 2, false),
    /* 0xA1 */ op(Lda, IndirectX, 2, 6, false),
    /* 0xA2 */ op(Ldx, Immediate, 2, 2, false),
    /* 0xA3 */ ILLEGAL,
    /* 0xA4 */ op(Ldy, ZeroPage, 2, 3, false),
    /* 0xA5 */ op(Lda, ZeroPage, 2, 3, false),
    /* 0xA6 */ op(Ldx, ZeroPage, 2, 3, false),
    /* 0xA7 */ ILLEGAL,
    /* 0xA8 */ op(Tay, Implied, 1, 2, false),
    /* 0xA9 */ op(Lda, Immediate, 2, 2, false),
    /* 0xAA */ op(Tax, Implied, 1, 2, false),
    /* 0xAB */ ILLEGAL,
    /* 0xAC */ op(Ldy, Absolute, 3, 4, false),
    /* 0xAD */ op(Lda, Absolute, 3, 4, false),
    /* 0xAE */ op(Ldx, Absolute, 3, 4, false),
    /* 0xAF */ ILLEGAL,
    /* 0xB0 */ op(Bcs, Relative, 2, 2, true),
    /* 0xB1 */ op(Lda, IndirectY, 2, 5, true),
    /* 0xB2 */ ILLEGAL,
    /* 0xB3 */ ILLEGAL,
    /* 0xB4 */ op(Ldy, ZeroPageX, 2, 4, false),
    /* 0xB5 */ op(Lda, ZeroPageX, 2, 4, false),
    /* 0xB6 */ op(Ldx, ZeroPageY, 2, 4, false),
    /* 0xB7 */ ILLEGAL,
    /* 0xB8 */ op(Clv, Implied, 1, 2, false),
    /* 0xB9 */ op(Lda, AbsoluteY, 3, 4, true),
    /* 0xBA */ op(Tsx, Implied, 1, 2, false),
    /* 0xBB */ ILLEGAL,
    /* 0xBC */ op(Ldy, AbsoluteX, 3, 4, true),
    /* 0xBD */ op(Lda, AbsoluteX, 3, 4, true),
    /* 0xBE */ op(Ldx, AbsoluteY, 3, 4, true),
    /* 0xBF */ ILLEGAL,
    /* 0xC0 */ op(Cpy, Immediate, 2, 2, false),
    /* 0xC1 */ op(Cmp, IndirectX, 2, 6, false),
    /* 0xC2 */ ILLEGAL,
    /* 0xC3 */ ILLEGAL,
    /* 0xC4 */ op(Cpy, ZeroPage, 2, 3, false),
    /* 0xC5 */ op(Cmp, ZeroPage, 2, 3, false),
    /* 0xC6 */ op(Dec, ZeroPage, 2, 5, false),
    /* 0xC7 */ ILLEGAL,
    /* 0xC8 */ op(Iny, Implied, 1, 2, false),
    /* 0xC9 */ op(Cmp, Immediate, 2, 2, false),
    /* 0xCA */ op(Dex, Implied, 1, 2, false),
    /* 0xCB */ ILLEGAL,
    /* 0xCC */ op(Cpy, Absolute, 3, 4, false),
    /* 0xCD */ op(Cmp, Absolute, 3, 4, false),
    /* 0xCE */ op(Dec, Absolute, 3, 6, false),
    /* 0xCF */ ILLEGAL,
    /* 0xD0 */ op(Bne, Relative, 2, 2, true),
    /* 0xD1 */ op(Cmp, IndirectY, 2, 5, true),
    /* 0xD2 */ ILLEGAL,
    /* 0xD3 */ ILLEGAL,
    /* 0xD4 */ ILLEGAL,
    /* 0xD5 */ op(Cmp, ZeroPageX, 2, 4, false),
    /* 0xD6 */ op(Dec, ZeroPageX, 2, 6, false),
    /* 0xD7 */ ILLEGAL,
    /* 0xD8 */ op(Cld, Implied, 1, 2, false),
    /* 0xD9 */ op(Cmp, AbsoluteY, 3, 4, true),
    /* 0xDA */ ILLEGAL,
    /* 0xDB */ ILLEGAL,
    /* 0xDC */ ILLEGAL,
    /* 0xDD */ op(Cmp, AbsoluteX, 3, 4, true),
    /* 0xDE */ op(Dec, AbsoluteX, 3, 7, false),
    /* 0xDF */ ILLEGAL,
    /* 0xE0 */ op(Cpx, Immediate, 2, 2, false),
    /* 0xE1 */ op(Sbc, IndirectX, 2, 6, false),
    /* 0xE2 */ ILLEGAL,
    /* 0xE3 */ ILLEGAL,
    /* 0xE4 */ op(Cpx, ZeroPage, 2, 3, false),
    /* 0xE5 */ op(Sbc, ZeroPage, 2, 3, false),
    /* 0xE6 */ op(Inc, ZeroPage, 2, 5, false),
    /* 0xE7 */ ILLEGAL,
    /* 0xE8 */ op(Inx, Implied, 1, 2, false),
    /* 0xE9 */ op(Sbc, Immediate, 2, 2, false),
    /* 0xEA */ op(Nop, Implied, 1, 2, false),
    /* 0xEB */ ILLEGAL,
    /* 0xEC */ op(Cpx, Absolute, 3, 4, false),
    /* 0xED */ op(Sbc, Absolute, 3, 4, false),
    /* 0xEE */ op(Inc, Absolute, 3, 6, false),
    /* 0xEF */ ILLEGAL,
    /* 0xF0 */ op(Beq, Relative, 2, 2, true),
    /* 0xF1 */ op(Sbc, IndirectY, 2, 5, true),
    /* 0xF2 */ ILLEGAL,
    /* 0xF3 */ ILLEGAL,
    /* 0xF4 */ ILLEGAL,
    /* 0xF5 */ op(Sbc, ZeroPageX, 2, 4, false),
    /* 0xF6 */ op(Inc, ZeroPageX, 2, 6, false),
    /* 0xF7 */ ILLEGAL,
    /* 0xF8 */ op(Sed, Implied, 1, 2, false),
    /* 0xF9 */ op(Sbc, AbsoluteY, 3, 4, true),
    /* 0xFA */ ILLEGAL,
    /* 0xFB */ ILLEGAL,
    /* 0xFC */ ILLEGAL,
    /* 0xFD */ op(Sbc, AbsoluteX, 3, 4, true),
    /* 0xFE */ op(Inc, AbsoluteX, 3, 7, false),
    /* 0xFF */ ILLEGAL,
];

/// Finds the opcode byte encoding `(mnemonic, mode)`, if the combination
/// exists on the 6502. This is the assembler's reverse lookup.
pub fn find_opcode(mnemonic: Mnemonic, mode: AddressingMode) -> Option<u8> {
    if mnemonic == Ill {
        return None;
    }
    OPCODE_TABLE
        .iter()
        .position(|info| info.mnemonic == mnemonic && info.mode == mode)
        .map(|index| index as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spot_check_documented_rows() {
        let lda_imm = &OPCODE_TABLE[0xA9];
        assert_eq!(lda_imm.mnemonic, Lda);
        assert_eq!(lda_imm.mode, Immediate);
        assert_eq!(lda_imm.size, 2);
        assert_eq!(lda_imm.cycles, 2);
        assert!(!lda_imm.page_penalty);

        let brk = &OPCODE_TABLE[0x00];
        assert_eq!(brk.mnemonic, Brk);
        assert_eq!(brk.cycles, 7);

        let jmp_ind = &OPCODE_TABLE[0x6C];
        assert_eq!(jmp_ind.mnemonic, Jmp);
        assert_eq!(jmp_ind.mode, Indirect);
        assert_eq!(jmp_ind.cycles, 5);
    }

    #[test]
    fn illegal_rows_decode_to_ill() {
        let ill = &OPCODE_TABLE[0x02];
        assert_eq!(ill.mnemonic, Ill);
        assert_eq!(ill.size, 1);
        assert_eq!(ill.cycles, 0);
        assert_eq!(OPCODE_TABLE[0xFF].mnemonic, Ill);
    }

    #[test]
    fn documented_opcode_count_matches_reference() {
        let documented = OPCODE_TABLE
            .iter()
            .filter(|info| info.mnemonic != Ill)
            .count();
        assert_eq!(documented, 151);
    }

    #[test]
    fn sizes_agree_with_addressing_modes() {
        for info in OPCODE_TABLE.iter().filter(|i| i.mnemonic != Ill) {
            let expected = match info.mode {
                Implied | Accumulator => 1,
                Immediate | ZeroPage | ZeroPageX | ZeroPageY | Relative | IndirectX
                | IndirectY => 2,
                Absolute | AbsoluteX | AbsoluteY | Indirect => 3,
            };
            assert_eq!(info.size, expected, "size mismatch for {}", info.mnemonic);
        }
    }

    #[test]
    fn every_relative_row_is_a_branch() {
        for info in OPCODE_TABLE.iter() {
            if info.mode == Relative {
                assert!(info.mnemonic.is_branch());
                assert!(info.page_penalty);
            }
        }
    }

    #[test]
    fn find_opcode_round_trips() {
        for (index, info) in OPCODE_TABLE.iter().enumerate() {
            if info.mnemonic == Ill {
                continue;
            }
            assert_eq!(
                find_opcode(info.mnemonic, info.mode),
                Some(index as u8),
                "reverse lookup failed for {} {:?}",
                info.mnemonic,
                info.mode
            );
        }
    }

    #[test]
    fn find_opcode_rejects_impossible_pairs() {
        assert_eq!(find_opcode(Lda, Accumulator), None);
        assert_eq!(find_opcode(Jmp, Immediate), None);
        assert_eq!(find_opcode(Ill, Implied), None);
    }

    #[test]
    fn mnemonic_parse_round_trips() {
        for info in OPCODE_TABLE.iter().filter(|i| i.mnemonic != Ill) {
            assert_eq!(Mnemonic::parse(info.mnemonic.as_str()), Some(info.mnemonic));
        }
        assert_eq!(Mnemonic::parse("ILL"), None);
        assert_eq!(Mnemonic::parse("XYZ"), None);
        assert_eq!(Mnemonic::parse("lda"), None);
    }
}
