//! # 6502 Assembler
//!
//! A single-pass, forward-only assembler for a small line-oriented dialect.
//!
//! Source is interpreted byte-wise as ASCII and folded to upper case outside
//! of comments. Symbols (labels and `NAME = expr` constants) are defined as
//! they are encountered and substituted into subsequent operand text by
//! literal replacement before parsing; forward references are therefore not
//! supported. The special name `*` is the location counter and can be
//! assigned with `* = $NNNN`.
//!
//! Compilation is best-effort: a line that fails to parse is reported
//! through the `log` facade with its 1-based line number and dropped from
//! the output; assembly continues with the next line.
//!
//! # Examples
//!
//! ```
//! use mos6502::assembler::compile_str;
//!
//! let program = compile_str("* = $0200\nSTART LDA #$42\n    BRK", "demo");
//! assert_eq!(program.starting_pc_offset(), 0x0200);
//! assert_eq!(program.byte_code(), &[0xA9, 0x42, 0x00]);
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::warn;

use crate::addressing::AddressingMode;
use crate::opcodes::{self, Mnemonic};

/// Location counter value used when a program never assigns `*`.
pub const DEFAULT_PC_OFFSET: u16 = 0x0200;

/// One assembled instruction in the program listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 1-based source line number.
    pub line_number: usize,

    /// Location counter at the start of this instruction.
    pub pc_offset: u16,

    /// Encoded opcode byte.
    pub opcode: u8,

    /// Decoded mnemonic.
    pub mnemonic: Mnemonic,

    /// Chosen addressing mode.
    pub mode: AddressingMode,

    /// Resolved 16-bit operand value (0 for Implied/Accumulator).
    pub value: u16,
}

/// A compiled program: byte code plus the structured listing it came from.
#[derive(Debug, Clone, Default)]
pub struct Program {
    name: String,
    path: Option<PathBuf>,
    starting_pc_offset: u16,
    listing: Vec<Line>,
    byte_code: Vec<u8>,
}

impl Program {
    /// Program name (the file stem for file compilations).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Source path, when compiled from a file.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Location counter of the first emitted instruction. The byte code
    /// must be loaded at this offset and the reset vector pointed at it.
    pub fn starting_pc_offset(&self) -> u16 {
        self.starting_pc_offset
    }

    /// Per-instruction listing, in emission order.
    pub fn listing(&self) -> &[Line] {
        &self.listing
    }

    /// The emitted byte stream.
    pub fn byte_code(&self) -> &[u8] {
        &self.byte_code
    }
}

/// Why a source file could not be compiled.
#[derive(Debug)]
pub enum CompileError {
    /// The file does not exist.
    Missing { path: PathBuf },

    /// The file exists but holds no bytes.
    Empty { path: PathBuf },

    /// The file could not be read.
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileError::Missing { path } => {
                write!(f, "source file \"{}\" does not exist", path.display())
            }
            CompileError::Empty { path } => {
                write!(f, "source file \"{}\" is empty", path.display())
            }
            CompileError::Unreadable { path, source } => {
                write!(f, "failed to read \"{}\": {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for CompileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CompileError::Unreadable { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Compiles an assembly source file.
///
/// This is the only fallible entry point: a missing, unreadable, or empty
/// file yields a [`CompileError`] naming the path and cause. Parse problems
/// inside the file do not fail the compilation; they are logged and the
/// affected lines are dropped.
pub fn compile_file(path: impl AsRef<Path>) -> Result<Program, CompileError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(CompileError::Missing {
            path: path.to_owned(),
        });
    }

    let source = std::fs::read(path).map_err(|source| CompileError::Unreadable {
        path: path.to_owned(),
        source,
    })?;

    if source.is_empty() {
        return Err(CompileError::Empty {
            path: path.to_owned(),
        });
    }

    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut program = compile_bytes(&source, &name);
    program.path = Some(path.to_owned());
    Ok(program)
}

/// Compiles assembly source text. Never fails; see the module docs for the
/// best-effort error model.
pub fn compile_str(source: &str, name: &str) -> Program {
    compile_bytes(source.as_bytes(), name)
}

fn compile_bytes(source: &[u8], name: &str) -> Program {
    let mut assembler = Assembler::new();
    assembler.compile(source);

    Program {
        name: name.to_string(),
        path: None,
        starting_pc_offset: assembler.starting_pc_offset,
        listing: assembler.listing,
        byte_code: assembler.byte_code,
    }
}

/// What the character walk is currently accumulating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Idle,
    Comment,
    Symbol,
    Assignment,
    Instruction,
}

struct Assembler {
    line_number: usize,
    pc_offset: u16,
    starting_pc_offset: u16,
    starting_pc_set: bool,
    symbols: BTreeMap<String, u16>,
    listing: Vec<Line>,
    byte_code: Vec<u8>,
}

impl Assembler {
    fn new() -> Self {
        Self {
            line_number: 1,
            pc_offset: DEFAULT_PC_OFFSET,
            starting_pc_offset: DEFAULT_PC_OFFSET,
            starting_pc_set: false,
            symbols: BTreeMap::new(),
            listing: Vec::new(),
            byte_code: Vec::new(),
        }
    }

    /// Walks the source a character at a time, normalizing as it goes.
    fn compile(&mut self, source: &[u8]) {
        let mut state = ScanState::Idle;
        let mut buffer = String::new();
        let mut pending_symbol = String::new();
        let mut instruction: Option<Mnemonic> = None;

        for &raw in source {
            let c = raw as char;

            // Carriage returns never mean anything.
            if c == '\r' {
                continue;
            }

            if c == '\n' {
                if state != ScanState::Comment {
                    self.complete_line(state, &buffer, &mut pending_symbol, instruction);
                }

                self.line_number += 1;
                state = ScanState::Idle;
                buffer.clear();
                pending_symbol.clear();
                instruction = None;
                continue;
            }

            match state {
                ScanState::Comment => {}
                _ if c == ';' => {
                    self.complete_line(state, &buffer, &mut pending_symbol, instruction);
                    state = ScanState::Comment;
                    buffer.clear();
                }
                ScanState::Assignment | ScanState::Instruction => {
                    buffer.push(c.to_ascii_uppercase());
                }
                _ if c == ' ' || c == '\t' => {
                    if !buffer.is_empty() {
                        state = self.handle_token(&buffer, &mut pending_symbol, &mut instruction);
                    }
                    buffer.clear();
                }
                _ if c == '=' => {
                    if !buffer.is_empty() {
                        pending_symbol = std::mem::take(&mut buffer);
                    }
                    state = ScanState::Assignment;
                }
                _ if c == ':' => {
                    // Explicit label.
                    self.define_symbol(&buffer, self.pc_offset);
                    state = ScanState::Idle;
                    buffer.clear();
                }
                _ => buffer.push(c.to_ascii_uppercase()),
            }
        }

        if !buffer.is_empty() || !pending_symbol.is_empty() || instruction.is_some() {
            self.complete_line(state, &buffer, &mut pending_symbol, instruction);
        }
    }

    /// Classifies a whitespace-delimited token. A token that is not an
    /// instruction mnemonic becomes a pending symbol; any symbol already
    /// pending turns into a label at the current location counter.
    fn handle_token(
        &mut self,
        token: &str,
        pending_symbol: &mut String,
        instruction: &mut Option<Mnemonic>,
    ) -> ScanState {
        if !pending_symbol.is_empty() {
            let name = std::mem::take(pending_symbol);
            self.define_symbol(&name, self.pc_offset);
        }

        match Mnemonic::parse(token) {
            Some(mnemonic) => {
                *instruction = Some(mnemonic);
                ScanState::Instruction
            }
            None => {
                *pending_symbol = token.to_string();
                ScanState::Symbol
            }
        }
    }

    /// Finishes whatever the line was building when a newline, comment, or
    /// end of input arrives.
    fn complete_line(
        &mut self,
        state: ScanState,
        buffer: &str,
        pending_symbol: &mut String,
        instruction: Option<Mnemonic>,
    ) {
        match state {
            ScanState::Assignment => {
                let value_text = buffer.trim().to_string();
                if pending_symbol == "*" {
                    self.pc_offset = self.parse_value(&value_text);
                } else {
                    let value = self.parse_value(&value_text);
                    let name = pending_symbol.clone();
                    self.define_symbol(&name, value);
                }
                pending_symbol.clear();
            }

            ScanState::Instruction => {
                if let Some(mnemonic) = instruction {
                    let operand = self.substitute_symbols(buffer);
                    self.assemble_instruction(mnemonic, operand.trim());
                }
            }

            ScanState::Symbol => {
                // A name on its own line is a label.
                let name = std::mem::take(pending_symbol);
                self.define_symbol(&name, self.pc_offset);
            }

            ScanState::Idle | ScanState::Comment => {
                if buffer.is_empty() {
                    return;
                }
                // The line ended right after a single token.
                let mut instruction = None;
                let state = self.handle_token(buffer, pending_symbol, &mut instruction);
                match state {
                    ScanState::Instruction => {
                        if let Some(mnemonic) = instruction {
                            self.assemble_instruction(mnemonic, "");
                        }
                    }
                    ScanState::Symbol => {
                        let name = std::mem::take(pending_symbol);
                        self.define_symbol(&name, self.pc_offset);
                    }
                    _ => {}
                }
            }
        }
    }

    /// First definition wins; later definitions of the same name are kept
    /// out of the table.
    fn define_symbol(&mut self, name: &str, value: u16) {
        if name.is_empty() {
            return;
        }
        self.symbols.entry(name.to_string()).or_insert(value);
    }

    /// Replaces every defined symbol name in `text` with its decimal value,
    /// in sorted name order.
    fn substitute_symbols(&self, text: &str) -> String {
        let mut result = text.to_string();
        for (name, value) in &self.symbols {
            result = result.replace(name.as_str(), &value.to_string());
        }
        result
    }

    /// Parses a numeric literal: `$HH` hex, `%BB` binary, `*` for the
    /// location counter, otherwise decimal (signed forms wrap to 16 bits).
    /// Malformed literals, including unresolved symbols, are reported and
    /// read as 0.
    fn parse_value(&self, text: &str) -> u16 {
        let substituted = self.substitute_symbols(text);
        let t = substituted.trim();

        let parsed: Option<i64> = if let Some(hex) = t.strip_prefix('$') {
            i64::from_str_radix(hex, 16).ok()
        } else if let Some(bin) = t.strip_prefix('%') {
            i64::from_str_radix(bin, 2).ok()
        } else if t == "*" {
            Some(self.pc_offset as i64)
        } else {
            t.parse::<i64>().ok()
        };

        match parsed {
            Some(value) => value as u16,
            None => {
                warn!("failed to parse value \"{}\" on line {}", t, self.line_number);
                0
            }
        }
    }

    /// Parses an operand, picks the narrowest addressing mode that fits,
    /// and emits the instruction.
    fn assemble_instruction(&mut self, mnemonic: Mnemonic, operand: &str) {
        use AddressingMode::*;

        let instr_pc = self.pc_offset;

        // The opcode byte itself.
        self.pc_offset = self.pc_offset.wrapping_add(1);

        let operand = self.substitute_symbols(operand.trim());
        let operand = operand.trim();

        let mut mode: Option<AddressingMode>;
        let mut value: u16 = 0;

        if operand.is_empty() {
            mode = Some(Implied);
        } else if operand == "A" {
            mode = Some(Accumulator);
        } else if let Some(rest) = operand.strip_prefix('#') {
            mode = Some(Immediate);
            value = self.parse_value(rest);

            self.pc_offset = self.pc_offset.wrapping_add(1);
            if value >> 8 != 0 {
                self.pc_offset = self.pc_offset.wrapping_add(1);
            }
        } else if (operand.starts_with('*') && operand.len() > 1)
            || operand.starts_with('+')
            || operand.starts_with('-')
        {
            // Explicit relative displacement. A bare `*` is not a
            // displacement; it falls through as an address expression.
            mode = Some(Relative);
            let text = if let Some(rest) = operand.strip_prefix('*') {
                rest
            } else {
                operand
            };
            value = self.parse_value(text) & 0x00FF;
            self.pc_offset = self.pc_offset.wrapping_add(1);
        } else if let Some(inner) = operand.strip_prefix('(') {
            let comma = inner.find(',');
            let paren = inner.find(')');

            match (comma, paren) {
                (_, None) => {
                    warn!("invalid indirect address on line {}", self.line_number);
                    mode = None;
                }
                (Some(comma), Some(paren)) if comma < paren => {
                    // Comma inside the parentheses: ($xx,X)
                    mode = Some(IndirectX);
                    value = self.parse_value(&inner[..comma]);
                    self.pc_offset = self.pc_offset.wrapping_add(1);
                }
                (Some(_), Some(paren)) => {
                    // Comma after the parentheses: ($xx),Y
                    mode = Some(IndirectY);
                    value = self.parse_value(&inner[..paren]);
                    self.pc_offset = self.pc_offset.wrapping_add(1);
                }
                (None, Some(paren)) => {
                    mode = Some(Indirect);
                    value = self.parse_value(&inner[..paren]);
                    self.pc_offset = self.pc_offset.wrapping_add(2);
                }
            }
        } else if let Some((base, _index)) = operand.split_once(',') {
            value = self.parse_value(base);
            let uses_x = operand.ends_with('X');
            if value >> 8 != 0 {
                mode = Some(if uses_x { AbsoluteX } else { AbsoluteY });
                self.pc_offset = self.pc_offset.wrapping_add(2);
            } else {
                mode = Some(if uses_x { ZeroPageX } else { ZeroPageY });
                self.pc_offset = self.pc_offset.wrapping_add(1);
            }
        } else {
            value = self.parse_value(operand);
            if value >> 8 != 0 {
                mode = Some(Absolute);
                self.pc_offset = self.pc_offset.wrapping_add(2);
            } else {
                mode = Some(ZeroPage);
                self.pc_offset = self.pc_offset.wrapping_add(1);
            }
        }

        // Branch targets given as addresses become relative displacements
        // when they fit the signed window around the branch site.
        if mnemonic.is_branch() && matches!(mode, Some(ZeroPage) | Some(Absolute)) {
            let diff = value as i32 - instr_pc as i32;
            if (-126..=129).contains(&diff) {
                if mode == Some(Absolute) {
                    // Narrowing a three-byte form to two bytes.
                    self.pc_offset = self.pc_offset.wrapping_sub(1);
                }
                mode = Some(Relative);
                // Discount this instruction's own two bytes.
                value = ((diff - 2) as i8 as u8) as u16;
            }
        }

        let Some(mode) = mode else {
            return;
        };

        let Some(opcode) = opcodes::find_opcode(mnemonic, mode) else {
            warn!(
                "no opcode encodes {} with {:?} addressing on line {}",
                mnemonic, mode, self.line_number
            );
            return;
        };

        if !self.starting_pc_set {
            self.starting_pc_offset = instr_pc;
            self.starting_pc_set = true;
        }

        self.listing.push(Line {
            line_number: self.line_number,
            pc_offset: instr_pc,
            opcode,
            mnemonic,
            mode,
            value,
        });

        self.byte_code.push(opcode);
        if mode != Implied && mode != Accumulator {
            self.byte_code.push((value & 0xFF) as u8);
            if value >> 8 != 0 {
                self.byte_code.push((value >> 8) as u8);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn implied_and_immediate_forms() {
        let program = compile_str("LDA #$42\nBRK", "t");
        assert_eq!(program.byte_code(), &[0xA9, 0x42, 0x00]);
        assert_eq!(program.starting_pc_offset(), DEFAULT_PC_OFFSET);
    }

    #[test]
    fn location_counter_assignment_sets_start() {
        let program = compile_str("* = $0300\nNOP", "t");
        assert_eq!(program.starting_pc_offset(), 0x0300);
        assert_eq!(program.byte_code(), &[0xEA]);
    }

    #[test]
    fn constants_substitute_into_operands() {
        let program = compile_str("VALUE = $42\nLDA #VALUE", "t");
        assert_eq!(program.byte_code(), &[0xA9, 0x42]);
    }

    #[test]
    fn zero_page_narrowing() {
        let program = compile_str("LDA $42\nLDA $0242", "t");
        assert_eq!(program.byte_code(), &[0xA5, 0x42, 0xAD, 0x42, 0x02]);
    }

    #[test]
    fn indexed_and_indirect_forms() {
        let program = compile_str(
            "LDA $42,X\nLDA $0242,Y\nLDA ($42,X)\nLDA ($42),Y\nJMP ($0242)",
            "t",
        );
        assert_eq!(
            program.byte_code(),
            &[0xB5, 0x42, 0xB9, 0x42, 0x02, 0xA1, 0x42, 0xB1, 0x42, 0x6C, 0x42, 0x02]
        );
    }

    #[test]
    fn backward_label_branch_becomes_relative() {
        let program = compile_str("* = $0200\nLOOP:\n    INX\n    BNE LOOP", "t");
        // INX at $0200, BNE at $0201; displacement $0200 - $0201 - 2 = -3.
        assert_eq!(program.byte_code(), &[0xE8, 0xD0, 0xFD]);
    }

    #[test]
    fn explicit_relative_displacements() {
        let program = compile_str("BNE *+4\nBEQ -2", "t");
        assert_eq!(program.byte_code(), &[0xD0, 0x04, 0xF0, 0xFE]);
    }

    #[test]
    fn comments_and_case_are_normalized() {
        let program = compile_str("  lda #$01 ; load the thing\n; whole line\nbrk", "t");
        assert_eq!(program.byte_code(), &[0xA9, 0x01, 0x00]);
    }

    #[test]
    fn bad_lines_are_dropped_not_fatal() {
        let program = compile_str("LDA (zzz\nNOP", "t");
        assert_eq!(program.byte_code(), &[0xEA]);
        assert_eq!(program.listing().len(), 1);
        assert_eq!(program.listing()[0].line_number, 2);
    }

    #[test]
    fn listing_records_line_numbers_and_offsets() {
        let program = compile_str("* = $0200\nLDA #$10\nSTA $42", "t");
        let listing = program.listing();
        assert_eq!(listing.len(), 2);

        assert_eq!(listing[0].line_number, 2);
        assert_eq!(listing[0].pc_offset, 0x0200);
        assert_eq!(listing[0].mnemonic, Mnemonic::Lda);
        assert_eq!(listing[0].mode, AddressingMode::Immediate);
        assert_eq!(listing[0].value, 0x10);

        assert_eq!(listing[1].line_number, 3);
        assert_eq!(listing[1].pc_offset, 0x0202);
        assert_eq!(listing[1].mnemonic, Mnemonic::Sta);
        assert_eq!(listing[1].mode, AddressingMode::ZeroPage);
    }

    #[test]
    fn binary_and_decimal_literals() {
        let program = compile_str("LDA #%00001111\nLDX #10", "t");
        assert_eq!(program.byte_code(), &[0xA9, 0x0F, 0xA2, 0x0A]);
    }
}
