//! # Addressing Modes
//!
//! The 13 addressing modes of the 6502 and the operand they resolve to.
//! The CPU's addressing evaluator ([`crate::Cpu`]) consumes 0, 1, or 2 bytes
//! following the opcode and produces an [`Operand`] for the executor.

/// 6502 addressing mode enumeration.
///
/// The addressing mode determines how the CPU interprets the bytes that
/// follow an opcode and how the effective address is calculated.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implied, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative,
///   IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand; the operation is implied by the instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implied,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: ASL A, LSR A, ROL A, ROR A
    Accumulator,

    /// 8-bit constant stored in the instruction itself.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address into the zero page (0x0000-0x00FF).
    ZeroPage,

    /// Zero page address plus X; the sum wraps within the zero page.
    ZeroPageX,

    /// Zero page address plus Y; the sum wraps within the zero page.
    ///
    /// Only used by LDX and STX.
    ZeroPageY,

    /// Signed 8-bit displacement used by the branch instructions.
    ///
    /// The PC has already advanced past the two instruction bytes when the
    /// displacement is applied, so the reachable window around the branch
    /// instruction itself is -126 to +129.
    Relative,

    /// Full 16-bit address, little-endian.
    Absolute,

    /// 16-bit address plus X. Crossing a page adds one cycle on
    /// read instructions that declare themselves sensitive.
    AbsoluteX,

    /// 16-bit address plus Y. Same page-crossing rule as AbsoluteX.
    AbsoluteY,

    /// 16-bit pointer to the real 16-bit target. Only used by JMP.
    ///
    /// The NMOS page-boundary bug is preserved: a pointer ending in 0xFF
    /// fetches the target's high byte from the start of the same page.
    Indirect,

    /// Indexed indirect: the operand byte plus X (wrapping in the zero
    /// page) names a zero-page location holding the target address.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: the operand byte names a zero-page pointer; Y is
    /// added to the pointed-to address. Page crossing may add one cycle.
    ///
    /// Example: LDA ($40),Y
    IndirectY,
}

/// What an addressing mode resolved to.
///
/// Accumulator and Implied modes deliver their operand out-of-band rather
/// than through memory, so executors match on this sum type instead of
/// consulting shadow state on the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// An effective memory address. For Relative mode this is the
    /// sign-extended branch displacement rather than a real address.
    Address(u16),

    /// The operand is the accumulator itself.
    Accumulator,

    /// No operand (Implied mode).
    None,
}
