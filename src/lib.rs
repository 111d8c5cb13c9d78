//! # MOS 6502 Emulator Core
//!
//! An instruction-level emulator of the NMOS MOS Technology 6502, paired with
//! a small single-pass assembler that feeds it.
//!
//! The CPU advances in discrete clock cycles: executing an instruction credits
//! a cycle counter with its full cost (base cycles plus page-crossing and
//! branch penalties), and each subsequent [`Cpu::tick`] drains one cycle until
//! the next fetch. Reset, IRQ, and NMI are delivered as ordinary method calls.
//!
//! ## Quick Start
//!
//! ```rust
//! use mos6502::{Cpu, Memory, AddressSpace, RESET_VECTOR};
//!
//! let program = mos6502::assembler::compile_str("LDA #$42\nBRK", "demo");
//!
//! let mut memory = Memory::new();
//! memory.write_bytes(program.starting_pc_offset(), program.byte_code());
//! memory.write_word(RESET_VECTOR, program.starting_pc_offset());
//!
//! let mut cpu = Cpu::new(&mut memory);
//! cpu.reset();
//!
//! while cpu.tick() {}
//! assert_eq!(cpu.a(), 0x42);
//! ```
//!
//! ## Modules
//!
//! - `cpu` - CPU state, interrupts, and the tick loop
//! - `memory` - the [`AddressSpace`] capability and a flat 64 KiB [`Memory`]
//! - `opcodes` - the 256-entry opcode table
//! - `addressing` - addressing modes and the operand sum type
//! - `assembler` - assembly source to byte code plus a structured listing

pub mod addressing;
pub mod assembler;
pub mod cpu;
pub mod memory;
pub mod opcodes;

// Instruction executors are internal; they are reached through Cpu::tick.
mod instructions;

pub use addressing::{AddressingMode, Operand};
pub use cpu::Cpu;
pub use memory::{AddressSpace, Memory};
pub use opcodes::{Mnemonic, OpcodeInfo, OPCODE_TABLE};

/// First address of the stack page (stack lives at 0x0100 | SP).
pub const STACK_BASE: u16 = 0x0100;

/// Vector loaded into PC by a non-maskable interrupt (word at 0xFFFA/B).
pub const NMI_VECTOR: u16 = 0xFFFA;

/// Vector loaded into PC by a reset (word at 0xFFFC/D).
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Vector loaded into PC by IRQ and BRK (word at 0xFFFE/F).
pub const IRQ_VECTOR: u16 = 0xFFFE;
