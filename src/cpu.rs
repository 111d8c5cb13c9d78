//! # CPU State and Execution
//!
//! The [`Cpu`] struct holds the architectural state of the 6502 (registers,
//! flags, and the cycle counters) and drives the fetch/decode/execute loop.
//!
//! ## Execution Model
//!
//! Time advances through [`Cpu::tick`]. While cycles from the previous
//! instruction remain, a tick only drains one of them; once the counter hits
//! zero the next tick fetches, decodes, and executes a whole instruction and
//! credits its full cost. Architectural effects are therefore visible before
//! the cost has drained, which is acceptable at this level of abstraction.
//!
//! External events are plain method calls: [`Cpu::reset`], [`Cpu::irq`],
//! [`Cpu::nmi`]. None of them may be invoked from within a tick.

use log::warn;

use crate::addressing::{AddressingMode, Operand};
use crate::instructions;
use crate::memory::AddressSpace;
use crate::opcodes::{Mnemonic, OPCODE_TABLE};
use crate::{IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR, STACK_BASE};

/// The 6502 processor.
///
/// The CPU borrows its address space for its whole lifetime; memory is owned
/// by the caller and every bus access goes through the [`AddressSpace`]
/// capability, leaving room for memory-mapped devices behind it.
///
/// # Examples
///
/// ```
/// use mos6502::{AddressSpace, Cpu, Memory, RESET_VECTOR};
///
/// let mut mem = Memory::new();
/// mem.write_word(RESET_VECTOR, 0x0200);
/// mem.write_byte(0x0200, 0xEA); // NOP
///
/// let mut cpu = Cpu::new(&mut mem);
/// cpu.reset();
/// assert_eq!(cpu.pc(), 0x0200);
///
/// while cpu.tick() {}
/// assert_eq!(cpu.pc(), 0x0201);
/// ```
pub struct Cpu<'a> {
    /// Program counter.
    pub(crate) pc: u16,

    /// Stack pointer; the stack lives at `0x0100 | SP` and grows downward.
    pub(crate) sp: u8,

    /// Accumulator.
    pub(crate) a: u8,

    /// X index register.
    pub(crate) x: u8,

    /// Y index register.
    pub(crate) y: u8,

    /// Carry flag (bit 0 of P).
    pub(crate) flag_c: bool,

    /// Zero flag (bit 1).
    pub(crate) flag_z: bool,

    /// Interrupt disable flag (bit 2).
    pub(crate) flag_i: bool,

    /// Decimal mode flag (bit 3); ADC/SBC switch to BCD arithmetic.
    pub(crate) flag_d: bool,

    /// Break flag (bit 4).
    pub(crate) flag_b: bool,

    /// Overflow flag (bit 6). Bit 5 (U) is not stored; it always reads 1.
    pub(crate) flag_v: bool,

    /// Negative flag (bit 7).
    pub(crate) flag_n: bool,

    /// Clock cycles still owed by the current instruction or interrupt.
    pub(crate) cycles_remaining: u32,

    /// Total ticks since construction.
    cycles_executed: u64,

    pub(crate) bus: &'a mut dyn AddressSpace,
}

impl<'a> Cpu<'a> {
    /// Creates a CPU over the given address space with all state zeroed.
    ///
    /// Call [`Cpu::reset`] before the first tick to load the reset vector.
    pub fn new(bus: &'a mut dyn AddressSpace) -> Self {
        Self {
            pc: 0,
            sp: 0,
            a: 0,
            x: 0,
            y: 0,
            flag_c: false,
            flag_z: false,
            flag_i: false,
            flag_d: false,
            flag_b: false,
            flag_v: false,
            flag_n: false,
            cycles_remaining: 0,
            cycles_executed: 0,
            bus,
        }
    }

    /// Reset interrupt. Forces the CPU into a known state:
    ///
    /// - A, X, and Y are cleared
    /// - SP is set to 0xFD
    /// - every flag is cleared (U still reads as 1)
    /// - PC is loaded from the reset vector at 0xFFFC/D
    ///
    /// Nothing is pushed to the stack and pending cycles are left alone.
    pub fn reset(&mut self) {
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.pc = self.bus.read_word(RESET_VECTOR);
        self.sp = 0xFD;
        self.flag_c = false;
        self.flag_z = false;
        self.flag_i = false;
        self.flag_d = false;
        self.flag_b = false;
        self.flag_v = false;
        self.flag_n = false;
    }

    /// Maskable interrupt request. Ignored while the I flag is set.
    ///
    /// Pushes PC (high then low) and P with B clear, sets I, loads PC from
    /// the IRQ vector at 0xFFFE/F, and credits 7 cycles.
    pub fn irq(&mut self) {
        if self.flag_i {
            return;
        }

        self.push((self.pc >> 8) as u8);
        self.push((self.pc & 0xFF) as u8);

        self.flag_b = false;
        self.flag_i = true;
        let status = self.status();
        self.push(status);

        self.pc = self.bus.read_word(IRQ_VECTOR);
        self.cycles_remaining += 7;
    }

    /// Non-maskable interrupt. Same push sequence as [`Cpu::irq`], but it
    /// cannot be masked, loads PC from 0xFFFA/B, and credits 8 cycles.
    pub fn nmi(&mut self) {
        self.push((self.pc >> 8) as u8);
        self.push((self.pc & 0xFF) as u8);

        self.flag_b = false;
        self.flag_i = true;
        let status = self.status();
        self.push(status);

        self.pc = self.bus.read_word(NMI_VECTOR);
        self.cycles_remaining += 8;
    }

    /// Performs a single clock cycle.
    ///
    /// While the previous instruction still owes cycles, one is drained and
    /// no work happens. Otherwise the next opcode is fetched and executed in
    /// full, and its cost (base cycles plus page-crossing and branch
    /// penalties) is credited to the counter.
    ///
    /// Returns true while the current instruction has cycles remaining.
    ///
    /// An illegal opcode is logged, credited zero cycles, and skipped; the
    /// CPU does not halt.
    pub fn tick(&mut self) -> bool {
        self.cycles_executed += 1;

        if self.cycles_remaining > 0 {
            self.cycles_remaining -= 1;
            return self.cycles_remaining > 0;
        }

        let opcode = self.bus.read_byte(self.pc);
        self.pc = self.pc.wrapping_add(1);

        let info = &OPCODE_TABLE[opcode as usize];
        if info.mnemonic == Mnemonic::Ill {
            warn!(
                "illegal opcode ${:02X} at ${:04X}, skipping",
                opcode,
                self.pc.wrapping_sub(1)
            );
            return self.cycles_remaining > 0;
        }

        let (operand, page_crossed) = self.resolve_operand(info.mode);
        let extra = instructions::execute(self, info.mnemonic, operand);

        let mut cost = u32::from(info.cycles) + u32::from(extra);
        if page_crossed && info.page_penalty {
            cost += 1;
        }
        self.cycles_remaining += cost;

        self.cycles_remaining > 0
    }

    // ========== Addressing ==========

    /// Evaluates an addressing mode: consumes the operand bytes following
    /// the opcode (advancing PC) and returns the resolved [`Operand`] plus
    /// whether an indexed addition crossed a page boundary.
    ///
    /// Relative mode returns the sign-extended displacement in place of an
    /// address; the branch executor applies it and accounts for its cost.
    pub(crate) fn resolve_operand(&mut self, mode: AddressingMode) -> (Operand, bool) {
        match mode {
            AddressingMode::Implied => (Operand::None, false),

            AddressingMode::Accumulator => (Operand::Accumulator, false),

            AddressingMode::Immediate => {
                let addr = self.pc;
                self.pc = self.pc.wrapping_add(1);
                (Operand::Address(addr), false)
            }

            AddressingMode::ZeroPage => {
                let addr = self.fetch_byte() as u16;
                (Operand::Address(addr), false)
            }

            AddressingMode::ZeroPageX => {
                let base = self.fetch_byte();
                // The sum wraps within the zero page.
                (Operand::Address(base.wrapping_add(self.x) as u16), false)
            }

            AddressingMode::ZeroPageY => {
                let base = self.fetch_byte();
                (Operand::Address(base.wrapping_add(self.y) as u16), false)
            }

            AddressingMode::Absolute => (Operand::Address(self.fetch_word()), false),

            AddressingMode::AbsoluteX => {
                let base = self.fetch_word();
                let addr = base.wrapping_add(self.x as u16);
                (Operand::Address(addr), page_of(base) != page_of(addr))
            }

            AddressingMode::AbsoluteY => {
                let base = self.fetch_word();
                let addr = base.wrapping_add(self.y as u16);
                (Operand::Address(addr), page_of(base) != page_of(addr))
            }

            AddressingMode::Indirect => {
                let pointer = self.fetch_word();
                let low = self.bus.read_byte(pointer);
                // NMOS bug: a pointer ending in 0xFF fetches the high byte
                // from the start of the same page, not from pointer + 1.
                let high_addr = if pointer & 0x00FF == 0x00FF {
                    pointer & 0xFF00
                } else {
                    pointer.wrapping_add(1)
                };
                let high = self.bus.read_byte(high_addr);
                (Operand::Address(make_word(low, high)), false)
            }

            AddressingMode::IndirectX => {
                let table = self.fetch_byte().wrapping_add(self.x);
                let low = self.bus.read_byte(table as u16);
                let high = self.bus.read_byte(table.wrapping_add(1) as u16);
                (Operand::Address(make_word(low, high)), false)
            }

            AddressingMode::IndirectY => {
                let table = self.fetch_byte();
                let low = self.bus.read_byte(table as u16);
                let high = self.bus.read_byte(table.wrapping_add(1) as u16);
                let base = make_word(low, high);
                let addr = base.wrapping_add(self.y as u16);
                (Operand::Address(addr), page_of(base) != page_of(addr))
            }

            AddressingMode::Relative => {
                let offset = self.fetch_byte() as i8;
                (Operand::Address(offset as i16 as u16), false)
            }
        }
    }

    /// Reads the data byte an operand refers to. Accumulator (and Implied)
    /// operands supply the accumulator directly.
    pub(crate) fn fetch_operand(&self, operand: Operand) -> u8 {
        match operand {
            Operand::Address(addr) => self.bus.read_byte(addr),
            Operand::Accumulator | Operand::None => self.a,
        }
    }

    /// Writes a result back where the operand came from: memory for address
    /// operands, the accumulator otherwise.
    pub(crate) fn write_operand(&mut self, operand: Operand, value: u8) {
        match operand {
            Operand::Address(addr) => self.bus.write_byte(addr, value),
            Operand::Accumulator | Operand::None => self.a = value,
        }
    }

    fn fetch_byte(&mut self) -> u8 {
        let byte = self.bus.read_byte(self.pc);
        self.pc = self.pc.wrapping_add(1);
        byte
    }

    fn fetch_word(&mut self) -> u16 {
        let low = self.fetch_byte();
        let high = self.fetch_byte();
        make_word(low, high)
    }

    // ========== Stack ==========

    /// Writes a byte at `0x0100 | SP`, then decrements SP (wrapping).
    pub(crate) fn push(&mut self, value: u8) {
        let addr = STACK_BASE | self.sp as u16;
        self.sp = self.sp.wrapping_sub(1);
        self.bus.write_byte(addr, value);
    }

    /// Increments SP (wrapping), then reads the byte at `0x0100 | SP`.
    pub(crate) fn pull(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.bus.read_byte(STACK_BASE | self.sp as u16)
    }

    // ========== Processor status ==========

    /// Packs the flags into the P register byte.
    ///
    /// Bit layout, LSB first: C Z I D B U V N. Bit 5 (U) always reads 1.
    pub fn status(&self) -> u8 {
        let mut p = 0b0010_0000;
        if self.flag_c {
            p |= 0b0000_0001;
        }
        if self.flag_z {
            p |= 0b0000_0010;
        }
        if self.flag_i {
            p |= 0b0000_0100;
        }
        if self.flag_d {
            p |= 0b0000_1000;
        }
        if self.flag_b {
            p |= 0b0001_0000;
        }
        if self.flag_v {
            p |= 0b0100_0000;
        }
        if self.flag_n {
            p |= 0b1000_0000;
        }
        p
    }

    /// Unpacks a P register byte into the flags. Bit 5 is ignored; U keeps
    /// reading as 1.
    pub fn set_status(&mut self, p: u8) {
        self.flag_c = p & 0b0000_0001 != 0;
        self.flag_z = p & 0b0000_0010 != 0;
        self.flag_i = p & 0b0000_0100 != 0;
        self.flag_d = p & 0b0000_1000 != 0;
        self.flag_b = p & 0b0001_0000 != 0;
        self.flag_v = p & 0b0100_0000 != 0;
        self.flag_n = p & 0b1000_0000 != 0;
    }

    // ========== Register access ==========

    /// Returns the accumulator.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer. The full stack address is `0x0100 | SP`.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Cycles still owed by the current instruction.
    pub fn cycles_remaining(&self) -> u32 {
        self.cycles_remaining
    }

    /// Total ticks performed since the CPU was constructed.
    pub fn cycles_executed(&self) -> u64 {
        self.cycles_executed
    }

    pub fn flag_c(&self) -> bool {
        self.flag_c
    }

    pub fn flag_z(&self) -> bool {
        self.flag_z
    }

    pub fn flag_i(&self) -> bool {
        self.flag_i
    }

    pub fn flag_d(&self) -> bool {
        self.flag_d
    }

    pub fn flag_b(&self) -> bool {
        self.flag_b
    }

    pub fn flag_v(&self) -> bool {
        self.flag_v
    }

    pub fn flag_n(&self) -> bool {
        self.flag_n
    }

    // Setters, mainly for tests and tooling.

    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    pub fn set_flag_c(&mut self, value: bool) {
        self.flag_c = value;
    }

    pub fn set_flag_d(&mut self, value: bool) {
        self.flag_d = value;
    }

    pub fn set_flag_i(&mut self, value: bool) {
        self.flag_i = value;
    }

    pub fn set_flag_v(&mut self, value: bool) {
        self.flag_v = value;
    }

    /// Shared view of the address space, for inspection between ticks.
    pub fn bus(&self) -> &dyn AddressSpace {
        &*self.bus
    }

    /// Mutable view of the address space.
    pub fn bus_mut(&mut self) -> &mut dyn AddressSpace {
        &mut *self.bus
    }
}

/// High byte of an address.
fn page_of(addr: u16) -> u16 {
    addr & 0xFF00
}

fn make_word(low: u8, high: u8) -> u16 {
    (high as u16) << 8 | low as u16
}

impl std::fmt::Display for Cpu<'_> {
    /// Renders the CPU state as a status line:
    ///
    /// ```text
    /// PS=[CzidbUvn] PC=$0200 SP=$FD A=$00 X=$00 Y=$00 : CR=0 CE=12
    /// ```
    ///
    /// Flags are listed LSB first; an uppercase letter means the flag is
    /// set. U is always set.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let flags = [
            ('C', self.flag_c),
            ('Z', self.flag_z),
            ('I', self.flag_i),
            ('D', self.flag_d),
            ('B', self.flag_b),
            ('U', true),
            ('V', self.flag_v),
            ('N', self.flag_n),
        ];

        write!(f, "PS=[")?;
        for (letter, set) in flags {
            let shown = if set {
                letter
            } else {
                letter.to_ascii_lowercase()
            };
            write!(f, "{}", shown)?;
        }
        write!(
            f,
            "] PC=${:04X} SP=${:02X} A=${:02X} X=${:02X} Y=${:02X} : CR={} CE={}",
            self.pc, self.sp, self.a, self.x, self.y, self.cycles_remaining, self.cycles_executed
        )
    }
}
