//! Addressing mode edge cases: zero-page wrapping, the indirect JMP page
//! bug, and page-crossing cycle penalties.

use mos6502::{AddressSpace, Cpu, Memory, RESET_VECTOR};

fn load(program: &[u8]) -> Memory {
    let mut mem = Memory::new();
    mem.write_bytes(0x0200, program);
    mem.write_word(RESET_VECTOR, 0x0200);
    mem
}

/// Executes one full instruction.
fn step(cpu: &mut Cpu) {
    while cpu.tick() {}
}

#[test]
fn zero_page_x_wraps_within_page_zero() {
    // LDA $FF,X with X = 1 reads from $0000, not $0100.
    let mut mem = load(&[0xB5, 0xFF]);
    mem.write_byte(0x0000, 0x77);
    mem.write_byte(0x0100, 0x12);

    let mut cpu = Cpu::new(&mut mem);
    cpu.reset();
    cpu.set_x(0x01);
    step(&mut cpu);

    assert_eq!(cpu.a(), 0x77);
}

#[test]
fn zero_page_y_wraps_within_page_zero() {
    // LDX $F0,Y with Y = 0x20 reads from $0010.
    let mut mem = load(&[0xB6, 0xF0]);
    mem.write_byte(0x0010, 0x55);

    let mut cpu = Cpu::new(&mut mem);
    cpu.reset();
    cpu.set_y(0x20);
    step(&mut cpu);

    assert_eq!(cpu.x(), 0x55);
}

#[test]
fn indirect_jmp_preserves_page_boundary_bug() {
    // JMP ($02FF): the high byte of the target comes from $0200, not $0300.
    // The program sits at $0500 so it stays clear of the pointer page.
    let mut mem = Memory::new();
    mem.write_bytes(0x0500, &[0x6C, 0xFF, 0x02]);
    mem.write_word(RESET_VECTOR, 0x0500);
    mem.write_byte(0x02FF, 0x34); // target low
    mem.write_byte(0x0200, 0x12); // target high, wrapped to the same page
    mem.write_byte(0x0300, 0x99); // what the fixed CMOS part would read

    let mut cpu = Cpu::new(&mut mem);
    cpu.reset();
    step(&mut cpu);

    assert_eq!(cpu.pc(), 0x1234);
}

#[test]
fn indirect_jmp_without_bug_reads_next_byte() {
    // JMP ($0210) reads the word at $0210/$0211 normally.
    let mut mem = load(&[0x6C, 0x10, 0x02]);
    mem.write_byte(0x0210, 0x00);
    mem.write_byte(0x0211, 0x80);

    let mut cpu = Cpu::new(&mut mem);
    cpu.reset();
    step(&mut cpu);

    assert_eq!(cpu.pc(), 0x8000);
}

#[test]
fn indexed_indirect_pointer_stays_in_zero_page() {
    // LDA ($FF,X) with X = 0: pointer low from $00FF, high from $0000.
    let mut mem = load(&[0xA1, 0xFF]);
    mem.write_byte(0x00FF, 0x34);
    mem.write_byte(0x0000, 0x12);
    mem.write_byte(0x1234, 0xAB);

    let mut cpu = Cpu::new(&mut mem);
    cpu.reset();
    step(&mut cpu);

    assert_eq!(cpu.a(), 0xAB);
}

#[test]
fn absolute_x_page_cross_adds_one_cycle() {
    // LDA $02F0,X: base 4 cycles, 5 when the sum crosses into $0300.
    let mut mem = load(&[0xBD, 0xF0, 0x02]);

    let mut cpu = Cpu::new(&mut mem);
    cpu.reset();
    cpu.set_x(0x05);
    cpu.tick();
    assert_eq!(cpu.cycles_remaining(), 4);

    let mut mem = load(&[0xBD, 0xF0, 0x02]);
    let mut cpu = Cpu::new(&mut mem);
    cpu.reset();
    cpu.set_x(0x20);
    cpu.tick();
    assert_eq!(cpu.cycles_remaining(), 5);
}

#[test]
fn store_ignores_page_cross_penalty() {
    // STA $02F0,X always costs 5 cycles, crossing or not.
    let mut mem = load(&[0x9D, 0xF0, 0x02]);

    let mut cpu = Cpu::new(&mut mem);
    cpu.reset();
    cpu.set_x(0x20);
    cpu.tick();
    assert_eq!(cpu.cycles_remaining(), 5);
}

#[test]
fn indirect_indexed_page_cross_adds_one_cycle() {
    // LDA ($10),Y with the pointer at $02F0 and Y pushing past the page.
    let mut mem = load(&[0xB1, 0x10]);
    mem.write_byte(0x0010, 0xF0);
    mem.write_byte(0x0011, 0x02);

    let mut cpu = Cpu::new(&mut mem);
    cpu.reset();
    cpu.set_y(0x20);
    cpu.tick();
    assert_eq!(cpu.cycles_remaining(), 6);

    let mut mem = load(&[0xB1, 0x10]);
    mem.write_byte(0x0010, 0xF0);
    mem.write_byte(0x0011, 0x02);

    let mut cpu = Cpu::new(&mut mem);
    cpu.reset();
    cpu.set_y(0x01);
    cpu.tick();
    assert_eq!(cpu.cycles_remaining(), 5);
}

#[test]
fn immediate_reads_the_byte_after_the_opcode() {
    let mut mem = load(&[0xA9, 0x42]);

    let mut cpu = Cpu::new(&mut mem);
    cpu.reset();
    step(&mut cpu);

    assert_eq!(cpu.a(), 0x42);
    assert_eq!(cpu.pc(), 0x0202);
}
