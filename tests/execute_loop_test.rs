//! A whole program driven through the tick loop, the way the monitor's
//! `E` command does it.

use mos6502::{assembler, AddressSpace, Cpu, Memory, RESET_VECTOR};

#[test]
fn countdown_loop_runs_to_completion() {
    let source = "\
* = $0200
COUNT = $10
        LDX #$05
LOOP:
        DEX
        BNE LOOP
        STX COUNT
        BRK
";
    let program = assembler::compile_str(source, "countdown");
    assert_eq!(program.starting_pc_offset(), 0x0200);

    let mut mem = Memory::new();
    mem.write_bytes(program.starting_pc_offset(), program.byte_code());
    mem.write_word(RESET_VECTOR, program.starting_pc_offset());

    let mut cpu = Cpu::new(&mut mem);
    cpu.reset();

    // LDX, then five DEX/BNE rounds, then STX: 12 instructions.
    for _ in 0..12 {
        while cpu.tick() {}
    }

    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flag_z());
    assert_eq!(cpu.bus().read_byte(0x0010), 0x00);
}

#[test]
fn listing_offsets_match_loaded_addresses() {
    let source = "* = $0200\nSTART:\n    LDA #$01\n    JMP START";
    let program = assembler::compile_str(source, "listing");

    let mut mem = Memory::new();
    mem.write_bytes(program.starting_pc_offset(), program.byte_code());
    mem.write_word(RESET_VECTOR, program.starting_pc_offset());

    // Every listed opcode byte must be visible at its recorded offset.
    for line in program.listing() {
        assert_eq!(mem.read_byte(line.pc_offset), line.opcode);
    }

    let mut cpu = Cpu::new(&mut mem);
    cpu.reset();

    while cpu.tick() {} // LDA
    assert_eq!(cpu.a(), 0x01);

    while cpu.tick() {} // JMP back to START
    assert_eq!(cpu.pc(), 0x0200);
}

#[test]
fn cycles_accumulate_across_the_program() {
    let program = assembler::compile_str("LDA #$01\nNOP\nBRK", "cycles");

    let mut mem = Memory::new();
    mem.write_bytes(program.starting_pc_offset(), program.byte_code());
    mem.write_word(RESET_VECTOR, program.starting_pc_offset());

    let mut cpu = Cpu::new(&mut mem);
    cpu.reset();

    // LDA #: 2 cycles. One executing tick plus two draining ticks.
    assert!(cpu.tick());
    assert!(cpu.tick());
    assert!(!cpu.tick());

    // NOP: 2 cycles.
    assert!(cpu.tick());
    assert!(cpu.tick());
    assert!(!cpu.tick());

    assert_eq!(cpu.cycles_executed(), 6);
}
