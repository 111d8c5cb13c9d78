//! Shifts and rotates, in both accumulator and memory forms.

use mos6502::{AddressSpace, Cpu, Memory, RESET_VECTOR};

fn load(program: &[u8]) -> Memory {
    let mut mem = Memory::new();
    mem.write_bytes(0x0200, program);
    mem.write_word(RESET_VECTOR, 0x0200);
    mem
}

fn step(cpu: &mut Cpu) {
    while cpu.tick() {}
}

#[test]
fn asl_accumulator_shifts_into_carry() {
    let mut mem = load(&[0x0A]); // ASL A
    let mut cpu = Cpu::new(&mut mem);
    cpu.reset();
    cpu.set_a(0b1100_0001);

    step(&mut cpu);

    assert_eq!(cpu.a(), 0b1000_0010);
    assert!(cpu.flag_c());
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn asl_memory_writes_back_to_memory() {
    let mut mem = load(&[0x06, 0x42]); // ASL $42
    mem.write_byte(0x0042, 0b0100_0000);

    let mut cpu = Cpu::new(&mut mem);
    cpu.reset();
    cpu.set_a(0x99);

    step(&mut cpu);

    assert_eq!(cpu.bus().read_byte(0x0042), 0b1000_0000);
    // The accumulator is untouched by the memory form.
    assert_eq!(cpu.a(), 0x99);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn lsr_memory_writes_back_and_sets_carry_from_bit_zero() {
    let mut mem = load(&[0x46, 0x42]); // LSR $42
    mem.write_byte(0x0042, 0b0000_0011);

    let mut cpu = Cpu::new(&mut mem);
    cpu.reset();
    cpu.set_a(0x99);

    step(&mut cpu);

    assert_eq!(cpu.bus().read_byte(0x0042), 0b0000_0001);
    assert_eq!(cpu.a(), 0x99);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_n());
}

#[test]
fn lsr_accumulator_can_zero_out() {
    let mut mem = load(&[0x4A]); // LSR A
    let mut cpu = Cpu::new(&mut mem);
    cpu.reset();
    cpu.set_a(0x01);

    step(&mut cpu);

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
}

#[test]
fn rol_feeds_carry_into_bit_zero() {
    let mut mem = load(&[0x2A]); // ROL A
    let mut cpu = Cpu::new(&mut mem);
    cpu.reset();
    cpu.set_a(0b1000_0000);
    cpu.set_flag_c(true);

    step(&mut cpu);

    assert_eq!(cpu.a(), 0b0000_0001);
    assert!(cpu.flag_c());
}

#[test]
fn ror_feeds_carry_into_bit_seven() {
    let mut mem = load(&[0x6A]); // ROR A
    let mut cpu = Cpu::new(&mut mem);
    cpu.reset();
    cpu.set_a(0b0000_0001);
    cpu.set_flag_c(true);

    step(&mut cpu);

    assert_eq!(cpu.a(), 0b1000_0000);
    assert!(cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn ror_memory_form_round_trips_through_memory() {
    let mut mem = load(&[0x66, 0x42]); // ROR $42
    mem.write_byte(0x0042, 0b0000_0010);

    let mut cpu = Cpu::new(&mut mem);
    cpu.reset();

    step(&mut cpu);

    assert_eq!(cpu.bus().read_byte(0x0042), 0b0000_0001);
    assert!(!cpu.flag_c());
}

#[test]
fn memory_forms_cost_more_than_accumulator_forms() {
    let mut mem = load(&[0x0A]); // ASL A
    let mut cpu = Cpu::new(&mut mem);
    cpu.reset();
    cpu.tick();
    assert_eq!(cpu.cycles_remaining(), 2);

    let mut mem = load(&[0x06, 0x42]); // ASL $42
    let mut cpu = Cpu::new(&mut mem);
    cpu.reset();
    cpu.tick();
    assert_eq!(cpu.cycles_remaining(), 5);

    let mut mem = load(&[0x1E, 0x00, 0x03]); // ASL $0300,X
    let mut cpu = Cpu::new(&mut mem);
    cpu.reset();
    cpu.tick();
    assert_eq!(cpu.cycles_remaining(), 7);
}

#[test]
fn inc_dec_read_modify_write() {
    let mut mem = load(&[0xE6, 0x42, 0xC6, 0x42, 0xC6, 0x42]); // INC, DEC, DEC $42
    mem.write_byte(0x0042, 0x00);

    let mut cpu = Cpu::new(&mut mem);
    cpu.reset();

    step(&mut cpu);
    assert_eq!(cpu.bus().read_byte(0x0042), 0x01);

    step(&mut cpu);
    assert_eq!(cpu.bus().read_byte(0x0042), 0x00);
    assert!(cpu.flag_z());

    step(&mut cpu);
    assert_eq!(cpu.bus().read_byte(0x0042), 0xFF);
    assert!(cpu.flag_n());
}
