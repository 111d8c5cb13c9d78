//! Interactive monitor for the 6502 emulator.
//!
//! Compiles the assembly source given on the command line (default
//! `./program.asm`), loads it at the program's starting offset, points the
//! reset vector there, and drops into a single-letter command loop with the
//! CPU status line as the prompt.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use log::error;

use mos6502::{assembler, AddressSpace, Cpu, Memory, RESET_VECTOR};

fn print_help() {
    println!("Available commands:");
    println!("\tR - Reset CPU");
    println!("\tI - Interrupt request");
    println!("\tN - Non-maskable interrupt");
    println!("\tE - Execute until cycles complete");
    println!("\tP - Print program counter page");
    println!("\tS - Print stack page");
    println!("\tZ - Print zero page");
    println!("\tV - Print last page (vectors)");
    println!("\tM - Print entire memory");
    println!("\tX - Exit program");
    println!("\tAny other character runs one cycle");
}

fn main() -> ExitCode {
    env_logger::init();

    println!("MOS-6502 Processor Emulation");
    println!("============================");

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "./program.asm".to_string());

    let program = match assembler::compile_file(&path) {
        Ok(program) => program,
        Err(err) => {
            error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let mut memory = Memory::new();
    memory.write_bytes(program.starting_pc_offset(), program.byte_code());
    memory.write_word(RESET_VECTOR, program.starting_pc_offset());

    let mut cpu = Cpu::new(&mut memory);
    cpu.reset();

    println!("Starting CPU state: {}", cpu);
    println!();
    print_help();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{} > ", cpu);
        let _ = io::stdout().flush();

        let Some(Ok(line)) = lines.next() else {
            break;
        };
        let Some(command) = line.trim().chars().next() else {
            continue;
        };

        match command.to_ascii_uppercase() {
            'R' => {
                println!("Reset...");
                cpu.reset();
            }
            'I' => {
                println!("Interrupt request...");
                cpu.irq();
            }
            'N' => {
                println!("Non-maskable interrupt...");
                cpu.nmi();
            }
            'E' => while cpu.tick() {},
            'P' => {
                let page = (cpu.pc() >> 8) as u8;
                print!("{}", cpu.bus().dump_pages(page, page));
            }
            'S' => print!("{}", cpu.bus().dump_pages(0x01, 0x01)),
            'Z' => print!("{}", cpu.bus().dump_pages(0x00, 0x00)),
            'V' => print!("{}", cpu.bus().dump_pages(0xFF, 0xFF)),
            'M' => print!("{}", cpu.bus().dump_pages(0x00, 0xFF)),
            'X' => break,
            _ => {
                cpu.tick();
            }
        }
    }

    println!("Exiting program");
    println!("Ending CPU state: {}", cpu);

    ExitCode::SUCCESS
}
