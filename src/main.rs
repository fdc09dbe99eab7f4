//! rp2a03 runner - execute an NROM image (or a built-in demo) for a number
//! of cycle budgets and print the final CPU state.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rp2a03::cpu::{IRQ_VECTOR, RESET_VECTOR};
use rp2a03::{Bus, CYCLES_PER_FRAME, Cartridge, Cpu, Ram};

/// 2A03 CPU runner
#[derive(Parser, Debug)]
#[command(name = "rp2a03")]
#[command(about = "Run a 2A03 program against flat memory", long_about = None)]
struct Args {
    /// Path to an iNES (mapper 0) ROM file; a demo program runs when omitted
    #[arg(short, long)]
    rom: Option<PathBuf>,

    /// Number of budgets to run
    #[arg(short, long, default_value_t = 1)]
    frames: u64,

    /// Cycles per budget
    #[arg(short, long, default_value_t = CYCLES_PER_FRAME)]
    budget: u64,
}

const DEMO_ORIGIN: u16 = 0x8000;

/// LDA/ADC/STA/INX loop that falls into BRK, which vectors back to the start.
const DEMO_PROGRAM: &[u8] = &[
    0xA9, 0x10, // LDA #$10
    0x69, 0x05, // ADC #$05 => A = 0x15
    0x8D, 0x00, 0x02, // STA $0200
    0xE8, // INX
    0xD0, 0xFD, // BNE -3 -> loop until X wraps to 0
    0x00, // BRK
];

fn load_demo(ram: &mut Ram) {
    ram.load(DEMO_ORIGIN, DEMO_PROGRAM);
    ram.set_word(RESET_VECTOR, DEMO_ORIGIN);
    ram.set_word(IRQ_VECTOR, DEMO_ORIGIN);
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let mut ram = Ram::new();
    match &args.rom {
        Some(path) => {
            let loaded = Cartridge::from_ines_file(path).and_then(|cart| {
                println!("Loaded cartridge: {cart:?}");
                cart.load_into(&mut ram)
            });
            if let Err(e) = loaded {
                log::warn!("rejected {}: {e}", path.display());
                eprintln!("Failed to load ROM: {e}");
                return ExitCode::FAILURE;
            }
        }
        None => load_demo(&mut ram),
    }

    let mut cpu = Cpu::power_on(&mut ram);
    for _ in 0..args.frames {
        cpu.run(&mut ram, args.budget);
    }

    println!("A: 0x{:02X}", cpu.a());
    println!("X: 0x{:02X}", cpu.x());
    println!("Y: 0x{:02X}", cpu.y());
    println!("SP: 0x{:02X}", cpu.sp());
    println!("PC: 0x{:04X}", cpu.pc());
    println!("P (flags): {}", cpu.status());
    println!("mem[0x0200]: 0x{:02X}", ram.read(0x0200));
    println!("cycles: {}", cpu.total_cycles());
    ExitCode::SUCCESS
}
