use std::fs::File;
use std::process::ExitCode;

use clap::Parser;
use log::{info, warn};

use dotmatrix_core::cartridge::{Cartridge, CartridgeError};
use dotmatrix_core::diagnostics::{self, BusFault, IllegalOpcode, Observer};
use dotmatrix_core::gameboy::GameBoy;

/// Surfaces core fault events through the `log` ecosystem so RUST_LOG
/// controls everything from one place.
struct LogObserver;

impl Observer for LogObserver {
    fn bus_fault(&self, fault: &BusFault) {
        warn!(target: "bus", "{fault}");
    }

    fn illegal_opcode(&self, event: &IllegalOpcode) {
        warn!(target: "cpu", "{event}");
    }
}

#[derive(Parser)]
struct Args {
    /// Path to ROM file
    rom: std::path::PathBuf,

    /// Halt the CPU on undefined opcodes instead of skipping them
    #[arg(long)]
    strict: bool,

    /// Stop after this many T-cycles
    #[arg(long)]
    cycles: Option<u64>,

    /// Write a hex dump of the ROM image to dump.txt
    #[arg(long)]
    dump: bool,

    /// Print CPU state when the run ends
    #[arg(long)]
    debug: bool,
}

struct Emulator {
    gb: GameBoy,
    paused: bool,
    running: bool,
    steps: u64,
}

impl Emulator {
    fn new(gb: GameBoy) -> Self {
        Self {
            gb,
            paused: false,
            running: false,
            steps: 0,
        }
    }

    fn run(&mut self, cycle_limit: Option<u64>) {
        self.running = true;
        self.paused = false;
        self.steps = 0;

        while self.running {
            if self.paused {
                // A frame-pacing driver will replace this spin with a
                // blocking wait once one exists.
                continue;
            }
            self.gb.step();
            self.steps += 1;

            if self.gb.cpu.halted {
                // Nothing can wake a halted CPU until the interrupt
                // controller lands, so the run is over.
                info!("CPU halted after {} steps", self.steps);
                self.running = false;
            }
            if let Some(max) = cycle_limit {
                if self.gb.cpu.ticks >= max {
                    self.running = false;
                }
            }
        }
    }
}

fn print_banner(cart: &Cartridge) {
    // Header layout: gbdev.io/pandocs/The_Cartridge_Header.html
    let header = cart.header().expect("image length checked at load");
    println!();
    println!("TITLE      {}", header.title());
    println!("LIC        {}", header.licensee_name());
    println!("SGB        {:x}", header.sgb_flag);
    println!("TYPE       {}", header.type_name());
    println!("ROM SIZE   {} KB", header.rom_size_kib());
    println!("RAM SIZE   {}", header.ram_size_name());
    println!("DEST CODE  {}", header.destination_name());
    println!("VERSION    {}", header.version);
    println!(
        "CHECKSUM   {}",
        if cart.header_checksum_ok() {
            "PASSED"
        } else {
            "FAILED"
        }
    );
}

fn main() -> ExitCode {
    env_logger::init();
    let _ = diagnostics::install_observer(Box::new(LogObserver));
    let args = Args::parse();

    let cart = match Cartridge::from_file(&args.rom) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load ROM: {e}");
            return ExitCode::FAILURE;
        }
    };

    print_banner(&cart);

    if args.dump {
        match File::create("dump.txt") {
            Ok(mut file) => {
                if let Err(e) = cart.dump_hex(&mut file) {
                    eprintln!("Failed to write dump.txt: {e}");
                }
            }
            Err(e) => eprintln!("Failed to create dump.txt: {e}"),
        }
    }

    if !cart.verify_logo() {
        eprintln!("Failed to load ROM: {}", CartridgeError::LogoMismatch);
        return ExitCode::FAILURE;
    }

    info!("Loading {}", args.rom.display());

    let mut gb = GameBoy::new();
    gb.cpu.strict = args.strict;
    gb.load_cart(cart);

    let mut emulator = Emulator::new(gb);
    emulator.run(args.cycles);

    if args.debug {
        println!("{}", emulator.gb.cpu.debug_state());
    }
    let blocked = emulator.gb.bus.faults.total();
    let undefined = emulator.gb.cpu.illegal_total();
    if blocked > 0 || undefined > 0 {
        info!("{blocked} blocked bus accesses, {undefined} undefined opcodes");
    }

    ExitCode::SUCCESS
}
