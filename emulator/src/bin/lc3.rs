
use std::fs::File;
use std::io::{IsTerminal, stdin};
use std::path::{Path, PathBuf};
use std::process::exit;
use std::sync::Arc;

use clap::Parser;
use crossterm::terminal;

use common::constants::PC_START;
use emu_lib::Emulator;
use emu_lib::io::console::StdioConsole;
use obj::{Image, LoadError};

/// LC-3 emulator
#[derive(Parser)]
struct Args {
    /// Program images, loaded in order.
    #[arg(required = true)]
    images: Vec<PathBuf>,
}

// Byte-at-a-time input with no echo while the program runs; restored when
// dropped.
struct RawModeGuard {
    enabled: bool,
}

impl RawModeGuard {
    fn enable() -> RawModeGuard {
        RawModeGuard { enabled: terminal::enable_raw_mode().is_ok() }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if self.enabled {
            let _ = terminal::disable_raw_mode();
        }
    }
}

fn load(path: &Path) -> Result<Image, LoadError> {
    let mut file = File::open(path)?;
    Image::read_from(&mut file)
}

fn run(args: &Args) -> i32 {
    let mut emu = Emulator::new(Arc::new(StdioConsole::new()));

    for path in &args.images {
        match load(path) {
            Ok(image) => emu.load_image(&image),
            Err(err) => {
                eprintln!("failed to load image: {}: {err}", path.display());
                return 1;
            }
        }
    }

    let _raw = stdin().is_terminal().then(RawModeGuard::enable);
    if _raw.is_some() {
        // External interrupt: put the terminal back, then leave.
        ctrlc::set_handler(|| {
            let _ = terminal::disable_raw_mode();
            println!();
            exit(254);
        })
        .unwrap();
    }

    match emu.run_at(PC_START) {
        Ok(()) => 0,
        Err(fault) => {
            eprintln!("{fault}");
            70
        }
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    exit(run(&args));
}
