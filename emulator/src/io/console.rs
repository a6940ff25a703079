
use std::collections::VecDeque;
use std::io::{IsTerminal, Read, Write, stdin, stdout};
use std::process::exit;
use std::sync::Mutex;

use crossterm::terminal;
use log::error;

/// Console collaborator: the byte source the keyboard polls and the byte sink
/// the output traps write to.
pub trait Console: Send + Sync {
    /// Non-blocking: is a byte available right now?
    fn input_available(&self) -> bool;

    /// Blocking read of the next input byte.
    fn read_input(&self) -> u8;

    fn write_output(&self, val: u8);
    fn flush(&self);
}

////////////////////////////////////////////////////////////////////////////////

// Ctrl-C arrives as a plain byte once the terminal is in raw mode.
const ETX: u8 = 0x03;

pub struct StdioConsole {
    interactive: bool,
}

impl StdioConsole {
    pub fn new() -> StdioConsole {
        StdioConsole { interactive: stdin().is_terminal() }
    }
}

impl Default for StdioConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdioConsole {
    fn input_available(&self) -> bool {
        let mut fd = libc::pollfd {
            fd: libc::STDIN_FILENO,
            events: libc::POLLIN,
            revents: 0,
        };
        // Zero timeout: report, don't wait.
        // SAFETY: fd points at one valid pollfd for the duration of the call.
        unsafe { libc::poll(&mut fd, 1, 0) > 0 }
    }

    fn read_input(&self) -> u8 {
        let mut buf = [0u8; 1];
        if stdin().lock().read_exact(&mut buf).is_err() {
            error!("stdin closed; keyboard reads will return 0");
            return 0;
        }
        match buf[0] {
            ETX if self.interactive => {
                // Raw mode disabled ISIG, so honor the interrupt ourselves:
                // restore the terminal and leave.
                let _ = terminal::disable_raw_mode();
                println!();
                exit(254);
            }
            b'\r' if self.interactive => b'\n',
            c => c,
        }
    }

    fn write_output(&self, val: u8) {
        stdout().lock().write_all(&[val]).unwrap();
    }

    fn flush(&self) {
        stdout().lock().flush().unwrap();
    }
}

////////////////////////////////////////////////////////////////////////////////

/// In-memory console for tests and embedding: input is scripted, output is
/// captured.
#[derive(Default)]
pub struct PipeConsole {
    in_buf: Mutex<VecDeque<u8>>,
    out_buf: Mutex<VecDeque<u8>>,
}

impl PipeConsole {
    pub fn push_input(&self, val: u8) {
        self.in_buf.lock().unwrap().push_back(val);
    }

    pub fn write_input(&self, vals: &[u8]) {
        for val in vals {
            self.push_input(*val);
        }
    }

    pub fn take_output(&self) -> VecDeque<u8> {
        std::mem::take(&mut self.out_buf.lock().unwrap())
    }

    pub fn pop_output(&self) -> Option<u8> {
        self.out_buf.lock().unwrap().pop_front()
    }

    pub fn is_out_empty(&self) -> bool {
        self.out_buf.lock().unwrap().is_empty()
    }

    pub fn output_string(&self) -> String {
        String::from_utf8_lossy(&Vec::from(self.take_output())).into_owned()
    }
}

impl Console for PipeConsole {
    fn input_available(&self) -> bool {
        !self.in_buf.lock().unwrap().is_empty()
    }

    fn read_input(&self) -> u8 {
        match self.in_buf.lock().unwrap().pop_front() {
            Some(val) => val,
            None => {
                error!("PipeConsole: read with no input available");
                0
            }
        }
    }

    fn write_output(&self, val: u8) {
        self.out_buf.lock().unwrap().push_back(val);
    }

    fn flush(&self) {}
}
