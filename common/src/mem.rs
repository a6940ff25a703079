use std::io::{self, Read, Write};

// Image words are big-endian on the wire; memory is host order.

pub trait ReadBeU16 {
    fn read_be_u16(&mut self) -> io::Result<u16>;
}

impl<T: Read> ReadBeU16 for T {
    fn read_be_u16(&mut self) -> io::Result<u16> {
        let mut buf = [0u8; 2];
        self.read_exact(&mut buf)?;
        Ok(u16::from_be_bytes(buf))
    }
}

////////////////////////////////////////////////////////////////////////////////

pub trait WriteBeU16 {
    fn write_be_u16(&mut self, val: u16) -> io::Result<()>;
}

impl<T: Write> WriteBeU16 for T {
    fn write_be_u16(&mut self, val: u16) -> io::Result<()> {
        self.write_all(&val.to_be_bytes())
    }
}
