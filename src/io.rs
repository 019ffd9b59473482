use crate::constants;
use crate::Platter;
use std::io::{ErrorKind, Read, Write};

/// Byte-granular I/O device of the machine.
pub trait Port {
    /// Reads one byte from the device; at end of input returns
    /// [`END_OF_INPUT`].
    ///
    /// [`END_OF_INPUT`]: ../constants/constant.END_OF_INPUT.html
    fn read(&mut self) -> Result<Platter, ()>;

    /// Writes a single byte to the device. `value` must be at most 0xFF;
    /// the machine traps on larger values before they reach the port.
    fn write(&mut self, value: Platter) -> Result<(), ()>;

    /// Flushes buffered output. Invoked once when the machine stops.
    fn flush(&mut self) -> Result<(), ()>;
}

/// [`Port`] adapter over a pair of byte streams, typically the standard
/// ones. Tests drive it from in-memory buffers instead.
///
/// [`Port`]: ./trait.Port.html
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use um::{constants, Port, StreamPort};
///
/// let mut port = StreamPort::new(Cursor::new(vec![b'x']), Vec::new());
/// assert_eq!(port.read(), Ok(0x78));
/// assert_eq!(port.read(), Ok(constants::END_OF_INPUT));
///
/// port.write(b'y' as u32).unwrap();
/// let (_, output) = port.into_inner();
/// assert_eq!(output, b"y");
/// ```
pub struct StreamPort<R, W> {
    reader: R,
    writer: W,
}

impl<R: Read, W: Write> StreamPort<R, W> {
    pub fn new(reader: R, writer: W) -> StreamPort<R, W> {
        StreamPort { reader, writer }
    }

    /// Consumes the port, handing back the underlying streams.
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: Read, W: Write> Port for StreamPort<R, W> {
    fn read(&mut self) -> Result<Platter, ()> {
        let mut byte = [0u8; 1];

        match self.reader.read_exact(&mut byte) {
            Ok(()) => Ok(Platter::from(byte[0])),
            Err(ref err) if err.kind() == ErrorKind::UnexpectedEof => Ok(constants::END_OF_INPUT),
            Err(_) => Err(()),
        }
    }

    fn write(&mut self, value: Platter) -> Result<(), ()> {
        debug_assert!(value <= 0xFF);
        self.writer.write_all(&[value as u8]).map_err(|_| ())
    }

    fn flush(&mut self) -> Result<(), ()> {
        self.writer.flush().map_err(|_| ())
    }
}
