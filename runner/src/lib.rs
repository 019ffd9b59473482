use std::fmt;
use std::fs::File;
use std::io::prelude::*;
use std::io::{self, BufReader};
use std::path::Path;
use um::{ExitCode, Platter, PlatterHeap, Port, Processor, StreamPort};

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Carve(carver::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "{}", err),
            Error::Carve(err) => {
                writeln!(f, "Error on line {}.", carver::error_line(err))?;
                write!(f, "{}", err)
            }
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<carver::Error> for Error {
    fn from(err: carver::Error) -> Error {
        Error::Carve(err)
    }
}

/// Runs `words` as array zero against the given port. The driver owns
/// heap, port and processor; the processor only borrows them per run.
pub fn run_program(words: Vec<Platter>, port: &mut dyn Port) -> ExitCode {
    let mut heap = PlatterHeap::new(words);
    let mut processor = Processor::new();

    processor.run(&mut heap, port)
}

/// Runs `words` against the standard streams.
pub fn run_with_standard_streams(words: Vec<Platter>) -> ExitCode {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut port = StreamPort::new(stdin.lock(), stdout.lock());

    run_program(words, &mut port)
}

/// Loads a stone file as array zero and runs it.
pub fn run_stone<P: AsRef<Path>>(path: P) -> Result<ExitCode, Error> {
    let stone = stonefile::read_file(path)?;
    Ok(run_with_standard_streams(stone.into_words()))
}

/// Assembles a scroll and runs it without carving a stone on disk.
pub fn run_scroll<P: AsRef<Path>>(path: P) -> Result<ExitCode, Error> {
    let mut input = String::new();
    BufReader::new(File::open(path)?).read_to_string(&mut input)?;

    let (stone, _) = carver::assemble(&input)?;
    Ok(run_with_standard_streams(stone.into_words()))
}
