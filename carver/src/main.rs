#[macro_use]
extern crate clap;

use byteorder::WriteBytesExt;
use carver::SourceMapItem;
use clap::Arg;
use std::fs::{self, File};
use std::io::prelude::*;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::process;
use util::Endian;

#[derive(Debug)]
enum IOErrorContext {
    ReadInput,
    WriteOutput,
}

#[derive(Debug)]
enum Error {
    Carve(carver::Error),
    Io(std::io::Error, IOErrorContext, PathBuf),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err, context, path) => writeln!(
                f,
                "{} file \"{}\" failed: {}",
                match context {
                    IOErrorContext::ReadInput => "Reading input",
                    IOErrorContext::WriteOutput => "Writing output",
                },
                path.display(),
                err
            ),
            Error::Carve(err) => {
                writeln!(f, "Error on line {}.", carver::error_line(err))?;
                write!(f, "{}", err)
            }
        }
    }
}

fn main() {
    // Parse command line arguments
    let matches = app_from_crate!()
        .arg(
            Arg::with_name("SCROLL")
                .help("Sets the scroll file to assemble")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("STONE")
                .help("Sets the stone file to write")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("source_map")
                .short("m")
                .long("source_map")
                .takes_value(true)
                .value_name("SOURCE_MAP")
                .help("Sets the file to write the source map to"),
        )
        .get_matches();

    let scroll = matches.value_of("SCROLL").unwrap();
    let stone = matches.value_of("STONE").unwrap();
    let map = matches.value_of("source_map");

    if let Err(err) = carve(scroll, stone, map) {
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn carve(scroll: &str, stone: &str, map: Option<&str>) -> Result<(), Error> {
    let scroll_path = Path::new(scroll);

    // Read input file
    let scroll_file = File::open(scroll_path)
        .map_err(|err| Error::Io(err, IOErrorContext::ReadInput, scroll_path.to_owned()))?;
    let mut buf_reader = BufReader::new(scroll_file);
    let mut input = String::new();

    buf_reader
        .read_to_string(&mut input)
        .map_err(|err| Error::Io(err, IOErrorContext::ReadInput, scroll_path.to_owned()))?;

    // Perform assembly
    let (stone_data, source_map) = carver::assemble(&input).map_err(|err| {
        Error::Carve(match scroll_path.to_str() {
            Some(path_str) => err.with_path(path_str),
            None => err,
        })
    })?;

    // Write output file; a partially written stone is not left behind
    let stone_path = PathBuf::from(stone);
    if let Err(err) = stonefile::write_file(&stone_path, &stone_data) {
        let _ = fs::remove_file(&stone_path);
        return Err(Error::Io(err, IOErrorContext::WriteOutput, stone_path));
    }

    // Write source map file (if path is set)
    if let Some(map_path_str) = map {
        let map_path = PathBuf::from(map_path_str);
        write_source_map(&source_map[..], &map_path)
            .map_err(|err| Error::Io(err, IOErrorContext::WriteOutput, map_path))?;
    }

    Ok(())
}

fn write_source_map(source_map: &[SourceMapItem], path: &PathBuf) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for item in source_map.iter() {
        writer.write_u32::<Endian>(item.line)?;
    }
    writer.flush()
}
