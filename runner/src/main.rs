#[macro_use]
extern crate clap;

use clap::{Arg, ArgGroup};
use std::process;
use um::ExitCode;

fn main() {
    let matches = app_from_crate!()
        .arg(
            Arg::with_name("STONE")
                .help("Sets the stone file to run")
                .index(1),
        )
        .arg(
            Arg::with_name("assembly")
                .short("a")
                .long("assembly")
                .takes_value(true)
                .value_name("SCROLL")
                .help("Sets the scroll file to assemble and run"),
        )
        .group(
            ArgGroup::with_name("input")
                .args(&["STONE", "assembly"])
                .required(true),
        )
        .get_matches();

    let result = match matches.value_of("STONE") {
        Some(stone) => runner::run_stone(stone),

        None => {
            let scroll = matches.value_of("assembly").unwrap();
            runner::run_scroll(scroll)
        }
    };

    match result {
        Ok(ExitCode::Halted) => {}
        Ok(exit_code) => {
            eprintln!("The machine failed ({:?}).", exit_code);
            process::exit(1);
        }
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    }
}
