extern crate clap;

use std::fs::File;
use std::path::Path;

use clap::{App, Arg};
use gridfill::render::Rendered;
use gridfill::{load_words, solve, Grid, Puzzle};

fn main() -> Result<(), String> {
    let matches = App::new("gridfill")
        .arg(
            Arg::with_name("structure")
                .short("s")
                .long("structure")
                .value_name("FILE")
                .help("Grid structure location")
                .required(true),
        )
        .arg(
            Arg::with_name("words")
                .short("w")
                .long("words")
                .value_name("FILE")
                .help("Word list location")
                .required(true),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .value_name("FILE")
                .help("Write the filled grid to a file"),
        )
        .arg(
            Arg::with_name("profile")
                .short("p")
                .long("profile")
                .takes_value(false),
        )
        .get_matches();

    let structure = matches.value_of("structure").expect("structure not included");
    let structure = std::fs::read_to_string(structure)
        .map_err(|err| format!("Failed to read structure: {}", err))?;
    let grid = Grid::parse(&structure)?;

    let words = matches.value_of("words").expect("words not included");
    let words = load_words(Path::new(words))?;

    if matches.is_present("profile") {
        let guard = pprof::ProfilerGuard::new(100).unwrap();
        std::thread::spawn(move || loop {
            if let Ok(report) = guard.report().build() {
                let file = File::create("flamegraph.svg").unwrap();
                report.flamegraph(file).unwrap();
            }
            std::thread::sleep(std::time::Duration::from_secs(5))
        });
    }

    let puzzle = Puzzle::new(grid, words);

    match solve(&puzzle) {
        Some(assignment) => {
            let rendered = Rendered::new(&puzzle, &assignment);
            println!("{}", rendered);
            if let Some(output) = matches.value_of("output") {
                std::fs::write(output, format!("{}\n", rendered))
                    .map_err(|err| format!("Failed to write output: {}", err))?;
            }
        }
        None => println!("No solution."),
    }

    Ok(())
}
