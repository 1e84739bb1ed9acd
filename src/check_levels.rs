// TTS Cepat – A crossword word game
// Copyright (C) 2024  Neil Roberts
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use std::{process::ExitCode, ffi::OsString};
use clap::Parser;
use log::{debug, warn};
use tts_cepat::config::Config;
use tts_cepat::dictionary::{Dictionary, WordList};
use tts_cepat::directions::Direction;
use tts_cepat::level::{self, Level};
use tts_cepat::logging;
use tts_cepat::word_finder;

#[derive(Parser)]
#[command(name = "check-levels")]
struct Cli {
    #[arg(required = true, value_name = "LEVEL_FILE")]
    levels: Vec<OsString>,
    #[arg(short, long, value_name = "FILE")]
    dictionary: Option<OsString>,
    #[arg(short, long, value_name = "FILE")]
    config: Option<OsString>,
    #[arg(short = 'H', long)]
    human_readable: bool,
    #[arg(long)]
    format: bool,
    #[arg(short, long)]
    verbose: bool,
}

fn direction_name(direction: Direction) -> &'static str {
    match direction {
        Direction::Across => "across",
        Direction::Down => "down",
    }
}

fn print_human_readable(level: &Level, dictionary: Option<&WordList>) {
    println!("Level {}\n", level.id);

    for line in level.grid.to_string().lines() {
        println!("  {}", line);
    }

    println!(
        "\nLetters: {}\n",
        level.random_letters.iter().collect::<String>(),
    );

    let longest = level.words.iter()
        .map(|word| word.chars().count())
        .max()
        .unwrap_or(0);

    for word in level.words.iter() {
        print!("{:<width$} ", word, width = longest);

        match word_finder::find(&level.grid, word) {
            Some(placement) => print!(
                "{} {}",
                placement.start,
                direction_name(placement.direction),
            ),
            None => print!("missing"),
        }

        if let Some(dictionary) = dictionary {
            if !dictionary.contains(word) {
                print!(" (not in dictionary)");
            }
        }

        println!();
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    let dictionary = match cli.dictionary.as_ref().map(WordList::load) {
        None => None,
        Some(Ok(d)) => Some(d),
        Some(Err(e)) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        },
    };

    let config = match cli.config.as_ref() {
        None => Config::default(),
        Some(filename) => match Config::load(filename) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{}: {}", filename.to_string_lossy(), e);
                return ExitCode::FAILURE;
            },
        },
    };

    let mut ok = true;

    for (i, filename) in cli.levels.iter().enumerate() {
        let level = match Level::load(filename) {
            Ok(l) => l,
            Err(e) => {
                eprintln!("{}: {}", filename.to_string_lossy(), e);
                ok = false;
                continue;
            },
        };

        debug!(
            "{}: level {} with {} words",
            filename.to_string_lossy(),
            level.id,
            level.words.len(),
        );

        for problem in level.validate(config.min_level_id) {
            eprintln!("{}: {}", filename.to_string_lossy(), problem);
            ok = false;
        }

        let expected_name = level::file_name(level.id);

        if !filename.to_string_lossy().ends_with(&expected_name) {
            warn!(
                "{}: level {} would normally be stored in {}",
                filename.to_string_lossy(),
                level.id,
                expected_name,
            );
        }

        if cli.format {
            println!("{}", level);
        } else if cli.human_readable {
            if i > 0 {
                println!();
            }
            print_human_readable(&level, dictionary.as_ref());
        }
    }

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
