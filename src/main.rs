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

use std::io::BufRead;
use std::path::PathBuf;
use std::{process::ExitCode, ffi::OsString};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tts_cepat::config::Config;
use tts_cepat::dictionary::{Dictionary, WordList};
use tts_cepat::grid::{Coordinate, BACKGROUND};
use tts_cepat::level::{self, Level};
use tts_cepat::logging;
use tts_cepat::progress::Progress;
use tts_cepat::session::{
    Event, HintOutcome, PuzzleSession, ShuffleOutcome, SubmitOutcome,
};

#[derive(Parser)]
#[command(name = "tts-play")]
struct Cli {
    #[arg(value_name = "LEVEL_FILE")]
    level_file: Option<OsString>,
    #[arg(short = 'L', long, value_name = "DIR", default_value = "levels")]
    levels_dir: PathBuf,
    #[arg(short = 'n', long, value_name = "ID", default_value_t = 1)]
    level_id: u32,
    #[arg(short, long, value_name = "FILE")]
    dictionary: Option<OsString>,
    #[arg(short, long, value_name = "FILE")]
    config: Option<OsString>,
    #[arg(short, long, value_name = "FILE")]
    progress: Option<OsString>,
    #[arg(short, long)]
    seed: Option<u64>,
    #[arg(short, long)]
    verbose: bool,
}

fn print_board<D, R>(session: &PuzzleSession<D, R>) {
    let grid = &session.level().grid;

    for (row, cells) in grid.rows().enumerate() {
        let line = cells.iter().enumerate().map(|(col, &ch)| {
            if ch == BACKGROUND {
                ' '
            } else if session.is_revealed(
                Coordinate::new(row as u32, col as u32)
            ) {
                ch
            } else {
                '_'
            }
        }).collect::<String>();

        println!("  {}", line.trim_end());
    }

    println!();

    let tiles = session.tiles().map(|tile| {
        if tile.used {
            "·".to_string()
        } else {
            tile.letter.to_string()
        }
    }).collect::<Vec<_>>();

    println!("  {}", tiles.join(" "));
    println!(
        "  score {}  words {}/{}  hints {}  shuffles {}",
        session.score(),
        session.n_words_found(),
        session.total_n_words(),
        session.hints_remaining(),
        session.shuffles_remaining(),
    );
}

// Events carry the running score, so the points for each one are the
// difference from the score before it.
fn points(score: u32, last_score: &mut u32) -> u32 {
    let gained = score.saturating_sub(*last_score);
    *last_score = score;
    gained
}

// Returns the level id and final score if the level was won
fn report_events<D, R>(
    session: &mut PuzzleSession<D, R>,
    mut last_score: u32,
) -> Option<(u32, u32)> {
    let mut won = None;

    for event in session.pending_events() {
        match event {
            Event::WordFound { word, score, .. } => {
                println!(
                    "{}! +{} points",
                    word,
                    points(score, &mut last_score),
                );
            },
            Event::WordRejected { word } => {
                if session.is_found(&word) {
                    println!("{} was already found", word);
                } else {
                    println!("{} is not in this level", word);
                }
            },
            Event::BonusWordFound { word, score } => {
                println!(
                    "Bonus! {} is in the dictionary, +{} points",
                    word,
                    points(score, &mut last_score),
                );
            },
            Event::HintUsed { coordinate } => {
                println!("Revealed a letter at {}", coordinate);
            },
            Event::DataIntegrityWarning { word } => {
                eprintln!("warning: {} is missing from the grid", word);
            },
            Event::LevelWon { level_id, score } => {
                won = Some((level_id, score));
            },
        }
    }

    won
}

fn play<D: Dictionary>(
    session: &mut PuzzleSession<D, StdRng>,
) -> Result<Option<(u32, u32)>, std::io::Error> {
    print_board(session);

    for line in std::io::stdin().lock().lines() {
        let line = line?;
        let last_score = session.score();
        let input = line.trim().to_uppercase();

        match input.as_str() {
            "" => continue,
            "!QUIT" => return Ok(None),
            "!HINT" => match session.use_hint() {
                HintOutcome::Revealed(_) => (),
                HintOutcome::NoHintsLeft => println!("No hints left"),
                HintOutcome::NothingToReveal => {
                    println!("There is nothing left to reveal")
                },
                HintOutcome::AllWordsFound => {
                    println!("All words have been found")
                },
            },
            "!SHUFFLE" => match session.shuffle() {
                ShuffleOutcome::Shuffled => (),
                ShuffleOutcome::NoShufflesLeft => println!("No shuffles left"),
            },
            word => {
                if !session.spell(word) {
                    println!("The letters for {} aren’t available", word);
                } else if session.submit() == SubmitOutcome::Finished {
                    return Ok(None);
                }
            },
        }

        if let Some(result) = report_events(session, last_score) {
            print_board(session);
            return Ok(Some(result));
        }

        print_board(session);
    }

    Ok(None)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    logging::init(cli.verbose);

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

    let level_file = cli.level_file.clone()
        .unwrap_or_else(|| {
            cli.levels_dir.join(level::file_name(cli.level_id)).into()
        });

    let level = match Level::load(&level_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("{}: {}", level_file.to_string_lossy(), e);
            return ExitCode::FAILURE;
        },
    };

    let dictionary = match cli.dictionary.as_ref().map(WordList::load) {
        None => WordList::new(),
        Some(Ok(d)) => d,
        Some(Err(e)) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        },
    };

    let mut progress = match cli.progress.as_ref() {
        None => Progress::new(),
        Some(filename) => match Progress::load_or_default(filename) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("{}: {}", filename.to_string_lossy(), e);
                return ExitCode::FAILURE;
            },
        },
    };

    if !config.is_level_unlocked(level.id, progress.completed_count()) {
        eprintln!("level {} is not unlocked yet", level.id);
        return ExitCode::FAILURE;
    }

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let already_completed = progress.is_completed(level.id);

    let mut session = PuzzleSession::new(level, dictionary, &config, rng);
    session.set_already_completed(already_completed);

    let result = match play(&mut session) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("stdin: {}", e);
            return ExitCode::FAILURE;
        },
    };

    let Some((level_id, score)) = result
    else {
        return ExitCode::SUCCESS;
    };

    if already_completed {
        println!("Level {} completed again, no extra points", level_id);
    } else {
        println!("Level {} completed! Score: {}", level_id, score);
    }

    progress.record_completion(level_id, score);

    println!("Total score: {}", progress.total_score());

    if let Some(filename) = cli.progress.as_ref() {
        if let Err(e) = progress.save(filename) {
            eprintln!("{}: {}", filename.to_string_lossy(), e);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod test {
    use super::*;

    fn cat_level() -> Level {
        r#"{
            "id": 2,
            "words": ["CAT", "TAC"],
            "random_letters": ["C", "A", "T"],
            "grid": [
                ["C", "A", "T"],
                ["1", "1", "A"],
                ["1", "1", "C"]
            ]
        }"#.parse().unwrap()
    }

    fn word_found_points(config: &Config, already_completed: bool) -> u32 {
        let mut session = PuzzleSession::new(
            cat_level(),
            WordList::new(),
            config,
            StdRng::seed_from_u64(3),
        );
        session.set_already_completed(already_completed);

        session.spell("CAT");
        session.submit();
        let mut last_score = session.score();
        session.pending_events();

        session.spell("TAC");
        session.submit();

        session.pending_events().into_iter().find_map(|event| match event {
            Event::WordFound { score, .. } => {
                Some(points(score, &mut last_score))
            },
            _ => None,
        }).unwrap()
    }

    #[test]
    fn points_follow_score() {
        assert_eq!(word_found_points(&Config::default(), false), 3);
        assert_eq!(word_found_points(&Config::default(), true), 0);

        let capped = Config {
            max_score_value: 4,
            ..Config::default()
        };
        assert_eq!(word_found_points(&capped, false), 1);
    }

    #[test]
    fn points_never_underflow() {
        let mut last_score = 10;
        assert_eq!(points(4, &mut last_score), 0);
        assert_eq!(last_score, 4);
        assert_eq!(points(9, &mut last_score), 5);
    }
}
