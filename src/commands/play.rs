//! Interactive terminal game
//!
//! Reads guesses line by line, submits them to an in-process `GameService`
//! and prints colored feedback, the replayed history and the keyboard.

use crate::game::{GameService, Variant};
use crate::output::formatters::colorize_feedback;
use crate::output::keyboard::KeyboardState;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Play one game, reading from `input` and writing to `output`
///
/// Returns when the game ends, the player types `quit`/`exit`, or input
/// runs out.
///
/// # Errors
///
/// Returns an error on I/O failure or if the service cannot start or
/// advance the game.
pub fn run_play<R: BufRead, W: Write>(
    service: &GameService,
    variant: Variant,
    mut input: R,
    mut output: W,
) -> Result<()> {
    let title = match variant {
        Variant::Absurdle => "Absurdle",
        Variant::Wordle => "Wordle",
    };
    writeln!(output, "Welcome to {title}!")?;
    writeln!(output, "Type 'quit' to leave.")?;

    let game_id = service
        .create_game(variant)
        .context("failed to start a game")?
        .game_state
        .id;

    loop {
        let state = service.get_game(&game_id)?;

        writeln!(output, "\nRound {}/{}", state.round + 1, state.max_rounds)?;
        for past in &state.history {
            writeln!(output, "{}", colorize_feedback(past))?;
        }
        if !state.history.is_empty() {
            writeln!(output, "\n{}\n", KeyboardState::from_history(&state.history).render())?;
        }

        write!(output, "Enter a 5-letter word: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line).context("failed to read guess")? == 0 {
            writeln!(output, "\nGoodbye!")?;
            return Ok(());
        }
        let guess = line.trim().to_lowercase();

        if guess == "quit" || guess == "exit" {
            writeln!(output, "Goodbye!")?;
            return Ok(());
        }

        let response = service.submit_guess(&game_id, &guess)?;
        if !response.success {
            writeln!(output, "{}", response.message)?;
            continue;
        }

        if let Some(result) = &response.result {
            writeln!(output, "{}", colorize_feedback(result))?;
        }

        if response.game_over {
            if response.won {
                writeln!(output, "Congratulations! You guessed the word.")?;
            } else if let Some(answer) = &response.answer {
                writeln!(output, "Game over! The word was: {}", answer.to_uppercase())?;
            } else {
                writeln!(output, "Game over! You ran out of guesses.")?;
            }
            return Ok(());
        }
    }
}
