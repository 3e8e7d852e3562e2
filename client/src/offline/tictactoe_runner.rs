use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::time::Instant;
use common::games::SessionRng;
use common::games::tictactoe::{TicTacToeGameState, TicTacToeSettings};

use crate::console::{ConsoleCommand, parse_command, render};

enum Flow {
    Continue(TicTacToeGameState),
    Quit,
}

/// Plays games until the player quits or input ends. The computer's thinking
/// delay races the input stream, so a reset typed during the delay drops the
/// pending computer move.
pub async fn run_tictactoe_game<I, W>(
    settings: &TicTacToeSettings,
    rng: &mut SessionRng,
    input: I,
    output: &mut W,
) -> Result<(), String>
where
    I: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let thinking_delay = Duration::from_millis(settings.thinking_delay_ms);
    let mut state = TicTacToeGameState::new(settings, rng)?;
    let mut redraw = true;
    // Set once per computer turn so input typed during the delay cannot
    // push the computer's move further out.
    let mut deadline: Option<Instant> = None;

    loop {
        if redraw {
            write_out(output, &render(&state))?;
        }
        redraw = true;

        if state.is_computer_turn() && !state.is_game_over() {
            if thinking_delay.is_zero() {
                state = play_computer(&state, rng)?;
                continue;
            }

            let wake_at = *deadline.get_or_insert_with(|| Instant::now() + thinking_delay);
            tokio::select! {
                biased;
                _ = tokio::time::sleep_until(wake_at) => {
                    deadline = None;
                    state = play_computer(&state, rng)?;
                }
                line = lines.next_line() => {
                    let line = line.map_err(|e| format!("Failed to read input: {}", e))?;
                    match handle_line(&state, line, rng, output)? {
                        Flow::Continue(next) => {
                            redraw = next != state;
                            if redraw {
                                deadline = None;
                            }
                            state = next;
                        }
                        Flow::Quit => return Ok(()),
                    }
                }
            }
            continue;
        }

        let line = lines
            .next_line()
            .await
            .map_err(|e| format!("Failed to read input: {}", e))?;
        match handle_line(&state, line, rng, output)? {
            Flow::Continue(next) => state = next,
            Flow::Quit => return Ok(()),
        }
    }
}

fn play_computer(
    state: &TicTacToeGameState,
    rng: &mut SessionRng,
) -> Result<TicTacToeGameState, String> {
    let next = state.play_computer_turn(rng)?;
    if let Some(index) = next.last_move {
        common::log!("Computer placed {} on cell {}", next.computer_mark, index + 1);
    }
    Ok(next)
}

fn handle_line<W: Write>(
    state: &TicTacToeGameState,
    line: Option<String>,
    rng: &mut SessionRng,
    output: &mut W,
) -> Result<Flow, String> {
    let Some(line) = line else {
        return Ok(Flow::Quit);
    };
    if line.trim().is_empty() {
        return Ok(Flow::Continue(*state));
    }

    match parse_command(&line) {
        Ok(ConsoleCommand::Quit) => Ok(Flow::Quit),
        Ok(ConsoleCommand::Reset) => {
            common::log!("Game reset");
            write_out(output, "Game reset\n")?;
            Ok(Flow::Continue(state.reset(rng)))
        }
        Ok(ConsoleCommand::Place(index)) => match state.place_human_mark(index) {
            Ok(next) => Ok(Flow::Continue(next)),
            Err(e) => {
                write_out(output, &format!("{}\n", e))?;
                Ok(Flow::Continue(*state))
            }
        },
        Err(e) => {
            write_out(output, &format!("{}\n", e))?;
            Ok(Flow::Continue(*state))
        }
    }
}

fn write_out<W: Write>(output: &mut W, text: &str) -> Result<(), String> {
    output
        .write_all(text.as_bytes())
        .and_then(|_| output.flush())
        .map_err(|e| format!("Failed to write output: {}", e))
}
