use common::games::tictactoe::{CELL_COUNT, Mark, TicTacToeGameState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    Place(usize),
    Reset,
    Quit,
}

/// Cells are numbered 1-9 on screen and 0-8 in the engine.
pub fn parse_command(input: &str) -> Result<ConsoleCommand, String> {
    let input = input.trim();
    match input.to_ascii_lowercase().as_str() {
        "r" | "reset" => return Ok(ConsoleCommand::Reset),
        "q" | "quit" => return Ok(ConsoleCommand::Quit),
        _ => {}
    }

    match input.parse::<usize>() {
        Ok(cell) if (1..=CELL_COUNT).contains(&cell) => Ok(ConsoleCommand::Place(cell - 1)),
        _ => Err(format!(
            "Unknown command '{}': enter 1-9 to place, r to reset, q to quit",
            input
        )),
    }
}

fn cell_symbol(mark: Mark, index: usize) -> String {
    match mark {
        Mark::Cow => "C".to_string(),
        Mark::Milk => "M".to_string(),
        Mark::Empty => (index + 1).to_string(),
    }
}

pub fn render_board(state: &TicTacToeGameState) -> String {
    let rows: Vec<String> = state
        .board
        .cells()
        .chunks(3)
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, &mark)| {
                    let index = row * 3 + col;
                    let symbol = cell_symbol(mark, index);
                    if state.is_highlighted(index) {
                        format!("[{}]", symbol)
                    } else {
                        format!(" {} ", symbol)
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    rows.join("\n---+---+---\n")
}

pub fn render(state: &TicTacToeGameState) -> String {
    let mut text = format!("{}\n\n{}\n", render_board(state), state.status_text());
    if state.is_game_over() {
        text.push_str("Press r to play again or q to quit\n");
    }
    text
}
