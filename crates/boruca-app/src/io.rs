use boruca_types::{AppEvent, Direction, UiEvent};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::events::handle_event;
use crate::state::AppState;
use crate::ui;

#[derive(Debug, PartialEq)]
pub enum Input {
    Event(UiEvent),
    Unknown(String),
    Empty,
}

/// One line of user input; a leading ':' marks a command, anything else is a query
pub fn parse_input(line: &str) -> Input {
    let line = line.trim_end_matches(['\r', '\n']);

    if line.trim().is_empty() {
        return Input::Empty;
    }

    let Some(command) = line.trim().strip_prefix(':') else {
        return Input::Event(UiEvent::SearchText(line.to_string()));
    };

    match command {
        "quit" | "q" | "salir" => Input::Event(UiEvent::Close),
        "help" | "h" | "ayuda" => Input::Event(UiEvent::Help),
        other => match other.parse::<Direction>() {
            Ok(direction) => Input::Event(UiEvent::SetDirection(direction)),
            Err(_) => Input::Unknown(other.to_string()),
        },
    }
}

/// Read queries until `:quit` or end of input, writing rendered output
pub async fn run_shell<R, W>(
    state: &AppState,
    reader: R,
    mut writer: W,
    interactive: bool,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut direction = Direction::default();
    let mut lines = reader.lines();

    writer.write_all(ui::welcome().as_bytes()).await?;
    writer
        .write_all(ui::footer(&state.config.ui, &state.last_download).as_bytes())
        .await?;

    loop {
        if interactive {
            writer.write_all(ui::prompt(direction).as_bytes()).await?;
        }
        writer.flush().await?;

        let Some(line) = lines.next_line().await? else {
            tracing::debug!("Input closed");
            break;
        };

        let event = match parse_input(&line) {
            Input::Event(event) => event,
            Input::Unknown(command) => {
                writer.write_all(ui::unknown_command(&command).as_bytes()).await?;
                continue;
            }
            Input::Empty => continue,
        };

        let output = match handle_event(state, direction, event) {
            AppEvent::ShowResults { query, view } => ui::results(&query, &view),
            AppEvent::DirectionChanged(next) => {
                direction = next;
                ui::direction_changed(direction)
            }
            AppEvent::ShowHelp => ui::help(),
            AppEvent::Quit => break,
        };

        writer.write_all(output.as_bytes()).await?;
    }

    writer.flush().await?;
    Ok(())
}
