use boruca_core::{format, search};
use boruca_types::{AppEvent, Direction, UiEvent};

use crate::state::AppState;

/// Turn one user action into the event the UI should render
pub fn handle_event(state: &AppState, direction: Direction, event: UiEvent) -> AppEvent {
    match event {
        UiEvent::SearchText(text) => {
            tracing::debug!("Searching '{}' ({})", text, direction);

            let matches = search(&text, direction, &state.dataset);
            let view = format(&matches);

            tracing::debug!("{} groups for '{}'", view.len(), text);
            AppEvent::ShowResults { query: text, view }
        }
        UiEvent::SetDirection(direction) => AppEvent::DirectionChanged(direction),
        UiEvent::Help => AppEvent::ShowHelp,
        UiEvent::Close => AppEvent::Quit,
    }
}
