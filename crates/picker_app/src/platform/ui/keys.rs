use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use picker_core::{AppViewModel, Focus, Msg};

const PAGE_ROWS: i32 = 10;

/// Translate a key press into a selector message, given what is on screen.
pub fn map_key(key: KeyEvent, view: &AppViewModel) -> Option<Msg> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => Some(Msg::Cancelled),
        KeyCode::Char('s') if ctrl => Some(Msg::Confirmed),
        KeyCode::Esc if view.notification.is_some() => Some(Msg::NotificationDismissed),
        KeyCode::Esc => Some(Msg::Cancelled),
        KeyCode::Tab | KeyCode::BackTab => Some(Msg::FocusToggled),
        KeyCode::Up => Some(Msg::CursorMoved(-1)),
        KeyCode::Down => Some(Msg::CursorMoved(1)),
        KeyCode::PageUp => Some(Msg::CursorMoved(-PAGE_ROWS)),
        KeyCode::PageDown => Some(Msg::CursorMoved(PAGE_ROWS)),
        KeyCode::Enter => Some(Msg::ToggleHighlighted),
        KeyCode::Char(' ') if view.focus == Focus::List => {
            view.highlighted_row().map(|row| Msg::SetChecked {
                id: row.id,
                checked: !row.checked,
            })
        }
        KeyCode::Backspace if view.filter.is_empty() => view
            .last_chip()
            .map(|chip| Msg::ToggleSelection { id: chip.id }),
        KeyCode::Backspace => {
            let mut filter = view.filter.clone();
            filter.pop();
            Some(Msg::FilterEdited(filter))
        }
        KeyCode::Char(ch) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            let mut filter = view.filter.clone();
            filter.push(ch);
            Some(Msg::FilterEdited(filter))
        }
        _ => None,
    }
}
