use picker_core::{AppViewModel, CharacterRowView, Focus, ListView, SelectedCharacter};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use super::constants::*;

pub fn draw(frame: &mut Frame<'_>, view: &AppViewModel) {
    let areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.size());

    draw_input(frame, areas[0], view);
    frame.render_widget(Paragraph::new(chips_line(&view.selected)), areas[1]);
    draw_list(frame, areas[2], view);
    frame.render_widget(Paragraph::new(footer_line(view)), areas[3]);
}

fn border_style(active: bool) -> Style {
    if active {
        Style::default().fg(FOCUS_COLOR)
    } else {
        Style::default().fg(IDLE_BORDER_COLOR)
    }
}

fn draw_input(frame: &mut Frame<'_>, area: Rect, view: &AppViewModel) {
    let focused = view.focus == Focus::Input;
    let input = Paragraph::new(view.filter.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(INPUT_TITLE)
            .border_style(border_style(focused)),
    );
    frame.render_widget(input, area);

    if focused {
        frame.set_cursor(cursor_column(area, &view.filter), area.y + 1);
    }
}

/// Column after the filter text, measured in display cells and kept inside
/// the input border.
fn cursor_column(area: Rect, filter: &str) -> u16 {
    let width = u16::try_from(Line::from(filter).width()).unwrap_or(u16::MAX);
    area.x + 1 + width.min(area.width.saturating_sub(3))
}

fn draw_list(frame: &mut Frame<'_>, area: Rect, view: &AppViewModel) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(LIST_TITLE)
        .border_style(border_style(view.focus == Focus::List));

    match &view.list {
        ListView::Skeleton { rows } => {
            let items: Vec<ListItem> = (0..*rows).map(|_| skeleton_item()).collect();
            frame.render_widget(List::new(items).block(block), area);
        }
        ListView::Empty { text } => {
            let empty = Paragraph::new(Span::styled(text.clone(), Style::default().fg(MUTED_COLOR)))
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(empty, area);
        }
        ListView::Rows(rows) => {
            let items: Vec<ListItem> = rows.iter().map(row_item).collect();
            let mut state = ListState::default();
            state.select(rows.iter().position(|row| row.highlighted));
            let highlight = if view.focus == Focus::List {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default().bg(Color::Black)
            };
            let list = List::new(items).block(block).highlight_style(highlight);
            frame.render_stateful_widget(list, area, &mut state);
        }
    }
}

fn skeleton_item() -> ListItem<'static> {
    let style = Style::default().fg(IDLE_BORDER_COLOR);
    ListItem::new(vec![
        Line::from(vec![
            Span::styled("[ ] ", style),
            Span::styled(SKELETON_TEXT, style),
        ]),
        Line::from(Span::styled(format!("    {SKELETON_SHORT_TEXT}"), style)),
    ])
}

fn row_item(row: &CharacterRowView) -> ListItem<'static> {
    ListItem::new(vec![
        row_line(row),
        Line::from(Span::styled(
            format!("    {}", row.episode_label),
            Style::default().fg(MUTED_COLOR),
        )),
    ])
}

/// Checkbox plus the name, with filter matches in bold.
pub fn row_line(row: &CharacterRowView) -> Line<'static> {
    let checkbox = if row.checked { "[x] " } else { "[ ] " };
    let mut spans = vec![Span::raw(checkbox)];
    spans.extend(row.segments.iter().map(|segment| {
        if segment.matched {
            Span::styled(
                segment.text.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )
        } else {
            Span::raw(segment.text.clone())
        }
    }));
    Line::from(spans)
}

fn chips_line(selected: &[SelectedCharacter]) -> Line<'static> {
    if selected.is_empty() {
        return Line::from(Span::styled(
            "no selection",
            Style::default().fg(IDLE_BORDER_COLOR),
        ));
    }
    let mut spans = Vec::with_capacity(selected.len() * 2);
    for chip in selected {
        spans.push(Span::styled(
            format!("[{}]", chip.name),
            Style::default().fg(CHIP_COLOR),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn footer_line(view: &AppViewModel) -> Line<'static> {
    match &view.notification {
        Some(toast) => Line::from(vec![
            Span::styled(
                format!("{}: ", toast.title),
                Style::default().fg(TOAST_COLOR).add_modifier(Modifier::BOLD),
            ),
            Span::styled(toast.message.clone(), Style::default().fg(TOAST_COLOR)),
        ]),
        None => Line::from(Span::styled(FOOTER_HELP, Style::default().fg(MUTED_COLOR))),
    }
}
