use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::util::{format_size, format_timestamp};
use crate::viewmodel::FilesViewModel;

pub fn render(frame: &mut Frame, vm: &FilesViewModel, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let total: u64 = vm.files().iter().map(|f| f.size).sum();
    let header = Paragraph::new(Line::from(vec![
        Span::raw("Largest files | top "),
        Span::raw(vm.files().len().to_string()),
        Span::raw(" hold "),
        Span::styled(format_size(total), Style::default().fg(Color::Cyan)),
    ]))
    .block(Block::default().borders(Borders::ALL).title("dirscope"));
    frame.render_widget(header, chunks[0]);

    let items: Vec<ListItem> = vm
        .files()
        .iter()
        .map(|file| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>12}", format_size(file.size)),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw("  "),
                Span::styled(
                    format_timestamp(file.modified),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw("  "),
                Span::raw(file.path.clone()),
            ]))
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(vm.selected_index()));

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Largest files"))
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol(">> ");
    frame.render_stateful_widget(list, chunks[1], &mut list_state);

    let footer = Paragraph::new(Line::from(vec![
        Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
        Span::raw(" nav  "),
        Span::styled("L/Esc", Style::default().fg(Color::Yellow)),
        Span::raw(" folders  "),
        Span::styled("t", Style::default().fg(Color::Yellow)),
        Span::raw(" types  "),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(" quit"),
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, chunks[2]);
}
