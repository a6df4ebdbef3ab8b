use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::util::format_size;
use crate::viewmodel::TypesViewModel;

use super::ui_fmt;

pub fn render(frame: &mut Frame, vm: &TypesViewModel, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let header = Paragraph::new(Line::from(vec![
        Span::raw("By type | "),
        Span::styled(
            format_size(vm.total_size()),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(format!(" in {} files (completed passes)", vm.total_files())),
    ]))
    .block(Block::default().borders(Borders::ALL).title("dirscope"));
    frame.render_widget(header, chunks[0]);

    let total = vm.total_size();
    let items: Vec<ListItem> = vm
        .rows()
        .iter()
        .map(|row| {
            let percent = ui_fmt::percent(row.size, total);
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>12}", format_size(row.size)),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(" "),
                Span::styled(
                    format!("[{}]", ui_fmt::bar(percent, 20)),
                    Style::default().fg(Color::Blue),
                ),
                Span::raw(format!(" {:>6} files  ", row.file_count)),
                Span::raw(row.tag.clone()),
            ]))
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(vm.selected_index()));

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Types ({})", vm.rows().len())),
        )
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol(">> ");
    frame.render_stateful_widget(list, chunks[1], &mut list_state);

    let footer = Paragraph::new(Line::from(vec![
        Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
        Span::raw(" nav  "),
        Span::styled("t/Esc", Style::default().fg(Color::Yellow)),
        Span::raw(" folders  "),
        Span::styled("L", Style::default().fg(Color::Yellow)),
        Span::raw(" largest  "),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(" quit"),
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, chunks[2]);
}
