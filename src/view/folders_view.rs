use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::util::{format_size, format_timestamp};
use crate::viewmodel::FoldersViewModel;

use super::ui_fmt;

pub fn render(frame: &mut Frame, vm: &FoldersViewModel, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // List
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_header(frame, vm, chunks[0]);
    render_list(frame, vm, chunks[1]);
    render_footer(frame, chunks[2]);
}

fn render_header(frame: &mut Frame, vm: &FoldersViewModel, area: Rect) {
    let overview = vm.overview();

    let scan_state = if overview.settled < overview.entries {
        format!("scanning {}/{}", overview.settled, overview.entries)
    } else {
        match overview.scanned_at {
            Some(ts) => format!("scanned {}", format_timestamp(ts)),
            None => "idle".to_string(),
        }
    };

    let header = Paragraph::new(vec![Line::from(vec![
        Span::raw("Path: "),
        Span::styled(overview.root.as_str(), Style::default().fg(Color::Yellow)),
        Span::raw(" | Total: "),
        Span::styled(
            format_size(overview.total_size),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(format!(" | sort: {} | {}", vm.sorting().label(), scan_state)),
    ])])
    .block(Block::default().borders(Borders::ALL).title("dirscope"));
    frame.render_widget(header, area);
}

fn render_list(frame: &mut Frame, vm: &FoldersViewModel, area: Rect) {
    let total = vm.overview().total_size;
    let rows = vm.rows();

    let items: Vec<ListItem> = rows
        .iter()
        .map(|entry| {
            let percent = ui_fmt::percent(entry.size, total);
            let bar = ui_fmt::bar(percent, 20);
            let suffix = if entry.is_dir { "/" } else { "" };

            ListItem::new(Line::from(vec![
                Span::styled(
                    ui_fmt::status_glyph(entry.status),
                    Style::default().fg(ui_fmt::status_color(entry.status)),
                ),
                Span::raw(" "),
                Span::styled(
                    format!("{:>12}", format_size(entry.size)),
                    Style::default().fg(ui_fmt::status_color(entry.status)),
                ),
                Span::raw(" "),
                Span::styled(format!("[{}]", bar), Style::default().fg(Color::Blue)),
                Span::raw(format!(" {:>5.1}% ", percent)),
                Span::raw(format!("{}{}", entry.name, suffix)),
            ]))
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(vm.selected_index()));

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Contents ({} items)", rows.len())),
        )
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol(">> ");

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(vec![
        Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
        Span::raw(" nav  "),
        Span::styled("Enter/→", Style::default().fg(Color::Yellow)),
        Span::raw(" enter  "),
        Span::styled("←", Style::default().fg(Color::Yellow)),
        Span::raw(" back  "),
        Span::styled("s", Style::default().fg(Color::Yellow)),
        Span::raw(" sort  "),
        Span::styled("r/R", Style::default().fg(Color::Yellow)),
        Span::raw(" rescan  "),
        Span::styled("t", Style::default().fg(Color::Yellow)),
        Span::raw(" types  "),
        Span::styled("L", Style::default().fg(Color::Yellow)),
        Span::raw(" largest  "),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(" quit"),
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
