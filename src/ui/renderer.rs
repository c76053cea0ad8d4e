use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::{
    app::{App, Pane},
    sequence::Operation,
    ui::{
        create_operation_trigger, get_operation_color, get_toast_color, operation_badge,
        scroll_to_row, text_or_placeholder, top_right, DISABLED,
    },
};

const INPUT_PLACEHOLDER: &str = "Paste DNA sequences, one per line, e.g.\nATCGATCGATCG\nGCTAGCTAGCTA\nTTAACCGGTTAA";
const OUTPUT_PLACEHOLDER: &str = "Results will appear here...";

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Percentage(50),
        ])
        .split(chunks[1]);

    render_title(f, chunks[0]);
    render_input(f, app, panes[0]);
    render_output(f, app, panes[1]);
    render_operations(f, app, chunks[2]);
    render_status_bar(f, app, chunks[3]);
    render_toast(f, app, f.area());
}

fn pane_block(title: Vec<Span<'static>>, focused: bool) -> Block<'static> {
    let border = if focused { Color::Cyan } else { Color::White };
    Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn render_title(f: &mut Frame, area: Rect) {
    let spans = vec![
        Span::styled("dnaflip", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::raw("   "),
        Span::styled("Batch reverse / complement of DNA sequences (IUPAC)", Style::default().fg(Color::Gray)),
    ];

    let title_widget = Paragraph::new(vec![Line::from(spans)])
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title_widget, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Pane::Input;
    let block = pane_block(
        vec![
            Span::raw(" Input sequences "),
            Span::styled("(multi-line) ", Style::default().fg(Color::DarkGray)),
        ],
        focused,
    );
    let inner = block.inner(area);

    let (row, column) = app.cursor_position();
    let scroll = scroll_to_row(row, inner.height);

    let input_widget = Paragraph::new(text_or_placeholder(&app.input, INPUT_PLACEHOLDER))
        .block(block)
        .scroll((scroll, 0));
    f.render_widget(input_widget, area);

    if focused {
        let x = inner.x.saturating_add(column.min(u16::MAX as usize) as u16);
        let y = inner.y + (row as u16).saturating_sub(scroll);
        if x < inner.x + inner.width && y < inner.y + inner.height {
            f.set_cursor_position((x, y));
        }
    }
}

fn render_output(f: &mut Frame, app: &App, area: Rect) {
    let mut title = vec![Span::raw(" Output ")];
    if let Some(badge) = operation_badge(app.operation) {
        title.push(badge);
    }

    let output_widget = Paragraph::new(text_or_placeholder(&app.output, OUTPUT_PLACEHOLDER))
        .block(pane_block(title, app.focus == Pane::Output))
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: false });
    f.render_widget(output_widget, area);
}

fn render_operations(f: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let enabled = app.can_process();
    for (operation, column) in Operation::ALL.into_iter().zip(columns.iter()) {
        let border = if enabled { get_operation_color(operation) } else { DISABLED };
        let trigger = Paragraph::new(create_operation_trigger(operation, enabled))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            );
        f.render_widget(trigger, *column);
    }
}

fn key_hint(key: &'static str, action: &'static str, enabled: bool) -> Vec<Span<'static>> {
    let style = if enabled { Style::default().fg(Color::Yellow) } else { Style::default().fg(DISABLED) };
    vec![Span::styled(key, style), Span::raw(format!(" {action}  "))]
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();
    spans.extend(key_hint("Ctrl-Y", "copy input", app.can_process()));
    spans.extend(key_hint("Ctrl-K", "copy output", app.can_copy_output()));
    spans.extend(key_hint("Ctrl-L", "clear", app.can_process()));
    spans.extend(key_hint("Tab", "switch pane", true));
    spans.extend(key_hint("Esc", "quit", true));

    let status_widget = Paragraph::new(vec![Line::from(spans)])
        .block(Block::default().title("Keys").borders(Borders::ALL));
    f.render_widget(status_widget, area);
}

fn render_toast(f: &mut Frame, app: &App, area: Rect) {
    let Some(toast) = &app.toast else {
        return;
    };

    let color = get_toast_color(toast.kind);
    let width = (toast.message.chars().count().max(toast.title.chars().count()) + 4) as u16;
    let rect = top_right(area, width, 3);

    let toast_widget = Paragraph::new(vec![Line::from(Span::raw(toast.message.clone()))])
        .block(
            Block::default()
                .title(Span::styled(
                    toast.title.clone(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
    f.render_widget(Clear, rect);
    f.render_widget(toast_widget, rect);
}
