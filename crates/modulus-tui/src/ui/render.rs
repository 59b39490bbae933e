use super::content::{build_step_lines, expected_actions, status_message};
use super::sidebar::build_step_sidebar;
use super::super::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let progress = app.wizard.progress();

    // Main layout: Title | Main Body | Progress Bar (steps 2-5 only) | Key Legend
    let mut constraints = vec![
        Constraint::Length(3), // Title bar
        Constraint::Min(10),   // Main body
    ];
    if progress.visible {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Length(4)); // Key legend
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(constraints)
        .split(f.area());

    let title_line = Line::from(vec![
        Span::styled(app.brand.clone(), Style::default().fg(Color::Cyan)),
        Span::raw(" | "),
        Span::styled("Merchant Onboarding", Style::default().fg(Color::White)),
    ]);
    let title = Block::default().borders(Borders::ALL).title(title_line);
    f.render_widget(title, main_chunks[0]);

    // Two-panel layout: Sidebar | Content
    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25), Constraint::Percentage(75)])
        .split(main_chunks[1]);

    let sidebar = Paragraph::new(build_step_sidebar(app))
        .block(Block::default().borders(Borders::ALL).title("Steps"));
    f.render_widget(sidebar, body_chunks[0]);

    let content_area = slide(body_chunks[1], app);
    let list_items = build_step_lines(app)
        .into_iter()
        .map(ListItem::new)
        .collect::<Vec<_>>();
    let content = List::new(list_items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(app.current_step().title()),
    );
    f.render_widget(content, content_area);

    let mut next = 2;
    if progress.visible {
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title("Progress"))
            .gauge_style(Style::default().fg(Color::Blue))
            .label(format!("{}/{}", progress.position, progress.total))
            .percent(progress.percent());
        f.render_widget(gauge, main_chunks[next]);
        next += 1;
    }

    let legend_text = format!("{}\n{}", status_message(app), expected_actions(app));
    let footer = Line::from(Span::styled(
        format!(" Powered by {} ", app.brand),
        Style::default().fg(Color::DarkGray),
    ))
    .alignment(Alignment::Right);
    let legend = Paragraph::new(legend_text).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Keys")
            .title_bottom(footer),
    );
    f.render_widget(legend, main_chunks[next]);
}

/// Shift the content panel right while a step transition is running.
fn slide(area: Rect, app: &App) -> Rect {
    let offset = app
        .transition
        .as_ref()
        .map(|t| t.offset(area.width))
        .unwrap_or(0);
    Rect {
        x: area.x + offset,
        width: area.width.saturating_sub(offset),
        ..area
    }
}
