use crate::graph::node::NodeIndex;
use crate::tui::app::App;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::Color::White;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table, Wrap};

pub fn draw_app(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(frame.area());

    frame.render_widget(build_header(app), chunks[0]);
    frame.render_widget(build_queue(app), chunks[2]);
    frame.render_widget(build_last_step(app), chunks[3]);
    frame.render_widget(build_node_table(app), chunks[4]);
    frame.render_widget(build_footer(), chunks[5]);
}

fn label(app: &App, index: NodeIndex) -> String {
    app.traversal.graph().node(index).id().to_string()
}

fn build_header<'a>(app: &'a App) -> Block<'a> {
    let traversal = &app.traversal;
    let status = if traversal.is_finished() {
        Span::raw(format!(" result {} ", traversal.outcome())).style(Style::default().bold().green())
    } else {
        Span::raw(" running ").style(Style::default().yellow())
    };
    Block::new()
        .title(Line::from(vec![
            Span::raw(" relaxpath ").style(Style::default().bold().cyan()),
            Span::raw(format!(
                " case {}: {} -> {} ",
                app.case(),
                app.query().source,
                app.query().destination
            )),
            Span::raw(" Dequeued: ").style(Style::default().add_modifier(Modifier::DIM)),
            Span::raw(format!("{}", traversal.stats().dequeued)).style(Style::default().bold()),
            Span::raw(" "),
            status,
        ]))
        .title_alignment(Alignment::Center)
}

fn build_queue<'a>(app: &'a App) -> Paragraph<'a> {
    let entries = app
        .traversal
        .queue()
        .iter()
        .map(|index| label(app, *index))
        .collect::<Vec<String>>()
        .join(" ");
    Paragraph::new(if entries.is_empty() { "(empty)".to_string() } else { entries })
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Line::from(vec![
                    Span::from(" Queue ").style(Style::default().bold()),
                    Span::from(format!("{} ", app.traversal.queue().len())),
                ]))
                .padding(Padding::horizontal(1)),
        )
}

fn build_last_step<'a>(app: &'a App) -> Paragraph<'a> {
    let text = match app.traversal.last_step() {
        None => "nothing dequeued yet".to_string(),
        Some(step) => {
            let relaxed = step
                .relaxed()
                .iter()
                .map(|index| {
                    let state = &app.traversal.states()[index.index()];
                    format!("{}={}", label(app, *index), state.cost())
                })
                .collect::<Vec<String>>();
            format!(
                "dequeued {} at cost {}, relaxed: {}",
                label(app, step.node()),
                step.cost(),
                if relaxed.is_empty() { "none".to_string() } else { relaxed.join(", ") }
            )
        }
    };
    Paragraph::new(text).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Line::from(vec![Span::from(" Last step ").style(Style::default().bold())]))
            .padding(Padding::horizontal(1)),
    )
}

fn build_node_table<'a>(app: &'a App) -> Table<'a> {
    let traversal = &app.traversal;
    let graph = traversal.graph();
    let current = traversal.last_step().map(|s| s.node());

    Table::new(
        traversal.states().iter().enumerate().map(|(i, state)| {
            let index = NodeIndex(i);
            let role = if index == traversal.source() {
                "source"
            } else if index == traversal.destination() {
                "destination"
            } else {
                ""
            };
            let style = if Some(index) == current {
                Style::default().bold().cyan()
            } else if state.is_visited() {
                Style::default()
            } else {
                Style::default().add_modifier(Modifier::DIM)
            };

            Row::new(vec![
                Cell::from(graph.node(index).id().to_string()),
                Cell::from(role),
                Cell::from(if state.is_visited() { "visited" } else { "unvisited" }),
                Cell::from(if state.is_visited() {
                    format!("{:>8}", state.cost())
                } else {
                    format!("{:>8}", "-")
                }),
                Cell::from(format!("{:>5}", state.times_dequeued())),
                Cell::from(format!("{:>5}", graph.outgoing(index).len())),
            ])
            .style(style)
        }),
        [
            Constraint::Length(8),
            Constraint::Length(12),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(7),
            Constraint::Length(7),
        ],
    )
    .header(
        Row::new([
            Cell::from("ID"),
            Cell::from("Role"),
            Cell::from("State"),
            Cell::from("    Cost"),
            Cell::from("Deq"),
            Cell::from("Out"),
        ])
        .style(Style::default().bg(Color::DarkGray).fg(White)),
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(Line::from(vec![Span::from(" Nodes ").style(Style::default().bold())]))
            .padding(Padding::horizontal(1)),
    )
}

fn build_footer() -> Line<'static> {
    Line::from(" space: step   r: run   q: quit ").style(Style::default().add_modifier(Modifier::DIM))
}
