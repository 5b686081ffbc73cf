use crate::graph::station::Station;
use crate::routing::cost::edge_cost;
use crate::routing::route::route_path;
use crate::tui::app::{App, Focus, StatusKind};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::Color::White;
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Circle, Context, Line as Track};
use ratatui::widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table, Wrap};

const MAP_MARGIN: f64 = 40.0;
const STATION_RADIUS: f64 = 10.0;

pub fn draw_app(frame: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(10), Constraint::Length(1)])
        .split(frame.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);

    let panel = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(5),
        ])
        .split(columns[1]);

    frame.render_widget(build_header(app), rows[0]);
    frame.render_widget(build_map(app), columns[0]);
    frame.render_widget(
        build_selector(" From Station ", app.from_station(), app.focus == Focus::From),
        panel[0],
    );
    frame.render_widget(
        build_selector(" To Station ", app.to_station(), app.focus == Focus::To),
        panel[1],
    );
    frame.render_widget(build_status(app), panel[2]);
    frame.render_widget(build_route_table(app), panel[3]);
    frame.render_widget(build_help(), rows[2]);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

fn build_header(app: &'_ App) -> Block<'_> {
    Block::new()
        .title(Line::from(vec![
            Span::raw(" Routemap ").style(Style::default().bold().cyan()),
            Span::raw("|").style(Style::default().add_modifier(Modifier::DIM)),
            Span::raw(format!(" {} ", app.title())).style(Style::default().bold()),
        ]))
        .title_alignment(Alignment::Center)
}

fn build_help() -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![
        Span::raw(" Tab").bold(),
        Span::raw(" focus  "),
        Span::raw("↑↓").bold(),
        Span::raw(" select  "),
        Span::raw("Enter").bold(),
        Span::raw(" calculate / highlight  "),
        Span::raw("c").bold(),
        Span::raw(" clear  "),
        Span::raw("q").bold(),
        Span::raw(" quit"),
    ]))
    .style(Style::default().add_modifier(Modifier::DIM))
}

fn build_selector<'a>(title: &'a str, station: Option<&Station>, focused: bool) -> Paragraph<'a> {
    let label = station
        .map(|s| format!("◀ {} ▶", s.name()))
        .unwrap_or_else(|| "no stations".to_string());
    Paragraph::new(label).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(focus_style(focused))
            .title(Span::from(title).bold()),
    )
}

fn build_status(app: &'_ App) -> Paragraph<'_> {
    let (kind, text) = app.status();
    let style = match kind {
        StatusKind::Info => Style::default(),
        StatusKind::Warning => Style::default().yellow(),
        StatusKind::Error => Style::default().red().bold(),
    };
    Paragraph::new(text)
        .style(style)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .padding(Padding::horizontal(1)),
        )
}

fn build_route_table(app: &'_ App) -> Table<'_> {
    let network = app.network();
    let highlighted = app.highlighted_route();
    let focused = app.focus == Focus::Routes;

    Table::new(
        app.routes().iter().enumerate().map(|(i, route)| {
            let marker = if highlighted == Some(route) { "●" } else { " " };
            let style = if focused && i == app.selected() {
                Style::default().bg(Color::DarkGray).fg(White)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(format!("{} {}", marker, i + 1)).style(Style::default().red()),
                Cell::from(route_path(network, route)),
                Cell::from(format!("{:>6.2}", route.cost())),
            ])
            .style(style)
        }),
        [
            Constraint::Length(5),
            Constraint::Min(20),
            Constraint::Length(8),
        ],
    )
    .header(
        Row::new([Cell::from("  #"), Cell::from("Route"), Cell::from("  Cost")])
            .style(Style::default().bg(Color::DarkGray).fg(White)),
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(focus_style(focused))
            .title(Line::from(vec![
                Span::from(" All possible routes ").style(Style::default().bold()),
            ]))
            .padding(Padding::horizontal(1)),
    )
}

/// Canvas bounds around all stations. Map y grows downwards, canvas y upwards.
fn map_bounds(stations: &[Station]) -> ([f64; 2], [f64; 2]) {
    if stations.is_empty() {
        return ([0.0, 1.0], [0.0, 1.0]);
    }
    let (mut min_x, mut max_x, mut min_y, mut max_y) = (f64::MAX, f64::MIN, f64::MAX, f64::MIN);
    for (x, y) in stations.iter().map(|s| s.position()) {
        min_x = min_x.min(x);
        max_x = max_x.max(x);
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }
    (
        [min_x - MAP_MARGIN, max_x + MAP_MARGIN],
        [min_y - MAP_MARGIN, max_y + MAP_MARGIN],
    )
}

fn paint_map(ctx: &mut Context, app: &App, flip: f64) {
    let network = app.network();
    let point = |s: &Station| {
        let (x, y) = s.position();
        (x, flip - y)
    };

    let highlighted = app.highlighted_route();
    let mut legs = Vec::new();

    for c in network.connections() {
        let (Some(a), Some(b)) = (network.station(c.from()), network.station(c.to())) else {
            continue;
        };
        let ((x1, y1), (x2, y2)) = (point(a), point(b));
        if highlighted.is_some_and(|r| r.uses_leg(a.id(), b.id())) {
            legs.push((x1, y1, x2, y2));
        } else {
            ctx.draw(&Track::new(x1, y1, x2, y2, Color::Gray));
        }
        if let Ok(cost) = edge_cost(network, a.id(), b.id()) {
            ctx.print(
                (x1 + x2) / 2.0,
                (y1 + y2) / 2.0,
                Span::styled(format!("{:.2}", cost), Style::default().fg(Color::Blue)),
            );
        }
    }

    // highlighted legs go above the gray network
    ctx.layer();
    for (x1, y1, x2, y2) in legs {
        ctx.draw(&Track::new(x1, y1, x2, y2, Color::Red));
    }

    ctx.layer();
    for s in network.stations() {
        let (x, y) = point(s);
        ctx.draw(&Circle {
            x,
            y,
            radius: STATION_RADIUS,
            color: White,
        });
        ctx.print(
            x - STATION_RADIUS,
            y + STATION_RADIUS * 1.5,
            Span::styled(s.name().to_string(), Style::default().bold()),
        );
    }
}

fn build_map(app: &'_ App) -> Canvas<'_, impl Fn(&mut Context) + '_> {
    let (x_bounds, y_bounds) = map_bounds(app.network().stations());
    let flip = y_bounds[0] + y_bounds[1];

    Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::from(" Map ").bold()),
        )
        .marker(Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(move |ctx| paint_map(ctx, app, flip))
}
