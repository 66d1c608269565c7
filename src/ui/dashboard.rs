use crate::engine::format::{format_area, format_pct};
use crate::engine::{ChartDisplayModel, ChartKind, DirectoryModel, GroupBody, Listing, SeriesColor};
use crate::model::StatsScope;
use crate::ui::app::{App, FocusPanel};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Bar, BarChart, BarGroup, Block, Borders, List, ListItem, Paragraph, Wrap,
    },
    Frame,
};
use std::f64::consts::TAU;

// Brandbook colors
const BRAND_DARK: Color = Color::Rgb(0x1F, 0x2F, 0x3C); // #1f2f3c - main dark
const BRAND_ACCENT: Color = Color::Rgb(0x58, 0x6B, 0x71); // #586b71 - blue accent (reserved)
const BRAND_SELECT_BG: Color = Color::Rgb(0xC3, 0xD3, 0xE0); // #c3d3e0 - selection background
const BRAND_GREEN: Color = Color::Rgb(0x82, 0x9A, 0x68); // #829a68 - green (occupied)
const BRAND_ORANGE: Color = Color::Rgb(0x9E, 0x68, 0x3C); // #9e683c - orange (remaining, focus)
const BRAND_MUTED: Color = Color::Rgb(0x71, 0x65, 0x65); // #716565 - muted (footer)
const BRAND_GREY: Color = Color::Rgb(0xA9, 0xA9, 0xA9); // #a9a9a9 - reserved among bars

// Styles
const HEADER_STYLE: Style = Style::new().fg(BRAND_DARK).add_modifier(Modifier::BOLD);
const SELECTED_STYLE: Style = Style::new()
    .bg(BRAND_SELECT_BG)
    .fg(BRAND_DARK)
    .add_modifier(Modifier::BOLD);
const RESERVED_TAG_STYLE: Style = Style::new().fg(BRAND_ACCENT).add_modifier(Modifier::BOLD);

const STACK_CELL: &str = "█";

fn series_color(color: SeriesColor) -> Color {
    match color {
        SeriesColor::Occupied => BRAND_GREEN,
        SeriesColor::Remaining => BRAND_ORANGE,
        SeriesColor::Reserved => BRAND_ACCENT,
        SeriesColor::ReservedMuted => BRAND_GREY,
    }
}

fn panel_block(title: String, is_focused: bool) -> Block<'static> {
    let border_style = if is_focused {
        Style::default().fg(BRAND_ORANGE)
    } else {
        Style::default()
    };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

pub fn draw_dashboard(frame: &mut Frame, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(12),   // Floors | Chart | Companies
        Constraint::Length(4), // Summary tiles
        Constraint::Length(3), // Tooltip / status
        Constraint::Length(3), // Footer
    ])
    .split(frame.area());

    let chart = app.engine.chart();

    draw_header(frame, chunks[0], app);
    draw_main_content(frame, chunks[1], app, &chart);
    draw_summary(frame, chunks[2], app);
    draw_status(frame, chunks[3], app, &chart);
    draw_footer(
        frame,
        chunks[4],
        " ←→ Panel | ↑↓ Move | Enter Select | m/1-3 Chart | a All Floors | q Quit ",
    );
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let selection = app.engine.selection();
    let title = format!(
        " Floor Allocation Dashboard | {} | {} | {} floors ({} reserved) ",
        selection.scope(),
        selection.mode(),
        app.engine.registry().len(),
        app.engine.aggregate().blocked_floors.len()
    );

    let header = Paragraph::new(title)
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

fn draw_main_content(frame: &mut Frame, area: Rect, app: &App, chart: &ChartDisplayModel) {
    let chunks = Layout::horizontal([
        Constraint::Percentage(18), // Floors
        Constraint::Percentage(52), // Chart
        Constraint::Percentage(30), // Companies
    ])
    .split(area);

    draw_floors(frame, chunks[0], app);
    draw_chart(frame, chunks[1], app, chart);
    draw_directory(frame, chunks[2], app);
}

fn draw_floors(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus_panel == FocusPanel::Floors;
    let selected_scope = app.engine.selection().scope();
    let aggregate = app.engine.aggregate();

    // "All Floors" first (index 0), then the roster (index 1+)
    let entries = std::iter::once(("All Floors", selected_scope.is_all(), false)).chain(
        app.engine.registry().floors().iter().map(|f| {
            (
                f.floor_name.as_str(),
                selected_scope.floor_name() == Some(f.floor_name.as_str()),
                aggregate.is_blocked(&f.floor_name),
            )
        }),
    );

    let items: Vec<ListItem> = entries
        .enumerate()
        .map(|(i, (name, is_selected, is_blocked))| {
            let is_cursor = i == app.floor_cursor;
            let style = if is_cursor && is_focused {
                SELECTED_STYLE
            } else if is_selected {
                Style::default().add_modifier(Modifier::BOLD)
            } else if is_blocked {
                Style::default().fg(BRAND_MUTED)
            } else {
                Style::default()
            };

            let marker = if is_selected { " ◄" } else { "" };

            let mut spans = vec![Span::styled(name.to_string(), style)];
            if is_blocked {
                spans.push(Span::styled(" Reserved", RESERVED_TAG_STYLE));
            }
            spans.push(Span::styled(marker, Style::default().fg(BRAND_ORANGE)));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let title = format!(" Floors ({}) ", app.engine.registry().len());
    let list = List::new(items).block(panel_block(title, is_focused));

    frame.render_widget(list, area);
}

fn draw_chart(frame: &mut Frame, area: Rect, app: &App, chart: &ChartDisplayModel) {
    let is_focused = app.focus_panel == FocusPanel::Chart;
    let block = panel_block(format!(" {} ", chart.title), is_focused);

    if chart.is_empty() {
        let empty = Paragraph::new("No data")
            .alignment(Alignment::Center)
            .style(Style::default().fg(BRAND_MUTED))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    match chart.kind {
        ChartKind::Stacked => draw_stacked(frame, area, block, app, chart),
        ChartKind::Bar => draw_bars(frame, area, block, app, chart),
        ChartKind::Doughnut => draw_doughnut(frame, area, block, chart),
    }
}

fn legend(chart: &ChartDisplayModel) -> Line<'static> {
    let mut spans = Vec::new();
    for series in &chart.series {
        // Single-series charts are coloured per point; use the first colour
        let color = series
            .colors
            .first()
            .copied()
            .map_or(BRAND_MUTED, series_color);
        spans.push(Span::styled("■ ", Style::default().fg(color)));
        spans.push(Span::raw(format!("{}  ", series.label)));
    }
    Line::from(spans)
}

/// One horizontal bar per row, split into the stacked series shares.
fn draw_stacked(
    frame: &mut Frame,
    area: Rect,
    block: Block,
    app: &App,
    chart: &ChartDisplayModel,
) {
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let parts = Layout::vertical([Constraint::Length(2), Constraint::Min(1)]).split(inner);
    frame.render_widget(Paragraph::new(legend(chart)), parts[0]);

    let label_width = chart
        .labels
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .min(12);
    // marker + label + space
    let bar_width = (inner.width as usize).saturating_sub(label_width + 3);

    // Keep the cursor row visible
    let visible_rows = parts[1].height as usize;
    let scroll = (app.chart_cursor + 1).saturating_sub(visible_rows);

    let rows: Vec<Line> = chart
        .labels
        .iter()
        .enumerate()
        .skip(scroll)
        .map(|(i, label)| {
            let is_cursor = i == app.chart_cursor;
            stacked_row(chart, i, label, is_cursor, label_width, bar_width)
        })
        .collect();
    frame.render_widget(Paragraph::new(rows), parts[1]);
}

fn stacked_row(
    chart: &ChartDisplayModel,
    index: usize,
    label: &str,
    is_cursor: bool,
    label_width: usize,
    bar_width: usize,
) -> Line<'static> {
    let marker = if is_cursor { "▶ " } else { "  " };
    let label_style = if is_cursor {
        SELECTED_STYLE
    } else {
        Style::default()
    };

    let mut spans = vec![
        Span::styled(marker, Style::default().fg(BRAND_ORANGE)),
        Span::styled(format!("{label:<label_width$.label_width$}"), label_style),
        Span::raw(" "),
    ];

    let mut used = 0;
    let last = chart.series.len().saturating_sub(1);
    for (s, series) in chart.series.iter().enumerate() {
        let value = series.values.get(index).copied().unwrap_or(0.0);
        let remaining = bar_width.saturating_sub(used);
        // The last segment absorbs rounding so every row spans the full width
        let cells = if s == last && value > 0.0 {
            remaining
        } else {
            (((value / 100.0) * bar_width as f64).round() as usize).min(remaining)
        };
        used += cells;
        let color = series
            .colors
            .get(index)
            .copied()
            .map_or(BRAND_MUTED, series_color);
        spans.push(Span::styled(STACK_CELL.repeat(cells), Style::default().fg(color)));
    }
    Line::from(spans)
}

fn draw_bars(frame: &mut Frame, area: Rect, block: Block, app: &App, chart: &ChartDisplayModel) {
    let Some(series) = chart.series.first() else {
        return;
    };

    let bars: Vec<Bar> = chart
        .labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let value = series.values.get(i).copied().unwrap_or(0.0);
            let color = series
                .colors
                .get(i)
                .copied()
                .map_or(BRAND_MUTED, series_color);
            let mut style = Style::default().fg(color);
            if i == app.chart_cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Bar::default()
                .value(value.clamp(0.0, 100.0).round() as u64)
                .text_value(format!("{}%", format_pct(value)))
                .label(Line::from(label.clone()))
                .style(style)
                .value_style(Style::default().fg(BRAND_DARK).bg(color))
        })
        .collect();

    let inner_width = block.inner(area).width;
    let count = bars.len().max(1) as u16;
    let bar_width = (inner_width / count).saturating_sub(1).clamp(3, 12);

    let barchart = BarChart::default()
        .block(block.title_bottom(legend(chart)))
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .max(100);

    frame.render_widget(barchart, area);
}

/// Ring of points, one arc per slice, starting at twelve o'clock.
fn draw_doughnut(frame: &mut Frame, area: Rect, block: Block, chart: &ChartDisplayModel) {
    let Some(series) = chart.series.first() else {
        return;
    };

    let total: f64 = series.values.iter().map(|v| v.max(0.0)).sum();
    let mut arcs: Vec<(Color, Vec<(f64, f64)>)> = Vec::new();
    let mut start = 0.0;
    for (i, value) in series.values.iter().enumerate() {
        if total <= 0.0 {
            break;
        }
        let sweep = value.max(0.0) / total * TAU;
        let color = series
            .colors
            .get(i)
            .copied()
            .map_or(BRAND_MUTED, series_color);
        arcs.push((color, arc_points(start, sweep)));
        start += sweep;
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);
    let parts =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).split(inner);

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-1.1, 1.1])
        .y_bounds([-1.1, 1.1])
        .paint(|ctx| {
            for (color, coords) in &arcs {
                ctx.draw(&Points {
                    coords,
                    color: *color,
                });
            }
        });
    frame.render_widget(canvas, parts[0]);

    let legend: Vec<Line> = chart
        .labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let value = series.values.get(i).copied().unwrap_or(0.0);
            let color = series
                .colors
                .get(i)
                .copied()
                .map_or(BRAND_MUTED, series_color);
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(color)),
                Span::raw(format!("{label}: {}%", format_pct(value))),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(legend).wrap(Wrap { trim: true }), parts[1]);
}

fn arc_points(start: f64, sweep: f64) -> Vec<(f64, f64)> {
    const RADII: [f64; 5] = [0.6, 0.7, 0.8, 0.9, 1.0];
    let steps = ((sweep / TAU) * 360.0).ceil().max(1.0) as usize;
    let mut points = Vec::with_capacity(steps * RADII.len());
    for step in 0..=steps {
        let angle = start + sweep * (step as f64 / steps as f64);
        // Clockwise from the top
        let (x, y) = (angle.sin(), angle.cos());
        for r in RADII {
            points.push((x * r, y * r));
        }
    }
    points
}

fn draw_directory(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus_panel == FocusPanel::Directory;
    let directory = app.engine.directory();
    let block = panel_block(format!(" {} ", directory.heading()), is_focused);

    let lines: Vec<Line> = match &directory {
        DirectoryModel::ReservedNotice { title, message, .. } => vec![
            Line::from(Span::styled(title.clone(), HEADER_STYLE)),
            Line::default(),
            Line::from(message.clone()),
        ],
        DirectoryModel::Floor { listing, .. } => listing_lines(listing, ""),
        DirectoryModel::Grouped(groups) => {
            let mut lines = Vec::new();
            for (i, group) in groups.iter().enumerate() {
                let chevron = if group.expanded { "▾ " } else { "▸ " };
                let style = if i == app.directory_cursor && is_focused {
                    SELECTED_STYLE
                } else if group.is_blocked {
                    Style::default().fg(BRAND_MUTED).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().add_modifier(Modifier::BOLD)
                };

                let mut header =
                    vec![Span::styled(format!("{chevron}{}", group.floor_name), style)];
                if group.is_blocked {
                    header.push(Span::styled(" Reserved", RESERVED_TAG_STYLE));
                }
                lines.push(Line::from(header));

                match &group.body {
                    None => {}
                    Some(GroupBody::Reserved { notice }) => {
                        lines.push(Line::from(Span::styled(
                            format!("    {notice}"),
                            Style::default().fg(BRAND_MUTED),
                        )));
                    }
                    Some(GroupBody::Listing(listing)) => {
                        lines.extend(listing_lines(listing, "    "));
                    }
                }
            }
            lines
        }
    };

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(block);
    frame.render_widget(paragraph, area);
}

fn listing_lines(listing: &Listing, indent: &str) -> Vec<Line<'static>> {
    match listing {
        Listing::NoCompanies => vec![Line::from(Span::styled(
            format!("{indent}{}", crate::engine::directory::NO_COMPANIES),
            Style::default().fg(BRAND_MUTED).add_modifier(Modifier::ITALIC),
        ))],
        Listing::Companies(companies) => companies
            .iter()
            .flat_map(|company| {
                [
                    Line::from(vec![
                        Span::styled(
                            format!("{indent}{}", company.name),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                        Span::raw("  "),
                        Span::styled(
                            company.share_text(),
                            Style::default().fg(BRAND_DARK).bg(BRAND_SELECT_BG),
                        ),
                    ]),
                    Line::from(Span::styled(
                        format!("{indent}  {}", company.area_text()),
                        Style::default().fg(BRAND_MUTED),
                    )),
                ]
            })
            .collect(),
    }
}

fn draw_summary(frame: &mut Frame, area: Rect, app: &App) {
    let summary = app.engine.summary();
    let chunks = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .split(area);

    let scope_note = match &summary.scope {
        StatsScope::Building => String::new(),
        StatsScope::Floor { name } => format!(" ({name})"),
    };

    let tiles = [
        ("Total Rentable Area", summary.stats.total_area),
        ("Total Occupied Area", summary.stats.occupied_area),
        ("Remaining Area", summary.stats.remaining_area),
    ];

    for ((title, value), chunk) in tiles.into_iter().zip(chunks.iter()) {
        let tile = Paragraph::new(Line::from(Span::styled(
            format!("{} sq ft", format_area(value)),
            HEADER_STYLE,
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" {title}{scope_note} "))
                .borders(Borders::ALL),
        );
        frame.render_widget(tile, *chunk);
    }
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App, chart: &ChartDisplayModel) {
    let line = if let Some(error) = app.engine.last_error() {
        Line::from(Span::styled(
            format!(" {error}"),
            Style::default().fg(BRAND_ORANGE).add_modifier(Modifier::BOLD),
        ))
    } else {
        tooltip_line(app, chart)
    };

    let status = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn tooltip_line(app: &App, chart: &ChartDisplayModel) -> Line<'static> {
    let index = app.chart_cursor;
    let mut labels: Vec<String> = Vec::new();
    let mut detail = None;
    let mut title = None;
    for s in 0..chart.series.len() {
        if let Some(tooltip) = chart.tooltip(s, index) {
            if !labels.contains(&tooltip.label) {
                labels.push(tooltip.label);
            }
            detail = detail.or(tooltip.detail);
            title = title.or(Some(tooltip.title));
        }
    }

    let Some(title) = title else {
        return Line::default();
    };

    let mut spans = vec![
        Span::styled(format!(" {title}: "), HEADER_STYLE),
        Span::raw(labels.join(" | ")),
    ];
    if let Some(detail) = detail {
        spans.push(Span::styled(format!("  ({detail})"), Style::default().fg(BRAND_MUTED)));
    }
    if chart.drill_down_target(index).is_some() && app.focus_panel == FocusPanel::Chart {
        spans.push(Span::styled("  Enter to drill down", Style::default().fg(BRAND_ORANGE)));
    }
    Line::from(spans)
}

fn draw_footer(frame: &mut Frame, area: Rect, help: &str) {
    let footer = Paragraph::new(help)
        .style(Style::default().fg(BRAND_MUTED))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}
