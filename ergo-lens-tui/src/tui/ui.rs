use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{App, Focus};
use crate::tui::theme::{color_from_hex, Theme};
use ergo_lens_core::{view, Dimension, DomainPolicy, ViewState};

pub fn render(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);
    render_topbar(frame, app, chunks[0], theme);
    let mid = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(app.sidebar_width), Constraint::Min(0)])
        .split(chunks[1]);
    render_selectors(frame, app, mid[0], theme);
    render_chart(frame, app, mid[1], theme);
    render_bottombar(frame, app, chunks[2], theme);
    if app.show_help {
        render_help(frame, area);
    }
}

fn render_topbar(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let badge = match app.session.policy() {
        DomainPolicy::Fixed { .. } => Span::styled("[FIXED]", Style::default().fg(theme.success)),
        DomainPolicy::DataExtent { .. } => {
            Span::styled("[EXTENT]", Style::default().fg(theme.highlight))
        }
    };
    let labels = match &app.view_state {
        ViewState::InsufficientData { labels, .. } | ViewState::Histogram { labels, .. } => labels,
    };
    let info = format!(
        " {} | {} records | {}",
        app.input_path,
        app.session.record_count(),
        labels.total_count
    );
    let line = Line::from(vec![badge, Span::raw(info)]);
    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(theme.bg).fg(theme.fg)),
        area,
    );
}

fn render_selectors(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let focused = app.focus == Focus::Selectors;
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Filters")
        .border_style(if focused {
            Style::default().fg(theme.highlight)
        } else {
            Style::default()
        });
    let name_width = (area.width as usize).saturating_sub(14).max(6);
    let items: Vec<ListItem> = Dimension::ALL
        .iter()
        .map(|&dim| {
            let value = app.session.filters.value(dim);
            let disabled = dim == Dimension::Speed && !app.session.filters.speed_enabled();
            let style = if disabled {
                Style::default().fg(theme.disabled)
            } else {
                Style::default().fg(theme.fg)
            };
            let lock = if disabled { " (locked)" } else { "" };
            ListItem::new(Line::from(Span::styled(
                format!("{:<name_width$} {value}{lock}", dim.label()),
                style,
            )))
        })
        .collect();
    let mut state = ListState::default();
    state.select(Some(app.selected_dim));
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_chart(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let focused = app.focus == Focus::Chart;
    match &app.view_state {
        ViewState::InsufficientData {
            sample_count,
            labels,
        } => {
            let block = Block::default()
                .borders(Borders::ALL)
                .title(labels.title.clone())
                .border_style(if focused {
                    Style::default().fg(theme.highlight)
                } else {
                    Style::default()
                });
            let inner_height = area.height.saturating_sub(2) as usize;
            let pad = inner_height.saturating_sub(3) / 2;
            let mut lines = vec![Line::from(""); pad];
            lines.push(Line::from(Span::styled(
                view::NO_DATA_MESSAGE,
                Style::default()
                    .fg(theme.error)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(format!("Current sample size: {sample_count}")));
            frame.render_widget(
                Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .block(block),
                area,
            );
        }
        ViewState::Histogram {
            bins,
            value_scale,
            count_scale,
            labels,
            bar_color,
            ..
        } => {
            let block = Block::default()
                .borders(Borders::ALL)
                .title(labels.title.clone())
                .border_style(if focused {
                    Style::default().fg(theme.highlight)
                } else {
                    Style::default()
                });
            let inner = block.inner(area);
            frame.render_widget(block, area);
            if inner.height < 4 || inner.width < 12 || bins.is_empty() {
                return;
            }
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(0),
                    Constraint::Length(1),
                    Constraint::Length(1),
                ])
                .split(inner);
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(7), Constraint::Min(0)])
                .split(rows[0]);
            render_count_axis(frame, cols[0], count_scale, labels, theme);

            let bars_area = cols[1];
            let color = color_from_hex(bar_color);
            let bar_width = ((bars_area.width as usize) / bins.len()).max(1) as u16;
            let bars: Vec<Bar> = bins
                .iter()
                .enumerate()
                .map(|(i, bin)| {
                    let style = if focused && i == app.selected_bin {
                        Style::default().fg(theme.highlight)
                    } else {
                        Style::default().fg(color)
                    };
                    Bar::default()
                        .value(bin.count)
                        .text_value(String::new())
                        .style(style)
                })
                .collect();
            let max = count_scale.domain().1.max(1.0) as u64;
            let chart = BarChart::default()
                .data(BarGroup::default().bars(&bars))
                .bar_width(bar_width)
                .bar_gap(0)
                .max(max);
            frame.render_widget(chart, bars_area);

            render_value_axis(frame, rows[1], cols[0].width, value_scale, theme);
            frame.render_widget(
                Paragraph::new(labels.x_axis.clone())
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(theme.axis)),
                rows[2],
            );
        }
    }
}

/// Left gutter: nice count-axis upper bound at the top, zero at the bottom.
fn render_count_axis(
    frame: &mut Frame,
    area: Rect,
    count_scale: &ergo_lens_core::LinearScale,
    labels: &ergo_lens_core::ChartLabels,
    theme: &Theme,
) {
    let height = area.height;
    let mut lines: Vec<Line> = Vec::with_capacity(height as usize);
    lines.push(Line::from(Span::styled(
        format!("{:>6}", count_scale.domain().1 as u64),
        Style::default().fg(theme.axis),
    )));
    if height > 2 {
        lines.push(Line::from(Span::styled(
            format!("{:>6}", labels.y_axis),
            Style::default().fg(theme.axis),
        )));
        for _ in 2..height - 1 {
            lines.push(Line::from(""));
        }
    }
    lines.push(Line::from(Span::styled(
        format!("{:>6}", 0),
        Style::default().fg(theme.axis),
    )));
    frame.render_widget(Paragraph::new(lines), area);
}

/// Tick labels for the binned field, placed by the value scale stretched
/// onto the chart width.
fn render_value_axis(
    frame: &mut Frame,
    area: Rect,
    gutter: u16,
    value_scale: &ergo_lens_core::LinearScale,
    theme: &Theme,
) {
    let width = area.width.saturating_sub(gutter) as usize;
    if width == 0 {
        return;
    }
    let scale = value_scale.clone().with_range(0.0, width as f64 - 1.0);
    let mut row = vec![' '; width];
    for tick in scale.ticks(6) {
        let label = format!("{tick:.2}");
        let pos = scale.scale(tick).round() as usize;
        if pos + label.len() <= width {
            for (i, c) in label.chars().enumerate() {
                row[pos + i] = c;
            }
        }
    }
    let text = format!("{:gutter$}{}", "", row.into_iter().collect::<String>(), gutter = gutter as usize);
    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(theme.axis)),
        area,
    );
}

fn render_bottombar(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let text = match (&app.view_state, app.focus) {
        (ViewState::Histogram { bins, .. }, Focus::Chart) => {
            match bins.get(app.selected_bin) {
                // same readout the pointer tooltip gives: count plus bin range
                Some(bin) => format!(
                    " Count: {}  Range: {:.2} - {:.2}",
                    bin.count, bin.x0, bin.x1
                ),
                None => app.status_msg.clone(),
            }
        }
        _ => format!(" {}", app.status_msg),
    };
    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(theme.bg).fg(theme.fg)),
        area,
    );
}

fn render_help(frame: &mut Frame, area: Rect) {
    let width = area.width.min(46);
    let height = area.height.min(12);
    let popup = Rect {
        x: (area.width - width) / 2,
        y: (area.height - height) / 2,
        width,
        height,
    };
    let lines = vec![
        Line::from("j/k      select filter dimension"),
        Line::from("h/l      cycle selector value"),
        Line::from("Tab      switch focus (filters/chart)"),
        Line::from("h/l      inspect bins (chart focus)"),
        Line::from("[/]      resize filter panel"),
        Line::from("r        reset all filters"),
        Line::from("?        toggle this help"),
        Line::from("q        quit"),
    ];
    frame.render_widget(ratatui::widgets::Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Help (?)"))
            .wrap(Wrap { trim: false }),
        popup,
    );
}
