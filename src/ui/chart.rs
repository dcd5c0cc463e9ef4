//! RTT chart rendering.

use super::ThemeColors;
use crate::plot::{ChartModel, TITLE, X_AXIS_TITLE, Y_AXIS_TITLE};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

/// Draw the chart, or a placeholder when there is nothing to plot.
pub(super) fn draw_chart(f: &mut Frame<'_>, area: Rect, model: &ChartModel, colors: &ThemeColors) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .title(format!(" {} ", TITLE))
        .title_alignment(Alignment::Center)
        .title_style(
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        )
        .style(Style::default().bg(colors.bg));

    if model.is_empty() {
        let para = Paragraph::new("No samples to display")
            .style(Style::default().fg(colors.text))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(para, area);
        return;
    }

    // Grid first so the series is drawn over it
    let mut datasets: Vec<Dataset<'_>> = model
        .grid
        .iter()
        .map(|segment| {
            Dataset::default()
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(colors.grid))
                .data(segment)
        })
        .collect();

    datasets.push(
        Dataset::default()
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(colors.line))
            .data(&model.series),
    );
    datasets.push(
        Dataset::default()
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(colors.marker))
            .data(&model.series),
    );

    let x_axis = Axis::default()
        .title(X_AXIS_TITLE)
        .style(Style::default().fg(colors.text))
        .bounds(model.x.as_array())
        .labels(model.x_labels.clone());

    let y_axis = Axis::default()
        .title(Y_AXIS_TITLE)
        .style(Style::default().fg(colors.text))
        .bounds(model.y.as_array())
        .labels(model.y_labels.clone());

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(x_axis)
        .y_axis(y_axis);

    f.render_widget(chart, area);
}
