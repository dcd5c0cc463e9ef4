//! User interface rendering.

mod chart;
pub mod formatters;
mod keymap_bar;
mod status_bar;
mod theme;

use crate::app::App;
use crate::plot::ChartModel;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    let colors = ThemeColors::from_theme(&app.theme);

    // Chart with status bar and key map bar below
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1), Constraint::Length(1)])
        .split(f.area());

    let model = ChartModel::build(&app.dataset, &app.layout, chunks[0].width);
    chart::draw_chart(f, chunks[0], &model, &colors);

    status_bar::draw_status(f, chunks[1], &app.status, &colors);
    keymap_bar::draw_keymap(f, chunks[2], &colors);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Theme;
    use crate::data::{DataReader, Dataset};
    use ratatui::{backend::TestBackend, Terminal};
    use std::io::Cursor;
    use std::path::PathBuf;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer();

        let mut text = String::new();
        for row in buffer.content.chunks(buffer.area.width as usize) {
            for cell in row {
                text.push_str(cell.symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn chart_shows_titles() {
        let ds = DataReader::read_from(
            Cursor::new("0.0 12.5\n1.0 13.0\n\n2.0 11.8"),
            PathBuf::from("rtt.log"),
        )
        .unwrap();
        let screen = render(&App::new(ds, Theme::GruvboxDark));

        assert!(screen.contains("RTT vs Timestamp"));
        assert!(screen.contains("Timestamp (s)"));
        assert!(screen.contains("RTT (ms)"));
        assert!(screen.contains("q/Esc:close"));
    }

    #[test]
    fn empty_dataset_renders_placeholder() {
        let app = App::new(Dataset::new(PathBuf::from("rtt.log")), Theme::GruvboxLight);
        let screen = render(&app);

        assert!(screen.contains("RTT vs Timestamp"));
        assert!(screen.contains("No samples to display"));
        assert!(screen.contains("0 samples"));
    }
}
