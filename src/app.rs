//! Application state.

use crate::data::Dataset;
use crate::plot::PlotLayoutConfig;
use crate::ui::formatters::{format_count, format_rtt};

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Theme {
    /// Gruvbox dark theme.
    #[default]
    #[value(name = "dark")]
    GruvboxDark,
    /// Gruvbox light theme.
    #[value(name = "light")]
    GruvboxLight,
}

impl Theme {
    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Application state.
///
/// The dataset is loaded before the terminal is set up and stays read-only
/// while the chart is on screen.
#[derive(Debug)]
pub struct App {
    /// Loaded samples.
    pub dataset: Dataset,
    /// Current theme.
    pub theme: Theme,
    /// Chart layout settings.
    pub layout: PlotLayoutConfig,
    /// Status message.
    pub status: String,
}

impl App {
    /// Create a new application instance.
    pub fn new(dataset: Dataset, theme: Theme) -> Self {
        let status = status_line(&dataset);
        Self {
            dataset,
            theme,
            layout: PlotLayoutConfig::default(),
            status,
        }
    }
}

/// Summary shown in the status bar.
pub fn status_line(dataset: &Dataset) -> String {
    let count = match dataset.len() {
        1 => "1 sample".to_string(),
        n => format!("{} samples", format_count(n)),
    };

    match dataset.summary() {
        Some(s) => format!(
            "{} | {} | RTT min/mean/max: {} / {} / {} ms",
            dataset.path().display(),
            count,
            format_rtt(s.min),
            format_rtt(s.mean),
            format_rtt(s.max),
        ),
        None => format!("{} | {}", dataset.path().display(), count),
    }
}
