//! Layout configuration constants for the RTT chart.

/// Configuration for the chart layout.
#[derive(Debug, Clone)]
pub struct PlotLayoutConfig {
    /// Margin added on each side of the data range (0.05 = 5%).
    pub margin_factor: f64,
    /// Number of intervals between axis ticks.
    pub grid_divisions: usize,
    /// Columns taken by borders and Y labels, not available for data.
    pub label_padding: usize,
}

impl Default for PlotLayoutConfig {
    fn default() -> Self {
        Self {
            margin_factor: 0.05,
            grid_divisions: 4,
            label_padding: 8,
        }
    }
}

impl PlotLayoutConfig {
    /// Number of data bins that fit in a chart of the given width.
    pub fn bins_for_width(&self, width: u16) -> usize {
        (width as usize).saturating_sub(self.label_padding).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bins_never_zero() {
        let config = PlotLayoutConfig::default();
        assert_eq!(config.bins_for_width(0), 1);
        assert_eq!(config.bins_for_width(88), 80);
    }
}
