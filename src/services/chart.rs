use crate::domain::models::ChartSeries;
use std::io::Write;

/// Presents a labeled series to the user.
pub trait ChartRenderer {
    fn render(&mut self, series: &ChartSeries) -> anyhow::Result<()>;
}

/// Horizontal bar chart drawn with block characters.
pub struct TerminalBarChart<W: Write> {
    out: W,
    bar_width: usize,
}

impl<W: Write> TerminalBarChart<W> {
    pub fn new(out: W, bar_width: usize) -> Self {
        Self { out, bar_width }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Bar length for `value`, scaled so `max` fills `width`.
/// Any positive value gets at least one cell.
fn bar_len(value: u64, max: u64, width: usize) -> usize {
    if value == 0 || max == 0 || width == 0 {
        return 0;
    }
    let scaled = (value as u128 * width as u128 / max as u128) as usize;
    scaled.max(1)
}

pub fn render_lines(series: &ChartSeries, bar_width: usize) -> Vec<String> {
    let label_width = series.labels.iter().map(|l| l.len()).max().unwrap_or(0);
    let max = series.values.iter().copied().max().unwrap_or(0);
    series
        .labels
        .iter()
        .zip(&series.values)
        .map(|(label, value)| {
            format!(
                "{:<lw$} {} {}",
                label,
                "\u{2588}".repeat(bar_len(*value, max, bar_width)),
                value,
                lw = label_width
            )
        })
        .collect()
}

impl<W: Write> ChartRenderer for TerminalBarChart<W> {
    fn render(&mut self, series: &ChartSeries) -> anyhow::Result<()> {
        writeln!(self.out, "{}", series.label)?;
        if series.is_empty() {
            writeln!(self.out, "(no words)")?;
            return Ok(());
        }
        for line in render_lines(series, self.bar_width) {
            writeln!(self.out, "{}", line)?;
        }
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::RankedEntry;

    fn series(pairs: &[(&str, u64)]) -> ChartSeries {
        let entries: Vec<RankedEntry> = pairs
            .iter()
            .map(|(w, c)| RankedEntry {
                word: w.to_string(),
                count: *c,
            })
            .collect();
        ChartSeries::from_ranked(&entries)
    }

    #[test]
    fn largest_value_fills_width() {
        assert_eq!(bar_len(10, 10, 40), 40);
        assert_eq!(bar_len(5, 10, 40), 20);
        assert_eq!(bar_len(1, 1000, 40), 1);
        assert_eq!(bar_len(0, 10, 40), 0);
    }

    #[test]
    fn labels_are_aligned() {
        let lines = render_lines(&series(&[("go", 4), ("gopher", 2)]), 4);
        assert_eq!(lines[0], "go     \u{2588}\u{2588}\u{2588}\u{2588} 4");
        assert_eq!(lines[1], "gopher \u{2588}\u{2588} 2");
    }

    #[test]
    fn render_writes_caption_then_rows() {
        let mut chart = TerminalBarChart::new(Vec::new(), 10);
        chart.render(&series(&[("the", 3)])).unwrap();
        let out = String::from_utf8(chart.into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Word Frequency");
        assert!(lines[1].starts_with("the "));
        assert!(lines[1].ends_with(" 3"));
    }

    #[test]
    fn empty_series_says_so() {
        let mut chart = TerminalBarChart::new(Vec::new(), 10);
        chart.render(&series(&[])).unwrap();
        let out = String::from_utf8(chart.into_inner()).unwrap();
        assert!(out.contains("(no words)"));
    }
}
