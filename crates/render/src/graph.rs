use graph_core::SampleRing;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

use crate::theme::GraphTheme;

/// Eighth-block glyphs, index = filled eighths of a cell (0..=8).
const EIGHTHS: [&str; 9] = [" ", "▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"];

/// Scrolling bar chart of the sample ring: one column per sample, oldest at
/// the left edge, scaled to the drawing area's height.
#[derive(Debug)]
pub struct CpuGraph<'a> {
    ring: &'a SampleRing,
    theme: GraphTheme,
    show_percentage: bool,
}

impl<'a> CpuGraph<'a> {
    pub fn new(ring: &'a SampleRing, theme: GraphTheme, show_percentage: bool) -> Self {
        Self {
            ring,
            theme,
            show_percentage,
        }
    }
}

impl Widget for CpuGraph<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let style = Style::default()
            .fg(self.theme.foreground)
            .bg(self.theme.background);

        // One bar per column; an empty ring (capacity 0, or narrower than
        // the area between resizes) leaves the remaining columns blank.
        let mut samples = self.ring.iter_chronological();
        for x in 0..area.width {
            let column = samples.next().map_or_else(
                || vec![" "; area.height as usize],
                |sample| bar_cells(sample, area.height),
            );
            // `column` is bottom-up; the buffer's y axis grows downwards.
            for (row, glyph) in column.iter().enumerate() {
                let y = area.y + area.height - 1 - row as u16;
                buf.set_string(area.x + x, y, glyph, style);
            }
        }

        if self.show_percentage {
            let label = percentage_label(self.ring.newest());
            let y = area.y + (area.height - 1) / 2;
            buf.set_stringn(area.x, y, &label, area.width as usize, style);
        }
    }
}

/// Glyphs for one bar, bottom row first, `height` entries.
///
/// The bar is quantized to eighth-blocks so small utilization changes stay
/// visible even on a short panel.
fn bar_cells(sample: f32, height: u16) -> Vec<&'static str> {
    let eighths = (sample.clamp(0.0, 1.0) * height as f32 * 8.0).round() as usize;
    let full = eighths / 8;
    let remainder = eighths % 8;

    (0..height as usize)
        .map(|row| {
            if row < full {
                EIGHTHS[8]
            } else if row == full {
                EIGHTHS[remainder]
            } else {
                EIGHTHS[0]
            }
        })
        .collect()
}

/// Newest sample as the overlay text, e.g. ` 42 %`.
fn percentage_label(sample: f32) -> String {
    format!("{:3.0} %", sample * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_cells_full_and_empty() {
        assert_eq!(bar_cells(1.0, 4), vec!["█", "█", "█", "█"]);
        assert_eq!(bar_cells(0.0, 4), vec![" ", " ", " ", " "]);
    }

    #[test]
    fn bar_cells_half() {
        assert_eq!(bar_cells(0.5, 4), vec!["█", "█", " ", " "]);
    }

    #[test]
    fn bar_cells_partial_top_cell() {
        // 0.3 of 4 rows = 9.6 eighths ≈ 10: one full cell + 2/8.
        assert_eq!(bar_cells(0.3, 4), vec!["█", "▂", " ", " "]);
        // A sliver on a one-row panel still shows up.
        assert_eq!(bar_cells(0.125, 1), vec!["▁"]);
    }

    #[test]
    fn bar_cells_clamps_out_of_range() {
        assert_eq!(bar_cells(7.5, 2), vec!["█", "█"]);
        assert_eq!(bar_cells(-1.0, 2), vec![" ", " "]);
    }

    #[test]
    fn percentage_label_format() {
        assert_eq!(percentage_label(0.42), " 42 %");
        assert_eq!(percentage_label(0.0), "  0 %");
        assert_eq!(percentage_label(1.0), "100 %");
    }

    #[test]
    fn render_draws_one_column_per_sample() {
        let mut ring = SampleRing::new(3);
        for s in [0.0, 1.0, 0.5] {
            ring.push(s);
        }

        let area = Rect::new(0, 0, 3, 2);
        let mut buf = Buffer::empty(area);
        CpuGraph::new(&ring, GraphTheme::default(), false).render(area, &mut buf);

        // Column 0: zero sample → blank.
        assert_eq!(buf.cell((0, 0)).unwrap().symbol(), " ");
        assert_eq!(buf.cell((0, 1)).unwrap().symbol(), " ");
        // Column 1: full bar.
        assert_eq!(buf.cell((1, 0)).unwrap().symbol(), "█");
        assert_eq!(buf.cell((1, 1)).unwrap().symbol(), "█");
        // Column 2: bottom half only.
        assert_eq!(buf.cell((2, 0)).unwrap().symbol(), " ");
        assert_eq!(buf.cell((2, 1)).unwrap().symbol(), "█");
    }

    #[test]
    fn render_tolerates_empty_ring() {
        let ring = SampleRing::new(0);
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        CpuGraph::new(&ring, GraphTheme::default(), false).render(area, &mut buf);
        for x in 0..4 {
            assert_eq!(buf.cell((x, 0)).unwrap().symbol(), " ");
        }
    }

    #[test]
    fn render_zero_area_is_noop() {
        let ring = SampleRing::new(4);
        let mut buf = Buffer::empty(Rect::new(0, 0, 0, 0));
        CpuGraph::new(&ring, GraphTheme::default(), true).render(Rect::new(0, 0, 0, 0), &mut buf);
    }

    #[test]
    fn render_overlays_percentage() {
        let mut ring = SampleRing::new(5);
        ring.push(1.0);

        let area = Rect::new(0, 0, 5, 3);
        let mut buf = Buffer::empty(area);
        CpuGraph::new(&ring, GraphTheme::default(), true).render(area, &mut buf);

        // Label "100 %" lands on the middle row.
        let row: String = (0..5).map(|x| buf.cell((x, 1)).unwrap().symbol()).collect();
        assert_eq!(row, "100 %");
    }
}
