use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use crate::constants::game;

/// Scrolling ground strip at the bottom of the canvas.
///
/// The texture is keyed off a column offset supplied by the caller, so the
/// ground appears to move at the same speed as the pipes.
pub struct Scenery {
    ground_rows: u16,
    scroll_cols: u16,
}

impl Scenery {
    pub fn new(ground_rows: u16, scroll_cols: u16) -> Self {
        Scenery { ground_rows, scroll_cols }
    }
}

impl Widget for Scenery {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        if self.ground_rows == 0 || area.height < self.ground_rows {
            return;
        }
        let top = area.bottom() - self.ground_rows;
        let period = game::GROUND_TEXTURE.len() as u16;
        let style = match game::GROUND_COLOR {
            Some(color) => Style::default().fg(color),
            None => Style::default(),
        };
        for y in top..area.bottom() {
            for x in area.x..area.right() {
                // Only the surface row scrolls; the fill below is static.
                let ch = if y == top {
                    game::GROUND_TEXTURE[(((x - area.x) + self.scroll_cols) % period) as usize]
                } else {
                    '▓'
                };
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char(ch);
                    cell.set_style(style);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_surface_row_shifts_with_scroll() {
        let area = Rect::new(0, 0, 8, 4);
        let mut still = Buffer::empty(area);
        Scenery::new(2, 0).render(area, &mut still);
        let mut scrolled = Buffer::empty(area);
        Scenery::new(2, 1).render(area, &mut scrolled);

        assert_eq!(still.cell((1, 2)).unwrap().symbol(), scrolled.cell((0, 2)).unwrap().symbol());
        // The fill row does not scroll.
        assert_eq!(scrolled.cell((0, 3)).unwrap().symbol(), "▓");
    }

    #[test]
    fn test_too_small_area_renders_nothing() {
        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);
        Scenery::new(2, 0).render(area, &mut buf);
        assert_eq!(buf.cell((0, 0)).unwrap().symbol(), " ");
    }
}
