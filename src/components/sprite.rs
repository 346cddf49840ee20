use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

/// Multi-line ASCII sprite rendered cell by cell.
///
/// The origin is relative to the render area and may be negative; cells
/// outside the area are clipped, so sprites can slide in and out of the
/// canvas. With `transparent` set, whitespace cells leave the scenery
/// behind them untouched instead of punching rectangular holes in it.
pub struct Sprite {
    lines: Vec<String>,
    origin: (i32, i32),
    style: Style,
    transparent: bool,
}

impl Sprite {
    pub fn new<T: ToString>(text: T) -> Self {
        let lines = text.to_string().lines().filter(|line| !line.is_empty()).map(|line| line.to_string()).collect();
        Sprite { lines, origin: (0, 0), style: Style::default(), transparent: false }
    }

    pub fn origin(mut self, x: i32, y: i32) -> Self {
        self.origin = (x, y);
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn transparent(mut self, transparent: bool) -> Self {
        self.transparent = transparent;
        self
    }

    pub fn size(&self) -> (u16, u16) {
        let width = self.lines.iter().map(|line| line.chars().count()).max().unwrap_or(0) as u16;
        (width, self.lines.len() as u16)
    }
}

impl Widget for Sprite {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        for (row, line) in self.lines.iter().enumerate() {
            let y = area.y as i32 + self.origin.1 + row as i32;
            if y < area.y as i32 || y >= area.bottom() as i32 {
                continue;
            }
            for (col, ch) in line.chars().enumerate() {
                if self.transparent && ch.is_whitespace() {
                    continue;
                }
                let x = area.x as i32 + self.origin.0 + col as i32;
                if x < area.x as i32 || x >= area.right() as i32 {
                    continue;
                }
                if let Some(cell) = buf.cell_mut((x as u16, y as u16)) {
                    cell.set_char(ch);
                    cell.set_style(self.style);
                }
            }
        }
    }
}
