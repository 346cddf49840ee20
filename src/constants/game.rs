use ratatui::style::Color;

pub const BIRD_TEXT: &str = r#"
 \\ o>
 (__))
"#;
pub const BIRD_COLOR: Option<Color> = Some(Color::Yellow);

pub const PIPE_BODY: char = '|';
pub const PIPE_EDGE: char = '█';
pub const PIPE_COLOR: Option<Color> = Some(Color::LightGreen);

pub const OBSTACLE_TEXT: &str = r#"
/##\
\##/
"#;
pub const OBSTACLE_COLOR: Option<Color> = Some(Color::LightRed);

pub const GROUND_TEXTURE: [char; 4] = ['▒', '░', '▒', '▓'];
pub const GROUND_COLOR: Option<Color> = Some(Color::Green);

pub const SCORE_COLOR: Color = Color::White;
pub const OVERLAY_COLOR: Color = Color::LightCyan;
