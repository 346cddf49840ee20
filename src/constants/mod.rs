pub mod game;

/// Inner canvas size of the windowed display mode, in cells. The play area
/// is scaled into whatever canvas the active display mode provides.
pub const CANVAS_WIDTH: u16 = 72;
pub const CANVAS_HEIGHT: u16 = 36;

pub const TITLE_TEXT: &str = r#"
 _____ _
|  ___| | __ _ _ __  _ __  _   _
| |_  | |/ _` | '_ \| '_ \| | | |
|  _| | | (_| | |_) | |_) | |_| |
|_|   |_|\__,_| .__/| .__/ \__, |
              |_|   |_|    |___/
"#;
