use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum HomeAction {
    Start,
}

#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum GameAction {
    Flap,
    Pause,
    Restart,
    Leave,
}

/// Application-level commands, produced by the event loop and keybindings and
/// consumed by the app and the active page.
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum Action {
    Tick,
    Render,
    Resize(u16, u16),
    Suspend,
    Resume,
    Quit,
    Refresh,
    Error(String),
    ToggleShowHelp,
    StartGame,
    ShowHome,
    Home(HomeAction),
    Game(GameAction),
}
