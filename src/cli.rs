use clap::Parser;

use crate::utils::version;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Fixed-size bordered canvas centered in the terminal.
    Windowed,
    /// The canvas fills the whole terminal.
    Fullscreen,
    /// Windowed at double scale.
    Large,
}

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    /// Render in a fixed-size bordered window (the default)
    #[arg(long, conflicts_with = "fullscreen")]
    pub windowed: bool,

    /// Fill the whole terminal
    #[arg(long)]
    pub fullscreen: bool,

    /// Render the window at double scale
    #[arg(long, conflicts_with = "fullscreen")]
    pub large: bool,

    /// Simulation ticks per second
    #[arg(short, long, value_name = "FLOAT", default_value_t = 60.0)]
    pub tick_rate: f64,

    /// Frames per second
    #[arg(short, long, value_name = "FLOAT", default_value_t = 30.0)]
    pub frame_rate: f64,

    /// Seed for the obstacle generator, for reproducible runs
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,
}

impl Cli {
    pub fn display_mode(&self) -> DisplayMode {
        if self.fullscreen {
            DisplayMode::Fullscreen
        } else if self.large {
            DisplayMode::Large
        } else {
            DisplayMode::Windowed
        }
    }
}
