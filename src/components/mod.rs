pub mod help;
pub mod scenery;
pub mod sprite;
