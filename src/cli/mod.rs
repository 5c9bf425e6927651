pub mod args;

pub use args::{Cli, Commands, RenderArgs};
