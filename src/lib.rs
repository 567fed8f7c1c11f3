mod board;
mod common;
mod config;
mod coord;
pub mod game;
mod logging;
pub mod placement;
pub mod player;
mod ship;
pub mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
pub use coord::Coord;
pub use game::*;
pub use logging::{init_logging, level_from, LOG_ENV};
pub use placement::{generate_grid, place_fleet, random_grid, random_vessel};
pub use player::*;
pub use ship::*;
pub use ui::*;
