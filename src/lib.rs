//! Snake on a wrap-around grid.
//!
//! The game state lives in [`snake`] and [`food`]; [`game`] runs the tick
//! sequence against the [`render::Renderer`], [`input::InputSource`] and
//! [`clock::Clock`] it is handed.

pub mod board;
pub mod clock;
pub mod config;
pub mod food;
pub mod game;
pub mod input;
pub mod render;
pub mod snake;
