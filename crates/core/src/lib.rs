//! Core game logic for the vault-drain card game. Keep this crate free of
//! terminal and filesystem concerns; frontends plug in through the traits in
//! [`io`].

pub mod achievements;
pub mod cards;
pub mod command;
pub mod config;
pub mod deck;
pub mod economy;
pub mod io;
pub mod mission;
pub mod observer;
pub mod predict;
pub mod rng;
pub mod run;
pub mod session;
pub mod settings;
pub mod shop;

pub use achievements::*;
pub use cards::*;
pub use command::*;
pub use config::*;
pub use deck::*;
pub use economy::*;
pub use io::*;
pub use mission::*;
pub use observer::*;
pub use predict::*;
pub use rng::*;
pub use run::*;
pub use session::*;
pub use settings::*;
pub use shop::*;
