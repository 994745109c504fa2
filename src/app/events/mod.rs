//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.
//!
//! Intents tragen Gerätekoordinaten, Commands bereits Modellkoordinaten.

mod command;
mod intent;

pub use command::AppCommand;
pub use intent::AppIntent;
