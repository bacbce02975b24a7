/*
[INPUT]:  Command layer modules
[OUTPUT]: Public taskboard-cli crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod commands;
pub mod error;

pub use commands::Commands;
pub use error::CommandError;
