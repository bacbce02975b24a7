/*
[INPUT]:  Core domain modules
[OUTPUT]: Public taskboard-core crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod error;
pub mod lane;
pub mod registry;
pub mod task;

pub use error::BoardError;
pub use lane::Lane;
pub use registry::Registry;
pub use task::{MAX_PROGRESS, Task};
