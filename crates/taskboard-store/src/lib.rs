/*
[INPUT]:  Persistence modules
[OUTPUT]: Public taskboard-store crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod document;
pub mod error;
pub mod store;

pub use document::{BoardDocument, FORMAT_VERSION, TaskRecord};
pub use error::StoreError;
pub use store::BoardStore;
