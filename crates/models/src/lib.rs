pub mod errors;
pub mod id;
pub mod item;

pub use errors::ModelError;
pub use id::{ItemId, Keyed};
pub use item::Item;
