pub mod jpeg;
pub mod png;
mod types;

use std::path::Path;

pub use types::*;

pub trait Persist {
    fn save_as(&self, _: &Path) -> crate::Result<()>;
}
