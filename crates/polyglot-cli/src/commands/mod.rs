pub mod inject;
pub mod interactive;
