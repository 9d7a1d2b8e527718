pub mod clash;

pub use clash::{assemble, assemble_with, serialize};
