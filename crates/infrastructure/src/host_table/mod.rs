pub mod loader;
pub mod shared;

pub use loader::HostTableLoader;
pub use shared::SharedHostTable;
