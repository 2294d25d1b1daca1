pub mod dns;

pub use dns::{resolve_ptr, ResolvePtrUseCase};
