pub mod resolve_ptr;

pub use resolve_ptr::{resolve_ptr, ResolvePtrUseCase};
