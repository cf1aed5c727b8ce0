pub mod hosted;
pub mod mock;
