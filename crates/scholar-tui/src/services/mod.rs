pub mod clipboard;

pub use clipboard::{ClipboardService, MemoryClipboard, SystemClipboardService};
