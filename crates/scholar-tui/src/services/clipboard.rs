use anyhow::{anyhow, Context, Result};
use std::sync::{Arc, Mutex};

pub trait ClipboardService {
    fn copy_to_clipboard(&mut self, text: &str) -> Result<()>;
}

/// The desktop clipboard. Opened on first use so a headless session can
/// still start.
#[derive(Default)]
pub struct SystemClipboardService {
    clipboard: Option<arboard::Clipboard>,
}

impl SystemClipboardService {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardService for SystemClipboardService {
    fn copy_to_clipboard(&mut self, text: &str) -> Result<()> {
        if self.clipboard.is_none() {
            self.clipboard = Some(arboard::Clipboard::new().context("Failed to open system clipboard")?);
        }
        self.clipboard
            .as_mut()
            .ok_or_else(|| anyhow!("Failed to open system clipboard"))?
            .set_text(text.to_owned())
            .map_err(|e| anyhow!("Failed to write to clipboard: {}", e))
    }
}

/// In-process clipboard; clones share the same contents.
#[derive(Clone, Default)]
pub struct MemoryClipboard {
    copies: Arc<Mutex<Vec<String>>>,
    unavailable: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose every write fails.
    pub fn unavailable() -> Self {
        Self { unavailable: true, ..Self::default() }
    }

    pub fn copies(&self) -> Vec<String> {
        self.copies.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl ClipboardService for MemoryClipboard {
    fn copy_to_clipboard(&mut self, text: &str) -> Result<()> {
        if self.unavailable {
            return Err(anyhow!("clipboard unavailable"));
        }
        self.copies
            .lock()
            .map_err(|_| anyhow!("clipboard lock poisoned"))?
            .push(text.to_string());
        Ok(())
    }
}
