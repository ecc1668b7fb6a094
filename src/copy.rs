use crate::SpindleError;
use arboard::Clipboard;
use tracing::{debug, info, warn};

/// Destination for the merged document once the output file is written.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), SpindleError>;
}

/// The host clipboard, opened on first use.
#[derive(Default)]
pub struct SystemClipboard {
    clipboard: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        SystemClipboard::default()
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), SpindleError> {
        if self.clipboard.is_none() {
            debug!("Initializing clipboard");
            let clipboard =
                Clipboard::new().map_err(|e| SpindleError::ClipboardInitError(e.to_string()))?;
            self.clipboard = Some(clipboard);
        }
        match self.clipboard.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text.to_owned())
                .map_err(|e| SpindleError::ClipboardWriteError(e.to_string())),
            None => Err(SpindleError::ClipboardInitError(
                "clipboard unavailable".to_owned(),
            )),
        }
    }
}

/// Copies `text` to `sink`, logging instead of failing.
pub fn copy_to_clipboard(sink: &mut dyn ClipboardSink, text: &str) -> bool {
    match sink.set_text(text) {
        Ok(()) => {
            info!("Merged content copied to clipboard.");
            true
        }
        Err(e) => {
            warn!("Failed to copy merged content to clipboard: {}", e);
            false
        }
    }
}
