//! Host effects for semester links.
//!
//! Both effects are fire-and-forget from the directory's point of view:
//! the result is only reported to the user and never feeds back into
//! directory state.

use tracing::warn;
use url::Url;

use crate::error::LinkError;

/// Something that can hold a piece of text for the user to paste.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), LinkError>;
}

/// Something that can show a web page to the user.
pub trait LinkOpener {
    fn open(&self, url: &Url) -> Result<(), LinkError>;
}

/// The desktop clipboard via `arboard`.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), LinkError> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new().map_err(|e| {
                warn!(error = %e, "clipboard unavailable");
                LinkError::ClipboardUnavailable(e.to_string())
            })?;
            self.inner = Some(clipboard);
        }
        let Some(clipboard) = self.inner.as_mut() else {
            return Err(LinkError::ClipboardUnavailable("not initialized".into()));
        };
        clipboard
            .set_text(text.to_string())
            .map_err(|e| LinkError::ClipboardUnavailable(e.to_string()))
    }
}

/// The user's default browser via `open`. The browser is launched as a
/// detached process that keeps no handle back to this one.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl LinkOpener for SystemBrowser {
    fn open(&self, url: &Url) -> Result<(), LinkError> {
        ensure_web_url(url)?;
        open::that_detached(url.as_str()).map_err(|e| {
            warn!(url = %url, error = %e, "failed to open link");
            LinkError::OpenFailed {
                url: url.to_string(),
                message: e.to_string(),
            }
        })
    }
}

/// Only `http` and `https` links are handed to the host.
pub fn ensure_web_url(url: &Url) -> Result<(), LinkError> {
    match url.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(LinkError::UnsupportedScheme(url.to_string())),
    }
}
