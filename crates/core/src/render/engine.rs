//! External rendering engine abstraction and the Chromium implementation.
//!
//! One engine instance per report, never pooled. A session owns one
//! browser process; `release` must be safe to call exactly once on every
//! exit path, including after a failed print.

use std::ffi::OsStr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use headless_chrome::types::PrintToPdfOptions;
use headless_chrome::{Browser, LaunchOptions, Tab};
use tracing::debug;
use weighbridge_shared::config::RendererConfig;

use super::error::RenderError;

/// Launches rendering sessions. Implemented by the real Chromium engine
/// and by instrumented fakes in tests.
pub trait RenderEngine: Send + Sync {
    /// Starts a fresh engine instance for one report.
    fn launch(&self) -> Result<Box<dyn RenderSession>, RenderError>;
}

/// One launched engine instance.
pub trait RenderSession: Send {
    /// Loads the document and converts it to a paginated PDF.
    fn print_to_pdf(&mut self, html: &str) -> Result<Vec<u8>, RenderError>;

    /// Releases the underlying engine process. Called exactly once.
    fn release(&mut self);
}

/// Headless-Chromium engine. Each launch spawns a dedicated browser
/// process with isolation flags suited to constrained container hosts.
pub struct ChromiumEngine {
    config: RendererConfig,
}

impl ChromiumEngine {
    /// Creates an engine from renderer configuration.
    #[must_use]
    pub fn new(config: RendererConfig) -> Self {
        Self { config }
    }
}

impl RenderEngine for ChromiumEngine {
    fn launch(&self) -> Result<Box<dyn RenderSession>, RenderError> {
        let options = LaunchOptions::default_builder()
            .headless(true)
            .sandbox(false)
            .args(vec![
                OsStr::new("--disable-gpu"),
                OsStr::new("--disable-dev-shm-usage"),
                OsStr::new("--no-zygote"),
                OsStr::new("--hide-scrollbars"),
            ])
            .path(self.config.chrome_path.clone().map(PathBuf::from))
            .idle_browser_timeout(Duration::from_secs(self.config.render_timeout_secs))
            .build()
            .map_err(|e| RenderError::Engine(e.to_string()))?;

        let browser = Browser::new(options).map_err(|e| RenderError::Engine(e.to_string()))?;
        let tab = browser
            .new_tab()
            .map_err(|e| RenderError::Engine(e.to_string()))?;
        tab.set_default_timeout(Duration::from_secs(self.config.launch_timeout_secs));

        debug!("launched chromium render session");
        Ok(Box::new(ChromiumSession {
            browser: Some(browser),
            tab,
        }))
    }
}

struct ChromiumSession {
    // Option so release can drop the browser (killing the child process)
    // while the session itself is still alive.
    browser: Option<Browser>,
    tab: Arc<Tab>,
}

impl RenderSession for ChromiumSession {
    fn print_to_pdf(&mut self, html: &str) -> Result<Vec<u8>, RenderError> {
        // A data URL avoids touching the filesystem; navigation completes
        // on structural DOM readiness, not full resource settle.
        let url = format!("data:text/html;base64,{}", BASE64.encode(html));
        self.tab
            .navigate_to(&url)
            .and_then(|tab| tab.wait_until_navigated())
            .map_err(|e| RenderError::Engine(e.to_string()))?;

        self.tab
            .print_to_pdf(Some(pdf_options()))
            .map_err(|e| RenderError::Engine(e.to_string()))
    }

    fn release(&mut self) {
        if let Some(browser) = self.browser.take() {
            drop(browser);
            debug!("released chromium render session");
        }
    }
}

/// A4 portrait, print backgrounds, uniform margins.
fn pdf_options() -> PrintToPdfOptions {
    PrintToPdfOptions {
        print_background: Some(true),
        paper_width: Some(8.27),
        paper_height: Some(11.69),
        margin_top: Some(0.4),
        margin_bottom: Some(0.4),
        margin_left: Some(0.4),
        margin_right: Some(0.4),
        prefer_css_page_size: Some(true),
        ..PrintToPdfOptions::default()
    }
}
