//! Application state for the xray viewer.

use std::path::PathBuf;

use tracing::{info, warn};
use xray_core::{AnalysisResult, Layout, LoadError, StatGroup, StatValue};

use crate::theme::Theme;

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

pub struct AppState {
    pub running: bool,

    // Document
    pub xray: AnalysisResult,
    pub layout: Layout,
    pub source: PathBuf,
    pub layout_path: Option<PathBuf>,

    // View
    pub show_descriptions: bool,
    /// Index of the first visible group.
    pub scroll: usize,
    pub theme: Theme,

    pub status_message: Option<(String, StatusLevel)>,
}

impl AppState {
    pub fn new(
        xray: AnalysisResult,
        layout: Layout,
        source: PathBuf,
        layout_path: Option<PathBuf>,
    ) -> Self {
        Self {
            running: true,
            xray,
            layout,
            source,
            layout_path,
            show_descriptions: false,
            scroll: 0,
            theme: Theme::default(),
            status_message: None,
        }
    }

    /// Groups with at least one present statistic, in layout order.
    pub fn groups(&self) -> Vec<StatGroup<'_, StatValue>> {
        self.layout.render(&self.xray, self.show_descriptions)
    }

    pub fn visible_group_count(&self) -> usize {
        self.groups().len()
    }

    pub fn toggle_descriptions(&mut self) {
        self.show_descriptions = !self.show_descriptions;
        let state = if self.show_descriptions { "shown" } else { "hidden" };
        self.set_status(format!("Descriptions {state}"));
    }

    fn max_scroll(&self) -> usize {
        self.visible_group_count().saturating_sub(1)
    }

    pub fn scroll_down(&mut self) {
        self.scroll = (self.scroll + 1).min(self.max_scroll());
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_top(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_bottom(&mut self) {
        self.scroll = self.max_scroll();
    }

    /// Re-read the xray and layout from disk. On failure the current
    /// document is kept and the error lands in the status bar.
    pub fn reload(&mut self) {
        match self.load_from_disk() {
            Ok((xray, layout)) => {
                self.xray = xray;
                self.layout = layout;
                self.scroll = self.scroll.min(self.max_scroll());
                info!(path = %self.source.display(), "reloaded xray");
                self.set_status(format!("Reloaded {}", self.source_name()));
            }
            Err(e) => {
                warn!(error = %e, "reload failed");
                self.set_error(format!("Reload failed: {e}"));
            }
        }
    }

    fn load_from_disk(&self) -> Result<(AnalysisResult, Layout), LoadError> {
        let xray = AnalysisResult::from_json_file(&self.source)?;
        let layout = match &self.layout_path {
            Some(path) => Layout::from_file(path)?,
            None => self.layout.clone(),
        };
        Ok((xray, layout))
    }

    pub fn source_name(&self) -> String {
        self.source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source.display().to_string())
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Error));
    }
}
