// src/app.rs

use crate::config::Config;
use crate::core::models::Host;
use crate::core::query::{filter_hosts, group_hosts, GroupBy, HostGroup};
use crate::core::report::{self, ExportFormat, ReportSummary};
use crate::core::source::LoadedScan;
use crate::error::Result;
use crate::logging;
use ratatui::widgets::{ListState, ScrollbarState};
use std::path::PathBuf;
use tracing::{error, info};

pub const SPINNER_CHARS: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub enum ExportStatus {
    Idle,
    Success(String),
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Waiting for a scan file path.
    Idle,
    Loading,
    Finished,
}

/// What typed characters edit while a scan is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Browse,
    Search,
}

pub struct App {
    pub should_quit: bool,
    pub state: AppState,
    pub input_mode: InputMode,
    pub input: String,
    pub search: String,
    pub source: Option<PathBuf>,
    pub hosts: Vec<Host>,
    pub load_error: Option<String>,
    pub group_by: GroupBy,
    pub summary: ReportSummary,
    /// Index of the selected host in display order, across all groups.
    pub selected: usize,
    pub host_list_state: ListState,
    pub detail_scroll: u16,
    /// Largest useful `detail_scroll`, updated whenever the detail pane is drawn.
    pub detail_max_scroll: u16,
    pub export_status: ExportStatus,
    pub spinner_frame: usize,
    pub show_help: bool,
    pub show_logs: bool,
    pub log_content: Vec<String>,
    /// Log file size when `log_content` was last read.
    pub log_file_len: Option<u64>,
    pub log_horizontal_scroll: usize,
    pub log_horizontal_scroll_state: ScrollbarState,
    pub config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            should_quit: false,
            state: AppState::Idle,
            input_mode: InputMode::Browse,
            input: String::new(),
            search: String::new(),
            source: None,
            hosts: Vec::new(),
            load_error: None,
            group_by: config.group_by,
            summary: ReportSummary::default(),
            selected: 0,
            host_list_state: ListState::default(),
            detail_scroll: 0,
            detail_max_scroll: 0,
            export_status: ExportStatus::Idle,
            spinner_frame: 0,
            show_help: false,
            show_logs: config.show_logs,
            log_content: Vec::new(),
            log_file_len: None,
            log_horizontal_scroll: 0,
            log_horizontal_scroll_state: ScrollbarState::default(),
            config,
        }
    }

    /// Switches to `Loading` and hands back the path to read, or `None` when
    /// no path has been typed.
    pub fn start_loading(&mut self) -> Option<PathBuf> {
        let path = self.input.trim();
        if path.is_empty() {
            return None;
        }
        let path = PathBuf::from(path);
        self.state = AppState::Loading;
        self.load_error = None;
        Some(path)
    }

    /// Applies the outcome of a load. A successful load replaces everything
    /// shown before; a failed one returns to path entry with the error shown.
    pub fn finish_loading(&mut self, outcome: Result<LoadedScan>) {
        match outcome {
            Ok(loaded) => {
                info!(path = %loaded.path.display(), hosts = loaded.hosts.len(), "Scan loaded into view.");
                self.hosts = loaded.hosts;
                self.source = Some(loaded.path);
                self.state = AppState::Finished;
                self.input_mode = InputMode::Browse;
                self.export_status = ExportStatus::Idle;
                self.reset_selection();
                self.update_summary();
            }
            Err(e) => {
                error!(error = %e, "Scan could not be loaded.");
                self.load_error = Some(e.to_string());
                self.state = AppState::Idle;
            }
        }
    }

    pub fn update_summary(&mut self) {
        self.summary = ReportSummary::from_hosts(&self.hosts);
    }

    /// Hosts matching the current search, grouped for display.
    pub fn groups(&self) -> Vec<HostGroup<'_>> {
        group_hosts(filter_hosts(&self.hosts, &self.search), self.group_by)
    }

    pub fn visible_host_count(&self) -> usize {
        filter_hosts(&self.hosts, &self.search).len()
    }

    pub fn selected_host(&self) -> Option<&Host> {
        self.groups()
            .into_iter()
            .flat_map(|group| group.hosts)
            .nth(self.selected)
    }

    pub fn select_next(&mut self) {
        let count = self.visible_host_count();
        if count > 0 && self.selected + 1 < count {
            self.selected += 1;
            self.detail_scroll = 0;
        }
    }

    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.detail_scroll = 0;
        }
    }

    pub fn cycle_group_by(&mut self) {
        self.group_by = self.group_by.next();
        info!(group_by = %self.group_by, "Grouping changed.");
        self.reset_selection();
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search.push(c);
        self.reset_selection();
    }

    pub fn pop_search_char(&mut self) {
        self.search.pop();
        self.reset_selection();
    }

    fn reset_selection(&mut self) {
        self.selected = 0;
        self.detail_scroll = 0;
        self.host_list_state = ListState::default();
    }

    pub fn scroll_detail_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(5);
    }

    pub fn scroll_detail_down(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_add(5).min(self.detail_max_scroll);
    }

    /// Exports the hosts currently matching the search.
    pub fn export(&mut self, format: ExportFormat) {
        let hosts: Vec<Host> = filter_hosts(&self.hosts, &self.search)
            .into_iter()
            .cloned()
            .collect();
        self.export_status = match report::export(&hosts, format, &self.config.export_dir) {
            Ok(path) => ExportStatus::Success(path.display().to_string()),
            Err(e) => {
                error!(error = %e, "Report export failed.");
                ExportStatus::Error(e.to_string())
            }
        };
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
        if self.show_logs {
            self.refresh_logs();
        }
    }

    pub fn refresh_logs(&mut self) {
        self.log_file_len = logging::log_file_len();
        self.log_content = logging::read_log_tail(self.config.log_tail);
    }

    /// The log panel only needs re-reading when the file size moved.
    fn log_is_stale(&self, current_len: Option<u64>) -> bool {
        self.log_file_len != current_len
    }

    pub fn scroll_logs_left(&mut self) {
        self.log_horizontal_scroll = self.log_horizontal_scroll.saturating_sub(4);
        self.log_horizontal_scroll_state = self.log_horizontal_scroll_state.position(self.log_horizontal_scroll);
    }

    pub fn scroll_logs_right(&mut self) {
        self.log_horizontal_scroll = self.log_horizontal_scroll.saturating_add(4);
        self.log_horizontal_scroll_state = self.log_horizontal_scroll_state.position(self.log_horizontal_scroll);
    }

    pub fn on_tick(&mut self) {
        if self.state == AppState::Loading {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_CHARS.len();
        }
        if self.show_logs && self.log_is_stale(logging::log_file_len()) {
            self.refresh_logs();
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Goes back to path entry for another file. The current path stays in
    /// the input box so it can be edited.
    pub fn reset(&mut self) {
        self.state = AppState::Idle;
        self.input_mode = InputMode::Browse;
        self.input = self
            .source
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        self.search = String::new();
        self.load_error = None;
        self.export_status = ExportStatus::Idle;
        self.reset_selection();
    }
}
