use crate::tui::theme::Theme;
use ergo_lens_common::Config;
use ergo_lens_core::{Dimension, DashboardSession, ViewState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Selectors,
    Chart,
}

pub struct App {
    pub input_path: String,
    pub session: DashboardSession,
    pub view_state: ViewState,
    pub focus: Focus,
    pub selected_dim: usize, // index into Dimension::ALL
    pub selected_bin: usize, // chart-focus cursor, the hover/tooltip counterpart
    pub status_msg: String,
    pub should_quit: bool,
    pub show_help: bool,
    pub theme: Theme,
    pub config: Config,
    pub sidebar_width: u16, // runtime-adjustable, clamped 18..=40
}

impl App {
    pub fn new(input_path: String, mut session: DashboardSession, config: Config) -> Self {
        let view_state = session.refresh();
        let sidebar_width = config.display.sidebar_width.unwrap_or(26);
        Self {
            input_path,
            session,
            view_state,
            focus: Focus::Selectors,
            selected_dim: 0,
            selected_bin: 0,
            status_msg: String::from("Ready — q:quit ?:help"),
            should_quit: false,
            show_help: false,
            theme: Theme::from_name(&config.display.theme),
            config,
            sidebar_width,
        }
    }

    pub fn selected_dimension(&self) -> Dimension {
        Dimension::ALL[self.selected_dim]
    }

    pub fn selector_down(&mut self) {
        if self.selected_dim + 1 < Dimension::ALL.len() {
            self.selected_dim += 1;
        }
        self.show_dimension_help();
    }

    pub fn selector_up(&mut self) {
        if self.selected_dim > 0 {
            self.selected_dim -= 1;
        }
        self.show_dimension_help();
    }

    fn show_dimension_help(&mut self) {
        if let Some(help) = self.selected_dimension().help() {
            self.status_msg = help.to_string();
        } else {
            self.status_msg = "h/l: change value  Tab: chart  q: quit".into();
        }
    }

    /// Steps the selected dimension's value through its option list and
    /// re-runs the whole pipeline. Two selector changes in one tick still
    /// trigger two independent, fully-sequential runs.
    pub fn cycle_value(&mut self, step: isize) {
        let dim = self.selected_dimension();
        if dim == Dimension::Speed && !self.session.filters.speed_enabled() {
            self.status_msg = "Speed is pinned to \"all\" while resting".into();
            return;
        }
        let options = dim.options();
        let current = self.session.filters.value(dim);
        let idx = options.iter().position(|&o| o == current).unwrap_or(0) as isize;
        let next = (idx + step).rem_euclid(options.len() as isize) as usize;
        self.session.filters.set(dim, options[next]);
        self.refresh();
    }

    pub fn reset_filters(&mut self) {
        self.session.filters = Default::default();
        self.refresh();
        self.status_msg = "Filters reset".into();
    }

    /// One pipeline run: the previous view state is discarded wholesale.
    pub fn refresh(&mut self) {
        self.view_state = self.session.refresh();
        let bins = self.bin_count();
        if bins == 0 {
            self.selected_bin = 0;
        } else if self.selected_bin >= bins {
            self.selected_bin = bins - 1;
        }
        self.status_msg = format!(
            "{} of {} records match",
            self.view_state.sample_count(),
            self.session.record_count()
        );
    }

    pub fn bin_count(&self) -> usize {
        match &self.view_state {
            ViewState::Histogram { bins, .. } => bins.len(),
            ViewState::InsufficientData { .. } => 0,
        }
    }

    pub fn bin_left(&mut self) {
        if self.selected_bin > 0 {
            self.selected_bin -= 1;
        }
    }

    pub fn bin_right(&mut self) {
        if self.selected_bin + 1 < self.bin_count() {
            self.selected_bin += 1;
        }
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Selectors => Focus::Chart,
            Focus::Chart => Focus::Selectors,
        };
    }
}
