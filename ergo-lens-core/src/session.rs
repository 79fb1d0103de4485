use crate::filter::FilterState;
use crate::histogram::Bin;
use crate::record::Record;
use crate::scale::DomainPolicy;
use crate::view::ViewState;

/// Pure pipeline: (dataset, filter state, domain policy) -> view state.
/// The renderer subscribes to the result; nothing here touches UI state.
pub fn build_view(records: &[Record], filters: &FilterState, policy: &DomainPolicy) -> ViewState {
    let filtered = filters.apply(records);
    ViewState::assemble(&filtered, filters.sex(), policy)
}

/// Owns the coerced dataset (read-only after load), the filter state, and
/// the last bin sequence.
///
/// `previous_bins` is replaced wholesale whenever a run produces a
/// histogram and is read only for optional diffing against the next run; an
/// insufficient-data run leaves it untouched.
pub struct DashboardSession {
    dataset: Vec<Record>,
    pub filters: FilterState,
    policy: DomainPolicy,
    previous_bins: Vec<Bin>,
}

impl DashboardSession {
    pub fn new(dataset: Vec<Record>, policy: DomainPolicy) -> Self {
        Self {
            dataset,
            filters: FilterState::default(),
            policy,
            previous_bins: Vec::new(),
        }
    }

    pub fn dataset(&self) -> &[Record] {
        &self.dataset
    }

    pub fn record_count(&self) -> usize {
        self.dataset.len()
    }

    pub fn policy(&self) -> DomainPolicy {
        self.policy
    }

    pub fn previous_bins(&self) -> &[Bin] {
        &self.previous_bins
    }

    /// Runs the full pipeline against the current filter state. Called by
    /// the selector-change handler; each run completes before the next user
    /// event is processed.
    pub fn refresh(&mut self) -> ViewState {
        let view = build_view(&self.dataset, &self.filters, &self.policy);
        if let ViewState::Histogram { bins, .. } = &view {
            self.previous_bins = bins.clone();
        }
        view
    }
}
