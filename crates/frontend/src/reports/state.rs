use contracts::reports::Report;
use leptos::prelude::*;
use std::collections::HashSet;

pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// View state for the selected report.
///
/// The selection set is scoped to the report identity: it survives page
/// navigation within one report and is cleared the moment a different
/// report is selected.
#[derive(Clone, Debug)]
pub struct ReportViewState {
    pub report: Option<Report>,

    // pagination (1-based, matching the service)
    pub page: u32,
    pub page_size: u32,

    // selection
    pub selected_ids: HashSet<String>,
}

impl Default for ReportViewState {
    fn default() -> Self {
        Self {
            report: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            selected_ids: HashSet::new(),
        }
    }
}

impl ReportViewState {
    pub fn report_id(&self) -> Option<&str> {
        self.report.as_ref().map(|r| r.id.as_str())
    }

    /// Switches to a report and rewinds to the first page. The selection
    /// is cleared only when the report identity actually changes.
    pub fn select_report(&mut self, report: Report) {
        if self.report_id() != Some(report.id.as_str()) {
            self.selected_ids.clear();
        }
        self.report = Some(report);
        self.page = 1;
    }

    /// Navigates within the current report; the selection persists.
    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// Changes the page size and rewinds to the first page.
    pub fn set_page_size(&mut self, size: u32) {
        if size != self.page_size {
            self.page_size = size;
            self.page = 1;
        }
    }

    pub fn toggle_row(&mut self, id: &str) {
        if !self.selected_ids.remove(id) {
            self.selected_ids.insert(id.to_string());
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected_ids.clear();
    }
}

pub fn create_state() -> RwSignal<ReportViewState> {
    RwSignal::new(ReportViewState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(id: &str) -> Report {
        serde_json::from_value(serde_json::json!({ "id": id, "name": id })).unwrap()
    }

    #[test]
    fn selecting_another_report_clears_the_selection() {
        let mut state = ReportViewState::default();
        state.select_report(report("r1"));
        state.toggle_row("a");
        state.toggle_row("b");
        assert_eq!(state.selected_ids.len(), 2);

        state.select_report(report("r2"));
        assert!(state.selected_ids.is_empty());
        assert_eq!(state.page, 1);
    }

    #[test]
    fn page_navigation_preserves_the_selection() {
        let mut state = ReportViewState::default();
        state.select_report(report("r1"));
        state.toggle_row("a");

        state.set_page(2);
        state.set_page(3);
        assert!(state.selected_ids.contains("a"));

        // Reselecting the same report keeps the selection too.
        state.select_report(report("r1"));
        assert!(state.selected_ids.contains("a"));
        assert_eq!(state.page, 1);
    }

    #[test]
    fn page_size_change_rewinds_to_the_first_page() {
        let mut state = ReportViewState::default();
        state.select_report(report("r1"));
        state.set_page(4);
        state.set_page_size(50);
        assert_eq!(state.page_size, 50);
        assert_eq!(state.page, 1);

        // Re-picking the current size is a no-op.
        state.set_page(2);
        state.set_page_size(50);
        assert_eq!(state.page, 2);
    }

    #[test]
    fn toggling_a_row_flips_membership() {
        let mut state = ReportViewState::default();
        state.toggle_row("a");
        assert!(state.selected_ids.contains("a"));
        state.toggle_row("a");
        assert!(!state.selected_ids.contains("a"));
    }

    #[test]
    fn page_is_never_below_one() {
        let mut state = ReportViewState::default();
        state.set_page(0);
        assert_eq!(state.page, 1);
    }
}
