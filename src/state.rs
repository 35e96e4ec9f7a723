use std::rc::Rc;

use yew::Reducible;

use crate::filters::TransactionFilters;
use crate::models::{Budget, Category, Dependent, Report, Summary, Transaction, UserProfile};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Dashboard,
    Transactions,
    Budgets,
    Reports,
    Dependents,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Modal {
    Transaction(Option<i64>),
    Budget(Option<i64>),
    Categories,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum DependentsView {
    #[default]
    Loading,
    Ready(Vec<Dependent>),
    Failed,
}

/// Everything the dashboard knows between two fetches.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    transactions: Vec<Transaction>,
    budgets: Vec<Budget>,
    categories: Vec<Category>,
    summary: Option<Summary>,
    profile: Option<UserProfile>,
    dependents: DependentsView,
    filters: TransactionFilters,
    report: Option<Report>,
    category_draft: String,
    tab: Tab,
    modal: Option<Modal>,
    sidebar_open: bool,
    toasts: Vec<Toast>,
}

pub enum DashboardAction {
    SetSummary(Summary),
    SetTransactions(Vec<Transaction>),
    SetBudgets(Vec<Budget>),
    SetCategories(Vec<Category>),
    SetProfile(UserProfile),
    SetDependents(DependentsView),
    SetFilters(TransactionFilters),
    ClearFilters,
    SetReport(Report),
    ClearReport,
    SetCategoryDraft(String),
    CategoryCreated,
    SwitchTab(Tab),
    OpenModal(Modal),
    CloseModal,
    ToggleSidebar,
    PushToast(Toast),
    DismissToast(u32),
}

impl Reducible for DashboardState {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

impl DashboardState {
    pub fn apply(&mut self, action: DashboardAction) {
        match action {
            DashboardAction::SetSummary(summary) => self.summary = Some(summary),
            DashboardAction::SetTransactions(list) => self.transactions = list,
            DashboardAction::SetBudgets(list) => self.budgets = list,
            DashboardAction::SetCategories(list) => self.categories = list,
            DashboardAction::SetProfile(profile) => self.profile = Some(profile),
            DashboardAction::SetDependents(view) => self.dependents = view,
            DashboardAction::SetFilters(filters) => self.filters = filters,
            DashboardAction::ClearFilters => self.filters = TransactionFilters::default(),
            DashboardAction::SetReport(report) => self.report = Some(report),
            DashboardAction::ClearReport => self.report = None,
            DashboardAction::SetCategoryDraft(name) => self.category_draft = name,
            DashboardAction::CategoryCreated => self.category_draft.clear(),
            DashboardAction::SwitchTab(tab) => {
                self.tab = tab;
                self.sidebar_open = false;
                if tab == Tab::Dependents {
                    self.dependents = DependentsView::Loading;
                }
            }
            DashboardAction::OpenModal(modal) => self.modal = Some(modal),
            DashboardAction::CloseModal => self.modal = None,
            DashboardAction::ToggleSidebar => self.sidebar_open = !self.sidebar_open,
            DashboardAction::PushToast(toast) => self.toasts.push(toast),
            DashboardAction::DismissToast(id) => self.toasts.retain(|t| t.id != id),
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Table order: the API returns oldest first.
    pub fn transactions_newest_first(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter().rev()
    }

    pub fn transaction(&self, id: i64) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    pub fn budget(&self, id: i64) -> Option<&Budget> {
        self.budgets.iter().find(|b| b.id == id)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn summary(&self) -> Option<&Summary> {
        self.summary.as_ref()
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn is_parent(&self) -> bool {
        self.profile.as_ref().map(|p| p.is_parent()).unwrap_or(false)
    }

    pub fn dependents(&self) -> &DependentsView {
        &self.dependents
    }

    pub fn filters(&self) -> &TransactionFilters {
        &self.filters
    }

    pub fn report(&self) -> Option<&Report> {
        self.report.as_ref()
    }

    /// Name typed in the category form, kept until the server accepts it.
    pub fn category_draft(&self) -> &str {
        &self.category_draft
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn modal(&self) -> Option<Modal> {
        self.modal
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ReportStats, TransactionType};
    use crate::report::{export_csv, ReportError};

    fn tx(id: i64) -> Transaction {
        Transaction {
            id,
            kind: TransactionType::Expense,
            amount: 1000 * id,
            description: format!("tx {}", id),
            category: "Otros".to_string(),
            date: "2024-01-01".to_string(),
            user: None,
        }
    }

    #[test]
    fn transactions_are_replaced_wholesale() {
        let mut state = DashboardState::default();
        state.apply(DashboardAction::SetTransactions(vec![tx(1), tx(2)]));
        state.apply(DashboardAction::SetTransactions(vec![tx(3)]));
        assert_eq!(state.transactions().len(), 1);
        assert!(state.transaction(1).is_none());
        assert_eq!(state.transaction(3).map(|t| t.amount), Some(3000));
    }

    #[test]
    fn newest_transactions_come_first() {
        let mut state = DashboardState::default();
        state.apply(DashboardAction::SetTransactions(vec![tx(1), tx(2), tx(3)]));
        let ids: Vec<i64> = state.transactions_newest_first().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn clearing_filters_resets_every_field() {
        let mut state = DashboardState::default();
        state.apply(DashboardAction::SetFilters(TransactionFilters {
            search: "pan".to_string(),
            kind: "expense".to_string(),
            ..Default::default()
        }));
        assert!(state.filters().is_active());
        state.apply(DashboardAction::ClearFilters);
        assert_eq!(state.filters(), &TransactionFilters::default());
    }

    #[test]
    fn switching_tab_closes_mobile_sidebar() {
        let mut state = DashboardState::default();
        state.apply(DashboardAction::ToggleSidebar);
        assert!(state.sidebar_open());
        state.apply(DashboardAction::SwitchTab(Tab::Budgets));
        assert_eq!(state.tab(), Tab::Budgets);
        assert!(!state.sidebar_open());
    }

    #[test]
    fn toasts_are_dismissed_by_id() {
        let mut state = DashboardState::default();
        for id in 1..=3 {
            state.apply(DashboardAction::PushToast(Toast {
                id,
                kind: ToastKind::Success,
                message: format!("toast {}", id),
            }));
        }
        state.apply(DashboardAction::DismissToast(2));
        let ids: Vec<u32> = state.toasts().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn parent_flag_follows_profile() {
        let mut state = DashboardState::default();
        assert!(!state.is_parent());
        state.apply(DashboardAction::SetProfile(UserProfile {
            id: Some(2),
            username: Some("hijo".to_string()),
            role: Some("user".to_string()),
            parent_id: Some(1),
        }));
        assert!(!state.is_parent());
    }

    #[test]
    fn category_draft_clears_only_once_created() {
        let mut state = DashboardState::default();
        state.apply(DashboardAction::SetCategoryDraft("Mascotas".to_string()));
        state.apply(DashboardAction::PushToast(Toast {
            id: 1,
            kind: ToastKind::Error,
            message: "No se pudo crear (¿ya existe?)".to_string(),
        }));
        assert_eq!(state.category_draft(), "Mascotas");
        state.apply(DashboardAction::CategoryCreated);
        assert_eq!(state.category_draft(), "");
    }

    #[test]
    fn failed_report_leaves_nothing_to_export() {
        let mut state = DashboardState::default();
        state.apply(DashboardAction::SetReport(Report {
            start: "2024-01-01".to_string(),
            end: "2024-01-31".to_string(),
            stats: ReportStats::default(),
            evolution: vec![],
            top_expense_categories: vec![],
            top_income_categories: vec![],
            transactions: vec![tx(1)],
        }));
        assert!(export_csv(state.report()).is_ok());
        state.apply(DashboardAction::ClearReport);
        assert!(state.report().is_none());
        assert!(matches!(export_csv(state.report()), Err(ReportError::NoReport)));
    }

    #[test]
    fn modal_opens_and_closes() {
        let mut state = DashboardState::default();
        state.apply(DashboardAction::OpenModal(Modal::Budget(Some(4))));
        assert_eq!(state.modal(), Some(Modal::Budget(Some(4))));
        state.apply(DashboardAction::CloseModal);
        assert_eq!(state.modal(), None);
    }
}
