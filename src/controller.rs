use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};
use yew::UseReducerDispatcher;

use crate::api;
use crate::filters::TransactionFilters;
use crate::http::ApiClient;
use crate::models::{BudgetPayload, Report, TransactionPayload};
use crate::report::{export_csv, CsvExport, ReportRequest, CSV_MIME};
use crate::session::Session;
use crate::state::{DashboardAction, DashboardState, DependentsView, Modal, Tab, Toast, ToastKind};

/// Runs every user flow: one round trip, then a wholesale re-fetch of what
/// changed. Failures end in a toast or a log line, never further up.
#[derive(Clone)]
pub struct Controller {
    api: ApiClient,
    session: Session,
    dispatch: UseReducerDispatcher<DashboardState>,
    toast_seq: Rc<Cell<u32>>,
    toast_timeout_ms: u32,
}

impl PartialEq for Controller {
    fn eq(&self, other: &Self) -> bool {
        self.api == other.api && Rc::ptr_eq(&self.toast_seq, &other.toast_seq)
    }
}

impl Controller {
    pub fn new(
        api: ApiClient,
        session: Session,
        dispatch: UseReducerDispatcher<DashboardState>,
        toast_timeout_ms: u32,
    ) -> Self {
        Controller {
            api,
            session,
            dispatch,
            toast_seq: Rc::new(Cell::new(0)),
            toast_timeout_ms,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn load_all(&self) {
        self.refresh_summary();
        self.refresh_transactions(TransactionFilters::default());
        self.refresh_budgets();
        self.refresh_categories();
        self.refresh_profile();
    }

    pub fn refresh_profile(&self) {
        let api = self.api.clone();
        let dispatch = self.dispatch.clone();
        spawn_local(async move {
            match api::fetch_profile(&api).await {
                Ok(profile) => dispatch.dispatch(DashboardAction::SetProfile(profile)),
                Err(e) => log::error!("failed to fetch profile: {}", e),
            }
        });
    }

    pub fn refresh_summary(&self) {
        let api = self.api.clone();
        let dispatch = self.dispatch.clone();
        spawn_local(async move {
            match api::fetch_summary(&api).await {
                Ok(summary) => dispatch.dispatch(DashboardAction::SetSummary(summary)),
                Err(e) => log::error!("failed to fetch summary: {}", e),
            }
        });
    }

    pub fn refresh_transactions(&self, filters: TransactionFilters) {
        let api = self.api.clone();
        let dispatch = self.dispatch.clone();
        spawn_local(async move {
            match api::fetch_transactions(&api, &filters).await {
                Ok(list) => dispatch.dispatch(DashboardAction::SetTransactions(list)),
                Err(e) => log::error!("failed to fetch transactions: {}", e),
            }
        });
    }

    pub fn refresh_budgets(&self) {
        let api = self.api.clone();
        let dispatch = self.dispatch.clone();
        spawn_local(async move {
            match api::fetch_budgets(&api).await {
                Ok(list) => dispatch.dispatch(DashboardAction::SetBudgets(list)),
                Err(e) => log::error!("failed to fetch budgets: {}", e),
            }
        });
    }

    pub fn refresh_categories(&self) {
        let api = self.api.clone();
        let dispatch = self.dispatch.clone();
        spawn_local(async move {
            match api::fetch_categories(&api).await {
                Ok(list) => dispatch.dispatch(DashboardAction::SetCategories(list)),
                Err(e) => log::error!("failed to fetch categories: {}", e),
            }
        });
    }

    pub fn refresh_dependents(&self) {
        let api = self.api.clone();
        let dispatch = self.dispatch.clone();
        spawn_local(async move {
            let view = match api::fetch_dependents(&api).await {
                Ok(list) => DependentsView::Ready(list),
                Err(e) => {
                    log::error!("failed to fetch dependents: {}", e);
                    DependentsView::Failed
                }
            };
            dispatch.dispatch(DashboardAction::SetDependents(view));
        });
    }

    pub fn switch_tab(&self, tab: Tab, filters: &TransactionFilters) {
        self.dispatch.dispatch(DashboardAction::SwitchTab(tab));
        match tab {
            Tab::Dashboard => self.refresh_summary(),
            Tab::Transactions => self.refresh_transactions(filters.clone()),
            Tab::Budgets => self.refresh_budgets(),
            Tab::Dependents => self.refresh_dependents(),
            Tab::Reports => {}
        }
    }

    pub fn toggle_sidebar(&self) {
        self.dispatch.dispatch(DashboardAction::ToggleSidebar);
    }

    pub fn open_modal(&self, modal: Modal) {
        self.dispatch.dispatch(DashboardAction::OpenModal(modal));
    }

    pub fn close_modal(&self) {
        self.dispatch.dispatch(DashboardAction::CloseModal);
    }

    pub fn save_transaction(
        &self,
        id: Option<i64>,
        payload: TransactionPayload,
        filters: TransactionFilters,
    ) {
        if payload.amount.is_none() {
            log::warn!("transaction amount did not parse, sending null");
        }
        let this = self.clone();
        spawn_local(async move {
            match api::save_transaction(&this.api, id, &payload).await {
                Ok(_) => {
                    this.close_modal();
                    this.toast(ToastKind::Success, "Transacción guardada con éxito");
                    this.refresh_summary();
                    this.refresh_transactions(filters);
                }
                Err(e) => {
                    log::error!("failed to save transaction (status {:?}): {}", e.status(), e);
                    this.toast(ToastKind::Error, e.to_string());
                }
            }
        });
    }

    pub fn delete_transaction(&self, id: i64, filters: TransactionFilters) {
        if !confirm("¿Eliminar esta transacción?") {
            return;
        }
        let this = self.clone();
        spawn_local(async move {
            if let Err(e) = api::delete_transaction(&this.api, id).await {
                log::error!("failed to delete transaction {}: {}", id, e);
            }
            this.refresh_summary();
            this.refresh_transactions(filters);
        });
    }

    pub fn save_budget(&self, id: Option<i64>, payload: BudgetPayload) {
        if payload.limit_amount.is_none() {
            log::warn!("budget limit did not parse, sending null");
        }
        let this = self.clone();
        spawn_local(async move {
            if let Err(e) = api::save_budget(&this.api, id, &payload).await {
                log::error!("failed to save budget: {}", e);
            }
            this.close_modal();
            this.refresh_summary();
            this.refresh_budgets();
        });
    }

    pub fn delete_budget(&self, id: i64) {
        if !confirm("¿Eliminar este presupuesto?") {
            return;
        }
        let this = self.clone();
        spawn_local(async move {
            if let Err(e) = api::delete_budget(&this.api, id).await {
                log::error!("failed to delete budget {}: {}", id, e);
            }
            this.close_modal();
            this.refresh_summary();
            this.refresh_budgets();
        });
    }

    pub fn set_category_draft(&self, name: String) {
        self.dispatch
            .dispatch(DashboardAction::SetCategoryDraft(name));
    }

    /// Blank names are ignored. The draft is cleared only once the server
    /// accepts the category.
    pub fn create_category(&self, name: &str) {
        let name = name.trim().to_string();
        if name.is_empty() {
            return;
        }
        let this = self.clone();
        spawn_local(async move {
            match api::create_category(&this.api, &name).await {
                Ok(_) => {
                    this.dispatch.dispatch(DashboardAction::CategoryCreated);
                    this.toast(ToastKind::Success, "Categoría creada");
                    this.refresh_categories();
                }
                Err(e) => {
                    log::error!("failed to create category {}: {}", name, e);
                    this.toast(ToastKind::Error, "No se pudo crear (¿ya existe?)");
                }
            }
        });
    }

    pub fn delete_category(&self, id: i64) {
        if !confirm("¿Eliminar esta categoría? Esto no afectará a las transacciones existentes, pero no podrás seleccionarla para nuevas.") {
            return;
        }
        let this = self.clone();
        spawn_local(async move {
            match api::delete_category(&this.api, id).await {
                Ok(()) => this.refresh_categories(),
                Err(e) => {
                    log::error!("failed to delete category {}: {}", id, e);
                    this.toast(ToastKind::Error, "Error al eliminar categoría");
                }
            }
        });
    }

    pub fn apply_filters(&self, filters: TransactionFilters) {
        self.dispatch
            .dispatch(DashboardAction::SetFilters(filters.clone()));
        let this = self.clone();
        spawn_local(async move {
            match api::fetch_transactions(&this.api, &filters).await {
                Ok(list) => {
                    this.dispatch.dispatch(DashboardAction::SetTransactions(list));
                    this.toast(ToastKind::Success, "Filtros aplicados");
                }
                Err(e) => {
                    log::error!("failed to apply filters: {}", e);
                    this.toast(ToastKind::Error, "Error al aplicar filtros");
                }
            }
        });
    }

    pub fn clear_filters(&self) {
        self.dispatch.dispatch(DashboardAction::ClearFilters);
        self.refresh_transactions(TransactionFilters::default());
        self.toast(ToastKind::Success, "Filtros limpiados");
    }

    pub fn generate_report(&self, request: ReportRequest) {
        let query = match request.query_pairs() {
            Ok(query) => query,
            Err(e) => {
                self.toast(ToastKind::Error, e.to_string());
                return;
            }
        };
        let this = self.clone();
        spawn_local(async move {
            match api::fetch_report(&this.api, &query).await {
                Ok(report) => {
                    this.dispatch.dispatch(DashboardAction::SetReport(report));
                    this.toast(ToastKind::Success, "Informe generado");
                }
                Err(e) => {
                    log::error!("failed to generate report: {}", e);
                    this.dispatch.dispatch(DashboardAction::ClearReport);
                    this.toast(ToastKind::Error, "Error al generar informe");
                }
            }
        });
    }

    pub fn export_report(&self, report: Option<&Report>) {
        let export = match export_csv(report) {
            Ok(export) => export,
            Err(e) => {
                self.toast(ToastKind::Error, e.to_string());
                return;
            }
        };
        match download(&export) {
            Ok(()) => self.toast(ToastKind::Success, "CSV exportado con éxito"),
            Err(e) => log::error!("csv download failed: {:?}", e),
        }
    }

    pub fn invite(&self) {
        let this = self.clone();
        spawn_local(async move {
            match api::create_invite(&this.api).await {
                Ok(invite) => {
                    let link = api::whatsapp_share_link(&invite.invite_link);
                    if let Some(window) = web_sys::window() {
                        let _ = window.open_with_url_and_target(&link, "_blank");
                    }
                }
                Err(e) => {
                    log::error!("failed to create invite: {}", e);
                    this.toast(ToastKind::Error, e.to_string());
                }
            }
        });
    }

    pub fn logout(&self) {
        self.session.logout();
    }

    pub fn toast(&self, kind: ToastKind, message: impl Into<String>) {
        let id = self.toast_seq.get().wrapping_add(1);
        self.toast_seq.set(id);
        self.dispatch.dispatch(DashboardAction::PushToast(Toast {
            id,
            kind,
            message: message.into(),
        }));

        let dispatch = self.dispatch.clone();
        let timeout = self.toast_timeout_ms;
        spawn_local(async move {
            TimeoutFuture::new(timeout).await;
            dispatch.dispatch(DashboardAction::DismissToast(id));
        });
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

fn download(export: &CsvExport) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(&export.content));
    let options = BlobPropertyBag::new();
    options.set_type(CSV_MIME);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let link: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    link.set_href(&url);
    link.set_download(&export.filename);
    link.style().set_property("visibility", "hidden")?;
    body.append_child(&link)?;
    link.click();
    body.remove_child(&link)?;
    Url::revoke_object_url(&url)
}
