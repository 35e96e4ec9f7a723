use yew::prelude::*;

use crate::components::icons::*;
use crate::components::toast::ToastContainer;
use crate::config::AppConfig;
use crate::controller::Controller;
use crate::http::ApiClient;
use crate::modals::budget::BudgetModal;
use crate::modals::category::CategoryModal;
use crate::modals::transaction::TransactionModal;
use crate::pages::budgets::BudgetsPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::dependents::DependentsPage;
use crate::pages::reports::ReportsPage;
use crate::pages::transactions::TransactionsPage;
use crate::session::{greeting, Session};
use crate::state::{DashboardState, Modal, Tab};

/// Shared by every page: the state snapshot and the controller that changes it.
#[derive(Clone, PartialEq)]
pub struct Dashboard {
    pub state: UseReducerHandle<DashboardState>,
    pub controller: Controller,
}

#[function_component(App)]
pub fn app() -> Html {
    let state = use_reducer(DashboardState::default);

    let controller = {
        let dispatcher = state.dispatcher();
        use_state(move || {
            let config = AppConfig::from_window();
            log::info!("API base url: {:?}", config.api_base_url);
            let session = Session::new(config.login_page.clone());
            let on_unauthorized = {
                let session = session.clone();
                Callback::from(move |_| session.logout())
            };
            let api = ApiClient::new(&config.api_base_url, session.clone(), on_unauthorized);
            Controller::new(api, session, dispatcher, config.toast_timeout_ms)
        })
    };

    let logged_in = use_state(|| controller.session().is_logged_in());

    {
        let controller = (*controller).clone();
        let logged_in = *logged_in;
        use_effect_with_deps(
            move |_| {
                if logged_in {
                    controller.load_all();
                } else {
                    controller.session().redirect_to_login();
                }
                || ()
            },
            (),
        );
    }

    if !*logged_in {
        return html! {
            <div class="min-h-screen flex items-center justify-center bg-background text-muted-foreground">
                {"Redirigiendo al inicio de sesión..."}
            </div>
        };
    }

    let dashboard = Dashboard {
        state,
        controller: (*controller).clone(),
    };

    html! {
        <ContextProvider<Dashboard> context={dashboard}>
            <Layout />
        </ContextProvider<Dashboard>>
    }
}

#[function_component(Layout)]
fn layout() -> Html {
    let dashboard = use_context::<Dashboard>();
    let Some(Dashboard { state, controller }) = dashboard else {
        return html! {};
    };

    let content = match state.tab() {
        Tab::Dashboard => html! { <DashboardPage /> },
        Tab::Transactions => html! { <TransactionsPage /> },
        Tab::Budgets => html! { <BudgetsPage /> },
        Tab::Reports => html! { <ReportsPage /> },
        Tab::Dependents => html! { <DependentsPage /> },
    };

    let modal = match state.modal() {
        Some(Modal::Transaction(id)) => html! { <TransactionModal key={format!("tx-{:?}", id)} id={id} /> },
        Some(Modal::Budget(id)) => html! { <BudgetModal key={format!("budget-{:?}", id)} id={id} /> },
        Some(Modal::Categories) => html! { <CategoryModal /> },
        None => html! {},
    };

    let overlay_class = if state.sidebar_open() {
        "fixed inset-0 bg-black/40 z-30 md:hidden"
    } else {
        "hidden"
    };
    let on_overlay = {
        let controller = controller.clone();
        Callback::from(move |_| controller.toggle_sidebar())
    };

    html! {
        <div class="flex h-screen bg-background">
            <div class={overlay_class} onclick={on_overlay}></div>
            <Sidebar />

            <div class="flex-1 flex flex-col overflow-hidden">
                <Header />
                <main class="flex-1 overflow-y-auto">
                    { content }
                </main>
            </div>

            { modal }
            <ToastContainer />
        </div>
    }
}

#[function_component(Header)]
fn header() -> Html {
    let dashboard = use_context::<Dashboard>();
    let Some(Dashboard { state, controller }) = dashboard else {
        return html! {};
    };

    let session = controller.session();
    let profile_name = state.profile().and_then(|p| p.username.clone());
    let stored_name = session.user_name();
    let hello = greeting(profile_name.as_deref(), stored_name.as_deref());

    let on_menu = {
        let controller = controller.clone();
        Callback::from(move |_| controller.toggle_sidebar())
    };
    let on_new = {
        let controller = controller.clone();
        Callback::from(move |_| controller.open_modal(Modal::Transaction(None)))
    };

    html! {
        <header class="bg-[#D8E1E8] border-b border-border h-16 flex items-center justify-between px-6">
            <div class="flex items-center gap-3">
                <button class="md:hidden p-2 rounded-full hover:bg-secondary" aria-label="Menú" onclick={on_menu}>
                    { icon_menu() }
                </button>
                <span class="text-[#173E63] font-bold">{ hello }</span>
            </div>
            <button onclick={on_new} class="flex items-center gap-2 bg-primary text-primary-foreground px-4 py-2 rounded-xl font-bold text-sm hover:opacity-90 transition-all">
                { icon_plus() }
                {"Nueva Transacción"}
            </button>
        </header>
    }
}

struct NavItem {
    label: &'static str,
    tab: Tab,
    icon: fn() -> Html,
}

#[function_component(Sidebar)]
fn sidebar() -> Html {
    let dashboard = use_context::<Dashboard>();
    let Some(Dashboard { state, controller }) = dashboard else {
        return html! {};
    };

    let mut nav_items = vec![
        NavItem {
            label: "Inicio",
            tab: Tab::Dashboard,
            icon: icon_layout_grid,
        },
        NavItem {
            label: "Transacciones",
            tab: Tab::Transactions,
            icon: icon_credit_card,
        },
        NavItem {
            label: "Presupuestos",
            tab: Tab::Budgets,
            icon: icon_wallet,
        },
        NavItem {
            label: "Informes",
            tab: Tab::Reports,
            icon: icon_bar_chart,
        },
    ];
    if state.is_parent() {
        nav_items.push(NavItem {
            label: "Dependientes",
            tab: Tab::Dependents,
            icon: icon_users,
        });
    }

    let container_class = if state.sidebar_open() {
        "fixed inset-y-0 left-0 z-40 flex"
    } else {
        "hidden md:flex"
    };

    let on_categories = {
        let controller = controller.clone();
        Callback::from(move |_| controller.open_modal(Modal::Categories))
    };
    let on_logout = {
        let controller = controller.clone();
        Callback::from(move |_| controller.logout())
    };

    html! {
        <div class={container_class}>
            <div class="w-[220px] h-screen bg-[#D8E1E8] p-4 flex flex-col">
                <div class="flex items-center gap-3 px-2 mb-8">
                    <span class="text-[#173E63] text-2xl font-black tracking-tight">{"Finanzas"}</span>
                </div>

                <div class="flex-1 bg-[#173E63] rounded-[24px] flex flex-col py-6 px-3 shadow-lg">
                    <nav class="flex-1 space-y-2">
                        { for nav_items.iter().map(|item| {
                            let is_active = item.tab == state.tab();
                            let class_name = if is_active {
                                "flex items-center gap-3 px-4 py-3 rounded-xl transition-all text-[13px] font-medium bg-[#B2CBDE] text-[#173E63] w-full"
                            } else {
                                "flex items-center gap-3 px-4 py-3 rounded-xl transition-all text-[13px] font-medium text-slate-300 hover:bg-white/5 hover:text-white w-full"
                            };
                            let controller = controller.clone();
                            let filters = state.filters().clone();
                            let tab = item.tab;

                            html! {
                                <button type="button" class={class_name} onclick={Callback::from(move |_| controller.switch_tab(tab, &filters))}>
                                    <span class="shrink-0">{ (item.icon)() }</span>
                                    <span class="truncate whitespace-nowrap text-left">{ item.label }</span>
                                </button>
                            }
                        }) }
                        <button type="button" onclick={on_categories} class="flex items-center gap-3 px-4 py-3 rounded-xl transition-all text-[13px] font-medium text-slate-300 hover:bg-white/5 hover:text-white w-full">
                            <span class="shrink-0">{ icon_tag() }</span>
                            <span>{"Categorías"}</span>
                        </button>
                        if controller.session().is_admin() {
                            <a href="admin.html" class="flex items-center gap-3 px-4 py-3 rounded-xl text-[13px] font-medium text-slate-300 hover:bg-white/5 hover:text-white w-full">
                                <span class="shrink-0">{ icon_settings() }</span>
                                <span>{"Administración"}</span>
                            </a>
                        }
                    </nav>

                    <div class="mt-auto pt-4">
                        <button onclick={on_logout} class="flex items-center gap-3 w-full px-4 py-3 rounded-xl hover:bg-white/10 transition-colors text-[13px] font-medium text-slate-300">
                            { icon_log_out() }
                            <span>{"Cerrar sesión"}</span>
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Common page frame: title row with optional actions, then the body.
pub fn page_shell(title: &'static str, actions: Html, children: Html) -> Html {
    html! {
        <div class="p-8 space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold text-foreground">{ title }</h1>
                <div class="flex gap-2">{ actions }</div>
            </div>
            { children }
        </div>
    }
}
