use yew::prelude::*;

use crate::app::{page_shell, Dashboard};
use crate::components::charts::LineChart;
use crate::components::icons::icon_download;
use crate::components::stat_card::{StatCard, StatIcon};
use crate::format::format_currency;
use crate::models::CategoryTotal;
use crate::pages::transactions::{input_value, select_value, FIELD_CLASS};
use crate::report::{GroupBy, ReportRequest};

#[function_component(ReportsPage)]
pub fn reports_page() -> Html {
    let dashboard = use_context::<Dashboard>();
    let request = use_state(ReportRequest::default);
    let Some(Dashboard { state, controller }) = dashboard else {
        return html! {};
    };

    let on_start = {
        let request = request.clone();
        Callback::from(move |value: String| {
            request.set(ReportRequest {
                start: value,
                ..(*request).clone()
            })
        })
        .reform(input_value)
    };
    let on_end = {
        let request = request.clone();
        Callback::from(move |value: String| {
            request.set(ReportRequest {
                end: value,
                ..(*request).clone()
            })
        })
        .reform(input_value)
    };
    let on_group = {
        let request = request.clone();
        Callback::from(move |value: String| {
            request.set(ReportRequest {
                group_by: GroupBy::from_value(&value),
                ..(*request).clone()
            })
        })
        .reform(select_value)
    };

    let on_generate = {
        let controller = controller.clone();
        let request = request.clone();
        Callback::from(move |_| controller.generate_report((*request).clone()))
    };
    let on_export = {
        let controller = controller.clone();
        let report = state.report().cloned();
        Callback::from(move |_| controller.export_report(report.as_ref()))
    };

    let results = match state.report() {
        Some(report) => html! {
            <>
                <div class="grid grid-cols-1 md:grid-cols-4 gap-6">
                    <StatCard title="INGRESOS" amount={report.stats.total_income} icon={StatIcon::Income} />
                    <StatCard title="GASTOS" amount={report.stats.total_expenses} icon={StatIcon::Expense} />
                    <StatCard title="SALDO" amount={report.stats.balance} icon={StatIcon::Balance} />
                    <div class="bg-card p-6 rounded-[10px] shadow-sm border border-border">
                        <p class="text-muted-foreground text-[10px] font-bold mb-1 tracking-widest">{"TRANSACCIONES"}</p>
                        <h3 class="text-2xl font-bold text-[#1D617A] tracking-tight">{ report.stats.transaction_count.to_string() }</h3>
                    </div>
                </div>

                <div class="bg-card rounded-[10px] p-6 border border-border">
                    <h3 class="font-bold text-foreground text-lg mb-3">{"Evolución"}</h3>
                    <LineChart points={report.evolution.clone()} />
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                    { top_categories("Top gastos", &report.top_expense_categories) }
                    { top_categories("Top ingresos", &report.top_income_categories) }
                </div>
            </>
        },
        None => html! {},
    };

    html! {
        { page_shell(
            "Informes",
            html! {
                <button onclick={on_export} class="flex items-center gap-2 border border-border px-4 py-2 rounded-xl font-bold text-sm hover:bg-secondary transition-all">
                    { icon_download() }
                    {"Exportar CSV"}
                </button>
            },
            html! {
                <>
                    <div class="bg-card rounded-[10px] p-6 border border-border">
                        <div class="grid grid-cols-1 md:grid-cols-4 gap-3 items-end">
                            <div>
                                <label class="block text-xs text-muted-foreground mb-1">{"Desde"}</label>
                                <input type="date" class={FIELD_CLASS} value={request.start.clone()} oninput={on_start} />
                            </div>
                            <div>
                                <label class="block text-xs text-muted-foreground mb-1">{"Hasta"}</label>
                                <input type="date" class={FIELD_CLASS} value={request.end.clone()} oninput={on_end} />
                            </div>
                            <div>
                                <label class="block text-xs text-muted-foreground mb-1">{"Agrupar por"}</label>
                                <select class={FIELD_CLASS} onchange={on_group}>
                                    { for GroupBy::ALL.iter().map(|g| html! {
                                        <option value={g.as_str()} selected={*g == request.group_by}>{ g.label() }</option>
                                    }) }
                                </select>
                            </div>
                            <button onclick={on_generate} class="bg-accent text-white px-4 py-2 rounded-lg text-sm">{"Generar informe"}</button>
                        </div>
                    </div>
                    { results }
                </>
            }
        ) }
    }
}

fn top_categories(title: &'static str, categories: &[CategoryTotal]) -> Html {
    html! {
        <div class="bg-card rounded-[10px] p-6 border border-border">
            <h3 class="font-bold text-foreground text-lg mb-3">{ title }</h3>
            if categories.is_empty() {
                <p class="text-center text-muted-foreground">{"Sin datos"}</p>
            } else {
                <div class="divide-y divide-border">
                    { for categories.iter().map(|cat| html! {
                        <div class="flex justify-between p-3">
                            <span class="font-medium">{ cat.category.clone() }</span>
                            <div class="text-right">
                                <div class="font-semibold text-[#1D617A]">{ format_currency(cat.total) }</div>
                                <div class="text-xs text-muted-foreground">{ format!("{} transacciones", cat.count) }</div>
                            </div>
                        </div>
                    }) }
                </div>
            }
        </div>
    }
}
