use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::app::{page_shell, Dashboard};
use crate::components::icons::{icon_edit, icon_plus, icon_trash};
use crate::filters::TransactionFilters;
use crate::format::{format_currency, format_date_display};
use crate::models::TransactionType;
use crate::state::Modal;

pub fn input_value(e: InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

pub fn select_value(e: Event) -> String {
    e.target_unchecked_into::<HtmlSelectElement>().value()
}

pub const FIELD_CLASS: &str = "w-full px-3 py-2 bg-input border border-input rounded-lg text-foreground text-sm focus:outline-none focus:ring-2 focus:ring-primary";

#[function_component(TransactionsPage)]
pub fn transactions_page() -> Html {
    let dashboard = use_context::<Dashboard>();
    let draft = use_state(|| {
        dashboard
            .as_ref()
            .map(|d| d.state.filters().clone())
            .unwrap_or_default()
    });
    let Some(Dashboard { state, controller }) = dashboard else {
        return html! {};
    };

    let setter = |apply: fn(&mut TransactionFilters, String)| {
        let draft = draft.clone();
        Callback::from(move |value: String| {
            let mut next = (*draft).clone();
            apply(&mut next, value);
            draft.set(next);
        })
    };
    let on_from = setter(|f, v| f.date_from = v).reform(input_value);
    let on_to = setter(|f, v| f.date_to = v).reform(input_value);
    let on_kind = setter(|f, v| f.kind = v).reform(select_value);
    let on_category = setter(|f, v| f.category = v).reform(select_value);
    let on_search = setter(|f, v| f.search = v).reform(input_value);

    let on_apply = {
        let controller = controller.clone();
        let draft = draft.clone();
        Callback::from(move |_| controller.apply_filters((*draft).clone()))
    };
    let on_clear = {
        let controller = controller.clone();
        let draft = draft.clone();
        Callback::from(move |_| {
            draft.set(TransactionFilters::default());
            controller.clear_filters();
        })
    };
    let on_new = {
        let controller = controller.clone();
        Callback::from(move |_| controller.open_modal(Modal::Transaction(None)))
    };

    let indicators = state.filters().indicators();
    let is_parent = state.is_parent();

    html! {
        { page_shell(
            "Transacciones",
            html! {
                <button onclick={on_new} class="flex items-center gap-2 bg-primary text-primary-foreground px-4 py-2 rounded-xl font-bold text-sm hover:opacity-90 transition-all">
                    { icon_plus() }
                    {"Nueva"}
                </button>
            },
            html! {
                <>
                    <div class="bg-card rounded-[10px] p-6 border border-border space-y-4">
                        <div class="grid grid-cols-1 md:grid-cols-5 gap-3">
                            <input type="date" class={FIELD_CLASS} value={draft.date_from.clone()} oninput={on_from} />
                            <input type="date" class={FIELD_CLASS} value={draft.date_to.clone()} oninput={on_to} />
                            <select class={FIELD_CLASS} onchange={on_kind}>
                                <option value="" selected={draft.kind.is_empty()}>{"Todos los tipos"}</option>
                                <option value="income" selected={draft.kind == "income"}>{"Ingreso"}</option>
                                <option value="expense" selected={draft.kind == "expense"}>{"Gasto"}</option>
                            </select>
                            <select class={FIELD_CLASS} onchange={on_category}>
                                <option value="" selected={draft.category.is_empty()}>{"Todas las categorías"}</option>
                                { for state.categories().iter().map(|c| html! {
                                    <option value={c.name.clone()} selected={draft.category == c.name}>{ c.name.clone() }</option>
                                }) }
                            </select>
                            <input type="search" placeholder="Buscar..." class={FIELD_CLASS} value={draft.search.clone()} oninput={on_search} />
                        </div>
                        <div class="flex gap-2">
                            <button onclick={on_apply} class="bg-accent text-white px-4 py-2 rounded-lg text-sm">{"Aplicar filtros"}</button>
                            <button onclick={on_clear} class="border border-border px-4 py-2 rounded-lg text-sm">{"Limpiar"}</button>
                        </div>
                        if !indicators.is_empty() {
                            <div id="filterIndicators" class="flex gap-2 flex-wrap">
                                { for indicators.iter().map(|badge| html! {
                                    <span class="badge px-2 py-1 rounded-full bg-secondary text-xs">{ badge.clone() }</span>
                                }) }
                            </div>
                        }
                    </div>

                    <div class="bg-card rounded-[10px] shadow-sm border border-border overflow-hidden">
                        <div class="overflow-x-auto">
                            <table class="w-full text-sm">
                                <thead class="bg-secondary text-left text-muted-foreground">
                                    <tr>
                                        <th class="px-6 py-3">{"Fecha"}</th>
                                        if is_parent {
                                            <th class="px-6 py-3">{"Usuario"}</th>
                                        }
                                        <th class="px-6 py-3">{"Descripción"}</th>
                                        <th class="px-6 py-3">{"Categoría"}</th>
                                        <th class="px-6 py-3 text-right">{"Monto"}</th>
                                        <th class="px-6 py-3"></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    { for state.transactions_newest_first().map(|tx| {
                                        let (sign, tone) = match tx.kind {
                                            TransactionType::Income => ("+", "text-emerald-600"),
                                            TransactionType::Expense => ("-", "text-red-600"),
                                        };
                                        let id = tx.id;
                                        let on_edit = {
                                            let controller = controller.clone();
                                            Callback::from(move |_| controller.open_modal(Modal::Transaction(Some(id))))
                                        };
                                        let on_delete = {
                                            let controller = controller.clone();
                                            let filters = state.filters().clone();
                                            Callback::from(move |_| controller.delete_transaction(id, filters.clone()))
                                        };
                                        let owner = tx.user.as_ref().map(|u| u.username.clone()).unwrap_or_else(|| "Eu".to_string());

                                        html! {
                                            <tr key={id.to_string()} class="border-t border-border">
                                                <td class="px-6 py-3">{ format_date_display(&tx.date) }</td>
                                                if is_parent {
                                                    <td class="px-6 py-3 text-xs text-muted-foreground">{ owner }</td>
                                                }
                                                <td class="px-6 py-3">{ tx.description.clone() }</td>
                                                <td class="px-6 py-3"><span class="badge px-2 py-1 rounded-full bg-secondary text-xs">{ tx.category.clone() }</span></td>
                                                <td class={classes!("px-6", "py-3", "text-right", "font-semibold", tone)}>
                                                    { format!("{} {}", sign, format_currency(tx.amount)) }
                                                </td>
                                                <td class="px-6 py-3">
                                                    <div class="flex gap-2 justify-end">
                                                        <button class="btn-edit" onclick={on_edit}>{ icon_edit() }</button>
                                                        <button class="btn-delete" onclick={on_delete}>{ icon_trash() }</button>
                                                    </div>
                                                </td>
                                            </tr>
                                        }
                                    }) }
                                </tbody>
                            </table>
                        </div>
                    </div>
                </>
            }
        ) }
    }
}
