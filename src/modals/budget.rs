use yew::prelude::*;

use crate::app::Dashboard;
use crate::components::amount_input::AmountInput;
use crate::components::modal::ModalShell;
use crate::format::{amount_input_value, parse_amount};
use crate::models::BudgetPayload;
use crate::pages::transactions::{select_value, FIELD_CLASS};

#[derive(Properties, PartialEq)]
pub struct BudgetModalProps {
    pub id: Option<i64>,
}

#[function_component(BudgetModal)]
pub fn budget_modal(props: &BudgetModalProps) -> Html {
    let dashboard = use_context::<Dashboard>();
    let existing = props
        .id
        .and_then(|id| dashboard.as_ref().and_then(|d| d.state.budget(id).cloned()));
    let category = {
        let initial = existing.as_ref().map(|b| b.category.clone()).unwrap_or_default();
        use_state(move || initial)
    };
    let limit = {
        let initial = existing
            .as_ref()
            .map(|b| amount_input_value(b.limit_amount))
            .unwrap_or_default();
        use_state(move || initial)
    };
    let Some(Dashboard { state, controller }) = dashboard else {
        return html! {};
    };

    let on_category = {
        let category = category.clone();
        Callback::from(move |value: String| category.set(value)).reform(select_value)
    };
    let on_limit = {
        let limit = limit.clone();
        Callback::from(move |value: String| limit.set(value))
    };

    let id = props.id;
    let on_submit = {
        let controller = controller.clone();
        let category = category.clone();
        let limit = limit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            controller.save_budget(
                id,
                BudgetPayload {
                    category: (*category).clone(),
                    limit_amount: parse_amount(&limit),
                },
            );
        })
    };
    let on_delete = {
        let controller = controller.clone();
        Callback::from(move |_| {
            if let Some(id) = id {
                controller.delete_budget(id);
            }
        })
    };
    let on_close = {
        let controller = controller.clone();
        Callback::from(move |_: ()| controller.close_modal())
    };

    let (title, save_label) = if id.is_some() {
        ("Editar Presupuesto", "Alterar")
    } else {
        ("Nuevo Presupuesto", "Incluir")
    };

    html! {
        <ModalShell title={title} {on_close}>
            <form class="space-y-4" onsubmit={on_submit}>
                <select class={FIELD_CLASS} required=true onchange={on_category}>
                    <option value="" selected={category.is_empty()}>{"Seleccione una categoría"}</option>
                    { for state.categories().iter().map(|c| html! {
                        <option value={c.name.clone()} selected={*category == c.name}>{ c.name.clone() }</option>
                    }) }
                </select>
                <AmountInput id="budgetLimit" value={(*limit).clone()} on_change={on_limit} />
                <div class="flex gap-2">
                    <button type="submit" class="flex-1 bg-primary text-primary-foreground py-2 rounded-lg font-semibold hover:opacity-90 transition-opacity">
                        { save_label }
                    </button>
                    if id.is_some() {
                        <button type="button" onclick={on_delete} class="flex-1 bg-red-600 text-white py-2 rounded-lg font-semibold hover:opacity-90">
                            {"Eliminar"}
                        </button>
                    }
                </div>
            </form>
        </ModalShell>
    }
}
