use yew::prelude::*;

use crate::app::Dashboard;
use crate::components::amount_input::AmountInput;
use crate::components::modal::ModalShell;
use crate::format::{amount_input_value, parse_amount, today_iso};
use crate::models::{Transaction, TransactionPayload, TransactionType};
use crate::pages::transactions::{input_value, select_value, FIELD_CLASS};

#[derive(Clone, Debug, PartialEq)]
struct TransactionForm {
    kind: TransactionType,
    amount: String,
    description: String,
    category: String,
    date: String,
}

impl TransactionForm {
    fn blank() -> Self {
        TransactionForm {
            kind: TransactionType::Expense,
            amount: String::new(),
            description: String::new(),
            category: String::new(),
            date: today_iso(),
        }
    }

    fn from_transaction(tx: &Transaction) -> Self {
        TransactionForm {
            kind: tx.kind,
            amount: amount_input_value(tx.amount),
            description: tx.description.clone(),
            category: tx.category.clone(),
            date: tx.date.clone(),
        }
    }

    fn payload(&self) -> TransactionPayload {
        TransactionPayload {
            kind: self.kind,
            amount: parse_amount(&self.amount),
            description: self.description.clone(),
            category: self.category.clone(),
            date: self.date.clone(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct TransactionModalProps {
    pub id: Option<i64>,
}

#[function_component(TransactionModal)]
pub fn transaction_modal(props: &TransactionModalProps) -> Html {
    let dashboard = use_context::<Dashboard>();
    let form = {
        let existing = props
            .id
            .and_then(|id| dashboard.as_ref().and_then(|d| d.state.transaction(id).cloned()));
        use_state(move || match existing {
            Some(tx) => TransactionForm::from_transaction(&tx),
            None => TransactionForm::blank(),
        })
    };
    let Some(Dashboard { state, controller }) = dashboard else {
        return html! {};
    };

    let setter = |apply: fn(&mut TransactionForm, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        })
    };
    let on_kind = setter(|f, v| f.kind = TransactionType::from_value(&v)).reform(select_value);
    let on_amount = setter(|f, v| f.amount = v);
    let on_description = setter(|f, v| f.description = v).reform(input_value);
    let on_category = setter(|f, v| f.category = v).reform(select_value);
    let on_date = setter(|f, v| f.date = v).reform(input_value);

    let on_submit = {
        let controller = controller.clone();
        let form = form.clone();
        let filters = state.filters().clone();
        let id = props.id;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            controller.save_transaction(id, form.payload(), filters.clone());
        })
    };
    let on_close = {
        let controller = controller.clone();
        Callback::from(move |_: ()| controller.close_modal())
    };

    let title = if props.id.is_some() {
        "Editar Transacción"
    } else {
        "Nueva Transacción"
    };

    html! {
        <ModalShell title={title} {on_close}>
            <form class="space-y-4" onsubmit={on_submit}>
                <select class={FIELD_CLASS} onchange={on_kind}>
                    <option value="expense" selected={form.kind == TransactionType::Expense}>{"Gasto"}</option>
                    <option value="income" selected={form.kind == TransactionType::Income}>{"Ingreso"}</option>
                </select>
                <AmountInput id="amount" value={form.amount.clone()} on_change={on_amount} />
                <input placeholder="Descripción" required=true class={FIELD_CLASS} value={form.description.clone()} oninput={on_description} />
                <select class={FIELD_CLASS} required=true onchange={on_category}>
                    <option value="" selected={form.category.is_empty()}>{"Seleccione una categoría"}</option>
                    { for state.categories().iter().map(|c| html! {
                        <option value={c.name.clone()} selected={form.category == c.name}>{ c.name.clone() }</option>
                    }) }
                </select>
                <input type="date" required=true class={FIELD_CLASS} value={form.date.clone()} oninput={on_date} />
                <button type="submit" class="w-full bg-primary text-primary-foreground py-2 rounded-lg font-semibold hover:opacity-90 transition-opacity">
                    {"Guardar"}
                </button>
            </form>
        </ModalShell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_form_round_trips_amount() {
        let tx = Transaction {
            id: 3,
            kind: TransactionType::Income,
            amount: 2_350_000,
            description: "Salario".to_string(),
            category: "Otros".to_string(),
            date: "2024-02-29".to_string(),
            user: None,
        };
        let form = TransactionForm::from_transaction(&tx);
        assert_eq!(form.amount, "2.350.000");
        let payload = form.payload();
        assert_eq!(payload.amount, Some(2_350_000));
        assert_eq!(payload.kind, TransactionType::Income);
        assert_eq!(payload.date, "2024-02-29");
    }

    #[test]
    fn empty_amount_is_sent_as_zero() {
        let mut form = TransactionForm::blank();
        form.amount = String::new();
        assert_eq!(form.payload().amount, Some(0));
    }
}
