use yew::prelude::*;

use crate::app::{page_shell, Dashboard};
use crate::components::icons::{icon_chevron_right, icon_plus};
use crate::format::format_currency;
use crate::state::Modal;

#[function_component(BudgetsPage)]
pub fn budgets_page() -> Html {
    let dashboard = use_context::<Dashboard>();
    let Some(Dashboard { state, controller }) = dashboard else {
        return html! {};
    };

    let on_new = {
        let controller = controller.clone();
        Callback::from(move |_| controller.open_modal(Modal::Budget(None)))
    };

    html! {
        { page_shell(
            "Presupuestos",
            html! {
                <button onclick={on_new} class="flex items-center gap-2 bg-primary text-primary-foreground px-4 py-2 rounded-xl font-bold text-sm hover:opacity-90 transition-all">
                    { icon_plus() }
                    {"Nuevo"}
                </button>
            },
            html! {
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                    { for state.budgets().iter().map(|b| {
                        let id = b.id;
                        let onclick = {
                            let controller = controller.clone();
                            Callback::from(move |_| controller.open_modal(Modal::Budget(Some(id))))
                        };
                        html! {
                            <div key={id.to_string()} class="budget-mgmt-card bg-card p-6 rounded-[10px] border border-border cursor-pointer hover:shadow-md" {onclick}>
                                <div class="flex justify-between items-start">
                                    <div>
                                        <h3 class="text-base text-foreground mb-1">{ b.category.clone() }</h3>
                                        <span class="text-sm text-muted-foreground">{"Límite"}</span>
                                    </div>
                                    { icon_chevron_right() }
                                </div>
                                <p class="text-2xl font-bold text-[#1D617A] mt-4">{ format_currency(b.limit_amount) }</p>
                            </div>
                        }
                    }) }
                </div>
            }
        ) }
    }
}
