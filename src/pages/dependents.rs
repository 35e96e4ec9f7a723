use yew::prelude::*;

use crate::app::{page_shell, Dashboard};
use crate::components::icons::{icon_plus, icon_user_check};
use crate::state::DependentsView;

#[function_component(DependentsPage)]
pub fn dependents_page() -> Html {
    let dashboard = use_context::<Dashboard>();
    let Some(Dashboard { state, controller }) = dashboard else {
        return html! {};
    };

    let on_invite = {
        let controller = controller.clone();
        Callback::from(move |_| controller.invite())
    };

    let body = match state.dependents() {
        DependentsView::Loading => html! {
            <p class="text-center p-4 text-muted-foreground">{"Cargando..."}</p>
        },
        DependentsView::Failed => html! {
            <p class="text-center p-4 text-red-600">{"Erro ao carregar lista."}</p>
        },
        DependentsView::Ready(list) if list.is_empty() => html! {
            <>
                <p class="text-center p-4">{"Nenhum dependente cadastrado ainda."}</p>
                <p class="text-center text-sm text-muted-foreground">{"Use o botão acima para enviar o convite."}</p>
            </>
        },
        DependentsView::Ready(list) => html! {
            <div class="divide-y divide-border">
                { for list.iter().map(|d| html! {
                    <div class="budget-item flex justify-between items-center p-4">
                        <div>
                            <div class="font-semibold">{ d.username.clone() }</div>
                            <div class="text-xs text-muted-foreground">{"Dependente Ativo"}</div>
                        </div>
                        <span class="text-emerald-600">{ icon_user_check() }</span>
                    </div>
                }) }
            </div>
        },
    };

    html! {
        { page_shell(
            "Dependientes",
            html! {
                <button onclick={on_invite} class="flex items-center gap-2 bg-primary text-primary-foreground px-4 py-2 rounded-xl font-bold text-sm hover:opacity-90 transition-all">
                    { icon_plus() }
                    {"Invitar por WhatsApp"}
                </button>
            },
            html! {
                <div class="bg-card rounded-[10px] border border-border">
                    { body }
                </div>
            }
        ) }
    }
}
