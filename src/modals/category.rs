use yew::prelude::*;

use crate::app::Dashboard;
use crate::components::icons::icon_trash;
use crate::components::modal::ModalShell;
use crate::pages::transactions::{input_value, FIELD_CLASS};

#[function_component(CategoryModal)]
pub fn category_modal() -> Html {
    let dashboard = use_context::<Dashboard>();
    let Some(Dashboard { state, controller }) = dashboard else {
        return html! {};
    };

    let name = state.category_draft().to_string();
    let on_name = {
        let controller = controller.clone();
        Callback::from(move |value: String| controller.set_category_draft(value))
            .reform(input_value)
    };
    let on_submit = {
        let controller = controller.clone();
        let name = name.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            controller.create_category(&name);
        })
    };
    let on_close = {
        let controller = controller.clone();
        Callback::from(move |_: ()| controller.close_modal())
    };

    html! {
        <ModalShell title="Categorías" {on_close}>
            <form class="flex gap-2 mb-4" onsubmit={on_submit}>
                <input placeholder="Nueva categoría" class={FIELD_CLASS} value={name} oninput={on_name} />
                <button type="submit" class="bg-accent text-white px-4 rounded-lg text-sm">{"Agregar"}</button>
            </form>
            <ul class="divide-y divide-border max-h-80 overflow-y-auto">
                { for state.categories().iter().map(|cat| {
                    let id = cat.id;
                    let on_delete = {
                        let controller = controller.clone();
                        Callback::from(move |_| controller.delete_category(id))
                    };
                    html! {
                        <li key={id.to_string()} class="flex items-center justify-between py-2">
                            <span>{ cat.name.clone() }</span>
                            <button class="btn-delete" title="Eliminar categoría" onclick={on_delete}>{ icon_trash() }</button>
                        </li>
                    }
                }) }
            </ul>
        </ModalShell>
    }
}
