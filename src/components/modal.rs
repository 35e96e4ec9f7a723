use yew::prelude::*;

use crate::components::icons::icon_x;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: AttrValue,
    pub on_close: Callback<()>,
    pub children: Children,
}

/// Centered dialog; a click on the backdrop closes it.
#[function_component(ModalShell)]
pub fn modal_shell(props: &ModalProps) -> Html {
    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_close_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal fixed inset-0 z-40 flex items-center justify-center bg-black/40" onclick={on_backdrop}>
            <div class="w-full max-w-md bg-card border border-border rounded-2xl shadow-lg p-6" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <div class="flex items-center justify-between mb-4">
                    <h2 class="text-xl font-bold text-foreground">{ props.title.clone() }</h2>
                    <button type="button" class="p-1 rounded-full hover:bg-secondary" aria-label="Cerrar" onclick={on_close_button}>
                        { icon_x() }
                    </button>
                </div>
                { for props.children.iter() }
            </div>
        </div>
    }
}
