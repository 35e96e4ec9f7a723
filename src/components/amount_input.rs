use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::format::format_amount_input;

#[derive(Properties, PartialEq)]
pub struct AmountInputProps {
    pub value: String,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or(AttrValue::from("0"))]
    pub placeholder: AttrValue,
}

/// Text input that re-masks its own value on every keystroke.
#[function_component(AmountInput)]
pub fn amount_input(props: &AmountInputProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let masked = format_amount_input(&input.value());
                input.set_value(&masked);
                on_change.emit(masked);
            }
        })
    };

    html! {
        <input
            id={props.id.clone()}
            type="text"
            inputmode="numeric"
            placeholder={props.placeholder.clone()}
            value={props.value.clone()}
            {oninput}
            class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary"
        />
    }
}
