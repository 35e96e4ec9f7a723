use yew::prelude::*;

use crate::app::Dashboard;
use crate::components::icons::{icon_alert_circle, icon_check_circle};
use crate::state::ToastKind;

#[function_component(ToastContainer)]
pub fn toast_container() -> Html {
    let dashboard = use_context::<Dashboard>();
    let Some(Dashboard { state, .. }) = dashboard else {
        return html! {};
    };

    html! {
        <div id="toast-container" class="fixed bottom-6 right-6 z-50 flex flex-col gap-2">
            { for state.toasts().iter().map(|toast| {
                let tone = match toast.kind {
                    ToastKind::Success => "bg-emerald-600",
                    ToastKind::Error => "bg-red-600",
                };
                let icon = match toast.kind {
                    ToastKind::Success => icon_check_circle(),
                    ToastKind::Error => icon_alert_circle(),
                };
                html! {
                    <div key={toast.id.to_string()} class={classes!("toast", toast.kind.class(), "flex", "items-center", "gap-2", "px-4", "py-3", "rounded-xl", "text-white", "text-sm", "shadow-lg", tone)}>
                        { icon }
                        <span class="whitespace-pre-wrap">{ toast.message.clone() }</span>
                    </div>
                }
            }) }
        </div>
    }
}
