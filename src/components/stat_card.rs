use yew::prelude::*;

use crate::components::icons::{icon_credit_card, icon_trending_up, icon_wallet};
use crate::format::format_currency;

#[derive(Clone, Copy, PartialEq)]
pub enum StatIcon {
    Income,
    Expense,
    Balance,
}

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: &'static str,
    pub amount: i64,
    pub icon: StatIcon,
    #[prop_or_default]
    pub detail: Option<String>,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="bg-card p-6 rounded-[10px] shadow-sm border border-border flex justify-between items-start">
            <div>
                <p class="text-muted-foreground text-[10px] font-bold mb-1 tracking-widest">{ props.title }</p>
                <h3 class="text-2xl font-bold text-[#1D617A] tracking-tight">{ format_currency(props.amount) }</h3>
                if let Some(detail) = &props.detail {
                    <p class="text-xs text-emerald-600 mt-1">{ detail.clone() }</p>
                }
            </div>
            <div class="p-3 bg-[#eef4f9] rounded-[10px]">
                {
                    match props.icon {
                        StatIcon::Income => icon_trending_up(),
                        StatIcon::Expense => icon_credit_card(),
                        StatIcon::Balance => icon_wallet(),
                    }
                }
            </div>
        </div>
    }
}
