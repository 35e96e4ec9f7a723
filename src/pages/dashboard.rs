use yew::prelude::*;

use crate::app::{page_shell, Dashboard};
use crate::charts::expense_totals_by_category;
use crate::components::charts::DoughnutChart;
use crate::components::icons::icon_trending_up;
use crate::components::stat_card::{StatCard, StatIcon};
use crate::format::format_currency;
use crate::models::BudgetStatus;

const BREAKDOWN_MAX_CHARS: usize = 50;

/// `Salario: $ 2.000.000, Bonos: …` for the income card, cut at 50 characters.
pub fn income_breakdown_line(breakdown: &[(String, f64)]) -> Option<String> {
    if breakdown.is_empty() {
        return None;
    }
    let details = breakdown
        .iter()
        .map(|(cat, amount)| format!("{}: {}", cat, format_currency(amount.round() as i64)))
        .collect::<Vec<_>>()
        .join(", ");
    if details.chars().count() > BREAKDOWN_MAX_CHARS {
        let cut: String = details.chars().take(BREAKDOWN_MAX_CHARS).collect();
        Some(format!("{}...", cut))
    } else {
        Some(details)
    }
}

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let dashboard = use_context::<Dashboard>();
    let Some(Dashboard { state, .. }) = dashboard else {
        return html! {};
    };

    let summary = state.summary().cloned().unwrap_or_default();
    let breakdown = income_breakdown_line(&summary.income_breakdown);
    let active: Vec<BudgetStatus> = summary.active_budgets().cloned().collect();
    let expense_totals = expense_totals_by_category(state.transactions());

    html! {
        { page_shell(
            "Inicio",
            html! {},
            html! {
                <>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                        <StatCard title="SALDO" amount={summary.balance} icon={StatIcon::Balance} />
                        <StatCard title="INGRESOS" amount={summary.income} icon={StatIcon::Income} detail={breakdown} />
                        <StatCard title="GASTOS" amount={summary.expenses} icon={StatIcon::Expense} />
                    </div>

                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                        <div class="bg-card rounded-[10px] p-6 border border-border">
                            <h3 class="font-bold text-foreground text-lg mb-3">{"Presupuestos"}</h3>
                            if active.is_empty() {
                                <p class="text-sm text-muted-foreground">{"Nenhum orçamento ativo."}</p>
                            } else {
                                <div class="space-y-4">
                                    { for active.iter().map(budget_alert) }
                                </div>
                            }
                        </div>

                        <div class="bg-card rounded-[10px] p-6 border border-border">
                            <h3 class="font-bold text-foreground text-lg mb-3">{"Gastos por categoría"}</h3>
                            <DoughnutChart totals={expense_totals} />
                        </div>
                    </div>
                </>
            }
        ) }
    }
}

fn budget_alert(b: &BudgetStatus) -> Html {
    let fill = match b.severity_class() {
        "danger" => "bg-red-500",
        "warning" => "bg-amber-500",
        _ => "bg-primary",
    };

    html! {
        <div class="budget-item flex flex-col gap-1 text-sm">
            <div class="flex items-center justify-between">
                <strong class="text-foreground">{ b.category.clone() }</strong>
                <span class="text-muted-foreground">{ format!("{}%", b.percentage.round() as i64) }</span>
            </div>
            <div class="h-2 w-full bg-secondary rounded-full overflow-hidden">
                <div class={classes!("progress-fill", b.severity_class(), "h-full", fill)} style={format!("width: {}%", b.bar_width())}></div>
            </div>
            <div class="flex items-center justify-between text-xs text-muted-foreground">
                <span>{ format_currency(b.spent) }</span>
                <span>{ format!("Disponível: {}", format_currency(b.limit)) }</span>
            </div>
            if b.income_boost > 0 {
                <div class="flex items-center gap-1 text-xs text-emerald-600">
                    { icon_trending_up() }
                    { format!("Aumentado em {} por renda", format_currency(b.income_boost)) }
                </div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_breakdown_no_line() {
        assert_eq!(income_breakdown_line(&[]), None);
    }

    #[test]
    fn short_breakdown_is_kept_whole() {
        let breakdown = vec![("Otros".to_string(), 1500.0)];
        assert_eq!(
            income_breakdown_line(&breakdown),
            Some("Otros: $\u{a0}1.500".to_string())
        );
    }

    #[test]
    fn long_breakdown_is_truncated() {
        let breakdown = vec![
            ("Salario".to_string(), 4_500_000.0),
            ("Arriendo recibido".to_string(), 1_200_000.0),
            ("Intereses".to_string(), 35_000.0),
        ];
        let line = income_breakdown_line(&breakdown).unwrap();
        assert!(line.ends_with("..."));
        assert_eq!(line.chars().count(), BREAKDOWN_MAX_CHARS + 3);
        assert!(line.starts_with("Salario: $\u{a0}4.500.000, Arriendo recibido: "));
    }
}
