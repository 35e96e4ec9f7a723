use yew::prelude::*;

use crate::charts::{doughnut_segments, line_series, ChartBox};
use crate::format::format_currency;
use crate::models::PeriodPoint;

const RADIUS: f64 = 60.0;
const LINE_FRAME: ChartBox = ChartBox {
    width: 640.0,
    height: 240.0,
    padding: 24.0,
};

#[derive(Properties, PartialEq)]
pub struct DoughnutProps {
    pub totals: Vec<(String, i64)>,
}

/// Expenses by category as stroked arcs around one circle.
#[function_component(DoughnutChart)]
pub fn doughnut_chart(props: &DoughnutProps) -> Html {
    let circumference = 2.0 * std::f64::consts::PI * RADIUS;
    let segments = doughnut_segments(&props.totals, circumference);

    if segments.is_empty() {
        return html! { <p class="text-sm text-muted-foreground">{"Sin gastos registrados."}</p> };
    }

    html! {
        <div class="flex flex-col items-center gap-4">
            <svg width="180" height="180" viewBox="0 0 180 180">
                <g transform="rotate(-90 90 90)">
                    { for segments.iter().map(|s| html! {
                        <circle cx="90" cy="90" r={RADIUS.to_string()} fill="none" stroke={s.color} stroke-width="28"
                            stroke-dasharray={s.dash_array(circumference)}
                            stroke-dashoffset={format!("{:.2}", -s.offset)} />
                    }) }
                </g>
            </svg>
            <div class="flex flex-wrap justify-center gap-3 text-xs text-[#6b7280]">
                { for segments.iter().map(|s| html! {
                    <span class="flex items-center gap-1">
                        <span class="inline-block w-3 h-3 rounded-full" style={format!("background: {}", s.color)}></span>
                        { format!("{} ({})", s.label, format_currency(s.value)) }
                    </span>
                }) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LineChartProps {
    pub points: Vec<PeriodPoint>,
}

#[function_component(LineChart)]
pub fn line_chart(props: &LineChartProps) -> Html {
    let series = line_series(&props.points, LINE_FRAME);
    let baseline = LINE_FRAME.height - LINE_FRAME.padding;
    let label_step = (series.labels.len() / 8).max(1);

    html! {
        <div class="space-y-2">
            <div class="flex gap-4 text-xs">
                <span class="flex items-center gap-1"><span class="inline-block w-3 h-3 rounded-full bg-[#10b981]"></span>{"Ingresos"}</span>
                <span class="flex items-center gap-1"><span class="inline-block w-3 h-3 rounded-full bg-[#ef4444]"></span>{"Gastos"}</span>
            </div>
            <svg class="w-full" viewBox={format!("0 0 {} {}", LINE_FRAME.width, LINE_FRAME.height)}>
                <line x1={LINE_FRAME.padding.to_string()} y1={baseline.to_string()}
                      x2={(LINE_FRAME.width - LINE_FRAME.padding).to_string()} y2={baseline.to_string()}
                      stroke="#e5e7eb" />
                <text x="2" y={(LINE_FRAME.padding - 6.0).to_string()} font-size="10" fill="#6b7280">{ format_currency(series.max.round() as i64) }</text>
                <polyline points={series.income.clone()} fill="none" stroke="#10b981" stroke-width="2" />
                <polyline points={series.expenses.clone()} fill="none" stroke="#ef4444" stroke-width="2" />
            </svg>
            <div class="flex justify-between text-[10px] text-muted-foreground">
                { for series.labels.iter().step_by(label_step).map(|l| html! { <span>{ l.clone() }</span> }) }
            </div>
        </div>
    }
}
