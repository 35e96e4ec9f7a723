use crate::models::{PeriodPoint, Transaction, TransactionType};

pub const PALETTE: [&str; 7] = [
    "#4f46e5", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#ec4899", "#6366f1",
];

/// Expense totals per category, in the order categories first appear.
pub fn expense_totals_by_category(transactions: &[Transaction]) -> Vec<(String, i64)> {
    let mut totals: Vec<(String, i64)> = Vec::new();
    for tx in transactions.iter().filter(|t| t.kind == TransactionType::Expense) {
        match totals.iter_mut().find(|(cat, _)| *cat == tx.category) {
            Some((_, total)) => *total += tx.amount,
            None => totals.push((tx.category.clone(), tx.amount)),
        }
    }
    totals
}

#[derive(Clone, Debug, PartialEq)]
pub struct ArcSegment {
    pub label: String,
    pub value: i64,
    pub color: &'static str,
    pub length: f64,
    pub offset: f64,
}

impl ArcSegment {
    pub fn dash_array(&self, circumference: f64) -> String {
        format!("{:.2} {:.2}", self.length, circumference - self.length)
    }
}

/// Splits a circle's stroke into one dash per category.
pub fn doughnut_segments(totals: &[(String, i64)], circumference: f64) -> Vec<ArcSegment> {
    let sum: i64 = totals.iter().map(|(_, v)| (*v).max(0)).sum();
    if sum == 0 {
        return vec![];
    }

    let mut offset = 0.0;
    totals
        .iter()
        .enumerate()
        .map(|(i, (label, value))| {
            let length = (*value).max(0) as f64 / sum as f64 * circumference;
            let segment = ArcSegment {
                label: label.clone(),
                value: *value,
                color: PALETTE[i % PALETTE.len()],
                length,
                offset,
            };
            offset += length;
            segment
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartBox {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl ChartBox {
    fn x(&self, index: usize, count: usize) -> f64 {
        let inner = self.width - 2.0 * self.padding;
        if count <= 1 {
            self.padding + inner / 2.0
        } else {
            self.padding + inner * index as f64 / (count - 1) as f64
        }
    }

    fn y(&self, value: f64, max: f64) -> f64 {
        let inner = self.height - 2.0 * self.padding;
        self.height - self.padding - value.max(0.0) / max * inner
    }
}

/// Income and expense polylines for the report chart, y axis from zero.
#[derive(Clone, Debug, PartialEq)]
pub struct LineSeries {
    pub labels: Vec<String>,
    pub income: String,
    pub expenses: String,
    pub max: f64,
}

pub fn line_series(points: &[PeriodPoint], frame: ChartBox) -> LineSeries {
    let peak = points
        .iter()
        .flat_map(|p| [p.income, p.expenses])
        .fold(0.0_f64, f64::max);
    let max = if peak > 0.0 { peak } else { 1.0 };

    let polyline = |pick: fn(&PeriodPoint) -> f64| {
        points
            .iter()
            .enumerate()
            .map(|(i, p)| format!("{:.1},{:.1}", frame.x(i, points.len()), frame.y(pick(p), max)))
            .collect::<Vec<_>>()
            .join(" ")
    };

    LineSeries {
        labels: points.iter().map(|p| p.period.clone()).collect(),
        income: polyline(|p| p.income),
        expenses: polyline(|p| p.expenses),
        max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(category: &str, amount: i64) -> Transaction {
        Transaction {
            id: 0,
            kind: TransactionType::Expense,
            amount,
            description: String::new(),
            category: category.to_string(),
            date: "2024-01-01".to_string(),
            user: None,
        }
    }

    #[test]
    fn totals_keep_first_seen_order_and_skip_income() {
        let mut salary = expense("Otros", 900);
        salary.kind = TransactionType::Income;
        let txs = vec![
            expense("Transporte", 10),
            expense("Salud", 5),
            salary,
            expense("Transporte", 15),
        ];
        assert_eq!(
            expense_totals_by_category(&txs),
            vec![("Transporte".to_string(), 25), ("Salud".to_string(), 5)]
        );
    }

    #[test]
    fn segments_cover_the_circle() {
        let totals = vec![("A".to_string(), 30), ("B".to_string(), 10)];
        let segments = doughnut_segments(&totals, 100.0);
        assert_eq!(segments.len(), 2);
        assert!((segments[0].length - 75.0).abs() < 1e-9);
        assert!((segments[1].offset - 75.0).abs() < 1e-9);
        assert_eq!(segments[1].color, PALETTE[1]);
        assert_eq!(segments[0].dash_array(100.0), "75.00 25.00");
    }

    #[test]
    fn no_spending_draws_nothing() {
        assert!(doughnut_segments(&[], 100.0).is_empty());
        assert!(doughnut_segments(&[("A".to_string(), 0)], 100.0).is_empty());
    }

    #[test]
    fn line_series_scales_to_peak() {
        let frame = ChartBox {
            width: 120.0,
            height: 60.0,
            padding: 10.0,
        };
        let points = vec![
            PeriodPoint {
                period: "2024-01".to_string(),
                income: 100.0,
                expenses: 50.0,
            },
            PeriodPoint {
                period: "2024-02".to_string(),
                income: 0.0,
                expenses: 100.0,
            },
        ];
        let series = line_series(&points, frame);
        assert_eq!(series.max, 100.0);
        assert_eq!(series.income, "10.0,10.0 110.0,50.0");
        assert_eq!(series.expenses, "10.0,30.0 110.0,10.0");
        assert_eq!(series.labels, vec!["2024-01", "2024-02"]);
    }

    #[test]
    fn single_point_is_centered() {
        let frame = ChartBox {
            width: 100.0,
            height: 50.0,
            padding: 0.0,
        };
        let points = vec![PeriodPoint {
            period: "2024-01".to_string(),
            income: 0.0,
            expenses: 0.0,
        }];
        let series = line_series(&points, frame);
        assert_eq!(series.income, "50.0,50.0");
    }
}
