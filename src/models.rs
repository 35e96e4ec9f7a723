use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::format::deserialize_amount;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    #[default]
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::Income => "Ingreso",
            TransactionType::Expense => "Gasto",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "income" => TransactionType::Income,
            _ => TransactionType::Expense,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Owner {
    pub username: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Transaction {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    #[serde(deserialize_with = "deserialize_amount")]
    pub amount: i64,
    pub description: String,
    pub category: String,
    pub date: String,
    #[serde(default)]
    pub user: Option<Owner>,
}

/// Body of `POST /transactions/` and `PUT /transactions/{id}`.
///
/// `amount` is `None` when the typed amount did not parse; it goes out as
/// `null` and the API answers with a validation error.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TransactionPayload {
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: Option<i64>,
    pub description: String,
    pub category: String,
    pub date: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Budget {
    pub id: i64,
    pub category: String,
    #[serde(deserialize_with = "deserialize_amount")]
    pub limit_amount: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BudgetPayload {
    pub category: String,
    pub limit_amount: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CategoryPayload {
    pub name: String,
}

/// Budget usage as computed by `GET /summary`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BudgetStatus {
    #[serde(default)]
    pub id: Option<i64>,
    pub category: String,
    #[serde(deserialize_with = "deserialize_amount")]
    pub limit: i64,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub original_limit: i64,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub income_boost: i64,
    #[serde(deserialize_with = "deserialize_amount")]
    pub spent: i64,
    pub percentage: f64,
    #[serde(default)]
    pub alert: bool,
    #[serde(default)]
    pub critical: bool,
}

impl BudgetStatus {
    pub fn is_active(&self) -> bool {
        self.limit > 0 || self.spent > 0
    }

    pub fn bar_width(&self) -> f64 {
        self.percentage.min(100.0)
    }

    pub fn severity_class(&self) -> &'static str {
        if self.critical {
            "danger"
        } else if self.alert {
            "warning"
        } else {
            ""
        }
    }
}

/// Reads a `{category: amount}` object keeping the order the server sent.
fn deserialize_breakdown<'de, D>(deserializer: D) -> Result<Vec<(String, f64)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct BreakdownVisitor;

    impl<'de> Visitor<'de> for BreakdownVisitor {
        type Value = Vec<(String, f64)>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of category to amount")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry::<String, f64>()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(BreakdownVisitor)
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Summary {
    #[serde(deserialize_with = "deserialize_amount")]
    pub balance: i64,
    #[serde(deserialize_with = "deserialize_amount")]
    pub income: i64,
    #[serde(deserialize_with = "deserialize_amount")]
    pub expenses: i64,
    #[serde(default, deserialize_with = "deserialize_breakdown")]
    pub income_breakdown: Vec<(String, f64)>,
    #[serde(default)]
    pub budgets: Vec<BudgetStatus>,
}

impl Summary {
    pub fn active_budgets(&self) -> impl Iterator<Item = &BudgetStatus> {
        self.budgets.iter().filter(|b| b.is_active())
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub parent_id: Option<i64>,
}

impl UserProfile {
    /// Accounts without a parent own the family group.
    pub fn is_parent(&self) -> bool {
        self.parent_id.is_none()
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Dependent {
    #[serde(default)]
    pub id: Option<i64>,
    pub username: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Invite {
    pub invite_link: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ReportStats {
    #[serde(rename = "total_receitas", deserialize_with = "deserialize_amount")]
    pub total_income: i64,
    #[serde(rename = "total_despesas", deserialize_with = "deserialize_amount")]
    pub total_expenses: i64,
    #[serde(rename = "saldo", deserialize_with = "deserialize_amount")]
    pub balance: i64,
    #[serde(rename = "quantidade_transacoes")]
    pub transaction_count: u64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PeriodPoint {
    #[serde(rename = "periodo")]
    pub period: String,
    #[serde(rename = "receitas")]
    pub income: f64,
    #[serde(rename = "despesas")]
    pub expenses: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CategoryTotal {
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(deserialize_with = "deserialize_amount")]
    pub total: i64,
    #[serde(rename = "quantidade")]
    pub count: u64,
}

/// Result of `GET /transactions/report`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Report {
    #[serde(rename = "data_inicio")]
    pub start: String,
    #[serde(rename = "data_fim")]
    pub end: String,
    #[serde(rename = "estatisticas")]
    pub stats: ReportStats,
    #[serde(rename = "evolucao_temporal", default)]
    pub evolution: Vec<PeriodPoint>,
    #[serde(rename = "top_categorias_despesas", default)]
    pub top_expense_categories: Vec<CategoryTotal>,
    #[serde(rename = "top_categorias_receitas", default)]
    pub top_income_categories: Vec<CategoryTotal>,
    #[serde(rename = "transacoes", default)]
    pub transactions: Vec<Transaction>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_reads_backend_shape() {
        let tx: Transaction = serde_json::from_str(
            r#"{"id": 7, "type": "income", "amount": 1500000.0, "description": "Salario",
                "category": "Otros", "date": "2024-05-01", "user": {"username": "hijo"}}"#,
        )
        .unwrap();
        assert_eq!(tx.kind, TransactionType::Income);
        assert_eq!(tx.amount, 1_500_000);
        assert_eq!(tx.user.map(|u| u.username), Some("hijo".to_string()));
    }

    #[test]
    fn payload_sends_unparsed_amount_as_null() {
        let payload = TransactionPayload {
            kind: TransactionType::Expense,
            amount: None,
            description: "Mercado".to_string(),
            category: "Alimentación".to_string(),
            date: "2024-05-02".to_string(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["type"], "expense");
        assert!(json["amount"].is_null());
    }

    #[test]
    fn summary_filters_inactive_budgets() {
        let summary: Summary = serde_json::from_str(
            r#"{"balance": 10, "income": 20, "expenses": 10, "income_breakdown": {},
                "budgets": [
                  {"id": 1, "category": "Salud", "limit": 0, "original_limit": 0,
                   "income_boost": 0, "spent": 0, "percentage": 0, "alert": false, "critical": false},
                  {"id": 2, "category": "Vivienda", "limit": 100, "original_limit": 100,
                   "income_boost": 0, "spent": 95, "percentage": 95.0, "alert": true, "critical": true}
                ]}"#,
        )
        .unwrap();
        let active: Vec<_> = summary.active_budgets().map(|b| b.category.as_str()).collect();
        assert_eq!(active, vec!["Vivienda"]);
        assert_eq!(summary.budgets[1].severity_class(), "danger");
    }

    #[test]
    fn income_breakdown_keeps_server_order() {
        let summary: Summary = serde_json::from_str(
            r#"{"balance": 0, "income": 0, "expenses": 0,
                "income_breakdown": {"Salario": 4500000.0, "Arriendo recibido": 1200000, "Bonos": 1000.0}}"#,
        )
        .unwrap();
        let names: Vec<&str> = summary
            .income_breakdown
            .iter()
            .map(|(name, _)| name.as_str())
            .collect();
        assert_eq!(names, vec!["Salario", "Arriendo recibido", "Bonos"]);
        assert_eq!(summary.income_breakdown[1].1, 1_200_000.0);
    }

    #[test]
    fn budget_bar_is_capped() {
        let status = BudgetStatus {
            id: Some(1),
            category: "Ocio".to_string(),
            limit: 100,
            original_limit: 100,
            income_boost: 0,
            spent: 180,
            percentage: 180.0,
            alert: true,
            critical: false,
        };
        assert_eq!(status.bar_width(), 100.0);
        assert_eq!(status.severity_class(), "warning");
    }

    #[test]
    fn report_maps_wire_keys() {
        let report: Report = serde_json::from_str(
            r#"{"data_inicio": "2024-01-01", "data_fim": "2024-01-31",
                "estatisticas": {"total_receitas": 300, "total_despesas": 120.5,
                                 "saldo": 179.5, "quantidade_transacoes": 4},
                "evolucao_temporal": [{"periodo": "2024-01", "receitas": 300, "despesas": 120.5}],
                "top_categorias_despesas": [{"categoria": "Salud", "total": 120.5, "quantidade": 2}],
                "top_categorias_receitas": [],
                "transacoes": []}"#,
        )
        .unwrap();
        assert_eq!(report.stats.transaction_count, 4);
        assert_eq!(report.stats.total_expenses, 121);
        assert_eq!(report.evolution[0].period, "2024-01");
        assert_eq!(report.top_expense_categories[0].count, 2);
    }

    #[test]
    fn profile_without_parent_is_parent() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"id": 1, "username": "ana", "role": "admin", "parent_id": null}"#)
                .unwrap();
        assert!(profile.is_parent());
    }
}
