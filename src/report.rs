use csv::{QuoteStyle, WriterBuilder};
use thiserror::Error;

use crate::models::Report;

pub const CSV_HEADERS: [&str; 5] = ["Fecha", "Descripción", "Categoría", "Tipo", "Monto"];
pub const CSV_MIME: &str = "text/csv;charset=utf-8;";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Por favor, seleccione el período")]
    MissingPeriod,
    #[error("Genere un informe primero")]
    NoReport,
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV encoding error: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GroupBy {
    Day,
    Week,
    #[default]
    Month,
}

impl GroupBy {
    pub const ALL: [GroupBy; 3] = [GroupBy::Day, GroupBy::Week, GroupBy::Month];

    pub fn as_str(&self) -> &'static str {
        match self {
            GroupBy::Day => "dia",
            GroupBy::Week => "semana",
            GroupBy::Month => "mes",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GroupBy::Day => "Día",
            GroupBy::Week => "Semana",
            GroupBy::Month => "Mes",
        }
    }

    pub fn from_value(value: &str) -> Self {
        GroupBy::ALL
            .into_iter()
            .find(|g| g.as_str() == value)
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportRequest {
    pub start: String,
    pub end: String,
    pub group_by: GroupBy,
}

impl ReportRequest {
    /// Query for `GET /transactions/report`; both ends of the period are required.
    pub fn query_pairs(&self) -> Result<Vec<(&'static str, String)>, ReportError> {
        if self.start.is_empty() || self.end.is_empty() {
            return Err(ReportError::MissingPeriod);
        }
        Ok(vec![
            ("data_inicio", self.start.clone()),
            ("data_fim", self.end.clone()),
            ("agrupar_por", self.group_by.as_str().to_string()),
        ])
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CsvExport {
    pub filename: String,
    pub content: String,
}

/// Builds the downloadable CSV for the last generated report.
pub fn export_csv(report: Option<&Report>) -> Result<CsvExport, ReportError> {
    let report = report.ok_or(ReportError::NoReport)?;

    let mut content = CSV_HEADERS.join(",");
    content.push('\n');

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .has_headers(false)
        .from_writer(Vec::new());
    for tx in &report.transactions {
        writer.write_record([
            tx.date.as_str(),
            tx.description.as_str(),
            tx.category.as_str(),
            tx.kind.label(),
            tx.amount.to_string().as_str(),
        ])?;
    }
    let rows = writer
        .into_inner()
        .map_err(|e| ReportError::Csv(e.into_error().into()))?;
    content.push_str(&String::from_utf8(rows)?);

    Ok(CsvExport {
        filename: format!("informe_{}_{}.csv", report.start, report.end),
        content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ReportStats, Transaction, TransactionType};

    fn report_with(transactions: Vec<Transaction>) -> Report {
        Report {
            start: "2024-01-01".to_string(),
            end: "2024-01-31".to_string(),
            stats: ReportStats::default(),
            evolution: vec![],
            top_expense_categories: vec![],
            top_income_categories: vec![],
            transactions,
        }
    }

    fn tx(kind: TransactionType, amount: i64, description: &str) -> Transaction {
        Transaction {
            id: 1,
            kind,
            amount,
            description: description.to_string(),
            category: "Otros".to_string(),
            date: "2024-01-15".to_string(),
            user: None,
        }
    }

    #[test]
    fn report_needs_both_dates() {
        let request = ReportRequest {
            start: "2024-01-01".to_string(),
            ..Default::default()
        };
        assert!(matches!(request.query_pairs(), Err(ReportError::MissingPeriod)));
    }

    #[test]
    fn report_query_carries_grouping() {
        let request = ReportRequest {
            start: "2024-01-01".to_string(),
            end: "2024-03-31".to_string(),
            group_by: GroupBy::Week,
        };
        let pairs = request.query_pairs().unwrap();
        assert_eq!(pairs[2], ("agrupar_por", "semana".to_string()));
    }

    #[test]
    fn unknown_grouping_defaults_to_month() {
        assert_eq!(GroupBy::from_value("dia"), GroupBy::Day);
        assert_eq!(GroupBy::from_value("trimestre"), GroupBy::Month);
    }

    #[test]
    fn export_without_report_is_refused() {
        let err = export_csv(None).unwrap_err();
        assert!(matches!(err, ReportError::NoReport));
        assert_eq!(err.to_string(), "Genere un informe primero");
    }

    #[test]
    fn export_quotes_every_field() {
        let report = report_with(vec![
            tx(TransactionType::Income, 2_000_000, "Salario"),
            tx(TransactionType::Expense, 45_000, "Farmacia"),
        ]);
        let export = export_csv(Some(&report)).unwrap();
        assert_eq!(export.filename, "informe_2024-01-01_2024-01-31.csv");
        assert_eq!(
            export.content,
            "Fecha,Descripción,Categoría,Tipo,Monto\n\
             \"2024-01-15\",\"Salario\",\"Otros\",\"Ingreso\",\"2000000\"\n\
             \"2024-01-15\",\"Farmacia\",\"Otros\",\"Gasto\",\"45000\"\n"
        );
    }

    #[test]
    fn empty_report_exports_header_only() {
        let export = export_csv(Some(&report_with(vec![]))).unwrap();
        assert_eq!(export.content, "Fecha,Descripción,Categoría,Tipo,Monto\n");
    }
}
