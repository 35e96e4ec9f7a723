use crate::models::TransactionType;

/// Transaction list filters as typed in the filter bar. Empty means unset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransactionFilters {
    pub date_from: String,
    pub date_to: String,
    pub kind: String,
    pub category: String,
    pub search: String,
}

impl TransactionFilters {
    pub fn is_active(&self) -> bool {
        !self.fields().iter().all(|(_, v)| v.is_empty())
    }

    /// Query parameters understood by `GET /transactions/`, set fields only.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        self.fields()
            .into_iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| (k, v.to_string()))
            .collect()
    }

    /// Badges for the active filters, always in field order.
    pub fn indicators(&self) -> Vec<String> {
        let mut badges = Vec::new();
        if !self.date_from.is_empty() {
            badges.push(format!("Desde: {}", self.date_from));
        }
        if !self.date_to.is_empty() {
            badges.push(format!("Hasta: {}", self.date_to));
        }
        if !self.kind.is_empty() {
            badges.push(format!("Tipo: {}", TransactionType::from_value(&self.kind).label()));
        }
        if !self.category.is_empty() {
            badges.push(format!("Categoría: {}", self.category));
        }
        if !self.search.is_empty() {
            badges.push(format!("Busca: \"{}\"", self.search));
        }
        badges
    }

    fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("data_inicio", self.date_from.as_str()),
            ("data_fim", self.date_to.as_str()),
            ("tipo", self.kind.as_str()),
            ("categoria", self.category.as_str()),
            ("busca", self.search.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_filters_are_inactive() {
        let filters = TransactionFilters::default();
        assert!(!filters.is_active());
        assert!(filters.query_pairs().is_empty());
        assert!(filters.indicators().is_empty());
    }

    #[test]
    fn query_only_carries_set_fields() {
        let filters = TransactionFilters {
            date_to: "2024-06-30".to_string(),
            category: "Salud".to_string(),
            ..Default::default()
        };
        assert_eq!(
            filters.query_pairs(),
            vec![
                ("data_fim", "2024-06-30".to_string()),
                ("categoria", "Salud".to_string())
            ]
        );
    }

    #[test]
    fn indicators_follow_fixed_order() {
        let filters = TransactionFilters {
            date_from: "2024-06-01".to_string(),
            date_to: "2024-06-30".to_string(),
            kind: "income".to_string(),
            category: "Otros".to_string(),
            search: "bono".to_string(),
        };
        assert_eq!(
            filters.indicators(),
            vec![
                "Desde: 2024-06-01",
                "Hasta: 2024-06-30",
                "Tipo: Ingreso",
                "Categoría: Otros",
                "Busca: \"bono\"",
            ]
        );
    }

    #[test]
    fn expense_type_reads_as_gasto() {
        let filters = TransactionFilters {
            kind: "expense".to_string(),
            ..Default::default()
        };
        assert_eq!(filters.indicators(), vec!["Tipo: Gasto"]);
    }

    fn field() -> impl Strategy<Value = String> {
        prop_oneof![Just(String::new()), "[a-z0-9-]{1,10}"]
    }

    proptest! {
        #[test]
        fn badges_match_non_empty_fields(
            date_from in field(),
            date_to in field(),
            kind in field(),
            category in field(),
            search in field(),
        ) {
            let filters = TransactionFilters { date_from, date_to, kind, category, search };
            let badges = filters.indicators();
            let set = filters.query_pairs();
            prop_assert_eq!(badges.len(), set.len());
            prop_assert_eq!(badges.is_empty(), !filters.is_active());

            let prefixes = ["Desde:", "Hasta:", "Tipo:", "Categoría:", "Busca:"];
            let keys = ["data_inicio", "data_fim", "tipo", "categoria", "busca"];
            for (badge, (key, _)) in badges.iter().zip(set.iter()) {
                let idx = keys.iter().position(|k| k == key).unwrap();
                prop_assert!(badge.starts_with(prefixes[idx]));
            }
        }
    }
}
