//! Coarse metric families
//!
//! Detection is a case-insensitive substring match on the metric name
//! against keyword lists (English and Russian, since the dashboards this
//! grew out of are bilingual). Families are tried in declaration order and
//! the first hit wins.

use serde::{Deserialize, Serialize};

use crate::impl_domain_enum_conversions;

const FINANCIAL_KEYWORDS: &[&str] = &[
    "сумма со скидкой",
    "выручка",
    "revenue",
    "доход",
    "себестоимость",
    "cost",
    "стоимость",
    "валовая прибыль",
    "gross profit",
    "gross_profit",
    "чистая прибыль",
    "net profit",
    "net_profit",
    "рентабельность",
    "profitability",
    "расходы",
    "expenses",
    "прибыль",
    "profit",
    "убыток",
    "loss",
];

const SALES_KEYWORDS: &[&str] = &[
    "продаж",
    "sale",
    "заказ",
    "order",
    "клиент",
    "customer",
    "покупатель",
    "товар",
    "product",
    "номенклатура",
    "конверсия",
    "conversion",
    "чек",
    "check",
];

const OPERATIONS_KEYWORDS: &[&str] = &[
    "время",
    "time",
    "длительность",
    "duration",
    "процесс",
    "process",
    "операция",
    "operation",
    "эффективность",
    "efficiency",
    "производительность",
    "productivity",
    "загрузка",
    "load",
    "использование",
    "utilization",
];

const QUALITY_KEYWORDS: &[&str] = &[
    "качество",
    "quality",
    "дефект",
    "defect",
    "ошибка",
    "error",
    "брак",
    "reject",
    "соответствие",
    "compliance",
    "стандарт",
    "standard",
];

/// Family a metric belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    Financial,
    Sales,
    Operations,
    Quality,
    #[default]
    General,
}

impl_domain_enum_conversions!(MetricKind {
    Financial => "financial",
    Sales => "sales",
    Operations => "operations",
    Quality => "quality",
    General => "general",
});

impl MetricKind {
    /// Guess the family from a metric name
    pub fn detect(name: &str) -> Self {
        let lower = name.to_lowercase();
        let table: [(&[&str], Self); 4] = [
            (FINANCIAL_KEYWORDS, Self::Financial),
            (SALES_KEYWORDS, Self::Sales),
            (OPERATIONS_KEYWORDS, Self::Operations),
            (QUALITY_KEYWORDS, Self::Quality),
        ];

        table
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|keyword| lower.contains(keyword)))
            .map_or(Self::General, |(_, kind)| *kind)
    }
}
