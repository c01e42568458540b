//! Normalized output record

use crate::types::TargetField;
use serde::Serialize;

/// One transaction in the YNAB import format
///
/// Every field is already rendered; a field the source bank cannot provide
/// is an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TargetRecord {
    pub date: String,
    pub payee: String,
    pub category: String,
    pub memo: String,
    pub outflow: String,
    pub inflow: String,
}

impl TargetRecord {
    /// Mutable access to the field backing a target column
    pub fn field_mut(&mut self, field: TargetField) -> &mut String {
        match field {
            TargetField::Date => &mut self.date,
            TargetField::Payee => &mut self.payee,
            TargetField::Category => &mut self.category,
            TargetField::Memo => &mut self.memo,
            TargetField::Outflow => &mut self.outflow,
            TargetField::Inflow => &mut self.inflow,
        }
    }
}
