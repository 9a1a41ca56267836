//! Expression verification.

use schemata_foundation::{CstType, ExpressionStatus, ValueClass};
use schemata_language::{CheckOptions, ExpressionAnalyzer};

use crate::model::Constituent;

/// Derives a constituent's status from its analysis outcome.
///
/// Nominal constituents carry no computable value and are always
/// [`ExpressionStatus::Unknown`].
#[must_use]
pub const fn infer_status(
    cst_type: CstType,
    success: bool,
    value_class: Option<ValueClass>,
) -> ExpressionStatus {
    if matches!(cst_type, CstType::Nominal) {
        return ExpressionStatus::Unknown;
    }
    match (success, value_class) {
        (false, _) => ExpressionStatus::Incorrect,
        (true, None) => ExpressionStatus::Incalculable,
        (true, Some(ValueClass::Property)) => ExpressionStatus::Property,
        (true, Some(ValueClass::Value)) => ExpressionStatus::Verified,
    }
}

/// Runs `analyzer` over every item in `visit` order and stores the result
/// and the derived status.
pub fn verify_expressions<A: ExpressionAnalyzer>(
    items: &mut [Constituent],
    visit: &[usize],
    analyzer: &A,
) {
    for &position in visit {
        let cst = &mut items[position];
        let options = CheckOptions::for_cst_type(cst.cst_type);
        let analysis = analyzer.check_full(&cst.definition_formal, &options);
        cst.status = infer_status(cst.cst_type, analysis.success, analysis.value_class);
        if !analysis.success {
            tracing::debug!(cst = %cst.alias, errors = analysis.errors.len(), "expression rejected");
        }
        cst.analysis = Some(analysis);
    }
}

/// Sets statuses without running an analyzer: nominal constituents become
/// [`ExpressionStatus::Unknown`], the rest stay undefined.
pub fn skip_verification(items: &mut [Constituent]) {
    for cst in items {
        if cst.cst_type == CstType::Nominal {
            cst.status = ExpressionStatus::Unknown;
        }
    }
}
