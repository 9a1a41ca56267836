//! Integration tests for expression verification

use schemata_foundation::{CstType, ExpressionStatus, ValueClass};
use schemata_language::{AnalysisResult, CheckOptions, ExpressionAnalyzer};
use schemata_loader::{CstData, LoaderConfig, SchemaData, SchemaLoader, infer_status};

use crate::{cst, load};

/// Reports a value class chosen by the leading word of the definition.
struct Keyword;

impl ExpressionAnalyzer for Keyword {
    fn check_full(&self, text: &str, _options: &CheckOptions) -> AnalysisResult {
        match text.split_whitespace().next() {
            Some("property") => AnalysisResult::success(Some(ValueClass::Property), ""),
            Some("opaque") => AnalysisResult::success(None, ""),
            Some("broken") => AnalysisResult::failure(0, "broken"),
            _ => AnalysisResult::success(Some(ValueClass::Value), ""),
        }
    }
}

fn keyword_schema() -> SchemaData {
    SchemaData::new(1)
        .with_item(CstData::new(1, "D1", CstType::Term).with_definition("property X1"))
        .with_item(CstData::new(2, "D2", CstType::Term).with_definition("opaque X1"))
        .with_item(CstData::new(3, "D3", CstType::Term).with_definition("broken X1"))
        .with_item(CstData::new(4, "D4", CstType::Term).with_definition("X1"))
        .with_item(CstData::new(5, "N1", CstType::Nominal).with_definition("broken"))
}

#[test]
fn status_mapping() {
    for cst_type in CstType::ALL {
        let nominal = cst_type == CstType::Nominal;
        let expect = |status| {
            if nominal {
                ExpressionStatus::Unknown
            } else {
                status
            }
        };
        assert_eq!(
            infer_status(cst_type, false, Some(ValueClass::Value)),
            expect(ExpressionStatus::Incorrect)
        );
        assert_eq!(infer_status(cst_type, false, None), expect(ExpressionStatus::Incorrect));
        assert_eq!(infer_status(cst_type, true, None), expect(ExpressionStatus::Incalculable));
        assert_eq!(
            infer_status(cst_type, true, Some(ValueClass::Property)),
            expect(ExpressionStatus::Property)
        );
        assert_eq!(
            infer_status(cst_type, true, Some(ValueClass::Value)),
            expect(ExpressionStatus::Verified)
        );
    }
}

#[test]
fn custom_analyzer_drives_statuses() {
    let loaded = SchemaLoader::with_analyzer(Keyword)
        .load(&keyword_schema())
        .unwrap();
    let statuses: Vec<ExpressionStatus> = loaded.items().map(|c| c.status).collect();
    assert_eq!(
        statuses,
        vec![
            ExpressionStatus::Property,
            ExpressionStatus::Incalculable,
            ExpressionStatus::Incorrect,
            ExpressionStatus::Verified,
            ExpressionStatus::Unknown,
        ]
    );

    let stats = loaded.stats();
    assert_eq!(stats.count_property, 1);
    assert_eq!(stats.count_incalculable, 1);
    assert_eq!(stats.count_errors, 1);
}

#[test]
fn one_failure_does_not_stop_the_rest() {
    let schema = SchemaData::new(1)
        .with_item(CstData::new(1, "X1", CstType::Base))
        .with_item(CstData::new(2, "D1", CstType::Term).with_definition("ℬ(X1"))
        .with_item(CstData::new(3, "D2", CstType::Term).with_definition("D1∪X1"));
    let loaded = load(&schema);

    let d1 = cst(&loaded, "D1");
    assert_eq!(d1.status, ExpressionStatus::Incorrect);
    assert!(!d1.analysis.as_ref().unwrap().errors.is_empty());
    assert_eq!(cst(&loaded, "D2").status, ExpressionStatus::Verified);
    assert_eq!(cst(&loaded, "X1").status, ExpressionStatus::Verified);
}

#[test]
fn lenient_loading_skips_the_analyzer() {
    let loaded = SchemaLoader::with_analyzer(Keyword)
        .with_config(LoaderConfig::lenient())
        .load(&keyword_schema())
        .unwrap();
    for item in loaded.items() {
        assert!(item.analysis.is_none());
        let expected = if item.cst_type == CstType::Nominal {
            ExpressionStatus::Unknown
        } else {
            ExpressionStatus::Undefined
        };
        assert_eq!(item.status, expected, "{}", item.alias);
    }
}
