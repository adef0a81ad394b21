//! Unit tests for the runtime stages working together

use docintel_core::{
    ClauseCatalog, ClauseCondition, ClauseTemplate, DecisionRules, DecisionStatus, Gender,
    MatchRule, QueryStructure,
};
use docintel_runtime::{
    ClauseMatcher, DecisionBranch, DecisionEngine, ProcessingTimeRange, ResultAssembler,
    RuntimeError,
};

fn fields(
    age: Option<u32>,
    procedure: Option<&str>,
    location: Option<&str>,
    duration: Option<&str>,
) -> QueryStructure {
    let mut fields = QueryStructure::new("test query");
    fields.age = age;
    fields.gender = Some(Gender::Female);
    fields.procedure = procedure.map(String::from);
    fields.location = location.map(String::from);
    fields.policy_duration = duration.map(String::from);
    fields
}

// =============================================================================
// Full evaluation
// =============================================================================

#[test]
fn test_evaluate_waiting_period_claim() {
    let matcher = ClauseMatcher::default();
    let engine = DecisionEngine::default();
    let assembler = ResultAssembler::new("₹", ProcessingTimeRange::fixed(1200));

    let fields = fields(Some(46), Some("knee"), Some("Pune"), Some("3 month"));
    let clauses = matcher.match_clauses(&fields);
    let decision = engine.decide(&fields, &clauses);
    assert_eq!(decision.branch, DecisionBranch::WaitingPeriod);

    let result = assembler.assemble(fields, clauses, decision);
    assert_eq!(result.decision, DecisionStatus::Rejected);
    assert_eq!(result.amount, Some(0));
    assert_eq!(result.confidence, 92);
    assert_eq!(result.processing_time_ms, 1200);
    assert_eq!(
        result.clause_ids(),
        vec!["clause-001", "clause-002", "clause-003", "clause-004"]
    );
    assert!(result.justification.clause_mapping[2].text.contains("Pune"));
}

#[test]
fn test_age_threshold_is_strict() {
    let matcher = ClauseMatcher::default();
    let engine = DecisionEngine::default();

    let at_threshold = fields(Some(45), Some("surgery"), None, None);
    let clauses = matcher.match_clauses(&at_threshold);
    assert_eq!(clauses.len(), 1);
    assert_eq!(engine.decide(&at_threshold, &clauses).reasoning_steps.len(), 5);

    let above = fields(Some(46), Some("surgery"), None, None);
    let clauses = matcher.match_clauses(&above);
    assert_eq!(clauses.len(), 2);
    assert_eq!(engine.decide(&above, &clauses).reasoning_steps.len(), 6);
}

#[test]
fn test_decision_ignores_cited_clauses() {
    let engine = DecisionEngine::default();
    let fields = fields(None, Some("knee"), None, Some("12 month"));

    let with_clauses = engine.decide(&fields, &ClauseMatcher::default().match_clauses(&fields));
    let without_clauses = engine.decide(&fields, &[]);

    assert_eq!(with_clauses, without_clauses);
    assert_eq!(with_clauses.status, DecisionStatus::Approved);
    assert_eq!(with_clauses.amount, 125_000);
}

// =============================================================================
// Custom reference data
// =============================================================================

#[test]
fn test_custom_catalog_order() {
    let catalog = ClauseCatalog {
        clauses: vec![
            ClauseTemplate {
                id: "loc".to_string(),
                text: "Hospitals in {location}".to_string(),
                relevance_score: 0.5,
                document_source: "Annex.pdf".to_string(),
                section: "A".to_string(),
                page_number: None,
            },
            ClauseTemplate {
                id: "senior".to_string(),
                text: "Senior cover".to_string(),
                relevance_score: 0.6,
                document_source: "Annex.pdf".to_string(),
                section: "B".to_string(),
                page_number: Some(9),
            },
        ],
        rules: vec![
            MatchRule::new("senior", ClauseCondition::AgeAbove(60)),
            MatchRule::new("loc", ClauseCondition::LocationPresent),
        ],
    };
    let matcher = ClauseMatcher::new(catalog).unwrap();

    let clauses = matcher.match_clauses(&fields(Some(70), None, Some("Delhi"), None));
    let ids: Vec<_> = clauses.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["senior", "loc"]);
    assert_eq!(clauses[1].text, "Hospitals in Delhi");
}

#[test]
fn test_invalid_catalog_rejected() {
    let mut catalog = ClauseCatalog::default();
    catalog.clauses[0].relevance_score = 1.5;

    let err = ClauseMatcher::new(catalog).unwrap_err();
    assert!(matches!(err, RuntimeError::InvalidCatalog(_)));
}

#[test]
fn test_invalid_rules_rejected() {
    let rules = DecisionRules {
        covered_procedures: Vec::new(),
        ..DecisionRules::default()
    };

    let err = DecisionEngine::new(rules).unwrap_err();
    assert!(matches!(err, RuntimeError::InvalidRules(_)));
}
