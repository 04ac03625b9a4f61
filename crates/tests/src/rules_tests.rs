//! Timetable rule table tests

use server::timetable::rules::*;
use server::timetable::working_days::DayKind;
use shared_types::{AppealStatus, AppealTimetable, APPEAL_STATUSES};

use crate::common::{at, case_in, with_site_visit, with_timetable};

fn default_for(status: AppealStatus) -> DefaultRule {
    rule_for(status).unwrap().default
}

#[test]
fn every_rule_row_is_unique() {
    for rule in RULES {
        let count = RULES.iter().filter(|r| r.status == rule.status).count();
        assert_eq!(count, 1, "{} appears {count} times", rule.status);
    }
}

#[test]
fn calendar_day_rows() {
    assert_eq!(default_for(AppealStatus::ReadyToStart), DefaultRule::Offset(Offset::calendar(5)));
    assert_eq!(
        default_for(AppealStatus::LpaQuestionnaire),
        DefaultRule::Offset(Offset::calendar(10))
    );
    assert_eq!(
        default_for(AppealStatus::AssignCaseOfficer),
        DefaultRule::Offset(Offset::calendar(15))
    );
    assert_eq!(default_for(AppealStatus::Statements), DefaultRule::Offset(Offset::calendar(55)));
    assert_eq!(
        default_for(AppealStatus::FinalComments),
        DefaultRule::Offset(Offset::calendar(60))
    );
}

#[test]
fn issue_determination_counts_business_days() {
    let DefaultRule::SiteVisitDependent {
        with_site_visit,
        without_site_visit,
    } = default_for(AppealStatus::IssueDetermination)
    else {
        panic!("issue determination should depend on the site visit");
    };

    assert_eq!(with_site_visit.kind, DayKind::Business);
    assert_eq!(with_site_visit.anchor, Anchor::SiteVisit);
    assert_eq!(with_site_visit.days, 40);
    assert_eq!(without_site_visit.kind, DayKind::Business);
    assert_eq!(without_site_visit.anchor, Anchor::CaseCreated);
    assert_eq!(without_site_visit.days, 30);
}

#[test]
fn only_issue_determination_uses_business_days() {
    for rule in RULES {
        let business = match rule.default {
            DefaultRule::Offset(offset) => offset.kind == DayKind::Business,
            DefaultRule::SiteVisitDependent { .. } => true,
            _ => false,
        };
        assert_eq!(
            business,
            rule.status == AppealStatus::IssueDetermination,
            "{}",
            rule.status
        );
    }
}

#[test]
fn override_fields_per_row() {
    let field = |status| rule_for(status).unwrap().override_field;
    assert_eq!(field(AppealStatus::ReadyToStart), Some(OverrideField::CaseExtensionDate));
    assert_eq!(
        field(AppealStatus::LpaQuestionnaire),
        Some(OverrideField::LpaQuestionnaireDueDate)
    );
    assert_eq!(field(AppealStatus::AssignCaseOfficer), None);
    assert_eq!(
        field(AppealStatus::IssueDetermination),
        Some(OverrideField::IssueDeterminationDate)
    );
    assert_eq!(field(AppealStatus::Statements), Some(OverrideField::LpaStatementDueDate));
    assert_eq!(field(AppealStatus::FinalComments), None);
    assert_eq!(field(AppealStatus::AwaitingEvent), None);
    assert_eq!(field(AppealStatus::Event), Some(OverrideField::FinalCommentsDueDate));
    assert_eq!(field(AppealStatus::Complete), None);
}

#[test]
fn event_falls_back_to_questionnaire_date() {
    assert_eq!(
        default_for(AppealStatus::Event),
        DefaultRule::Field(OverrideField::LpaQuestionnaireDueDate)
    );
}

#[test]
fn awaiting_event_and_complete() {
    assert_eq!(default_for(AppealStatus::AwaitingEvent), DefaultRule::ScheduledEvent);
    assert_eq!(default_for(AppealStatus::Complete), DefaultRule::NotApplicable);
}

#[test]
fn statuses_without_rows() {
    let without: Vec<_> = APPEAL_STATUSES
        .iter()
        .copied()
        .filter(|status| rule_for(*status).is_none())
        .collect();
    assert_eq!(
        without,
        vec![
            AppealStatus::Validation,
            AppealStatus::AwaitingTransfer,
            AppealStatus::Transferred,
            AppealStatus::Withdrawn,
            AppealStatus::Closed,
            AppealStatus::Invalid,
        ]
    );
}

#[test]
fn override_field_wire_names() {
    assert_eq!(OverrideField::CaseExtensionDate.name(), "caseExtensionDate");
    assert_eq!(OverrideField::LpaQuestionnaireDueDate.name(), "lpaQuestionnaireDueDate");
    assert_eq!(OverrideField::IssueDeterminationDate.name(), "issueDeterminationDate");
    assert_eq!(OverrideField::LpaStatementDueDate.name(), "lpaStatementDueDate");
    assert_eq!(OverrideField::FinalCommentsDueDate.name(), "finalCommentsDueDate");
}

#[test]
fn resolve_override_reads_case_and_timetable() {
    let mut case = case_in(AppealStatus::Statements, at(2023, 1, 1));
    assert_eq!(resolve_override(&case, OverrideField::CaseExtensionDate), None);
    assert_eq!(resolve_override(&case, OverrideField::LpaStatementDueDate), None);

    case.case_extension_date = Some(at(2023, 2, 1));
    let case = with_timetable(
        case,
        AppealTimetable {
            lpa_statement_due_date: Some(at(2023, 3, 3)),
            ..Default::default()
        },
    );
    assert_eq!(resolve_override(&case, OverrideField::CaseExtensionDate), Some(at(2023, 2, 1)));
    assert_eq!(resolve_override(&case, OverrideField::LpaStatementDueDate), Some(at(2023, 3, 3)));
    assert_eq!(resolve_override(&case, OverrideField::FinalCommentsDueDate), None);
}

#[test]
fn anchors_resolve_against_case() {
    let case = case_in(AppealStatus::IssueDetermination, at(2023, 1, 1));
    assert_eq!(Anchor::CaseCreated.resolve(&case), Some(at(2023, 1, 1)));
    assert_eq!(Anchor::SiteVisit.resolve(&case), None);

    let case = with_site_visit(case, at(2023, 2, 1));
    assert_eq!(Anchor::SiteVisit.resolve(&case), Some(at(2023, 2, 1)));
}
