use std::collections::HashSet;

use super::*;

fn ts() -> Timestamp {
    Timestamp::parse("2015-12-11T19:43:22.296Z").unwrap()
}

fn one_of_each() -> Vec<Event> {
    vec![
        EstimateIssueEvent {
            user_id: UserId::new(16717),
            created_at: ts(),
            from_estimate: None,
            to_estimate: Some(Estimate::new(4)),
        }
        .into(),
        TransferIssueEvent {
            user_id: UserId::new(16717),
            created_at: ts(),
            from_pipeline: None,
            to_pipeline: Some(Pipeline::named("Backlog")),
        }
        .into(),
        IssueTransferWebhookEvent::default().into(),
    ]
}

#[test]
fn every_variant_has_its_own_tag() {
    let tags: Vec<EventType> = one_of_each().iter().map(TaggedEvent::event_type).collect();

    assert_eq!(
        tags,
        vec![EventType::EstimateIssue, EventType::TransferIssue, EventType::IssueTransfer]
    );
    assert_eq!(tags.iter().collect::<HashSet<_>>().len(), tags.len());
}

#[test]
fn webhook_event_reports_issue_transfer_tag() {
    assert_eq!(IssueTransferWebhookEvent::default().event_type(), EventType::IssueTransfer);
}

#[test]
fn tags_round_trip_through_their_wire_strings() {
    for tag in [EventType::EstimateIssue, EventType::TransferIssue, EventType::IssueTransfer] {
        assert_eq!(tag.as_str().parse::<EventType>().unwrap(), tag);
        assert_eq!(serde_json::to_string(&tag).unwrap(), format!("\"{tag}\""));
    }
}

#[test]
fn unknown_tag_string_is_reported_verbatim() {
    let err = "estimate_set".parse::<EventType>().unwrap_err();

    assert_eq!(err.unknown_event_type(), Some("estimate_set"));
    assert_eq!(err.to_string(), "unknown event type \"estimate_set\"");
}

#[test]
fn created_at_is_absent_only_for_webhook_events() {
    let events = one_of_each();

    assert_eq!(events[0].created_at(), Some(ts()));
    assert_eq!(events[1].created_at(), Some(ts()));
    assert_eq!(events[2].created_at(), None);
}

#[test]
fn webhook_issue_number_is_parsed_only_on_request() {
    let mut event = IssueTransferWebhookEvent {
        issue_number: "5675".into(),
        ..Default::default()
    };
    assert_eq!(event.parsed_issue_number(), Some(IssueNumber::new(5675)));

    event.issue_number = "not-a-number".into();
    assert_eq!(event.parsed_issue_number(), None);
}
