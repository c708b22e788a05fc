use chrono::{TimeZone, Timelike};

use super::*;

fn sample_board() -> Board {
    Board {
        pipelines: vec![
            Pipeline {
                id: PipelineId::new("p1"),
                name: "New Issues".into(),
                issues: vec![Issue {
                    issue_number: IssueNumber::new(279),
                    estimate: Some(Estimate::new(40)),
                    position: 0,
                    is_epic: true,
                }],
            },
            Pipeline {
                id: PipelineId::new("p2"),
                name: "Backlog".into(),
                issues: vec![Issue {
                    issue_number: IssueNumber::new(303),
                    estimate: None,
                    position: 3,
                    is_epic: false,
                }],
            },
        ],
    }
}

#[test]
fn board_lookup_by_pipeline_name() {
    let board = sample_board();

    assert_eq!(board.pipeline("Backlog").unwrap().id, PipelineId::new("p2"));
    assert!(board.pipeline("Done").is_none());
}

#[test]
fn board_lookup_by_issue_number_returns_containing_pipeline() {
    let board = sample_board();

    let (pipeline, issue) = board.issue(IssueNumber::new(303)).unwrap();
    assert_eq!(pipeline.name, "Backlog");
    assert_eq!(issue.position, 3);
    assert_eq!(issue.estimate_value(), None);

    assert!(board.issue(IssueNumber::new(1)).is_none());
}

#[test]
fn board_serialises_in_wire_shape_and_order() {
    let board = sample_board();

    let value = serde_json::to_value(&board).unwrap();
    assert_eq!(value["pipelines"][0]["name"], "New Issues");
    assert_eq!(value["pipelines"][0]["issues"][0]["estimate"]["value"], 40);
    assert_eq!(value["pipelines"][1]["issues"][0]["estimate"], serde_json::Value::Null);

    let back: Board = serde_json::from_value(value).unwrap();
    assert_eq!(back, board);
}

#[test]
fn name_only_pipeline_omits_id_when_serialised() {
    let value = serde_json::to_value(Pipeline::named("Backlog")).unwrap();

    assert!(value.get("id").is_none());
    assert_eq!(value["name"], "Backlog");
}

#[test]
fn timestamp_parses_milliseconds_and_normalises_offsets() {
    let ts = Timestamp::parse("2015-12-11T19:43:22.296Z").unwrap();
    assert_eq!(
        ts.as_datetime(),
        Utc.with_ymd_and_hms(2015, 12, 11, 19, 43, 22).unwrap() + chrono::Duration::milliseconds(296)
    );

    let shifted = Timestamp::parse("2015-12-11T21:43:22.296+02:00").unwrap();
    assert_eq!(shifted, ts);
    assert_eq!(shifted.as_datetime().hour(), 19);
}

#[test]
fn timestamp_rejects_garbage() {
    assert!(Timestamp::parse("yesterday").is_err());
    assert!(Timestamp::parse("2015-12-11 19:43:22").is_err());
}
