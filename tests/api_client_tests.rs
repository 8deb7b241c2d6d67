use httpmock::prelude::*;
use neis_timetable::{NeisClient, NeisError, TimetableQuery};
use serde_json::json;
use std::time::Duration;

fn search_body() -> serde_json::Value {
    json!({
        "schoolInfo": [
            { "head": [
                { "list_total_count": 2 },
                { "RESULT": { "CODE": "INFO-000", "MESSAGE": "정상 처리되었습니다." } }
            ] },
            { "row": [
                { "SCHUL_NM": "한국고등학교", "SCHUL_KND_SC_NM": "고등학교",
                  "ATPT_OFCDC_SC_CODE": "B10", "SD_SCHUL_CODE": "7010084",
                  "ORG_RDNMA": "서울특별시 종로구", "LCTN_SC_NM": "서울특별시" },
                { "SCHUL_NM": "한국중학교", "SCHUL_KND_SC_NM": "중학교",
                  "ATPT_OFCDC_SC_CODE": "B10", "SD_SCHUL_CODE": "7010123",
                  "ORG_RDNMA": "서울특별시 중구", "LCTN_SC_NM": "서울특별시" }
            ] }
        ]
    })
}

fn timetable_body(key: &str, rows: serde_json::Value) -> serde_json::Value {
    json!({
        key: [
            { "head": [
                { "list_total_count": 3 },
                { "RESULT": { "CODE": "INFO-000", "MESSAGE": "정상 처리되었습니다." } }
            ] },
            { "row": rows }
        ]
    })
}

#[tokio::test]
async fn test_search_then_timetable_flow() {
    let server = MockServer::start();

    let search_mock = server.mock(|when, then| {
        when.method(GET).path("/schoolInfo").query_param("SCHUL_NM", "한국");
        then.status(200).json_body(search_body());
    });

    let timetable_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/hisTimetable")
            .query_param("ATPT_OFCDC_SC_CODE", "B10")
            .query_param("SD_SCHUL_CODE", "7010084")
            .query_param("AY", "2024")
            .query_param("TI_FROM_YMD", "20240502")
            .query_param("TI_TO_YMD", "20240502");
        then.status(200).json_body(timetable_body(
            "hisTimetable",
            json!([
                { "PERIO": "2", "ITRT_CNTNT": "영어" },
                { "PERIO": "1", "ITRT_CNTNT": "국어" },
                { "PERIO": "3", "ITRT_CNTNT": "수학" }
            ]),
        ));
    });

    let client = NeisClient::new(
        server.base_url(),
        Some("integration-key".to_string()),
        Some(Duration::from_secs(10)),
    )
    .unwrap();

    let schools = client.search_school("한국").await.unwrap();
    assert_eq!(schools.len(), 2);

    let picked = &schools[0];
    assert_eq!(picked.name, "한국고등학교");
    assert_eq!(picked.road_address, "서울특별시 종로구");
    assert_eq!(picked.extra.get("LCTN_SC_NM").unwrap(), "서울특별시");

    let query = TimetableQuery::from_school(picked, "2", "3", "20240502").unwrap();
    let entries = client.timetable(&query).await.unwrap();

    search_mock.assert();
    timetable_mock.assert();

    let periods: Vec<&str> = entries.iter().map(|e| e.period.as_str()).collect();
    assert_eq!(periods, vec!["1", "2", "3"]);
    assert_eq!(entries[0].subject, "국어");
}

#[tokio::test]
async fn test_zero_results_and_no_data_are_not_errors() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/schoolInfo");
        then.status(200)
            .json_body(json!({ "RESULT": { "CODE": "INFO-200", "MESSAGE": "해당하는 데이터가 없습니다." } }));
    });

    server.mock(|when, then| {
        when.method(GET).path("/misTimetable");
        then.status(200).json_body(json!({
            "misTimetable": [
                { "head": [ {}, { "RESULT": { "CODE": "INFO-200", "MESSAGE": "해당하는 데이터가 없습니다." } } ] }
            ]
        }));
    });

    let client = NeisClient::new(server.base_url(), Some("key".to_string()), None).unwrap();

    let schools = client.search_school("존재하지않는학교").await.unwrap();
    assert!(schools.is_empty());

    let query = TimetableQuery {
        kind: "중학교".parse().unwrap(),
        office_code: "B10".to_string(),
        school_code: "7010123".to_string(),
        grade: "1".to_string(),
        class_name: "7".to_string(),
        date: "20240502".to_string(),
    };
    let entries = client.timetable(&query).await.unwrap();
    assert!(entries.is_empty());
}

#[tokio::test]
async fn test_remote_failure_surfaces_message() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/schoolInfo");
        then.status(200).json_body(json!({
            "schoolInfo": [
                { "head": [ {}, { "RESULT": { "CODE": "ERROR-500", "MESSAGE": "서버 오류입니다." } } ] },
                { "row": [] }
            ]
        }));
    });

    let client = NeisClient::new(server.base_url(), Some("key".to_string()), None).unwrap();
    let err = client.search_school("한국").await.unwrap_err();

    assert_eq!(err.status_code(), 500);
    match err {
        NeisError::RemoteApi { code, message } => {
            assert_eq!(code, "ERROR-500");
            assert_eq!(message, "서버 오류입니다.");
        }
        other => panic!("expected RemoteApi error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_timeout_is_reported_distinctly() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/schoolInfo");
        then.status(200)
            .delay(Duration::from_millis(500))
            .json_body(search_body());
    });

    let client = NeisClient::new(
        server.base_url(),
        Some("key".to_string()),
        Some(Duration::from_millis(50)),
    )
    .unwrap();

    let err = client.search_school("한국").await.unwrap_err();
    assert!(matches!(err, NeisError::Timeout { .. }));
    assert_eq!(err.status_code(), 504);
}
