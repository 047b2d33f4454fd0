use dxkit_sdk::{Client, Context, DataObjectFilter, Error, JobFilter, ProjectFilter};
use dxkit_testing::assertions::assert_same_query_except_starting;
use dxkit_testing::fixtures::{cursor_token, find_page, result_items};
use dxkit_testing::{FixedClock, MockTransport};
use serde_json::{Value, json};

const NOW: i64 = 1_700_000_000_000;

fn client(transport: MockTransport) -> Client<MockTransport> {
    Client::with_transport(transport, Context::default().with_workspace("container-1"))
        .with_clock(FixedClock(NOW))
}

fn ids(items: &[Value]) -> Vec<&str> {
    items.iter().filter_map(|item| item["id"].as_str()).collect()
}

#[test]
fn test_two_pages_are_concatenated() {
    let transport = MockTransport::new()
        .respond(find_page(
            result_items("file", 0, 3),
            Some(cursor_token("file-0002")),
        ))
        .respond(find_page(result_items("file", 3, 2), None));
    let client = client(transport);
    let filter = DataObjectFilter::new().classname("file").modified_after(-1000);

    let items: Vec<Value> = client
        .find_data_objects(&filter)
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(
        ids(&items),
        vec!["file-0000", "file-0001", "file-0002", "file-0003", "file-0004"]
    );

    let requests = client.transport().requests();
    assert_eq!(requests.len(), 2);
    assert!(requests[0].input.get("starting").is_none());
    assert_eq!(requests[1].input["starting"], cursor_token("file-0002"));
    assert_same_query_except_starting(&requests[0].input, &requests[1].input).unwrap();
}

#[test]
fn test_next_page_fetched_only_after_buffer_drained() {
    let transport = MockTransport::new()
        .respond(find_page(
            result_items("job", 0, 3),
            Some(cursor_token("job-0002")),
        ))
        .respond(find_page(result_items("job", 3, 1), None));
    let client = client(transport);
    let filter = JobFilter::new();
    let mut cursor = client.find_jobs(&filter);

    for _ in 0..3 {
        assert!(cursor.next().unwrap().is_ok());
    }
    assert_eq!(cursor.requests_issued(), 1);
    assert_eq!(client.transport().request_count(), 1);

    assert_eq!(cursor.next().unwrap().unwrap()["id"], "job-0003");
    assert_eq!(cursor.requests_issued(), 2);
    assert!(cursor.next().is_none());
}

#[test]
fn test_cursor_carries_server_token_verbatim() {
    let token = json!({"name": "x", "id": "file-9", "project": "project-P"});
    let transport = MockTransport::new()
        .respond(find_page(result_items("file", 0, 1), Some(token.clone())))
        .respond(find_page(vec![], None));
    let client = client(transport);

    let mut cursor = client.find_data_objects(&DataObjectFilter::new());
    assert!(cursor.next().is_some());
    assert!(cursor.next().is_none());

    assert_eq!(cursor.query().starting(), Some(&token));
    assert_eq!(client.transport().requests()[1].input["starting"], token);
}

#[test]
fn test_project_search_is_single_request() {
    let transport = MockTransport::new().respond(find_page(
        result_items("project", 0, 2),
        Some(cursor_token("project-0001")),
    ));
    let client = client(transport);

    let items: Vec<_> = client.find_projects(&ProjectFilter::new()).collect();

    assert_eq!(items.len(), 2);
    assert_eq!(client.transport().request_count(), 1);
    assert_eq!(client.transport().requests()[0].route, "/system/findProjects");
}

#[test]
fn test_empty_first_page_ends_sequence() {
    let transport = MockTransport::new().respond(json!({"results": []}));
    let client = client(transport);

    let items: Vec<_> = client.find_jobs(&JobFilter::new()).collect();

    assert!(items.is_empty());
    assert_eq!(client.transport().request_count(), 1);
}

#[test]
fn test_exhausted_cursor_issues_no_more_requests() {
    let transport = MockTransport::new().respond(find_page(result_items("file", 0, 2), None));
    let client = client(transport);
    let mut cursor = client.find_data_objects(&DataObjectFilter::new());

    assert_eq!(cursor.by_ref().count(), 2);
    assert!(cursor.is_exhausted());

    assert_eq!(cursor.by_ref().count(), 0);
    assert!(cursor.next().is_none());
    assert_eq!(cursor.requests_issued(), 1);
    assert_eq!(client.transport().request_count(), 1);
}

#[test]
fn test_error_mid_iteration_is_yielded_once() {
    let transport = MockTransport::new()
        .respond(find_page(
            result_items("file", 0, 2),
            Some(cursor_token("file-0001")),
        ))
        .fail(Error::api(500, "InternalError", "backend unavailable"))
        .respond(find_page(result_items("file", 2, 2), None));
    let client = client(transport);

    let items: Vec<_> = client.find_data_objects(&DataObjectFilter::new()).collect();

    assert_eq!(items.len(), 3);
    assert!(items[0].is_ok());
    assert!(items[1].is_ok());
    match &items[2] {
        Err(Error::Api { status, kind, .. }) => {
            assert_eq!(*status, 500);
            assert_eq!(kind, "InternalError");
        }
        other => panic!("expected API error, got {other:?}"),
    }
    assert_eq!(client.transport().request_count(), 2);
    assert_eq!(client.transport().remaining(), 1);
}

#[test]
fn test_malformed_page_is_invalid_response() {
    let transport = MockTransport::new().respond(json!({"results": "nope"}));
    let client = client(transport);

    let items: Vec<_> = client.find_jobs(&JobFilter::new()).collect();

    assert_eq!(items.len(), 1);
    assert!(matches!(items[0], Err(Error::InvalidResponse(_))));
}

#[test]
fn test_page_without_results_is_invalid_response() {
    let transport = MockTransport::new().respond(json!({"next": null}));
    let client = client(transport);

    let items: Vec<_> = client.find_data_objects(&DataObjectFilter::new()).collect();

    assert_eq!(items.len(), 1);
    match &items[0] {
        Err(Error::InvalidResponse(message)) => assert!(message.contains("results")),
        other => panic!("expected invalid response, got {other:?}"),
    }
}

#[test]
fn test_extra_params_are_sent_as_options_on_every_page() {
    let transport = MockTransport::new()
        .respond(find_page(
            result_items("file", 0, 1),
            Some(cursor_token("file-0000")),
        ))
        .respond(find_page(result_items("file", 1, 1), None));
    let client = client(transport);
    let filter = DataObjectFilter::new()
        .name("reads.fastq")
        .extra("always_retry", false)
        .extra("timeout", 30);

    let items: Vec<Value> = client
        .find_data_objects(&filter)
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(items.len(), 2);

    let requests = client.transport().requests();
    assert_eq!(requests.len(), 2);
    for request in &requests {
        assert!(request.input.get("always_retry").is_none());
        assert!(request.input.get("timeout").is_none());
        assert_eq!(request.input["name"], "reads.fastq");
        assert_eq!(request.options.get("always_retry"), Some(&json!(false)));
        assert_eq!(
            request.options.timeout(),
            Some(std::time::Duration::from_secs(30))
        );
    }
}
