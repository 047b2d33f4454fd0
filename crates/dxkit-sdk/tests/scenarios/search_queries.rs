use dxkit_sdk::{AppFilter, Client, Context, DataObjectFilter, JobFilter, ProjectFilter};
use dxkit_testing::fixtures::find_page;
use dxkit_testing::{FixedClock, MockTransport};
use serde_json::json;

const NOW: i64 = 1_700_000_000_000;

fn client(workspace: Option<&str>) -> Client<MockTransport> {
    let mut context = Context::default();
    context.workspace_id = workspace.map(str::to_string);
    Client::with_transport(MockTransport::new(), context).with_clock(FixedClock(NOW))
}

#[test]
fn test_data_object_query_document() {
    let client = client(Some("container-1"));
    let filter = DataObjectFilter::new()
        .classname("file")
        .name("reads.fastq")
        .tag("qc")
        .project("project-P")
        .folder("/raw")
        .recurse(true)
        .modified_after(-86_400_000)
        .describe(true);

    insta::assert_json_snapshot!(client.query(&filter), @r#"
    {
      "class": "file",
      "describe": true,
      "modified": {
        "after": 1699913600000
      },
      "name": "reads.fastq",
      "scope": {
        "folder": "/raw",
        "project": "project-P",
        "recurse": true
      },
      "tag": "qc"
    }
    "#);
}

#[test]
fn test_omitted_parameters_are_absent() {
    let client = client(Some("container-1"));
    let query = client.query(&DataObjectFilter::new().state("closed"));

    assert_eq!(
        query.to_value(),
        json!({"state": "closed", "scope": {"project": "container-1"}})
    );
    for field in ["class", "name", "tag", "modified", "created", "describe"] {
        assert!(!query.contains(field), "{field} should be absent");
    }
}

#[test]
fn test_job_query_document() {
    let client = client(None);
    let filter = JobFilter::new()
        .state("failed")
        .parent_job("none")
        .created_before(-3_600_000);

    insta::assert_json_snapshot!(client.query(&filter), @r#"
    {
      "created": {
        "before": 1699996400000
      },
      "describe": false,
      "parentJob": null,
      "state": "failed"
    }
    "#);
}

#[test]
fn test_job_describe_accepts_structured_spec() {
    let client = client(None);
    let query = client.query(&JobFilter::new().describe(json!({"io": false})));

    assert_eq!(query.get("describe"), Some(&json!({"io": false})));
}

#[test]
fn test_project_query_describe_only_when_supplied() {
    let client = client(Some("container-1"));

    let bare = client.query(&ProjectFilter::new().name("demo"));
    assert_eq!(bare.to_value(), json!({"name": "demo"}));

    let described = client.query(
        &ProjectFilter::new()
            .name("demo")
            .level("VIEW")
            .describe(json!({"fields": {"name": true}})),
    );
    insta::assert_json_snapshot!(described, @r#"
    {
      "describe": {
        "fields": {
          "name": true
        }
      },
      "level": "VIEW",
      "name": "demo"
    }
    "#);
}

#[test]
fn test_app_query_document() {
    let client = client(None);
    let filter = AppFilter::new()
        .name("bwa_mem")
        .all_versions(true)
        .published(true)
        .created_by("user-alice")
        .modified_after(1_600_000_000_000)
        .modified_before(-1);

    assert_eq!(
        client.query(&filter).to_value(),
        json!({
            "name": "bwa_mem",
            "allVersions": true,
            "published": true,
            "createdBy": "user-alice",
            "modified": {"after": 1_600_000_000_000_i64, "before": NOW - 1}
        })
    );
}

#[test]
fn test_first_request_carries_built_query() {
    let transport = MockTransport::new().respond(find_page(vec![], None));
    let client = Client::with_transport(transport, Context::default().with_workspace("container-1"))
        .with_clock(FixedClock(NOW));
    let filter = DataObjectFilter::new().classname("record");

    let items: Vec<_> = client.find_data_objects(&filter).collect();
    assert!(items.is_empty());

    let requests = client.transport().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].route, "/system/findDataObjects");
    assert_eq!(requests[0].input, client.query(&filter).to_value());
}

#[test]
fn test_search_is_lazy() {
    let client = client(None);
    let cursor = client.find_apps(&AppFilter::new());

    assert_eq!(cursor.requests_issued(), 0);
    assert_eq!(client.transport().request_count(), 0);
}

#[test]
fn test_every_data_object_parameter() {
    let client = client(Some("container-1"));
    let filter = DataObjectFilter::new()
        .classname("file")
        .state("closed")
        .visibility("visible")
        .name("reads.fastq")
        .properties([("stage", "raw"), ("project", "alpha")])
        .typename("Reads")
        .tag("qc")
        .link("file-L")
        .project("project-P")
        .folder("/raw")
        .recurse(false)
        .modified_after(-86_400_000)
        .modified_before(-1)
        .created_after(1_600_000_000_000)
        .created_before(-3_600_000)
        .describe(false);

    insta::assert_json_snapshot!(client.query(&filter), @r#"
    {
      "class": "file",
      "created": {
        "after": 1600000000000,
        "before": 1699996400000
      },
      "describe": false,
      "link": "file-L",
      "modified": {
        "after": 1699913600000,
        "before": 1699999999999
      },
      "name": "reads.fastq",
      "properties": {
        "project": "alpha",
        "stage": "raw"
      },
      "scope": {
        "folder": "/raw",
        "project": "project-P",
        "recurse": false
      },
      "state": "closed",
      "tag": "qc",
      "type": "Reads",
      "visibility": "visible"
    }
    "#);
}

#[test]
fn test_every_job_parameter() {
    let client = client(Some("container-1"));
    let filter = JobFilter::new()
        .launched_by("user-alice")
        .program("app-bwa")
        .project("project-P")
        .state("done")
        .origin_job("job-O")
        .parent_job("job-P")
        .created_after(-86_400_000)
        .created_before(-1)
        .describe(json!({"io": false}));

    insta::assert_json_snapshot!(client.query(&filter), @r#"
    {
      "created": {
        "after": 1699913600000,
        "before": 1699999999999
      },
      "describe": {
        "io": false
      },
      "launchedBy": "user-alice",
      "originJob": "job-O",
      "parentJob": "job-P",
      "program": "app-bwa",
      "project": "project-P",
      "state": "done"
    }
    "#);
}

#[test]
fn test_every_project_parameter() {
    let client = client(Some("container-1"));
    let filter = ProjectFilter::new()
        .name("demo")
        .level("CONTRIBUTE")
        .describe(false);

    insta::assert_json_snapshot!(client.query(&filter), @r#"
    {
      "describe": false,
      "level": "CONTRIBUTE",
      "name": "demo"
    }
    "#);
}

#[test]
fn test_every_app_parameter() {
    let client = client(Some("container-1"));
    let filter = AppFilter::new()
        .name("bwa_mem")
        .category("Read Mapping")
        .all_versions(false)
        .published(true)
        .owner("org-lab")
        .created_by("user-alice")
        .developer("user-bob")
        .modified_after(-60_000)
        .modified_before(-1)
        .created_after(1_600_000_000_000)
        .created_before(-3_600_000)
        .describe(true);

    insta::assert_json_snapshot!(client.query(&filter), @r#"
    {
      "allVersions": false,
      "category": "Read Mapping",
      "created": {
        "after": 1600000000000,
        "before": 1699996400000
      },
      "createdBy": "user-alice",
      "describe": true,
      "developer": "user-bob",
      "modified": {
        "after": 1699999940000,
        "before": 1699999999999
      },
      "name": "bwa_mem",
      "owner": "org-lab",
      "published": true
    }
    "#);
}
