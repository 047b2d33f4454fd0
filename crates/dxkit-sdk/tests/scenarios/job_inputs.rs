use std::path::PathBuf;

use dxkit_sdk::job_input::load_dxapp_input_spec;
use dxkit_sdk::{
    Client, Context, Error, Layout, discover_input_spec, load_job_input, plan_job_inputs,
};
use dxkit_testing::MockTransport;
use dxkit_testing::fixtures::{dxapp_json, file_describe, file_link, file_link_in};
use serde_json::{Map, Value, json};
use tempfile::TempDir;

fn manifest(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap()
}

#[test]
fn test_plan_resolves_names_through_describe() {
    let transport = MockTransport::new()
        .respond(file_describe("file-A", "sample 1/reads.fq"))
        .respond(file_describe("file-B", "lane1.fq"))
        .respond(file_describe("file-C", "lane2.fq"));
    let client = Client::with_transport(transport, Context::default());
    let input = manifest(json!({
        "genome": {"$dnanexus_link": "record-G"},
        "lanes": [file_link("file-B"), file_link("file-C")],
        "reads": file_link_in("file-A", "project-P"),
        "threads": 8
    }));

    let plan = plan_job_inputs(&input, &PathBuf::from("/home/dnanexus/in"), &client).unwrap();

    let targets: Vec<_> = plan.files.iter().map(|f| f.target_file.clone()).collect();
    assert_eq!(
        targets,
        vec![
            PathBuf::from("/home/dnanexus/in/lanes/lane1.fq"),
            PathBuf::from("/home/dnanexus/in/lanes/lane2.fq"),
            PathBuf::from("/home/dnanexus/in/reads/sample 1%2Freads.fq"),
        ]
    );
    assert_eq!(plan.dirs.len(), 2);

    let requests = client.transport().requests();
    let routes: Vec<_> = requests.iter().map(|r| r.route.as_str()).collect();
    assert_eq!(
        routes,
        vec!["/file-B/describe", "/file-C/describe", "/file-A/describe"]
    );
    assert_eq!(requests[2].input, json!({"project": "project-P"}));
    assert_eq!(requests[0].input, json!({}));
}

#[test]
fn test_plan_stops_on_describe_failure() {
    let transport =
        MockTransport::new().fail(Error::api(404, "ResourceNotFound", "file-A not found"));
    let client = Client::with_transport(transport, Context::default());
    let input = manifest(json!({"reads": file_link("file-A")}));

    let result = plan_job_inputs(&input, &PathBuf::from("/in"), &client);

    assert!(matches!(result, Err(Error::Api { status: 404, .. })));
}

#[test]
fn test_create_dirs_under_home() {
    let temp_dir = TempDir::new().unwrap();
    let layout = Layout::new(temp_dir.path());
    let transport = MockTransport::new()
        .respond(file_describe("file-A", "a.txt"))
        .respond(file_describe("file-B", "b.txt"));
    let client = Client::with_transport(transport, Context::default());
    let input = manifest(json!({
        "first": file_link("file-A"),
        "second": [file_link("file-B")]
    }));

    let plan = plan_job_inputs(&input, &layout.input_dir(), &client).unwrap();
    plan.create_dirs(&layout.input_dir()).unwrap();
    // Running twice is fine: existing directories are accepted.
    plan.create_dirs(&layout.input_dir()).unwrap();

    assert!(layout.input_dir().join("first").is_dir());
    assert!(layout.input_dir().join("second").is_dir());
    assert!(!layout.input_dir().join("first/a.txt").exists());
}

#[test]
fn test_create_dirs_rejects_file_in_the_way() {
    let temp_dir = TempDir::new().unwrap();
    let idir = temp_dir.path().join("in");
    std::fs::create_dir(&idir).unwrap();
    std::fs::write(idir.join("reads"), "not a directory").unwrap();

    let client = Client::with_transport(
        MockTransport::new().respond(file_describe("file-A", "a.txt")),
        Context::default(),
    );
    let input = manifest(json!({"reads": file_link("file-A")}));
    let plan = plan_job_inputs(&input, &idir, &client).unwrap();

    let err = plan.create_dirs(&idir).unwrap_err();
    assert!(err.to_string().contains("it is a file, not a directory"));
}

#[test]
fn test_load_job_input_requires_object() {
    let temp_dir = TempDir::new().unwrap();
    let good = temp_dir.path().join("job_input.json");
    let bad = temp_dir.path().join("array.json");
    std::fs::write(&good, r#"{"reads": {"$dnanexus_link": "file-A"}}"#).unwrap();
    std::fs::write(&bad, "[1, 2]").unwrap();

    let loaded = load_job_input(&good).unwrap();
    assert!(loaded.contains_key("reads"));

    let err = load_job_input(&bad).unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
}

#[test]
fn test_input_spec_from_running_job() {
    let transport = MockTransport::new()
        .respond(json!({"id": "job-1", "applet": "applet-9"}))
        .respond(json!({
            "id": "applet-9",
            "inputSpec": [
                {"name": "reads", "class": "array:file"},
                {"name": "min_quality", "class": "int", "optional": true}
            ]
        }));
    let context = Context {
        job_id: Some("job-1".to_string()),
        ..Context::default()
    };
    let client = Client::with_transport(transport, context);

    let spec = discover_input_spec(&client).unwrap();

    assert_eq!(spec["reads"].class, "array:file");
    assert!(spec["min_quality"].optional);
    let routes: Vec<_> = client
        .transport()
        .requests()
        .into_iter()
        .map(|r| r.route)
        .collect();
    assert_eq!(routes, vec!["/job-1/describe", "/applet-9/describe"]);
}

#[test]
fn test_input_spec_prefers_app_over_applet() {
    let transport = MockTransport::new()
        .respond(json!({"app": "app-bwa", "applet": "applet-9"}))
        .respond(json!({"id": "app-bwa"}));
    let context = Context {
        job_id: Some("job-1".to_string()),
        ..Context::default()
    };
    let client = Client::with_transport(transport, context);

    let spec = discover_input_spec(&client).unwrap();

    assert!(spec.is_empty());
    assert_eq!(client.transport().requests()[1].route, "/app-bwa/describe");
}

#[test]
fn test_input_spec_from_local_dxapp_json() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("dxapp.json");
    let dxapp = dxapp_json(&[("reads", "file", false), ("label", "string", true)]);
    std::fs::write(&path, dxapp.to_string()).unwrap();

    let context = Context {
        dxapp_json: Some(path.clone()),
        ..Context::default()
    };
    let client = Client::with_transport(MockTransport::new(), context);

    let spec = discover_input_spec(&client).unwrap();
    assert_eq!(spec, load_dxapp_input_spec(&path).unwrap());
    assert_eq!(spec.len(), 2);
    assert!(spec["label"].optional);
    assert_eq!(client.transport().request_count(), 0);
}

#[test]
fn test_input_spec_empty_without_job_or_dxapp() {
    let client = Client::with_transport(MockTransport::new(), Context::default());
    assert!(discover_input_spec(&client).unwrap().is_empty());
}
