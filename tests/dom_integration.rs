use serde_json::json;
use snapshot_dom::{BrowserSession, LaunchOptions, SnapshotOptions};

fn session_with(html: &str) -> BrowserSession {
    let session = BrowserSession::launch(LaunchOptions::new().headless(true))
        .expect("Failed to launch browser");
    session.set_content(html).expect("Failed to set content");
    session
}

#[test]
#[ignore] // Requires Chrome to be installed
fn test_empty_body() {
    let session = session_with("<html><head></head><body></body></html>");

    let record = session
        .snapshot_body(&SnapshotOptions::default())
        .expect("Failed to snapshot");

    assert_eq!(serde_json::to_value(&record).unwrap(), json!({"tagName": "body"}));
}

#[test]
#[ignore]
fn test_single_paragraph_in_body() {
    let session = session_with("<html><body><p id='intro'>Hello</p></body></html>");

    let record = session
        .snapshot_body(&SnapshotOptions::default())
        .expect("Failed to snapshot");

    assert_eq!(
        serde_json::to_value(&record).unwrap(),
        json!({
            "tagName": "body",
            "childNodes": [{
                "tagName": "p",
                "attributes": {"id": "intro"},
                "childNodes": [{"nodeName": "#text", "nodeValue": "Hello"}]
            }]
        })
    );
}

#[test]
#[ignore]
fn test_duplicated_attribute_keeps_first_parsed() {
    // The HTML parser already drops the second `a`
    let session = session_with("<html><body><p a='1' b='2' a='3'></p></body></html>");

    let record = session
        .snapshot("p", &SnapshotOptions::default())
        .expect("Failed to snapshot");

    assert_eq!(record.get_attribute("a"), Some("1"));
    assert_eq!(record.get_attribute("b"), Some("2"));
}

#[test]
#[ignore]
fn test_remove_empty_and_sort() {
    let session = session_with("<html><body><div title='' class='b a' id='x'></div></body></html>");

    let options = SnapshotOptions::new()
        .remove_empty_attributes(true)
        .sort_attributes(["class"]);
    let record = session.snapshot("div", &options).expect("Failed to snapshot");

    let json = record.to_json_compact().expect("Failed to convert to JSON");
    assert_eq!(json, r#"{"tagName":"div","attributes":{"class":"a b","id":"x"}}"#);
}

#[test]
#[ignore]
fn test_skip_empty_value() {
    let session = session_with("<html><body><input disabled value='v'></body></html>");

    let record = session
        .snapshot("input", &SnapshotOptions::new().skip_empty_value(true))
        .expect("Failed to snapshot");

    assert_eq!(record.get_attribute("disabled"), None);
    assert_eq!(record.get_attribute("value"), Some("v"));
}
