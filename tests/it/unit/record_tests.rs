//! Unit tests for content records and node construction.

use spatial_canvas::node::Node;
use spatial_canvas::{CanvasError, ContentType, Depth, NodeId, NodeRecord};

#[test]
fn test_node_reproduces_its_record() {
    let records = [
        NodeRecord::new(ContentType::Jpeg, "/files/a.jpg", (50.0, 60.0), (200.0, 150.0)),
        NodeRecord::new(ContentType::Text, "hello", (-5.0, 0.5), (200.0, 14.0))
            .with_depth(Depth::SceneBackground),
        NodeRecord {
            absolute: Some("/home/me/photos".into()),
            ..NodeRecord::new(ContentType::Directory, "photos", (0.0, 0.0), (100.0, 20.0))
        },
    ];

    for record in records {
        let node = Node::from_record(NodeId(1), &record).unwrap();
        assert_eq!(node.serialize(), record);
    }
}

#[test]
fn test_unknown_depth_is_rejected() {
    let mut record = NodeRecord::new(ContentType::Png, "/files/a.png", (0.0, 0.0), (1.0, 1.0));
    record.z = 9;

    assert!(matches!(
        Node::from_record(NodeId(1), &record),
        Err(CanvasError::InvalidDepth(9))
    ));
}

#[test]
fn test_record_parses_listing_json() {
    let json = r#"{"x":1,"y":2,"z":1,"w":3,"h":4,"type":"dir","path":"..","absolute":"/srv"}"#;
    let record: NodeRecord = serde_json::from_str(json).unwrap();

    assert_eq!(record.content_type, ContentType::Directory);
    assert_eq!(record.absolute.as_deref(), Some("/srv"));
    assert_eq!(record.descriptor().directory_target(), "/srv");
}

#[test]
fn test_unknown_content_type_fails_to_parse() {
    let json = r#"{"x":1,"y":2,"z":1,"w":3,"h":4,"type":"audio/mpeg","path":"a.mp3"}"#;
    assert!(serde_json::from_str::<NodeRecord>(json).is_err());
}

#[test]
fn test_pdf_starts_with_page_ratio() {
    let record = NodeRecord::new(ContentType::Pdf, "/files/doc.pdf", (0.0, 0.0), (100.0, 100.0));
    let mut node = Node::from_record(NodeId(1), &record).unwrap();

    assert!((node.aspect_ratio() - 1.0 / 1.2941).abs() < 1e-12);
    node.fit_to_footprint(1.0);
    assert_eq!(node.size().1, 200.0);
    assert!(node.size().0 < 200.0);
}
