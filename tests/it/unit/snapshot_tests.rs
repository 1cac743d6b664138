//! Snapshot tests for serialized records and scenes.
//!
//! Snapshots are inline so the wire format is reviewed next to the test.

use crate::helpers::TestSceneBuilder;
use insta::{assert_json_snapshot, assert_snapshot};
use spatial_canvas::{ContentType, NodeRecord};

fn pretty<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap()
}

#[test]
fn test_record_wire_format() {
    let record = NodeRecord::new(ContentType::Png, "/files/a.png", (50.0, 60.0), (200.0, 150.0));

    assert_snapshot!(pretty(&record), @r#"
    {
      "x": 50.0,
      "y": 60.0,
      "z": 1,
      "w": 200.0,
      "h": 150.0,
      "type": "image/png",
      "path": "/files/a.png"
    }
    "#);
}

#[test]
fn test_directory_record_includes_absolute() {
    let record = NodeRecord {
        absolute: Some("/srv/photos".into()),
        ..NodeRecord::new(ContentType::Directory, "photos", (0.0, 0.0), (120.0, 20.0))
    };

    assert_snapshot!(pretty(&record), @r#"
    {
      "x": 0.0,
      "y": 0.0,
      "z": 1,
      "w": 120.0,
      "h": 20.0,
      "type": "dir",
      "path": "photos",
      "absolute": "/srv/photos"
    }
    "#);
}

#[test]
fn test_scene_snapshot_format() {
    let scene = TestSceneBuilder::new()
        .with_template(ContentType::Png, "/files/template.png")
        .with_node(ContentType::Text, "note", (300.0, 40.0))
        .with_scale(2.0)
        .with_origin(10.0, 20.0)
        .build();

    // Stage templates are not part of the scene snapshot.
    assert_snapshot!(pretty(&scene.serialize()), @r#"
    {
      "origin": {
        "x": 10.0,
        "y": 20.0,
        "z": 0.0
      },
      "scale": 2.0,
      "children": [
        {
          "x": 300.0,
          "y": 40.0,
          "z": 1,
          "w": 100.0,
          "h": 100.0,
          "type": "text",
          "path": "note"
        }
      ]
    }
    "#);
}

#[test]
fn test_template_record_is_stage_item() {
    let scene = TestSceneBuilder::new()
        .with_template(ContentType::Mp4, "/files/clip.mp4")
        .build();
    let record = scene.stage().children()[0].serialize();

    assert_json_snapshot!(record, {
        ".x" => "[x]",
        ".y" => "[y]",
        ".w" => "[w]",
        ".h" => "[h]",
    }, @r#"
    {
      "x": "[x]",
      "y": "[y]",
      "z": 3,
      "w": "[w]",
      "h": "[h]",
      "type": "video/mp4",
      "path": "/files/clip.mp4"
    }
    "#);
}

#[test]
fn test_content_type_names() {
    let types = [
        ContentType::Jpeg,
        ContentType::Png,
        ContentType::Mp4,
        ContentType::Pdf,
        ContentType::Text,
        ContentType::Directory,
    ];

    assert_json_snapshot!(types, @r#"
    [
      "image/jpeg",
      "image/png",
      "video/mp4",
      "application/pdf",
      "text",
      "dir"
    ]
    "#);
}
