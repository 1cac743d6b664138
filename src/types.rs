//! Core types for the canvas.
//!
//! This module defines the value types shared by nodes, the stage and the
//! scene: stacking depths, content descriptors, the external content record,
//! and derived on-screen geometry.

use crate::error::CanvasError;
use crate::vector::Vector;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

// ============================================================================
// Identity & Stacking
// ============================================================================

/// Session-unique node identifier, allocated by the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Stacking layer of a node. Higher layers render on top.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Depth {
    SceneBackground,
    #[default]
    SceneItem,
    StageBackground,
    StageItem,
    /// The node currently being dragged
    Focused,
}

impl Depth {
    /// Stacking integer used as the z-index and in serialized records
    pub fn z_index(self) -> i64 {
        match self {
            Depth::SceneBackground => 0,
            Depth::SceneItem => 1,
            Depth::StageBackground => 2,
            Depth::StageItem => 3,
            Depth::Focused => 4,
        }
    }
}

impl TryFrom<i64> for Depth {
    type Error = CanvasError;

    fn try_from(z: i64) -> Result<Self, Self::Error> {
        match z {
            0 => Ok(Depth::SceneBackground),
            1 => Ok(Depth::SceneItem),
            2 => Ok(Depth::StageBackground),
            3 => Ok(Depth::StageItem),
            4 => Ok(Depth::Focused),
            other => Err(CanvasError::InvalidDepth(other)),
        }
    }
}

// ============================================================================
// Content
// ============================================================================

/// The kind of content a node displays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentType {
    #[serde(rename = "image/jpeg")]
    Jpeg,
    #[serde(rename = "image/png")]
    Png,
    #[serde(rename = "video/mp4")]
    Mp4,
    #[serde(rename = "application/pdf")]
    Pdf,
    #[serde(rename = "text")]
    Text,
    #[serde(rename = "dir")]
    Directory,
}

impl ContentType {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Jpeg => "image/jpeg",
            ContentType::Png => "image/png",
            ContentType::Mp4 => "video/mp4",
            ContentType::Pdf => "application/pdf",
            ContentType::Text => "text",
            ContentType::Directory => "dir",
        }
    }

    pub fn is_image(self) -> bool {
        matches!(self, ContentType::Jpeg | ContentType::Png)
    }

    /// Text and directory nodes size their font from the node height
    /// instead of stretching to a fixed box.
    pub fn is_text_like(self) -> bool {
        matches!(self, ContentType::Text | ContentType::Directory)
    }

    /// Guess the content type of a file from its extension.
    ///
    /// Files without a recognised extension are shown as text.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|s| s.to_str())
            .map(|s| s.to_lowercase())
            .as_deref()
        {
            Some("jpg" | "jpeg") => ContentType::Jpeg,
            Some("png") => ContentType::Png,
            Some("mp4") => ContentType::Mp4,
            Some("pdf") => ContentType::Pdf,
            _ => ContentType::Text,
        }
    }
}

impl std::str::FromStr for ContentType {
    type Err = CanvasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image/jpeg" => Ok(ContentType::Jpeg),
            "image/png" => Ok(ContentType::Png),
            "video/mp4" => Ok(ContentType::Mp4),
            "application/pdf" => Ok(ContentType::Pdf),
            "text" => Ok(ContentType::Text),
            "dir" => Ok(ContentType::Directory),
            other => Err(CanvasError::UnknownContentType(other.to_string())),
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a node shows: its content type and where the content lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentDescriptor {
    pub content_type: ContentType,
    /// Media URL/path, text body, or directory display name
    pub path: String,
    /// Resolved directory path, for directory entries
    pub absolute: Option<String>,
}

impl ContentDescriptor {
    pub fn new(content_type: ContentType, path: impl Into<String>) -> Self {
        Self {
            content_type,
            path: path.into(),
            absolute: None,
        }
    }

    pub fn directory(name: impl Into<String>, absolute: impl Into<String>) -> Self {
        Self {
            content_type: ContentType::Directory,
            path: name.into(),
            absolute: Some(absolute.into()),
        }
    }

    /// Path announced when a directory node is activated
    pub fn directory_target(&self) -> &str {
        self.absolute.as_deref().unwrap_or(&self.path)
    }
}

// ============================================================================
// External Record
// ============================================================================

/// Content record exchanged with the content listing and the layout file.
///
/// `Node::serialize` produces exactly the record the node was built from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub x: f64,
    pub y: f64,
    pub z: i64,
    pub w: f64,
    pub h: f64,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absolute: Option<String>,
}

impl NodeRecord {
    pub fn new(
        content_type: ContentType,
        path: impl Into<String>,
        position: (f64, f64),
        size: (f64, f64),
    ) -> Self {
        Self {
            x: position.0,
            y: position.1,
            z: Depth::SceneItem.z_index(),
            w: size.0,
            h: size.1,
            content_type,
            path: path.into(),
            absolute: None,
        }
    }

    pub fn with_depth(mut self, depth: Depth) -> Self {
        self.z = depth.z_index();
        self
    }

    pub fn descriptor(&self) -> ContentDescriptor {
        ContentDescriptor {
            content_type: self.content_type,
            path: self.path.clone(),
            absolute: self.absolute.clone(),
        }
    }
}

// ============================================================================
// Screen Geometry
// ============================================================================

/// Derived on-screen geometry of a node, in viewport pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewGeometry {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    /// Set for text-like nodes, whose height drives the font size
    pub font_size: Option<f64>,
    pub z_index: i64,
}

impl ViewGeometry {
    #[inline]
    pub fn top_left(&self) -> Vector {
        Vector::new(self.left, self.top)
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.left, self.top, self.width, self.height)
    }
}

/// Axis-aligned rectangle in viewport pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Strict containment: points on the edge are outside.
    pub fn contains(&self, v: Vector) -> bool {
        self.left < v.x && v.x < self.right() && self.top < v.y && v.y < self.bottom()
    }

    /// Inclusive containment, used for hit testing node elements.
    pub fn contains_inclusive(&self, v: Vector) -> bool {
        v.x >= self.left && v.x <= self.right() && v.y >= self.top && v.y <= self.bottom()
    }
}
