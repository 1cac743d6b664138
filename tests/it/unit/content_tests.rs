//! Unit tests for the content factory registry.

use spatial_canvas::content::{ContentFactory, ContentRegistry};
use spatial_canvas::{ContentDescriptor, ContentType};

#[derive(Debug, PartialEq)]
enum Element {
    Image(String),
    Label(String),
}

struct ImageFactory(ContentType);

impl ContentFactory for ImageFactory {
    type Element = Element;

    fn content_type(&self) -> ContentType {
        self.0
    }

    fn create_content(&self, descriptor: &ContentDescriptor) -> Element {
        Element::Image(descriptor.path.clone())
    }
}

struct LabelFactory;

impl ContentFactory for LabelFactory {
    type Element = Element;

    fn content_type(&self) -> ContentType {
        ContentType::Directory
    }

    fn create_content(&self, descriptor: &ContentDescriptor) -> Element {
        Element::Label(descriptor.directory_target().to_string())
    }
}

#[test]
fn test_each_type_uses_its_factory() {
    let registry = ContentRegistry::new()
        .with(ImageFactory(ContentType::Jpeg))
        .with(ImageFactory(ContentType::Png))
        .with(LabelFactory);

    assert_eq!(
        registry.create(&ContentDescriptor::new(ContentType::Png, "/files/a.png")),
        Some(Element::Image("/files/a.png".into()))
    );
    assert_eq!(
        registry.create(&ContentDescriptor::directory("photos", "/srv/photos")),
        Some(Element::Label("/srv/photos".into()))
    );
    assert_eq!(registry.create(&ContentDescriptor::new(ContentType::Mp4, "/files/v.mp4")), None);
}

#[test]
fn test_register_replaces_previous_factory() {
    struct Other;
    impl ContentFactory for Other {
        type Element = Element;
        fn content_type(&self) -> ContentType {
            ContentType::Png
        }
        fn create_content(&self, _: &ContentDescriptor) -> Element {
            Element::Label("other".into())
        }
    }

    let mut registry = ContentRegistry::new();
    registry.register(ImageFactory(ContentType::Png));
    registry.register(Other);

    assert!(registry.supports(ContentType::Png));
    assert_eq!(
        registry.create(&ContentDescriptor::new(ContentType::Png, "x")),
        Some(Element::Label("other".into()))
    );
}
