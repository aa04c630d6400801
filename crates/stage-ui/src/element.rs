/// The closed set of primitive tags the reconciler understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Box,
    Text,
    Button,
    Image,
    Column,
    Row,
    Grid,
    Drawer,
}

impl ElementKind {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Box" | "Container" => Some(ElementKind::Box),
            "Text" => Some(ElementKind::Text),
            "Button" => Some(ElementKind::Button),
            "Image" => Some(ElementKind::Image),
            "Column" => Some(ElementKind::Column),
            "Row" => Some(ElementKind::Row),
            "Grid" => Some(ElementKind::Grid),
            "Drawer" => Some(ElementKind::Drawer),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            ElementKind::Box => "Box",
            ElementKind::Text => "Text",
            ElementKind::Button => "Button",
            ElementKind::Image => "Image",
            ElementKind::Column => "Column",
            ElementKind::Row => "Row",
            ElementKind::Grid => "Grid",
            ElementKind::Drawer => "Drawer",
        }
    }
}
