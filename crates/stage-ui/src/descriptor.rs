//! Immutable descriptors and their property bags.

use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use stage_graphics::{Color, Point, Texture};

/// Zero-argument callback carried in props (`onClick`).
pub type Callback = Rc<dyn Fn()>;

#[derive(Clone)]
pub enum PropValue {
    Bool(bool),
    Number(f32),
    Text(String),
    Color(Color),
    Point(Point),
    Texture(Texture),
    Map(Props),
    Callback(Callback),
}

impl PropValue {
    pub fn callback(f: impl Fn() + 'static) -> Self {
        PropValue::Callback(Rc::new(f))
    }

    fn type_name(&self) -> &'static str {
        match self {
            PropValue::Bool(_) => "bool",
            PropValue::Number(_) => "number",
            PropValue::Text(_) => "text",
            PropValue::Color(_) => "color",
            PropValue::Point(_) => "point",
            PropValue::Texture(_) => "texture",
            PropValue::Map(_) => "map",
            PropValue::Callback(_) => "callback",
        }
    }
}

impl fmt::Debug for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::Bool(value) => write!(f, "{value}"),
            PropValue::Number(value) => write!(f, "{value}"),
            PropValue::Text(value) => write!(f, "{value:?}"),
            PropValue::Color(value) => write!(f, "{value:?}"),
            PropValue::Point(value) => write!(f, "({}, {})", value.x, value.y),
            PropValue::Texture(value) => write!(f, "{value:?}"),
            PropValue::Map(value) => write!(f, "{value:?}"),
            PropValue::Callback(_) => f.write_str("<callback>"),
        }
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

impl From<f32> for PropValue {
    fn from(value: f32) -> Self {
        PropValue::Number(value)
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        PropValue::Number(value as f32)
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Text(value.to_owned())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Text(value)
    }
}

impl From<Color> for PropValue {
    fn from(value: Color) -> Self {
        PropValue::Color(value)
    }
}

impl From<Point> for PropValue {
    fn from(value: Point) -> Self {
        PropValue::Point(value)
    }
}

impl From<Texture> for PropValue {
    fn from(value: Texture) -> Self {
        PropValue::Texture(value)
    }
}

impl From<Props> for PropValue {
    fn from(value: Props) -> Self {
        PropValue::Map(value)
    }
}

impl From<Callback> for PropValue {
    fn from(value: Callback) -> Self {
        PropValue::Callback(value)
    }
}

/// Insertion-ordered property bag. Merging always yields a new map.
#[derive(Clone, Debug, Default)]
pub struct Props {
    entries: IndexMap<String, PropValue>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PropValue>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.entries.get(key)
    }

    /// Presence check: a key holding `false` or `0` still counts.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Shallow overlay: keys in `overlay` replace keys in `self`.
    pub fn merged(&self, overlay: &Props) -> Props {
        let mut entries = self.entries.clone();
        for (key, value) in &overlay.entries {
            entries.insert(key.clone(), value.clone());
        }
        Props { entries }
    }

    pub fn number(&self, key: &str) -> Option<f32> {
        match self.get(key)? {
            PropValue::Number(value) => Some(*value),
            other => self.mismatch(key, "number", other),
        }
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        match self.get(key)? {
            PropValue::Text(value) => Some(value.as_str()),
            other => self.mismatch(key, "text", other),
        }
    }

    pub fn flag(&self, key: &str) -> Option<bool> {
        match self.get(key)? {
            PropValue::Bool(value) => Some(*value),
            other => self.mismatch(key, "bool", other),
        }
    }

    /// Accepts a color or a whole number read as `0xRRGGBB`.
    pub fn color(&self, key: &str) -> Option<Color> {
        match self.get(key)? {
            PropValue::Color(value) => Some(*value),
            PropValue::Number(value) if *value >= 0.0 && value.fract() == 0.0 => {
                Some(Color::from_hex(*value as u32))
            }
            other => self.mismatch(key, "color", other),
        }
    }

    pub fn point(&self, key: &str) -> Option<Point> {
        match self.get(key)? {
            PropValue::Point(value) => Some(*value),
            other => self.mismatch(key, "point", other),
        }
    }

    /// Accepts either a point or a number applied to both axes.
    pub fn point_or_uniform(&self, key: &str) -> Option<Point> {
        match self.get(key)? {
            PropValue::Point(value) => Some(*value),
            PropValue::Number(value) => Some(Point::splat(*value)),
            other => self.mismatch(key, "point or number", other),
        }
    }

    pub fn texture(&self, key: &str) -> Option<&Texture> {
        match self.get(key)? {
            PropValue::Texture(value) => Some(value),
            other => self.mismatch(key, "texture", other),
        }
    }

    pub fn map(&self, key: &str) -> Option<&Props> {
        match self.get(key)? {
            PropValue::Map(value) => Some(value),
            other => self.mismatch(key, "map", other),
        }
    }

    pub fn callback(&self, key: &str) -> Option<Callback> {
        match self.get(key)? {
            PropValue::Callback(value) => Some(Rc::clone(value)),
            other => self.mismatch(key, "callback", other),
        }
    }

    fn mismatch<T>(&self, key: &str, expected: &str, found: &PropValue) -> Option<T> {
        log::warn!(
            "prop `{key}` expected {expected}, found {}; ignoring",
            found.type_name()
        );
        None
    }
}

impl<K: Into<String>, V: Into<PropValue>> FromIterator<(K, V)> for Props {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Props::new();
        for (key, value) in iter {
            props.insert(key, value);
        }
        props
    }
}

/// Function component: receives its props and children, returns a replacement descriptor.
#[derive(Clone)]
pub struct Component(Rc<dyn Fn(&Props, &[Descriptor]) -> Descriptor>);

impl Component {
    pub fn new(f: impl Fn(&Props, &[Descriptor]) -> Descriptor + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn call(&self, props: &Props, children: &[Descriptor]) -> Descriptor {
        (self.0)(props, children)
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Component")
    }
}

#[derive(Clone, Debug)]
pub enum Kind {
    /// Primitive tag, resolved when rendered.
    Element(String),
    Component(Component),
}

impl From<&str> for Kind {
    fn from(tag: &str) -> Self {
        Kind::Element(tag.to_owned())
    }
}

impl From<String> for Kind {
    fn from(tag: String) -> Self {
        Kind::Element(tag)
    }
}

impl From<Component> for Kind {
    fn from(component: Component) -> Self {
        Kind::Component(component)
    }
}

/// Immutable description of a node to render.
#[derive(Clone, Debug)]
pub struct Descriptor {
    kind: Kind,
    props: Option<Props>,
    children: Vec<Descriptor>,
}

impl Descriptor {
    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    pub fn props(&self) -> Option<&Props> {
        self.props.as_ref()
    }

    pub fn children(&self) -> &[Descriptor] {
        &self.children
    }
}

/// Builds a descriptor. `props` may be `None`; it is treated as empty when rendered.
pub fn h(
    kind: impl Into<Kind>,
    props: impl Into<Option<Props>>,
    children: impl IntoIterator<Item = Descriptor>,
) -> Descriptor {
    Descriptor {
        kind: kind.into(),
        props: props.into(),
        children: children.into_iter().collect(),
    }
}

/// Shorthand for `Kind::Component(Component::new(f))`.
pub fn component(f: impl Fn(&Props, &[Descriptor]) -> Descriptor + 'static) -> Kind {
    Kind::Component(Component::new(f))
}
