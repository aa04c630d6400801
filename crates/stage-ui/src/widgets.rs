//! Per-kind descriptor builders over [`h`].

#![allow(non_snake_case)]

use crate::descriptor::{h, Descriptor, Props};

pub fn Box(props: Props, children: impl IntoIterator<Item = Descriptor>) -> Descriptor {
    h("Box", props, children)
}

pub fn Text(props: Props) -> Descriptor {
    h("Text", props, [])
}

pub fn Button(props: Props) -> Descriptor {
    h("Button", props, [])
}

pub fn Image(props: Props, children: impl IntoIterator<Item = Descriptor>) -> Descriptor {
    h("Image", props, children)
}

pub fn Column(props: Props, children: impl IntoIterator<Item = Descriptor>) -> Descriptor {
    h("Column", props, children)
}

pub fn Row(props: Props, children: impl IntoIterator<Item = Descriptor>) -> Descriptor {
    h("Row", props, children)
}

pub fn Grid(props: Props, children: impl IntoIterator<Item = Descriptor>) -> Descriptor {
    h("Grid", props, children)
}

pub fn Drawer(props: Props, children: impl IntoIterator<Item = Descriptor>) -> Descriptor {
    h("Drawer", props, children)
}
