use std::collections::BTreeMap;
use std::fmt;

/// Handle to an element in a [`crate::Document`] arena.
///
/// Handles stay valid after an element is detached; they are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u32);

impl ElementId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index as u32)
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Html,
    Header,
    Nav,
    Main,
    Footer,
    Aside,
    Div,
    Heading,
    Paragraph,
    Button,
    Anchor,
}

impl Tag {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Tag::Html => "html",
            Tag::Header => "header",
            Tag::Nav => "nav",
            Tag::Main => "main",
            Tag::Footer => "footer",
            Tag::Aside => "aside",
            Tag::Div => "div",
            Tag::Heading => "h1",
            Tag::Paragraph => "p",
            Tag::Button => "button",
            Tag::Anchor => "a",
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) tag: Tag,
    pub(crate) attrs: BTreeMap<String, String>,
    pub(crate) text: String,
    pub(crate) parent: Option<ElementId>,
    pub(crate) children: Vec<ElementId>,
}

impl Node {
    pub(crate) fn new(tag: Tag) -> Self {
        Self {
            tag,
            attrs: BTreeMap::new(),
            text: String::new(),
            parent: None,
            children: Vec::new(),
        }
    }
}
