#[derive(Default, Clone, PartialEq, Eq)]
pub enum Content {
    #[default]
    None,
    /// Raw inner HTML injected into the node as-is.
    Html(String),
    Children(Vec<super::Element>),
}

impl std::fmt::Debug for Content {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Html(html) => write!(f, "Html({html:?})"),
            Self::Children(children) => write!(f, "Children({children:?})"),
        }
    }
}

impl Content {
    /// Check whether this content renders nothing.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::None => true,
            Self::Html(html) => html.is_empty(),
            Self::Children(children) => children.is_empty(),
        }
    }
}
