//! Presentational tree
//!
//! A minimal element/text tree produced by the renderers and written into a
//! [`Surface`](super::Surface). Serializes to escaped HTML.

/// An element with a tag, attributes and children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

/// A node in the presentational tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append a child only when present
    pub fn maybe_child(self, child: Option<impl Into<Node>>) -> Self {
        match child {
            Some(c) => self.child(c),
            None => self,
        }
    }

    #[cfg(test)]
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    #[cfg(test)]
    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .map(|c| c.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl Node {
    /// Concatenated text of this node and its descendants
    #[cfg(test)]
    pub fn text_content(&self) -> String {
        let mut buf = String::new();
        self.collect_text(&mut buf);
        buf
    }

    #[cfg(test)]
    fn collect_text(&self, buf: &mut String) {
        match self {
            Node::Text(t) => buf.push_str(t),
            Node::Element(el) => el.children.iter().for_each(|c| c.collect_text(buf)),
        }
    }

    /// First element (depth-first, self included) carrying `class`
    #[cfg(test)]
    pub fn find_class(&self, class: &str) -> Option<&Element> {
        match self {
            Node::Text(_) => None,
            Node::Element(el) if el.has_class(class) => Some(el),
            Node::Element(el) => el.children.iter().find_map(|c| c.find_class(class)),
        }
    }

    pub fn to_html(&self) -> String {
        let mut buf = String::new();
        self.write_html(&mut buf);
        buf
    }

    pub fn write_html(&self, buf: &mut String) {
        match self {
            Node::Text(t) => buf.push_str(&escape(t)),
            Node::Element(el) => {
                buf.push('<');
                buf.push_str(el.tag);
                for (name, value) in &el.attrs {
                    buf.push_str(&format!(" {}=\"{}\"", name, escape(value)));
                }
                buf.push('>');
                for child in &el.children {
                    child.write_html(buf);
                }
                buf.push_str(&format!("</{}>", el.tag));
            }
        }
    }
}

/// Escape text for HTML content and attribute values
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
