//! Document-order walk that segments HTML into heading-delimited sections

use crate::extract::document::{CodeBlock, Section};
use scraper::{ElementRef, Node, Selector};
use std::sync::OnceLock;

/// Elements removed outright, with everything beneath them
const BOILERPLATE_TAGS: &[&str] = &[
    "script", "style", "nav", "footer", "header", "noscript", "template",
];

/// Language tag used when a code block declares none
pub const DEFAULT_LANGUAGE: &str = "text";

/// Classification of a node encountered during the walk
#[derive(Debug)]
enum NodeKind<'a> {
    Heading { level: u8, element: ElementRef<'a> },
    CodeBlock(ElementRef<'a>),
    Text(&'a str),
    Container(ElementRef<'a>),
    Ignored,
}

fn classify<'a>(node: &'a Node, element: Option<ElementRef<'a>>) -> NodeKind<'a> {
    match (node, element) {
        (Node::Text(text), _) => NodeKind::Text(&**text),
        (Node::Element(_), Some(element)) => {
            let tag = element.value().name();
            if BOILERPLATE_TAGS.contains(&tag) {
                return NodeKind::Ignored;
            }
            match tag {
                "h1" => NodeKind::Heading { level: 1, element },
                "h2" => NodeKind::Heading { level: 2, element },
                "h3" => NodeKind::Heading { level: 3, element },
                "h4" => NodeKind::Heading { level: 4, element },
                "h5" => NodeKind::Heading { level: 5, element },
                "h6" => NodeKind::Heading { level: 6, element },
                "pre" => NodeKind::CodeBlock(element),
                _ => NodeKind::Container(element),
            }
        }
        _ => NodeKind::Ignored,
    }
}

fn code_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse("code").expect("code selector"))
}

/// Accumulates sections while walking one document
pub(crate) struct SectionCollector {
    min_content_length: usize,
    nested_headings: bool,
    heading_stack: Vec<(u8, String)>,
    current: Section,
    sections: Vec<Section>,
}

impl SectionCollector {
    pub(crate) fn new(min_content_length: usize, nested_headings: bool) -> Self {
        Self {
            min_content_length,
            nested_headings,
            heading_stack: Vec::new(),
            current: empty_section(Vec::new()),
            sections: Vec::new(),
        }
    }

    pub(crate) fn walk(&mut self, root: ElementRef<'_>) {
        for child in root.children() {
            match classify(child.value(), ElementRef::wrap(child)) {
                NodeKind::Heading { level, element } => self.start_section(level, element),
                NodeKind::CodeBlock(element) => self.push_code(element),
                NodeKind::Text(text) => self.push_text(text),
                NodeKind::Container(element) => self.walk(element),
                NodeKind::Ignored => {}
            }
        }
    }

    fn start_section(&mut self, level: u8, element: ElementRef<'_>) {
        self.flush();

        let title = collapse_whitespace(&element.text().collect::<String>());
        if self.nested_headings {
            while let Some((last_level, _)) = self.heading_stack.last() {
                if *last_level >= level {
                    self.heading_stack.pop();
                } else {
                    break;
                }
            }
            self.heading_stack.push((level, title));
        } else {
            self.heading_stack = vec![(level, title)];
        }

        let path = self
            .heading_stack
            .iter()
            .map(|(_, title)| title.clone())
            .collect();
        self.current = empty_section(path);
    }

    fn push_code(&mut self, pre: ElementRef<'_>) {
        let code_element = pre.select(code_selector()).next();
        let language = code_element
            .and_then(language_of)
            .or_else(|| language_of(pre))
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

        let source = code_element.unwrap_or(pre);
        let code = source.text().collect::<String>().trim().to_string();
        if code.is_empty() {
            return;
        }

        self.current.code_blocks.push(CodeBlock { language, code });
    }

    fn push_text(&mut self, text: &str) {
        let text = collapse_whitespace(text);
        if text.is_empty() {
            return;
        }
        if !self.current.text.is_empty() {
            self.current.text.push(' ');
        }
        self.current.text.push_str(&text);
    }

    fn flush(&mut self) {
        let section = std::mem::replace(&mut self.current, empty_section(Vec::new()));
        if section.text.chars().count() >= self.min_content_length.max(1) {
            self.sections.push(section);
        }
    }

    pub(crate) fn finish(mut self) -> Vec<Section> {
        self.flush();
        self.sections
    }
}

fn empty_section(heading_path: Vec<String>) -> Section {
    Section {
        heading_path,
        text: String::new(),
        code_blocks: Vec::new(),
    }
}

/// Reads a `language-*` or `lang-*` class from an element
fn language_of(element: ElementRef<'_>) -> Option<String> {
    element.value().classes().find_map(|class| {
        class
            .strip_prefix("language-")
            .or_else(|| class.strip_prefix("lang-"))
            .filter(|lang| !lang.is_empty())
            .map(str::to_string)
    })
}

fn collapse_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}
