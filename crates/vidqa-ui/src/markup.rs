//! Parser for the trusted markup subset the answer backend emits.
//!
//! Assistant answers arrive as inline HTML restricted by the backend
//! prompt to `<p>`, `<ul>`/`<li>`, `<strong>`/`<b>`, `<a href>` and
//! `<br>`. This parser projects that subset onto styled blocks the
//! panels can paint; unknown tags are dropped. It is only ever fed
//! assistant content — user text goes through the plain path and is
//! never parsed.

/// A block-level element of an assistant answer.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph(Vec<Span>),
    Bullets(Vec<Vec<Span>>),
}

/// A styled run of text within a block.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub text: String,
    pub strong: bool,
    pub href: Option<String>,
}

pub fn parse_markup(input: &str) -> Vec<Block> {
    let mut p = Parser::default();
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '<' => {
                let mut tag = String::new();
                for t in chars.by_ref() {
                    if t == '>' {
                        break;
                    }
                    tag.push(t);
                }
                p.handle_tag(&tag);
            }
            '&' => {
                let mut entity = String::new();
                let mut terminated = false;
                while entity.len() < 6 {
                    match chars.peek() {
                        Some(';') => {
                            chars.next();
                            terminated = true;
                            break;
                        }
                        Some(&e) if e.is_ascii_alphanumeric() || e == '#' => {
                            entity.push(e);
                            chars.next();
                        }
                        _ => break,
                    }
                }
                match decode_entity(&entity) {
                    Some(decoded) if terminated => p.text.push_str(decoded),
                    _ => {
                        // Not an entity after all — keep the raw characters
                        p.text.push('&');
                        p.text.push_str(&entity);
                        if terminated {
                            p.text.push(';');
                        }
                    }
                }
            }
            other => p.text.push(other),
        }
    }

    p.finish()
}

fn decode_entity(entity: &str) -> Option<&str> {
    match entity {
        "lt" => Some("<"),
        "gt" => Some(">"),
        "amp" => Some("&"),
        "quot" => Some("\""),
        "apos" | "#39" => Some("'"),
        "nbsp" => Some(" "),
        _ => None,
    }
}

#[derive(Default)]
struct Parser {
    blocks: Vec<Block>,
    paragraph: Vec<Span>,
    bullets: Option<Vec<Vec<Span>>>,
    item: Option<Vec<Span>>,
    text: String,
    strong: u32,
    href: Option<String>,
}

impl Parser {
    fn handle_tag(&mut self, raw: &str) {
        let name = raw
            .trim_start_matches('/')
            .split_whitespace()
            .next()
            .unwrap_or("")
            .trim_end_matches('/')
            .to_ascii_lowercase();
        let closing = raw.starts_with('/');

        match (name.as_str(), closing) {
            ("p", _) => self.flush_paragraph(),
            ("br", _) => {
                // A dedicated span, so whitespace collapsing cannot
                // swallow the break
                self.flush_text();
                let span = Span {
                    text: "\n".to_string(),
                    strong: self.strong > 0,
                    href: self.href.clone(),
                };
                self.target().push(span);
            }
            ("ul", false) => {
                self.flush_paragraph();
                self.bullets = Some(Vec::new());
            }
            ("ul", true) => {
                self.flush_item();
                if let Some(items) = self.bullets.take() {
                    if !items.is_empty() {
                        self.blocks.push(Block::Bullets(items));
                    }
                }
            }
            ("li", false) => {
                self.flush_item();
                self.item = Some(Vec::new());
            }
            ("li", true) => self.flush_item(),
            ("strong" | "b", false) => {
                self.flush_text();
                self.strong += 1;
            }
            ("strong" | "b", true) => {
                self.flush_text();
                self.strong = self.strong.saturating_sub(1);
            }
            ("a", false) => {
                self.flush_text();
                self.href = extract_href(raw);
            }
            ("a", true) => {
                self.flush_text();
                self.href = None;
            }
            // Anything outside the trusted subset is dropped
            _ => {}
        }
    }

    /// Spans land in the open list item when one exists, otherwise in
    /// the current paragraph.
    fn target(&mut self) -> &mut Vec<Span> {
        match &mut self.item {
            Some(item) => item,
            None => &mut self.paragraph,
        }
    }

    fn flush_text(&mut self) {
        let collapsed = collapse_whitespace(&self.text);
        self.text.clear();

        let span = Span {
            text: collapsed,
            strong: self.strong > 0,
            href: self.href.clone(),
        };
        let target = self.target();
        // Whitespace between tags is noise at the start of a block
        if span.text.trim().is_empty() && target.is_empty() {
            return;
        }
        if span.text.is_empty() {
            return;
        }
        target.push(span);
    }

    fn flush_paragraph(&mut self) {
        self.flush_text();
        trim_trailing(&mut self.paragraph);
        if !self.paragraph.is_empty() {
            self.blocks.push(Block::Paragraph(std::mem::take(&mut self.paragraph)));
        }
    }

    fn flush_item(&mut self) {
        self.flush_text();
        if let Some(mut item) = self.item.take() {
            trim_trailing(&mut item);
            if !item.is_empty() {
                if let Some(bullets) = self.bullets.as_mut() {
                    bullets.push(item);
                }
            }
        }
    }

    fn finish(mut self) -> Vec<Block> {
        self.flush_item();
        if let Some(items) = self.bullets.take() {
            if !items.is_empty() {
                self.blocks.push(Block::Bullets(items));
            }
        }
        self.flush_paragraph();
        self.blocks
    }
}

fn extract_href(tag: &str) -> Option<String> {
    let rest = tag.split_once("href=")?.1;
    let quote = rest.chars().next()?;
    if quote != '"' && quote != '\'' {
        return None;
    }
    rest[1..].split(quote).next().map(str::to_string)
}

fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_ws = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_ws {
                out.push(' ');
            }
            in_ws = true;
        } else {
            out.push(c);
            in_ws = false;
        }
    }
    out
}

fn trim_trailing(spans: &mut Vec<Span>) {
    while let Some(last) = spans.last_mut() {
        last.text.truncate(last.text.trim_end().len());
        if last.text.is_empty() {
            spans.pop();
        } else {
            break;
        }
    }
}
