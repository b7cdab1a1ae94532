//! Text measurement and pagination for the exported report.
//!
//! Everything here is pure: blocks go in, positioned pages come out. The PDF
//! backend only has to draw what it is told. Measurements use a fixed
//! average-advance approximation of the Helvetica faces, which is accurate
//! enough for wrapping and conservative enough never to overflow a page.

/// A4 portrait, millimetres.
pub(crate) const PAGE_WIDTH: f64 = 210.0;
pub(crate) const PAGE_HEIGHT: f64 = 297.0;
pub(crate) const MARGIN: f64 = 20.0;
pub(crate) const CONTENT_WIDTH: f64 = PAGE_WIDTH - 2.0 * MARGIN;

const MM_PER_PT: f64 = 0.3528;
const LEADING: f64 = 1.25;
/// Average Helvetica glyph advance as a fraction of the font size.
const GLYPH_ADVANCE: f64 = 0.5;
const RULE_HEIGHT: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FontFace {
    Regular,
    Bold,
    Oblique,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Tint {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

pub(crate) const BLACK: Tint = Tint {
    r: 0.07,
    g: 0.09,
    b: 0.15,
};
pub(crate) const GRAY: Tint = Tint {
    r: 0.42,
    g: 0.45,
    b: 0.50,
};
pub(crate) const GREEN: Tint = Tint {
    r: 0.09,
    g: 0.40,
    b: 0.20,
};
pub(crate) const RED: Tint = Tint {
    r: 0.60,
    g: 0.11,
    b: 0.11,
};
pub(crate) const AMBER: Tint = Tint {
    r: 0.57,
    g: 0.25,
    b: 0.05,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Align {
    Left,
    Center,
}

/// One drawable unit inside a block.
#[derive(Debug, Clone)]
pub(crate) enum Element {
    /// Wrapping text. Split into single lines during pagination.
    Text {
        text: String,
        size: f64,
        face: FontFace,
        color: Tint,
        align: Align,
    },
    /// A single line with a bold, colored tag flushed to the right margin.
    TaggedLine {
        text: String,
        size: f64,
        tag: String,
        tag_color: Tint,
    },
    /// Horizontal divider across the content width.
    Rule,
    /// Vertical whitespace.
    Spacer(f64),
}

impl Element {
    fn height(&self) -> f64 {
        match self {
            Element::Text { text, size, .. } => {
                wrap_text(text, *size, CONTENT_WIDTH).len() as f64 * line_height(*size)
            }
            Element::TaggedLine { size, .. } => line_height(*size),
            Element::Rule => RULE_HEIGHT,
            Element::Spacer(height) => *height,
        }
    }
}

/// A group of elements kept together on one page when it fits.
#[derive(Debug, Clone)]
pub(crate) struct Block {
    pub elements: Vec<Element>,
    pub spacing_after: f64,
}

impl Block {
    pub(crate) fn new(elements: Vec<Element>, spacing_after: f64) -> Self {
        Self {
            elements,
            spacing_after,
        }
    }

    fn height(&self) -> f64 {
        self.elements.iter().map(Element::height).sum()
    }
}

/// An element positioned on a page. `y` is the offset of the element's top
/// edge from the top of the page; `Text` is always a single pre-wrapped line.
#[derive(Debug, Clone)]
pub(crate) struct Placed {
    pub y: f64,
    pub element: Element,
}

pub(crate) type Page = Vec<Placed>;

pub(crate) fn line_height(size: f64) -> f64 {
    size * MM_PER_PT * LEADING
}

pub(crate) fn text_width(text: &str, size: f64) -> f64 {
    text.chars().count() as f64 * size * MM_PER_PT * GLYPH_ADVANCE
}

/// Greedy word wrap against the estimated advance width. Words longer than a
/// full line are hard-split rather than overflowing.
pub(crate) fn wrap_text(text: &str, size: f64, width: f64) -> Vec<String> {
    let max_chars = ((width / (size * MM_PER_PT * GLYPH_ADVANCE)) as usize).max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word = word;
        while word.chars().count() > max_chars {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let split_at = word
                .char_indices()
                .nth(max_chars)
                .map(|(index, _)| index)
                .unwrap_or(word.len());
            lines.push(word[..split_at].to_string());
            word = &word[split_at..];
        }

        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > max_chars && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Flow blocks onto pages. A block that fits inside the writable height is
/// never split; a block taller than a whole page flows line by line instead
/// of being dropped.
pub(crate) fn paginate(blocks: &[Block]) -> Vec<Page> {
    let limit = PAGE_HEIGHT - MARGIN;
    let writable = limit - MARGIN;
    let mut pages = Vec::new();
    let mut page: Page = Vec::new();
    let mut cursor = MARGIN;

    for block in blocks {
        let height = block.height();
        if cursor > MARGIN && cursor + height > limit && height <= writable {
            if !page.is_empty() {
                pages.push(std::mem::take(&mut page));
            }
            cursor = MARGIN;
        }

        for element in &block.elements {
            match element {
                Element::Text {
                    text,
                    size,
                    face,
                    color,
                    align,
                } => {
                    for line in wrap_text(text, *size, CONTENT_WIDTH) {
                        let height = line_height(*size);
                        if cursor + height > limit {
                            if !page.is_empty() {
                                pages.push(std::mem::take(&mut page));
                            }
                            cursor = MARGIN;
                        }
                        page.push(Placed {
                            y: cursor,
                            element: Element::Text {
                                text: line,
                                size: *size,
                                face: *face,
                                color: *color,
                                align: *align,
                            },
                        });
                        cursor += height;
                    }
                }
                Element::TaggedLine { .. } | Element::Rule => {
                    let height = element.height();
                    if cursor + height > limit {
                        if !page.is_empty() {
                            pages.push(std::mem::take(&mut page));
                        }
                        cursor = MARGIN;
                    }
                    page.push(Placed {
                        y: cursor,
                        element: element.clone(),
                    });
                    cursor += height;
                }
                Element::Spacer(height) => {
                    cursor += height;
                }
            }
        }

        cursor += block.spacing_after;
    }

    if !page.is_empty() {
        pages.push(page);
    }
    pages
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(text: &str) -> Element {
        Element::Text {
            text: text.to_string(),
            size: 10.0,
            face: FontFace::Regular,
            color: BLACK,
            align: Align::Left,
        }
    }

    #[test]
    fn wrap_respects_estimated_width() {
        let text = "implement appropriate organizational physical and technical measures";
        let lines = wrap_text(text, 10.0, 40.0);
        assert!(lines.len() > 1);
        let max_chars = (40.0 / (10.0 * MM_PER_PT * GLYPH_ADVANCE)) as usize;
        for line in &lines {
            assert!(line.chars().count() <= max_chars, "line too wide: {line}");
        }
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn wrap_hard_splits_oversized_words() {
        let lines = wrap_text(&"x".repeat(500), 10.0, 40.0);
        assert!(lines.len() > 1);
        let total: usize = lines.iter().map(|line| line.chars().count()).sum();
        assert_eq!(total, 500);
    }

    #[test]
    fn short_content_stays_on_one_page() {
        let blocks = vec![
            Block::new(vec![body("first")], 4.0),
            Block::new(vec![body("second")], 4.0),
        ];
        assert_eq!(paginate(&blocks).len(), 1);
    }

    #[test]
    fn overflowing_content_paginates_without_losing_lines() {
        let blocks: Vec<Block> = (0..120)
            .map(|index| {
                Block::new(
                    vec![Element::TaggedLine {
                        text: format!("{index}. entry"),
                        size: 10.0,
                        tag: "Compliant".to_string(),
                        tag_color: GREEN,
                    }],
                    2.0,
                )
            })
            .collect();

        let pages = paginate(&blocks);
        assert!(pages.len() > 1, "120 entries cannot fit a single page");
        let placed: usize = pages.iter().map(Vec::len).sum();
        assert_eq!(placed, 120, "every entry must survive pagination");
    }

    #[test]
    fn fitting_block_is_not_split_across_pages() {
        // Fill most of the first page, then add a block that only fits whole
        // on the second page.
        let filler = Block::new(
            vec![Element::Spacer(PAGE_HEIGHT - 2.0 * MARGIN - 5.0)],
            0.0,
        );
        let step = Block::new(vec![body("title"), body("description line")], 4.0);

        let pages = paginate(&[filler, step]);
        assert_eq!(pages.len(), 1, "spacer creates no page of its own");
        let ys: Vec<f64> = pages[0].iter().map(|placed| placed.y).collect();
        assert_eq!(ys.len(), 2);
        assert!(
            (ys[0] - MARGIN).abs() < f64::EPSILON,
            "block must restart at the top of a fresh page, got {ys:?}"
        );
    }

    #[test]
    fn page_break_happens_before_the_block_not_inside_it() {
        let filler = Block::new(vec![Element::Spacer(PAGE_HEIGHT - MARGIN - 25.0)], 0.0);
        let tall = Block::new(vec![body("a"), body("b"), body("c")], 0.0);
        let pages = paginate(&[
            Block::new(vec![body("page one content")], 0.0),
            filler,
            tall,
        ]);

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1].len(), 3, "the whole block moves to page two");
    }
}
