//! Structural view of a documentation page
//!
//! Only `h1`, `h2`, `h3` and `p` elements are kept, in document order.

use scraper::Html;
use scraper::Selector;

use crate::errors::FetchError;

const STRUCTURAL_SELECTOR: &str = "h1, h2, h3, p";

/// Tag of a structural element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    H1,
    H2,
    H3,
    Paragraph,
}

impl ElementKind {
    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "h1" => Some(Self::H1),
            "h2" => Some(Self::H2),
            "h3" => Some(Self::H3),
            "p" => Some(Self::Paragraph),
            _ => None,
        }
    }

    /// Whether this element starts a section that labels what follows
    #[must_use]
    pub const fn is_section_heading(self) -> bool {
        matches!(self, Self::H1 | Self::H2)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuralElement {
    pub kind: ElementKind,
    /// All descendant text, concatenated and untrimmed
    pub text: String,
}

/// Ordered structural elements of one page
#[derive(Debug, Clone, Default)]
pub struct ParsedPage {
    elements: Vec<StructuralElement>,
}

impl ParsedPage {
    /// Parse raw HTML
    ///
    /// # Errors
    /// - [`FetchError::Parse`] if the structural selector cannot be built
    pub fn parse(html: &str) -> Result<Self, FetchError> {
        let selector =
            Selector::parse(STRUCTURAL_SELECTOR).map_err(|e| FetchError::Parse(e.to_string()))?;
        let document = Html::parse_document(html);

        let elements = document
            .select(&selector)
            .filter_map(|el| {
                ElementKind::from_tag(el.value().name()).map(|kind| StructuralElement {
                    kind,
                    text: el.text().collect(),
                })
            })
            .collect();

        Ok(Self { elements })
    }

    #[must_use]
    pub fn elements(&self) -> &[StructuralElement] {
        &self.elements
    }

    /// Nearest `h1`/`h2` strictly before the element at `index`
    #[must_use]
    pub fn preceding_section_heading(&self, index: usize) -> Option<&StructuralElement> {
        self.elements
            .get(..index)?
            .iter()
            .rev()
            .find(|el| el.kind.is_section_heading())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r"
        <html><body>
          <p>Intro before any heading</p>
          <h1>Guide</h1>
          <nav><p>Nested <b>bold</b> text</p></nav>
          <h3>Details</h3>
          <h2>Sources</h2>
          <div><span>ignored</span></div>
          <p>Create a new source by...</p>
        </body></html>";

    #[test]
    fn test_elements_in_document_order() {
        let page = ParsedPage::parse(PAGE).unwrap();
        let kinds: Vec<ElementKind> = page.elements().iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ElementKind::Paragraph,
                ElementKind::H1,
                ElementKind::Paragraph,
                ElementKind::H3,
                ElementKind::H2,
                ElementKind::Paragraph,
            ]
        );
    }

    #[test]
    fn test_text_includes_descendants() {
        let page = ParsedPage::parse(PAGE).unwrap();
        assert_eq!(page.elements()[2].text, "Nested bold text");
    }

    #[test]
    fn test_preceding_heading_skips_h3() {
        let page = ParsedPage::parse(PAGE).unwrap();
        let heading = page.preceding_section_heading(3).unwrap();
        assert_eq!(heading.text, "Guide");

        let heading = page.preceding_section_heading(5).unwrap();
        assert_eq!(heading.text, "Sources");
    }

    #[test]
    fn test_no_preceding_heading() {
        let page = ParsedPage::parse(PAGE).unwrap();
        assert!(page.preceding_section_heading(0).is_none());
        assert!(page.preceding_section_heading(1).is_none());
    }

    #[test]
    fn test_empty_document() {
        let page = ParsedPage::parse("").unwrap();
        assert!(page.elements().is_empty());
        assert!(page.preceding_section_heading(4).is_none());
    }
}
