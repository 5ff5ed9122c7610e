use web_sys::Element;

/// Chevron pointing down, shown while the panel is collapsed.
pub const CHEVRON_DOWN: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" class="chevron-down" viewBox="0 0 24 24" width="24" height="24" focusable="false"><path d="M6.7 8.3 12 13.6l5.3-5.3 1.4 1.4L12 16.4 5.3 9.7z"/></svg>"#;

/// Chevron pointing up, shown while the panel is expanded.
pub const CHEVRON_UP: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" class="chevron-up" viewBox="0 0 24 24" width="24" height="24" focusable="false"><path d="M12 7.6l6.7 6.7-1.4 1.4L12 10.4l-5.3 5.3-1.4-1.4z"/></svg>"#;

/// Two-way icon switch driven by the expanded flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Chevron {
    Up,
    Down,
}

impl Chevron {
    pub fn for_expanded(expanded: bool) -> Self {
        if expanded {
            Chevron::Up
        } else {
            Chevron::Down
        }
    }

    /// The bundled SVG payload for this variant.
    pub fn markup(self) -> &'static str {
        match self {
            Chevron::Up => CHEVRON_UP,
            Chevron::Down => CHEVRON_DOWN,
        }
    }

    /// Markup round-tripped through the DOM parser, so a malformed payload
    /// fails loudly instead of rendering an empty icon.
    pub fn dom_markup(self) -> String {
        svg_root(self.markup()).outer_html()
    }
}

/// Parses an SVG payload and extracts its root element.
///
/// Panics when the payload does not start with an `<svg>` element; a broken
/// bundled icon is a programming-time defect, not a runtime condition.
pub(crate) fn svg_root(markup: &str) -> Element {
    let document = web_sys::DomParser::new()
        .and_then(|parser| parser.parse_from_string(markup, web_sys::SupportedType::TextHtml))
        .expect("DOMParser rejected the bundled icon markup");
    let root = document
        .body()
        .and_then(|body| body.first_element_child())
        .expect("bundled icon markup has no root element");
    assert!(
        root.tag_name().eq_ignore_ascii_case("svg"),
        "bundled icon markup does not start with an <svg> element"
    );
    root
}


#[cfg(all(test, target_arch = "wasm32"))]
mod dom_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn both_payloads_parse_to_an_svg_root() {
        for chevron in [Chevron::Up, Chevron::Down] {
            let root = svg_root(chevron.markup());
            assert!(root.tag_name().eq_ignore_ascii_case("svg"));
            assert!(chevron.dom_markup().contains("<path"));
        }
    }
}
