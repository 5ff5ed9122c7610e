use crate::icons::Chevron;

/// Explicit widget state. Everything the accordion renders is a pure
/// function of these three fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
    /// Caller-supplied identifier used to derive the ids linking the header
    /// button to its panel. Optional; when absent or empty no ids are
    /// rendered.
    pub id: Option<String>,
    /// Display text for the clickable header.
    pub header: String,
    /// Whether the content panel is currently shown. Defaults to collapsed.
    pub expanded: bool,
}

impl AccordionState {
    /// Flips `expanded` to its logical negation.
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// DOM id for the header button, `"{id}Heading"`.
    pub fn heading_id(&self) -> Option<String> {
        self.dom_id("Heading")
    }

    /// DOM id for the content panel, `"{id}Panel"`.
    pub fn panel_id(&self) -> Option<String> {
        self.dom_id("Panel")
    }

    fn dom_id(&self, suffix: &str) -> Option<String> {
        self.id
            .as_deref()
            .filter(|id| !id.is_empty())
            .map(|id| format!("{id}{suffix}"))
    }

    /// Computes the view-model for the current state.
    pub fn view(&self) -> AccordionView {
        AccordionView {
            heading_id: self.heading_id(),
            panel_id: self.panel_id(),
            aria_expanded: if self.expanded { "true" } else { "false" },
            panel_hidden: !self.expanded,
            chevron: Chevron::for_expanded(self.expanded),
            trigger_class: if self.expanded {
                "accordion-trigger expanded"
            } else {
                "accordion-trigger"
            },
        }
    }
}

/// DOM-independent view-model consumed by the rendering layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccordionView {
    pub heading_id: Option<String>,
    pub panel_id: Option<String>,
    pub aria_expanded: &'static str,
    pub panel_hidden: bool,
    pub chevron: Chevron,
    pub trigger_class: &'static str,
}
