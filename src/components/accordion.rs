use leptos::*;

use crate::events;
use crate::icons::Chevron;
use crate::registry;
use crate::state::AccordionState;

/// Tag name for attribute-driven instantiation from host markup.
pub const ACCORDION_TAG: &str = "x-accordion";

/// Collapsible accordion: a header button that toggles a content panel.
///
/// Every toggle dispatches a bubbling `toggleExpanded` event carrying the
/// clicked node, so a containing group component can close siblings when one
/// of them opens.
#[component]
pub fn Accordion(
    /// Used to derive the ids linking the header button to its panel.
    #[prop(optional, into)]
    id: Option<String>,
    /// Display text for the clickable header.
    #[prop(into)]
    header: String,
    /// Externally-owned expanded flag; defaults to an internal signal
    /// starting collapsed.
    #[prop(optional, into)]
    expanded: Option<RwSignal<bool>>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] on_toggle: Option<Callback<ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let expanded = expanded.unwrap_or_else(|| create_rw_signal(false));

    let state = {
        let header = header.clone();
        create_memo(move |_| {
            AccordionState {
                id: id.clone(),
                header: header.clone(),
                expanded: expanded.get(),
            }
            .view()
        })
    };

    let wrapper_class = move || {
        if let Some(ref extra) = class {
            format!("accordion {}", extra)
        } else {
            "accordion".to_string()
        }
    };

    let handle_click = move |ev: ev::MouseEvent| {
        expanded.update(|value| *value = !*value);
        if let Some(target) = ev.target() {
            events::emit_toggle_expanded(&target);
        }
        if let Some(callback) = on_toggle {
            callback.call(ev);
        }
    };

    view! {
        <div class=wrapper_class expanded=move || expanded.get()>
            <button
                type="button"
                class=move || state.get().trigger_class
                id=state.get_untracked().heading_id
                aria-expanded=move || state.get().aria_expanded
                aria-controls=state.get_untracked().panel_id
                on:click=handle_click
            >
                {header}
                <ChevronIcon chevron=Signal::derive(move || state.get().chevron) />
            </button>
            <div
                class="accordion-panel"
                id=state.get_untracked().panel_id
                role="region"
                aria-labelledby=state.get_untracked().heading_id
                hidden=move || state.get().panel_hidden
            >
                {children()}
            </div>
        </div>
    }
}

/// Chevron icon mirroring the current expanded state.
#[component]
pub fn ChevronIcon(#[prop(into)] chevron: Signal<Chevron>) -> impl IntoView {
    view! {
        <span
            class="accordion-icon"
            aria-hidden="true"
            inner_html=move || chevron.get().dom_markup()
        ></span>
    }
}

/// Registers the accordion under [`ACCORDION_TAG`]. Safe to call more than
/// once. Call [`registry::upgrade_document`] afterwards to upgrade host
/// markup already present in the page.
pub fn register_accordion() {
    console_error_panic_hook::set_once();
    registry::register(ACCORDION_TAG, mount_accordion);
}

/// Reads `id`, `header` and `expanded` off the host element, keeps its
/// existing markup as panel content and mounts an [`Accordion`] in place.
fn mount_accordion(host: web_sys::HtmlElement) {
    // An empty id yields no derived ids, same as an absent prop.
    let id = host.get_attribute("id").unwrap_or_default();
    let header = host.get_attribute("header").unwrap_or_default();
    let initially_expanded = host.has_attribute("expanded");
    let content = host.inner_html();
    host.set_inner_html("");
    mount_to(host, move || {
        let expanded = create_rw_signal(initially_expanded);
        view! {
            <Accordion id=id header=header expanded=expanded>
                <div inner_html=content></div>
            </Accordion>
        }
    });
}
