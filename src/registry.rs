use std::cell::RefCell;
use std::collections::HashMap;

use leptos::logging;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

/// Mounts a registered widget into its host element.
pub type MountFn = fn(HtmlElement);

/// Marks host elements that have already been upgraded.
const UPGRADED_ATTR: &str = "data-upgraded";

thread_local! {
    static REGISTRY: RefCell<HashMap<&'static str, MountFn>> = RefCell::new(HashMap::new());
}

/// Registers `mount` under `tag`, checked-and-inserted exactly once.
///
/// Re-registering the same implementation is a silent no-op. Registering a
/// different implementation under a taken tag logs a warning and keeps the
/// first registration.
pub fn register(tag: &'static str, mount: MountFn) {
    REGISTRY.with(|registry| {
        let mut registry = registry.borrow_mut();
        match registry.get(tag) {
            None => {
                registry.insert(tag, mount);
            }
            Some(existing) if *existing as usize == mount as usize => {}
            Some(_) => {
                logging::warn!(
                    "tag {tag:?} is already registered with a different implementation; keeping the first one"
                );
            }
        }
    });
}

pub fn is_registered(tag: &str) -> bool {
    REGISTRY.with(|registry| registry.borrow().contains_key(tag))
}

#[cfg(test)]
fn registered(tag: &str) -> Option<MountFn> {
    REGISTRY.with(|registry| registry.borrow().get(tag).copied())
}

/// Upgrades every not-yet-upgraded occurrence of a registered tag under
/// `root`, mounting the matching widget in place.
pub fn upgrade_within(root: &Element) {
    let entries: Vec<(&'static str, MountFn)> = REGISTRY.with(|registry| {
        registry
            .borrow()
            .iter()
            .map(|(tag, mount)| (*tag, *mount))
            .collect()
    });
    for (tag, mount) in entries {
        let Ok(hosts) = root.query_selector_all(tag) else {
            continue;
        };
        for index in 0..hosts.length() {
            let Some(host) = hosts
                .item(index)
                .and_then(|node| node.dyn_into::<HtmlElement>().ok())
            else {
                continue;
            };
            if host.has_attribute(UPGRADED_ATTR) {
                continue;
            }
            let _ = host.set_attribute(UPGRADED_ATTR, "");
            mount(host);
        }
    }
}

/// Upgrades the whole document.
pub fn upgrade_document() {
    if let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    {
        upgrade_within(&root);
    }
}
