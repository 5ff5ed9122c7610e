use leptos::logging;
use web_sys::{CustomEvent, CustomEventInit, EventTarget};

/// Event type dispatched every time the accordion toggles. It bubbles and
/// crosses shadow boundaries so a containing group component can coordinate
/// mutually-exclusive expansion.
pub const TOGGLE_EXPANDED: &str = "toggleExpanded";

/// Emits one `toggleExpanded` notification from `target`, carrying the
/// originating click target as the event detail.
pub fn emit_toggle_expanded(target: &EventTarget) {
    let init = CustomEventInit::new();
    init.set_bubbles(true);
    init.set_composed(true);
    init.set_detail(target.as_ref());
    match CustomEvent::new_with_event_init_dict(TOGGLE_EXPANDED, &init) {
        Ok(event) => {
            let _ = target.dispatch_event(&event);
        }
        Err(err) => logging::warn!("dropped {TOGGLE_EXPANDED} notification: {err:?}"),
    }
}
