//! Collapsible accordion widget for Leptos CSR applications.

pub mod components;
pub mod events;
pub mod icons;
pub mod registry;
pub mod state;

pub use components::accordion::{register_accordion, Accordion, ChevronIcon, ACCORDION_TAG};
pub use events::TOGGLE_EXPANDED;
pub use icons::Chevron;
pub use state::{AccordionState, AccordionView};
