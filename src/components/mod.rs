pub mod accordion;

pub use accordion::{register_accordion, Accordion, ChevronIcon, ACCORDION_TAG};
