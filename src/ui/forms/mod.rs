//! Form rendering module
//!
//! - `field_renderer`: text field, checkbox and help text rendering
//! - `contact_form`: the lead contact form

mod contact_form;
mod field_renderer;

pub use contact_form::draw as draw_contact_form;
