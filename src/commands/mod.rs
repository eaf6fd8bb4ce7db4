pub mod extract;
pub mod links;
pub mod wire_form;
