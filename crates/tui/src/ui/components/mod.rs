pub mod date_input;
pub mod hints;
pub mod toast;
