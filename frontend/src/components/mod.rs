pub mod editor;
pub mod form_builder;
pub mod helpers;
pub mod palette;
pub mod preview;
