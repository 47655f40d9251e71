//! Form-definition core shared by the builder frontend and its host.
//!
//! - [`model`]: fields, field kinds and the [`model::form::Form`] state container.
//! - [`palette`]: the catalogue of kinds the author can add.
//! - [`reorder`]: ephemeral drag gesture tracking for hover reordering.
//! - [`schema`]: validation rules derived from the current field list.
//! - [`preview`]: the live preview's value collection and submit state machine.

pub mod error;
pub mod model;
pub mod palette;
pub mod preview;
pub mod reorder;
pub mod schema;
