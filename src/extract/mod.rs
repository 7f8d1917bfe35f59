//! Extraction layer: upstream documents in, DTOs out.
//!
//! Handlers never touch selectors or upstream field names directly; they hand
//! a fetched body to one of these functions and get back the output shapes
//! from [`crate::models`]. Keeping the coupling to the instance's current
//! markup/API shape behind this boundary means a selector change never
//! touches routing code.
//!
//! Two variants exist:
//! - [`html`] runs a fixed set of CSS selectors against page markup. Missing
//!   elements yield `None` fields; a list item missing its video id is
//!   dropped without affecting its siblings.
//! - [`api`] maps known field names of JSON endpoints onto the output shape.
//!   Unknown item types are filtered out entirely.

pub mod api;
pub mod html;
