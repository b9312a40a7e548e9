//! Rendering utilities for humans (console summary, Markdown).
//!
//! Renderers take a flattened, display-ready model so they stay free of domain types.

#![forbid(unsafe_code)]

mod markdown;
mod model;
mod summary;

pub use markdown::render_markdown;
pub use model::{
    RenderableDimension, RenderableObservation, RenderableReport, RenderableStatus,
    RenderableTier,
};
pub use summary::render_summary;
