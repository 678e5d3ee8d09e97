//! taskgraph-view — ranked task cards and dependency diagrams from a task
//! analysis response.
//!
//! Public API: [`render_response`] for JSON in, [`present::present`] for an
//! already decoded response.

pub mod cards;
pub mod config;
pub mod errors;
pub mod layout;
#[cfg(feature = "cli")]
pub mod logging;
pub mod model;
pub mod present;
pub mod renderers;
pub mod scene;

use chrono::{DateTime, Utc};

use crate::config::RenderConfig;
use crate::errors::Result;
use crate::model::parse_response;
use crate::present::{Presentation, present};

/// Decode an analysis response from JSON and build its presentation.
///
/// `now` drives the due-date countdowns on the cards.
pub fn render_response(src: &str, config: &RenderConfig, now: DateTime<Utc>) -> Result<Presentation> {
    let response = parse_response(src)?;
    Ok(present(&response, config, now))
}
