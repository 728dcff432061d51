//! Localized site pages
//!
//! This module provides:
//! - Page routes for home, niche tool pages and the blog
//! - `sitemap.xml` generation
//! - HTML helpers shared with the component views

pub mod html;
mod render;
mod routes;

pub use render::{PROCESS_ENDPOINT, sitemap_xml};
pub use routes::{PageError, SiteAppState, not_found, site_routes};
