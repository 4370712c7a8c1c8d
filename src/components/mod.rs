//! Reusable UI components shared by the pages.

pub mod site_header;
pub mod theme_toggle;
