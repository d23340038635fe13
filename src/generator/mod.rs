//! Generated auxiliary documents.
//!
//! - **Sitemap**: every locale × page for search engine indexing (`sitemap.xml`)

pub mod sitemap;
