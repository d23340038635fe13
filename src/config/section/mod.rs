//! Configuration section definitions.
//!
//! Each module corresponds to a section in `heimdex.toml`:
//!
//! | Module    | TOML Section | Purpose                               |
//! |-----------|--------------|---------------------------------------|
//! | `site`    | `[site]`     | Public URL, title, booking links      |
//! | `serve`   | `[serve]`    | HTTP server address                   |
//! | `content` | `[content]`  | Where documents and static files live |
//! | `routing` | `[routing]`  | Paths the locale redirect skips       |

mod content;
mod routing;
mod serve;
mod site;

pub use content::{ContentConfig, SourceKind};
pub use routing::RoutingConfig;
pub use serve::ServeConfig;
pub use site::{BookingConfig, SiteSectionConfig};
