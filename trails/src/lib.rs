//! # trails - TrailService client
//!
//! Small blocking client for the TrailService REST API, which serves users,
//! hiking trails, and GPS location points along those trails.
//!
//! ## Features
//!
//! - **Client**: one method per API resource, each a single `GET` decoded into
//!   typed records with optional fields
//! - **Extraction**: latitude/longitude, elevation and comment sequences that
//!   stay index-aligned with the input points
//! - **Plotting**: longitude/latitude scatter coloured by elevation, as SVG
//! - **Maps**: one marker per point, as a Leaflet page or GeoJSON
//!
//! ## Quick Start
//!
//! ```ignore
//! use trails::{extract, map, plot, TrailServiceClient};
//!
//! let client = TrailServiceClient::new("http://localhost:5026/api")?;
//! let points = client.get_trail_points("Cadover Bridge to Shaugh Bridge Circular")?;
//!
//! let comments = extract::comment_ids(&points);
//! println!("{} comment ids", comments.len());
//!
//! plot::plot_trail(&points)?.save("cadover.svg")?;
//! map::create_map(&points)?.save_html("cadover.html")?;
//! ```
//!
//! ## Endpoints
//!
//! | Path | Response |
//! |------|----------|
//! | `/users` | all users |
//! | `/users/{username}` | one user |
//! | `/trails` | all trails |
//! | `/locationpoints` | points of every trail |
//! | `/Locationpoints/{trailName}` | points of one trail |

pub mod client;
pub mod error;
pub mod extract;
pub mod map;
pub mod plot;
pub mod records;

// Re-export main types at crate root for convenience
pub use client::{
    EndpointStatuses, TrailServiceClient, TrailServiceClientBuilder, DEFAULT_BASE_URL,
};
pub use error::{Result, TrailError};
pub use map::{create_map, Marker, MarkerMap};
pub use plot::{plot_trail, TrailPlot};
pub use records::{LocationPoint, TrailRecord, UserRecord, NO_COMMENT};
