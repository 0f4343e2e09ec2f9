//! The marker engine: everything between the saved markers and the draw instructions.
//!
//! [NavMarkerSession] owns a [MarkerStore] and a [SegmentCache], and is the only entry point the host needs.

pub mod cache;
pub mod error;
pub mod geometry;
pub mod intersect;
pub mod io;
pub mod lod;
pub mod session;
pub mod store;

pub use cache::SegmentCache;
pub use error::{NavMarkerError, Result};
pub use intersect::{Intersection, Ray};
pub use io::{DirPersistence, MarkerPersistence};
pub use lod::DisplayFlags;
pub use session::{NavMarkerSession, RenderSink};
pub use store::MarkerStore;
