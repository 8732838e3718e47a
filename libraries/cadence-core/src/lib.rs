//! Cadence Core
//!
//! Store-agnostic types, capability traits and the reorder coordinator for
//! playlists held in an external media index.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `PlaylistId`, `MoveRequest`, `PlaylistMember`
//! - **Capability Traits**: `ExistenceProber`, `MemberMover`, `ConditionalMover`, `MembershipReader`
//! - **Coordinator**: `ReorderCoordinator`, probe-then-move orchestration
//! - **Dispatch**: typed `Request`/`Response` pairs routed by `Dispatcher`
//! - **Error Handling**: Unified `CadenceError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use cadence_core::{MemoryIndex, MoveRequest, PlaylistId, ReorderCoordinator};
//!
//! # async fn example() -> cadence_core::Result<()> {
//! let index = MemoryIndex::new().with_playlist(PlaylistId::new(123), vec![10, 20, 30]);
//! let coordinator = ReorderCoordinator::new(index.clone(), index.clone());
//!
//! let moved = coordinator
//!     .move_item_to(MoveRequest::new(PlaylistId::new(123), 0, 1))
//!     .await?;
//! assert!(moved);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod coordinator;
pub mod dispatch;
pub mod error;
pub mod memory;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use coordinator::ReorderCoordinator;
pub use dispatch::{Dispatcher, MoveStrategy, PlaylistMembers, Request, Response};
pub use error::{CadenceError, Result};
pub use memory::MemoryIndex;
pub use traits::{ConditionalMover, ExistenceProber, MemberMover, MembershipReader};
pub use types::{apply_move, MoveRequest, PlaylistId, PlaylistMember, Position};
