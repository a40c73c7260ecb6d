//! Object-storage signing for lesson videos.
//!
//! - [`signer::ObjectSigner`] -- the seam handlers depend on.
//! - [`supabase::SupabaseStorage`] -- REST client for the hosted storage API.
//! - [`playback`] -- turns a classified reference into a playable URL.

pub mod config;
pub mod playback;
pub mod signer;
pub mod supabase;

pub use config::StorageConfig;
pub use playback::{sign_reference, PlaybackUrl};
pub use signer::{ObjectSigner, StorageError};
pub use supabase::SupabaseStorage;
