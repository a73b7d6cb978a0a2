//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod album_repo;
pub mod lookup_repo;
pub mod ownership_repo;
pub mod song_repo;
pub mod user_repo;

pub use album_repo::AlbumRepo;
pub use lookup_repo::{GenderRepo, GenreRepo};
pub use ownership_repo::SongOwnershipRepo;
pub use song_repo::SongRepo;
pub use user_repo::UserRepo;
