//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. `layout_repo` additionally hosts
//! the PostgreSQL implementation of the core layout storage port.

pub mod layout_repo;
pub mod profile_repo;
pub mod social_link_repo;
pub mod widget_repo;
