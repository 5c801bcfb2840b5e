//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Pages receive route props as component props; none of
//! them read the URL directly.

pub mod body_map;
pub mod landing;
pub mod literature_list;
pub mod login;
pub mod not_found;
pub mod personel_list;
