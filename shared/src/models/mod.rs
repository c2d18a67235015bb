//! Data models
//!
//! Shared between desk-server and front-desk clients (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod cleaning;
pub mod dashboard;
pub mod food_order;
pub mod guest_stay;
pub mod payment;
pub mod reservation;
pub mod revenue;
pub mod room;
pub mod room_price;
pub mod staff;

// Re-exports
pub use cleaning::*;
pub use dashboard::*;
pub use food_order::*;
pub use guest_stay::*;
pub use payment::*;
pub use reservation::*;
pub use revenue::*;
pub use room::*;
pub use room_price::*;
pub use staff::*;
