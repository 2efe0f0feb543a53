//! Wire types for the admin API.
//!
//! Flat records mirroring backend rows. The client enforces no invariants of
//! its own beyond optional-field typing - the backend is authoritative.
//! Entity rows arrive snake_case; create/update payloads go out camelCase,
//! matching what the backend's validators expect.

pub mod analytics;
pub mod auth;
pub mod category;
pub mod coupon;
pub mod order;
pub mod payment;
pub mod product;
pub mod setting;
pub mod user;

pub use analytics::DashboardStats;
pub use auth::AuthResponse;
pub use category::{Category, CategoryPatch, NewCategory};
pub use coupon::{Coupon, CouponPatch, CouponValidation, NewCoupon};
pub use order::{Order, OrderItem, OrderWithItems, ProductSummary};
pub use payment::Payment;
pub use product::{NewProduct, Product, ProductPatch};
pub use setting::Setting;
pub use user::User;
