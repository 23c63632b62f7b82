pub mod navigator;
pub mod routes;

pub use navigator::Navigator;
pub use routes::{AppRoutes, RouteConfigError, RouteTable};
