pub mod session;
pub mod storefront;
