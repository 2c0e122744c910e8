//! Try-on submission routes. Image payloads arrive URL-encoded, which is why
//! the form body ceiling is far above the JSON one.

pub mod controller;
pub mod router;

pub use router::init_try_on_router;
