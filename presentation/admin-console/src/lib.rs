//! Page controllers and wiring of the product catalog admin console.

pub mod config;
pub mod navigation;
pub mod pages;
pub mod setup;

#[cfg(test)]
pub(crate) mod test_support;
