//! Platform abstraction layer
//!
//! The cores are platform-free; this layer only exposes them to a host.
//! - Browser: `wasm-bindgen` classes returning typed arrays
//! - Native: nothing extra, the binary drives the cores directly

#[cfg(target_arch = "wasm32")]
pub mod web;
