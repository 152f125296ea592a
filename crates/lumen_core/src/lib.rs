//! Lumen Core - scene description for the lumen renderer.
//!
//! This crate provides:
//!
//! - **Scene description types**: `SceneDescription`, `CameraSettings`,
//!   `MaterialDesc`, `SphereDesc`
//! - **Loading**: JSON scene files via serde
//! - **Built-in scenes**: the three-sphere test scene and the random
//!   "cover" scene
//!
//! # Example
//!
//! ```ignore
//! use lumen_core::load_scene;
//!
//! let scene = load_scene("scene.json")?;
//! println!("Loaded {} materials, {} spheres",
//!     scene.materials.len(),
//!     scene.spheres.len());
//! ```

pub mod loader;
pub mod scene;

pub use loader::{load_scene, SceneError, SceneResult};
pub use scene::{CameraSettings, MaterialDesc, SceneDescription, SphereDesc};
