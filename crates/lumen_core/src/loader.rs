//! Scene file loading.
//!
//! Scene files are JSON documents mirroring [`SceneDescription`]:
//!
//! ```json
//! {
//!   "camera": { "image_width": 400, "vfov": 20.0, "look_from": [13, 2, 3] },
//!   "materials": {
//!     "ground": { "type": "lambertian", "albedo": [0.5, 0.5, 0.5] },
//!     "glass":  { "type": "dielectric", "refraction_index": 1.5 }
//!   },
//!   "spheres": [
//!     { "center": [0, -1000, 0], "radius": 1000, "material": "ground" }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::scene::SceneDescription;

/// Errors that can occur while loading a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown material referenced by sphere: {0}")]
    UnknownMaterial(String),
}

/// Result type for loading operations.
pub type SceneResult<T> = Result<T, SceneError>;

impl SceneDescription {
    /// Parse and validate a scene from a JSON string.
    pub fn from_json_str(json: &str) -> SceneResult<Self> {
        let scene: SceneDescription = serde_json::from_str(json)?;
        scene.validate()?;
        Ok(scene)
    }

    /// Serialize the scene as pretty-printed JSON.
    pub fn to_json_string(&self) -> SceneResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that every sphere refers to a defined material.
    pub fn validate(&self) -> SceneResult<()> {
        match self.missing_materials().first() {
            Some(name) => Err(SceneError::UnknownMaterial(name.to_string())),
            None => Ok(()),
        }
    }
}

/// Load a scene description from a JSON file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> SceneResult<SceneDescription> {
    let path = path.as_ref();
    log::info!("Loading scene: {}", path.display());

    let contents = fs::read_to_string(path)?;
    let scene = SceneDescription::from_json_str(&contents)?;

    log::info!(
        "Loaded {} materials, {} spheres",
        scene.materials.len(),
        scene.spheres.len()
    );
    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{CameraSettings, MaterialDesc};
    use lumen_math::{Color, Point3};

    const SIMPLE: &str = r#"{
        "camera": { "image_width": 200, "aspect_ratio": 2.0, "look_from": [0, 0, 0] },
        "materials": {
            "matte": { "type": "lambertian", "albedo": [0.5, 0.5, 0.5] },
            "chrome": { "type": "metal", "albedo": [0.8, 0.8, 0.8] },
            "void": { "type": "absorber" }
        },
        "spheres": [
            { "center": [0, 0, -1], "radius": 0.5, "material": "matte" },
            { "center": [1, 0, -1], "radius": 0.5, "material": "chrome" }
        ]
    }"#;

    #[test]
    fn test_parse_scene() {
        let scene = SceneDescription::from_json_str(SIMPLE).unwrap();

        assert_eq!(scene.camera.image_width, 200);
        assert_eq!(scene.camera.aspect_ratio, 2.0);
        assert_eq!(scene.camera.look_from, Point3::ZERO);
        // Unspecified fields keep their defaults
        assert_eq!(scene.camera.vfov, CameraSettings::default().vfov);

        assert_eq!(scene.materials.len(), 3);
        assert_eq!(
            scene.materials["chrome"],
            MaterialDesc::Metal { albedo: Color::splat(0.8), fuzz: 0.0 }
        );
        assert_eq!(scene.materials["void"], MaterialDesc::Absorber);
        assert_eq!(scene.spheres.len(), 2);
        assert_eq!(scene.spheres[1].center, Point3::new(1.0, 0.0, -1.0));
    }

    #[test]
    fn test_empty_document_is_empty_scene() {
        let scene = SceneDescription::from_json_str("{}").unwrap();
        assert_eq!(scene, SceneDescription::default());
    }

    #[test]
    fn test_unknown_material_is_rejected() {
        let json = r#"{ "spheres": [ { "center": [0, 0, 0], "radius": 1, "material": "nope" } ] }"#;
        match SceneDescription::from_json_str(json) {
            Err(SceneError::UnknownMaterial(name)) => assert_eq!(name, "nope"),
            other => panic!("expected UnknownMaterial, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let result = SceneDescription::from_json_str("{ \"spheres\": [ ");
        assert!(matches!(result, Err(SceneError::Json(_))));
    }

    #[test]
    fn test_json_survives_serialization() {
        let scene = SceneDescription::three_spheres();
        let json = scene.to_json_string().unwrap();
        assert_eq!(SceneDescription::from_json_str(&json).unwrap(), scene);
    }

    #[test]
    fn test_shipped_scenes_parse() {
        let three = include_str!("../../../scenes/three_spheres.json");
        assert_eq!(
            SceneDescription::from_json_str(three).unwrap(),
            SceneDescription::three_spheres()
        );

        let occluder = include_str!("../../../scenes/occluder.json");
        let scene = SceneDescription::from_json_str(occluder).unwrap();
        assert_eq!(scene.materials["black"], MaterialDesc::Absorber);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_scene("/definitely/not/a/scene.json");
        assert!(matches!(result, Err(SceneError::Io(_))));
    }
}
