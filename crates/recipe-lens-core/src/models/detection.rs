// ABOUTME: Detection data models produced by the per-frame ingredient detector
// ABOUTME: Defines bounding boxes, world positions, and validated detected ingredients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::DetectionError;
use crate::models::key::IngredientKey;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in normalized image coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl BoundingBox {
    /// Create a bounding box from origin and size
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Area of the box
    #[must_use]
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Center point as `(x, y)`
    #[must_use]
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Whether every edge lies within the unit square
    #[must_use]
    pub fn is_normalized(&self) -> bool {
        let unit = 0.0..=1.0;
        unit.contains(&self.x)
            && unit.contains(&self.y)
            && unit.contains(&(self.x + self.width))
            && unit.contains(&(self.y + self.height))
            && self.width >= 0.0
            && self.height >= 0.0
    }
}

/// Position of a detection in 3D space (carried for presentation only)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldPosition {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
    /// Z coordinate
    pub z: f32,
}

/// One ingredient instance found in a single frame.
///
/// Confidence is guaranteed to lie in [0, 1]; both the constructor and
/// deserialization reject anything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDetectedIngredient")]
pub struct DetectedIngredient {
    name: String,
    confidence: f32,
    bounding_box: BoundingBox,
    #[serde(skip_serializing_if = "Option::is_none")]
    world_position: Option<WorldPosition>,
}

impl DetectedIngredient {
    /// Create a detection, validating its confidence
    ///
    /// # Errors
    ///
    /// Returns `DetectionError::InvalidConfidence` if `confidence` is NaN or
    /// outside [0, 1]
    pub fn new(
        name: impl Into<String>,
        confidence: f32,
        bounding_box: BoundingBox,
    ) -> Result<Self, DetectionError> {
        let name = name.into();
        if !(0.0..=1.0).contains(&confidence) {
            return Err(DetectionError::InvalidConfidence { name, confidence });
        }
        Ok(Self {
            name,
            confidence,
            bounding_box,
            world_position: None,
        })
    }

    /// Attach a world position
    #[must_use]
    pub fn with_world_position(mut self, position: WorldPosition) -> Self {
        self.world_position = Some(position);
        self
    }

    /// Detected label as reported by the model
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Model confidence in [0, 1]
    #[must_use]
    pub const fn confidence(&self) -> f32 {
        self.confidence
    }

    /// Normalized bounding box in the source frame
    #[must_use]
    pub const fn bounding_box(&self) -> BoundingBox {
        self.bounding_box
    }

    /// Optional 3D placement
    #[must_use]
    pub const fn world_position(&self) -> Option<WorldPosition> {
        self.world_position
    }

    /// Case-insensitive identity of this detection
    #[must_use]
    pub fn key(&self) -> IngredientKey {
        IngredientKey::new(&self.name)
    }

    /// Whether the confidence is strictly above `threshold`
    #[must_use]
    pub fn exceeds(&self, threshold: f32) -> bool {
        self.confidence > threshold
    }

    /// Confidence as a truncated whole percentage for display
    #[must_use]
    pub fn confidence_percent(&self) -> u8 {
        (self.confidence * 100.0) as u8
    }
}

/// Wire shape accepted from detectors and fixture files
#[derive(Deserialize)]
struct RawDetectedIngredient {
    name: String,
    confidence: f32,
    #[serde(default, alias = "boundingBox")]
    bounding_box: BoundingBox,
    #[serde(default, alias = "worldPosition")]
    world_position: Option<WorldPosition>,
}

impl TryFrom<RawDetectedIngredient> for DetectedIngredient {
    type Error = DetectionError;

    fn try_from(raw: RawDetectedIngredient) -> Result<Self, Self::Error> {
        let detection = Self::new(raw.name, raw.confidence, raw.bounding_box)?;
        Ok(match raw.world_position {
            Some(position) => detection.with_world_position(position),
            None => detection,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_bounds_are_enforced() {
        assert!(DetectedIngredient::new("egg", 0.0, BoundingBox::default()).is_ok());
        assert!(DetectedIngredient::new("egg", 1.0, BoundingBox::default()).is_ok());
        assert!(matches!(
            DetectedIngredient::new("egg", 1.2, BoundingBox::default()),
            Err(DetectionError::InvalidConfidence { .. })
        ));
        assert!(DetectedIngredient::new("egg", f32::NAN, BoundingBox::default()).is_err());
    }

    #[test]
    fn test_threshold_is_strict() {
        let detection = DetectedIngredient::new("egg", 0.7, BoundingBox::default()).unwrap();
        assert!(!detection.exceeds(0.7));
        assert!(detection.exceeds(0.69));
    }

    #[test]
    fn test_deserialization_accepts_camel_case_and_validates() {
        let json = r#"{"name":"Tomato","confidence":0.91,"boundingBox":{"x":0.1,"y":0.2,"width":0.3,"height":0.4}}"#;
        let detection: DetectedIngredient = serde_json::from_str(json).unwrap();
        assert_eq!(detection.key().as_str(), "tomato");
        assert_eq!(detection.confidence_percent(), 91);
        assert!(detection.bounding_box().is_normalized());

        let invalid = r#"{"name":"Tomato","confidence":1.5}"#;
        assert!(serde_json::from_str::<DetectedIngredient>(invalid).is_err());
    }
}
