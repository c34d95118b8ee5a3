// ABOUTME: Per-frame detection error type reported by ingredient detectors
// ABOUTME: Covers inference failures, timeouts, missing frames, and unavailable detectors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Failure to produce detections for a single frame.
///
/// The aggregator absorbs per-frame variants as empty frames. Only
/// `Unavailable` stops a scan before any frame is analysed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DetectionError {
    /// The detector ran but reported an error
    #[error("inference failed on frame {frame}: {reason}")]
    Inference {
        /// Index of the frame being analysed
        frame: usize,
        /// Detector-supplied failure description
        reason: String,
    },

    /// The detector did not answer within the configured per-frame budget
    #[error("detection on frame {frame} timed out after {timeout_ms}ms")]
    Timeout {
        /// Index of the frame being analysed
        frame: usize,
        /// Budget that elapsed
        timeout_ms: u64,
    },

    /// A detection carried a confidence outside [0, 1]
    #[error("detection '{name}' has confidence {confidence} outside [0, 1]")]
    InvalidConfidence {
        /// Detected label
        name: String,
        /// Offending confidence value
        confidence: f32,
    },

    /// No frame data exists for the requested index
    #[error("no frame data available for frame {frame}")]
    MissingFrame {
        /// Requested frame index
        frame: usize,
    },

    /// The detector could not be prepared for use
    #[error("detector unavailable: {reason}")]
    Unavailable {
        /// Detector-supplied description
        reason: String,
    },
}

impl DetectionError {
    /// Create an inference error for a frame
    #[must_use]
    pub fn inference(frame: usize, reason: impl Into<String>) -> Self {
        Self::Inference {
            frame,
            reason: reason.into(),
        }
    }

    /// Frame index this error refers to, if any
    #[must_use]
    pub const fn frame(&self) -> Option<usize> {
        match self {
            Self::Inference { frame, .. }
            | Self::Timeout { frame, .. }
            | Self::MissingFrame { frame } => Some(*frame),
            Self::InvalidConfidence { .. } | Self::Unavailable { .. } => None,
        }
    }
}
