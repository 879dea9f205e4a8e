//! Viewport collaborator interface
//!
//! The session never inspects camera state; it only asks the viewport to
//! save, restore, lock and frame.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Opaque saved camera state, produced and consumed by the viewport
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewToken(Vec<u8>);

impl ViewToken {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// External viewport/camera holder driven by the session
pub trait ViewportHost {
    /// Capture the current camera state
    fn save_view(&mut self) -> ViewToken;

    /// Restore a previously captured camera state
    fn restore_view(&mut self, token: &ViewToken);

    /// Enable or disable user camera navigation
    fn set_navigation_enabled(&mut self, enabled: bool);

    /// Move the camera to `eye`, looking at `target`
    fn frame(&mut self, eye: Vec3, target: Vec3);
}

/// Viewport that does nothing (headless use)
#[derive(Debug, Clone, Copy, Default)]
pub struct NullViewport;

impl ViewportHost for NullViewport {
    fn save_view(&mut self) -> ViewToken {
        ViewToken::default()
    }

    fn restore_view(&mut self, _token: &ViewToken) {}

    fn set_navigation_enabled(&mut self, _enabled: bool) {}

    fn frame(&mut self, _eye: Vec3, _target: Vec3) {}
}
