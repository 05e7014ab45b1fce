//! Placeholder renderer
//!
//! Tracks the drawable size handed to it by the application loop. Frame
//! begin/end are hooks with no work behind them yet.

/// Renderer collaborator driven by the sandbox loop
#[derive(Debug, Default)]
pub struct Renderer {
    width: u32,
    height: u32,
    frames: u64,
}

impl Renderer {
    /// Create an uninitialized renderer
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepare for drawing into a surface of the given size
    pub fn initialize(&mut self, width: u32, height: u32) {
        log::info!("Renderer initialized at {}x{}", width, height);
        self.width = width;
        self.height = height;
    }

    /// Track a new surface size
    pub fn resize(&mut self, width: u32, height: u32) {
        log::debug!("Renderer resized to {}x{}", width, height);
        self.width = width;
        self.height = height;
    }

    /// Start a frame
    pub fn frame_begin(&mut self) {}

    /// Finish a frame
    pub fn frame_end(&mut self) {
        self.frames += 1;
    }

    /// Release renderer resources
    pub fn shutdown(&mut self) {
        let (width, height) = self.size();
        log::info!("Renderer shut down after {} frame(s) at {}x{}", self.frames, width, height);
    }

    /// Current surface size
    pub const fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_tracks_size() {
        let mut renderer = Renderer::new();
        renderer.initialize(800, 600);
        renderer.resize(1280, 720);
        assert_eq!(renderer.size(), (1280, 720));
    }
}
