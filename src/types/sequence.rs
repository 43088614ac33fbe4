use image::{ImageBuffer, Luma};
use std::path::PathBuf;

/// A decoded frame reduced to indices into the shared palette.
#[derive(Debug, Clone)]
pub struct IndexedFrame {
    pub source: PathBuf,
    pub indices: ImageBuffer<Luma<u8>, Vec<u8>>,
}

impl IndexedFrame {
    pub fn width(&self) -> u32 {
        self.indices.width()
    }

    pub fn height(&self) -> u32 {
        self.indices.height()
    }
}

/// Frames in discovery order, each paired with its delay in 100ths of a second.
#[derive(Debug, Default)]
pub struct FrameSequence {
    frames: Vec<IndexedFrame>,
    delays: Vec<u16>,
}

impl FrameSequence {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            frames: Vec::with_capacity(capacity),
            delays: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, frame: IndexedFrame, delay: u16) {
        self.frames.push(frame);
        self.delays.push(delay);
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Logical screen size: the largest width and height of any frame.
    pub fn screen_size(&self) -> (u32, u32) {
        self.frames.iter().fold((0, 0), |(w, h), frame| {
            (w.max(frame.width()), h.max(frame.height()))
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&IndexedFrame, u16)> {
        self.frames.iter().zip(self.delays.iter().copied())
    }
}
