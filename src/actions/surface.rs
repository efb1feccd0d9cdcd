/// Display surface an action draws onto: one key or dial of the controller.
use std::collections::HashMap;

use crate::config::LabelPosition;
use crate::render::ClockImage;

pub trait Surface {
    fn set_media(&mut self, image: ClockImage);

    /// Set or clear (`None`) the label at `position`.
    fn set_label(&mut self, position: LabelPosition, text: Option<String>, font_size: u32);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub text: String,
    pub font_size: u32,
}

/// Surface that keeps the latest media and labels in memory.
#[derive(Debug, Default)]
pub struct MemorySurface {
    media: Option<ClockImage>,
    labels: HashMap<LabelPosition, Label>,
    media_updates: u64,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn media(&self) -> Option<&ClockImage> {
        self.media.as_ref()
    }

    pub fn label(&self, position: LabelPosition) -> Option<&Label> {
        self.labels.get(&position)
    }

    pub fn label_text(&self, position: LabelPosition) -> Option<&str> {
        self.label(position).map(|l| l.text.as_str())
    }

    pub fn media_updates(&self) -> u64 {
        self.media_updates
    }
}

impl Surface for MemorySurface {
    fn set_media(&mut self, image: ClockImage) {
        self.media = Some(image);
        self.media_updates += 1;
    }

    fn set_label(&mut self, position: LabelPosition, text: Option<String>, font_size: u32) {
        match text {
            Some(text) => {
                self.labels.insert(position, Label { text, font_size });
            }
            None => {
                self.labels.remove(&position);
            }
        }
    }
}
