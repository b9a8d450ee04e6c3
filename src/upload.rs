// ABOUTME: Custom slide upload - turns image files into custom slides
// Non-image files are rejected individually without affecting accepted ones

use crate::components::wizard::ValidationError;
use crate::models::{LocalIdAllocator, Slide};
use std::path::Path;
use tracing::{info, warn};

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "svg", "webp", "bmp"];

/// A file offered for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    /// Declared media type (e.g. "image/png"), when the source provides one
    pub media_type: Option<String>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, media_type: Option<&str>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.map(str::to_string),
        }
    }

    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            name,
            media_type: None,
        }
    }

    pub fn is_image(&self) -> bool {
        if let Some(media_type) = &self.media_type {
            return media_type.starts_with("image/");
        }
        Path::new(&self.name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
            .unwrap_or(false)
    }

    /// Slide title: file name without its extension
    pub fn title(&self) -> String {
        Path::new(&self.name)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.name.clone())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadOutcome {
    pub slides: Vec<Slide>,
    pub rejected: Vec<ValidationError>,
}

/// One custom slide per accepted image, in input order
pub fn upload_images(files: &[UploadFile], ids: &mut LocalIdAllocator) -> UploadOutcome {
    let mut outcome = UploadOutcome::default();

    for file in files {
        if file.is_image() {
            outcome
                .slides
                .push(Slide::new(ids.allocate(), file.title(), "Custom slide"));
        } else {
            warn!("Rejected non-image upload: {}", file.name);
            outcome.rejected.push(ValidationError::InvalidUploadType {
                file_name: file.name.clone(),
            });
        }
    }

    info!(
        "Upload accepted {} file(s), rejected {}",
        outcome.slides.len(),
        outcome.rejected.len()
    );
    outcome
}

/// Split comma-separated user input into upload files
pub fn parse_upload_input(input: &str) -> Vec<UploadFile> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| UploadFile::from_path(Path::new(s)))
        .collect()
}
