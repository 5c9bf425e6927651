use image::{ImageFormat, Rgba, RgbaImage};
use log::{debug, info, warn};
use rusttype::{Font, Scale};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::config::RenderConfig;
use crate::error::{CertgenError, RenderError, Result};
use crate::render::color::parse_color;
use crate::render::layout::{centered_position, draw_glyphs, em_scale, layout_line, measure};
use crate::render::sanitize::sanitize_filename;
use crate::report::{BatchObserver, BatchResult, LogObserver};

/// Zeichnet Namen auf eine Zertifikatsvorlage
pub struct CertificateRenderer {
    template: RgbaImage,
    font: Font<'static>,
    scale: Scale,
    color: Rgba<u8>,
    output_dir: PathBuf,
    vertical_offset: f32,
}

impl CertificateRenderer {
    /// Validates the configuration, decodes template and font, and makes sure
    /// the output directory exists.
    pub fn new(config: RenderConfig) -> Result<Self> {
        Self::check_exists("Template", &config.template_path)?;
        Self::check_exists("Font", &config.font_path)?;

        if config.font_size == 0 {
            return Err(CertgenError::InvalidConfig(
                "font size must be greater than zero".to_string(),
            ));
        }
        let color = parse_color(&config.font_color)?;

        let font_bytes = std::fs::read(&config.font_path).map_err(|e| CertgenError::Decode {
            path: config.font_path.clone(),
            reason: e.to_string(),
        })?;
        let font = Font::try_from_vec(font_bytes).ok_or_else(|| CertgenError::Decode {
            path: config.font_path.clone(),
            reason: "not a valid TrueType/OpenType font".to_string(),
        })?;

        let template = image::open(&config.template_path)
            .map_err(|e| CertgenError::Decode {
                path: config.template_path.clone(),
                reason: e.to_string(),
            })?
            .to_rgba8();

        std::fs::create_dir_all(&config.output_dir).map_err(|source| CertgenError::OutputDir {
            path: config.output_dir.clone(),
            source,
        })?;

        info!(
            "Loaded template {} ({}x{})",
            config.template_path.display(),
            template.width(),
            template.height()
        );
        debug!(
            "Font {} at size {}",
            config.font_path.display(),
            config.font_size
        );

        Ok(Self {
            scale: em_scale(&font, config.font_size),
            template,
            font,
            color,
            output_dir: config.output_dir,
            vertical_offset: config.vertical_offset,
        })
    }

    fn check_exists(kind: &'static str, path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(CertgenError::ResourceNotFound {
                kind,
                path: path.to_path_buf(),
            });
        }
        Ok(())
    }

    pub fn template(&self) -> &RgbaImage {
        &self.template
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.template.dimensions()
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Absolute form of the output directory, falling back to the configured
    /// path if it cannot be resolved.
    pub fn absolute_output_dir(&self) -> PathBuf {
        std::fs::canonicalize(&self.output_dir).unwrap_or_else(|_| self.output_dir.clone())
    }

    /// Top-left drawing origin that centers `text` on the template.
    pub fn compute_position(&self, text: &str) -> (f32, f32) {
        let text_box = measure(&self.font, self.scale, text);
        centered_position(self.dimensions(), &text_box, self.vertical_offset)
    }

    /// Draws `name` onto a private copy of the template.
    pub fn render_image(&self, name: &str) -> RgbaImage {
        let mut image = self.template.clone();
        let origin = self.compute_position(name);
        let glyphs = layout_line(&self.font, self.scale, name, origin);
        draw_glyphs(&mut image, &glyphs, self.color);
        image
    }

    pub fn render_one(&self, name: &str) -> std::result::Result<PathBuf, RenderError> {
        self.render_one_into(name, &self.output_dir)
    }

    /// Renders `name` and writes `<dir>/<sanitized name>.png`, replacing any
    /// existing file.
    pub fn render_one_into(
        &self,
        name: &str,
        dir: &Path,
    ) -> std::result::Result<PathBuf, RenderError> {
        let stem = sanitize_filename(name);
        if stem.is_empty() {
            return Err(RenderError::EmptyFilename {
                name: name.to_string(),
            });
        }

        let image = self.render_image(name);
        let output_path = dir.join(format!("{}.png", stem));

        image
            .save_with_format(&output_path, ImageFormat::Png)
            .map_err(|source| RenderError::Save {
                path: output_path.clone(),
                source,
            })?;

        debug!("Wrote {}", output_path.display());
        Ok(output_path)
    }

    pub fn render_batch<S: AsRef<str>>(&self, names: &[S]) -> BatchResult {
        self.render_batch_with(names, &mut LogObserver)
    }

    /// Renders every name in order. A failing name is recorded and the batch
    /// carries on with the next one.
    pub fn render_batch_with<S: AsRef<str>>(
        &self,
        names: &[S],
        observer: &mut dyn BatchObserver,
    ) -> BatchResult {
        let mut result = BatchResult::new(self.absolute_output_dir());
        let mut seen: HashMap<String, &str> = HashMap::new();

        observer.start(names.len());

        for name in names {
            let name = name.as_ref();

            let stem = sanitize_filename(name);
            if !stem.is_empty() {
                if let Some(previous) = seen.insert(stem.clone(), name) {
                    warn!(
                        "'{}' and '{}' share the file name '{}.png', the later one overwrites",
                        previous, name, stem
                    );
                }
            }

            match self.render_one(name) {
                Ok(path) => {
                    observer.rendered(name, &path);
                    result.record_success(path);
                }
                Err(err) => {
                    observer.failed(name, &err);
                    result.record_failure(name, &err);
                }
            }
        }

        observer.finish(&result);
        result
    }
}
