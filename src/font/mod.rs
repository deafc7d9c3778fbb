//! Icon font loading and glyph sizing.
//!
//! The embedded font resources are parsed once per process. Whatever loads is
//! registered with egui; a resource that fails only leaves its glyphs blank.

pub mod sizing;

pub use sizing::{SizingPolicy, fit_pixel_size, smooth_pixel_size};

use crate::prelude::*;

static ICON_FONT: OnceLock<IconFont> = OnceLock::new();

/// A font resource compiled into the binary.
#[derive(Clone, Copy)]
pub struct FontSource {
    /// Key under which the face is registered with egui.
    pub name: &'static str,
    pub bytes: &'static [u8],
}

/// Fonts bundled with the picker.
pub fn embedded_sources() -> Vec<FontSource> {
    vec![FontSource {
        name: "phosphor-regular",
        bytes: egui_phosphor::Variant::Regular.font_bytes(),
    }]
}

struct LoadedFace {
    name: &'static str,
    family: String,
    bytes: &'static [u8],
}

/// The loaded icon font faces.
pub struct IconFont {
    faces: Vec<LoadedFace>,
    requested: usize,
    family: String,
    max_width: u32,
}

/// Process-wide icon font, loaded on first use.
pub fn icon_font() -> &'static IconFont {
    ICON_FONT.get_or_init(|| IconFont::load(&embedded_sources()))
}

/// Loads the embedded fonts if needed; true when every resource loaded.
pub fn load_icon_font() -> bool {
    icon_font().is_complete()
}

/// Default glyph size, taken from the height of small interactive widgets.
pub fn icon_font_size_pixels(style: &egui::Style) -> u32 {
    style.spacing.interact_size.y.round().max(1.0) as u32
}

impl IconFont {
    pub fn load(sources: &[FontSource]) -> Self {
        let mut faces = Vec::new();
        let mut max_width = 0;

        for source in sources {
            match parse_face(source) {
                Ok((face, width)) => {
                    info!("Loaded icon font '{}' ({})", face.family, face.name);
                    max_width = max_width.max(width);
                    faces.push(face);
                }
                Err(e) => warn!("{}", e),
            }
        }

        if max_width == 0 {
            max_width = ICON_FONT_REFERENCE_SIZE;
        }

        let mut families: Vec<&str> = Vec::new();
        for face in &faces {
            if !families.contains(&face.family.as_str()) {
                families.push(&face.family);
            }
        }
        let family = families.join(", ");

        Self {
            faces,
            requested: sources.len(),
            family,
            max_width,
        }
    }

    /// True when every requested resource loaded.
    pub fn is_complete(&self) -> bool {
        !self.faces.is_empty() && self.faces.len() == self.requested
    }

    /// Resolved family names, empty if nothing loaded.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Widest glyph advance at the reference pixel size.
    pub fn max_width(&self) -> u32 {
        self.max_width
    }

    pub fn fit_size(&self, width: u32, height: u32, policy: &SizingPolicy) -> u32 {
        let size = fit_pixel_size(width, height, self.max_width);
        let size = policy.apply(size);
        debug!("Icon size for {}x{} box: {}px", width, height, size);
        size
    }

    /// Glyphs are drawn through the proportional fallback chain.
    pub fn font_id(&self, pixel_size: u32) -> FontId {
        FontId::proportional(pixel_size as f32)
    }

    pub fn install(&self, fonts: &mut FontDefinitions) {
        for face in &self.faces {
            fonts.font_data.insert(
                face.name.to_owned(),
                Arc::new(FontData::from_static(face.bytes)),
            );
            fonts
                .families
                .entry(FontFamily::Name(face.family.as_str().into()))
                .or_default()
                .push(face.name.to_owned());
            // Right after the main text font, ahead of egui's emoji fonts.
            if let Some(proportional) = fonts.families.get_mut(&FontFamily::Proportional) {
                let at = proportional.len().min(1);
                proportional.insert(at, face.name.to_owned());
            }
        }
    }

    /// Replaces the context fonts with the defaults plus the icon faces.
    pub fn setup_fonts(&self, ctx: &Context) {
        let mut fonts = FontDefinitions::default();
        self.install(&mut fonts);
        ctx.set_fonts(fonts);
    }
}

fn parse_face(source: &FontSource) -> Result<(LoadedFace, u32), PickerError> {
    let face = ttf_parser::Face::parse(source.bytes, 0).map_err(|e| PickerError::FontParse {
        name: source.name.to_string(),
        reason: e.to_string(),
    })?;

    let family = face
        .names()
        .into_iter()
        .filter(|name| {
            name.name_id == ttf_parser::name_id::TYPOGRAPHIC_FAMILY
                || name.name_id == ttf_parser::name_id::FAMILY
        })
        .find_map(|name| name.to_string())
        .ok_or_else(|| PickerError::FontFamilyMissing(source.name.to_string()))?;

    let units_per_em = u32::from(face.units_per_em().max(1));
    let max_advance = (0..face.number_of_glyphs())
        .filter_map(|id| face.glyph_hor_advance(ttf_parser::GlyphId(id)))
        .max()
        .map_or(0, u32::from);
    let width = (max_advance * ICON_FONT_REFERENCE_SIZE + units_per_em / 2) / units_per_em;

    Ok((
        LoadedFace {
            name: source.name,
            family,
            bytes: source.bytes,
        },
        width,
    ))
}
