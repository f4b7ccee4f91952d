//! Branding logos for the scenario report's first page.

use std::path::{Path, PathBuf};

use crate::error::Error;

use super::page::{LEADING, MARGIN, PAGE_HEIGHT, PAGE_WIDTH, RenderContext};

/// Square size of the app logo in the top-left corner.
const APP_LOGO_SIZE: f32 = 40.0;
/// Bounding box the centre logo is scaled into, aspect preserved.
const CENTER_MAX_WIDTH: f32 = 120.0;
const CENTER_MAX_HEIGHT: f32 = 80.0;

pub(super) const APP_LOGO_RESOURCE: &str = "Im1";
pub(super) const CENTER_LOGO_RESOURCE: &str = "Im2";

/// Logo file locations. The centre logo falls back to
/// `default_center_logo` when the configured file is missing or broken.
#[derive(Clone, Debug, Default)]
pub struct Branding {
    pub app_logo: Option<PathBuf>,
    pub center_logo: Option<PathBuf>,
    pub default_center_logo: Option<PathBuf>,
}

/// A decoded logo, flattened to opaque RGB.
pub(super) struct Logo {
    pub rgb: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

pub(super) struct Logos {
    pub app: Option<Logo>,
    pub center: Option<Logo>,
}

fn decode(path: &Path) -> Result<Logo, String> {
    let data = std::fs::read(path).map_err(|e| format!("{}: {e}", path.display()))?;
    let decoded =
        image::load_from_memory(&data).map_err(|e| format!("{}: {e}", path.display()))?;
    let rgba = decoded.to_rgba8();
    let (width, height) = (rgba.width(), rgba.height());

    // Flatten alpha onto white; the report background is always white.
    let rgb: Vec<u8> = rgba
        .pixels()
        .flat_map(|p| {
            let a = p.0[3] as u16;
            [p.0[0], p.0[1], p.0[2]].map(|c| ((c as u16 * a + 255 * (255 - a)) / 255) as u8)
        })
        .collect();

    Ok(Logo { rgb, width, height })
}

/// Resolve the branding into decoded logos.
///
/// A missing app logo is only warned about. The centre logo tries the
/// configured file first, then the default; if either was configured and
/// nothing decodes, the export fails.
pub(super) fn load(branding: &Branding) -> Result<Logos, Error> {
    let app = match &branding.app_logo {
        Some(path) => match decode(path) {
            Ok(logo) => Some(logo),
            Err(err) => {
                log::warn!("App logo unavailable ({err}), continuing without it");
                None
            }
        },
        None => None,
    };

    let center = match (&branding.center_logo, &branding.default_center_logo) {
        (Some(custom), default) => match decode(custom) {
            Ok(logo) => Some(logo),
            Err(err) => {
                log::info!("Centre logo unavailable ({err}), trying the default");
                let default = default
                    .as_ref()
                    .ok_or_else(|| Error::Logo(format!("{err}, and no default is configured")))?;
                Some(decode(default).map_err(Error::Logo)?)
            }
        },
        (None, Some(default)) => Some(decode(default).map_err(Error::Logo)?),
        (None, None) => None,
    };

    Ok(Logos { app, center })
}

/// Draw the first-page banner and position the cursor under it.
///
/// The starting cursor always reserves the app-logo slot, present or not;
/// a taller centre logo pushes it further down.
pub(super) fn draw_banner(ctx: &mut RenderContext, logos: &Logos) {
    let app_logo_y = PAGE_HEIGHT - MARGIN - APP_LOGO_SIZE;
    if logos.app.is_some() {
        ctx.place_image(APP_LOGO_RESOURCE, MARGIN, app_logo_y, APP_LOGO_SIZE, APP_LOGO_SIZE);
    }

    let mut lowest = app_logo_y;
    if let Some(center) = &logos.center {
        let scale = (CENTER_MAX_WIDTH / center.width as f32)
            .min(CENTER_MAX_HEIGHT / center.height as f32);
        let width = center.width as f32 * scale;
        let height = center.height as f32 * scale;
        let x = (PAGE_WIDTH - width) / 2.0;
        let y = PAGE_HEIGHT - MARGIN - height;
        ctx.place_image(CENTER_LOGO_RESOURCE, x, y, width, height);
        lowest = lowest.min(y);
    }

    ctx.y = lowest - LEADING;
}
