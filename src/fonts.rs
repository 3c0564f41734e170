use eframe::egui::{self, FontData, FontDefinitions, FontFamily};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub const FONT_OVERRIDE_VAR: &str = "SAHAYATA_DEVANAGARI_FONT";

const DEVANAGARI_FONT: &str = "devanagari";

// The default egui fonts carry no Devanagari glyphs.
const CANDIDATE_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/noto/NotoSansDevanagari-Regular.ttf",
    "/usr/share/fonts/noto/NotoSansDevanagari-Regular.ttf",
    "/usr/share/fonts/google-noto/NotoSansDevanagari-Regular.ttf",
    "/usr/share/fonts/truetype/lohit-devanagari/Lohit-Devanagari.ttf",
    "/usr/share/fonts/truetype/fonts-deva-extra/kalimati.ttf",
    "/Library/Fonts/NotoSansDevanagari-Regular.ttf",
    "/System/Library/Fonts/Supplemental/ITFDevanagari.ttc",
    "C:\\Windows\\Fonts\\Nirmala.ttf",
    "C:\\Windows\\Fonts\\mangal.ttf",
];

pub fn candidate_paths(override_path: Option<PathBuf>) -> Vec<PathBuf> {
    override_path
        .into_iter()
        .chain(CANDIDATE_PATHS.iter().map(PathBuf::from))
        .collect()
}

fn first_readable(paths: &[PathBuf]) -> Option<(&Path, Vec<u8>)> {
    paths
        .iter()
        .find_map(|path| fs::read(path).ok().map(|bytes| (path.as_path(), bytes)))
}

/// Append a Devanagari font as a fallback to the proportional family so Hindi
/// text renders. Missing fonts are logged and Hindi falls back to boxes.
pub fn install(ctx: &egui::Context) {
    let override_path = std::env::var_os(FONT_OVERRIDE_VAR).map(PathBuf::from);
    let paths = candidate_paths(override_path);

    let Some((path, bytes)) = first_readable(&paths) else {
        tracing::warn!(
            "no Devanagari font found; set {FONT_OVERRIDE_VAR} to a .ttf to render Hindi"
        );
        return;
    };

    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(DEVANAGARI_FONT.into(), Arc::new(FontData::from_owned(bytes)));
    fonts
        .families
        .entry(FontFamily::Proportional)
        .or_default()
        .push(DEVANAGARI_FONT.into());
    ctx.set_fonts(fonts);
    tracing::info!(font = %path.display(), "Devanagari font installed");
}
