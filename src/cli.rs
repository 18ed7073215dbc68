//! Command-line front end: argument parsing and the single-glyph render job

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use belle_cairo::{new_canvas, write_png, GlyphWriter, ImageSurface, RenderResult};
use belle_core::constants::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_FILL, DEFAULT_GLYPH_HEIGHT, TRANSPARENT,
};
use belle_core::{
    BitmapOffset, Character, Color, FillStyle, FontSource, GlyphRasterizer, GlyphResult,
    OutlineStyle, RenderConfig, SyntheticRasterizer, VerticalForms,
};
use clap::Parser;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CliError {
    #[error("Invalid canvas size '{input}', expected WIDTHxHEIGHT")]
    InvalidCanvas { input: String },
}

/// Canvas dimensions given as `WIDTHxHEIGHT`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: i32,
    pub height: i32,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
        }
    }
}

impl FromStr for CanvasSize {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CliError::InvalidCanvas { input: s.to_string() };
        let (w, h) = s.split_once(['x', 'X']).ok_or_else(invalid)?;
        let width: i32 = w.trim().parse().map_err(|_| invalid())?;
        let height: i32 = h.trim().parse().map_err(|_| invalid())?;
        if width <= 0 || height <= 0 {
            return Err(invalid());
        }
        Ok(Self { width, height })
    }
}

/// Render one styled character to a PNG
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Font file (TrueType/OpenType)
    #[arg(short, long, required_unless_present = "synthetic")]
    pub font: Option<PathBuf>,

    /// Face index inside a font collection
    #[arg(long, default_value_t = 0)]
    pub face_index: usize,

    /// Character to render
    #[arg(short = 'c', long = "char")]
    pub ch: char,

    /// Glyph height in pixels
    #[arg(long, default_value_t = i64::from(DEFAULT_GLYPH_HEIGHT), allow_negative_numbers = true)]
    pub height: i64,

    /// Target x coordinate (defaults to the canvas center)
    #[arg(short, long, allow_negative_numbers = true)]
    pub x: Option<i32>,

    /// Target y coordinate (defaults to the canvas center)
    #[arg(short, long, allow_negative_numbers = true)]
    pub y: Option<i32>,

    /// Canvas size as WIDTHxHEIGHT
    #[arg(long, default_value = "128x128")]
    pub canvas: CanvasSize,

    /// Fill color as #rrggbb or #rrggbbaa (default black)
    #[arg(long)]
    pub color: Option<Color>,

    /// Skip the fill pass
    #[arg(long, conflicts_with = "color")]
    pub no_fill: bool,

    /// Outline color as #rrggbb or #rrggbbaa
    #[arg(long)]
    pub outline_color: Option<Color>,

    /// Outline width in pixels; 0 or less disables the outline
    #[arg(long, allow_negative_numbers = true)]
    pub outline_width: Option<f32>,

    /// Counter-clockwise rotation in degrees
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub rotation: f64,

    /// Vertical (top-to-bottom) writing mode
    #[arg(long)]
    pub tate: bool,

    /// Canvas background (default transparent)
    #[arg(long)]
    pub background: Option<Color>,

    /// Replace the bundled vertical-form set with the entries in FILE
    #[arg(long, value_name = "FILE")]
    pub vertical_forms: Option<PathBuf>,

    /// Reload the font file for every pass
    #[arg(long)]
    pub no_face_cache: bool,

    /// Disable hinting
    #[arg(long)]
    pub no_hinting: bool,

    /// Use a built-in box glyph instead of a font
    #[arg(long)]
    pub synthetic: bool,

    /// Output PNG path
    #[arg(short, long)]
    pub output: PathBuf,
}

/// What a finished render job produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderReport {
    pub output: PathBuf,
    pub canvas: CanvasSize,
    pub bitmap_offset: BitmapOffset,
}

impl Args {
    pub fn config(&self) -> GlyphResult<RenderConfig> {
        let mut config = RenderConfig::new()
            .with_hinting(!self.no_hinting)
            .with_face_cache(!self.no_face_cache);
        if let Some(path) = &self.vertical_forms {
            config = config.with_vertical_forms(VerticalForms::from_file(path)?);
        }
        Ok(config)
    }

    pub fn font_source(&self) -> FontSource {
        match &self.font {
            Some(path) => FontSource::path(path).with_index(self.face_index),
            None => FontSource::path("synthetic"),
        }
    }

    pub fn fill(&self) -> FillStyle {
        if self.no_fill {
            FillStyle::None
        } else {
            FillStyle::Solid(self.color.unwrap_or(DEFAULT_FILL))
        }
    }

    pub fn outline(&self) -> OutlineStyle {
        OutlineStyle::from_parts(self.outline_color, self.outline_width)
    }

    pub fn position(&self) -> (i32, i32) {
        (
            self.x.unwrap_or(self.canvas.width / 2),
            self.y.unwrap_or(self.canvas.height / 2),
        )
    }

    pub fn character(&self) -> GlyphResult<Character> {
        let (x, y) = self.position();
        Character::builder(self.ch, self.font_source())
            .with_position(x, y)
            .with_height(self.height)
            .with_rotation(self.rotation)
            .with_fill_style(self.fill())
            .with_outline_style(self.outline())
            .with_tate(self.tate)
            .build()
    }
}

/// Render the glyph described by `args` and write the PNG.
pub fn run(args: &Args) -> Result<RenderReport> {
    let config = args.config().context("Failed to load vertical forms")?;
    let mut character = args.character().context("Invalid glyph style")?;
    let background = args.background.unwrap_or(TRANSPARENT);
    let canvas = new_canvas(args.canvas.width, args.canvas.height, background)
        .context("Failed to create canvas")?;

    let drawn = if args.synthetic {
        draw(
            GlyphWriter::with_config(SyntheticRasterizer::default(), &config),
            &canvas,
            &mut character,
        )
    } else {
        draw(GlyphWriter::from_config(&config), &canvas, &mut character)
    };
    drawn.with_context(|| {
        format!("Failed to render {:?} from {}", args.ch, character.face().name())
    })?;

    write_png(&canvas, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    tracing::info!(
        "Rendered {:?} onto {}x{} canvas -> {}",
        args.ch,
        args.canvas.width,
        args.canvas.height,
        args.output.display()
    );

    Ok(RenderReport {
        output: args.output.clone(),
        canvas: args.canvas,
        bitmap_offset: character.bitmap_offset(),
    })
}

fn draw<R: GlyphRasterizer>(
    mut writer: GlyphWriter<R>,
    canvas: &ImageSurface,
    character: &mut Character,
) -> RenderResult<()> {
    writer.write(canvas, character)
}
