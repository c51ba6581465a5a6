use std::path::PathBuf;

use clap::Parser;

use crate::glimmer::Settings;

#[derive(Debug, Clone, Parser)]
#[command(name = "glimmer")]
#[command(about = "Recursive ray tracer for a scene of spheres")]
pub struct Config {
    /// Where to write the rendered PNG
    #[arg(short, long, default_value = "out.png")]
    pub output: PathBuf,

    /// Equirectangular environment map (png or jpeg). Flat sky color if omitted
    #[arg(short, long)]
    pub envmap: Option<PathBuf>,

    #[arg(long, default_value_t = 1024, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    #[arg(long, default_value_t = 768, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Vertical field of view in degrees
    #[arg(long, default_value_t = 90.0)]
    pub fov: f32,

    /// Maximum number of reflection/refraction bounces
    #[arg(long, default_value_t = 4)]
    pub max_depth: u32,

    /// Render all rows at once with rayon instead of one row at a time
    #[arg(long)]
    pub parallel: bool,

    #[arg(long)]
    pub no_shadows: bool,

    #[arg(long)]
    pub no_specular: bool,

    /// Disable both reflection and refraction
    #[arg(long)]
    pub no_reflections: bool,
}

impl Config {
    pub fn settings(&self) -> Settings {
        Settings {
            shadows: !self.no_shadows,
            specular: !self.no_specular,
            reflections: !self.no_reflections,
            max_depth: self.max_depth,
        }
    }

    pub fn vertical_fov(&self) -> f32 {
        self.fov.to_radians()
    }
}
