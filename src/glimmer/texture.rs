use std::f32::consts::PI;
use std::ffi::OsStr;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use bytemuck::cast_slice;
use image::{ColorType, ImageFormat};
use nalgebra::Vector3;
use rayon::prelude::*;
use rayon::slice::ChunksExactMut;

use crate::error::{Error, Result};
use crate::glimmer::RowEvent;

// 렌더링 결과. 픽셀 하나를 RGBA 바이트 4개를 묶은 u32 하나로 저장함
pub struct Image {
    width: u32,
    height: u32,
    data: Vec<u32>,
}

impl Image {
    pub fn new(width: u32, height: u32) -> Image {
        Self {
            width,
            height,
            data: vec![0; (width * height) as usize],
        }
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn write_row(&mut self, row: &RowEvent) {
        let width = self.width as usize;
        let start = row.index as usize * width;
        assert_eq!(row.pixels.len(), width, "행 길이가 이미지 너비와 다름");

        self.data[start..start + width].copy_from_slice(&row.pixels);
    }

    // 병렬 렌더링용. 한 줄씩 잘라서 넘겨줌
    pub fn rows_mut(&mut self) -> ChunksExactMut<'_, u32> {
        self.data.par_chunks_exact_mut(self.width as usize)
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.data[(y * self.width + x) as usize].to_ne_bytes()
    }

    // u32를 네이티브 바이트 순서로 쪼개면 R, G, B, A 순서가 됨
    pub fn as_bytes(&self) -> &[u8] {
        cast_slice(&self.data)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        image::save_buffer(path, self.as_bytes(), self.width, self.height, ColorType::Rgba8)?;
        Ok(())
    }
}

/// 등장방형(equirectangular) 환경 맵. 아무것도 맞지 않은 광선의 색을 여기서 가져옴.
pub struct EnvironmentMap {
    width: u32,
    height: u32,
    // 텍셀당 바이트 수. RGB면 3, RGBA면 4 (알파는 안씀)
    channels: usize,
    data: Vec<u8>,
}

impl EnvironmentMap {
    pub fn from_rgb(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        Self::with_channels(width, height, 3, data)
    }

    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        Self::with_channels(width, height, 4, data)
    }

    fn with_channels(width: u32, height: u32, channels: usize, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 || data.len() != width as usize * height as usize * channels {
            return Err(Error::TexelLayout {
                len: data.len(),
                width,
                height,
            });
        }

        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let format = match path.extension() {
            Some(extension) if extension.eq(OsStr::new("jpg")) | extension.eq(OsStr::new("jpeg")) => {
                ImageFormat::Jpeg
            }
            Some(extension) if extension.eq(OsStr::new("png")) => ImageFormat::Png,
            _ => return Err(Error::UnsupportedFormat(path.to_path_buf())),
        };

        let reader = BufReader::new(File::open(path)?);
        let loaded = image::load(reader, format)?.into_rgb8();
        let (width, height) = loaded.dimensions();

        Self::from_rgb(width, height, loaded.into_raw())
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    // 보간 없이 제일 가까운 텍셀 하나만 씀
    pub fn sample(&self, direction: &Vector3<f32>) -> Vector3<f32> {
        let u = ((direction.z.atan2(direction.x) / (2.0 * PI) + 0.5) * self.width as f32).floor();
        let v = (direction.y.clamp(-1.0, 1.0).acos() / PI * self.height as f32).floor();

        let u = (u as i64).clamp(0, self.width as i64 - 1) as usize;
        let v = (v as i64).clamp(0, self.height as i64 - 1) as usize;

        let offset = (v * self.width as usize + u) * self.channels;
        let texel = &self.data[offset..offset + 3];

        Vector3::new(texel[0] as f32, texel[1] as f32, texel[2] as f32) / 255.0
    }
}

// 환경 맵이 없는 단순한 버전은 그냥 단색 배경을 씀
pub enum Background {
    Color(Vector3<f32>),
    Environment(EnvironmentMap),
}

impl Default for Background {
    fn default() -> Self {
        Background::Color(Vector3::new(0.2, 0.7, 0.8))
    }
}

impl Background {
    pub fn sample(&self, direction: &Vector3<f32>) -> Vector3<f32> {
        match self {
            Background::Color(color) => *color,
            Background::Environment(map) => map.sample(direction),
        }
    }
}
