use std::time::Instant;

use log::{debug, info, warn};

use crate::camera::Camera;
use crate::config::Config;
use crate::error::Result;
use crate::glimmer::scene::Scene;
use crate::glimmer::texture::{Background, EnvironmentMap, Image};
use crate::glimmer::Glimmer;

pub struct Application {
    glimmer: Glimmer,
    camera: Camera,
    pub image: Image,
    config: Config,
}

impl Application {
    pub fn new(config: Config) -> Result<Self> {
        let background = match &config.envmap {
            Some(path) => {
                let map = EnvironmentMap::from_path(path)?;
                let (width, height) = map.size();
                info!("환경 맵 {} 불러옴 ({}x{})", path.display(), width, height);
                Background::Environment(map)
            }
            None => {
                warn!("환경 맵이 없어서 단색 배경을 씀");
                Background::default()
            }
        };

        let glimmer = Glimmer::new(Scene::reference(), background, config.settings());
        let camera = Camera::new(config.vertical_fov(), config.width, config.height);
        let image = Image::new(config.width, config.height);

        Ok(Self {
            glimmer,
            camera,
            image,
            config,
        })
    }

    pub fn render(&mut self) {
        let (width, height) = self.camera.size();
        info!("{}x{} 렌더링 시작", width, height);
        let started = Instant::now();

        if self.config.parallel {
            self.glimmer.render_parallel(&self.camera, &mut self.image);
        } else {
            // 한 줄 끝날 때마다 바로 이미지에 반영
            for row in self.glimmer.rows(&self.camera) {
                self.image.write_row(&row);
                debug!("{}/{} 줄 완료", row.index + 1, height);
            }
        }

        info!("렌더링 끝: {:.2?}", started.elapsed());
    }

    pub fn save(&self) -> Result<()> {
        self.image.save(&self.config.output)?;
        info!("{} 저장함", self.config.output.display());
        Ok(())
    }
}
