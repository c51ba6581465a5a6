use std::iter::FusedIterator;

use nalgebra::{Unit, Vector3};
use rayon::prelude::*;

use crate::camera::Camera;
use crate::glimmer::ray::{reflect, refract, Ray};
use crate::glimmer::scene::{HitPayload, Scene};
use crate::glimmer::texture::{Background, Image};
use crate::util::vec3_to_rgba;

pub mod ray;
pub mod scene;
pub mod texture;

pub struct Settings {
    pub shadows: bool,
    pub specular: bool,
    // 반사와 굴절을 같이 켜고 끔
    pub reflections: bool,
    pub max_depth: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            shadows: true,
            specular: true,
            reflections: true,
            max_depth: 4,
        }
    }
}

pub struct Glimmer {
    pub scene: Scene,
    pub background: Background,
    pub settings: Settings,
}

impl Glimmer {
    pub fn new(scene: Scene, background: Background, settings: Settings) -> Self {
        Self {
            scene,
            background,
            settings,
        }
    }

    // 픽셀 하나의 색. DirectX의 RayGen 쉐이더에 해당
    pub fn per_pixel(&self, camera: &Camera, x: u32, y: u32) -> u32 {
        let ray = Ray::new(camera.position, camera.ray(x, y));
        vec3_to_rgba(&self.cast(&ray, 0))
    }

    /// 광선 하나를 따라가서 색을 구함.
    ///
    /// 아무것도 맞지 않거나 `depth`가 `max_depth`를 넘으면 배경색을 돌려줌.
    /// 맞으면 직접광(diffuse + specular)에 반사, 굴절 광선의 색을 albedo 가중치로 섞음.
    pub fn cast(&self, ray: &Ray, depth: u32) -> Vector3<f32> {
        if depth > self.settings.max_depth {
            return self.background.sample(&ray.direction);
        }

        let Some(hit) = self.scene.intersect(ray) else {
            return self.background.sample(&ray.direction);
        };

        let (reflect_color, refract_color) = if self.settings.reflections {
            (self.reflection(ray, &hit, depth), self.refraction(ray, &hit, depth))
        } else {
            (Vector3::zeros(), Vector3::zeros())
        };

        let (diffuse, specular) = self.illuminate(&hit, &ray.direction);
        let material = &hit.material;

        material.diffuse_color * (diffuse * material.albedo[0])
            + Vector3::repeat(specular * material.albedo[1])
            + reflect_color * material.albedo[2]
            + refract_color * material.albedo[3]
    }

    fn reflection(&self, ray: &Ray, hit: &HitPayload, depth: u32) -> Vector3<f32> {
        let direction = Unit::new_normalize(reflect(&ray.direction, &hit.normal));
        self.cast(&Ray::offset(hit.position, direction, &hit.normal), depth + 1)
    }

    fn refraction(&self, ray: &Ray, hit: &HitPayload, depth: u32) -> Vector3<f32> {
        let refracted = refract(&ray.direction, &hit.normal, hit.material.refractive_index);

        // 전반사면 영벡터가 나옴. 굴절 광선이 없으니 기여도 없음
        let Some(direction) = Unit::try_new(refracted, f32::EPSILON) else {
            return Vector3::zeros();
        };

        self.cast(&Ray::offset(hit.position, direction, &hit.normal), depth + 1)
    }

    // 조명마다 그림자 검사 후 diffuse, specular 세기를 더함
    pub fn illuminate(&self, hit: &HitPayload, direction: &Vector3<f32>) -> (f32, f32) {
        let mut diffuse = 0.0;
        let mut specular = 0.0;

        for light in &self.scene.lights {
            let to_light = light.position - hit.position;
            let light_distance = to_light.norm();
            let light_direction = Unit::new_normalize(to_light);

            if self.settings.shadows && self.in_shadow(hit, light_direction, light_distance) {
                continue;
            }

            diffuse += light.intensity * light_direction.dot(&hit.normal.into_inner()).max(0.0);

            if self.settings.specular {
                let highlight = reflect(&light_direction, &hit.normal).dot(direction).max(0.0);
                specular += light.intensity * highlight.powf(hit.material.specular_exponent);
            }
        }

        (diffuse, specular)
    }

    // 조명보다 가까운 곳에서 뭔가에 막혀야만 그림자
    fn in_shadow(&self, hit: &HitPayload, light_direction: Unit<Vector3<f32>>, light_distance: f32) -> bool {
        let shadow_ray = Ray::offset(hit.position, light_direction, &hit.normal);

        self.scene
            .intersect(&shadow_ray)
            .is_some_and(|blocker| (blocker.position - shadow_ray.origin).norm() < light_distance)
    }

    // 한 줄씩 렌더링하는 반복자. 중간에 멈추고 싶으면 그냥 버리면 됨
    pub fn rows<'a>(&'a self, camera: &'a Camera) -> Rows<'a> {
        Rows {
            glimmer: self,
            camera,
            next: 0,
        }
    }

    pub fn render_parallel(&self, camera: &Camera, image: &mut Image) {
        assert_eq!(camera.size(), image.size(), "카메라와 이미지 크기가 다름");

        image.rows_mut().enumerate().for_each(|(y, row)| {
            for (x, pixel) in row.iter_mut().enumerate() {
                *pixel = self.per_pixel(camera, x as u32, y as u32);
            }
        });
    }
}

pub struct RowEvent {
    pub index: u32,
    pub pixels: Vec<u32>,
}

pub struct Rows<'a> {
    glimmer: &'a Glimmer,
    camera: &'a Camera,
    next: u32,
}

impl Iterator for Rows<'_> {
    type Item = RowEvent;

    fn next(&mut self) -> Option<RowEvent> {
        let (width, height) = self.camera.size();
        if self.next >= height {
            return None;
        }

        let index = self.next;
        self.next += 1;

        let pixels = (0..width)
            .map(|x| self.glimmer.per_pixel(self.camera, x, index))
            .collect();

        Some(RowEvent { index, pixels })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.camera.size().1.saturating_sub(self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Rows<'_> {}

impl FusedIterator for Rows<'_> {}
