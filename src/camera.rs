use nalgebra::{Point3, Unit, Vector3};
use rayon::prelude::*;

// 원점에 고정되어 -z 방향을 바라보는 핀홀 카메라.
// 픽셀마다 쏠 광선 방향을 미리 계산해 둠
pub struct Camera {
    vertical_fov: f32,

    pub position: Point3<f32>,
    pub rays: Vec<Unit<Vector3<f32>>>,

    width: u32,
    height: u32,
}

impl Camera {
    pub fn new(vertical_fov: f32, width: u32, height: u32) -> Self {
        let mut to_return = Self {
            vertical_fov,
            position: Point3::origin(),
            rays: vec![],
            width,
            height,
        };

        to_return.reevaluate_rays();

        to_return
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if self.width == width && self.height == height {
            return;
        }

        self.width = width;
        self.height = height;
        self.reevaluate_rays();
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn ray(&self, x: u32, y: u32) -> Unit<Vector3<f32>> {
        self.rays[(y * self.width + x) as usize]
    }

    fn reevaluate_rays(&mut self) {
        let width = self.width as f32;
        let height = self.height as f32;
        // 화면이 카메라에서 이만큼 떨어져 있다고 보면 픽셀 하나가 길이 1이 됨
        let depth = -(height / 2.0) / (self.vertical_fov / 2.0).tan();
        let columns = self.width;

        self.rays = (0..self.width * self.height)
            .into_par_iter()
            .map(|index| {
                let x = (index % columns) as f32 + 0.5 - width / 2.0;
                let y = -((index / columns) as f32 + 0.5) + height / 2.0;

                Unit::new_normalize(Vector3::new(x, y, depth))
            })
            .collect();
    }
}
