use nalgebra::{Point3, Unit, Vector3};

use crate::glimmer::ray::Ray;

// 이것보다 멀리서 부딪힌 건 없는 셈 침
pub const MAX_DISTANCE: f32 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub diffuse_color: Vector3<f32>,
    // 순서대로 diffuse, specular, 반사, 굴절 가중치. 합이 1일 필요는 없음
    pub albedo: [f32; 4],
    pub specular_exponent: f32,
    pub refractive_index: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            diffuse_color: Vector3::zeros(),
            albedo: [1.0, 0.0, 0.0, 0.0],
            specular_exponent: 0.0,
            refractive_index: 1.0,
        }
    }
}

impl Material {
    pub fn ivory() -> Self {
        Self {
            diffuse_color: Vector3::new(0.4, 0.4, 0.3),
            albedo: [0.6, 0.3, 0.1, 0.0],
            specular_exponent: 50.0,
            refractive_index: 1.0,
        }
    }

    pub fn glass() -> Self {
        Self {
            diffuse_color: Vector3::new(0.6, 0.7, 0.8),
            albedo: [0.0, 0.5, 0.1, 0.8],
            specular_exponent: 125.0,
            refractive_index: 1.5,
        }
    }

    pub fn red_rubber() -> Self {
        Self {
            diffuse_color: Vector3::new(0.3, 0.1, 0.1),
            albedo: [0.9, 0.1, 0.0, 0.0],
            specular_exponent: 10.0,
            refractive_index: 1.0,
        }
    }

    pub fn mirror() -> Self {
        Self {
            diffuse_color: Vector3::new(1.0, 1.0, 1.0),
            albedo: [0.0, 10.0, 0.8, 0.0],
            specular_exponent: 1425.0,
            refractive_index: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    pub center: Point3<f32>,
    pub radius: f32,
    pub material: Material,
}

impl Sphere {
    pub fn new(center: Point3<f32>, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    // 광선이 구를 관통할 때의 두 근 (들어가는 거리, 나오는 거리).
    // 광선이 구를 스치지도 않으면 None
    pub fn roots(&self, ray: &Ray) -> Option<(f32, f32)> {
        // l = 광선 시작점에서 구 중심까지
        // tca = l을 광선 방향으로 투영한 길이
        // d2 = 구 중심과 광선 사이 최단 거리의 제곱
        let l = self.center - ray.origin;
        let tca = ray.direction.dot(&l);
        let d2 = l.dot(&l) - tca * tca;
        let r2 = self.radius * self.radius;

        if d2 > r2 {
            return None;
        }

        let thc = (r2 - d2).sqrt();
        Some((tca - thc, tca + thc))
    }

    // 가까운 근이 광선 뒤에 있으면 먼 근을 씀. 광선이 구 안에서 출발한 경우임
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let (near, far) = self.roots(ray)?;

        if near >= 0.0 {
            Some(near)
        } else if far >= 0.0 {
            Some(far)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Light {
    pub position: Point3<f32>,
    pub intensity: f32,
}

impl Light {
    pub fn new(position: Point3<f32>, intensity: f32) -> Self {
        Self {
            position,
            intensity,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub spheres: Vec<Sphere>,
    pub lights: Vec<Light>,
}

impl Scene {
    // 상아, 유리, 빨간 고무, 거울 구 4개와 조명 3개
    pub fn reference() -> Self {
        let spheres = vec![
            Sphere::new(Point3::new(-3.0, 0.0, -16.0), 2.0, Material::ivory()),
            Sphere::new(Point3::new(-1.0, -1.5, -12.0), 2.0, Material::glass()),
            Sphere::new(Point3::new(1.5, -0.5, -18.0), 3.0, Material::red_rubber()),
            Sphere::new(Point3::new(7.0, 5.0, -18.0), 4.0, Material::mirror()),
        ];

        let lights = vec![
            Light::new(Point3::new(-20.0, 20.0, 20.0), 1.5),
            Light::new(Point3::new(30.0, 50.0, -25.0), 1.8),
            Light::new(Point3::new(30.0, 20.0, 30.0), 1.7),
        ];

        Self { spheres, lights }
    }

    pub fn closest_hit(&self, ray: &Ray, distance: f32, sphere: &Sphere) -> HitPayload {
        let position = ray.at(distance);
        let normal = Unit::new_normalize(position - sphere.center);

        HitPayload {
            distance,
            position,
            normal,
            material: sphere.material,
        }
    }

    // 모든 구를 다 훑어서 제일 가까운 것 하나만 고름.
    // 거리가 완전히 같으면 먼저 나온 구가 이김
    pub fn intersect(&self, ray: &Ray) -> Option<HitPayload> {
        let mut closest: Option<(&Sphere, f32)> = None;

        for sphere in &self.spheres {
            let Some(distance) = sphere.intersect(ray) else {
                continue;
            };

            match closest {
                Some((_, previous_distance)) if previous_distance <= distance => {}
                _ => closest = Some((sphere, distance)),
            }
        }

        closest
            .filter(|(_, distance)| *distance < MAX_DISTANCE)
            .map(|(sphere, distance)| self.closest_hit(ray, distance, sphere))
    }
}

// 충돌 지점에 대한 정보만 담고, 색 계산은 나중에 따로 함
#[derive(Debug, Clone, Copy)]
pub struct HitPayload {
    pub distance: f32,
    pub position: Point3<f32>,
    pub normal: Unit<Vector3<f32>>,
    pub material: Material,
}
