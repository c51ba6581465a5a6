use nalgebra::{Point3, Unit, Vector3};

// 2차 광선(반사, 굴절, 그림자)을 표면에서 이만큼 띄워서 쏨
pub const BIAS: f32 = 1e-3;

#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Point3<f32>,
    pub direction: Unit<Vector3<f32>>,
}

impl Ray {
    pub fn new(origin: Point3<f32>, direction: Unit<Vector3<f32>>) -> Self {
        Self { origin, direction }
    }

    // 표면 위의 점에서 바로 출발하면 자기 자신과 다시 부딪힘 (shadow acne).
    // 그래서 진행 방향 쪽 면으로 origin을 살짝 밀어줌
    pub fn offset(point: Point3<f32>, direction: Unit<Vector3<f32>>, normal: &Vector3<f32>) -> Self {
        let origin = if direction.dot(normal) < 0.0 {
            point - normal * BIAS
        } else {
            point + normal * BIAS
        };

        Self { origin, direction }
    }

    pub fn at(&self, distance: f32) -> Point3<f32> {
        self.origin + self.direction.as_ref() * distance
    }
}

/// 입사 벡터 `incident`를 법선 `normal`에 대해 반사시킴
pub fn reflect(incident: &Vector3<f32>, normal: &Vector3<f32>) -> Vector3<f32> {
    incident - normal * (2.0 * incident.dot(normal))
}

/// 스넬의 법칙으로 굴절 방향을 구함.
///
/// 광선이 물체 안에서 밖으로 나가는 중이면 (`incident · normal > 0`) 굴절률과 법선을 뒤집음.
/// 전반사가 일어나면 굴절 광선이 없으므로 영벡터를 돌려줌.
pub fn refract(incident: &Vector3<f32>, normal: &Vector3<f32>, refractive_index: f32) -> Vector3<f32> {
    let mut cos_i = -incident.dot(normal).clamp(-1.0, 1.0);
    let mut eta_i = 1.0;
    let mut eta_t = refractive_index;
    let mut normal = *normal;

    if cos_i < 0.0 {
        cos_i = -cos_i;
        std::mem::swap(&mut eta_i, &mut eta_t);
        normal = -normal;
    }

    let eta = eta_i / eta_t;
    let k = 1.0 - eta * eta * (1.0 - cos_i * cos_i);
    if k < 0.0 {
        return Vector3::zeros();
    }

    incident * eta + normal * (eta * cos_i - k.sqrt())
}
