use nalgebra::Vector3;

// 각 채널을 [0, 1]로 자른 뒤 8비트로 바꿈. 알파는 항상 255.
// 캔버스 ImageData(Uint8ClampedArray)처럼 가장 가까운 정수로, 반올림 동점은 짝수로
pub fn vec3_to_rgba(color: &Vector3<f32>) -> u32 {
    let channel = |value: f32| (value.clamp(0.0, 1.0) * 255.0).round_ties_even() as u8;

    u32::from_ne_bytes([channel(color.x), channel(color.y), channel(color.z), 0xFF])
}
