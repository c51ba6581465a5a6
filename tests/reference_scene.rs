use std::f32::consts::FRAC_PI_2;

use glimmer::camera::Camera;
use glimmer::glimmer::ray::Ray;
use glimmer::glimmer::scene::{Light, Material, Scene, Sphere};
use glimmer::glimmer::texture::{Background, EnvironmentMap, Image};
use glimmer::glimmer::{Glimmer, Settings};
use nalgebra::{Point3, Vector3};

fn render(glimmer: &Glimmer, width: u32, height: u32) -> Image {
    let camera = Camera::new(FRAC_PI_2, width, height);
    let mut image = Image::new(width, height);
    for row in glimmer.rows(&camera) {
        image.write_row(&row);
    }
    image
}

#[test]
fn test_every_pixel_is_opaque() {
    let glimmer = Glimmer::new(Scene::reference(), Background::default(), Settings::default());
    let image = render(&glimmer, 64, 48);

    assert_eq!(image.as_bytes().len(), 64 * 48 * 4);
    assert!(image.as_bytes().chunks_exact(4).all(|pixel| pixel[3] == 255));
}

#[test]
fn test_corner_sees_flat_background() {
    let glimmer = Glimmer::new(Scene::reference(), Background::default(), Settings::default());
    let image = render(&glimmer, 64, 48);

    assert_eq!(image.pixel(0, 0), [51, 178, 204, 255]);
}

#[test]
fn test_corner_sees_environment_map() {
    let map = EnvironmentMap::from_rgb(2, 2, [255, 0, 255].repeat(4)).unwrap();
    let glimmer = Glimmer::new(Scene::reference(), Background::Environment(map), Settings::default());
    let image = render(&glimmer, 64, 48);

    assert_eq!(image.pixel(0, 0), [255, 0, 255, 255]);
}

#[test]
fn test_red_rubber_sphere_is_red() {
    let scene = Scene::reference();
    let camera = Camera::new(FRAC_PI_2, 64, 48);

    let hit = scene.intersect(&Ray::new(camera.position, camera.ray(33, 24))).unwrap();
    assert_eq!(hit.material, Material::red_rubber());

    let glimmer = Glimmer::new(scene, Background::default(), Settings::default());
    let [red, green, blue, _] = render(&glimmer, 64, 48).pixel(33, 24);
    assert!(red > green);
    assert!(red > blue);
}

// 1x1 프레임의 광선은 정확히 -z 방향. 아래 값은 손으로 계산한 것
fn single_sphere(material: Material, lights: Vec<Light>, background: Background) -> Glimmer {
    let mut spheres = vec![Sphere::new(Point3::new(0.0, 0.0, -5.0), 1.0, material)];
    // 카메라 광선에는 안 걸리고 (0, 10, 6) 조명으로 가는 그림자 광선만 막음
    spheres.push(Sphere::new(Point3::new(0.0, 5.0, 1.0), 1.0, Material::default()));

    Glimmer::new(Scene { spheres, lights }, background, Settings::default())
}

#[test]
fn test_golden_ivory_pixel() {
    // (0, 0, -4)에서 맞음. 조명 1.5가 정면: diffuse 1.5, specular 1.5
    // (0.4, 0.4, 0.3) * 0.9 + 0.45 + 배경 (0.2, 0.7, 0.8) * 0.1 = (0.83, 0.88, 0.80)
    // 두 번째 조명은 그림자에 가려짐. 안 가려지면 빨강이 43 정도 더 밝아짐
    let lights = vec![
        Light::new(Point3::new(0.0, 0.0, 0.0), 1.5),
        Light::new(Point3::new(0.0, 10.0, 6.0), 1.0),
    ];
    let glimmer = single_sphere(Material::ivory(), lights, Background::default());

    assert_eq!(render(&glimmer, 1, 1).pixel(0, 0), [212, 224, 204, 255]);
}

#[test]
fn test_golden_half_gray_rounds_to_even() {
    // 0.5 * 255 = 127.5 -> 128
    let gray = Material {
        diffuse_color: Vector3::new(0.5, 0.5, 0.5),
        ..Default::default()
    };
    let lights = vec![Light::new(Point3::new(0.0, 0.0, 0.0), 1.0)];
    let glimmer = single_sphere(gray, lights, Background::default());

    assert_eq!(render(&glimmer, 1, 1).pixel(0, 0), [128, 128, 128, 255]);
}

#[test]
fn test_golden_mirror_and_glass_show_background() {
    // (0.25, 0.6, 1.0) * 255 = (63.75, 153, 255)
    let background = || Background::Color(Vector3::new(0.25, 0.6, 1.0));
    let mirror = Material {
        albedo: [0.0, 0.0, 1.0, 0.0],
        ..Default::default()
    };
    let glass = Material {
        albedo: [0.0, 0.0, 0.0, 1.0],
        refractive_index: 1.5,
        ..Default::default()
    };

    for material in [mirror, glass] {
        let glimmer = single_sphere(material, vec![], background());
        assert_eq!(render(&glimmer, 1, 1).pixel(0, 0), [64, 153, 255, 255]);
    }
}

#[test]
fn test_parallel_render_matches() {
    let glimmer = Glimmer::new(Scene::reference(), Background::default(), Settings::default());
    let camera = Camera::new(FRAC_PI_2, 40, 30);

    let mut parallel = Image::new(40, 30);
    glimmer.render_parallel(&camera, &mut parallel);

    assert_eq!(render(&glimmer, 40, 30).as_bytes(), parallel.as_bytes());
}

#[test]
#[ignore = "renders the full 1024x768 frame"]
fn test_reference_resolution() {
    let glimmer = Glimmer::new(Scene::reference(), Background::default(), Settings::default());
    let camera = Camera::new(FRAC_PI_2, 1024, 768);

    let mut image = Image::new(1024, 768);
    glimmer.render_parallel(&camera, &mut image);

    assert_eq!(image.as_bytes().len(), 1024 * 768 * 4);
    assert_eq!(image.pixel(0, 0), [51, 178, 204, 255]);
}
