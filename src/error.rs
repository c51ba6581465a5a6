use std::path::PathBuf;

// 렌더링 자체는 실패하지 않음. 파일을 읽고 쓰는 바깥쪽에서만 에러가 남
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported environment map format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("{len} bytes cannot hold a {width}x{height} environment map")]
    TexelLayout { len: usize, width: u32, height: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;
