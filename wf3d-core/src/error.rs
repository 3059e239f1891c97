/// Error type shared by every fallible operation in the core
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Wf3dError {
    #[error("field of view must lie strictly between 0 and 180 degrees, got {0}")]
    InvalidFov(f64),

    #[error("camera position and look-at target share the depth plane z = {0}")]
    DegenerateView(f64),

    #[error("viewport must be at least 1x1, got {width}x{height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("point size must be positive and finite, got {0}")]
    InvalidPointSize(f64),

    #[error("cube side length must be positive and finite, got {0}")]
    InvalidSideLength(f64),

    #[error("edge ({0}, {1}) references a point outside a shape of {2} points")]
    InvalidEdge(usize, usize, usize),

    #[error("non-finite value in {0}")]
    NonFinite(&'static str),

    #[error("could not parse {what} from {input:?}")]
    Parse { what: &'static str, input: String },
}

pub type Result<T> = std::result::Result<T, Wf3dError>;
