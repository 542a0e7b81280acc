use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("invalid viewport: left={left}, top={top}, right={right}, bottom={bottom}")]
    InvalidViewport {
        left: f64,
        top: f64,
        right: f64,
        bottom: f64,
    },

    #[error("invalid content rectangle: width={width}, height={height}")]
    InvalidContentRect { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
