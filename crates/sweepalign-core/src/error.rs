use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid profile length: expected {expected} samples, got {actual}")]
    ProfileLength { expected: usize, actual: usize },

    #[error("Invalid raw frame length: expected {expected} bytes, got {actual}")]
    FrameLength { expected: usize, actual: usize },

    #[error("Sample {value} at heading {heading} does not fit in 24 bits")]
    SampleOutOfRange { heading: usize, value: i32 },

    #[error("Sensor read failed at heading {heading}: {message}")]
    SensorReadFailed { heading: usize, message: String },

    #[error("Actuator failed at heading {heading}: {message}")]
    ActuatorFailed { heading: usize, message: String },

    #[error("Alignment worker is not running")]
    WorkerStopped,

    #[error("Alignment worker queue is full")]
    QueueFull,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is a "file not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}
