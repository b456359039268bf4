use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Failed to create surface: {0}")]
    Surface(String),
    #[error("Failed to find adapter")]
    Adapter,
    #[error("Failed to create device: {0}")]
    Device(String),
    #[error("Failed to get current texture: {0}")]
    Frame(String),
    #[error("Error decoding ball.png: {source}")]
    Asset {
        #[from]
        source: image::ImageError,
    },
    #[error("Audio error: {0}")]
    Audio(String),
    #[error("Client not initialized")]
    NotInitialized,
}

#[cfg(target_arch = "wasm32")]
impl From<ClientError> for wasm_bindgen::JsValue {
    fn from(err: ClientError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
