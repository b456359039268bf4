//! Embedded image assets

use crate::error::ClientError;

static BALL_PNG: &[u8] = include_bytes!("../assets/ball.png");

/// Decoded RGBA8 image
#[derive(Debug, Clone)]
pub struct Sprite {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl Sprite {
    pub fn decode(bytes: &[u8]) -> Result<Self, ClientError> {
        let img = image::load_from_memory_with_format(bytes, image::ImageFormat::Png)?.to_rgba8();
        let (width, height) = img.dimensions();
        Ok(Self {
            width,
            height,
            rgba: img.into_raw(),
        })
    }
}

/// Decode the ball sprite. Called once at startup.
pub fn load_ball_sprite() -> Result<Sprite, ClientError> {
    let sprite = Sprite::decode(BALL_PNG)?;
    log::debug!("Decoded ball sprite {}x{}", sprite.width, sprite.height);
    Ok(sprite)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_ball_decodes() {
        let sprite = load_ball_sprite().unwrap();
        assert_eq!((sprite.width, sprite.height), (8, 8));
        assert_eq!(sprite.rgba.len(), 8 * 8 * 4);
        // Center pixel is opaque white
        let center = ((4 * 8 + 4) * 4) as usize;
        assert_eq!(&sprite.rgba[center..center + 4], &[255, 255, 255, 255]);
        // Corner is transparent
        assert_eq!(sprite.rgba[3], 0);
    }

    #[test]
    fn test_garbage_is_an_asset_error() {
        let err = Sprite::decode(b"not a png").unwrap_err();
        assert!(matches!(err, ClientError::Asset { .. }));
    }
}
