//! WebGPU client for Pong
//!
//! Engine-free rendering using wgpu with the "webgpu" feature. Input, audio and
//! the frame loop are driven from JavaScript through the exports below.
//! Browser-facing modules only build for wasm32; the rest builds and tests natively.

pub mod assets;
pub mod audio;
pub mod camera;
pub mod clock;
pub mod draw_list;
pub mod error;
pub mod glyphs;
pub mod input;
pub mod scene;

#[cfg(target_arch = "wasm32")]
mod client;
#[cfg(target_arch = "wasm32")]
mod gamepad;
#[cfg(target_arch = "wasm32")]
mod logger;
#[cfg(target_arch = "wasm32")]
mod mesh;
#[cfg(target_arch = "wasm32")]
mod renderer;

pub use error::ClientError;

#[cfg(target_arch = "wasm32")]
pub use bindings::*;

#[cfg(target_arch = "wasm32")]
mod bindings {
    use std::cell::RefCell;

    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use crate::client::Client;
    use crate::error::ClientError;

    // Global client storage for WASM bindings
    thread_local! {
        static CLIENT: RefCell<Option<Client>> = const { RefCell::new(None) };
    }

    fn with_client<T>(f: impl FnOnce(&mut Client) -> T) -> Result<T, ClientError> {
        CLIENT.with(|cell| match cell.borrow_mut().as_mut() {
            Some(client) => Ok(f(client)),
            None => Err(ClientError::NotInitialized),
        })
    }

    #[wasm_bindgen]
    pub fn init_client(canvas: HtmlCanvasElement) -> js_sys::Promise {
        console_error_panic_hook::set_once();
        crate::logger::init(log::LevelFilter::Info);

        wasm_bindgen_futures::future_to_promise(async move {
            match Client::new(canvas).await {
                Ok(client) => {
                    CLIENT.with(|cell| *cell.borrow_mut() = Some(client));
                    Ok(JsValue::UNDEFINED)
                }
                Err(e) => {
                    log::error!("Startup failed: {}", e);
                    Err(e.into())
                }
            }
        })
    }

    /// Advance the simulation to `now_ms` and draw
    #[wasm_bindgen]
    pub fn render_frame(now_ms: f64) -> Result<(), JsValue> {
        with_client(|client| client.frame(now_ms))??;
        Ok(())
    }

    /// Returns true when the game uses the key, so JS can `preventDefault`
    #[wasm_bindgen]
    pub fn key_down(code: &str, repeat: bool) -> Result<bool, JsValue> {
        Ok(with_client(|client| client.key_down(code, repeat))?)
    }

    #[wasm_bindgen]
    pub fn key_up(code: &str) -> Result<bool, JsValue> {
        Ok(with_client(|client| client.key_up(code))?)
    }

    #[wasm_bindgen]
    pub fn mouse_down(button: i16) -> Result<(), JsValue> {
        Ok(with_client(|client| client.mouse_down(button))?)
    }

    #[wasm_bindgen]
    pub fn mouse_up(button: i16) -> Result<(), JsValue> {
        Ok(with_client(|client| client.mouse_up(button))?)
    }

    #[wasm_bindgen]
    pub fn blur() -> Result<(), JsValue> {
        Ok(with_client(|client| client.blur())?)
    }

    #[wasm_bindgen]
    pub fn resize(width: u32, height: u32) -> Result<(), JsValue> {
        Ok(with_client(|client| client.resize(width, height))?)
    }

    /// Logical screen size for a given canvas size
    #[wasm_bindgen]
    pub fn layout(outside_width: u32, outside_height: u32) -> Vec<u32> {
        let (w, h) = crate::scene::layout(outside_width, outside_height);
        vec![w, h]
    }
}
