//! Browser game loop: input in, ticks, sounds and one draw per frame

use game_core::{Config, Controls, GamepadState, InputSnapshot, Params, PongGame, SoundKind};
use web_sys::HtmlCanvasElement;

use crate::assets::load_ball_sprite;
use crate::audio::AudioOutput;
use crate::clock::FrameClock;
use crate::draw_list::DrawList;
use crate::error::ClientError;
use crate::gamepad;
use crate::input::KeyboardState;
use crate::renderer::Renderer;
use crate::scene::{self, BallStyle};

/// Main client state
pub struct Client {
    renderer: Renderer,
    audio: Option<AudioOutput>,
    game: PongGame,
    canvas: HtmlCanvasElement,
    keyboard: KeyboardState,
    mouse_left: bool,
    gamepads: [GamepadState; 2],
    clock: FrameClock,
    draw_list: DrawList,
}

impl Client {
    pub async fn new(canvas: HtmlCanvasElement) -> Result<Self, ClientError> {
        let sprite = load_ball_sprite()?;
        let renderer = Renderer::new(canvas.clone(), &sprite).await?;

        let audio = match AudioOutput::new() {
            Ok(audio) => Some(audio),
            Err(e) => {
                log::warn!("Running without sound: {}", e);
                None
            }
        };

        let config = Config::new();
        let seed = js_sys::Date::now() as u64;
        let clock = FrameClock::new(Params::TICK_RATE);
        log::info!("Pong ready, seed {}", seed);

        Ok(Self {
            renderer,
            audio,
            game: PongGame::new(config, seed),
            canvas,
            keyboard: KeyboardState::new(),
            mouse_left: false,
            gamepads: Default::default(),
            clock,
            draw_list: DrawList::new(),
        })
    }

    pub fn key_down(&mut self, code: &str, repeat: bool) -> bool {
        self.resume_audio();
        self.keyboard.key_down(code, repeat)
    }

    pub fn key_up(&mut self, code: &str) -> bool {
        self.keyboard.key_up(code)
    }

    pub fn mouse_down(&mut self, button: i16) {
        self.resume_audio();
        if button == 0 {
            self.mouse_left = true;
        }
    }

    pub fn mouse_up(&mut self, button: i16) {
        if button == 0 {
            self.mouse_left = false;
        }
    }

    pub fn blur(&mut self) {
        self.keyboard.release_all();
        self.mouse_left = false;
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.renderer.resize(width, height);
    }

    /// Called from `requestAnimationFrame` with its timestamp
    pub fn frame(&mut self, now_ms: f64) -> Result<(), ClientError> {
        let ticks = self.clock.advance(now_ms);
        for _ in 0..ticks {
            self.tick();
        }
        self.render()
    }

    fn tick(&mut self) {
        gamepad::poll(&mut self.gamepads);

        let snapshot = InputSnapshot {
            held: self.keyboard.held().clone(),
            just_pressed: self.keyboard.take_just_pressed(),
            mouse_left: self.mouse_left,
            gamepads: self.gamepads,
        };
        let controls = Controls::from_snapshot(&snapshot, self.game.config.dead_zone);

        let events = self.game.update(&controls);
        let sounds = SoundKind::for_events(events);
        let toggle_fullscreen = events.toggle_fullscreen;

        if let Some(audio) = &self.audio {
            for kind in sounds {
                audio.play(kind);
            }
        }
        if toggle_fullscreen {
            self.toggle_fullscreen();
        }
    }

    fn render(&mut self) -> Result<(), ClientError> {
        let frame = self.game.frame();
        let sprite = scene::compose(&frame, &self.game.config, BallStyle::Sprite, &mut self.draw_list);
        self.renderer.draw(&self.draw_list, sprite)
    }

    fn resume_audio(&self) {
        if let Some(audio) = &self.audio {
            audio.resume();
        }
    }

    fn toggle_fullscreen(&self) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let result = if document.fullscreen_element().is_some() {
            document.exit_fullscreen();
            Ok(())
        } else {
            self.canvas.request_fullscreen()
        };
        if let Err(e) = result {
            log::warn!("Fullscreen toggle failed: {:?}", e);
        }
    }
}
