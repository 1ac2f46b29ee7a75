use outworld::{Game, InputKey, SCR_H, SCR_W};
use rb::{RbConsumer, RbProducer, SpscRb, RB};
use sdl2::audio::{AudioCallback, AudioDevice, AudioSpecDesired};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;

// Roughly a quarter second of stereo float samples.
const RING_CAPACITY: usize = 44100 / 2;

pub struct Host {
    _sdl_context: sdl2::Sdl,
    event_pump: sdl2::EventPump,
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    surface: sdl2::render::Texture,
    color_buffer: Vec<u32>,
    _audio_device: AudioDevice<RingPlayback>,
}

struct RingPlayback {
    cons: rb::Consumer<f32>,
}

impl AudioCallback for RingPlayback {
    type Channel = f32;

    fn callback(&mut self, out: &mut [f32]) {
        let read = self.cons.read(out).unwrap_or(0);
        for sample in out[read..].iter_mut() {
            *sample = 0.0;
        }
    }
}

impl Host {
    /// Opens the window and audio device; returns the host plus the sample
    /// sink to install as the game's audio callback.
    pub fn new(fullscreen: bool) -> (Self, Box<dyn FnMut(&[f32]) + Send>) {
        let sdl_context = sdl2::init().unwrap();
        let video_subsystem = sdl_context.video().unwrap();

        let mut window = video_subsystem.window("Out of this World", 960, 600);
        window.position_centered();
        if fullscreen {
            window.fullscreen_desktop();
        }
        let window = window.build().unwrap();

        let canvas = window.into_canvas().build().unwrap();
        let texture_creator = canvas.texture_creator();
        let surface = texture_creator
            .create_texture_streaming(PixelFormatEnum::ARGB8888, SCR_W.into(), SCR_H.into())
            .unwrap();

        let ring = SpscRb::new(RING_CAPACITY);
        let producer = ring.producer();
        let consumer = ring.consumer();

        let audio_subsystem = sdl_context.audio().unwrap();
        let desired = AudioSpecDesired {
            freq: Some(44100),
            channels: Some(2),
            samples: Some(2048),
        };
        let audio_device = audio_subsystem
            .open_playback(None, &desired, |_| RingPlayback { cons: consumer })
            .unwrap();
        audio_device.resume();

        let event_pump = sdl_context.event_pump().unwrap();

        let host = Self {
            _sdl_context: sdl_context,
            event_pump,
            canvas,
            surface,
            color_buffer: vec![0; usize::from(SCR_W) * usize::from(SCR_H)],
            _audio_device: audio_device,
        };
        // Drop samples on overrun rather than stalling the core.
        let sink = Box::new(move |samples: &[f32]| {
            let _ = producer.write(samples);
        });
        (host, sink)
    }

    pub fn display(&mut self, game: &Game) {
        let info = game.display_info();
        for (dst, &index) in self.color_buffer.iter_mut().zip(info.framebuffer) {
            *dst = info.palette[usize::from(index)];
        }
        let bytes = as_u8_slice(&self.color_buffer);
        self.surface
            .update(None, bytes, usize::from(SCR_W) * 4)
            .unwrap();
        self.canvas.copy(&self.surface, None, None).unwrap();
        self.canvas.present();
    }

    pub fn process_input(&mut self, game: &mut Game) {
        while let Some(event) = self.event_pump.poll_event() {
            match event {
                Event::Quit { .. } => game.quit(),
                Event::KeyDown {
                    keycode: Some(key), ..
                } => {
                    if key == Keycode::Escape {
                        game.quit();
                    } else if key == Keycode::Backspace {
                        game.char_pressed('\u{8}');
                        game.key_down(InputKey::Back);
                    } else if let Some(input) = map_key(key) {
                        game.key_down(input);
                    }
                }
                Event::KeyUp {
                    keycode: Some(key), ..
                } => {
                    if let Some(input) = map_key(key) {
                        game.key_up(input);
                    }
                }
                Event::TextInput { text, .. } => {
                    for c in text.chars() {
                        game.char_pressed(c.to_ascii_lowercase());
                    }
                }
                _ => {}
            }
        }
    }
}

fn map_key(key: Keycode) -> Option<InputKey> {
    match key {
        Keycode::Left | Keycode::A => Some(InputKey::Left),
        Keycode::Right | Keycode::D => Some(InputKey::Right),
        Keycode::Up | Keycode::W => Some(InputKey::Up),
        Keycode::Down | Keycode::S => Some(InputKey::Down),
        Keycode::Space | Keycode::Return => Some(InputKey::Action),
        Keycode::Backspace => Some(InputKey::Back),
        Keycode::C => Some(InputKey::Code),
        Keycode::P => Some(InputKey::Pause),
        _ => None,
    }
}

fn as_u8_slice(v: &[u32]) -> &[u8] {
    unsafe {
        std::slice::from_raw_parts(v.as_ptr() as *const u8, v.len() * std::mem::size_of::<u32>())
    }
}
