//! Interpreter core for Another World / Out Of This World (1991).
//!
//! The whole game ships as bytecode plus packed resources inside a handful
//! of bank files; this crate executes that bytecode, rasterizes the polygon
//! scenes into paletted pages and mixes the 4-channel audio. Everything
//! host-specific (window, audio device, file access) stays outside: the host
//! hands in the data buffers once and then drives [`Game::exec`].

mod bytekiller;
mod data;
mod mem;
mod script;
mod sfx;
mod video;

use mem::Memory;
use script::{InputState, Vm};
use video::VideoContext;

/// Bumped whenever the snapshot layout changes.
pub const SNAPSHOT_VERSION: u32 = 1;

pub const SCR_W: u16 = video::soft::SCR_W;
pub const SCR_H: u16 = video::soft::SCR_H;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    Fr,
    En,
}

impl Default for Lang {
    fn default() -> Self {
        Lang::En
    }
}

/// Keys understood by the core; the host maps its own events onto these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    Left,
    Right,
    Up,
    Down,
    Action,
    Back,
    Code,
    Pause,
}

pub type AudioFn = Box<dyn FnMut(&[f32]) + Send>;
/// Called with the current task program counter after every executed opcode.
/// Returning `true` stops the current `exec` tick.
pub type DebugFn = Box<dyn FnMut(u16) -> bool + Send>;

/// Host callbacks. Never captured by snapshots.
#[derive(Default)]
pub struct Hooks {
    pub audio: Option<AudioFn>,
    pub debug: Option<DebugFn>,
}

/// Startup configuration.
#[derive(Default)]
pub struct GameDesc {
    /// Either a scene index (0..35) or a raw part id (16000..16009).
    pub part_num: u16,
    pub lang: Lang,
    /// Use the 16-color EGA palette instead of VGA (DOS data only).
    pub use_ega: bool,
    /// When false the protection screen is skipped and its checks defeated.
    pub enable_protection: bool,
    pub audio: Option<AudioFn>,
    pub debug: Option<DebugFn>,
}

/// The data bundle handed over by the host: the DOS `memlist.bin` (absent
/// for Amiga/Atari sets), up to 13 bank images and the optional recorded
/// joystick stream for the water-part demo.
#[derive(Default)]
pub struct GameData {
    pub mem_list: Option<Vec<u8>>,
    pub banks: [Option<Vec<u8>>; 13],
    pub demo3_joy: Option<Vec<u8>>,
}

/// Immutable view of the presented frame, valid between `exec` calls.
pub struct DisplayInfo<'a> {
    pub width: u16,
    pub height: u16,
    /// 320x200 bytes, each an index into `palette`.
    pub framebuffer: &'a [u8],
    /// 16 ARGB entries.
    pub palette: &'a [u32; 16],
}

/// A by-value copy of the whole core state, minus host hooks.
pub struct Snapshot {
    version: u32,
    state: Box<Game>,
}

impl Snapshot {
    pub fn version(&self) -> u32 {
        self.version
    }
}

pub struct Game {
    mem: Memory,
    vm: Vm,
    video: VideoContext,
    music: sfx::Player,
    audio: sfx::Mixer,
    input: InputState,

    current_part: u16,
    next_part: Option<u16>,
    screen_num: Option<i16>,
    next_pal: Option<u8>,
    part_num: u16,
    lang: Lang,
    enable_protection: bool,
    title: &'static str,

    // Accumulated run time and outstanding sleep debt, both in ms.
    elapsed: u32,
    sleep: u32,
    audio_ms: u32,

    hooks: Hooks,
}

impl Game {
    pub fn new(desc: GameDesc) -> Self {
        let mut game = Self {
            mem: Memory::new(),
            vm: Vm::new(),
            video: VideoContext::new(),
            music: Default::default(),
            audio: sfx::Mixer::new(),
            input: Default::default(),
            current_part: 0,
            next_part: None,
            screen_num: None,
            next_pal: None,
            part_num: desc.part_num,
            lang: desc.lang,
            enable_protection: desc.enable_protection,
            title: "",
            elapsed: 0,
            sleep: 0,
            audio_ms: 0,
            hooks: Hooks {
                audio: desc.audio,
                debug: desc.debug,
            },
        };
        game.video.set_use_ega_pal(desc.use_ega);
        game
    }

    /// Takes ownership of the data bundle, detects the data-set variant and
    /// boots the starting part.
    pub fn start(&mut self, mut data: GameData) {
        let demo3_joy = data.demo3_joy.take();
        mem::detect_version(&mut self.mem, data);

        if self.mem.data_type == mem::DataType::Dos {
            if let Some(joy) = demo3_joy {
                self.input.demo_joy.read(joy);
            }
        }

        self.video.reset();
        self.vm.regs[script::reg_id::RANDOM_SEED] = rand::random();
        if !self.enable_protection {
            self.vm.regs[0xBC] = 0x10;
            self.vm.regs[0xC6] = 0x80;
            self.vm.regs[0xF2] = if self.mem.data_type == mem::DataType::Dos {
                4000
            } else {
                6000
            };
            self.vm.regs[0xDC] = 33;
        }
        if self.mem.data_type == mem::DataType::Dos {
            self.vm.regs[0xE4] = 20;
        }

        if self.enable_protection
            && (self.mem.data_type != mem::DataType::Dos || self.mem.has_password_screen)
        {
            self.part_num = 16000;
        }

        let num = self.part_num;
        if num < 36 {
            let (part, pos) = data::SCENE_POS[usize::from(num)];
            script::restart_at(self, part, pos);
        } else {
            script::restart_at(self, num, -1);
        }

        self.title = if self.mem.data_type == mem::DataType::Dos && self.lang == Lang::En {
            "Out Of This World"
        } else {
            "Another World"
        };
    }

    /// Runs the VM for one logical frame (or pays down sleep debt) and mixes
    /// the matching span of audio through the audio hook.
    pub fn exec(&mut self, ms: u32) {
        self.elapsed = self.elapsed.wrapping_add(ms);
        self.audio_ms += ms;

        if self.sleep != 0 {
            if ms > self.sleep {
                self.sleep = 0;
            } else {
                self.sleep -= ms;
            }
            return;
        }

        loop {
            let frame_done = script::run_step(self);
            if self.hooks.debug.is_some() {
                let pc = self.vm.tasks[self.vm.current_task].pc;
                let mut hook = self.hooks.debug.take().unwrap();
                let stop = hook(pc);
                self.hooks.debug = Some(hook);
                if stop {
                    self.sleep = 0;
                    break;
                }
            }
            if frame_done {
                break;
            }
        }

        sfx::update_audio(self);

        // Pace to the 50 Hz the original runs at.
        self.sleep += 20;
    }

    pub fn key_down(&mut self, key: InputKey) {
        let input = &mut self.input;
        match key {
            InputKey::Left => input.dir_mask |= script::DIR_LEFT,
            InputKey::Right => input.dir_mask |= script::DIR_RIGHT,
            InputKey::Up => input.dir_mask |= script::DIR_UP,
            InputKey::Down => input.dir_mask |= script::DIR_DOWN,
            InputKey::Action => input.action = true,
            InputKey::Back => input.back = true,
            InputKey::Code => input.code = true,
            InputKey::Pause => input.pause = true,
        }
    }

    pub fn key_up(&mut self, key: InputKey) {
        let input = &mut self.input;
        match key {
            InputKey::Left => input.dir_mask &= !script::DIR_LEFT,
            InputKey::Right => input.dir_mask &= !script::DIR_RIGHT,
            InputKey::Up => input.dir_mask &= !script::DIR_UP,
            InputKey::Down => input.dir_mask &= !script::DIR_DOWN,
            InputKey::Action => input.action = false,
            InputKey::Back => input.back = false,
            InputKey::Code => input.code = false,
            InputKey::Pause => input.pause = false,
        }
    }

    pub fn char_pressed(&mut self, c: char) {
        self.input.last_char = c as u8;
    }

    /// Asks the scheduler to stop at the next opportunity.
    pub fn quit(&mut self) {
        self.input.quit = true;
    }

    pub fn wants_quit(&self) -> bool {
        self.input.quit
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn display_info(&self) -> DisplayInfo<'_> {
        DisplayInfo {
            width: SCR_W,
            height: SCR_H,
            framebuffer: self.video.rndr.screen(),
            palette: self.video.rndr.palette(),
        }
    }

    pub fn save_snapshot(&self) -> Snapshot {
        Snapshot {
            version: SNAPSHOT_VERSION,
            state: Box::new(self.clone()),
        }
    }

    pub fn load_snapshot(&mut self, snapshot: &Snapshot) -> bool {
        if snapshot.version != SNAPSHOT_VERSION {
            return false;
        }
        let hooks = std::mem::take(&mut self.hooks);
        *self = snapshot.state.as_ref().clone();
        self.hooks = hooks;
        true
    }
}

// Hooks are host-owned and deliberately survive outside the copied state.
impl Clone for Game {
    fn clone(&self) -> Self {
        Self {
            mem: self.mem.clone(),
            vm: self.vm.clone(),
            video: self.video.clone(),
            music: self.music.clone(),
            audio: self.audio.clone(),
            input: self.input.clone(),
            current_part: self.current_part,
            next_part: self.next_part,
            screen_num: self.screen_num,
            next_pal: self.next_pal,
            part_num: self.part_num,
            lang: self.lang,
            enable_protection: self.enable_protection,
            title: self.title,
            elapsed: self.elapsed,
            sleep: self.sleep,
            audio_ms: self.audio_ms,
            hooks: Hooks::default(),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests_common {
    use crate::mem::entry_kind;
    use crate::{Game, GameData, GameDesc};
    use byteorder::{ByteOrder, BE};

    pub const TEST_SOUND_ENTRY: u16 = 0x01;
    pub const TEST_PAL_ENTRY: u16 = 0x14;
    pub const TEST_CODE_ENTRY: u16 = 0x15;
    pub const TEST_VID_ENTRY: u16 = 0x16;

    fn push_entry(mem_list: &mut Vec<u8>, kind: u8, rank: u8, bank: u8, pos: u32, size: u32) {
        let mut e = [0u8; 20];
        e[1] = kind;
        e[6] = rank;
        e[7] = bank;
        BE::write_u32(&mut e[8..12], pos);
        BE::write_u32(&mut e[12..16], size);
        BE::write_u32(&mut e[16..20], size);
        mem_list.extend_from_slice(&e);
    }

    fn push_null_entry(mem_list: &mut Vec<u8>) {
        mem_list.extend_from_slice(&[0; 20]);
    }

    /// Builds a synthetic DOS data set around the given bytecode: a sound
    /// sample at entry 1, a tracker module at entry 2 and part 16000's
    /// palette/bytecode/shape-stream entries, all payloads in bank 1.
    pub fn dos_game_data(code: &[u8], palette: &[u8]) -> GameData {
        assert_eq!(palette.len(), 2048);

        // Sample header: 4 words of payload, no loop; payload is zeros.
        let mut sound = vec![0u8; 16];
        BE::write_u16(&mut sound[0..2], 4);

        // Module: header delay, empty instrument table, a single order
        // whose first row carries a music-sync cell on channel 0.
        let mut music = vec![0u8; 0xC0 + 1024];
        BE::write_u16(&mut music[0..2], 0x1388);
        music[0x3F] = 1;
        BE::write_u16(&mut music[0xC0..], 0xFFFD);
        BE::write_u16(&mut music[0xC2..], 0x1234);

        let shapes = vec![0u8; 64];

        let mut bank = Vec::new();
        let mut mem_list = Vec::new();
        let mut append = |bank: &mut Vec<u8>, payload: &[u8]| {
            let pos = bank.len() as u32;
            bank.extend_from_slice(payload);
            pos
        };

        push_null_entry(&mut mem_list); // 0x00
        let pos = append(&mut bank, &sound);
        push_entry(&mut mem_list, entry_kind::SOUND, 0, 1, pos, sound.len() as u32);
        let pos = append(&mut bank, &music);
        push_entry(&mut mem_list, entry_kind::MUSIC, 0, 1, pos, music.len() as u32);
        for _ in 0x03..0x14 {
            push_null_entry(&mut mem_list);
        }
        let pos = append(&mut bank, palette);
        push_entry(&mut mem_list, entry_kind::PALETTE, 2, 1, pos, palette.len() as u32);
        let pos = append(&mut bank, code);
        push_entry(&mut mem_list, entry_kind::BYTECODE, 1, 1, pos, code.len() as u32);
        let pos = append(&mut bank, &shapes);
        push_entry(&mut mem_list, entry_kind::SHAPE, 0, 1, pos, shapes.len() as u32);
        // Terminator.
        mem_list.extend_from_slice(&[0xFF; 20]);

        let mut data = GameData::default();
        data.mem_list = Some(mem_list);
        data.banks[0] = Some(bank);
        data
    }

    /// Boots part 16000 of a synthetic DOS data set running `code`.
    pub fn boot_with_bytecode(code: &[u8]) -> Game {
        let desc = GameDesc {
            part_num: 16000,
            ..Default::default()
        };
        let mut game = Game::new(desc);
        game.start(dos_game_data(code, &[0; 2048]));
        game
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests_common::boot_with_bytecode;

    #[test]
    fn snapshot_version_mismatch_is_rejected() {
        let mut game = Game::new(GameDesc::default());
        let mut snap = game.save_snapshot();
        snap.version = SNAPSHOT_VERSION + 1;
        assert!(!game.load_snapshot(&snap));
    }

    #[test]
    fn snapshot_restores_state_but_keeps_hooks() {
        let mut game = Game::new(GameDesc::default());
        game.hooks.audio = Some(Box::new(|_| {}));
        game.vm.regs[0x10] = 1234;
        let snap = game.save_snapshot();
        game.vm.regs[0x10] = -1;
        assert!(game.load_snapshot(&snap));
        assert_eq!(game.vm.regs[0x10], 1234);
        assert!(game.hooks.audio.is_some());
    }

    #[test]
    fn sleep_debt_is_paid_before_any_execution() {
        let mut game = Game::new(GameDesc::default());
        game.sleep = 50;
        game.exec(30);
        assert_eq!(game.sleep, 20);
        game.exec(30);
        assert_eq!(game.sleep, 0);
    }

    #[test]
    fn exec_runs_one_frame_then_paces_to_50hz() {
        let mut game = boot_with_bytecode(&[
            0x03, 0x20, 0x00, 0x01, // V[0x20] += 1
            0x06, // yield
            0x07, 0x00, 0x00, // jmp 0x0000
        ]);
        game.exec(20);
        assert_eq!(game.vm.regs[0x20], 1);
        assert_eq!(game.sleep, 20);
        // The next tick only pays down the debt.
        game.exec(20);
        assert_eq!(game.vm.regs[0x20], 1);
        game.exec(20);
        assert_eq!(game.vm.regs[0x20], 2);
    }

    #[test]
    fn boot_reports_the_us_title_for_dos_english() {
        let game = boot_with_bytecode(&[0x06, 0x11]);
        assert_eq!(game.title(), "Out Of This World");
    }

    #[test]
    fn protection_disabled_preseeds_checks() {
        let game = boot_with_bytecode(&[0x06, 0x11]);
        assert_eq!(game.vm.regs[0xDC], 33);
        assert_eq!(game.vm.regs[0xF2], 4000);
        assert_eq!(game.vm.regs[0x54], 0x81);
    }

    #[test]
    fn display_info_exposes_the_paletted_screen() {
        let game = boot_with_bytecode(&[0x06, 0x11]);
        let info = game.display_info();
        assert_eq!(info.width, 320);
        assert_eq!(info.height, 200);
        assert_eq!(info.framebuffer.len(), 320 * 200);
        assert_eq!(info.palette.len(), 16);
    }
}
