use crate::{mem, Game};
use byteorder::{ByteOrder, BE};

pub(crate) const MIX_FREQ: u32 = 44100;
const PAULA_FREQ: u32 = 7_159_092;

// Internal mix buffer, int16 samples (stereo interleaved).
const MIX_BUF_SIZE: usize = 4096 * 8;

// Mix raw channels 0,3 left and 1,2 right instead of duplicating mono.
const AMIGA_STEREO_CHANNELS: bool = false;

/// Converts a playSound period index into a sampling rate in Hz.
pub(crate) fn sound_freq(period: u8) -> u32 {
    PAULA_FREQ / (u32::from(crate::data::PERIOD_TABLE[usize::from(period)]) * 2)
}

/// Q16.16 sample position stepper.
#[derive(Default, Clone, Copy)]
pub(crate) struct Frac {
    inc: u32,
    offset: u64,
}

impl Frac {
    const BITS: u32 = 16;
    const MASK: u32 = (1 << Frac::BITS) - 1;

    pub fn new(n: u32, d: u32) -> Self {
        Self {
            inc: ((u64::from(n) << Frac::BITS) / u64::from(d)) as u32,
            offset: 0,
        }
    }

    fn int(self) -> u32 {
        (self.offset >> Frac::BITS) as u32
    }

    fn frac(self) -> u32 {
        (self.offset as u32) & Frac::MASK
    }

    fn step(&mut self) {
        self.offset += u64::from(self.inc);
    }

    fn set_int(&mut self, int: u32) {
        self.offset = u64::from(int) << Frac::BITS;
    }

    fn interpolate(self, sample1: i8, sample2: i8) -> i32 {
        let fp = self.frac() as i32;
        (i32::from(sample1) * (Frac::MASK as i32 - fp) + i32::from(sample2) * fp)
            >> Frac::BITS
    }
}

/// One raw voice: an arena offset into the sample payload plus the
/// looping state decoded from the 8-byte sample header.
#[derive(Default, Clone, Copy)]
struct RawChannel {
    data: Option<usize>,
    pos: Frac,
    len: u32,
    loop_pos: u32,
    loop_len: u32,
    volume: u16,
}

#[derive(Clone)]
pub(crate) struct Mixer {
    channels: [RawChannel; 4],
    samples: Vec<i16>,
    out: Vec<f32>,
}

impl Mixer {
    pub fn new() -> Self {
        Self {
            channels: [RawChannel::default(); 4],
            samples: vec![0; MIX_BUF_SIZE],
            out: vec![0.0; MIX_BUF_SIZE],
        }
    }
}

#[derive(Default, Clone, Copy)]
struct Instrument {
    data: Option<usize>,
    volume: u16,
}

#[derive(Default, Clone)]
struct Module {
    data: usize,
    cur_pos: u16,
    cur_order: u8,
    num_order: u8,
    order_table: usize,
    samples: [Instrument; 15],
}

#[derive(Default, Clone, Copy)]
struct SfxChannel {
    data: Option<usize>,
    pos: Frac,
    len: u16,
    loop_pos: u16,
    loop_len: u16,
    volume: u16,
}

/// The tracker: instruments, order table and pattern playback state.
#[derive(Default, Clone)]
pub(crate) struct Player {
    delay: u16,
    playing: bool,
    samples_left: u32,
    channels: [SfxChannel; 4],
    module: Module,
}

impl Player {
    pub fn set_events_delay(&mut self, delay: u16) {
        log::debug!("sfx events delay = {}", delay);
        self.delay = delay;
    }
}

pub(crate) fn play_sound_raw(g: &mut Game, channel: u8, address: usize, freq: u32, volume: u8) {
    let data = &g.mem.data[address..];
    let len = u32::from(BE::read_u16(data)) * 2;
    let loop_len = u32::from(BE::read_u16(&data[2..])) * 2;
    let loop_pos = if loop_len != 0 { len } else { 0 };

    let ch = &mut g.audio.channels[usize::from(channel)];
    ch.data = Some(address + 8);
    ch.pos = Frac::new(freq, MIX_FREQ);
    ch.len = len;
    ch.loop_len = loop_len;
    ch.loop_pos = loop_pos;
    ch.volume = u16::from(volume);
}

pub(crate) fn stop_sound(g: &mut Game, channel: u8) {
    g.audio.channels[usize::from(channel)].data = None;
}

pub(crate) fn stop_music(g: &mut Game) {
    g.music.playing = false;
}

pub(crate) fn stop_sound_and_music(g: &mut Game) {
    for channel in 0..4 {
        stop_sound(g, channel);
    }
    stop_music(g);
}

/// Loads an SFX module resource: header delay, 15-instrument table, order
/// table at 0x40, pattern data at 0xC0.
pub(crate) fn load_module(g: &mut Game, res_num: u16, delay: u16, pos: u8) {
    let address =
        match mem::address_of_entry_with_kind(&g.mem, res_num, mem::entry_kind::MUSIC) {
            Some(a) => a,
            None => {
                log::warn!("unable to load music module from resource {}", res_num);
                return;
            }
        };

    let data = &g.mem.data[address..];
    g.music.module = Module {
        data: address + 0xC0,
        cur_pos: 0,
        cur_order: pos,
        num_order: data[0x3F],
        order_table: address + 0x40,
        samples: prepare_instruments(g, address + 2),
    };
    g.music.delay = if delay == 0 { BE::read_u16(data) } else { delay };
    log::debug!(
        "loaded sfx module 0x{:X}, delay={} orders={}",
        res_num,
        g.music.delay,
        g.music.module.num_order
    );
}

fn prepare_instruments(g: &Game, table: usize) -> [Instrument; 15] {
    let mut samples = [Instrument::default(); 15];
    for (i, ins) in samples.iter_mut().enumerate() {
        let p = &g.mem.data[table + i * 4..];
        let res_num = BE::read_u16(p);
        if res_num != 0 {
            ins.volume = BE::read_u16(&p[2..]);
            ins.data = Some(
                mem::address_of_entry_with_kind(&g.mem, res_num, mem::entry_kind::SOUND)
                    .unwrap_or_else(|| panic!("error loading instrument 0x{:X}", res_num)),
            );
        }
    }
    samples
}

pub(crate) fn start_music(g: &mut Game) {
    g.music.module.cur_pos = 0;
    g.music.playing = true;
    g.music.samples_left = 0;
    g.music.channels = Default::default();
}

fn handle_pattern(g: &mut Game, channel: usize, address: usize) {
    let data = &g.mem.data[address..];
    let note1 = BE::read_u16(data);
    let note2 = BE::read_u16(&data[2..]);

    if note1 == 0xFFFD {
        // Scripts poll this variable to stay in step with the music.
        g.vm.sync_music(note2);
        return;
    }

    let mut sample_data = None;
    let mut sample_len = 0;
    let mut loop_pos = 0;
    let mut loop_len = 0;
    let mut sample_volume = 0;

    let sample = note2 >> 12;
    if sample != 0 {
        let ins = g.music.module.samples[usize::from(sample - 1)];
        if let Some(addr) = ins.data {
            let header = &g.mem.data[addr..];
            sample_data = Some(addr + 8);
            sample_len = BE::read_u16(header) * 2;
            let ll = BE::read_u16(&header[2..]) * 2;
            if ll != 0 {
                loop_pos = sample_len;
                loop_len = ll;
            }

            let mut volume = i32::from(ins.volume);
            let effect = (note2 >> 8) & 0xF;
            let amount = i32::from(note2 & 0xFF);
            if effect == 5 {
                // volume up
                volume = std::cmp::min(volume + amount, 0x3F);
            } else if effect == 6 {
                // volume down
                volume = std::cmp::max(volume - amount, 0);
            }
            sample_volume = volume as u16;
            g.music.channels[channel].volume = sample_volume;
        }
    }

    if note1 == 0xFFFE {
        g.music.channels[channel].len = 0;
    } else if note1 != 0 {
        if let Some(data) = sample_data {
            assert!((0x37..0x1000).contains(&note1));
            // Convert the Amiga period value to Hz.
            let freq = PAULA_FREQ / (u32::from(note1) * 2);
            let ch = &mut g.music.channels[channel];
            ch.data = Some(data);
            ch.len = sample_len;
            ch.loop_pos = loop_pos;
            ch.loop_len = loop_len;
            ch.volume = sample_volume;
            ch.pos = Frac::new(freq, MIX_FREQ);
        }
    }
}

fn handle_events(g: &mut Game) {
    let module = &g.music.module;
    let order = g.mem.data[module.order_table + usize::from(module.cur_order)];
    let address = module.data + usize::from(module.cur_pos) + usize::from(order) * 1024;
    for ch in 0..4 {
        handle_pattern(g, ch, address + ch * 4);
    }

    let module = &mut g.music.module;
    module.cur_pos += 4 * 4;
    if module.cur_pos >= 1024 {
        module.cur_pos = 0;
        let order = module.cur_order + 1;
        if order == module.num_order {
            g.music.playing = false;
        }
        module.cur_order = order;
    }
}

fn mix_sfx_channel(ch: &mut SfxChannel, data: &[u8], sample: &mut i16) {
    let addr = match ch.data {
        Some(a) => a,
        None => return,
    };
    if ch.len == 0 {
        return;
    }
    let pos1 = ch.pos.int();
    ch.pos.step();
    let mut pos2 = pos1 + 1;
    if ch.loop_len != 0 {
        if pos1 >= u32::from(ch.loop_pos) + u32::from(ch.loop_len) - 1 {
            pos2 = u32::from(ch.loop_pos);
            ch.pos.set_int(pos2);
        }
    } else if pos1 >= u32::from(ch.len) - 1 {
        ch.len = 0;
        return;
    }
    let s1 = data[addr + pos1 as usize] as i8;
    let s2 = data[addr + pos2 as usize] as i8;
    let s = ch.pos.interpolate(s1, s2);
    let mixed = i32::from(*sample) + i32::from(to_i16(s * i32::from(ch.volume) / 64));
    *sample = clamp_i16(mixed);
}

// Replicates the low byte into the high byte and recenters; out-of-range
// inputs truncate to 16 bits.
fn to_i16(a: i32) -> i16 {
    (((a << 8) | a) - 32768) as i16
}

fn clamp_i16(v: i32) -> i16 {
    if v < -32768 {
        -32768
    } else if v > 32767 {
        32767
    } else {
        v as i16
    }
}

/// Mixes the tracker channels on top of `samples[range]`, processing
/// pattern rows every `samples_per_tick` frames.
fn mix_sfx_samples(g: &mut Game, offset: usize, frames: usize) {
    let mut pos = offset;
    let mut left = frames;
    while left != 0 {
        if g.music.samples_left == 0 {
            handle_events(g);
            let delay_ms = u32::from(g.music.delay) * 60 * 1000 / PAULA_FREQ;
            g.music.samples_left = MIX_FREQ * delay_ms / 1000;
        }
        let count = std::cmp::min(g.music.samples_left as usize, left);
        g.music.samples_left -= count as u32;
        left -= count;

        for _ in 0..count {
            let Game { music, audio, mem, .. } = g;
            mix_sfx_channel(&mut music.channels[0], &mem.data, &mut audio.samples[pos]);
            mix_sfx_channel(&mut music.channels[3], &mem.data, &mut audio.samples[pos]);
            mix_sfx_channel(&mut music.channels[1], &mem.data, &mut audio.samples[pos + 1]);
            mix_sfx_channel(&mut music.channels[2], &mem.data, &mut audio.samples[pos + 1]);
            pos += 2;
        }
    }
}

fn mix_raw(ch: &mut RawChannel, data: &[u8], sample: &mut i16) {
    // An inactive channel clears its slot in the accumulator.
    let addr = match ch.data {
        Some(a) => a,
        None => {
            *sample = 0;
            return;
        }
    };
    let mut pos = ch.pos.int();
    ch.pos.step();
    if ch.loop_len != 0 {
        if pos >= ch.loop_pos + ch.loop_len {
            pos = ch.loop_pos;
            ch.pos.set_int(ch.loop_pos);
            ch.pos.step();
        }
    } else if pos >= ch.len {
        ch.data = None;
        return;
    }
    let raw = i32::from(data[addr + pos as usize] ^ 0x80);
    let mixed = i32::from(*sample) + i32::from(to_i16(raw)) * i32::from(ch.volume) / 64;
    *sample = clamp_i16(mixed);
}

fn mix_raw_channels(g: &mut Game, count: usize) {
    if AMIGA_STEREO_CHANNELS {
        for i in (0..count).step_by(2) {
            let Game { audio, mem, .. } = g;
            mix_raw(&mut audio.channels[0], &mem.data, &mut audio.samples[i]);
            mix_raw(&mut audio.channels[3], &mem.data, &mut audio.samples[i]);
            mix_raw(&mut audio.channels[1], &mem.data, &mut audio.samples[i + 1]);
            mix_raw(&mut audio.channels[2], &mem.data, &mut audio.samples[i + 1]);
        }
    } else {
        for i in (0..count).step_by(2) {
            let Game { audio, mem, .. } = g;
            let Mixer {
                channels, samples, ..
            } = audio;
            for ch in channels.iter_mut() {
                mix_raw(ch, &mem.data, &mut samples[i]);
            }
            samples[i + 1] = samples[i];
        }
    }
}

/// Produces the audio span covering the elapsed time of this tick and
/// hands it to the host as f32 samples in [-1, 1).
pub(crate) fn update_audio(g: &mut Game) {
    let frames = (g.audio_ms as usize * MIX_FREQ as usize / 1000).min(MIX_BUF_SIZE / 2);
    g.audio_ms = 0;
    let count = frames * 2;
    if count == 0 || g.hooks.audio.is_none() {
        return;
    }

    for s in g.audio.samples[..count].iter_mut() {
        *s = 0;
    }
    mix_raw_channels(g, count);
    if g.music.delay != 0 && g.music.playing {
        mix_sfx_samples(g, 0, frames);
    }

    for i in 0..count {
        g.audio.out[i] = f32::from(g.audio.samples[i]) / 32768.0;
    }
    let Game { hooks, audio, .. } = g;
    if let Some(cb) = hooks.audio.as_mut() {
        cb(&audio.out[..count]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests_common::{boot_with_bytecode, TEST_SOUND_ENTRY};

    #[test]
    fn frac_steps_with_16_bit_precision() {
        let mut f = Frac::new(11025, 44100);
        for _ in 0..4 {
            f.step();
        }
        assert_eq!(f.int(), 1);
        assert_eq!(f.frac(), 0);
    }

    #[test]
    fn period_zero_is_loudest_rate() {
        // Period table entry 0 is 1076 -> ~3327 Hz.
        assert_eq!(sound_freq(0), PAULA_FREQ / (1076 * 2));
    }

    #[test]
    fn raw_voice_ends_exactly_once() {
        let mut g = boot_with_bytecode(&[0x19, 0x00, 0x01, 0x06, 0x11]);
        while !crate::script::run_step(&mut g) {}
        let addr = crate::mem::address_of_entry(&g.mem, TEST_SOUND_ENTRY).unwrap();

        // The fixture sample holds 8 data bytes, no loop. At a 1:1 rate the
        // voice must shut off after exactly len frames.
        play_sound_raw(&mut g, 0, addr, MIX_FREQ, 63);
        assert_eq!(g.audio.channels[0].len, 8);

        let mut sample = 0i16;
        for frame in 0..8 {
            let Game { audio, mem, .. } = &mut g;
            mix_raw(&mut audio.channels[0], &mem.data, &mut sample);
            assert!(audio.channels[0].data.is_some(), "died early at {}", frame);
        }
        let Game { audio, mem, .. } = &mut g;
        mix_raw(&mut audio.channels[0], &mem.data, &mut sample);
        assert!(audio.channels[0].data.is_none());

        // A dead channel clears its accumulator slot instead of adding.
        let mut slot = 123i16;
        mix_raw(&mut audio.channels[0], &mem.data, &mut slot);
        assert_eq!(slot, 0);
    }

    #[test]
    fn inactive_raw_channel_clears_the_slot() {
        let mut g = boot_with_bytecode(&[0x06, 0x11]);
        let mut slot = -5000i16;
        let Game { audio, mem, .. } = &mut g;
        mix_raw(&mut audio.channels[2], &mem.data, &mut slot);
        assert_eq!(slot, 0);
    }

    #[test]
    fn raw_voice_scales_by_volume() {
        let mut g = boot_with_bytecode(&[0x19, 0x00, 0x01, 0x06, 0x11]);
        while !crate::script::run_step(&mut g) {}
        let addr = crate::mem::address_of_entry(&g.mem, TEST_SOUND_ENTRY).unwrap();
        play_sound_raw(&mut g, 0, addr, MIX_FREQ, 32);
        // First payload byte is 0x00 -> raw value (0x80 << 8 | 0x80) -
        // 32768 = 128, halved by volume 32.
        let mut sample = 0i16;
        let Game { audio, mem, .. } = &mut g;
        mix_raw(&mut audio.channels[0], &mem.data, &mut sample);
        assert_eq!(sample, 64);
    }

    #[test]
    fn volume_zero_stops_the_channel() {
        let mut g = boot_with_bytecode(&[
            0x19, 0x00, 0x01, // updateResources(1)
            0x18, 0x00, 0x01, 0x05, 0x28, 0x01, // playSound(res=1, freq=5, vol=40, chan=1)
            0x18, 0x00, 0x01, 0x05, 0x00, 0x01, // playSound(vol=0) stops it
            0x06, 0x11,
        ]);
        while !crate::script::run_step(&mut g) {}
        assert!(g.audio.channels[1].data.is_none());
    }

    #[test]
    fn play_sound_op_configures_channel() {
        let mut g = boot_with_bytecode(&[
            0x19, 0x00, 0x01, // updateResources(1)
            0x18, 0x00, 0x01, 0x05, 0x28, 0x01, // playSound(res=1, freq=5, vol=40, chan=1)
            0x06, 0x11,
        ]);
        while !crate::script::run_step(&mut g) {}
        let ch = &g.audio.channels[1];
        assert!(ch.data.is_some());
        assert_eq!(ch.volume, 40);
        assert_eq!(ch.len, 8);
        // Period index 5 -> 808 -> inc below 1.0.
        assert!(ch.pos.inc < (1 << 16));
    }

    #[test]
    fn sfx_channel_mixes_with_plain_bit_replication() {
        let mut g = boot_with_bytecode(&[0x19, 0x00, 0x01, 0x06, 0x11]);
        while !crate::script::run_step(&mut g) {}
        let addr = crate::mem::address_of_entry(&g.mem, TEST_SOUND_ENTRY).unwrap();
        // Flat payload of 0x0A so interpolation has no slope.
        g.mem.data[addr + 8] = 10;
        g.mem.data[addr + 9] = 10;

        let ch = &mut g.music.channels[0];
        ch.data = Some(addr + 8);
        ch.len = 8;
        ch.volume = 64;
        ch.pos = Frac::new(MIX_FREQ, MIX_FREQ);

        // The tracker path recenters the signed delta without any xor:
        // interpolation floors 10 to 9, then ((9 << 8) | 9) - 32768.
        let mut sample = 0i16;
        let Game { music, mem, .. } = &mut g;
        mix_sfx_channel(&mut music.channels[0], &mem.data, &mut sample);
        assert_eq!(sample, -30455);
    }

    #[test]
    fn to_i16_truncates_like_the_16_bit_hardware() {
        assert_eq!(to_i16(0), -32768);
        assert_eq!(to_i16(9), -30455);
        assert_eq!(to_i16(10), -30198);
        assert_eq!(to_i16(128), 128);
        assert_eq!(to_i16(255), 32767);
    }

    #[test]
    fn music_sync_pattern_updates_var_0xf4() {
        let mut g = boot_with_bytecode(&[
            0x19, 0x00, 0x02, // updateResources(2)
            0x1A, 0x00, 0x02, 0x1F, 0x40, 0x00, // playMusic(res=2, delay=8000, pos=0)
            0x06, 0x11,
        ]);
        while !crate::script::run_step(&mut g) {}
        assert!(g.music.playing);
        assert_eq!(g.music.delay, 8000);

        // The first pattern row of the fixture module carries a 0xFFFD
        // sync cell with value 0x1234.
        handle_events(&mut g);
        assert_eq!(g.vm.regs[crate::script::reg_id::MUSIC_SYNC] as u16, 0x1234);
    }

    #[test]
    fn module_header_delay_is_used_when_zero_given() {
        let mut g = boot_with_bytecode(&[
            0x19, 0x00, 0x02, // updateResources(2)
            0x1A, 0x00, 0x02, 0x00, 0x00, 0x00, // playMusic(res=2, delay=0, pos=0)
            0x06, 0x11,
        ]);
        while !crate::script::run_step(&mut g) {}
        // The fixture module's own header delay.
        assert_eq!(g.music.delay, 0x1388);
    }

    #[test]
    fn playback_stops_at_end_of_orders() {
        let mut g = boot_with_bytecode(&[
            0x19, 0x00, 0x02, // updateResources(2)
            0x1A, 0x00, 0x02, 0x1F, 0x40, 0x00, // playMusic
            0x06, 0x11,
        ]);
        while !crate::script::run_step(&mut g) {}
        // One order of 64 rows.
        for _ in 0..64 {
            assert!(g.music.playing);
            handle_events(&mut g);
        }
        assert!(!g.music.playing);
    }

    #[test]
    fn update_audio_reports_float_samples() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let produced = Arc::new(AtomicUsize::new(0));
        let counter = produced.clone();
        let mut g = boot_with_bytecode(&[0x06, 0x11]);
        g.hooks.audio = Some(Box::new(move |samples| {
            assert!(samples.iter().all(|s| (-1.0..1.0).contains(s)));
            counter.fetch_add(samples.len(), Ordering::SeqCst);
        }));
        g.audio_ms = 10;
        update_audio(&mut g);
        assert_eq!(produced.load(Ordering::SeqCst), 441 * 2);
        assert_eq!(g.audio_ms, 0);
    }
}
