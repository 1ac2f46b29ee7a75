use crate::{bytekiller, data, video, Game, GameData};
use byteorder::{ByteOrder, BE};

const STATUS_EMPTY: u8 = 0;
const STATUS_READY: u8 = 1;
const STATUS_PENDING: u8 = 2;

pub(crate) mod entry_kind {
    pub const SOUND: u8 = 0;
    pub const MUSIC: u8 = 1;
    // Full-screen 4bpp bitmap, 320*200/2 bytes packed.
    pub const BITMAP: u8 = 2;
    pub const PALETTE: u8 = 3;
    pub const BYTECODE: u8 = 4;
    pub const SHAPE: u8 = 5;
    // Shapes shared between parts (bank2.mat).
    pub const BANK: u8 = 6;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DataType {
    Dos,
    Amiga,
    Atari,
}

const DATA_SIZE: usize = 1024 * 1024;
// The 4bpp staging area for bitmap resources sits at the top of the arena.
const VID_BITMAP_SIZE: usize = (320 * 200) / 2;
const VID_CUR_OFFSET: usize = DATA_SIZE - VID_BITMAP_SIZE;

#[derive(Debug, Clone)]
struct Entry {
    status: u8,
    kind: u8,
    address: usize,
    rank_num: u8,
    bank_num: u8,
    bank_pos: u32,
    packed_size: usize,
    unpacked_size: usize,
}

#[derive(Clone)]
pub(crate) struct Memory {
    list: Vec<Entry>,
    /// The 1 MiB arena. Bytecode, palettes and shape streams grow from the
    /// low end; the bitmap staging area sits at the top.
    pub data: Vec<u8>,

    data_bak: usize,
    data_cur: usize,

    seg_code: usize,
    seg_video_pal: usize,
    seg_video1: usize,
    seg_video2: usize,

    pub data_type: DataType,
    pub has_password_screen: bool,
    banks: [Option<Vec<u8>>; 13],
}

impl Memory {
    pub fn new() -> Self {
        Self {
            list: Vec::new(),
            data: vec![0; DATA_SIZE],
            data_bak: 0,
            data_cur: 0,
            seg_code: 0,
            seg_video_pal: 0,
            seg_video1: 0,
            seg_video2: 0,
            data_type: DataType::Dos,
            has_password_screen: true,
            banks: Default::default(),
        }
    }

    pub fn seg_code(&self) -> usize {
        self.seg_code
    }

    pub fn seg_video_pal(&self) -> usize {
        self.seg_video_pal
    }

    pub fn seg_video1(&self) -> usize {
        self.seg_video1
    }

    pub fn seg_video2(&self) -> usize {
        self.seg_video2
    }

    fn bank(&self, num: u8) -> Option<&[u8]> {
        if num == 0 || usize::from(num) > self.banks.len() {
            return None;
        }
        self.banks[usize::from(num) - 1].as_deref()
    }
}

/// Decides between the DOS data set (driven by memlist.bin) and the
/// built-in Amiga/Atari directories, recognized by the size of bank 1.
pub(crate) fn detect_version(m: &mut Memory, data: GameData) {
    m.banks = data.banks;

    if let Some(mem_list) = data.mem_list {
        m.data_type = DataType::Dos;
        log::debug!("using DOS data files");
        read_entries_dos(m, &mem_list);
        // The DOS demo ships without the password-screen resources.
        m.has_password_screen = m.banks[8].is_some();
    } else {
        let dir: &[data::DirEntry] = match m.bank(1).map(|b| b.len()) {
            Some(244_674) => {
                m.data_type = DataType::Amiga;
                log::debug!("using Amiga data files (fr)");
                &data::DIR_AMIGA_FR
            }
            Some(244_868) => {
                m.data_type = DataType::Amiga;
                log::debug!("using Amiga data files (en)");
                &data::DIR_AMIGA_EN
            }
            Some(227_142) => {
                m.data_type = DataType::Atari;
                log::debug!("using Atari data files");
                &data::DIR_ATARI_EN
            }
            _ => panic!("no data files detected"),
        };
        m.list = dir
            .iter()
            .map(|&(kind, bank_num, bank_pos, packed, unpacked)| Entry {
                status: STATUS_EMPTY,
                kind,
                address: 0,
                rank_num: 0,
                bank_num,
                bank_pos,
                packed_size: packed as usize,
                unpacked_size: unpacked as usize,
            })
            .collect();
        m.has_password_screen = true;
    }

    m.data_bak = 0;
    m.data_cur = 0;
}

fn read_entries_dos(m: &mut Memory, mem_list: &[u8]) {
    m.list.clear();
    for raw in mem_list.chunks_exact(20) {
        let status = raw[0];
        if status == 0xFF {
            return;
        }
        m.list.push(Entry {
            status,
            kind: raw[1],
            address: 0,
            rank_num: raw[6],
            bank_num: raw[7],
            bank_pos: BE::read_u32(&raw[8..]),
            packed_size: BE::read_u32(&raw[12..]) as usize,
            unpacked_size: BE::read_u32(&raw[16..]) as usize,
        });
    }
    panic!("no data files detected");
}

/// Copies an entry's payload out of its bank and unpacks it in place when
/// the sizes differ.
fn read_bank(m: &mut Memory, index: usize, address: usize) -> bool {
    let entry = &m.list[index];
    let bank_pos = entry.bank_pos as usize;
    let packed = entry.packed_size;
    let unpacked = entry.unpacked_size;
    let bank_num = usize::from(entry.bank_num);
    if bank_num == 0 || bank_num > m.banks.len() {
        return false;
    }
    let bank = match &m.banks[bank_num - 1] {
        Some(b) if b.len() >= bank_pos + packed => b,
        _ => return false,
    };
    m.data[address..address + packed].copy_from_slice(&bank[bank_pos..bank_pos + packed]);
    if packed != unpacked {
        return bytekiller::unpack(&mut m.data[address..address + unpacked], packed);
    }
    true
}

pub(crate) fn address_of_entry(m: &Memory, num: u16) -> Option<usize> {
    let entry = m.list.get(usize::from(num))?;
    if entry.status == STATUS_READY {
        Some(entry.address)
    } else {
        None
    }
}

pub(crate) fn address_of_entry_with_kind(m: &Memory, num: u16, kind: u8) -> Option<usize> {
    let entry = m.list.get(usize::from(num))?;
    if entry.status == STATUS_READY && entry.kind == kind {
        Some(entry.address)
    } else {
        None
    }
}

/// Schedules one entry for loading, as requested by the bytecode.
pub(crate) fn load_entry(g: &mut Game, num: u16) {
    let entry = &mut g.mem.list[usize::from(num)];
    if entry.status == STATUS_EMPTY {
        entry.status = STATUS_PENDING;
        load_entries(g);
    }
}

fn load_entries(g: &mut Game) {
    loop {
        let Game { mem, video, .. } = g;

        // Pick the pending entry with the highest rank.
        let index = match mem
            .list
            .iter()
            .enumerate()
            .filter(|(_, e)| e.status == STATUS_PENDING)
            .max_by_key(|(_, e)| e.rank_num)
        {
            Some((i, _)) => i,
            None => break,
        };

        let (kind, unpacked_size, bank_num) = {
            let e = &mem.list[index];
            (e.kind, e.unpacked_size, e.bank_num)
        };

        let address = if kind == entry_kind::BITMAP {
            VID_CUR_OFFSET
        } else {
            let avail = VID_CUR_OFFSET - mem.data_cur;
            if unpacked_size > avail {
                log::warn!("not enough memory to load entry {}, available={}", index, avail);
                mem.list[index].status = STATUS_EMPTY;
                continue;
            }
            mem.data_cur
        };

        if bank_num == 0 || mem.bank(bank_num).is_none() {
            if mem.data_type == DataType::Dos && bank_num == 12 && kind == entry_kind::BANK {
                // The DOS demo does not ship this bank; the resource is
                // unused by its scripts.
                log::warn!("missing bank 12, skipping entry {}", index);
            } else {
                log::warn!("missing bank {} for entry {}", bank_num, index);
            }
            mem.list[index].status = STATUS_EMPTY;
            continue;
        }

        log::debug!(
            "loading entry {} kind={} size={} from bank {:02x}",
            index,
            kind,
            unpacked_size,
            bank_num
        );

        if read_bank(mem, index, address) {
            if kind == entry_kind::BITMAP {
                video::copy_bitmap(
                    video,
                    mem.data_type,
                    &mem.data[address..address + unpacked_size],
                );
                mem.list[index].status = STATUS_EMPTY;
            } else {
                mem.list[index].address = address;
                mem.list[index].status = STATUS_READY;
                mem.data_cur += unpacked_size;
            }
        } else {
            panic!("unable to read entry {} from bank {}", index, bank_num);
        }
    }
}

/// Releases everything loaded after the current part was set up.
pub(crate) fn invalidate_res(m: &mut Memory) {
    for entry in m
        .list
        .iter_mut()
        .filter(|e| e.kind <= entry_kind::BITMAP || e.kind > entry_kind::BANK)
    {
        entry.status = STATUS_EMPTY;
    }
    m.data_cur = m.data_bak;
}

fn invalidate_all(m: &mut Memory) {
    for entry in m.list.iter_mut() {
        entry.status = STATUS_EMPTY;
    }
    m.data_cur = 0;
}

pub(crate) fn setup_part(g: &mut Game, part_id: u16) {
    if g.current_part != part_id {
        assert!(
            (16000..=16009).contains(&part_id),
            "invalid part {}",
            part_id
        );

        let part_index = usize::from(part_id - 16000);
        let (ipal, icod, ivd1, ivd2) = MEM_LIST_PARTS[part_index];

        invalidate_all(&mut g.mem);
        g.video.invalidate_pal_num();

        for i in [ipal, icod, ivd1, ivd2].iter().copied().filter(|i| *i != 0) {
            g.mem.list[usize::from(i)].status = STATUS_PENDING;
        }

        load_entries(g);

        let m = &mut g.mem;
        m.seg_video_pal = m.list[usize::from(ipal)].address;
        m.seg_code = m.list[usize::from(icod)].address;
        m.seg_video1 = m.list[usize::from(ivd1)].address;
        if ivd2 != 0 {
            m.seg_video2 = m.list[usize::from(ivd2)].address;
        }

        g.current_part = part_id;
    }

    g.mem.data_bak = g.mem.data_cur;
}

// Per-part entry indices: palette, bytecode, shape stream 1, shape stream 2.
const MEM_LIST_PARTS: [(u8, u8, u8, u8); 10] = [
    (0x14, 0x15, 0x16, 0x00), // 16000 - protection screens
    (0x17, 0x18, 0x19, 0x00), // 16001 - introduction
    (0x1A, 0x1B, 0x1C, 0x11), // 16002 - water
    (0x1D, 0x1E, 0x1F, 0x11), // 16003 - jail
    (0x20, 0x21, 0x22, 0x11), // 16004 - 'cite'
    (0x23, 0x24, 0x25, 0x00), // 16005 - 'arene'
    (0x26, 0x27, 0x28, 0x11), // 16006 - 'luxe'
    (0x29, 0x2A, 0x2B, 0x11), // 16007 - 'final'
    (0x7D, 0x7E, 0x7F, 0x00), // 16008 - password screen
    (0x7D, 0x7E, 0x7F, 0x00), // 16009 - password screen
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests_common::{
        boot_with_bytecode, dos_game_data, TEST_CODE_ENTRY, TEST_PAL_ENTRY, TEST_SOUND_ENTRY,
        TEST_VID_ENTRY,
    };
    use crate::GameData;

    #[test]
    fn detect_version_prefers_memlist() {
        let mut m = Memory::new();
        detect_version(&mut m, dos_game_data(&[0x06, 0x11], &[0; 2048]));
        assert_eq!(m.data_type, DataType::Dos);
        assert!(!m.has_password_screen);
    }

    #[test]
    fn detect_version_amiga_by_bank_size() {
        let mut m = Memory::new();
        let mut data = GameData::default();
        data.banks[0] = Some(vec![0; 244_674]);
        detect_version(&mut m, data);
        assert_eq!(m.data_type, DataType::Amiga);
        assert_eq!(m.list.len(), 146);
        assert!(m.has_password_screen);
    }

    #[test]
    fn detect_version_atari_by_bank_size() {
        let mut m = Memory::new();
        let mut data = GameData::default();
        data.banks[0] = Some(vec![0; 227_142]);
        detect_version(&mut m, data);
        assert_eq!(m.data_type, DataType::Atari);
    }

    #[test]
    #[should_panic(expected = "no data files detected")]
    fn detect_version_rejects_unknown_banks() {
        let mut m = Memory::new();
        let mut data = GameData::default();
        data.banks[0] = Some(vec![0; 1234]);
        detect_version(&mut m, data);
    }

    #[test]
    fn setup_part_loads_the_named_entries() {
        let g = boot_with_bytecode(&[0x06, 0x11]);

        let m = &g.mem;
        assert_eq!(m.list[usize::from(TEST_PAL_ENTRY)].status, STATUS_READY);
        assert_eq!(m.list[usize::from(TEST_CODE_ENTRY)].status, STATUS_READY);
        assert_eq!(m.list[usize::from(TEST_VID_ENTRY)].status, STATUS_READY);
        let loaded = m.list.iter().filter(|e| e.status == STATUS_READY).count();
        assert_eq!(loaded, 3);

        // The arena baseline records the part's own resources.
        assert_eq!(m.data_bak, m.data_cur);
        assert!(m.seg_code > m.seg_video_pal);
    }

    #[test]
    fn invalidate_res_rewinds_to_part_baseline() {
        let mut g = boot_with_bytecode(&[0x06, 0x11]);
        let baseline = g.mem.data_cur;

        // An extra sound entry loads above the baseline and is dropped on
        // invalidation while the part entries stay.
        load_entry(&mut g, TEST_SOUND_ENTRY);
        assert_eq!(
            g.mem.list[usize::from(TEST_SOUND_ENTRY)].status,
            STATUS_READY
        );
        assert!(g.mem.data_cur > baseline);

        invalidate_res(&mut g.mem);
        assert_eq!(g.mem.data_cur, baseline);
        assert_eq!(
            g.mem.list[usize::from(TEST_SOUND_ENTRY)].status,
            STATUS_EMPTY
        );
        assert_eq!(
            g.mem.list[usize::from(TEST_CODE_ENTRY)].status,
            STATUS_READY
        );
    }

    #[test]
    fn rank_orders_loading() {
        // The palette entry carries the highest rank in the fixture, so it
        // grabs the lowest arena address.
        let g = boot_with_bytecode(&[0x06, 0x11]);
        let code_addr = g.mem.list[usize::from(TEST_CODE_ENTRY)].address;
        let pal_addr = g.mem.list[usize::from(TEST_PAL_ENTRY)].address;
        assert!(pal_addr < code_addr);
    }

    #[test]
    fn address_lookup_requires_matching_kind() {
        let mut g = boot_with_bytecode(&[0x06, 0x11]);
        load_entry(&mut g, TEST_SOUND_ENTRY);
        assert!(
            address_of_entry_with_kind(&g.mem, TEST_SOUND_ENTRY, entry_kind::SOUND).is_some()
        );
        assert!(
            address_of_entry_with_kind(&g.mem, TEST_SOUND_ENTRY, entry_kind::MUSIC).is_none()
        );
    }
}
