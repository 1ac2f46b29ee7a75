use std::path::Path;
use std::str::FromStr;
use std::time::Instant;

use outworld::{Game, GameData, GameDesc, Lang};

mod host;

fn main() {
    env_logger::init();

    let matches = clap::App::new("Out of this World")
        .version("0.1")
        .args_from_usage(
            "--fullscreen 'Display in fullscreen'
            --scene=[NUM] 'Start from given scene or part id'
            --lang=[LANG] 'Language: fr or en'
            --ega-pal 'Use the EGA palette'
            --protection 'Keep the copy-protection screen'
            [DATA_DIR] 'Directory holding the game data files'",
        )
        .get_matches();

    let data_dir = matches.value_of("DATA_DIR").unwrap_or(".");
    let scene = matches
        .value_of("scene")
        .and_then(|s| u16::from_str(s).ok())
        .unwrap_or(16001);
    let lang = match matches.value_of("lang") {
        Some("fr") => Lang::Fr,
        _ => Lang::En,
    };

    let (mut host, audio_sink) = host::Host::new(matches.is_present("fullscreen"));

    let mut game = Game::new(GameDesc {
        part_num: scene,
        lang,
        use_ega: matches.is_present("ega-pal"),
        enable_protection: matches.is_present("protection"),
        audio: Some(audio_sink),
        debug: None,
    });
    game.start(read_game_data(Path::new(data_dir)));
    log::info!("running \"{}\"", game.title());

    let mut last = Instant::now();
    while !game.wants_quit() {
        host.process_input(&mut game);

        let elapsed = std::mem::replace(&mut last, Instant::now()).elapsed();
        game.exec(elapsed.as_millis() as u32);

        host.display(&game);
        std::thread::sleep(std::time::Duration::from_millis(10));
    }
}

fn read_game_data(dir: &Path) -> GameData {
    let mut data = GameData::default();
    data.mem_list = read_file(dir, "memlist.bin");
    for i in 0..13 {
        data.banks[i] = read_file(dir, &format!("bank{:02x}", i + 1));
    }
    data.demo3_joy = read_file(dir, "demo3.joy");
    data
}

fn read_file(dir: &Path, name: &str) -> Option<Vec<u8>> {
    // Data sets come with either lower- or upper-case file names.
    std::fs::read(dir.join(name))
        .or_else(|_| std::fs::read(dir.join(name.to_uppercase())))
        .ok()
}
