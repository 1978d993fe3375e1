mod tables;

pub use self::tables::{
    bottleneck as print_bottleneck, cpus as print_cpus, fps as print_fps_table,
    games as print_games, gpus as print_gpus, upgrades as print_upgrades,
};
