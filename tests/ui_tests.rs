use sea_battle::{
    coord_to_string, level_from, ConsoleReporter, Coord, Grid, Orientation, Reporter, ShotError,
    ShotOutcome, Vessel,
};

fn boards() -> (Grid, Grid) {
    let mut mine = Grid::new(3);
    mine.place_vessel(Vessel::new(1, Coord::new(0, 0), Orientation::Horizontal))
        .unwrap();
    let mut theirs = Grid::concealed(3);
    theirs
        .place_vessel(Vessel::new(1, Coord::new(2, 2), Orientation::Horizontal))
        .unwrap();
    (mine, theirs)
}

#[test]
fn test_coord_to_string_is_one_based() {
    assert_eq!(coord_to_string(Coord::new(0, 0)), "1 1");
    assert_eq!(coord_to_string(Coord::new(4, 2)), "5 3");
}

#[test]
fn test_console_hides_enemy_fleet() {
    let (mine, theirs) = boards();
    let mut reporter = ConsoleReporter::new(Vec::new());
    reporter.turn_started("Player", [&mine, &theirs]).unwrap();
    let out = String::from_utf8(reporter.into_inner()).unwrap();

    assert!(out.contains("Player to move!"));
    let (own, enemy) = out.split_once("Computer's board:").unwrap();
    assert!(own.contains('■'));
    assert!(own.contains('~'));
    assert!(!enemy.contains('■'));
    assert!(!enemy.contains('~'));
}

#[test]
fn test_console_messages() {
    let mut reporter = ConsoleReporter::new(Vec::new());
    reporter.greet(6).unwrap();
    reporter.target_chosen("Computer", Coord::new(1, 3)).unwrap();
    reporter
        .shot_resolved("Computer", Coord::new(1, 3), ShotOutcome::Hit)
        .unwrap();
    reporter
        .shot_resolved("Player", Coord::new(0, 0), ShotOutcome::Miss)
        .unwrap();
    reporter
        .shot_rejected("Player", Coord::new(9, 9), ShotError::OutOfRange)
        .unwrap();
    reporter
        .shot_rejected("Player", Coord::new(0, 0), ShotError::AlreadyTargeted)
        .unwrap();
    let out = String::from_utf8(reporter.into_inner()).unwrap();

    assert!(out.contains("Sea Battle"));
    assert!(out.contains("row number (1-6)"));
    assert!(out.contains("Computer fires at: 2 4"));
    assert!(out.contains("Hit!"));
    assert!(out.contains("Miss!"));
    assert!(out.contains(&ShotError::OutOfRange.to_string()));
    assert!(out.contains(&ShotError::AlreadyTargeted.to_string()));
}

#[test]
fn test_console_game_over_reveals_nothing_extra() {
    let (mine, theirs) = boards();
    let mut reporter = ConsoleReporter::new(Vec::new());
    reporter.game_over("Computer", [&mine, &theirs]).unwrap();
    let out = String::from_utf8(reporter.into_inner()).unwrap();
    assert!(out.trim_end().ends_with("Computer wins!"));
    let (_, enemy) = out.split_once("Computer's board:").unwrap();
    assert!(!enemy.contains('■'));
}

#[test]
fn test_log_level_parsing() {
    assert_eq!(level_from(Some("debug")), log::LevelFilter::Debug);
    assert_eq!(level_from(Some(" INFO ")), log::LevelFilter::Info);
    assert_eq!(level_from(Some("loud")), log::LevelFilter::Warn);
    assert_eq!(level_from(None), log::LevelFilter::Warn);
}
