use battleship_agent::{
    prior_map, AiPlayer, Event, Fleet, Orientation, PlacementRecord, Player, Point, Referee,
    RefereeError, RoundOutcome, DEFAULT_FLEET,
};

fn record(row: usize, col: usize, orientation: Orientation, length: usize) -> PlacementRecord {
    PlacementRecord {
        row,
        col,
        name: String::from("Test"),
        orientation,
        length,
    }
}

#[test]
fn test_fleet_reports_hits_and_per_cell_kills() {
    let mut fleet = Fleet::new(10).unwrap();
    fleet.place(&record(2, 3, Orientation::Horizontal, 3)).unwrap();
    fleet.place(&record(5, 5, Orientation::Vertical, 2)).unwrap();
    assert_eq!(fleet.occupied().count(), 5);

    assert_eq!(fleet.fire(Point::new(0, 0)).unwrap(), vec![Event::Miss(Point::new(0, 0))]);
    assert_eq!(fleet.fire(Point::new(2, 3)).unwrap(), vec![Event::Hit(Point::new(2, 3))]);
    // repeat shots are misses
    assert_eq!(fleet.fire(Point::new(2, 3)).unwrap(), vec![Event::Miss(Point::new(2, 3))]);
    assert_eq!(fleet.fire(Point::new(2, 5)).unwrap(), vec![Event::Hit(Point::new(2, 5))]);
    assert_eq!(
        fleet.fire(Point::new(2, 4)).unwrap(),
        vec![
            Event::Kill(Point::new(2, 3)),
            Event::Kill(Point::new(2, 4)),
            Event::Kill(Point::new(2, 5)),
        ]
    );
    assert!(!fleet.all_sunk());
    fleet.fire(Point::new(5, 5)).unwrap();
    fleet.fire(Point::new(6, 5)).unwrap();
    assert!(fleet.all_sunk());
}

#[test]
fn test_fleet_rejects_bad_placements() {
    let mut fleet = Fleet::new(5).unwrap();
    assert_eq!(
        fleet.place(&record(0, 3, Orientation::Horizontal, 3)).unwrap_err(),
        RefereeError::ShipOutOfBounds
    );
    fleet.place(&record(1, 1, Orientation::Vertical, 3)).unwrap();
    assert_eq!(
        fleet.place(&record(2, 0, Orientation::Horizontal, 3)).unwrap_err(),
        RefereeError::ShipOverlaps
    );
    assert_eq!(
        fleet.place(&record(1, 4, Orientation::Vertical, 5)).unwrap_err(),
        RefereeError::ShipOutOfBounds
    );
    assert_eq!(
        fleet.fire(Point::new(5, 0)).unwrap_err(),
        RefereeError::ShotOutOfBounds(Point::new(5, 0))
    );
}

#[test]
fn test_fleet_rejects_extreme_origins() {
    let mut fleet = Fleet::new(10).unwrap();
    for (row, col, orientation) in [
        (0, usize::MAX, Orientation::Horizontal),
        (usize::MAX, 0, Orientation::Vertical),
        (usize::MAX, usize::MAX, Orientation::Horizontal),
        (usize::MAX - 1, 3, Orientation::Horizontal),
    ] {
        assert_eq!(
            fleet.place(&record(row, col, orientation, 3)).unwrap_err(),
            RefereeError::ShipOutOfBounds
        );
    }
    assert_eq!(fleet.occupied().count(), 0);
}

#[test]
fn test_ai_vs_ai_round() {
    let mut p1 = AiPlayer::from_seed(10, 123).unwrap();
    let mut p2 = AiPlayer::from_seed(10, 124).unwrap();
    let referee = Referee::new(10, &DEFAULT_FLEET);
    let report = referee.play_round([&mut p1, &mut p2], 0).unwrap();
    let RoundOutcome::Won { seat } = report.outcome else {
        panic!("round should not tie: {:?}", report);
    };
    // the first seat shoots first, so the winner fired at least as often
    let loser = 1 - seat;
    assert!(report.shots[seat] >= report.shots[loser]);
    assert!(report.shots[seat] >= DEFAULT_FLEET.iter().sum::<usize>());
    assert!(report.shots[seat] <= 100);
    // every fleet length the winner sank was matched against its inventory
    let winner_fleet = if seat == 0 { p1.fleet() } else { p2.fleet() };
    assert!(winner_fleet.is_empty());
}

#[test]
fn test_ai_vs_ai_match() {
    let mut p1 = AiPlayer::from_seed(10, 7).unwrap();
    let mut p2 = AiPlayer::from_seed(10, 8).unwrap();
    let referee = Referee::new(10, &DEFAULT_FLEET);
    let summary = referee.play_match(&mut p1, &mut p2, 20).unwrap();
    assert_eq!(summary.rounds, 20);
    assert_eq!(summary.ties, 0);
    assert_eq!(summary.wins[0] + summary.wins[1], 20);
    assert_eq!(p1.round(), 20);

    // each player's histogram grew by exactly the shots fired at it
    let prior: u32 = prior_map(10).unwrap().iter().map(|(_, w)| w).sum();
    let seen_by_p1: u32 = p1.grids().opponent_shots().iter().map(|(_, n)| n).sum();
    let seen_by_p2: u32 = p2.grids().opponent_shots().iter().map(|(_, n)| n).sum();
    assert_eq!((seen_by_p1 - prior) as usize, summary.shots[1]);
    assert_eq!((seen_by_p2 - prior) as usize, summary.shots[0]);
}

#[test]
fn test_small_board_match() {
    let mut p1 = AiPlayer::from_seed(5, 1).unwrap();
    let mut p2 = AiPlayer::from_seed(5, 2).unwrap();
    let referee = Referee::new(5, &[3, 2]);
    let summary = referee.play_match(&mut p1, &mut p2, 10).unwrap();
    assert_eq!(summary.rounds, 10);
    assert_eq!(summary.ties, 0);
}

#[test]
fn test_shot_limit_ties() {
    let mut p1 = AiPlayer::from_seed(10, 3).unwrap();
    let mut p2 = AiPlayer::from_seed(10, 4).unwrap();
    let referee = Referee::new(10, &DEFAULT_FLEET).with_max_shots(3);
    let report = referee.play_round([&mut p1, &mut p2], 1).unwrap();
    assert_eq!(report.outcome, RoundOutcome::Tie);
    assert_eq!(report.shots, [3, 3]);
}

#[test]
fn test_same_seeds_replay_the_same_match() {
    let play = || {
        let mut p1 = AiPlayer::from_seed(10, 42).unwrap();
        let mut p2 = AiPlayer::from_seed(10, 43).unwrap();
        Referee::new(10, &DEFAULT_FLEET)
            .play_match(&mut p1, &mut p2, 5)
            .unwrap()
    };
    assert_eq!(play(), play());
}

/// Player that stacks its ships in the top rows and always fires at the
/// same cell.
#[derive(Default)]
struct Stubborn {
    placed: usize,
}

impl Player for Stubborn {
    fn new_round(&mut self) {
        self.placed = 0;
    }

    fn place_ship(
        &mut self,
        length: usize,
    ) -> Result<PlacementRecord, battleship_agent::AgentError> {
        let row = self.placed;
        self.placed += 1;
        Ok(record(row, 0, Orientation::Horizontal, length))
    }

    fn get_move(&mut self) -> Result<battleship_agent::ShotRecord, battleship_agent::AgentError> {
        Ok(battleship_agent::ShotRecord {
            row: 0,
            col: 0,
            label: String::from("again"),
        })
    }

    fn update(&mut self, _event: Event) -> Result<(), battleship_agent::AgentError> {
        Ok(())
    }
}

#[test]
fn test_agent_beats_a_stubborn_opponent() {
    let mut agent = AiPlayer::from_seed(10, 99).unwrap();
    let mut stubborn = Stubborn::default();
    let summary = Referee::new(10, &DEFAULT_FLEET)
        .play_match(&mut agent, &mut stubborn, 3)
        .unwrap();
    assert_eq!(summary.wins[0], 3);
}

/// Player that fires along the rows and logs what the referee asks of it.
#[derive(Default)]
struct Scripted {
    next: usize,
    placed: usize,
    log: Vec<&'static str>,
}

impl Player for Scripted {
    fn new_round(&mut self) {
        self.next = 0;
        self.placed = 0;
        self.log.clear();
    }

    fn place_ship(
        &mut self,
        length: usize,
    ) -> Result<PlacementRecord, battleship_agent::AgentError> {
        let row = 2 * self.placed;
        self.placed += 1;
        Ok(record(row, 0, Orientation::Horizontal, length))
    }

    fn get_move(&mut self) -> Result<battleship_agent::ShotRecord, battleship_agent::AgentError> {
        self.log.push("move");
        let shot = battleship_agent::ShotRecord {
            row: self.next / 10,
            col: self.next % 10,
            label: String::from("sweep"),
        };
        self.next += 1;
        Ok(shot)
    }

    fn update(&mut self, event: Event) -> Result<(), battleship_agent::AgentError> {
        self.log.push(match event {
            Event::OpponentShot(_) => "incoming",
            Event::Tie => "tie",
            _ => "result",
        });
        Ok(())
    }
}

#[test]
fn test_shot_limit_keeps_turns_alternating() {
    for first in [0, 1] {
        let mut a = Scripted::default();
        let mut b = Scripted::default();
        let report = Referee::new(10, &[5, 4])
            .with_max_shots(7)
            .play_round([&mut a, &mut b], first)
            .unwrap();
        assert_eq!(report.outcome, RoundOutcome::Tie);
        assert_eq!(report.shots, [7, 7]);
        for seat in [&a, &b] {
            // between two of our moves the opponent always fired once
            let moves: Vec<usize> = seat
                .log
                .iter()
                .enumerate()
                .filter(|(_, e)| **e == "move")
                .map(|(i, _)| i)
                .collect();
            assert_eq!(moves.len(), 7);
            for pair in moves.windows(2) {
                assert!(seat.log[pair[0]..pair[1]].contains(&"incoming"));
            }
            assert_eq!(seat.log.last(), Some(&"tie"));
        }
    }
}
