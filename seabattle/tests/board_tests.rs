// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use rand::{rngs::StdRng, SeedableRng};

use seabattle::{
    board::{Board, CannotHitReason, CellState, Direction, ShotOutcome, Vector2},
    config::Fleet,
};

fn cell(board: &Board, x: i32, y: i32) -> CellState {
    board.get_cell(Vector2::new(x, y)).unwrap()
}

#[test]
fn three_ship_round_trip() {
    let mut board = Board::new(10);
    let id = board
        .place_ship(3, Vector2::new(0, 0), Direction::East)
        .unwrap();
    for x in 0..3 {
        assert_eq!(cell(&board, x, 0), CellState::Occupied);
    }
    assert_eq!(cell(&board, 3, 0), CellState::Unknown);

    assert_eq!(
        board.hit_cell(Vector2::new(0, 0)).unwrap(),
        ShotOutcome::Hit(id)
    );
    assert_eq!(cell(&board, 0, 0), CellState::Hit);
    assert_eq!(board.ship(id).unwrap().health(), 2);
    assert!(!board.ship(id).unwrap().is_sunk());

    assert_eq!(
        board.hit_cell(Vector2::new(1, 0)).unwrap(),
        ShotOutcome::Hit(id)
    );
    assert_eq!(board.ship(id).unwrap().health(), 1);

    assert_eq!(
        board.hit_cell(Vector2::new(2, 0)).unwrap(),
        ShotOutcome::Defeated(id)
    );
    let ship = board.ship(id).unwrap();
    assert_eq!(ship.health(), 0);
    assert!(ship.is_sunk());
    for x in 0..3 {
        assert_eq!(cell(&board, x, 0), CellState::Sunk);
    }

    assert_eq!(
        board.hit_cell(Vector2::new(5, 5)).unwrap(),
        ShotOutcome::Miss
    );
    assert_eq!(cell(&board, 5, 5), CellState::Miss);
    assert_eq!(cell(&board, 5, 5), CellState::Miss);

    let err = board.hit_cell(Vector2::new(1, 0)).unwrap_err();
    assert_eq!(err.reason(), CannotHitReason::AlreadyTargeted);
    assert_eq!(cell(&board, 1, 0), CellState::Sunk);
}

#[test]
fn random_fleet_fits_without_overlap() {
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = Board::new(10);
        let fleet = Fleet::new(vec![2, 3, 3, 4, 5]).unwrap();
        let ids = board.place_fleet(&mut rng, &fleet, 1000).unwrap();
        assert_eq!(ids.len(), 5);
        assert_eq!(board.ships().len(), 5);

        let mut covered = 0;
        for y in 0..10 {
            for x in 0..10 {
                let pos = Vector2::new(x, y);
                let owners = board
                    .ships()
                    .iter()
                    .filter(|ship| ship.occupies_cell(pos))
                    .count();
                assert!(owners <= 1, "seed {}: {} is shared", seed, pos);
                assert_eq!(owners == 1, cell(&board, x, y) == CellState::Occupied);
                covered += owners;
            }
        }
        assert_eq!(covered, 17);

        let lengths: Vec<_> = board.ships().iter().map(|ship| ship.len()).collect();
        assert_eq!(lengths, vec![2, 3, 3, 4, 5]);
    }
}

#[test]
fn firing_everywhere_sinks_everything() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut board = Board::new(10);
    board.place_fleet(&mut rng, &Fleet::standard(), 1000).unwrap();

    let mut sinks = 0;
    for y in 0..10 {
        for x in 0..10 {
            let was_ship = cell(&board, x, y) == CellState::Occupied;
            let outcome = board.hit_cell(Vector2::new(x, y)).unwrap();
            assert_eq!(outcome.ship().is_some(), was_ship);
            if outcome.is_sunk() {
                sinks += 1;
            }
        }
    }
    assert_eq!(sinks, 5);
    assert!(board.all_sunk());
    assert!(board.ships().iter().all(|ship| ship.health() == 0));
    for row in board.iter_rows() {
        for state in row {
            assert!(state == CellState::Sunk || state == CellState::Miss);
        }
    }
}

#[test]
fn hidden_rendering_conceals_only_untouched_ships() {
    let mut board = Board::new(4);
    board
        .place_ship(2, Vector2::new(0, 0), Direction::North)
        .unwrap();
    board
        .place_ship(1, Vector2::new(3, 3), Direction::South)
        .unwrap();
    board.hit_cell(Vector2::new(0, 0)).unwrap();
    board.hit_cell(Vector2::new(3, 3)).unwrap();
    board.hit_cell(Vector2::new(2, 0)).unwrap();

    let visible = board.render();
    board.set_hidden(true);
    let hidden = board.render();

    assert_eq!(visible.matches("[ ]").count(), 1);
    assert_eq!(hidden.matches("[ ]").count(), 0);
    for text in &[&visible, &hidden] {
        assert_eq!(text.matches("[X]").count(), 1);
        assert_eq!(text.matches("{X}").count(), 1);
        assert_eq!(text.matches(" O ").count(), 1);
        assert_eq!(text.lines().count(), 5);
    }
}
