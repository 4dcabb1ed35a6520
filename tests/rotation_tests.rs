//! Rotation engine integration tests.
//!
//! The engine's table-driven moves are checked against a reference model
//! that rotates position and face-normal vectors directly. If the position
//! permutation and the sticker relabel ever describe different rotations,
//! the two models disagree.

use rubik_engine::{
    Color, CubeGrid, CubieId, Direction, Face, Move, Pos, RotationEngine, Segment,
    StateValidator,
};

// =============================================================================
// Reference model
// =============================================================================

type Vec3 = [i32; 3];

fn cross(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn dot(a: Vec3, b: Vec3) -> i32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Quarter turn of `v` about unit axis `n`, clockwise as seen from the tip of `n`.
fn quarter(v: Vec3, n: Vec3, clockwise: bool) -> Vec3 {
    let c = cross(n, v);
    let d = dot(n, v);
    let s = if clockwise { -1 } else { 1 };
    [s * c[0] + n[0] * d, s * c[1] + n[1] * d, s * c[2] + n[2] * d]
}

/// x = right, y = up, z = out of the front face.
fn to_vec(pos: Pos) -> Vec3 {
    [pos.w() as i32 - 1, 1 - pos.h() as i32, 1 - pos.d() as i32]
}

fn to_pos(v: Vec3) -> Pos {
    Pos::new((1 - v[2]) as usize, (1 - v[1]) as usize, (v[0] + 1) as usize)
}

fn normal(face: Face) -> Vec3 {
    match face {
        Face::Front => [0, 0, 1],
        Face::Back => [0, 0, -1],
        Face::Left => [-1, 0, 0],
        Face::Right => [1, 0, 0],
        Face::Up => [0, 1, 0],
        Face::Down => [0, -1, 0],
    }
}

/// Viewing normal and layer offset along it.
///
/// Slices are viewed from front, down and left respectively.
fn segment_frame(segment: Segment) -> (Vec3, i32) {
    match segment {
        Segment::MidDepth => (normal(Face::Front), 0),
        Segment::MidHeight => (normal(Face::Down), 0),
        Segment::MidWidth => (normal(Face::Left), 0),
        outer => (normal(outer.face().unwrap()), 1),
    }
}

#[derive(Clone, Debug)]
struct RefCubie {
    id: CubieId,
    pos: Vec3,
    stickers: Vec<(Vec3, Color)>,
}

#[derive(Clone, Debug)]
struct RefModel {
    cubies: Vec<RefCubie>,
}

impl RefModel {
    fn from_grid(grid: &CubeGrid) -> Self {
        let cubies = Pos::all()
            .map(|pos| {
                let cubie = grid.at(pos);
                RefCubie {
                    id: grid.id_at(pos),
                    pos: to_vec(pos),
                    stickers: cubie
                        .colored_faces()
                        .map(|f| (normal(f), cubie.sticker(f).unwrap()))
                        .collect(),
                }
            })
            .collect();
        Self { cubies }
    }

    fn apply(&mut self, mv: Move) {
        let (n, offset) = segment_frame(mv.segment);
        let cw = mv.direction.is_clockwise();
        for cubie in &mut self.cubies {
            if dot(n, cubie.pos) != offset {
                continue;
            }
            cubie.pos = quarter(cubie.pos, n, cw);
            for (facing, _) in &mut cubie.stickers {
                *facing = quarter(*facing, n, cw);
            }
        }
    }

    fn assert_matches(&self, grid: &CubeGrid, context: &str) {
        for cubie in &self.cubies {
            let pos = to_pos(cubie.pos);
            assert_eq!(grid.id_at(pos), cubie.id, "{context}: cubie at {pos:?}");
            for face in Face::ALL {
                let expected = cubie
                    .stickers
                    .iter()
                    .find(|(facing, _)| *facing == normal(face))
                    .map(|&(_, color)| color);
                assert_eq!(
                    grid.sticker(pos, face),
                    expected,
                    "{context}: sticker {face} at {pos:?}"
                );
            }
        }
    }
}

// =============================================================================
// Position/sticker pairing, per segment and direction
// =============================================================================

/// Every one of the 18 quarter turns matches the reference model from solved.
#[test]
fn test_each_move_matches_reference_from_solved() {
    for mv in Move::all() {
        let mut grid = CubeGrid::solved();
        let mut model = RefModel::from_grid(&grid);

        RotationEngine::apply(&mut grid, mv).unwrap();
        model.apply(mv);

        model.assert_matches(&grid, &format!("{mv} ({})", mv.segment));
    }
}

/// Every quarter turn matches the reference model from a mixed state, so
/// orientation mistakes hidden by uniform faces still show up.
#[test]
fn test_each_move_matches_reference_from_mixed_state() {
    let setup = [
        Move::cw(Segment::Right),
        Move::cw(Segment::Up),
        Move::ccw(Segment::Front),
        Move::cw(Segment::MidWidth),
        Move::ccw(Segment::Down),
        Move::cw(Segment::MidHeight),
        Move::cw(Segment::Back),
        Move::ccw(Segment::MidDepth),
        Move::cw(Segment::Left),
    ];

    let mut base = CubeGrid::solved();
    let mut base_model = RefModel::from_grid(&base);
    for mv in setup {
        RotationEngine::apply(&mut base, mv).unwrap();
        base_model.apply(mv);
    }
    base_model.assert_matches(&base, "setup");

    for mv in Move::all() {
        let mut grid = base.clone();
        let mut model = base_model.clone();

        RotationEngine::apply(&mut grid, mv).unwrap();
        model.apply(mv);

        model.assert_matches(&grid, &format!("{mv} after setup"));
    }
}

/// After any move, stickers only face outward from the cube.
#[test]
fn test_stickers_stay_on_boundary() {
    for mv in Move::all() {
        let mut grid = CubeGrid::solved();
        RotationEngine::apply(&mut grid, mv).unwrap();
        for (pos, cubie) in grid.iter() {
            for face in cubie.colored_faces() {
                assert!(pos.touches(face), "{mv}: {face} sticker inside at {pos:?}");
            }
        }
    }
}

// =============================================================================
// Group properties
// =============================================================================

/// Quarter turns have order exactly 4.
#[test]
fn test_quarter_turn_order_is_four() {
    let solved = CubeGrid::solved();
    for mv in Move::all() {
        let mut grid = solved.clone();
        for turn in 1..=4 {
            RotationEngine::apply(&mut grid, mv).unwrap();
            if turn < 4 {
                assert_ne!(grid, solved, "{mv} returned early after {turn}");
            }
        }
        assert_eq!(grid, solved, "{mv}");
    }
}

/// A move followed by its inverse is the identity, in both orders.
#[test]
fn test_move_then_inverse_is_identity() {
    let solved = CubeGrid::solved();
    for mv in Move::all() {
        let mut grid = solved.clone();
        RotationEngine::apply(&mut grid, mv).unwrap();
        RotationEngine::apply(&mut grid, mv.inverse()).unwrap();
        assert_eq!(grid, solved, "{mv}");
    }
}

/// Layers on the same axis commute.
#[test]
fn test_parallel_layers_commute() {
    let pairs = [
        (Segment::Front, Segment::Back),
        (Segment::Up, Segment::Down),
        (Segment::Left, Segment::Right),
        (Segment::Front, Segment::MidDepth),
        (Segment::Up, Segment::MidHeight),
        (Segment::Right, Segment::MidWidth),
    ];

    for (a, b) in pairs {
        for da in Direction::ALL {
            for db in Direction::ALL {
                let (ma, mb) = (Move::new(a, da), Move::new(b, db));

                let mut ab = CubeGrid::solved();
                RotationEngine::apply_all(&mut ab, &[ma, mb]).unwrap();

                let mut ba = CubeGrid::solved();
                RotationEngine::apply_all(&mut ba, &[mb, ma]).unwrap();

                assert_eq!(ab, ba, "{ma} {mb}");
            }
        }
    }
}

/// Adjacent layers do not commute.
#[test]
fn test_adjacent_layers_do_not_commute() {
    let mut fu = CubeGrid::solved();
    RotationEngine::apply_all(&mut fu, &[Move::cw(Segment::Front), Move::cw(Segment::Up)]).unwrap();

    let mut uf = CubeGrid::solved();
    RotationEngine::apply_all(&mut uf, &[Move::cw(Segment::Up), Move::cw(Segment::Front)]).unwrap();

    assert_ne!(fu, uf);
}

/// The sexy move (R U R' U') has order 6.
#[test]
fn test_sexy_move_order_six() {
    let cycle = [
        Move::cw(Segment::Right),
        Move::cw(Segment::Up),
        Move::ccw(Segment::Right),
        Move::ccw(Segment::Up),
    ];
    let solved = CubeGrid::solved();
    let mut grid = solved.clone();

    for rep in 1..=6 {
        RotationEngine::apply_all(&mut grid, &cycle).unwrap();
        if rep < 6 {
            assert_ne!(grid, solved, "returned early after {rep}");
        }
    }
    assert_eq!(grid, solved);
}

/// Turning all three layers of an axis the same way moves every cubie but
/// leaves each face uniform (a whole-cube rotation).
#[test]
fn test_whole_cube_rotation_stays_solved() {
    let mut grid = CubeGrid::solved();
    RotationEngine::apply_all(
        &mut grid,
        &[
            Move::cw(Segment::Front),
            Move::cw(Segment::MidDepth),
            Move::ccw(Segment::Back),
        ],
    )
    .unwrap();

    assert!(StateValidator::is_solved(&grid));
    assert_ne!(grid, CubeGrid::solved());
    // Up now shows what was on the left.
    assert_eq!(StateValidator::face_color(&grid, Face::Up), Some(Color::Blue));
}

/// Sticker counts per cubie survive a long move sequence.
#[test]
fn test_sticker_counts_invariant() {
    let mut grid = CubeGrid::solved();
    let counts: Vec<u8> = CubieId::all().map(|id| grid.cubie(id).face_count()).collect();

    let all: Vec<Move> = Move::all().collect();
    for (i, &mv) in all.iter().cycle().take(200).enumerate() {
        RotationEngine::apply(&mut grid, mv).unwrap();
        if i % 7 == 0 {
            RotationEngine::apply(&mut grid, Move::ccw(Segment::MidWidth)).unwrap();
        }
    }

    for id in CubieId::all() {
        let cubie = grid.cubie(id);
        assert_eq!(cubie.sticker_count(), counts[id.index()]);
        assert_eq!(cubie.face_count(), counts[id.index()]);
    }
}
