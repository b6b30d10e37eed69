use crate::board::debug::format_moves;
use crate::board::Board;
use crate::types::Move;
use std::time::Instant;

#[derive(Debug, Clone)]
pub struct PerftResult {
    pub nodes: u64,
    pub captures: u64,
    pub time_ms: u128,
}

impl PerftResult {
    pub fn new() -> Self {
        Self {
            nodes: 0,
            captures: 0,
            time_ms: 0,
        }
    }

    pub fn nodes_per_second(&self) -> u64 {
        if self.time_ms == 0 {
            return 0;
        }
        (self.nodes * 1000) / (self.time_ms as u64)
    }
}

impl Default for PerftResult {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct PerftTestCase {
    pub name: &'static str,
    pub fen: &'static str,
    pub expected_results: &'static [(u32, u64)], // (depth, expected nodes)
}

/// Expected node counts for this rule set (no castling, en passant, or
/// promotion). The starting-position counts match the standard published
/// values through depth 4, where none of those move types occur yet.
pub const PERFT_POSITIONS: &[PerftTestCase] = &[
    PerftTestCase {
        name: "Starting Position",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        expected_results: &[(1, 20), (2, 400), (3, 8_902), (4, 197_281)],
    },
    PerftTestCase {
        name: "Rook endgame",
        fen: "4k3/8/8/8/3R4/8/8/4K3 w - - 0 1",
        expected_results: &[(1, 19)],
    },
    PerftTestCase {
        name: "Kings only",
        fen: "4k3/8/8/8/8/8/8/4K3 w - - 0 1",
        expected_results: &[(1, 5), (2, 25), (3, 170)],
    },
];

/// Count all legal move sequences to the given depth.
pub fn perft(board: &mut Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut nodes = 0;
    for mv in board.legal_moves() {
        board.make_move(mv);
        nodes += perft(board, depth - 1);
        board.undo_move();
    }

    nodes
}

/// Perft that also counts captures at the horizon.
pub fn perft_detailed(board: &mut Board, depth: u32) -> PerftResult {
    let start_time = Instant::now();
    let mut result = PerftResult::new();
    perft_detailed_inner(board, depth, &mut result);
    result.time_ms = start_time.elapsed().as_millis();
    result
}

fn perft_detailed_inner(board: &mut Board, depth: u32, result: &mut PerftResult) {
    if depth == 0 {
        result.nodes += 1;
        return;
    }

    for mv in board.legal_moves() {
        if depth == 1 && mv.captured.is_some() {
            result.captures += 1;
        }
        board.make_move(mv);
        perft_detailed_inner(board, depth - 1, result);
        board.undo_move();
    }
}

/// Per-root-move node counts, sorted descending. The tool for chasing a
/// wrong total down to the move that caused it.
pub fn perft_divide(board: &mut Board, depth: u32) -> Vec<(Move, u64)> {
    let mut results = Vec::new();

    for mv in board.legal_moves() {
        board.make_move(mv);
        let nodes = if depth > 1 {
            perft(board, depth - 1)
        } else {
            1
        };
        results.push((mv, nodes));
        board.undo_move();
    }

    results.sort_by(|a, b| b.1.cmp(&a.1));
    results
}

/// Run a single depth against its expected count, printing the outcome.
pub fn run_perft_test(board: &mut Board, depth: u32, expected: u64) -> bool {
    let start_time = Instant::now();
    let nodes = perft(board, depth);
    let elapsed = start_time.elapsed();

    let success = nodes == expected;
    let status = if success { "PASS" } else { "FAIL" };

    println!(
        "{} - depth {}: {} nodes in {:.3}s ({:.0} nodes/sec)",
        status,
        depth,
        nodes,
        elapsed.as_secs_f64(),
        nodes as f64 / elapsed.as_secs_f64().max(f64::EPSILON)
    );

    if !success {
        println!("expected: {}, got: {}", expected, nodes);
    }

    success
}

/// Run every depth of one fixture; on the first failure, print the board
/// and a divide breakdown, then stop.
pub fn run_position_tests(test_case: &PerftTestCase, max_depth: Option<u32>) -> bool {
    println!("\nTesting: {}", test_case.name);
    println!("FEN: {}", test_case.fen);

    let mut board = match Board::from_fen(test_case.fen) {
        Ok(board) => board,
        Err(err) => {
            println!("FAIL - bad fixture FEN: {}", err);
            return false;
        }
    };
    let mut all_passed = true;

    for &(depth, expected) in test_case.expected_results {
        if let Some(max) = max_depth {
            if depth > max {
                break;
            }
        }

        let passed = run_perft_test(&mut board, depth, expected);
        all_passed &= passed;

        if !passed {
            println!("{}", board.ascii());
            println!("divide at depth {}:", depth);
            for (mv, nodes) in perft_divide(&mut board, depth) {
                println!("  {}: {}", mv.notation(), nodes);
            }
            let legal = board.legal_moves();
            println!("legal moves: {}", format_moves(&legal));
            break;
        }
    }

    all_passed
}

/// Run the whole fixture table.
pub fn run_all_tests(max_depth: Option<u32>) {
    let mut passed = 0;
    let mut total = 0;

    for test_case in PERFT_POSITIONS {
        total += 1;
        if run_position_tests(test_case, max_depth) {
            passed += 1;
        }
    }

    println!("\nResults: {}/{} positions passed", passed, total);
}
