use engine::perft::run_all_tests;

fn main() {
    run_all_tests(None);
}
