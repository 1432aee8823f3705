//! Print chord counts for a few random one-forms on the default viewport.
//!
//! Usage:
//!   cargo run -p covector --example random_grids -- [count]

use covector::api::{
    draw_one_form, level_range, FormCfg, GridEnumerator, Region, ReplayToken, DEFAULT_MAX,
    DEFAULT_MIN,
};

fn main() {
    let count: u64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(5);
    let region = Region::new(DEFAULT_MIN, DEFAULT_MAX).unwrap();
    let grid = GridEnumerator::new(&region);
    let mut tok = ReplayToken {
        seed: 2025,
        index: 0,
    };
    for i in 0..count {
        let f = draw_one_form(FormCfg::default(), tok).unwrap();
        let lines = grid.lines(&f);
        let range = level_range(&lines);
        println!(
            "form {i}: ({:.3}, {:.3}) chords={} levels={}..={}",
            f.x(),
            f.y(),
            lines.len(),
            range.start(),
            range.end()
        );
        tok = tok.next_index();
    }
}
