//! Walks a synthetic 29.97 fps video stream across the 33-bit PTS wrap and
//! shows how ordering and frame intervals survive the rollover.
//!
//! Run with `cargo run --example stream_ordering`.

use pts_algebra::prelude::*;

const FRAME_TICKS: u64 = 3003;

fn main() {
    // Start five frames before the counter wraps
    let mut current = Pts::new(PTS_MAX - 5 * FRAME_TICKS + 1);
    let mut previous: Option<Pts> = None;

    println!("{:>12}  {:>10}  {:>8}  note", "pts", "interval", "after?");
    for _ in 0..10 {
        match previous {
            Some(prev) => {
                let note = if current.rolled_over(prev) {
                    "wrapped"
                } else {
                    ""
                };
                println!(
                    "{:>12}  {:>10}  {:>8}  {}",
                    current,
                    current.duration_from(prev),
                    current.after(prev),
                    note
                );
            }
            None => println!("{:>12}  {:>10}  {:>8}", current, "-", "-"),
        }

        previous = Some(current);
        current = current.wrapping_add(Pts::new(FRAME_TICKS));
    }

    // A playback window that never ends
    let window_start = PtsBound::from(Pts::new(PTS_MAX - FRAME_TICKS));
    let window_end = PtsBound::PositiveInfinity;
    let sample = PtsBound::from(Pts::new(42));

    println!();
    println!(
        "{} in [{}, {}): {}",
        sample,
        window_start,
        window_end,
        sample.greater_or_equal(window_start) && window_end.after(sample)
    );
}
