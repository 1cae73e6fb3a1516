//! Singleton, passed explicitly
//!
//! Instead of a global instance reached through a hidden accessor, the one
//! `DragonBalls` collection is created in `main` and lent to everyone who
//! needs it. There is still only one instance; it is just visible in the
//! function signatures.
//!
//! Run with: cargo run --bin creational_06_singleton

use design_patterns::colors::{paint, Palette};

const TOTAL_BALLS: u8 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Collect {
    Collected(u8),
    AlreadyComplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Summon {
    Granted,
    Missing(u8),
}

#[derive(Debug, Default)]
struct DragonBalls {
    balls_collected: u8,
}

impl DragonBalls {
    fn new() -> Self {
        Self::default()
    }

    fn collect_ball(&mut self) -> Collect {
        if self.balls_collected < TOTAL_BALLS {
            self.balls_collected += 1;
            Collect::Collected(self.balls_collected)
        } else {
            Collect::AlreadyComplete
        }
    }

    fn summon_shenlong(&mut self) -> Summon {
        if self.balls_collected == TOTAL_BALLS {
            self.balls_collected = 0;
            Summon::Granted
        } else {
            Summon::Missing(TOTAL_BALLS - self.balls_collected)
        }
    }
}

fn report_collect(outcome: Collect) {
    match outcome {
        Collect::Collected(total) => println!("Collected ball. Total: {total}"),
        Collect::AlreadyComplete => println!(
            "{}",
            paint("The 7 dragon balls have already been collected", Palette::Yellow)
        ),
    }
}

fn report_summon(outcome: Summon) {
    match outcome {
        Summon::Granted => println!(
            "{}",
            paint("Shenlong has been summoned, make your wish", Palette::Green)
        ),
        Summon::Missing(missing) => println!("Still missing {missing} to summon Shenlong"),
    }
}

fn goku_hunts(balls: &mut DragonBalls) {
    println!("{}", paint("Goku:", Palette::Orange));
    for _ in 0..3 {
        report_collect(balls.collect_ball());
    }
    report_summon(balls.summon_shenlong());
}

fn vegeta_hunts(balls: &mut DragonBalls) {
    println!("{}", paint("Vegeta:", Palette::Blue));
    for _ in 0..4 {
        report_collect(balls.collect_ball());
    }
}

fn main() {
    let mut dragon_balls = DragonBalls::new();

    goku_hunts(&mut dragon_balls);
    vegeta_hunts(&mut dragon_balls);

    println!();
    report_summon(dragon_balls.summon_shenlong());
    report_summon(dragon_balls.summon_shenlong());
}
