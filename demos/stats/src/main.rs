//! A headless rendition of a landing page's statistics row.
//!
//! Three meters animate to their targets with a 100 ms stagger once the
//! row "scrolls into view", while a lazily loaded section resolves next to
//! them. Everything runs on the deterministic scheduler, so the output is
//! the same on every run.

use std::rc::Rc;
use std::time::Duration;

use futures::executor::LocalPool;
use futures::task::LocalSpawnExt;
use swell::prelude::*;

const STATS: [(&str, f64, u64); 3] = [
    ("+ projects delivered", 50.0, 2000),
    ("% client satisfaction", 98.0, 2500),
    ("/7 support hours", 24.0, 1500),
];

fn main() -> Result<(), ConfigError> {
    let scheduler = Rc::new(ManualScheduler::new());
    let reveal = Reveal::with_stagger(Duration::from_millis(100));

    let meters = STATS
        .iter()
        .map(|&(_, end, millis)| {
            meter(0.0, end)
                .duration(Duration::from_millis(millis))
                .build(scheduler.clone())
        })
        .collect::<Result<Vec<_>, _>>()?;
    for stat_meter in &meters {
        reveal.attach(stat_meter);
    }

    let mut pool = LocalPool::new();
    let spawner = pool.spawner();
    let section = LazySection::with_spawner(
        "[skeleton]".to_string(),
        || async { Ok("Numbers that matter".to_string()) },
        Rc::new(move |future| {
            spawner.spawn_local(future).expect("spawn on local pool");
        }),
    );

    println!("heading: {}", section.render_or_placeholder());
    pool.run_until_stalled();
    println!("heading: {}", section.render_or_placeholder());

    reveal.enter();
    let mut elapsed = Duration::ZERO;
    while meters.iter().any(Meter::is_running) {
        scheduler.advance(Duration::from_millis(125));
        elapsed += Duration::from_millis(125);
        let row = meters
            .iter()
            .map(|m| format!("{:>3}", m.current()))
            .collect::<Vec<_>>()
            .join("  ");
        println!("t={:>4}ms  {row}", elapsed.as_millis());
    }

    for (&(label, ..), stat_meter) in STATS.iter().zip(&meters) {
        println!("{}{label}", stat_meter.current());
    }
    Ok(())
}
