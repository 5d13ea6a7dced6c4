//! Snapshot atomicity under a concurrent writer.
//!
//! The writer encodes its tick into the scene: at tick `k` the sensor sits
//! inside a circle of radius `10 + k` with orientation `k * 1e-3`. A reader
//! that sees sequence `s` must therefore see every distance equal to
//! `10 + s` and every angle offset by `s * 1e-3`; any mix of two ticks
//! shows up as a mismatch.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use drishti::core::Point2D;
use drishti::sensor::{CircleObstacle, RangeSensor, RangeSensorConfig};

const TICKS: u64 = 400;
const READERS: usize = 4;

fn orientation(tick: u64) -> f64 {
    tick as f64 * 1e-3
}

#[test]
fn readers_never_see_torn_scans() {
    let config = RangeSensorConfig::default().noiseless();
    let sensor = Arc::new(RangeSensor::<f64>::new(config.clone()));
    let done = AtomicBool::new(false);

    thread::scope(|s| {
        s.spawn(|| {
            for k in 1..=TICKS {
                let circle = CircleObstacle::new(Point2D::zero(), 10.0 + k as f64);
                sensor.update(Point2D::zero(), orientation(k), &[circle]);
            }
            done.store(true, Ordering::Release);
        });

        for _ in 0..READERS {
            let sensor = Arc::clone(&sensor);
            let config = &config;
            let done = &done;
            s.spawn(move || {
                let mut last_sequence = 0;
                loop {
                    let finished = done.load(Ordering::Acquire);
                    let snapshot = sensor.read_snapshot();

                    assert!(snapshot.sequence >= last_sequence);
                    last_sequence = snapshot.sequence;

                    if snapshot.sequence > 0 {
                        assert_eq!(snapshot.len(), config.beam_count);
                        let expected = 10.0 + snapshot.sequence as f64;
                        for (i, (&d, &theta)) in
                            snapshot.distances.iter().zip(&snapshot.angles).enumerate()
                        {
                            assert_eq!(d, expected, "beam {i} at sequence {}", snapshot.sequence);
                            assert_eq!(
                                theta,
                                config.nominal_angle(i) + orientation(snapshot.sequence),
                                "beam {i} at sequence {}",
                                snapshot.sequence
                            );
                        }
                    }

                    if finished {
                        break;
                    }
                }
                assert_eq!(last_sequence, TICKS);
            });
        }
    });

    assert_eq!(sensor.read_snapshot().sequence, TICKS);
}

#[test]
fn read_before_first_update_is_empty() {
    let sensor = RangeSensor::<f64>::new(RangeSensorConfig::default());
    let snapshot = sensor.read_snapshot();
    assert_eq!(snapshot.sequence, 0);
    assert_eq!(snapshot.valid_count(), 0);
}
