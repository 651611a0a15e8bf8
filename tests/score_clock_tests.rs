//! Score clock tests

use fallblock::core::ScoreClock;

#[test]
fn test_fresh_clock() {
    let clock = ScoreClock::new();
    assert_eq!(clock.score(), 0);
    assert_eq!(clock.elapsed_seconds(), 0);
    assert_eq!(clock.elapsed_minutes(), 0);
    assert_eq!(clock.line_base_points(), 10);
    assert_eq!(clock.time_increment(), 1);
}

#[test]
fn test_sixty_ticks_ratchet_once() {
    let mut clock = ScoreClock::new();
    let rollovers = (0..60).filter(|_| clock.tick()).count();

    assert_eq!(rollovers, 1);
    assert_eq!(clock.elapsed_seconds(), 60);
    assert_eq!(clock.elapsed_minutes(), 1);
    assert_eq!(clock.line_base_points(), 20);
    assert_eq!(clock.time_increment(), 2);
    assert_eq!(clock.score(), 60);
}

#[test]
fn test_second_minute_scores_double() {
    let mut clock = ScoreClock::new();
    for _ in 0..120 {
        clock.tick();
    }

    assert_eq!(clock.elapsed_minutes(), 2);
    assert_eq!(clock.line_base_points(), 40);
    assert_eq!(clock.time_increment(), 3);
    // 60 * 1 + 60 * 2
    assert_eq!(clock.score(), 180);
}

#[test]
fn test_line_points_use_the_current_base() {
    let mut clock = ScoreClock::new();
    for _ in 0..60 {
        clock.tick();
    }
    assert_eq!(clock.award_lines(2), 40);
    assert_eq!(clock.score(), 100);
}

#[test]
fn test_update_mirrors_counters() {
    let mut clock = ScoreClock::new();
    for _ in 0..61 {
        clock.tick();
    }
    let update = clock.update();
    assert_eq!(update.elapsed_seconds, 61);
    assert_eq!(update.elapsed_minutes, 1);
    assert_eq!(update.score, 62);
}
