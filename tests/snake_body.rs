use snaketerm::games::snake::body::{Snake, START_LENGTH};
use snaketerm::games::snake::collision::{self, BODY_THRESHOLD};
use snaketerm::games::snake::{Bounds, Heading, Position};

fn start() -> Vec<Position> {
    vec![Position::new(0, 0), Position::new(-20, 0), Position::new(-40, 0)]
}

/// A fixed, non-reversing route that loops without hitting itself.
fn route() -> impl Iterator<Item = Heading> {
    [Heading::Up, Heading::Up, Heading::Left, Heading::Left, Heading::Down, Heading::Down, Heading::Right, Heading::Right]
        .into_iter()
        .cycle()
}

#[test]
fn single_advance_matches_the_reference_scenario() {
    let mut snake = Snake::default();
    assert_eq!(snake.segments(), start().as_slice());
    assert_eq!(snake.heading(), Heading::Right);

    snake.advance();
    assert_eq!(
        snake.segments(),
        &[Position::new(20, 0), Position::new(0, 0), Position::new(-20, 0)]
    );
}

#[test]
fn every_body_segment_takes_its_predecessors_old_place() {
    let mut snake = Snake::default();
    for (tick, heading) in route().take(40).enumerate() {
        snake.set_heading(heading);
        if tick % 3 == 0 {
            snake.grow();
        }
        let before = snake.segments().to_vec();
        snake.advance();
        let after = snake.segments();

        assert_eq!(after[0], before[0].moved(snake.heading(), snake.step()));
        for i in 1..after.len() {
            assert_eq!(after[i], before[i - 1], "segment {i} at tick {tick}");
        }
    }
}

#[test]
fn length_never_shrinks_and_only_grow_adds() {
    let mut snake = Snake::default();
    let mut expected = START_LENGTH;
    for (tick, heading) in route().take(60).enumerate() {
        snake.set_heading(heading);
        snake.advance();
        assert_eq!(snake.len(), expected);
        if tick % 4 == 0 {
            snake.grow();
            expected += 1;
            assert_eq!(snake.len(), expected);
        }
    }
}

#[test]
fn grown_segment_follows_on_the_next_tick() {
    let mut snake = Snake::default();
    snake.grow();
    assert_eq!(snake.segments()[3], Position::new(-40, 0));

    let before = snake.segments().to_vec();
    snake.advance();
    assert_eq!(snake.segments()[3], before[2]);
    assert_eq!(snake.len(), 4);
}

#[test]
fn opposite_heading_never_applies() {
    let mut snake = Snake::default();
    for heading in Heading::ALL {
        snake.set_heading(heading);
        let current = snake.heading();
        snake.set_heading(current.opposite());
        assert_eq!(snake.heading(), current);
    }
}

#[test]
fn same_or_perpendicular_heading_always_applies() {
    for current in Heading::ALL {
        for requested in Heading::ALL.into_iter().filter(|h| *h != current.opposite()) {
            let mut snake = Snake::default();
            // Reach `current` through a perpendicular turn when needed.
            if current == Heading::Left {
                snake.set_heading(Heading::Up);
            }
            snake.set_heading(current);
            assert_eq!(snake.heading(), current);

            snake.set_heading(requested);
            assert_eq!(snake.heading(), requested, "{current:?} -> {requested:?}");
        }
    }
}

#[test]
fn reset_returns_to_the_canonical_start_from_any_state() {
    let mut snake = Snake::default();
    for (tick, heading) in route().take(25).enumerate() {
        snake.set_heading(heading);
        snake.advance();
        if tick % 2 == 0 {
            snake.grow();
        }
    }
    assert!(snake.len() > START_LENGTH);

    snake.reset();
    assert_eq!(snake.segments(), start().as_slice());
    assert_eq!(snake.heading(), Heading::Right);
}

#[test]
fn looping_route_stays_clear_of_walls_and_body() {
    let mut snake = Snake::default();
    let bounds = Bounds::default();
    for heading in route().take(64) {
        snake.set_heading(heading);
        snake.advance();
        assert_eq!(collision::check(&snake, &bounds, BODY_THRESHOLD), None);
    }
}
