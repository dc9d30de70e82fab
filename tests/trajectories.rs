use approx::assert_relative_eq;
use itertools::{EitherOrBoth, Itertools};
use nalgebra::Vector2;
use planetary_motion::astro::{CartesianState, NEWTON_G};
use planetary_motion::file::read_file;
use planetary_motion::integrator::{step_count, CancelToken, Rk4, DEFAULT_STEP};
use planetary_motion::orrery::Orrery;
use planetary_motion::simulation::{simulate, SimulationConfig};
use planetary_motion::Error;

const SUN_RADIUS: f64 = 695_700_000.0;

fn solar_system() -> Orrery {
    read_file("solar-system.txt").unwrap()
}

#[test]
fn test_catalog_contents() {
    let orrery = solar_system();
    assert_eq!(orrery.star().name(), "Sun");

    let planets: Vec<_> = orrery
        .planets()
        .map(|body| (body.name(), body.info.period_steps))
        .collect();
    assert_eq!(
        planets,
        vec![
            ("Mercury", 88),
            ("Venus", 225),
            ("Earth", 365),
            ("Mars", 687),
            ("Jupiter", 4332),
            ("Saturn", 10760),
            ("Uranus", 30700),
            ("Neptune", 60200),
        ]
    );
}

/// One year of Earth, one day at a time.
#[test]
fn test_earth_year() {
    let orrery = solar_system();
    let earth = orrery.find("earth").unwrap();
    let initial = earth.state().unwrap();
    assert_eq!(initial.position(), Vector2::new(-147095000000.0, 0.0));
    assert_eq!(initial.velocity(), Vector2::new(0.0, -30300.0));

    let rk4 = Rk4::new(orrery.gravity(NEWTON_G).unwrap(), DEFAULT_STEP).unwrap();
    let trajectory = rk4.trajectory(initial, 365).unwrap();
    assert_eq!(trajectory.len(), 365);

    // Closed ellipse: we end up about as far out as we started
    let first = trajectory.states()[0].radius();
    let last = trajectory.final_state().unwrap().radius();
    assert!((first - last).abs() < 0.03 * first);
    assert!(trajectory.min_radius().unwrap() > SUN_RADIUS);

    // Nearly circular, so no point strays far from the starting distance
    assert_relative_eq!(
        trajectory.max_radius().unwrap(),
        initial.radius(),
        max_relative = 0.05
    );

    // Consecutive days are about 30 km/s * 1 day apart, never more
    for (a, b) in trajectory.positions().tuple_windows() {
        let hop = (b - a).norm();
        assert!(hop < 31_000.0 * DEFAULT_STEP, "jumped {} m in a day", hop);
    }
}

#[test]
fn test_every_planet_closes() {
    let orrery = solar_system();
    let ids: Vec<_> = orrery.planets().map(|body| body.id).collect();
    let results = simulate(
        &orrery,
        &ids,
        &SimulationConfig::default(),
        &CancelToken::new(),
    )
    .unwrap();
    let gravity = orrery.gravity(NEWTON_G).unwrap();

    for (id, trajectory) in &results {
        let body = orrery.get_body(*id).unwrap();
        let initial = body.state().unwrap();
        assert_eq!(trajectory.len(), body.info.period_steps);

        // Each body starts at an apsis, so after one period the distance
        // from the star should be back where it began.
        let last = trajectory.final_state().unwrap().radius();
        assert!(
            (last - initial.radius()).abs() < 0.01 * initial.radius(),
            "{} ended at {} m, started at {} m",
            body.name(),
            last,
            initial.radius()
        );

        let drift = trajectory.max_energy_drift(initial, &gravity).unwrap();
        assert!(drift < 1e-3, "{} energy drifted by {:e}", body.name(), drift);
    }
}

#[test]
fn test_retrograde_mars() {
    let orrery = solar_system();
    let mars = orrery.find("Mars").unwrap().state().unwrap();
    let gravity = orrery.gravity(NEWTON_G).unwrap();

    let forward = Rk4::new(gravity, DEFAULT_STEP).unwrap();
    let backward = Rk4::new(gravity, -DEFAULT_STEP).unwrap();
    let retrograde = forward.trajectory(&mars.retrograde(), 687).unwrap();
    let reversed = backward.trajectory(mars, 687).unwrap();

    for pair in retrograde.positions().zip_longest(reversed.positions()) {
        match pair {
            EitherOrBoth::Both(a, b) => assert_relative_eq!(a, b, max_relative = 1e-12),
            other => panic!("trajectories differ in length: {:?}", other),
        }
    }
}

#[test]
fn test_bad_inputs() {
    assert!(matches!(step_count(-365), Err(Error::InvalidArgument(_))));

    let orrery = solar_system();
    let rk4 = Rk4::new(orrery.gravity(NEWTON_G).unwrap(), DEFAULT_STEP).unwrap();
    let at_sun = CartesianState::new(Vector2::zeros(), Vector2::new(0.0, -30300.0));
    assert!(matches!(
        rk4.trajectory(&at_sun, 1),
        Err(Error::Domain { .. })
    ));

    // Nothing happens when there's nothing to do, even from the origin
    assert!(rk4.trajectory(&at_sun, 0).unwrap().is_empty());
}

#[test]
fn test_missing_catalog() {
    assert!(matches!(
        read_file("no-such-catalog.txt"),
        Err(Error::Io(_))
    ));
}
