//! Unit tests for dtn-core primitives.

#[cfg(test)]
mod ids {
    use crate::HostId;

    #[test]
    fn index_roundtrip() {
        let id = HostId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(HostId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(HostId(0) < HostId(1));
        assert!(HostId(100) > HostId(99));
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(HostId::INVALID.0, u32::MAX);
        assert_eq!(HostId::default(), HostId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(HostId(7).to_string(), "HostId(7)");
    }
}

#[cfg(test)]
mod pos {
    use crate::{HostId, HostRng, Position, Rect};

    #[test]
    fn distance_three_four_five() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-12);
        assert_eq!(a.distance(a), 0.0);
    }

    #[test]
    fn rect_containment() {
        let r = Rect::new(10.0, 20.0, 10.0, 20.0);
        assert!(r.contains(Position::new(10.0, 15.0))); // edge is inside
        assert!(r.contains(Position::new(15.0, 15.0)));
        assert!(!r.contains(Position::new(9.99, 15.0)));

        // Strict interior excludes the edges.
        assert!(!r.interior_contains(Position::new(10.0, 15.0)));
        assert!(r.interior_contains(Position::new(15.0, 15.0)));
    }

    #[test]
    fn rect_centered() {
        let r = Rect::centered(Position::new(50.0, 50.0), 20.0);
        assert_eq!(r, Rect::new(40.0, 60.0, 40.0, 60.0));
        assert_eq!(r.width(), 20.0);
        assert_eq!(r.height(), 20.0);
    }

    #[test]
    fn rect_sample_stays_inside() {
        let r = Rect::new(5.0, 6.0, -2.0, 3.0);
        let mut rng = HostRng::new(7, HostId(0));
        for _ in 0..1000 {
            assert!(r.contains(r.sample(&mut rng)));
        }
    }
}

#[cfg(test)]
mod path {
    use crate::{Path, Position};

    #[test]
    fn build_and_inspect() {
        let mut p = Path::new(1.5);
        assert!(p.last_waypoint().is_none());

        p.add_waypoint(Position::new(0.0, 0.0));
        p.add_waypoint(Position::new(3.0, 4.0));
        p.add_waypoint(Position::new(3.0, 8.0));

        assert_eq!(p.speed, 1.5);
        assert_eq!(p.waypoints.len(), 3);
        assert_eq!(p.last_waypoint(), Some(Position::new(3.0, 8.0)));
        assert!((p.length() - 9.0).abs() < 1e-12);
    }

    #[test]
    fn waypoints_are_copies() {
        let pos = Position::new(1.0, 2.0);
        let mut p = Path::new(1.0);
        p.add_waypoint(pos);
        p.waypoints[0].x = 99.0;
        // The original is untouched.
        assert_eq!(pos.x, 1.0);
    }
}

#[cfg(test)]
mod rng {
    use crate::{HostId, HostRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = HostRng::new(12345, HostId(0));
        let mut r2 = HostRng::new(12345, HostId(0));
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_hosts_differ() {
        let mut r0 = HostRng::new(1, HostId(0));
        let mut r1 = HostRng::new(1, HostId(1));
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b, "seeds for adjacent hosts should diverge");
    }

    #[test]
    fn fork_is_independent() {
        let mut parent = HostRng::new(9, HostId(3));
        let mut child = parent.fork();

        let c: u64 = child.random();
        let p: u64 = parent.random();
        assert_ne!(c, p, "forked stream should not track its parent");

        // Forking twice yields distinct children.
        let mut parent2 = HostRng::new(9, HostId(3));
        let mut a = parent2.fork();
        let mut b = parent2.fork();
        let av: u64 = a.random();
        let bv: u64 = b.random();
        assert_ne!(av, bv);
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = HostRng::new(0, HostId(0));
        for _ in 0..1000 {
            let v = rng.gen_range(0.0f64..1.0);
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = HostRng::new(0, HostId(0));
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }
}
