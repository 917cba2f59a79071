use approx::assert_relative_eq;
use ballsim::config::SimConfig;
use ballsim::core::{Material, Particle, Simulation};
use ballsim::error::Result;

/// A resting ball with room around it never moves or reflects.
#[test]
fn stationary_ball_stays_put() -> Result<()> {
    let p = Particle::new(0, [50.0, 40.0], [0.0, 0.0], 10.0, Material::Diamond)?;
    let mut sim = Simulation::from_particles(vec![p], 200.0, 100.0)?;
    for _ in 0..100 {
        sim.tick();
    }
    assert_eq!(sim.positions(), vec![[50.0, 40.0]]);
    assert_eq!(sim.velocities(), vec![[0.0, 0.0]]);
    Ok(())
}

#[test]
fn empty_simulation_ticks() -> Result<()> {
    let mut sim = Simulation::from_particles(Vec::new(), 100.0, 100.0)?;
    sim.tick();
    assert_eq!(sim.ticks(), 1);
    assert_eq!(sim.num_particles(), 0);
    assert_eq!(sim.kinetic_energy(), 0.0);
    Ok(())
}

/// A lone ball bouncing between walls never strays more than one tick past them.
#[test]
fn lone_ball_stays_near_container() -> Result<()> {
    let p = Particle::new(0, [50.0, 20.0], [3.0, 2.0], 5.0, Material::Glass)?;
    let mut sim = Simulation::from_particles(vec![p], 100.0, 60.0)?;
    for _ in 0..1000 {
        sim.tick();
        let [x, y] = sim.particles[0].r;
        assert!((5.0 - 3.0..=95.0 + 3.0).contains(&x), "x = {x}");
        assert!((5.0 - 2.0..=55.0 + 2.0).contains(&y), "y = {y}");
    }
    let [vx, vy] = sim.particles[0].v;
    assert_eq!((vx.abs(), vy.abs()), (3.0, 2.0));
    Ok(())
}

/// Equal balls meeting head-on swap x-velocities on the tick they first overlap.
#[test]
fn head_on_equal_balls_swap() -> Result<()> {
    let a = Particle::new(0, [40.0, 50.0], [2.0, 0.0], 5.0, Material::Granite)?;
    let b = Particle::new(1, [60.0, 50.0], [-2.0, 0.0], 5.0, Material::Granite)?;
    let mut sim = Simulation::from_particles(vec![a, b], 100.0, 100.0)?;
    let e0 = sim.kinetic_energy();

    sim.tick();
    sim.tick();
    assert_eq!(sim.velocities(), vec![[2.0, 0.0], [-2.0, 0.0]]);

    // centers 8 apart, radii sum 10
    sim.tick();
    assert_eq!(sim.velocities(), vec![[-2.0, 0.0], [2.0, 0.0]]);
    assert_relative_eq!(sim.kinetic_energy(), e0, max_relative = 1e-12);

    sim.tick();
    assert_eq!(sim.positions(), vec![[44.0, 50.0], [56.0, 50.0]]);
    Ok(())
}

/// Seeded default run: population, radii and materials are fixed; velocities stay integral.
#[test]
fn seeded_run_keeps_invariants() -> Result<()> {
    let cfg = SimConfig {
        seed: Some(2024),
        ..SimConfig::default()
    };
    let mut sim = Simulation::new(&cfg)?;
    let radii = sim.radii();
    let materials: Vec<Material> = sim.particles.iter().map(|p| p.material()).collect();

    for _ in 0..2000 {
        sim.tick();
    }

    assert_eq!(sim.num_particles(), 15);
    assert_eq!(sim.radii(), radii);
    let after: Vec<Material> = sim.particles.iter().map(|p| p.material()).collect();
    assert_eq!(after, materials);
    for p in &sim.particles {
        assert!(p.r.iter().all(|x| x.is_finite()));
        assert!(p.v.iter().all(|v| v.is_finite() && v.fract() == 0.0));
    }
    Ok(())
}

#[test]
fn same_seed_same_trajectory() -> Result<()> {
    let cfg = SimConfig {
        seed: Some(99),
        ball_count: 25,
        ..SimConfig::default()
    };
    let mut a = Simulation::new(&cfg)?;
    let mut b = Simulation::new(&cfg)?;
    for _ in 0..500 {
        a.tick();
        b.tick();
    }
    assert_eq!(a.positions(), b.positions());
    assert_eq!(a.velocities(), b.velocities());
    Ok(())
}

#[test]
fn config_file_drives_simulation() -> Result<()> {
    let path = std::env::temp_dir().join(format!("ballsim-config-{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"{"ball_count": 6, "width": 400, "height": 300, "seed": 5, "materials": ["plastic"]}"#,
    )?;
    let cfg = SimConfig::load(&path)?;
    std::fs::remove_file(&path)?;

    let sim = Simulation::new(&cfg)?;
    assert_eq!(sim.num_particles(), 6);
    assert_eq!(sim.bounds(), [400.0, 300.0]);
    assert!(sim.particles.iter().all(|p| p.density() == 1.175));
    Ok(())
}
