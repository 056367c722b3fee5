#[cfg(test)]
#[path = "../../../tests/unit/wrapper/pso/swarm_test.rs"]
mod swarm_test;

use super::*;
use crate::models::FeatureSubset;
use crate::utils::{Random, compare_floats};
use crate::wrapper::{Elite, SearchStrategy, SubsetScore};
use rand::seq::SliceRandom;

/// A swarm of particles searching for feature subsets.
pub struct ParticleSwarm {
    config: SwarmConfig,
    dimension: usize,
    particles: Vec<Particle>,
}

impl ParticleSwarm {
    /// Creates a new instance of `ParticleSwarm` for given amount of original features.
    pub fn new(config: SwarmConfig, dimension: usize) -> GenericResult<Self> {
        config.validate()?;

        if dimension == 0 {
            return Err("dimension should be positive".into());
        }

        Ok(Self { config, dimension, particles: vec![] })
    }

    /// Returns particles.
    pub fn particles(&self) -> &[Particle] {
        self.particles.as_slice()
    }

    /// Returns swarm configuration.
    pub fn config(&self) -> &SwarmConfig {
        &self.config
    }

    /// Generates a shuffled position with exactly `num_selected` coordinates above theta.
    fn generate_position(&self, num_selected: usize, random: &(dyn Random + Send + Sync)) -> Vec<Float> {
        let SwarmConfig { start_interval, end_interval, theta, .. } = self.config;

        let mut position = (0..self.dimension)
            .map(|idx| {
                if idx < num_selected {
                    random.uniform_real(theta + SELECTED_MARGIN, end_interval)
                } else {
                    random.uniform_real(start_interval, theta)
                }
            })
            .collect::<Vec<_>>();

        position.shuffle(&mut random.get_rng());

        position
    }

    fn generate_velocity(&self, random: &(dyn Random + Send + Sync)) -> Vec<Float> {
        (0..self.dimension).map(|_| random.uniform_real(self.config.min_velocity, self.config.max_velocity)).collect()
    }
}

impl SearchStrategy for ParticleSwarm {
    type Representation = Vec<Float>;

    fn name(&self) -> &str {
        "pso"
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn size(&self) -> usize {
        self.config.population_size
    }

    /// Most particles (two thirds) start with small subsets of a tenth of all features, the others
    /// start with large subsets of a random size in `[dimension / 2, dimension]`.
    fn initialize(&mut self, random: &(dyn Random + Send + Sync)) {
        let population_size = self.config.population_size;
        let num_small = (2 * population_size) / 3;
        let small_size = (0.1 * self.dimension as Float) as usize;

        self.particles = (0..population_size)
            .map(|idx| {
                let num_selected = if idx < num_small {
                    small_size
                } else {
                    random.uniform_int((self.dimension / 2) as i32, self.dimension as i32) as usize
                };

                Particle::new(self.generate_position(num_selected, random), self.generate_velocity(random))
            })
            .collect();
    }

    fn decode(&self) -> Vec<FeatureSubset> {
        let theta = self.config.theta;

        self.particles.iter().map(|particle| Particle::decode(particle.position.as_slice(), theta)).collect()
    }

    fn assign_fitness(&mut self, fitness: &[Float]) {
        assert_eq!(fitness.len(), self.particles.len());

        self.particles.iter_mut().zip(fitness.iter()).for_each(|(particle, &fitness)| particle.fitness = fitness);
    }

    fn update_personal_best(&mut self) {
        let theta = self.config.theta;

        // the current position competes with the personal best by their own subset sizes
        self.particles
            .iter_mut()
            .filter(|particle| particle.score(theta).dominates(&particle.personal_best_score(theta)))
            .for_each(|particle| {
                particle.personal_best.clone_from(&particle.position);
                particle.personal_best_fitness = particle.fitness;
            });
    }

    fn best_candidate(&self) -> Option<Elite<Self::Representation>> {
        let theta = self.config.theta;

        SubsetScore::find_dominant(self.particles.iter().map(|particle| particle.personal_best_score(theta)))
            .map(|idx| &self.particles[idx])
            .map(|particle| Elite {
                representation: particle.personal_best.clone(),
                subset: Particle::decode(particle.personal_best.as_slice(), theta),
                score: particle.personal_best_score(theta),
            })
    }

    /// Moves particles: velocity is attracted to personal and global bests and clamped, then
    /// position is shifted by velocity and clamped.
    fn advance(&mut self, global_best: &Elite<Self::Representation>, random: &(dyn Random + Send + Sync)) {
        let SwarmConfig {
            inertia_weight, c1, c2, min_velocity, max_velocity, start_interval, end_interval, ..
        } = self.config;
        let dimension = self.dimension;

        self.particles.iter_mut().for_each(|particle| {
            (0..dimension).for_each(|dim| {
                let position = particle.position[dim];
                let cognitive = c1 * random.uniform_real(0., 1.) * (particle.personal_best[dim] - position);
                let social = c2 * random.uniform_real(0., 1.) * (global_best.representation[dim] - position);

                let velocity = inertia_weight * particle.velocity[dim] + cognitive + social;
                particle.velocity[dim] = velocity.clamp(min_velocity, max_velocity);
            });

            particle.position.iter_mut().zip(particle.velocity.iter()).for_each(|(position, velocity)| {
                let moved = *position + velocity;
                *position = moved.clamp(start_interval, end_interval);
            });
        });
    }

    /// Ranks features by global best coordinate, ties are resolved by lower index. Features selected by
    /// the global best always come first as their coordinates are above theta.
    fn rank_features(&self, best: &Elite<Self::Representation>) -> Vec<usize> {
        let position = best.representation.as_slice();
        let mut features = (0..position.len()).collect::<Vec<_>>();

        features.sort_by(|&a, &b| compare_floats(position[b], position[a]).then(a.cmp(&b)));

        features
    }
}
