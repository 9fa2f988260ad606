//! Primary-event data mutated by the generator adapter.

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, HplError};

/// One primary particle attached to a vertex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimaryParticle {
    /// PDG Monte Carlo numbering code.
    pub pdg: i64,
    /// Momentum vector (px, py, pz) in MeV/c.
    pub momentum: [f64; 3],
}

impl PrimaryParticle {
    /// Creates a primary after validating that the momentum is finite.
    pub fn new(pdg: i64, momentum: [f64; 3]) -> Result<Self, HplError> {
        if !momentum.iter().all(|c| c.is_finite()) {
            return Err(HplError::Generator(
                ErrorInfo::new("primary-momentum", "momentum components must be finite")
                    .with_context("pdg", pdg.to_string()),
            ));
        }
        Ok(Self { pdg, momentum })
    }
}

/// One primary vertex: a position, a time, and the particles emitted there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimaryVertex {
    /// Vertex position (x, y, z) in mm.
    pub position: [f64; 3],
    /// Vertex time in ns.
    pub time: f64,
    /// Particles attached to this vertex.
    pub particles: Vec<PrimaryParticle>,
}

impl PrimaryVertex {
    /// Creates an empty vertex.
    pub fn new(position: [f64; 3], time: f64) -> Self {
        Self {
            position,
            time,
            particles: Vec::new(),
        }
    }

    /// Attaches a primary particle to the vertex.
    pub fn add_particle(&mut self, particle: PrimaryParticle) {
        self.particles.push(particle);
    }
}

/// A simulated event under construction.
///
/// The generator adapter's only side effect is appending primary vertices
/// here; everything downstream belongs to the host toolkit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Sequential event identifier within the run.
    pub id: u64,
    primaries: Vec<PrimaryVertex>,
}

impl Event {
    /// Creates an empty event.
    pub fn new(id: u64) -> Self {
        Self {
            id,
            primaries: Vec::new(),
        }
    }

    /// Appends a primary vertex.
    pub fn add_primary_vertex(&mut self, vertex: PrimaryVertex) {
        self.primaries.push(vertex);
    }

    /// Primary vertices in insertion order.
    pub fn primary_vertices(&self) -> &[PrimaryVertex] {
        &self.primaries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_finite_momentum_is_rejected() {
        assert!(PrimaryParticle::new(2212, [0.0, f64::NAN, 1.0]).is_err());
        assert!(PrimaryParticle::new(2212, [0.0, 0.0, 1.0e3]).is_ok());
    }

    #[test]
    fn vertices_accumulate_in_order() {
        let mut event = Event::new(7);
        event.add_primary_vertex(PrimaryVertex::new([0.0; 3], 0.0));
        event.add_primary_vertex(PrimaryVertex::new([1.0, 0.0, 0.0], 2.5));
        assert_eq!(event.primary_vertices().len(), 2);
        assert_eq!(event.primary_vertices()[1].time, 2.5);
    }
}
